// Copyright (C) 2025 the gl_bounce authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Building blocks for small OpenGL animation demos: a shader program
//! build pipeline, a bouncing particle simulator and a static mesh
//! wrapper for indexed draw submission.
//!
//! Everything touching the GL API assumes a current context on the
//! calling thread; the demo binaries own that context for the whole run.

pub mod mesh;
pub mod shader;
pub mod sim;
