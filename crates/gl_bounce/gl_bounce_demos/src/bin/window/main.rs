// Copyright (C) 2025 the gl_bounce authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! The smallest demo: a window cleared to a solid color every frame.

use std::process::ExitCode;

use gl_bounce_demos::SetupError;

/// Convert an 8-bit color channel to the float range GL expects.
fn channel(value: u8) -> f32 {
	f32::from(value) / 255.0
}

fn main() -> ExitCode {
	match run() {
		Ok(()) => ExitCode::SUCCESS,
		Err(error) => {
			eprintln!("{error}");
			ExitCode::FAILURE
		},
	}
}

fn run() -> Result<(), SetupError> {
	gl_bounce_demos::view_window("OpenGL Window", true, || {
		let (r, g, b) = (channel(255), channel(165), channel(0));

		Ok(move || unsafe {
			gl::ClearColor(r, g, b, 1.0);
			gl::Clear(gl::COLOR_BUFFER_BIT);
		})
	})
}
