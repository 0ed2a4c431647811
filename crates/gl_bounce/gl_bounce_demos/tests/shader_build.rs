// Copyright (C) 2025 the gl_bounce authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Shader build pipeline checks that need a live GL context.
//!
//! These are ignored by default because they need a display; run them
//! one at a time with
//! `cargo test -- --ignored --test-threads=1`
//! on a machine with working GL 3.3 drivers. The context is created
//! against a hidden window.

use gl_bounce::shader::{ShaderError, ShaderProgram, ShaderStage};
use glfw::{Context, OpenGlProfileHint, WindowHint};

const VALID_VERTEX: &str = "#version 330 core
layout (location = 0) in vec2 position;
void main() {
	gl_Position = vec4(position, 0.0, 1.0);
}
";

const VALID_FRAGMENT: &str = "#version 330 core
uniform vec3 color;
out vec4 frag_color;
void main() {
	frag_color = vec4(color, 1.0);
}
";

fn with_gl_context<T>(check: impl FnOnce() -> T) -> T {
	let mut glfw = glfw::init(glfw::FAIL_ON_ERRORS).unwrap();
	glfw.window_hint(WindowHint::ContextVersion(3, 3));
	glfw.window_hint(WindowHint::OpenGlProfile(OpenGlProfileHint::Core));
	glfw.window_hint(WindowHint::Visible(false));

	let (mut window, _events) = glfw
		.create_window(64, 64, "shader_build", glfw::WindowMode::Windowed)
		.unwrap();
	window.make_current();
	gl::load_with(|symbol| window.get_proc_address(symbol));

	check()
}

#[test]
#[ignore = "needs a display and an OpenGL 3.3 context"]
fn invalid_vertex_source_reports_compile_failure() {
	with_gl_context(|| {
		match ShaderProgram::build("definitely not glsl", VALID_FRAGMENT) {
			Err(ShaderError::CompileFailed { stage, log }) => {
				assert_eq!(stage, ShaderStage::Vertex);
				assert!(!log.is_empty());
			},
			Err(other) => panic!("expected vertex CompileFailed, got {other:?}"),
			Ok(_) => panic!("expected vertex CompileFailed, got a linked program"),
		}
	});
}

#[test]
#[ignore = "needs a display and an OpenGL 3.3 context"]
fn invalid_fragment_source_reports_compile_failure() {
	with_gl_context(|| {
		match ShaderProgram::build(VALID_VERTEX, "void broken(") {
			Err(ShaderError::CompileFailed { stage, .. }) => {
				assert_eq!(stage, ShaderStage::Fragment);
			},
			Err(other) => panic!("expected fragment CompileFailed, got {other:?}"),
			Ok(_) => panic!("expected fragment CompileFailed, got a linked program"),
		}
	});
}

#[test]
#[ignore = "needs a display and an OpenGL 3.3 context"]
fn valid_pair_links_and_resolves_uniforms() {
	with_gl_context(|| {
		let program = ShaderProgram::build(VALID_VERTEX, VALID_FRAGMENT).unwrap();

		assert!(program.uniform("color").is_present());
		assert!(!program.uniform("not_a_uniform").is_present());

		// writing through an absent location must be a quiet no-op
		program.bind();
		program.uniform("not_a_uniform").set_vec3([1.0, 0.0, 0.0]);
	});
}
