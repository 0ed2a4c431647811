// Copyright (C) 2025 the gl_bounce authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Shared window bootstrap and per-run state for the demo binaries.

use std::{
	ffi::{c_char, c_void, CStr},
	path::Path,
	time::{Duration, Instant},
};

use gl::types::{GLenum, GLsizei, GLuint};
use glfw::{Action, Context, Key, OpenGlProfileHint, WindowHint};
use thiserror::Error;

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;

/// Startup failures. Everything here is fatal before the frame loop
/// starts; nothing inside the loop can fail.
#[derive(Debug, Error)]
pub enum SetupError {
	#[error("could not initialize glfw: {0}")]
	Glfw(#[from] glfw::InitError),
	#[error("could not create a window")]
	WindowCreation,
	#[error("could not read shader source {path}: {source}")]
	ShaderSource {
		path: String,
		source: std::io::Error,
	},
	#[error(transparent)]
	Shader(#[from] gl_bounce::shader::ShaderError),
}

/// Load a GLSL source file shipped with the demo crate.
pub fn load_shader_source(relative: &str) -> Result<String, SetupError> {
	let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(relative);
	std::fs::read_to_string(&path).map_err(|source| SetupError::ShaderSource {
		path: path.display().to_string(),
		source,
	})
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum RenderMode {
	Fill,
	Wireframe,
}

/// Interactive state for one demo run: the polygon-mode toggle and the
/// frame-rate readout cadence.
struct AppState {
	render_mode: RenderMode,
	fps: fps_counter::FPSCounter,
	last_fps_report: Instant,
}

impl AppState {
	fn new() -> Self {
		AppState {
			render_mode: RenderMode::Fill,
			fps: fps_counter::FPSCounter::new(),
			last_fps_report: Instant::now(),
		}
	}

	/// Count the frame that just finished; print the rate once per second.
	fn count_frame(&mut self) {
		let fps = self.fps.tick();
		if self.last_fps_report.elapsed() >= Duration::from_secs(1) {
			println!("fps: {fps}");
			self.last_fps_report = Instant::now();
		}
	}

	/// Escape and Q close the window, T toggles wireframe rendering.
	fn handle_key(&mut self, window: &mut glfw::Window, key: Key, action: Action) {
		if action != Action::Press {
			return
		}

		match key {
			Key::Escape | Key::Q => window.set_should_close(true),
			Key::T => {
				self.render_mode = match self.render_mode {
					RenderMode::Fill => RenderMode::Wireframe,
					RenderMode::Wireframe => RenderMode::Fill,
				};
				let mode = match self.render_mode {
					RenderMode::Fill => gl::FILL,
					RenderMode::Wireframe => gl::LINE,
				};
				unsafe { gl::PolygonMode(gl::FRONT_AND_BACK, mode) };
			},
			_ => {},
		}
	}
}

/// Open a window with a GL 3.3 core context and drive `init`'s frame
/// closure until the window closes.
///
/// `init` runs once with the context current, so shader and mesh setup
/// belongs there; the closure it returns is called once per frame before
/// the buffer swap and event pump.
pub fn view_window<I, L>(title: &str, vsync: bool, init: I) -> Result<(), SetupError>
where
	I: FnOnce() -> Result<L, SetupError>,
	L: FnMut(),
{
	let mut glfw = glfw::init(glfw::FAIL_ON_ERRORS)?;
	glfw.window_hint(WindowHint::ContextVersion(3, 3));
	glfw.window_hint(WindowHint::OpenGlProfile(OpenGlProfileHint::Core));
	glfw.window_hint(WindowHint::OpenGlDebugContext(true));

	let (mut window, events) = glfw
		.create_window(WINDOW_WIDTH, WINDOW_HEIGHT, title, glfw::WindowMode::Windowed)
		.ok_or(SetupError::WindowCreation)?;

	window.make_current();

	// v-sync caps the frame rate at the monitor refresh rate, which
	// makes the fps readout useless for the animation demos
	glfw.set_swap_interval(match vsync {
		true => glfw::SwapInterval::Sync(1),
		false => glfw::SwapInterval::None,
	});

	window.set_key_polling(true);
	window.set_framebuffer_size_polling(true);

	gl::load_with(|symbol| window.get_proc_address(symbol));

	env_logger::init();
	setup_gl_debug();

	let mut state = AppState::new();
	let mut frame = init()?;

	while !window.should_close() {
		frame();
		state.count_frame();

		window.swap_buffers();
		glfw.poll_events();
		for (_, event) in glfw::flush_messages(&events) {
			match event {
				glfw::WindowEvent::FramebufferSize(width, height) => unsafe {
					gl::Viewport(0, 0, width, height);
				},
				glfw::WindowEvent::Key(key, _, action, _) =>
					state.handle_key(&mut window, key, action),
				_ => {},
			}
		}
	}

	Ok(())
}

fn setup_gl_debug() {
	unsafe {
		gl::Enable(gl::DEBUG_OUTPUT);
		gl::Enable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
		gl::DebugMessageCallback(Some(gl_debug), std::ptr::null());
	}
}

extern "system" fn gl_debug(
	_source: GLenum,
	_ty: GLenum,
	_id: GLuint,
	severity: GLenum,
	_length: GLsizei,
	message: *const c_char,
	_user_param: *mut c_void,
) {
	let message = unsafe { CStr::from_ptr(message) }.to_string_lossy();
	match severity {
		gl::DEBUG_SEVERITY_HIGH => log::error!(target: "OpenGL", "{message}"),
		gl::DEBUG_SEVERITY_MEDIUM => log::warn!(target: "OpenGL", "{message}"),
		gl::DEBUG_SEVERITY_LOW => log::debug!(target: "OpenGL", "{message}"),
		_ => log::trace!(target: "OpenGL", "{message}"),
	}
}
