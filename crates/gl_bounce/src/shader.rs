// Copyright (C) 2025 the gl_bounce authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Shader stage compilation and program linking.

use std::{ffi::CString, fmt};

use gl::types::{GLenum, GLint, GLsizei, GLuint};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
	Vertex,
	Fragment,
}

impl ShaderStage {
	#[inline]
	pub fn gl_type(&self) -> GLenum {
		match self {
			Self::Vertex => gl::VERTEX_SHADER,
			Self::Fragment => gl::FRAGMENT_SHADER,
		}
	}
}

impl fmt::Display for ShaderStage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Vertex => "vertex",
			Self::Fragment => "fragment",
		})
	}
}

#[derive(Debug, Error)]
pub enum ShaderError {
	#[error("could not create {0} shader (glCreateShader returned 0)")]
	CreateFailed(ShaderStage),
	#[error("could not compile {stage} shader - driver log:\n{log}\n")]
	CompileFailed { stage: ShaderStage, log: String },
	#[error("could not create program (glCreateProgram returned 0)")]
	ProgramCreateFailed,
	#[error("expected a vertex shader and a fragment shader")]
	StageMismatch,
	#[error("could not link program - driver log:\n{log}\n")]
	LinkFailed { log: String },
}

/// A compiled shader stage. The backing GL object is deleted on drop,
/// whether or not the stage ever made it into a program.
pub struct Shader {
	stage: ShaderStage,
	name: GLuint,
}

impl Shader {
	pub fn compile(stage: ShaderStage, source: &str) -> Result<Self, ShaderError> {
		unsafe {
			let name = gl::CreateShader(stage.gl_type());
			if name == 0 {
				return Err(ShaderError::CreateFailed(stage))
			}
			// constructed before the status check so a failed compile
			// still releases the stage object
			let shader = Shader { stage, name };

			let src_ptr = source.as_bytes().as_ptr() as *const i8;
			let src_len = source.len() as GLint;
			gl::ShaderSource(shader.name, 1, &src_ptr, &src_len);
			gl::CompileShader(shader.name);

			let mut status = 0 as GLint;
			gl::GetShaderiv(shader.name, gl::COMPILE_STATUS, &mut status);
			if status != gl::TRUE as GLint {
				return Err(ShaderError::CompileFailed {
					stage,
					log: shader_info_log(shader.name),
				})
			}

			Ok(shader)
		}
	}
}

impl Drop for Shader {
	fn drop(&mut self) {
		// The driver defers the actual deletion while the stage is still
		// attached to a program.
		unsafe { gl::DeleteShader(self.name) };
	}
}

/// A linked shader program, deleted on drop.
pub struct ShaderProgram {
	name: GLuint,
}

impl ShaderProgram {
	/// Compile a vertex/fragment pair and link it into a program.
	///
	/// Both stages are compiled before the first failure is reported, so
	/// a broken vertex stage still runs the fragment source through the
	/// compiler; the link only happens once both stages compiled. Stage
	/// objects are released on every path once the attempt is over.
	pub fn build(vertex_source: &str, fragment_source: &str) -> Result<Self, ShaderError> {
		let vertex = Shader::compile(ShaderStage::Vertex, vertex_source);
		let fragment = Shader::compile(ShaderStage::Fragment, fragment_source);
		Self::link(&vertex?, &fragment?)
	}

	pub fn link(vertex: &Shader, fragment: &Shader) -> Result<Self, ShaderError> {
		if vertex.stage != ShaderStage::Vertex || fragment.stage != ShaderStage::Fragment {
			return Err(ShaderError::StageMismatch)
		}

		unsafe {
			let name = gl::CreateProgram();
			if name == 0 {
				return Err(ShaderError::ProgramCreateFailed)
			}
			let program = ShaderProgram { name };

			gl::AttachShader(program.name, vertex.name);
			gl::AttachShader(program.name, fragment.name);

			gl::LinkProgram(program.name);

			// detaching lets the stage objects be deleted as soon as
			// they drop, instead of living as long as the program
			gl::DetachShader(program.name, vertex.name);
			gl::DetachShader(program.name, fragment.name);

			let mut status = 0 as GLint;
			gl::GetProgramiv(program.name, gl::LINK_STATUS, &mut status);
			if status != gl::TRUE as GLint {
				return Err(ShaderError::LinkFailed {
					log: program_info_log(program.name),
				})
			}

			Ok(program)
		}
	}

	pub fn bind(&self) {
		unsafe { gl::UseProgram(self.name) };
	}

	/// Look up a named uniform in the linked program.
	///
	/// A name the linker discarded (or never saw) resolves to the `-1`
	/// sentinel; writes through such a location are dropped by the driver,
	/// so a renamed uniform degrades to a no-op rather than an error.
	pub fn uniform(&self, name: &str) -> UniformLocation {
		let location = match CString::new(name) {
			Ok(cname) => unsafe { gl::GetUniformLocation(self.name, cname.as_ptr()) },
			// an interior NUL can't name a GLSL identifier
			Err(_) => -1,
		};

		if location == -1 {
			log::debug!("uniform \"{name}\" not present in linked program");
		}

		UniformLocation(location)
	}
}

impl Drop for ShaderProgram {
	fn drop(&mut self) {
		// The driver defers the actual deletion while the program is
		// current in some context.
		unsafe { gl::DeleteProgram(self.name) };
	}
}

/// Location of a named parameter in a linked [`ShaderProgram`].
///
/// Writes require the owning program to be bound on the GL thread.
#[derive(Debug, Clone, Copy)]
pub struct UniformLocation(GLint);

impl UniformLocation {
	pub fn is_present(&self) -> bool {
		self.0 != -1
	}

	pub fn set_f32(&self, value: f32) {
		unsafe { gl::Uniform1f(self.0, value) };
	}

	pub fn set_vec2(&self, value: [f32; 2]) {
		unsafe { gl::Uniform2f(self.0, value[0], value[1]) };
	}

	pub fn set_vec3(&self, value: [f32; 3]) {
		unsafe { gl::Uniform3f(self.0, value[0], value[1], value[2]) };
	}

	pub fn set_mat4(&self, value: &[f32; 16]) {
		unsafe { gl::UniformMatrix4fv(self.0, 1, gl::FALSE, value.as_ptr()) };
	}
}

unsafe fn shader_info_log(shader: GLuint) -> String {
	let mut log_length = 0 as GLint;
	gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut log_length);
	if log_length <= 0 {
		return String::new()
	}

	let mut log = vec![0u8; log_length as usize];
	let mut written = 0 as GLsizei;
	gl::GetShaderInfoLog(shader, log_length, &mut written, log.as_mut_ptr() as *mut i8);
	// INFO_LOG_LENGTH counts the null terminator, `written` does not
	log.truncate(written.max(0) as usize);
	String::from_utf8_lossy(&log).into_owned()
}

unsafe fn program_info_log(program: GLuint) -> String {
	let mut log_length = 0 as GLint;
	gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut log_length);
	if log_length <= 0 {
		return String::new()
	}

	let mut log = vec![0u8; log_length as usize];
	let mut written = 0 as GLsizei;
	gl::GetProgramInfoLog(program, log_length, &mut written, log.as_mut_ptr() as *mut i8);
	log.truncate(written.max(0) as usize);
	String::from_utf8_lossy(&log).into_owned()
}
