// Copyright (C) 2025 the gl_bounce authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Static mesh upload and indexed draw submission.

use gl::types::{GLint, GLsizei, GLsizeiptr, GLuint};

/// One vertex attribute made of consecutive `f32` components.
pub struct VertexAttribute {
	pub count: GLint,
}

impl VertexAttribute {
	pub const fn new(count: GLint) -> Self {
		VertexAttribute { count }
	}
}

/// An immutable indexed triangle mesh resident on the GPU.
///
/// Uploaded once at startup and shared read-only by every draw for the
/// rest of the run.
pub struct Mesh {
	vao: GLuint,
	vbo: GLuint,
	ebo: GLuint,
	index_count: GLsizei,
}

impl Mesh {
	/// Upload vertex and index data into fresh GL buffers.
	///
	/// `attributes` describes the interleaved `f32` layout of `V` in
	/// attribute-index order; the combined component count must match
	/// the size of `V`.
	///
	/// # SAFETY
	/// * must be called from the GL thread
	pub unsafe fn upload<V: bytemuck::Pod>(
		vertices: &[V],
		indices: &[u32],
		attributes: &[VertexAttribute],
	) -> Self {
		let mut vao = 0;
		let mut vbo = 0;
		let mut ebo = 0;
		gl::GenVertexArrays(1, &mut vao);
		gl::GenBuffers(1, &mut vbo);
		gl::GenBuffers(1, &mut ebo);

		gl::BindVertexArray(vao);

		let vertex_bytes = bytemuck::cast_slice::<V, u8>(vertices);
		gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
		gl::BufferData(
			gl::ARRAY_BUFFER,
			vertex_bytes.len() as GLsizeiptr,
			vertex_bytes.as_ptr() as *const _,
			gl::STATIC_DRAW,
		);

		gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, ebo);
		gl::BufferData(
			gl::ELEMENT_ARRAY_BUFFER,
			std::mem::size_of_val(indices) as GLsizeiptr,
			indices.as_ptr() as *const _,
			gl::STATIC_DRAW,
		);

		let stride = attributes.iter().map(|attribute| attribute.count).sum::<GLint>()
			* std::mem::size_of::<f32>() as GLint;
		let mut offset = 0usize;
		for (index, attribute) in attributes.iter().enumerate() {
			gl::VertexAttribPointer(
				index as GLuint,
				attribute.count,
				gl::FLOAT,
				gl::FALSE,
				stride,
				offset as *const _,
			);
			gl::EnableVertexAttribArray(index as GLuint);
			offset += attribute.count as usize * std::mem::size_of::<f32>();
		}

		gl::BindVertexArray(0);

		Mesh {
			vao,
			vbo,
			ebo,
			index_count: indices.len() as GLsizei,
		}
	}

	/// Issue one indexed draw of the whole mesh.
	///
	/// # SAFETY
	/// * must be called from the GL thread
	/// * a program must be bound
	pub unsafe fn draw(&self) {
		gl::BindVertexArray(self.vao);
		gl::DrawElements(
			gl::TRIANGLES,
			self.index_count,
			gl::UNSIGNED_INT,
			std::ptr::null(),
		);
		gl::BindVertexArray(0);
	}
}

impl Drop for Mesh {
	fn drop(&mut self) {
		unsafe {
			gl::DeleteVertexArrays(1, &self.vao);
			gl::DeleteBuffers(1, &self.vbo);
			gl::DeleteBuffers(1, &self.ebo);
		}
	}
}
