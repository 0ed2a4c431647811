// Copyright (C) 2025 the gl_bounce authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! A colored triangle with a pulsing tint and a horizontal sway.

use std::{process::ExitCode, time::Instant};

use gl_bounce::{
	mesh::{Mesh, VertexAttribute},
	shader::ShaderProgram,
};
use gl_bounce_demos::SetupError;

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct Vertex {
	position: [f32; 2],
	color: [f32; 3],
}

#[rustfmt::skip]
const VERTICES: [Vertex; 3] = [
	Vertex { position: [ 0.5, -0.5], color: [1.0, 0.0, 0.0] },
	Vertex { position: [-0.5, -0.5], color: [0.0, 1.0, 0.0] },
	Vertex { position: [ 0.0,  0.5], color: [0.0, 0.0, 1.0] },
];
const INDICES: [u32; 3] = [0, 1, 2];

const VERTEX_SOURCE: &str = include_str!("triangle.vert");
const FRAGMENT_SOURCE: &str = include_str!("triangle.frag");

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
	gl_bounce_demos::view_window("Colored Triangle", true, || {
		let program = ShaderProgram::build(VERTEX_SOURCE, FRAGMENT_SOURCE)?;
		let offset = program.uniform("offset");
		let color = program.uniform("color");

		let mesh = unsafe {
			Mesh::upload(&VERTICES, &INDICES, &[
				VertexAttribute::new(2),
				VertexAttribute::new(3),
			])
		};

		let start = Instant::now();

		Ok(move || {
			let t = start.elapsed().as_secs_f32();
			let pulse = t.sin() / 2.0 + 0.5;

			unsafe {
				gl::ClearColor(0.2, 0.3, 0.3, 1.0);
				gl::Clear(gl::COLOR_BUFFER_BIT);
			}

			program.bind();
			offset.set_vec2([0.5 * t.sin(), 0.0]);
			color.set_vec3([pulse, pulse, pulse]);
			unsafe { mesh.draw() };
		})
	})
}
