// Copyright (C) 2025 the gl_bounce authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! A fixed flock of dart-shaped particles bouncing off the window edges.

use std::process::ExitCode;

use cgmath::{Matrix4, Rad, Vector3};
use gl_bounce::{
	mesh::{Mesh, VertexAttribute},
	shader::ShaderProgram,
	sim::ParticleSimulator,
};
use gl_bounce_demos::SetupError;

const PARTICLE_COUNT: u32 = 64;
const BOUNDS: f32 = 0.95;

// dart pointing up the +Y axis
#[rustfmt::skip]
const VERTICES: [[f32; 2]; 4] = [
	[ 0.0,    0.05],
	[-0.025, -0.05],
	[ 0.0,    0.0 ],
	[ 0.025, -0.05],
];
const INDICES: [u32; 6] = [0, 1, 2, 0, 3, 2];

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
	gl_bounce_demos::view_window("2D Shapes Animation", false, || {
		let vertex_source = gl_bounce_demos::load_shader_source("shaders/boids.vert")?;
		let fragment_source = gl_bounce_demos::load_shader_source("shaders/boids.frag")?;
		let program = ShaderProgram::build(&vertex_source, &fragment_source)?;
		let transform = program.uniform("transform");
		let color = program.uniform("color");

		let mesh = unsafe { Mesh::upload(&VERTICES, &INDICES, &[VertexAttribute::new(2)]) };
		let mut simulator =
			ParticleSimulator::new(PARTICLE_COUNT, BOUNDS, -0.8..=0.8, -0.01..=0.01, 0.2..=1.0);

		Ok(move || {
			simulator.step();

			unsafe {
				gl::ClearColor(0.1, 0.1, 0.1, 1.0);
				gl::Clear(gl::COLOR_BUFFER_BIT);
			}

			program.bind();
			for particle in simulator.particles() {
				let [x, y] = particle.position;
				let [dx, dy] = particle.velocity;
				// the mesh points up +Y; turn it into the direction of travel
				let heading = dy.atan2(dx) - std::f32::consts::FRAC_PI_2;
				let matrix = Matrix4::from_translation(Vector3::new(x, y, 0.0))
					* Matrix4::from_angle_z(Rad(heading));

				transform.set_mat4(matrix.as_ref());
				color.set_vec3(particle.color);
				unsafe { mesh.draw() };
			}
		})
	})
}
