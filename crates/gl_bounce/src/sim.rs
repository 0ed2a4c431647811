// Copyright (C) 2025 the gl_bounce authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Fixed-count particle simulation with reflective wall bounces.

use std::ops::RangeInclusive;

use rand::Rng;

/// A 2D particle in normalized device coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
	pub position: [f32; 2],
	pub velocity: [f32; 2],
	pub color: [f32; 3],
}

/// Advances a fixed set of [`Particle`]s one step at a time.
///
/// Particles never interact. Each step a particle moves by its velocity,
/// then reverses direction on any axis that carried it strictly past
/// `bounds`. The position is never clamped: a particle that crossed the
/// wall sits past it for the step in which it crossed and turns around on
/// the next one.
pub struct ParticleSimulator {
	particles: Vec<Particle>,
	bounds: f32,
}

impl ParticleSimulator {
	/// Spawn `count` particles with position, velocity and color sampled
	/// uniformly from the given inclusive ranges; position and velocity
	/// per axis, color per channel.
	pub fn new(
		count: u32,
		bounds: f32,
		position_range: RangeInclusive<f32>,
		velocity_range: RangeInclusive<f32>,
		color_range: RangeInclusive<f32>,
	) -> Self {
		Self::with_rng(
			&mut rand::thread_rng(),
			count,
			bounds,
			position_range,
			velocity_range,
			color_range,
		)
	}

	/// [`ParticleSimulator::new`] with a caller-provided rng.
	pub fn with_rng<R: Rng>(
		rng: &mut R,
		count: u32,
		bounds: f32,
		position_range: RangeInclusive<f32>,
		velocity_range: RangeInclusive<f32>,
		color_range: RangeInclusive<f32>,
	) -> Self {
		let particles = (0..count)
			.map(|_| Particle {
				position: [
					rng.gen_range(position_range.clone()),
					rng.gen_range(position_range.clone()),
				],
				velocity: [
					rng.gen_range(velocity_range.clone()),
					rng.gen_range(velocity_range.clone()),
				],
				color: [
					rng.gen_range(color_range.clone()),
					rng.gen_range(color_range.clone()),
					rng.gen_range(color_range.clone()),
				],
			})
			.collect();

		ParticleSimulator { particles, bounds }
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Advance every particle by one step.
	pub fn step(&mut self) {
		for particle in &mut self.particles {
			for axis in 0..2 {
				particle.position[axis] += particle.velocity[axis];
				if particle.position[axis].abs() > self.bounds {
					particle.velocity[axis] = -particle.velocity[axis];
				}
			}
		}
	}
}

#[cfg(test)]
mod test {
	use rand::{rngs::StdRng, SeedableRng};

	use super::*;

	fn simulator_with(particles: Vec<Particle>, bounds: f32) -> ParticleSimulator {
		ParticleSimulator { particles, bounds }
	}

	fn particle(position: [f32; 2], velocity: [f32; 2]) -> Particle {
		Particle {
			position,
			velocity,
			color: [1.0, 1.0, 1.0],
		}
	}

	#[test]
	fn step_adds_velocity_exactly() {
		let mut sim = simulator_with(
			vec![
				particle([0.25, -0.5], [0.01, -0.02]),
				particle([-0.125, 0.75], [-0.005, 0.0]),
			],
			0.95,
		);

		sim.step();

		assert_eq!(sim.particles()[0].position, [0.25 + 0.01, -0.5 + -0.02]);
		assert_eq!(sim.particles()[1].position, [-0.125 + -0.005, 0.75]);
	}

	#[test]
	fn velocity_unchanged_inside_bounds() {
		let mut sim = simulator_with(vec![particle([0.0, 0.0], [0.01, -0.01])], 0.95);

		sim.step();

		assert_eq!(sim.particles()[0].velocity, [0.01, -0.01]);
	}

	#[test]
	fn flip_only_on_the_breached_axis() {
		// x crosses the +bounds wall this step, y stays well inside
		let mut sim = simulator_with(vec![particle([0.95, 0.0], [0.01, 0.005])], 0.95);

		sim.step();

		let p = sim.particles()[0];
		assert_eq!(p.velocity, [-0.01, 0.005]);
		assert!(p.position[0] > 0.95);
	}

	#[test]
	fn flip_on_the_negative_wall() {
		let mut sim = simulator_with(vec![particle([-0.95, 0.0], [-0.01, 0.0])], 0.95);

		sim.step();

		assert_eq!(sim.particles()[0].velocity, [0.01, 0.0]);
	}

	#[test]
	fn crossing_flips_exactly_once() {
		// 0.94 -> 0.95 is not strictly past the wall, 0.96 is; the
		// return step must not flip again
		let mut sim = simulator_with(vec![particle([0.94, 0.0], [0.01, 0.0])], 0.95);

		sim.step();
		let p = sim.particles()[0];
		assert_eq!(p.position[0], 0.95);
		assert_eq!(p.velocity[0], 0.01);

		sim.step();
		let p = sim.particles()[0];
		assert_eq!(p.position[0], 0.96);
		assert_eq!(p.velocity[0], -0.01);

		sim.step();
		let p = sim.particles()[0];
		assert_eq!(p.position[0], 0.95);
		assert_eq!(p.velocity[0], -0.01);
	}

	#[test]
	fn spawned_values_stay_in_their_ranges() {
		let mut rng = StdRng::seed_from_u64(0x67_6c_5f_62);
		let sim = ParticleSimulator::with_rng(
			&mut rng,
			256,
			0.95,
			-0.8..=0.8,
			-0.01..=0.01,
			0.2..=1.0,
		);

		assert_eq!(sim.particles().len(), 256);
		for p in sim.particles() {
			for axis in 0..2 {
				assert!((-0.8..=0.8).contains(&p.position[axis]));
				assert!((-0.01..=0.01).contains(&p.velocity[axis]));
			}
			for channel in 0..3 {
				assert!((0.2..=1.0).contains(&p.color[channel]));
			}
		}
	}

	#[test]
	fn count_is_constant_across_steps() {
		let mut rng = StdRng::seed_from_u64(7);
		let mut sim =
			ParticleSimulator::with_rng(&mut rng, 5, 0.95, -0.8..=0.8, -0.01..=0.01, 0.2..=1.0);

		for _ in 0..500 {
			sim.step();
		}

		assert_eq!(sim.particles().len(), 5);
	}
}
