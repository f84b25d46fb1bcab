// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Collision Example
//!
//! A ring of planets at rest around a point mass. Neighbours pull on each
//! other and merge on the way in, and whatever reaches the center is
//! absorbed. Every collision event is printed as it happens.
//!
//! # Running
//!
//! ```bash
//! cargo run --example collisions --release
//! ```

use gravity_sim::body::{Body, Color, PlanetDescriptor, PointMassDescriptor, Position, Texture};
use gravity_sim::collision::CollisionEvent;
use gravity_sim::SimulationWorld;
use std::f64::consts::TAU;

const RING_SIZE: usize = 12;
const RING_RADIUS: f64 = 250.0;
const MAX_TICKS: u32 = 3600;

fn main() {
    let mut world = SimulationWorld::new();
    let center = Position::new(500.0, 400.0);

    world.add_point_mass(
        PointMassDescriptor::new(2000.0)
            .at(center)
            .with_radius(15.0)
            .with_color(Color::WHITE),
    );

    for i in 0..RING_SIZE {
        let angle = TAU * i as f64 / RING_SIZE as f64;
        let (name, color) = Color::PALETTE[i % Color::PALETTE.len()];
        let texture = Texture::ALL.get(i).copied();
        world.add_planet(
            PlanetDescriptor::new(20.0 + 5.0 * i as f64, 12.0)
                .at(Position::new(
                    center.x() + RING_RADIUS * angle.cos(),
                    center.y() + RING_RADIUS * angle.sin(),
                ))
                .with_color(color)
                .with_texture(texture)
                .with_rotation_period(50.0),
        );
        println!("Planet {:2}: {:7} texture={:?}", i, name, texture.map(|t| t.name()));
    }

    println!();
    println!("Total mass: {:.1}", world.total_mass());
    println!();

    let mut merges = 0;
    let mut absorptions = 0;

    while world.tick_count() < u64::from(MAX_TICKS) && !world.planets().is_empty() {
        let report = world.tick();

        for event in &report.events {
            match *event {
                CollisionEvent::Merged { first, second, merged } => {
                    merges += 1;
                    let mass = world.planet(merged).map(|p| p.mass().value()).unwrap_or(0.0);
                    println!(
                        "t={:6.3}s  {} + {} -> {} (mass {:.1})",
                        world.elapsed_time(),
                        first,
                        second,
                        merged,
                        mass
                    );
                }
                CollisionEvent::Absorbed { point_mass, planet } => {
                    absorptions += 1;
                    println!("t={:6.3}s  {} absorbed {}", world.elapsed_time(), point_mass, planet);
                }
            }
        }
    }

    println!();
    println!("Merges: {}, absorptions: {}", merges, absorptions);
    println!("Planets left: {}", world.planets().len());
    for point_mass in world.point_masses() {
        println!(
            "{} mass {:.1}, color {:?}, still at ({}, {})",
            point_mass.id(),
            point_mass.mass().value(),
            point_mass.color(),
            point_mass.position().x(),
            point_mass.position().y()
        );
    }
    println!("Total mass: {:.1}", world.total_mass());
}
