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
//! Default Scene Example
//!
//! Runs the starter scene (sun, orbiting planet, point mass) through a
//! fixed-step clock fed with jittery frame times, the way a 60 FPS render
//! loop would, and prints a HUD line once per simulated second.
//!
//! # Running
//!
//! ```bash
//! cargo run --example orbit --release
//!
//! # Heavier gravity, double speed
//! GRAVITY_SIM_G=9000 GRAVITY_SIM_TIME_SCALE=2 cargo run --example orbit --release
//! ```

use gravity_sim::body::Body;
use gravity_sim::clock::FixedStepClock;
use gravity_sim::scene::load_default_scene;
use gravity_sim::{SimulationConfig, SimulationWorld};
use std::time::Duration;

/// Frames to simulate (about 20 seconds at 60 FPS)
const FRAMES: u32 = 1200;

fn main() {
    let config = match SimulationConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let mut world = match SimulationWorld::with_config(config) {
        Ok(world) => world,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    let scene = load_default_scene(&mut world);
    let mut clock = FixedStepClock::default();

    println!("=== Gravity Sandbox ===");
    println!(
        "G = {}, time scale = {}, {} planets, {} point masses",
        world.gravitational_constant(),
        world.time_scale(),
        world.planets().len(),
        world.point_masses().len()
    );
    println!();

    let initial_mass = world.total_mass();
    let mut next_report = 1.0;

    for frame in 0..FRAMES {
        // 15-18 ms frames
        let frame_time = Duration::from_micros(15_000 + u64::from(frame % 4) * 1_000);

        for _ in 0..clock.advance(frame_time) {
            let report = world.tick();
            for event in &report.events {
                println!("  collision: {:?}", event);
            }
        }

        if world.elapsed_time() >= next_report {
            next_report += 1.0;
            let snapshot = world.snapshot();
            let orbiter = match world.planet(scene.planet) {
                Some(p) => format!("({:8.2}, {:8.2})", p.position().x(), p.position().y()),
                None => "merged".to_string(),
            };

            println!(
                "t={:6.2}s  planets={}  point masses={}  orbiter={}  KE={:.3e}",
                snapshot.elapsed_time,
                snapshot.planet_count(),
                snapshot.point_mass_count(),
                orbiter,
                world.kinetic_energy()
            );
        }
    }

    println!();
    println!("Ticks: {}", world.tick_count());
    println!(
        "Mass drift: {:.3e} (should be 0)",
        (world.total_mass() - initial_mass).abs()
    );
}
