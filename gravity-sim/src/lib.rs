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
//! # Gravity Sim
//!
//! The simulation core of a 2D gravity sandbox: planets that attract each
//! other, merge on contact and fall into static point masses.
//!
//! ## Features
//!
//! - **Newtonian Gravity**: pairwise inverse-square attraction with a tunable G
//! - **Collisions**: planets merge conserving mass and momentum; point masses
//!   absorb planets
//! - **Symplectic Integration**: semi-implicit Euler at a fixed 1/60 s step
//! - **Parallelization**: Optional Rayon integration for force accumulation
//!
//! ## Example
//!
//! ```rust
//! use gravity_sim::body::{Color, PlanetDescriptor, PointMassDescriptor, Position, Velocity};
//! use gravity_sim::SimulationWorld;
//!
//! let mut world = SimulationWorld::new();
//! world.add_point_mass(PointMassDescriptor::new(500.0).at(Position::new(500.0, 500.0)));
//! world.add_planet(
//!     PlanetDescriptor::new(50.0, 10.0)
//!         .at(Position::new(700.0, 400.0))
//!         .with_velocity(Velocity::new(0.0, -80.0))
//!         .with_color(Color::BLUE),
//! );
//!
//! for _ in 0..60 {
//!     world.tick();
//! }
//! assert_eq!(world.tick_count(), 60);
//! ```

#![warn(missing_docs)]

/// Planets, point masses and their shared primitives
pub mod body;

/// Wall-clock to fixed-tick conversion
pub mod clock;

/// Collision detection and resolution
pub mod collision;

/// Simulation parameters
pub mod config;

/// Error types
pub mod error;

/// Gravitational force computation
pub mod forces;

/// Numerical integration methods
pub mod integration;

/// Default starter scene
pub mod scene;

/// Simulation world and tick driver
pub mod world;

pub use config::SimulationConfig;
pub use error::ConfigError;
pub use world::{SharedWorld, SimulationWorld, StepReport, WorldSnapshot};
