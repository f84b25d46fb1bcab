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
//! Starter scene shown when the sandbox opens
//!
//! A heavy yellow "sun" planet sits at the middle of a 1000x800 view with a
//! small blue planet circling it, and a point mass just below the sun pulls
//! the pair off their orbit over time.

use crate::body::{BodyId, Color, PlanetDescriptor, PointMassDescriptor, Position, Velocity};
use crate::world::SimulationWorld;

/// Ids of the bodies created by [`load_default_scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultScene {
    /// The central planet
    pub sun: BodyId,
    /// The orbiting planet
    pub planet: BodyId,
    /// The point mass below the sun
    pub point_mass: BodyId,
}

/// Descriptor of the central planet
pub fn sun() -> PlanetDescriptor {
    PlanetDescriptor::new(1000.0, 20.0)
        .at(Position::new(500.0, 400.0))
        .with_color(Color::YELLOW)
}

/// Descriptor of the orbiting planet
pub fn orbiter() -> PlanetDescriptor {
    PlanetDescriptor::new(50.0, 10.0)
        .at(Position::new(700.0, 400.0))
        .with_velocity(Velocity::new(0.0, -80.0))
        .with_color(Color::BLUE)
}

/// Descriptor of the point mass
pub fn anchor() -> PointMassDescriptor {
    PointMassDescriptor::new(500.0).at(Position::new(500.0, 500.0))
}

/// Add the starter bodies to `world`
///
/// Existing bodies are kept; call [`SimulationWorld::clear`] first for a
/// fresh start.
pub fn load_default_scene(world: &mut SimulationWorld) -> DefaultScene {
    DefaultScene {
        sun: world.add_planet(sun()),
        planet: world.add_planet(orbiter()),
        point_mass: world.add_point_mass(anchor()),
    }
}

impl SimulationWorld {
    /// Create a world with default parameters and the starter scene
    pub fn with_default_scene() -> Self {
        let mut world = SimulationWorld::new();
        load_default_scene(&mut world);
        world
    }
}
