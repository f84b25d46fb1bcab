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
//! World management
//!
//! The [`SimulationWorld`] owns every body and the global parameters, and
//! runs one tick of the simulation per [`step`](SimulationWorld::step):
//!
//! 1. net forces on every planet, from the start-of-tick state
//! 2. collision detection over the same state, then one batch commit
//! 3. semi-implicit Euler over the surviving and newly merged planets
//!
//! Bodies added between steps take part from the next step on.

use crate::body::{
    Acceleration, Body, BodyId, BodyIdAllocator, Planet, PlanetDescriptor, PointMass, PointMassDescriptor,
};
use crate::collision::{CollisionEvent, CollisionResolver};
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::forces::ForceCalculator;
use crate::integration::{
    calculate_total_kinetic_energy, calculate_total_mass, calculate_total_momentum, Integrator, SemiImplicitEuler,
};
use log::{debug, trace};
use std::sync::{Arc, Mutex};

/// World shared between a physics thread and a renderer
pub type SharedWorld = Arc<Mutex<SimulationWorld>>;

/// What one call to [`SimulationWorld::step`] did
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    /// Collisions resolved during the step, in the order they were found
    pub events: Vec<CollisionEvent>,
    /// True if the world was paused and nothing changed
    pub paused: bool,
    /// Simulated time the step covered
    pub dt: f64,
}

impl StepReport {
    fn paused(dt: f64) -> Self {
        StepReport {
            events: Vec::new(),
            paused: true,
            dt,
        }
    }

    /// Number of planet-planet merges
    pub fn merge_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, CollisionEvent::Merged { .. }))
            .count()
    }

    /// Number of planets swallowed by point masses
    pub fn absorption_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, CollisionEvent::Absorbed { .. }))
            .count()
    }
}

/// Owned copy of the world state for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct WorldSnapshot {
    /// Planets in collection order
    pub planets: Vec<Planet>,
    /// Point masses in collection order
    pub point_masses: Vec<PointMass>,
    /// Gravitational constant at the time of the snapshot
    pub gravitational_constant: f64,
    /// Time scale at the time of the snapshot
    pub time_scale: f64,
    /// Paused flag
    pub paused: bool,
    /// Steps taken so far
    pub tick_count: u64,
    /// Simulated seconds elapsed
    pub elapsed_time: f64,
}

impl WorldSnapshot {
    /// Number of planets (HUD)
    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }

    /// Number of point masses (HUD)
    pub fn point_mass_count(&self) -> usize {
        self.point_masses.len()
    }
}

/// The simulation state and its tick driver
///
/// # Example
///
/// ```
/// use gravity_sim::body::{PlanetDescriptor, PointMassDescriptor, Position, Velocity};
/// use gravity_sim::SimulationWorld;
///
/// let mut world = SimulationWorld::new();
/// world.add_point_mass(PointMassDescriptor::new(1000.0));
/// world.add_planet(
///     PlanetDescriptor::new(50.0, 10.0)
///         .at(Position::new(200.0, 0.0))
///         .with_velocity(Velocity::new(0.0, -40.0)),
/// );
///
/// let report = world.tick();
/// assert!(report.events.is_empty());
/// assert_eq!(world.tick_count(), 1);
/// assert!(world.planets()[0].velocity().dx() < 0.0);
/// ```
#[derive(Debug)]
pub struct SimulationWorld {
    planets: Vec<Planet>,
    point_masses: Vec<PointMass>,
    gravitational_constant: f64,
    time_scale: f64,
    timestep: f64,
    paused: bool,
    ids: BodyIdAllocator,
    forces: ForceCalculator,
    collisions: CollisionResolver,
    integrator: SemiImplicitEuler,
    tick_count: u64,
    elapsed_time: f64,
}

impl SimulationWorld {
    /// Create an empty world with default parameters
    pub fn new() -> Self {
        Self::from_parts(SimulationConfig::default())
    }

    /// Create an empty world from a validated configuration
    pub fn with_config(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config))
    }

    fn from_parts(config: SimulationConfig) -> Self {
        let mut forces = ForceCalculator::new();
        forces.set_warn_on_invalid(config.warn_on_invalid);
        let mut integrator = SemiImplicitEuler::new();
        integrator.set_warn_on_invalid(config.warn_on_invalid);

        SimulationWorld {
            planets: Vec::new(),
            point_masses: Vec::new(),
            gravitational_constant: config.gravitational_constant,
            time_scale: config.time_scale,
            timestep: config.timestep,
            paused: config.paused,
            ids: BodyIdAllocator::default(),
            forces,
            collisions: CollisionResolver::new(),
            integrator,
            tick_count: 0,
            elapsed_time: 0.0,
        }
    }

    /// Advance the simulation by `dt` simulated seconds
    ///
    /// Does nothing while paused. Otherwise forces, collisions and
    /// integration each run exactly once.
    ///
    /// # Panics
    ///
    /// Panics if `dt` is negative or not finite.
    pub fn step(&mut self, dt: f64) -> StepReport {
        assert!(dt >= 0.0 && dt.is_finite(), "Timestep must be non-negative and finite");

        if self.paused {
            return StepReport::paused(dt);
        }

        let forces = self
            .forces
            .net_forces(&self.planets, &self.point_masses, self.gravitational_constant);
        let outcome = self
            .collisions
            .detect(&self.planets, &self.point_masses, &mut self.ids);

        // Survivors keep their relative order through the commit, so their
        // accelerations line up; merged planets are appended with none.
        let mut accelerations: Vec<Option<Acceleration>> = self
            .planets
            .iter()
            .zip(&forces)
            .enumerate()
            .filter(|(index, _)| !outcome.is_removed(*index))
            .map(|(_, (planet, force))| Some(force.acceleration_of(planet.mass())))
            .collect();
        accelerations.resize(accelerations.len() + outcome.merged().len(), None);

        let events = outcome.apply(&mut self.planets, &mut self.point_masses);
        let updated = self.integrator.integrate(&mut self.planets, &accelerations, dt);

        self.tick_count += 1;
        self.elapsed_time += dt;

        trace!(
            "Step {}: dt={:.5}, {} planets ({} accelerated), {} collisions",
            self.tick_count,
            dt,
            self.planets.len(),
            updated,
            events.len()
        );

        StepReport {
            events,
            paused: false,
            dt,
        }
    }

    /// Advance by one fixed timestep scaled by the time scale
    pub fn tick(&mut self) -> StepReport {
        self.step(self.timestep * self.time_scale)
    }

    /// Add a planet; it takes part from the next step
    pub fn add_planet(&mut self, descriptor: PlanetDescriptor) -> BodyId {
        let id = self.ids.allocate();
        self.planets.push(descriptor.build(id));
        debug!("Added planet {}", id);
        id
    }

    /// Add a point mass; it takes part from the next step
    pub fn add_point_mass(&mut self, descriptor: PointMassDescriptor) -> BodyId {
        let id = self.ids.allocate();
        self.point_masses.push(descriptor.build(id));
        debug!("Added point mass {}", id);
        id
    }

    /// Remove every body
    ///
    /// Parameters, counters and the id sequence are left untouched.
    pub fn clear(&mut self) {
        self.planets.clear();
        self.point_masses.clear();
        debug!("Cleared all bodies");
    }

    /// Set the gravitational constant
    ///
    /// # Panics
    ///
    /// Panics if `g` is negative or not finite.
    pub fn set_gravitational_constant(&mut self, g: f64) {
        assert!(g >= 0.0 && g.is_finite(), "Gravitational constant must be non-negative and finite");
        self.gravitational_constant = g;
        debug!("Gravitational constant set to {}", g);
    }

    /// Set the time scale used by [`tick`](Self::tick)
    ///
    /// # Panics
    ///
    /// Panics if `scale` is not positive and finite.
    pub fn set_time_scale(&mut self, scale: f64) {
        assert!(scale > 0.0 && scale.is_finite(), "Time scale must be positive and finite");
        self.time_scale = scale;
        debug!("Time scale set to {}", scale);
    }

    /// Pause or resume
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
        debug!("{}", if paused { "Paused" } else { "Resumed" });
    }

    /// Flip the paused flag and return the new value
    pub fn toggle_paused(&mut self) -> bool {
        self.set_paused(!self.paused);
        self.paused
    }

    /// Planets in collection order
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    /// Point masses in collection order
    pub fn point_masses(&self) -> &[PointMass] {
        &self.point_masses
    }

    /// Look up a planet by id
    pub fn planet(&self, id: BodyId) -> Option<&Planet> {
        self.planets.iter().find(|p| p.id() == id)
    }

    /// Look up a point mass by id
    pub fn point_mass(&self, id: BodyId) -> Option<&PointMass> {
        self.point_masses.iter().find(|p| p.id() == id)
    }

    /// Current gravitational constant
    pub fn gravitational_constant(&self) -> f64 {
        self.gravitational_constant
    }

    /// Current time scale
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Base timestep used by [`tick`](Self::tick)
    pub fn timestep(&self) -> f64 {
        self.timestep
    }

    /// True while paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Number of steps taken while not paused
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Simulated seconds advanced so far
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    /// Total mass of all bodies
    ///
    /// Merges and absorptions move mass around but never create or destroy
    /// it, so this stays constant between calls to `add_*` and `clear`.
    pub fn total_mass(&self) -> f64 {
        calculate_total_mass(&self.planets, &self.point_masses)
    }

    /// Total linear momentum of the planets
    pub fn total_momentum(&self) -> [f64; 2] {
        calculate_total_momentum(&self.planets)
    }

    /// Total kinetic energy of the planets
    pub fn kinetic_energy(&self) -> f64 {
        calculate_total_kinetic_energy(&self.planets)
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            planets: self.planets.clone(),
            point_masses: self.point_masses.clone(),
            gravitational_constant: self.gravitational_constant,
            time_scale: self.time_scale,
            paused: self.paused,
            tick_count: self.tick_count,
            elapsed_time: self.elapsed_time,
        }
    }

    /// Wrap the world for use from several threads
    pub fn into_shared(self) -> SharedWorld {
        Arc::new(Mutex::new(self))
    }
}

impl Default for SimulationWorld {
    fn default() -> Self {
        Self::new()
    }
}
