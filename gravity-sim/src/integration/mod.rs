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
//! Numerical integration of planet motion
//!
//! The sandbox advances planets with semi-implicit (symplectic) Euler at a
//! fixed step of 1/60 simulated second. The [`Integrator`] trait is the seam
//! a different scheme would plug into.
//!
//! # Timestep Guidelines
//!
//! - Too small: Numerical precision issues and wasted computation
//! - Too large: Planets tunnel through each other and orbits blow up
//! - The default 1/60 s multiplied by a time scale of at most 10 keeps the
//!   effective step under 0.17 s

use crate::body::{Acceleration, Body, Planet, PointMass};

mod euler;

pub use euler::SemiImplicitEuler;

/// Fixed simulated time advanced by one tick at time scale 1.0
pub const DEFAULT_TIMESTEP: f64 = 1.0 / 60.0;

/// Calculate kinetic energy for a single planet
///
/// KE = 0.5 * m * v²
pub fn calculate_kinetic_energy(planet: &Planet) -> f64 {
    let speed = planet.velocity().magnitude();
    0.5 * planet.mass().value() * speed * speed
}

/// Calculate total kinetic energy of a set of planets
pub fn calculate_total_kinetic_energy(planets: &[Planet]) -> f64 {
    planets.iter().map(calculate_kinetic_energy).sum()
}

/// Total linear momentum of a set of planets
///
/// Point masses never move and carry no momentum.
pub fn calculate_total_momentum(planets: &[Planet]) -> [f64; 2] {
    planets.iter().fold([0.0, 0.0], |acc, planet| {
        let p = planet.momentum();
        [acc[0] + p[0], acc[1] + p[1]]
    })
}

/// Total mass held by planets and point masses together
pub fn calculate_total_mass(planets: &[Planet], point_masses: &[PointMass]) -> f64 {
    planets.iter().map(|p| p.mass().value()).sum::<f64>()
        + point_masses.iter().map(|p| p.mass().value()).sum::<f64>()
}

/// Trait for numerical integration methods
///
/// Integrators advance planet velocity and position from accelerations that
/// were computed beforehand. They never add or remove planets.
pub trait Integrator: Send + Sync {
    /// Get the name of this integrator
    fn name(&self) -> &str;

    /// Validate a timestep for stability
    ///
    /// Returns an error for unusable steps, and a warning message for steps
    /// that are usable but likely to cause numerical trouble.
    fn validate_timestep(&self, dt: f64) -> Result<(), String> {
        if dt <= 0.0 || !dt.is_finite() {
            return Err(format!("Invalid timestep: {}. Must be positive and finite.", dt));
        }

        if dt < 1e-9 {
            return Err(format!(
                "Warning: Timestep {} is extremely small and may cause precision loss with f64.",
                dt
            ));
        }

        if dt > 1.0 {
            return Err(format!(
                "Warning: Timestep {} is large and may cause instability. \
                Consider a smaller time scale.",
                dt
            ));
        }

        Ok(())
    }

    /// Advance every planet by `dt`
    ///
    /// `accelerations` is aligned with `planets`. A `None` entry marks a
    /// planet with no computed force this tick (a freshly merged one): its
    /// velocity is left alone but it still drifts.
    ///
    /// # Returns
    ///
    /// Number of planets whose velocity was updated
    fn integrate(&self, planets: &mut [Planet], accelerations: &[Option<Acceleration>], dt: f64) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{BodyId, PlanetDescriptor, PointMassDescriptor, Velocity};

    #[test]
    fn test_kinetic_energy() {
        let planet = PlanetDescriptor::new(2.0, 1.0)
            .with_velocity(Velocity::new(3.0, 4.0))
            .build(BodyId::new(0));
        assert_eq!(calculate_kinetic_energy(&planet), 25.0);
        assert_eq!(calculate_total_kinetic_energy(&[planet.clone(), planet]), 50.0);
    }

    #[test]
    fn test_total_momentum_and_mass() {
        let a = PlanetDescriptor::new(2.0, 1.0)
            .with_velocity(Velocity::new(1.0, 0.0))
            .build(BodyId::new(0));
        let b = PlanetDescriptor::new(1.0, 1.0)
            .with_velocity(Velocity::new(-2.0, 5.0))
            .build(BodyId::new(1));
        let point = PointMassDescriptor::new(100.0).build(BodyId::new(2));

        assert_eq!(calculate_total_momentum(&[a.clone(), b.clone()]), [0.0, 5.0]);
        assert_eq!(calculate_total_mass(&[a, b], &[point]), 103.0);
    }

    #[test]
    fn test_timestep_validation() {
        let euler = SemiImplicitEuler::new();
        assert!(euler.validate_timestep(DEFAULT_TIMESTEP).is_ok());
        assert!(euler.validate_timestep(0.0).unwrap_err().contains("Invalid"));
        assert!(euler.validate_timestep(f64::NAN).is_err());
        assert!(euler.validate_timestep(1e-10).unwrap_err().contains("extremely small"));
        assert!(euler.validate_timestep(2.0).unwrap_err().contains("large"));
    }
}
