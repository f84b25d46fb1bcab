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
//! Semi-implicit Euler integrator
//!
//! # Algorithm
//!
//! ```text
//! v(t + dt) = v(t) + a(t)*dt
//! x(t + dt) = x(t) + v(t + dt)*dt
//! ```
//!
//! The update runs as two full passes: every velocity is updated before any
//! position moves. Forces were already fixed for the tick, so the split does
//! not change the numbers, but it keeps each pass independent of the order
//! planets sit in.
//!
//! # Properties
//!
//! - **Symplectic**: bounded energy error on closed orbits
//! - **First-order accurate**: global error O(dt)
//! - One force evaluation per step

use super::Integrator;
use crate::body::{Acceleration, Body, Planet};
use log::warn;

/// Semi-implicit (symplectic) Euler
///
/// # Example
///
/// ```
/// use gravity_sim::integration::{Integrator, SemiImplicitEuler};
///
/// let euler = SemiImplicitEuler::new();
/// assert_eq!(euler.name(), "Semi-implicit Euler");
/// ```
#[derive(Debug, Clone)]
pub struct SemiImplicitEuler {
    warn_on_invalid: bool,
}

impl SemiImplicitEuler {
    /// Create a new integrator
    pub fn new() -> Self {
        SemiImplicitEuler { warn_on_invalid: true }
    }

    /// Set whether to warn when a planet ends a step in a non-finite state
    pub fn set_warn_on_invalid(&mut self, warn: bool) {
        self.warn_on_invalid = warn;
    }
}

impl Default for SemiImplicitEuler {
    fn default() -> Self {
        Self::new()
    }
}

impl Integrator for SemiImplicitEuler {
    fn name(&self) -> &str {
        "Semi-implicit Euler"
    }

    fn integrate(&self, planets: &mut [Planet], accelerations: &[Option<Acceleration>], dt: f64) -> usize {
        assert_eq!(
            planets.len(),
            accelerations.len(),
            "Accelerations must be aligned with planets"
        );

        // Pass 1: v' = v + a*dt
        let mut updated_count = 0;
        for (planet, acceleration) in planets.iter_mut().zip(accelerations) {
            if let Some(a) = acceleration {
                planet.velocity.accelerate(a, dt);
                updated_count += 1;
            }
        }

        // Pass 2: p' = p + v'*dt
        for planet in planets.iter_mut() {
            planet.position.advance(&planet.velocity, dt);
            planet.advance_rotation(dt);

            if self.warn_on_invalid && (!planet.position.is_valid() || !planet.velocity.is_valid()) {
                warn!("Integration produced invalid state for {}", planet.id());
            }
        }

        updated_count
    }
}
