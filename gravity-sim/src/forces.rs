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
//! Pairwise gravitational force and per-planet accumulation
//!
//! Newton's law of universal gravitation, in sandbox units:
//!
//! **F = G * (m₁ * m₂) / r²**
//!
//! G here is a tunable knob chosen for visual effect (default 6000), not the
//! SI constant. There is no softening term: collisions remove bodies long
//! before the 1/r² singularity matters, and the one true singularity
//! (coincident centers) contributes zero force.
//!
//! # Accumulation
//!
//! For every planet the net force is the sum of the pull of every other
//! planet plus the reaction to every point mass, skipping any body whose
//! envelope overlaps the planet's. All forces in a tick are computed from
//! the same start-of-tick state, so the order planets are visited in does
//! not matter. With the `parallel` feature the per-planet
//! sums fan out over Rayon's pool; each sum still runs in the fixed
//! collection order, so parallel and sequential results are bit-identical.

use crate::body::{collides, Acceleration, Body, Mass, Planet, PointMass};
use log::warn;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// 2D force vector
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Force {
    /// X component
    pub fx: f64,
    /// Y component
    pub fy: f64,
}

impl Force {
    /// Create a new force vector
    pub fn new(fx: f64, fy: f64) -> Self {
        Force { fx, fy }
    }

    /// Create a zero force
    pub fn zero() -> Self {
        Force::new(0.0, 0.0)
    }

    /// Check if the force is valid (all components finite)
    pub fn is_valid(&self) -> bool {
        self.fx.is_finite() && self.fy.is_finite()
    }

    /// Add another force to this one
    pub fn add(&mut self, other: &Force) {
        self.fx += other.fx;
        self.fy += other.fy;
    }

    /// Subtract another force from this one
    pub fn sub(&mut self, other: &Force) {
        self.fx -= other.fx;
        self.fy -= other.fy;
    }

    /// Get the magnitude of the force
    pub fn magnitude(&self) -> f64 {
        (self.fx * self.fx + self.fy * self.fy).sqrt()
    }

    /// Acceleration this force produces on `mass` (a = F/m)
    pub fn acceleration_of(&self, mass: Mass) -> Acceleration {
        let inv_mass = mass.inverse();
        Acceleration::new(self.fx * inv_mass, self.fy * inv_mass)
    }
}

impl std::ops::Neg for Force {
    type Output = Force;

    fn neg(self) -> Force {
        Force::new(-self.fx, -self.fy)
    }
}

/// Force on `a` due to `b`
///
/// Magnitude `G * m_a * m_b / d²`, directed from `a` toward `b`. Returns a
/// zero force when the centers coincide, since the direction is undefined.
///
/// # Examples
///
/// ```
/// use gravity_sim::body::{PlanetDescriptor, Position};
/// use gravity_sim::forces::gravitational_force;
/// use gravity_sim::SimulationWorld;
///
/// let mut world = SimulationWorld::new();
/// world.add_planet(PlanetDescriptor::new(10.0, 1.0));
/// world.add_planet(PlanetDescriptor::new(10.0, 1.0).at(Position::new(10.0, 0.0)));
/// let [a, b] = world.planets() else { unreachable!() };
///
/// let f = gravitational_force(a, b, 100.0);
/// assert_eq!(f.fx, 100.0); // 100 * 10 * 10 / 10²
/// assert_eq!(f.fy, 0.0);
/// ```
pub fn gravitational_force<A, B>(a: &A, b: &B, g: f64) -> Force
where
    A: Body + ?Sized,
    B: Body + ?Sized,
{
    let pa = a.position();
    let pb = b.position();
    let dx = pb.x() - pa.x();
    let dy = pb.y() - pa.y();
    let r_squared = dx * dx + dy * dy;

    if r_squared == 0.0 {
        return Force::zero();
    }

    let r = r_squared.sqrt();
    let magnitude = g * a.mass().value() * b.mass().value() / r_squared;
    let scale = magnitude / r;

    Force::new(dx * scale, dy * scale)
}

/// Accumulates the net force on every planet
#[derive(Debug, Clone)]
pub struct ForceCalculator {
    warn_on_invalid: bool,
}

impl ForceCalculator {
    /// Create a calculator that warns about dropped non-finite forces
    pub fn new() -> Self {
        ForceCalculator { warn_on_invalid: true }
    }

    /// Set whether to warn about invalid force calculations
    pub fn set_warn_on_invalid(&mut self, warn: bool) {
        self.warn_on_invalid = warn;
    }

    /// Net force on each planet, aligned with `planets`
    ///
    /// Each entry is the sum of `force(planet, other)` over every other
    /// planet, minus `force(point_mass, planet)` for every point mass (the
    /// reaction to the point mass's pull, which the point mass itself never
    /// integrates). Bodies overlapping the planet contribute nothing: the
    /// pair is resolved by collision, not by a near-singular pull.
    pub fn net_forces(&self, planets: &[Planet], point_masses: &[PointMass], g: f64) -> Vec<Force> {
        #[cfg(feature = "parallel")]
        {
            (0..planets.len())
                .into_par_iter()
                .map(|index| self.net_force_on(index, planets, point_masses, g))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            (0..planets.len())
                .map(|index| self.net_force_on(index, planets, point_masses, g))
                .collect()
        }
    }

    fn net_force_on(&self, index: usize, planets: &[Planet], point_masses: &[PointMass], g: f64) -> Force {
        let planet = &planets[index];
        let mut total = Force::zero();

        for (other_index, other) in planets.iter().enumerate() {
            if other_index == index || collides(planet, other) {
                continue;
            }
            if let Some(force) = self.checked(planet, other, gravitational_force(planet, other, g)) {
                total.add(&force);
            }
        }

        for point_mass in point_masses {
            if collides(point_mass, planet) {
                continue;
            }
            if let Some(force) = self.checked(planet, point_mass, gravitational_force(point_mass, planet, g)) {
                total.sub(&force);
            }
        }

        total
    }

    fn checked<A: Body, B: Body>(&self, a: &A, b: &B, force: Force) -> Option<Force> {
        if force.is_valid() {
            Some(force)
        } else {
            if self.warn_on_invalid {
                warn!("Dropping non-finite force between {} and {}", a.id(), b.id());
            }
            None
        }
    }
}

impl Default for ForceCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{BodyId, PlanetDescriptor, PointMassDescriptor, Position};

    fn planet(id: u64, mass: f64, x: f64, y: f64) -> Planet {
        PlanetDescriptor::new(mass, 1.0)
            .at(Position::new(x, y))
            .build(BodyId::new(id))
    }

    #[test]
    fn test_force_helpers() {
        let mut f = Force::new(3.0, 4.0);
        assert_eq!(f.magnitude(), 5.0);
        f.add(&Force::new(1.0, 1.0));
        assert_eq!(f, Force::new(4.0, 5.0));
        f.sub(&Force::new(4.0, 5.0));
        assert_eq!(f, Force::zero());
        assert_eq!(-Force::new(1.0, -2.0), Force::new(-1.0, 2.0));
        assert!(!Force::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_acceleration_of() {
        let a = Force::new(20.0, -10.0).acceleration_of(Mass::new(10.0));
        assert_eq!(a.ax(), 2.0);
        assert_eq!(a.ay(), -1.0);
    }

    #[test]
    fn test_pairwise_force_magnitude_and_direction() {
        let a = planet(0, 2.0, 0.0, 0.0);
        let b = planet(1, 3.0, 0.0, 2.0);
        let f = gravitational_force(&a, &b, 10.0);
        // 10 * 2 * 3 / 4 = 15, straight up
        assert_eq!(f.fx, 0.0);
        assert!((f.fy - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_third_law() {
        let a = planet(0, 7.0, -3.0, 1.5);
        let b = planet(1, 11.0, 4.0, -2.0);
        let ab = gravitational_force(&a, &b, 6000.0);
        let ba = gravitational_force(&b, &a, 6000.0);
        assert!((ab.fx + ba.fx).abs() < 1e-9);
        assert!((ab.fy + ba.fy).abs() < 1e-9);
        assert!((ab.magnitude() - ba.magnitude()).abs() < 1e-9);
    }

    #[test]
    fn test_coincident_centers_give_zero_force() {
        let a = planet(0, 5.0, 1.0, 1.0);
        let b = planet(1, 5.0, 1.0, 1.0);
        assert_eq!(gravitational_force(&a, &b, 6000.0), Force::zero());

        let forces = ForceCalculator::new().net_forces(&[a, b], &[], 6000.0);
        assert!(forces.iter().all(|f| *f == Force::zero()));
    }

    #[test]
    fn test_zero_g_gives_zero_force() {
        let a = planet(0, 5.0, 0.0, 0.0);
        let b = planet(1, 5.0, 3.0, 0.0);
        assert_eq!(gravitational_force(&a, &b, 0.0).magnitude(), 0.0);
    }

    #[test]
    fn test_single_planet_feels_nothing() {
        let forces = ForceCalculator::new().net_forces(&[planet(0, 5.0, 0.0, 0.0)], &[], 6000.0);
        assert_eq!(forces, vec![Force::zero()]);
    }

    #[test]
    fn test_point_mass_pulls_planet_toward_it() {
        let point = PointMassDescriptor::new(1000.0).build(BodyId::new(9));
        let p = planet(0, 50.0, 200.0, 0.0);
        let forces = ForceCalculator::new().net_forces(&[p], &[point], 6000.0);
        // 6000 * 1000 * 50 / 200² = 7500 toward the origin
        assert!((forces[0].fx + 7500.0).abs() < 1e-9);
        assert_eq!(forces[0].fy, 0.0);
    }

    #[test]
    fn test_overlapping_bodies_exert_no_force() {
        let planets = vec![planet(0, 10.0, 0.0, 0.0), planet(1, 10.0, 1.5, 0.0)];
        let point = PointMassDescriptor::new(1000.0)
            .at(Position::new(0.0, 0.5))
            .with_radius(0.0)
            .build(BodyId::new(9));

        let forces = ForceCalculator::new().net_forces(&planets, &[point], 6000.0);

        // Planet 0 overlaps both; planet 1 only feels the point mass
        assert_eq!(forces[0], Force::zero());
        assert!(forces[1].fx < 0.0);
        assert!(forces[1].fy > 0.0);
    }

    #[test]
    fn test_net_forces_are_aligned_and_balanced() {
        let planets = vec![
            planet(0, 10.0, 0.0, 0.0),
            planet(1, 20.0, 100.0, 0.0),
            planet(2, 30.0, 50.0, 80.0),
        ];
        let forces = ForceCalculator::new().net_forces(&planets, &[], 6000.0);
        assert_eq!(forces.len(), 3);

        let mut total = Force::zero();
        for f in &forces {
            total.add(f);
        }
        // Internal forces cancel pairwise
        assert!(total.magnitude() < 1e-9);
        // Heaviest neighbour side: planet 0 is pulled toward +x and +y
        assert!(forces[0].fx > 0.0);
        assert!(forces[0].fy > 0.0);
    }
}
