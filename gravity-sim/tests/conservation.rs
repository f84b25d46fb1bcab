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
//! Integration tests verifying conservation properties of a running world

use approx::assert_relative_eq;
use gravity_sim::body::{Body, PlanetDescriptor, PointMassDescriptor, Position, Velocity};
use gravity_sim::forces::gravitational_force;
use gravity_sim::integration::DEFAULT_TIMESTEP;
use gravity_sim::SimulationWorld;

fn planet(mass: f64, radius: f64, x: f64, y: f64, vx: f64, vy: f64) -> PlanetDescriptor {
    PlanetDescriptor::new(mass, radius)
        .at(Position::new(x, y))
        .with_velocity(Velocity::new(vx, vy))
}

#[test]
fn test_newtons_third_law() {
    let mut world = SimulationWorld::new();
    world.add_planet(planet(12.0, 1.0, -3.0, 7.0, 0.0, 0.0));
    world.add_planet(planet(45.0, 1.0, 20.0, -4.0, 0.0, 0.0));
    let planets = world.planets();

    for g in [1.0, 6000.0, 20000.0] {
        let ab = gravitational_force(&planets[0], &planets[1], g);
        let ba = gravitational_force(&planets[1], &planets[0], g);
        assert_relative_eq!(ab.fx, -ba.fx, max_relative = 1e-12);
        assert_relative_eq!(ab.fy, -ba.fy, max_relative = 1e-12);
    }
}

#[test]
fn test_force_magnitude_matches_inverse_square() {
    let mut world = SimulationWorld::new();
    world.add_planet(planet(10.0, 1.0, 0.0, 0.0, 0.0, 0.0));
    world.add_point_mass(PointMassDescriptor::new(20.0).at(Position::new(3.0, 4.0)));

    let f = gravitational_force(&world.planets()[0], &world.point_masses()[0], 6000.0);
    // 6000 * 10 * 20 / 25
    assert_relative_eq!(f.magnitude(), 48000.0, max_relative = 1e-12);
    assert_relative_eq!(f.fx, 48000.0 * 0.6, max_relative = 1e-12);
    assert_relative_eq!(f.fy, 48000.0 * 0.8, max_relative = 1e-12);
}

#[test]
fn test_isolated_planet_moves_in_straight_line() {
    let mut world = SimulationWorld::new();
    world.add_planet(planet(5.0, 2.0, 10.0, -20.0, 3.0, 4.0));

    for _ in 0..600 {
        world.tick();
    }

    let p = &world.planets()[0];
    let t = 600.0 * DEFAULT_TIMESTEP;
    assert_eq!(p.velocity(), Velocity::new(3.0, 4.0));
    assert_relative_eq!(p.position().x(), 10.0 + 3.0 * t, max_relative = 1e-9);
    assert_relative_eq!(p.position().y(), -20.0 + 4.0 * t, max_relative = 1e-9);
}

#[test]
fn test_planet_pair_momentum_is_conserved() {
    let mut world = SimulationWorld::new();
    world.add_planet(planet(30.0, 5.0, 0.0, 0.0, 0.0, 10.0));
    world.add_planet(planet(10.0, 5.0, 300.0, 0.0, 0.0, -30.0));

    let before = world.total_momentum();
    for _ in 0..120 {
        world.tick();
    }
    let after = world.total_momentum();

    assert_eq!(world.planets().len(), 2);
    assert!((after[0] - before[0]).abs() < 1e-6);
    assert!((after[1] - before[1]).abs() < 1e-6);
}

#[test]
fn test_merge_conserves_mass_and_momentum() {
    let mut world = SimulationWorld::new();
    world.add_planet(planet(10.0, 3.0, 0.0, 0.0, 5.0, 1.0));
    world.add_planet(planet(20.0, 4.0, 6.0, 0.0, -1.0, 2.0));

    let mass_before = world.total_mass();
    let momentum_before = world.total_momentum();

    let report = world.step(DEFAULT_TIMESTEP);

    assert_eq!(report.merge_count(), 1);
    assert_eq!(world.planets().len(), 1);

    let merged = &world.planets()[0];
    assert_eq!(merged.mass().value(), 30.0);
    assert_relative_eq!(merged.radius(), 5.0, max_relative = 1e-12);
    assert_relative_eq!(world.total_mass(), mass_before);

    let momentum_after = world.total_momentum();
    assert_relative_eq!(momentum_after[0], momentum_before[0], max_relative = 1e-12);
    assert_relative_eq!(momentum_after[1], momentum_before[1], max_relative = 1e-12);
}

#[test]
fn test_absorption_conserves_mass() {
    let mut world = SimulationWorld::new();
    world.add_point_mass(PointMassDescriptor::new(500.0).at(Position::new(100.0, 100.0)));
    world.add_planet(planet(50.0, 10.0, 105.0, 100.0, 0.0, 0.0));

    let before = world.total_mass();
    let report = world.step(DEFAULT_TIMESTEP);

    assert_eq!(report.absorption_count(), 1);
    assert!(world.planets().is_empty());
    assert_eq!(world.point_masses()[0].mass().value(), 550.0);
    assert_eq!(world.point_masses()[0].position(), Position::new(100.0, 100.0));
    assert_eq!(world.total_mass(), before);
}

#[test]
fn test_circular_orbit_stays_bounded() {
    let g: f64 = 6000.0;
    let central_mass = 1000.0;
    let radius = 200.0;
    let speed = (g * central_mass / radius).sqrt();

    let mut world = SimulationWorld::new();
    world.set_gravitational_constant(g);
    world.add_point_mass(PointMassDescriptor::new(central_mass));
    world.add_planet(planet(1.0, 5.0, radius, 0.0, 0.0, speed));

    let initial_energy = world.kinetic_energy();

    // Roughly two full orbits
    for _ in 0..900 {
        world.tick();
        let p = world.planets()[0].position();
        let r = (p.x() * p.x() + p.y() * p.y()).sqrt();
        assert!((r - radius).abs() / radius < 0.05, "orbit drifted to r = {}", r);
    }

    let drift = (world.kinetic_energy() - initial_energy).abs() / initial_energy;
    assert!(drift < 0.1, "kinetic energy drifted by {:.2}%", drift * 100.0);
}
