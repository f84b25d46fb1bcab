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
//! Collision detection and merge-into-one response
//!
//! Resolution runs in two phases so no collection is mutated while it is
//! being scanned:
//!
//! 1. `CollisionResolver::detect` walks the planets in collection order
//!    over an immutable view and records every removal, merge and
//!    absorption in a [`CollisionOutcome`].
//! 2. `CollisionOutcome::apply` commits the whole batch at once.
//!
//! # Policy
//!
//! Each planet takes part in at most one collision per tick. For a planet A
//! that has not already been consumed:
//!
//! - the first other unconsumed planet B that overlaps A is merged with it,
//!   and both are consumed;
//! - otherwise the first point mass that overlaps A absorbs it.
//!
//! Because the scan order is the collection order, the outcome is fully
//! deterministic when a planet overlaps several bodies at once.
//!
//! # Merge conservation
//!
//! | quantity | merged value |
//! |----------|--------------|
//! | mass     | m₁ + m₂ |
//! | radius   | √(r₁² + r₂²) (cross-sectional area) |
//! | position | center of mass |
//! | velocity | (m₁v₁ + m₂v₂) / (m₁ + m₂) (linear momentum) |
//! | color    | componentwise average, truncated |
//! | spin     | mass-weighted angular velocity |

use crate::body::{collides, Body, BodyId, BodyIdAllocator, Planet, PointMass, Position, Velocity};
use log::debug;

/// Something that happened to the body collections during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionEvent {
    /// Two planets were replaced by one
    Merged {
        /// Planet whose scan found the collision
        first: BodyId,
        /// Planet it collided with
        second: BodyId,
        /// Newly created planet
        merged: BodyId,
    },
    /// A planet fell into a point mass
    Absorbed {
        /// The point mass that grew
        point_mass: BodyId,
        /// The planet that was consumed
        planet: BodyId,
    },
}

/// Combine two colliding planets into one
///
/// Mass and linear momentum are conserved exactly (up to rounding); the
/// radius conserves cross-sectional area. The heavier planet's texture is
/// kept, with `a` winning ties.
pub fn merge_planets(a: &Planet, b: &Planet, id: BodyId) -> Planet {
    let m1 = a.mass.value();
    let m2 = b.mass.value();
    let total = m1 + m2;

    let position = Position::new(
        (m1 * a.position.x() + m2 * b.position.x()) / total,
        (m1 * a.position.y() + m2 * b.position.y()) / total,
    );
    let velocity = Velocity::new(
        (m1 * a.velocity.dx() + m2 * b.velocity.dx()) / total,
        (m1 * a.velocity.dy() + m2 * b.velocity.dy()) / total,
    );

    Planet {
        id,
        mass: a.mass + b.mass,
        radius: (a.radius * a.radius + b.radius * b.radius).sqrt(),
        position,
        velocity,
        color: a.color.blend(b.color),
        angular_velocity: (m1 * a.angular_velocity + m2 * b.angular_velocity) / total,
        rotation: 0.0,
        texture: if m2 > m1 { b.texture } else { a.texture },
    }
}

/// Batch of collision results, computed but not yet committed
///
/// Only the world's collision pass produces one, sized to the planet
/// collection it scanned.
#[derive(Debug)]
pub struct CollisionOutcome {
    removed: Vec<bool>,
    merged: Vec<Planet>,
    absorptions: Vec<(usize, usize)>,
    events: Vec<CollisionEvent>,
}

impl CollisionOutcome {
    /// True if the planet at `index` is consumed this tick
    pub fn is_removed(&self, index: usize) -> bool {
        self.removed.get(index).copied().unwrap_or(false)
    }

    /// Number of planets consumed this tick
    pub fn removed_count(&self) -> usize {
        self.removed.iter().filter(|r| **r).count()
    }

    /// Planets created by merges, in the order they were found
    pub fn merged(&self) -> &[Planet] {
        &self.merged
    }

    /// Events in the order they were found
    pub fn events(&self) -> &[CollisionEvent] {
        &self.events
    }

    /// True if nothing collided
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Commit the batch
    ///
    /// Absorptions are applied to the point masses, consumed planets are
    /// dropped (survivors keep their relative order), and merged planets are
    /// appended. `planets` and `point_masses` must be the collections the
    /// outcome was detected on.
    pub(crate) fn apply(self, planets: &mut Vec<Planet>, point_masses: &mut [PointMass]) -> Vec<CollisionEvent> {
        debug_assert_eq!(planets.len(), self.removed.len());

        for &(point_index, planet_index) in &self.absorptions {
            point_masses[point_index].absorb(&planets[planet_index]);
        }

        let mut index = 0;
        planets.retain(|_| {
            let keep = !self.removed[index];
            index += 1;
            keep
        });
        planets.extend(self.merged);

        self.events
    }
}

/// Finds overlapping bodies and decides how each collision resolves
#[derive(Debug, Clone, Default)]
pub struct CollisionResolver;

impl CollisionResolver {
    /// Create a resolver
    pub fn new() -> Self {
        CollisionResolver
    }

    /// Scan for collisions without touching either collection
    ///
    /// `ids` supplies the handles of merged planets.
    pub(crate) fn detect(
        &self,
        planets: &[Planet],
        point_masses: &[PointMass],
        ids: &mut BodyIdAllocator,
    ) -> CollisionOutcome {
        let mut outcome = CollisionOutcome {
            removed: vec![false; planets.len()],
            merged: Vec::new(),
            absorptions: Vec::new(),
            events: Vec::new(),
        };

        for (index, planet) in planets.iter().enumerate() {
            if outcome.removed[index] {
                continue;
            }

            let partner = planets.iter().enumerate().position(|(other_index, other)| {
                other_index != index && !outcome.removed[other_index] && collides(planet, other)
            });

            if let Some(other_index) = partner {
                let other = &planets[other_index];
                let merged = merge_planets(planet, other, ids.allocate());
                debug!(
                    "Merged {} and {} into {} (mass {:.3})",
                    planet.id(),
                    other.id(),
                    merged.id(),
                    merged.mass().value()
                );
                outcome.removed[index] = true;
                outcome.removed[other_index] = true;
                outcome.events.push(CollisionEvent::Merged {
                    first: planet.id(),
                    second: other.id(),
                    merged: merged.id(),
                });
                outcome.merged.push(merged);
                continue;
            }

            if let Some(point_index) = point_masses.iter().position(|point| collides(point, planet)) {
                let point = &point_masses[point_index];
                debug!("{} absorbed {}", point.id(), planet.id());
                outcome.removed[index] = true;
                outcome.absorptions.push((point_index, index));
                outcome.events.push(CollisionEvent::Absorbed {
                    point_mass: point.id(),
                    planet: planet.id(),
                });
            }
        }

        outcome
    }
}
