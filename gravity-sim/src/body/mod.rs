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
//! Bodies and the pairwise primitives shared by all of them
//!
//! The sandbox has two kinds of body:
//!
//! - [`Planet`]: mobile, integrated every tick, consumed by merges
//! - [`PointMass`]: static, never moves, absorbs planets that touch it
//!
//! Force and collision routines do not care which kind they are handed. They
//! work through the [`Body`] trait, which exposes the capability set both
//! kinds share.

mod components;
mod id;
mod planet;
mod point_mass;

pub use components::{Acceleration, Color, Mass, Position, Velocity};
pub use id::BodyId;
pub(crate) use id::BodyIdAllocator;
pub use planet::{Planet, PlanetDescriptor, Texture};
pub use point_mass::{PointMass, PointMassDescriptor};

/// Which side of the mobile/static split a body is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    /// Moves under accumulated force
    Planet,
    /// Fixed in place, infinite inertia for positional purposes
    PointMass,
}

/// Capability set shared by planets and point masses
pub trait Body {
    /// Handle of this body
    fn id(&self) -> BodyId;

    /// Mass of this body
    fn mass(&self) -> Mass;

    /// Center of this body
    fn position(&self) -> Position;

    /// Collision radius (always >= 0)
    fn radius(&self) -> f64;

    /// Display color
    fn color(&self) -> Color;

    /// Which kind of body this is
    fn kind(&self) -> BodyKind;

    /// True for bodies that never move
    fn is_static(&self) -> bool {
        self.kind() == BodyKind::PointMass
    }
}

/// Euclidean distance between the centers of two bodies
pub fn distance<A: Body + ?Sized, B: Body + ?Sized>(a: &A, b: &B) -> f64 {
    a.position().distance_to(&b.position())
}

/// True iff the two collision envelopes strictly overlap
///
/// Touching envelopes (`distance == r_a + r_b`) do not collide.
pub fn collides<A: Body + ?Sized, B: Body + ?Sized>(a: &A, b: &B) -> bool {
    distance(a, b) < a.radius() + b.radius()
}

/// Panics unless `radius` is a usable collision radius
pub(crate) fn assert_radius(radius: f64) {
    assert!(radius >= 0.0 && radius.is_finite(), "Radius must be non-negative and finite");
}
