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
//! Static bodies ("point masses")

use super::{assert_radius, Body, BodyId, BodyKind, Color, Mass, Planet, Position};

/// Validated request to create a point mass
#[derive(Debug, Clone, PartialEq)]
pub struct PointMassDescriptor {
    mass: Mass,
    radius: f64,
    position: Position,
    color: Color,
}

impl PointMassDescriptor {
    /// Radius used when none is given
    pub const DEFAULT_RADIUS: f64 = 10.0;

    /// Create a white point mass of default radius at the origin
    ///
    /// # Panics
    ///
    /// Panics if `mass` is not positive and finite.
    pub fn new(mass: f64) -> Self {
        PointMassDescriptor {
            mass: Mass::new(mass),
            radius: Self::DEFAULT_RADIUS,
            position: Position::zero(),
            color: Color::WHITE,
        }
    }

    /// Place the point mass
    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Set the collision radius
    ///
    /// # Panics
    ///
    /// Panics if `radius` is negative or not finite.
    pub fn with_radius(mut self, radius: f64) -> Self {
        assert_radius(radius);
        self.radius = radius;
        self
    }

    /// Set the display color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub(crate) fn build(&self, id: BodyId) -> PointMass {
        PointMass {
            id,
            mass: self.mass,
            radius: self.radius,
            position: self.position,
            color: self.color,
        }
    }
}

/// A body that exerts gravity but never moves
///
/// A point mass swallows any planet whose envelope overlaps its own. It
/// gains the planet's mass and takes on a blend of the two colors, but its
/// position and radius stay fixed for its whole lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct PointMass {
    id: BodyId,
    mass: Mass,
    radius: f64,
    position: Position,
    color: Color,
}

impl PointMass {
    pub(crate) fn absorb(&mut self, planet: &Planet) {
        self.mass.absorb(planet.mass());
        self.color = self.color.blend(planet.color());
    }
}

impl Body for PointMass {
    fn id(&self) -> BodyId {
        self.id
    }

    fn mass(&self) -> Mass {
        self.mass
    }

    fn position(&self) -> Position {
        self.position
    }

    fn radius(&self) -> f64 {
        self.radius
    }

    fn color(&self) -> Color {
        self.color
    }

    fn kind(&self) -> BodyKind {
        BodyKind::PointMass
    }
}
