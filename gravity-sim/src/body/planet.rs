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
//! Mobile bodies ("planets")

use super::{assert_radius, Body, BodyId, BodyKind, Color, Mass, Position, Velocity};
use std::f64::consts::TAU;
use std::path::PathBuf;

/// Surface texture a renderer may draw instead of a solid color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Texture {
    /// Earth
    Earth,
    /// Mars
    Mars,
    /// Jupiter
    Jupiter,
    /// Moon
    Moon,
    /// Sun
    Sun,
    /// Venus
    Venus,
}

impl Texture {
    /// Every texture, in menu order
    pub const ALL: [Texture; 6] = [
        Texture::Earth,
        Texture::Mars,
        Texture::Jupiter,
        Texture::Moon,
        Texture::Sun,
        Texture::Venus,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Texture::Earth => "Earth",
            Texture::Mars => "Mars",
            Texture::Jupiter => "Jupiter",
            Texture::Moon => "Moon",
            Texture::Sun => "Sun",
            Texture::Venus => "Venus",
        }
    }

    /// Relative path of the image file for this texture
    pub fn path(&self) -> PathBuf {
        PathBuf::from(format!("resources/textures/{}.jpg", self.name()))
    }

    /// Look up a texture by menu name (case-insensitive)
    ///
    /// "None (Solid Color)" and unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Texture> {
        Self::ALL
            .into_iter()
            .find(|texture| texture.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Validated request to create a planet
///
/// Construction asserts the physical preconditions: positive finite mass
/// and non-negative finite radius. Everything else is free-form.
///
/// # Examples
///
/// ```
/// use gravity_sim::body::{Color, PlanetDescriptor, Position, Velocity};
///
/// let descriptor = PlanetDescriptor::new(50.0, 10.0)
///     .at(Position::new(700.0, 400.0))
///     .with_velocity(Velocity::new(0.0, -80.0))
///     .with_color(Color::BLUE);
/// assert_eq!(descriptor.mass().value(), 50.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetDescriptor {
    mass: Mass,
    radius: f64,
    position: Position,
    velocity: Velocity,
    rotation_period: f64,
    color: Color,
    texture: Option<Texture>,
}

impl PlanetDescriptor {
    /// Default mass offered by the creation form
    pub const DEFAULT_MASS: f64 = 50.0;
    /// Default radius offered by the creation form
    pub const DEFAULT_RADIUS: f64 = 10.0;
    /// Default rotation period offered by the creation form
    pub const DEFAULT_ROTATION_PERIOD: f64 = 100.0;

    /// Create a descriptor for a planet at rest at the origin
    ///
    /// # Panics
    ///
    /// Panics if `mass` is not positive and finite, or if `radius` is negative
    /// or not finite.
    pub fn new(mass: f64, radius: f64) -> Self {
        assert_radius(radius);
        PlanetDescriptor {
            mass: Mass::new(mass),
            radius,
            position: Position::zero(),
            velocity: Velocity::zero(),
            rotation_period: 0.0,
            color: Color::BLUE,
            texture: None,
        }
    }

    /// Try to create a descriptor, returning `None` on invalid mass or radius
    pub fn try_new(mass: f64, radius: f64) -> Option<Self> {
        if radius >= 0.0 && radius.is_finite() && Mass::try_new(mass).is_some() {
            Some(Self::new(mass, radius))
        } else {
            None
        }
    }

    /// Place the planet
    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Set the initial velocity
    pub fn with_velocity(mut self, velocity: Velocity) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the rotation period in simulated seconds (<= 0 means no spin)
    pub fn with_rotation_period(mut self, period: f64) -> Self {
        self.rotation_period = period;
        self
    }

    /// Set the display color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set or clear the display texture
    pub fn with_texture(mut self, texture: Option<Texture>) -> Self {
        self.texture = texture;
        self
    }

    /// Requested mass
    pub fn mass(&self) -> Mass {
        self.mass
    }

    /// Requested radius
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Requested rotation period
    pub fn rotation_period(&self) -> f64 {
        self.rotation_period
    }

    /// Angular velocity ω = 2π/T, or 0 when the period is not positive
    pub fn angular_velocity(&self) -> f64 {
        if self.rotation_period > 0.0 && self.rotation_period.is_finite() {
            TAU / self.rotation_period
        } else {
            0.0
        }
    }

    pub(crate) fn build(&self, id: BodyId) -> Planet {
        Planet {
            id,
            mass: self.mass,
            radius: self.radius,
            position: self.position,
            velocity: self.velocity,
            color: self.color,
            angular_velocity: self.angular_velocity(),
            rotation: 0.0,
            texture: self.texture,
        }
    }
}

impl Default for PlanetDescriptor {
    fn default() -> Self {
        PlanetDescriptor::new(Self::DEFAULT_MASS, Self::DEFAULT_RADIUS)
            .with_rotation_period(Self::DEFAULT_ROTATION_PERIOD)
    }
}

/// A body that moves under accumulated gravitational force
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub(crate) id: BodyId,
    pub(crate) mass: Mass,
    pub(crate) radius: f64,
    pub(crate) position: Position,
    pub(crate) velocity: Velocity,
    pub(crate) color: Color,
    pub(crate) angular_velocity: f64,
    pub(crate) rotation: f64,
    pub(crate) texture: Option<Texture>,
}

impl Planet {
    /// Current velocity
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Spin rate in radians per simulated second (display only)
    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    /// Current spin angle in [0, 2π) (display only)
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Display texture, if any
    pub fn texture(&self) -> Option<Texture> {
        self.texture
    }

    /// Linear momentum components `m * v`
    pub fn momentum(&self) -> [f64; 2] {
        let m = self.mass.value();
        [m * self.velocity.dx(), m * self.velocity.dy()]
    }

    pub(crate) fn advance_rotation(&mut self, dt: f64) {
        if self.angular_velocity != 0.0 {
            self.rotation = (self.rotation + self.angular_velocity * dt).rem_euclid(TAU);
        }
    }
}

impl Body for Planet {
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
        BodyKind::Planet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angular_velocity_from_period() {
        let spinning = PlanetDescriptor::new(1.0, 1.0).with_rotation_period(100.0);
        assert!((spinning.angular_velocity() - TAU / 100.0).abs() < 1e-15);

        let still = PlanetDescriptor::new(1.0, 1.0).with_rotation_period(0.0);
        assert_eq!(still.angular_velocity(), 0.0);

        let negative = PlanetDescriptor::new(1.0, 1.0).with_rotation_period(-5.0);
        assert_eq!(negative.angular_velocity(), 0.0);
    }

    #[test]
    fn test_descriptor_defaults() {
        let descriptor = PlanetDescriptor::default();
        assert_eq!(descriptor.mass().value(), 50.0);
        assert_eq!(descriptor.radius(), 10.0);
        assert_eq!(descriptor.rotation_period(), 100.0);
    }

    #[test]
    #[should_panic(expected = "Radius must be non-negative and finite")]
    fn test_negative_radius_panics() {
        PlanetDescriptor::new(1.0, -1.0);
    }

    #[test]
    fn test_try_new_rejects_bad_input() {
        assert!(PlanetDescriptor::try_new(0.0, 1.0).is_none());
        assert!(PlanetDescriptor::try_new(1.0, -0.5).is_none());
        assert!(PlanetDescriptor::try_new(1.0, f64::NAN).is_none());
        assert!(PlanetDescriptor::try_new(1.0, 0.0).is_some());
    }

    #[test]
    fn test_build_copies_state() {
        let planet = PlanetDescriptor::new(5.0, 2.0)
            .at(Position::new(1.0, 2.0))
            .with_velocity(Velocity::new(3.0, 4.0))
            .with_texture(Some(Texture::Mars))
            .build(BodyId::new(9));
        assert_eq!(planet.id(), BodyId::new(9));
        assert_eq!(planet.position(), Position::new(1.0, 2.0));
        assert_eq!(planet.velocity(), Velocity::new(3.0, 4.0));
        assert_eq!(planet.momentum(), [15.0, 20.0]);
        assert_eq!(planet.texture(), Some(Texture::Mars));
    }

    #[test]
    fn test_rotation_wraps() {
        let mut planet = PlanetDescriptor::new(1.0, 1.0)
            .with_rotation_period(1.0)
            .build(BodyId::new(0));
        planet.advance_rotation(1.25);
        assert!((planet.rotation() - TAU * 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_texture_lookup() {
        assert_eq!(Texture::from_name("jupiter"), Some(Texture::Jupiter));
        assert_eq!(Texture::from_name("None (Solid Color)"), None);
        assert_eq!(
            Texture::Sun.path(),
            PathBuf::from("resources/textures/Sun.jpg")
        );
    }
}
