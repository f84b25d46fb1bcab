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
//! Value types shared by every body
//!
//! Position, velocity, acceleration and mass live in a flat 2D plane with
//! double-precision coordinates. The units are sandbox units: one unit of
//! length is one pixel at zoom 1.0, one unit of time is one simulated second.

/// 2D position with double-precision coordinates
///
/// # Examples
///
/// ```
/// use gravity_sim::body::Position;
///
/// let pos = Position::new(3.0, 4.0);
/// assert_eq!(pos.distance_to(&Position::zero()), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    /// Create a new position with the given coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }

    /// Create a position at the origin
    pub fn zero() -> Self {
        Position::new(0.0, 0.0)
    }

    /// Get the x coordinate
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Get the y coordinate
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another position
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Move by `velocity * dt`
    pub fn advance(&mut self, velocity: &Velocity, dt: f64) {
        self.x += velocity.dx() * dt;
        self.y += velocity.dy() * dt;
    }

    /// Check if both coordinates are finite
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// 2D velocity in sandbox units per second
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    dx: f64,
    dy: f64,
}

impl Velocity {
    /// Create a new velocity with the given components
    pub fn new(dx: f64, dy: f64) -> Self {
        Velocity { dx, dy }
    }

    /// Create a zero velocity (at rest)
    pub fn zero() -> Self {
        Velocity::new(0.0, 0.0)
    }

    /// Get the x component
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Get the y component
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Apply `acceleration * dt`
    pub fn accelerate(&mut self, acceleration: &Acceleration, dt: f64) {
        self.dx += acceleration.ax() * dt;
        self.dy += acceleration.ay() * dt;
    }

    /// Check if both components are finite
    pub fn is_valid(&self) -> bool {
        self.dx.is_finite() && self.dy.is_finite()
    }

    /// Speed (magnitude of the velocity vector)
    pub fn magnitude(&self) -> f64 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }
}

/// 2D acceleration, produced from net force by Newton's second law
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Acceleration {
    ax: f64,
    ay: f64,
}

impl Acceleration {
    /// Create a new acceleration with the given components
    pub fn new(ax: f64, ay: f64) -> Self {
        Acceleration { ax, ay }
    }

    /// Get the x component
    pub fn ax(&self) -> f64 {
        self.ax
    }

    /// Get the y component
    pub fn ay(&self) -> f64 {
        self.ay
    }
}

/// Strictly positive mass
///
/// Every body in the sandbox has positive mass for its whole lifetime. A
/// non-positive mass is a caller bug, so [`Mass::new`] panics on it; use
/// [`Mass::try_new`] to check first.
///
/// # Examples
///
/// ```
/// use gravity_sim::body::Mass;
///
/// let mut mass = Mass::new(10.0);
/// mass.absorb(Mass::new(20.0));
/// assert_eq!(mass.value(), 30.0);
/// assert!(Mass::try_new(0.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mass {
    value: f64,
}

impl Mass {
    /// Create a new mass
    ///
    /// # Panics
    ///
    /// Panics if the mass is not positive and finite.
    pub fn new(value: f64) -> Self {
        assert!(value > 0.0 && value.is_finite(), "Mass must be positive and finite");
        Mass { value }
    }

    /// Try to create a new mass
    ///
    /// Returns `None` if the value is zero, negative, NaN or infinite.
    pub fn try_new(value: f64) -> Option<Self> {
        if value > 0.0 && value.is_finite() {
            Some(Mass { value })
        } else {
            None
        }
    }

    /// Get the mass value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Add another mass to this one
    pub fn absorb(&mut self, other: Mass) {
        self.value += other.value;
    }

    /// Get the inverse mass (1/m)
    pub fn inverse(&self) -> f64 {
        1.0 / self.value
    }
}

impl std::ops::Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass { value: self.value + rhs.value }
    }
}

/// 8-bit RGB display color
///
/// Color carries no physics. It is blended when bodies combine so the
/// renderer can show where the mass came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Palette blue
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    /// Palette red
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// Palette green
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    /// Palette yellow
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    /// Palette orange
    pub const ORANGE: Color = Color::rgb(255, 200, 0);
    /// Palette purple
    pub const PURPLE: Color = Color::rgb(255, 0, 255);
    /// Palette cyan
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    /// Palette white
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Names accepted by [`Color::from_name`], in menu order
    pub const PALETTE: [(&'static str, Color); 8] = [
        ("Blue", Color::BLUE),
        ("Red", Color::RED),
        ("Green", Color::GREEN),
        ("Yellow", Color::YELLOW),
        ("Orange", Color::ORANGE),
        ("Purple", Color::PURPLE),
        ("Cyan", Color::CYAN),
        ("White", Color::WHITE),
    ];

    /// Create a color from its channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Look up a palette color by name (case-insensitive)
    ///
    /// Unknown names fall back to blue, matching the control panel default.
    pub fn from_name(name: &str) -> Color {
        Self::PALETTE
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name.trim()))
            .map(|(_, color)| *color)
            .unwrap_or(Color::BLUE)
    }

    /// Componentwise average, truncated toward zero
    pub fn blend(self, other: Color) -> Color {
        let avg = |a: u8, b: u8| ((a as u16 + b as u16) / 2) as u8;
        Color::rgb(avg(self.r, other.r), avg(self.g, other.g), avg(self.b, other.b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_distance() {
        let a = Position::new(1.0, 1.0);
        let b = Position::new(4.0, 5.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
    }

    #[test]
    fn test_position_advance() {
        let mut pos = Position::new(1.0, 2.0);
        pos.advance(&Velocity::new(10.0, -20.0), 0.1);
        assert!((pos.x() - 2.0).abs() < 1e-12);
        assert!((pos.y() - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_position_validation() {
        assert!(Position::new(1.0, 2.0).is_valid());
        assert!(!Position::new(f64::NAN, 2.0).is_valid());
        assert!(!Position::new(1.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_velocity_accelerate() {
        let mut vel = Velocity::new(10.0, 0.0);
        vel.accelerate(&Acceleration::new(2.0, -4.0), 0.5);
        assert_eq!(vel.dx(), 11.0);
        assert_eq!(vel.dy(), -2.0);
    }

    #[test]
    fn test_velocity_magnitude() {
        assert_eq!(Velocity::new(3.0, 4.0).magnitude(), 5.0);
    }

    #[test]
    fn test_mass_try_new() {
        assert_eq!(Mass::try_new(10.5).map(|m| m.value()), Some(10.5));
        assert!(Mass::try_new(0.0).is_none());
        assert!(Mass::try_new(-1.0).is_none());
        assert!(Mass::try_new(f64::NAN).is_none());
        assert!(Mass::try_new(f64::INFINITY).is_none());
    }

    #[test]
    #[should_panic(expected = "Mass must be positive and finite")]
    fn test_mass_zero_panics() {
        Mass::new(0.0);
    }

    #[test]
    #[should_panic(expected = "Mass must be positive and finite")]
    fn test_mass_negative_panics() {
        Mass::new(-1.0);
    }

    #[test]
    fn test_mass_absorb_and_add() {
        let mut mass = Mass::new(500.0);
        mass.absorb(Mass::new(50.0));
        assert_eq!(mass.value(), 550.0);
        assert_eq!((Mass::new(10.0) + Mass::new(20.0)).value(), 30.0);
        assert_eq!(Mass::new(4.0).inverse(), 0.25);
    }

    #[test]
    fn test_color_blend_truncates() {
        let blended = Color::rgb(255, 0, 1).blend(Color::rgb(0, 255, 0));
        assert_eq!(blended, Color::rgb(127, 127, 0));
        assert_eq!(Color::WHITE.blend(Color::WHITE), Color::WHITE);
    }

    #[test]
    fn test_color_from_name() {
        assert_eq!(Color::from_name("Purple"), Color::PURPLE);
        assert_eq!(Color::from_name("cyan"), Color::CYAN);
        assert_eq!(Color::from_name("Magenta-ish"), Color::BLUE);
    }
}
