// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Two-component point in world units.
///
/// The same type carries positions, sizes and velocities; meaning is given by
/// the calling context. No invariants are enforced.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal component (grows to the right).
    pub x: f32,
    /// Vertical component (grows downward, screen convention).
    pub y: f32,
}

impl Point {
    /// The origin / zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a point from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Scales both components by `scalar`.
    pub fn scale(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }

    /// Dot product with another point.
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Squared magnitude.
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Magnitude.
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Returns `true` if both components are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl Neg for Point {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// Converts `[x, y]` into a `Point`.
///
/// # Examples
/// ```
/// use mini_geom::Point;
/// let p = Point::from([1.0, 2.0]);
/// assert_eq!(p.to_array(), [1.0, 2.0]);
/// ```
impl From<[f32; 2]> for Point {
    fn from(value: [f32; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

/// Integer destination on the render surface, in pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct ScreenPoint {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl ScreenPoint {
    /// Creates a screen point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Rounds a world point per axis, ties away from zero.
    pub fn round(p: Point) -> Self {
        Self::new(crate::round_half_away(p.x), crate::round_half_away(p.y))
    }
}
