//! Planar vector type and heading helpers used by the flight physics.
//!
//! `Vec2` uses `f32` components.  Distances in this simulation stay within a
//! few kilometres of the origin, so single precision keeps every value well
//! inside the exactly-representable range while halving state size vs. `f64`.

use std::ops::{Add, Mul, Neg, Sub};

/// A 2-D cartesian point/vector in metres, origin at the airport centre.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }

    /// Unit vector pointing along `angle` radians (counter-clockwise from +x).
    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        Vec2 { x: angle.cos(), y: angle.sin() }
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    /// Squared distance — cheaper than [`distance`][Self::distance] when only
    /// ordering matters (route ranking).
    #[inline]
    pub fn distance_squared(self, other: Vec2) -> f32 {
        (other - self).length_squared()
    }

    /// Heading in radians from `self` toward `other`.
    #[inline]
    pub fn angle_to(self, other: Vec2) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Heading in radians from `self` toward the origin.
    #[inline]
    pub fn angle_to_origin(self) -> f32 {
        (-self.y).atan2(-self.x)
    }

    /// `true` when `other` lies within `range` metres of `self` (inclusive).
    #[inline]
    pub fn in_range(self, other: Vec2, range: f32) -> bool {
        self.distance(other) <= range
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
