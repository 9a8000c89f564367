//! Interval checks backing every settings constructor.
//!
//! All configuration enters the system through constructors that validate
//! each parameter against a declared interval and refuse to build the value
//! otherwise.  Nothing downstream ever re-checks a range.

use std::fmt;

use thiserror::Error;

/// An interval on the real line with independently open or closed endpoints.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    min:          f32,
    max:          f32,
    closed_left:  bool,
    closed_right: bool,
}

impl Bounds {
    /// `(min, max)` — both endpoints excluded.
    pub fn open(min: f32, max: f32) -> Self {
        Bounds { min, max, closed_left: false, closed_right: false }
    }

    /// `[min, max]` — both endpoints included.
    pub fn closed(min: f32, max: f32) -> Self {
        Bounds { min, max, closed_left: true, closed_right: true }
    }

    /// `[min, max)`.
    pub fn closed_left(min: f32, max: f32) -> Self {
        Bounds { min, max, closed_left: true, closed_right: false }
    }

    /// `(min, max]`.
    pub fn closed_right(min: f32, max: f32) -> Self {
        Bounds { min, max, closed_left: false, closed_right: true }
    }

    /// `(min, ∞)` — any finite value strictly above `min`.
    pub fn above(min: f32) -> Self {
        Bounds::open(min, f32::INFINITY)
    }

    pub fn contains(&self, value: f32) -> bool {
        let left_ok = if self.closed_left { value >= self.min } else { value > self.min };
        let right_ok = if self.closed_right { value <= self.max } else { value < self.max };
        left_ok && right_ok
    }

    /// Validate `value`, returning it unchanged on success.
    pub fn check(self, name: &'static str, value: f32) -> Result<f32, RangeError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(RangeError { name, bounds: self, value })
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let l = if self.closed_left { '[' } else { '(' };
        let r = if self.closed_right { ']' } else { ')' };
        write!(f, "{l}{}, {}{r}", self.min, self.max)
    }
}

/// A configuration parameter fell outside its declared interval.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{name} must be in range {bounds} but got {value}")]
pub struct RangeError {
    pub name:   &'static str,
    pub bounds: Bounds,
    pub value:  f32,
}
