//! Immutable 2D point.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, GeometryResult};

/// A point in the plane.
///
/// Coordinates are stored exactly as given. Equality is IEEE `==` on both
/// coordinates with no tolerance, so `0.0` equals `-0.0` and a point with a
/// NaN coordinate equals nothing, itself included.
///
/// # Examples
/// ```
/// use triangle_geometry::Point;
///
/// let p = Point::new(1.2, 2.3);
/// assert_eq!(p, Point::new(1.2, 2.3));
/// assert_ne!(p, Point::new(1.2, 2.3 + 1e-15));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point. Never fails, any `f64` is accepted.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a point, rejecting NaN and infinite coordinates.
    ///
    /// # Examples
    /// ```
    /// use triangle_geometry::Point;
    /// assert!(Point::try_new(1.0, 2.0).is_ok());
    /// assert!(Point::try_new(f64::NEG_INFINITY, 2.0).is_err());
    /// ```
    pub fn try_new(x: f64, y: f64) -> GeometryResult<Self> {
        let point = Self::new(x, y);
        if point.is_finite() {
            Ok(point)
        } else {
            Err(GeometryError::NonFiniteCoordinate { x, y })
        }
    }

    /// The x coordinate.
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y coordinate.
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// True when neither coordinate is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// The point as a `glam` vector.
    pub fn to_vec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub(crate) fn to_coord(self) -> robust::Coord<f64> {
        robust::Coord {
            x: self.x,
            y: self.y,
        }
    }

    /// Strict lexicographic order: by x, then by y.
    pub(crate) fn lex_lt(&self, other: &Point) -> bool {
        self.x < other.x || (self.x == other.x && self.y < other.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
