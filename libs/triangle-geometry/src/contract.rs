//! The capability set every candidate triangle implementation provides.
//!
//! The conformance suite is generic over this trait, so adding an
//! implementation means implementing it and listing the type in the suite's
//! registry.

use std::fmt;

use crate::point::Point;
use crate::predicates::OrientationKernel;
use crate::triangle::KernelTriangle;

/// Construct, contains and equals.
///
/// Equality is the `PartialEq` supertrait and must ignore vertex order.
pub trait TriangleContract: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Name used in conformance reports.
    const NAME: &'static str;

    /// Builds a triangle from three points. Must accept any input.
    fn from_vertices(a: Point, b: Point, c: Point) -> Self;

    /// Vertices in construction order.
    fn vertices(&self) -> [Point; 3];

    /// Boundary-inclusive point containment.
    fn contains_point(&self, point: &Point) -> bool;

    /// Boundary-inclusive triangle containment.
    fn contains_triangle(&self, other: &Self) -> bool {
        other.vertices().iter().all(|v| self.contains_point(v))
    }

    /// Builds a triangle from raw coordinates.
    fn from_coords(ax: f64, ay: f64, bx: f64, by: f64, cx: f64, cy: f64) -> Self {
        Self::from_vertices(Point::new(ax, ay), Point::new(bx, by), Point::new(cx, cy))
    }

    /// The triangle collapsed onto a single point.
    fn point(p: Point) -> Self {
        Self::from_vertices(p, p, p)
    }
}

impl<K: OrientationKernel> TriangleContract for KernelTriangle<K> {
    const NAME: &'static str = K::NAME;

    fn from_vertices(a: Point, b: Point, c: Point) -> Self {
        KernelTriangle::new(a, b, c)
    }

    fn vertices(&self) -> [Point; 3] {
        KernelTriangle::vertices(self)
    }

    fn contains_point(&self, point: &Point) -> bool {
        KernelTriangle::contains_point(self, point)
    }
}
