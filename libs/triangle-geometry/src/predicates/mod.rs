//! Orientation kernels and the boundary-inclusive containment predicate.
//!
//! ## Algorithm
//!
//! For a triangle with non-zero signed area, a point is contained iff the
//! signed areas it forms with the three edges never take both a strictly
//! positive and a strictly negative value. Zero areas (the point on an edge's
//! line) count as contained, and the test does not depend on whether the
//! vertices are listed clockwise or counter-clockwise.
//!
//! A zero-area triangle is reduced to what it really is:
//!
//! ```text
//! a == b == c          -> point membership   (query == a)
//! collinear otherwise  -> segment membership (hull = lexicographic min..max)
//! ```
//!
//! Any non-finite coordinate, in the query or in a vertex, means not contained.
//! A query equal to one of the vertices is contained before any kernel runs.
//! Inputs with a coordinate above `1e150` in magnitude are scaled down by a
//! power of two so that signed areas cannot overflow to infinity or NaN.

use crate::point::Point;

/// Computes twice the signed area of `(a, b, c)`.
///
/// Positive when `a, b, c` turn counter-clockwise, negative when clockwise,
/// zero when collinear.
pub trait OrientationKernel: Copy + Default + Send + Sync + 'static {
    /// Short name used when reporting on implementations built on this kernel.
    const NAME: &'static str;

    /// Twice the signed area of the triangle `(a, b, c)`.
    fn orient(a: &Point, b: &Point, c: &Point) -> f64;
}

/// Adaptive exact kernel: the sign of every result is exact for finite input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exact;

impl OrientationKernel for Exact {
    const NAME: &'static str = "exact";

    fn orient(a: &Point, b: &Point, c: &Point) -> f64 {
        robust::orient2d(a.to_coord(), b.to_coord(), c.to_coord())
    }
}

/// Plain `f64` kernel. Rounding can flip or zero the sign for points within
/// an ulp or so of an edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fast;

impl OrientationKernel for Fast {
    const NAME: &'static str = "fast";

    fn orient(a: &Point, b: &Point, c: &Point) -> f64 {
        let a = a.to_vec2();
        (b.to_vec2() - a).perp_dot(c.to_vec2() - a)
    }
}

/// Turning direction of three points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Positive signed area.
    CounterClockwise,
    /// Negative signed area.
    Clockwise,
    /// Zero signed area (or undefined, for non-finite input).
    Collinear,
}

impl Orientation {
    /// Classifies the sign of a signed area.
    pub fn from_signed_area(area: f64) -> Self {
        if area > 0.0 {
            Orientation::CounterClockwise
        } else if area < 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }
}

/// Shape a triangle's vertex set actually spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degeneracy {
    /// Non-zero area.
    Proper,
    /// Collinear vertices, not all equal.
    Segment,
    /// All three vertices equal.
    Point,
}

/// Largest coordinate magnitude the kernels see unscaled.
///
/// Differences of such coordinates stay below `2^501` and their products
/// below `2^1002`, so no signed area can overflow.
const RESCALE_ABOVE: f64 = 1.0e150;

/// Scales every point by the same power of two so the largest coordinate
/// magnitude is at most 1.
///
/// Orientation signs and containment are invariant under scaling, and a
/// power-of-two factor is exact unless a coordinate drops into the subnormal
/// range. Inputs within [`RESCALE_ABOVE`], or holding a non-finite
/// coordinate, come back unchanged.
pub(crate) fn rescaled<const N: usize>(points: [Point; N]) -> [Point; N] {
    let largest = points
        .iter()
        .map(|p| p.x().abs().max(p.y().abs()))
        .fold(0.0, f64::max);
    if largest <= RESCALE_ABOVE || !largest.is_finite() {
        return points;
    }
    let factor = 2f64.powi(-(largest.log2().ceil() as i32));
    log::trace!("rescaling coordinates up to {largest:e} by {factor:e}");
    points.map(|p| Point::new(p.x() * factor, p.y() * factor))
}

/// Orientation of `(a, b, c)` under kernel `K`.
pub fn orientation<K: OrientationKernel>(a: &Point, b: &Point, c: &Point) -> Orientation {
    let [a, b, c] = rescaled([*a, *b, *c]);
    Orientation::from_signed_area(K::orient(&a, &b, &c))
}

/// Classifies the vertex set under kernel `K`.
///
/// Non-finite vertices classify as [`Degeneracy::Segment`] or
/// [`Degeneracy::Point`] only when the kernel happens to report a zero area;
/// containment never relies on this for such triangles.
pub fn degeneracy<K: OrientationKernel>(vertices: &[Point; 3]) -> Degeneracy {
    classify::<K>(&rescaled(*vertices))
}

fn classify<K: OrientationKernel>(vertices: &[Point; 3]) -> Degeneracy {
    let [a, b, c] = vertices;
    if K::orient(a, b, c) != 0.0 {
        Degeneracy::Proper
    } else if a == b && b == c {
        Degeneracy::Point
    } else {
        Degeneracy::Segment
    }
}

/// Boundary-inclusive point-in-triangle test under kernel `K`.
///
/// A vertex is always contained, whatever the kernel decides about
/// collinearity. Coordinates large enough to overflow a signed area are
/// rescaled first; a kernel that still reports a NaN area answers "not
/// contained".
pub fn contains_point<K: OrientationKernel>(vertices: &[Point; 3], point: &Point) -> bool {
    if !point.is_finite() || !vertices.iter().all(Point::is_finite) {
        log::debug!("non-finite coordinate in containment query for {point}; not contained");
        return false;
    }
    if vertices.contains(point) {
        return true;
    }

    let [a, b, c, point] = rescaled([vertices[0], vertices[1], vertices[2], *point]);
    let vertices = [a, b, c];
    match classify::<K>(&vertices) {
        Degeneracy::Proper => {
            let areas = [
                K::orient(&a, &b, &point),
                K::orient(&b, &c, &point),
                K::orient(&c, &a, &point),
            ];
            if areas.iter().any(|area| area.is_nan()) {
                log::debug!("{} kernel gave a NaN area for {point}; not contained", K::NAME);
                return false;
            }
            let has_negative = areas.iter().any(|&area| area < 0.0);
            let has_positive = areas.iter().any(|&area| area > 0.0);
            !(has_negative && has_positive)
        }
        // Every vertex equals `a` and `point` is none of them.
        Degeneracy::Point => false,
        Degeneracy::Segment => {
            let (start, end) = hull_segment(&vertices);
            log::trace!("triangle collapses to segment {start}-{end}; testing segment membership");
            segment_contains::<K>(&start, &end, &point)
        }
    }
}

/// Endpoints of the segment spanned by three collinear points.
///
/// Along a line, the lexicographic order of points is their order along the
/// line, so the extremes are the lexicographic minimum and maximum.
pub(crate) fn hull_segment(vertices: &[Point; 3]) -> (Point, Point) {
    let mut start = vertices[0];
    let mut end = vertices[0];
    for v in &vertices[1..] {
        if v.lex_lt(&start) {
            start = *v;
        }
        if end.lex_lt(v) {
            end = *v;
        }
    }
    (start, end)
}

/// Boundary-inclusive membership of `point` in the segment `start..end`.
pub(crate) fn segment_contains<K: OrientationKernel>(
    start: &Point,
    end: &Point,
    point: &Point,
) -> bool {
    K::orient(start, end, point) == 0.0
        && within(start.x(), end.x(), point.x())
        && within(start.y(), end.y(), point.y())
}

fn within(bound_a: f64, bound_b: f64, value: f64) -> bool {
    bound_a.min(bound_b) <= value && value <= bound_a.max(bound_b)
}

#[cfg(test)]
mod tests;
