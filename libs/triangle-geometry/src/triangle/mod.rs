//! Immutable triangle over a pluggable orientation kernel.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::error::GeometryResult;
use crate::point::Point;
use crate::predicates::{self, Degeneracy, Exact, Fast, Orientation, OrientationKernel};

/// Triangle whose containment answers are exact for all finite input.
pub type Triangle = KernelTriangle<Exact>;

/// Triangle using plain `f64` signed areas.
pub type FastTriangle = KernelTriangle<Fast>;

/// Every ordering of three vertices.
const PERMUTATIONS: [[usize; 3]; 6] = [
    [0, 1, 2],
    [0, 2, 1],
    [1, 0, 2],
    [1, 2, 0],
    [2, 0, 1],
    [2, 1, 0],
];

/// Three points in the plane, in the order given, possibly collinear or
/// coincident.
///
/// Construction never fails and never reorders the vertices. Equality
/// ignores vertex order: two triangles are equal when one's vertices are a
/// permutation of the other's.
///
/// # Examples
/// ```
/// use triangle_geometry::{Point, Triangle};
///
/// let (a, b, c) = (Point::new(1.2, 2.3), Point::new(4.3, 5.1), Point::new(3.1, 10.0));
/// let t = Triangle::new(a, b, c);
/// assert_eq!(t, Triangle::new(c, b, a));
/// assert!(t.contains_triangle(&Triangle::new(c, b, a)));
/// ```
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct KernelTriangle<K: OrientationKernel> {
    a: Point,
    b: Point,
    c: Point,
    #[serde(skip)]
    kernel: PhantomData<K>,
}

impl<K: OrientationKernel> KernelTriangle<K> {
    /// Creates a triangle from three points. Always succeeds.
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self {
            a,
            b,
            c,
            kernel: PhantomData,
        }
    }

    /// Creates a triangle, rejecting vertices with non-finite coordinates.
    ///
    /// # Examples
    /// ```
    /// use triangle_geometry::{Point, Triangle};
    /// let origin = Point::new(0.0, 0.0);
    /// assert!(Triangle::try_new(origin, origin, Point::new(f64::NAN, 1.0)).is_err());
    /// ```
    pub fn try_new(a: Point, b: Point, c: Point) -> GeometryResult<Self> {
        let a = Point::try_new(a.x(), a.y())?;
        let b = Point::try_new(b.x(), b.y())?;
        let c = Point::try_new(c.x(), c.y())?;
        Ok(Self::new(a, b, c))
    }

    /// Creates a triangle from raw coordinates.
    pub fn from_coords(ax: f64, ay: f64, bx: f64, by: f64, cx: f64, cy: f64) -> Self {
        Self::new(Point::new(ax, ay), Point::new(bx, by), Point::new(cx, cy))
    }

    /// First vertex as given at construction.
    pub fn a(&self) -> Point {
        self.a
    }

    /// Second vertex as given at construction.
    pub fn b(&self) -> Point {
        self.b
    }

    /// Third vertex as given at construction.
    pub fn c(&self) -> Point {
        self.c
    }

    /// Vertices in construction order.
    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// True iff `point` lies inside the triangle or on its boundary.
    ///
    /// Degenerate triangles answer for the segment or point they collapse
    /// to. Any non-finite coordinate yields `false`.
    pub fn contains_point(&self, point: &Point) -> bool {
        predicates::contains_point::<K>(&self.vertices(), point)
    }

    /// True iff the whole of `other` lies inside this triangle or on its
    /// boundary.
    ///
    /// Both shapes are convex, so containing the three corners of `other`
    /// means containing their convex hull, which is `other` itself.
    pub fn contains_triangle(&self, other: &Self) -> bool {
        other.vertices().iter().all(|v| self.contains_point(v))
    }

    /// Signed area, positive when the vertices are listed counter-clockwise.
    pub fn signed_area(&self) -> f64 {
        K::orient(&self.a, &self.b, &self.c) / 2.0
    }

    /// Unsigned area.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Turning direction of the vertices in construction order.
    pub fn orientation(&self) -> Orientation {
        predicates::orientation::<K>(&self.a, &self.b, &self.c)
    }

    /// Whether the triangle spans an area, a segment or a single point.
    pub fn degeneracy(&self) -> Degeneracy {
        predicates::degeneracy::<K>(&self.vertices())
    }

    /// True for zero-area triangles.
    pub fn is_degenerate(&self) -> bool {
        self.degeneracy() != Degeneracy::Proper
    }
}

impl<K: OrientationKernel> PartialEq for KernelTriangle<K> {
    fn eq(&self, other: &Self) -> bool {
        let ours = self.vertices();
        let theirs = other.vertices();
        PERMUTATIONS
            .iter()
            .any(|perm| perm.iter().zip(&ours).all(|(&i, v)| theirs[i] == *v))
    }
}

impl<K: OrientationKernel> fmt::Debug for KernelTriangle<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Triangle")
            .field("kernel", &K::NAME)
            .field("a", &self.a)
            .field("b", &self.b)
            .field("c", &self.c)
            .finish()
    }
}

impl<K: OrientationKernel> fmt::Display for KernelTriangle<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.a, self.b, self.c)
    }
}

impl<K: OrientationKernel> From<[Point; 3]> for KernelTriangle<K> {
    fn from([a, b, c]: [Point; 3]) -> Self {
        Self::new(a, b, c)
    }
}
