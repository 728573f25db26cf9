//! Literal fixtures of the conformance battery.
//!
//! Triangles are written as `[ax, ay, bx, by, cx, cy]`. Each main triangle
//! has one companion per overlap category; the companion at index `i`
//! belongs to `MAIN_TRIANGLES[i]`.

use std::f64::consts::{E, PI};

use triangle_geometry::{Point, TriangleContract};

/// Raw coordinates of a triangle.
pub type Coords = [f64; 6];

/// Triangles the overlap companions are measured against.
pub static MAIN_TRIANGLES: [Coords; 3] = [
    [1.2, 2.3, 4.3, 5.1, 3.1, 10.0],
    [-1.0, 0.0, -1.0, -1.0, 0.0, 0.0],
    [-1.5, 0.0, 1.0, 1.5, 1.0, -0.5],
];

/// No corner inside the main triangle.
pub static NO_OVERLAP: [Coords; 3] = [
    [99.0, 100.0, 100.0, 101.0, 101.0, 102.0],
    [-1.0, 1.0, -1.0, 0.1, 0.0, 0.1],
    [-2.0, 0.0, 0.5, 1.5, -2.0, 2.0],
];

/// Exactly one corner inside the main triangle.
pub static ONE_OVERLAP: [Coords; 3] = [
    [3.0, 6.0, -10.0, -10.0, -12.0, -12.0],
    [-0.5, -0.25, -0.5, 2.0, 0.0, -1.0],
    [-1.0, 0.0, 0.0, -0.5, 0.0, 1.0],
];

/// Exactly two corners inside the main triangle.
pub static TWO_OVERLAP: [Coords; 3] = [
    [3.0, 6.0, 4.0, 6.0, -10.0, -10.0],
    [-0.5, -0.25, -0.5, -0.3, -1.5, -0.5],
    [-1.45, 0.0, 0.0, 0.0, -0.5, -0.4],
];

/// All three corners inside the main triangle.
pub static THREE_OVERLAP: [Coords; 3] = [
    [3.0, 5.0, 3.1, 5.0, 3.0, 5.1],
    [-0.5, -0.25, -0.5, -0.3, -0.75, -0.6],
    [-0.5, -0.1, 0.5, 0.5, 1.0, 1.5],
];

/// Overlapping the main triangle with no corner inside it.
pub static EDGES_ONLY_OVERLAP: [Coords; 3] = [
    [2.0, 2.0, 4.0, 4.0, 2.0, 8.0],
    [-1.5, 0.0, -1.0, 0.5, 0.0, -1.0],
    [-2.0, 0.0, 1.5, -1.0, 0.5, 1.5],
];

/// Contains [`VERY_SMALL`].
pub const VERY_LARGE: Coords = [-10000.0, -10000.0, 10000.0, -10000.0, 0.0, 20000.0];

/// Contained by [`VERY_LARGE`].
pub const VERY_SMALL: Coords = [-0.00001, -0.00001, 0.00001, -0.00001, 0.0, 0.00002];

/// Collinear vertices with the middle one listed last.
pub const SEGMENT: Coords = [0.0, 0.0, 2.0, 2.0, 1.0, 1.0];

/// Corners of a triangle with irrational-looking coordinates.
pub fn corner_case() -> [Point; 3] {
    [Point::new(E, E), Point::new(PI, E), Point::new(PI, PI)]
}

/// Builds an implementation's triangle from raw coordinates.
pub fn build<T: TriangleContract>(coords: &Coords) -> T {
    let [ax, ay, bx, by, cx, cy] = *coords;
    T::from_coords(ax, ay, bx, by, cx, cy)
}

/// Main triangles paired with the companions of one overlap category.
pub fn paired(
    companions: &'static [Coords; 3],
) -> impl Iterator<Item = (&'static Coords, &'static Coords)> {
    MAIN_TRIANGLES.iter().zip(companions.iter())
}
