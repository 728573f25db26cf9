//! Containment predicates for 2D triangles.
//!
//! A [`Triangle`] is any three [`Point`]s, collinear and coincident ones
//! included. Containment is boundary inclusive: edges and vertices belong to
//! the triangle, a collinear triangle behaves as the segment spanning its
//! vertices and a triangle of three equal points contains exactly that point.
//!
//! ```rust
//! use triangle_geometry::{Point, Triangle};
//!
//! let t = Triangle::from_coords(0.0, 0.0, 4.0, 0.0, 0.0, 4.0);
//! assert!(t.contains_point(&Point::new(2.0, 2.0))); // on the hypotenuse
//! assert!(!t.contains_point(&Point::new(2.0, 2.5)));
//!
//! let corner = Triangle::new(t.a(), t.a(), t.a());
//! assert!(t.contains_triangle(&corner));
//! ```
//!
//! Two kernels compute the signed areas the predicate relies on:
//! [`Triangle`] uses the adaptive exact `orient2d` of the `robust` crate,
//! [`FastTriangle`] uses plain `f64` arithmetic.

pub mod contract;
pub mod error;
pub mod point;
pub mod predicates;
pub mod triangle;

pub use contract::TriangleContract;
pub use error::{GeometryError, GeometryResult};
pub use point::Point;
pub use predicates::{Degeneracy, Exact, Fast, Orientation, OrientationKernel};
pub use triangle::{FastTriangle, KernelTriangle, Triangle};
