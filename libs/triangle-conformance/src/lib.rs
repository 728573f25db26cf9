//! Conformance battery for triangle implementations.
//!
//! Every implementation of [`TriangleContract`] must give identical answers
//! on a fixed set of boundary, degeneracy and overlap scenarios. The suite
//! is generic, so running it against a new implementation is one call:
//!
//! ```rust
//! use triangle_conformance::suite;
//! use triangle_geometry::Triangle;
//!
//! let report = suite::run::<Triangle>();
//! assert!(report.is_conformant(), "{:?}", report.failures);
//! ```
//!
//! [`registry::run_all`] runs the suite over every implementation shipped
//! with the workspace.

pub mod error;
pub mod registry;
pub mod report;
pub mod scenarios;
pub mod suite;

pub use error::{ConformanceError, ConformanceResult};
pub use report::ConformanceReport;
pub use suite::Check;
pub use triangle_geometry::TriangleContract;
