//! # Error Types
//!
//! Every geometry operation is total, so the only failures come from the
//! checked constructors that refuse non-finite coordinates up front.

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised by the checked constructors.
///
/// ## Example
///
/// ```rust
/// use triangle_geometry::{GeometryError, Point};
///
/// match Point::try_new(f64::NAN, 1.0) {
///     Ok(p) => println!("valid point {p}"),
///     Err(GeometryError::NonFiniteCoordinate { x, y }) => eprintln!("rejected ({x}, {y})"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A coordinate was NaN or infinite.
    #[error("Non-finite coordinate: ({x}, {y})")]
    NonFiniteCoordinate {
        /// Offending x coordinate
        x: f64,
        /// Offending y coordinate
        y: f64,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for checked geometry construction.
pub type GeometryResult<T> = Result<T, GeometryError>;

// =============================================================================
// TESTS
// =============================================================================
