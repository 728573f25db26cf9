//! # Error Types
//!
//! A conformance failure records which check failed, the shapes involved
//! (rendered with `Debug`) and the expected and observed answers.

use serde::Serialize;
use thiserror::Error;

use crate::suite::Check;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// A contract violation observed by the suite.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConformanceError {
    /// A point containment query gave the wrong answer.
    #[error("{check}: {triangle} contains {point} should be {expected}, got {actual}")]
    PointContainment {
        /// Check that issued the query
        check: Check,
        /// Queried triangle
        triangle: String,
        /// Query point
        point: String,
        /// Contracted answer
        expected: bool,
        /// Observed answer
        actual: bool,
    },

    /// A triangle containment query gave the wrong answer.
    #[error("{check}: {container} contains {contained} should be {expected}, got {actual}")]
    TriangleContainment {
        /// Check that issued the query
        check: Check,
        /// Containing triangle
        container: String,
        /// Contained triangle
        contained: String,
        /// Contracted answer
        expected: bool,
        /// Observed answer
        actual: bool,
    },

    /// Equality gave the wrong answer.
    #[error("{check}: {left} == {right} should be {expected}, got {actual}")]
    Equality {
        /// Check that compared the triangles
        check: Check,
        /// Left operand
        left: String,
        /// Right operand
        right: String,
        /// Contracted answer
        expected: bool,
        /// Observed answer
        actual: bool,
    },

    /// The wrong number of corners of a test triangle was contained.
    #[error("{check}: {main} should contain {expected} corners of {test}, contains {actual}")]
    CornerCount {
        /// Overlap category being checked
        check: Check,
        /// Containing triangle
        main: String,
        /// Triangle whose corners were tested
        test: String,
        /// Contracted count
        expected: usize,
        /// Observed count
        actual: usize,
    },

    /// Repeating an identical query changed the answer.
    #[error("{check}: repeated query on {subject} changed its answer at repetition {repetition}")]
    Unstable {
        /// Check that repeated the query
        check: Check,
        /// Shape or pair queried
        subject: String,
        /// Zero-based repetition at which the answer changed
        repetition: usize,
    },

    /// An implementation failed one or more checks.
    #[error("{implementation} failed {failures} conformance check(s)")]
    NotConformant {
        /// Implementation name
        implementation: String,
        /// Number of failed checks
        failures: usize,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for conformance checks.
pub type ConformanceResult<T> = Result<T, ConformanceError>;

// =============================================================================
// TESTS
// =============================================================================
