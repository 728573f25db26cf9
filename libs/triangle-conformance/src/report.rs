//! Outcome of running the suite against one implementation.

use serde::Serialize;

use crate::error::{ConformanceError, ConformanceResult};
use crate::suite::Check;

/// Passed checks and violations for one implementation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConformanceReport {
    /// Implementation name, from `TriangleContract::NAME`.
    pub implementation: &'static str,
    /// Checks that found no violation.
    pub passed: Vec<Check>,
    /// First violation of every failed check.
    pub failures: Vec<ConformanceError>,
}

impl ConformanceReport {
    /// Empty report for `implementation`.
    pub fn new(implementation: &'static str) -> Self {
        Self {
            implementation,
            passed: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub(crate) fn record_pass(&mut self, check: Check) {
        self.passed.push(check);
    }

    pub(crate) fn record_failure(&mut self, failure: ConformanceError) {
        self.failures.push(failure);
    }

    /// True when every check passed.
    pub fn is_conformant(&self) -> bool {
        self.failures.is_empty()
    }

    /// Converts the report into an error when any check failed.
    ///
    /// # Examples
    /// ```
    /// use triangle_conformance::suite;
    /// use triangle_geometry::FastTriangle;
    ///
    /// suite::run::<FastTriangle>().ensure_conformant().unwrap();
    /// ```
    pub fn ensure_conformant(&self) -> ConformanceResult<()> {
        if self.is_conformant() {
            Ok(())
        } else {
            Err(ConformanceError::NotConformant {
                implementation: self.implementation.to_string(),
                failures: self.failures.len(),
            })
        }
    }
}
