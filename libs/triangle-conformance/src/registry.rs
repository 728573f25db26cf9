//! Implementations shipped with the workspace.
//!
//! The list is static: adding an implementation means adding its suite
//! entry point here.

use config::constants::GlobalConfig;
use rayon::prelude::*;
use triangle_geometry::{FastTriangle, Triangle};

use crate::report::ConformanceReport;
use crate::suite;

/// Suite entry point for one implementation.
pub type SuiteRunner = fn(&GlobalConfig) -> ConformanceReport;

/// Every registered implementation.
pub const IMPLEMENTATIONS: &[SuiteRunner] = &[
    suite::run_with::<Triangle>,
    suite::run_with::<FastTriangle>,
];

/// Runs the suite against every registered implementation in parallel.
///
/// Reports come back in registration order.
pub fn run_all(config: &GlobalConfig) -> Vec<ConformanceReport> {
    IMPLEMENTATIONS.par_iter().map(|run| run(config)).collect()
}
