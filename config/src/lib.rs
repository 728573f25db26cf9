//! # Config Crate
//!
//! Centralized configuration constants for the triangle conformance harness.
//! Bounds for generated coordinates, property-test case counts and the
//! repetition count of the purity check are defined here so the suite and
//! its property tests agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GlobalConfig, COORDINATE_BOUND, PROPERTY_CASES};
//!
//! let cfg = GlobalConfig::default();
//! assert_eq!(cfg.coordinate_bound, COORDINATE_BOUND);
//! assert_eq!(cfg.property_cases, PROPERTY_CASES);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Tolerances**: Containment and equality are exact; nothing here is an epsilon
//! - **Validated**: `GlobalConfig::new` refuses values the harness cannot use

pub mod constants;
