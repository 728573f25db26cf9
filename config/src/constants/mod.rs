//! Centralized configuration values shared by the conformance suite and the
//! property tests of every triangle implementation.
//!
//! Each public item documents its purpose and provides a minimal usage
//! example so that downstream crates avoid scattering literals.

use std::fmt;

/// Largest absolute coordinate produced when generating random points.
///
/// Matches the extent of the very large triangle in the scenario battery so
/// generated cases stay within the magnitudes the suite already exercises.
///
/// # Examples
/// ```
/// use config::constants::COORDINATE_BOUND;
/// assert!(COORDINATE_BOUND >= 1.0);
/// ```
pub const COORDINATE_BOUND: f64 = 1.0e4;

/// Number of cases each property test runs.
///
/// # Examples
/// ```
/// use config::constants::PROPERTY_CASES;
/// assert!(PROPERTY_CASES >= 64);
/// ```
pub const PROPERTY_CASES: u32 = 256;

/// How many times the purity check repeats an identical query.
///
/// # Examples
/// ```
/// use config::constants::IDEMPOTENCE_REPETITIONS;
/// assert!(IDEMPOTENCE_REPETITIONS >= 2);
/// ```
pub const IDEMPOTENCE_REPETITIONS: usize = 4;

/// Immutable snapshot of harness settings that can be shared between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.coordinate_bound > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Largest absolute coordinate of generated points.
    pub coordinate_bound: f64,
    /// Number of cases per property test.
    pub property_cases: u32,
    /// Number of repetitions of the purity check.
    pub repetitions: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of every field.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(100.0, 32, 2).expect("valid config");
    /// assert_eq!(cfg.property_cases, 32);
    /// ```
    pub fn new(
        coordinate_bound: f64,
        property_cases: u32,
        repetitions: usize,
    ) -> Result<Self, ConfigError> {
        if !coordinate_bound.is_finite() || coordinate_bound <= 0.0 {
            return Err(ConfigError::InvalidCoordinateBound(coordinate_bound));
        }
        if property_cases == 0 {
            return Err(ConfigError::InvalidPropertyCases(property_cases));
        }
        if repetitions < 2 {
            return Err(ConfigError::InvalidRepetitions(repetitions));
        }
        Ok(Self {
            coordinate_bound,
            property_cases,
            repetitions,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            coordinate_bound: COORDINATE_BOUND,
            property_cases: PROPERTY_CASES,
            repetitions: IDEMPOTENCE_REPETITIONS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the coordinate bound is zero, negative or not finite.
    InvalidCoordinateBound(f64),
    /// Raised when no property cases would run.
    InvalidPropertyCases(u32),
    /// Raised when the purity check would not repeat a query.
    InvalidRepetitions(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidCoordinateBound(value) => {
                write!(f, "coordinate_bound must be positive and finite: {value}")
            }
            ConfigError::InvalidPropertyCases(value) => {
                write!(f, "property_cases must be >= 1: {value}")
            }
            ConfigError::InvalidRepetitions(value) => {
                write!(f, "repetitions must be >= 2: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
