use std::fmt;

use crate::model::CurveKey;

/// Errors related to degradation curve lookups
#[derive(Debug, Clone, PartialEq)]
pub enum LookupError {
    /// The provider has no curve for this key
    MissingCurve(CurveKey),
    /// The curve exists but has no samples for the requested month
    MissingMonth { key: CurveKey, month: u32 },
    /// The curve data cannot be interpolated
    MalformedCurve { key: CurveKey, reason: &'static str },
}

impl LookupError {
    /// The key of the curve that failed
    pub fn key(&self) -> &CurveKey {
        match self {
            LookupError::MissingCurve(key)
            | LookupError::MissingMonth { key, .. }
            | LookupError::MalformedCurve { key, .. } => key,
        }
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::MissingCurve(key) => write!(f, "no curve data for {key}"),
            LookupError::MissingMonth { key, month } => {
                write!(f, "curve {key} has no samples for month {month}")
            }
            LookupError::MalformedCurve { key, reason } => {
                write!(f, "curve {key} is malformed: {reason}")
            }
        }
    }
}

impl std::error::Error for LookupError {}

/// Errors related to degenerate configuration, raised before any simulation
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A parameter is outside its valid range
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// A maintenance interval is zero or not covered by the curve months
    InvalidInterval {
        name: &'static str,
        value: u32,
        max: u32,
    },
    /// An optimization search space has no points
    EmptySearchSpace,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidParameter {
                name,
                value,
                reason,
            } => write!(f, "invalid {name} ({value}): {reason}"),
            ConfigError::InvalidInterval { name, value, max } => {
                write!(f, "invalid {name} ({value}): must be in 1..={max}")
            }
            ConfigError::EmptySearchSpace => write!(f, "search space has no strategies"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors returned by the simulation entry points
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    Config(ConfigError),
    Lookup(LookupError),
    /// An internal invariant did not hold (a bug, not an input problem)
    Invariant(&'static str),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Config(e) => write!(f, "configuration error: {e}"),
            SimulationError::Lookup(e) => write!(f, "{e}"),
            SimulationError::Invariant(msg) => write!(f, "internal invariant violated: {msg}"),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Config(e) => Some(e),
            SimulationError::Lookup(e) => Some(e),
            SimulationError::Invariant(_) => None,
        }
    }
}

impl From<ConfigError> for SimulationError {
    fn from(err: ConfigError) -> Self {
        SimulationError::Config(err)
    }
}

impl From<LookupError> for SimulationError {
    fn from(err: LookupError) -> Self {
        SimulationError::Lookup(err)
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;
