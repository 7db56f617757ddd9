//! Error taxonomy for the scale engine.
//!
//! Nothing here is fatal to the process: an unknown maqam or a rejected root
//! frequency leaves the previous selection in place, and stale key events are
//! absorbed as log-level diagnostics rather than surfaced as errors.

use std::error::Error;
use std::fmt::{self, Display};

/// Errors reported by scale construction and engine parameter changes.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Requested maqam name is absent from the interval catalog. The caller
    /// keeps the previously selected scale active.
    UnknownScale(String),

    /// Root frequency must be strictly positive. The last valid root is
    /// retained.
    InvalidRootFrequency(f64),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::UnknownScale(name) => {
                write!(f, "maqam \"{}\" not found in interval catalog", name)
            }
            EngineError::InvalidRootFrequency(freq) => {
                write!(f, "root frequency must be positive, got {}", freq)
            }
        }
    }
}

impl Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = EngineError::UnknownScale("Foo".to_string());
        assert_eq!(err.to_string(), "maqam \"Foo\" not found in interval catalog");

        let err = EngineError::InvalidRootFrequency(-1.0);
        assert_eq!(err.to_string(), "root frequency must be positive, got -1");
    }
}
