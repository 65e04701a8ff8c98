// ============================================================================
// Errors
// Error types for the fallible boundary conversions
// ============================================================================

use std::fmt;

/// Errors reported by the boundary conversions (`from_decimal`, `FromStr`).
///
/// Core arithmetic never returns these: bit patterns wrap on overflow and
/// division by zero panics, mirroring the plain integer types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedError {
    /// Value does not fit the storage width
    Overflow,
    /// Input string or value is invalid
    InvalidInput,
}

impl fmt::Display for FixedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixedError::Overflow => {
                write!(f, "overflow: value does not fit the storage width")
            },
            FixedError::InvalidInput => write!(f, "invalid input: could not parse value"),
        }
    }
}

impl std::error::Error for FixedError {}

/// Result type alias for boundary conversions
pub type FixedResult<T> = Result<T, FixedError>;
