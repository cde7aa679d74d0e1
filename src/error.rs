// src/error.rs
// Error type shared by the fallible corners of the math kernel.

/// Errors produced by lookups, conversions and configuration parsing.
///
/// Numeric operations themselves never fail: they follow IEEE-754 and only
/// assert their preconditions in debug builds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumericsError {
    #[error("No prime in the growth table is larger than {value}")]
    PrimeTableExhausted { value: u32 },

    #[error("Axis index {axis} out of range for a {count}-component vector")]
    AxisOutOfRange { axis: usize, count: usize },

    #[error("Slice length mismatch: expected {expected}, got {actual}")]
    SliceLength { expected: usize, actual: usize },

    #[error("Invalid value '{value}' for parameter '{name}': {reason}")]
    InvalidParameter {
        name: String,
        value: String,
        reason: String,
    },

    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),
}

pub type Result<T> = std::result::Result<T, NumericsError>;
