//! Error types for ssemu operations.
//!
//! The emulated instructions themselves never fail: exceptional arithmetic
//! produces IEEE-754 infinities and NaNs, and precondition violations are
//! documented rather than detected. Errors only surface from the checked
//! memory helpers and from configuration parsing.

use std::fmt;

/// Errors that can occur during ssemu operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SsemuError {
    /// A memory region did not satisfy the alignment an instruction requires.
    AlignmentError {
        /// The address that was provided.
        address: usize,
        /// The alignment that was required, in bytes.
        required_alignment: usize,
    },
    /// A memory region was too short for the transfer.
    LengthError {
        /// The number of elements the transfer needs.
        required: usize,
        /// The number of elements that were available.
        available: usize,
    },
    /// A configuration value could not be parsed.
    ConfigError {
        /// The configuration key.
        key: String,
        /// The rejected value.
        value: String,
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for SsemuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SsemuError::AlignmentError {
                address,
                required_alignment,
            } => write!(
                f,
                "Misaligned address: {:#x} is not aligned to {} bytes",
                address, required_alignment
            ),
            SsemuError::LengthError {
                required,
                available,
            } => write!(
                f,
                "Region too short: {} elements required, {} available",
                required, available
            ),
            SsemuError::ConfigError {
                key,
                value,
                message,
            } => write!(f, "Invalid configuration {}={:?}: {}", key, value, message),
        }
    }
}

impl std::error::Error for SsemuError {}

/// Result type alias for ssemu operations.
pub type Result<T> = std::result::Result<T, SsemuError>;

/// Creates an alignment error.
pub fn alignment_error(address: usize, required_alignment: usize) -> SsemuError {
    SsemuError::AlignmentError {
        address,
        required_alignment,
    }
}

/// Creates a length error.
pub fn length_error(required: usize, available: usize) -> SsemuError {
    SsemuError::LengthError {
        required,
        available,
    }
}

/// Creates a configuration error.
pub fn config_error(
    key: impl Into<String>,
    value: impl Into<String>,
    message: impl Into<String>,
) -> SsemuError {
    SsemuError::ConfigError {
        key: key.into(),
        value: value.into(),
        message: message.into(),
    }
}
