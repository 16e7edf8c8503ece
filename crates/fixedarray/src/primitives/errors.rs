//! Error types for fixed array operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while building a
//! printer, accessing a fixed array, or emitting elements to a sink.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (e.g., requested count vs. real length).
//! * **Early**: Count violations are reported before any element is written.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Invariants
//!
//! * A caller-supplied count never silently exceeds the buffer it describes.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for fixed array operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// The requested element count is larger than the buffer it refers to.
    CountExceedsLength {
        /// Number of elements the caller asked for.
        count: usize,
        /// Number of elements actually present.
        len: usize,
    },

    /// An element index lies outside the array.
    IndexOutOfBounds {
        /// The index provided.
        index: usize,
        /// Length of the array.
        len: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// The output sink rejected a write.
    Write(String),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ArrayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::CountExceedsLength { count, len } => {
                write!(f, "Count exceeds buffer length: count {count}, length {len}")
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "Index out of bounds: index {index}, length {len}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::Write(msg) => write!(f, "Write failed: {msg}"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ArrayError {}
