//! Precondition checks for printing and building.
//!
//! ## Purpose
//!
//! This module checks caller-supplied counts against the buffer they describe
//! and verifies builder configuration before a printer is handed out.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Side-effect free**: Nothing is read from the buffer except its length.
//!
//! ## Key concepts
//!
//! * **Explicit bound**: The iteration bound is always a count the caller
//!   supplied and this module accepted, never a size recomputed from a
//!   reference.
//!
//! ## Non-goals
//!
//! * This module does not clamp or otherwise correct an invalid count.

// External dependencies
use tracing::warn;

// Internal dependencies
use crate::primitives::errors::ArrayError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for print requests and builder configuration.
///
/// All methods return `Result<(), ArrayError>` and fail fast upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    /// Validate that `count` elements can be read from a buffer of length `len`.
    pub fn validate_count(count: usize, len: usize) -> Result<(), ArrayError> {
        if count > len {
            warn!(count, len, "rejected count larger than buffer");
            return Err(ArrayError::CountExceedsLength { count, len });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), ArrayError> {
        if let Some(param) = duplicate_param {
            return Err(ArrayError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
