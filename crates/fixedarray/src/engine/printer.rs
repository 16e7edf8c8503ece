//! Line-per-element output for integer sequences.
//!
//! ## Purpose
//!
//! This module implements the print pass: emit each of the first `count`
//! elements of a sequence, one decimal integer per line, in index order.
//!
//! ## Design notes
//!
//! * **Validate first**: The count is checked against the real slice length
//!   before anything is written, so a rejected request produces no output.
//! * **Sink-agnostic**: The pass writes to any `core::fmt::Write`; with `std`
//!   it also writes to any `std::io::Write`, including standard output.
//! * **No recomputed length**: When no count is configured the slice length
//!   is used; the bound is never derived from the size of a reference.
//!
//! ## Invariants
//!
//! * Exactly `count` lines are written on success, line `i` holding `elements[i]`.
//! * A count of zero writes nothing.
//!
//! ## Non-goals
//!
//! * This module does not format with padding, separators other than newlines,
//!   or radixes other than decimal.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
#[cfg(feature = "std")]
use std::io;
#[cfg(feature = "std")]
use std::string::{String, ToString};

// External dependencies
use core::fmt::{self, Display};
use num_traits::{PrimInt, Signed};
use tracing::{debug, trace};

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::ArrayError;

// ============================================================================
// Printer
// ============================================================================

/// Emits the leading elements of a sequence, one per line.
///
/// Built through [`ArrayPrinterBuilder`](crate::api::ArrayPrinterBuilder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArrayPrinter {
    /// Number of elements to emit; `None` prints the whole sequence.
    pub(crate) count: Option<usize>,
}

impl ArrayPrinter {
    /// The configured element count, if any.
    pub fn count(&self) -> Option<usize> {
        self.count
    }

    /// Resolve and validate the iteration bound for a buffer of length `len`.
    fn resolve_count(&self, len: usize) -> Result<usize, ArrayError> {
        let count = self.count.unwrap_or(len);
        Validator::validate_count(count, len)?;
        Ok(count)
    }

    /// Write the leading elements to a formatter sink.
    ///
    /// Returns the number of lines written.
    pub fn write_to<T, W>(&self, sink: &mut W, elements: &[T]) -> Result<usize, ArrayError>
    where
        T: PrimInt + Signed + Display,
        W: fmt::Write,
    {
        let count = self.resolve_count(elements.len())?;
        debug!(count, len = elements.len(), "printing elements");

        for (i, value) in elements[..count].iter().enumerate() {
            trace!(index = i, "emit");
            writeln!(sink, "{value}").map_err(|e| ArrayError::Write(e.to_string()))?;
        }

        Ok(count)
    }

    /// Render the leading elements into a newly allocated string.
    pub fn render<T>(&self, elements: &[T]) -> Result<String, ArrayError>
    where
        T: PrimInt + Signed + Display,
    {
        let mut out = String::new();
        self.write_to(&mut out, elements)?;
        Ok(out)
    }

    /// Write the leading elements to an I/O sink and flush it.
    #[cfg(feature = "std")]
    pub fn print_to<T, W>(&self, sink: &mut W, elements: &[T]) -> Result<usize, ArrayError>
    where
        T: PrimInt + Signed + Display,
        W: io::Write,
    {
        let count = self.resolve_count(elements.len())?;
        debug!(count, len = elements.len(), "printing elements");

        for (i, value) in elements[..count].iter().enumerate() {
            trace!(index = i, "emit");
            writeln!(sink, "{value}").map_err(|e| ArrayError::Write(e.to_string()))?;
        }
        sink.flush().map_err(|e| ArrayError::Write(e.to_string()))?;

        Ok(count)
    }

    /// Write the leading elements to standard output.
    #[cfg(feature = "std")]
    pub fn print_stdout<T>(&self, elements: &[T]) -> Result<usize, ArrayError>
    where
        T: PrimInt + Signed + Display,
    {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.print_to(&mut lock, elements)
    }
}
