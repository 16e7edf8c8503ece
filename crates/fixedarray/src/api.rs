//! High-level API for printing fixed arrays.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: a fluent builder for
//! configuring an [`ArrayPrinter`], and the `print`/`print_all` shortcuts that
//! write to standard output.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder; an unset count prints the whole sequence.
//! * **Validated**: Builder configuration is checked when `.build()` is called,
//!   and the count is checked again against each buffer at print time.
//!
//! ### Configuration Flow
//!
//! 1. Create an [`ArrayPrinterBuilder`] via `Printer::new()` in the prelude.
//! 2. Optionally chain `.count(n)`.
//! 3. Call `.build()` and hand the printer a slice or a [`FixedArray`].

// Feature-gated imports
#[cfg(feature = "std")]
use core::fmt::Display;
#[cfg(feature = "std")]
use num_traits::{PrimInt, Signed};

// Publicly re-exported types
pub use crate::engine::printer::ArrayPrinter;
pub use crate::primitives::array::{FixedArray, STATIC_ARRAY_LEN, StaticArray};
pub use crate::primitives::errors::ArrayError;

// Internal dependencies
use crate::engine::validator::Validator;

/// Fluent builder for configuring an [`ArrayPrinter`].
#[derive(Debug, Clone, Default)]
pub struct ArrayPrinterBuilder {
    /// Number of leading elements to emit.
    pub count: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl ArrayPrinterBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            count: None,
            duplicate_param: None,
        }
    }

    /// Set the number of leading elements to emit.
    pub fn count(mut self, count: usize) -> Self {
        if self.count.is_some() {
            self.duplicate_param = Some("count");
        }
        self.count = Some(count);
        self
    }

    /// Validate the configuration and build the printer.
    pub fn build(self) -> Result<ArrayPrinter, ArrayError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Ok(ArrayPrinter { count: self.count })
    }
}

/// Print the first `count` elements of `elements` to standard output, one per line.
#[cfg(feature = "std")]
pub fn print<T>(elements: &[T], count: usize) -> Result<(), ArrayError>
where
    T: PrimInt + Signed + Display,
{
    ArrayPrinterBuilder::new()
        .count(count)
        .build()?
        .print_stdout(elements)?;
    Ok(())
}

/// Print every element of `array` to standard output, one per line.
#[cfg(feature = "std")]
pub fn print_all<T, const N: usize>(array: &FixedArray<T, N>) -> Result<(), ArrayError>
where
    T: PrimInt + Signed + Display,
{
    print(array.as_slice(), array.len())
}
