//! # fixedarray — Fixed-length integer arrays and a bounds-checked printer
//!
//! Fixed-size arrays that carry their length in their type, and a printer
//! that emits the leading elements of a sequence, one decimal integer per
//! line. The element count is always explicit and checked against the real
//! buffer: asking for more elements than exist is an error, never an
//! out-of-bounds read.
//!
//! ## Quick Start
//!
//! ```rust
//! use fixedarray::prelude::*;
//!
//! let values = FixedArray::new([1, 2, 3]);
//!
//! let printer = Printer::new().count(3).build()?;
//! let text = printer.render(&values)?;
//!
//! assert_eq!(text, "1\n2\n3\n");
//! # Result::<(), ArrayError>::Ok(())
//! ```
//!
//! ### Zero-initialized arrays
//!
//! ```rust
//! use fixedarray::prelude::*;
//!
//! // Built once by the caller and passed by reference.
//! let zeros = StaticArray::zeroed();
//!
//! let text = Printer::new().build()?.render(&zeros)?;
//! assert_eq!(text, "0\n0\n0\n0\n0\n");
//! # Result::<(), ArrayError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! A count larger than the buffer is reported before anything is written:
//!
//! ```rust
//! use fixedarray::prelude::*;
//!
//! let values = [1, 2, 3];
//! let printer = Printer::new().count(4).build()?;
//!
//! match printer.render(&values) {
//!     Ok(text) => println!("{}", text),
//!     Err(e) => eprintln!("Printing failed: {}", e),
//! }
//! # Result::<(), ArrayError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency. The
//! `fmt::Write` based methods (`write_to`, `render`) remain available; the
//! stdout shortcuts (`print`, `print_all`, `print_stdout`, `print_to`)
//! require `std`.
//!
//! ```toml
//! [dependencies]
//! fixedarray = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - array type and errors.
mod primitives;

// Layer 2: Engine - validation and the print pass.
mod engine;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    #[cfg(feature = "std")]
    pub use crate::api::{print, print_all};
    pub use crate::api::{
        ArrayError, ArrayPrinter, ArrayPrinterBuilder as Printer, FixedArray, STATIC_ARRAY_LEN,
        StaticArray,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
