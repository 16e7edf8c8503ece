//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the array type and shared error type used throughout
//! the crate. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: API
//!   ↓
//! Layer 2: Engine
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Fixed-length arrays.
pub mod array;

/// Shared error types.
pub mod errors;
