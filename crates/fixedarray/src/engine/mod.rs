//! Layer 2: Engine
//!
//! # Purpose
//!
//! This layer checks caller-supplied counts against the real buffer and runs
//! the print pass over the validated prefix.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: API
//!   ↓
//! Layer 2: Engine ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Count and parameter validation.
pub mod validator;

/// Line-per-element output.
pub mod printer;
