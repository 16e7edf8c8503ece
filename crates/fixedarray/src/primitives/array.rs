//! Fixed-length integer arrays.
//!
//! ## Purpose
//!
//! This module provides `FixedArray`, an owned, contiguous sequence of signed
//! integers whose length is part of its type, and the zero-initialized
//! `StaticArray` that the executable builds at startup.
//!
//! ## Design notes
//!
//! * **Length-carrying**: `N` travels with the value, so passing a `&FixedArray`
//!   across a function boundary never loses the element count.
//! * **Always initialized**: Construction is either from explicit values or
//!   zero-filled; there is no way to observe indeterminate storage.
//! * **Slice view**: Derefs to `[T]` so read access uses the standard slice API.
//!
//! ## Invariants
//!
//! * `len()` equals `N` for the whole lifetime of the value.
//! * Mutation never changes the length.

// External dependencies
use core::ops::Deref;
use core::slice::Iter;
use num_traits::{PrimInt, Signed};

// Internal dependencies
use crate::primitives::errors::ArrayError;

// ============================================================================
// FixedArray
// ============================================================================

/// An ordered, fixed-length sequence of signed integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedArray<T, const N: usize>([T; N]);

/// Number of elements in the process-wide [`StaticArray`].
pub const STATIC_ARRAY_LEN: usize = 5;

/// Zero-initialized array built once by the entry point and passed by reference.
pub type StaticArray = FixedArray<i32, STATIC_ARRAY_LEN>;

impl<T: PrimInt + Signed, const N: usize> FixedArray<T, N> {
    /// Create an array from explicit element values.
    #[inline]
    pub const fn new(elements: [T; N]) -> Self {
        Self(elements)
    }

    /// Create an array with every element set to zero.
    #[inline]
    pub fn zeroed() -> Self {
        Self([T::zero(); N])
    }

    /// Overwrite the element at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        match self.0.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ArrayError::IndexOutOfBounds { index, len: N }),
        }
    }
}

impl<T, const N: usize> FixedArray<T, N> {
    /// Number of elements, fixed at compile time.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the array holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Borrow the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Consume the wrapper and return the underlying array.
    #[inline]
    pub fn into_inner(self) -> [T; N] {
        self.0
    }
}

impl<T: PrimInt + Signed, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<T, const N: usize> Deref for FixedArray<T, N> {
    type Target = [T];
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedArray<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T: PrimInt + Signed, const N: usize> From<[T; N]> for FixedArray<T, N> {
    fn from(elements: [T; N]) -> Self {
        Self::new(elements)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedArray<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
