// This file is part of fixed-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::Allocator, error::Error, vec::FixedVec};

impl<T, A: Allocator> FixedVec<T, A> {
    /// Bounds-checked access.
    ///
    /// Returns [`Error::OutOfRange`] with the offending index and the current
    /// length if `index >= len()`, which includes every index on a released
    /// vector. A released vector reports `len: 0`, the number of elements it
    /// can still reach, not its fixed [`capacity`](FixedVec::capacity).
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        let len = self.len();
        self.as_slice()
            .get(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Mutable counterpart of [`at`](FixedVec::at).
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len();
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// The first element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn front(&self) -> &T {
        match self.as_slice().first() {
            Some(x) => x,
            None => panic!("front() called on an empty FixedVec"),
        }
    }

    /// The first element, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn front_mut(&mut self) -> &mut T {
        match self.as_mut_slice().first_mut() {
            Some(x) => x,
            None => panic!("front_mut() called on an empty FixedVec"),
        }
    }

    /// The last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn back(&self) -> &T {
        match self.as_slice().last() {
            Some(x) => x,
            None => panic!("back() called on an empty FixedVec"),
        }
    }

    /// The last element, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        match self.as_mut_slice().last_mut() {
            Some(x) => x,
            None => panic!("back_mut() called on an empty FixedVec"),
        }
    }
}
