// This file is part of fixed-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`FixedVec`](crate::FixedVec).
//!
//! `Index`/`IndexMut` mirror slice behavior for every `SliceIndex`: single
//! positions and all range forms, panicking on out-of-bounds. This is the
//! fast path; [`FixedVec::at`](crate::FixedVec::at) is the checked one.

// Crate imports
use crate::{allocator::Allocator, vec::FixedVec};

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, A: Allocator, I: SliceIndex<[T]>> Index<I> for FixedVec<T, A> {
    type Output = I::Output;
    #[inline]
    fn index(&self, i: I) -> &Self::Output {
        &self.as_slice()[i]
    }
}

impl<T, A: Allocator, I: SliceIndex<[T]>> IndexMut<I> for FixedVec<T, A> {
    #[inline]
    fn index_mut(&mut self, i: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[i]
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::FixedVec;

    #[test]
    fn test_indexing_and_ranges_full_suite() {
        let mut v: FixedVec<i32> = FixedVec::from_slice(&[0, 1, 2, 3, 4]).unwrap();

        assert_eq!(v[0], 0);
        assert_eq!(&v[1..3], &[1, 2]);
        assert_eq!(&v[2..], &[2, 3, 4]);
        assert_eq!(&v[..3], &[0, 1, 2]);
        assert_eq!(&v[..=2], &[0, 1, 2]);
        assert_eq!(&v[1..=3], &[1, 2, 3]);
        assert_eq!(&v[..], &[0, 1, 2, 3, 4]);

        v[1..3].copy_from_slice(&[10, 20]);
        v[4] = 40;
        assert_eq!(v, [0, 10, 20, 3, 40]);
    }

    #[test]
    fn test_index_matches_checked_access() {
        let v: FixedVec<u8> = FixedVec::from_slice(&[5, 6, 7]).unwrap();
        for i in 0..v.len() {
            assert!(core::ptr::eq(&v[i], v.at(i).unwrap()));
        }
    }

    #[test]
    #[should_panic]
    fn test_oob_panics() {
        let v: FixedVec<i32> = FixedVec::from_elem(0, 2).unwrap();
        let _ = v[2];
    }

    #[test]
    #[should_panic]
    fn test_released_index_panics() {
        let mut v: FixedVec<i32> = FixedVec::from_elem(0, 2).unwrap();
        let _moved = v.take();
        let _ = v[0];
    }

    #[test]
    #[should_panic]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_inverted_range_panics() {
        let v: FixedVec<i32> = FixedVec::from_slice(&[1, 2, 3]).unwrap();
        let _ = &v[2..1];
    }
}
