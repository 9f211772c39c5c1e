// This file is part of fixed-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::Allocator, error::Error, vec::FixedVec};

impl<T, A: Allocator> FixedVec<T, A> {
    /// Overwrites every element with a clone of `value`.
    #[inline]
    pub fn assign(&mut self, value: T)
    where
        T: Clone,
    {
        self.as_mut_slice().fill(value);
    }

    /// Overwrites the elements with clones of `src`, element by element.
    ///
    /// # Panics
    ///
    /// Panics if `src.len() != self.len()`; the vector never resizes.
    #[inline]
    pub fn assign_from_slice(&mut self, src: &[T])
    where
        T: Clone,
    {
        if let Err(e) = self.try_assign_from_slice(src) {
            panic!("assign_from_slice: {e}");
        }
    }

    /// Fallible variant of [`assign_from_slice`](FixedVec::assign_from_slice),
    /// returning [`Error::LenMismatch`] and leaving `self` untouched when the
    /// lengths differ.
    pub fn try_assign_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        if src.len() != self.len() {
            return Err(Error::LenMismatch {
                expected: self.len(),
                actual: src.len(),
            });
        }
        self.as_mut_slice().clone_from_slice(src);
        Ok(())
    }

    /// Overwrites the elements with the items of an exact-size sequence.
    ///
    /// The reported length is checked up front; on mismatch nothing is
    /// written and [`Error::LenMismatch`] is returned. An iterator that
    /// reports the right length but ends early leaves the tail untouched.
    pub fn try_assign_iter<I>(&mut self, iter: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = iter.into_iter();
        if iter.len() != self.len() {
            return Err(Error::LenMismatch {
                expected: self.len(),
                actual: iter.len(),
            });
        }
        for (dst, value) in self.as_mut_slice().iter_mut().zip(iter) {
            *dst = value;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, FixedVec};

    #[test]
    fn test_assign_value_overwrites_all() {
        let mut v: FixedVec<u8> = FixedVec::from_slice(&[1, 2, 3]).unwrap();
        v.assign(9);
        assert_eq!(v, [9, 9, 9]);
    }

    #[test]
    fn test_try_assign_from_slice_mismatch_is_noop() {
        let mut v: FixedVec<i32> = FixedVec::from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(
            v.try_assign_from_slice(&[4, 5]),
            Err(Error::LenMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(v, [1, 2, 3]);
        assert_eq!(v.try_assign_from_slice(&[4, 5, 6]), Ok(()));
        assert_eq!(v, [4, 5, 6]);
    }

    #[test]
    #[should_panic(expected = "expected exactly 2 elements, got 3")]
    fn test_assign_from_slice_mismatch_panics() {
        let mut v: FixedVec<i32> = FixedVec::from_elem(0, 2).unwrap();
        v.assign_from_slice(&[1, 2, 3]);
    }

    #[test]
    fn test_try_assign_iter() {
        let mut v: FixedVec<u32> = FixedVec::from_elem(0, 4).unwrap();
        v.try_assign_iter((1..5).rev()).unwrap();
        assert_eq!(v, [4, 3, 2, 1]);
        assert!(v.try_assign_iter(0..2).is_err());
        assert_eq!(v, [4, 3, 2, 1]);
    }
}
