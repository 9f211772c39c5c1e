// This file is part of fixed-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`FixedVec`](crate::FixedVec).
//!
//! - `IntoIter<T, A>` yields by value, supports `DoubleEndedIterator`,
//!   `ExactSizeIterator` and `FusedIterator`, and on drop destroys whatever
//!   it did not yield before releasing the block.
//! - `&FixedVec` and `&mut FixedVec` iterate as slices; reverse iteration is
//!   `iter().rev()`.

// Crate imports
use crate::{
    allocator::{Allocator, Global},
    vec::FixedVec,
};

// Core imports
use core::{fmt, iter::FusedIterator, marker::PhantomData, mem::ManuallyDrop, ptr::NonNull};

/// Owned iterator returned by `FixedVec::into_iter()`.
///
/// Invariant: `data[front..back]` are the live elements not yet yielded.
pub struct IntoIter<T, A: Allocator = Global> {
    alloc: A,
    data: Option<NonNull<T>>,
    capacity: usize,
    front: usize,
    back: usize, // exclusive
    _marker: PhantomData<T>,
}

// SAFETY: the iterator uniquely owns the remaining elements and the block.
unsafe impl<T: Send, A: Allocator + Send> Send for IntoIter<T, A> {}
// SAFETY: shared access only hands out `&[T]`.
unsafe impl<T: Sync, A: Allocator + Sync> Sync for IntoIter<T, A> {}

impl<T, A: Allocator> IntoIter<T, A> {
    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        match self.data {
            // SAFETY: `data[front..back]` are live.
            Some(data) => unsafe {
                core::slice::from_raw_parts(data.add(self.front).as_ptr(), self.back - self.front)
            },
            None => &[],
        }
    }

    /// The allocation strategy the block will be returned to.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let data = self.data?;
            let i = self.front;
            self.front += 1;
            // SAFETY: `i` was in `front..back`, so the slot is live; advancing
            // `front` first means it is never read again.
            Some(unsafe { data.add(i).read() })
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            let data = self.data?;
            self.back -= 1;
            // SAFETY: the old `back - 1` was in `front..back`, so the slot is
            // live; lowering `back` first means it is never read again.
            Some(unsafe { data.add(self.back).read() })
        } else {
            None
        }
    }
}

impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> {}
impl<T, A: Allocator> FusedIterator for IntoIter<T, A> {}

impl<T, A: Allocator> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        if let Some(data) = self.data.take() {
            // SAFETY: `data[front..back]` are live and constructed through
            // `alloc`; the block was allocated for `capacity` elements.
            unsafe {
                for i in (self.front..self.back).rev() {
                    self.alloc.destroy(data.add(i));
                }
                self.alloc.deallocate(data, self.capacity);
            }
        }
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a FixedVec<T, A> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T, A: Allocator> IntoIterator for &'a mut FixedVec<T, A> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T, A: Allocator> IntoIterator for FixedVec<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;
    fn into_iter(self) -> Self::IntoIter {
        let back = self.len();
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so the allocator is moved out
        // exactly once and the block passes to the iterator.
        let alloc = unsafe { core::ptr::read(&this.alloc) };
        IntoIter {
            alloc,
            data: this.data,
            capacity: this.capacity,
            front: 0,
            back,
            _marker: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{allocator::Counting, builder::tests::Tracked, FixedVec};
    use alloc::{rc::Rc, string::String, vec::Vec};
    use core::cell::RefCell;

    #[test]
    fn test_double_ended() {
        let v: FixedVec<i32> = FixedVec::from_slice(&[10, 20, 30, 40]).unwrap();
        let mut it = v.into_iter();
        assert_eq!(it.next(), Some(10));
        assert_eq!(it.next_back(), Some(40));
        assert_eq!(it.as_slice(), &[20, 30]);
        assert_eq!(it.next(), Some(20));
        assert_eq!(it.next(), Some(30));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    #[allow(clippy::iter_nth_zero)]
    fn test_size_hint_tracks_consumption() {
        let v: FixedVec<i32> = FixedVec::from_slice(&[10, 20, 30, 40]).unwrap();
        let mut it = v.into_iter();
        assert_eq!(it.size_hint(), (4, Some(4)));
        it.next();
        assert_eq!(it.len(), 3);
        it.next_back();
        assert_eq!(it.size_hint(), (2, Some(2)));
        assert_eq!(it.nth(0), Some(20));
        assert_eq!(it.len(), 1);
    }

    #[test]
    fn test_partial_iteration_drops_rest_and_frees() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let alloc = Counting::new();
        let v = FixedVec::from_fn_in(
            5,
            |id| Tracked {
                id,
                log: log.clone(),
            },
            alloc.clone(),
        )
        .unwrap();
        let mut it = v.into_iter();
        assert_eq!(it.allocator().stats().live_blocks(), 1);
        drop(it.next());
        drop(it.next_back());
        assert_eq!(*log.borrow(), [0, 4]);
        drop(it);
        assert_eq!(*log.borrow(), [0, 4, 3, 2, 1]);
        assert_eq!(alloc.stats().live_blocks(), 0);
    }

    #[test]
    fn test_into_iter_of_released_is_empty() {
        let mut v: FixedVec<String> = FixedVec::from_default(3).unwrap();
        let _moved = v.take();
        let mut it = v.into_iter();
        assert_eq!(it.len(), 0);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_into_iter_zero_sized_type() {
        let v: FixedVec<()> = FixedVec::from_elem((), 3).unwrap();
        assert_eq!(v.into_iter().count(), 3);
    }

    #[test]
    fn test_ref_iteration_forward_and_reverse() {
        let mut v: FixedVec<i32> = FixedVec::from_slice(&[1, 2, 3]).unwrap();
        for x in &mut v {
            *x *= 2;
        }
        let fwd: Vec<i32> = (&v).into_iter().copied().collect();
        let rev: Vec<i32> = v.iter().rev().copied().collect();
        assert_eq!(fwd, [2, 4, 6]);
        assert_eq!(rev, [6, 4, 2]);
    }

    #[test]
    fn test_debug_shows_remaining() {
        let v: FixedVec<u8> = FixedVec::from_slice(&[1, 2]).unwrap();
        let mut it = v.into_iter();
        it.next();
        assert_eq!(alloc::format!("{it:?}"), "IntoIter([2])");
    }
}
