// This file is part of fixed-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::Allocator, vec::FixedVec};

// Core imports
use core::{marker::PhantomData, ptr::NonNull};

impl<T, A: Allocator> FixedVec<T, A> {
    /// Takes ownership of a block that already holds `len` live elements.
    ///
    /// No element is constructed. From this call on, the vector destroys
    /// the elements and releases the block through `alloc` when dropped.
    ///
    /// # Safety
    ///
    /// - `data` must have been returned by `alloc.allocate::<T>(len)` (or by
    ///   an allocator whose blocks `alloc` can release with the same `len`);
    /// - `data[..len]` must be live, initialized elements;
    /// - nothing else may use or free the block afterwards.
    #[inline]
    pub unsafe fn from_raw_parts_in(data: NonNull<T>, len: usize, alloc: A) -> Self {
        Self {
            alloc,
            data: Some(data),
            capacity: len,
            _marker: PhantomData,
        }
    }

    /// Gives up ownership of the block and returns it to the caller.
    ///
    /// The returned slice pointer covers `capacity()` live elements. The
    /// vector becomes released (`len() == 0`) and will neither destroy nor
    /// free them; the caller must do so with a strategy compatible with this
    /// vector's allocator, or hand the block back through
    /// [`from_raw_parts_in`](FixedVec::from_raw_parts_in).
    ///
    /// Returns `None` if the block was already released.
    #[must_use = "the released block leaks unless it is freed"]
    pub fn release(&mut self) -> Option<NonNull<[T]>> {
        let data = self.data.take()?;
        log::trace!("releasing block of {} elements", self.capacity);
        Some(NonNull::slice_from_raw_parts(data, self.capacity))
    }
}

#[cfg(test)]
mod tests {
    use crate::{allocator::Counting, Allocator, FixedVec};
    use alloc::string::String;

    #[test]
    fn test_release_then_readopt() {
        let alloc = Counting::new();
        let mut v = FixedVec::from_elem_in(String::from("x"), 3, alloc.clone()).unwrap();
        let block = v.release().unwrap();
        assert_eq!(block.len(), 3);
        drop(v);
        assert_eq!(alloc.stats().live_blocks(), 1);
        assert_eq!(alloc.stats().live_elements(), 3);

        let back = unsafe { FixedVec::from_raw_parts_in(block.cast::<String>(), 3, alloc.clone()) };
        assert_eq!(back, [String::from("x"), String::from("x"), String::from("x")]);
        drop(back);
        assert_eq!(alloc.stats().live_blocks(), 0);
        assert_eq!(alloc.stats().live_elements(), 0);
    }

    #[test]
    fn test_release_and_free_manually() {
        let alloc = Counting::new();
        let mut v = FixedVec::<u32, _>::from_default_in(4, alloc.clone()).unwrap();
        v[2] = 8;
        let block = v.release().unwrap();
        unsafe {
            assert_eq!(block.as_ref(), &[0, 0, 8, 0]);
            alloc.deallocate(block.cast::<u32>(), 4);
        }
        assert_eq!(alloc.stats().live_bytes(), 0);
    }

    #[test]
    fn test_double_release_returns_none() {
        let mut v: FixedVec<u8> = FixedVec::from_elem(1, 1).unwrap();
        let block = v.release();
        assert!(block.is_some());
        assert!(v.release().is_none());
        let _ = unsafe { FixedVec::from_raw_parts_in(block.unwrap().cast::<u8>(), 1, crate::Global) };
    }
}
