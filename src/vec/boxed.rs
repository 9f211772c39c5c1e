// This file is part of fixed-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    allocator::{BoxCompatible, BoxedSlice},
    vec::FixedVec,
};

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

// Core imports
use core::ptr::NonNull;

impl<T> FixedVec<T, BoxedSlice> {
    /// Adopts a boxed slice without reconstructing its elements.
    #[inline]
    pub fn from_boxed_slice(src: Box<[T]>) -> Self {
        Self::from_boxed_slice_in(src, BoxedSlice)
    }
}

impl<T, A: BoxCompatible> FixedVec<T, A> {
    /// Adopts a boxed slice, managing it through `alloc` from now on.
    ///
    /// The vector's capacity is the slice's length.
    pub fn from_boxed_slice_in(src: Box<[T]>, alloc: A) -> Self {
        let len = src.len();
        let data = NonNull::from(Box::leak(src)).cast::<T>();
        log::trace!("adopting boxed slice of {len} elements");
        // SAFETY: the box held `len` live elements, and `A: BoxCompatible`
        // can release a `Box<[T]>` allocation of that length.
        unsafe { Self::from_raw_parts_in(data, len, alloc) }
    }

    /// Hands the block back as a boxed slice, or `None` if it was released.
    pub fn into_boxed_slice(mut self) -> Option<Box<[T]>> {
        let block = self.release()?;
        // SAFETY: `A: BoxCompatible` blocks are `Box<[T]>` allocations, and
        // the released block holds `capacity` live elements.
        Some(unsafe { Box::from_raw(block.as_ptr()) })
    }
}

impl<T> From<Box<[T]>> for FixedVec<T, BoxedSlice> {
    fn from(src: Box<[T]>) -> Self {
        Self::from_boxed_slice(src)
    }
}

impl<T> From<Vec<T>> for FixedVec<T, BoxedSlice> {
    /// Shrinks `src` to its length and adopts the resulting boxed slice.
    fn from(src: Vec<T>) -> Self {
        Self::from_boxed_slice(src.into_boxed_slice())
    }
}

impl<T> FromIterator<T> for FixedVec<T, BoxedSlice> {
    /// Collects every item; the capacity is the number of items.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<T>>().into()
    }
}

impl<T> From<FixedVec<T, BoxedSlice>> for Box<[T]> {
    /// A released vector converts into an empty boxed slice.
    fn from(v: FixedVec<T, BoxedSlice>) -> Self {
        v.into_boxed_slice().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use crate::{allocator::Counting, Allocator, BoxedSlice, FixedVec};
    use alloc::{boxed::Box, rc::Rc, vec, vec::Vec};
    use core::{cell::Cell, ptr::NonNull};

    /// Counts live instances through a shared counter.
    struct Live(Rc<Cell<isize>>);

    impl Live {
        fn new(count: &Rc<Cell<isize>>) -> Self {
            count.set(count.get() + 1);
            Live(count.clone())
        }
    }

    impl Drop for Live {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    #[test]
    fn test_adopt_use_release_free() {
        let count = Rc::new(Cell::new(0));
        let raw: Box<[Live]> = (0..10).map(|_| Live::new(&count)).collect();
        let ptr = raw.as_ptr();

        let mut v = FixedVec::from_boxed_slice(raw);
        assert_eq!(v.capacity(), 10);
        assert_eq!(v.as_ptr(), ptr);
        assert_eq!(count.get(), 10);
        v.construct_at(3, Live::new(&count));
        assert_eq!(count.get(), 10);

        let block = v.release().unwrap();
        assert!(v.is_empty());
        drop(v);
        assert_eq!(count.get(), 10);

        // Freed exactly once, by the matching array deallocation.
        drop(unsafe { Box::from_raw(block.as_ptr()) });
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_adopt_release_free_counts_one_block() {
        let alloc = Counting::wrap(BoxedSlice);
        let block: NonNull<i32> = alloc.allocate(10).unwrap();
        unsafe {
            for i in 0..10 {
                alloc.construct(block.add(i), i as i32);
            }
        }

        let mut v = unsafe { FixedVec::from_raw_parts_in(block, 10, alloc.clone()) };
        v[4] = 40;
        assert_eq!(v.at(4), Ok(&40));
        assert_eq!((*v.front(), *v.back()), (0, 9));

        let released = v.release().unwrap().cast::<i32>();
        drop(v);
        assert_eq!(alloc.stats().deallocations(), 0);
        assert_eq!(alloc.stats().live_elements(), 10);

        unsafe {
            for i in 0..10 {
                alloc.destroy(released.add(i));
            }
            alloc.deallocate(released, 10);
        }
        assert_eq!(alloc.stats().allocations(), 1);
        assert_eq!(alloc.stats().deallocations(), 1);
        assert_eq!(alloc.stats().live_elements(), 0);
        assert_eq!(alloc.stats().live_bytes(), 0);
    }

    #[test]
    fn test_adopted_block_is_freed_on_drop() {
        let count = Rc::new(Cell::new(0));
        let raw: Vec<Live> = (0..4).map(|_| Live::new(&count)).collect();
        let v: FixedVec<Live, BoxedSlice> = raw.into();
        assert_eq!(count.get(), 4);
        drop(v);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_into_boxed_slice_round_trip() {
        let v: FixedVec<i32, BoxedSlice> = FixedVec::from_elem_in(5, 3, BoxedSlice).unwrap();
        let b: Box<[i32]> = v.into();
        assert_eq!(&*b, &[5, 5, 5]);

        let mut released: FixedVec<i32, BoxedSlice> = vec![1].into();
        let _ = released.take();
        assert!(released.into_boxed_slice().is_none());
    }

    #[test]
    fn test_collect_sets_capacity() {
        let v: FixedVec<u8, BoxedSlice> = (1..=4).collect();
        assert_eq!(v.capacity(), 4);
        assert_eq!(v, [1, 2, 3, 4]);

        let empty: FixedVec<u8, BoxedSlice> = core::iter::empty().collect();
        assert!(empty.is_empty());
        assert!(!empty.is_released());
    }
}
