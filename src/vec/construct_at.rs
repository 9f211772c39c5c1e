// This file is part of fixed-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::Allocator, vec::FixedVec};

impl<T, A: Allocator> FixedVec<T, A> {
    /// Replaces the element at `index` in place: the old element is
    /// destroyed and `value` is constructed in its slot, both through the
    /// allocator. No reallocation takes place.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn construct_at(&mut self, index: usize, value: T) -> &mut T {
        let len = self.len();
        let data = match self.data {
            Some(data) if index < len => data,
            _ => panic!("construct_at: index {index} is out of range for size {len}"),
        };
        // SAFETY: `index < capacity`, so the slot is inside the owned block and
        // holds a live element, which is replaced before anyone can observe it.
        unsafe {
            let slot = data.add(index);
            self.alloc.destroy(slot);
            self.alloc.construct(slot, value);
            &mut *slot.as_ptr()
        }
    }

    /// Like [`construct_at`](FixedVec::construct_at), but builds the new
    /// element with the fallible `f` first.
    ///
    /// If `f` fails, its error is returned and the old element is left alone.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`; `f` is not called in that case.
    pub fn try_construct_at_with<E, F>(&mut self, index: usize, f: F) -> Result<&mut T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let len = self.len();
        assert!(
            index < len,
            "construct_at: index {index} is out of range for size {len}"
        );
        let value = f()?;
        Ok(self.construct_at(index, value))
    }
}

#[cfg(test)]
mod tests {
    use crate::{allocator::Counting, builder::tests::Tracked, FixedVec};
    use alloc::{rc::Rc, string::String, vec::Vec};
    use core::cell::RefCell;

    #[test]
    fn test_replaces_in_place_through_allocator() {
        let alloc = Counting::new();
        let mut v = FixedVec::from_elem_in(String::from("a"), 3, alloc.clone()).unwrap();
        let ptr = v.as_ptr();
        let slot = v.construct_at(1, String::from("b"));
        slot.push('!');
        assert_eq!(v.as_slice(), &["a", "b!", "a"]);
        assert_eq!(v.as_ptr(), ptr);
        assert_eq!(alloc.stats().constructed(), 4);
        assert_eq!(alloc.stats().destroyed(), 1);
        assert_eq!(alloc.stats().allocations(), 1);
    }

    #[test]
    fn test_old_element_is_dropped_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mk = |id| Tracked {
            id,
            log: log.clone(),
        };
        let mut v: FixedVec<Tracked> = FixedVec::from_fn(2, mk).unwrap();
        v.construct_at(0, mk(7));
        assert_eq!(*log.borrow(), [0]);
        drop(v);
        assert_eq!(*log.borrow(), [0, 1, 7]);
    }

    #[test]
    fn test_failed_constructor_keeps_old_element() {
        let mut v: FixedVec<i32> = FixedVec::from_slice(&[1, 2]).unwrap();
        assert_eq!(v.try_construct_at_with(1, || Err::<i32, _>("nope")), Err("nope"));
        assert_eq!(v, [1, 2]);
        assert_eq!(v.try_construct_at_with(1, || Ok::<_, ()>(5)).map(|x| *x), Ok(5));
        assert_eq!(v, [1, 5]);
    }

    #[test]
    #[should_panic(expected = "index 2 is out of range for size 2")]
    fn test_out_of_range_panics() {
        let mut v: FixedVec<i32> = FixedVec::from_elem(0, 2).unwrap();
        v.construct_at(2, 1);
    }
}
