// This file is part of fixed-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Staged, all-or-nothing construction of a [`FixedVec`].
//!
//! A [`Builder`] owns a freshly allocated block for exactly `capacity`
//! elements and a cursor counting how many of them, from the front, are
//! live. Elements are constructed one at a time at increasing addresses.
//!
//! If the builder is dropped before [`finish`](Builder::finish) succeeds,
//! whether because an element constructor returned an error, panicked, or
//! the caller gave up, it destroys the live prefix in reverse order and
//! releases the block. No partially built vector is ever observable.
//!
//! On success, `finish` hands the block and the allocator over to the
//! vector without copying or re-validating anything.

// Crate imports
use crate::{
    allocator::{Allocator, Global},
    error::{AllocError, Error},
    vec::FixedVec,
};

// Core imports
use core::{fmt, marker::PhantomData, mem::ManuallyDrop, ptr::NonNull};

/// A partially constructed [`FixedVec`].
///
/// Invariants:
///
/// - `len <= capacity`;
/// - `data` was returned by `alloc.allocate::<T>(capacity)`;
/// - `data[..len]` are live elements constructed through `alloc`.
pub struct Builder<T, A: Allocator = Global> {
    alloc: A,
    data: NonNull<T>,
    capacity: usize,
    len: usize,
    _marker: PhantomData<T>,
}

// SAFETY: the builder uniquely owns its block and elements.
unsafe impl<T: Send, A: Allocator + Send> Send for Builder<T, A> {}
// SAFETY: shared access only hands out `&T` and `&A`.
unsafe impl<T: Sync, A: Allocator + Sync> Sync for Builder<T, A> {}

impl<T> Builder<T, Global> {
    /// Allocates a block for `capacity` elements on the global heap.
    #[inline]
    pub fn new(capacity: usize) -> Result<Self, AllocError> {
        Self::new_in(capacity, Global)
    }
}

impl<T, A: Allocator> Builder<T, A> {
    /// Allocates a block for `capacity` elements from `alloc`.
    ///
    /// Fails fast with [`AllocError`]; nothing has been constructed yet, so
    /// there is nothing to unwind.
    pub fn new_in(capacity: usize, alloc: A) -> Result<Self, AllocError> {
        let data = alloc.allocate::<T>(capacity)?;
        Ok(Self {
            alloc,
            data,
            capacity,
            len: 0,
            _marker: PhantomData,
        })
    }

    /// Number of elements constructed so far.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no element has been constructed yet.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The exact number of elements the finished vector will hold.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` once all `capacity` elements are live.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        self.len == self.capacity
    }

    /// Elements still to be constructed.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.capacity - self.len
    }

    /// The allocator the block came from.
    #[inline]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// The constructed prefix.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `data[..len]` are live elements.
        unsafe { core::slice::from_raw_parts(self.data.as_ptr(), self.len) }
    }

    /// Constructs the next element from `value`.
    ///
    /// Returns [`Error::Full`] (dropping `value`) if the builder is complete.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        if self.len == self.capacity {
            return Err(Error::Full);
        }
        // SAFETY: `len < capacity`, so the slot is inside the block and not live.
        unsafe { self.alloc.construct(self.data.add(self.len), value) };
        self.len += 1;
        Ok(())
    }

    /// Constructs every remaining element as a clone of `value`.
    pub fn fill(&mut self, value: &T)
    where
        T: Clone,
    {
        self.fill_with(|_| value.clone());
    }

    /// Constructs every remaining element with `T::default()`.
    pub fn fill_default(&mut self)
    where
        T: Default,
    {
        self.fill_with(|_| T::default());
    }

    /// Constructs every remaining element from `f(index)`.
    ///
    /// If `f` panics, the elements already built stay tracked and are
    /// destroyed when the builder is dropped during unwinding.
    pub fn fill_with<F: FnMut(usize) -> T>(&mut self, mut f: F) {
        while self.len < self.capacity {
            let value = f(self.len);
            // SAFETY: `len < capacity`, so the slot is inside the block and not live.
            unsafe { self.alloc.construct(self.data.add(self.len), value) };
            self.len += 1;
        }
    }

    /// Constructs every remaining element from `f(index)`, stopping at the
    /// first error.
    ///
    /// The error is returned unchanged; the elements built before it stay
    /// live in the builder until it is finished or dropped.
    pub fn try_fill_with<E, F>(&mut self, mut f: F) -> Result<(), E>
    where
        F: FnMut(usize) -> Result<T, E>,
    {
        while self.len < self.capacity {
            let value = f(self.len)?;
            // SAFETY: `len < capacity`, so the slot is inside the block and not live.
            unsafe { self.alloc.construct(self.data.add(self.len), value) };
            self.len += 1;
        }
        Ok(())
    }

    /// Constructs elements from `iter` until it is exhausted.
    ///
    /// Returns [`Error::Full`] if `iter` yields more elements than remain;
    /// the surplus element is dropped and the rest of `iter` is not consumed.
    pub fn extend_exact<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), Error> {
        for value in iter {
            self.push(value)?;
        }
        Ok(())
    }

    /// Converts the completed builder into a [`FixedVec`].
    ///
    /// Returns [`Error::LenMismatch`] if fewer than `capacity` elements were
    /// constructed; the builder is then dropped, which rolls it back.
    pub fn finish(self) -> Result<FixedVec<T, A>, Error> {
        if !self.is_complete() {
            return Err(Error::LenMismatch {
                expected: self.capacity,
                actual: self.len,
            });
        }
        // SAFETY: completeness was checked above.
        Ok(unsafe { self.finish_unchecked() })
    }

    /// Converts the builder into a [`FixedVec`] without checking that it
    /// is complete.
    ///
    /// # Safety
    ///
    /// All `capacity` elements must be live (`is_complete()` is `true`).
    pub(crate) unsafe fn finish_unchecked(self) -> FixedVec<T, A> {
        debug_assert!(self.is_complete());
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so the allocator is moved out
        // exactly once and the block changes owner without being released.
        let alloc = unsafe { core::ptr::read(&this.alloc) };
        // SAFETY: the caller guarantees all `capacity` elements are live; they
        // were constructed through `alloc`, in a block it allocated for that count.
        unsafe { FixedVec::from_raw_parts_in(this.data, this.capacity, alloc) }
    }
}

impl<T, A: Allocator> Drop for Builder<T, A> {
    fn drop(&mut self) {
        if self.len != 0 {
            log::trace!(
                "rolling back staged construction: destroying {} of {} elements",
                self.len,
                self.capacity
            );
        }
        // SAFETY: `data[..len]` are live, and the block came from
        // `allocate::<T>(capacity)` on this allocator.
        unsafe {
            destroy_prefix(&self.alloc, self.data, self.len);
            self.alloc.deallocate(self.data, self.capacity);
        }
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for Builder<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("capacity", &self.capacity)
            .field("constructed", &self.as_slice())
            .finish()
    }
}

/// Destroys `data[..len]` from the back, last constructed first.
///
/// # Safety
///
/// `data[..len]` must be live elements constructed through `alloc`, none of
/// which are used afterwards.
pub(crate) unsafe fn destroy_prefix<T, A: Allocator>(alloc: &A, data: NonNull<T>, len: usize) {
    for i in (0..len).rev() {
        // SAFETY: `i < len`, so the slot holds a live element.
        unsafe { alloc.destroy(data.add(i)) };
    }
}
