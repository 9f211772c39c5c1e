// This file is part of fixed-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Allocation strategies for [`FixedVec`](crate::FixedVec).
//!
//! An [`Allocator`] acquires and releases raw blocks sized for `n` elements
//! and constructs/destroys single elements inside them. Three strategies
//! ship with the crate:
//!
//! - [`Global`]: stateless, backed by the global heap.
//! - [`BoxedSlice`]: blocks are exactly the allocation of a `Box<[T]>`, which
//!   lets a vector adopt an existing boxed slice without reconstructing it.
//! - [`Counting`]: stateful, wraps another strategy and records every
//!   allocation, release, construction and destruction.

mod boxed;
mod counting;
mod global;

pub use boxed::BoxedSlice;
pub use counting::{AllocStats, Counting};
pub use global::Global;

// Crate imports
use crate::error::AllocError;

// Core imports
use core::ptr::NonNull;

/// A pluggable strategy for raw storage and in-place element lifecycles.
///
/// Element constructors are ordinary Rust expressions; by the time
/// [`construct`](Allocator::construct) is called the value already exists,
/// so any failure in producing it has already propagated to the caller.
///
/// # Safety
///
/// Implementors must guarantee that:
///
/// - a block returned by `allocate::<T>(n)` is valid for reads and writes of
///   `n` values of `T`, properly aligned, and stays valid until it is passed
///   to `deallocate::<T>(_, n)` on this allocator or a clone of it;
/// - `allocate` never constructs elements;
/// - `construct` leaves exactly one live `T` at the given address and
///   `destroy` ends that value's lifetime without panicking.
pub unsafe trait Allocator {
    /// Acquires an uninitialized block for `n` elements of `T`.
    ///
    /// Zero-sized requests may return a dangling, well-aligned pointer.
    fn allocate<T>(&self, n: usize) -> Result<NonNull<T>, AllocError>;

    /// Releases a block previously returned by `allocate::<T>(n)`.
    ///
    /// # Safety
    ///
    /// `ptr` must come from `allocate::<T>(n)` on this allocator (or a clone)
    /// with the same `n`, must not have been released already, and must hold
    /// no live elements.
    unsafe fn deallocate<T>(&self, ptr: NonNull<T>, n: usize);

    /// Moves `value` into the uninitialized slot at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes and must not hold a live element.
    #[inline]
    unsafe fn construct<T>(&self, ptr: NonNull<T>, value: T) {
        // SAFETY: guaranteed by the caller.
        unsafe { ptr.as_ptr().write(value) }
    }

    /// Ends the lifetime of the live element at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must hold a live element that is not used afterwards.
    #[inline]
    unsafe fn destroy<T>(&self, ptr: NonNull<T>) {
        // SAFETY: guaranteed by the caller.
        unsafe { ptr.as_ptr().drop_in_place() }
    }
}

/// Marker for strategies whose blocks are exactly those of a `Box<[T]>`.
///
/// Only vectors using such a strategy may adopt a boxed slice (or a `Vec`
/// converted into one) without copying, and give their block back as a
/// `Box<[T]>`.
///
/// # Safety
///
/// For every `T` and `n`, `deallocate::<T>(ptr, n)` must be able to release
/// the allocation of a `Box<[T]>` of length `n` whose data pointer is `ptr`,
/// and blocks from `allocate::<T>(n)` must be releasable by dropping such a box.
pub unsafe trait BoxCompatible: Allocator {}

// A borrowed strategy forwards to the strategy it points at.
unsafe impl<A: Allocator> Allocator for &A {
    #[inline]
    fn allocate<T>(&self, n: usize) -> Result<NonNull<T>, AllocError> {
        (**self).allocate(n)
    }

    #[inline]
    unsafe fn deallocate<T>(&self, ptr: NonNull<T>, n: usize) {
        // SAFETY: forwarded contract.
        unsafe { (**self).deallocate(ptr, n) }
    }

    #[inline]
    unsafe fn construct<T>(&self, ptr: NonNull<T>, value: T) {
        // SAFETY: forwarded contract.
        unsafe { (**self).construct(ptr, value) }
    }

    #[inline]
    unsafe fn destroy<T>(&self, ptr: NonNull<T>) {
        // SAFETY: forwarded contract.
        unsafe { (**self).destroy(ptr) }
    }
}
