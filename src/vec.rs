// This file is part of fixed-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `FixedVec` type and its inherent API.
//!
//! `FixedVec<T, A>` owns one contiguous block holding exactly `capacity`
//! live elements, obtained from the allocation strategy `A`. The capacity is
//! chosen at construction and never changes: there is no push, pop, insert
//! or resize. Elements are read and overwritten in place.
//!
//! Every constructor funnels through the staged [`Builder`](crate::Builder)
//! or adopts a block that already holds its elements.

mod access;
mod assign;
mod boxed;
mod construct_at;
mod new;
mod raw;

// Crate imports
use crate::{
    allocator::{Allocator, Global},
    builder::destroy_prefix,
    error::Error,
};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Deref, DerefMut},
    ptr::NonNull,
};

/// A fixed-capacity, heap-backed vector with a pluggable allocator.
///
/// # Layout and invariants
///
/// `FixedVec<T, A>` holds:
///
/// - the allocator `A` (zero-sized for [`Global`] and
///   [`BoxedSlice`](crate::BoxedSlice));
/// - the fixed `capacity`, set once at construction; and
/// - the block, which is either owned and holds exactly `capacity` live
///   elements, or absent after [`release`](FixedVec::release) or
///   [`take`](FixedVec::take).
///
/// [`len`](FixedVec::len) is the number of live elements: `capacity` while
/// the block is owned, `0` once it has been given away.
/// [`is_empty`](FixedVec::is_empty) means `len() == 0`, so a zero-capacity
/// vector is empty whether or not its strategy handed out a real block; use
/// [`is_released`](FixedVec::is_released) to ask about ownership.
///
/// # Construction
///
/// | Mode                          | Entry point                                      |
/// |-------------------------------|--------------------------------------------------|
/// | `n` clones of a value         | [`from_elem`](FixedVec::from_elem)               |
/// | `n` default elements          | [`from_default`](FixedVec::from_default)         |
/// | one element per index         | [`from_fn`](FixedVec::from_fn), [`try_from_fn`](FixedVec::try_from_fn) |
/// | an exact-size sequence        | [`from_iter_exact`](FixedVec::from_iter_exact), [`from_slice`](FixedVec::from_slice) |
/// | adopt a `Box<[T]>` / `Vec<T>` | [`from_boxed_slice`](FixedVec::from_boxed_slice) |
///
/// Each has an `_in` variant taking an explicit allocator. If an element
/// constructor fails or panics, every element built so far is destroyed in
/// reverse order and the block is released before the failure reaches the
/// caller.
///
/// # Examples
///
/// ```rust
/// use fixed_vec::FixedVec;
///
/// let mut v: FixedVec<i32> = FixedVec::from_elem(0, 5).unwrap();
/// v.assign_from_slice(&[1, 2, 3, 4, 5]);
/// assert_eq!((*v.front(), *v.back()), (1, 5));
/// assert_eq!(v.at(7).unwrap_err().to_string(), "index 7 is out of range for size 5");
/// ```
pub struct FixedVec<T, A: Allocator = Global> {
    pub(crate) alloc: A,
    pub(crate) data: Option<NonNull<T>>,
    pub(crate) capacity: usize,
    pub(crate) _marker: PhantomData<T>,
}

// SAFETY: the vector uniquely owns its block and elements.
unsafe impl<T: Send, A: Allocator + Send> Send for FixedVec<T, A> {}
// SAFETY: shared access only hands out `&T` and `&A`.
unsafe impl<T: Sync, A: Allocator + Sync> Sync for FixedVec<T, A> {}

impl<T, A: Allocator> FixedVec<T, A> {
    /// The number of elements fixed at construction.
    ///
    /// Unlike [`len`](FixedVec::len), this does not change on release.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of live elements: `capacity` while the block is
    /// owned, `0` after it was released.
    #[inline]
    pub const fn len(&self) -> usize {
        if self.data.is_some() {
            self.capacity
        } else {
            0
        }
    }

    /// Returns `true` if `len() == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` once the block has been released or taken.
    #[inline]
    pub const fn is_released(&self) -> bool {
        self.data.is_none()
    }

    /// The allocation strategy.
    #[inline]
    pub const fn allocator(&self) -> &A {
        &self.alloc
    }

    /// A copy of the allocation strategy.
    ///
    /// Stateful strategies such as [`Counting`](crate::Counting) share their
    /// state with the copy.
    #[inline]
    pub fn get_allocator(&self) -> A
    where
        A: Clone,
    {
        self.alloc.clone()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match self.data {
            // SAFETY: an owned block holds `capacity` live elements.
            Some(data) => unsafe { core::slice::from_raw_parts(data.as_ptr(), self.capacity) },
            None => &[],
        }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self.data {
            // SAFETY: an owned block holds `capacity` live elements, and
            // `&mut self` guarantees exclusive access to them.
            Some(data) => unsafe {
                core::slice::from_raw_parts_mut(data.as_ptr(), self.capacity)
            },
            None => &mut [],
        }
    }

    /// Returns a raw pointer to the first element, or a dangling pointer if
    /// the block was released.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.data.unwrap_or(NonNull::dangling()).as_ptr()
    }

    /// Mutable counterpart of [`as_ptr`](FixedVec::as_ptr).
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.unwrap_or(NonNull::dangling()).as_ptr()
    }

    /// Moves the block into a new vector, leaving `self` released.
    ///
    /// The new vector gets a clone of the allocator; `self` keeps its
    /// capacity and allocator but reports `len() == 0`.
    #[inline]
    pub fn take(&mut self) -> Self
    where
        A: Clone,
    {
        Self {
            alloc: self.alloc.clone(),
            data: self.data.take(),
            capacity: self.capacity,
            _marker: PhantomData,
        }
    }

    /// Exchanges the whole value of two vectors: allocator, capacity and block.
    ///
    /// Capacities may differ; each vector keeps describing its block correctly.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Fallible [`Clone`]: deep-copies the elements into a block from a
    /// clone of the allocator.
    ///
    /// Cloning a released vector yields a released vector of the same
    /// capacity without allocating.
    pub fn try_clone(&self) -> Result<Self, Error>
    where
        T: Clone,
        A: Clone,
    {
        if self.data.is_none() {
            return Ok(Self {
                alloc: self.alloc.clone(),
                data: None,
                capacity: self.capacity,
                _marker: PhantomData,
            });
        }
        Self::from_iter_exact_in(self.iter().cloned(), self.alloc.clone())
    }
}

impl<T, A: Allocator> Drop for FixedVec<T, A> {
    fn drop(&mut self) {
        if let Some(data) = self.data.take() {
            // SAFETY: an owned block holds `capacity` live elements and was
            // allocated for `capacity` elements by `alloc`.
            unsafe {
                destroy_prefix(&self.alloc, data, self.capacity);
                self.alloc.deallocate(data, self.capacity);
            }
        }
    }
}

impl<T: Clone, A: Allocator + Clone> Clone for FixedVec<T, A> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(v) => v,
            Err(e) => panic!("failed to clone FixedVec: {e}"),
        }
    }

    /// Copies element-wise when both vectors own blocks of the same
    /// capacity; otherwise replaces `self` with a fresh clone.
    fn clone_from(&mut self, source: &Self) {
        if self.capacity == source.capacity && self.len() == source.len() {
            self.as_mut_slice().clone_from_slice(source.as_slice());
        } else {
            *self = source.clone();
        }
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for FixedVec<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedVec")
            .field("capacity", &self.capacity)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq, A1: Allocator, A2: Allocator> PartialEq<FixedVec<T, A2>> for FixedVec<T, A1> {
    fn eq(&self, other: &FixedVec<T, A2>) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq, A: Allocator> Eq for FixedVec<T, A> {}
impl<T: PartialEq, A: Allocator> PartialEq<[T]> for FixedVec<T, A> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}
impl<T: PartialEq, A: Allocator, const N: usize> PartialEq<[T; N]> for FixedVec<T, A> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}
impl<T: Ord, A: Allocator> Ord for FixedVec<T, A> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd, A: Allocator> PartialOrd for FixedVec<T, A> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash, A: Allocator> Hash for FixedVec<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, A: Allocator> Deref for FixedVec<T, A> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, A: Allocator> DerefMut for FixedVec<T, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, A: Allocator> AsRef<[T]> for FixedVec<T, A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, A: Allocator> AsMut<[T]> for FixedVec<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, A: Allocator> Borrow<[T]> for FixedVec<T, A> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, A: Allocator> BorrowMut<[T]> for FixedVec<T, A> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
