// This file is part of fixed-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    allocator::{Allocator, BoxCompatible},
    error::AllocError,
};

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

// Core imports
use core::{alloc::Layout, mem::MaybeUninit, ptr::NonNull};

/// Blocks shaped exactly like the allocation behind a `Box<[T]>`.
///
/// Allocation goes through `Vec::try_reserve_exact`, and release rebuilds
/// and drops a `Box<[MaybeUninit<T>]>`. Because of that, a
/// `FixedVec<T, BoxedSlice>` can adopt a `Box<[T]>` it did not build, and
/// hand its block back as one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxedSlice;

unsafe impl Allocator for BoxedSlice {
    fn allocate<T>(&self, n: usize) -> Result<NonNull<T>, AllocError> {
        let mut block: Vec<MaybeUninit<T>> = Vec::new();
        block.try_reserve_exact(n).map_err(|_| {
            log::debug!("boxed slice allocation of {n} elements failed");
            match Layout::array::<T>(n) {
                Ok(layout) => AllocError::exhausted(layout),
                Err(_) => AllocError::capacity_overflow(),
            }
        })?;
        // SAFETY: capacity is at least `n` and `MaybeUninit` needs no initialization.
        unsafe { block.set_len(n) };
        let block: &mut [MaybeUninit<T>] = Box::leak(block.into_boxed_slice());
        Ok(NonNull::from(block).cast::<T>())
    }

    unsafe fn deallocate<T>(&self, ptr: NonNull<T>, n: usize) {
        let slice = core::ptr::slice_from_raw_parts_mut(ptr.as_ptr().cast::<MaybeUninit<T>>(), n);
        // SAFETY: `ptr` and `n` describe a leaked `Box<[MaybeUninit<T>]>` (or a
        // `Box<[T]>` with no live elements left), so rebuilding and dropping it
        // frees exactly that allocation without touching element values.
        drop(unsafe { Box::from_raw(slice) });
    }
}

unsafe impl BoxCompatible for BoxedSlice {}
