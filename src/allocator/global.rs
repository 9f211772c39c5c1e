// This file is part of fixed-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::Allocator, error::AllocError};

// Core imports
use core::{alloc::Layout, ptr::NonNull};

/// The global heap, as seen through `alloc::alloc`.
///
/// `Global` is zero-sized, so a `FixedVec<T, Global>` carries no allocator
/// state at all.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Global;

unsafe impl Allocator for Global {
    fn allocate<T>(&self, n: usize) -> Result<NonNull<T>, AllocError> {
        let layout = Layout::array::<T>(n).map_err(|_| AllocError::capacity_overflow())?;
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }
        // SAFETY: `layout` has a non-zero size.
        let raw = unsafe { alloc::alloc::alloc(layout) };
        NonNull::new(raw.cast::<T>()).ok_or_else(|| {
            log::debug!("global allocation of {} bytes failed", layout.size());
            AllocError::exhausted(layout)
        })
    }

    unsafe fn deallocate<T>(&self, ptr: NonNull<T>, n: usize) {
        // The layout was valid when the block was allocated with the same `n`.
        let Ok(layout) = Layout::array::<T>(n) else {
            return;
        };
        if layout.size() != 0 {
            // SAFETY: `ptr` was returned by `alloc` with this exact layout.
            unsafe { alloc::alloc::dealloc(ptr.as_ptr().cast::<u8>(), layout) }
        }
    }
}
