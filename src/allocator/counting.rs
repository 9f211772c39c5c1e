// This file is part of fixed-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    allocator::{Allocator, Global},
    error::AllocError,
};

// Alloc imports
use alloc::sync::Arc;

// Core imports
use core::{
    alloc::Layout,
    ptr::NonNull,
    sync::atomic::{AtomicUsize, Ordering},
};

/// Counters shared by every clone of a [`Counting`] allocator.
#[derive(Debug, Default)]
pub struct AllocStats {
    allocations: AtomicUsize,
    deallocations: AtomicUsize,
    constructed: AtomicUsize,
    destroyed: AtomicUsize,
    live_bytes: AtomicUsize,
}

impl AllocStats {
    /// Number of successful `allocate` calls.
    pub fn allocations(&self) -> usize {
        self.allocations.load(Ordering::Relaxed)
    }

    /// Number of `deallocate` calls.
    pub fn deallocations(&self) -> usize {
        self.deallocations.load(Ordering::Relaxed)
    }

    /// Number of elements constructed through the allocator.
    pub fn constructed(&self) -> usize {
        self.constructed.load(Ordering::Relaxed)
    }

    /// Number of elements destroyed through the allocator.
    pub fn destroyed(&self) -> usize {
        self.destroyed.load(Ordering::Relaxed)
    }

    /// Bytes currently allocated and not yet released.
    pub fn live_bytes(&self) -> usize {
        self.live_bytes.load(Ordering::Relaxed)
    }

    /// Blocks currently allocated and not yet released.
    pub fn live_blocks(&self) -> usize {
        self.allocations() - self.deallocations()
    }

    /// Elements constructed and not yet destroyed.
    pub fn live_elements(&self) -> usize {
        self.constructed() - self.destroyed()
    }
}

/// A stateful strategy that records traffic through an inner allocator.
///
/// Clones share one [`AllocStats`], so the counters observed through
/// [`stats`](Counting::stats) cover every vector built from any clone.
/// An optional byte limit makes allocations fail once the live total would
/// exceed it.
#[derive(Debug, Clone)]
pub struct Counting<A = Global> {
    inner: A,
    stats: Arc<AllocStats>,
    limit: Option<usize>,
}

impl Counting<Global> {
    /// Counts traffic to the global heap, without a limit.
    pub fn new() -> Self {
        Self::wrap(Global)
    }

    /// Counts traffic to the global heap, failing allocations that would
    /// push the live total above `max_live_bytes`.
    pub fn with_limit(max_live_bytes: usize) -> Self {
        Self {
            limit: Some(max_live_bytes),
            ..Self::new()
        }
    }
}

impl Default for Counting<Global> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Allocator> Counting<A> {
    /// Counts traffic to `inner`, without a limit.
    pub fn wrap(inner: A) -> Self {
        Self {
            inner,
            stats: Arc::new(AllocStats::default()),
            limit: None,
        }
    }

    /// The shared counters.
    pub fn stats(&self) -> &AllocStats {
        &self.stats
    }

    /// The wrapped strategy.
    pub fn inner(&self) -> &A {
        &self.inner
    }
}

unsafe impl<A: Allocator> Allocator for Counting<A> {
    fn allocate<T>(&self, n: usize) -> Result<NonNull<T>, AllocError> {
        let layout = Layout::array::<T>(n).map_err(|_| AllocError::capacity_overflow())?;
        if let Some(limit) = self.limit {
            if self.stats.live_bytes().saturating_add(layout.size()) > limit {
                log::debug!(
                    "allocation of {} bytes refused: {} of {limit} bytes in use",
                    layout.size(),
                    self.stats.live_bytes()
                );
                return Err(AllocError::exhausted(layout));
            }
        }
        let ptr = self.inner.allocate(n)?;
        self.stats.allocations.fetch_add(1, Ordering::Relaxed);
        self.stats
            .live_bytes
            .fetch_add(layout.size(), Ordering::Relaxed);
        Ok(ptr)
    }

    unsafe fn deallocate<T>(&self, ptr: NonNull<T>, n: usize) {
        // SAFETY: forwarded contract.
        unsafe { self.inner.deallocate(ptr, n) };
        let size = Layout::array::<T>(n).map_or(0, |l| l.size());
        self.stats.deallocations.fetch_add(1, Ordering::Relaxed);
        self.stats.live_bytes.fetch_sub(size, Ordering::Relaxed);
    }

    unsafe fn construct<T>(&self, ptr: NonNull<T>, value: T) {
        // SAFETY: forwarded contract.
        unsafe { self.inner.construct(ptr, value) };
        self.stats.constructed.fetch_add(1, Ordering::Relaxed);
    }

    unsafe fn destroy<T>(&self, ptr: NonNull<T>) {
        // SAFETY: forwarded contract.
        unsafe { self.inner.destroy(ptr) };
        self.stats.destroyed.fetch_add(1, Ordering::Relaxed);
    }
}
