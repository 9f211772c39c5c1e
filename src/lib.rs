// This file is part of fixed-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `fixed-vec`
//!
//! A `no_std` + `alloc`, fixed-capacity, heap-backed vector with a pluggable
//! allocation strategy and all-or-nothing construction.
//!
//! The core type, [`FixedVec<T, A>`], owns one contiguous block holding
//! exactly `capacity` live elements. The capacity is chosen when the vector
//! is built and never changes afterwards: there is no push, pop or resize.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - the number of elements is known at run time but fixed from then on;
//! - construction must be atomic: either every element is built, or none
//!   is left behind and the memory is returned;
//! - you want to choose, or instrument, where the memory comes from.
//!
//! If you need to grow or shrink, use `Vec`.
//!
//! ## Components
//!
//! - [`Allocator`]: the strategy contract (allocate / deallocate / construct
//!   / destroy), with [`Global`], [`BoxedSlice`] and [`Counting`].
//! - [`Builder`]: staged construction. It tracks how many elements are live
//!   and, if dropped early, destroys them in reverse order and frees the
//!   block. Failures from element constructors, whether returned errors or
//!   panics, reach the caller only after that rollback.
//! - [`FixedVec`]: the finished container, with slice access, checked
//!   access ([`FixedVec::at`]), in-place replacement
//!   ([`FixedVec::construct_at`]), ownership hand-off
//!   ([`FixedVec::release`], [`FixedVec::take`]) and element-wise
//!   comparisons.
//!
//! ## Adoption
//!
//! Strategies implementing [`BoxCompatible`] manage blocks shaped exactly
//! like a `Box<[T]>`. Only vectors using such a strategy can adopt a boxed
//! slice (or a `Vec`) without reconstructing its elements, and hand their
//! block back as one.
//!
//! ## Failure model
//!
//! - Allocation failure: [`AllocError`] (wrapped in [`Error::Alloc`] or
//!   [`TryBuildError::Alloc`]). Nothing was constructed.
//! - Element constructor failure: returned unchanged in
//!   [`TryBuildError::Element`], or propagated as a panic.
//! - Out-of-range checked access: [`Error::OutOfRange`], carrying the index
//!   and the length.
//! - Caller misuse such as assigning from a slice of the wrong length:
//!   a panic, with a `try_` variant returning [`Error::LenMismatch`].
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `FixedVec<T, A>`.
//!   - Deserialization requires `A: Default`; the capacity is the length of
//!     the input sequence.
//!
//! ## Logging
//!
//! Allocation failures, staged-construction rollbacks, adoptions and
//! releases are reported through the [`log`] facade at `debug`/`trace`
//! level. The crate never installs a logger.
//!
//! ## Example
//!
//! ```rust
//! use fixed_vec::{Counting, FixedVec, TryBuildError};
//!
//! let alloc = Counting::new();
//! let res = FixedVec::<String, _>::try_from_fn_in(
//!     5,
//!     |i| if i == 3 { Err("no fourth element") } else { Ok(i.to_string()) },
//!     alloc.clone(),
//! );
//! assert_eq!(res.unwrap_err(), TryBuildError::Element("no fourth element"));
//! assert_eq!(alloc.stats().destroyed(), 3);
//! assert_eq!(alloc.stats().live_bytes(), 0);
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

extern crate alloc;

// Modules
mod allocator;
mod builder;
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use allocator::{AllocStats, Allocator, BoxCompatible, BoxedSlice, Counting, Global};
pub use builder::Builder;
pub use error::{AllocError, Error, TryBuildError};
pub use iter::IntoIter;
pub use vec::FixedVec;
