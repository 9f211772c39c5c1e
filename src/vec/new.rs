// This file is part of fixed-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    allocator::{Allocator, Global},
    builder::Builder,
    error::{AllocError, Error, TryBuildError},
    vec::FixedVec,
};

impl<T> FixedVec<T, Global> {
    /// Starts a staged construction of `n` elements on the global heap.
    #[inline]
    pub fn builder(n: usize) -> Result<Builder<T>, AllocError> {
        Builder::new(n)
    }

    /// `n` clones of `value`.
    #[inline]
    pub fn from_elem(value: T, n: usize) -> Result<Self, Error>
    where
        T: Clone,
    {
        Self::from_elem_in(value, n, Global)
    }

    /// `n` elements built with `T::default()`.
    #[inline]
    pub fn from_default(n: usize) -> Result<Self, Error>
    where
        T: Default,
    {
        Self::from_default_in(n, Global)
    }

    /// `n` elements, the `i`-th built by `f(i)`.
    #[inline]
    pub fn from_fn<F: FnMut(usize) -> T>(n: usize, f: F) -> Result<Self, Error> {
        Self::from_fn_in(n, f, Global)
    }

    /// `n` elements, the `i`-th built by the fallible `f(i)`.
    #[inline]
    pub fn try_from_fn<E, F>(n: usize, f: F) -> Result<Self, TryBuildError<E>>
    where
        F: FnMut(usize) -> Result<T, E>,
    {
        Self::try_from_fn_in(n, f, Global)
    }

    /// One element per item of an exact-size sequence.
    #[inline]
    pub fn from_iter_exact<I>(iter: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        Self::from_iter_exact_in(iter, Global)
    }

    /// Clones of every element of `src`.
    #[inline]
    pub fn from_slice(src: &[T]) -> Result<Self, Error>
    where
        T: Clone,
    {
        Self::from_slice_in(src, Global)
    }
}

impl<T, A: Allocator> FixedVec<T, A> {
    /// Starts a staged construction of `n` elements from `alloc`.
    #[inline]
    pub fn builder_in(n: usize, alloc: A) -> Result<Builder<T, A>, AllocError> {
        Builder::new_in(n, alloc)
    }

    /// `n` clones of `value`, allocated from `alloc`.
    pub fn from_elem_in(value: T, n: usize, alloc: A) -> Result<Self, Error>
    where
        T: Clone,
    {
        let mut b = Builder::new_in(n, alloc)?;
        b.fill(&value);
        b.finish()
    }

    /// `n` elements built with `T::default()`, allocated from `alloc`.
    pub fn from_default_in(n: usize, alloc: A) -> Result<Self, Error>
    where
        T: Default,
    {
        let mut b = Builder::new_in(n, alloc)?;
        b.fill_default();
        b.finish()
    }

    /// `n` elements, the `i`-th built by `f(i)`, allocated from `alloc`.
    ///
    /// If `f` panics, the elements built so far are destroyed in reverse
    /// order and the block is released while the panic unwinds.
    pub fn from_fn_in<F: FnMut(usize) -> T>(n: usize, f: F, alloc: A) -> Result<Self, Error> {
        let mut b = Builder::new_in(n, alloc)?;
        b.fill_with(f);
        b.finish()
    }

    /// `n` elements, the `i`-th built by the fallible `f(i)`, allocated
    /// from `alloc`.
    ///
    /// The first error from `f` is returned unchanged in
    /// [`TryBuildError::Element`], after the elements built before it were
    /// destroyed and the block released.
    pub fn try_from_fn_in<E, F>(n: usize, f: F, alloc: A) -> Result<Self, TryBuildError<E>>
    where
        F: FnMut(usize) -> Result<T, E>,
    {
        let mut b = Builder::new_in(n, alloc)?;
        b.try_fill_with(f).map_err(TryBuildError::Element)?;
        // SAFETY: `try_fill_with` only returns `Ok` once every slot is live.
        Ok(unsafe { b.finish_unchecked() })
    }

    /// One element per item of an exact-size sequence, allocated from `alloc`.
    ///
    /// The size is taken from `ExactSizeIterator::len`. If the iterator then
    /// yields a different number of items, construction is rolled back and
    /// [`Error::LenMismatch`] is returned with the number of items actually
    /// yielded. An overlong iterator is drained to count them.
    pub fn from_iter_exact_in<I>(iter: I, alloc: A) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let mut iter = iter.into_iter();
        let expected = iter.len();
        let mut b = Builder::new_in(expected, alloc)?;
        if b.extend_exact(iter.by_ref()).is_err() {
            drop(b);
            // `extend_exact` consumed one surplus item before stopping.
            return Err(Error::LenMismatch {
                expected,
                actual: expected + 1 + iter.count(),
            });
        }
        b.finish()
    }

    /// Clones of every element of `src`, allocated from `alloc`.
    #[inline]
    pub fn from_slice_in(src: &[T], alloc: A) -> Result<Self, Error>
    where
        T: Clone,
    {
        Self::from_iter_exact_in(src.iter().cloned(), alloc)
    }
}

impl<T: Clone> TryFrom<&[T]> for FixedVec<T, Global> {
    type Error = Error;

    fn try_from(src: &[T]) -> Result<Self, Error> {
        Self::from_slice(src)
    }
}
