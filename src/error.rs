// This file is part of fixed-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `FixedVec` and its staged builder.
//!
//! Allocation failure, out-of-range access and length mismatches are
//! reported through [`Error`]. Failures raised by an element constructor are
//! handed back unchanged inside [`TryBuildError::Element`].

// Core imports
use core::{alloc::Layout, error::Error as CoreError, fmt};

/// The allocator could not produce a block of the requested shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocError {
    layout: Option<Layout>,
}

impl AllocError {
    /// A request for `layout` could not be satisfied.
    #[inline]
    pub const fn exhausted(layout: Layout) -> Self {
        Self {
            layout: Some(layout),
        }
    }

    /// The requested element count does not fit in `isize::MAX` bytes.
    #[inline]
    pub const fn capacity_overflow() -> Self {
        Self { layout: None }
    }

    /// The layout that failed, or `None` on capacity overflow.
    #[inline]
    pub const fn layout(&self) -> Option<Layout> {
        self.layout
    }
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.layout {
            Some(layout) => write!(
                f,
                "memory allocation of {} bytes (align {}) failed",
                layout.size(),
                layout.align()
            ),
            None => f.write_str("capacity overflow"),
        }
    }
}

impl CoreError for AllocError {}

/// Errors returned by operations on [`FixedVec`](crate::FixedVec) and
/// [`Builder`](crate::Builder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The block could not be allocated.
    Alloc(AllocError),
    /// Checked access at `index` on a vector holding `len` live elements.
    OutOfRange { index: usize, len: usize },
    /// A source sequence had `actual` elements where exactly `expected` were required.
    LenMismatch { expected: usize, actual: usize },
    /// The builder already holds all of its elements.
    Full,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alloc(e) => fmt::Display::fmt(e, f),
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} is out of range for size {len}")
            }
            Self::LenMismatch { expected, actual } => {
                write!(f, "expected exactly {expected} elements, got {actual}")
            }
            Self::Full => f.write_str("builder is already complete"),
        }
    }
}

impl CoreError for Error {
    fn source(&self) -> Option<&(dyn CoreError + 'static)> {
        match self {
            Self::Alloc(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AllocError> for Error {
    #[inline]
    fn from(e: AllocError) -> Self {
        Self::Alloc(e)
    }
}

/// Failure of a staged construction driven by a fallible element constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryBuildError<E> {
    /// The block could not be allocated; no element was constructed.
    Alloc(AllocError),
    /// The element constructor failed. Every element built before it has
    /// already been destroyed and the block released.
    Element(E),
}

impl<E> TryBuildError<E> {
    /// Returns the element constructor's error, if that is what failed.
    #[inline]
    pub fn into_element(self) -> Option<E> {
        match self {
            Self::Element(e) => Some(e),
            Self::Alloc(_) => None,
        }
    }
}

impl<E: fmt::Display> fmt::Display for TryBuildError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alloc(e) => fmt::Display::fmt(e, f),
            Self::Element(e) => write!(f, "element construction failed: {e}"),
        }
    }
}

impl<E: CoreError + 'static> CoreError for TryBuildError<E> {
    fn source(&self) -> Option<&(dyn CoreError + 'static)> {
        match self {
            Self::Alloc(e) => Some(e),
            Self::Element(e) => Some(e),
        }
    }
}

impl<E> From<AllocError> for TryBuildError<E> {
    #[inline]
    fn from(e: AllocError) -> Self {
        Self::Alloc(e)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{AllocError, Error, TryBuildError};
    use alloc::string::{String, ToString};
    use core::{alloc::Layout, error::Error as CoreError};

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::OutOfRange { index: 7, len: 3 });
        assert!(s.contains('7'));
        assert!(s.contains('3'));
    }

    #[test]
    fn test_display_messages() {
        let layout = Layout::array::<u64>(4).unwrap();
        assert_eq!(
            AllocError::exhausted(layout).to_string(),
            "memory allocation of 32 bytes (align 8) failed"
        );
        assert_eq!(AllocError::capacity_overflow().to_string(), "capacity overflow");
        assert_eq!(
            Error::LenMismatch {
                expected: 5,
                actual: 2
            }
            .to_string(),
            "expected exactly 5 elements, got 2"
        );
        assert_eq!(Error::Full.to_string(), "builder is already complete");
    }

    #[test]
    fn test_alloc_error_is_source() {
        let e: Error = AllocError::capacity_overflow().into();
        assert!(e.source().is_some());
        assert!(Error::Full.source().is_none());
    }

    #[test]
    fn test_try_build_error_into_element() {
        let e: TryBuildError<&str> = TryBuildError::Element("boom");
        assert_eq!(e.into_element(), Some("boom"));
        let a: TryBuildError<&str> = AllocError::capacity_overflow().into();
        assert_eq!(a.into_element(), None);
        assert_eq!(
            TryBuildError::Element("boom").to_string(),
            "element construction failed: boom"
        );
    }
}
