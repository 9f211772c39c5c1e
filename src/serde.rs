// This file is part of fixed-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`FixedVec`](crate::FixedVec).
//!
//! - **Serialize**: as a sequence of the live elements.
//! - **Deserialize**: from any sequence; the capacity of the result is the
//!   sequence's length, and the block comes from `A::default()`.
//!
//! Elements are buffered before the block is allocated, since a sequence
//! does not always announce its length up front.

// Crate imports
use crate::{allocator::Allocator, vec::FixedVec};

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

// Upper bound on the up-front reservation, so a hostile length hint cannot
// force a huge allocation.
const MAX_PREALLOC: usize = 4096;

impl<T: Serialize, A: Allocator> Serialize for FixedVec<T, A> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T, A>(PhantomData<(T, A)>);

impl<'de, T, A> de::Visitor<'de> for VecVisitor<T, A>
where
    T: Deserialize<'de>,
    A: Allocator + Default,
{
    type Value = FixedVec<T, A>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("array or sequence")
    }

    fn visit_seq<S: de::SeqAccess<'de>>(self, mut seq: S) -> Result<Self::Value, S::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(MAX_PREALLOC));
        while let Some(elem) = seq.next_element::<T>()? {
            items.push(elem);
        }
        FixedVec::from_iter_exact_in(items, A::default()).map_err(de::Error::custom)
    }
}

impl<'de, T, A> Deserialize<'de> for FixedVec<T, A>
where
    T: Deserialize<'de>,
    A: Allocator + Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T, A>(PhantomData))
    }
}
