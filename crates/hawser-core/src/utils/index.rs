// Copyright (c) 2026 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Phantom-tagged index newtypes.
//!
//! Several index spaces coexist in a benchmark instance (vessels, berths),
//! all of them plain `usize` positions into parallel vectors. Tagging the
//! position with a zero-sized marker type keeps the spaces apart at compile
//! time while the wrapper still compiles down to a bare `usize`.
//!
//! ```rust
//! use hawser_core::utils::index::{TypedIndex, TypedIndexTag};
//!
//! #[derive(Clone)]
//! struct CraneTag;
//! impl TypedIndexTag for CraneTag {
//!     const NAME: &'static str = "CraneIndex";
//! }
//!
//! let crane = TypedIndex::<CraneTag>::new(2);
//! assert_eq!(crane.get(), 2);
//! assert_eq!(crane.to_string(), "CraneIndex(2)");
//! ```

use std::marker::PhantomData;

/// Marker trait naming an index space.
///
/// The name is only used when formatting, so a mixed-up index shows up
/// readably in panic messages and logs.
pub trait TypedIndexTag: Clone {
    const NAME: &'static str;
}

/// A `usize` position tagged with the index space it belongs to.
///
/// `#[repr(transparent)]` over the wrapped `usize`; the tag is a
/// `PhantomData` and never materializes at runtime.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedIndex<T> {
    index: usize,
    _marker: PhantomData<T>,
}

impl<T> TypedIndex<T> {
    /// Wraps a raw position.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: PhantomData,
        }
    }

    /// Unwraps the raw position for slice indexing.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }
}

impl<T> std::fmt::Display for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> std::fmt::Debug for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

impl<T> From<usize> for TypedIndex<T> {
    #[inline]
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl<T> From<TypedIndex<T>> for usize {
    #[inline]
    fn from(typed_index: TypedIndex<T>) -> Self {
        typed_index.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    struct QuayTag;

    impl TypedIndexTag for QuayTag {
        const NAME: &'static str = "QuayIndex";
    }

    type QuayIndex = TypedIndex<QuayTag>;

    #[test]
    fn test_wraps_and_unwraps_the_raw_position() {
        assert_eq!(QuayIndex::new(10).get(), 10);

        let from_raw: QuayIndex = 42.into();
        let back: usize = from_raw.into();
        assert_eq!(back, 42);
    }

    #[test]
    fn test_formatting_carries_the_space_name() {
        let idx = QuayIndex::new(7);
        assert_eq!(format!("{}", idx), "QuayIndex(7)");
        assert_eq!(format!("{:?}", idx), "QuayIndex(7)");
    }

    #[test]
    fn test_ordering_follows_the_raw_position() {
        assert!(QuayIndex::new(1) < QuayIndex::new(2));
        assert_eq!(QuayIndex::new(3), QuayIndex::new(3));
    }
}
