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

//! Typed indices for the two axes of a benchmark instance.
//!
//! An instance is addressed along two axes: vessels (rows of the
//! handling-time matrix) and berths (columns). A swapped pair of plain
//! `usize` indices silently transposes the matrix, so each axis gets its
//! own index type and mixing them up becomes a type error.
//!
//! ```rust
//! use hawser_model::index::{BerthIndex, VesselIndex};
//!
//! let vessel = VesselIndex::new(4);
//! let berth = BerthIndex::new(2);
//! assert_eq!(vessel.to_string(), "VesselIndex(4)");
//! assert_eq!(berth.to_string(), "BerthIndex(2)");
//! ```

use hawser_core::utils::index::{TypedIndex, TypedIndexTag};

/// Tag for the vessel axis (rows of the handling-time matrix).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct VesselIndexTag;

impl TypedIndexTag for VesselIndexTag {
    const NAME: &'static str = "VesselIndex";
}

/// Identifies one vessel of an instance, in arrival order of the file.
pub type VesselIndex = TypedIndex<VesselIndexTag>;

/// Tag for the berth axis (columns of the handling-time matrix).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct BerthIndexTag;

impl TypedIndexTag for BerthIndexTag {
    const NAME: &'static str = "BerthIndex";
}

/// Identifies one berth of an instance, in file column order.
pub type BerthIndex = TypedIndex<BerthIndexTag>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes_format_with_their_own_names() {
        assert_eq!(format!("{}", VesselIndex::new(7)), "VesselIndex(7)");
        assert_eq!(format!("{:?}", BerthIndex::new(0)), "BerthIndex(0)");
    }

    #[test]
    fn test_indices_order_by_position() {
        assert!(VesselIndex::new(3) < VesselIndex::new(11));
        assert_eq!(BerthIndex::new(5), BerthIndex::new(5));
    }
}
