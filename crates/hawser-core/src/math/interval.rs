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

//! Half-open intervals over discrete time.
//!
//! Availability windows and service intervals are half-open `[start, end)`:
//! a berth whose window ends at 50 can hand over to one opening at 50
//! without the two ever being busy at the same tick, so containment and
//! overlap checks carry no off-by-one corrections.

use num_traits::PrimInt;

/// A half-open interval `[start, end)` over a primitive integer type.
///
/// Holds `start <= end` as an invariant; `start == end` is the empty
/// interval.
///
/// ```rust
/// use hawser_core::math::interval::HalfOpenInterval;
///
/// let window = HalfOpenInterval::new(8, 50);
/// assert!(window.contains_point(8));
/// assert!(!window.contains_point(50));
/// assert_eq!(window.len(), 42);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HalfOpenInterval<T>
where
    T: PrimInt,
{
    start: T,
    end: T,
}

impl<T> HalfOpenInterval<T>
where
    T: PrimInt,
{
    /// Creates the interval `[start, end)`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        assert!(
            start <= end,
            "half-open interval requires start <= end"
        );
        Self { start, end }
    }

    /// Creates the interval `[start, end)`, or `None` if the bounds are
    /// inverted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hawser_core::math::interval::HalfOpenInterval;
    /// assert!(HalfOpenInterval::try_new(0, 50).is_some());
    /// assert!(HalfOpenInterval::try_new(50, 0).is_none());
    /// ```
    #[inline]
    pub fn try_new(start: T, end: T) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// The inclusive start bound.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// The exclusive end bound.
    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// The number of ticks the interval covers.
    #[inline]
    pub fn len(&self) -> T {
        self.end - self.start
    }

    /// Returns `true` if the interval covers no tick at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `value` lies within `[start, end)`.
    #[inline]
    pub fn contains_point(&self, value: T) -> bool {
        self.start <= value && value < self.end
    }

    /// Returns `true` if `other` lies entirely within `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hawser_core::math::interval::HalfOpenInterval;
    /// let window = HalfOpenInterval::new(0, 101);
    /// assert!(window.contains_interval(HalfOpenInterval::new(5, 9)));
    /// assert!(!window.contains_interval(HalfOpenInterval::new(98, 103)));
    /// ```
    #[inline]
    pub fn contains_interval(&self, other: Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns `true` if the two intervals share at least one tick.
    ///
    /// Back-to-back intervals such as `[0, 50)` and `[50, 80)` do not
    /// intersect, and an empty interval intersects nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hawser_core::math::interval::HalfOpenInterval;
    /// let a = HalfOpenInterval::new(0, 50);
    /// assert!(a.intersects(HalfOpenInterval::new(49, 80)));
    /// assert!(!a.intersects(HalfOpenInterval::new(50, 80)));
    /// ```
    #[inline]
    pub fn intersects(&self, other: Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl<T> std::fmt::Display for HalfOpenInterval<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl<T> std::fmt::Debug for HalfOpenInterval<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}, {:?})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_and_length() {
        let window = HalfOpenInterval::new(8, 50);
        assert_eq!(window.start(), 8);
        assert_eq!(window.end(), 50);
        assert_eq!(window.len(), 42);
        assert!(!window.is_empty());
    }

    #[test]
    fn test_empty_interval_covers_nothing() {
        let empty = HalfOpenInterval::new(7, 7);
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        assert!(!empty.contains_point(7));
    }

    #[test]
    #[should_panic(expected = "half-open interval requires start <= end")]
    fn test_new_panics_on_inverted_bounds() {
        HalfOpenInterval::new(50, 8);
    }

    #[test]
    fn test_try_new_rejects_inverted_bounds_only() {
        assert_eq!(
            HalfOpenInterval::try_new(8, 50),
            Some(HalfOpenInterval::new(8, 50))
        );
        assert!(HalfOpenInterval::try_new(5, 5).is_some());
        assert!(HalfOpenInterval::try_new(50, 8).is_none());
    }

    #[test]
    fn test_contains_point_excludes_the_end() {
        let window = HalfOpenInterval::new(0, 50);
        assert!(window.contains_point(0));
        assert!(window.contains_point(49));
        assert!(!window.contains_point(50));
        assert!(!window.contains_point(-1));
    }

    #[test]
    fn test_contains_interval_is_inclusive_at_both_seams() {
        let window = HalfOpenInterval::new(0, 101);
        assert!(window.contains_interval(window));
        assert!(window.contains_interval(HalfOpenInterval::new(5, 9)));
        assert!(window.contains_interval(HalfOpenInterval::new(0, 101)));
        assert!(!window.contains_interval(HalfOpenInterval::new(-1, 9)));
        assert!(!window.contains_interval(HalfOpenInterval::new(98, 103)));
    }

    #[test]
    fn test_intersects_ignores_shared_boundaries() {
        let a = HalfOpenInterval::new(0, 50);
        assert!(a.intersects(HalfOpenInterval::new(49, 80)));
        assert!(a.intersects(HalfOpenInterval::new(10, 20)));
        assert!(!a.intersects(HalfOpenInterval::new(50, 80)));
        assert!(!a.intersects(HalfOpenInterval::new(60, 80)));
    }

    #[test]
    fn test_empty_interval_intersects_nothing() {
        let empty = HalfOpenInterval::new(10, 10);
        assert!(!empty.intersects(HalfOpenInterval::new(0, 50)));
        assert!(!HalfOpenInterval::new(0, 50).intersects(empty));
    }

    #[test]
    fn test_formatting() {
        let window = HalfOpenInterval::new(8, 50);
        assert_eq!(format!("{}", window), "[8, 50)");
        assert_eq!(format!("{:?}", window), "[8, 50)");
    }
}
