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

//! Sentinel-encoded cells of the vessel-berth handling-time matrix.

use hawser_core::num::constants::MinusOne;
use num_traits::Signed;

/// One cell of an instance's handling-time matrix.
///
/// A cell either carries the time a berth needs to fully serve a vessel, or
/// marks the vessel-berth pairing as forbidden. Benchmark files spell
/// forbidden cells as the `99999` sentinel; in memory the same idea is kept
/// in-band by reserving negative values for absence instead of wrapping each
/// cell in `Option<T>`. The matrix is the dominant allocation of a
/// 250-vessel instance, and a cell that stays a single machine word keeps
/// row scans dense.
///
/// Zero is a valid handling time. Only negative raw values mean forbidden.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandlingTime<T>(T)
where
    T: Signed;

impl<T> HandlingTime<T>
where
    T: Copy + Signed + MinusOne,
{
    const FORBIDDEN: T = T::MINUS_ONE;

    /// Creates a cell holding a concrete handling time.
    ///
    /// # Panics
    ///
    /// Panics if `value` is negative; negative raw values encode forbidden
    /// pairings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hawser_model::time::HandlingTime;
    /// let cell = HandlingTime::some(37i64);
    /// assert_eq!(cell.into_option(), Some(37));
    /// ```
    pub fn some(value: T) -> Self
    where
        T: std::fmt::Display,
    {
        assert!(
            !value.is_negative(),
            "called `HandlingTime::some` with a negative value: {}",
            value
        );

        HandlingTime(value)
    }

    /// Creates a forbidden cell, the in-memory form of the `99999` file
    /// sentinel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hawser_model::time::HandlingTime;
    /// let cell: HandlingTime<i64> = HandlingTime::none();
    /// assert!(cell.is_none());
    /// assert_eq!(cell.into_option(), None);
    /// ```
    #[inline]
    pub fn none() -> Self {
        HandlingTime(Self::FORBIDDEN)
    }

    /// Reinterprets a raw word as a cell: non-negative values become
    /// concrete handling times, every negative value a forbidden cell.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hawser_model::time::HandlingTime;
    /// assert!(HandlingTime::from_raw(12i64).is_some());
    /// assert!(HandlingTime::from_raw(-7i64).is_none());
    /// ```
    #[inline]
    pub const fn from_raw(value: T) -> Self {
        HandlingTime(value)
    }

    /// Returns `true` if the pairing is forbidden.
    #[inline]
    pub fn is_none(&self) -> bool {
        self.0.is_negative()
    }

    /// Returns `true` if the cell holds a concrete handling time.
    #[inline]
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Widens the cell back into an `Option<T>`, the form call sites combine
    /// with `?` or `ok_or`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hawser_model::time::HandlingTime;
    /// let cell = HandlingTime::some(42i64);
    /// assert_eq!(cell.into_option(), Some(42));
    ///
    /// let forbidden: HandlingTime<i64> = HandlingTime::none();
    /// assert_eq!(forbidden.into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(&self) -> Option<T> {
        if self.is_none() { None } else { Some(self.0) }
    }
}

impl<T> std::fmt::Debug for HandlingTime<T>
where
    T: Copy + Signed + MinusOne + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "HandlingTime(forbidden)")
        } else {
            write!(f, "HandlingTime({:?})", self.0)
        }
    }
}

impl<T> std::fmt::Display for HandlingTime<T>
where
    T: Copy + Signed + MinusOne + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            f.write_str("forbidden")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl<T> From<Option<T>> for HandlingTime<T>
where
    T: Copy + Signed + MinusOne,
{
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => HandlingTime(v),
            None => HandlingTime::none(),
        }
    }
}

impl<T> From<HandlingTime<T>> for Option<T>
where
    T: Copy + Signed + MinusOne,
{
    #[inline]
    fn from(cell: HandlingTime<T>) -> Self {
        cell.into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_cell_carries_no_handling_time() {
        let cell: HandlingTime<i64> = HandlingTime::none();
        assert!(cell.is_none());
        assert!(!cell.is_some());
        assert_eq!(cell.into_option(), None);
    }

    #[test]
    fn test_concrete_cell_round_trips_through_option() {
        let cell = HandlingTime::some(37i64);
        assert_eq!(cell.into_option(), Some(37));
        assert_eq!(HandlingTime::from(Some(37i64)), cell);
        assert_eq!(Option::<i64>::from(cell), Some(37));
    }

    #[test]
    fn test_any_negative_raw_value_is_forbidden() {
        assert!(HandlingTime::from_raw(-1i64).is_none());
        assert!(HandlingTime::from_raw(-99i64).is_none());
        assert!(HandlingTime::from_raw(0i64).is_some());
    }

    #[test]
    fn test_zero_is_a_valid_handling_time() {
        let cell = HandlingTime::some(0i32);
        assert_eq!(cell.into_option(), Some(0));
    }

    #[test]
    #[should_panic(expected = "called `HandlingTime::some` with a negative value")]
    fn test_some_panics_on_negative() {
        let _ = HandlingTime::some(-4i32);
    }

    #[test]
    fn test_display_and_debug() {
        let cell = HandlingTime::some(8i32);
        assert_eq!(format!("{}", cell), "8");
        assert_eq!(format!("{:?}", cell), "HandlingTime(8)");

        let forbidden: HandlingTime<i32> = HandlingTime::none();
        assert_eq!(format!("{}", forbidden), "forbidden");
        assert_eq!(format!("{:?}", forbidden), "HandlingTime(forbidden)");
    }
}
