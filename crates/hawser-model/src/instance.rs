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

use crate::{
    index::{BerthIndex, VesselIndex},
    time::HandlingTime,
};
use hawser_core::{math::interval::HalfOpenInterval, num::constants::MinusOne};
use num_traits::{PrimInt, Signed};

#[inline(always)]
fn flatten_index(num_berths: usize, vessel_index: VesselIndex, berth_index: BerthIndex) -> usize {
    vessel_index.get() * num_berths + berth_index.get()
}

/// The immutable data record of a single DBAP benchmark instance.
///
/// This struct holds all pre-validated, queryable data:
/// - `arrival_times[vessel]`: the arrival time for each vessel.
/// - `max_departure_times[vessel]`: the latest allowed departure for each vessel.
/// - `vessel_weights[vessel]`: the objective weight for each vessel.
/// - `handling_times[vessel * num_berths + berth]`: per-(vessel, berth) handling
///   time, encoded via `HandlingTime<T>` (sentinel-based option); `None` marks a
///   forbidden pairing.
/// - `berth_windows[berth]`: one `HalfOpenInterval<T>` per berth describing when
///   the berth is available.
/// - `shortest_handling_times[vessel]`: the minimum `Some(time)` across berths
///   for a given vessel, or `None` if every berth is forbidden.
///
/// Construction:
/// - Use `InstanceBuilder` and call `InstanceBuilder::build` to obtain an
///   `Instance`, or parse one from a benchmark file via
///   `crate::loading::InstanceLoader`.
///
/// Two instances compare equal exactly when all their per-vessel and per-berth
/// data agree, which is what makes loader/writer round-trip tests meaningful.
#[derive(Clone, PartialEq, Eq)]
pub struct Instance<T>
where
    T: PrimInt + Signed,
{
    arrival_times: Vec<T>,                           // len = num_vessels
    max_departure_times: Vec<T>,                     // len = num_vessels
    vessel_weights: Vec<T>,                          // len = num_vessels
    handling_times: Vec<HandlingTime<T>>,            // len = num_vessels * num_berths
    berth_windows: Vec<HalfOpenInterval<T>>,         // len = num_berths
    shortest_handling_times: Vec<HandlingTime<T>>,   // len = num_vessels
}

impl<T> Instance<T>
where
    T: PrimInt + Signed,
{
    /// Returns the number of vessels in the instance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hawser_model::instance::InstanceBuilder;
    ///
    /// let instance = InstanceBuilder::<i64>::new(5, 3).build();
    /// assert_eq!(instance.num_vessels(), 5);
    /// ```
    #[inline]
    pub fn num_vessels(&self) -> usize {
        self.arrival_times.len()
    }

    /// Returns the number of berths in the instance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hawser_model::instance::InstanceBuilder;
    ///
    /// let instance = InstanceBuilder::<i64>::new(2, 4).build();
    /// assert_eq!(instance.num_berths(), 4);
    /// ```
    #[inline]
    pub fn num_berths(&self) -> usize {
        self.berth_windows.len()
    }

    /// Returns a slice of all arrival times, indexed by vessel.
    #[inline]
    pub fn vessel_arrival_times(&self) -> &[T] {
        &self.arrival_times
    }

    /// Returns a slice of all latest allowed departure times, indexed by vessel.
    #[inline]
    pub fn vessel_max_departure_times(&self) -> &[T] {
        &self.max_departure_times
    }

    /// Returns a slice of all vessel weights, indexed by vessel.
    #[inline]
    pub fn vessel_weights(&self) -> &[T] {
        &self.vessel_weights
    }

    /// Returns the flat, row-major handling-time matrix.
    ///
    /// The entry for `(vessel, berth)` lives at `vessel * num_berths() + berth`.
    #[inline]
    pub fn vessel_handling_times(&self) -> &[HandlingTime<T>] {
        &self.handling_times
    }

    /// Returns a slice of all berth availability windows, indexed by berth.
    #[inline]
    pub fn berth_windows(&self) -> &[HalfOpenInterval<T>] {
        &self.berth_windows
    }

    /// Returns a slice of all shortest handling times, indexed by vessel.
    #[inline]
    pub fn vessel_shortest_handling_times(&self) -> &[HandlingTime<T>] {
        &self.shortest_handling_times
    }

    /// Returns the arrival time for the specified vessel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hawser_model::{index::VesselIndex, instance::InstanceBuilder};
    ///
    /// let mut builder = InstanceBuilder::<i64>::new(2, 2);
    /// builder.set_vessel_arrival_time(VesselIndex::new(0), 10);
    /// builder.set_vessel_arrival_time(VesselIndex::new(1), 20);
    /// let instance = builder.build();
    /// assert_eq!(instance.vessel_arrival_time(VesselIndex::new(0)), 10);
    /// assert_eq!(instance.vessel_arrival_time(VesselIndex::new(1)), 20);
    /// ```
    #[inline]
    pub fn vessel_arrival_time(&self, vessel_index: VesselIndex) -> T {
        let index = vessel_index.get();
        debug_assert!(
            index < self.num_vessels(),
            "called `Instance::vessel_arrival_time` with vessel index out of bounds: the len is {} but the index is {}",
            self.num_vessels(),
            index
        );

        self.arrival_times[index]
    }

    /// Returns the latest allowed departure time for the specified vessel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hawser_model::{index::VesselIndex, instance::InstanceBuilder};
    ///
    /// let mut builder = InstanceBuilder::<i64>::new(1, 1);
    /// builder.set_vessel_max_departure_time(VesselIndex::new(0), 500);
    /// let instance = builder.build();
    /// assert_eq!(instance.vessel_max_departure_time(VesselIndex::new(0)), 500);
    /// ```
    #[inline]
    pub fn vessel_max_departure_time(&self, vessel_index: VesselIndex) -> T {
        let index = vessel_index.get();
        debug_assert!(
            index < self.num_vessels(),
            "called `Instance::vessel_max_departure_time` with vessel index out of bounds: the len is {} but the index is {}",
            self.num_vessels(),
            index
        );

        self.max_departure_times[index]
    }

    /// Returns the objective weight for the specified vessel.
    #[inline]
    pub fn vessel_weight(&self, vessel_index: VesselIndex) -> T {
        let index = vessel_index.get();
        debug_assert!(
            index < self.num_vessels(),
            "called `Instance::vessel_weight` with vessel index out of bounds: the len is {} but the index is {}",
            self.num_vessels(),
            index
        );

        self.vessel_weights[index]
    }

    /// Returns the handling time for the specified (vessel, berth) pair.
    ///
    /// A `None` result marks a forbidden pairing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hawser_model::{
    /// #     index::{BerthIndex, VesselIndex},
    /// #     instance::InstanceBuilder,
    /// #     time::HandlingTime,
    /// # };
    ///
    /// let mut builder = InstanceBuilder::<i64>::new(1, 2);
    /// builder.set_vessel_handling_time(
    ///     VesselIndex::new(0),
    ///     BerthIndex::new(0),
    ///     HandlingTime::some(50),
    /// );
    /// let instance = builder.build();
    /// assert_eq!(
    ///     instance.vessel_handling_time(VesselIndex::new(0), BerthIndex::new(0)),
    ///     HandlingTime::some(50)
    /// );
    /// assert_eq!(
    ///     instance.vessel_handling_time(VesselIndex::new(0), BerthIndex::new(1)),
    ///     HandlingTime::none()
    /// );
    /// ```
    #[inline]
    pub fn vessel_handling_time(
        &self,
        vessel_index: VesselIndex,
        berth_index: BerthIndex,
    ) -> HandlingTime<T> {
        debug_assert!(
            vessel_index.get() < self.num_vessels(),
            "called `Instance::vessel_handling_time` with vessel index out of bounds: the len is {} but the index is {}",
            self.num_vessels(),
            vessel_index.get()
        );

        debug_assert!(
            berth_index.get() < self.num_berths(),
            "called `Instance::vessel_handling_time` with berth index out of bounds: the len is {} but the index is {}",
            self.num_berths(),
            berth_index.get()
        );

        let flat_index = flatten_index(self.num_berths(), vessel_index, berth_index);
        self.handling_times[flat_index]
    }

    /// Returns `true` if the specified vessel may be served at the specified berth.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hawser_model::{
    /// #     index::{BerthIndex, VesselIndex},
    /// #     instance::InstanceBuilder,
    /// #     time::HandlingTime,
    /// # };
    ///
    /// let mut builder = InstanceBuilder::<i64>::new(1, 2);
    /// builder.set_vessel_handling_time(
    ///     VesselIndex::new(0),
    ///     BerthIndex::new(1),
    ///     HandlingTime::some(8),
    /// );
    /// let instance = builder.build();
    /// assert!(!instance.vessel_allowed_on_berth(VesselIndex::new(0), BerthIndex::new(0)));
    /// assert!(instance.vessel_allowed_on_berth(VesselIndex::new(0), BerthIndex::new(1)));
    /// ```
    #[inline]
    pub fn vessel_allowed_on_berth(
        &self,
        vessel_index: VesselIndex,
        berth_index: BerthIndex,
    ) -> bool
    where
        T: MinusOne,
    {
        self.vessel_handling_time(vessel_index, berth_index)
            .is_some()
    }

    /// Returns the availability window of the specified berth.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hawser_core::math::interval::HalfOpenInterval;
    /// # use hawser_model::{index::BerthIndex, instance::InstanceBuilder};
    ///
    /// let mut builder = InstanceBuilder::<i64>::new(1, 1);
    /// builder.set_berth_window(BerthIndex::new(0), HalfOpenInterval::new(3, 101));
    /// let instance = builder.build();
    /// assert_eq!(
    ///     instance.berth_window(BerthIndex::new(0)),
    ///     HalfOpenInterval::new(3, 101)
    /// );
    /// ```
    #[inline]
    pub fn berth_window(&self, berth_index: BerthIndex) -> HalfOpenInterval<T> {
        let index = berth_index.get();
        debug_assert!(
            index < self.num_berths(),
            "called `Instance::berth_window` with berth index out of bounds: the len is {} but the index is {}",
            self.num_berths(),
            index
        );

        self.berth_windows[index]
    }

    /// Returns the shortest handling time across all berths for the specified
    /// vessel, or `None` if every berth is forbidden for it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hawser_model::{
    /// #     index::{BerthIndex, VesselIndex},
    /// #     instance::InstanceBuilder,
    /// #     time::HandlingTime,
    /// # };
    ///
    /// let mut builder = InstanceBuilder::<i64>::new(1, 2);
    /// builder.set_vessel_handling_time(
    ///     VesselIndex::new(0),
    ///     BerthIndex::new(0),
    ///     HandlingTime::some(50),
    /// );
    /// builder.set_vessel_handling_time(
    ///     VesselIndex::new(0),
    ///     BerthIndex::new(1),
    ///     HandlingTime::some(30),
    /// );
    /// let instance = builder.build();
    /// assert_eq!(
    ///     instance.vessel_shortest_handling_time(VesselIndex::new(0)),
    ///     HandlingTime::some(30)
    /// );
    /// ```
    #[inline]
    pub fn vessel_shortest_handling_time(&self, vessel_index: VesselIndex) -> HandlingTime<T> {
        let index = vessel_index.get();
        debug_assert!(
            index < self.num_vessels(),
            "called `Instance::vessel_shortest_handling_time` with vessel index out of bounds: the len is {} but the index is {}",
            self.num_vessels(),
            index
        );

        self.shortest_handling_times[index]
    }
}

impl<T> std::fmt::Debug for Instance<T>
where
    T: PrimInt + Signed + MinusOne + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Instance")
            .field("arrival_times", &self.arrival_times)
            .field("max_departure_times", &self.max_departure_times)
            .field("vessel_weights", &self.vessel_weights)
            .field("handling_times", &self.handling_times)
            .field("berth_windows", &self.berth_windows)
            .field("shortest_handling_times", &self.shortest_handling_times)
            .finish()
    }
}

impl<T> std::fmt::Display for Instance<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Instance(num_vessels: {}, num_berths: {})",
            self.num_vessels(),
            self.num_berths()
        )
    }
}

/// A mutable builder for `Instance`.
///
/// The builder starts from **permissive bounds** and an **empty topology**:
/// nothing is assumed to exist until defined.
///
/// | Field | Default Value | Semantics |
/// | :--- | :--- | :--- |
/// | `berth_windows` | `[0, T::MAX)` | Berths are available over the whole horizon. |
/// | `arrival_times` | `0` | Vessels are ready at the start of the horizon. |
/// | `max_departure_times` | `T::MAX` | Vessels have no deadline. |
/// | `vessel_weights` | `1` | All vessels have equal priority. |
/// | `handling_times` | `None` | Every pairing is forbidden until set. |
///
/// Because the handling-time matrix defaults to `None`, a freshly built
/// instance has no servable vessel until connections are added explicitly.
/// This keeps impossible pairings from being used silently.
#[derive(Clone)]
pub struct InstanceBuilder<T>
where
    T: PrimInt + Signed,
{
    num_vessels: usize,
    num_berths: usize,
    arrival_times: Vec<T>,
    max_departure_times: Vec<T>,
    vessel_weights: Vec<T>,
    handling_times: Vec<HandlingTime<T>>,
    berth_windows: Vec<HalfOpenInterval<T>>,
}

impl<T> InstanceBuilder<T>
where
    T: PrimInt + Signed + MinusOne,
{
    /// Creates a new `InstanceBuilder` for the given dimensions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hawser_model::instance::InstanceBuilder;
    ///
    /// let builder = InstanceBuilder::<i64>::new(5, 3);
    /// assert_eq!(builder.num_vessels(), 5);
    /// assert_eq!(builder.num_berths(), 3);
    /// ```
    pub fn new(num_vessels: usize, num_berths: usize) -> Self {
        InstanceBuilder {
            num_vessels,
            num_berths,
            arrival_times: vec![T::zero(); num_vessels],
            max_departure_times: vec![T::max_value(); num_vessels],
            vessel_weights: vec![T::one(); num_vessels],
            handling_times: vec![HandlingTime::none(); num_vessels * num_berths],
            berth_windows: vec![
                HalfOpenInterval::new(T::zero(), T::max_value());
                num_berths
            ],
        }
    }

    /// Returns the number of vessels the builder was created for.
    #[inline]
    pub fn num_vessels(&self) -> usize {
        self.num_vessels
    }

    /// Returns the number of berths the builder was created for.
    #[inline]
    pub fn num_berths(&self) -> usize {
        self.num_berths
    }

    /// Sets the arrival time for the specified vessel.
    #[inline]
    pub fn set_vessel_arrival_time(
        &mut self,
        vessel_index: VesselIndex,
        arrival_time: T,
    ) -> &mut Self {
        let index = vessel_index.get();
        debug_assert!(
            index < self.num_vessels(),
            "called `InstanceBuilder::set_vessel_arrival_time` with vessel index out of bounds: the len is {} but the index is {}",
            self.num_vessels(),
            index
        );

        self.arrival_times[index] = arrival_time;
        self
    }

    /// Sets the latest allowed departure time for the specified vessel.
    #[inline]
    pub fn set_vessel_max_departure_time(
        &mut self,
        vessel_index: VesselIndex,
        max_departure_time: T,
    ) -> &mut Self {
        let index = vessel_index.get();
        debug_assert!(
            index < self.num_vessels(),
            "called `InstanceBuilder::set_vessel_max_departure_time` with vessel index out of bounds: the len is {} but the index is {}",
            self.num_vessels(),
            index
        );

        self.max_departure_times[index] = max_departure_time;
        self
    }

    /// Sets the objective weight for the specified vessel.
    #[inline]
    pub fn set_vessel_weight(&mut self, vessel_index: VesselIndex, weight: T) -> &mut Self {
        let index = vessel_index.get();
        debug_assert!(
            index < self.num_vessels(),
            "called `InstanceBuilder::set_vessel_weight` with vessel index out of bounds: the len is {} but the index is {}",
            self.num_vessels(),
            index
        );

        self.vessel_weights[index] = weight;
        self
    }

    /// Sets the handling time for the specified (vessel, berth) pair.
    ///
    /// Pass `HandlingTime::none()` to mark the pairing forbidden.
    #[inline]
    pub fn set_vessel_handling_time(
        &mut self,
        vessel_index: VesselIndex,
        berth_index: BerthIndex,
        handling_time: HandlingTime<T>,
    ) -> &mut Self {
        debug_assert!(
            vessel_index.get() < self.num_vessels(),
            "called `InstanceBuilder::set_vessel_handling_time` with vessel index out of bounds: the len is {} but the index is {}",
            self.num_vessels(),
            vessel_index.get()
        );

        debug_assert!(
            berth_index.get() < self.num_berths(),
            "called `InstanceBuilder::set_vessel_handling_time` with berth index out of bounds: the len is {} but the index is {}",
            self.num_berths(),
            berth_index.get()
        );

        let flat_index = flatten_index(self.num_berths, vessel_index, berth_index);
        self.handling_times[flat_index] = handling_time;
        self
    }

    /// Sets the availability window for the specified berth.
    #[inline]
    pub fn set_berth_window(
        &mut self,
        berth_index: BerthIndex,
        window: HalfOpenInterval<T>,
    ) -> &mut Self {
        let index = berth_index.get();
        debug_assert!(
            index < self.num_berths(),
            "called `InstanceBuilder::set_berth_window` with berth index out of bounds: the len is {} but the index is {}",
            self.num_berths(),
            index
        );

        self.berth_windows[index] = window;
        self
    }

    /// Consumes the builder and produces the immutable `Instance`.
    ///
    /// Derived data (the per-vessel shortest handling times) is computed here,
    /// once, so queries on the finished instance stay allocation-free.
    pub fn build(self) -> Instance<T> {
        let num_berths = self.num_berths;
        let mut shortest_handling_times = Vec::with_capacity(self.num_vessels);
        for vessel in 0..self.num_vessels {
            let row = &self.handling_times[vessel * num_berths..(vessel + 1) * num_berths];
            let shortest = row
                .iter()
                .filter_map(HandlingTime::into_option)
                .min()
                .map_or_else(HandlingTime::none, HandlingTime::from_raw);
            shortest_handling_times.push(shortest);
        }

        Instance {
            arrival_times: self.arrival_times,
            max_departure_times: self.max_departure_times,
            vessel_weights: self.vessel_weights,
            handling_times: self.handling_times,
            berth_windows: self.berth_windows,
            shortest_handling_times,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> InstanceBuilder<i64> {
        let mut builder = InstanceBuilder::new(2, 2);
        builder
            .set_vessel_arrival_time(VesselIndex::new(0), 0)
            .set_vessel_arrival_time(VesselIndex::new(1), 5)
            .set_vessel_max_departure_time(VesselIndex::new(0), 20)
            .set_vessel_max_departure_time(VesselIndex::new(1), 50)
            .set_vessel_handling_time(
                VesselIndex::new(0),
                BerthIndex::new(0),
                HandlingTime::some(3),
            )
            .set_vessel_handling_time(
                VesselIndex::new(0),
                BerthIndex::new(1),
                HandlingTime::some(7),
            )
            .set_vessel_handling_time(
                VesselIndex::new(1),
                BerthIndex::new(1),
                HandlingTime::some(4),
            )
            .set_berth_window(BerthIndex::new(0), HalfOpenInterval::new(0, 101))
            .set_berth_window(BerthIndex::new(1), HalfOpenInterval::new(10, 201));
        builder
    }

    #[test]
    fn test_builder_defaults() {
        let instance = InstanceBuilder::<i64>::new(3, 2).build();
        assert_eq!(instance.num_vessels(), 3);
        assert_eq!(instance.num_berths(), 2);
        assert_eq!(instance.vessel_arrival_times(), &[0, 0, 0]);
        assert_eq!(instance.vessel_max_departure_times(), &[i64::MAX; 3]);
        assert_eq!(instance.vessel_weights(), &[1, 1, 1]);
        assert!(instance.vessel_handling_times().iter().all(|h| h.is_none()));
        for berth in 0..2 {
            assert_eq!(
                instance.berth_window(BerthIndex::new(berth)),
                HalfOpenInterval::new(0, i64::MAX)
            );
        }
    }

    #[test]
    fn test_flat_matrix_layout_is_row_major() {
        let instance = two_by_two().build();
        let flat = instance.vessel_handling_times();
        assert_eq!(flat.len(), 4);
        assert_eq!(flat[0], HandlingTime::some(3)); // (0, 0)
        assert_eq!(flat[1], HandlingTime::some(7)); // (0, 1)
        assert_eq!(flat[2], HandlingTime::none()); // (1, 0)
        assert_eq!(flat[3], HandlingTime::some(4)); // (1, 1)
    }

    #[test]
    fn test_forbidden_pairing_is_not_allowed() {
        let instance = two_by_two().build();
        assert!(instance.vessel_allowed_on_berth(VesselIndex::new(0), BerthIndex::new(0)));
        assert!(!instance.vessel_allowed_on_berth(VesselIndex::new(1), BerthIndex::new(0)));
    }

    #[test]
    fn test_shortest_handling_times() {
        let instance = two_by_two().build();
        assert_eq!(
            instance.vessel_shortest_handling_time(VesselIndex::new(0)),
            HandlingTime::some(3)
        );
        assert_eq!(
            instance.vessel_shortest_handling_time(VesselIndex::new(1)),
            HandlingTime::some(4)
        );

        let all_forbidden = InstanceBuilder::<i64>::new(1, 3).build();
        assert!(
            all_forbidden
                .vessel_shortest_handling_time(VesselIndex::new(0))
                .is_none()
        );
    }

    #[test]
    fn test_instances_with_same_data_are_equal() {
        let a = two_by_two().build();
        let b = two_by_two().build();
        assert_eq!(a, b);

        let mut builder = two_by_two();
        builder.set_vessel_weight(VesselIndex::new(0), 2);
        assert_ne!(a, builder.build());
    }

    #[test]
    fn test_display() {
        let instance = two_by_two().build();
        assert_eq!(
            format!("{}", instance),
            "Instance(num_vessels: 2, num_berths: 2)"
        );
    }
}
