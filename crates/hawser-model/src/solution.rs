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
    instance::Instance,
};
use hawser_core::{math::interval::HalfOpenInterval, num::constants::MinusOne};
use num_traits::{PrimInt, Signed, ToPrimitive};

/// An assignment of every vessel to a berth and a service interval.
///
/// This struct uses a Structure of Arrays (SoA) layout. Data is indexed
/// directly by `VesselIndex` (i.e., index `i` corresponds to vessel `i`).
/// A `Solution` is a plain record: it does not know which `Instance` it
/// belongs to, and `Solution::verify` checks it against one explicitly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution<T> {
    /// The assigned berth for each vessel.
    berths: Vec<BerthIndex>,

    /// The service start time for each vessel.
    start_times: Vec<T>,

    /// The service completion time for each vessel.
    completion_times: Vec<T>,
}

/// The error type returned by `Solution::verify`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolutionError {
    /// The solution does not cover the same number of vessels as the instance.
    DimensionMismatch,
    /// A vessel is assigned to a berth index outside `0..num_berths()`.
    BerthOutOfRange(VesselIndex),
    /// A vessel is assigned to a berth it is forbidden on.
    ForbiddenAssignment(VesselIndex),
    /// A vessel's completion time does not equal its start time plus its
    /// handling time at the assigned berth.
    CompletionMismatch(VesselIndex),
    /// A vessel starts service before it arrives.
    StartsBeforeArrival(VesselIndex),
    /// A vessel's service interval leaves the availability window of its berth.
    OutsideBerthWindow(VesselIndex),
    /// A vessel completes after its latest allowed departure.
    MissesDeadline(VesselIndex),
    /// Two vessels occupy the same berth at the same time.
    Overlap(VesselIndex, VesselIndex),
}

impl std::fmt::Display for SolutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DimensionMismatch => {
                write!(f, "Solution and instance cover different vessel counts")
            }
            Self::BerthOutOfRange(v) => {
                write!(f, "Vessel {} is assigned to a berth that does not exist", v.get())
            }
            Self::ForbiddenAssignment(v) => {
                write!(f, "Vessel {} is assigned to a forbidden berth", v.get())
            }
            Self::CompletionMismatch(v) => write!(
                f,
                "Vessel {} has a completion time inconsistent with its handling time",
                v.get()
            ),
            Self::StartsBeforeArrival(v) => {
                write!(f, "Vessel {} starts service before its arrival", v.get())
            }
            Self::OutsideBerthWindow(v) => write!(
                f,
                "Vessel {} is served outside the availability window of its berth",
                v.get()
            ),
            Self::MissesDeadline(v) => write!(
                f,
                "Vessel {} completes after its latest allowed departure",
                v.get()
            ),
            Self::Overlap(a, b) => write!(
                f,
                "Vessels {} and {} overlap on the same berth",
                a.get(),
                b.get()
            ),
        }
    }
}

impl std::error::Error for SolutionError {}

impl<T> Solution<T>
where
    T: PrimInt + Signed + Copy,
{
    /// Constructs a new `Solution`.
    ///
    /// # Panics
    ///
    /// Panics if the three vectors have different lengths.
    pub fn new(berths: Vec<BerthIndex>, start_times: Vec<T>, completion_times: Vec<T>) -> Self {
        assert!(
            berths.len() == start_times.len() && berths.len() == completion_times.len(),
            "called Solution::new with inconsistent vector lengths: berths.len() = {}, start_times.len() = {}, completion_times.len() = {}",
            berths.len(),
            start_times.len(),
            completion_times.len()
        );

        Self {
            berths,
            start_times,
            completion_times,
        }
    }

    /// Returns the number of vessels in this solution.
    #[inline]
    pub fn num_vessels(&self) -> usize {
        self.berths.len()
    }

    /// Returns the assigned berth for a specific vessel.
    #[inline]
    pub fn berth_for_vessel(&self, vessel_index: VesselIndex) -> BerthIndex {
        let index = vessel_index.get();
        debug_assert!(
            index < self.num_vessels(),
            "called `Solution::berth_for_vessel` with vessel index out of bounds: the len is {} but the index is {}",
            self.num_vessels(),
            index
        );

        self.berths[index]
    }

    /// Returns the service start time for a specific vessel.
    #[inline]
    pub fn start_time_for_vessel(&self, vessel_index: VesselIndex) -> T {
        let index = vessel_index.get();
        debug_assert!(
            index < self.num_vessels(),
            "called `Solution::start_time_for_vessel` with vessel index out of bounds: the len is {} but the index is {}",
            self.num_vessels(),
            index
        );

        self.start_times[index]
    }

    /// Returns the service completion time for a specific vessel.
    #[inline]
    pub fn completion_time_for_vessel(&self, vessel_index: VesselIndex) -> T {
        let index = vessel_index.get();
        debug_assert!(
            index < self.num_vessels(),
            "called `Solution::completion_time_for_vessel` with vessel index out of bounds: the len is {} but the index is {}",
            self.num_vessels(),
            index
        );

        self.completion_times[index]
    }

    /// Returns a slice of assigned berths for all vessels.
    #[inline]
    pub fn berths(&self) -> &[BerthIndex] {
        &self.berths
    }

    /// Returns a slice of service start times for all vessels.
    #[inline]
    pub fn start_times(&self) -> &[T] {
        &self.start_times
    }

    /// Returns a slice of service completion times for all vessels.
    #[inline]
    pub fn completion_times(&self) -> &[T] {
        &self.completion_times
    }

    /// Returns the turnaround time (completion minus arrival) of a vessel.
    #[inline]
    pub fn turnaround_time(&self, instance: &Instance<T>, vessel_index: VesselIndex) -> T {
        self.completion_time_for_vessel(vessel_index) - instance.vessel_arrival_time(vessel_index)
    }

    /// Returns the turnaround time of every vessel, indexed by vessel.
    pub fn turnaround_times(&self, instance: &Instance<T>) -> Vec<T> {
        (0..self.num_vessels())
            .map(|i| self.turnaround_time(instance, VesselIndex::new(i)))
            .collect()
    }

    /// Returns the sum of unweighted turnaround times.
    pub fn total_turnaround(&self, instance: &Instance<T>) -> T {
        let mut total = T::zero();
        for i in 0..self.num_vessels() {
            total = total + self.turnaround_time(instance, VesselIndex::new(i));
        }
        total
    }

    /// Returns the mean turnaround time, or `None` for an empty solution or a
    /// total that does not fit into an `f64`.
    pub fn mean_turnaround_time(&self, instance: &Instance<T>) -> Option<f64> {
        if self.num_vessels() == 0 {
            return None;
        }
        let total = self.total_turnaround(instance).to_f64()?;
        Some(total / self.num_vessels() as f64)
    }

    /// Returns the sum of weighted turnaround times, the standard DBAP
    /// objective value.
    pub fn total_weighted_turnaround(&self, instance: &Instance<T>) -> T {
        let mut total = T::zero();
        for i in 0..self.num_vessels() {
            let v_idx = VesselIndex::new(i);
            total = total + instance.vessel_weight(v_idx) * self.turnaround_time(instance, v_idx);
        }
        total
    }

    /// Returns the latest completion time across all vessels, or `None` for an
    /// empty solution.
    #[inline]
    pub fn makespan(&self) -> Option<T> {
        self.completion_times.iter().copied().max()
    }

    /// Checks the solution against an instance.
    ///
    /// Verified conditions, in order:
    /// 1. The solution covers exactly the instance's vessels.
    /// 2. Every assigned berth exists and is not forbidden for its vessel.
    /// 3. Completion equals start plus handling time.
    /// 4. No vessel starts before its arrival.
    /// 5. Every service interval lies inside the berth's availability window.
    /// 6. No vessel completes after its latest allowed departure.
    /// 7. Service intervals on the same berth do not overlap.
    pub fn verify(&self, instance: &Instance<T>) -> Result<(), SolutionError>
    where
        T: MinusOne,
    {
        if self.num_vessels() != instance.num_vessels() {
            return Err(SolutionError::DimensionMismatch);
        }

        for i in 0..self.num_vessels() {
            let v_idx = VesselIndex::new(i);
            let b_idx = self.berths[i];

            if b_idx.get() >= instance.num_berths() {
                return Err(SolutionError::BerthOutOfRange(v_idx));
            }

            let handling = instance
                .vessel_handling_time(v_idx, b_idx)
                .into_option()
                .ok_or(SolutionError::ForbiddenAssignment(v_idx))?;

            let start = self.start_times[i];
            let completion = self.completion_times[i];

            if completion != start + handling {
                return Err(SolutionError::CompletionMismatch(v_idx));
            }

            if start < instance.vessel_arrival_time(v_idx) {
                return Err(SolutionError::StartsBeforeArrival(v_idx));
            }

            let service = HalfOpenInterval::new(start, completion);
            if !instance.berth_window(b_idx).contains_interval(service) {
                return Err(SolutionError::OutsideBerthWindow(v_idx));
            }

            if completion > instance.vessel_max_departure_time(v_idx) {
                return Err(SolutionError::MissesDeadline(v_idx));
            }
        }

        // Overlap check: sort occupancies per berth by start time, then every
        // service must start at or after its predecessor's completion.
        let mut occupancy: Vec<(usize, usize)> = (0..self.num_vessels())
            .map(|i| (self.berths[i].get(), i))
            .collect();
        occupancy.sort_by_key(|&(berth, vessel)| (berth, self.start_times[vessel]));

        for pair in occupancy.windows(2) {
            let (berth_a, vessel_a) = pair[0];
            let (berth_b, vessel_b) = pair[1];
            if berth_a == berth_b && self.start_times[vessel_b] < self.completion_times[vessel_a] {
                return Err(SolutionError::Overlap(
                    VesselIndex::new(vessel_a),
                    VesselIndex::new(vessel_b),
                ));
            }
        }

        Ok(())
    }
}

impl<T> std::fmt::Display for Solution<T>
where
    T: PrimInt + Signed + Copy + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solution Summary")?;

        if self.num_vessels() == 0 {
            writeln!(f, "   (No vessels assigned)")?;
            return Ok(());
        }

        writeln!(
            f,
            "   {:<10} | {:<10} | {:<12} | {:<12}",
            "Vessel", "Berth", "Start Time", "Completion"
        )?;
        writeln!(f, "   {:-<10}-+-{:-<10}-+-{:-<12}-+-{:-<12}", "", "", "", "")?;
        for i in 0..self.num_vessels() {
            writeln!(
                f,
                "   {:<10} | {:<10} | {:<12} | {:<12}",
                i,
                self.berths[i].get(),
                self.start_times[i],
                self.completion_times[i]
            )?;
        }

        Ok(())
    }
}
