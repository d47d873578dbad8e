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

//! Synthetic instance generation for tests and benchmarks.
//!
//! Generated instances follow the statistical shape of the published
//! benchmark sets: vessel arrivals form a Poisson process over a discrete
//! horizon (exponential interarrival times, rounded to integer ticks),
//! handling times are drawn uniformly from a configured range, and each
//! vessel-berth pairing is independently forbidden with a configured
//! probability. Every vessel keeps at least one admissible berth, so a
//! generated instance always passes the loader's feasibility check after a
//! write/load round trip.
//!
//! Generation is fully deterministic in the seed.

use crate::{
    index::{BerthIndex, VesselIndex},
    instance::{Instance, InstanceBuilder},
    time::HandlingTime,
};
use hawser_core::{math::interval::HalfOpenInterval, num::constants::MinusOne};
use num_traits::{NumCast, PrimInt, Signed};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use rand_distr::{Distribution, Exp, uniform::SampleUniform};
use std::fmt::Display;

/// Configuration for generating a synthetic DBAP instance.
///
/// Times are discrete integer ticks. Arrivals fall into `[0, horizon]`;
/// every berth is available over `[0, horizon + deadline_slack]` (inclusive,
/// as in the file format), and each vessel's latest departure is its arrival
/// plus `max_handling + deadline_slack`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig<T> {
    /// Number of vessels (N) to generate.
    num_vessels: usize,

    /// Number of berths (M) to generate.
    num_berths: usize,

    /// Latest arrival time point.
    horizon: T,

    /// Arrival rate per time unit for the Poisson process.
    ///
    /// If `0.0`, arrivals are sampled uniformly in `[0, horizon]` instead.
    lambda_per_time: f64,

    /// Minimum handling time to sample (inclusive).
    min_handling: T,

    /// Maximum handling time to sample (inclusive).
    max_handling: T,

    /// Probability that a given vessel-berth pairing is forbidden.
    ///
    /// One randomly chosen berth per vessel is exempt, so no vessel ends up
    /// unassignable.
    forbidden_probability: f64,

    /// Extra slack added beyond the minimum feasible departure deadline.
    deadline_slack: T,

    /// RNG seed for reproducible generation.
    seed: u64,
}

/// The error type for invalid generator configurations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorConfigError {
    /// N or M is zero.
    EmptyDimensions,
    /// `min_handling` exceeds `max_handling`, or a handling bound is negative.
    InvalidHandlingRange,
    /// `forbidden_probability` is not in `[0, 1]`, or `lambda_per_time` is
    /// negative or not finite.
    InvalidRate,
}

impl Display for GeneratorConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDimensions => write!(f, "Generator dimensions (N and M) must be positive"),
            Self::InvalidHandlingRange => {
                write!(f, "Handling time range must be non-negative and ordered")
            }
            Self::InvalidRate => {
                write!(
                    f,
                    "Forbidden probability must lie in [0, 1] and the arrival rate must be finite and non-negative"
                )
            }
        }
    }
}

impl std::error::Error for GeneratorConfigError {}

impl<T> GeneratorConfig<T>
where
    T: PrimInt + Signed,
{
    /// Creates a validated generator configuration.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        num_vessels: usize,
        num_berths: usize,
        horizon: T,
        lambda_per_time: f64,
        min_handling: T,
        max_handling: T,
        forbidden_probability: f64,
        deadline_slack: T,
        seed: u64,
    ) -> Result<Self, GeneratorConfigError> {
        if num_vessels == 0 || num_berths == 0 {
            return Err(GeneratorConfigError::EmptyDimensions);
        }
        if min_handling < T::zero() || min_handling > max_handling {
            return Err(GeneratorConfigError::InvalidHandlingRange);
        }
        if !(0.0..=1.0).contains(&forbidden_probability)
            || !lambda_per_time.is_finite()
            || lambda_per_time < 0.0
        {
            return Err(GeneratorConfigError::InvalidRate);
        }

        Ok(Self {
            num_vessels,
            num_berths,
            horizon,
            lambda_per_time,
            min_handling,
            max_handling,
            forbidden_probability,
            deadline_slack,
            seed,
        })
    }

    #[inline]
    pub fn num_vessels(&self) -> usize {
        self.num_vessels
    }

    #[inline]
    pub fn num_berths(&self) -> usize {
        self.num_berths
    }

    #[inline]
    pub fn horizon(&self) -> T {
        self.horizon
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

/// A seeded generator producing `Instance` values from a `GeneratorConfig`.
pub struct InstanceGenerator<T>
where
    T: PrimInt + Signed,
{
    cfg: GeneratorConfig<T>,
    rng: SmallRng,
}

impl<T> InstanceGenerator<T>
where
    T: PrimInt + Signed + MinusOne + NumCast + SampleUniform + Display,
{
    pub fn new(cfg: GeneratorConfig<T>) -> Self {
        let seed = cfg.seed();
        Self {
            cfg,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Generates the next instance.
    ///
    /// Calling this repeatedly yields a stream of distinct instances; the
    /// whole stream is determined by the seed.
    pub fn generate(&mut self) -> Instance<T> {
        let n = self.cfg.num_vessels;
        let m = self.cfg.num_berths;

        let mut builder = InstanceBuilder::new(n, m);

        let arrivals = self.sample_arrivals(n);
        for (i, &arrival) in arrivals.iter().enumerate() {
            builder.set_vessel_arrival_time(VesselIndex::new(i), arrival);
        }

        // Handling matrix. One randomly chosen berth per vessel is never
        // forbidden, keeping every vessel assignable.
        for i in 0..n {
            let guaranteed = self.rng.random_range(0..m);
            for j in 0..m {
                let forbidden =
                    j != guaranteed && self.rng.random_bool(self.cfg.forbidden_probability);
                let handling = if forbidden {
                    HandlingTime::none()
                } else {
                    HandlingTime::some(self.sample_handling())
                };
                builder.set_vessel_handling_time(VesselIndex::new(i), BerthIndex::new(j), handling);
            }
        }

        // Berths stay open from the start of the horizon until every vessel
        // can plausibly be served; expressed as the half-open window matching
        // the inclusive closing time `horizon + deadline_slack`.
        let closing = self.cfg.horizon + self.cfg.deadline_slack;
        for j in 0..m {
            builder.set_berth_window(
                BerthIndex::new(j),
                HalfOpenInterval::new(T::zero(), closing + T::one()),
            );
        }

        for (i, &arrival) in arrivals.iter().enumerate() {
            let deadline = arrival + self.cfg.max_handling + self.cfg.deadline_slack;
            builder.set_vessel_max_departure_time(VesselIndex::new(i), deadline);
        }

        builder.build()
    }

    fn sample_arrivals(&mut self, n: usize) -> Vec<T> {
        let mut out = Vec::with_capacity(n);

        if self.cfg.lambda_per_time > 0.0 {
            // Exp(lambda) interarrivals accumulate into a Poisson process.
            let exp = Exp::new(self.cfg.lambda_per_time).expect("validated arrival rate");
            let mut t_f = 0.0f64;
            while out.len() < n {
                t_f += exp.sample(&mut self.rng);
                let rounded = t_f.round() as i64;
                let arrival: T = match NumCast::from(rounded.max(0)) {
                    Some(v) if v <= self.cfg.horizon => v,
                    _ => break,
                };
                out.push(arrival);
            }
        }

        // Top up uniformly if the process left the horizon early (or was
        // disabled entirely).
        while out.len() < n {
            out.push(self.rng.random_range(T::zero()..=self.cfg.horizon));
        }

        out.sort();
        out.truncate(n);
        out
    }

    #[inline]
    fn sample_handling(&mut self) -> T {
        self.rng
            .random_range(self.cfg.min_handling..=self.cfg.max_handling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{loading::InstanceLoader, writing::InstanceWriter};

    fn cfg(seed: u64) -> GeneratorConfig<i64> {
        GeneratorConfig::new(
            40,   // num_vessels
            5,    // num_berths
            96,   // horizon
            0.9,  // lambda_per_time
            2,    // min_handling
            12,   // max_handling
            0.25, // forbidden_probability
            48,   // deadline_slack
            seed,
        )
        .unwrap()
    }

    #[test]
    fn test_config_validation() {
        assert_eq!(
            GeneratorConfig::<i64>::new(0, 5, 96, 0.9, 2, 12, 0.25, 48, 1),
            Err(GeneratorConfigError::EmptyDimensions)
        );
        assert_eq!(
            GeneratorConfig::<i64>::new(40, 5, 96, 0.9, 13, 12, 0.25, 48, 1),
            Err(GeneratorConfigError::InvalidHandlingRange)
        );
        assert_eq!(
            GeneratorConfig::<i64>::new(40, 5, 96, 0.9, 2, 12, 1.5, 48, 1),
            Err(GeneratorConfigError::InvalidRate)
        );
        assert_eq!(
            GeneratorConfig::<i64>::new(40, 5, 96, -1.0, 2, 12, 0.25, 48, 1),
            Err(GeneratorConfigError::InvalidRate)
        );
    }

    #[test]
    fn test_generated_shape_and_bounds() {
        let config = cfg(42);
        let mut generator = InstanceGenerator::new(config.clone());
        let instance = generator.generate();

        assert_eq!(instance.num_vessels(), config.num_vessels());
        assert_eq!(instance.num_berths(), config.num_berths());

        let mut previous = i64::MIN;
        for i in 0..instance.num_vessels() {
            let v_idx = VesselIndex::new(i);
            let arrival = instance.vessel_arrival_time(v_idx);
            assert!((0..=96).contains(&arrival));
            assert!(arrival >= previous, "arrivals must be sorted");
            previous = arrival;

            assert!(instance.vessel_max_departure_time(v_idx) >= arrival);

            // At least one admissible berth per vessel.
            assert!(
                instance.vessel_shortest_handling_time(v_idx).is_some(),
                "vessel {} has no admissible berth",
                i
            );

            for j in 0..instance.num_berths() {
                if let Some(h) = instance
                    .vessel_handling_time(v_idx, BerthIndex::new(j))
                    .into_option()
                {
                    assert!((2..=12).contains(&h));
                }
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic_in_the_seed() {
        let a = InstanceGenerator::new(cfg(7)).generate();
        let b = InstanceGenerator::new(cfg(7)).generate();
        assert_eq!(a, b);

        let c = InstanceGenerator::new(cfg(8)).generate();
        assert_ne!(a, c);
    }

    #[test]
    fn test_successive_instances_differ() {
        let mut generator = InstanceGenerator::new(cfg(21));
        let first = generator.generate();
        let second = generator.generate();
        assert_ne!(first, second);
    }

    #[test]
    fn test_generated_instances_round_trip_through_the_format() {
        let mut generator = InstanceGenerator::new(cfg(1234));
        let original = generator.generate();

        let text = InstanceWriter::new()
            .to_string(&original)
            .expect("Failed to write");
        let reloaded = InstanceLoader::<i64>::new()
            .from_str(&text)
            .expect("Failed to reload");

        assert_eq!(original, reloaded);
    }
}
