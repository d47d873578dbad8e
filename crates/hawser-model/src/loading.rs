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

//! Instance loader for the DBAP benchmark format.
//!
//! This module turns whitespace-delimited text streams into a validated
//! `Instance`, mapping arrivals, berth windows, handling times, and deadlines
//! into the compact layout consumed by downstream optimizers.
//!
//! The loader is strict and fail-fast: a truncated stream, a malformed token,
//! a berth that closes before it opens, or a vessel whose deadline precedes
//! its arrival all abort the load with an error naming the offending token or
//! index. Handling times at or above a configurable threshold (by default the
//! `99999` sentinel used by the published benchmark files) are treated as
//! forbidden pairings, and an optional feasibility check rejects instances
//! where some vessel has no admissible berth at all.
//!
//! The parser accepts any `BufRead`, file path, raw reader, or string slice.
//! Lines may contain comments introduced by `#`, which are ignored during
//! tokenization, and any tokens after the final deadline block are ignored.

use crate::{
    index::{BerthIndex, VesselIndex},
    instance::{Instance, InstanceBuilder},
    time::HandlingTime,
};
use hawser_core::{math::interval::HalfOpenInterval, num::constants::MinusOne};
use num_traits::{PrimInt, Signed};
use std::{
    fmt::{Debug, Display},
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};

/// The sentinel value the benchmark files use to mark a forbidden
/// vessel-berth pairing in the handling-time matrix.
pub const FORBIDDEN_SENTINEL: u32 = 99_999;

/// The error type for the instance loading process.
#[derive(Debug)]
pub enum InstanceLoadError {
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
    /// The input stream ended unexpectedly (e.g., missing tokens).
    UnexpectedEof,
    /// A token could not be parsed into the expected numeric type.
    Parse(ParseTokenError),
    /// The instance dimensions (N or M) are invalid (must be > 0).
    InvalidDimensions,
    /// A berth closes before it opens.
    Window(BerthWindowError),
    /// A vessel's latest departure precedes its arrival.
    Deadline(DeadlineError),
    /// The instance is logically infeasible based on the loader configuration.
    Feasibility(FeasibilityError),
}

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "i64").
    pub type_name: &'static str,
}

impl std::fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Could not parse token '{}' as type {}",
            self.token, self.type_name
        )
    }
}

impl std::error::Error for ParseTokenError {}

/// Details about an inverted berth availability window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BerthWindowError {
    /// The index of the berth whose closing time precedes its opening time.
    pub berth_index: BerthIndex,
}

impl std::fmt::Display for BerthWindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Berth {} closes before it opens",
            self.berth_index.get()
        )
    }
}

impl std::error::Error for BerthWindowError {}

/// Details about a deadline that precedes the corresponding arrival.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlineError {
    /// The index of the vessel whose latest departure precedes its arrival.
    pub vessel_index: VesselIndex,
}

impl std::fmt::Display for DeadlineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vessel {} has a latest departure before its arrival",
            self.vessel_index.get()
        )
    }
}

impl std::error::Error for DeadlineError {}

/// Details about a logical feasibility violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeasibilityError {
    /// The index of the vessel that could not be assigned to any berth.
    pub vessel_index: VesselIndex,
}

impl std::fmt::Display for FeasibilityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vessel {} has no valid berth assignments",
            self.vessel_index.get()
        )
    }
}

impl std::error::Error for FeasibilityError {}

impl Display for InstanceLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof => write!(f, "Unexpected end of file while parsing instance"),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::InvalidDimensions => {
                write!(f, "Instance dimensions (N and M) must be positive integers")
            }
            Self::Window(e) => write!(f, "Window error: {}", e),
            Self::Deadline(e) => write!(f, "Deadline error: {}", e),
            Self::Feasibility(e) => write!(f, "Feasibility error: {}", e),
        }
    }
}

impl std::error::Error for InstanceLoadError {}

impl From<std::io::Error> for InstanceLoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseTokenError> for InstanceLoadError {
    fn from(e: ParseTokenError) -> Self {
        Self::Parse(e)
    }
}

impl From<BerthWindowError> for InstanceLoadError {
    fn from(e: BerthWindowError) -> Self {
        Self::Window(e)
    }
}

impl From<DeadlineError> for InstanceLoadError {
    fn from(e: DeadlineError) -> Self {
        Self::Deadline(e)
    }
}

impl From<FeasibilityError> for InstanceLoadError {
    fn from(e: FeasibilityError) -> Self {
        Self::Feasibility(e)
    }
}

/// A configurable loader for DBAP benchmark instances.
///
/// The format this parser expects is as follows (whitespace-separated tokens):
///
/// ```raw
/// N // number of vessels
/// M // number of berths
/// a_1 ... a_N (arrival time of the vessels)
/// s_1 ... s_M (opening time of the berths)
/// h_1_1 ... h_1_M (handling time of vessel 1 at berth 1, berth 2, ...)
/// ...
/// h_N_1 ... h_N_M (handling time of vessel N at berth 1, berth 2, ...)
/// e_1 ... e_M (closing time of the berths)
/// b_1 ... b_N (latest allowed departure of the vessels)
/// ```
///
/// Opening and closing times are inclusive in the file and mapped to the
/// half-open window `[s_j, e_j + 1)` internally. Tokens after the final
/// deadline block are ignored.
///
/// # Configuration
/// * `forbid_at_least`: Any handling time >= this value is treated as `None`
///   (forbidden). Defaults to the benchmark sentinel `99999`; pass a different
///   threshold for formats that encode "Infinity" differently.
/// * `fail_on_unassignable`: If true (the default), the loader returns an
///   error if any vessel cannot be served anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceLoader<T> {
    forbid_at_least: Option<T>,
    fail_on_unassignable: bool,
}

impl<T> Default for InstanceLoader<T>
where
    T: PrimInt,
{
    fn default() -> Self {
        Self {
            forbid_at_least: T::from(FORBIDDEN_SENTINEL),
            fail_on_unassignable: true,
        }
    }
}

impl<T> InstanceLoader<T>
where
    T: PrimInt + Signed + MinusOne + FromStr + Display + Debug,
{
    /// Creates a new `InstanceLoader` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the threshold value. Any handling time read from the input that is
    /// greater than or equal to `v` will be treated as forbidden
    /// (`HandlingTime::none()`).
    #[inline]
    pub fn forbid_at_least(mut self, v: T) -> Self {
        self.forbid_at_least = Some(v);
        self
    }

    /// Configures whether to return an error if a vessel ends up with no valid
    /// berth options.
    #[inline]
    pub fn fail_on_unassignable(mut self, yes: bool) -> Self {
        self.fail_on_unassignable = yes;
        self
    }

    /// Loads an instance from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<Instance<T>, InstanceLoadError> {
        let mut sc = Scanner::new(rdr);

        // Dimensions
        let n_val: T = sc.next()?;
        let m_val: T = sc.next()?;

        let n = n_val
            .to_usize()
            .ok_or(InstanceLoadError::InvalidDimensions)?;
        let m = m_val
            .to_usize()
            .ok_or(InstanceLoadError::InvalidDimensions)?;

        if n == 0 || m == 0 {
            return Err(InstanceLoadError::InvalidDimensions);
        }

        let mut builder = InstanceBuilder::new(n, m);

        // Arrival times (a)
        let mut arrivals = Vec::with_capacity(n);
        for i in 0..n {
            let val = sc.next()?;
            arrivals.push(val);
            builder.set_vessel_arrival_time(VesselIndex::new(i), val);
        }

        // Opening times (s); windows are completed once the closings arrive.
        let mut openings = Vec::with_capacity(m);
        for _ in 0..m {
            openings.push(sc.next()?);
        }

        // Handling matrix (h): rows are vessels, columns are berths.
        for i in 0..n {
            let v_idx = VesselIndex::new(i);
            let mut feasible_found = false;

            for j in 0..m {
                let h_val: T = sc.next()?;
                let b_idx = BerthIndex::new(j);

                let is_forbidden = self.forbid_at_least.is_some_and(|limit| h_val >= limit);

                if !is_forbidden && h_val >= T::zero() {
                    builder.set_vessel_handling_time(v_idx, b_idx, HandlingTime::some(h_val));
                    feasible_found = true;
                } else {
                    builder.set_vessel_handling_time(v_idx, b_idx, HandlingTime::none());
                }
            }

            if self.fail_on_unassignable && !feasible_found {
                return Err(InstanceLoadError::Feasibility(FeasibilityError {
                    vessel_index: v_idx,
                }));
            }
        }

        // Closing times (e): both ends are inclusive in the file, so berth j
        // is available over [s_j, e_j + 1).
        for (j, opening) in openings.into_iter().enumerate() {
            let closing: T = sc.next()?;
            if closing < opening {
                return Err(InstanceLoadError::Window(BerthWindowError {
                    berth_index: BerthIndex::new(j),
                }));
            }

            let end = if closing == T::max_value() {
                closing
            } else {
                closing + T::one()
            };
            builder.set_berth_window(BerthIndex::new(j), HalfOpenInterval::new(opening, end));
        }

        // Latest allowed departures (b)
        for (i, arrival) in arrivals.into_iter().enumerate() {
            let val: T = sc.next()?;
            if val < arrival {
                return Err(InstanceLoadError::Deadline(DeadlineError {
                    vessel_index: VesselIndex::new(i),
                }));
            }
            builder.set_vessel_max_departure_time(VesselIndex::new(i), val);
        }

        Ok(builder.build())
    }

    /// Loads an instance from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Instance<T>, InstanceLoadError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads an instance from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Instance<T>, InstanceLoadError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads an instance from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Instance<T>, InstanceLoadError> {
        self.from_reader(s.as_bytes())
    }
}

/// A helper to read whitespace-delimited tokens from a generic reader.
///
/// The benchmark files are plain ASCII, so the scanner walks the current line
/// as bytes. A `#` starts a comment that extends to the end of the line.
struct Scanner<R> {
    rdr: R,
    buf: String,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    #[inline]
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: String::new(),
            pos: 0,
        }
    }

    /// Refills the internal line buffer. Returns `Ok(true)` if data was read,
    /// `Ok(false)` on EOF.
    #[inline]
    fn fill_line(&mut self) -> Result<bool, InstanceLoadError> {
        self.buf.clear();
        self.pos = 0;
        let n = self
            .rdr
            .read_line(&mut self.buf)
            .map_err(InstanceLoadError::Io)?;
        Ok(n > 0)
    }

    /// Advances `pos` past whitespace; a `#` discards the rest of the line.
    #[inline]
    fn skip_separators(&mut self) {
        let bytes = self.buf.as_bytes();
        while self.pos < bytes.len() {
            let b = bytes[self.pos];
            if b == b'#' {
                self.pos = bytes.len();
                return;
            }
            if !b.is_ascii_whitespace() {
                return;
            }
            self.pos += 1;
        }
    }

    /// Advances `pos` to the end of the token starting at the current position.
    #[inline]
    fn advance_token(&mut self) {
        let bytes = self.buf.as_bytes();
        while self.pos < bytes.len() {
            let b = bytes[self.pos];
            if b == b'#' || b.is_ascii_whitespace() {
                return;
            }
            self.pos += 1;
        }
    }

    /// Reads the next token and parses it into `T`.
    fn next<T>(&mut self) -> Result<T, InstanceLoadError>
    where
        T: FromStr,
    {
        loop {
            self.skip_separators();

            if self.pos >= self.buf.len() {
                if !self.fill_line()? {
                    return Err(InstanceLoadError::UnexpectedEof);
                }
                continue;
            }

            let start = self.pos;
            self.advance_token();
            let token = &self.buf[start..self.pos];

            return token.parse::<T>().map_err(|_| {
                InstanceLoadError::Parse(ParseTokenError {
                    token: token.to_owned(),
                    type_name: std::any::type_name::<T>(),
                })
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_INSTANCE: &str = r#"
        2           # N vessels
        1           # M berths
        0 5         # Arrivals
        0           # Berth openings
        3           # Handling times vessel 0
        99999       # Handling times vessel 1 (forbidden)
        100         # Berth closings
        20 50       # Latest departures
    "#;

    #[test]
    fn test_loads_and_maps_correctly() {
        let loader = InstanceLoader::new().fail_on_unassignable(false);
        let instance: Instance<i64> = loader.from_str(SMALL_INSTANCE).expect("Failed to load");

        assert_eq!(instance.num_vessels(), 2);
        assert_eq!(instance.num_berths(), 1);

        assert_eq!(instance.vessel_arrival_times(), &[0, 5]);
        assert_eq!(instance.vessel_max_departure_times(), &[20, 50]);

        // Vessel 0 at berth 0 takes 3 time units.
        let ht = instance.vessel_handling_time(VesselIndex::new(0), BerthIndex::new(0));
        assert_eq!(Option::<i64>::from(ht), Some(3));

        // Vessel 1 at berth 0 carries the sentinel and must be forbidden.
        let ht = instance.vessel_handling_time(VesselIndex::new(1), BerthIndex::new(0));
        assert!(Option::<i64>::from(ht).is_none());

        // Inclusive [0, 100] in the file becomes the half-open [0, 101).
        assert_eq!(
            instance.berth_window(BerthIndex::new(0)),
            HalfOpenInterval::new(0, 101)
        );
    }

    #[test]
    fn test_fail_on_unassignable_is_the_default() {
        let loader = InstanceLoader::<i64>::new();
        let res = loader.from_str(SMALL_INSTANCE);

        match res {
            Err(InstanceLoadError::Feasibility(FeasibilityError { vessel_index })) => {
                assert_eq!(vessel_index.get(), 1);
            }
            _ => panic!("Expected FeasibilityError"),
        }
    }

    #[test]
    fn test_custom_forbid_threshold() {
        let data = "2 2  10 20  0 5  5 1000  999 6  100 200  50 60";
        let loader = InstanceLoader::new().forbid_at_least(900);
        let instance: Instance<i64> = loader.from_str(data).expect("Failed to load");

        let ht = instance.vessel_handling_time(VesselIndex::new(0), BerthIndex::new(1));
        assert!(Option::<i64>::from(ht).is_none());

        let ht = instance.vessel_handling_time(VesselIndex::new(0), BerthIndex::new(0));
        assert_eq!(Option::<i64>::from(ht), Some(5));
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        let loader = InstanceLoader::<i64>::new();
        assert!(matches!(
            loader.from_str("0 1"),
            Err(InstanceLoadError::InvalidDimensions)
        ));
        assert!(matches!(
            loader.from_str("1 0"),
            Err(InstanceLoadError::InvalidDimensions)
        ));
        assert!(matches!(
            loader.from_str("-1 3"),
            Err(InstanceLoadError::InvalidDimensions)
        ));
    }

    #[test]
    fn test_truncated_stream() {
        let loader = InstanceLoader::<i64>::new();
        let res = loader.from_str("2 1  0 5  0  3");
        assert!(matches!(res, Err(InstanceLoadError::UnexpectedEof)));
    }

    #[test]
    fn test_parse_error_structure() {
        let data = "2 2 garbage";
        let loader = InstanceLoader::<i64>::new();
        let res = loader.from_str(data);

        match res {
            Err(InstanceLoadError::Parse(e)) => {
                assert_eq!(e.token, "garbage");
                assert!(e.type_name.contains("i64"));
            }
            _ => panic!("Expected Parse error with context"),
        }
    }

    #[test]
    fn test_inverted_window_is_rejected() {
        // Berth 0 opens at 50 but closes at 10.
        let data = "1 1  0  50  5  10  100";
        let loader = InstanceLoader::<i64>::new();
        let res = loader.from_str(data);

        match res {
            Err(InstanceLoadError::Window(BerthWindowError { berth_index })) => {
                assert_eq!(berth_index.get(), 0);
            }
            _ => panic!("Expected Window error"),
        }
    }

    #[test]
    fn test_deadline_before_arrival_is_rejected() {
        // Vessel 0 arrives at 30 but must leave by 10.
        let data = "1 1  30  0  5  100  10";
        let loader = InstanceLoader::<i64>::new();
        let res = loader.from_str(data);

        match res {
            Err(InstanceLoadError::Deadline(DeadlineError { vessel_index })) => {
                assert_eq!(vessel_index.get(), 0);
            }
            _ => panic!("Expected Deadline error"),
        }
    }

    #[test]
    fn test_trailing_tokens_are_ignored() {
        let data = "1 1  0  0  5  100  50  7 8 9";
        let loader = InstanceLoader::<i64>::new();
        let instance = loader.from_str(data).expect("Failed to load");
        assert_eq!(instance.num_vessels(), 1);
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let data = "# header\n\n1 1\n# arrivals next\n0\n0\n5 # vessel 0 row\n100\n50\n";
        let loader = InstanceLoader::<i64>::new();
        let instance = loader.from_str(data).expect("Failed to load");
        assert_eq!(
            instance.vessel_handling_time(VesselIndex::new(0), BerthIndex::new(0)),
            HandlingTime::some(5)
        );
    }
}
