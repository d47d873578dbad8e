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

//! The published DBAP benchmark sets and their file naming convention.
//!
//! Instance files are named `f<N>x<M>-<idx>.txt`, where `N` is the number of
//! vessels, `M` the number of berths, and `idx` a 1-based, zero-padded
//! instance counter within the set (`f200x15-01.txt` through
//! `f200x15-10.txt`).

use regex::Regex;
use std::sync::OnceLock;

/// A family of benchmark instances sharing the same dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkSet {
    /// The number of vessels (N) in every instance of the set.
    pub num_vessels: usize,
    /// The number of berths (M) in every instance of the set.
    pub num_berths: usize,
    /// How many instances the set contains.
    pub num_instances: usize,
}

/// The 200-vessel, 15-berth benchmark set.
pub const F200X15: BenchmarkSet = BenchmarkSet {
    num_vessels: 200,
    num_berths: 15,
    num_instances: 10,
};

/// The 250-vessel, 20-berth benchmark set.
pub const F250X20: BenchmarkSet = BenchmarkSet {
    num_vessels: 250,
    num_berths: 20,
    num_instances: 10,
};

/// All published benchmark sets.
pub const PUBLISHED_SETS: [BenchmarkSet; 2] = [F200X15, F250X20];

impl BenchmarkSet {
    /// Returns the set prefix, e.g. `"f200x15"`.
    pub fn prefix(&self) -> String {
        format!("f{}x{}", self.num_vessels, self.num_berths)
    }

    /// Returns the file name of the instance with the given 1-based index,
    /// or `None` if the index is outside `1..=num_instances`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hawser_model::benchmark::F200X15;
    ///
    /// assert_eq!(F200X15.file_name(1), Some("f200x15-01.txt".to_string()));
    /// assert_eq!(F200X15.file_name(10), Some("f200x15-10.txt".to_string()));
    /// assert_eq!(F200X15.file_name(11), None);
    /// ```
    pub fn file_name(&self, index: usize) -> Option<String> {
        if index == 0 || index > self.num_instances {
            return None;
        }
        Some(format!("{}-{:02}.txt", self.prefix(), index))
    }

    /// Returns the file names of all instances in the set, in order.
    pub fn file_names(&self) -> impl Iterator<Item = String> + '_ {
        (1..=self.num_instances).map(|i| format!("{}-{:02}.txt", self.prefix(), i))
    }
}

impl std::fmt::Display for BenchmarkSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} instances)", self.prefix(), self.num_instances)
    }
}

/// The dimensions and index recovered from a benchmark file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedFileName {
    /// The number of vessels (N) encoded in the name.
    pub num_vessels: usize,
    /// The number of berths (M) encoded in the name.
    pub num_berths: usize,
    /// The 1-based instance index within the set.
    pub index: usize,
}

impl ParsedFileName {
    /// Returns the published set this name belongs to, if any.
    pub fn published_set(&self) -> Option<BenchmarkSet> {
        PUBLISHED_SETS.into_iter().find(|set| {
            set.num_vessels == self.num_vessels
                && set.num_berths == self.num_berths
                && self.index >= 1
                && self.index <= set.num_instances
        })
    }
}

fn file_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^f(\d+)x(\d+)-(\d+)\.txt$").unwrap())
}

/// Parses a benchmark file name of the form `f<N>x<M>-<idx>.txt`.
///
/// Returns `None` for names that do not follow the convention.
///
/// # Examples
///
/// ```rust
/// # use hawser_model::benchmark::parse_file_name;
///
/// let parsed = parse_file_name("f250x20-03.txt").unwrap();
/// assert_eq!(parsed.num_vessels, 250);
/// assert_eq!(parsed.num_berths, 20);
/// assert_eq!(parsed.index, 3);
///
/// assert!(parse_file_name("notes.txt").is_none());
/// ```
pub fn parse_file_name(name: &str) -> Option<ParsedFileName> {
    let caps = file_name_regex().captures(name)?;
    Some(ParsedFileName {
        num_vessels: caps[1].parse().ok()?,
        num_berths: caps[2].parse().ok()?,
        index: caps[3].parse().ok()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_is_one_based_and_zero_padded() {
        assert_eq!(F250X20.file_name(1), Some("f250x20-01.txt".to_string()));
        assert_eq!(F250X20.file_name(10), Some("f250x20-10.txt".to_string()));
        assert_eq!(F250X20.file_name(0), None);
        assert_eq!(F250X20.file_name(11), None);
    }

    #[test]
    fn test_file_names_enumerates_the_whole_set() {
        let names: Vec<String> = F200X15.file_names().collect();
        assert_eq!(names.len(), 10);
        assert_eq!(names[0], "f200x15-01.txt");
        assert_eq!(names[9], "f200x15-10.txt");
    }

    #[test]
    fn test_parse_round_trips_generated_names() {
        for set in PUBLISHED_SETS {
            for (i, name) in set.file_names().enumerate() {
                let parsed = parse_file_name(&name).expect("generated name must parse");
                assert_eq!(parsed.num_vessels, set.num_vessels);
                assert_eq!(parsed.num_berths, set.num_berths);
                assert_eq!(parsed.index, i + 1);
                assert_eq!(parsed.published_set(), Some(set));
            }
        }
    }

    #[test]
    fn test_parse_rejects_non_conforming_names() {
        assert!(parse_file_name("f200x15-01").is_none());
        assert!(parse_file_name("g200x15-01.txt").is_none());
        assert!(parse_file_name("f200x15_01.txt").is_none());
        assert!(parse_file_name("f200x-01.txt").is_none());
        assert!(parse_file_name("").is_none());
    }

    #[test]
    fn test_unknown_dimensions_have_no_published_set() {
        let parsed = parse_file_name("f100x5-01.txt").unwrap();
        assert_eq!(parsed.published_set(), None);

        // Right dimensions but an index outside the set.
        let parsed = parse_file_name("f200x15-11.txt").unwrap();
        assert_eq!(parsed.published_set(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", F200X15), "f200x15 (10 instances)");
    }
}
