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

//! Instance serializer for the DBAP benchmark format.
//!
//! The writer is the exact inverse of `crate::loading::InstanceLoader`:
//! blocks are emitted in the same fixed order, berth windows are folded back
//! from the internal half-open `[s, e + 1)` representation to the inclusive
//! `s` / `e` pair the files carry, and forbidden pairings are re-emitted as
//! the `99999` sentinel. Writing an instance and loading it back yields an
//! equal `Instance`.

use crate::{
    index::{BerthIndex, VesselIndex},
    instance::Instance,
    loading::FORBIDDEN_SENTINEL,
};
use hawser_core::num::constants::MinusOne;
use num_traits::{PrimInt, Signed};
use std::{
    fmt::Display,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// The error type for the instance writing process.
#[derive(Debug)]
pub enum InstanceWriteError {
    /// An I/O error occurred while writing the output stream.
    Io(std::io::Error),
    /// The instance contains a forbidden pairing but no sentinel value is
    /// representable in the configured numeric type.
    UnrepresentableSentinel,
}

impl Display for InstanceWriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnrepresentableSentinel => {
                write!(
                    f,
                    "Instance contains a forbidden pairing but no sentinel value fits the output type"
                )
            }
        }
    }
}

impl std::error::Error for InstanceWriteError {}

impl From<std::io::Error> for InstanceWriteError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// A configurable writer for DBAP benchmark instances.
///
/// # Configuration
/// * `forbidden_as`: The value emitted for forbidden pairings. Defaults to the
///   benchmark sentinel `99999`; for narrow numeric types where the sentinel
///   does not fit, configure a representable substitute via
///   [`InstanceWriter::forbidden_as`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceWriter<T> {
    forbidden_as: Option<T>,
}

impl<T> Default for InstanceWriter<T>
where
    T: PrimInt,
{
    fn default() -> Self {
        Self {
            forbidden_as: T::from(FORBIDDEN_SENTINEL),
        }
    }
}

impl<T> InstanceWriter<T>
where
    T: PrimInt + Signed + MinusOne + Display,
{
    /// Creates a new `InstanceWriter` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value emitted for forbidden pairings.
    #[inline]
    pub fn forbidden_as(mut self, v: T) -> Self {
        self.forbidden_as = Some(v);
        self
    }

    /// Writes the instance to a type implementing `Write`.
    pub fn to_writer<W: Write>(
        &self,
        instance: &Instance<T>,
        mut w: W,
    ) -> Result<(), InstanceWriteError> {
        let n = instance.num_vessels();
        let m = instance.num_berths();

        writeln!(w, "{}", n)?;
        writeln!(w, "{}", m)?;

        write_row(&mut w, instance.vessel_arrival_times())?;

        // Opening times: the window start maps back unchanged.
        let openings: Vec<T> = instance.berth_windows().iter().map(|win| win.start()).collect();
        write_row(&mut w, &openings)?;

        // Handling matrix, one vessel per line.
        for i in 0..n {
            let v_idx = VesselIndex::new(i);
            for j in 0..m {
                let ht = instance.vessel_handling_time(v_idx, BerthIndex::new(j));
                let value = match ht.into_option() {
                    Some(v) => v,
                    None => self
                        .forbidden_as
                        .ok_or(InstanceWriteError::UnrepresentableSentinel)?,
                };

                if j > 0 {
                    write!(w, " ")?;
                }
                write!(w, "{}", value)?;
            }
            writeln!(w)?;
        }

        // Closing times: fold the exclusive window end back to the inclusive
        // closing time the files carry.
        let closings: Vec<T> = instance
            .berth_windows()
            .iter()
            .map(|win| {
                if win.end() == T::max_value() {
                    win.end()
                } else {
                    win.end() - T::one()
                }
            })
            .collect();
        write_row(&mut w, &closings)?;

        write_row(&mut w, instance.vessel_max_departure_times())?;

        w.flush()?;
        Ok(())
    }

    /// Writes the instance to a file path.
    #[inline]
    pub fn to_path<P: AsRef<Path>>(
        &self,
        instance: &Instance<T>,
        path: P,
    ) -> Result<(), InstanceWriteError> {
        let file = File::create(path)?;
        self.to_writer(instance, BufWriter::new(file))
    }

    /// Serializes the instance into a `String`.
    pub fn to_string(&self, instance: &Instance<T>) -> Result<String, InstanceWriteError> {
        let mut buf = Vec::new();
        self.to_writer(instance, &mut buf)?;
        // The emitted format is plain ASCII.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

fn write_row<T, W>(w: &mut W, values: &[T]) -> Result<(), InstanceWriteError>
where
    T: Display,
    W: Write,
{
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            write!(w, " ")?;
        }
        write!(w, "{}", value)?;
    }
    writeln!(w)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{instance::InstanceBuilder, loading::InstanceLoader, time::HandlingTime};
    use hawser_core::math::interval::HalfOpenInterval;

    fn small_instance() -> Instance<i64> {
        let mut builder = InstanceBuilder::new(2, 1);
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
            .set_berth_window(BerthIndex::new(0), HalfOpenInterval::new(0, 101));
        builder.build()
    }

    #[test]
    fn test_exact_output_layout() {
        let writer = InstanceWriter::new();
        let text = writer.to_string(&small_instance()).expect("Failed to write");

        assert_eq!(text, "2\n1\n0 5\n0\n3\n99999\n100\n20 50\n");
    }

    #[test]
    fn test_round_trip_preserves_instance() {
        let original = small_instance();
        let text = InstanceWriter::new()
            .to_string(&original)
            .expect("Failed to write");

        let reloaded: Instance<i64> = InstanceLoader::new()
            .fail_on_unassignable(false)
            .from_str(&text)
            .expect("Failed to reload");

        assert_eq!(original, reloaded);
    }

    #[test]
    fn test_custom_forbidden_value() {
        let writer = InstanceWriter::new().forbidden_as(-1);
        let text = writer.to_string(&small_instance()).expect("Failed to write");
        assert!(text.contains("-1"));
        assert!(!text.contains("99999"));
    }

    #[test]
    fn test_unrepresentable_sentinel() {
        // 99999 does not fit into i8, and no substitute was configured.
        let mut builder = InstanceBuilder::<i8>::new(1, 1);
        builder.set_berth_window(BerthIndex::new(0), HalfOpenInterval::new(0, 100));
        let instance = builder.build();

        let res = InstanceWriter::new().to_string(&instance);
        assert!(matches!(
            res,
            Err(InstanceWriteError::UnrepresentableSentinel)
        ));
    }
}
