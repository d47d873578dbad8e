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

//! # Hawser Model
//!
//! **The data-interchange layer for the Dynamic Berth Allocation Problem
//! (DBAP) benchmark format.**
//!
//! This crate defines the complete contract around the flat-text instance
//! files used by the `f200x15`/`f250x20` benchmark sets: an immutable,
//! validated in-memory representation, a fail-fast loader, an exact
//! serializer, a solution record with the standard turnaround metrics, and
//! a seeded generator for synthetic instances. It deliberately contains no
//! solver; consuming optimizers bring their own search on top of this
//! model.
//!
//! ## Architecture
//!
//! * **`index`**: strongly-typed `VesselIndex`/`BerthIndex` wrappers to
//!   prevent logical indexing errors.
//! * **`time`**: the `HandlingTime` sentinel-based optional duration, where
//!   absence marks a forbidden vessel-berth pairing.
//! * **`instance`**: the immutable `Instance` (Structure-of-Arrays layout)
//!   and the mutable `InstanceBuilder`.
//! * **`loading`** / **`writing`**: the fixed-order text format, parsed
//!   and re-emitted bit-exactly (forbidden cells round-trip as the `99999`
//!   sentinel).
//! * **`solution`**: an immutable assignment record plus turnaround and
//!   makespan metrics and a deep consistency check.
//! * **`benchmark`**: the published instance sets and their
//!   `f<N>x<M>-<idx>.txt` naming convention.
//! * **`generator`**: deterministic synthetic instances for tests and
//!   benchmarks.
//!
//! ## Design Philosophy
//!
//! 1. **Fail-Fast**: a truncated or malformed instance is unusable for any
//!    downstream computation, so the loader surfaces the first error and
//!    never yields a partial result.
//! 2. **Immutability**: an `Instance` is read once and never mutated; it is
//!    a pure input record for the lifetime of a solving session.
//! 3. **Memory Layout**: per-vessel and per-berth data live in flat vectors
//!    (SoA), with the handling-time matrix stored row-major.

pub mod benchmark;
pub mod generator;
pub mod index;
pub mod instance;
pub mod loading;
pub mod solution;
pub mod time;
pub mod writing;
