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

//! # Hawser Core
//!
//! Foundational primitives shared across the hawser berth-allocation
//! tooling: half-open interval math for availability windows, sentinel
//! constant traits for compact optional integers, and phantom-tagged
//! typed indices that keep vessel and berth index spaces apart at
//! compile time.
//!
//! ## Modules
//!
//! - `math`: the `HalfOpenInterval` `[start, end)` type with validated
//!   construction and containment/overlap queries.
//! - `num`: associated-constant traits such as `MinusOne` for accessing
//!   sentinel values in generic code.
//! - `utils`: zero-cost strongly typed indices (`TypedIndex<T>`).

pub mod math;
pub mod num;
pub mod utils;
