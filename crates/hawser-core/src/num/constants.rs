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

/// Signed integer types with a `const` -1.
///
/// `num_traits` only exposes `-1` through `Signed::neg(One::one())`, which
/// is not usable in `const` position. Sentinel encodings that reserve the
/// negative range need the constant itself.
///
/// ```rust
/// use hawser_core::num::constants::MinusOne;
///
/// const SENTINEL: i64 = i64::MINUS_ONE;
/// assert_eq!(SENTINEL, -1);
/// ```
pub trait MinusOne {
    /// The value -1 of the implementing type.
    const MINUS_ONE: Self;
}

macro_rules! minus_one_impl {
    ($($t:ty),+ $(,)?) => {
        $(
            impl MinusOne for $t {
                const MINUS_ONE: Self = -1;
            }
        )+
    };
}

minus_one_impl!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minus_one_matches_the_literal() {
        assert_eq!(i8::MINUS_ONE, -1i8);
        assert_eq!(i32::MINUS_ONE, -1i32);
        assert_eq!(i128::MINUS_ONE, -1i128);
        assert_eq!(isize::MINUS_ONE, -1isize);
    }
}
