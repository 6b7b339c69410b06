// SPDX-License-Identifier: MIT
//
// Copyright (c) 2026 the tinmesh developers
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::fmt::{Debug, Display};
use std::str::FromStr;

use num_traits::Float;
use rug::Rational;

/// Coordinate scalar for the geometry and triangulation kernels.
///
/// A `Scalar` carries two images of itself: a value-preserving `f64`
/// approximation that drives the floating-point filter, and an exact
/// `rug::Rational` image the predicates fall back to when the filter cannot
/// certify a sign.
pub trait Scalar: Float + FromStr + Debug + Display {
    /// Value-preserving `f64` image used by the filtered predicate path.
    fn approx(self) -> f64;

    /// Exact rational image. The coordinate must be finite.
    fn exact(self) -> Rational;

    /// Conversion from an `f64` constant.
    fn of(v: f64) -> Self;
}

impl Scalar for f64 {
    #[inline]
    fn approx(self) -> f64 {
        self
    }

    fn exact(self) -> Rational {
        Rational::from_f64(self).expect("Scalar::exact: non-finite coordinate")
    }

    #[inline]
    fn of(v: f64) -> Self {
        v
    }
}

impl Scalar for f32 {
    #[inline]
    fn approx(self) -> f64 {
        self as f64
    }

    fn exact(self) -> Rational {
        Rational::from_f32(self).expect("Scalar::exact: non-finite coordinate")
    }

    #[inline]
    fn of(v: f64) -> Self {
        v as f32
    }
}
