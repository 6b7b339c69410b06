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

//! The two predicates whose signs decide every topological choice the
//! triangulator makes. Each evaluates its determinant in f64 first and
//! trusts that value only outside a forward error bound; inside the bound
//! the sign is recomputed in exact rational arithmetic.

use std::cmp::Ordering;

use rug::Rational;

use crate::geometry::Point2;
use crate::numeric::scalar::Scalar;

// Forward error bounds on the filtered determinants, with eps = 2^-53:
// (3 + 16 eps) eps for orient2d, (10 + 96 eps) eps for incircle.
const O2D_BOUND: f64 = 3.330_669_073_875_471_6e-16;
const ICC_BOUND: f64 = 1.110_223_024_625_156_5e-15;

/// Sign of a predicate determinant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    #[inline]
    pub fn is_positive(self) -> bool {
        self == Sign::Positive
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self == Sign::Zero
    }

    fn of_f64(v: f64) -> Self {
        if v > 0.0 {
            Sign::Positive
        } else if v < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    fn of_rational(v: &Rational) -> Self {
        match v.cmp0() {
            Ordering::Greater => Sign::Positive,
            Ordering::Less => Sign::Negative,
            Ordering::Equal => Sign::Zero,
        }
    }
}

/// Orientation of `c` relative to the directed line `a -> b`.
///
/// Returns:
/// - `Positive` if counter-clockwise
/// - `Negative` if clockwise
/// - `Zero` if collinear
pub fn orient2d<T>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> Sign
where
    T: Scalar,
{
    let (ax, ay) = (a.x.approx(), a.y.approx());
    let (bx, by) = (b.x.approx(), b.y.approx());
    let (cx, cy) = (c.x.approx(), c.y.approx());

    let detleft = (bx - ax) * (cy - ay);
    let detright = (by - ay) * (cx - ax);
    let det = detleft - detright;

    let detsum = detleft.abs() + detright.abs();
    if det.abs() > O2D_BOUND * detsum {
        return Sign::of_f64(det);
    }

    orient2d_exact(a, b, c)
}

fn orient2d_exact<T>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> Sign
where
    T: Scalar,
{
    let ax = a.x.exact();
    let ay = a.y.exact();
    let bx = b.x.exact();
    let by = b.y.exact();
    let cx = c.x.exact();
    let cy = c.y.exact();

    let left = Rational::from(&bx - &ax) * Rational::from(&cy - &ay);
    let right = Rational::from(&by - &ay) * Rational::from(&cx - &ax);
    Sign::of_rational(&(left - right))
}

/// In-circle test against the circumcircle of the counter-clockwise
/// triangle `(a, b, c)`.
///
/// Returns:
/// - `Positive` if `d` lies strictly inside the circumcircle
/// - `Negative` if strictly outside
/// - `Zero` if exactly on it
///
/// The sign flips when `(a, b, c)` is clockwise; callers keep their
/// triangles counter-clockwise.
pub fn incircle<T>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>, d: &Point2<T>) -> Sign
where
    T: Scalar,
{
    let (dx, dy) = (d.x.approx(), d.y.approx());
    let adx = a.x.approx() - dx;
    let ady = a.y.approx() - dy;
    let bdx = b.x.approx() - dx;
    let bdy = b.y.approx() - dy;
    let cdx = c.x.approx() - dx;
    let cdy = c.y.approx() - dy;

    let bdxcdy = bdx * cdy;
    let cdxbdy = cdx * bdy;
    let alift = adx * adx + ady * ady;

    let cdxady = cdx * ady;
    let adxcdy = adx * cdy;
    let blift = bdx * bdx + bdy * bdy;

    let adxbdy = adx * bdy;
    let bdxady = bdx * ady;
    let clift = cdx * cdx + cdy * cdy;

    let det = alift * (bdxcdy - cdxbdy) + blift * (cdxady - adxcdy) + clift * (adxbdy - bdxady);

    let permanent = (bdxcdy.abs() + cdxbdy.abs()) * alift
        + (cdxady.abs() + adxcdy.abs()) * blift
        + (adxbdy.abs() + bdxady.abs()) * clift;
    if det.abs() > ICC_BOUND * permanent {
        return Sign::of_f64(det);
    }

    incircle_exact(a, b, c, d)
}

fn incircle_exact<T>(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>, d: &Point2<T>) -> Sign
where
    T: Scalar,
{
    let dx = d.x.exact();
    let dy = d.y.exact();
    let adx = Rational::from(&a.x.exact() - &dx);
    let ady = Rational::from(&a.y.exact() - &dy);
    let bdx = Rational::from(&b.x.exact() - &dx);
    let bdy = Rational::from(&b.y.exact() - &dy);
    let cdx = Rational::from(&c.x.exact() - &dx);
    let cdy = Rational::from(&c.y.exact() - &dy);

    let alift = Rational::from(&adx * &adx) + Rational::from(&ady * &ady);
    let blift = Rational::from(&bdx * &bdx) + Rational::from(&bdy * &bdy);
    let clift = Rational::from(&cdx * &cdx) + Rational::from(&cdy * &cdy);

    let minor_a = Rational::from(&bdx * &cdy) - Rational::from(&cdx * &bdy);
    let minor_b = Rational::from(&cdx * &ady) - Rational::from(&adx * &cdy);
    let minor_c = Rational::from(&adx * &bdy) - Rational::from(&bdx * &ady);

    let det = alift * minor_a + blift * minor_b + clift * minor_c;
    Sign::of_rational(&det)
}
