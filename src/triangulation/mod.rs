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

use thiserror::Error;

use crate::geometry::point_set::PointSet;
use crate::numeric::scalar::Scalar;

pub mod delaunay;

/// Errors surfaced by triangulation. Construction is pure and deterministic;
/// nothing here is retried.
#[derive(Debug, Error)]
pub enum TriangulationError {
    /// Fewer than three points were supplied.
    #[error("triangulation needs at least 3 points, got {count}")]
    InsufficientPoints { count: usize },

    /// Two members of the point set share an identical (x, y) projection.
    /// `PointSet::dedup` is the sanctioned repair.
    #[error("points {first} and {second} coincide in the projection plane")]
    DuplicatePoint { first: usize, second: usize },

    /// A NaN or infinite coordinate reached the triangulator.
    #[error("coordinate of point {index} is not finite")]
    NonFiniteCoordinate { index: usize },

    /// The predicates produced an impossible topology. Always a defect in
    /// the algorithm, never bad input.
    #[error("internal invariant violated: {detail}")]
    InvariantViolation { detail: String },
}

/// A triangle as three point-set indices, counter-clockwise, rotated so the
/// smallest index comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle(pub usize, pub usize, pub usize);

impl Triangle {
    /// Canonical form of `(a, b, c)`: cyclic order preserved, smallest
    /// index first.
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        if a <= b && a <= c {
            Triangle(a, b, c)
        } else if b <= a && b <= c {
            Triangle(b, c, a)
        } else {
            Triangle(c, a, b)
        }
    }

    #[inline]
    pub fn indices(&self) -> [usize; 3] {
        [self.0, self.1, self.2]
    }
}

/// A frozen Delaunay triangulation over a point set.
///
/// Triangles are sorted by index triple, so identical inputs produce
/// identical output down to the byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triangulation {
    /// Size of the point set this was built from.
    pub point_count: usize,
    pub triangles: Vec<Triangle>,
}

impl Triangulation {
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

/// Seam for plugging in alternative planar triangulators.
pub trait Triangulate2D<T>
where
    T: Scalar,
{
    fn triangulate(points: &PointSet<T>) -> Result<Triangulation, TriangulationError>;
}
