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

use tracing::warn;

use crate::geometry::{Point2, Point3};
use crate::numeric::scalar::Scalar;

/// Axis plane a cloud is flattened onto for triangulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Plane {
    /// Drop z. The terrain default.
    #[default]
    Xy,
    /// Drop y.
    Xz,
    /// Drop x.
    Yz,
}

/// An ordered set of 2D points, each remembering the index of the 3D point
/// it was projected from.
///
/// The set never copies or aliases `Point3` data; the source table is the
/// only link back, which keeps the 3D -> 2D -> mesh round trip lossless.
#[derive(Debug, Clone)]
pub struct PointSet<T>
where
    T: Scalar,
{
    points: Vec<Point2<T>>,
    source: Vec<usize>,
}

impl<T> PointSet<T>
where
    T: Scalar,
{
    /// Project a cloud onto the XY plane, order-preserving.
    pub fn project(cloud: &[Point3<T>]) -> Self {
        Self::project_onto(cloud, Plane::Xy)
    }

    /// Project a cloud onto an arbitrary axis plane.
    pub fn project_onto(cloud: &[Point3<T>], plane: Plane) -> Self {
        let points = cloud
            .iter()
            .map(|p| match plane {
                Plane::Xy => Point2 { x: p.x, y: p.y },
                Plane::Xz => Point2 { x: p.x, y: p.z },
                Plane::Yz => Point2 { x: p.y, y: p.z },
            })
            .collect::<Vec<_>>();
        let source = (0..cloud.len()).collect();
        Self { points, source }
    }

    /// Wrap an already-planar sequence; each point is its own source.
    pub fn from_points(points: Vec<Point2<T>>) -> Self {
        let source = (0..points.len()).collect();
        Self { points, source }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point2<T>] {
        &self.points
    }

    /// Index of the 3D point the `i`-th member was projected from.
    pub fn source_index(&self, i: usize) -> usize {
        self.source[i]
    }

    /// Drop exact (x, y) duplicates, keeping the first occurrence of each
    /// coordinate pair and preserving the input order of the survivors.
    ///
    /// Source indices of the kept points are carried over, so triangles can
    /// still be resolved against the original cloud afterwards.
    pub fn dedup(self) -> Self {
        let n = self.points.len();
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_unstable_by(|&i, &j| {
            self.points[i]
                .lex_cmp(&self.points[j])
                .then_with(|| i.cmp(&j))
        });

        // Within a run of equal coordinates the smallest original index
        // comes first; everything after it is dropped.
        let mut drop = vec![false; n];
        for w in order.windows(2) {
            if self.points[w[0]] == self.points[w[1]] {
                drop[w[1]] = true;
            }
        }

        let dropped = drop.iter().filter(|&&d| d).count();
        if dropped == 0 {
            return self;
        }
        warn!(
            "dropping {} duplicate projected points (keeping first occurrences)",
            dropped
        );

        let mut points = Vec::with_capacity(n - dropped);
        let mut source = Vec::with_capacity(n - dropped);
        for i in 0..n {
            if !drop[i] {
                points.push(self.points[i]);
                source.push(self.source[i]);
            }
        }
        Self { points, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_drops_z_and_keeps_order() {
        let cloud = vec![
            Point3::new(1.0, 2.0, 9.0),
            Point3::new(3.0, 4.0, 8.0),
        ];
        let set = PointSet::<f64>::project(&cloud);
        assert_eq!(set.len(), 2);
        assert_eq!(set.points()[0], Point2::new(1.0, 2.0));
        assert_eq!(set.points()[1], Point2::new(3.0, 4.0));
        assert_eq!(set.source_index(0), 0);
        assert_eq!(set.source_index(1), 1);
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let cloud = vec![
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 2.0),
            Point3::new(0.0, 0.0, 3.0), // same (x, y) as the first shot
        ];
        let set = PointSet::<f64>::project(&cloud).dedup();
        assert_eq!(set.len(), 2);
        assert_eq!(set.source_index(0), 0);
        assert_eq!(set.source_index(1), 1);
    }
}
