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

//! Incremental Bowyer-Watson construction of the Delaunay triangulation.

use ahash::AHashMap;
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::geometry::Point2;
use crate::geometry::point_set::PointSet;
use crate::kernel::predicates::{Sign, incircle, orient2d};
use crate::numeric::scalar::Scalar;
use crate::triangulation::{Triangle, Triangulate2D, Triangulation, TriangulationError};

pub const SQRT_3: f64 = 1.7320508075688772;

/// Undirected edge key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct Edge(usize, usize);

impl Edge {
    #[inline]
    fn new(a: usize, b: usize) -> Self {
        if a < b { Edge(a, b) } else { Edge(b, a) }
    }
}

/// Incremental Bowyer-Watson triangulator.
pub struct BowyerWatson;

impl<T> Triangulate2D<T> for BowyerWatson
where
    T: Scalar,
{
    fn triangulate(points: &PointSet<T>) -> Result<Triangulation, TriangulationError> {
        triangulate(points)
    }
}

/// Delaunay-triangulate `set`.
///
/// The result covers the convex hull of the set and no point lies strictly
/// inside the circumcircle of any triangle. All-collinear input yields an
/// empty triangulation; fewer than three points, duplicate (x, y) pairs and
/// non-finite coordinates are errors.
pub fn triangulate<T>(set: &PointSet<T>) -> Result<Triangulation, TriangulationError>
where
    T: Scalar,
{
    let n = set.len();
    if n < 3 {
        return Err(TriangulationError::InsufficientPoints { count: n });
    }
    for (i, p) in set.points().iter().enumerate() {
        if !p.is_finite() {
            return Err(TriangulationError::NonFiniteCoordinate { index: i });
        }
    }

    let order = insertion_order(set.points())?;
    debug!("inserting {} points in lexicographic order", n);

    let mut points: Vec<Point2<T>> = set.points().to_vec();
    let (s0, s1, s2) = push_super_triangle(&mut points);
    let mut triangles = vec![Triangle(s0, s1, s2)];

    for &pid in &order {
        insert_point(pid, &points, &mut triangles)?;
    }

    // Strip every triangle touching a super-triangle vertex. For collinear
    // input nothing survives, which is the legal empty result.
    triangles.retain(|t| t.0 < n && t.1 < n && t.2 < n);

    let mut triangles: Vec<Triangle> = triangles
        .into_iter()
        .map(|t| Triangle::new(t.0, t.1, t.2))
        .collect();
    triangles.sort_unstable_by_key(|t| (t.0, t.1, t.2));

    validate_manifold(n, &triangles)?;

    info!("triangulated {} points into {} triangles", n, triangles.len());
    Ok(Triangulation {
        point_count: n,
        triangles,
    })
}

/// Lexicographic (x, y) processing order. Adjacent entries with equal
/// coordinates surface as duplicates here, before any topology exists.
fn insertion_order<T>(points: &[Point2<T>]) -> Result<Vec<usize>, TriangulationError>
where
    T: Scalar,
{
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_unstable_by(|&i, &j| points[i].lex_cmp(&points[j]).then_with(|| i.cmp(&j)));

    for w in order.windows(2) {
        if points[w[0]] == points[w[1]] {
            // Equal coordinates sort by index, so w[0] < w[1].
            return Err(TriangulationError::DuplicatePoint {
                first: w[0],
                second: w[1],
            });
        }
    }
    Ok(order)
}

/// Append a synthetic enclosing triangle and return its vertex indices.
///
/// An equilateral triangle whose inscribed circle has radius `64 * span + 1`
/// around the bounding-box center, so every input point is strictly
/// interior.
fn push_super_triangle<T>(points: &mut Vec<Point2<T>>) -> (usize, usize, usize)
where
    T: Scalar,
{
    let (mut minx, mut miny) = (points[0].x, points[0].y);
    let (mut maxx, mut maxy) = (minx, miny);
    for p in points.iter().skip(1) {
        minx = minx.min(p.x);
        miny = miny.min(p.y);
        maxx = maxx.max(p.x);
        maxy = maxy.max(p.y);
    }

    let two = T::of(2.0);
    let cx = (minx + maxx) / two;
    let cy = (miny + maxy) / two;
    let span = (maxx - minx).max(maxy - miny);
    let r = T::of(64.0) * span + T::one();
    let sqrt_3 = T::of(SQRT_3);

    let apex = Point2 {
        x: cx,
        y: cy + two * r,
    };
    let left = Point2 {
        x: cx - sqrt_3 * r,
        y: cy - r,
    };
    let right = Point2 {
        x: cx + sqrt_3 * r,
        y: cy - r,
    };

    let s0 = points.len();
    points.push(apex);
    points.push(left);
    points.push(right);

    // apex -> left -> right is counter-clockwise.
    (s0, s0 + 1, s0 + 2)
}

/// Insert one point: carve out the cavity of triangles whose circumcircle
/// strictly contains it, then fan its boundary from the new point.
///
/// Working triangles are counter-clockwise throughout; a point exactly on a
/// circumcircle is treated as outside, so the earlier diagonal survives
/// cocircular ties.
fn insert_point<T>(
    pid: usize,
    points: &[Point2<T>],
    triangles: &mut Vec<Triangle>,
) -> Result<(), TriangulationError>
where
    T: Scalar,
{
    let p = &points[pid];

    let mut bad = Vec::new();
    for (i, t) in triangles.iter().enumerate() {
        if incircle(&points[t.0], &points[t.1], &points[t.2], p).is_positive() {
            bad.push(i);
        }
    }
    if bad.is_empty() {
        // The enclosing super-triangle guarantees p sits inside some
        // triangle, whose circumcircle must then contain it.
        return Err(TriangulationError::InvariantViolation {
            detail: format!("no cavity found for point {}", pid),
        });
    }

    // Cavity boundary: edges seen exactly once among the bad triangles.
    let mut edge_count: AHashMap<Edge, u32> = AHashMap::with_capacity(bad.len() * 3);
    for &i in &bad {
        let t = triangles[i];
        for e in [
            Edge::new(t.0, t.1),
            Edge::new(t.1, t.2),
            Edge::new(t.2, t.0),
        ] {
            *edge_count.entry(e).or_insert(0) += 1;
        }
    }

    // `bad` is in ascending index order; removing back to front keeps the
    // remaining indices stable under swap_remove.
    for &i in bad.iter().rev() {
        triangles.swap_remove(i);
    }

    for (&e, &count) in edge_count.iter() {
        if count != 1 {
            continue;
        }
        match orient2d(&points[e.0], &points[e.1], p) {
            Sign::Positive => triangles.push(Triangle(e.0, e.1, pid)),
            Sign::Negative => triangles.push(Triangle(e.0, pid, e.1)),
            Sign::Zero => {
                // A point interior to a cavity edge makes both neighbors
                // bad, so the edge cannot be on the boundary.
                return Err(TriangulationError::InvariantViolation {
                    detail: format!("point {} is collinear with a cavity boundary edge", pid),
                });
            }
        }
    }
    Ok(())
}

/// Every edge shared by at most two triangles and every vertex reference in
/// range; anything else means the predicates disagreed with themselves.
fn validate_manifold(point_count: usize, triangles: &[Triangle]) -> Result<(), TriangulationError> {
    let mut edge_tris: AHashMap<Edge, SmallVec<[usize; 2]>> =
        AHashMap::with_capacity(triangles.len() * 3);

    for (ti, t) in triangles.iter().enumerate() {
        if t.0 == t.1 || t.1 == t.2 || t.2 == t.0 || t.indices().iter().any(|&v| v >= point_count)
        {
            return Err(TriangulationError::InvariantViolation {
                detail: format!("triangle {:?} references invalid vertices", t),
            });
        }
        for e in [
            Edge::new(t.0, t.1),
            Edge::new(t.1, t.2),
            Edge::new(t.2, t.0),
        ] {
            edge_tris.entry(e).or_default().push(ti);
        }
    }

    for (e, tris) in edge_tris.iter() {
        if tris.len() > 2 {
            return Err(TriangulationError::InvariantViolation {
                detail: format!("edge ({}, {}) is shared by {} triangles", e.0, e.1, tris.len()),
            });
        }
    }
    Ok(())
}
