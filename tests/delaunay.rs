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

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tinmesh::geometry::Point2;
use tinmesh::geometry::point_set::PointSet;
use tinmesh::kernel::{incircle, orient2d};
use tinmesh::triangulation::delaunay::triangulate;
use tinmesh::triangulation::{Triangulation, TriangulationError};

fn set_of(coords: &[(f64, f64)]) -> PointSet<f64> {
    PointSet::from_points(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
}

fn triangle_area(points: &[Point2<f64>], tri: [usize; 3]) -> f64 {
    let [a, b, c] = tri;
    let (ax, ay) = (points[a].x, points[a].y);
    let (bx, by) = (points[b].x, points[b].y);
    let (cx, cy) = (points[c].x, points[c].y);
    ((bx - ax) * (cy - ay) - (by - ay) * (cx - ax)) / 2.0
}

/// Convex hull area via Andrew's monotone chain and the shoelace formula.
fn hull_area(points: &[Point2<f64>]) -> f64 {
    let mut idx: Vec<usize> = (0..points.len()).collect();
    idx.sort_by(|&i, &j| points[i].lex_cmp(&points[j]));

    let mut hull: Vec<usize> = Vec::new();
    for pass in 0..2 {
        let start = hull.len();
        let it: Box<dyn Iterator<Item = &usize>> = if pass == 0 {
            Box::new(idx.iter())
        } else {
            Box::new(idx.iter().rev())
        };
        for &i in it {
            while hull.len() >= start + 2 {
                let a = hull[hull.len() - 2];
                let b = hull[hull.len() - 1];
                if orient2d(&points[a], &points[b], &points[i]).is_positive() {
                    break;
                }
                hull.pop();
            }
            hull.push(i);
        }
        hull.pop();
    }

    let mut twice_area = 0.0;
    for k in 0..hull.len() {
        let (i, j) = (hull[k], hull[(k + 1) % hull.len()]);
        twice_area += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    twice_area / 2.0
}

/// Empty-circumcircle property, checked with the exact predicate: no point
/// may lie strictly inside any triangle's circumcircle.
fn assert_delaunay(points: &[Point2<f64>], tri: &Triangulation) {
    for t in &tri.triangles {
        let [a, b, c] = t.indices();
        for (p, point) in points.iter().enumerate() {
            if p == a || p == b || p == c {
                continue;
            }
            assert!(
                !incircle(&points[a], &points[b], &points[c], point).is_positive(),
                "point {} lies inside the circumcircle of {:?}",
                p,
                t
            );
        }
    }
}

/// Structural checks every result must pass: CCW canonical triangles,
/// sorted output, no edge shared by more than two triangles.
fn assert_well_formed(points: &[Point2<f64>], tri: &Triangulation) {
    let mut edge_count: HashMap<(usize, usize), usize> = HashMap::new();
    let mut prev: Option<[usize; 3]> = None;

    for t in &tri.triangles {
        let [a, b, c] = t.indices();
        assert!(a < b.min(c), "triangle {:?} is not rotated to min-first", t);
        assert!(
            orient2d(&points[a], &points[b], &points[c]).is_positive(),
            "triangle {:?} is not counter-clockwise",
            t
        );
        if let Some(p) = prev {
            assert!(p < [a, b, c], "triangles are not sorted");
        }
        prev = Some([a, b, c]);

        for (u, v) in [(a, b), (b, c), (c, a)] {
            let e = (u.min(v), u.max(v));
            *edge_count.entry(e).or_insert(0) += 1;
        }
    }

    for (e, n) in edge_count {
        assert!(n <= 2, "edge {:?} is shared by {} triangles", e, n);
    }
}

#[test]
fn three_points_give_one_triangle() {
    let set = set_of(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
    let tri = triangulate(&set).unwrap();

    assert_eq!(tri.len(), 1);
    assert_eq!(tri.triangles[0].indices(), [0, 1, 2]);
}

#[test]
fn clockwise_input_still_yields_ccw_triangle() {
    let set = set_of(&[(0.0, 0.0), (0.0, 1.0), (1.0, 0.0)]);
    let tri = triangulate(&set).unwrap();

    assert_eq!(tri.len(), 1);
    assert_well_formed(set.points(), &tri);
}

#[test]
fn unit_square_gives_two_triangles() {
    let set = set_of(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    let tri = triangulate(&set).unwrap();

    assert_eq!(tri.len(), 2);
    assert_well_formed(set.points(), &tri);
    assert_delaunay(set.points(), &tri);

    let mut used = [false; 4];
    let mut area = 0.0;
    for t in &tri.triangles {
        for i in t.indices() {
            used[i] = true;
        }
        let a = triangle_area(set.points(), t.indices());
        assert!(a > 0.0);
        area += a;
    }
    assert!(used.iter().all(|&u| u), "all four corners must appear");
    assert!((area - 1.0).abs() < 1e-12);
}

#[test]
fn collinear_points_give_empty_triangulation() {
    let set = set_of(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
    let tri = triangulate(&set).unwrap();
    assert!(tri.is_empty());

    let set = set_of(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0)]);
    let tri = triangulate(&set).unwrap();
    assert!(tri.is_empty());

    // Vertical line: the bounding-box center shares its x coordinate.
    let set = set_of(&[(2.0, 0.0), (2.0, 1.0), (2.0, 2.0), (2.0, 5.0)]);
    let tri = triangulate(&set).unwrap();
    assert!(tri.is_empty());
}

#[test]
fn too_few_points_is_an_error() {
    for coords in [&[][..], &[(0.0, 0.0), (1.0, 1.0)][..]] {
        let err = triangulate(&set_of(coords)).unwrap_err();
        assert!(matches!(
            err,
            TriangulationError::InsufficientPoints { count } if count == coords.len()
        ));
    }
}

#[test]
fn duplicate_points_are_rejected_with_indices() {
    let set = set_of(&[(0.0, 0.0), (1.0, 0.0), (0.5, 1.0), (1.0, 0.0)]);
    let err = triangulate(&set).unwrap_err();
    assert!(matches!(
        err,
        TriangulationError::DuplicatePoint { first: 1, second: 3 }
    ));
}

#[test]
fn non_finite_coordinates_are_rejected() {
    let set = set_of(&[(0.0, 0.0), (1.0, 0.0), (f64::NAN, 1.0)]);
    let err = triangulate(&set).unwrap_err();
    assert!(matches!(
        err,
        TriangulationError::NonFiniteCoordinate { index: 2 }
    ));
}

#[test]
fn cocircular_grid_is_deterministic() {
    // Every cell of a regular grid is a cocircular quadruple; the
    // tie-break must keep the result stable.
    let mut coords = Vec::new();
    for y in 0..4 {
        for x in 0..4 {
            coords.push((x as f64, y as f64));
        }
    }
    let set = set_of(&coords);

    let first = triangulate(&set).unwrap();
    let second = triangulate(&set).unwrap();
    assert_eq!(first, second);

    // 16 points, 12 on the hull: Euler gives 2n - h - 2 = 18 triangles.
    assert_eq!(first.len(), 18);
    assert_well_formed(set.points(), &first);
    assert_delaunay(set.points(), &first);

    let area: f64 = first
        .triangles
        .iter()
        .map(|t| triangle_area(set.points(), t.indices()))
        .sum();
    assert!((area - 9.0).abs() < 1e-9);
}

#[test]
fn random_cloud_covers_its_hull() {
    let mut rng = StdRng::seed_from_u64(7);
    let coords: Vec<(f64, f64)> = (0..200)
        .map(|_| (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
        .collect();
    let set = set_of(&coords);

    let tri = triangulate(&set).unwrap();
    assert_well_formed(set.points(), &tri);
    assert_delaunay(set.points(), &tri);

    let covered: f64 = tri
        .triangles
        .iter()
        .map(|t| triangle_area(set.points(), t.indices()))
        .sum();
    let hull = hull_area(set.points());
    assert!(
        (covered - hull).abs() < 1e-6 * hull,
        "triangles cover {} but the hull area is {}",
        covered,
        hull
    );
}

#[test]
fn dedup_repairs_duplicate_input() {
    let coords = [(0.0, 0.0), (1.0, 0.0), (0.5, 1.0), (1.0, 0.0), (0.0, 0.0)];
    let set = set_of(&coords).dedup();

    let tri = triangulate(&set).unwrap();
    assert_eq!(tri.len(), 1);
    assert_eq!(tri.point_count, 3);
}
