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

//! Terrain triangulation for unordered point clouds.
//!
//! A survey cloud comes in as a flat list of 3D points, gets projected onto
//! an axis plane, triangulated with an incremental Delaunay algorithm built
//! on robust predicates, and leaves as triangles resolved back to the
//! original 3D coordinates.
//!
//! ```no_run
//! use tinmesh::geometry::point_set::PointSet;
//! use tinmesh::io::{tri::write_tri, xyz::read_xyz};
//! use tinmesh::triangulation::delaunay::triangulate;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cloud = read_xyz::<f64, _>("survey.xyz")?;
//! let set = PointSet::project(&cloud).dedup();
//! let mesh = triangulate(&set)?;
//! write_tri("survey.tri", &mesh, &set, &cloud)?;
//! # Ok(())
//! # }
//! ```

pub mod geometry;
pub mod io;
pub mod kernel;
pub mod numeric;
pub mod triangulation;

pub use geometry::point_set::{Plane, PointSet};
pub use triangulation::delaunay::triangulate;
pub use triangulation::{Triangle, Triangulation, TriangulationError};
