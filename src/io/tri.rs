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

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::geometry::Point3;
use crate::geometry::point_set::PointSet;
use crate::numeric::scalar::Scalar;
use crate::triangulation::Triangulation;

/// Resolve every triangle back to 3D coordinates.
///
/// Each record is `[x0, y0, z0, x1, y1, z1, x2, y2, z2]` in the triangle's
/// canonical vertex order. Indices resolve through the point set's source
/// table, so a deduplicated set still addresses the original cloud.
pub fn triangle_records<T>(
    triangulation: &Triangulation,
    set: &PointSet<T>,
    cloud: &[Point3<T>],
) -> Vec<[T; 9]>
where
    T: Scalar,
{
    triangulation
        .triangles
        .iter()
        .map(|t| {
            let mut rec = [T::zero(); 9];
            for (slot, &i) in t.indices().iter().enumerate() {
                let p = &cloud[set.source_index(i)];
                rec[slot * 3] = p.x;
                rec[slot * 3 + 1] = p.y;
                rec[slot * 3 + 2] = p.z;
            }
            rec
        })
        .collect()
}

/// Write one triangle per line as `x0 y0 z0 x1 y1 z1 x2 y2 z2`.
///
/// Field order and the triangle-per-line layout are the interchange format
/// downstream mesh importers parse; they must not change.
pub fn write_tri_to<T, W>(
    mut out: W,
    triangulation: &Triangulation,
    set: &PointSet<T>,
    cloud: &[Point3<T>],
) -> io::Result<()>
where
    T: Scalar,
    W: Write,
{
    for rec in triangle_records(triangulation, set, cloud) {
        writeln!(
            out,
            "{} {} {} {} {} {} {} {} {}",
            rec[0], rec[1], rec[2], rec[3], rec[4], rec[5], rec[6], rec[7], rec[8]
        )?;
    }
    out.flush()
}

/// File-path variant of [`write_tri_to`].
pub fn write_tri<T, P>(
    path: P,
    triangulation: &Triangulation,
    set: &PointSet<T>,
    cloud: &[Point3<T>],
) -> io::Result<()>
where
    T: Scalar,
    P: AsRef<Path>,
{
    let file = File::create(path)?;
    write_tri_to(BufWriter::new(file), triangulation, set, cloud)
}
