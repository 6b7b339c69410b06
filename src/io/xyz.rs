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
    io::{self, BufRead, BufReader},
    path::Path,
};

use tracing::{debug, warn};

use crate::geometry::Point3;
use crate::numeric::scalar::Scalar;

/// Read a delimited point file: one `x y z` row per point.
///
/// Fields may be separated by whitespace, commas or semicolons. Rows with
/// missing, unparseable or non-finite coordinates are discarded, which also
/// covers header rows; `#` comment lines and blank lines are ignored. Extra
/// trailing fields (intensity, classification, ...) are tolerated.
pub fn read_xyz<T: Scalar, P: AsRef<Path>>(path: P) -> io::Result<Vec<Point3<T>>> {
    let file = File::open(path)?;
    read_xyz_from(BufReader::new(file))
}

/// Reader-based variant of [`read_xyz`].
pub fn read_xyz_from<T: Scalar, R: BufRead>(reader: R) -> io::Result<Vec<Point3<T>>> {
    let mut points = Vec::new();
    let mut skipped = 0usize;

    for line in reader.lines() {
        let line = line?;
        let row = line.trim();
        if row.is_empty() || row.starts_with('#') {
            continue;
        }
        match parse_row::<T>(row) {
            Some(p) => points.push(p),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!("discarded {} rows with missing or invalid coordinates", skipped);
    }
    debug!("loaded {} points", points.len());
    Ok(points)
}

fn parse_row<T: Scalar>(row: &str) -> Option<Point3<T>> {
    let mut fields = row
        .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|f| !f.is_empty());

    let x: T = fields.next()?.parse().ok()?;
    let y: T = fields.next()?.parse().ok()?;
    let z: T = fields.next()?.parse().ok()?;

    let p = Point3 { x, y, z };
    if p.is_finite() { Some(p) } else { None }
}
