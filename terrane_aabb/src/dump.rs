// Copyright 2025 the Terrane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostic dump of a tree's boxes, one OBJ wireframe per level.
//!
//! Intended for eyeballing tree quality in a mesh viewer, not for machine
//! consumption; the output layout is not a stable interface.

use alloc::format;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use terrane_geom::Aabb3;

use crate::tree::AabbTree;

/// Write the boxes of every tree level as wireframe OBJ files.
///
/// Level `k` (the root is level 0) goes to `<stem>_level<k>.obj` in `dir`,
/// each box as 8 vertices and 12 `l` edge records. Unoccupied slots of a
/// short bottom level are skipped.
pub fn save_levels(tree: &AabbTree, dir: &Path, stem: &str) -> io::Result<()> {
    let nodes = tree.node_slots();
    let mut level = 0;
    loop {
        let first = 1_usize << level;
        if first >= nodes.len() {
            return Ok(());
        }
        let last = (first * 2).min(nodes.len());
        let mut out = BufWriter::new(File::create(dir.join(format!("{stem}_level{level}.obj")))?);
        let mut base = 1; // OBJ indices are 1-based
        for bbox in &nodes[first..last] {
            if !bbox.is_empty() {
                base = write_box_wireframe(&mut out, bbox, base)?;
            }
        }
        out.flush()?;
        level += 1;
    }
}

/// Emit one box as 8 corners and 12 edges; returns the next free vertex
/// index.
fn write_box_wireframe<W: Write>(out: &mut W, bbox: &Aabb3, base: usize) -> io::Result<usize> {
    // Bit i of the corner number selects min or max on axis i.
    for corner in 0..8_usize {
        let pick = |axis: usize| {
            if corner & (1 << axis) == 0 {
                bbox.min[axis]
            } else {
                bbox.max[axis]
            }
        };
        writeln!(out, "v {} {} {}", pick(0), pick(1), pick(2))?;
    }
    // An edge joins corners differing in exactly one bit.
    for corner in 0..8_usize {
        for axis in 0..3 {
            let other = corner | (1 << axis);
            if other != corner {
                writeln!(out, "l {} {}", base + corner, base + other)?;
            }
        }
    }
    Ok(base + 8)
}
