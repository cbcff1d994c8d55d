// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Skyline rectangle packing into a square canvas that grows on failure.
//!
//! The packer keeps a profile of the occupied height across the canvas width and
//! places each rectangle at the lowest position it fits ("bottom-left"). When a
//! batch doesn't fit, the canvas side is doubled and the whole batch is packed again
//! from scratch, until the batch fits or the next size would exceed the maximum.

use crate::error::BakeError;
use crate::geometry::PixelRect;

/// The range of square canvas sizes a bake may use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasBounds {
    /// Side length of the first canvas tried.
    pub min: u32,
    /// Largest side length that may be used.
    pub max: u32,
}

impl CanvasBounds {
    /// Creates bounds from the smallest and largest canvas side lengths.
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Bounds that allow exactly one canvas size.
    pub const fn fixed(size: u32) -> Self {
        Self::new(size, size)
    }
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self::new(256, 1024)
    }
}

/// Size of one rectangle submitted to the packer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PackSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PackSize {
    /// Creates a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// One horizontal segment of the skyline: `width` pixels starting at `x` are occupied up to `y`.
#[derive(Clone, Copy, Debug)]
struct SkylineNode {
    x: u32,
    y: u32,
    width: u32,
}

/// Reusable skyline packer.
///
/// The packer only holds working memory; every call to [`pack`](Self::pack) starts from an
/// empty canvas.
#[derive(Debug, Default)]
pub struct RectPacker {
    skyline: Vec<SkylineNode>,
    order: Vec<usize>,
}

impl RectPacker {
    /// Creates a packer with no working memory reserved.
    pub fn new() -> Self {
        Self::default()
    }

    /// Packs every rectangle in `sizes`, growing the canvas from `bounds.min` up to `bounds.max`.
    ///
    /// On success returns the side length of the canvas used, and `placements[i]` holds the
    /// rectangle assigned to `sizes[i]`. Zero-area sizes receive an empty rectangle at the origin
    /// and don't occupy space.
    pub fn pack(
        &mut self,
        sizes: &[PackSize],
        bounds: CanvasBounds,
        placements: &mut Vec<PixelRect>,
    ) -> Result<u32, BakeError> {
        let not_enough_space = BakeError::NotEnoughSpace {
            max_canvas: bounds.max,
        };
        let mut canvas = bounds.min.max(1);
        if canvas > bounds.max {
            return Err(not_enough_space);
        }
        if sizes
            .iter()
            .any(|s| s.width > bounds.max || s.height > bounds.max)
        {
            log::trace!("a rectangle is larger than the maximum canvas {}", bounds.max);
            return Err(not_enough_space);
        }

        self.order.clear();
        self.order.extend(0..sizes.len());
        self.order.sort_by(|&a, &b| {
            let (a, b) = (sizes[a], sizes[b]);
            b.height.cmp(&a.height).then(b.width.cmp(&a.width))
        });

        loop {
            if self.try_pack(sizes, canvas, placements) {
                log::trace!("packed {} rectangles into {canvas}x{canvas}", sizes.len());
                return Ok(canvas);
            }
            log::trace!("{} rectangles don't fit {canvas}x{canvas}", sizes.len());
            match canvas.checked_mul(2) {
                Some(next) if next <= bounds.max => canvas = next,
                _ => return Err(not_enough_space),
            }
        }
    }

    fn try_pack(&mut self, sizes: &[PackSize], canvas: u32, placements: &mut Vec<PixelRect>) -> bool {
        placements.clear();
        placements.resize(sizes.len(), PixelRect::default());
        self.skyline.clear();
        self.skyline.push(SkylineNode {
            x: 0,
            y: 0,
            width: canvas,
        });

        for &index in &self.order {
            let size = sizes[index];
            if size.width == 0 || size.height == 0 {
                continue;
            }
            let Some((node, x, y)) = find_position(&self.skyline, canvas, size) else {
                return false;
            };
            place(&mut self.skyline, node, x, y, size);
            placements[index] = PixelRect::new(x, y, size.width, size.height);
        }
        true
    }
}

/// Finds the lowest spot for `size`, preferring the leftmost one on ties.
///
/// Returns the index of the skyline node the rectangle starts on and its position.
fn find_position(skyline: &[SkylineNode], canvas: u32, size: PackSize) -> Option<(usize, u32, u32)> {
    let mut best: Option<(usize, u32, u32)> = None;
    for (start, node) in skyline.iter().enumerate() {
        let x = node.x;
        if x + size.width > canvas {
            break;
        }
        // Resting height is the tallest segment under the rectangle's span.
        let mut y = 0;
        let mut covered = 0;
        for segment in &skyline[start..] {
            if covered >= size.width {
                break;
            }
            y = y.max(segment.y);
            covered += segment.width;
        }
        if y + size.height > canvas {
            continue;
        }
        if best.is_none_or(|(_, _, best_y)| y < best_y) {
            best = Some((start, x, y));
        }
    }
    best
}

/// Raises the skyline under a rectangle placed at `(x, y)` starting on node `index`.
fn place(skyline: &mut Vec<SkylineNode>, index: usize, x: u32, y: u32, size: PackSize) {
    let right = x + size.width;
    skyline.insert(
        index,
        SkylineNode {
            x,
            y: y + size.height,
            width: size.width,
        },
    );

    let i = index + 1;
    while i < skyline.len() {
        let node = skyline[i];
        if node.x >= right {
            break;
        }
        let node_right = node.x + node.width;
        if node_right <= right {
            skyline.remove(i);
        } else {
            skyline[i].x = right;
            skyline[i].width = node_right - right;
            break;
        }
    }

    let mut i = 0;
    while i + 1 < skyline.len() {
        if skyline[i].y == skyline[i + 1].y {
            skyline[i].width += skyline[i + 1].width;
            skyline.remove(i + 1);
        } else {
            i += 1;
        }
    }
}
