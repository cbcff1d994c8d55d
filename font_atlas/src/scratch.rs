// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped scratch memory for bakes.
//!
//! A bake needs a handful of short-lived buffers: the packing requests and results, the
//! glyph indices and bitmaps, and the canvas pixels. They live in a [`ScratchArena`] so
//! repeated bakes reuse the same allocations. Each bake borrows the arena through a
//! [`ScratchScope`]; dropping the scope empties every buffer, whichever way the bake exits.

use crate::geometry::PixelRect;
use crate::packer::{PackSize, RectPacker};
use crate::rasterizer::{GlyphIndex, RasterizedGlyph};

/// Reusable working memory for bakes.
#[derive(Debug, Default)]
pub struct ScratchArena {
    buffers: ScratchBuffers,
    high_water_mark: usize,
}

#[derive(Debug, Default)]
pub(crate) struct ScratchBuffers {
    pub(crate) packer: RectPacker,
    pub(crate) sizes: Vec<PackSize>,
    pub(crate) placements: Vec<PixelRect>,
    pub(crate) indices: Vec<GlyphIndex>,
    pub(crate) glyphs: Vec<RasterizedGlyph>,
    pub(crate) pixels: Vec<u8>,
}

impl ScratchBuffers {
    fn reset(&mut self) {
        self.sizes.clear();
        self.placements.clear();
        self.indices.clear();
        self.glyphs.clear();
        self.pixels.clear();
    }

    fn is_empty(&self) -> bool {
        self.sizes.is_empty()
            && self.placements.is_empty()
            && self.indices.is_empty()
            && self.glyphs.is_empty()
            && self.pixels.is_empty()
    }
}

impl ScratchArena {
    /// Creates an arena with nothing reserved.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a scope. All buffers are empty inside a new scope and are emptied again
    /// when the scope is dropped.
    pub fn scope(&mut self) -> ScratchScope<'_> {
        debug_assert!(self.buffers.is_empty(), "a previous scope leaked scratch data");
        ScratchScope { arena: self }
    }

    /// Frees every reserved buffer.
    pub fn release(&mut self) {
        self.buffers = ScratchBuffers::default();
    }

    /// Largest canvas pixel buffer, in bytes, any scope has used.
    pub fn high_water_mark(&self) -> usize {
        self.high_water_mark
    }

    /// Bytes currently reserved for canvas pixels, kept between scopes for reuse.
    pub fn reserved_pixel_bytes(&self) -> usize {
        self.buffers.pixels.capacity()
    }
}

/// A bake's borrow of a [`ScratchArena`].
#[derive(Debug)]
pub struct ScratchScope<'a> {
    arena: &'a mut ScratchArena,
}

impl ScratchScope<'_> {
    pub(crate) fn buffers(&mut self) -> &mut ScratchBuffers {
        &mut self.arena.buffers
    }
}

impl Drop for ScratchScope<'_> {
    fn drop(&mut self) {
        let used = self.arena.buffers.pixels.len();
        self.arena.high_water_mark = self.arena.high_water_mark.max(used);
        self.arena.buffers.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fail_halfway(arena: &mut ScratchArena) -> Result<(), ()> {
        let mut scope = arena.scope();
        let buffers = scope.buffers();
        buffers.pixels.resize(64, 0);
        buffers.sizes.push(PackSize::new(1, 1));
        Err(())
    }

    #[test]
    fn scope_resets_on_early_return() {
        let mut arena = ScratchArena::new();
        assert!(fail_halfway(&mut arena).is_err());
        assert!(arena.buffers.is_empty());
        assert_eq!(arena.high_water_mark(), 64);
        assert!(arena.reserved_pixel_bytes() >= 64);
    }

    #[test]
    fn release_frees_reserved_memory() {
        let mut arena = ScratchArena::new();
        let _ = fail_halfway(&mut arena);
        arena.release();
        assert_eq!(arena.reserved_pixel_bytes(), 0);
        assert_eq!(arena.high_water_mark(), 64);
    }
}
