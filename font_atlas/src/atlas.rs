// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Baked atlases and the glyphs inside them.

use smallvec::SmallVec;

use crate::geometry::{PixelRect, Rect, Vec2};
use crate::range::CodepointRange;
use crate::rasterizer::GlyphIndex;
use crate::style::FontStyle;

/// Where a glyph's pixels came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GlyphSource {
    /// Rasterized from the font's outlines or colour tables.
    Vector(GlyphIndex),
    /// Copied from a caller-supplied image.
    Custom,
}

impl GlyphSource {
    /// The glyph's index in the font file, if it came from the font.
    pub fn glyph_index(self) -> Option<GlyphIndex> {
        match self {
            Self::Vector(index) => Some(index),
            Self::Custom => None,
        }
    }
}

/// One glyph in an atlas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
    /// The codepoint the glyph was baked for.
    pub codepoint: u32,
    /// Font glyph or custom image.
    pub source: GlyphSource,
    /// Pixels of the glyph in the atlas texture. Empty for glyphs with nothing to draw.
    pub atlas_rect: PixelRect,
    /// Horizontal advance in pixels.
    pub advance: f32,
    /// Top-left corner of `atlas_rect` relative to the pen position on the baseline.
    pub render_offset: Vec2,
    /// The box the glyph occupies in a line, relative to the pen position on the baseline.
    pub logical_rect: Rect,
}

/// Line metrics shared by every glyph of an atlas, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AtlasMetrics {
    /// Distance between consecutive baselines.
    pub line_height: f32,
    /// Distance from the baseline to the top of the tallest glyphs.
    pub max_ascend: f32,
    /// Distance from the baseline to the bottom of the lowest glyphs, as a positive number.
    pub max_descend: f32,
    /// Half the visible height of a capital letter; used to center short text vertically.
    pub center_offset: f32,
}

/// Glyphs of one font at one size and style, with the square texture holding their pixels.
///
/// Atlases are immutable once baked.
#[derive(Clone, Debug)]
pub struct Atlas<T> {
    // Field order is drop order: glyph data is released before the texture.
    glyphs: Vec<Glyph>,
    ranges: SmallVec<[CodepointRange; 4]>,
    min_codepoint: u32,
    max_codepoint: u32,
    size: f32,
    scale: f32,
    style: FontStyle,
    canvas_size: u32,
    metrics: AtlasMetrics,
    texture: T,
}

impl<T> Atlas<T> {
    /// Creates an atlas without glyphs.
    pub(crate) fn new(
        size: f32,
        scale: f32,
        style: FontStyle,
        canvas_size: u32,
        metrics: AtlasMetrics,
        texture: T,
    ) -> Self {
        Self {
            glyphs: Vec::new(),
            ranges: SmallVec::new(),
            min_codepoint: u32::MAX,
            max_codepoint: 0,
            size,
            scale,
            style,
            canvas_size,
            metrics,
            texture,
        }
    }

    /// Appends the glyphs of one contiguous codepoint range.
    ///
    /// `glyphs` must yield one glyph per codepoint of `range`, in order.
    pub(crate) fn push_range(&mut self, range: CodepointRange, glyphs: impl IntoIterator<Item = Glyph>) {
        let start = self.glyphs.len();
        self.glyphs.extend(glyphs);
        debug_assert_eq!(
            self.glyphs.len() - start,
            range.len(),
            "range U+{:04X}..=U+{:04X} got the wrong number of glyphs",
            range.start,
            range.end
        );
        self.ranges.push(CodepointRange {
            glyph_array_start: start,
            ..range
        });
        self.min_codepoint = self.min_codepoint.min(range.start);
        self.max_codepoint = self.max_codepoint.max(range.end);
    }

    /// The pixel size the atlas was baked at.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Scale from font units to pixels.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Style flags the atlas was baked with.
    pub fn style(&self) -> FontStyle {
        self.style
    }

    /// The ranges of codepoints in the atlas, in bake order.
    pub fn ranges(&self) -> &[CodepointRange] {
        &self.ranges
    }

    /// The lowest and highest codepoint in the atlas, or `None` if it holds no glyphs.
    pub fn codepoint_span(&self) -> Option<(u32, u32)> {
        (self.min_codepoint <= self.max_codepoint).then_some((self.min_codepoint, self.max_codepoint))
    }

    /// Every glyph, ordered by range and then by codepoint.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Side length of the square texture, in pixels.
    pub fn canvas_size(&self) -> u32 {
        self.canvas_size
    }

    /// Line metrics.
    pub fn metrics(&self) -> &AtlasMetrics {
        &self.metrics
    }

    /// The texture holding the glyph pixels.
    pub fn texture(&self) -> &T {
        &self.texture
    }

    /// Index of the glyph for `codepoint` in [`glyphs`](Self::glyphs), if the atlas has one.
    pub fn contains(&self, codepoint: u32) -> Option<usize> {
        if codepoint < self.min_codepoint || codepoint > self.max_codepoint {
            return None;
        }
        self.ranges.iter().find_map(|r| r.glyph_index_for(codepoint))
    }

    /// The glyph for `codepoint`, if the atlas has one.
    pub fn glyph(&self, codepoint: u32) -> Option<&Glyph> {
        self.glyphs.get(self.contains(codepoint)?)
    }
}
