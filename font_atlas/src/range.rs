// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Codepoint ranges requested for a bake, and pre-rasterized custom glyphs.
//!
//! Ranges are inclusive on both ends: `CodepointRange::new(0x41, 0x5A)` covers `A` through `Z`.

use crate::geometry::PixelRect;

/// A contiguous block of codepoints.
///
/// Inside a baked atlas, the glyph for `codepoint` lives at
/// `glyph_array_start + (codepoint - start)` in the atlas' glyph list. For ranges passed
/// into a bake, `glyph_array_start` is ignored and assigned by the baker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CodepointRange {
    /// First codepoint in the range.
    pub start: u32,
    /// Last codepoint in the range (inclusive).
    pub end: u32,
    /// Index of the glyph for `start` in the owning atlas.
    pub glyph_array_start: usize,
}

impl CodepointRange {
    /// Printable ASCII, from space through tilde.
    pub const ASCII: Self = Self::new(0x20, 0x7E);
    /// `A` through `Z`.
    pub const UPPERCASE_LATIN: Self = Self::new(0x41, 0x5A);
    /// `a` through `z`.
    pub const LOWERCASE_LATIN: Self = Self::new(0x61, 0x7A);
    /// Accented letters of the Latin-1 supplement.
    pub const LATIN_SUPPLEMENT_ACCENT: Self = Self::new(0xC0, 0xFF);
    /// Latin Extended-A.
    pub const LATIN_EXTENDED_A: Self = Self::new(0x100, 0x17F);
    /// Cyrillic.
    pub const CYRILLIC: Self = Self::new(0x400, 0x4FF);
    /// Hiragana.
    pub const HIRAGANA: Self = Self::new(0x3040, 0x309F);
    /// Katakana.
    pub const KATAKANA: Self = Self::new(0x30A0, 0x30FF);

    /// Creates the inclusive range `start..=end`.
    pub const fn new(start: u32, end: u32) -> Self {
        Self {
            start,
            end,
            glyph_array_start: 0,
        }
    }

    /// Creates a range holding exactly one codepoint.
    pub const fn single(codepoint: u32) -> Self {
        Self::new(codepoint, codepoint)
    }

    /// Creates a range of `count` codepoints beginning at `start`.
    ///
    /// `count` must be at least one.
    pub const fn with_length(start: u32, count: u32) -> Self {
        debug_assert!(count > 0, "a codepoint range needs at least one codepoint");
        Self::new(start, start.saturating_add(count.saturating_sub(1)))
    }

    /// Number of codepoints in the range.
    pub const fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            (self.end - self.start) as usize + 1
        }
    }

    /// Returns `true` if the range is inverted and holds no codepoints.
    pub const fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Returns `true` if `codepoint` lies inside the range.
    pub const fn contains(&self, codepoint: u32) -> bool {
        self.start <= codepoint && codepoint <= self.end
    }

    /// Index into the owning atlas' glyph list for `codepoint`, if it lies inside the range.
    pub const fn glyph_index_for(&self, codepoint: u32) -> Option<usize> {
        if self.contains(codepoint) {
            Some(self.glyph_array_start + (codepoint - self.start) as usize)
        } else {
            None
        }
    }

    /// Iterates over every codepoint in the range.
    pub fn codepoints(&self) -> impl Iterator<Item = u32> {
        self.start..=self.end
    }
}

/// Sorts ranges by their first codepoint and merges ranges that overlap or touch.
///
/// Inverted ranges are dropped. `glyph_array_start` of the result is zero.
pub fn normalize_ranges(ranges: &[CodepointRange]) -> Vec<CodepointRange> {
    let mut sorted: Vec<CodepointRange> = ranges.iter().filter(|r| !r.is_empty()).copied().collect();
    sorted.sort_unstable_by_key(|r| (r.start, r.end));
    let mut merged: Vec<CodepointRange> = Vec::with_capacity(sorted.len());
    for range in sorted {
        match merged.last_mut() {
            Some(last) if range.start <= last.end.saturating_add(1) => {
                last.end = last.end.max(range.end);
            }
            _ => merged.push(CodepointRange::new(range.start, range.end)),
        }
    }
    merged
}

/// Removes individual codepoints from a list of ranges, shrinking or splitting ranges as needed.
///
/// Codepoints that are not covered by any range are ignored.
pub fn remove_codepoints(ranges: &mut Vec<CodepointRange>, codepoints: &[u32]) {
    for &codepoint in codepoints {
        let Some(index) = ranges.iter().position(|r| r.contains(codepoint)) else {
            log::trace!("U+{codepoint:04X} is not in any range, nothing to remove");
            continue;
        };
        let range = ranges[index];
        if range.start == range.end {
            ranges.remove(index);
        } else if range.start == codepoint {
            ranges[index].start += 1;
        } else if range.end == codepoint {
            ranges[index].end -= 1;
        } else {
            ranges[index] = CodepointRange::new(range.start, codepoint - 1);
            ranges.insert(index + 1, CodepointRange::new(codepoint + 1, range.end));
        }
    }
}

/// Tightly packed RGBA8 pixels supplied by the caller.
///
/// The buffer always holds exactly `width * height * 4` bytes, row-major, RGBA order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageData {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl ImageData {
    /// Wraps RGBA8 pixels. Returns `None` if the buffer length doesn't match the size.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)?;
        (pixels.len() == len).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The RGBA8 pixel buffer.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The rectangle covering the whole image.
    pub const fn bounds(&self) -> PixelRect {
        PixelRect::new(0, 0, self.width, self.height)
    }
}

/// A pre-rasterized glyph, e.g. a pictograph drawn by an artist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomGlyph {
    /// The codepoint this glyph stands for.
    pub codepoint: u32,
    /// The source image.
    pub image: ImageData,
    /// Sub-rectangle of `image` to use; the whole image when `None`.
    pub source_rect: Option<PixelRect>,
}

impl CustomGlyph {
    /// The part of the image that is copied into the atlas, clamped to the image bounds.
    pub fn source_rect(&self) -> PixelRect {
        let bounds = self.image.bounds();
        let Some(rect) = self.source_rect else {
            return bounds;
        };
        let x = rect.x.min(bounds.width);
        let y = rect.y.min(bounds.height);
        PixelRect::new(
            x,
            y,
            rect.width.min(bounds.width - x),
            rect.height.min(bounds.height - y),
        )
    }
}

/// A run of custom glyphs with consecutive codepoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomGlyphRange {
    start: u32,
    end: u32,
    glyphs: Vec<CustomGlyph>,
}

impl CustomGlyphRange {
    /// Groups glyphs into a range.
    ///
    /// Returns `None` if `glyphs` is empty or their codepoints are not consecutive and ascending.
    pub fn new(glyphs: Vec<CustomGlyph>) -> Option<Self> {
        let start = glyphs.first()?.codepoint;
        let consecutive = glyphs
            .windows(2)
            .all(|pair| pair[0].codepoint.checked_add(1) == Some(pair[1].codepoint));
        if !consecutive {
            return None;
        }
        let end = start.checked_add(u32::try_from(glyphs.len() - 1).ok()?)?;
        Some(Self { start, end, glyphs })
    }

    /// A range holding a single glyph.
    pub fn single(glyph: CustomGlyph) -> Self {
        Self {
            start: glyph.codepoint,
            end: glyph.codepoint,
            glyphs: vec![glyph],
        }
    }

    /// First codepoint.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Last codepoint (inclusive).
    pub fn end(&self) -> u32 {
        self.end
    }

    /// The glyphs, ordered by codepoint.
    pub fn glyphs(&self) -> &[CustomGlyph] {
        &self.glyphs
    }
}
