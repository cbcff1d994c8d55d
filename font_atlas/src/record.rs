// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A fixed-layout glyph record for handing glyph tables to other languages or to shaders.

use bytemuck::{Pod, Zeroable};

use crate::atlas::{Atlas, Glyph, GlyphSource};

/// Layout version stored in every [`GlyphRecord`]. Bumped whenever the layout changes.
pub const GLYPH_RECORD_VERSION: u32 = 1;

/// [`GlyphRecord::flags`] bit set for glyphs copied from a custom image.
pub const GLYPH_RECORD_CUSTOM: u32 = 1 << 0;

/// [`GlyphRecord::glyph_index`] of glyphs that don't come from the font.
pub const NO_GLYPH_INDEX: u32 = u32::MAX;

/// One glyph as 64 bytes of plain data.
///
/// Integers come first, then floats, then reserved space; there is no padding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct GlyphRecord {
    /// Always [`GLYPH_RECORD_VERSION`].
    pub version: u32,
    /// The codepoint.
    pub codepoint: u32,
    /// Index in the font file, or [`NO_GLYPH_INDEX`].
    pub glyph_index: u32,
    /// Combination of `GLYPH_RECORD_*` bits.
    pub flags: u32,
    /// Left edge in the atlas texture.
    pub atlas_x: u32,
    /// Top edge in the atlas texture.
    pub atlas_y: u32,
    /// Width in the atlas texture.
    pub atlas_width: u32,
    /// Height in the atlas texture.
    pub atlas_height: u32,
    /// Horizontal advance in pixels.
    pub advance: f32,
    /// Horizontal render offset from the pen position.
    pub offset_x: f32,
    /// Vertical render offset from the pen position, y down.
    pub offset_y: f32,
    /// Logical box left edge.
    pub logical_x: f32,
    /// Logical box top edge.
    pub logical_y: f32,
    /// Logical box width.
    pub logical_width: f32,
    /// Logical box height.
    pub logical_height: f32,
    /// Zero.
    pub reserved: u32,
}

const _: () = assert!(size_of::<GlyphRecord>() == 64, "GlyphRecord layout changed");

impl From<&Glyph> for GlyphRecord {
    fn from(glyph: &Glyph) -> Self {
        let (glyph_index, flags) = match glyph.source {
            GlyphSource::Vector(index) => (index.0, 0),
            GlyphSource::Custom => (NO_GLYPH_INDEX, GLYPH_RECORD_CUSTOM),
        };
        Self {
            version: GLYPH_RECORD_VERSION,
            codepoint: glyph.codepoint,
            glyph_index,
            flags,
            atlas_x: glyph.atlas_rect.x,
            atlas_y: glyph.atlas_rect.y,
            atlas_width: glyph.atlas_rect.width,
            atlas_height: glyph.atlas_rect.height,
            advance: glyph.advance,
            offset_x: glyph.render_offset.x,
            offset_y: glyph.render_offset.y,
            logical_x: glyph.logical_rect.x,
            logical_y: glyph.logical_rect.y,
            logical_width: glyph.logical_rect.width,
            logical_height: glyph.logical_rect.height,
            reserved: 0,
        }
    }
}

impl<T> Atlas<T> {
    /// Every glyph as a [`GlyphRecord`], in [`glyphs`](Self::glyphs) order.
    ///
    /// Use [`bytemuck::cast_slice`] to view the result as bytes.
    pub fn glyph_records(&self) -> Vec<GlyphRecord> {
        self.glyphs().iter().map(GlyphRecord::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::tests::{atlas_with, blank_glyph};
    use crate::geometry::PixelRect;
    use crate::range::CodepointRange;
    use crate::style::FontStyle;

    #[test]
    fn records_are_plain_bytes() {
        let atlas = atlas_with(12.0, FontStyle::empty(), &[CodepointRange::new(0x41, 0x43)]);
        let records = atlas.glyph_records();
        let bytes: &[u8] = bytemuck::cast_slice(&records);
        assert_eq!(bytes.len(), 3 * 64);
        assert_eq!(&bytes[..4], &GLYPH_RECORD_VERSION.to_ne_bytes());
        assert_eq!(&bytes[68..72], &0x42_u32.to_ne_bytes());
    }

    #[test]
    fn custom_glyphs_are_flagged() {
        let glyph = Glyph {
            source: GlyphSource::Custom,
            atlas_rect: PixelRect::new(3, 4, 5, 6),
            ..blank_glyph(0xE000)
        };
        let record = GlyphRecord::from(&glyph);
        assert_eq!(record.glyph_index, NO_GLYPH_INDEX);
        assert_eq!(record.flags & GLYPH_RECORD_CUSTOM, GLYPH_RECORD_CUSTOM);
        assert_eq!((record.atlas_x, record.atlas_height), (3, 6));
    }
}
