// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canned bake inputs.

use font_atlas::{CodepointRange, CustomGlyph, CustomGlyphRange, ImageData};

/// The ranges a Latin-script UI usually bakes.
pub const LATIN_RANGES: &[CodepointRange] = &[
    CodepointRange::ASCII,
    CodepointRange::LATIN_SUPPLEMENT_ACCENT,
];

/// DejaVu Serif, a TrueType font with a format 0 `kern` table.
///
/// Licensed under the Bitstream Vera license, see `assets/fonts/dejavu_fonts/LICENSE`.
pub const DEJAVU_SERIF: &[u8] = include_bytes!("../assets/fonts/dejavu_fonts/DejaVuSerif.ttf");

/// First codepoint of [`pictographs`], in the private use area.
pub const PICTOGRAPH_START: u32 = 0xE000;

/// `count` solid square pictographs of `side` pixels, starting at [`PICTOGRAPH_START`].
///
/// Pictograph `i` is filled with `[i, 255 - i, 0x80, 255]` so tests can tell them apart.
pub fn pictographs(count: u8, side: u32) -> CustomGlyphRange {
    let glyphs = (0..count)
        .map(|i| {
            let pixels = [i, 255 - i, 0x80, 255].repeat(side as usize * side as usize);
            CustomGlyph {
                codepoint: PICTOGRAPH_START + u32::from(i),
                image: ImageData::new(side, side, pixels).expect("square pictograph buffer"),
                source_rect: None,
            }
        })
        .collect();
    CustomGlyphRange::new(glyphs).expect("pictographs needs at least one glyph")
}
