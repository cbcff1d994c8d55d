// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style flags attached to atlases, font files and lookups.

use bitflags::bitflags;

bitflags! {
    /// Visual variants requested for a bake or a lookup.
    ///
    /// Only [`BOLD`](Self::BOLD), [`ITALIC`](Self::ITALIC) and
    /// [`INVERTED`](Self::INVERTED) take part in atlas matching; the decoration
    /// flags are drawn by the layout component on top of a regular atlas.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FontStyle: u8 {
        /// Heavier weight.
        const BOLD = 0x01;
        /// Slanted variant.
        const ITALIC = 0x02;
        /// Glyphs drawn as holes in a filled background.
        const INVERTED = 0x04;
        /// Underline decoration.
        const UNDERLINE = 0x08;
        /// Strikethrough decoration.
        const STRIKETHROUGH = 0x10;
        /// Outline decoration.
        const OUTLINE = 0x20;
        /// Highlight background.
        const HIGHLIGHTED = 0x40;
        /// The attached font carries colour glyphs (e.g. emoji) that are baked as RGBA.
        const COLORED_GLYPHS = 0x80;
    }
}

/// Cost of a mismatched [`FontStyle::INVERTED`] flag when breaking size ties.
const INVERTED_MISMATCH_COST: u32 = 4;
/// Cost of a mismatched [`FontStyle::BOLD`] or [`FontStyle::ITALIC`] flag.
const WEIGHT_OR_SLANT_MISMATCH_COST: u32 = 1;

impl FontStyle {
    /// Weighted distance between two style masks, used to pick between atlases of equal size.
    ///
    /// Decoration flags are ignored.
    pub fn distance(self, other: Self) -> u32 {
        let differing = self.symmetric_difference(other);
        let mut distance = 0;
        if differing.contains(Self::INVERTED) {
            distance += INVERTED_MISMATCH_COST;
        }
        if differing.contains(Self::BOLD) {
            distance += WEIGHT_OR_SLANT_MISMATCH_COST;
        }
        if differing.contains(Self::ITALIC) {
            distance += WEIGHT_OR_SLANT_MISMATCH_COST;
        }
        distance
    }
}
