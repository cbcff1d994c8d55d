// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pairwise kerning, shared by every atlas baked from the same font.
//!
//! Values are stored in font units. They only become pixels once multiplied by the
//! scale of the atlas both glyphs were drawn from.

use crate::atlas::{Atlas, Glyph};
use crate::rasterizer::GlyphIndex;

/// One kerning pair in font units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct KerningEntry {
    /// Glyph on the left of the pair.
    pub left: GlyphIndex,
    /// Glyph on the right of the pair.
    pub right: GlyphIndex,
    /// Horizontal adjustment in font units; negative values pull the glyphs together.
    pub value: i32,
}

/// A flat kerning table, ordered by `(left, right)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KerningTable {
    entries: Vec<KerningEntry>,
}

impl KerningTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from pairs in any order.
    ///
    /// When a pair is listed more than once, the first listing wins.
    pub fn from_entries(entries: Vec<KerningEntry>) -> Self {
        let mut table = Self::new();
        table.rebuild(entries);
        table
    }

    /// Replaces the contents of the table.
    pub fn rebuild(&mut self, mut entries: Vec<KerningEntry>) {
        // Stable, so duplicates keep their original order.
        entries.sort_by_key(|e| (e.left, e.right));
        self.entries = entries;
    }

    /// Removes every pair.
    pub fn clear(&mut self) {
        self.entries = Vec::new();
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All pairs, ordered by `(left, right)`.
    pub fn entries(&self) -> &[KerningEntry] {
        &self.entries
    }

    /// The unscaled adjustment between two glyphs, in font units.
    pub fn get(&self, left: GlyphIndex, right: GlyphIndex) -> Option<i32> {
        let at = self
            .entries
            .partition_point(|e| (e.left, e.right) < (left, right));
        self.entries
            .get(at)
            .filter(|e| e.left == left && e.right == right)
            .map(|e| e.value)
    }

    /// The adjustment in pixels to apply between `left` and `right`.
    ///
    /// Returns zero when either glyph is not a vector glyph, or when the atlases were baked
    /// at different scales.
    pub fn adjustment<T>(
        &self,
        left: (&Glyph, &Atlas<T>),
        right: (&Glyph, &Atlas<T>),
    ) -> f32 {
        let (left_glyph, left_atlas) = left;
        let (right_glyph, right_atlas) = right;
        if left_atlas.scale() != right_atlas.scale() {
            return 0.0;
        }
        let (Some(l), Some(r)) = (
            left_glyph.source.glyph_index(),
            right_glyph.source.glyph_index(),
        ) else {
            return 0.0;
        };
        self.get(l, r)
            .map_or(0.0, |value| value as f32 * left_atlas.scale())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(left: u32, right: u32, value: i32) -> KerningEntry {
        KerningEntry {
            left: GlyphIndex(left),
            right: GlyphIndex(right),
            value,
        }
    }

    #[test]
    fn lookup_is_order_sensitive() {
        let table = KerningTable::from_entries(vec![pair(5, 3, -40), pair(3, 5, -80), pair(1, 9, 12)]);
        assert_eq!(table.get(GlyphIndex(3), GlyphIndex(5)), Some(-80));
        assert_eq!(table.get(GlyphIndex(5), GlyphIndex(3)), Some(-40));
        assert_eq!(table.get(GlyphIndex(9), GlyphIndex(1)), None);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn first_duplicate_wins() {
        let table = KerningTable::from_entries(vec![pair(2, 2, 7), pair(1, 1, 0), pair(2, 2, 9)]);
        assert_eq!(table.get(GlyphIndex(2), GlyphIndex(2)), Some(7));
    }

    #[test]
    fn rebuild_discards_previous_pairs() {
        let mut table = KerningTable::from_entries(vec![pair(1, 2, 3)]);
        table.rebuild(vec![pair(4, 5, 6)]);
        assert_eq!(table.get(GlyphIndex(1), GlyphIndex(2)), None);
        assert_eq!(table.get(GlyphIndex(4), GlyphIndex(5)), Some(6));
        table.clear();
        assert!(table.is_empty());
    }
}
