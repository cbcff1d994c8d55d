// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Assertions shared across tests.

use font_atlas::{Atlas, GLYPH_PADDING};

pub(crate) fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}

/// Checks that no two glyphs (with their padding) overlap and that all stay on the canvas.
pub(crate) fn assert_packing_valid<T>(atlas: &Atlas<T>) {
    let canvas = atlas.canvas_size();
    let rects: Vec<_> = atlas
        .glyphs()
        .iter()
        .filter(|g| !g.atlas_rect.is_empty())
        .map(|g| (g.codepoint, g.atlas_rect))
        .collect();
    for (i, &(codepoint, rect)) in rects.iter().enumerate() {
        assert!(
            rect.right() <= canvas && rect.bottom() <= canvas,
            "U+{codepoint:04X} at {rect:?} leaves the {canvas}px canvas"
        );
        for &(other_codepoint, other) in &rects[i + 1..] {
            assert!(
                !rect.overlaps(&other),
                "U+{codepoint:04X} at {rect:?} overlaps U+{other_codepoint:04X} at {other:?}"
            );
        }
    }
    for glyph in atlas.glyphs() {
        if glyph.source.glyph_index().is_some() && !glyph.atlas_rect.is_empty() {
            let rect = glyph.atlas_rect;
            assert!(
                rect.x >= GLYPH_PADDING
                    && rect.y >= GLYPH_PADDING
                    && rect.right() + GLYPH_PADDING <= canvas
                    && rect.bottom() + GLYPH_PADDING <= canvas,
                "U+{:04X} at {rect:?} has no room for padding",
                glyph.codepoint
            );
        }
    }
}
