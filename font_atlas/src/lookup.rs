// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearest-match atlas selection.
//!
//! Among the atlases holding a codepoint, the one baked closest to the requested size
//! wins. Atlases of (nearly) the same size are told apart by [`FontStyle::distance`].

use crate::atlas::{Atlas, Glyph};
use crate::style::FontStyle;

/// Two sizes closer than this are considered equal.
pub const SIZE_TOLERANCE: f32 = 0.01;

/// Picks the atlas to draw `codepoint` from.
///
/// Codepoint `0` matches every atlas, for callers that only need line metrics.
pub fn select_atlas<T>(
    atlases: &[Atlas<T>],
    codepoint: u32,
    size: f32,
    style: FontStyle,
) -> Option<&Atlas<T>> {
    let candidates = || {
        atlases
            .iter()
            .filter(move |atlas| codepoint == 0 || atlas.contains(codepoint).is_some())
    };
    let nearest = candidates()
        .map(|atlas| (atlas.size() - size).abs())
        .min_by(f32::total_cmp)?;
    candidates()
        .filter(|atlas| (atlas.size() - size).abs() - nearest <= SIZE_TOLERANCE)
        // min_by_key keeps the first of equal elements, so bake order breaks style ties.
        .min_by_key(|atlas| atlas.style().distance(style))
}

/// Finds the glyph for `codepoint` in the best matching atlas.
///
/// The atlas is returned alongside the glyph for its line metrics.
pub fn resolve<T>(
    atlases: &[Atlas<T>],
    codepoint: u32,
    size: f32,
    style: FontStyle,
) -> Option<(&Glyph, &Atlas<T>)> {
    let atlas = select_atlas(atlases, codepoint, size, style)?;
    Some((atlas.glyph(codepoint)?, atlas))
}
