// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Baking a real font with each vector backend.
//!
//! DejaVu Serif has 2048 units per em and hhea ascent 1901, descent -483, line gap 0, so a
//! 24px bake scales by 24 / 2384.

use font_atlas::rasterizer::{SkrifaRasterizer, SwashRasterizer};
use font_atlas::{
    BakeSettings, CodepointRange, CpuTexture, CpuTextures, FontRegistry, FontStorage, FontStyle,
    GlyphIndex, GlyphSource, Rasterizer, ScratchArena,
};
use font_atlas_dev::DEJAVU_SERIF;

use crate::test_name;
use crate::util::env::TEST_BOUNDS;
use crate::util::{assert_close, assert_packing_valid};

const SIZE: f32 = 24.0;
const SCALE: f32 = SIZE / 2384.0;

fn bake_ascii<R: Rasterizer + 'static>(name: &str) -> FontRegistry<R, CpuTexture> {
    let mut registry = FontRegistry::new(name);
    registry
        .attach_font(FontStorage::Copy(DEJAVU_SERIF), FontStyle::empty())
        .unwrap();
    registry
        .bake_atlas(
            &mut ScratchArena::new(),
            &mut CpuTextures,
            BakeSettings::new(SIZE).with_kerning_table(),
            TEST_BOUNDS,
            &[CodepointRange::ASCII],
            &[],
        )
        .unwrap();
    registry
}

fn check_ascii_atlas<R: Rasterizer + 'static>(registry: &FontRegistry<R, CpuTexture>) {
    let atlas = registry.default_atlas().unwrap();
    assert_packing_valid(atlas);
    assert_close(atlas.scale(), SCALE);

    let metrics = atlas.metrics();
    assert_close(metrics.max_ascend, 1901.0 * SCALE);
    assert_close(metrics.max_descend, 483.0 * SCALE);
    assert_close(metrics.line_height, SIZE);
    // 'W' is 1493 units, about 15px, tall.
    assert!(
        metrics.center_offset > 7.0 && metrics.center_offset < metrics.max_ascend / 2.0,
        "center offset {} for ascend {}",
        metrics.center_offset,
        metrics.max_ascend
    );

    let space = atlas.glyph(' '.into()).unwrap();
    assert!(space.atlas_rect.is_empty());
    assert_close(space.advance, 651.0 * SCALE);
    for c in '!'..='~' {
        let glyph = atlas.glyph(c.into()).unwrap();
        assert!(glyph.advance > 0.0, "{c:?} does not advance");
        assert!(!glyph.atlas_rect.is_empty(), "{c:?} has no pixels");
    }

    let a = atlas.glyph('A'.into()).unwrap();
    assert_eq!(a.source, GlyphSource::Vector(GlyphIndex(36)));
    assert_close(a.advance, 1479.0 * SCALE);
    let bottom = a.render_offset.y + a.atlas_rect.height as f32;
    assert!(bottom.abs() <= 1.0, "'A' ends {bottom}px from the baseline");
    let g = atlas.glyph('g'.into()).unwrap();
    let bottom = g.render_offset.y + g.atlas_rect.height as f32;
    assert!(bottom > 3.0, "'g' only descends {bottom}px");

    let kern = |left: char, right: char| {
        registry.kerning_between(left.into(), right.into(), SIZE, FontStyle::empty())
    };
    assert_eq!(registry.kerning_table().len(), 1367);
    assert_close(kern('A', 'V'), -102.0 * SCALE);
    assert_close(kern('V', 'A'), -139.0 * SCALE);
    assert_close(kern('T', 'o'), -159.0 * SCALE);
    assert_eq!(kern('A', 'A'), 0.0);
}

#[test]
fn backends_swash_bakes_dejavu_serif() {
    check_ascii_atlas(&bake_ascii::<SwashRasterizer>(test_name!()));
}

#[test]
fn backends_skrifa_bakes_dejavu_serif() {
    check_ascii_atlas(&bake_ascii::<SkrifaRasterizer>(test_name!()));
}

#[test]
fn backends_agree_on_layout_metrics() {
    let swash = bake_ascii::<SwashRasterizer>(test_name!());
    let skrifa = bake_ascii::<SkrifaRasterizer>(test_name!());
    let (swash, skrifa) = (swash.default_atlas().unwrap(), skrifa.default_atlas().unwrap());
    assert_eq!(swash.metrics().line_height, skrifa.metrics().line_height);
    for (a, b) in swash.glyphs().iter().zip(skrifa.glyphs()) {
        assert_eq!(a.codepoint, b.codepoint);
        assert_eq!(a.source, b.source, "U+{:04X}", a.codepoint);
        assert_close(a.advance, b.advance);
        assert_close(a.logical_rect.width, b.logical_rect.width);
        assert_eq!(a.logical_rect.y, b.logical_rect.y, "U+{:04X}", a.codepoint);
        assert_eq!(a.logical_rect.height, b.logical_rect.height, "U+{:04X}", a.codepoint);
    }
}
