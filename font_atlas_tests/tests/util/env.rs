// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A registry with a synthetic font attached, plus the working memory to bake into it.

use font_atlas::{
    Atlas, BakeError, BakeSettings, CanvasBounds, CodepointRange, CpuTexture, CpuTextures,
    CustomGlyphRange, FontRegistry, FontStorage, FontStyle, ScratchArena,
};
use font_atlas_dev::{SyntheticFont, SyntheticRasterizer};

pub(crate) type Registry = FontRegistry<SyntheticRasterizer, CpuTexture>;

/// Canvas bounds used by tests that don't exercise packing limits.
pub(crate) const TEST_BOUNDS: CanvasBounds = CanvasBounds::new(64, 1024);

/// ASCII and Latin-1, with a few kerning pairs.
///
/// Ascent 800, descent 200 and line gap 100 make a 20px bake scale by exactly 0.02.
pub(crate) fn latin_font() -> SyntheticFont {
    SyntheticFont::new()
        .covering(0x20, 0x7E)
        .covering(0xA0, 0xFF)
        .kerning('A', 'V', -80)
        .kerning('V', 'A', -40)
        .kerning('T', 'o', -60)
}

pub(crate) struct TestEnv {
    pub(crate) registry: Registry,
    pub(crate) scratch: ScratchArena,
    pub(crate) textures: CpuTextures,
}

impl TestEnv {
    /// A registry named after the test, with `font` attached.
    pub(crate) fn new(test_name: &str, font: &SyntheticFont) -> Self {
        Self::with_style(test_name, font, FontStyle::empty())
    }

    pub(crate) fn with_style(test_name: &str, font: &SyntheticFont, style: FontStyle) -> Self {
        let mut registry = Registry::new(test_name);
        registry
            .attach_font(FontStorage::Copy(&font.to_bytes()), style)
            .unwrap();
        Self {
            registry,
            scratch: ScratchArena::new(),
            textures: CpuTextures,
        }
    }

    pub(crate) fn bake(
        &mut self,
        settings: BakeSettings,
        ranges: &[CodepointRange],
    ) -> Result<&Atlas<CpuTexture>, BakeError> {
        self.bake_in(settings, TEST_BOUNDS, ranges, &[])
    }

    pub(crate) fn bake_in(
        &mut self,
        settings: BakeSettings,
        bounds: CanvasBounds,
        ranges: &[CodepointRange],
        custom_ranges: &[CustomGlyphRange],
    ) -> Result<&Atlas<CpuTexture>, BakeError> {
        self.registry.bake_atlas(
            &mut self.scratch,
            &mut self.textures,
            settings,
            bounds,
            ranges,
            custom_ranges,
        )
    }

    /// Bakes printable ASCII at each size, with default style.
    pub(crate) fn bake_sizes(&mut self, sizes: &[f32]) {
        for &size in sizes {
            self.bake(BakeSettings::new(size), &[CodepointRange::ASCII])
                .unwrap();
        }
    }
}
