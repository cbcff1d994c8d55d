// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph rasterization using swash.

use std::sync::Arc;

use swash::scale::image::Content;
use swash::scale::{Render, ScaleContext, Source, StrikeWith};
use swash::zeno::Format;
use swash::{CacheKey, FontRef};

use super::{kern, GlyphIndex, RasterImage, RasterizedGlyph, Rasterizer, VerticalMetrics};
use crate::geometry::Vec2;
use crate::kerning::KerningEntry;

const OUTLINE_SOURCES: &[Source] = &[Source::Outline];
const COLOR_SOURCES: &[Source] = &[
    Source::ColorOutline(0),
    Source::ColorBitmap(StrikeWith::BestFit),
    Source::Outline,
];

/// A font file rasterized with swash.
///
/// The swash [`ScaleContext`] is the backend's shared context.
#[derive(Clone)]
pub struct SwashRasterizer {
    data: Arc<[u8]>,
    face_index: u32,
    offset: u32,
    key: CacheKey,
}

impl SwashRasterizer {
    fn font(&self) -> FontRef<'_> {
        FontRef {
            data: &self.data,
            offset: self.offset,
            key: self.key,
        }
    }
}

impl core::fmt::Debug for SwashRasterizer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SwashRasterizer")
            .field("len", &self.data.len())
            .field("face_index", &self.face_index)
            .finish_non_exhaustive()
    }
}

impl Rasterizer for SwashRasterizer {
    type Context = ScaleContext;

    const NAME: &'static str = "swash";

    fn create_context() -> Option<ScaleContext> {
        Some(ScaleContext::new())
    }

    fn parse(data: Arc<[u8]>, face_index: u32) -> Option<Self> {
        let (offset, key) = {
            let font = FontRef::from_index(&data, face_index as usize)?;
            (font.offset, font.key)
        };
        Some(Self {
            data,
            face_index,
            offset,
            key,
        })
    }

    fn glyph_index(&self, codepoint: u32) -> Option<GlyphIndex> {
        let id = self.font().charmap().map(codepoint);
        (id != 0).then_some(GlyphIndex(id.into()))
    }

    fn vertical_metrics(&self) -> VerticalMetrics {
        let metrics = self.font().metrics(&[]);
        VerticalMetrics {
            ascent: metrics.ascent,
            descent: metrics.descent.abs(),
            line_gap: metrics.leading,
        }
    }

    fn rasterize_glyph(
        &self,
        context: &mut ScaleContext,
        glyph: GlyphIndex,
        scale: f32,
        colored: bool,
    ) -> Option<RasterizedGlyph> {
        let glyph_id = u16::try_from(glyph.0).ok()?;
        let font = self.font();
        let ppem = scale * f32::from(font.metrics(&[]).units_per_em);
        let advance = font.glyph_metrics(&[]).advance_width(glyph_id) * scale;

        let mut scaler = context.builder(font).size(ppem).hint(false).build();
        let sources = if colored { COLOR_SOURCES } else { OUTLINE_SOURCES };
        let Some(rendered) = Render::new(sources)
            .format(Format::Alpha)
            .render(&mut scaler, glyph_id)
        else {
            // Glyphs without an outline (spaces) still advance the pen.
            return Some(RasterizedGlyph {
                image: RasterImage::Empty,
                advance,
                offset: Vec2::default(),
            });
        };

        let width = rendered.placement.width;
        let height = rendered.placement.height;
        let image = match rendered.content {
            Content::Mask => RasterImage::coverage(width, height, rendered.data),
            Content::Color if width > 0 && height > 0 => RasterImage::Color {
                width,
                height,
                data: rendered.data,
            },
            Content::Color => RasterImage::Empty,
            Content::SubpixelMask => RasterImage::coverage(
                width,
                height,
                rendered.data.chunks_exact(4).map(|px| px[3]).collect(),
            ),
        };
        Some(RasterizedGlyph {
            image,
            advance,
            offset: Vec2::new(
                rendered.placement.left as f32,
                -(rendered.placement.top as f32),
            ),
        })
    }

    fn kerning_table(&self) -> Vec<KerningEntry> {
        kern::kerning_table(&self.data, self.face_index)
    }
}
