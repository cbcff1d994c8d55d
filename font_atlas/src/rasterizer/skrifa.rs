// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph rasterization by extracting outlines with skrifa and filling them with tiny-skia.
//!
//! This backend renders outlines only; colour glyph requests fall back to coverage.

use std::sync::Arc;

use skrifa::instance::{LocationRef, Size};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::{FontRef, GlyphId, MetadataProvider};
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Transform};

use super::{kern, GlyphIndex, RasterImage, RasterizedGlyph, Rasterizer, VerticalMetrics};
use crate::geometry::Vec2;
use crate::kerning::KerningEntry;

/// A font file rasterized with skrifa and tiny-skia.
#[derive(Clone)]
pub struct SkrifaRasterizer {
    data: Arc<[u8]>,
    face_index: u32,
}

impl core::fmt::Debug for SkrifaRasterizer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SkrifaRasterizer")
            .field("len", &self.data.len())
            .field("face_index", &self.face_index)
            .finish_non_exhaustive()
    }
}

/// Shared state of the skrifa backend: a canvas reused between glyphs of the same size.
#[derive(Debug, Default)]
pub struct SkrifaContext {
    canvas: Option<Pixmap>,
}

impl SkrifaContext {
    fn canvas(&mut self, width: u32, height: u32) -> Option<&mut Pixmap> {
        let reusable = self
            .canvas
            .as_ref()
            .is_some_and(|c| c.width() == width && c.height() == height);
        if !reusable {
            self.canvas = Some(Pixmap::new(width, height)?);
        }
        let canvas = self.canvas.as_mut()?;
        canvas.fill(Color::TRANSPARENT);
        Some(canvas)
    }
}

/// Collects a glyph outline into a tiny-skia path, flipping y to point down.
struct PathPen {
    builder: PathBuilder,
}

impl OutlinePen for PathPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(x, -y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(x, -y);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.builder.quad_to(cx0, -cy0, x, -y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.builder.cubic_to(cx0, -cy0, cx1, -cy1, x, -y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

impl SkrifaRasterizer {
    fn font(&self) -> Option<FontRef<'_>> {
        FontRef::from_index(&self.data, self.face_index).ok()
    }
}

impl Rasterizer for SkrifaRasterizer {
    type Context = SkrifaContext;

    const NAME: &'static str = "skrifa";

    fn create_context() -> Option<SkrifaContext> {
        Some(SkrifaContext::default())
    }

    fn parse(data: Arc<[u8]>, face_index: u32) -> Option<Self> {
        FontRef::from_index(&data, face_index).ok()?;
        Some(Self { data, face_index })
    }

    fn glyph_index(&self, codepoint: u32) -> Option<GlyphIndex> {
        let id = self.font()?.charmap().map(codepoint)?;
        (id != GlyphId::NOTDEF).then_some(GlyphIndex(id.to_u32()))
    }

    fn vertical_metrics(&self) -> VerticalMetrics {
        let Some(font) = self.font() else {
            return VerticalMetrics::default();
        };
        let metrics = font.metrics(Size::unscaled(), LocationRef::default());
        VerticalMetrics {
            ascent: metrics.ascent,
            descent: metrics.descent.abs(),
            line_gap: metrics.leading,
        }
    }

    fn rasterize_glyph(
        &self,
        context: &mut SkrifaContext,
        glyph: GlyphIndex,
        scale: f32,
        colored: bool,
    ) -> Option<RasterizedGlyph> {
        if colored {
            log::trace!("skrifa backend renders glyph {} as coverage", glyph.0);
        }
        let font = self.font()?;
        let units_per_em = font
            .metrics(Size::unscaled(), LocationRef::default())
            .units_per_em;
        let size = Size::new(scale * f32::from(units_per_em));
        let glyph_id = GlyphId::new(glyph.0);
        let advance = font
            .glyph_metrics(size, LocationRef::default())
            .advance_width(glyph_id)
            .unwrap_or_default();
        let empty = RasterizedGlyph {
            image: RasterImage::Empty,
            advance,
            offset: Vec2::default(),
        };

        let Some(outline) = font.outline_glyphs().get(glyph_id) else {
            return Some(empty);
        };
        let mut pen = PathPen {
            builder: PathBuilder::new(),
        };
        outline
            .draw(DrawSettings::unhinted(size, LocationRef::default()), &mut pen)
            .ok()?;
        let Some(path) = pen.builder.finish() else {
            return Some(empty);
        };

        let bounds = path.bounds();
        let left = bounds.left().floor();
        let top = bounds.top().floor();
        #[allow(
            clippy::cast_possible_truncation,
            reason = "glyph bounds at atlas sizes are far below u32::MAX"
        )]
        let (width, height) = (
            (bounds.right().ceil() - left) as u32,
            (bounds.bottom().ceil() - top) as u32,
        );
        if width == 0 || height == 0 {
            return Some(empty);
        }

        let canvas = context.canvas(width, height)?;
        let mut paint = Paint::default();
        paint.set_color_rgba8(255, 255, 255, 255);
        paint.anti_alias = true;
        canvas.fill_path(
            &path,
            &paint,
            FillRule::Winding,
            Transform::from_translate(-left, -top),
            None,
        );
        let coverage = canvas.data().chunks_exact(4).map(|px| px[3]).collect();

        Some(RasterizedGlyph {
            image: RasterImage::coverage(width, height, coverage),
            advance,
            offset: Vec2::new(left, top),
        })
    }

    fn kerning_table(&self) -> Vec<KerningEntry> {
        kern::kerning_table(&self.data, self.face_index)
    }
}
