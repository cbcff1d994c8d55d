// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Baking glyphs into an atlas.
//!
//! A bake rasterizes every requested codepoint, packs the bitmaps into the smallest
//! square canvas that fits, copies the pixels in and hands the canvas to a
//! [`TextureFactory`]. Any failure aborts the whole bake.

use crate::atlas::{Atlas, AtlasMetrics, Glyph, GlyphSource};
use crate::error::BakeError;
use crate::geometry::{PixelRect, Rect, Vec2};
use crate::packer::{CanvasBounds, PackSize};
use crate::range::{normalize_ranges, CodepointRange, CustomGlyph, CustomGlyphRange};
use crate::rasterizer::{RasterImage, Rasterizer};
use crate::scratch::ScratchArena;
use crate::style::FontStyle;
use crate::texture::{TextureDescriptor, TextureFactory};

/// Empty pixels kept around each vector glyph so texture filtering doesn't bleed
/// neighbours into each other.
pub const GLYPH_PADDING: u32 = 1;

/// Reference glyph whose visible height sets [`AtlasMetrics::center_offset`].
const CENTER_REFERENCE: char = 'W';

/// Everything one bake needs besides the font and the working memory.
#[derive(Clone, Copy, Debug)]
pub struct BakeRequest<'a> {
    /// Debug label for the texture.
    pub label: &'a str,
    /// Pixel size: the distance from the lowest descender to the highest ascender.
    pub size: f32,
    /// Style flags recorded on the atlas. [`FontStyle::COLORED_GLYPHS`] asks for colour glyphs.
    pub style: FontStyle,
    /// Canvas sizes the packer may use.
    pub bounds: CanvasBounds,
    /// Codepoints to rasterize from the font. Overlapping and touching ranges are merged.
    pub ranges: &'a [CodepointRange],
    /// Pre-rasterized glyphs to copy into the atlas.
    pub custom_ranges: &'a [CustomGlyphRange],
}

/// Bakes one atlas.
///
/// `context` is the backend state owned by the [`library`](crate::library) singleton.
pub fn bake_atlas<R: Rasterizer, F: TextureFactory>(
    font: &R,
    context: &mut R::Context,
    scratch: &mut ScratchArena,
    textures: &mut F,
    request: &BakeRequest<'_>,
) -> Result<Atlas<F::Texture>, BakeError> {
    bake(font, context, scratch, textures, request).inspect_err(|err| {
        log::warn!("baking {} at {}px failed: {err}", request.label, request.size);
    })
}

fn bake<R: Rasterizer, F: TextureFactory>(
    font: &R,
    context: &mut R::Context,
    scratch: &mut ScratchArena,
    textures: &mut F,
    request: &BakeRequest<'_>,
) -> Result<Atlas<F::Texture>, BakeError> {
    debug_assert!(request.size > 0.0, "bake size must be positive");
    let ranges = normalize_ranges(request.ranges);
    let vertical = font.vertical_metrics();
    let scale = font.scale_for_pixel_height(request.size);
    let colored = request.style.contains(FontStyle::COLORED_GLYPHS);

    let mut scope = scratch.scope();
    let buffers = scope.buffers();

    for range in &ranges {
        for codepoint in range.codepoints() {
            let index = font
                .glyph_index(codepoint)
                .ok_or(BakeError::NotFound { codepoint })?;
            let glyph = font
                .rasterize_glyph(context, index, scale, colored)
                .ok_or(BakeError::InvalidCharacter { codepoint })?;
            if !glyph.image.is_well_formed() {
                log::warn!("{} returned a malformed bitmap for U+{codepoint:04X}", R::NAME);
                return Err(BakeError::InvalidCharacter { codepoint });
            }
            let (width, height) = glyph.image.size();
            log::trace!("U+{codepoint:04X} -> glyph {} {width}x{height}", index.0);
            buffers.sizes.push(if glyph.image.is_empty() {
                PackSize::default()
            } else {
                PackSize::new(width + 2 * GLYPH_PADDING, height + 2 * GLYPH_PADDING)
            });
            buffers.indices.push(index);
            buffers.glyphs.push(glyph);
        }
    }
    for custom in request.custom_ranges.iter().flat_map(CustomGlyphRange::glyphs) {
        let source = custom.source_rect();
        buffers.sizes.push(PackSize::new(source.width, source.height));
    }

    let canvas = buffers
        .packer
        .pack(&buffers.sizes, request.bounds, &mut buffers.placements)?;
    let stride = canvas as usize * 4;
    buffers.pixels.resize(stride * canvas as usize, 0);

    let mut glyphs = Vec::with_capacity(buffers.sizes.len());
    let max_ascend = vertical.ascent * scale;
    let max_descend = vertical.descent * scale;
    let codepoints = ranges.iter().flat_map(CodepointRange::codepoints);
    for (((raster, &index), &slot), codepoint) in buffers
        .glyphs
        .iter()
        .zip(&buffers.indices)
        .zip(&buffers.placements)
        .zip(codepoints)
    {
        let (width, height) = raster.image.size();
        let atlas_rect = if raster.image.is_empty() {
            PixelRect::default()
        } else {
            let (x, y) = (slot.x + GLYPH_PADDING, slot.y + GLYPH_PADDING);
            let rect = PixelRect::new(x, y, width, height);
            blit(&mut buffers.pixels, stride, rect, &raster.image);
            rect
        };
        glyphs.push(Glyph {
            codepoint,
            source: GlyphSource::Vector(index),
            atlas_rect,
            advance: raster.advance,
            render_offset: raster.offset,
            logical_rect: Rect::new(0.0, -max_ascend, raster.advance, max_ascend + max_descend),
        });
    }
    let custom_slots = &buffers.placements[buffers.glyphs.len()..];
    for (custom, &atlas_rect) in request
        .custom_ranges
        .iter()
        .flat_map(CustomGlyphRange::glyphs)
        .zip(custom_slots)
    {
        copy_custom(&mut buffers.pixels, stride, atlas_rect, custom);
        let width = atlas_rect.width as f32;
        let height = atlas_rect.height as f32;
        glyphs.push(Glyph {
            codepoint: custom.codepoint,
            source: GlyphSource::Custom,
            atlas_rect,
            advance: width,
            render_offset: Vec2::new(0.0, -height),
            logical_rect: Rect::new(0.0, -height, width, height),
        });
    }

    let metrics = AtlasMetrics {
        line_height: max_ascend + max_descend + vertical.line_gap * scale,
        max_ascend,
        max_descend,
        center_offset: cap_height(font, context, scale).unwrap_or(max_ascend) / 2.0,
    };
    let texture = textures.create_texture(TextureDescriptor {
        label: request.label,
        width: canvas,
        height: canvas,
        pixels: &buffers.pixels,
    })?;

    let mut atlas = Atlas::new(request.size, scale, request.style, canvas, metrics, texture);
    let mut glyphs = glyphs.into_iter();
    for range in &ranges {
        atlas.push_range(*range, glyphs.by_ref().take(range.len()));
    }
    for custom in request.custom_ranges {
        atlas.push_range(
            CodepointRange::new(custom.start(), custom.end()),
            glyphs.by_ref().take(custom.glyphs().len()),
        );
    }

    log::debug!(
        "baked {}: {} glyphs at {}px into {canvas}x{canvas}, line height {:.2}",
        request.label,
        atlas.glyphs().len(),
        request.size,
        metrics.line_height
    );
    Ok(atlas)
}

/// Visible height of the reference capital, if the font has one.
fn cap_height<R: Rasterizer>(font: &R, context: &mut R::Context, scale: f32) -> Option<f32> {
    let index = font.glyph_index(CENTER_REFERENCE.into())?;
    let glyph = font.rasterize_glyph(context, index, scale, false)?;
    let (_, height) = glyph.image.size();
    (height > 0).then_some(height as f32)
}

/// Writes a non-empty, well-formed rasterized glyph into `rect` of an RGBA canvas.
///
/// Coverage becomes alpha over white so draw-time tinting only needs to multiply.
fn blit(pixels: &mut [u8], stride: usize, rect: PixelRect, image: &RasterImage) {
    match image {
        RasterImage::Empty => {}
        RasterImage::Coverage { width, data, .. } => {
            for (row, line) in data.chunks_exact(*width as usize).enumerate() {
                let start = (rect.y as usize + row) * stride + rect.x as usize * 4;
                let dst = &mut pixels[start..start + line.len() * 4];
                for (px, &alpha) in dst.chunks_exact_mut(4).zip(line) {
                    px.copy_from_slice(&[255, 255, 255, alpha]);
                }
            }
        }
        RasterImage::Color { width, data, .. } => {
            let row_bytes = *width as usize * 4;
            for (row, line) in data.chunks_exact(row_bytes).enumerate() {
                let start = (rect.y as usize + row) * stride + rect.x as usize * 4;
                pixels[start..start + row_bytes].copy_from_slice(line);
            }
        }
    }
}

/// Copies the source rectangle of a custom glyph into `rect` of an RGBA canvas, unchanged.
fn copy_custom(pixels: &mut [u8], stride: usize, rect: PixelRect, glyph: &CustomGlyph) {
    let source = glyph.source_rect();
    let image_stride = glyph.image.width() as usize * 4;
    let row_bytes = source.width as usize * 4;
    for row in 0..source.height as usize {
        let src = (source.y as usize + row) * image_stride + source.x as usize * 4;
        let dst = (rect.y as usize + row) * stride + rect.x as usize * 4;
        pixels[dst..dst + row_bytes].copy_from_slice(&glyph.image.pixels()[src..src + row_bytes]);
    }
}
