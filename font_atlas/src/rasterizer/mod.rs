// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The vector rasterizer capability and its backends.
//!
//! A [`Rasterizer`] is one parsed font file. The baker only talks to this trait, so both
//! backends produce the same atlas data:
//!
//! - `swash` (default feature): [`SwashRasterizer`], scaling and rendering with swash.
//! - `skrifa`: [`SkrifaRasterizer`], extracting outlines with skrifa and filling them with
//!   tiny-skia.
//!
//! [`DefaultRasterizer`] names whichever backend the build enabled, preferring swash.

use std::sync::Arc;

use crate::geometry::Vec2;
use crate::kerning::KerningEntry;

#[cfg(any(feature = "swash", feature = "skrifa"))]
mod kern;
#[cfg(feature = "skrifa")]
mod skrifa;
#[cfg(feature = "swash")]
mod swash;

#[cfg(feature = "skrifa")]
pub use self::skrifa::{SkrifaContext, SkrifaRasterizer};
#[cfg(feature = "swash")]
pub use self::swash::SwashRasterizer;

/// The rasterizer backend selected at build time.
#[cfg(feature = "swash")]
pub type DefaultRasterizer = SwashRasterizer;

/// The rasterizer backend selected at build time.
#[cfg(all(feature = "skrifa", not(feature = "swash")))]
pub type DefaultRasterizer = SkrifaRasterizer;

/// A glyph's index inside its font file. This is *not* a codepoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlyphIndex(pub u32);

/// Vertical font metrics in font design units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VerticalMetrics {
    /// Distance from the baseline to the top of the tallest glyphs.
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the lowest glyphs, as a positive number.
    pub descent: f32,
    /// Extra spacing between lines.
    pub line_gap: f32,
}

impl VerticalMetrics {
    /// Scale that maps the ascent-to-descent height onto `pixel_height` pixels.
    pub fn scale_for_pixel_height(&self, pixel_height: f32) -> f32 {
        let height = self.ascent + self.descent;
        if height > 0.0 {
            pixel_height / height
        } else {
            0.0
        }
    }
}

/// Pixels produced for one glyph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RasterImage {
    /// The glyph has no visible pixels (e.g. a space).
    #[default]
    Empty,
    /// One coverage byte per pixel.
    Coverage {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
        /// `width * height` coverage values.
        data: Vec<u8>,
    },
    /// Straight-alpha RGBA8 pixels from a colour glyph.
    Color {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
        /// `width * height * 4` bytes.
        data: Vec<u8>,
    },
}

impl RasterImage {
    /// Builds a coverage image, collapsing zero-area results to [`RasterImage::Empty`].
    pub fn coverage(width: u32, height: u32, data: Vec<u8>) -> Self {
        if width == 0 || height == 0 {
            Self::Empty
        } else {
            debug_assert_eq!(data.len(), width as usize * height as usize, "coverage size mismatch");
            Self::Coverage {
                width,
                height,
                data,
            }
        }
    }

    /// Width and height in pixels.
    pub fn size(&self) -> (u32, u32) {
        match self {
            Self::Empty => (0, 0),
            Self::Coverage { width, height, .. } | Self::Color { width, height, .. } => {
                (*width, *height)
            }
        }
    }

    /// Returns `true` if the image covers no pixels.
    pub fn is_empty(&self) -> bool {
        let (width, height) = self.size();
        width == 0 || height == 0
    }

    /// Returns `true` if `data` holds exactly one value per pixel of the stated size.
    pub fn is_well_formed(&self) -> bool {
        let expected = |width: u32, height: u32, channels: usize| {
            (width as usize)
                .checked_mul(height as usize)
                .and_then(|pixels| pixels.checked_mul(channels))
        };
        match self {
            Self::Empty => true,
            Self::Coverage {
                width,
                height,
                data,
            } => expected(*width, *height, 1) == Some(data.len()),
            Self::Color {
                width,
                height,
                data,
            } => expected(*width, *height, 4) == Some(data.len()),
        }
    }
}

/// A rasterized glyph and its placement metrics at one scale.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RasterizedGlyph {
    /// The pixels.
    pub image: RasterImage,
    /// Horizontal advance in pixels.
    pub advance: f32,
    /// Top-left corner of the image relative to the pen position on the baseline.
    pub offset: Vec2,
}

/// A parsed font file that can rasterize glyphs.
///
/// `Context` is process-wide backend state owned by the [`library`](crate::library)
/// singleton; it is only handed out while the library lock is held, so implementations
/// don't need to be thread-safe themselves.
pub trait Rasterizer: Sized {
    /// Backend state shared by every font using this backend.
    type Context: Send + 'static;

    /// Short backend name used in log messages.
    const NAME: &'static str;

    /// Brings up the backend state. Called once, on first use.
    fn create_context() -> Option<Self::Context>;

    /// Parses face `face_index` of a font file.
    ///
    /// Returns `None` if the bytes are not a font this backend understands.
    fn parse(data: Arc<[u8]>, face_index: u32) -> Option<Self>;

    /// Maps a codepoint to a glyph, or `None` if the font doesn't cover it.
    fn glyph_index(&self, codepoint: u32) -> Option<GlyphIndex>;

    /// Vertical metrics in font units.
    fn vertical_metrics(&self) -> VerticalMetrics;

    /// Scale from font units to pixels such that the font is `pixel_height` pixels tall.
    fn scale_for_pixel_height(&self, pixel_height: f32) -> f32 {
        self.vertical_metrics().scale_for_pixel_height(pixel_height)
    }

    /// Rasterizes a glyph at `scale` pixels per font unit.
    ///
    /// With `colored`, colour glyph data is preferred and may come back as
    /// [`RasterImage::Color`]. Returns `None` if the glyph could not be rendered.
    fn rasterize_glyph(
        &self,
        context: &mut Self::Context,
        glyph: GlyphIndex,
        scale: f32,
        colored: bool,
    ) -> Option<RasterizedGlyph>;

    /// Every kerning pair the font defines, in unscaled font units.
    fn kerning_table(&self) -> Vec<KerningEntry>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_maps_ascent_plus_descent_to_pixel_height() {
        let metrics = VerticalMetrics {
            ascent: 800.0,
            descent: 200.0,
            line_gap: 0.0,
        };
        assert_eq!(metrics.scale_for_pixel_height(20.0), 0.02);
        assert_eq!(VerticalMetrics::default().scale_for_pixel_height(20.0), 0.0);
    }

    #[test]
    fn zero_sized_coverage_collapses_to_empty() {
        assert_eq!(RasterImage::coverage(0, 5, Vec::new()), RasterImage::Empty);
        assert!(RasterImage::Empty.is_empty());
        assert_eq!(RasterImage::coverage(2, 1, vec![1, 2]).size(), (2, 1));
    }

    #[test]
    fn well_formed_images_match_their_size() {
        assert!(RasterImage::Empty.is_well_formed());
        assert!(RasterImage::coverage(2, 2, vec![0; 4]).is_well_formed());
        let short = RasterImage::Coverage {
            width: 2,
            height: 2,
            data: vec![0; 3],
        };
        assert!(!short.is_well_formed());
        let color = RasterImage::Color {
            width: 1,
            height: 2,
            data: vec![0; 8],
        };
        assert!(color.is_well_formed());
        let coverage_sized = RasterImage::Color {
            width: 1,
            height: 2,
            data: vec![0; 2],
        };
        assert!(!coverage_sized.is_well_formed());
    }
}
