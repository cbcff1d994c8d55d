// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font Atlas bakes glyphs into square texture atlases and finds them again for layout.
//!
//! A [`FontRegistry`] holds one font file and the atlases baked from it. Each bake
//! rasterizes a set of codepoint ranges at one pixel size and style, optionally adds
//! pre-rasterized [`CustomGlyph`]s, packs everything into the smallest square canvas
//! that fits and hands the RGBA pixels to a [`TextureFactory`]. Layout code then calls
//! [`FontRegistry::resolve`] to find the glyph for a codepoint in the atlas nearest to
//! the size and style it needs.
//!
//! ```no_run
//! # #[cfg(feature = "swash")]
//! # fn bake(font_bytes: &[u8]) -> Result<(), font_atlas::BakeError> {
//! use font_atlas::{
//!     BakeSettings, CanvasBounds, CodepointRange, CpuTexture, CpuTextures, DefaultRasterizer,
//!     FontRegistry, FontStorage, FontStyle, ScratchArena,
//! };
//!
//! let mut registry = FontRegistry::<DefaultRasterizer, CpuTexture>::new("body");
//! registry.attach_font(FontStorage::Copy(font_bytes), FontStyle::empty())?;
//!
//! let mut scratch = ScratchArena::new();
//! registry.bake_atlases(
//!     &mut scratch,
//!     &mut CpuTextures,
//!     &[BakeSettings::new(16.0).with_kerning_table(), BakeSettings::new(24.0)],
//!     CanvasBounds::default(),
//!     &[CodepointRange::ASCII],
//!     &[],
//! )?;
//!
//! let (glyph, atlas) = registry.resolve('A'.into(), 18.0, FontStyle::empty()).unwrap();
//! assert_eq!(atlas.size(), 16.0);
//! # let _ = glyph;
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `swash` (enabled by default): rasterize with swash.
//! - `skrifa`: rasterize by extracting outlines with skrifa and filling them with tiny-skia.
//!
//! [`DefaultRasterizer`] is swash when both are enabled. Other backends can implement
//! [`Rasterizer`] themselves.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

mod atlas;
mod bake;
mod error;
mod geometry;
mod kerning;
mod lookup;
mod packer;
mod range;
mod record;
mod registry;
mod scratch;
mod style;
mod texture;

pub mod library;
pub mod rasterizer;

pub use atlas::{Atlas, AtlasMetrics, Glyph, GlyphSource};
pub use bake::{bake_atlas, BakeRequest, GLYPH_PADDING};
pub use error::BakeError;
pub use geometry::{PixelRect, Rect, Vec2};
pub use kerning::{KerningEntry, KerningTable};
pub use lookup::{resolve, select_atlas, SIZE_TOLERANCE};
pub use packer::{CanvasBounds, PackSize, RectPacker};
pub use range::{
    normalize_ranges, remove_codepoints, CodepointRange, CustomGlyph, CustomGlyphRange, ImageData,
};
pub use record::{GlyphRecord, GLYPH_RECORD_CUSTOM, GLYPH_RECORD_VERSION, NO_GLYPH_INDEX};
pub use registry::{BakeSettings, FontRegistry, FontStorage};
#[cfg(any(feature = "swash", feature = "skrifa"))]
pub use rasterizer::DefaultRasterizer;
pub use rasterizer::{GlyphIndex, RasterImage, RasterizedGlyph, Rasterizer, VerticalMetrics};
pub use scratch::{ScratchArena, ScratchScope};
pub use style::FontStyle;
pub use texture::{CpuTexture, CpuTextures, TextureDescriptor, TextureFactory};
