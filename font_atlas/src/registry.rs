// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Everything baked from one font file.

use std::sync::Arc;

use crate::atlas::{Atlas, Glyph};
use crate::bake::{self, BakeRequest};
use crate::error::BakeError;
use crate::kerning::KerningTable;
use crate::library;
use crate::lookup;
use crate::packer::CanvasBounds;
use crate::range::{CodepointRange, CustomGlyphRange};
use crate::rasterizer::Rasterizer;
use crate::scratch::ScratchArena;
use crate::style::FontStyle;
use crate::texture::TextureFactory;

/// How font bytes are handed to [`FontRegistry::attach_font`].
#[derive(Clone, Debug)]
pub enum FontStorage<'a> {
    /// The registry keeps its own copy; the caller's buffer can be freed afterwards.
    Copy(&'a [u8]),
    /// The registry shares the caller's buffer.
    Borrowed(Arc<[u8]>),
}

/// Size and style of one bake.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BakeSettings {
    /// Pixel size.
    pub size: f32,
    /// Style flags, combined with the flags of the attached font.
    pub style: FontStyle,
    /// Rebuild the kerning table after the bake.
    pub fill_kerning_table: bool,
}

impl BakeSettings {
    /// Settings for a plain bake at `size` pixels.
    pub const fn new(size: f32) -> Self {
        Self {
            size,
            style: FontStyle::empty(),
            fill_kerning_table: false,
        }
    }

    /// Sets the style flags.
    pub const fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// Rebuilds the kerning table after the bake.
    pub const fn with_kerning_table(mut self) -> Self {
        self.fill_kerning_table = true;
        self
    }
}

/// A font file and the atlases baked from it.
///
/// `R` is the rasterizer backend, `T` the texture type of the [`TextureFactory`] used to bake.
/// Atlases are only ever appended by successful bakes or removed all at once.
#[derive(Debug)]
pub struct FontRegistry<R, T> {
    name: String,
    atlases: Vec<Atlas<T>>,
    kerning: KerningTable,
    style: FontStyle,
    font: Option<R>,
    data: Option<Arc<[u8]>>,
}

impl<R: Rasterizer + 'static, T> FontRegistry<R, T> {
    /// Creates an empty registry. `name` labels log messages and textures.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            atlases: Vec::new(),
            kerning: KerningTable::new(),
            style: FontStyle::empty(),
            font: None,
            data: None,
        }
    }

    /// The name given at creation.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parses font bytes and makes them the source of future bakes.
    ///
    /// `style` describes the file itself (e.g. a bold cut) and is added to every atlas baked
    /// from it. A previously attached font is replaced; existing atlases are kept.
    pub fn attach_font(&mut self, data: FontStorage<'_>, style: FontStyle) -> Result<(), BakeError> {
        library::with_context::<R, _>(|_| Ok(()))?;
        let data: Arc<[u8]> = match data {
            FontStorage::Copy(bytes) => bytes.into(),
            FontStorage::Borrowed(bytes) => bytes,
        };
        let Some(font) = R::parse(data.clone(), 0) else {
            log::warn!("{}: {} bytes are not a font {} can read", self.name, data.len(), R::NAME);
            return Err(BakeError::ParsingFailure);
        };
        log::debug!("{}: attached {} bytes with style {style:?}", self.name, data.len());
        self.font = Some(font);
        self.data = Some(data);
        self.style = style;
        Ok(())
    }

    /// Returns `true` if font bytes are attached.
    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// The attached font bytes.
    pub fn font_data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    /// Releases the font bytes and the parsed font. Baked atlases stay usable.
    pub fn remove_font(&mut self) {
        self.font = None;
        self.data = None;
    }

    /// Bakes one atlas and appends it.
    ///
    /// On error the atlas list is unchanged.
    pub fn bake_atlas<F>(
        &mut self,
        scratch: &mut ScratchArena,
        textures: &mut F,
        settings: BakeSettings,
        bounds: CanvasBounds,
        ranges: &[CodepointRange],
        custom_ranges: &[CustomGlyphRange],
    ) -> Result<&Atlas<T>, BakeError>
    where
        F: TextureFactory<Texture = T>,
    {
        let font = self.font.as_ref().ok_or(BakeError::MissingFontData)?;
        let label = format!("{}_atlas[{}]", self.name, self.atlases.len());
        let request = BakeRequest {
            label: &label,
            size: settings.size,
            style: settings.style | self.style,
            bounds,
            ranges,
            custom_ranges,
        };
        let atlas = library::with_context::<R, _>(|context| {
            bake::bake_atlas(font, context, scratch, textures, &request)
        })?;
        if settings.fill_kerning_table {
            self.fill_kerning_table()?;
        }
        self.atlases.push(atlas);
        Ok(&self.atlases[self.atlases.len() - 1])
    }

    /// Bakes the same glyphs once per entry of `settings`.
    ///
    /// Stops at the first failure and returns it; atlases from earlier entries are kept.
    pub fn bake_atlases<F>(
        &mut self,
        scratch: &mut ScratchArena,
        textures: &mut F,
        settings: &[BakeSettings],
        bounds: CanvasBounds,
        ranges: &[CodepointRange],
        custom_ranges: &[CustomGlyphRange],
    ) -> Result<(), BakeError>
    where
        F: TextureFactory<Texture = T>,
    {
        for &setting in settings {
            self.bake_atlas(scratch, textures, setting, bounds, ranges, custom_ranges)?;
        }
        Ok(())
    }

    /// Rebuilds the kerning table from the attached font. Returns the number of pairs.
    pub fn fill_kerning_table(&mut self) -> Result<usize, BakeError> {
        let font = self.font.as_ref().ok_or(BakeError::MissingFontData)?;
        self.kerning.rebuild(font.kerning_table());
        log::debug!("{}: {} kerning pairs", self.name, self.kerning.len());
        Ok(self.kerning.len())
    }

    /// The kerning table; empty until [`fill_kerning_table`](Self::fill_kerning_table).
    pub fn kerning_table(&self) -> &KerningTable {
        &self.kerning
    }

    /// Drops every atlas, keeping the font and kerning table.
    pub fn clear_atlases(&mut self) {
        self.atlases.clear();
    }

    /// Releases atlases, kerning table, font bytes and parsed font.
    pub fn teardown(&mut self) {
        self.clear_atlases();
        self.kerning.clear();
        self.remove_font();
        self.style = FontStyle::empty();
    }

    /// All atlases, in bake order.
    pub fn atlases(&self) -> &[Atlas<T>] {
        &self.atlases
    }

    /// The first atlas baked.
    pub fn default_atlas(&self) -> Option<&Atlas<T>> {
        self.atlases.first()
    }

    /// Pixel size of the first atlas baked.
    pub fn default_size(&self) -> Option<f32> {
        self.default_atlas().map(Atlas::size)
    }

    /// Style flags of the first atlas baked.
    pub fn default_style(&self) -> Option<FontStyle> {
        self.default_atlas().map(Atlas::style)
    }

    /// Line height of the atlas closest to `size` and `style`.
    pub fn line_height(&self, size: f32, style: FontStyle) -> Option<f32> {
        lookup::select_atlas(&self.atlases, 0, size, style).map(|atlas| atlas.metrics().line_height)
    }

    /// Finds the glyph to draw `codepoint` with at `size` and `style`.
    pub fn resolve(&self, codepoint: u32, size: f32, style: FontStyle) -> Option<(&Glyph, &Atlas<T>)> {
        lookup::resolve(&self.atlases, codepoint, size, style)
    }

    /// Kerning in pixels to apply between `left` and `right` drawn at `size` and `style`.
    ///
    /// Zero when either codepoint has no glyph, or the two glyphs resolve to atlases of
    /// different scale.
    pub fn kerning_between(&self, left: u32, right: u32, size: f32, style: FontStyle) -> f32 {
        let (Some(left), Some(right)) = (
            self.resolve(left, size, style),
            self.resolve(right, size, style),
        ) else {
            return 0.0;
        };
        self.kerning.adjustment(left, right)
    }

    /// Logs every atlas at debug level.
    pub fn log_atlases(&self) {
        log::debug!("{}: {} atlases", self.name, self.atlases.len());
        for (index, atlas) in self.atlases.iter().enumerate() {
            let metrics = atlas.metrics();
            log::debug!(
                "  [{index}] {}px {:?} {}x{} glyphs={} ranges={:?} line={:.2} ascend={:.2} descend={:.2} center={:.2}",
                atlas.size(),
                atlas.style(),
                atlas.canvas_size(),
                atlas.canvas_size(),
                atlas.glyphs().len(),
                atlas.ranges(),
                metrics.line_height,
                metrics.max_ascend,
                metrics.max_descend,
                metrics.center_offset,
            );
        }
    }
}
