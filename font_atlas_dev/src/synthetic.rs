// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A rasterizer for procedurally described fonts.
//!
//! A [`SyntheticFont`] is a short text file listing the codepoints it covers, its vertical
//! metrics and its kerning pairs. Every covered codepoint maps to the glyph with the same
//! index and renders as a solid box, so baked atlases are fully predictable:
//!
//! - Advance is 600 units, or 250 units for the space.
//! - Boxes are 480 units wide, 700 units tall for capitals and digits and 500 units tall
//!   for lowercase ASCII letters, and sit on the baseline 60 units right of the pen.
//! - The space and no-break space have no pixels.

use std::sync::Arc;

use font_atlas::{
    GlyphIndex, KerningEntry, RasterImage, RasterizedGlyph, Rasterizer, Vec2, VerticalMetrics,
};

const MAGIC: &str = "synthetic-font 1";

const ADVANCE: f32 = 600.0;
const SPACE_ADVANCE: f32 = 250.0;
const BOX_WIDTH: f32 = 480.0;
const BOX_LEFT: f32 = 60.0;
const CAP_HEIGHT: f32 = 700.0;
const X_HEIGHT: f32 = 500.0;

/// A font description that [`SyntheticRasterizer`] can parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntheticFont {
    ascent: i32,
    descent: i32,
    line_gap: i32,
    covered: Vec<(u32, u32)>,
    missing: Vec<u32>,
    broken: Vec<u32>,
    malformed: Vec<u32>,
    colored: Vec<u32>,
    kerning: Vec<(u32, u32, i32)>,
}

impl Default for SyntheticFont {
    fn default() -> Self {
        Self {
            ascent: 800,
            descent: -200,
            line_gap: 100,
            covered: Vec::new(),
            missing: Vec::new(),
            broken: Vec::new(),
            malformed: Vec::new(),
            colored: Vec::new(),
            kerning: Vec::new(),
        }
    }
}

impl SyntheticFont {
    /// A font covering nothing, with ascent 800, descent -200 and line gap 100.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the vertical metrics. `descent` is negative, as in real fonts.
    pub fn with_metrics(mut self, ascent: i32, descent: i32, line_gap: i32) -> Self {
        self.ascent = ascent;
        self.descent = descent;
        self.line_gap = line_gap;
        self
    }

    /// Covers `start..=end`.
    pub fn covering(mut self, start: u32, end: u32) -> Self {
        self.covered.push((start, end));
        self
    }

    /// Removes one codepoint from the coverage.
    pub fn without(mut self, codepoint: u32) -> Self {
        self.missing.push(codepoint);
        self
    }

    /// Maps `codepoint` to a glyph that fails to rasterize.
    pub fn broken(mut self, codepoint: u32) -> Self {
        self.broken.push(codepoint);
        self
    }

    /// Maps `codepoint` to a glyph whose bitmap is one byte shorter than its stated size.
    pub fn malformed(mut self, codepoint: u32) -> Self {
        self.malformed.push(codepoint);
        self
    }

    /// Makes `codepoint` a colour glyph, rendered red when colour glyphs are requested.
    pub fn colored(mut self, codepoint: u32) -> Self {
        self.colored.push(codepoint);
        self
    }

    /// Adds a kerning pair in design units.
    pub fn kerning(mut self, left: char, right: char, value: i32) -> Self {
        self.kerning.push((left.into(), right.into(), value));
        self
    }

    /// Serializes the description into font bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = format!(
            "{MAGIC}\nmetrics {} {} {}\n",
            self.ascent, self.descent, self.line_gap
        );
        for &(start, end) in &self.covered {
            out += &format!("cover {start:x} {end:x}\n");
        }
        for (keyword, list) in [
            ("missing", &self.missing),
            ("broken", &self.broken),
            ("malformed", &self.malformed),
            ("color", &self.colored),
        ] {
            for codepoint in list {
                out += &format!("{keyword} {codepoint:x}\n");
            }
        }
        for &(left, right, value) in &self.kerning {
            out += &format!("kern {left:x} {right:x} {value}\n");
        }
        out.into_bytes()
    }

    /// Reads font bytes written by [`to_bytes`](Self::to_bytes).
    pub fn parse(data: &[u8]) -> Option<Self> {
        let text = core::str::from_utf8(data).ok()?;
        let mut lines = text.lines();
        if lines.next()? != MAGIC {
            return None;
        }
        let hex = |word: Option<&str>| u32::from_str_radix(word?, 16).ok();
        let int = |word: Option<&str>| word?.parse::<i32>().ok();
        let mut font = Self::new();
        for line in lines {
            let mut words = line.split_whitespace();
            match words.next()? {
                "metrics" => {
                    font.ascent = int(words.next())?;
                    font.descent = int(words.next())?;
                    font.line_gap = int(words.next())?;
                }
                "cover" => font.covered.push((hex(words.next())?, hex(words.next())?)),
                "missing" => font.missing.push(hex(words.next())?),
                "broken" => font.broken.push(hex(words.next())?),
                "malformed" => font.malformed.push(hex(words.next())?),
                "color" => font.colored.push(hex(words.next())?),
                "kern" => font
                    .kerning
                    .push((hex(words.next())?, hex(words.next())?, int(words.next())?)),
                _ => return None,
            }
        }
        Some(font)
    }

    fn covers(&self, codepoint: u32) -> bool {
        codepoint != 0
            && !self.missing.contains(&codepoint)
            && self
                .covered
                .iter()
                .any(|&(start, end)| (start..=end).contains(&codepoint))
    }
}

/// A [`Rasterizer`] for [`SyntheticFont`]s.
#[derive(Clone, Debug)]
pub struct SyntheticRasterizer {
    font: SyntheticFont,
}

impl SyntheticRasterizer {
    /// The parsed description.
    pub fn font(&self) -> &SyntheticFont {
        &self.font
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "glyph boxes are far below u32::MAX pixels"
)]
fn pixels(units: f32, scale: f32) -> u32 {
    (units * scale).ceil() as u32
}

impl Rasterizer for SyntheticRasterizer {
    type Context = ();

    const NAME: &'static str = "synthetic";

    fn create_context() -> Option<()> {
        Some(())
    }

    fn parse(data: Arc<[u8]>, face_index: u32) -> Option<Self> {
        if face_index != 0 {
            return None;
        }
        SyntheticFont::parse(&data).map(|font| Self { font })
    }

    fn glyph_index(&self, codepoint: u32) -> Option<GlyphIndex> {
        self.font.covers(codepoint).then_some(GlyphIndex(codepoint))
    }

    fn vertical_metrics(&self) -> VerticalMetrics {
        VerticalMetrics {
            ascent: self.font.ascent as f32,
            descent: self.font.descent.unsigned_abs() as f32,
            line_gap: self.font.line_gap as f32,
        }
    }

    fn rasterize_glyph(
        &self,
        _: &mut (),
        glyph: GlyphIndex,
        scale: f32,
        colored: bool,
    ) -> Option<RasterizedGlyph> {
        let codepoint = glyph.0;
        if self.font.broken.contains(&codepoint) || !self.font.covers(codepoint) {
            return None;
        }
        if matches!(codepoint, 0x20 | 0xA0) {
            return Some(RasterizedGlyph {
                image: RasterImage::Empty,
                advance: SPACE_ADVANCE * scale,
                offset: Vec2::default(),
            });
        }
        let height_units = if (0x61..=0x7A).contains(&codepoint) {
            X_HEIGHT
        } else {
            CAP_HEIGHT
        };
        let width = pixels(BOX_WIDTH, scale);
        let height = pixels(height_units, scale);
        let count = width as usize * height as usize;
        let image = if self.font.malformed.contains(&codepoint) {
            RasterImage::Coverage {
                width,
                height,
                data: vec![255; count.saturating_sub(1)],
            }
        } else if colored && self.font.colored.contains(&codepoint) {
            RasterImage::Color {
                width,
                height,
                data: [255, 0, 0, 255].repeat(count),
            }
        } else {
            RasterImage::coverage(width, height, vec![255; count])
        };
        Some(RasterizedGlyph {
            image,
            advance: ADVANCE * scale,
            offset: Vec2::new((BOX_LEFT * scale).round(), -(height as f32)),
        })
    }

    fn kerning_table(&self) -> Vec<KerningEntry> {
        self.font
            .kerning
            .iter()
            .map(|&(left, right, value)| KerningEntry {
                left: GlyphIndex(left),
                right: GlyphIndex(right),
                value,
            })
            .collect()
    }
}
