// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported while attaching fonts and baking atlases.

use core::fmt;

/// An error returned by atlas baking and font attachment.
///
/// Baking is all-or-nothing: whenever one of these is returned from a bake, the
/// registry's atlas list is exactly what it was before the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BakeError {
    /// The font bytes could not be parsed as a font.
    ParsingFailure,
    /// The process-wide rasterizer state could not be brought up.
    InitFailed,
    /// A requested codepoint has no glyph in the font.
    NotFound {
        /// The codepoint that was missing.
        codepoint: u32,
    },
    /// The font maps the codepoint to a glyph, but the glyph could not be rasterized.
    InvalidCharacter {
        /// The codepoint whose glyph failed to rasterize.
        codepoint: u32,
    },
    /// No canvas up to the maximum bound could fit the requested glyph set.
    NotEnoughSpace {
        /// The largest canvas side length that was tried.
        max_canvas: u32,
    },
    /// A bake or kerning request was made while no font bytes were attached.
    MissingFontData,
    /// The texture capability refused to create the atlas texture.
    TextureCreation,
}

impl fmt::Display for BakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParsingFailure => f.write_str("font data could not be parsed"),
            Self::InitFailed => f.write_str("rasterizer library failed to initialize"),
            Self::NotFound { codepoint } => {
                write!(f, "codepoint U+{codepoint:04X} is not present in the font")
            }
            Self::InvalidCharacter { codepoint } => {
                write!(f, "glyph for codepoint U+{codepoint:04X} failed to rasterize")
            }
            Self::NotEnoughSpace { max_canvas } => write!(
                f,
                "glyphs do not fit in an atlas of up to {max_canvas}x{max_canvas} pixels"
            ),
            Self::MissingFontData => f.write_str("no font data is attached"),
            Self::TextureCreation => f.write_str("atlas texture could not be created"),
        }
    }
}

impl core::error::Error for BakeError {}
