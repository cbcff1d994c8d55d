// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The texture capability atlases are handed to once their pixels are final.

use std::sync::Arc;

use crate::error::BakeError;

/// Everything needed to create an atlas texture.
#[derive(Clone, Copy, Debug)]
pub struct TextureDescriptor<'a> {
    /// Debug label, `"{font name}_atlas[{index}]"`.
    pub label: &'a str,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 pixels, not premultiplied.
    pub pixels: &'a [u8],
}

/// Creates immutable textures from baked atlas pixels.
///
/// Implement this for a GPU device to upload atlases directly; [`CpuTextures`] keeps the
/// pixels in memory instead.
pub trait TextureFactory {
    /// The texture handle stored in each atlas.
    type Texture;

    /// Creates a texture. The pixel slice is only borrowed for the duration of the call.
    fn create_texture(&mut self, descriptor: TextureDescriptor<'_>) -> Result<Self::Texture, BakeError>;
}

/// A texture held in CPU memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CpuTexture {
    label: Arc<str>,
    width: u32,
    height: u32,
    pixels: Arc<[u8]>,
}

impl CpuTexture {
    /// Debug label given at creation.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major RGBA8 pixels.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The RGBA value at `(x, y)`, or `None` outside the texture.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.pixels.get(offset..offset + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// A [`TextureFactory`] producing [`CpuTexture`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct CpuTextures;

impl TextureFactory for CpuTextures {
    type Texture = CpuTexture;

    fn create_texture(&mut self, descriptor: TextureDescriptor<'_>) -> Result<CpuTexture, BakeError> {
        let expected = descriptor.width as usize * descriptor.height as usize * 4;
        if descriptor.pixels.len() != expected {
            log::warn!(
                "texture {} expects {expected} bytes, got {}",
                descriptor.label,
                descriptor.pixels.len()
            );
            return Err(BakeError::TextureCreation);
        }
        Ok(CpuTexture {
            label: descriptor.label.into(),
            width: descriptor.width,
            height: descriptor.height,
            pixels: descriptor.pixels.into(),
        })
    }
}
