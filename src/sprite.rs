//! Palette-indexed sprites for host icon tables.
//!
//! Host icon tables hold small indexed-colour sprites rather than RGBA
//! images. Index 0 is always transparent; every distinct opaque colour gets
//! the next free palette slot.

use image::RgbaImage;
use std::collections::HashMap;
use thiserror::Error;

use crate::asset::EmojiAsset;

/// Maximum number of opaque colours a sprite palette can hold.
pub const MAX_PALETTE_COLORS: usize = 255;

/// Error converting an image into a host sprite.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SpriteError {
    /// The image uses more distinct colours than an indexed palette holds
    #[error("image has {0} colors, more than the maximum palette size of 255")]
    TooManyColors(usize),
    /// Host-specific conversion failure
    #[error("sprite conversion failed: {0}")]
    Host(String),
}

/// A palette-indexed sprite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedSprite {
    pub width: u32,
    pub height: u32,
    /// Packed `0xRRGGBB` colours; entry 0 is the transparent slot.
    pub palette: Vec<u32>,
    /// One palette index per pixel, row-major.
    pub pixels: Vec<u8>,
}

impl IndexedSprite {
    /// Convert an emoji icon into an indexed sprite.
    ///
    /// Fully transparent pixels map to index 0. Partial alpha is flattened:
    /// any non-zero alpha counts as opaque. A 13x13 icon has at most 169
    /// colours and always fits the palette.
    pub fn from_asset(asset: &EmojiAsset) -> Result<Self, SpriteError> {
        Self::from_rgba(asset.image())
    }

    /// Index an RGBA image of any size.
    fn from_rgba(image: &RgbaImage) -> Result<Self, SpriteError> {
        let (width, height) = image.dimensions();

        let mut palette = vec![0u32];
        let mut lookup: HashMap<u32, u8> = HashMap::new();
        let mut pixels = Vec::with_capacity((width * height) as usize);
        let mut overflow = 0usize;

        for pixel in image.pixels() {
            let [r, g, b, a] = pixel.0;
            if a == 0 {
                pixels.push(0);
                continue;
            }

            let rgb = (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b);
            let index = match lookup.get(&rgb) {
                Some(&index) => index,
                None if palette.len() <= MAX_PALETTE_COLORS => {
                    let index = palette.len() as u8;
                    palette.push(rgb);
                    lookup.insert(rgb, index);
                    index
                }
                None => {
                    overflow += 1;
                    lookup.insert(rgb, 0);
                    0
                }
            };
            pixels.push(index);
        }

        if overflow > 0 {
            return Err(SpriteError::TooManyColors(MAX_PALETTE_COLORS + overflow));
        }

        Ok(Self { width, height, palette, pixels })
    }
}
