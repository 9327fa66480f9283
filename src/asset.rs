//! Normalized emoji icon assets.

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};

/// Width of every emoji icon in pixels.
pub const ICON_WIDTH: u32 = 13;

/// Height of every emoji icon in pixels.
pub const ICON_HEIGHT: u32 = 13;

/// A named emoji icon, always exactly `ICON_WIDTH` x `ICON_HEIGHT`.
///
/// Assets are immutable once built. Images of any other size are stretched
/// (not cropped, aspect ratio not preserved) onto a fresh transparent canvas.
///
/// # Examples
///
/// ```
/// use customemoji::asset::{EmojiAsset, ICON_HEIGHT, ICON_WIDTH};
/// use image::RgbaImage;
///
/// let asset = EmojiAsset::new("wave", RgbaImage::new(32, 20));
/// assert_eq!(asset.image().dimensions(), (ICON_WIDTH, ICON_HEIGHT));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EmojiAsset {
    name: String,
    image: RgbaImage,
}

impl EmojiAsset {
    /// Build an asset, normalizing the image to icon size if needed.
    pub fn new(name: impl Into<String>, image: RgbaImage) -> Self {
        let image = if image.dimensions() == (ICON_WIDTH, ICON_HEIGHT) {
            image
        } else {
            normalize_icon(&image)
        };

        Self { name: name.into(), image }
    }

    /// Build an asset from a decoded image of any pixel format.
    pub fn from_dynamic(name: impl Into<String>, image: DynamicImage) -> Self {
        Self::new(name, image.to_rgba8())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

/// Stretch an image to icon size and place it on a transparent canvas.
///
/// Uses nearest-neighbor sampling so small pixel-art sources stay crisp.
fn normalize_icon(source: &RgbaImage) -> RgbaImage {
    let scaled = imageops::resize(source, ICON_WIDTH, ICON_HEIGHT, FilterType::Nearest);

    let mut canvas = RgbaImage::from_pixel(ICON_WIDTH, ICON_HEIGHT, Rgba([0, 0, 0, 0]));
    imageops::replace(&mut canvas, &scaled, 0, 0);
    canvas
}
