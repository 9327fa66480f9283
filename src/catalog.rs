//! Catalog of loaded emoji, keyed by name and ordered by discovery.

use std::collections::HashMap;

use crate::asset::EmojiAsset;

/// Name to asset mapping plus the order in which assets were accepted.
///
/// The discovery order is the only input to icon id derivation: the asset
/// at position `i` is registered at `base + i` in the host icon table.
/// Names are unique; the first asset inserted under a name wins.
///
/// # Examples
///
/// ```
/// use customemoji::asset::EmojiAsset;
/// use customemoji::catalog::EmojiCatalog;
/// use image::RgbaImage;
///
/// let mut catalog = EmojiCatalog::new();
/// assert!(catalog.insert(EmojiAsset::new("smile", RgbaImage::new(13, 13))));
/// assert!(catalog.insert(EmojiAsset::new("heart", RgbaImage::new(13, 13))));
/// assert!(!catalog.insert(EmojiAsset::new("smile", RgbaImage::new(8, 8))));
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.position("heart"), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmojiCatalog {
    assets: Vec<EmojiAsset>,
    positions: HashMap<String, usize>,
}

impl EmojiCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self { assets: Vec::new(), positions: HashMap::new() }
    }

    /// Append an asset to the discovery order.
    ///
    /// Returns `false` and leaves the catalog untouched if the name is
    /// already taken.
    pub fn insert(&mut self, asset: EmojiAsset) -> bool {
        if self.positions.contains_key(asset.name()) {
            return false;
        }

        self.positions.insert(asset.name().to_string(), self.assets.len());
        self.assets.push(asset);
        true
    }

    /// Check if an emoji with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Position of a name in discovery order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Icon id of a name given the base offset of the registered block.
    pub fn icon_id(&self, name: &str, base: usize) -> Option<usize> {
        self.position(name).map(|position| base + position)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Names in discovery order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.assets.iter().map(EmojiAsset::name)
    }

    /// Assets in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &EmojiAsset> {
        self.assets.iter()
    }
}
