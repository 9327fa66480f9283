//! Emoji asset discovery and loading.
//!
//! Scans a single directory (no recursion) for image files, decodes them,
//! and appends the results to an [`EmojiCatalog`]. Bad files never abort a
//! scan: every problem is reported as a [`LoadWarning`] and logged, and the
//! remaining files are still loaded.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use image::io::Reader as ImageReader;
use image::DynamicImage;

use crate::asset::EmojiAsset;
use crate::catalog::EmojiCatalog;

/// Which file extensions are accepted as emoji images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Accept `png`, `jpg` and `jpeg` files
    #[default]
    Lenient,
    /// Accept `png` files only
    Strict,
}

impl LoadMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            LoadMode::Strict
        } else {
            LoadMode::Lenient
        }
    }

    /// Extensions accepted in this mode. Matching is case-sensitive.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            LoadMode::Lenient => &["png", "jpg", "jpeg"],
            LoadMode::Strict => &["png"],
        }
    }
}

/// A non-fatal problem found while loading emoji.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum LoadWarning {
    /// An emoji with the same name was already loaded; this file was ignored
    DuplicateName { name: String, file: PathBuf },
    /// The file could not be decoded as an image
    DecodeFailed { name: String, file: PathBuf, message: String },
}

impl LoadWarning {
    /// Name of the emoji the warning is about.
    pub fn name(&self) -> &str {
        match self {
            LoadWarning::DuplicateName { name, .. } => name,
            LoadWarning::DecodeFailed { name, .. } => name,
        }
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::DuplicateName { name, file } => {
                write!(f, "Failed to load duplicate emoji '{}' from {}", name, file.display())
            }
            LoadWarning::DecodeFailed { name, file, message } => write!(
                f,
                "Failed to load the image for emoji '{}' from {}: {}",
                name,
                file.display(),
                message
            ),
        }
    }
}

/// Outcome of a directory scan. Always produced, even for a missing directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Names added to the catalog by this scan, in discovery order
    pub loaded: Vec<String>,
    pub warnings: Vec<LoadWarning>,
}

impl LoadReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Derive an emoji name from a file name if its extension is accepted.
///
/// The extension is everything after the last `.`. Files without a dot, or
/// whose name would be empty once the extension is removed, are rejected.
///
/// # Examples
///
/// ```
/// use customemoji::loader::{emoji_name, LoadMode};
///
/// assert_eq!(emoji_name("smile.png", LoadMode::Lenient), Some("smile"));
/// assert_eq!(emoji_name("party.time.jpeg", LoadMode::Lenient), Some("party.time"));
/// assert_eq!(emoji_name("smile.jpg", LoadMode::Strict), None);
/// assert_eq!(emoji_name("smile.PNG", LoadMode::Lenient), None);
/// ```
pub fn emoji_name(file_name: &str, mode: LoadMode) -> Option<&str> {
    let (name, extension) = file_name.rsplit_once('.')?;
    if name.is_empty() || !mode.extensions().contains(&extension) {
        return None;
    }
    Some(name)
}

/// List candidate emoji files in a directory, in filesystem enumeration order.
///
/// Returns `(path, emoji name)` pairs. A missing or unreadable directory
/// yields an empty list.
pub fn candidate_files(dir: &Path, mode: LoadMode) -> Vec<(PathBuf, String)> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "emoji directory not readable");
            return Vec::new();
        }
    };

    let mut files = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };
        if let Some(name) = emoji_name(file_name, mode) {
            files.push((path, name.to_string()));
        }
    }
    files
}

/// Scan a directory and add every new, decodable emoji to the catalog.
///
/// Names already present in the catalog are skipped with a
/// [`LoadWarning::DuplicateName`], so repeated scans never replace an asset.
pub fn scan(dir: &Path, catalog: &mut EmojiCatalog, mode: LoadMode) -> LoadReport {
    let files = candidate_files(dir, mode);
    tracing::debug!(dir = %dir.display(), count = files.len(), "emoji files found");

    let mut report = LoadReport::default();

    for (path, name) in files {
        if catalog.contains(&name) {
            tracing::info!(emoji = %name, file = %path.display(), "Failed to load duplicate emoji");
            report.warnings.push(LoadWarning::DuplicateName { name, file: path });
            continue;
        }

        let image = match decode(&path) {
            Ok(image) => image,
            Err(e) => {
                tracing::warn!(
                    emoji = %name,
                    file = %path.display(),
                    error = %e,
                    "Failed to load the image for emoji"
                );
                report.warnings.push(LoadWarning::DecodeFailed {
                    name,
                    file: path,
                    message: e.to_string(),
                });
                continue;
            }
        };

        catalog.insert(EmojiAsset::from_dynamic(name.clone(), image));
        tracing::debug!(emoji = %name, "Added emoji");
        report.loaded.push(name);
    }

    report
}

/// Decode an image file, detecting the format from its content.
fn decode(path: &Path) -> Result<DynamicImage, image::ImageError> {
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    fn write_png(dir: &Path, file_name: &str, width: u32, height: u32) {
        let image = RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]));
        image
            .save_with_format(dir.join(file_name), image::ImageFormat::Png)
            .expect("should write png");
    }

    #[test]
    fn test_emoji_name_extensions() {
        assert_eq!(emoji_name("a.png", LoadMode::Lenient), Some("a"));
        assert_eq!(emoji_name("a.jpg", LoadMode::Lenient), Some("a"));
        assert_eq!(emoji_name("a.jpeg", LoadMode::Lenient), Some("a"));
        assert_eq!(emoji_name("a.gif", LoadMode::Lenient), None);
        assert_eq!(emoji_name("a.png", LoadMode::Strict), Some("a"));
        assert_eq!(emoji_name("a.jpeg", LoadMode::Strict), None);
    }

    #[test]
    fn test_emoji_name_rejects_odd_names() {
        assert_eq!(emoji_name("png", LoadMode::Lenient), None);
        assert_eq!(emoji_name(".png", LoadMode::Lenient), None);
        assert_eq!(emoji_name("a.png.txt", LoadMode::Lenient), None);
        assert_eq!(emoji_name("a.txt.png", LoadMode::Lenient), Some("a.txt"));
    }

    #[test]
    fn test_scan_missing_directory() {
        let temp = TempDir::new().expect("should create temp dir");
        let mut catalog = EmojiCatalog::new();

        let report = scan(&temp.path().join("nope"), &mut catalog, LoadMode::Lenient);

        assert!(catalog.is_empty());
        assert!(report.loaded.is_empty());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_scan_empty_directory() {
        let temp = TempDir::new().expect("should create temp dir");
        let mut catalog = EmojiCatalog::new();

        let report = scan(temp.path(), &mut catalog, LoadMode::Lenient);

        assert!(catalog.is_empty());
        assert_eq!(report, LoadReport::default());
    }

    #[test]
    fn test_scan_loads_and_normalizes() {
        let temp = TempDir::new().expect("should create temp dir");
        write_png(temp.path(), "big.png", 40, 30);
        write_png(temp.path(), "exact.png", 13, 13);

        let mut catalog = EmojiCatalog::new();
        let report = scan(temp.path(), &mut catalog, LoadMode::Lenient);

        assert_eq!(report.loaded.len(), 2);
        assert_eq!(catalog.len(), 2);
        for asset in catalog.iter() {
            assert_eq!(asset.image().dimensions(), (13, 13));
        }
    }

    #[test]
    fn test_scan_ignores_other_files_and_subdirectories() {
        let temp = TempDir::new().expect("should create temp dir");
        write_png(temp.path(), "ok.png", 13, 13);
        fs::write(temp.path().join("notes.txt"), "hello").expect("should write txt");
        fs::create_dir(temp.path().join("nested.png")).expect("should create dir");
        write_png(&temp.path().join("nested.png"), "inner.png", 13, 13);

        let mut catalog = EmojiCatalog::new();
        let report = scan(temp.path(), &mut catalog, LoadMode::Lenient);

        assert_eq!(report.loaded, vec!["ok".to_string()]);
        assert!(!catalog.contains("inner"));
        assert!(!catalog.contains("nested"));
    }

    #[test]
    fn test_scan_duplicate_name_rejected() {
        let temp = TempDir::new().expect("should create temp dir");
        write_png(temp.path(), "smile.png", 13, 13);
        let jpg = image::RgbImage::from_pixel(13, 13, image::Rgb([1, 2, 3]));
        jpg.save_with_format(temp.path().join("smile.jpg"), image::ImageFormat::Jpeg)
            .expect("should write jpg");

        let mut catalog = EmojiCatalog::new();
        let report = scan(temp.path(), &mut catalog, LoadMode::Lenient);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["smile"]);
        assert_eq!(report.warnings.len(), 1);
        assert!(matches!(&report.warnings[0], LoadWarning::DuplicateName { name, .. } if name == "smile"));
    }

    #[test]
    fn test_scan_decode_failure_is_skipped() {
        let temp = TempDir::new().expect("should create temp dir");
        write_png(temp.path(), "good.png", 13, 13);
        fs::write(temp.path().join("broken.png"), b"definitely not a png").expect("should write");

        let mut catalog = EmojiCatalog::new();
        let report = scan(temp.path(), &mut catalog, LoadMode::Lenient);

        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["good"]);
        assert_eq!(report.warnings.len(), 1);
        match &report.warnings[0] {
            LoadWarning::DecodeFailed { name, file, .. } => {
                assert_eq!(name, "broken");
                assert!(file.ends_with("broken.png"));
            }
            other => panic!("unexpected warning: {:?}", other),
        }
        assert!(report.warnings[0].to_string().contains("broken"));
    }

    #[test]
    fn test_rescan_is_idempotent_for_known_names() {
        let temp = TempDir::new().expect("should create temp dir");
        write_png(temp.path(), "a.png", 13, 13);

        let mut catalog = EmojiCatalog::new();
        scan(temp.path(), &mut catalog, LoadMode::Lenient);
        write_png(temp.path(), "b.png", 13, 13);
        let second = scan(temp.path(), &mut catalog, LoadMode::Lenient);

        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(second.loaded, vec!["b".to_string()]);
        assert_eq!(second.warnings.len(), 1);
        assert_eq!(second.warnings[0].name(), "a");
    }

    #[test]
    fn test_strict_mode_skips_jpeg() {
        let temp = TempDir::new().expect("should create temp dir");
        write_png(temp.path(), "a.png", 13, 13);
        let jpg = image::RgbImage::from_pixel(13, 13, image::Rgb([1, 2, 3]));
        jpg.save_with_format(temp.path().join("b.jpg"), image::ImageFormat::Jpeg)
            .expect("should write jpg");

        let mut catalog = EmojiCatalog::new();
        scan(temp.path(), &mut catalog, LoadMode::Strict);

        assert!(catalog.contains("a"));
        assert!(!catalog.contains("b"));
    }

    #[test]
    fn test_format_sniffed_from_content() {
        // A PNG saved under a .jpg name still decodes
        let temp = TempDir::new().expect("should create temp dir");
        let image = RgbaImage::from_pixel(13, 13, Rgba([5, 5, 5, 255]));
        image
            .save_with_format(temp.path().join("mislabeled.jpg"), image::ImageFormat::Png)
            .expect("should write");

        let mut catalog = EmojiCatalog::new();
        let report = scan(temp.path(), &mut catalog, LoadMode::Lenient);

        assert!(catalog.contains("mislabeled"));
        assert!(!report.has_warnings());
    }
}
