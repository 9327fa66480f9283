//! Inline `:name:` tag substitution.
//!
//! Tags are the shortest run of characters between two colons, so `:a::b:`
//! holds two tags. A known tag becomes `<img=ID>` where `ID` is the icon's
//! slot in the host table; unknown tags are left as typed.
//!
//! Each recognised tag is replaced everywhere it appears in the text, not only
//! at the position where it was found. Later matches of the same tag are then
//! no-ops. There is no escape syntax.

use std::sync::OnceLock;

use regex::Regex;

use crate::catalog::EmojiCatalog;
use crate::registrar::RegistrationState;

/// Lazy match between two colons that never crosses a line terminator
/// (`\n`, `\r`, NEL, LS or PS).
const TAG_PATTERN: &str = r":[^\n\r\x{85}\x{2028}\x{2029}]+?:";

fn tag_regex() -> &'static Regex {
    static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    TAG_REGEX.get_or_init(|| Regex::new(TAG_PATTERN).expect("tag pattern is valid"))
}

/// Markup the host renders as icon `id`.
pub fn icon_markup(id: usize) -> String {
    format!("<img={}>", id)
}

/// Replace known emoji tags in `text`.
///
/// Returns `None` when nothing was substituted, including when the icons
/// are not registered yet, so callers can skip redisplaying the text.
///
/// # Examples
///
/// ```
/// use customemoji::asset::EmojiAsset;
/// use customemoji::catalog::EmojiCatalog;
/// use customemoji::registrar::RegistrationState;
/// use customemoji::rewrite::rewrite;
/// use image::RgbaImage;
///
/// let mut catalog = EmojiCatalog::new();
/// catalog.insert(EmojiAsset::new("smile", RgbaImage::new(13, 13)));
/// let state = RegistrationState::Registered { base: 300 };
///
/// assert_eq!(rewrite("hi :smile:", &catalog, state), Some("hi <img=300>".to_string()));
/// assert_eq!(rewrite("hi :frown:", &catalog, state), None);
/// ```
pub fn rewrite(text: &str, catalog: &EmojiCatalog, state: RegistrationState) -> Option<String> {
    let base = match state {
        RegistrationState::Unregistered => return None,
        RegistrationState::Registered { base } => base,
    };

    let mut output = text.to_string();
    let mut edited = false;

    for tag in tag_regex().find_iter(text) {
        let tag = tag.as_str();
        let name = &tag[1..tag.len() - 1];

        let Some(id) = catalog.icon_id(name, base) else {
            continue;
        };

        output = output.replace(tag, &icon_markup(id));
        edited = true;
    }

    if edited {
        Some(output)
    } else {
        None
    }
}
