//! One-shot registration of catalog icons into a host icon table.
//!
//! The host table is append-only in practice: existing entries keep their
//! indices, and this crate's icons occupy a contiguous block starting at the
//! table's previous length (the base offset). The extended table is built off
//! to the side and handed back whole so the host can swap it in atomically.

use std::fmt;
use std::sync::Arc;

use crate::asset::EmojiAsset;
use crate::catalog::EmojiCatalog;
use crate::sprite::SpriteError;

/// Host-owned icon table. Empty slots are icons that failed to convert.
pub type IconTable<S> = Arc<[Option<S>]>;

/// Whether this session's icons have been added to the host table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationState {
    #[default]
    Unregistered,
    /// Icons occupy `base..base + catalog.len()` in the host table
    Registered { base: usize },
}

impl RegistrationState {
    /// Base offset of the registered block, if registered.
    pub fn base(self) -> Option<usize> {
        match self {
            RegistrationState::Unregistered => None,
            RegistrationState::Registered { base } => Some(base),
        }
    }

    pub fn is_registered(self) -> bool {
        matches!(self, RegistrationState::Registered { .. })
    }
}

/// A catalog icon that could not be converted into a host sprite.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteWarning {
    pub name: String,
    /// Icon id of the slot left empty
    pub slot: usize,
    pub error: SpriteError,
}

impl fmt::Display for SpriteWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to load the sprite for emoji '{}' (icon {}): {}",
            self.name, self.slot, self.error
        )
    }
}

/// Result of a registration attempt.
#[derive(Debug, Clone)]
pub struct Registration<S> {
    /// The table to use from now on; the input table when nothing changed
    pub table: Option<IconTable<S>>,
    pub state: RegistrationState,
    /// True when `table` is a new table that must be published to the host
    pub published: bool,
    pub warnings: Vec<SpriteWarning>,
}

/// Extend the host icon table with every icon in the catalog.
///
/// This is a no-op (inputs returned unchanged, `published == false`) when
/// the state is already `Registered` or the host has no table yet. Otherwise
/// the host entries are copied verbatim, each icon is converted with
/// `to_sprite` and placed at `base + position`, and the state becomes
/// `Registered { base }` where `base` is the old table length. Conversion
/// failures leave their slot empty and do not stop the remaining icons.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use customemoji::catalog::EmojiCatalog;
/// use customemoji::registrar::{register, IconTable, RegistrationState};
///
/// let host: IconTable<u32> = Arc::from(vec![Some(7), Some(8)]);
/// let catalog = EmojiCatalog::new();
///
/// let first = register(&catalog, Some(&host), RegistrationState::Unregistered, |_| Ok(0));
/// assert_eq!(first.state, RegistrationState::Registered { base: 2 });
///
/// let second = register(&catalog, first.table.as_ref(), first.state, |_| Ok(0));
/// assert!(!second.published);
/// assert_eq!(second.state, first.state);
/// ```
pub fn register<S, F>(
    catalog: &EmojiCatalog,
    table: Option<&IconTable<S>>,
    state: RegistrationState,
    mut to_sprite: F,
) -> Registration<S>
where
    S: Clone,
    F: FnMut(&EmojiAsset) -> Result<S, SpriteError>,
{
    let host = match (state, table) {
        (RegistrationState::Unregistered, Some(host)) => host,
        (RegistrationState::Registered { .. }, _) | (_, None) => {
            return Registration {
                table: table.cloned(),
                state,
                published: false,
                warnings: Vec::new(),
            };
        }
    };

    let base = host.len();
    let mut extended: Vec<Option<S>> = Vec::with_capacity(base + catalog.len());
    extended.extend(host.iter().cloned());

    let mut warnings = Vec::new();
    for (position, asset) in catalog.iter().enumerate() {
        let slot = base + position;
        match to_sprite(asset) {
            Ok(sprite) => {
                tracing::debug!(emoji = %asset.name(), slot, "Added emoji icon");
                extended.push(Some(sprite));
            }
            Err(error) => {
                tracing::warn!(
                    emoji = %asset.name(),
                    slot,
                    error = %error,
                    "Failed to load the sprite for emoji"
                );
                warnings.push(SpriteWarning { name: asset.name().to_string(), slot, error });
                extended.push(None);
            }
        }
    }

    tracing::debug!(base, icons = catalog.len(), "Adding custom emoji icons");

    Registration {
        table: Some(Arc::from(extended)),
        state: RegistrationState::Registered { base },
        published: true,
        warnings,
    }
}
