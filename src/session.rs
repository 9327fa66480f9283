//! Host-facing session: wires loading, registration and rewriting to host events.
//!
//! A host implements [`IconHost`] and forwards its login, chat, overhead text
//! and command events to an [`EmojiSession`]. Everything the session does is
//! synchronous and runs on the caller's thread; the host is expected to call
//! it from its single update loop.

use std::path::PathBuf;

use crate::asset::EmojiAsset;
use crate::catalog::EmojiCatalog;
use crate::config::EmojiConfig;
use crate::loader::{self, LoadMode, LoadReport, LoadWarning};
use crate::registrar::{self, IconTable, RegistrationState, SpriteWarning};
use crate::rewrite::rewrite;
use crate::sprite::{IndexedSprite, SpriteError};

/// The host side of the icon table.
pub trait IconHost {
    /// Host sprite representation.
    type Sprite: Clone;

    /// Current icon table, or `None` while the host has not created one.
    fn icon_table(&self) -> Option<IconTable<Self::Sprite>>;

    /// Replace the icon table in one step.
    fn set_icon_table(&mut self, table: IconTable<Self::Sprite>);

    /// Convert an emoji icon into a host sprite.
    fn to_sprite(&self, asset: &EmojiAsset) -> Result<Self::Sprite, SpriteError>;

    /// Show a message on the user's console.
    fn notify(&mut self, _message: &str) {}
}

/// Kind of chat line delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatKind {
    Public,
    Moderator,
    FriendsChat,
    PrivateIn,
    PrivateOut,
    ModeratorPrivate,
    /// Game, console and other non-player messages
    System,
}

impl ChatKind {
    /// Only lines typed by players are rewritten.
    pub fn is_player_message(self) -> bool {
        match self {
            ChatKind::Public
            | ChatKind::Moderator
            | ChatKind::FriendsChat
            | ChatKind::PrivateIn
            | ChatKind::PrivateOut
            | ChatKind::ModeratorPrivate => true,
            ChatKind::System => false,
        }
    }
}

/// Kind of actor an overhead text belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorKind {
    Player,
    Npc,
}

/// What happened during a session start.
#[derive(Debug, Clone, Default)]
pub struct StartReport {
    pub load: LoadReport,
    pub sprite_warnings: Vec<SpriteWarning>,
}

/// Per-session emoji state bound to one host.
pub struct EmojiSession<H: IconHost> {
    host: H,
    catalog: EmojiCatalog,
    state: RegistrationState,
    dir: PathBuf,
    mode: LoadMode,
    command: String,
    logged_in: bool,
}

impl<H: IconHost> EmojiSession<H> {
    pub fn new(host: H, config: &EmojiConfig) -> Self {
        Self {
            host,
            catalog: EmojiCatalog::new(),
            state: RegistrationState::Unregistered,
            dir: config.assets.dir.clone(),
            mode: LoadMode::from_strict(config.assets.strict),
            command: config.chat.command.clone(),
            logged_in: false,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn catalog(&self) -> &EmojiCatalog {
        &self.catalog
    }

    pub fn state(&self) -> RegistrationState {
        self.state
    }

    pub fn set_logged_in(&mut self, logged_in: bool) {
        self.logged_in = logged_in;
    }

    /// Handle a login: load the emoji directory and register the icons once.
    ///
    /// Returns `None` when nothing was done, either because the icons are
    /// already registered or because the host has no icon table yet.
    pub fn on_session_start(&mut self) -> Option<StartReport> {
        self.logged_in = true;

        if self.state.is_registered() {
            return None;
        }
        let table = self.host.icon_table()?;

        let load = loader::scan(&self.dir, &mut self.catalog, self.mode);
        for warning in &load.warnings {
            if let LoadWarning::DecodeFailed { name, .. } = warning {
                self.host.notify(&format!(
                    "Unable to use image for emoji {}. Please use a different image file for this emoji.",
                    name
                ));
            }
        }

        let host = &self.host;
        let registration =
            registrar::register(&self.catalog, Some(&table), self.state, |asset| host.to_sprite(asset));

        if let (true, Some(table)) = (registration.published, registration.table) {
            self.host.set_icon_table(table);
        }
        self.state = registration.state;

        self.host.notify(&format!("Loaded {} custom emoji.", self.catalog.len()));

        Some(StartReport { load, sprite_warnings: registration.warnings })
    }

    /// Rewrite a chat line. `None` means leave the line as it is.
    pub fn on_chat_text(&self, kind: ChatKind, text: &str) -> Option<String> {
        if !self.logged_in || !kind.is_player_message() {
            return None;
        }
        rewrite(text, &self.catalog, self.state)
    }

    /// Rewrite text shown above an actor's head. Only players are affected.
    pub fn on_overhead_text(&self, actor: ActorKind, text: &str) -> Option<String> {
        match actor {
            ActorKind::Player => rewrite(text, &self.catalog, self.state),
            ActorKind::Npc => None,
        }
    }

    /// Answer the emoji listing command, if `text` is that command.
    pub fn on_command(&mut self, text: &str) -> Option<String> {
        if text.trim() != self.command {
            return None;
        }

        let response = emoji_listing(&self.catalog);
        self.host.notify(&response);
        Some(response)
    }
}

/// Console text listing every emoji name in discovery order.
pub fn emoji_listing(catalog: &EmojiCatalog) -> String {
    if catalog.is_empty() {
        return "No emoji found.".to_string();
    }

    let mut listing = String::from("Emoji: ");
    for name in catalog.names() {
        listing.push_str(name);
        listing.push(' ');
    }
    listing
}

/// In-process host holding indexed sprites.
///
/// Used by the command-line tool, which has no real host: the table starts
/// with `reserved` empty host slots so icon ids line up with a given base.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    table: Option<IconTable<IndexedSprite>>,
    pub messages: Vec<String>,
}

impl MemoryHost {
    pub fn with_reserved(reserved: usize) -> Self {
        let table: Vec<Option<IndexedSprite>> = vec![None; reserved];
        Self { table: Some(table.into()), messages: Vec::new() }
    }

    /// A host that has not created its icon table yet.
    pub fn uninitialized() -> Self {
        Self::default()
    }
}

impl IconHost for MemoryHost {
    type Sprite = IndexedSprite;

    fn icon_table(&self) -> Option<IconTable<IndexedSprite>> {
        self.table.clone()
    }

    fn set_icon_table(&mut self, table: IconTable<IndexedSprite>) {
        self.table = Some(table);
    }

    fn to_sprite(&self, asset: &EmojiAsset) -> Result<IndexedSprite, SpriteError> {
        IndexedSprite::from_asset(asset)
    }

    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
