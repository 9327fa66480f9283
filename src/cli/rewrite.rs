//! Rewrite command implementation

use std::process::ExitCode;

use crate::config::EmojiConfig;
use crate::session::{ActorKind, EmojiSession, MemoryHost};

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the rewrite command
///
/// Prints the rewritten text, or the input unchanged when no tag matched.
pub fn run_rewrite(config: &EmojiConfig, base: usize, text: &str) -> ExitCode {
    let mut session = EmojiSession::new(MemoryHost::with_reserved(base), config);
    if session.on_session_start().is_none() {
        eprintln!("Error: icon table unavailable");
        return ExitCode::from(EXIT_ERROR);
    }

    match session.on_overhead_text(ActorKind::Player, text) {
        Some(rewritten) => println!("{}", rewritten),
        None => {
            tracing::info!("no emoji tags replaced");
            println!("{}", text);
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}
