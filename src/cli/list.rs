//! List command implementation

use serde::Serialize;
use std::process::ExitCode;

use crate::config::EmojiConfig;
use crate::session::{EmojiSession, IconHost, MemoryHost};

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// One catalog entry in `--json` output
#[derive(Debug, Serialize)]
struct ListedEmoji<'a> {
    name: &'a str,
    id: usize,
    /// False when the icon could not be turned into a sprite
    registered: bool,
}

/// Execute the list command
pub fn run_list(config: &EmojiConfig, base: usize, json: bool) -> ExitCode {
    let mut session = EmojiSession::new(MemoryHost::with_reserved(base), config);
    let Some(report) = session.on_session_start() else {
        eprintln!("Error: icon table unavailable");
        return ExitCode::from(EXIT_ERROR);
    };

    for warning in &report.load.warnings {
        eprintln!("Warning: {}", warning);
    }
    for warning in &report.sprite_warnings {
        eprintln!("Warning: {}", warning);
    }

    let Some(base) = session.state().base() else {
        eprintln!("Error: emoji were not registered");
        return ExitCode::from(EXIT_ERROR);
    };
    let table = session.host().icon_table();

    let catalog = session.catalog();
    let entries: Vec<ListedEmoji> = catalog
        .names()
        .enumerate()
        .map(|(position, name)| ListedEmoji {
            name,
            id: base + position,
            registered: table
                .as_ref()
                .and_then(|table| table.get(base + position))
                .is_some_and(Option::is_some),
        })
        .collect();

    if json {
        match serde_json::to_string_pretty(&entries) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else if entries.is_empty() {
        println!("No emoji found.");
    } else {
        for entry in &entries {
            let marker = if entry.registered { "" } else { " (no sprite)" };
            println!("{:>5}  :{}:{}", entry.id, entry.name, marker);
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}
