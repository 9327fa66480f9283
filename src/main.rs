//! Custom emoji - Command-line tool for checking emoji images and previewing tag rewrites

use std::process::ExitCode;

use customemoji::cli;

fn main() -> ExitCode {
    cli::run()
}
