//! Doll Editor
//!
//! Runs interactively until Ctrl-Q. Exits 0 on quit and 1 on any fatal
//! terminal error, after restoring the terminal.

use std::process::ExitCode;

use doll::app::{self, Config};

fn main() -> ExitCode {
    if let Err(e) = app::logging::init() {
        eprintln!("doll: cannot open log file: {}", e);
    }

    tracing::info!("Starting Doll {}", doll::DOLL_VERSION);

    let config = Config::load_or_default();

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Exiting: {}", e);
            eprintln!("doll: {}", e);
            ExitCode::FAILURE
        }
    }
}
