//! Application glue module
//!
//! Configuration, logging, and the wiring that runs the editor on the real
//! terminal.

mod config;
pub mod logging;

pub use config::{Config, ConfigError};

use std::os::fd::AsFd;

use crate::editor::{clear_screen, Editor};
use crate::terminal::{
    probe_window_size, StdTerminal, TerminalIo, TerminalResult, TerminalSession,
};

/// Run the editor on the process's terminal until it quits
pub fn run(config: &Config) -> TerminalResult<()> {
    run_with(std::io::stdin(), &mut StdTerminal::new(), config)
}

/// Run the editor with `fd` in raw mode, talking to the terminal through `io`
///
/// The terminal is in raw mode only for the duration of this call. On any
/// error the screen is cleared and the terminal restored before the error
/// is returned, so the caller's diagnostic is readable.
pub fn run_with<F: AsFd, T: TerminalIo>(fd: F, io: &mut T, config: &Config) -> TerminalResult<()> {
    let session = TerminalSession::start(fd)?;
    tracing::info!("Terminal session started");

    let result = probe_window_size(io).and_then(|size| Editor::new(size, config).run(io));

    if let Err(e) = &result {
        tracing::error!("Fatal: {}", e);
        // Best effort, the original error is what gets reported
        let _ = clear_screen(io);
    }

    session.stop()?;
    tracing::info!("Terminal session ended");
    result
}
