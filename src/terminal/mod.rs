//! Controlling-terminal handling
//!
//! This module owns everything that touches the host terminal directly:
//! - Raw mode lifecycle (capture, apply, guaranteed restore)
//! - Window size discovery, with a cursor-report fallback
//! - Single-byte reads and single-call writes behind the [`TerminalIo`] seam

mod io;
mod scripted;
mod session;
mod size;

pub use io::{StdTerminal, TerminalIo};
pub use scripted::ScriptedIo;
pub use session::{raw_mode_settings, TerminalSession, READ_TIMEOUT_DECISECONDS};
pub use size::{parse_cursor_report, probe_window_size, WindowSize, CURSOR_REPORT_CAPACITY};

/// Error type for terminal operations
///
/// Every variant names the operation that failed; the `Display` text is the
/// diagnostic printed before the process exits.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("attribute-read failed (tcgetattr): {0}")]
    AttributeRead(#[source] nix::Error),

    #[error("attribute-write failed (tcsetattr): {0}")]
    AttributeWrite(#[source] nix::Error),

    #[error("read failed: {0}")]
    Read(#[source] nix::Error),

    #[error("write failed: {0}")]
    Write(#[source] nix::Error),

    #[error("short write: {written} of {expected} bytes")]
    ShortWrite { written: usize, expected: usize },

    #[error("window size unavailable (getWindowSize)")]
    SizeUnavailable,

    #[error("input closed")]
    InputClosed,
}

/// Result type for terminal operations
pub type TerminalResult<T> = Result<T, TerminalError>;
