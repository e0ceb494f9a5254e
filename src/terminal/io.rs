//! Byte-level terminal I/O
//!
//! The editor never talks to file descriptors directly. It goes through
//! [`TerminalIo`], which the real terminal and the scripted test double both
//! implement.

use nix::errno::Errno;
use nix::libc::{self, STDIN_FILENO, STDOUT_FILENO};
use nix::unistd::{read, write};

use super::{TerminalError, TerminalResult, WindowSize};

/// Byte-oriented access to a terminal
pub trait TerminalIo {
    /// Read at most one byte.
    ///
    /// Returns `Ok(None)` when the bounded read timed out with nothing
    /// available. That is not an error; callers decide whether to retry.
    fn read_byte(&mut self) -> TerminalResult<Option<u8>>;

    /// Write `bytes` with exactly one write call.
    ///
    /// A write that transfers fewer bytes than requested is reported as
    /// [`TerminalError::ShortWrite`] and is not retried.
    fn write_once(&mut self, bytes: &[u8]) -> TerminalResult<()>;

    /// Ask the operating system for the window size.
    ///
    /// `None` means the query is not available; see
    /// [`probe_window_size`](super::probe_window_size) for the fallback.
    fn query_size(&self) -> Option<WindowSize>;
}

/// The process's own terminal: stdin for input, stdout for output
#[derive(Debug, Default, Clone, Copy)]
pub struct StdTerminal;

impl StdTerminal {
    pub fn new() -> Self {
        Self
    }
}

impl TerminalIo for StdTerminal {
    fn read_byte(&mut self) -> TerminalResult<Option<u8>> {
        let mut buf = [0u8; 1];
        match read(STDIN_FILENO, &mut buf) {
            Ok(1) => Ok(Some(buf[0])),
            // VTIME expired with nothing to read
            Ok(_) => Ok(None),
            Err(Errno::EAGAIN) => Ok(None),
            Err(e) => Err(TerminalError::Read(e)),
        }
    }

    fn write_once(&mut self, bytes: &[u8]) -> TerminalResult<()> {
        let written = write(STDOUT_FILENO, bytes).map_err(TerminalError::Write)?;
        if written != bytes.len() {
            return Err(TerminalError::ShortWrite {
                written,
                expected: bytes.len(),
            });
        }
        Ok(())
    }

    fn query_size(&self) -> Option<WindowSize> {
        let mut ws = libc::winsize {
            ws_row: 0,
            ws_col: 0,
            ws_xpixel: 0,
            ws_ypixel: 0,
        };

        // SAFETY: TIOCGWINSZ only writes into the winsize struct we pass
        let result = unsafe { libc::ioctl(STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) };

        if result == -1 {
            tracing::debug!("TIOCGWINSZ failed: {}", Errno::last());
            None
        } else {
            Some(WindowSize::new(ws.ws_row, ws.ws_col))
        }
    }
}
