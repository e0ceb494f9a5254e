//! Raw mode lifecycle
//!
//! [`TerminalSession`] is an RAII guard: starting it captures the terminal's
//! attributes and switches to raw mode, and the captured attributes are put
//! back exactly once, either through [`TerminalSession::stop`] or when the
//! guard is dropped on an early exit.

use std::os::fd::AsFd;

use nix::sys::termios::{
    self, ControlFlags, InputFlags, LocalFlags, OutputFlags, SetArg, SpecialCharacterIndices,
    Termios,
};

use super::{TerminalError, TerminalResult};

/// Read timeout in raw mode, in tenths of a second (VTIME)
pub const READ_TIMEOUT_DECISECONDS: u8 = 1;

/// Derive raw mode attributes from the captured ones
///
/// Turns off echo, canonical input, signal keys, extended input processing,
/// flow control, CR-to-NL translation, parity checking, 8th bit stripping
/// and output post-processing. Reads return after at most
/// [`READ_TIMEOUT_DECISECONDS`] even when no byte arrived.
pub fn raw_mode_settings(original: &Termios) -> Termios {
    let mut raw = original.clone();

    raw.input_flags.remove(
        InputFlags::BRKINT
            | InputFlags::ICRNL
            | InputFlags::INPCK
            | InputFlags::ISTRIP
            | InputFlags::IXON,
    );
    raw.output_flags.remove(OutputFlags::OPOST);
    raw.control_flags.insert(ControlFlags::CS8);
    raw.local_flags
        .remove(LocalFlags::ECHO | LocalFlags::ICANON | LocalFlags::IEXTEN | LocalFlags::ISIG);

    raw.control_chars[SpecialCharacterIndices::VMIN as usize] = 0;
    raw.control_chars[SpecialCharacterIndices::VTIME as usize] = READ_TIMEOUT_DECISECONDS;

    raw
}

/// A terminal held in raw mode
pub struct TerminalSession<F: AsFd> {
    fd: F,
    /// Attributes captured at start, never modified
    original: Termios,
    restored: bool,
}

impl<F: AsFd> TerminalSession<F> {
    /// Capture the current attributes of `fd` and switch it to raw mode
    pub fn start(fd: F) -> TerminalResult<Self> {
        let original = termios::tcgetattr(fd.as_fd()).map_err(TerminalError::AttributeRead)?;

        // From here on the guard owns the snapshot, so any failure below
        // still restores on drop.
        let mut session = Self {
            fd,
            original,
            restored: false,
        };

        let raw = raw_mode_settings(&session.original);
        if let Err(e) = termios::tcsetattr(session.fd.as_fd(), SetArg::TCSAFLUSH, &raw) {
            // Nothing was applied, there is nothing to undo
            session.restored = true;
            return Err(TerminalError::AttributeWrite(e));
        }

        tracing::debug!("Raw mode enabled");
        Ok(session)
    }

    /// The attributes captured by [`start`](Self::start)
    pub fn original(&self) -> &Termios {
        &self.original
    }

    /// Restore the captured attributes and end the session
    pub fn stop(mut self) -> TerminalResult<()> {
        self.restore()
    }

    fn restore(&mut self) -> TerminalResult<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        termios::tcsetattr(self.fd.as_fd(), SetArg::TCSAFLUSH, &self.original)
            .map_err(TerminalError::AttributeWrite)?;

        tracing::debug!("Terminal mode restored");
        Ok(())
    }
}

impl<F: AsFd> Drop for TerminalSession<F> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::error!("Failed to restore terminal mode: {}", e);
            eprintln!("doll: {}", e);
        }
    }
}
