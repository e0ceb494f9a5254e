//! Key Decoder State Machine
//!
//! Decodes one logical key per call with at most three bytes of lookahead
//! after the first. Nothing is buffered between calls.
//!
//! States:
//! - Ground: waiting for the first byte of a key
//! - Escape: after ESC
//! - EscapeIntro: after ESC and one more byte
//! - CsiDigit: after `ESC [ <digit>`, waiting for `~`
//!
//! Only the first read may wait indefinitely (it is retried on every
//! timeout). A timeout or failed read during lookahead ends the sequence as
//! a literal escape.

use crate::ansi::ESC;
use crate::terminal::{TerminalIo, TerminalResult};

use super::{classify_byte, KeyEvent};

/// Decoder state between two reads of the same key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeState {
    Ground,
    Escape,
    /// Escape followed by this byte
    EscapeIntro(u8),
    /// `ESC [` followed by this digit
    CsiDigit(u8),
}

/// Result of feeding one read result to a state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Read again in the same state
    Retry,
    /// Read again in a new state
    Next(DecodeState),
    /// Decoding finished
    Emit(KeyEvent),
}

/// Decodes raw terminal input into [`KeyEvent`]s
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyDecoder;

impl KeyDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Feed one read result to `state`; `None` means the read timed out
    pub fn advance(state: DecodeState, byte: Option<u8>) -> Transition {
        use DecodeState::*;
        use Transition::*;

        match (state, byte) {
            (Ground, None) => Retry,
            (Ground, Some(ESC)) => Next(Escape),
            (Ground, Some(b)) => Emit(classify_byte(b)),

            (Escape, None) => Emit(KeyEvent::LiteralEscape),
            (Escape, Some(b)) => Next(EscapeIntro(b)),

            (EscapeIntro(_), None) => Emit(KeyEvent::LiteralEscape),
            (EscapeIntro(first), Some(_)) if first != b'[' => Emit(KeyEvent::LiteralEscape),
            (EscapeIntro(_), Some(b)) if b.is_ascii_digit() => Next(CsiDigit(b)),
            (EscapeIntro(_), Some(b)) => Emit(match b {
                b'A' => KeyEvent::ArrowUp,
                b'B' => KeyEvent::ArrowDown,
                b'C' => KeyEvent::ArrowRight,
                b'D' => KeyEvent::ArrowLeft,
                _ => KeyEvent::LiteralEscape,
            }),

            (CsiDigit(digit), Some(b'~')) => Emit(match digit {
                b'5' => KeyEvent::PageUp,
                b'6' => KeyEvent::PageDown,
                _ => KeyEvent::LiteralEscape,
            }),
            (CsiDigit(_), _) => Emit(KeyEvent::LiteralEscape),
        }
    }

    /// Read bytes from `io` until one logical key is decoded
    ///
    /// Fails only if the read for the first byte fails.
    pub fn read_key<T: TerminalIo>(&self, io: &mut T) -> TerminalResult<KeyEvent> {
        let mut state = DecodeState::Ground;
        loop {
            let byte = match state {
                DecodeState::Ground => io.read_byte()?,
                _ => io.read_byte().unwrap_or(None),
            };

            match Self::advance(state, byte) {
                Transition::Retry => {}
                Transition::Next(next) => state = next,
                Transition::Emit(key) => {
                    tracing::trace!("Decoded key {:?}", key);
                    return Ok(key);
                }
            }
        }
    }
}
