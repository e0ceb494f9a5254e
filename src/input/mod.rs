//! Keyboard Input Module
//!
//! Turns raw bytes from a terminal in raw mode into logical key events.
//!
//! Plain bytes map directly to [`KeyEvent::Char`] or, below 0x20, to
//! [`KeyEvent::CtrlChar`]. An escape byte starts a short sequence that may
//! name a cursor or paging key:
//!
//! | Bytes       | Key          |
//! |-------------|--------------|
//! | `ESC [ A`   | `ArrowUp`    |
//! | `ESC [ B`   | `ArrowDown`  |
//! | `ESC [ C`   | `ArrowRight` |
//! | `ESC [ D`   | `ArrowLeft`  |
//! | `ESC [ 5 ~` | `PageUp`     |
//! | `ESC [ 6 ~` | `PageDown`   |
//!
//! Anything else that starts with escape decodes to
//! [`KeyEvent::LiteralEscape`]. Decoding never fails.

mod decoder;

pub use decoder::{DecodeState, KeyDecoder, Transition};

/// A logical key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// A byte at or above 0x20
    Char(u8),
    /// A byte below 0x20, as produced by Ctrl plus a key
    CtrlChar(u8),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    PageUp,
    PageDown,
    /// An escape byte that did not start a known sequence
    LiteralEscape,
}

/// The byte a terminal sends for Ctrl plus `key`
///
/// Clears the upper three bits, the same thing the Ctrl key does.
pub const fn ctrl_key(key: u8) -> u8 {
    key & 0x1f
}

/// Classify a single byte that is not the start of an escape sequence
pub fn classify_byte(byte: u8) -> KeyEvent {
    if byte < 0x20 {
        KeyEvent::CtrlChar(byte)
    } else {
        KeyEvent::Char(byte)
    }
}
