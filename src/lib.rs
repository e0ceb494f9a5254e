//! Doll Editor Library
//!
//! The input/output engine of a minimal terminal text editor, built directly
//! on termios and VT100 sequences without a terminal UI library.
//!
//! - `terminal`: raw mode lifecycle, window size probing, byte I/O
//! - `input`: decoding raw bytes into key events
//! - `core`: cursor model
//! - `renderer`: single-write full-screen repaint
//! - `editor`: the event loop
//! - `app`: configuration, logging, process wiring

pub mod ansi;
pub mod app;
pub mod core;
pub mod editor;
pub mod input;
pub mod renderer;
pub mod terminal;

/// Version shown in the banner
pub const DOLL_VERSION: &str = env!("CARGO_PKG_VERSION");

pub use app::Config;
pub use editor::{Editor, EditorState};
pub use terminal::{TerminalError, TerminalResult, WindowSize};
