//! Editor Event Loop
//!
//! Ties together the decoder, the cursor model and the renderer. Each
//! iteration repaints the screen, decodes one key and dispatches it, until
//! the quit key is pressed or an I/O error ends the loop.
//!
//! All editor state lives in [`Editor`]; nothing is global.

use crate::ansi;
use crate::app::Config;
use crate::core::{Cursor, Direction};
use crate::input::{KeyDecoder, KeyEvent};
use crate::renderer::FrameRenderer;
use crate::terminal::{TerminalIo, TerminalResult, WindowSize};

/// Event loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Running,
    Terminating,
}

/// The editor context
#[derive(Debug, Clone)]
pub struct Editor {
    size: WindowSize,
    cursor: Cursor,
    state: EditorState,
    quit_byte: u8,
    decoder: KeyDecoder,
    renderer: FrameRenderer,
}

impl Editor {
    /// Create an editor for a window of `size`
    pub fn new(size: WindowSize, config: &Config) -> Self {
        Self {
            size,
            cursor: Cursor::new(),
            state: EditorState::Running,
            quit_byte: config.quit_byte(),
            decoder: KeyDecoder::new(),
            renderer: FrameRenderer::new(config),
        }
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    /// Apply one key to the editor state
    pub fn process_key(&mut self, key: KeyEvent) -> EditorState {
        match key {
            KeyEvent::CtrlChar(byte) if byte == self.quit_byte => {
                self.state = EditorState::Terminating;
            }
            KeyEvent::ArrowUp => self.cursor.move_by(Direction::Up, self.size),
            KeyEvent::ArrowDown => self.cursor.move_by(Direction::Down, self.size),
            KeyEvent::ArrowLeft => self.cursor.move_by(Direction::Left, self.size),
            KeyEvent::ArrowRight => self.cursor.move_by(Direction::Right, self.size),
            KeyEvent::PageUp => self.cursor.page(Direction::Up, self.size),
            KeyEvent::PageDown => self.cursor.page(Direction::Down, self.size),
            KeyEvent::Char(_) | KeyEvent::CtrlChar(_) | KeyEvent::LiteralEscape => {}
        }
        self.state
    }

    /// Repaint the whole screen
    pub fn refresh_screen<T: TerminalIo>(&self, io: &mut T) -> TerminalResult<()> {
        self.renderer.render(io, self.size, &self.cursor)
    }

    /// Run until the quit key is pressed
    ///
    /// On quit the screen is cleared and the cursor sent home. Errors are
    /// returned as they happen; the caller restores the terminal.
    pub fn run<T: TerminalIo>(&mut self, io: &mut T) -> TerminalResult<()> {
        tracing::info!(
            "Editor running in {}x{} window",
            self.size.cols,
            self.size.rows
        );

        while self.state == EditorState::Running {
            self.refresh_screen(io)?;
            let key = self.decoder.read_key(io)?;
            self.process_key(key);
        }

        tracing::info!("Quit requested");
        clear_screen(io)
    }
}

/// Clear the screen and move the cursor home, outside of a frame
pub fn clear_screen<T: TerminalIo>(io: &mut T) -> TerminalResult<()> {
    io.write_once(ansi::CLEAR_SCREEN)?;
    io.write_once(ansi::CURSOR_HOME)
}
