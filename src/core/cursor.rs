//! Cursor position and movement
//!
//! Every move is one cell at a time and clamped to the window, so the
//! cursor can never leave `0..cols` x `0..rows`.

use crate::terminal::WindowSize;

/// A single-cell movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Cursor position on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Column position (0-indexed)
    pub x: usize,
    /// Row position (0-indexed)
    pub y: usize,
}

impl Cursor {
    /// Create a new cursor at the home position
    pub fn new() -> Self {
        Self::default()
    }

    /// Move one cell in `direction`, stopping at the window edges
    pub fn move_by(&mut self, direction: Direction, size: WindowSize) {
        match direction {
            Direction::Up => {
                if self.y != 0 {
                    self.y -= 1;
                }
            }
            Direction::Down => {
                if self.y + 1 < usize::from(size.rows) {
                    self.y += 1;
                }
            }
            Direction::Left => {
                if self.x != 0 {
                    self.x -= 1;
                }
            }
            Direction::Right => {
                if self.x + 1 < usize::from(size.cols) {
                    self.x += 1;
                }
            }
        }
    }

    /// Move a full screen height up or down
    ///
    /// This is `rows` single-step moves rather than a jump, so it clamps
    /// exactly like holding the arrow key.
    pub fn page(&mut self, direction: Direction, size: WindowSize) {
        for _ in 0..size.rows {
            self.move_by(direction, size);
        }
    }

    /// 1-based `(row, col)` for a cursor position sequence
    pub fn screen_position(&self) -> (usize, usize) {
        (self.y + 1, self.x + 1)
    }
}
