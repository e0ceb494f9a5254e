//! VT100 escape sequences written to the terminal

/// Escape byte
pub const ESC: u8 = 0x1b;

/// Erase the whole display (ED 2)
pub const CLEAR_SCREEN: &[u8] = b"\x1b[2J";
/// Cursor to row 1, column 1 (CUP)
pub const CURSOR_HOME: &[u8] = b"\x1b[H";
/// Hide the cursor (DECTCEM reset)
pub const HIDE_CURSOR: &[u8] = b"\x1b[?25l";
/// Show the cursor (DECTCEM set)
pub const SHOW_CURSOR: &[u8] = b"\x1b[?25h";
/// Erase from the cursor to end of line (EL 0)
pub const CLEAR_LINE: &[u8] = b"\x1b[K";
/// Device status report: cursor position (DSR 6)
pub const CURSOR_REPORT_REQUEST: &[u8] = b"\x1b[6n";
/// Cursor forward and down far enough to hit the bottom-right corner
pub const CURSOR_TO_BOTTOM_RIGHT: &[u8] = b"\x1b[999C\x1b[999B";

/// Append a cursor position sequence for a 1-based `row` and `col`
pub fn push_cursor_position(buf: &mut Vec<u8>, row: usize, col: usize) {
    buf.extend_from_slice(format!("\x1b[{};{}H", row, col).as_bytes());
}
