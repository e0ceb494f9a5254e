//! Window size discovery
//!
//! The OS is asked first (TIOCGWINSZ). When that is unavailable or reports
//! nothing useful, the cursor is pushed to the bottom-right corner and the
//! terminal is asked where it ended up.

use crate::ansi;

use super::{TerminalError, TerminalIo, TerminalResult};

/// Size of the scratch buffer for a cursor position report
pub const CURSOR_REPORT_CAPACITY: usize = 32;

/// Visible terminal dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    /// Number of rows (lines)
    pub rows: u16,
    /// Number of columns (characters per line)
    pub cols: u16,
}

impl WindowSize {
    /// Create a new window size
    pub fn new(rows: u16, cols: u16) -> Self {
        WindowSize { rows, cols }
    }

    /// Both dimensions are at least one cell
    pub fn is_usable(&self) -> bool {
        self.rows > 0 && self.cols > 0
    }
}

/// Determine the window size of `io`
pub fn probe_window_size<T: TerminalIo>(io: &mut T) -> TerminalResult<WindowSize> {
    if let Some(size) = io.query_size().filter(WindowSize::is_usable) {
        tracing::debug!("Window size from ioctl: {}x{}", size.cols, size.rows);
        return Ok(size);
    }

    tracing::debug!("Window size query unusable, falling back to cursor report");
    io.write_once(ansi::CURSOR_TO_BOTTOM_RIGHT)
        .map_err(|_| TerminalError::SizeUnavailable)?;
    let size = cursor_position(io)?;
    tracing::debug!("Window size from cursor report: {}x{}", size.cols, size.rows);
    Ok(size)
}

/// Request a cursor position report and read the answer
fn cursor_position<T: TerminalIo>(io: &mut T) -> TerminalResult<WindowSize> {
    io.write_once(ansi::CURSOR_REPORT_REQUEST)
        .map_err(|_| TerminalError::SizeUnavailable)?;

    let mut buf = [0u8; CURSOR_REPORT_CAPACITY];
    let mut len = 0;
    while len < buf.len() - 1 {
        match io.read_byte() {
            Ok(Some(b'R')) => break,
            Ok(Some(byte)) => {
                buf[len] = byte;
                len += 1;
            }
            // A silent terminal never answers; once the report has started,
            // the rest is only late
            Ok(None) if len == 0 => break,
            Ok(None) => {}
            Err(_) => break,
        }
    }

    let (rows, cols) = parse_cursor_report(&buf[..len]).ok_or(TerminalError::SizeUnavailable)?;
    Ok(WindowSize::new(rows, cols))
}

/// Parse a cursor position report of the form `ESC [ <row> ; <col>`
///
/// A trailing `R` is accepted. Returns `(row, col)`; both must be at least 1.
pub fn parse_cursor_report(report: &[u8]) -> Option<(u16, u16)> {
    let body = report.strip_prefix(b"\x1b[")?;
    let body = body.strip_suffix(b"R").unwrap_or(body);

    let split = body.iter().position(|&b| b == b';')?;
    let row = parse_number(&body[..split])?;
    let col = parse_number(&body[split + 1..])?;

    (row > 0 && col > 0).then_some((row, col))
}

fn parse_number(digits: &[u8]) -> Option<u16> {
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    std::str::from_utf8(digits).ok()?.parse().ok()
}
