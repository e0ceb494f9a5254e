//! Full-screen repaint
//!
//! A frame is built into one byte buffer and sent with one write, so the
//! terminal never shows a half-drawn screen. The buffer is dropped after the
//! write; nothing is reused between frames.

use crate::ansi;
use crate::app::Config;
use crate::core::Cursor;
use crate::terminal::{TerminalIo, TerminalResult, WindowSize};

/// Per-row overhead: marker, clear-to-end-of-line, CR LF
const ROW_OVERHEAD: usize = 8;
/// Hide, home, position and show sequences
const FRAME_OVERHEAD: usize = 32;

/// Builds and writes frames
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    banner: Vec<u8>,
    marker: Vec<u8>,
}

impl FrameRenderer {
    /// Create a renderer drawing `config`'s banner and marker
    pub fn new(config: &Config) -> Self {
        let mut marker = [0u8; 4];
        Self {
            banner: config.banner.as_bytes().to_vec(),
            marker: config.marker.encode_utf8(&mut marker).as_bytes().to_vec(),
        }
    }

    /// Build the bytes of one frame
    pub fn build_frame(&self, size: WindowSize, cursor: &Cursor) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.frame_capacity(size));

        buf.extend_from_slice(ansi::HIDE_CURSOR);
        buf.extend_from_slice(ansi::CURSOR_HOME);

        self.draw_rows(&mut buf, size);

        let (row, col) = cursor.screen_position();
        ansi::push_cursor_position(&mut buf, row, col);
        buf.extend_from_slice(ansi::SHOW_CURSOR);

        buf
    }

    /// Build one frame and write it to `io` in a single call
    pub fn render<T: TerminalIo>(
        &self,
        io: &mut T,
        size: WindowSize,
        cursor: &Cursor,
    ) -> TerminalResult<()> {
        let frame = self.build_frame(size, cursor);
        io.write_once(&frame)
    }

    /// Upper bound on the length of a frame for `size`
    fn frame_capacity(&self, size: WindowSize) -> usize {
        // The banner row also carries up to half a row of padding
        usize::from(size.rows) * ROW_OVERHEAD
            + usize::from(size.cols)
            + self.banner.len()
            + FRAME_OVERHEAD
    }

    fn draw_rows(&self, buf: &mut Vec<u8>, size: WindowSize) {
        let rows = usize::from(size.rows);
        let banner_row = rows / 3;

        for y in 0..rows {
            if y == banner_row {
                self.draw_banner(buf, usize::from(size.cols));
            } else {
                buf.extend_from_slice(&self.marker);
            }

            buf.extend_from_slice(ansi::CLEAR_LINE);

            // A CR LF after the last row would scroll the screen
            if y + 1 < rows {
                buf.extend_from_slice(b"\r\n");
            }
        }
    }

    fn draw_banner(&self, buf: &mut Vec<u8>, cols: usize) {
        let banner_len = self.banner.len().min(cols);
        let mut padding = (cols - banner_len) / 2;

        if padding > 0 {
            buf.extend_from_slice(&self.marker);
            padding -= 1;
        }
        buf.resize(buf.len() + padding, b' ');
        buf.extend_from_slice(&self.banner[..banner_len]);
    }
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::ScriptedIo;

    fn renderer(banner: &str) -> FrameRenderer {
        FrameRenderer::new(&Config {
            banner: banner.to_string(),
            ..Config::default()
        })
    }

    /// Split the row area of a frame into rows
    fn rows_of(frame: &[u8]) -> Vec<Vec<u8>> {
        let start = ansi::HIDE_CURSOR.len() + ansi::CURSOR_HOME.len();
        let end = frame
            .windows(3)
            .rposition(|w| w == b"\x1b[K")
            .expect("clear line")
            + 3;
        frame[start..end]
            .split(|&b| b == b'\n')
            .map(|row| {
                let row = row.strip_suffix(b"\r").unwrap_or(row);
                row.strip_suffix(ansi::CLEAR_LINE).unwrap_or(row).to_vec()
            })
            .collect()
    }

    #[test]
    fn test_frame_begins_and_ends_with_cursor_visibility() {
        let r = FrameRenderer::default();
        for (rows, cols) in [(1, 1), (2, 5), (24, 80), (50, 200)] {
            let frame = r.build_frame(WindowSize::new(rows, cols), &Cursor { x: 0, y: 0 });
            assert!(frame.starts_with(b"\x1b[?25l\x1b[H"));
            assert!(frame.ends_with(b"\x1b[?25h"));
        }
    }

    #[test]
    fn test_frame_rows() {
        let r = renderer("hi");
        let frame = r.build_frame(WindowSize::new(6, 10), &Cursor::new());
        let rows = rows_of(&frame);

        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0], b"~");
        assert_eq!(rows[1], b"~");
        assert_eq!(rows[2], b"~   hi");
        assert_eq!(rows[5], b"~");
    }

    #[test]
    fn test_no_line_break_after_last_row() {
        let r = FrameRenderer::default();
        let frame = r.build_frame(WindowSize::new(3, 80), &Cursor::new());

        assert_eq!(frame.windows(2).filter(|w| *w == b"\r\n").count(), 2);
        assert!(!frame.windows(5).any(|w| w == b"\x1b[K\r\n\x1b"));
    }

    #[test]
    fn test_banner_centering() {
        let banner = "x".repeat(24);
        let r = renderer(&banner);
        let frame = r.build_frame(WindowSize::new(24, 80), &Cursor::new());
        let row = &rows_of(&frame)[8];

        // padding = (80 - 24) / 2 = 28: one marker, 27 spaces
        let mut expected = b"~".to_vec();
        expected.extend_from_slice(&[b' '; 27]);
        expected.extend_from_slice(banner.as_bytes());
        assert_eq!(row, &expected);
    }

    #[test]
    fn test_banner_truncated_to_width() {
        let r = renderer("Doll Editor -- version 0.0.1");
        let frame = r.build_frame(WindowSize::new(3, 10), &Cursor::new());
        let rows = rows_of(&frame);

        // No room for padding, so no marker either
        assert_eq!(rows[1], b"Doll Edito");
    }

    #[test]
    fn test_banner_with_odd_padding() {
        let r = renderer("ab");
        let frame = r.build_frame(WindowSize::new(3, 5), &Cursor::new());
        // padding = 1: only the marker
        assert_eq!(rows_of(&frame)[1], b"~ab");
    }

    #[test]
    fn test_cursor_position_is_one_based() {
        let r = FrameRenderer::default();
        let frame = r.build_frame(WindowSize::new(24, 80), &Cursor { x: 9, y: 4 });
        assert!(frame.ends_with(b"\x1b[5;10H\x1b[?25h"));
    }

    #[test]
    fn test_custom_marker() {
        let r = FrameRenderer::new(&Config {
            marker: '.',
            ..Config::default()
        });
        let frame = r.build_frame(WindowSize::new(4, 80), &Cursor::new());
        assert_eq!(rows_of(&frame)[0], b".");
    }

    #[test]
    fn test_frame_fits_initial_capacity() {
        let r = FrameRenderer::default();
        for (rows, cols) in [(1, 1), (10, 300), (24, 80), (3, 1000), (200, 2)] {
            let size = WindowSize::new(rows, cols);
            let cursor = Cursor {
                x: usize::from(cols) - 1,
                y: usize::from(rows) - 1,
            };
            let frame = r.build_frame(size, &cursor);
            assert!(
                frame.len() <= r.frame_capacity(size),
                "{}x{}: {} bytes, estimate {}",
                cols,
                rows,
                frame.len(),
                r.frame_capacity(size)
            );
        }
    }

    #[test]
    fn test_render_is_a_single_write() {
        let r = FrameRenderer::default();
        let mut io = ScriptedIo::new(None);
        let size = WindowSize::new(24, 80);

        r.render(&mut io, size, &Cursor::new()).unwrap();

        assert_eq!(io.writes().len(), 1);
        assert_eq!(io.writes()[0], r.build_frame(size, &Cursor::new()));
    }

    #[test]
    fn test_render_short_write_fails() {
        let r = FrameRenderer::default();
        let mut io = ScriptedIo::new(None);
        io.limit_writes(10);

        assert!(r
            .render(&mut io, WindowSize::new(24, 80), &Cursor::new())
            .is_err());
    }
}
