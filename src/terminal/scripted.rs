//! In-memory terminal for headless runs and tests
//!
//! Input is a script of events: a byte, or a read that times out. Every
//! `write_once` call is captured as its own chunk so callers can check that
//! a frame went out in exactly one write.

use std::collections::VecDeque;

use super::{TerminalError, TerminalIo, TerminalResult, WindowSize};

/// A scripted terminal
#[derive(Debug, Default, Clone)]
pub struct ScriptedIo {
    input: VecDeque<Option<u8>>,
    writes: Vec<Vec<u8>>,
    size: Option<WindowSize>,
    /// Number of bytes the next write accepts, if limited
    write_limit: Option<usize>,
}

impl ScriptedIo {
    /// Create a scripted terminal reporting `size` from the OS query
    pub fn new(size: Option<WindowSize>) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Queue bytes that arrive back to back
    pub fn push_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.input.extend(bytes.iter().copied().map(Some));
        self
    }

    /// Queue a read that returns nothing before the timeout
    pub fn push_timeout(&mut self) -> &mut Self {
        self.input.push_back(None);
        self
    }

    /// Make every following write accept at most `limit` bytes
    pub fn limit_writes(&mut self, limit: usize) -> &mut Self {
        self.write_limit = Some(limit);
        self
    }

    /// Each write call, in order
    pub fn writes(&self) -> &[Vec<u8>] {
        &self.writes
    }

    /// All written bytes concatenated
    pub fn output(&self) -> Vec<u8> {
        self.writes.concat()
    }

    /// Number of scripted input events not yet consumed
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl TerminalIo for ScriptedIo {
    fn read_byte(&mut self) -> TerminalResult<Option<u8>> {
        self.input.pop_front().ok_or(TerminalError::InputClosed)
    }

    fn write_once(&mut self, bytes: &[u8]) -> TerminalResult<()> {
        let written = self.write_limit.map_or(bytes.len(), |l| l.min(bytes.len()));
        self.writes.push(bytes[..written].to_vec());
        if written != bytes.len() {
            return Err(TerminalError::ShortWrite {
                written,
                expected: bytes.len(),
            });
        }
        Ok(())
    }

    fn query_size(&self) -> Option<WindowSize> {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_reads_in_order() {
        let mut io = ScriptedIo::new(None);
        io.push_bytes(b"ab").push_timeout().push_bytes(b"c");

        assert_eq!(io.read_byte().unwrap(), Some(b'a'));
        assert_eq!(io.read_byte().unwrap(), Some(b'b'));
        assert_eq!(io.read_byte().unwrap(), None);
        assert_eq!(io.read_byte().unwrap(), Some(b'c'));
        assert!(matches!(io.read_byte(), Err(TerminalError::InputClosed)));
    }

    #[test]
    fn test_scripted_captures_each_write() {
        let mut io = ScriptedIo::new(None);
        io.write_once(b"one").unwrap();
        io.write_once(b"two").unwrap();

        assert_eq!(io.writes().len(), 2);
        assert_eq!(io.output(), b"onetwo");
    }

    #[test]
    fn test_scripted_short_write() {
        let mut io = ScriptedIo::new(None);
        io.limit_writes(2);

        let err = io.write_once(b"hello").unwrap_err();
        assert!(matches!(
            err,
            TerminalError::ShortWrite {
                written: 2,
                expected: 5
            }
        ));
        assert_eq!(io.output(), b"he");
    }
}
