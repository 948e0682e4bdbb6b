//! Bounded byte cursor for the prescan.

use memchr::{memchr, memmem};
use tools::ascii::{skip_whitespace, starts_with_ignore_case_at};

use super::PRESCAN_LIMIT;

/// Position within the first [`PRESCAN_LIMIT`] bytes of a document.
///
/// Invariant: `pos <= window.len()`; every move saturates at the end.
#[derive(Debug)]
pub(crate) struct ScanCursor<'a> {
    window: &'a [u8],
    pos: usize,
}

impl<'a> ScanCursor<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        let end = bytes.len().min(PRESCAN_LIMIT);
        Self {
            window: &bytes[..end],
            pos: 0,
        }
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.window.get(self.pos).copied()
    }

    #[inline]
    pub(crate) fn peek_at(&self, offset: usize) -> Option<u8> {
        self.window.get(self.pos + offset).copied()
    }

    #[inline]
    pub(crate) fn bump(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.window.len());
    }

    pub(crate) fn rest(&self) -> &'a [u8] {
        &self.window[self.pos..]
    }

    pub(crate) fn starts_with(&self, needle: &[u8]) -> bool {
        self.rest().starts_with(needle)
    }

    pub(crate) fn starts_with_ignore_case(&self, needle: &[u8]) -> bool {
        starts_with_ignore_case_at(self.window, self.pos, needle)
    }

    pub(crate) fn skip_whitespace(&mut self) {
        self.pos = skip_whitespace(self.window, self.pos);
    }

    /// Move onto the next `byte` at or after the cursor. On a miss the cursor
    /// ends up at the end of the window and `false` is returned.
    pub(crate) fn seek(&mut self, byte: u8) -> bool {
        match memchr(byte, self.rest()) {
            Some(rel) => {
                self.pos += rel;
                true
            }
            None => {
                self.pos = self.window.len();
                false
            }
        }
    }

    /// Move past the next occurrence of `needle` starting `from` bytes ahead
    /// of the cursor.
    pub(crate) fn skip_past(&mut self, from: usize, needle: &[u8]) -> bool {
        let start = (self.pos + from).min(self.window.len());
        match memmem::find(&self.window[start..], needle) {
            Some(rel) => {
                self.pos = start + rel + needle.len();
                true
            }
            None => {
                self.pos = self.window.len();
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_capped() {
        let long = vec![b'a'; PRESCAN_LIMIT + 10];
        let mut cur = ScanCursor::new(&long);
        cur.bump(usize::MAX / 2);
        assert_eq!(cur.pos(), PRESCAN_LIMIT);
        assert_eq!(cur.pos(), cur.window.len());
        assert_eq!(cur.peek(), None);
    }

    #[test]
    fn seek_and_skip_past() {
        let mut cur = ScanCursor::new(b"ab<!-->cd<e");
        assert!(cur.seek(b'<'));
        assert_eq!(cur.pos(), 2);
        assert!(cur.skip_past(2, b"-->"));
        assert_eq!(cur.peek(), Some(b'c'));
        assert!(cur.seek(b'<'));
        assert!(!cur.skip_past(2, b"-->"));
        assert_eq!(cur.pos(), cur.window.len());
    }

    #[test]
    fn skip_past_never_overruns() {
        let mut cur = ScanCursor::new(b"<");
        assert!(!cur.skip_past(2, b"-->"));
        assert_eq!(cur.pos(), cur.window.len());
    }
}
