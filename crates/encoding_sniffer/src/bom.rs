//! Byte order mark detection.

use crate::name::EncodingName;

/// A recognized byte order mark.
///
/// Only the three BOMs of the Encoding Standard are recognized. A UTF-32LE BOM
/// (`FF FE 00 00`) therefore reads as [`Bom::Utf16Le`], and a UTF-32BE BOM
/// (`00 00 FE FF`) is not a BOM at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bom {
    Utf8,
    Utf16Le,
    Utf16Be,
}

impl Bom {
    pub fn detect(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [0xEF, 0xBB, 0xBF, ..] => Some(Bom::Utf8),
            [0xFF, 0xFE, ..] => Some(Bom::Utf16Le),
            [0xFE, 0xFF, ..] => Some(Bom::Utf16Be),
            _ => None,
        }
    }

    /// Number of bytes the BOM occupies at the start of the stream.
    pub fn byte_len(self) -> usize {
        match self {
            Bom::Utf8 => 3,
            Bom::Utf16Le | Bom::Utf16Be => 2,
        }
    }

    pub fn encoding(self) -> EncodingName {
        match self {
            Bom::Utf8 => EncodingName::UTF_8,
            Bom::Utf16Le => EncodingName::UTF_16LE,
            Bom::Utf16Be => EncodingName::UTF_16BE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_the_three_boms() {
        assert_eq!(Bom::detect(b"\xEF\xBB\xBF<html>"), Some(Bom::Utf8));
        assert_eq!(Bom::detect(b"\xFF\xFE<\x00"), Some(Bom::Utf16Le));
        assert_eq!(Bom::detect(b"\xFE\xFF\x00<"), Some(Bom::Utf16Be));
    }

    #[test]
    fn bare_bom_is_enough() {
        assert_eq!(Bom::detect(b"\xEF\xBB\xBF"), Some(Bom::Utf8));
        assert_eq!(Bom::detect(b"\xFF\xFE"), Some(Bom::Utf16Le));
    }

    #[test]
    fn truncated_or_foreign_prefixes_are_not_boms() {
        assert_eq!(Bom::detect(b""), None);
        assert_eq!(Bom::detect(b"\xEF\xBB"), None);
        assert_eq!(Bom::detect(b"\xFF"), None);
        assert_eq!(Bom::detect(b"\xBB\xBF"), None);
        assert_eq!(Bom::detect(b"<!doctype html>"), None);
    }

    #[test]
    fn utf32_boms_follow_the_utf16_table() {
        assert_eq!(Bom::detect(b"\xFF\xFE\x00\x00"), Some(Bom::Utf16Le));
        assert_eq!(Bom::detect(b"\x00\x00\xFE\xFF"), None);
    }

    #[test]
    fn lengths_and_names() {
        assert_eq!(Bom::Utf8.byte_len(), 3);
        assert_eq!(Bom::Utf16Be.byte_len(), 2);
        assert_eq!(Bom::Utf16Le.encoding(), "UTF-16LE");
        assert_eq!(Bom::Utf16Be.encoding(), "UTF-16BE");
    }
}
