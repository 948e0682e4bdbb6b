//! ASCII helpers for scanning raw, not-yet-decoded byte streams.
//!
//! Only `A-Z` / `a-z` fold; every other byte (including non-ASCII) compares
//! exactly.

use memchr::{memchr, memchr2};

const CASE_BIT: u8 = 0x20;

/// HTML "ASCII whitespace": TAB, LF, FF, CR, SPACE.
#[inline]
pub fn is_html_whitespace(b: u8) -> bool {
    matches!(b, 0x09 | 0x0A | 0x0C | 0x0D | 0x20)
}

#[inline]
pub fn lower(b: u8) -> u8 {
    if b.is_ascii_uppercase() { b | CASE_BIT } else { b }
}

#[inline]
pub fn eq_ignore_case(a: u8, b: u8) -> bool {
    lower(a) == lower(b)
}

/// `true` if `haystack[start..]` begins with `needle`, ignoring ASCII case.
pub fn starts_with_ignore_case_at(haystack: &[u8], start: usize, needle: &[u8]) -> bool {
    haystack.len() >= start + needle.len()
        && haystack[start..start + needle.len()]
            .iter()
            .zip(needle)
            .all(|(&h, &n)| eq_ignore_case(h, n))
}

/// Offset of the first ASCII case-insensitive occurrence of `needle`.
pub fn find_ignore_case(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    let n = needle.len();
    if n == 0 {
        return Some(0);
    }
    let hay_len = haystack.len();
    if hay_len < n {
        return None;
    }
    let first = needle[0];
    let (a, b) = if first.is_ascii_alphabetic() {
        (first.to_ascii_lowercase(), first.to_ascii_uppercase())
    } else {
        (first, first)
    };
    let mut i = 0;
    while i + n <= hay_len {
        let rel = if a == b {
            memchr(a, &haystack[i..])
        } else {
            memchr2(a, b, &haystack[i..])
        }?;
        let pos = i + rel;
        if starts_with_ignore_case_at(haystack, pos, needle) {
            return Some(pos);
        }
        i = pos + 1;
    }
    None
}

/// Advance from `start` past any HTML whitespace.
#[inline]
pub fn skip_whitespace(bytes: &[u8], mut start: usize) -> usize {
    while start < bytes.len() && is_html_whitespace(bytes[start]) {
        start += 1;
    }
    start
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_set_matches_html() {
        for b in [b'\t', b'\n', 0x0C, b'\r', b' '] {
            assert!(is_html_whitespace(b));
        }
        // Vertical tab is not HTML whitespace.
        assert!(!is_html_whitespace(0x0B));
        assert!(!is_html_whitespace(0xA0));
    }

    #[test]
    fn lower_only_touches_ascii_uppercase() {
        assert_eq!(lower(b'M'), b'm');
        assert_eq!(lower(b'm'), b'm');
        assert_eq!(lower(b'@'), b'@');
        assert_eq!(lower(b'['), b'[');
        assert_eq!(lower(0xC4), 0xC4);
    }

    #[test]
    fn prefix_match_is_case_insensitive_and_bounded() {
        assert!(starts_with_ignore_case_at(b"x<MeTa ", 1, b"<meta"));
        assert!(!starts_with_ignore_case_at(b"<met", 0, b"<meta"));
        assert!(!starts_with_ignore_case_at(b"<m\xC5ta", 0, b"<meta"));
    }

    #[test]
    fn find_handles_mixed_case_and_overlaps() {
        assert_eq!(find_ignore_case(b"text/html; CharSet=x", b"charset"), Some(11));
        assert_eq!(find_ignore_case(b"ccharset", b"charset"), Some(1));
        assert_eq!(find_ignore_case(b"charse", b"charset"), None);
        assert_eq!(find_ignore_case(b"abc", b""), Some(0));
        assert_eq!(find_ignore_case(b"a;b", b";"), Some(1));
    }

    #[test]
    fn skip_whitespace_stops_at_end() {
        assert_eq!(skip_whitespace(b"  \t=", 0), 3);
        assert_eq!(skip_whitespace(b"   ", 1), 3);
    }
}
