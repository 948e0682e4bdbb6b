//! Attribute reader for the prescan ("get an attribute").
//!
//! <https://html.spec.whatwg.org/multipage/parsing.html#concept-get-attributes-when-sniffing>

use memchr::memchr;
use tools::ascii::{is_html_whitespace, lower};

use super::cursor::ScanCursor;

/// One attribute with its name and value ASCII-lowercased.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Attribute {
    pub(crate) name: Vec<u8>,
    pub(crate) value: Vec<u8>,
}

/// Read the next attribute of the current tag.
///
/// Returns `None` when the tag ends (cursor left on `>`) or when the window
/// runs out before the attribute is complete.
pub(crate) fn next_attribute(cur: &mut ScanCursor<'_>) -> Option<Attribute> {
    loop {
        match cur.peek()? {
            b if is_html_whitespace(b) || b == b'/' => cur.bump(1),
            b'>' => return None,
            _ => break,
        }
    }

    let mut attr = Attribute::default();

    loop {
        let b = cur.peek()?;
        match b {
            b'=' if !attr.name.is_empty() => {
                cur.bump(1);
                break;
            }
            b if is_html_whitespace(b) => {
                cur.skip_whitespace();
                if cur.peek()? != b'=' {
                    return Some(attr);
                }
                cur.bump(1);
                break;
            }
            b'/' | b'>' => return Some(attr),
            _ => {
                attr.name.push(lower(b));
                cur.bump(1);
            }
        }
    }

    cur.skip_whitespace();
    match cur.peek()? {
        quote @ (b'"' | b'\'') => {
            cur.bump(1);
            let rest = cur.rest();
            // Unterminated quotes swallow the rest of the window.
            let Some(end) = memchr(quote, rest) else {
                cur.bump(rest.len());
                return None;
            };
            attr.value.extend(rest[..end].iter().map(|&c| lower(c)));
            cur.bump(end + 1);
            return Some(attr);
        }
        b'>' => return Some(attr),
        _ => {}
    }

    loop {
        let b = cur.peek()?;
        if is_html_whitespace(b) || b == b'>' {
            return Some(attr);
        }
        attr.value.push(lower(b));
        cur.bump(1);
    }
}
