//! Byte-level prescan for a `<meta>` encoding declaration.
//!
//! Runs on raw bytes before any decoding, so every comparison is ASCII-only
//! and non-ASCII bytes never match a token.
//!
//! <https://html.spec.whatwg.org/multipage/parsing.html#prescan-a-byte-stream-to-determine-its-encoding>
//!
//! Invariants:
//! - Only the first [`PRESCAN_LIMIT`] bytes are examined.
//! - The first `<meta>` that yields a decision ends the scan.
//! - Malformed or truncated markup never errors; it just yields no decision.

mod attribute;
mod cursor;
mod meta;

use tools::ascii::is_html_whitespace;

use crate::labels::{LabelResolver, WhatwgLabels};
use crate::name::EncodingName;
use attribute::next_attribute;
use cursor::ScanCursor;
use meta::MetaAttributes;

/// Number of leading bytes the prescan looks at.
pub const PRESCAN_LIMIT: usize = 1024;

const LOG_TARGET: &str = "encoding_sniffer.prescan";

/// Prescan with the WHATWG label table.
pub fn scan_for_meta_charset(bytes: &[u8]) -> Option<EncodingName> {
    scan_for_meta_charset_with(bytes, &WhatwgLabels)
}

/// [`scan_for_meta_charset`] with a caller-supplied label resolver.
pub fn scan_for_meta_charset_with(
    bytes: &[u8],
    resolver: &impl LabelResolver,
) -> Option<EncodingName> {
    let mut cur = ScanCursor::new(bytes);

    while cur.seek(b'<') {
        let start = cur.pos();

        if cur.starts_with(b"<!--") {
            // The closing `--` may overlap the opener, so `<!-->` is complete.
            if !cur.skip_past(2, b"-->") {
                log::trace!(target: LOG_TARGET, "unterminated comment at {start}");
                return None;
            }
            log::trace!(target: LOG_TARGET, "skipped comment {start}..{}", cur.pos());
            continue;
        }

        if cur.starts_with_ignore_case(b"<meta")
            && cur
                .peek_at(5)
                .is_some_and(|b| is_html_whitespace(b) || b == b'/')
        {
            cur.bump(6);
            if let Some(found) = read_meta(&mut cur, resolver) {
                let remapped = remap(found, resolver);
                log::trace!(
                    target: LOG_TARGET,
                    "<meta> at {start} declares {found}, using {remapped}"
                );
                return Some(remapped);
            }
            log::trace!(target: LOG_TARGET, "<meta> at {start} has no usable charset");
            cur.bump(1);
            continue;
        }

        match (cur.peek_at(1), cur.peek_at(2)) {
            (Some(b), _) if b.is_ascii_alphabetic() => {
                cur.bump(2);
                skip_tag(&mut cur);
            }
            (Some(b'/'), Some(b)) if b.is_ascii_alphabetic() => {
                cur.bump(3);
                skip_tag(&mut cur);
            }
            (Some(b'!' | b'/' | b'?'), _) => {
                cur.bump(2);
                if !cur.seek(b'>') {
                    return None;
                }
                cur.bump(1);
            }
            _ => cur.bump(1),
        }
    }

    log::trace!(target: LOG_TARGET, "no declaration in first {} bytes", cur.pos());
    None
}

/// Read the attributes of a `<meta>` whose name has been consumed.
fn read_meta(cur: &mut ScanCursor<'_>, resolver: &impl LabelResolver) -> Option<EncodingName> {
    let mut meta = MetaAttributes::new();
    while let Some(attr) = next_attribute(cur) {
        if let Some(found) = meta.observe(attr, resolver) {
            return Some(found);
        }
    }
    meta.finish()
}

/// Skip an ordinary start or end tag, including its attributes, so quoted
/// values cannot be mistaken for markup.
fn skip_tag(cur: &mut ScanCursor<'_>) {
    while let Some(b) = cur.peek() {
        if is_html_whitespace(b) || b == b'>' {
            break;
        }
        cur.bump(1);
    }
    while next_attribute(cur).is_some() {}
    cur.bump(1);
}

/// A document cannot really declare itself UTF-16 or x-user-defined from
/// inside ASCII-compatible markup.
fn remap(name: EncodingName, resolver: &impl LabelResolver) -> EncodingName {
    if resolver.is_utf16_encoding(name) {
        EncodingName::UTF_8
    } else if resolver.is_x_user_defined(name) {
        EncodingName::WINDOWS_1252
    } else {
        name
    }
}
