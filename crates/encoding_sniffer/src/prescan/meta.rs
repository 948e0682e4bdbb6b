//! Charset bookkeeping for a single `<meta>` element.

use memchr::memchr;
use tools::ascii::{find_ignore_case, is_html_whitespace, skip_whitespace};

use super::attribute::Attribute;
use crate::labels::LabelResolver;
use crate::name::EncodingName;

/// Attribute state accumulated while reading one `<meta>` tag.
#[derive(Debug, Default)]
pub(crate) struct MetaAttributes {
    seen: Vec<Vec<u8>>,
    got_pragma: bool,
    /// `None` until a `charset` or `content` attribute supplies a candidate.
    need_pragma: Option<bool>,
    charset: Option<EncodingName>,
}

impl MetaAttributes {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record one attribute. Returns the tag's encoding as soon as a `charset`
    /// attribute resolves; nothing later in the tag can override it.
    pub(crate) fn observe(
        &mut self,
        attr: Attribute,
        resolver: &impl LabelResolver,
    ) -> Option<EncodingName> {
        if self.seen.contains(&attr.name) {
            return None;
        }
        match attr.name.as_slice() {
            b"http-equiv" => {
                self.got_pragma = attr.value == b"content-type";
            }
            b"content" => {
                if self.charset.is_none()
                    && let Some(label) = extract_charset_from_content(&attr.value)
                    && let Some(name) = resolver.resolve_label(label)
                {
                    self.charset = Some(name);
                    self.need_pragma = Some(true);
                }
            }
            b"charset" => {
                if let Some(name) = resolver.resolve_label(&attr.value) {
                    self.charset = Some(name);
                    self.need_pragma = Some(false);
                    return Some(name);
                }
            }
            _ => {}
        }
        self.seen.push(attr.name);
        None
    }

    /// Verdict once the tag's attributes are exhausted.
    pub(crate) fn finish(self) -> Option<EncodingName> {
        match self.need_pragma? {
            true if !self.got_pragma => None,
            _ => self.charset,
        }
    }
}

/// Pull the charset label out of a `content` attribute value such as
/// `text/html; charset=koi8-r`.
///
/// <https://html.spec.whatwg.org/multipage/urls-and-fetching.html#algorithm-for-extracting-a-character-encoding-from-a-meta-element>
pub(crate) fn extract_charset_from_content(value: &[u8]) -> Option<&[u8]> {
    let mut pos = 0;
    let start = loop {
        let found = find_ignore_case(&value[pos..], b"charset")?;
        let after = skip_whitespace(value, pos + found + b"charset".len());
        if value.get(after) == Some(&b'=') {
            break skip_whitespace(value, after + 1);
        }
        // Not followed by `=`: search again from that byte.
        pos = after;
    };

    match *value.get(start)? {
        quote @ (b'"' | b'\'') => {
            let body = &value[start + 1..];
            let end = memchr(quote, body)?;
            Some(&body[..end])
        }
        _ => {
            let rest = &value[start..];
            let end = rest
                .iter()
                .position(|&b| is_html_whitespace(b) || b == b';')
                .unwrap_or(rest.len());
            Some(&rest[..end])
        }
    }
}
