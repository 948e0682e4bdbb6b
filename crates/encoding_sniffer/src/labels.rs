//! Label resolution: free-form encoding labels to canonical names.
//!
//! <https://encoding.spec.whatwg.org/#concept-encoding-get>

use crate::name::EncodingName;

/// Maps textual labels (as found in `Content-Type` headers or `<meta>` tags)
/// to canonical encoding names.
///
/// Implementations must be case-insensitive and ignore leading/trailing ASCII
/// whitespace.
pub trait LabelResolver {
    /// `None` means the label is unknown or names an unsupported encoding.
    fn resolve_label(&self, label: &[u8]) -> Option<EncodingName>;

    fn is_utf16_encoding(&self, name: EncodingName) -> bool {
        name == EncodingName::UTF_16LE || name == EncodingName::UTF_16BE
    }

    fn is_x_user_defined(&self, name: EncodingName) -> bool {
        name.as_str().eq_ignore_ascii_case(EncodingName::X_USER_DEFINED.as_str())
    }
}

impl<R: LabelResolver + ?Sized> LabelResolver for &R {
    fn resolve_label(&self, label: &[u8]) -> Option<EncodingName> {
        (**self).resolve_label(label)
    }

    fn is_utf16_encoding(&self, name: EncodingName) -> bool {
        (**self).is_utf16_encoding(name)
    }

    fn is_x_user_defined(&self, name: EncodingName) -> bool {
        (**self).is_x_user_defined(name)
    }
}

/// The WHATWG Encoding Standard label table, backed by `encoding_rs`.
///
/// Labels that map to the `replacement` encoding (e.g. `iso-2022-kr`) are
/// treated as unsupported.
#[derive(Clone, Copy, Debug, Default)]
pub struct WhatwgLabels;

impl LabelResolver for WhatwgLabels {
    fn resolve_label(&self, label: &[u8]) -> Option<EncodingName> {
        encoding_rs::Encoding::for_label_no_replacement(label).map(EncodingName::from)
    }

    fn is_utf16_encoding(&self, name: EncodingName) -> bool {
        name.to_encoding()
            .is_some_and(|e| e == encoding_rs::UTF_16LE || e == encoding_rs::UTF_16BE)
    }

    fn is_x_user_defined(&self, name: EncodingName) -> bool {
        name.to_encoding() == Some(encoding_rs::X_USER_DEFINED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_canonical_names_and_aliases() {
        let labels = WhatwgLabels;
        assert_eq!(labels.resolve_label(b"utf8"), Some(EncodingName::UTF_8));
        assert_eq!(labels.resolve_label(b"UTF-8"), Some(EncodingName::UTF_8));
        assert_eq!(labels.resolve_label(b"koi8-r").unwrap(), "KOI8-R");
        assert_eq!(labels.resolve_label(b"TIS-620").unwrap(), "windows-874");
        assert_eq!(labels.resolve_label(b"latin1").unwrap(), "windows-1252");
        assert_eq!(labels.resolve_label(b"ascii").unwrap(), "windows-1252");
        assert_eq!(labels.resolve_label(b"iso-8859-16").unwrap(), "ISO-8859-16");
        assert_eq!(labels.resolve_label(b"utf-16").unwrap(), "UTF-16LE");
    }

    #[test]
    fn trims_ascii_whitespace() {
        let labels = WhatwgLabels;
        assert_eq!(labels.resolve_label(b"  iso-8859-2 \t").unwrap(), "ISO-8859-2");
        assert_eq!(labels.resolve_label(b"\nwindows-1251\x0C").unwrap(), "windows-1251");
    }

    #[test]
    fn rejects_unknown_and_replacement_labels() {
        let labels = WhatwgLabels;
        assert_eq!(labels.resolve_label(b""), None);
        assert_eq!(labels.resolve_label(b"utf-9"), None);
        assert_eq!(labels.resolve_label(b"iso-2022-kr"), None);
        assert_eq!(labels.resolve_label(b"replacement"), None);
        assert_eq!(labels.resolve_label(b"utf-32"), None);
        assert_eq!(labels.resolve_label(b"\xC3\xA9"), None);
    }

    #[test]
    fn classifies_special_encodings() {
        let labels = WhatwgLabels;
        assert!(labels.is_utf16_encoding(EncodingName::UTF_16LE));
        assert!(labels.is_utf16_encoding(EncodingName::UTF_16BE));
        assert!(!labels.is_utf16_encoding(EncodingName::UTF_8));
        let xud = labels.resolve_label(b"x-user-defined").unwrap();
        assert!(labels.is_x_user_defined(xud));
        assert!(!labels.is_x_user_defined(EncodingName::WINDOWS_1252));
    }
}
