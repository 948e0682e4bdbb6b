//! Canonical encoding names.

use std::fmt;

/// Canonical encoding identifier, e.g. `"UTF-8"` or `"windows-1252"`.
///
/// Names come from a fixed registry owned by a [`LabelResolver`]; this type
/// never holds a user-typed label.
///
/// [`LabelResolver`]: crate::LabelResolver
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EncodingName(&'static str);

impl EncodingName {
    pub const UTF_8: Self = Self("UTF-8");
    pub const UTF_16LE: Self = Self("UTF-16LE");
    pub const UTF_16BE: Self = Self("UTF-16BE");
    pub const WINDOWS_1252: Self = Self("windows-1252");
    pub const X_USER_DEFINED: Self = Self("x-user-defined");

    /// Wrap a canonical name taken from a resolver's registry.
    pub const fn from_static(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// The `encoding_rs` encoding with this name, for decoding.
    pub fn to_encoding(self) -> Option<&'static encoding_rs::Encoding> {
        encoding_rs::Encoding::for_label(self.0.as_bytes())
    }
}

impl fmt::Display for EncodingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for EncodingName {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl From<&'static encoding_rs::Encoding> for EncodingName {
    fn from(encoding: &'static encoding_rs::Encoding) -> Self {
        Self(encoding.name())
    }
}

impl PartialEq<str> for EncodingName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EncodingName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<EncodingName> for &str {
    fn eq(&self, other: &EncodingName) -> bool {
        *self == other.0
    }
}
