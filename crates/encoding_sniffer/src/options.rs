//! Per-call sniffing configuration.

use crate::labels::LabelResolver;
use crate::name::EncodingName;

/// Hints and defaults for one sniff call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SniffOptions {
    /// Label from the transport layer, e.g. the `charset` parameter of a
    /// `Content-Type` header.
    pub transport_layer_encoding_label: Option<String>,
    /// Label used when nothing else decides. `None` means `windows-1252`, or
    /// `UTF-8` in XML mode.
    pub default_encoding: Option<String>,
    /// XML documents skip the `<meta>` prescan.
    pub xml: bool,
    /// Let a BOM beat the transport label, as the HTML standard orders it.
    /// Off by default: a resolvable transport label always wins.
    pub bom_overrides_transport: bool,
}

impl SniffOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transport_layer_encoding_label(mut self, label: impl Into<String>) -> Self {
        self.transport_layer_encoding_label = Some(label.into());
        self
    }

    pub fn with_default_encoding(mut self, label: impl Into<String>) -> Self {
        self.default_encoding = Some(label.into());
        self
    }

    pub fn with_xml(mut self, xml: bool) -> Self {
        self.xml = xml;
        self
    }

    pub fn with_bom_overrides_transport(mut self, enabled: bool) -> Self {
        self.bom_overrides_transport = enabled;
        self
    }

    /// Hardcoded last resort for the current mode.
    pub fn fallback_encoding(&self) -> EncodingName {
        if self.xml {
            EncodingName::UTF_8
        } else {
            EncodingName::WINDOWS_1252
        }
    }

    /// The default encoding, resolved. Unresolvable labels fall back to
    /// [`SniffOptions::fallback_encoding`].
    pub fn resolved_default(&self, resolver: &impl LabelResolver) -> EncodingName {
        self.default_encoding
            .as_deref()
            .and_then(|label| resolver.resolve_label(label.as_bytes()))
            .unwrap_or_else(|| self.fallback_encoding())
    }

    /// Check every label up front. Sniffing never fails on bad labels; this is
    /// for callers that want to reject misconfiguration early.
    pub fn validate(&self, resolver: &impl LabelResolver) -> Result<(), OptionsError> {
        if let Some(label) = self.default_encoding.as_deref()
            && resolver.resolve_label(label.as_bytes()).is_none()
        {
            return Err(OptionsError::UnknownDefaultEncoding {
                label: label.to_string(),
            });
        }
        if let Some(label) = self.transport_layer_encoding_label.as_deref()
            && resolver.resolve_label(label.as_bytes()).is_none()
        {
            return Err(OptionsError::UnknownTransportLabel {
                label: label.to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionsError {
    UnknownDefaultEncoding { label: String },
    UnknownTransportLabel { label: String },
}

impl std::fmt::Display for OptionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionsError::UnknownDefaultEncoding { label } => {
                write!(f, "unknown default encoding label: {label:?}")
            }
            OptionsError::UnknownTransportLabel { label } => {
                write!(f, "unknown transport layer encoding label: {label:?}")
            }
        }
    }
}

impl std::error::Error for OptionsError {}
