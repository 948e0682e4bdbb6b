//! Encoding decision for a whole document.

use crate::bom::Bom;
use crate::labels::{LabelResolver, WhatwgLabels};
use crate::name::EncodingName;
use crate::options::SniffOptions;
use crate::prescan::scan_for_meta_charset_with;

const LOG_TARGET: &str = "encoding_sniffer.sniff";

/// Where the chosen encoding came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingSource {
    TransportLayer,
    ByteOrderMark,
    MetaPrescan,
    Default,
}

/// <https://html.spec.whatwg.org/multipage/parsing.html#concept-encoding-confidence>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Confidence {
    Certain,
    Tentative,
}

/// Sniffing outcome with its provenance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sniffed {
    pub encoding: EncodingName,
    pub source: EncodingSource,
}

impl Sniffed {
    /// A tentative encoding may still be changed by a parser that later finds
    /// a conflicting declaration.
    pub fn confidence(&self) -> Confidence {
        match self.source {
            EncodingSource::TransportLayer | EncodingSource::ByteOrderMark => Confidence::Certain,
            EncodingSource::MetaPrescan | EncodingSource::Default => Confidence::Tentative,
        }
    }
}

/// Determine the encoding of `bytes` with the WHATWG label table.
pub fn sniff(bytes: &[u8], options: &SniffOptions) -> EncodingName {
    sniff_detailed_with(bytes, options, &WhatwgLabels).encoding
}

/// [`sniff`] with a caller-supplied label resolver.
pub fn sniff_with(
    bytes: &[u8],
    options: &SniffOptions,
    resolver: &impl LabelResolver,
) -> EncodingName {
    sniff_detailed_with(bytes, options, resolver).encoding
}

/// [`sniff`], also reporting where the encoding came from.
pub fn sniff_detailed(bytes: &[u8], options: &SniffOptions) -> Sniffed {
    sniff_detailed_with(bytes, options, &WhatwgLabels)
}

/// Transport label, then BOM, then (HTML only) the `<meta>` prescan, then
/// the default. Never fails.
pub fn sniff_detailed_with(
    bytes: &[u8],
    options: &SniffOptions,
    resolver: &impl LabelResolver,
) -> Sniffed {
    let bom = || {
        Bom::detect(bytes).map(|bom| Sniffed {
            encoding: bom.encoding(),
            source: EncodingSource::ByteOrderMark,
        })
    };

    let decided = options
        .bom_overrides_transport
        .then(bom)
        .flatten()
        .or_else(|| transport_layer(options, resolver))
        .or_else(bom)
        .or_else(|| {
            if options.xml {
                return None;
            }
            scan_for_meta_charset_with(bytes, resolver).map(|encoding| Sniffed {
                encoding,
                source: EncodingSource::MetaPrescan,
            })
        })
        .unwrap_or_else(|| Sniffed {
            encoding: options.resolved_default(resolver),
            source: EncodingSource::Default,
        });

    log::debug!(
        target: LOG_TARGET,
        "sniffed {} from {:?} (xml={}, {} bytes)",
        decided.encoding,
        decided.source,
        options.xml,
        bytes.len()
    );
    decided
}

fn transport_layer(options: &SniffOptions, resolver: &impl LabelResolver) -> Option<Sniffed> {
    let label = options.transport_layer_encoding_label.as_deref()?;
    let resolved = resolver.resolve_label(label.as_bytes());
    if resolved.is_none() {
        log::debug!(target: LOG_TARGET, "ignoring unknown transport label {label:?}");
    }
    resolved.map(|encoding| Sniffed {
        encoding,
        source: EncodingSource::TransportLayer,
    })
}
