//! Encoding sniffing for HTML and XML byte streams.
//!
//! Picks the encoding to decode a document with, in order: a resolvable
//! transport-layer label, a byte order mark, a `<meta>` declaration within the
//! first 1024 bytes (HTML only), and finally the configured default.
//!
//! ```
//! use encoding_sniffer::{SniffOptions, sniff};
//!
//! let html = b"<!doctype html><meta charset=\"koi8-r\"><p>\xF0\xD2\xC9\xD7\xC5\xD4";
//! assert_eq!(sniff(html, &SniffOptions::default()), "KOI8-R");
//!
//! let opts = SniffOptions::new().with_transport_layer_encoding_label("windows-1251");
//! assert_eq!(sniff(html, &opts), "windows-1251");
//! ```
//!
//! Sniffing is a pure function of its inputs: no I/O, no shared state, and it
//! never fails.

mod bom;
mod labels;
mod name;
mod options;
mod prescan;
mod sniff;

pub use crate::bom::Bom;
pub use crate::labels::{LabelResolver, WhatwgLabels};
pub use crate::name::EncodingName;
pub use crate::options::{OptionsError, SniffOptions};
pub use crate::prescan::{PRESCAN_LIMIT, scan_for_meta_charset, scan_for_meta_charset_with};
pub use crate::sniff::{
    Confidence, EncodingSource, Sniffed, sniff, sniff_detailed, sniff_detailed_with, sniff_with,
};
