//! Fixture manifests for encoding sniffer tests and benchmarks.

use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FORMAT: &str = "sniff-manifest-v1";

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    #[default]
    Active,
    Skip,
}

/// One fixture run: the bytes of `fixture` sniffed with the given options
/// must produce `expected`.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SniffCase {
    pub id: String,
    pub fixture: PathBuf,
    pub expected: String,
    pub transport_label: Option<String>,
    pub default_encoding: Option<String>,
    #[serde(default)]
    pub xml: bool,
    #[serde(default)]
    pub bom_overrides_transport: bool,
    #[serde(default)]
    pub status: CaseStatus,
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Manifest {
    format: String,
    #[serde(rename = "case", default)]
    cases: Vec<SniffCase>,
}

/// Load and validate a manifest. Fixture paths are resolved relative to the
/// manifest's directory. Panics on any inconsistency.
pub fn load_manifest(path: &Path) -> Vec<SniffCase> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read sniff manifest {path:?}: {err}"));
    let manifest: Manifest = toml::from_str(&content)
        .unwrap_or_else(|err| panic!("invalid sniff manifest {path:?}: {err}"));
    if manifest.format != MANIFEST_FORMAT {
        panic!(
            "unsupported manifest format '{}' in {path:?}",
            manifest.format
        );
    }
    let root = path
        .parent()
        .unwrap_or_else(|| panic!("manifest has no parent directory"));

    let mut ids = BTreeSet::new();
    let mut cases = Vec::with_capacity(manifest.cases.len());
    for mut case in manifest.cases {
        if !ids.insert(case.id.clone()) {
            panic!("duplicate case id '{}' in {path:?}", case.id);
        }
        match case.status {
            CaseStatus::Active => {
                if case.reason.is_some() {
                    panic!("case '{}' has reason but is not skipped in {path:?}", case.id);
                }
            }
            CaseStatus::Skip => {
                if case.reason.as_deref().unwrap_or("").is_empty() {
                    panic!("skipped case '{}' missing reason in {path:?}", case.id);
                }
            }
        }
        case.fixture = root.join(&case.fixture);
        if !case.fixture.is_file() {
            panic!("fixture missing for '{}': {:?}", case.id, case.fixture);
        }
        cases.push(case);
    }
    cases
}

pub fn read_fixture(case: &SniffCase) -> Vec<u8> {
    fs::read(&case.fixture)
        .unwrap_or_else(|err| panic!("failed to read fixture {:?}: {err}", case.fixture))
}

/// Printable rendering of a byte prefix for failure messages.
pub fn escape_bytes(bytes: &[u8], limit: usize) -> String {
    use std::fmt::Write;
    let mut out = String::with_capacity(limit.min(bytes.len()) + 8);
    for &b in bytes.iter().take(limit) {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'"' => out.push_str("\\\""),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            0x20..=0x7E => out.push(b as char),
            _ => {
                let _ = write!(&mut out, "\\x{b:02X}");
            }
        }
    }
    if bytes.len() > limit {
        out.push_str("...");
    }
    out
}
