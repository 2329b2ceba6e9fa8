use indexmap::IndexMap;

use super::{PackageRecord, METADATA_FIELDS, UNKNOWN};
use crate::distribution::InstalledDistribution;

/// Metadata record names probed per distribution, in order. A later
/// candidate replaces an earlier one when both are present.
const METADATA_CANDIDATES: [&str; 2] = ["METADATA", "PKG-INFO"];

/// Build the normalized record for one installed distribution. A missing or
/// unparsable metadata record degrades the tracked fields to `UNKNOWN`; it
/// is never an error.
pub fn extract_record(dist: &InstalledDistribution) -> PackageRecord {
    let mut blob = None;
    for candidate in METADATA_CANDIDATES {
        if let Some(content) = dist.read_metadata(candidate) {
            blob = Some(content);
        }
    }

    let headers = match &blob {
        Some(content) => parse_headers(content),
        None => IndexMap::new(),
    };

    let [homepage, author, license] = METADATA_FIELDS
        .map(|field| headers.get(field).cloned().unwrap_or_else(|| UNKNOWN.to_string()));

    PackageRecord {
        name: dist.name().to_string(),
        version: dist.version().to_string(),
        display_name: format!("{}-{}", dist.name(), dist.version()),
        license,
        author,
        homepage,
    }
}

/// Tolerant parser for RFC822-style `Key: Value` metadata headers.
///
/// Headers end at the first blank line; continuation lines (leading
/// whitespace) fold into the preceding value; lines without a colon are
/// dropped. Keys are lowercased and the first occurrence of a key wins,
/// matching the lookup semantics of Python's email parser. Never fails:
/// malformed input yields partial results.
fn parse_headers(content: &str) -> IndexMap<String, String> {
    let mut headers: IndexMap<String, String> = IndexMap::new();
    let mut current: Option<(String, String)> = None;

    for line in content.lines() {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.is_empty() {
            // Body text follows the header block; stop here.
            break;
        }

        if line.starts_with(' ') || line.starts_with('\t') {
            if let Some((_, value)) = current.as_mut() {
                value.push(' ');
                value.push_str(line.trim_start());
            }
            continue;
        }

        if let Some((key, value)) = current.take() {
            headers.entry(key).or_insert(value);
        }

        current = line.split_once(':').map(|(key, value)| {
            (key.trim().to_ascii_lowercase(), value.trim().to_string())
        });
    }

    if let Some((key, value)) = current {
        headers.entry(key).or_insert(value);
    }

    headers
}
