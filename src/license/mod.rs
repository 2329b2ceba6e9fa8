use crate::output::{render_table, Column};

pub mod extractor;

// Re-export from extractor
pub use extractor::extract_record;

/// Placeholder for any metadata field that cannot be determined.
pub const UNKNOWN: &str = "UNKNOWN";

/// Toolchain packages excluded from the dump unless explicitly requested.
pub const SYSTEM_PACKAGES: [&str; 4] = ["pip", "PTable", "setuptools", "wheel"];

/// Metadata header fields tracked per package, in record-field order
/// (homepage, author, license).
pub const METADATA_FIELDS: [&str; 3] = ["home-page", "author", "license"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    pub name: String,
    pub version: String,
    /// Conventional `<name>-<version>` label shown in the Package column.
    pub display_name: String,
    pub license: String,
    pub author: String,
    pub homepage: String,
}

#[derive(Debug, Clone, Default)]
pub struct DumpOptions {
    pub with_system: bool,
    pub with_authors: bool,
    pub with_urls: bool,
}

/// Drop records for reserved system packages unless `with_system` is set.
/// Matching is exact and case-sensitive against `name`; the relative order
/// of surviving records is preserved.
pub fn filter_system_packages(
    records: Vec<PackageRecord>,
    with_system: bool,
) -> Vec<PackageRecord> {
    if with_system {
        return records;
    }
    records
        .into_iter()
        .filter(|record| !SYSTEM_PACKAGES.contains(&record.name.as_str()))
        .collect()
}

/// Filter and render the license table.
///
/// Every record carries Author and URL cells, but the displayed column
/// subset is currently fixed to Package and License; the `with_authors`
/// and `with_urls` options are accepted without affecting the output.
pub fn dump_licenses(records: Vec<PackageRecord>, options: &DumpOptions) -> String {
    let records = filter_system_packages(records, options.with_system);
    render_table(&records, &[Column::Package, Column::License])
}
