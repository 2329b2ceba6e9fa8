use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::license::UNKNOWN;

/// Handle to one locally installed distribution, backed by its
/// `.dist-info` or `.egg-info` directory in site-packages.
#[derive(Debug, Clone)]
pub struct InstalledDistribution {
    name: String,
    version: String,
    info_dir: PathBuf,
}

impl InstalledDistribution {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Read a raw metadata record (e.g. `METADATA` or `PKG-INFO`) shipped
    /// with the distribution. `None` when the record does not exist or
    /// cannot be read.
    pub fn read_metadata(&self, record_name: &str) -> Option<String> {
        fs::read_to_string(self.info_dir.join(record_name)).ok()
    }
}

/// Resolve the site-packages directory to scan.
///
/// An explicit path is accepted as-is, as a `site-packages` directory, or as
/// a directory containing one. Without a path, a `.venv` in the current
/// directory is probed (Unix and Windows layouts).
pub fn find_site_packages_path(path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = path {
        if path.join("site-packages").exists() {
            return Ok(path.join("site-packages"));
        }
        return Ok(path);
    }

    let current_dir = std::env::current_dir()?;
    let venv_path = current_dir.join(".venv");

    if venv_path.exists() {
        // Unix-like systems
        let lib_path = venv_path.join("lib");
        if lib_path.exists() {
            for entry in fs::read_dir(&lib_path)? {
                let entry = entry?;
                if entry.file_name().to_string_lossy().starts_with("python") {
                    let site_packages = entry.path().join("site-packages");
                    if site_packages.exists() {
                        return Ok(site_packages);
                    }
                }
            }
        }

        // Windows
        let lib_path = venv_path.join("Lib").join("site-packages");
        if lib_path.exists() {
            return Ok(lib_path);
        }
    }

    anyhow::bail!("Could not find site-packages directory. Please pass its path as an argument")
}

/// Enumerate installed distributions, sorted by name.
pub fn find_installed(site_packages_path: &Path) -> Result<Vec<InstalledDistribution>> {
    let mut dists = Vec::new();

    for entry in fs::read_dir(site_packages_path)
        .with_context(|| format!("Failed to read {}", site_packages_path.display()))?
    {
        let entry = entry?;
        let file_name = entry.file_name();
        let name_str = file_name.to_string_lossy();

        let stem = if let Some(stem) = name_str.strip_suffix(".dist-info") {
            stem
        } else if let Some(stem) = name_str.strip_suffix(".egg-info") {
            stem
        } else {
            continue;
        };

        let (name, version) = split_name_version(stem);
        dists.push(InstalledDistribution {
            name,
            version,
            info_dir: entry.path(),
        });
    }

    dists.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(dists)
}

/// Split a `<name>-<version>` info-directory stem on its last dash. A stem
/// without a dash has no recoverable version.
fn split_name_version(stem: &str) -> (String, String) {
    match stem.rfind('-') {
        Some(last_dash) => (
            stem[..last_dash].to_string(),
            stem[last_dash + 1..].to_string(),
        ),
        None => (stem.to_string(), UNKNOWN.to_string()),
    }
}
