pub mod cli;
pub mod distribution;
pub mod license;
pub mod output;

// Re-export main types for easy access
pub use distribution::InstalledDistribution;
pub use license::{DumpOptions, PackageRecord};
pub use output::Column;
