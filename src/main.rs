use anyhow::Result;
use clap::Parser;

use pip_licenses::cli::Cli;
use pip_licenses::distribution::{find_installed, find_site_packages_path};
use pip_licenses::license::{dump_licenses, extract_record, DumpOptions};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let site_packages = find_site_packages_path(cli.path)?;
    let installed = find_installed(&site_packages)?;
    let records = installed.iter().map(extract_record).collect();

    let options = DumpOptions {
        with_system: cli.with_system,
        with_authors: cli.with_authors,
        with_urls: cli.with_urls,
    };
    println!("{}", dump_licenses(records, &options));

    Ok(())
}
