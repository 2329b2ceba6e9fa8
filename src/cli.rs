use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pip-licenses")]
#[command(about = "Dump the license list of installed Python packages")]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Path to site-packages directory or virtual environment
    pub path: Option<PathBuf>,

    /// Print program version and exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Dump with system packages
    #[arg(short = 's', long)]
    pub with_system: bool,

    /// Dump with package authors
    #[arg(short = 'a', long)]
    pub with_authors: bool,

    /// Dump with package urls
    #[arg(short = 'u', long)]
    pub with_urls: bool,
}
