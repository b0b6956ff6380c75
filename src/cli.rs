use clap::Parser;
use std::path::PathBuf;

/// Resolves the installed version of an npm package from the nearest node_modules
#[derive(Parser, Debug)]
#[command(name = "pkgver")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Package name, e.g. lodash or @types/node
    #[arg(value_parser = parse_package_name)]
    pub package: String,

    /// Directory to start the search from (defaults to the current directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Output the result as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_package_name(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        return Err("Package name cannot be empty".to_string());
    }
    Ok(s.to_string())
}
