//! Output formatting for JSON and text modes
//!
//! Provides the structured result type serialized for machine-readable
//! output; text rendering for humans lives at the call site.

use serde::Serialize;

/// Result of a resolve operation
#[derive(Debug, Serialize)]
pub struct ResolveResult {
    pub package: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub project_root: String,
    pub manifest_path: String,
}

impl ResolveResult {
    pub fn new(
        package: &str,
        version: Option<&str>,
        project_root: &str,
        manifest_path: &str,
    ) -> Self {
        Self {
            package: package.to_string(),
            version: version.map(|v| v.to_string()),
            project_root: project_root.to_string(),
            manifest_path: manifest_path.to_string(),
        }
    }
}

/// Print JSON output to stdout
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    }
}
