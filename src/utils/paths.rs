use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::writers::OutputFormat;

/// Name Kindle gives its export
pub const DEFAULT_INPUT_FILE: &str = "My Clippings.txt";

/// Input path, defaulting to `My Clippings.txt` in the current directory
pub fn resolve_input_path(input_path: Option<PathBuf>) -> Result<PathBuf> {
    match input_path {
        Some(path) => Ok(path),
        None => Ok(current_dir()?.join(DEFAULT_INPUT_FILE)),
    }
}

/// Output path, defaulting to `Clippings.<ext>` in the current directory
pub fn resolve_output_path(output_path: Option<PathBuf>, format: OutputFormat) -> Result<PathBuf> {
    match output_path {
        Some(path) => Ok(path),
        None => Ok(current_dir()?.join(format.default_file_name())),
    }
}

fn current_dir() -> Result<PathBuf> {
    env::current_dir().context("Failed to determine current directory")
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use kindle_clippings::format_path_with_tilde;
///
/// // Returns "~/Documents/My Clippings.txt" if HOME=/Users/alice
/// let formatted = format_path_with_tilde(Path::new("/Users/alice/Documents/My Clippings.txt"));
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    let home = env::var_os("HOME").map(PathBuf::from);
    format_with_home(path, home.as_deref())
}

pub(crate) fn format_with_home(path: &Path, home: Option<&Path>) -> String {
    match home.and_then(|home| path.strip_prefix(home).ok()) {
        Some(relative) if relative.as_os_str().is_empty() => "~".to_string(),
        Some(relative) => format!("~/{}", relative.display()),
        None => path.display().to_string(),
    }
}
