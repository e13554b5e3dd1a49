//! Output writers for parsed clippings
//!
//! Both writers take the full clipping sequence and a destination path,
//! creating missing parent directories. Any I/O failure at the destination is
//! reported as [`WriteError::DestinationNotWritable`]; serialization failures
//! keep their own variants.

pub mod excel;
pub mod json;

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::models::Clipping;

pub use excel::write_excel;
pub use json::write_json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Excel,
}

impl OutputFormat {
    pub fn default_file_name(self) -> &'static str {
        match self {
            OutputFormat::Json => "Clippings.json",
            OutputFormat::Excel => "Clippings.xlsx",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Excel => f.write_str("excel"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("Destination not writable: {}: {source}", .path.display())]
    DestinationNotWritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize clippings to JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to build spreadsheet: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
}

/// Write `clippings` to `destination` in the selected format
pub fn write_clippings(
    format: OutputFormat,
    clippings: &[Clipping],
    destination: &Path,
) -> Result<(), WriteError> {
    match format {
        OutputFormat::Json => write_json(clippings, destination),
        OutputFormat::Excel => write_excel(clippings, destination),
    }
}

/// Create parent directories and write `bytes` to `destination`
pub(crate) fn write_destination(destination: &Path, bytes: &[u8]) -> Result<(), WriteError> {
    let not_writable =
        |source| WriteError::DestinationNotWritable { path: destination.to_path_buf(), source };

    if let Some(parent) = destination.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(not_writable)?;
    }

    fs::write(destination, bytes).map_err(not_writable)
}
