//! Kindle Clippings - Convert Kindle `My Clippings.txt` exports
//!
//! This library parses the flat, five-lines-per-entry clippings export that
//! Kindle devices write and turns each entry into a structured [`Clipping`].
//! It supports:
//!
//! - Resolving book title and author from both `Title (Author)` and `Title - Author` lines
//! - Parsing clipping type, page, location and timestamp from metadata lines
//! - Validating every clipping for missing fields without dropping it
//! - Streaming clippings one at a time or parsing a whole file at once
//! - Writing the result as JSON or as a styled `.xlsx` spreadsheet
//!
//! # Example
//!
//! ```no_run
//! use kindle_clippings::{parse_clippings_file, write_clippings, OutputFormat};
//! use std::path::Path;
//!
//! let outcome = parse_clippings_file(Path::new("My Clippings.txt"))?;
//! println!("Parsed {} clippings", outcome.clippings.len());
//! write_clippings(OutputFormat::Json, &outcome.clippings, Path::new("Clippings.json"))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod models;
pub mod parsers;
pub mod utils;
pub mod writers;

// Re-export commonly used types
pub use models::{Book, Clipping, ClippingErrors};
pub use parsers::{
    Clippings, ClippingsEngine, ParseError, ParseOutcome, parse_clippings, parse_clippings_file,
};
pub use utils::format_path_with_tilde;
pub use writers::{OutputFormat, WriteError, write_clippings};
