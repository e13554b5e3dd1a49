//! Parsers for Kindle `My Clippings.txt` exports
//!
//! # Format
//!
//! Every clipping spans a fixed group of five lines:
//!
//! ```text
//! Dune (Frank Herbert)
//! - Your Highlight on page 14 | location 208-210 | Added on Tuesday, 26 July 2022 17:59:48
//!
//! I must not fear.
//! ==========
//! ```
//!
//! # Error Handling Strategy
//!
//! - **Line-level misses**: A book or metadata line that matches none of its grammars yields
//!   no data. The cycle carries on and the gap shows up as a validation error on that
//!   clipping, which is still emitted.
//!
//! - **Truncated input**: A final group with fewer than five lines is dropped. The number of
//!   dropped lines is reported through [`ParseOutcome::trailing_lines`] so callers can warn.
//!
//! - **Stream failures**: Failing to open or read the input is a [`ParseError`] and aborts
//!   the batch entry points before any clippings are returned.
//!
//! Nothing in this module prints; reporting is left to the caller.

pub mod book;
pub mod clippings;
pub mod content;
pub mod engine;
pub mod error;
pub mod metadata;
pub mod normalize;
pub mod record;
pub mod validator;

pub use book::parse_book_line;
pub use clippings::{Clippings, ParseOutcome, parse_clippings, parse_clippings_file};
pub use content::parse_content_line;
pub use engine::{ClippingsEngine, CyclePosition};
pub use error::ParseError;
pub use metadata::{ClippingMetadata, parse_metadata_line};
pub use normalize::normalize_line;
pub use record::WorkingRecord;
pub use validator::validate_fields;
