//! Data models for Kindle clippings.
//!
//! - [`Book`] - Title and author resolved from a clipping's first line
//! - [`Clipping`] - One finalized highlight, note or bookmark
//! - [`ClippingErrors`] - Missing-field diagnostics attached at validation time
//!
//! Timestamps are serialized as `YYYY-MM-DD HH:MM:SS` strings by the
//! [`timestamp`] module.

pub mod clipping;
pub mod timestamp;

pub use clipping::{Book, Clipping, ClippingErrors};
