//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const SEPARATOR: &str = "==========";

/// Builder for a single five-line clipping group
#[derive(Clone)]
pub struct ClippingBuilder {
    book_line: String,
    metadata_line: String,
    content: String,
}

impl ClippingBuilder {
    /// A highlight with page and location
    pub fn highlight() -> Self {
        Self {
            book_line: "Dune (Frank Herbert)".to_string(),
            metadata_line: "- Your Highlight on page 14 | location 208 | Added on Tuesday, 26 July 2022 17:59:48".to_string(),
            content: "I must not fear.".to_string(),
        }
    }

    /// A note with location only
    pub fn note() -> Self {
        Self {
            book_line: "Dune (Frank Herbert)".to_string(),
            metadata_line: "- Your Note at location 123 | Added on Tuesday, 11 July 2023 15:50:10"
                .to_string(),
            content: "Fear is the mind-killer.".to_string(),
        }
    }

    /// Set the raw book line
    pub fn book_line(mut self, line: &str) -> Self {
        self.book_line = line.to_string();
        self
    }

    /// Set the raw metadata line
    pub fn metadata_line(mut self, line: &str) -> Self {
        self.metadata_line = line.to_string();
        self
    }

    /// Set the content line
    pub fn content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    /// The five lines of this group
    pub fn lines(&self) -> Vec<String> {
        vec![
            self.book_line.clone(),
            self.metadata_line.clone(),
            String::new(),
            self.content.clone(),
            SEPARATOR.to_string(),
        ]
    }
}

/// Builder for a `My Clippings.txt` file inside a temp directory
pub struct ClippingsFileBuilder {
    lines: Vec<String>,
    line_ending: &'static str,
    bom: bool,
}

impl ClippingsFileBuilder {
    pub fn new() -> Self {
        Self { lines: Vec::new(), line_ending: "\n", bom: false }
    }

    /// Append a complete clipping group
    pub fn with_clipping(mut self, clipping: ClippingBuilder) -> Self {
        self.lines.extend(clipping.lines());
        self
    }

    /// Append the first `count` lines of a group, leaving it incomplete
    pub fn with_partial_clipping(mut self, clipping: ClippingBuilder, count: usize) -> Self {
        self.lines.extend(clipping.lines().into_iter().take(count));
        self
    }

    /// Write CRLF line endings and a leading byte-order mark, as Kindle does
    pub fn kindle_style(mut self) -> Self {
        self.line_ending = "\r\n";
        self.bom = true;
        self
    }

    pub fn contents(&self) -> String {
        let mut contents = String::new();
        if self.bom {
            contents.push('\u{feff}');
        }
        for line in &self.lines {
            contents.push_str(line);
            contents.push_str(self.line_ending);
        }
        contents
    }

    /// Write the file into a fresh temp directory
    pub fn build(self) -> ClippingsFixture {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("My Clippings.txt");
        fs::write(&path, self.contents()).expect("Failed to write clippings file");
        ClippingsFixture { dir, path }
    }
}

impl Default for ClippingsFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A clippings file on disk; removed when dropped
pub struct ClippingsFixture {
    dir: TempDir,
    path: PathBuf,
}

impl ClippingsFixture {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

/// Three clippings from two books, covering both book and metadata grammars
pub fn realistic_clippings() -> ClippingsFileBuilder {
    ClippingsFileBuilder::new()
        .kindle_style()
        .with_clipping(ClippingBuilder::highlight())
        .with_clipping(
            ClippingBuilder::note()
                .book_line("The Pragmatic Programmer - 20th Anniversary - David Thomas")
                .content("Care\u{a0}about your craft."),
        )
        .with_clipping(
            ClippingBuilder::highlight()
                .book_line("Sapiens (A Brief History of Humankind) (Yuval Noah Harari)")
                .metadata_line(
                    "- Your Highlight on page 101-102 | location 1540-1545 | Added on Monday, 2 January 2023 09:05:01",
                )
                .content("  Money is the most universal system of mutual trust.  "),
        )
}
