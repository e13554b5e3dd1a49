//! Book line grammars.
//!
//! Kindle writes the book line as either `Title (Author)` or `Title - Author`.
//! Titles may themselves contain parentheses or ` - ` separators, so both
//! grammars bind the author to the *last* group on the line.

use std::sync::LazyLock;

use regex::Regex;

use super::normalize::normalize_line;
use crate::models::Book;

static PARENTHESIZED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<title>.+)\((?P<author>[^()]+)\)\s*$").expect("valid book regex")
});

static DASH_SEPARATED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<title>.+) - (?P<author>.+)$").expect("valid book regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BookGrammar {
    /// `Title (Subtitle) (Author)`
    Parenthesized,
    /// `Title - Part 2 - Author`
    DashSeparated,
}

impl BookGrammar {
    /// Grammars in the order they are tried
    const PRIORITY: [BookGrammar; 2] = [BookGrammar::Parenthesized, BookGrammar::DashSeparated];

    fn pattern(self) -> &'static Regex {
        match self {
            BookGrammar::Parenthesized => &PARENTHESIZED_RE,
            BookGrammar::DashSeparated => &DASH_SEPARATED_RE,
        }
    }

    fn parse(self, line: &str) -> Option<Book> {
        let captures = self.pattern().captures(line)?;
        Some(Book::new(captures["title"].trim(), captures["author"].trim()))
    }
}

/// Parse a book line into title and author
///
/// Returns `None` when no grammar matches. That is not an error here: the
/// clipping is still assembled and validation reports the missing book.
pub fn parse_book_line(line: &str) -> Option<Book> {
    let line = normalize_line(line);
    BookGrammar::PRIORITY.iter().find_map(|grammar| grammar.parse(&line))
}
