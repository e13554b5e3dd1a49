use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use super::engine::ClippingsEngine;
use super::error::ParseError;
use crate::models::Clipping;
use crate::utils::open_input_file;

/// Result of parsing a whole clippings export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Clippings in the order they appear in the input
    pub clippings: Vec<Clipping>,
    /// Lines of an incomplete final group that were dropped
    pub trailing_lines: usize,
}

impl ParseOutcome {
    pub fn is_truncated(&self) -> bool {
        self.trailing_lines > 0
    }

    pub fn invalid_count(&self) -> usize {
        self.clippings.iter().filter(|c| !c.is_valid()).count()
    }
}

/// Iterator yielding each clipping as soon as its separator line is read
///
/// Stops after the first read error.
pub struct Clippings<R> {
    lines: Lines<R>,
    engine: ClippingsEngine,
    line_number: usize,
    done: bool,
}

impl<R: BufRead> Clippings<R> {
    pub fn new(reader: R) -> Self {
        Self { lines: reader.lines(), engine: ClippingsEngine::new(), line_number: 0, done: false }
    }

    /// Lines read since the last emitted clipping
    pub fn trailing_lines(&self) -> usize {
        self.engine.pending_lines()
    }
}

impl<R: BufRead> Iterator for Clippings<R> {
    type Item = Result<Clipping, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for line in self.lines.by_ref() {
            self.line_number += 1;
            let line = match line {
                Ok(line) => line,
                Err(source) => {
                    self.done = true;
                    return Some(Err(ParseError::Read { line: self.line_number, source }));
                }
            };

            if let Some(clipping) = self.engine.feed_line(&line) {
                return Some(Ok(clipping));
            }
        }

        self.done = true;
        None
    }
}

/// Parse every complete clipping from `reader`
pub fn parse_clippings<R: BufRead>(reader: R) -> Result<ParseOutcome, ParseError> {
    let mut clippings = Clippings::new(reader);
    let parsed = clippings.by_ref().collect::<Result<Vec<_>, _>>()?;
    Ok(ParseOutcome { clippings: parsed, trailing_lines: clippings.trailing_lines() })
}

/// Open and parse a `My Clippings.txt` file
pub fn parse_clippings_file(path: &Path) -> Result<ParseOutcome, ParseError> {
    let file = open_input_file(path)?;
    parse_clippings(BufReader::new(file))
}
