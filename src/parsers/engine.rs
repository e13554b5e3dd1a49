//! Five-line cycle state machine.
//!
//! Each position in the cycle has a fixed handler. The separator handler
//! validates and emits the working record; every other handler only merges
//! fields into it. The engine advances one position per line and wraps after
//! the separator.

use std::mem;

use super::book::parse_book_line;
use super::content::parse_content_line;
use super::metadata::parse_metadata_line;
use super::record::WorkingRecord;
use super::validator::validate_fields;
use crate::models::Clipping;

/// Lines per clipping
pub const CYCLE_LEN: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CyclePosition {
    #[default]
    Book,
    Metadata,
    Blank,
    Content,
    Separator,
}

impl CyclePosition {
    pub const ALL: [CyclePosition; CYCLE_LEN] = [
        CyclePosition::Book,
        CyclePosition::Metadata,
        CyclePosition::Blank,
        CyclePosition::Content,
        CyclePosition::Separator,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % CYCLE_LEN]
    }
}

type LineHandler = fn(&mut WorkingRecord, &str) -> Option<Clipping>;

/// Handlers indexed by [`CyclePosition::index`]
const HANDLERS: [LineHandler; CYCLE_LEN] =
    [handle_book_line, handle_metadata_line, skip_line, handle_content_line, finalize_record];

fn handle_book_line(record: &mut WorkingRecord, line: &str) -> Option<Clipping> {
    record.merge_book(parse_book_line(line));
    None
}

fn handle_metadata_line(record: &mut WorkingRecord, line: &str) -> Option<Clipping> {
    record.merge_metadata(parse_metadata_line(line));
    None
}

fn skip_line(_record: &mut WorkingRecord, _line: &str) -> Option<Clipping> {
    None
}

fn handle_content_line(record: &mut WorkingRecord, line: &str) -> Option<Clipping> {
    record.merge_content(parse_content_line(line));
    None
}

fn finalize_record(record: &mut WorkingRecord, _line: &str) -> Option<Clipping> {
    let finished = mem::take(record);
    let errors = validate_fields(&finished);
    Some(finished.into_clipping(errors))
}

/// Assembles clippings from lines fed one at a time
#[derive(Debug, Default)]
pub struct ClippingsEngine {
    position: CyclePosition,
    working: WorkingRecord,
}

impl ClippingsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> CyclePosition {
        self.position
    }

    /// Process one line; returns the clipping completed by a separator line
    pub fn feed_line(&mut self, line: &str) -> Option<Clipping> {
        let handler = HANDLERS[self.position.index()];
        let finished = handler(&mut self.working, line);
        self.position = self.position.next();
        finished
    }

    /// Lines consumed since the last completed clipping
    pub fn pending_lines(&self) -> usize {
        self.position.index()
    }

    /// End the input. Any partial group is discarded; returns how many lines it had.
    pub fn finish(self) -> usize {
        self.pending_lines()
    }
}
