use chrono::NaiveDateTime;

use super::metadata::ClippingMetadata;
use crate::models::{Book, Clipping, ClippingErrors};

/// Fields collected for the clipping currently being assembled.
///
/// Each field is `Some` once the line that provides it has been parsed.
/// `page_number` and `location` are nested options: the outer level records
/// that the metadata line was understood, the inner level whether the line
/// actually carried a page or location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingRecord {
    pub book: Option<Book>,
    pub clipping_type: Option<String>,
    pub page_number: Option<Option<String>>,
    pub location: Option<Option<String>>,
    pub created_at: Option<NaiveDateTime>,
    pub content: Option<String>,
}

impl WorkingRecord {
    pub fn merge_book(&mut self, book: Option<Book>) {
        if let Some(book) = book {
            self.book = Some(book);
        }
    }

    pub fn merge_metadata(&mut self, metadata: Option<ClippingMetadata>) {
        if let Some(metadata) = metadata {
            self.clipping_type = Some(metadata.clipping_type);
            self.page_number = Some(metadata.page_number);
            self.location = Some(metadata.location);
            self.created_at = Some(metadata.created_at);
        }
    }

    pub fn merge_content(&mut self, content: String) {
        self.content = Some(content);
    }

    /// Whether `field` has been set, regardless of its value
    pub fn has_field(&self, field: &str) -> bool {
        match field {
            "book" => self.book.is_some(),
            "clipping_type" => self.clipping_type.is_some(),
            "page_number" => self.page_number.is_some(),
            "location" => self.location.is_some(),
            "created_at" => self.created_at.is_some(),
            "content" => self.content.is_some(),
            _ => false,
        }
    }

    pub fn into_clipping(self, errors: ClippingErrors) -> Clipping {
        Clipping {
            book: self.book,
            clipping_type: self.clipping_type,
            page_number: self.page_number.flatten(),
            location: self.location.flatten(),
            created_at: self.created_at,
            content: self.content,
            errors,
        }
    }
}
