use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Missing-field diagnostics keyed by field name
pub type ClippingErrors = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self { title: title.into(), author: author.into() }
    }
}

/// A finalized clipping.
///
/// Fields that could not be parsed from the source are `None` and named in
/// `errors`. `page_number` and `location` may also be `None` on a valid
/// clipping, since Kindle omits them for some entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clipping {
    pub book: Option<Book>,
    pub clipping_type: Option<String>,
    pub page_number: Option<String>,
    pub location: Option<String>,
    #[serde(with = "crate::models::timestamp")]
    pub created_at: Option<NaiveDateTime>,
    pub content: Option<String>,
    pub errors: ClippingErrors,
}

impl Clipping {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
