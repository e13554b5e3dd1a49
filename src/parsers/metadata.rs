//! Metadata line grammars.
//!
//! ```text
//! - Your Highlight on page 14 | location 208-210 | Added on Tuesday, 26 July 2022 17:59:48
//! - Your Bookmark on page 7 | Added on Friday, 3 March 2023 08:01:02
//! - Your Note at location 123 | Added on Tuesday, 11 July 2023 15:50:10
//! ```
//!
//! Page and location are kept as written (a number or an `N-M` range). The
//! weekday is ignored.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

/// Layout of the `Added on` timestamp after the weekday
const ADDED_ON_FORMAT: &str = "%d %B %Y %H:%M:%S";

static WITH_PAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^-\s*Your (?P<type>\w+) on page (?P<page>\w+(?:-\w+)?)(?: \| location (?P<location>\d+(?:-\d+)?))? \| Added on \w+, (?P<added>.+?)\s*$",
    )
    .expect("valid metadata regex")
});

static WITHOUT_PAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^-\s*Your (?P<type>\w+) at location (?P<location>\d+(?:-\d+)?) \| Added on \w+, (?P<added>.+?)\s*$",
    )
    .expect("valid metadata regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClippingMetadata {
    pub clipping_type: String,
    pub page_number: Option<String>,
    pub location: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MetadataGrammar {
    WithPage,
    WithoutPage,
}

impl MetadataGrammar {
    const PRIORITY: [MetadataGrammar; 2] = [MetadataGrammar::WithPage, MetadataGrammar::WithoutPage];

    fn pattern(self) -> &'static Regex {
        match self {
            MetadataGrammar::WithPage => &WITH_PAGE_RE,
            MetadataGrammar::WithoutPage => &WITHOUT_PAGE_RE,
        }
    }

    fn parse(self, line: &str) -> Option<ClippingMetadata> {
        let captures = self.pattern().captures(line)?;
        let created_at = parse_added_on(&captures["added"])?;

        Some(ClippingMetadata {
            clipping_type: captures["type"].to_string(),
            page_number: captures.name("page").map(|m| m.as_str().to_string()),
            location: captures.name("location").map(|m| m.as_str().to_string()),
            created_at,
        })
    }
}

fn parse_added_on(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, ADDED_ON_FORMAT).ok()
}

/// Parse a metadata line into clipping type, page, location and timestamp
///
/// Returns `None` when no grammar matches or the timestamp is not a real date.
pub fn parse_metadata_line(line: &str) -> Option<ClippingMetadata> {
    MetadataGrammar::PRIORITY.iter().find_map(|grammar| grammar.parse(line))
}
