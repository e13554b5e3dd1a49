use super::record::WorkingRecord;
use crate::models::ClippingErrors;

/// Fields every clipping must carry once its group has been read
pub const REQUIRED_FIELDS: [&str; 6] =
    ["book", "clipping_type", "page_number", "created_at", "location", "content"];

pub fn missing_field_message(field: &str) -> String {
    format!("Field {} missed in Clipping.", field)
}

/// Check an assembled record for required fields
///
/// Presence is what counts: a page number or location that the source did not
/// provide is valid as long as the metadata line set the field.
pub fn validate_fields(record: &WorkingRecord) -> ClippingErrors {
    REQUIRED_FIELDS
        .iter()
        .filter(|field| !record.has_field(field))
        .map(|field| (field.to_string(), missing_field_message(field)))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::Book;

    fn complete_record() -> WorkingRecord {
        WorkingRecord {
            book: Some(Book::new("Title", "Author")),
            clipping_type: Some("Highlight".to_string()),
            page_number: Some(Some("1".to_string())),
            location: Some(Some("1".to_string())),
            created_at: NaiveDate::from_ymd_opt(2025, 1, 1).and_then(|d| d.and_hms_opt(18, 0, 0)),
            content: Some("Content".to_string()),
        }
    }

    #[test]
    fn test_complete_record_has_no_errors() {
        assert!(validate_fields(&complete_record()).is_empty());
    }

    #[test]
    fn test_empty_page_and_location_values_are_valid() {
        let record = WorkingRecord { page_number: Some(None), location: Some(None), ..complete_record() };
        assert!(validate_fields(&record).is_empty());
    }

    #[test]
    fn test_empty_record_misses_every_field() {
        let errors = validate_fields(&WorkingRecord::default());

        assert_eq!(errors.len(), REQUIRED_FIELDS.len());
        for (field, message) in &errors {
            assert_eq!(message, &format!("Field {} missed in Clipping.", field));
        }
    }

    #[test]
    fn test_each_missing_field_is_reported_alone() {
        for field in REQUIRED_FIELDS {
            let mut record = complete_record();
            match field {
                "book" => record.book = None,
                "clipping_type" => record.clipping_type = None,
                "page_number" => record.page_number = None,
                "created_at" => record.created_at = None,
                "location" => record.location = None,
                "content" => record.content = None,
                _ => unreachable!(),
            }

            let errors = validate_fields(&record);
            assert_eq!(errors.len(), 1, "expected exactly one error for {}", field);
            assert_eq!(errors[field], missing_field_message(field));
        }
    }
}
