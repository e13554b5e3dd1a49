use super::normalize::normalize_line;

/// Normalize a clipping's text line. Never fails; an empty line yields `""`.
pub fn parse_content_line(line: &str) -> String {
    normalize_line(line).trim().to_string()
}
