use std::borrow::Cow;

const NO_BREAK_SPACE: char = '\u{a0}';
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Replaces non-breaking spaces with plain spaces and drops byte-order marks
///
/// Kindle writes a BOM at the start of the file and uses U+00A0 inside titles
/// and highlighted text. Lines without either are returned borrowed.
pub fn normalize_line(line: &str) -> Cow<'_, str> {
    if !line.contains([NO_BREAK_SPACE, BYTE_ORDER_MARK]) {
        return Cow::Borrowed(line);
    }

    Cow::Owned(
        line.chars()
            .filter(|&ch| ch != BYTE_ORDER_MARK)
            .map(|ch| if ch == NO_BREAK_SPACE { ' ' } else { ch })
            .collect(),
    )
}
