use std::fs::File;
use std::path::Path;

use crate::parsers::ParseError;

/// Largest clippings export accepted: 64MB
pub const MAX_FILE_SIZE_BYTES: u64 = 64 * 1024 * 1024;

/// Opens an input file and checks its size on the open handle
///
/// Checking the handle rather than the path means the size seen is the size
/// of the file that will actually be read.
///
/// # Errors
///
/// Returns [`ParseError::Open`] if the file or its metadata cannot be read and
/// [`ParseError::TooLarge`] if it exceeds [`MAX_FILE_SIZE_BYTES`].
pub fn open_input_file(path: &Path) -> Result<File, ParseError> {
    open_with_limit(path, MAX_FILE_SIZE_BYTES)
}

pub(crate) fn open_with_limit(path: &Path, max: u64) -> Result<File, ParseError> {
    let open_error = |source| ParseError::Open { path: path.to_path_buf(), source };

    let file = File::open(path).map_err(open_error)?;
    let size = file.metadata().map_err(open_error)?.len();
    if size > max {
        return Err(ParseError::TooLarge { path: path.to_path_buf(), size, max });
    }

    Ok(file)
}
