pub mod files;
pub mod paths;

pub use files::{MAX_FILE_SIZE_BYTES, open_input_file};
pub use paths::{
    DEFAULT_INPUT_FILE, format_path_with_tilde, resolve_input_path, resolve_output_path,
};
