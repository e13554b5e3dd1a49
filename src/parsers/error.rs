use std::io;
use std::path::PathBuf;

/// Failures that stop a conversion before any clippings are produced
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to open clippings file: {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read line {line} from clippings file")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("File too large: {} ({size} bytes, max {max} bytes)", .path.display())]
    TooLarge { path: PathBuf, size: u64, max: u64 },
}
