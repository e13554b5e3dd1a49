use std::path::Path;

use super::{WriteError, write_destination};
use crate::models::Clipping;

/// Write clippings as a pretty-printed JSON array
pub fn write_json(clippings: &[Clipping], destination: &Path) -> Result<(), WriteError> {
    let json = serde_json::to_vec_pretty(clippings)?;
    write_destination(destination, &json)
}
