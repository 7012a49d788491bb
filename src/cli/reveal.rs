use crate::error::Result;
use crate::pipeline::zero_width::{extract, Extracted};
use std::path::Path;

/// Recover the visible and hidden text of a file
pub fn reveal_file(input_path: &Path) -> Result<Extracted> {
    let combined = std::fs::read_to_string(input_path)?;
    Ok(extract(&combined))
}
