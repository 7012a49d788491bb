use crate::error::Result;
use crate::pipeline::zero_width::{embed, split};
use std::path::Path;

/// Hide the text of `hidden_path` inside the text of `carrier_path`.
/// A trailing newline on the hidden file is not part of the payload.
pub fn hide_in_file(carrier_path: &Path, hidden_path: &Path) -> Result<String> {
    let carrier = std::fs::read_to_string(carrier_path)?;
    let hidden = std::fs::read_to_string(hidden_path)?;
    let hidden = hidden.strip_suffix('\n').unwrap_or(&hidden);
    Ok(embed(&carrier, hidden))
}

/// Interleave zero-width spaces through the text of a file
pub fn split_file(input_path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(input_path)?;
    Ok(split(&text))
}
