use crate::cli::{build_codec, load_config};
use crate::config::{Radix, Strictness};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Options for the decode command
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    pub radix: Radix,
    pub alphabet: Option<String>,
    /// Overrides the config file strictness when set
    pub strictness: Option<Strictness>,
    pub config: Option<PathBuf>,
}

/// Decode the text of a file back into bytes.
/// Trailing whitespace (such as a final newline) is ignored.
pub fn decode_file(input_path: &Path, options: &DecodeOptions) -> Result<Vec<u8>> {
    let config = load_config(options.config.as_deref())?;
    let codec = build_codec(options.radix, options.alphabet.as_deref(), &config)?;
    let strictness = options.strictness.unwrap_or(config.strictness);

    let text = std::fs::read_to_string(input_path)?;
    codec.decode(text.trim_end(), strictness)
}
