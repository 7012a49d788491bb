use crate::cli::{build_codec, load_config};
use crate::config::Radix;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Options for the encode command
#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    pub radix: Radix,
    /// Custom alphabet, overrides the config file
    pub alphabet: Option<String>,
    pub config: Option<PathBuf>,
}

/// Encode the bytes of a file as text
pub fn encode_file(input_path: &Path, options: &EncodeOptions) -> Result<String> {
    let config = load_config(options.config.as_deref())?;
    let codec = build_codec(options.radix, options.alphabet.as_deref(), &config)?;

    let data = std::fs::read(input_path)?;
    Ok(codec.encode(&data))
}
