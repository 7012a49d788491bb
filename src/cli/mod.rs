pub mod decode;
pub mod encode;
pub mod escape;
pub mod hide;
pub mod inspect;
pub mod reveal;

pub use decode::*;
pub use encode::*;
pub use escape::*;
pub use hide::*;
pub use inspect::*;
pub use reveal::*;

use crate::config::{CodecConfig, Radix};
use crate::error::Result;
use crate::pipeline::radix::RadixCodec;
use std::path::Path;

/// Load the configuration file if one was given
pub fn load_config(path: Option<&Path>) -> Result<CodecConfig> {
    match path {
        Some(path) => CodecConfig::load(path),
        None => Ok(CodecConfig::default()),
    }
}

/// Resolve the codec for a radix: explicit alphabet, then config, then built-in
pub fn build_codec(radix: Radix, alphabet: Option<&str>, config: &CodecConfig) -> Result<RadixCodec> {
    match alphabet.or_else(|| config.alphabet(radix)) {
        Some(symbols) => RadixCodec::with_alphabet(radix, symbols),
        None => Ok(RadixCodec::standard(radix).clone()),
    }
}
