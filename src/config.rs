use crate::error::{GlyphError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Radix codec options
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
    Base16,
    Base32,
    #[default]
    Base64,
    Base64Url,
    Base85,
}

impl Radix {
    pub const ALL: [Radix; 5] = [
        Radix::Base16,
        Radix::Base32,
        Radix::Base64,
        Radix::Base64Url,
        Radix::Base85,
    ];

    /// Number of symbols in the alphabet
    pub fn size(self) -> usize {
        match self {
            Radix::Base16 => 16,
            Radix::Base32 => 32,
            Radix::Base64 | Radix::Base64Url => 64,
            Radix::Base85 => 85,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Radix::Base16 => "base16",
            Radix::Base32 => "base32",
            Radix::Base64 => "base64",
            Radix::Base64Url => "base64url",
            Radix::Base85 => "base85",
        }
    }
}

impl std::fmt::Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Radix {
    type Err = GlyphError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "base16" | "hex" | "16" => Ok(Self::Base16),
            "base32" | "32" => Ok(Self::Base32),
            "base64" | "64" => Ok(Self::Base64),
            "base64url" | "base64-url" | "url" => Ok(Self::Base64Url),
            "base85" | "85" => Ok(Self::Base85),
            _ => Err(GlyphError::UnsupportedRadix(s.to_string())),
        }
    }
}

/// Character-level text escaping schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Morse,
    Url,
    Html,
}

impl Scheme {
    pub fn name(self) -> &'static str {
        match self {
            Scheme::Morse => "morse",
            Scheme::Url => "url",
            Scheme::Html => "html",
        }
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Scheme {
    type Err = GlyphError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "morse" => Ok(Self::Morse),
            "url" | "percent" => Ok(Self::Url),
            "html" | "entity" => Ok(Self::Html),
            _ => Err(GlyphError::InvalidOption(format!("scheme: {}", s))),
        }
    }
}

/// How decoders treat characters outside the alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Reject unknown characters and inconsistent lengths
    #[default]
    Strict,
    /// Skip unknown characters, drop leftover bits
    Permissive,
}

impl Strictness {
    pub fn is_strict(self) -> bool {
        self == Strictness::Strict
    }
}

impl std::str::FromStr for Strictness {
    type Err = GlyphError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "permissive" | "lenient" => Ok(Self::Permissive),
            _ => Err(GlyphError::InvalidOption(format!("strictness: {}", s))),
        }
    }
}

/// Caller-supplied codec configuration, loadable from JSON.
///
/// ```json
/// { "strictness": "permissive", "alphabets": { "base32": "0123456789ABCDEFGHJKMNPQRSTVWXYZ" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Default decode strictness
    pub strictness: Strictness,
    /// Custom alphabets keyed by radix; missing entries use the built-in table
    pub alphabets: std::collections::BTreeMap<Radix, String>,
}

impl CodecConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: CodecConfig = serde_json::from_str(&raw)?;
        log::debug!(
            "loaded codec config from {} ({} custom alphabets)",
            path.display(),
            config.alphabets.len()
        );
        Ok(config)
    }

    /// Custom alphabet for a radix, if configured
    pub fn alphabet(&self, radix: Radix) -> Option<&str> {
        self.alphabets.get(&radix).map(String::as_str)
    }
}
