use crate::cli::load_config;
use crate::config::{Scheme, Strictness};
use crate::error::Result;
use crate::text::{escape_text, unescape_text};
use std::path::{Path, PathBuf};

/// Options for the escape and unescape commands
#[derive(Debug, Clone)]
pub struct EscapeOptions {
    pub scheme: Scheme,
    /// Overrides the config file strictness when set
    pub strictness: Option<Strictness>,
    pub config: Option<PathBuf>,
}

impl EscapeOptions {
    pub fn new(scheme: Scheme) -> Self {
        Self {
            scheme,
            strictness: None,
            config: None,
        }
    }

    fn resolve_strictness(&self) -> Result<Strictness> {
        match self.strictness {
            Some(strictness) => Ok(strictness),
            None => Ok(load_config(self.config.as_deref())?.strictness),
        }
    }
}

/// Escape the text of a file. A single trailing newline is not escaped.
pub fn escape_file(input_path: &Path, options: &EscapeOptions) -> Result<String> {
    let strictness = options.resolve_strictness()?;
    let text = std::fs::read_to_string(input_path)?;
    let text = text.strip_suffix('\n').unwrap_or(&text);
    escape_text(text, options.scheme, strictness)
}

/// Unescape the text of a file. Trailing whitespace is ignored.
pub fn unescape_file(input_path: &Path, options: &EscapeOptions) -> Result<String> {
    let strictness = options.resolve_strictness()?;
    let text = std::fs::read_to_string(input_path)?;
    unescape_text(text.trim_end(), options.scheme, strictness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GlyphError;
    use tempfile::tempdir;

    #[test]
    fn test_escape_unescape_files() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let escaped = dir.path().join("escaped.txt");
        std::fs::write(&input, "fish & chips <b>\n").unwrap();

        for scheme in [Scheme::Url, Scheme::Html] {
            let options = EscapeOptions::new(scheme);
            let text = escape_file(&input, &options).unwrap();
            assert!(!text.contains(' '), "{}", scheme);
            std::fs::write(&escaped, format!("{}\n", text)).unwrap();
            assert_eq!(
                unescape_file(&escaped, &options).unwrap(),
                "fish & chips <b>",
                "{}",
                scheme
            );
        }
    }

    #[test]
    fn test_morse_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.txt");
        std::fs::write(&input, "sos\n").unwrap();

        let options = EscapeOptions::new(Scheme::Morse);
        assert_eq!(escape_file(&input, &options).unwrap(), "... --- ...");
    }

    #[test]
    fn test_strictness_from_config() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let config = dir.path().join("codec.json");
        std::fs::write(&input, "ab%zz").unwrap();
        std::fs::write(&config, r#"{"strictness":"permissive"}"#).unwrap();

        let strict = EscapeOptions::new(Scheme::Url);
        assert!(matches!(
            unescape_file(&input, &strict),
            Err(GlyphError::InvalidSymbol { symbol: '%', .. })
        ));

        let from_config = EscapeOptions {
            config: Some(config),
            ..EscapeOptions::new(Scheme::Url)
        };
        assert_eq!(unescape_file(&input, &from_config).unwrap(), "ab%zz");
    }
}
