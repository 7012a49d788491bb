//! URL query percent-encoding of UTF-8 text

use crate::config::Strictness;
use crate::error::{GlyphError, Result};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Everything outside the characters allowed in a URL query component.
/// Alphanumerics and `!$&'()*+,-./:;=?@_~` stay literal.
const QUERY_ESCAPED: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encode `text` for use in a URL query
pub fn percent_encode(text: &str) -> String {
    utf8_percent_encode(text, QUERY_ESCAPED).to_string()
}

/// Decode `%XX` escapes.
///
/// Strict mode rejects a `%` not followed by two hex digits and escapes
/// that do not form UTF-8. Permissive mode keeps malformed escapes as
/// literal text and replaces invalid UTF-8.
pub fn percent_decode(text: &str, strictness: Strictness) -> Result<String> {
    if !strictness.is_strict() {
        return Ok(percent_decode_str(text).decode_utf8_lossy().into_owned());
    }

    let chars: Vec<char> = text.chars().collect();
    for (position, &symbol) in chars.iter().enumerate() {
        if symbol != '%' {
            continue;
        }
        let escape = chars.get(position + 1..position + 3);
        if !escape.is_some_and(|hex| hex.iter().all(char::is_ascii_hexdigit)) {
            return Err(GlyphError::InvalidSymbol { symbol, position });
        }
    }

    let bytes: Vec<u8> = percent_decode_str(text).collect();
    Ok(String::from_utf8(bytes)?)
}
