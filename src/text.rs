//! String-level helpers layered over the codecs

use crate::config::{Scheme, Strictness};
use crate::error::Result;
use crate::pipeline::entity::{html_decode, html_encode};
use crate::pipeline::morse::{morse_decode, morse_encode};
use crate::pipeline::numeral::is_marker;
use crate::pipeline::percent::{percent_decode, percent_encode};
use crate::pipeline::radix::RadixCodec;

/// Invisible, formatting and control characters that `reveal_invisible` escapes
const INVISIBLE: &[u32] = &[
    // Zero width
    0x200B, 0x200C, 0x200D, 0xFEFF,
    // Directional marks and embeddings
    0x200E, 0x200F, 0x202A, 0x202B, 0x202C, 0x202D, 0x202E,
    // Whitespace
    0x0020, 0x0009, 0x000A, 0x000D, 0x00A0,
    // Control
    0x0000, 0x0007, 0x0008, 0x000C, 0x001B, 0x007F,
    // Separators
    0x2028, 0x2029,
    // Soft hyphen, interlinear annotation, object replacement
    0x00AD, 0xFFF9, 0xFFFA, 0xFFFB, 0xFFFC,
];

pub fn is_invisible(c: char) -> bool {
    INVISIBLE.contains(&(c as u32))
}

/// Replace every invisible character with a `\u{XXXX}` escape
pub fn reveal_invisible(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if is_invisible(c) {
            out.push_str(&format!("\\u{{{:04X}}}", c as u32));
        } else {
            out.push(c);
        }
    }
    out
}

/// Whether any reserved zero-width marker occurs in `text`
pub fn contains_markers(text: &str) -> bool {
    text.chars().any(is_marker)
}

/// Encode the UTF-8 bytes of `text`
pub fn encode_text(text: &str, codec: &RadixCodec) -> String {
    codec.encode(text.as_bytes())
}

/// Decode into a UTF-8 string
pub fn decode_text(encoded: &str, codec: &RadixCodec, strictness: Strictness) -> Result<String> {
    let bytes = codec.decode(encoded, strictness)?;
    Ok(String::from_utf8(bytes)?)
}

/// Apply an escaping scheme. Only Morse can fail, on unsupported characters.
pub fn escape_text(text: &str, scheme: Scheme, strictness: Strictness) -> Result<String> {
    match scheme {
        Scheme::Morse => morse_encode(text, strictness),
        Scheme::Url => Ok(percent_encode(text)),
        Scheme::Html => Ok(html_encode(text)),
    }
}

/// Reverse an escaping scheme
pub fn unescape_text(text: &str, scheme: Scheme, strictness: Strictness) -> Result<String> {
    match scheme {
        Scheme::Morse => morse_decode(text, strictness),
        Scheme::Url => percent_decode(text, strictness),
        Scheme::Html => html_decode(text, strictness),
    }
}
