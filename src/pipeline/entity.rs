//! HTML character entity escaping

use crate::config::Strictness;
use crate::error::{GlyphError, Result};

const NAMED_ENTITIES: [(char, &str); 6] = [
    (' ', "nbsp"),
    ('"', "quot"),
    ('&', "amp"),
    ('\'', "apos"),
    ('<', "lt"),
    ('>', "gt"),
];

/// Longest reference body accepted between `&` and `;`
const MAX_REFERENCE: usize = 10;

/// Replace spaces, quotes, ampersands and angle brackets with named entities
pub fn html_encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match NAMED_ENTITIES.iter().find(|&&(symbol, _)| symbol == c) {
            Some((_, name)) => {
                out.push('&');
                out.push_str(name);
                out.push(';');
            }
            None => out.push(c),
        }
    }
    out
}

fn resolve(reference: &str) -> Option<char> {
    if let Some(number) = reference.strip_prefix('#') {
        let value = match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse().ok()?,
        };
        return char::from_u32(value);
    }
    NAMED_ENTITIES
        .iter()
        .find(|&&(_, name)| name == reference)
        .map(|&(symbol, _)| symbol)
}

/// Resolve named (`&amp;`) and numeric (`&#38;`, `&#x26;`) references.
///
/// Strict mode rejects unknown or unterminated references; permissive mode
/// keeps them as literal text.
pub fn html_decode(text: &str, strictness: Strictness) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut position = 0;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        position += rest[..start].chars().count();
        let tail = &rest[start + 1..];

        let body = tail
            .char_indices()
            .take(MAX_REFERENCE + 1)
            .find(|&(_, c)| c == ';')
            .map(|(end, _)| &tail[..end]);

        match body.and_then(|body| resolve(body).map(|c| (body, c))) {
            Some((body, c)) => {
                out.push(c);
                position += body.chars().count() + 2;
                rest = &tail[body.len() + 1..];
            }
            None if strictness.is_strict() => {
                let sequence: String = tail
                    .chars()
                    .take_while(|&c| c != ';')
                    .take(MAX_REFERENCE)
                    .collect();
                return Err(GlyphError::InvalidSequence {
                    sequence: format!("&{}", sequence),
                    position,
                });
            }
            None => {
                log::trace!("html: keeping literal '&' at {}", position);
                out.push('&');
                position += 1;
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    Ok(out)
}
