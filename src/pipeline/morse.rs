//! International Morse code over letters, digits and common punctuation.
//!
//! Letters are written as `.`/`-` codes separated by one space; words are
//! separated by ` / `. Decoding produces uppercase text with single spaces.

use crate::config::Strictness;
use crate::error::{GlyphError, Result};

pub const WORD_GAP: &str = "/";

const WORD_SEPARATOR: &str = " / ";

const MORSE_TABLE: [(char, &str); 54] = [
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
];

fn code_for(symbol: char) -> Option<&'static str> {
    let symbol = symbol.to_ascii_uppercase();
    MORSE_TABLE
        .iter()
        .find(|&&(s, _)| s == symbol)
        .map(|&(_, code)| code)
}

fn symbol_for(code: &str) -> Option<char> {
    MORSE_TABLE
        .iter()
        .find(|&&(_, c)| c == code)
        .map(|&(s, _)| s)
}

/// Encode text as Morse code. Runs of whitespace become one word gap.
///
/// Strict mode rejects characters without a Morse code; permissive mode
/// leaves them out.
pub fn morse_encode(text: &str, strictness: Strictness) -> Result<String> {
    let mut words = Vec::new();
    let mut codes: Vec<&str> = Vec::new();
    for (position, symbol) in text.chars().enumerate() {
        if symbol.is_whitespace() {
            if !codes.is_empty() {
                words.push(codes.join(" "));
                codes.clear();
            }
            continue;
        }
        match code_for(symbol) {
            Some(code) => codes.push(code),
            None if strictness.is_strict() => {
                return Err(GlyphError::InvalidSymbol { symbol, position })
            }
            None => log::trace!("morse: skipping {:?} at {}", symbol, position),
        }
    }
    if !codes.is_empty() {
        words.push(codes.join(" "));
    }
    Ok(words.join(WORD_SEPARATOR))
}

/// Decode whitespace-separated Morse codes; `/` separates words.
///
/// Strict mode rejects unknown codes, reporting their index among the
/// codes; permissive mode skips them.
pub fn morse_decode(text: &str, strictness: Strictness) -> Result<String> {
    let mut out = String::new();
    for (position, code) in text.split_whitespace().enumerate() {
        if code == WORD_GAP {
            out.push(' ');
            continue;
        }
        match symbol_for(code) {
            Some(symbol) => out.push(symbol),
            None if strictness.is_strict() => {
                return Err(GlyphError::InvalidSequence {
                    sequence: code.to_string(),
                    position,
                })
            }
            None => log::trace!("morse: skipping unknown code {:?}", code),
        }
    }
    Ok(out)
}
