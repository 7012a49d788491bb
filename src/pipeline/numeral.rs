use crate::error::{GlyphError, Result};

pub const LEFT_TO_RIGHT_MARK: char = '\u{200E}';
pub const RIGHT_TO_LEFT_MARK: char = '\u{200F}';
pub const ZERO_WIDTH_NON_JOINER: char = '\u{200C}';
pub const ZERO_WIDTH_JOINER: char = '\u{200D}';
pub const ZERO_WIDTH_NO_BREAK_SPACE: char = '\u{FEFF}';
pub const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// The six reserved invisible symbols, in digit order.
/// Slot 5 is never a digit: it separates scalar groups.
pub const MARKERS: [char; 6] = [
    LEFT_TO_RIGHT_MARK,
    RIGHT_TO_LEFT_MARK,
    ZERO_WIDTH_NON_JOINER,
    ZERO_WIDTH_JOINER,
    ZERO_WIDTH_NO_BREAK_SPACE,
    ZERO_WIDTH_SPACE,
];

pub const DELIMITER: char = ZERO_WIDTH_SPACE;

/// Effective numeral base
pub const NUMERAL_RADIX: u32 = 5;

/// Digits needed for the largest scalar (5^9 > 0x10FFFF)
const MAX_DIGITS: usize = 9;

const MAX_SCALAR: u32 = char::MAX as u32;

/// A base-5 digit, always in 0..=4
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct QuinaryDigit(u8);

impl QuinaryDigit {
    pub fn new(value: u32) -> Option<Self> {
        (value < NUMERAL_RADIX).then_some(Self(value as u8))
    }

    pub fn value(self) -> u32 {
        u32::from(self.0)
    }
}

/// One symbol of the invisible numeral stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralSymbol {
    Digit(QuinaryDigit),
    Delimiter,
}

impl NumeralSymbol {
    pub fn to_char(self) -> char {
        match self {
            NumeralSymbol::Digit(digit) => MARKERS[digit.0 as usize],
            NumeralSymbol::Delimiter => DELIMITER,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let digit = |v| NumeralSymbol::Digit(QuinaryDigit(v));
        match c {
            LEFT_TO_RIGHT_MARK => Some(digit(0)),
            RIGHT_TO_LEFT_MARK => Some(digit(1)),
            ZERO_WIDTH_NON_JOINER => Some(digit(2)),
            ZERO_WIDTH_JOINER => Some(digit(3)),
            ZERO_WIDTH_NO_BREAK_SPACE => Some(digit(4)),
            ZERO_WIDTH_SPACE => Some(NumeralSymbol::Delimiter),
            _ => None,
        }
    }
}

/// Whether `c` is one of the six reserved invisible symbols
#[inline]
pub fn is_marker(c: char) -> bool {
    NumeralSymbol::from_char(c).is_some()
}

/// Append the base-5 digits of one scalar, most significant first
pub fn encode_scalar_into(scalar: char, out: &mut String) {
    let mut value = scalar as u32;
    let mut digits = [QuinaryDigit(0); MAX_DIGITS];
    let mut len = 0;
    loop {
        digits[len] = QuinaryDigit((value % NUMERAL_RADIX) as u8);
        len += 1;
        value /= NUMERAL_RADIX;
        if value == 0 {
            break;
        }
    }
    out.extend(
        digits[..len]
            .iter()
            .rev()
            .map(|&d| NumeralSymbol::Digit(d).to_char()),
    );
}

pub fn encode_scalar(scalar: char) -> String {
    let mut out = String::new();
    encode_scalar_into(scalar, &mut out);
    out
}

/// Encode every scalar of `hidden`, delimiter-separated
pub fn encode_payload(hidden: &str) -> String {
    let mut out = String::new();
    for scalar in hidden.chars() {
        encode_scalar_into(scalar, &mut out);
        out.push(DELIMITER);
    }
    // Only the final delimiter is dropped
    out.pop();
    out
}

/// Decode each delimiter-separated group of `stream` on its own.
///
/// A failed group does not stop the ones after it. An empty stream yields
/// nothing.
pub fn decode_groups(stream: &str) -> impl Iterator<Item = Result<char>> + '_ {
    let groups = (!stream.is_empty()).then(|| stream.split(DELIMITER));
    groups
        .into_iter()
        .flatten()
        .scan(0usize, |position, group| {
            let start = *position;
            *position += group.chars().count() + 1;
            Some(decode_group(group, start))
        })
}

/// Decode a delimiter-separated numeral stream into scalars, failing on
/// the first malformed group
pub fn decode_scalars(stream: &str) -> Result<Vec<char>> {
    decode_groups(stream).collect()
}

/// Decode a numeral stream into text
pub fn decode_payload(stream: &str) -> Result<String> {
    decode_groups(stream).collect()
}

/// Decode a numeral stream into text, dropping malformed groups
pub fn decode_payload_lossy(stream: &str) -> String {
    decode_groups(stream)
        .filter_map(|group| match group {
            Ok(scalar) => Some(scalar),
            Err(e) => {
                log::debug!("skipping numeral group: {}", e);
                None
            }
        })
        .collect()
}

fn decode_group(group: &str, start: usize) -> Result<char> {
    if group.is_empty() {
        return Err(GlyphError::MalformedLength(format!(
            "empty numeral group at position {}",
            start
        )));
    }

    let mut value: u32 = 0;
    for (offset, symbol) in group.chars().enumerate() {
        let digit = match NumeralSymbol::from_char(symbol) {
            Some(NumeralSymbol::Digit(digit)) => digit,
            _ => {
                return Err(GlyphError::InvalidSymbol {
                    symbol,
                    position: start + offset,
                })
            }
        };
        value = value * NUMERAL_RADIX + digit.value();
        if value > MAX_SCALAR {
            return Err(GlyphError::OutOfRange(value));
        }
    }

    // Surrogates are the only remaining gap
    char::from_u32(value).ok_or(GlyphError::OutOfRange(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(values: &[u32]) -> String {
        values
            .iter()
            .map(|&v| NumeralSymbol::Digit(QuinaryDigit::new(v).unwrap()).to_char())
            .collect()
    }

    #[test]
    fn test_encode_scalar_base5() {
        // 'A' = 65 = 2*25 + 3*5 + 0
        assert_eq!(encode_scalar('A'), digits(&[2, 3, 0]));
        assert_eq!(encode_scalar('\0'), digits(&[0]));
        assert_eq!(encode_scalar('\u{4}'), digits(&[4]));
        assert_eq!(encode_scalar('\u{5}'), digits(&[1, 0]));
    }

    #[test]
    fn test_encode_never_emits_delimiter_as_digit() {
        for scalar in ['\0', 'z', 'é', '中', '😀', char::MAX] {
            assert!(!encode_scalar(scalar).contains(DELIMITER));
        }
    }

    #[test]
    fn test_max_scalar_fits_digit_budget() {
        assert_eq!(encode_scalar(char::MAX).chars().count(), MAX_DIGITS);
    }

    #[test]
    fn test_payload_strips_single_trailing_delimiter() {
        let encoded = encode_payload("AB");
        let expected = format!("{}{}{}", digits(&[2, 3, 0]), DELIMITER, digits(&[2, 3, 1]));
        assert_eq!(encoded, expected);
        assert!(!encoded.ends_with(DELIMITER));
        assert_eq!(encode_payload(""), "");
    }

    #[test]
    fn test_payload_roundtrip() {
        for text in ["hello", "𝄞 music", "混合 text", "\0\u{1}", "a"] {
            assert_eq!(decode_payload(&encode_payload(text)).unwrap(), text);
        }
    }

    #[test]
    fn test_scalar_roundtrip_boundaries() {
        for value in [0u32, 4, 5, 0xD7FF, 0xE000, 0xFFFF, 0x10000, 0x10FFFF] {
            let scalar = char::from_u32(value).unwrap();
            assert_eq!(decode_scalars(&encode_scalar(scalar)).unwrap(), vec![scalar]);
        }
    }

    #[test]
    fn test_empty_stream() {
        assert!(decode_scalars("").unwrap().is_empty());
    }

    #[test]
    fn test_symbol_table() {
        for (slot, &marker) in MARKERS.iter().enumerate() {
            let symbol = NumeralSymbol::from_char(marker).unwrap();
            if slot == 5 {
                assert_eq!(symbol, NumeralSymbol::Delimiter);
            } else {
                assert_eq!(
                    symbol,
                    NumeralSymbol::Digit(QuinaryDigit::new(slot as u32).unwrap())
                );
            }
            assert_eq!(symbol.to_char(), marker);
        }
        assert_eq!(NumeralSymbol::from_char('a'), None);
        assert!(QuinaryDigit::new(5).is_none());
    }

    #[test]
    fn test_surrogate_rejected() {
        // 0xD800 = 55296 = 3232141 in base 5
        let stream = digits(&[3, 2, 3, 2, 1, 4, 1]);
        assert!(matches!(
            decode_scalars(&stream),
            Err(GlyphError::OutOfRange(0xD800))
        ));
    }

    #[test]
    fn test_above_max_scalar_rejected() {
        let stream = digits(&[4; 9]);
        assert!(matches!(
            decode_scalars(&stream),
            Err(GlyphError::OutOfRange(_))
        ));
        // Long groups fail early instead of overflowing
        let stream = digits(&[4; 40]);
        assert!(matches!(
            decode_scalars(&stream),
            Err(GlyphError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_foreign_symbol_in_group() {
        let stream = format!("{}x", digits(&[1, 2]));
        assert!(matches!(
            decode_scalars(&stream),
            Err(GlyphError::InvalidSymbol {
                symbol: 'x',
                position: 2
            })
        ));
    }

    #[test]
    fn test_groups_fail_independently() {
        let stream = format!(
            "{}{}{}{}{}",
            encode_scalar('a'),
            DELIMITER,
            digits(&[4; 12]),
            DELIMITER,
            encode_scalar('b')
        );
        let groups: Vec<_> = decode_groups(&stream).collect();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].as_ref().unwrap(), &'a');
        assert!(matches!(groups[1], Err(GlyphError::OutOfRange(_))));
        assert_eq!(groups[2].as_ref().unwrap(), &'b');

        assert!(decode_payload(&stream).is_err());
        assert_eq!(decode_payload_lossy(&stream), "ab");
    }

    #[test]
    fn test_lossy_skips_empty_groups() {
        let stream = format!("{}{}{}{}", DELIMITER, encode_scalar('q'), DELIMITER, DELIMITER);
        assert_eq!(decode_payload_lossy(&stream), "q");
        assert_eq!(decode_payload_lossy(""), "");
        assert_eq!(decode_payload_lossy(&DELIMITER.to_string()), "");
    }

    #[test]
    fn test_group_positions_are_stream_offsets() {
        // 'a' = 97 = 342 in base 5, three digits plus the delimiter
        let stream = format!("{}{}{}x", encode_scalar('a'), DELIMITER, digits(&[1]));
        assert!(matches!(
            decode_scalars(&stream),
            Err(GlyphError::InvalidSymbol {
                symbol: 'x',
                position: 5
            })
        ));
    }

    #[test]
    fn test_empty_group_rejected() {
        let stream = format!("{}{}{}", digits(&[1]), DELIMITER, DELIMITER);
        assert!(matches!(
            decode_scalars(&stream),
            Err(GlyphError::MalformedLength(_))
        ));
    }
}
