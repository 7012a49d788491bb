use crate::config::Radix;
use crate::error::{GlyphError, Result};

pub const BASE16_SYMBOLS: &str = "0123456789ABCDEF";
pub const BASE32_SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
pub const BASE64_SYMBOLS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
pub const BASE64_URL_SYMBOLS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";
pub const BASE85_SYMBOLS: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!#$%&()*+-;<=>?@^_`{|}~";

/// Pad character shared by every padded codec
pub const PAD: char = '=';

/// Sentinel for ASCII slots that are not part of the alphabet
const NO_SYMBOL: u8 = u8::MAX;

/// Built-in symbol table for a radix
pub fn default_symbols(radix: Radix) -> &'static str {
    match radix {
        Radix::Base16 => BASE16_SYMBOLS,
        Radix::Base32 => BASE32_SYMBOLS,
        Radix::Base64 => BASE64_SYMBOLS,
        Radix::Base64Url => BASE64_URL_SYMBOLS,
        Radix::Base85 => BASE85_SYMBOLS,
    }
}

/// Ordered set of unique symbols with a precomputed reverse table.
///
/// ASCII symbols resolve through a 128-slot array; anything else goes
/// through a sorted side table, so custom alphabets may use any scalar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    ascii: [u8; 128],
    extended: Vec<(char, u8)>,
}

impl Alphabet {
    /// Build an alphabet that must contain exactly `expected` unique symbols
    pub fn new(symbols: &str, expected: usize) -> Result<Self> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.len() != expected {
            return Err(GlyphError::AlphabetSizeMismatch {
                expected,
                actual: symbols.len(),
            });
        }
        // Indices are stored as u8
        if expected > usize::from(NO_SYMBOL) {
            return Err(GlyphError::AlphabetSizeMismatch {
                expected: usize::from(NO_SYMBOL),
                actual: expected,
            });
        }

        let mut ascii = [NO_SYMBOL; 128];
        let mut extended = Vec::new();
        for (index, &symbol) in symbols.iter().enumerate() {
            let index = index as u8;
            if symbol.is_ascii() {
                let slot = &mut ascii[symbol as usize];
                if *slot != NO_SYMBOL {
                    return Err(GlyphError::DuplicateSymbol(symbol));
                }
                *slot = index;
            } else {
                extended.push((symbol, index));
            }
        }

        extended.sort_unstable_by_key(|&(symbol, _)| symbol);
        if let Some(pair) = extended.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(GlyphError::DuplicateSymbol(pair[0].0));
        }

        Ok(Self {
            symbols,
            ascii,
            extended,
        })
    }

    /// Build the alphabet for a radix, falling back to the built-in table
    pub fn for_radix(radix: Radix, custom: Option<&str>) -> Result<Self> {
        Self::new(custom.unwrap_or(default_symbols(radix)), radix.size())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol for an index. Callers only pass indices below `len()`.
    #[inline]
    pub fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    /// Index of a symbol, if it belongs to the alphabet
    #[inline]
    pub fn index_of(&self, symbol: char) -> Option<u8> {
        if symbol.is_ascii() {
            match self.ascii[symbol as usize] {
                NO_SYMBOL => None,
                index => Some(index),
            }
        } else {
            self.extended
                .binary_search_by_key(&symbol, |&(s, _)| s)
                .ok()
                .map(|pos| self.extended[pos].1)
        }
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.index_of(symbol).is_some()
    }
}
