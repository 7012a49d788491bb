use crate::alphabet::{default_symbols, Alphabet, PAD};
use crate::config::{Radix, Strictness};
use crate::error::{GlyphError, Result};
use crate::pipeline::bits::BitAccumulator;
use std::sync::OnceLock;

/// How input bytes are grouped into symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Fixed-width bit chunks, one symbol per `width` bits
    Bits(u32),
    /// 4 bytes as one big-endian word, written as 5 base-85 digits
    Word85,
}

/// Output padding policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    None,
    /// Right-pad with `=` to a multiple of this many symbols
    Block(usize),
}

const WORD_BYTES: usize = 4;
const WORD_DIGITS: usize = 5;

/// Binary-to-text codec over a fixed alphabet
#[derive(Debug, Clone)]
pub struct RadixCodec {
    radix: Radix,
    alphabet: Alphabet,
    grouping: Grouping,
    padding: Padding,
}

impl RadixCodec {
    /// Codec for `radix` over a validated alphabet
    pub fn new(radix: Radix, alphabet: Alphabet) -> Result<Self> {
        if alphabet.len() != radix.size() {
            return Err(GlyphError::AlphabetSizeMismatch {
                expected: radix.size(),
                actual: alphabet.len(),
            });
        }

        let (grouping, padding) = match radix {
            Radix::Base16 => (Grouping::Bits(4), Padding::None),
            Radix::Base32 => (Grouping::Bits(5), Padding::Block(8)),
            Radix::Base64 => (Grouping::Bits(6), Padding::Block(4)),
            Radix::Base64Url => (Grouping::Bits(6), Padding::None),
            Radix::Base85 => (Grouping::Word85, Padding::None),
        };

        // A padded alphabet cannot also use the pad character as a digit
        if padding != Padding::None && alphabet.contains(PAD) {
            return Err(GlyphError::DuplicateSymbol(PAD));
        }

        Ok(Self {
            radix,
            alphabet,
            grouping,
            padding,
        })
    }

    /// Codec for `radix` over a caller-supplied symbol string
    pub fn with_alphabet(radix: Radix, symbols: &str) -> Result<Self> {
        Self::new(radix, Alphabet::new(symbols, radix.size())?)
    }

    /// Shared codec over the built-in alphabet, built once per process
    pub fn standard(radix: Radix) -> &'static RadixCodec {
        static CODECS: OnceLock<Vec<RadixCodec>> = OnceLock::new();
        let codecs = CODECS.get_or_init(|| {
            Radix::ALL
                .iter()
                .map(|&r| {
                    RadixCodec::with_alphabet(r, default_symbols(r))
                        .expect("built-in alphabets are valid")
                })
                .collect()
        });
        // Radix::ALL lists variants in declaration order
        &codecs[radix as usize]
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Number of symbols (padding included) `encode` produces for `len` bytes
    pub fn encoded_len(&self, len: usize) -> usize {
        let symbols = match self.grouping {
            Grouping::Bits(width) => (len * 8).div_ceil(width as usize),
            Grouping::Word85 => {
                let tail = len % WORD_BYTES;
                len / WORD_BYTES * WORD_DIGITS + if tail > 0 { tail + 1 } else { 0 }
            }
        };
        match self.padding {
            Padding::None => symbols,
            Padding::Block(block) => symbols.div_ceil(block) * block,
        }
    }

    /// Encode bytes into text
    pub fn encode(&self, data: &[u8]) -> String {
        let mut out = String::with_capacity(self.encoded_len(data.len()));
        let symbols = match self.grouping {
            Grouping::Bits(width) => self.encode_bits(data, width, &mut out),
            Grouping::Word85 => self.encode_words(data, &mut out),
        };

        if let Padding::Block(block) = self.padding {
            let pad = (block - symbols % block) % block;
            out.extend(std::iter::repeat(PAD).take(pad));
        }

        log::debug!(
            "{}: encoded {} bytes into {} symbols",
            self.radix,
            data.len(),
            symbols
        );
        out
    }

    fn encode_bits(&self, data: &[u8], width: u32, out: &mut String) -> usize {
        let mut acc = BitAccumulator::new();
        let mut symbols = 0;
        for &byte in data {
            acc.push_byte(byte);
            for index in acc.chunks(width) {
                out.push(self.alphabet.symbol(index as usize));
                symbols += 1;
            }
        }
        if let Some(index) = acc.flush(width) {
            out.push(self.alphabet.symbol(index as usize));
            symbols += 1;
        }
        symbols
    }

    fn encode_words(&self, data: &[u8], out: &mut String) -> usize {
        let radix = self.alphabet.len() as u32;
        let mut acc = BitAccumulator::new();
        let mut symbols = 0;

        for chunk in data.chunks(WORD_BYTES) {
            for i in 0..WORD_BYTES {
                acc.push_byte(chunk.get(i).copied().unwrap_or(0));
            }
            // Four whole bytes were just pushed, so a full word is always ready
            let word = acc.extract_chunk(32);
            debug_assert!(word.is_some());
            let mut word = word.unwrap_or_default();

            let mut digits = [0u8; WORD_DIGITS];
            for digit in digits.iter_mut().rev() {
                *digit = (word % radix) as u8;
                word /= radix;
            }

            // A partial chunk of k bytes keeps its first k + 1 digits
            let keep = if chunk.len() == WORD_BYTES {
                WORD_DIGITS
            } else {
                chunk.len() + 1
            };
            for &digit in &digits[..keep] {
                out.push(self.alphabet.symbol(usize::from(digit)));
            }
            symbols += keep;
        }
        symbols
    }

    /// Decode text back into bytes
    pub fn decode(&self, text: &str, strictness: Strictness) -> Result<Vec<u8>> {
        let (body, pad_count) = match self.padding {
            Padding::Block(_) => {
                let body = text.trim_end_matches(PAD);
                (body, text.len() - body.len())
            }
            Padding::None => (text, 0),
        };

        let (data, symbols) = match self.grouping {
            Grouping::Bits(width) => self.decode_bits(body, width, strictness)?,
            Grouping::Word85 => self.decode_words(body, strictness)?,
        };

        if strictness.is_strict() && pad_count > 0 {
            if let Padding::Block(block) = self.padding {
                let expected = (block - symbols % block) % block;
                if pad_count != expected {
                    return Err(GlyphError::MalformedLength(format!(
                        "{} symbols need {} pad characters, found {}",
                        symbols, expected, pad_count
                    )));
                }
            }
        }

        log::debug!(
            "{}: decoded {} symbols into {} bytes",
            self.radix,
            symbols,
            data.len()
        );
        Ok(data)
    }

    /// Look up one symbol, honouring strictness. `Ok(None)` means skip.
    fn lookup(
        &self,
        symbol: char,
        position: usize,
        strictness: Strictness,
    ) -> Result<Option<u8>> {
        match self.alphabet.index_of(symbol) {
            Some(index) => Ok(Some(index)),
            None if strictness.is_strict() => Err(GlyphError::InvalidSymbol { symbol, position }),
            None => {
                log::trace!("{}: skipping {:?} at {}", self.radix, symbol, position);
                Ok(None)
            }
        }
    }

    fn decode_bits(
        &self,
        text: &str,
        width: u32,
        strictness: Strictness,
    ) -> Result<(Vec<u8>, usize)> {
        let mut acc = BitAccumulator::new();
        let mut out = Vec::with_capacity(text.len() * width as usize / 8);
        let mut symbols = 0;

        for (position, symbol) in text.chars().enumerate() {
            let Some(index) = self.lookup(symbol, position, strictness)? else {
                continue;
            };
            acc.push_bits(u32::from(index), width);
            symbols += 1;
            out.extend(acc.chunks(8).map(|byte| byte as u8));
        }

        // A canonical encoding never leaves a whole symbol's worth of bits over
        if strictness.is_strict() && acc.bit_count() >= width {
            return Err(GlyphError::MalformedLength(format!(
                "{} symbols leave {} dangling bits",
                symbols,
                acc.bit_count()
            )));
        }

        Ok((out, symbols))
    }

    fn decode_words(&self, text: &str, strictness: Strictness) -> Result<(Vec<u8>, usize)> {
        let mut acc = BitAccumulator::new();
        let mut out = Vec::with_capacity(text.len() / WORD_DIGITS * WORD_BYTES + WORD_BYTES);
        let mut digits = [0u8; WORD_DIGITS];
        let mut filled = 0;
        let mut symbols = 0;

        for (position, symbol) in text.chars().enumerate() {
            let Some(index) = self.lookup(symbol, position, strictness)? else {
                continue;
            };
            digits[filled] = index;
            filled += 1;
            symbols += 1;

            if filled == WORD_DIGITS {
                acc.push_bits(self.word_value(&digits)?, 32);
                out.extend(acc.chunks(8).map(|byte| byte as u8));
                filled = 0;
            }
        }

        match filled {
            0 => {}
            1 if strictness.is_strict() => {
                return Err(GlyphError::MalformedLength(
                    "trailing group of a single symbol".into(),
                ));
            }
            1 => log::trace!("{}: dropping single trailing symbol", self.radix),
            _ => {
                // Extend with the highest digit, then keep filled - 1 bytes
                let top = (self.alphabet.len() - 1) as u8;
                digits[filled..].fill(top);
                let keep = (filled - 1) as u32;
                let word = self.word_value(&digits)?;
                acc.push_bits(word >> (8 * (4 - keep)), 8 * keep);
                out.extend(acc.chunks(8).map(|byte| byte as u8));
            }
        }

        Ok((out, symbols))
    }

    fn word_value(&self, digits: &[u8; WORD_DIGITS]) -> Result<u32> {
        let radix = self.alphabet.len() as u64;
        let value = digits
            .iter()
            .fold(0u64, |acc, &digit| acc * radix + u64::from(digit));
        u32::try_from(value).map_err(|_| {
            GlyphError::MalformedLength(format!("group value {} overflows 32 bits", value))
        })
    }
}

/// Encode with the built-in codec for `radix`
pub fn radix_encode(data: &[u8], radix: Radix) -> String {
    RadixCodec::standard(radix).encode(data)
}

/// Decode with the built-in codec for `radix`
pub fn radix_decode(text: &str, radix: Radix, strictness: Strictness) -> Result<Vec<u8>> {
    RadixCodec::standard(radix).decode(text, strictness)
}
