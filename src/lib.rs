//! Radixglyph - Radix Text Codecs and Zero-Width Text Embedding
//!
//! Two families of pure, in-memory transforms built on one MSB-first bit
//! accumulator:
//!
//! ## Radix Codecs
//!
//! ```text
//! Bytes → BitAccumulator → Alphabet lookup → Padding → Text
//! ```
//!
//! - **Base16**: 4-bit chunks, no padding
//! - **Base32**: 5-bit chunks, `=` padded to 8 symbols
//! - **Base64**: 6-bit chunks, `=` padded to 4 symbols
//! - **Base64Url**: 6-bit chunks, `-_` alphabet, no padding
//! - **Base85**: 4-byte words as 5 digits, no padding
//!
//! Every alphabet is replaceable. Decoding is either strict (foreign
//! characters and inconsistent lengths are errors) or permissive (foreign
//! characters are skipped).
//!
//! ## Zero-Width Embedding
//!
//! ```text
//! Hidden text → base-5 digits per scalar → invisible markers → spliced after the first visible scalar
//! ```
//!
//! Digits 0-4 map to LRM, RLM, ZWNJ, ZWJ and ZWNBSP; the zero-width space
//! separates scalars. Carrier text that already contains any of these six
//! symbols will not round-trip. Extraction never fails: malformed marker
//! groups are dropped and the visible text is always returned.
//!
//! ## Text Escaping
//!
//! Character-level schemes with the same strict/permissive decode:
//!
//! - **Morse**: letters, digits and punctuation as `.`/`-` codes, ` / ` between words
//! - **URL**: percent-encoding of everything outside the query-safe set
//! - **HTML**: named entities for space, quotes, `&`, `<` and `>`
//!
//! ## Example
//!
//! ```
//! use radixglyph::config::{Radix, Strictness};
//! use radixglyph::pipeline::{embed, extract, radix_decode, radix_encode};
//!
//! let encoded = radix_encode(b"M", Radix::Base64);
//! assert_eq!(encoded, "TQ==");
//! assert_eq!(radix_decode(&encoded, Radix::Base64, Strictness::Strict).unwrap(), b"M");
//!
//! let combined = embed("Hello", "secret");
//! let extracted = extract(&combined);
//! assert_eq!(extracted.visible, "Hello");
//! assert_eq!(extracted.hidden, "secret");
//! ```

pub mod alphabet;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod text;

pub use alphabet::Alphabet;
pub use config::{CodecConfig, Radix, Scheme, Strictness};
pub use error::{GlyphError, Result};
pub use pipeline::{BitAccumulator, Extracted, RadixCodec};
