//! BER-TLV decoder and encoder (ISO 7816 Annex D.1)
//!
//! Each data object is a Tag-Length-Value triplet:
//!
//! ```text
//! [Tag] [Length] [Value]
//! ```
//!
//! ## Tag Encoding
//!
//! - Bit 6 (`0x20`) of the first byte marks a constructed object whose value
//!   is itself a sequence of TLVs.
//! - If the low five bits of the first byte are all set, more tag bytes
//!   follow; each following byte with bit 8 set is followed by another.
//!
//! ## Length Encoding
//!
//! - **Short form**: bit 8 clear, bits 7-1 are the length (0-127).
//! - **Long form**: bit 8 set, the low nibble counts the big-endian length
//!   bytes that follow.
//!
//! ## Padding
//!
//! `0x00` and `0xFF` bytes may appear before, between, or after objects. They
//! are kept as padding nodes so a decoded stream re-encodes bit-exact.

pub mod decoder;
pub mod encoder;
pub mod node;
pub mod types;

pub use decoder::{DecoderConfig, TlvDecoder, parse, parse_hex};
pub use encoder::TlvEncoder;
pub use node::{Category, TlvNode};
pub use types::{Length, Tag, is_padding_byte};
