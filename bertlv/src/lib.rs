//! BER-TLV decoding and encoding for ISO 7816 / EMV data
//!
//! Given a flat byte sequence, this library recovers a forest of typed,
//! possibly nested data objects; given such a forest, it reproduces the exact
//! original bytes.
//!
//! # Architecture
//!
//! - `bertlv-core`: error handling, integer/byte primitives, hex codec
//! - `bertlv-ber`: tag/length headers, decoder, encoder, DOL parser
//!
//! # Usage
//!
//! ```
//! use bertlv::{TlvNode, parse_hex};
//!
//! let nodes = parse_hex("E1 03 5A 01 FF").unwrap();
//! assert_eq!(nodes[0].tag(), 0xE1);
//! assert_eq!(nodes[0].children()[0].value(), &[0xFF]);
//!
//! let bytes: Vec<u8> = nodes.iter().flat_map(TlvNode::bytes).collect();
//! assert_eq!(bytes, vec![0xE1, 0x03, 0x5A, 0x01, 0xFF]);
//! ```

pub use bertlv_core::{TlvError, TlvResult, decode_hex, encode_hex, uint_hex};
pub use bertlv_core::uint::{byte_count, bytes_of};
pub use bertlv_ber::ber::{
    Category, DecoderConfig, Length, Tag, TlvDecoder, TlvEncoder, TlvNode, parse, parse_hex,
};
pub use bertlv_ber::dol::{DataObject, Dol};
