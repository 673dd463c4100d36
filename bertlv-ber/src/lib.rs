//! BER-TLV processing for ISO 7816 / EMV data
//!
//! This crate decodes flat byte buffers into forests of tag/length/value
//! nodes, re-encodes them bit-exact, and parses Data Object Lists with the
//! same tag and length primitives.

pub mod ber;
pub mod dol;

pub use bertlv_core::error::{TlvError, TlvResult};
pub use ber::{Category, DecoderConfig, Length, Tag, TlvDecoder, TlvEncoder, TlvNode};
pub use dol::{DataObject, Dol};
