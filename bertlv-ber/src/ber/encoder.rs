//! BER-TLV encoder
//!
//! # Usage Example
//!
//! ```rust
//! use bertlv_ber::ber::encoder::TlvEncoder;
//!
//! let mut encoder = TlvEncoder::new();
//! encoder.encode_tlv(0x5A, &[0x47, 0x61]).unwrap();
//! encoder.encode_padding(0x00).unwrap();
//! assert_eq!(encoder.into_bytes(), vec![0x5A, 0x02, 0x47, 0x61, 0x00]);
//! ```

use crate::ber::node::TlvNode;
use crate::ber::types::{Length, Tag, is_padding_byte};
use bertlv_core::error::{TlvError, TlvResult};

/// Append buffer for a stream of BER-TLV objects
///
/// New triplets get the canonical length encoding (short form up to 127,
/// minimal long form above). Decoded nodes are written back exactly as read.
pub struct TlvEncoder {
    buffer: Vec<u8>,
}

impl TlvEncoder {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Encode a tag/length/value triplet
    ///
    /// # Error Handling
    /// Returns `InvalidTag` if `tag` is not exactly one well-formed tag
    /// encoding. The value of a constructed tag is written as given.
    pub fn encode_tlv(&mut self, tag: u64, value: &[u8]) -> TlvResult<()> {
        let tag = Tag::from_number(tag)?;
        self.buffer.extend_from_slice(&tag.encode());
        self.buffer
            .extend_from_slice(Length::new(value.len()).as_bytes());
        self.buffer.extend_from_slice(value);
        Ok(())
    }

    /// Encode a node with its retained length bytes
    pub fn encode_node(&mut self, node: &TlvNode) {
        node.write_to(&mut self.buffer);
    }

    /// Encode a single padding byte
    pub fn encode_padding(&mut self, byte: u8) -> TlvResult<()> {
        if !is_padding_byte(byte) {
            return Err(TlvError::WrongPaddingByte(byte));
        }
        self.buffer.push(byte);
        Ok(())
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for TlvEncoder {
    fn default() -> Self {
        Self::new()
    }
}
