//! BER-TLV decoder
//!
//! Turns a flat byte buffer into an ordered forest of [`TlvNode`]s.
//!
//! # Usage Example
//!
//! ```rust
//! use bertlv_ber::ber::decoder::parse;
//!
//! let nodes = parse(&[0xE1, 0x03, 0x5A, 0x01, 0xFF]).unwrap();
//! assert_eq!(nodes[0].children()[0].tag(), 0x5A);
//! ```

use crate::ber::node::{Category, TlvNode};
use crate::ber::types::{Length, Tag, is_padding_byte};
use bertlv_core::error::{TlvError, TlvResult};
use bertlv_core::hex::decode_hex;

/// Decoder settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    max_depth: usize,
}

impl DecoderConfig {
    /// Constructed levels decoded before giving up
    pub const DEFAULT_MAX_DEPTH: usize = 32;

    pub fn new() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the maximum nesting depth of constructed values
    ///
    /// Top-level nodes sit at depth 0 and the value of a node at depth `d` is
    /// decoded at depth `d + 1`.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// BER-TLV decoder
///
/// Reads tag/length/value triplets from a byte buffer, descending into the
/// value of every constructed tag. Padding bytes (`0x00`, `0xFF`) found where a
/// tag is expected become single-byte padding nodes.
///
/// # Position Tracking
///
/// The decoder keeps a position that advances past each decoded node, so
/// nodes can be pulled one at a time with [`decode_node`](Self::decode_node)
/// or all at once with [`decode_all`](Self::decode_all).
pub struct TlvDecoder<'a> {
    buffer: &'a [u8],
    position: usize,
    depth: usize,
    config: DecoderConfig,
}

impl<'a> TlvDecoder<'a> {
    /// Create a decoder with the default configuration
    pub fn new(buffer: &'a [u8]) -> Self {
        Self::with_config(buffer, DecoderConfig::default())
    }

    pub fn with_config(buffer: &'a [u8], config: DecoderConfig) -> Self {
        Self {
            buffer,
            position: 0,
            depth: 0,
            config,
        }
    }

    /// Get current position in buffer
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get remaining bytes
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    /// Check if there is more data to decode
    pub fn has_remaining(&self) -> bool {
        self.position < self.buffer.len()
    }

    /// Decoder for the value of a constructed node found at this level
    fn nested<'b>(&self, buffer: &'b [u8]) -> TlvResult<TlvDecoder<'b>> {
        let depth = self.depth + 1;
        if depth > self.config.max_depth {
            log::debug!(
                "constructed value at offset {} exceeds max depth {}",
                self.position,
                self.config.max_depth
            );
            return Err(TlvError::NestingTooDeep {
                max: self.config.max_depth,
            });
        }
        Ok(TlvDecoder {
            buffer,
            position: 0,
            depth,
            config: self.config,
        })
    }

    /// Decode a tag and a length, advancing past both but not past any value
    ///
    /// This is the header-only step shared with Data Object List parsing,
    /// where lengths describe data that is not in the buffer.
    pub fn decode_header(&mut self) -> TlvResult<(Tag, Length)> {
        let rest = &self.buffer[self.position..];
        let (tag, tag_size) = Tag::decode(rest)?;
        let (length, length_size) = Length::decode(&rest[tag_size..])?;
        self.position += tag_size + length_size;
        Ok((tag, length))
    }

    /// Decode the next node
    ///
    /// # Error Handling
    /// - `MissingType` if the buffer is exhausted
    /// - `MissingLength`/`WrongLongLength` for a truncated length
    /// - `ValueTooShort` if the value extends past the end of the buffer
    /// - `NestingTooDeep` if constructed values nest past the configured depth
    ///
    /// On error the position is left where the failing node started.
    pub fn decode_node(&mut self) -> TlvResult<TlvNode> {
        let rest: &'a [u8] = &self.buffer[self.position..];
        let first = *rest.first().ok_or(TlvError::MissingType)?;

        if is_padding_byte(first) {
            log::trace!("padding byte 0x{:02X} at offset {}", first, self.position);
            let node = TlvNode::padding(first)?;
            self.position += 1;
            return Ok(node);
        }

        let (tag, tag_size) = Tag::decode(rest)?;
        let (length, length_size) = Length::decode(&rest[tag_size..])?;

        let from = tag_size + length_size;
        let available = rest.len() - from;
        let value_len = usize::try_from(length.value())
            .ok()
            .filter(|len| from.checked_add(*len).is_some());
        let to = match value_len {
            Some(len) if len <= available => from + len,
            _ => {
                return Err(TlvError::ValueTooShort {
                    needed: value_len,
                    available,
                });
            }
        };

        let value = &rest[from..to];
        let category = if tag.is_constructed() {
            Category::Constructed(self.nested(value)?.decode_all()?)
        } else {
            Category::Plain
        };

        log::trace!(
            "tag 0x{:X} at offset {}: {} value bytes, depth {}",
            tag.number(),
            self.position,
            value.len(),
            self.depth
        );

        self.position += to;
        Ok(TlvNode::from_parts(tag, length, value.to_vec(), category))
    }

    /// Decode every remaining node, in buffer order
    pub fn decode_all(mut self) -> TlvResult<Vec<TlvNode>> {
        let mut nodes = Vec::new();
        while self.has_remaining() {
            nodes.push(self.decode_node()?);
        }
        Ok(nodes)
    }
}

/// Decode every node in `bytes` with the default configuration
///
/// Empty input yields an empty forest.
pub fn parse(bytes: &[u8]) -> TlvResult<Vec<TlvNode>> {
    TlvDecoder::new(bytes).decode_all()
}

/// Decode every node in a whitespace-tolerant hex string
pub fn parse_hex(hex: &str) -> TlvResult<Vec<TlvNode>> {
    parse(&decode_hex(hex)?)
}
