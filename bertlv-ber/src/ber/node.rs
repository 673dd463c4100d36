//! Decoded BER-TLV data object

use crate::ber::decoder::TlvDecoder;
use crate::ber::types::{Length, Tag, is_padding_byte};
use bertlv_core::error::{TlvError, TlvResult};
use bertlv_core::hex::{decode_hex, encode_hex, uint_hex};
use bertlv_core::uint::{byte_count, bytes_of};
use serde::Serialize;
use std::fmt;

/// Whether a node's value is opaque data or a sequence of nested nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Category {
    /// Opaque value
    Plain,
    /// Value is the concatenation of these children's encodings
    Constructed(Vec<TlvNode>),
}

/// A BER-TLV data object
///
/// Nodes are immutable once built. For a constructed node the children always
/// re-encode to exactly `value`, and every node re-encodes to exactly the
/// bytes it was decoded from:
///
/// ```text
/// bytes = tag (minimal big-endian) ++ length bytes (as read) ++ value
/// ```
///
/// A padding node stands for a single stray `0x00` or `0xFF` byte. Its tag is
/// that byte and it has neither length bytes nor value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TlvNode {
    tag: u64,
    #[serde(with = "serde_bytes")]
    length_bytes: Vec<u8>,
    #[serde(with = "serde_bytes")]
    value: Vec<u8>,
    category: Category,
}

impl TlvNode {
    /// Assemble a node from already-decoded parts
    pub(crate) fn from_parts(tag: Tag, length: Length, value: Vec<u8>, category: Category) -> Self {
        Self {
            tag: tag.number(),
            length_bytes: length.into_bytes(),
            value,
            category,
        }
    }

    /// Create a node with a freshly computed length encoding
    ///
    /// If the tag is constructed, `value` is decoded into children.
    ///
    /// # Error Handling
    /// - `InvalidTag` if `tag` is not exactly one well-formed tag encoding
    /// - any decoding error from the children of a constructed value
    pub fn new(tag: u64, value: Vec<u8>) -> TlvResult<Self> {
        let tag = Tag::from_number(tag)?;
        let category = if tag.is_constructed() {
            Category::Constructed(TlvDecoder::new(&value).decode_all()?)
        } else {
            Category::Plain
        };
        Ok(Self::from_parts(tag, Length::new(value.len()), value, category))
    }

    /// Create a constructed node from its children
    ///
    /// No depth limit applies here. A tree nested deeper than
    /// [`DecoderConfig::DEFAULT_MAX_DEPTH`](crate::ber::decoder::DecoderConfig::DEFAULT_MAX_DEPTH)
    /// only decodes back with a decoder configured for that depth.
    ///
    /// # Error Handling
    /// Returns `InvalidTag` unless `tag` is a well-formed constructed tag.
    pub fn constructed(tag: u64, children: Vec<TlvNode>) -> TlvResult<Self> {
        let tag = Tag::from_number(tag)?;
        if !tag.is_constructed() {
            return Err(TlvError::InvalidTag(tag.number()));
        }
        let mut value = Vec::with_capacity(children.iter().map(TlvNode::encoded_len).sum());
        for child in &children {
            child.write_to(&mut value);
        }
        Ok(Self::from_parts(
            tag,
            Length::new(value.len()),
            value,
            Category::Constructed(children),
        ))
    }

    /// Create a padding node
    ///
    /// # Error Handling
    /// Returns `WrongPaddingByte` unless `byte` is `0x00` or `0xFF`.
    pub fn padding(byte: u8) -> TlvResult<Self> {
        if !is_padding_byte(byte) {
            return Err(TlvError::WrongPaddingByte(byte));
        }
        Ok(Self {
            tag: u64::from(byte),
            length_bytes: Vec::new(),
            value: Vec::new(),
            category: Category::Plain,
        })
    }

    /// Decode every node in `bytes`
    pub fn parse(bytes: &[u8]) -> TlvResult<Vec<Self>> {
        TlvDecoder::new(bytes).decode_all()
    }

    /// Decode every node in a hex string
    pub fn parse_hex(hex: &str) -> TlvResult<Vec<Self>> {
        Self::parse(&decode_hex(hex)?)
    }

    pub fn tag(&self) -> u64 {
        self.tag
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Bytes that encoded the value's length
    pub fn length_bytes(&self) -> &[u8] {
        &self.length_bytes
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Children of a constructed node, empty for a plain one
    pub fn children(&self) -> &[TlvNode] {
        match &self.category {
            Category::Constructed(children) => children,
            Category::Plain => &[],
        }
    }

    pub fn is_constructed(&self) -> bool {
        matches!(self.category, Category::Constructed(_))
    }

    /// Parsed and built nodes always carry at least one length byte
    pub fn is_padding(&self) -> bool {
        self.length_bytes.is_empty()
    }

    /// Number of bytes this node encodes to
    pub fn encoded_len(&self) -> usize {
        byte_count(self.tag) + self.length_bytes.len() + self.value.len()
    }

    /// Append this node's encoding to `buffer`
    pub fn write_to(&self, buffer: &mut Vec<u8>) {
        buffer.extend_from_slice(&bytes_of(self.tag));
        buffer.extend_from_slice(&self.length_bytes);
        buffer.extend_from_slice(&self.value);
    }

    /// Encode this node back to bytes
    pub fn bytes(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.encoded_len());
        self.write_to(&mut buffer);
        buffer
    }

    /// Find the first node with `tag`, searching this node then its
    /// descendants depth-first
    pub fn find(&self, tag: u64) -> Option<&TlvNode> {
        if !self.is_padding() && self.tag == tag {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(tag))
    }

    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        write!(f, "{:width$}", "", width = indent * 2)?;
        self.fmt_line(f)?;
        for child in self.children() {
            writeln!(f)?;
            child.fmt_tree(f, indent + 1)?;
        }
        Ok(())
    }

    fn fmt_line(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_padding() {
            write!(f, "0x{} (padding)", uint_hex(self.tag))
        } else {
            write!(f, "0x{} -> 0x{}", uint_hex(self.tag), encode_hex(&self.value))
        }
    }
}

/// `0xC1 -> 0x01`; the alternate form `{:#}` prints the whole subtree
impl fmt::Display for TlvNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.fmt_tree(f, 0)
        } else {
            self.fmt_line(f)
        }
    }
}
