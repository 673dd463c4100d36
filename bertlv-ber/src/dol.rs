//! Data Object List (DOL) parsing
//!
//! A DOL lists the tags and expected lengths of data objects a card wants
//! the terminal to supply later (PDOL, CDOL1, DDOL, ...). It is made of
//! tag/length headers only; there are no values to slice.

use crate::ber::decoder::TlvDecoder;
use bertlv_core::error::TlvResult;
use bertlv_core::hex::{decode_hex, uint_hex};
use serde::{Deserialize, Serialize};
use std::fmt;

/// List of data objects requested by a DOL
pub type Dol = Vec<DataObject>;

/// A tag together with the length its data object is expected to have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataObject {
    tag: u64,
    length: u64,
}

impl DataObject {
    pub fn new(tag: u64, length: u64) -> Self {
        Self { tag, length }
    }

    pub fn tag(&self) -> u64 {
        self.tag
    }

    /// Expected length of the data object
    pub fn length(&self) -> u64 {
        self.length
    }

    /// Parse a DOL from bytes
    ///
    /// The declared lengths are not used to bound anything: the cursor only
    /// moves past each tag and length.
    pub fn parse(bytes: &[u8]) -> TlvResult<Dol> {
        let mut decoder = TlvDecoder::new(bytes);
        let mut objects = Vec::new();
        while decoder.has_remaining() {
            let (tag, length) = decoder.decode_header()?;
            objects.push(Self::new(tag.number(), length.value()));
        }
        Ok(objects)
    }

    /// Parse a DOL from a whitespace-tolerant hex string
    pub fn parse_hex(hex: &str) -> TlvResult<Dol> {
        Self::parse(&decode_hex(hex)?)
    }
}

impl fmt::Display for DataObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{} ({} bytes)", uint_hex(self.tag), self.length)
    }
}
