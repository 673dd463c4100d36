//! BER-TLV header types (Tag, Length)

use bertlv_core::error::{TlvError, TlvResult};
use bertlv_core::uint::{byte_count, bytes_of, from_be_bytes};

/// Bit 6 of the first tag byte: the value is itself a sequence of TLVs
pub const CONSTRUCTED_BIT: u8 = 0x20;
/// Low five bits of the first tag byte all set: subsequent bytes follow
pub const LONG_FORM_TAG_MASK: u8 = 0x1F;
/// High bit of a subsequent tag byte (continuation) or of the first length byte (long form)
pub const CONTINUATION_BIT: u8 = 0x80;
/// Low nibble of a long-form first length byte: number of length bytes that follow
pub const LENGTH_OF_LENGTH_MASK: u8 = 0x0F;

/// Largest tag that still fits the 64-bit tag representation
const MAX_TAG_BYTES: usize = 8;

/// Check whether a byte is a padding byte (ISO 7816 Annex D.1)
///
/// `0x00` and `0xFF` may occur before, between, or after TLV-coded objects.
pub fn is_padding_byte(byte: u8) -> bool {
    byte == 0x00 || byte == 0xFF
}

/// BER-TLV tag
///
/// The tag is kept as the big-endian accumulation of all of its encoded
/// bytes, so `0xDF 0xDF 0xDF 0x33` is tag `0xDFDFDF33`. This matches how
/// EMV tags are written (`9F02`, `BF0C`, ...).
///
/// # Encoding Format
///
/// Short form:
/// ```text
/// Bits: 8 7 6 5 4 3 2 1
///       C C P T T T T T      (TTTTT != 11111)
/// ```
///
/// Long form:
/// ```text
/// First byte:      C C P 1 1 1 1 1
/// Following bytes: 1 x x x x x x x   (continue)
///                  0 x x x x x x x   (last)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag {
    number: u64,
    constructed: bool,
}

impl Tag {
    /// Get the tag value
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Check if the tag is constructed
    pub fn is_constructed(&self) -> bool {
        self.constructed
    }

    /// Check if the first tag byte announces the long form
    ///
    /// A long-form tag cut short by the end of the buffer still reports
    /// `true`.
    pub fn is_long_form(&self) -> bool {
        bytes_of(self.number)[0] & LONG_FORM_TAG_MASK == LONG_FORM_TAG_MASK
    }

    /// Encode tag to bytes (minimal big-endian)
    pub fn encode(&self) -> Vec<u8> {
        bytes_of(self.number)
    }

    /// Decode tag from the start of `data`
    ///
    /// # Returns
    /// Returns `Ok((Tag, bytes_consumed))` if successful.
    ///
    /// # Error Handling
    /// - `MissingType` if the buffer is empty
    /// - `TagTooLong` if the tag would need more than 64 bits
    ///
    /// A long-form tag cut short by the end of the buffer ends at the last
    /// available byte; the caller then fails on the missing length.
    pub fn decode(data: &[u8]) -> TlvResult<(Self, usize)> {
        let first = *data.first().ok_or(TlvError::MissingType)?;
        let constructed = first & CONSTRUCTED_BIT != 0;

        let mut size = 1;
        if first & LONG_FORM_TAG_MASK == LONG_FORM_TAG_MASK {
            for &byte in &data[1..] {
                size += 1;
                if byte & CONTINUATION_BIT == 0 {
                    break;
                }
            }
        }

        if size > MAX_TAG_BYTES {
            return Err(TlvError::TagTooLong { size });
        }
        let number = from_be_bytes(&data[..size]).ok_or(TlvError::TagTooLong { size })?;

        Ok((Self { number, constructed }, size))
    }

    /// Interpret an integer as a tag
    ///
    /// # Error Handling
    /// Returns `InvalidTag` unless the minimal encoding of `number` decodes to
    /// exactly one tag occupying all of its bytes. Padding bytes are not tags.
    pub fn from_number(number: u64) -> TlvResult<Self> {
        let bytes = bytes_of(number);
        if is_padding_byte(bytes[0]) {
            return Err(TlvError::InvalidTag(number));
        }
        let terminated = if bytes.len() == 1 {
            bytes[0] & LONG_FORM_TAG_MASK != LONG_FORM_TAG_MASK
        } else {
            bytes[bytes.len() - 1] & CONTINUATION_BIT == 0
        };
        match Self::decode(&bytes) {
            Ok((tag, size)) if terminated && size == bytes.len() => Ok(tag),
            _ => Err(TlvError::InvalidTag(number)),
        }
    }
}

/// BER-TLV length
///
/// Keeps the exact bytes the length was read from, so a node re-encodes
/// bit-exact even when the input used a non-minimal form (for example
/// `0x84 0x00 0x00 0x00 0x03` for length 3).
///
/// # Encoding Format
///
/// Short form:
/// ```text
/// Byte: 0 L L L L L L L
/// ```
///
/// Long form:
/// ```text
/// First byte:      1 x x x N N N N  (N = number of length bytes)
/// Following bytes: big-endian length value
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Length {
    value: u64,
    raw: Vec<u8>,
}

impl Length {
    /// Create a length with its canonical encoding
    ///
    /// Lengths up to 127 use the short form; longer ones use the long form
    /// with the minimal number of length bytes.
    pub fn new(length: usize) -> Self {
        let value = length as u64;
        let raw = if value <= 0x7F {
            vec![value as u8]
        } else {
            let mut raw = vec![CONTINUATION_BIT | byte_count(value) as u8];
            raw.extend_from_slice(&bytes_of(value));
            raw
        };
        Self { value, raw }
    }

    /// Get the length value
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Get the bytes that encode this length
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    /// Number of bytes that encode this length
    pub fn size(&self) -> usize {
        self.raw.len()
    }

    /// Consume the length, returning the bytes that encode it
    pub fn into_bytes(self) -> Vec<u8> {
        self.raw
    }

    /// Decode length from the start of `data`
    ///
    /// # Returns
    /// Returns `Ok((Length, bytes_consumed))` if successful.
    ///
    /// # Error Handling
    /// - `MissingLength` if the buffer is empty
    /// - `WrongLongLength` if fewer bytes remain than the long form declares
    /// - `ValueTooShort` (with no `needed`) if the length overflows 64 bits
    pub fn decode(data: &[u8]) -> TlvResult<(Self, usize)> {
        let first = *data.first().ok_or(TlvError::MissingLength)?;

        if first & CONTINUATION_BIT == 0 {
            return Ok((
                Self {
                    value: u64::from(first),
                    raw: vec![first],
                },
                1,
            ));
        }

        let size = usize::from(first & LENGTH_OF_LENGTH_MASK) + 1;
        if data.len() < size {
            return Err(TlvError::WrongLongLength {
                needed: size,
                available: data.len(),
            });
        }

        let value = from_be_bytes(&data[1..size]).ok_or(TlvError::ValueTooShort {
            needed: None,
            available: data.len() - size,
        })?;

        Ok((
            Self {
                value,
                raw: data[..size].to_vec(),
            },
            size,
        ))
    }
}
