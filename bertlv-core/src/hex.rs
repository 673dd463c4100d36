//! Hexadecimal string codec
//!
//! Decoding tolerates whitespace anywhere in the input but rejects odd digit
//! counts and non-hex characters. Encoding always produces uppercase,
//! zero-padded, even-length output.

use crate::error::TlvResult;

/// Decode a whitespace-tolerant hex string into bytes
pub fn decode_hex(input: &str) -> TlvResult<Vec<u8>> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(::hex::decode(compact)?)
}

/// Render bytes as an uppercase hex string
pub fn encode_hex(bytes: &[u8]) -> String {
    ::hex::encode_upper(bytes)
}

/// Render an integer as minimal even-length uppercase hex
///
/// `0xBB` renders as `"BB"`, `0x0A` as `"0A"`, zero as `"00"`.
pub fn uint_hex(value: u64) -> String {
    encode_hex(&crate::uint::bytes_of(value))
}
