//! Big-endian integer/byte primitives shared by tag and length encoding

/// Number of bytes in the minimal big-endian encoding of `value`
///
/// Zero still needs one byte.
pub fn byte_count(value: u64) -> usize {
    let significant = 8 - (value.leading_zeros() / 8) as usize;
    significant.max(1)
}

/// Minimal big-endian encoding of `value`
///
/// Zero is encoded as a single `0x00` byte, never as an empty sequence.
pub fn bytes_of(value: u64) -> Vec<u8> {
    let count = byte_count(value);
    value.to_be_bytes()[8 - count..].to_vec()
}

/// Accumulate big-endian bytes into an integer
///
/// Leading zero bytes are accepted. Returns `None` when the significant part
/// does not fit in 64 bits.
pub fn from_be_bytes(bytes: &[u8]) -> Option<u64> {
    let mut value = 0u64;
    for &byte in bytes {
        if value >> 56 != 0 {
            return None;
        }
        value = (value << 8) | u64::from(byte);
    }
    Some(value)
}
