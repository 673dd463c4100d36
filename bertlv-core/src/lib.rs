//! Core types and utilities for BER-TLV encoding
//!
//! This crate provides the error taxonomy, the integer/byte primitives shared
//! by tag and length encoding, and the hexadecimal string codec used by the
//! `parse_hex` entry points.

pub mod error;
pub mod hex;
pub mod uint;

pub use error::{TlvError, TlvResult};
pub use hex::{decode_hex, encode_hex, uint_hex};
pub use uint::{byte_count, bytes_of, from_be_bytes};
