use thiserror::Error;

/// Main error type for BER-TLV operations
///
/// Every error is terminal for the call that produced it: no partial trees
/// are returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TlvError {
    #[error("Missing type: buffer ended before a tag byte")]
    MissingType,

    #[error("Missing length: buffer ended before a length byte")]
    MissingLength,

    #[error("Wrong long length: need {needed} length bytes, have {available}")]
    WrongLongLength { needed: usize, available: usize },

    /// `needed` is `None` when the declared length overflows size arithmetic
    #[error("Value too short: need {needed:?} bytes, have {available}")]
    ValueTooShort {
        needed: Option<usize>,
        available: usize,
    },

    #[error("Failed to parse hex string: {0}")]
    FailedToParseHexString(#[from] ::hex::FromHexError),

    #[error("Wrong padding byte: 0x{0:02X}")]
    WrongPaddingByte(u8),

    #[error("Tag too long: {size} bytes (max 8)")]
    TagTooLong { size: usize },

    #[error("Nesting too deep: more than {max} constructed levels")]
    NestingTooDeep { max: usize },

    #[error("Invalid tag: 0x{0:X}")]
    InvalidTag(u64),
}

/// Result type alias for BER-TLV operations
pub type TlvResult<T> = Result<T, TlvError>;
