//! Error types for record decoding.

use thiserror::Error;

/// Errors raised while decoding records or event streams.
///
/// Encoding never fails; every variant comes from a read path.
#[derive(Error, Debug)]
pub enum FormatError {
    /// I/O error on the underlying stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Tried to read past the end of the input.
    #[error("unexpected end of buffer at offset {offset}, need {need} bytes, have {have}")]
    Truncated {
        /// Current offset in buffer.
        offset: usize,
        /// Bytes requested.
        need: usize,
        /// Bytes remaining.
        have: usize,
    },

    /// Input length does not match the fixed record size.
    #[error("record length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch {
        /// Fixed record size (or a multiple of it).
        expected: usize,
        /// Length of the given input.
        actual: usize,
    },

    /// A boolean byte held something other than 0 or 1.
    #[error("invalid boolean for `{field}` at offset {offset}: {value:#04x}")]
    InvalidBool {
        /// Field name.
        field: &'static str,
        /// Offset of the offending byte.
        offset: usize,
        /// Raw byte value.
        value: u8,
    },

    /// Stream does not start with the expected magic bytes.
    #[error("not a jec record stream (bad magic)")]
    BadMagic,

    /// Stream format version is not understood by this reader.
    #[error("unsupported stream version: {0}")]
    UnsupportedVersion(u16),

    /// Declared jet count exceeds the per-event limit.
    #[error("event declares {count} jets, limit is {max}")]
    Oversized {
        /// Declared count.
        count: u32,
        /// Allowed maximum.
        max: u32,
    },
}

/// Result alias for decoding operations.
pub type Result<T> = std::result::Result<T, FormatError>;
