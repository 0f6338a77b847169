//! Error types for polyglot-wire.

use thiserror::Error;

/// Failure to decode a value from the polyglot wire format.
///
/// There is one variant per wire type. The variant names the value whose tag
/// check, length or varint termination failed; failures of an inner length
/// or count are reported as the enclosing type's error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Slice header is malformed.
    #[error("invalid slice encoding")]
    InvalidSlice,

    /// Map header is malformed.
    #[error("invalid map encoding")]
    InvalidMap,

    /// Bytes value is malformed or truncated.
    #[error("invalid bytes encoding")]
    InvalidBytes,

    /// String value is malformed, truncated or not UTF-8.
    #[error("invalid string encoding")]
    InvalidString,

    /// Error value is malformed.
    #[error("invalid error encoding")]
    InvalidError,

    /// Bool value is malformed.
    #[error("invalid bool encoding")]
    InvalidBool,

    /// Uint8 value is malformed.
    #[error("invalid uint8 encoding")]
    InvalidUint8,

    /// Uint16 value is malformed.
    #[error("invalid uint16 encoding")]
    InvalidUint16,

    /// Uint32 value is malformed.
    #[error("invalid uint32 encoding")]
    InvalidUint32,

    /// Uint64 value is malformed.
    #[error("invalid uint64 encoding")]
    InvalidUint64,

    /// Int32 value is malformed.
    #[error("invalid int32 encoding")]
    InvalidInt32,

    /// Int64 value is malformed.
    #[error("invalid int64 encoding")]
    InvalidInt64,

    /// Float32 values are reserved and cannot be decoded.
    #[error("invalid float32 encoding")]
    InvalidFloat32,

    /// Float64 values are reserved and cannot be decoded.
    #[error("invalid float64 encoding")]
    InvalidFloat64,

    /// Buffer ended where a value was expected.
    #[error("buffer ended before a value tag")]
    Truncated,

    /// Collections nested deeper than the decoder allows.
    #[error("nesting deeper than {0} levels")]
    TooDeep(usize),

    /// Leading byte is not a tag that can start a value.
    #[error("unknown kind tag: {0:#04x}")]
    UnknownKind(u8),
}

/// Result type for codec operations.
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

/// Main error type for all polyglot-wire operations.
#[derive(Debug, Error)]
pub enum PolyglotError {
    /// The input bytes are not a valid encoding.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Configuration could not be parsed.
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Encoded context exceeds the configured maximum.
    #[error("Context size {size} exceeds maximum {max}")]
    ContextTooLarge {
        /// Size of the offered input in bytes.
        size: usize,
        /// Configured maximum in bytes.
        max: usize,
    },

    /// Bytes were left over after decoding a complete context.
    #[error("{0} trailing bytes after context")]
    TrailingBytes(usize),

    /// A pipeline stage rejected the context.
    #[error("Stage '{stage}' failed: {reason}")]
    Stage {
        /// Name of the failing stage.
        stage: String,
        /// Reason reported by the stage.
        reason: String,
    },
}

impl PolyglotError {
    /// Build a [`PolyglotError::Stage`] error.
    pub fn stage(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Stage {
            stage: stage.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias using PolyglotError.
pub type Result<T> = std::result::Result<T, PolyglotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_messages() {
        assert_eq!(DecodeError::InvalidString.to_string(), "invalid string encoding");
        assert_eq!(DecodeError::InvalidInt64.to_string(), "invalid int64 encoding");
        assert_eq!(DecodeError::UnknownKind(0x10).to_string(), "unknown kind tag: 0x10");
    }

    #[test]
    fn test_decode_error_converts() {
        let err: PolyglotError = DecodeError::InvalidMap.into();
        assert!(matches!(err, PolyglotError::Decode(DecodeError::InvalidMap)));
        assert_eq!(err.to_string(), "Decode error: invalid map encoding");
    }

    #[test]
    fn test_stage_error_message() {
        let err = PolyglotError::stage("auth", "missing token");
        assert!(matches!(&err, PolyglotError::Stage { stage, .. } if stage == "auth"));
        assert_eq!(err.to_string(), "Stage 'auth' failed: missing token");
    }
}
