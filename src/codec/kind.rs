//! Kind tags.
//!
//! Every encoded value starts with one of these bytes:
//! ```text
//! ┌─────┬───────┬─────┬─────┬───────┬────────┬───────┬──────┐
//! │ Nil │ Slice │ Map │ Any │ Bytes │ String │ Error │ Bool │
//! │  0  │   1   │  2  │  3  │   4   │   5    │   6   │  7   │
//! ├─────┴┬──────┴─┬───┴────┬┴───────┴┬───────┴┬──────┴──┬───┴─────┐
//! │ U8 8 │ U16 9  │ U32 10 │ U64 11  │ I32 12 │ I64 13  │ F32/F64 │
//! └──────┴────────┴────────┴─────────┴────────┴─────────┴ 14 / 15 ┘
//! ```

use crate::error::DecodeError;

/// Continuation bit of a varint byte.
pub const CONTINUATION: u8 = 0x80;

/// Maximum varint length of a 16-bit value.
pub const VARINT_LEN_16: usize = 3;

/// Maximum varint length of a 32-bit value.
pub const VARINT_LEN_32: usize = 5;

/// Maximum varint length of a 64-bit value.
pub const VARINT_LEN_64: usize = 10;

/// Bool payload for `false`.
pub const FALSE_BOOL: u8 = 0;

/// Bool payload for `true`.
pub const TRUE_BOOL: u8 = 1;

/// One-byte wire type discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Kind {
    Nil = 0,
    Slice = 1,
    Map = 2,
    /// Collection element kind meaning "each element carries its own tag".
    Any = 3,
    Bytes = 4,
    String = 5,
    Error = 6,
    Bool = 7,
    Uint8 = 8,
    Uint16 = 9,
    Uint32 = 10,
    Uint64 = 11,
    Int32 = 12,
    Int64 = 13,
    /// Reserved; no encoder exists.
    Float32 = 14,
    /// Reserved; no encoder exists.
    Float64 = 15,
}

impl Kind {
    /// The tag byte written on the wire.
    #[inline]
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Check whether `byte` is this kind's tag.
    #[inline]
    pub fn matches(self, byte: u8) -> bool {
        self as u8 == byte
    }
}

impl TryFrom<u8> for Kind {
    type Error = DecodeError;

    fn try_from(byte: u8) -> Result<Self, DecodeError> {
        Ok(match byte {
            0 => Kind::Nil,
            1 => Kind::Slice,
            2 => Kind::Map,
            3 => Kind::Any,
            4 => Kind::Bytes,
            5 => Kind::String,
            6 => Kind::Error,
            7 => Kind::Bool,
            8 => Kind::Uint8,
            9 => Kind::Uint16,
            10 => Kind::Uint32,
            11 => Kind::Uint64,
            12 => Kind::Int32,
            13 => Kind::Int64,
            14 => Kind::Float32,
            15 => Kind::Float64,
            other => return Err(DecodeError::UnknownKind(other)),
        })
    }
}

impl From<Kind> for u8 {
    fn from(kind: Kind) -> u8 {
        kind as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_values_are_stable() {
        assert_eq!(Kind::Nil.as_byte(), 0);
        assert_eq!(Kind::Slice.as_byte(), 1);
        assert_eq!(Kind::Map.as_byte(), 2);
        assert_eq!(Kind::Any.as_byte(), 3);
        assert_eq!(Kind::Bytes.as_byte(), 4);
        assert_eq!(Kind::String.as_byte(), 5);
        assert_eq!(Kind::Error.as_byte(), 6);
        assert_eq!(Kind::Bool.as_byte(), 7);
        assert_eq!(Kind::Uint8.as_byte(), 8);
        assert_eq!(Kind::Uint16.as_byte(), 9);
        assert_eq!(Kind::Uint32.as_byte(), 10);
        assert_eq!(Kind::Uint64.as_byte(), 11);
        assert_eq!(Kind::Int32.as_byte(), 12);
        assert_eq!(Kind::Int64.as_byte(), 13);
        assert_eq!(Kind::Float32.as_byte(), 14);
        assert_eq!(Kind::Float64.as_byte(), 15);
    }

    #[test]
    fn test_try_from_every_tag() {
        for byte in 0u8..=15 {
            let kind = Kind::try_from(byte).unwrap();
            assert_eq!(u8::from(kind), byte);
            assert!(kind.matches(byte));
        }
    }

    #[test]
    fn test_try_from_rejects_unknown() {
        assert_eq!(Kind::try_from(16), Err(DecodeError::UnknownKind(16)));
        assert_eq!(Kind::try_from(0xFF), Err(DecodeError::UnknownKind(0xFF)));
    }
}
