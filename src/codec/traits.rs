//! `Encode` / `Decode` traits over the codec functions.
//!
//! Lets callers write `u32::decode(data)` or `T::skip(data)` generically
//! instead of picking the matching free function by hand.

use bytes::Bytes;

use super::decode::{self as de, take_bytes, take_string, take_string_slice};
use super::encode as en;
use super::sink::ByteSink;
use crate::error::DecodeResult;

/// A value that can be written to the polyglot wire format.
pub trait Encode {
    /// Append the tagged encoding of `self` to `sink`.
    fn encode(&self, sink: &mut ByteSink);

    /// Encode into a fresh buffer.
    fn to_bytes(&self) -> Vec<u8> {
        let mut sink = ByteSink::new();
        self.encode(&mut sink);
        sink.into_vec()
    }
}

/// A value that can be read from the polyglot wire format.
pub trait Decode: Sized {
    /// Decode a value, returning it together with the bytes that follow it.
    fn decode_from(data: &[u8]) -> DecodeResult<(Self, &[u8])>;

    /// Decode a value, ignoring what follows.
    fn decode(data: &[u8]) -> DecodeResult<Self> {
        Self::decode_from(data).map(|(value, _)| value)
    }

    /// Return the bytes after the value. Implementations should avoid
    /// materialising the payload.
    fn skip(data: &[u8]) -> DecodeResult<&[u8]> {
        Self::decode_from(data).map(|(_, rest)| rest)
    }
}

macro_rules! scalar_codec {
    ($ty:ty, $encode:path, $parts:path, $skip:path) => {
        impl Encode for $ty {
            #[inline]
            fn encode(&self, sink: &mut ByteSink) {
                $encode(sink, *self);
            }
        }

        impl Decode for $ty {
            #[inline]
            fn decode_from(data: &[u8]) -> DecodeResult<(Self, &[u8])> {
                $parts(data)
            }

            #[inline]
            fn skip(data: &[u8]) -> DecodeResult<&[u8]> {
                $skip(data)
            }
        }
    };
}

scalar_codec!(bool, en::encode_bool, de::bool_parts, de::skip_bool);
scalar_codec!(u8, en::encode_u8, de::u8_parts, de::skip_u8);
scalar_codec!(u16, en::encode_u16, de::u16_parts, de::skip_u16);
scalar_codec!(u32, en::encode_u32, de::u32_parts, de::skip_u32);
scalar_codec!(u64, en::encode_u64, de::u64_parts, de::skip_u64);
scalar_codec!(i32, en::encode_i32, de::i32_parts, de::skip_i32);
scalar_codec!(i64, en::encode_i64, de::i64_parts, de::skip_i64);

impl Encode for str {
    fn encode(&self, sink: &mut ByteSink) {
        en::encode_string(sink, self);
    }
}

impl Encode for String {
    fn encode(&self, sink: &mut ByteSink) {
        en::encode_string(sink, self);
    }
}

impl Decode for String {
    fn decode_from(data: &[u8]) -> DecodeResult<(Self, &[u8])> {
        take_string(data)
    }

    fn skip(data: &[u8]) -> DecodeResult<&[u8]> {
        de::skip_string(data)
    }
}

impl Encode for Bytes {
    fn encode(&self, sink: &mut ByteSink) {
        en::encode_bytes(sink, self);
    }
}

impl Decode for Bytes {
    fn decode_from(data: &[u8]) -> DecodeResult<(Self, &[u8])> {
        take_bytes(data)
    }

    fn skip(data: &[u8]) -> DecodeResult<&[u8]> {
        de::skip_bytes(data)
    }
}

/// A list of strings travels as a Slice with element kind String.
impl Encode for Vec<String> {
    fn encode(&self, sink: &mut ByteSink) {
        en::encode_string_slice(sink, self);
    }
}

impl Decode for Vec<String> {
    fn decode_from(data: &[u8]) -> DecodeResult<(Self, &[u8])> {
        take_string_slice(data)
    }

    fn skip(data: &[u8]) -> DecodeResult<&[u8]> {
        de::skip_string_slice(data)
    }
}
