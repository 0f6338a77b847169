//! Encoders: tag byte first, then the type's payload.
//!
//! Lengths and counts are written as complete Uint32 values, so a String
//! looks like this on the wire:
//! ```text
//! ┌────────┬────────┬──────────────┬──────────────┐
//! │ String │ Uint32 │ varint len   │ UTF-8 bytes  │
//! │  0x05  │  0x0a  │ 1..=5 bytes  │ len bytes    │
//! └────────┴────────┴──────────────┴──────────────┘
//! ```

use super::kind::{Kind, FALSE_BOOL, TRUE_BOOL};
use super::sink::ByteSink;
use super::varint::{write_varint, zigzag_encode32, zigzag_encode64};

/// Write a Nil marker.
#[inline]
pub fn encode_nil(sink: &mut ByteSink) {
    sink.push(Kind::Nil.as_byte());
}

/// Write a Map header; the caller writes `len` key/value pairs afterwards.
#[inline]
pub fn encode_map(sink: &mut ByteSink, len: u32, key_kind: Kind, value_kind: Kind) {
    sink.push(Kind::Map.as_byte());
    sink.push(key_kind.as_byte());
    sink.push(value_kind.as_byte());
    encode_u32(sink, len);
}

/// Write a Slice header; the caller writes `len` elements afterwards.
#[inline]
pub fn encode_slice(sink: &mut ByteSink, len: u32, kind: Kind) {
    sink.push(Kind::Slice.as_byte());
    sink.push(kind.as_byte());
    encode_u32(sink, len);
}

/// Write a length-prefixed byte string.
pub fn encode_bytes(sink: &mut ByteSink, value: &[u8]) {
    sink.push(Kind::Bytes.as_byte());
    encode_u32(sink, value.len() as u32);
    sink.extend(value);
}

/// Write a length-prefixed UTF-8 string. The length counts bytes, not chars.
pub fn encode_string(sink: &mut ByteSink, value: &str) {
    sink.push(Kind::String.as_byte());
    encode_u32(sink, value.len() as u32);
    sink.extend(value.as_bytes());
}

/// Write an error message: the Error tag followed by a full String value.
pub fn encode_error(sink: &mut ByteSink, message: &str) {
    sink.push(Kind::Error.as_byte());
    encode_string(sink, message);
}

#[inline]
pub fn encode_bool(sink: &mut ByteSink, value: bool) {
    sink.push(Kind::Bool.as_byte());
    sink.push(if value { TRUE_BOOL } else { FALSE_BOOL });
}

#[inline]
pub fn encode_u8(sink: &mut ByteSink, value: u8) {
    sink.push(Kind::Uint8.as_byte());
    sink.push(value);
}

#[inline]
pub fn encode_u16(sink: &mut ByteSink, value: u16) {
    sink.push(Kind::Uint16.as_byte());
    write_varint(sink, value as u64);
}

#[inline]
pub fn encode_u32(sink: &mut ByteSink, value: u32) {
    sink.push(Kind::Uint32.as_byte());
    write_varint(sink, value as u64);
}

#[inline]
pub fn encode_u64(sink: &mut ByteSink, value: u64) {
    sink.push(Kind::Uint64.as_byte());
    write_varint(sink, value);
}

/// Write a zigzag-mapped signed 32-bit value.
#[inline]
pub fn encode_i32(sink: &mut ByteSink, value: i32) {
    sink.push(Kind::Int32.as_byte());
    write_varint(sink, zigzag_encode32(value) as u64);
}

/// Write a zigzag-mapped signed 64-bit value.
#[inline]
pub fn encode_i64(sink: &mut ByteSink, value: i64) {
    sink.push(Kind::Int64.as_byte());
    write_varint(sink, zigzag_encode64(value));
}

/// Write a Slice of Strings: header with element kind String, then each element.
pub fn encode_string_slice<S: AsRef<str>>(sink: &mut ByteSink, values: &[S]) {
    encode_slice(sink, values.len() as u32, Kind::String);
    for value in values {
        encode_string(sink, value.as_ref());
    }
}
