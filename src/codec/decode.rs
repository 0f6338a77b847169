//! Decoders and their skip counterparts.
//!
//! Every type comes as a pair over the same unconsumed slice:
//!
//! - `decode_*` validates the tag and returns the parsed value without
//!   advancing anything.
//! - `skip_*` performs the same checks and length computation and returns
//!   the bytes that follow the value, discarding its content.
//!
//! Both sides of a pair go through one shared `*_parts` helper, so they
//! can never disagree on where a value ends.
//!
//! # Example
//!
//! ```
//! use polyglot_wire::codec::{decode_string, skip_string, decode_i64, skip_i64};
//!
//! let data = [0x05, 0x0a, 0x02, b'h', b'i', 0x0d, 0x16];
//! assert_eq!(decode_string(&data).unwrap(), "hi");
//! let data = skip_string(&data).unwrap();
//! assert_eq!(decode_i64(data).unwrap(), 11);
//! assert!(skip_i64(data).unwrap().is_empty());
//! ```

use bytes::Bytes;

use super::kind::{Kind, FALSE_BOOL, TRUE_BOOL, VARINT_LEN_16, VARINT_LEN_32, VARINT_LEN_64};
use super::varint::{read_varint, zigzag_decode32, zigzag_decode64};
use crate::error::{DecodeError, DecodeResult};

/// Decoded Slice header. Elements follow the header on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceHeader {
    /// Declared element kind.
    pub kind: Kind,
    /// Number of elements.
    pub len: u32,
}

/// Decoded Map header. Key/value pairs follow the header on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapHeader {
    /// Declared key kind.
    pub key_kind: Kind,
    /// Declared value kind.
    pub value_kind: Kind,
    /// Number of entries.
    pub len: u32,
}

// Shared helpers

#[inline]
fn expect_tag(data: &[u8], kind: Kind, err: DecodeError) -> DecodeResult<&[u8]> {
    match data.first() {
        Some(&tag) if kind.matches(tag) => Ok(&data[1..]),
        _ => Err(err),
    }
}

#[inline]
fn uint_parts(
    data: &[u8],
    kind: Kind,
    max_len: usize,
    bits: u32,
    err: DecodeError,
) -> DecodeResult<(u64, &[u8])> {
    let rest = expect_tag(data, kind, err)?;
    let (value, len) = read_varint(rest, max_len, bits).ok_or(err)?;
    Ok((value, &rest[len..]))
}

/// Tagged Uint32 length or count, reported as the enclosing type's error.
#[inline]
fn length_prefix(data: &[u8], err: DecodeError) -> DecodeResult<(u32, &[u8])> {
    let (len, rest) = uint_parts(data, Kind::Uint32, VARINT_LEN_32, 32, err)?;
    Ok((len as u32, rest))
}

/// Returns `(payload, rest)` for a length-prefixed value of `kind`.
#[inline]
fn blob_parts(data: &[u8], kind: Kind, err: DecodeError) -> DecodeResult<(&[u8], &[u8])> {
    let rest = expect_tag(data, kind, err)?;
    let (len, rest) = length_prefix(rest, err)?;
    let len = len as usize;
    if rest.len() < len {
        return Err(err);
    }
    Ok(rest.split_at(len))
}

#[inline]
fn utf8(payload: &[u8], err: DecodeError) -> DecodeResult<&str> {
    std::str::from_utf8(payload).map_err(|_| err)
}

pub(crate) fn slice_parts(data: &[u8]) -> DecodeResult<(SliceHeader, &[u8])> {
    let err = DecodeError::InvalidSlice;
    let rest = expect_tag(data, Kind::Slice, err)?;
    let (&kind, rest) = rest.split_first().ok_or(err)?;
    let kind = Kind::try_from(kind).map_err(|_| err)?;
    let (len, rest) = length_prefix(rest, err)?;
    Ok((SliceHeader { kind, len }, rest))
}

pub(crate) fn map_parts(data: &[u8]) -> DecodeResult<(MapHeader, &[u8])> {
    let err = DecodeError::InvalidMap;
    let rest = expect_tag(data, Kind::Map, err)?;
    if rest.len() < 2 {
        return Err(err);
    }
    let key_kind = Kind::try_from(rest[0]).map_err(|_| err)?;
    let value_kind = Kind::try_from(rest[1]).map_err(|_| err)?;
    let (len, rest) = length_prefix(&rest[2..], err)?;
    Ok((
        MapHeader {
            key_kind,
            value_kind,
            len,
        },
        rest,
    ))
}

fn string_parts(data: &[u8]) -> DecodeResult<(&str, &[u8])> {
    let err = DecodeError::InvalidString;
    let (payload, rest) = blob_parts(data, Kind::String, err)?;
    Ok((utf8(payload, err)?, rest))
}

fn error_parts(data: &[u8]) -> DecodeResult<(&str, &[u8])> {
    let err = DecodeError::InvalidError;
    let rest = expect_tag(data, Kind::Error, err)?;
    let (payload, rest) = blob_parts(rest, Kind::String, err)?;
    Ok((utf8(payload, err)?, rest))
}

pub(crate) fn bool_parts(data: &[u8]) -> DecodeResult<(bool, &[u8])> {
    let err = DecodeError::InvalidBool;
    let rest = expect_tag(data, Kind::Bool, err)?;
    match rest.split_first() {
        Some((&TRUE_BOOL, rest)) => Ok((true, rest)),
        Some((&FALSE_BOOL, rest)) => Ok((false, rest)),
        _ => Err(err),
    }
}

pub(crate) fn u8_parts(data: &[u8]) -> DecodeResult<(u8, &[u8])> {
    let err = DecodeError::InvalidUint8;
    let rest = expect_tag(data, Kind::Uint8, err)?;
    let (&value, rest) = rest.split_first().ok_or(err)?;
    Ok((value, rest))
}

#[inline]
pub(crate) fn u16_parts(data: &[u8]) -> DecodeResult<(u16, &[u8])> {
    let (v, rest) = uint_parts(data, Kind::Uint16, VARINT_LEN_16, 16, DecodeError::InvalidUint16)?;
    Ok((v as u16, rest))
}

#[inline]
pub(crate) fn u32_parts(data: &[u8]) -> DecodeResult<(u32, &[u8])> {
    let (v, rest) = uint_parts(data, Kind::Uint32, VARINT_LEN_32, 32, DecodeError::InvalidUint32)?;
    Ok((v as u32, rest))
}

#[inline]
pub(crate) fn u64_parts(data: &[u8]) -> DecodeResult<(u64, &[u8])> {
    uint_parts(data, Kind::Uint64, VARINT_LEN_64, 64, DecodeError::InvalidUint64)
}

#[inline]
pub(crate) fn i32_parts(data: &[u8]) -> DecodeResult<(i32, &[u8])> {
    let (v, rest) = uint_parts(data, Kind::Int32, VARINT_LEN_32, 32, DecodeError::InvalidInt32)?;
    Ok((zigzag_decode32(v as u32), rest))
}

#[inline]
pub(crate) fn i64_parts(data: &[u8]) -> DecodeResult<(i64, &[u8])> {
    let (v, rest) = uint_parts(data, Kind::Int64, VARINT_LEN_64, 64, DecodeError::InvalidInt64)?;
    Ok((zigzag_decode64(v), rest))
}

// Nil

/// Check whether the next value is Nil.
#[inline]
pub fn decode_nil(data: &[u8]) -> bool {
    data.first().is_some_and(|&tag| Kind::Nil.matches(tag))
}

/// Step past a Nil marker if one is present; otherwise return `data` unchanged.
#[inline]
pub fn skip_nil(data: &[u8]) -> &[u8] {
    if decode_nil(data) {
        &data[1..]
    } else {
        data
    }
}

// Collection headers

/// Decode a Slice header. Does not touch the elements.
pub fn decode_slice(data: &[u8]) -> DecodeResult<SliceHeader> {
    slice_parts(data).map(|(header, _)| header)
}

/// Skip a Slice header, returning the bytes where the first element starts.
pub fn skip_slice(data: &[u8]) -> DecodeResult<&[u8]> {
    slice_parts(data).map(|(_, rest)| rest)
}

/// Decode a Map header. Does not touch the entries.
pub fn decode_map(data: &[u8]) -> DecodeResult<MapHeader> {
    map_parts(data).map(|(header, _)| header)
}

/// Skip a Map header, returning the bytes where the first key starts.
pub fn skip_map(data: &[u8]) -> DecodeResult<&[u8]> {
    map_parts(data).map(|(_, rest)| rest)
}

// Length-prefixed values

/// Decode a Bytes value into an owned buffer.
pub fn decode_bytes(data: &[u8]) -> DecodeResult<Bytes> {
    take_bytes(data).map(|(value, _)| value)
}

pub fn skip_bytes(data: &[u8]) -> DecodeResult<&[u8]> {
    blob_parts(data, Kind::Bytes, DecodeError::InvalidBytes).map(|(_, rest)| rest)
}

/// Decode a String value into an owned string.
pub fn decode_string(data: &[u8]) -> DecodeResult<String> {
    take_string(data).map(|(value, _)| value)
}

/// Skip a String value. The payload is still checked for UTF-8.
pub fn skip_string(data: &[u8]) -> DecodeResult<&[u8]> {
    string_parts(data).map(|(_, rest)| rest)
}

/// Decode an Error value, returning its message.
pub fn decode_error(data: &[u8]) -> DecodeResult<String> {
    take_error(data).map(|(value, _)| value)
}

pub fn skip_error(data: &[u8]) -> DecodeResult<&[u8]> {
    error_parts(data).map(|(_, rest)| rest)
}

// Scalars

pub fn decode_bool(data: &[u8]) -> DecodeResult<bool> {
    bool_parts(data).map(|(v, _)| v)
}

pub fn skip_bool(data: &[u8]) -> DecodeResult<&[u8]> {
    bool_parts(data).map(|(_, rest)| rest)
}

pub fn decode_u8(data: &[u8]) -> DecodeResult<u8> {
    u8_parts(data).map(|(v, _)| v)
}

pub fn skip_u8(data: &[u8]) -> DecodeResult<&[u8]> {
    u8_parts(data).map(|(_, rest)| rest)
}

pub fn decode_u16(data: &[u8]) -> DecodeResult<u16> {
    u16_parts(data).map(|(v, _)| v)
}

pub fn skip_u16(data: &[u8]) -> DecodeResult<&[u8]> {
    u16_parts(data).map(|(_, rest)| rest)
}

pub fn decode_u32(data: &[u8]) -> DecodeResult<u32> {
    u32_parts(data).map(|(v, _)| v)
}

pub fn skip_u32(data: &[u8]) -> DecodeResult<&[u8]> {
    u32_parts(data).map(|(_, rest)| rest)
}

pub fn decode_u64(data: &[u8]) -> DecodeResult<u64> {
    u64_parts(data).map(|(v, _)| v)
}

pub fn skip_u64(data: &[u8]) -> DecodeResult<&[u8]> {
    u64_parts(data).map(|(_, rest)| rest)
}

pub fn decode_i32(data: &[u8]) -> DecodeResult<i32> {
    i32_parts(data).map(|(v, _)| v)
}

pub fn skip_i32(data: &[u8]) -> DecodeResult<&[u8]> {
    i32_parts(data).map(|(_, rest)| rest)
}

pub fn decode_i64(data: &[u8]) -> DecodeResult<i64> {
    i64_parts(data).map(|(v, _)| v)
}

pub fn skip_i64(data: &[u8]) -> DecodeResult<&[u8]> {
    i64_parts(data).map(|(_, rest)| rest)
}

// Slice of strings

fn string_slice_header(data: &[u8]) -> DecodeResult<(u32, &[u8])> {
    let (header, rest) = slice_parts(data)?;
    if header.kind != Kind::String {
        return Err(DecodeError::InvalidSlice);
    }
    Ok((header.len, rest))
}

/// Decode a Slice of Strings, returning the elements and the bytes after them.
pub fn take_string_slice(data: &[u8]) -> DecodeResult<(Vec<String>, &[u8])> {
    let (len, mut rest) = string_slice_header(data)?;
    // Every element occupies at least one byte.
    let mut values = Vec::with_capacity((len as usize).min(rest.len()));
    for _ in 0..len {
        values.push(decode_string(rest)?);
        rest = skip_string(rest)?;
    }
    Ok((values, rest))
}

pub fn decode_string_slice(data: &[u8]) -> DecodeResult<Vec<String>> {
    take_string_slice(data).map(|(values, _)| values)
}

/// Skip a Slice of Strings, header and elements.
pub fn skip_string_slice(data: &[u8]) -> DecodeResult<&[u8]> {
    let (len, mut rest) = string_slice_header(data)?;
    for _ in 0..len {
        rest = skip_string(rest)?;
    }
    Ok(rest)
}

// `(value, rest)` readers used by the typed traits.

pub(crate) fn take_bytes(data: &[u8]) -> DecodeResult<(Bytes, &[u8])> {
    let (payload, rest) = blob_parts(data, Kind::Bytes, DecodeError::InvalidBytes)?;
    Ok((Bytes::copy_from_slice(payload), rest))
}

pub(crate) fn take_string(data: &[u8]) -> DecodeResult<(String, &[u8])> {
    string_parts(data).map(|(s, rest)| (s.to_owned(), rest))
}

pub(crate) fn take_error(data: &[u8]) -> DecodeResult<(String, &[u8])> {
    error_parts(data).map(|(s, rest)| (s.to_owned(), rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode::*;
    use crate::codec::ByteSink;

    fn encoded(f: impl FnOnce(&mut ByteSink)) -> Vec<u8> {
        let mut sink = ByteSink::new();
        f(&mut sink);
        sink.into_vec()
    }

    #[test]
    fn test_string_roundtrip_and_skip() {
        let mut data = encoded(|s| encode_string(s, "hello"));
        data.extend_from_slice(&[0xAA, 0xBB]);

        assert_eq!(decode_string(&data).unwrap(), "hello");
        assert_eq!(skip_string(&data).unwrap(), &[0xAA, 0xBB]);
    }

    #[test]
    fn test_empty_string() {
        let data = encoded(|s| encode_string(s, ""));
        assert_eq!(decode_string(&data).unwrap(), "");
        assert!(skip_string(&data).unwrap().is_empty());
    }

    #[test]
    fn test_bytes_are_copied() {
        let data = encoded(|s| encode_bytes(s, b"HELLO WORLD"));
        let decoded = decode_bytes(&data).unwrap();
        assert_eq!(&decoded[..], b"HELLO WORLD");
        drop(data);
        assert_eq!(decoded.len(), 11);
    }

    #[test]
    fn test_tag_mismatch_is_type_specific() {
        let data = encoded(|s| encode_u32(s, 7));
        assert_eq!(decode_string(&data), Err(DecodeError::InvalidString));
        assert_eq!(skip_string(&data), Err(DecodeError::InvalidString));
        assert_eq!(decode_bytes(&data), Err(DecodeError::InvalidBytes));
        assert_eq!(decode_bool(&data), Err(DecodeError::InvalidBool));
        assert_eq!(decode_u8(&data), Err(DecodeError::InvalidUint8));
        assert_eq!(decode_u16(&data), Err(DecodeError::InvalidUint16));
        assert_eq!(decode_u64(&data), Err(DecodeError::InvalidUint64));
        assert_eq!(decode_i32(&data), Err(DecodeError::InvalidInt32));
        assert_eq!(decode_i64(&data), Err(DecodeError::InvalidInt64));
        assert_eq!(decode_slice(&data), Err(DecodeError::InvalidSlice));
        assert_eq!(decode_map(&data), Err(DecodeError::InvalidMap));
        assert_eq!(decode_error(&data), Err(DecodeError::InvalidError));
        assert_eq!(decode_u32(&data), Ok(7));
    }

    #[test]
    fn test_empty_input_fails() {
        assert_eq!(decode_string(&[]), Err(DecodeError::InvalidString));
        assert_eq!(skip_i64(&[]), Err(DecodeError::InvalidInt64));
        assert_eq!(decode_map(&[]), Err(DecodeError::InvalidMap));
        assert!(!decode_nil(&[]));
    }

    #[test]
    fn test_truncated_payload_fails() {
        let data = encoded(|s| encode_string(s, "truncate me"));
        let short = &data[..data.len() - 1];
        assert_eq!(decode_string(short), Err(DecodeError::InvalidString));
        assert_eq!(skip_string(short), Err(DecodeError::InvalidString));
    }

    #[test]
    fn test_bad_length_prefix_reported_as_outer_type() {
        // String tag followed by an Int32-tagged length.
        let data = [0x05, 0x0c, 0x02, b'h', b'i'];
        assert_eq!(decode_string(&data), Err(DecodeError::InvalidString));
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let data = [0x05, 0x0a, 0x02, 0xff, 0xfe];
        assert_eq!(decode_string(&data), Err(DecodeError::InvalidString));
        assert_eq!(skip_string(&data), Err(DecodeError::InvalidString));
    }

    #[test]
    fn test_integers_roundtrip() {
        let data = encoded(|s| encode_u16(s, u16::MAX));
        assert_eq!(decode_u16(&data).unwrap(), u16::MAX);
        let data = encoded(|s| encode_u32(s, u32::MAX));
        assert_eq!(decode_u32(&data).unwrap(), u32::MAX);
        let data = encoded(|s| encode_u64(s, u64::MAX));
        assert_eq!(decode_u64(&data).unwrap(), u64::MAX);
        let data = encoded(|s| encode_i32(s, i32::MIN));
        assert_eq!(decode_i32(&data).unwrap(), i32::MIN);
        let data = encoded(|s| encode_i64(s, i64::MIN));
        assert_eq!(decode_i64(&data).unwrap(), i64::MIN);
    }

    #[test]
    fn test_negative_int64_restores_sign() {
        for v in [-1i64, -11, -1_000_000_000_000] {
            let data = encoded(|s| encode_i64(s, v));
            assert_eq!(decode_i64(&data).unwrap(), v);
        }
    }

    #[test]
    fn test_unterminated_int_fails() {
        let data = [0x0c, 0x80, 0x80, 0x80, 0x80, 0x80, 0x01];
        assert_eq!(decode_i32(&data), Err(DecodeError::InvalidInt32));
        assert_eq!(skip_i32(&data), Err(DecodeError::InvalidInt32));
    }

    #[test]
    fn test_bool_and_u8() {
        let mut data = encoded(|s| encode_bool(s, true));
        data.extend(encoded(|s| encode_u8(s, 42)));

        assert!(decode_bool(&data).unwrap());
        let rest = skip_bool(&data).unwrap();
        assert_eq!(decode_u8(rest).unwrap(), 42);
        assert!(skip_u8(rest).unwrap().is_empty());
    }

    #[test]
    fn test_bool_rejects_other_payloads() {
        assert_eq!(decode_bool(&[0x07, 0x02]), Err(DecodeError::InvalidBool));
        assert_eq!(decode_bool(&[0x07]), Err(DecodeError::InvalidBool));
    }

    #[test]
    fn test_error_roundtrip() {
        let data = encoded(|s| encode_error(s, "something broke"));
        assert_eq!(decode_error(&data).unwrap(), "something broke");
        assert!(skip_error(&data).unwrap().is_empty());
    }

    #[test]
    fn test_nil() {
        let data = [0x00, 0x07, 0x01];
        assert!(decode_nil(&data));
        let rest = skip_nil(&data);
        assert!(!decode_nil(rest));
        assert_eq!(skip_nil(rest), rest);
    }

    #[test]
    fn test_slice_header_skip_leaves_elements() {
        let data = encoded(|s| encode_string_slice(s, &["x", "y"]));
        let header = decode_slice(&data).unwrap();
        assert_eq!(header, SliceHeader { kind: Kind::String, len: 2 });

        let rest = skip_slice(&data).unwrap();
        assert_eq!(decode_string(rest).unwrap(), "x");
    }

    #[test]
    fn test_map_header() {
        let data = encoded(|s| encode_map(s, 3, Kind::String, Kind::Any));
        let header = decode_map(&data).unwrap();
        assert_eq!(header.key_kind, Kind::String);
        assert_eq!(header.value_kind, Kind::Any);
        assert_eq!(header.len, 3);
        assert!(skip_map(&data).unwrap().is_empty());
    }

    #[test]
    fn test_map_header_rejects_unknown_kind() {
        let data = [0x02, 0x05, 0x20, 0x0a, 0x00];
        assert_eq!(decode_map(&data), Err(DecodeError::InvalidMap));
        assert_eq!(decode_map(&[0x02, 0x05]), Err(DecodeError::InvalidMap));
    }

    #[test]
    fn test_string_slice_roundtrip() {
        let mut data = encoded(|s| encode_string_slice(s, &["gzip", "deflate"]));
        data.push(0x00);

        let (values, rest) = take_string_slice(&data).unwrap();
        assert_eq!(values, vec!["gzip".to_string(), "deflate".to_string()]);
        assert_eq!(rest, &[0x00]);
        assert_eq!(skip_string_slice(&data).unwrap(), &[0x00]);
    }

    #[test]
    fn test_empty_string_slice() {
        let empty: [&str; 0] = [];
        let data = encoded(|s| encode_string_slice(s, &empty));
        assert_eq!(data, vec![0x01, 0x05, 0x0a, 0x00]);
        assert!(decode_string_slice(&data).unwrap().is_empty());
        assert!(skip_string_slice(&data).unwrap().is_empty());
    }

    #[test]
    fn test_string_slice_wrong_element_kind() {
        let data = encoded(|s| encode_slice(s, 1, Kind::Uint32));
        assert_eq!(decode_string_slice(&data), Err(DecodeError::InvalidSlice));
    }

    #[test]
    fn test_string_slice_huge_count_fails_cleanly() {
        let data = encoded(|s| encode_slice(s, u32::MAX, Kind::String));
        assert_eq!(decode_string_slice(&data), Err(DecodeError::InvalidString));
    }
}
