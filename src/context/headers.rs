//! Header maps.
//!
//! Headers travel as a Map with key kind String and value kind Any, where
//! every value is a Slice of Strings:
//! ```text
//! 02 05 03 0a <count>  ( 05 0a <len> <key>  01 05 0a <n> (05 0a <len> <value>)* )*
//! ```
//! Entry order follows the map's iteration order and is not stable across
//! encodes.

use std::collections::HashMap;

use crate::codec::{
    decode_map, decode_string, encode_map, encode_string, encode_string_slice, skip_map,
    skip_string, skip_string_slice, take_string_slice, ByteSink, Kind, MapHeader,
};
use crate::error::{DecodeError, DecodeResult};

/// Header name to list of values.
pub type Headers = HashMap<String, Vec<String>>;

/// Write a header map.
pub fn encode_headers(sink: &mut ByteSink, headers: &Headers) {
    encode_map(sink, headers.len() as u32, Kind::String, Kind::Any);
    for (name, values) in headers {
        encode_string(sink, name);
        encode_string_slice(sink, values);
    }
}

fn headers_header(data: &[u8]) -> DecodeResult<(MapHeader, &[u8])> {
    let header = decode_map(data)?;
    if header.key_kind != Kind::String || !matches!(header.value_kind, Kind::Any | Kind::Slice) {
        return Err(DecodeError::InvalidMap);
    }
    Ok((header, skip_map(data)?))
}

/// Decode a header map, returning it and the bytes after its last entry.
pub fn take_headers(data: &[u8]) -> DecodeResult<(Headers, &[u8])> {
    let (header, mut data) = headers_header(data)?;

    // Each entry needs at least a key tag and a slice tag.
    let mut headers = HashMap::with_capacity((header.len as usize).min(data.len() / 2));
    for _ in 0..header.len {
        let name = decode_string(data)?;
        data = skip_string(data)?;
        let (values, rest) = take_string_slice(data)?;
        data = rest;
        headers.insert(name, values);
    }

    Ok((headers, data))
}

/// Step over a header map, entries included.
pub fn skip_headers(data: &[u8]) -> DecodeResult<&[u8]> {
    let (header, mut data) = headers_header(data)?;
    for _ in 0..header.len {
        data = skip_string(data)?;
        data = skip_string_slice(data)?;
    }
    Ok(data)
}
