//! Self-describing values.
//!
//! [`Value`] is the closed set of wire types. Decoding dispatches on the
//! leading tag byte, which makes it possible to read (or step over with
//! [`skip_value`]) data whose shape is not known in advance.
//!
//! Collection elements are written as tagged values after the header. A
//! collection declared with a concrete element kind only accepts elements
//! of that kind; one declared with [`Kind::Any`] accepts any element.
//!
//! # Example
//!
//! ```
//! use polyglot_wire::codec::{skip_value, Decode, Encode, Kind, Value};
//!
//! let value = Value::Slice {
//!     kind: Kind::Any,
//!     items: vec![Value::Bool(true), Value::String("x".into())],
//! };
//! let data = value.to_bytes();
//! assert_eq!(Value::decode(&data).unwrap(), value);
//! assert!(skip_value(&data).unwrap().is_empty());
//! ```

use bytes::Bytes;

use super::decode::{self as de, map_parts, slice_parts, take_bytes, take_error, take_string};
use super::encode as en;
use super::kind::Kind;
use super::sink::ByteSink;
use super::traits::{Decode, Encode};
use crate::error::{DecodeError, DecodeResult};

/// Maximum collection nesting accepted by [`Value`] decoding and [`skip_value`].
pub const MAX_NESTING_DEPTH: usize = 64;

/// Any value the wire format can carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Nil,
    Slice {
        /// Declared element kind.
        kind: Kind,
        items: Vec<Value>,
    },
    Map {
        key_kind: Kind,
        value_kind: Kind,
        entries: Vec<(Value, Value)>,
    },
    Bytes(Bytes),
    String(String),
    Error(String),
    Bool(bool),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Int32(i32),
    Int64(i64),
}

impl Value {
    /// The tag this value is written with.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Nil => Kind::Nil,
            Value::Slice { .. } => Kind::Slice,
            Value::Map { .. } => Kind::Map,
            Value::Bytes(_) => Kind::Bytes,
            Value::String(_) => Kind::String,
            Value::Error(_) => Kind::Error,
            Value::Bool(_) => Kind::Bool,
            Value::Uint8(_) => Kind::Uint8,
            Value::Uint16(_) => Kind::Uint16,
            Value::Uint32(_) => Kind::Uint32,
            Value::Uint64(_) => Kind::Uint64,
            Value::Int32(_) => Kind::Int32,
            Value::Int64(_) => Kind::Int64,
        }
    }

    /// Borrow the string payload of a String value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    fn decode_nested(data: &[u8], depth: usize) -> DecodeResult<(Value, &[u8])> {
        let tag = *data.first().ok_or(DecodeError::Truncated)?;

        match Kind::try_from(tag)? {
            Kind::Nil => Ok((Value::Nil, &data[1..])),
            Kind::Slice => {
                let (header, mut rest) = slice_parts(data)?;
                let depth = descend(depth)?;
                let mut items = Vec::with_capacity((header.len as usize).min(rest.len()));
                for _ in 0..header.len {
                    check_element(rest, header.kind, DecodeError::InvalidSlice)?;
                    let (item, next) = Value::decode_nested(rest, depth)?;
                    items.push(item);
                    rest = next;
                }
                Ok((
                    Value::Slice {
                        kind: header.kind,
                        items,
                    },
                    rest,
                ))
            }
            Kind::Map => {
                let (header, mut rest) = map_parts(data)?;
                let depth = descend(depth)?;
                let mut entries = Vec::with_capacity((header.len as usize).min(rest.len() / 2));
                for _ in 0..header.len {
                    check_element(rest, header.key_kind, DecodeError::InvalidMap)?;
                    let (key, next) = Value::decode_nested(rest, depth)?;
                    check_element(next, header.value_kind, DecodeError::InvalidMap)?;
                    let (value, next) = Value::decode_nested(next, depth)?;
                    entries.push((key, value));
                    rest = next;
                }
                Ok((
                    Value::Map {
                        key_kind: header.key_kind,
                        value_kind: header.value_kind,
                        entries,
                    },
                    rest,
                ))
            }
            Kind::Bytes => take_bytes(data).map(|(v, rest)| (Value::Bytes(v), rest)),
            Kind::String => take_string(data).map(|(v, rest)| (Value::String(v), rest)),
            Kind::Error => take_error(data).map(|(v, rest)| (Value::Error(v), rest)),
            Kind::Bool => de::bool_parts(data).map(|(v, rest)| (Value::Bool(v), rest)),
            Kind::Uint8 => de::u8_parts(data).map(|(v, rest)| (Value::Uint8(v), rest)),
            Kind::Uint16 => de::u16_parts(data).map(|(v, rest)| (Value::Uint16(v), rest)),
            Kind::Uint32 => de::u32_parts(data).map(|(v, rest)| (Value::Uint32(v), rest)),
            Kind::Uint64 => de::u64_parts(data).map(|(v, rest)| (Value::Uint64(v), rest)),
            Kind::Int32 => de::i32_parts(data).map(|(v, rest)| (Value::Int32(v), rest)),
            Kind::Int64 => de::i64_parts(data).map(|(v, rest)| (Value::Int64(v), rest)),
            Kind::Float32 => Err(DecodeError::InvalidFloat32),
            Kind::Float64 => Err(DecodeError::InvalidFloat64),
            Kind::Any => Err(DecodeError::UnknownKind(tag)),
        }
    }
}

#[inline]
fn descend(depth: usize) -> DecodeResult<usize> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(DecodeError::TooDeep(MAX_NESTING_DEPTH));
    }
    Ok(depth + 1)
}

/// An element must carry the collection's declared kind unless that kind is Any.
#[inline]
fn check_element(data: &[u8], declared: Kind, err: DecodeError) -> DecodeResult<()> {
    match data.first() {
        Some(_) if declared == Kind::Any => Ok(()),
        Some(&tag) if declared.matches(tag) => Ok(()),
        _ => Err(err),
    }
}

impl Encode for Value {
    fn encode(&self, sink: &mut ByteSink) {
        match self {
            Value::Nil => en::encode_nil(sink),
            Value::Slice { kind, items } => {
                en::encode_slice(sink, items.len() as u32, *kind);
                for item in items {
                    item.encode(sink);
                }
            }
            Value::Map {
                key_kind,
                value_kind,
                entries,
            } => {
                en::encode_map(sink, entries.len() as u32, *key_kind, *value_kind);
                for (key, value) in entries {
                    key.encode(sink);
                    value.encode(sink);
                }
            }
            Value::Bytes(v) => en::encode_bytes(sink, v),
            Value::String(v) => en::encode_string(sink, v),
            Value::Error(v) => en::encode_error(sink, v),
            Value::Bool(v) => en::encode_bool(sink, *v),
            Value::Uint8(v) => en::encode_u8(sink, *v),
            Value::Uint16(v) => en::encode_u16(sink, *v),
            Value::Uint32(v) => en::encode_u32(sink, *v),
            Value::Uint64(v) => en::encode_u64(sink, *v),
            Value::Int32(v) => en::encode_i32(sink, *v),
            Value::Int64(v) => en::encode_i64(sink, *v),
        }
    }
}

impl Decode for Value {
    fn decode_from(data: &[u8]) -> DecodeResult<(Self, &[u8])> {
        Value::decode_nested(data, 0)
    }

    fn skip(data: &[u8]) -> DecodeResult<&[u8]> {
        skip_value(data)
    }
}

/// Step over one value of any kind, including nested collections, without
/// materialising it.
pub fn skip_value(data: &[u8]) -> DecodeResult<&[u8]> {
    skip_nested(data, 0)
}

fn skip_nested(data: &[u8], depth: usize) -> DecodeResult<&[u8]> {
    let tag = *data.first().ok_or(DecodeError::Truncated)?;

    match Kind::try_from(tag)? {
        Kind::Nil => Ok(&data[1..]),
        Kind::Slice => {
            let (header, mut rest) = slice_parts(data)?;
            let depth = descend(depth)?;
            for _ in 0..header.len {
                check_element(rest, header.kind, DecodeError::InvalidSlice)?;
                rest = skip_nested(rest, depth)?;
            }
            Ok(rest)
        }
        Kind::Map => {
            let (header, mut rest) = map_parts(data)?;
            let depth = descend(depth)?;
            for _ in 0..header.len {
                check_element(rest, header.key_kind, DecodeError::InvalidMap)?;
                rest = skip_nested(rest, depth)?;
                check_element(rest, header.value_kind, DecodeError::InvalidMap)?;
                rest = skip_nested(rest, depth)?;
            }
            Ok(rest)
        }
        Kind::Bytes => de::skip_bytes(data),
        Kind::String => de::skip_string(data),
        Kind::Error => de::skip_error(data),
        Kind::Bool => de::skip_bool(data),
        Kind::Uint8 => de::skip_u8(data),
        Kind::Uint16 => de::skip_u16(data),
        Kind::Uint32 => de::skip_u32(data),
        Kind::Uint64 => de::skip_u64(data),
        Kind::Int32 => de::skip_i32(data),
        Kind::Int64 => de::skip_i64(data),
        Kind::Float32 => Err(DecodeError::InvalidFloat32),
        Kind::Float64 => Err(DecodeError::InvalidFloat64),
        Kind::Any => Err(DecodeError::UnknownKind(tag)),
    }
}
