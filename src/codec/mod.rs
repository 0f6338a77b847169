//! Codec module - the polyglot wire encoding.
//!
//! Every value starts with a one-byte [`Kind`] tag, so a buffer can be parsed
//! without a shared schema:
//!
//! - [`ByteSink`] - append-only buffer written by the encoders
//! - `encode_*` - write one tagged value
//! - `decode_*` / `skip_*` - read one tagged value, or step over it
//! - [`Encode`] / [`Decode`] - the same operations as traits
//! - [`Value`] - dynamically typed values dispatched on the tag
//!
//! # Design
//!
//! Decoding never advances a cursor. Callers thread the remaining slice
//! themselves by pairing each `decode_*` with the matching `skip_*`:
//!
//! ```
//! use polyglot_wire::codec::{self, ByteSink};
//!
//! let mut sink = ByteSink::new();
//! codec::encode_string(&mut sink, "GET");
//! codec::encode_i64(&mut sink, -1);
//!
//! let data = sink.as_bytes();
//! let method = codec::decode_string(data).unwrap();
//! let data = codec::skip_string(data).unwrap();
//! let length = codec::decode_i64(data).unwrap();
//! let data = codec::skip_i64(data).unwrap();
//!
//! assert_eq!((method.as_str(), length), ("GET", -1));
//! assert!(data.is_empty());
//! ```

mod decode;
mod encode;
mod kind;
mod sink;
mod traits;
mod value;
mod varint;

pub use decode::{
    decode_bool, decode_bytes, decode_error, decode_i32, decode_i64, decode_map, decode_nil,
    decode_slice, decode_string, decode_string_slice, decode_u16, decode_u32, decode_u64,
    decode_u8, skip_bool, skip_bytes, skip_error, skip_i32, skip_i64, skip_map, skip_nil,
    skip_slice, skip_string, skip_string_slice, skip_u16, skip_u32, skip_u64, skip_u8,
    take_string_slice, MapHeader, SliceHeader,
};
pub use encode::{
    encode_bool, encode_bytes, encode_error, encode_i32, encode_i64, encode_map, encode_nil,
    encode_slice, encode_string, encode_string_slice, encode_u16, encode_u32, encode_u64,
    encode_u8,
};
pub use kind::{
    Kind, CONTINUATION, FALSE_BOOL, TRUE_BOOL, VARINT_LEN_16, VARINT_LEN_32, VARINT_LEN_64,
};
pub use sink::{ByteSink, DEFAULT_SINK_CAPACITY};
pub use traits::{Decode, Encode};
pub use value::{skip_value, Value, MAX_NESTING_DEPTH};
pub use varint::{
    encoded_len, read_varint, varint_len, write_varint, zigzag_decode32, zigzag_decode64,
    zigzag_encode32, zigzag_encode64,
};
