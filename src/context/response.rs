//! HTTP-style response record.
//!
//! Wire layout: status code (Int32), body (Bytes), headers.

use bytes::Bytes;

use super::headers::{encode_headers, skip_headers, take_headers, Headers};
use crate::codec::{
    decode_bytes, decode_i32, encode_bytes, encode_i32, skip_bytes, skip_i32, ByteSink, Decode,
    Encode,
};
use crate::error::DecodeResult;

/// Outgoing response built up by processing stages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub status_code: i32,
    pub body: Bytes,
    pub headers: Headers,
}

impl Response {
    /// Create a response with the given status, no body and no headers.
    pub fn new(status_code: i32) -> Self {
        Self {
            status_code,
            ..Self::default()
        }
    }

    #[inline]
    pub fn status_code(&self) -> i32 {
        self.status_code
    }

    pub fn set_status_code(&mut self, status_code: i32) -> &mut Self {
        self.status_code = status_code;
        self
    }

    #[inline]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn set_body(&mut self, body: &str) -> &mut Self {
        self.body = Bytes::copy_from_slice(body.as_bytes());
        self
    }

    pub fn set_body_bytes(&mut self, body: impl Into<Bytes>) -> &mut Self {
        self.body = body.into();
        self
    }

    #[inline]
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&[String]> {
        self.headers.get(name).map(Vec::as_slice)
    }

    pub fn set_header(&mut self, name: impl Into<String>, values: Vec<String>) -> &mut Self {
        self.headers.insert(name.into(), values);
        self
    }
}

impl Encode for Response {
    fn encode(&self, sink: &mut ByteSink) {
        encode_i32(sink, self.status_code);
        encode_bytes(sink, &self.body);
        encode_headers(sink, &self.headers);
    }
}

impl Decode for Response {
    fn decode_from(data: &[u8]) -> DecodeResult<(Self, &[u8])> {
        let status_code = decode_i32(data)?;
        let data = skip_i32(data)?;
        let body = decode_bytes(data)?;
        let data = skip_bytes(data)?;
        let (headers, data) = take_headers(data)?;

        Ok((
            Self {
                status_code,
                body,
                headers,
            },
            data,
        ))
    }

    fn skip(data: &[u8]) -> DecodeResult<&[u8]> {
        let data = skip_i32(data)?;
        let data = skip_bytes(data)?;
        skip_headers(data)
    }
}
