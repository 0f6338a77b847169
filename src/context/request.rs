//! HTTP-style request record.
//!
//! Wire layout, in this exact order:
//! ```text
//! method (String) │ content_length (Int64) │ protocol (String)
//! ip (String)     │ body (Bytes)           │ headers (Map<String, Slice<String>>)
//! ```

use bytes::Bytes;

use super::headers::{encode_headers, skip_headers, take_headers, Headers};
use crate::codec::{
    decode_bytes, decode_i64, decode_string, encode_bytes, encode_i64, encode_string, skip_bytes,
    skip_i64, skip_string, ByteSink, Decode, Encode,
};
use crate::error::DecodeResult;

/// Incoming request as seen by a processing stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// HTTP method, e.g. `POST`.
    pub method: String,
    /// Declared body length.
    pub content_length: i64,
    /// Protocol, e.g. `http`.
    pub protocol: String,
    /// Client address.
    pub ip: String,
    /// Request body.
    pub body: Bytes,
    /// Request headers.
    pub headers: Headers,
}

impl Request {
    /// Create a request with an empty body and no headers.
    pub fn new(method: impl Into<String>, protocol: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            protocol: protocol.into(),
            ip: ip.into(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn set_method(&mut self, method: impl Into<String>) -> &mut Self {
        self.method = method.into();
        self
    }

    #[inline]
    pub fn content_length(&self) -> i64 {
        self.content_length
    }

    #[inline]
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Address of the client that sent the request.
    #[inline]
    pub fn remote_ip(&self) -> &str {
        &self.ip
    }

    #[inline]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Replace the body with a UTF-8 string. Updates `content_length`.
    pub fn set_body(&mut self, body: &str) -> &mut Self {
        self.set_body_bytes(Bytes::copy_from_slice(body.as_bytes()))
    }

    /// Replace the body with raw bytes. Updates `content_length`.
    pub fn set_body_bytes(&mut self, body: impl Into<Bytes>) -> &mut Self {
        self.body = body.into();
        self.content_length = self.body.len() as i64;
        self
    }

    #[inline]
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Values of header `name`, if present.
    pub fn header(&self, name: &str) -> Option<&[String]> {
        self.headers.get(name).map(Vec::as_slice)
    }

    /// Set header `name`, replacing any previous values.
    pub fn set_header(&mut self, name: impl Into<String>, values: Vec<String>) -> &mut Self {
        self.headers.insert(name.into(), values);
        self
    }
}

impl Encode for Request {
    fn encode(&self, sink: &mut ByteSink) {
        encode_string(sink, &self.method);
        encode_i64(sink, self.content_length);
        encode_string(sink, &self.protocol);
        encode_string(sink, &self.ip);
        encode_bytes(sink, &self.body);
        encode_headers(sink, &self.headers);
    }
}

impl Decode for Request {
    fn decode_from(data: &[u8]) -> DecodeResult<(Self, &[u8])> {
        let method = decode_string(data)?;
        let data = skip_string(data)?;
        let content_length = decode_i64(data)?;
        let data = skip_i64(data)?;
        let protocol = decode_string(data)?;
        let data = skip_string(data)?;
        let ip = decode_string(data)?;
        let data = skip_string(data)?;
        let body = decode_bytes(data)?;
        let data = skip_bytes(data)?;
        let (headers, data) = take_headers(data)?;

        Ok((
            Self {
                method,
                content_length,
                protocol,
                ip,
                body,
                headers,
            },
            data,
        ))
    }

    fn skip(data: &[u8]) -> DecodeResult<&[u8]> {
        let data = skip_string(data)?;
        let data = skip_i64(data)?;
        let data = skip_string(data)?;
        let data = skip_string(data)?;
        let data = skip_bytes(data)?;
        skip_headers(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;

    fn sample() -> Request {
        let mut request = Request::new("POST", "http", "::ffff:127.0.0.1");
        request
            .set_body("HELLO WORLD")
            .set_header("content-type", vec!["text/plain".into()]);
        request
    }

    #[test]
    fn test_request_roundtrip() {
        let request = sample();
        let data = request.to_bytes();

        let (decoded, rest) = Request::decode_from(&data).unwrap();
        assert_eq!(decoded, request);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_request_field_order_on_wire() {
        let data = Request::new("GET", "https", "10.0.0.1").to_bytes();
        assert_eq!(&data[..6], &[0x05, 0x0a, 0x03, b'G', b'E', b'T']);
        assert_eq!(&data[6..8], &[0x0d, 0x00]);
        assert_eq!(data[8], 0x05);
    }

    #[test]
    fn test_request_skip_matches_decode() {
        let mut data = sample().to_bytes();
        data.extend_from_slice(&[1, 2, 3]);

        let (_, rest) = Request::decode_from(&data).unwrap();
        assert_eq!(Request::skip(&data).unwrap(), rest);
        assert_eq!(rest, &[1, 2, 3]);
    }

    #[test]
    fn test_set_body_updates_content_length() {
        let mut request = Request::default();
        request.set_body_bytes(vec![0u8; 42]);
        assert_eq!(request.content_length(), 42);
        assert_eq!(request.body().len(), 42);
    }

    #[test]
    fn test_accessors() {
        let request = sample();
        assert_eq!(request.method(), "POST");
        assert_eq!(request.protocol(), "http");
        assert_eq!(request.remote_ip(), "::ffff:127.0.0.1");
        assert_eq!(request.header("content-type"), Some(&["text/plain".to_string()][..]));
        assert_eq!(request.header("missing"), None);
        assert_eq!(request.headers().len(), 1);
    }

    #[test]
    fn test_set_method() {
        let mut request = sample();
        request.set_method("PUT");
        assert_eq!(request.method(), "PUT");
    }

    #[test]
    fn test_field_type_mismatch_fails() {
        let mut sink = ByteSink::new();
        encode_string(&mut sink, "POST");
        encode_string(&mut sink, "not a number");
        assert_eq!(Request::decode(sink.as_bytes()), Err(DecodeError::InvalidInt64));
        assert_eq!(Request::skip(sink.as_bytes()), Err(DecodeError::InvalidInt64));
    }
}
