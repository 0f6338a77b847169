//! Context module - the request/response pair exchanged between stages.
//!
//! A [`Context`] is encoded as its [`Request`] immediately followed by its
//! [`Response`]; there is no separator and no overall length prefix, since
//! every field is self-delimiting.
//!
//! # Example
//!
//! ```
//! use polyglot_wire::codec::Encode;
//! use polyglot_wire::context::{Context, Request, Response};
//!
//! let ctx = Context::new(Request::new("GET", "http", "10.0.0.1"), Response::new(200));
//! let bytes = ctx.to_bytes();
//!
//! let decoded = Context::from_bytes(&bytes).unwrap();
//! assert_eq!(decoded.request().method(), "GET");
//! assert_eq!(decoded.response().status_code(), 200);
//! ```

mod headers;
mod request;
mod response;

pub use headers::{encode_headers, skip_headers, take_headers, Headers};
pub use request::Request;
pub use response::Response;

use crate::codec::{ByteSink, Decode, Encode};
use crate::error::{DecodeResult, PolyglotError, Result};

/// Request and response travelling together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    pub request: Request,
    pub response: Response,
}

impl Context {
    pub fn new(request: Request, response: Response) -> Self {
        Self { request, response }
    }

    #[inline]
    pub fn request(&self) -> &Request {
        &self.request
    }

    #[inline]
    pub fn request_mut(&mut self) -> &mut Request {
        &mut self.request
    }

    #[inline]
    pub fn response(&self) -> &Response {
        &self.response
    }

    #[inline]
    pub fn response_mut(&mut self) -> &mut Response {
        &mut self.response
    }

    /// Decode a context that must occupy all of `data`.
    ///
    /// Use [`Decode::decode_from`] instead to get the leftover bytes back.
    ///
    /// # Errors
    ///
    /// Returns [`PolyglotError::Decode`] if the bytes are malformed and
    /// [`PolyglotError::TrailingBytes`] if anything follows the context.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let (ctx, rest) = Self::decode_from(data)?;
        if !rest.is_empty() {
            tracing::debug!(trailing = rest.len(), "Context followed by trailing bytes");
            return Err(PolyglotError::TrailingBytes(rest.len()));
        }
        Ok(ctx)
    }
}

impl Encode for Context {
    fn encode(&self, sink: &mut ByteSink) {
        self.request.encode(sink);
        self.response.encode(sink);
    }
}

impl Decode for Context {
    fn decode_from(data: &[u8]) -> DecodeResult<(Self, &[u8])> {
        let (request, data) = Request::decode_from(data)?;
        let (response, data) = Response::decode_from(data)?;
        Ok((Self { request, response }, data))
    }

    fn skip(data: &[u8]) -> DecodeResult<&[u8]> {
        let data = Request::skip(data)?;
        Response::skip(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;

    fn sample() -> Context {
        let mut request = Request::new("POST", "http", "::ffff:127.0.0.1");
        request.set_body("HELLO WORLD");
        let mut response = Response::new(200);
        response.set_header("server", vec!["polyglot".into()]);
        Context::new(request, response)
    }

    #[test]
    fn test_context_is_request_then_response() {
        let ctx = sample();
        let mut expected = ctx.request.to_bytes();
        expected.extend(ctx.response.to_bytes());
        assert_eq!(ctx.to_bytes(), expected);
    }

    #[test]
    fn test_context_roundtrip() {
        let ctx = sample();
        let decoded = Context::from_bytes(&ctx.to_bytes()).unwrap();
        assert_eq!(decoded, ctx);
    }

    #[test]
    fn test_from_bytes_rejects_trailing() {
        let mut data = sample().to_bytes();
        data.push(0x00);
        assert!(matches!(
            Context::from_bytes(&data),
            Err(PolyglotError::TrailingBytes(1))
        ));

        let (_, rest) = Context::decode_from(&data).unwrap();
        assert_eq!(rest, &[0x00]);
    }

    #[test]
    fn test_from_bytes_reports_decode_error() {
        let err = Context::from_bytes(&[0xff]).unwrap_err();
        assert!(matches!(err, PolyglotError::Decode(DecodeError::InvalidString)));
    }

    #[test]
    fn test_empty_input_is_error_not_empty_context() {
        assert!(Context::from_bytes(&[]).is_err());
    }

    #[test]
    fn test_skip_consumes_whole_context() {
        let data = sample().to_bytes();
        assert!(Context::skip(&data).unwrap().is_empty());
    }

    #[test]
    fn test_mutators() {
        let mut ctx = sample();
        ctx.request_mut().set_method("PATCH");
        ctx.response_mut().set_status_code(202);
        assert_eq!(ctx.request().method(), "PATCH");
        assert_eq!(ctx.response().status_code(), 202);
    }
}
