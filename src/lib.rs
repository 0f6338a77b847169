//! # polyglot-wire
//!
//! Self-describing binary encoding for passing HTTP-style request/response
//! contexts between independently built modules.
//!
//! ## Layers
//!
//! - **Codec** ([`codec`]): tagged scalars, strings, bytes, slices and maps
//!   with varint/zigzag integers
//! - **Context** ([`context`]): [`Request`] + [`Response`] records built on
//!   the codec
//! - **Chain** ([`chain`]): stages that hand a [`Context`] to each other as
//!   encoded bytes
//!
//! ## Example
//!
//! ```
//! use polyglot_wire::{Context, Decode, Encode, Request, Response};
//!
//! let mut request = Request::new("POST", "http", "::ffff:127.0.0.1");
//! request.set_body("HELLO WORLD");
//! let ctx = Context::new(request, Response::new(200));
//!
//! let bytes = ctx.to_bytes();
//! let (decoded, rest) = Context::decode_from(&bytes).unwrap();
//!
//! assert_eq!(decoded.request().content_length(), 11);
//! assert!(rest.is_empty());
//! ```

pub mod chain;
pub mod codec;
pub mod config;
pub mod context;
pub mod error;

pub use chain::{FnStage, Pipeline, Stage};
pub use codec::{ByteSink, Decode, Encode, Kind, Value};
pub use config::PipelineConfig;
pub use context::{Context, Headers, Request, Response};
pub use error::{DecodeError, DecodeResult, PolyglotError, Result};
