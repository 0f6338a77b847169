//! Stage chaining by explicit message passing.
//!
//! A [`Pipeline`] runs an ordered list of [`Stage`]s over an encoded
//! [`Context`]. Stages never share state: every boundary is a full
//! encode → bytes → decode hop, the same exchange two independently built
//! modules would perform.
//!
//! ```text
//! input bytes ─► decode ─► Stage 1 ─► encode ─► decode ─► Stage 2 ─► encode ─► output bytes
//! ```
//!
//! # Example
//!
//! ```
//! use polyglot_wire::chain::{FnStage, Pipeline};
//! use polyglot_wire::codec::Encode;
//! use polyglot_wire::context::{Context, Request, Response};
//!
//! let pipeline = Pipeline::new()
//!     .stage(FnStage::new("status", |mut ctx: Context| {
//!         ctx.response_mut().set_status_code(201);
//!         Ok(ctx)
//!     }))
//!     .stage(FnStage::new("body", |mut ctx: Context| {
//!         ctx.response_mut().set_body("created");
//!         Ok(ctx)
//!     }));
//!
//! let input = Context::new(Request::new("POST", "http", "127.0.0.1"), Response::new(200));
//! let output = pipeline.run(&input.to_bytes()).unwrap();
//!
//! let ctx = Context::from_bytes(&output).unwrap();
//! assert_eq!(ctx.response().status_code(), 201);
//! assert_eq!(ctx.response().body(), b"created");
//! ```

use crate::codec::{ByteSink, Decode, Encode};
use crate::config::PipelineConfig;
use crate::context::Context;
use crate::error::{PolyglotError, Result};

/// One step of a pipeline.
pub trait Stage: Send + Sync {
    /// Name used in logs and stage errors.
    fn name(&self) -> &str;

    /// Transform the context handed over by the previous stage.
    fn process(&self, ctx: Context) -> Result<Context>;
}

/// [`Stage`] backed by a named closure.
pub struct FnStage<F>
where
    F: Fn(Context) -> Result<Context> + Send + Sync,
{
    name: String,
    func: F,
}

impl<F> FnStage<F>
where
    F: Fn(Context) -> Result<Context> + Send + Sync,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> Stage for FnStage<F>
where
    F: Fn(Context) -> Result<Context> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn process(&self, ctx: Context) -> Result<Context> {
        (self.func)(ctx)
    }
}

/// Ordered list of stages with the limits applied at every boundary.
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
    config: PipelineConfig,
}

impl Pipeline {
    /// Create an empty pipeline with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PipelineConfig) -> Self {
        Self {
            stages: Vec::new(),
            config,
        }
    }

    /// Append a stage.
    pub fn stage<S: Stage + 'static>(mut self, stage: S) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    #[inline]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> impl Iterator<Item = &str> {
        self.stages.iter().map(|s| s.name())
    }

    /// Run every stage over an encoded context and return the final encoding.
    ///
    /// With no stages the input context is re-encoded as is.
    ///
    /// # Errors
    ///
    /// - [`PolyglotError::ContextTooLarge`] if the input or any stage output
    ///   exceeds `max_context_size`
    /// - [`PolyglotError::Decode`] if the input is not a valid context
    /// - [`PolyglotError::TrailingBytes`] if bytes follow the input context and
    ///   `reject_trailing_bytes` is set
    /// - whatever a stage returns
    pub fn run(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.check_size(input.len())?;

        let (ctx, rest) = Context::decode_from(input)?;
        if !rest.is_empty() {
            if self.config.reject_trailing_bytes {
                return Err(PolyglotError::TrailingBytes(rest.len()));
            }
            tracing::warn!(trailing = rest.len(), "Ignoring bytes after input context");
        }

        let mut bytes = self.encode(&ctx, input.len())?;
        for stage in &self.stages {
            let ctx = Context::from_bytes(&bytes)?;
            tracing::debug!(stage = stage.name(), size = bytes.len(), "Running stage");

            let ctx = stage.process(ctx).map_err(|e| {
                tracing::warn!(stage = stage.name(), error = %e, "Stage failed");
                e
            })?;
            bytes = self.encode(&ctx, bytes.len())?;
        }

        Ok(bytes)
    }

    /// Run every stage over an in-memory context.
    pub fn run_context(&self, ctx: &Context) -> Result<Context> {
        let output = self.run(&ctx.to_bytes())?;
        Context::from_bytes(&output)
    }

    fn encode(&self, ctx: &Context, size_hint: usize) -> Result<Vec<u8>> {
        let mut sink = ByteSink::with_capacity(size_hint);
        ctx.encode(&mut sink);
        self.check_size(sink.len())?;
        Ok(sink.into_vec())
    }

    fn check_size(&self, size: usize) -> Result<()> {
        let max = self.config.max_context_size;
        if size > max {
            return Err(PolyglotError::ContextTooLarge { size, max });
        }
        Ok(())
    }
}

/// Pack a buffer offset and length into one value: offset in the upper 32
/// bits, length in the lower 32.
#[inline]
pub fn pack_ptr_len(offset: u32, len: u32) -> u64 {
    ((offset as u64) << 32) | len as u64
}

/// Inverse of [`pack_ptr_len`].
#[inline]
pub fn unpack_ptr_len(packed: u64) -> (u32, u32) {
    ((packed >> 32) as u32, packed as u32)
}
