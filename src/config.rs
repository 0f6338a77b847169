//! Pipeline configuration.
//!
//! Every field has a default, so a partial JSON document only overrides
//! what it names:
//!
//! ```
//! use polyglot_wire::config::PipelineConfig;
//!
//! let config = PipelineConfig::from_json(r#"{"reject_trailing_bytes": true}"#).unwrap();
//! assert!(config.reject_trailing_bytes);
//! assert_eq!(config.max_context_size, polyglot_wire::config::DEFAULT_MAX_CONTEXT_SIZE);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default upper bound on an encoded context (16 MiB).
pub const DEFAULT_MAX_CONTEXT_SIZE: usize = 16 * 1024 * 1024;

/// Trailing bytes after a context are logged, not rejected, by default.
pub const DEFAULT_REJECT_TRAILING_BYTES: bool = false;

/// Configuration for a [`Pipeline`](crate::chain::Pipeline).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Largest encoded context accepted as input or produced by a stage.
    pub max_context_size: usize,
    /// Fail instead of warning when bytes follow the input context.
    pub reject_trailing_bytes: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_context_size: DEFAULT_MAX_CONTEXT_SIZE,
            reject_trailing_bytes: DEFAULT_REJECT_TRAILING_BYTES,
        }
    }
}

impl PipelineConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the configuration as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn max_context_size(mut self, max: usize) -> Self {
        self.max_context_size = max;
        self
    }

    pub fn reject_trailing_bytes(mut self, reject: bool) -> Self {
        self.reject_trailing_bytes = reject;
        self
    }
}
