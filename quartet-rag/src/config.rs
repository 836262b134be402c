//! Configuration for the document pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{RagError, Result};

/// Configuration parameters for the document pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelineConfig {
    /// Expected embedding dimension; the index rejects anything else.
    pub dimension: usize,
    /// Maximum number of characters in a retrieval preview.
    pub preview_chars: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { dimension: 384, preview_chars: 500 }
    }
}

impl PipelineConfig {
    /// Create a new builder for constructing a [`PipelineConfig`].
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

/// Builder for constructing a validated [`PipelineConfig`].
#[derive(Debug, Clone, Default)]
pub struct PipelineConfigBuilder {
    config: PipelineConfig,
}

impl PipelineConfigBuilder {
    /// Set the embedding dimension.
    pub fn dimension(mut self, dimension: usize) -> Self {
        self.config.dimension = dimension;
        self
    }

    /// Set the preview length in characters.
    pub fn preview_chars(mut self, chars: usize) -> Self {
        self.config.preview_chars = chars;
        self
    }

    /// Build the [`PipelineConfig`], validating that parameters are usable.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::ConfigError`] if `dimension == 0` or
    /// `preview_chars == 0`.
    pub fn build(self) -> Result<PipelineConfig> {
        if self.config.dimension == 0 {
            return Err(RagError::ConfigError("dimension must be greater than zero".into()));
        }
        if self.config.preview_chars == 0 {
            return Err(RagError::ConfigError("preview_chars must be greater than zero".into()));
        }
        Ok(self.config)
    }
}
