//! Hosted embedding provider speaking the OpenAI-compatible embeddings API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::embedding::EmbeddingProvider;
use crate::error::{RagError, Result};

/// The default embedding model, matching the demo's 384-dimension setup.
const DEFAULT_MODEL: &str = "all-MiniLM-L6-v2";

/// The default dimensionality for `all-MiniLM-L6-v2`.
const DEFAULT_DIMENSIONS: usize = 384;

/// An [`EmbeddingProvider`] backed by an OpenAI-compatible `/v1/embeddings`
/// endpoint (a local inference server or any hosted service speaking the
/// same wire format).
///
/// # Configuration
///
/// - `base_url` – endpoint root, e.g. `http://localhost:8080/v1`.
/// - `model` – defaults to `all-MiniLM-L6-v2`.
/// - `dimensions` – defaults to 384; must match what the model emits.
/// - `api_key` – optional bearer token.
///
/// # Example
///
/// ```rust,ignore
/// use quartet_rag::HostedEmbeddingProvider;
///
/// let provider = HostedEmbeddingProvider::new("http://localhost:8080/v1")?;
/// let embedding = provider.embed("hello world").await?;
/// ```
pub struct HostedEmbeddingProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
    dimensions: usize,
}

impl HostedEmbeddingProvider {
    /// Create a new provider against the given endpoint root.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        if base_url.is_empty() {
            return Err(RagError::ConfigError("embeddings base URL must not be empty".into()));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: None,
            model: DEFAULT_MODEL.into(),
            dimensions: DEFAULT_DIMENSIONS,
        })
    }

    /// Create a provider from `EMBEDDINGS_BASE_URL` (required) and
    /// `EMBEDDINGS_API_KEY` (optional).
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("EMBEDDINGS_BASE_URL").map_err(|_| {
            RagError::ConfigError("EMBEDDINGS_BASE_URL environment variable not set".into())
        })?;
        let mut provider = Self::new(base_url)?;
        provider.api_key = std::env::var("EMBEDDINGS_API_KEY").ok();
        Ok(provider)
    }

    /// Set a bearer token for authenticated endpoints.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the expected output dimensions.
    pub fn with_dimensions(mut self, dims: usize) -> Self {
        self.dimensions = dims;
        self
    }

    fn failure(&self, message: impl Into<String>) -> RagError {
        RagError::EmbeddingFailed { provider: self.model.clone(), message: message.into() }
    }
}

// ── Wire types ─────────────────────────────────────────────────────

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: Vec<&'a str>,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[async_trait]
impl EmbeddingProvider for HostedEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let results = self.embed_batch(&[text]).await?;
        results
            .into_iter()
            .next()
            .ok_or_else(|| self.failure("endpoint returned an empty response"))
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        debug!(model = %self.model, batch_size = texts.len(), "embedding batch");

        let url = format!("{}/embeddings", self.base_url);
        let body = EmbeddingRequest { model: &self.model, input: texts.to_vec() };

        let mut request = self.client.post(&url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            error!(model = %self.model, error = %e, "embedding request failed");
            self.failure(format!("request failed: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!(model = %self.model, %status, "embedding endpoint returned an error");
            return Err(self.failure(format!("endpoint returned {status}: {detail}")));
        }

        let parsed: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| self.failure(format!("invalid response body: {e}")))?;

        let embeddings: Vec<Vec<f32>> =
            parsed.data.into_iter().map(|d| d.embedding).collect();

        if embeddings.len() != texts.len() {
            return Err(self.failure(format!(
                "expected {} embeddings, got {}",
                texts.len(),
                embeddings.len()
            )));
        }
        for embedding in &embeddings {
            if embedding.len() != self.dimensions {
                return Err(self.failure(format!(
                    "model emitted {} dimensions, configured for {}",
                    embedding.len(),
                    self.dimensions
                )));
            }
        }

        Ok(embeddings)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}
