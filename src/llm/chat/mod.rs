pub mod azura;
pub mod ollama;

use async_trait::async_trait;
use super::UpstreamError;

/// A completion-style upstream: one fully rendered prompt in, the
/// generated continuation text out.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, UpstreamError>;
}
