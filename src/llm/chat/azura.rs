use reqwest::Client as HttpClient;
use serde::{ Deserialize, Serialize };
use async_trait::async_trait;
use super::ChatClient;
use crate::llm::UpstreamError;

/// Client for the Azura completion service. Same contract as the Ollama
/// daemon, but the route is `/completions` and the generated text comes
/// back under `completion`.
#[derive(Debug)]
pub struct AzuraClient {
    http: HttpClient,
    base_url: String,
    completion_model: String,
    temperature: f32,
}

#[derive(Serialize)]
struct CompletionRequest {
    prompt: String,
    model: String,
    temperature: f32,
    stream: bool,
}

#[derive(Deserialize)]
struct CompletionResponse {
    completion: Option<String>,
}

impl AzuraClient {
    pub fn new(
        http: HttpClient,
        base_url: impl Into<String>,
        completion_model: impl Into<String>,
        temperature: f32,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            completion_model: completion_model.into(),
            temperature,
        }
    }

    pub async fn generate(&self, prompt: &str) -> Result<String, UpstreamError> {
        let url = format!("{}/completions", self.base_url.trim_end_matches('/'));
        let req = CompletionRequest {
            prompt: prompt.to_string(),
            model: self.completion_model.clone(),
            temperature: self.temperature,
            stream: false,
        };
        let resp = self.http.post(&url).json(&req).send().await?.error_for_status()?;
        let data = resp.json::<CompletionResponse>().await?;
        data.completion.ok_or(UpstreamError::MissingCompletion {
            service: "azura",
            field: "completion",
        })
    }
}

#[async_trait]
impl ChatClient for AzuraClient {
    async fn complete(&self, prompt: &str) -> Result<String, UpstreamError> {
        self.generate(prompt).await
    }
}
