use reqwest::Client as HttpClient;
use serde::{ Deserialize, Serialize };
use async_trait::async_trait;
use super::ChatClient;
use crate::llm::UpstreamError;

#[derive(Debug)]
pub struct OllamaClient {
    http: HttpClient,
    base_url: String,
    completion_model: String,
    temperature: f32,
}

#[derive(Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    temperature: f32,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}

impl OllamaClient {
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
        let url = format!("{}/api/generate", self.base_url.trim_end_matches('/'));
        let req = GenerateRequest {
            model: self.completion_model.clone(),
            prompt: prompt.to_string(),
            temperature: self.temperature,
            stream: false,
        };
        let resp = self.http.post(&url).json(&req).send().await?.error_for_status()?;
        let data = resp.json::<GenerateResponse>().await?;
        data.response.ok_or(UpstreamError::MissingCompletion {
            service: "ollama",
            field: "response",
        })
    }
}

#[async_trait]
impl ChatClient for OllamaClient {
    async fn complete(&self, prompt: &str) -> Result<String, UpstreamError> {
        self.generate(prompt).await
    }
}
