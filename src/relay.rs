use log::error;
use reqwest::Client as HttpClient;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use crate::cli::Args;
use crate::history::TranscriptStore;
use crate::llm::{ BackendKind, UpstreamError };
use crate::llm::chat::ChatClient;
use crate::llm::chat::azura::AzuraClient;
use crate::llm::chat::ollama::OllamaClient;
use crate::models::chat::{ ChatMessage, ContextMessage, Role };
use crate::prompt;
use crate::sanitize;

/// Reply substituted, and recorded in the transcript, when the session
/// backend cannot be reached.
pub const OLLAMA_FAILURE_REPLY: &str = "Sorry, I had trouble communicating with Ollama.";

pub struct ChatRelay {
    ollama: Arc<dyn ChatClient>,
    azura: Arc<dyn ChatClient>,
    transcripts: TranscriptStore,
}

impl ChatRelay {
    pub fn new(args: &Args) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(args.request_timeout_secs))
            .build()?;

        Ok(Self {
            ollama: Arc::new(
                OllamaClient::new(
                    http.clone(),
                    args.ollama_base_url.clone(),
                    args.ollama_model.clone(),
                    args.temperature
                )
            ),
            azura: Arc::new(
                AzuraClient::new(
                    http,
                    args.azura_base_url.clone(),
                    args.azura_model.clone(),
                    args.temperature
                )
            ),
            transcripts: TranscriptStore::new(args.system_prompt.clone(), args.greeting.clone()),
        })
    }

    pub fn transcripts(&self) -> &TranscriptStore {
        &self.transcripts
    }

    fn client_for(&self, backend: BackendKind) -> &dyn ChatClient {
        match backend {
            BackendKind::Ollama => self.ollama.as_ref(),
            BackendKind::Azura => self.azura.as_ref(),
        }
    }

    /// Stateless use-case: the request carries its own history and persona.
    /// Nothing is persisted; failures bubble up to the caller.
    pub async fn respond_with_context(
        &self,
        message: &str,
        api_type: &str,
        context: &[ContextMessage],
        persona: Option<&str>
    ) -> Result<String, UpstreamError> {
        let backend = BackendKind::from_tag(api_type);
        let rendered = prompt::render_context_prompt(persona, context, message);
        let raw = self.client_for(backend).complete(&rendered).await?;
        Ok(sanitize::strip_reasoning(&raw))
    }

    /// Session use-case: the transcript lives on the server. The conversation
    /// lock is held for the whole turn, so concurrent requests against the
    /// same conversation cannot interleave their appends. A failed upstream
    /// call degrades to the fixed apology, which is still recorded as the
    /// assistant turn.
    pub async fn respond_in_session(&self, conversation_id: i64, user_message: &str) -> String {
        let conversation = self.transcripts.get_or_create(conversation_id).await;
        let mut conversation = conversation.lock().await;

        conversation.messages.push(ChatMessage::new(Role::User, user_message));
        let rendered = prompt::render_session_prompt(&conversation);

        let reply = match self.ollama.complete(&rendered).await {
            Ok(raw) => sanitize::strip_reasoning(&raw),
            Err(e) => {
                error!("Ollama completion failed for conversation {}: {}", conversation_id, e);
                OLLAMA_FAILURE_REPLY.to_string()
            }
        };

        conversation.messages.push(ChatMessage::new(Role::Assistant, reply.clone()));
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn unreachable_args() -> Args {
        Args::parse_from([
            "persona-relay",
            "--ollama-base-url",
            "http://127.0.0.1:9",
            "--azura-base-url",
            "http://127.0.0.1:9",
            "--request-timeout-secs",
            "5",
        ])
    }

    #[tokio::test]
    async fn session_failure_records_the_apology() {
        let relay = ChatRelay::new(&unreachable_args()).unwrap();
        let reply = relay.respond_in_session(7, "Hi").await;
        assert_eq!(reply, OLLAMA_FAILURE_REPLY);

        let conversation = relay.transcripts().get_or_create(7).await;
        let guard = conversation.lock().await;
        assert_eq!(guard.messages.len(), 4);
        assert_eq!(guard.messages[2].role, Role::User);
        assert_eq!(guard.messages[2].content, "Hi");
        assert_eq!(guard.messages[3].role, Role::Assistant);
        assert_eq!(guard.messages[3].content, OLLAMA_FAILURE_REPLY);
    }

    #[tokio::test]
    async fn context_failure_bubbles_to_the_caller() {
        let relay = ChatRelay::new(&unreachable_args()).unwrap();
        let err = relay
            .respond_with_context("Hi", "ollama", &[], None).await
            .unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
