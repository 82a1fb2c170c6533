use crate::models::chat::ContextMessage;
use crate::relay::ChatRelay;
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use axum::{
    routing::post,
    Router,
    extract::State,
    Json,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use log::{info, error};

/// Chat request carrying its own history: the client resends the full
/// context on every call instead of referencing server-held state.
#[derive(Deserialize)]
pub struct ContextChatRequest {
    pub message: String,
    #[serde(rename = "apiType")]
    pub api_type: String,
    #[serde(default)]
    pub context: Vec<ContextMessage>,
    #[serde(rename = "characterSetting", default)]
    pub character_setting: Option<String>,
}

#[derive(Serialize)]
struct ContextChatResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn router(relay: Arc<ChatRelay>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/chat", post(chat_handler))
        .layer(cors)
        .with_state(relay)
}

pub async fn start_context_server(
    addr: &str,
    relay: Arc<ChatRelay>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr = addr.parse::<SocketAddr>()?;
    info!("Starting context chat API on: http://{}", addr);

    let app = router(relay);

    tokio::spawn(async move {
        match tokio::net::TcpListener::bind(addr).await {
            Ok(listener) => {
                if let Err(e) = axum::serve(listener, app.into_make_service()).await {
                    error!("Context API server error: {}", e);
                }
            },
            Err(e) => {
                error!("Failed to bind context API to {}: {}. Try a different port.", addr, e);
            }
        }
    });

    Ok(())
}

async fn chat_handler(
    State(relay): State<Arc<ChatRelay>>,
    Json(req): Json<ContextChatRequest>,
) -> Json<ContextChatResponse> {
    let persona = req.character_setting.as_deref();
    match relay.respond_with_context(&req.message, &req.api_type, &req.context, persona).await {
        Ok(text) => Json(ContextChatResponse {
            success: true,
            data: Some(text),
            error: None,
        }),
        Err(e) => {
            error!("Context chat request failed: {}", e);
            Json(ContextChatResponse {
                success: false,
                data: None,
                error: Some(e.to_string()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use clap::Parser;
    use tower::ServiceExt;

    fn unreachable_relay() -> Arc<ChatRelay> {
        let args = Args::parse_from([
            "persona-relay",
            "--ollama-base-url",
            "http://127.0.0.1:9",
            "--azura-base-url",
            "http://127.0.0.1:9",
            "--request-timeout-secs",
            "5",
        ]);
        Arc::new(ChatRelay::new(&args).unwrap())
    }

    #[tokio::test]
    async fn unreachable_ollama_backend_returns_error_envelope() {
        let app = router(unreachable_relay());
        let body = serde_json::json!({
            "message": "Hi",
            "apiType": "ollama",
            "context": [],
            "characterSetting": null
        });
        let request = Request::builder()
            .method("POST")
            .uri("/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed["success"], false);
        assert!(!parsed["error"].as_str().unwrap().is_empty());
        assert!(parsed.get("data").is_none());
    }

    #[tokio::test]
    async fn context_and_persona_are_optional_on_the_wire() {
        let app = router(unreachable_relay());
        let request = Request::builder()
            .method("POST")
            .uri("/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"message": "Hi", "apiType": "azura"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed["success"], false);
    }
}
