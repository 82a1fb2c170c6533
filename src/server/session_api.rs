use crate::relay::ChatRelay;
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
    extract::State,
    Json,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use log::info;

#[derive(Deserialize)]
pub struct SessionChatRequest {
    pub conversation_id: i64,
    pub user_message: String,
}

#[derive(Serialize)]
struct SessionChatResponse {
    assistant_reply: String,
}

#[derive(Serialize)]
struct StatusResponse {
    status: &'static str,
}

pub fn router(relay: Arc<ChatRelay>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(status_handler))
        .route("/chat", post(chat_handler))
        .layer(cors)
        .with_state(relay)
}

/// Serves the session API in the foreground; this is the listener that
/// keeps the process alive.
pub async fn serve_session_api(
    addr: &str,
    relay: Arc<ChatRelay>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr = addr.parse::<SocketAddr>()?;
    info!("Starting session chat API on: http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(relay).into_make_service()).await?;

    Ok(())
}

async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse { status: "persona-relay is running" })
}

async fn chat_handler(
    State(relay): State<Arc<ChatRelay>>,
    Json(req): Json<SessionChatRequest>,
) -> Json<SessionChatResponse> {
    let reply = relay.respond_in_session(req.conversation_id, &req.user_message).await;
    Json(SessionChatResponse { assistant_reply: reply })
}
