pub mod cli;
pub mod history;
pub mod llm;
pub mod models;
pub mod prompt;
pub mod relay;
pub mod sanitize;
pub mod server;

use cli::Args;
use log::info;
use relay::ChatRelay;
use server::Server;
use std::error::Error;
use std::sync::Arc;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Session API Address: {}", args.session_addr);
    info!("Context API Address: {}", args.context_addr);
    info!("Ollama Base URL: {}", args.ollama_base_url);
    info!("Ollama Model: {}", args.ollama_model);
    info!("Azura Base URL: {}", args.azura_base_url);
    info!("Azura Model: {}", args.azura_model);
    info!("Temperature: {}", args.temperature);
    info!("Request Timeout: {}s", args.request_timeout_secs);
    info!("-------------------------");

    let relay = Arc::new(ChatRelay::new(&args)?);
    let server = Server::new(relay, args);
    server.run().await?;

    Ok(())
}
