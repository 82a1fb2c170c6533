use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Listener Args ---
    /// Host address and port for the session chat API (server-held transcripts).
    #[arg(long, env = "SESSION_ADDR", default_value = "127.0.0.1:4000")]
    pub session_addr: String,

    /// Host address and port for the context chat API (client-supplied history).
    #[arg(long, env = "CONTEXT_ADDR", default_value = "127.0.0.1:4001")]
    pub context_addr: String,

    // --- Ollama Backend Args ---
    /// Base URL for the local Ollama daemon.
    #[arg(long, env = "OLLAMA_BASE_URL", default_value = "http://localhost:11434")]
    pub ollama_base_url: String,

    /// Model name for Ollama completions.
    #[arg(long, env = "OLLAMA_MODEL", default_value = "deepseek-r1:8b")]
    pub ollama_model: String,

    // --- Azura Backend Args ---
    /// Base URL for the Azura completion service.
    #[arg(long, env = "AZURA_BASE_URL", default_value = "http://localhost:8901")]
    pub azura_base_url: String,

    /// Model name for Azura completions.
    #[arg(long, env = "AZURA_MODEL", default_value = "deepseek-r1:70b")]
    pub azura_model: String,

    // --- Generation Args ---
    /// Sampling temperature sent with every completion request.
    #[arg(long, env = "TEMPERATURE", default_value = "0.7")]
    pub temperature: f32,

    /// Upper bound in seconds for a single upstream completion call.
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "30")]
    pub request_timeout_secs: u64,

    // --- Transcript Seed Args ---
    /// System prompt seeded into every new conversation.
    #[arg(long, env = "SYSTEM_PROMPT", default_value = "You are a helpful assistant.")]
    pub system_prompt: String,

    /// Assistant greeting seeded after the system prompt.
    #[arg(long, env = "GREETING", default_value = "Hello! How can I help you today?")]
    pub greeting: String,
}
