pub mod context_api;
pub mod session_api;

use crate::cli::Args;
use crate::relay::ChatRelay;
use std::error::Error;
use std::sync::Arc;

pub struct Server {
    relay: Arc<ChatRelay>,
    args: Args,
}

impl Server {
    pub fn new(relay: Arc<ChatRelay>, args: Args) -> Self {
        Self { relay, args }
    }

    /// Brings up both API generations: the context API on a spawned
    /// listener, then the session API in the foreground.
    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        context_api::start_context_server(&self.args.context_addr, self.relay.clone()).await?;
        session_api::serve_session_api(&self.args.session_addr, self.relay.clone()).await?;

        Ok(())
    }
}
