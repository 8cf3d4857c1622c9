use std::sync::Arc;

use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. Production: `LlmClient`. Tests swap in stubs.
    pub llm: Arc<dyn CompletionClient>,
}
