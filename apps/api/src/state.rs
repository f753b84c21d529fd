use crate::llm::LlmClient;
use crate::store::PortfolioStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: PortfolioStore,
    pub llm: LlmClient,
}
