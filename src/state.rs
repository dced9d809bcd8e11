// src/state.rs
use std::sync::Arc;

use crate::services::groq::{CompletionBackend, GroqClient};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    // None when no API key is configured. The chat handler treats that as a
    // soft condition and answers with operator guidance instead of failing.
    pub backend: Option<Arc<dyn CompletionBackend>>,
}

impl AppState {
    pub fn new(backend: Option<Arc<dyn CompletionBackend>>) -> Self {
        Self { backend }
    }

    pub fn from_env() -> Self {
        let backend = match std::env::var("GROQ_API_KEY") {
            Ok(key) if !key.trim().is_empty() => {
                Some(Arc::new(GroqClient::new(key)) as Arc<dyn CompletionBackend>)
            }
            _ => {
                tracing::warn!("GROQ_API_KEY is not set, chat will answer with setup guidance");
                None
            }
        };
        Self { backend }
    }
}
