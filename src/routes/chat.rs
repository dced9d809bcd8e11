use axum::{Json, extract::State};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::{error_mapper::map_completion_error, prompt::build_prompt},
    state::SharedState,
};

pub const MISSING_API_KEY_RESPONSE: &str = "I'm sorry, but I need a Groq API key to function \
     properly. Please add your GROQ_API_KEY to the environment variables in your project settings.";

pub const EMPTY_COMPLETION_FALLBACK: &str = "I apologize, but I couldn't generate a response.";

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = payload.message.trim();

    if message.is_empty() {
        return Err(AppError::BadRequest("Message is required".to_string()));
    }

    let Some(backend) = &state.backend else {
        return Ok(Json(ChatResponse {
            response: MISSING_API_KEY_RESPONSE.to_string(),
        }));
    };

    let prompt = build_prompt(message, payload.medical_context.as_deref());

    let response = match backend.complete(&prompt).await {
        Ok(Some(text)) => text,
        Ok(None) => EMPTY_COMPLETION_FALLBACK.to_string(),
        Err(err) => {
            tracing::error!(error = %err, "error generating response");
            map_completion_error(&err).to_string()
        }
    };

    Ok(Json(ChatResponse { response }))
}
