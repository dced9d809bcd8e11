// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ChatRequest {
    // An absent message deserializes to "" so the handler answers 400
    // instead of axum rejecting the body with 422.
    #[serde(default)]
    pub message: String,
    #[serde(rename = "medicalContext")]
    pub medical_context: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
