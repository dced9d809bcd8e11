pub mod error_mapper;
pub mod groq;
pub mod prompt;
