// src/services/error_mapper.rs
use crate::services::groq::CompletionError;

pub const INVALID_KEY_MESSAGE: &str = "The Groq API key appears to be invalid. Please check \
     your GROQ_API_KEY environment variable.";

pub const QUOTA_MESSAGE: &str = "I've reached my usage limit for now. Please try again later \
     or check your Groq API quota.";

pub const RATE_LIMIT_MESSAGE: &str = "I'm receiving too many requests right now. Please wait \
     a moment and try again.";

pub const SAFETY_MESSAGE: &str = "I can't provide a response to that request due to safety \
     guidelines. Please try rephrasing your question.";

pub const GENERIC_FAILURE_MESSAGE: &str = "I apologize, but I encountered an error while \
     processing your request. Please try again.";

// First match wins, so keep this ordered: a provider message could in
// principle match more than one pattern.
const ERROR_PATTERNS: &[(&[&str], &str)] = &[
    (&["API_KEY_INVALID", "Invalid API Key"], INVALID_KEY_MESSAGE),
    (&["QUOTA_EXCEEDED", "quota"], QUOTA_MESSAGE),
    (&["RATE_LIMIT_EXCEEDED", "rate limit"], RATE_LIMIT_MESSAGE),
    (&["SAFETY"], SAFETY_MESSAGE),
];

/// Translate an upstream failure into the user-facing reply. Matching is
/// best-effort against the provider's error text; anything unrecognized gets
/// the generic retry message.
pub fn map_completion_error(err: &CompletionError) -> &'static str {
    let text = err.to_string();
    for (needles, message) in ERROR_PATTERNS {
        if needles.iter().any(|needle| text.contains(needle)) {
            return message;
        }
    }
    GENERIC_FAILURE_MESSAGE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(text: &str) -> CompletionError {
        CompletionError::Api(text.to_string())
    }

    #[test]
    fn maps_invalid_key_variants() {
        assert_eq!(map_completion_error(&api("401 API_KEY_INVALID")), INVALID_KEY_MESSAGE);
        assert_eq!(map_completion_error(&api("Invalid API Key")), INVALID_KEY_MESSAGE);
    }

    #[test]
    fn maps_quota_variants() {
        assert_eq!(map_completion_error(&api("QUOTA_EXCEEDED")), QUOTA_MESSAGE);
        assert_eq!(
            map_completion_error(&api("you have exceeded your monthly quota")),
            QUOTA_MESSAGE
        );
    }

    #[test]
    fn maps_rate_limit_variants() {
        assert_eq!(map_completion_error(&api("RATE_LIMIT_EXCEEDED")), RATE_LIMIT_MESSAGE);
        assert_eq!(map_completion_error(&api("rate limit reached")), RATE_LIMIT_MESSAGE);
    }

    #[test]
    fn maps_safety_filter() {
        assert_eq!(
            map_completion_error(&api("blocked: SAFETY violation")),
            SAFETY_MESSAGE
        );
    }

    #[test]
    fn earlier_pattern_wins_when_several_match() {
        // Mentions both the key and the rate limit; the key pattern is first.
        assert_eq!(
            map_completion_error(&api("Invalid API Key (rate limit metadata attached)")),
            INVALID_KEY_MESSAGE
        );
    }

    #[test]
    fn unknown_text_falls_through_to_generic() {
        assert_eq!(
            map_completion_error(&api("connection reset by peer")),
            GENERIC_FAILURE_MESSAGE
        );
    }

    #[test]
    fn matching_is_case_sensitive_like_the_provider_phrasing() {
        // "Quota" (capitalized) is not a known variant and falls through.
        assert_eq!(map_completion_error(&api("Quota issue")), GENERIC_FAILURE_MESSAGE);
    }
}
