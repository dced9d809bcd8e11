// src/services/prompt.rs

pub const PERSONA_PREAMBLE: &str = "You are MedIQ AI, a sophisticated medical consultation \
assistant. You provide evidence-based healthcare guidance while emphasizing the importance of \
professional medical care.

IMPORTANT GUIDELINES:
- Always recommend consulting healthcare professionals for diagnosis and treatment
- Provide educational information, not definitive medical advice
- Be empathetic and supportive in your responses
- Use clear, accessible language while maintaining medical accuracy
- Acknowledge limitations and encourage professional consultation";

const CLOSING_INSTRUCTION: &str = "Please provide a helpful, informative response that considers \
the patient's medical history (if provided) while maintaining appropriate medical disclaimers.";

/// Compose the full prompt sent upstream: persona preamble, the optional
/// patient context block, then the query itself.
pub fn build_prompt(message: &str, medical_context: Option<&str>) -> String {
    let context_block = match medical_context {
        Some(ctx) if !ctx.trim().is_empty() => {
            format!("PATIENT MEDICAL CONTEXT:\n{ctx}\n\n")
        }
        _ => String::new(),
    };

    format!(
        "{PERSONA_PREAMBLE}\n\n{context_block}PATIENT QUERY: {message}\n\n{CLOSING_INSTRUCTION}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_without_context_has_no_context_block() {
        let prompt = build_prompt("What causes a headache?", None);
        assert!(prompt.contains("What causes a headache?"));
        assert!(prompt.starts_with(PERSONA_PREAMBLE));
        assert!(!prompt.contains("PATIENT MEDICAL CONTEXT"));
    }

    #[test]
    fn prompt_with_context_places_it_before_the_query() {
        let prompt = build_prompt("Is this serious?", Some("Type 2 diabetes, diagnosed 2019"));
        let context_at = prompt
            .find("PATIENT MEDICAL CONTEXT:\nType 2 diabetes, diagnosed 2019")
            .unwrap();
        let query_at = prompt.find("PATIENT QUERY: Is this serious?").unwrap();
        assert!(context_at < query_at);
    }

    #[test]
    fn blank_context_is_treated_as_absent() {
        let prompt = build_prompt("hello", Some("   "));
        assert!(!prompt.contains("PATIENT MEDICAL CONTEXT"));
    }
}
