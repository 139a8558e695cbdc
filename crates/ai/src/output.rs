//! Coercion of raw model text into [`SavingsAdvice`].

use crate::advice_model::SavingsAdvice;
use crate::error::AiError;

/// Parses model output into advice.
///
/// The text must be a JSON object with a non-empty `recommendations`
/// string, optionally wrapped in a Markdown code fence. The recommendations
/// are returned exactly as generated.
pub fn parse_advice_output(raw: &str) -> Result<SavingsAdvice, AiError> {
    let body = strip_code_fence(raw.trim());
    let advice: SavingsAdvice = serde_json::from_str(body).map_err(|e| {
        AiError::generation(format!("Model output is not a recommendations object: {}", e))
    })?;
    if advice.recommendations.trim().is_empty() {
        return Err(AiError::generation("Model returned empty recommendations"));
    }
    Ok(advice)
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string (e.g. `json`) on the opening line.
    let rest = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_json() {
        let advice = parse_advice_output(r#"{"recommendations": "Save 20%..."}"#).unwrap();
        assert_eq!(advice.recommendations, "Save 20%...");
    }

    #[test]
    fn test_fenced_json() {
        let raw = "```json\n{\"recommendations\": \"Automate a $500 transfer.\"}\n```\n";
        assert_eq!(
            parse_advice_output(raw).unwrap().recommendations,
            "Automate a $500 transfer."
        );
        let bare_fence = "```\n{\"recommendations\": \"Cut subscriptions.\"}\n```";
        assert_eq!(
            parse_advice_output(bare_fence).unwrap().recommendations,
            "Cut subscriptions."
        );
    }

    #[test]
    fn test_text_is_returned_unmodified() {
        let raw = r#"{"recommendations": "  1. Budget\n2. Save  "}"#;
        assert_eq!(
            parse_advice_output(raw).unwrap().recommendations,
            "  1. Budget\n2. Save  "
        );
    }

    #[test]
    fn test_uncoercible_shapes_are_generation_errors() {
        for raw in [
            "Here are some tips: save more.",
            r#"{"advice": "Save more"}"#,
            r#"{"recommendations": 42}"#,
            r#"{"recommendations": "   "}"#,
            r#"["Save more"]"#,
            "",
        ] {
            let err = parse_advice_output(raw).unwrap_err();
            assert_eq!(err.code(), "GENERATION_ERROR", "input: {raw:?}");
        }
    }
}
