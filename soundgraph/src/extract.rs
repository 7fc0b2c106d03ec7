//! Parse-then-validate boundary for model output.
//!
//! The text endpoints are expected to answer with JSON, frequently wrapped
//! in Markdown code fences. Parsing is an explicit step with a typed
//! failure so a malformed response never reaches the handlers as an
//! assumed contract.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Errors produced while extracting structured data from model output.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    /// The response text was not valid JSON once fences were stripped.
    #[error("model response is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The parsed object lacks an expected top-level field.
    #[error("model response missing expected field `{0}`")]
    MissingField(&'static str),
}

/// Strip Markdown code-fence delimiters from a model response.
#[must_use]
pub fn strip_code_fences(text: &str) -> &str {
    let mut text = text.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

/// Parse model output as JSON after removing code fences.
///
/// # Errors
///
/// Returns [`ExtractionError::Parse`] when the stripped text is not valid
/// JSON.
pub fn parse_json(text: &str) -> Result<Value, ExtractionError> {
    Ok(serde_json::from_str(strip_code_fences(text))?)
}

/// Look up a required top-level field on a parsed response.
///
/// # Errors
///
/// Returns [`ExtractionError::MissingField`] when the field is absent.
pub fn require_field<'a>(
    value: &'a Value,
    field: &'static str,
) -> Result<&'a Value, ExtractionError> {
    value.get(field).ok_or(ExtractionError::MissingField(field))
}

/// Parse model output and deserialize one required top-level field.
///
/// # Errors
///
/// Returns [`ExtractionError::Parse`] for non-JSON text or a field whose
/// shape does not match `T`, and [`ExtractionError::MissingField`] when
/// the field is absent.
pub fn extract_field<T: DeserializeOwned>(
    text: &str,
    field: &'static str,
) -> Result<T, ExtractionError> {
    let value = parse_json(text)?;
    let field_value = require_field(&value, field)?;
    Ok(serde_json::from_value(field_value.clone())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fence() {
        let text = "```json\n{\"commands\": []}\n```";
        assert_eq!(strip_code_fences(text), "{\"commands\": []}");
    }

    #[test]
    fn test_strip_bare_fence() {
        let text = "```\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(text), "{\"a\": 1}");
    }

    #[test]
    fn test_unfenced_text_is_untouched() {
        assert_eq!(strip_code_fences("  {\"a\": 1}  "), "{\"a\": 1}");
    }

    #[test]
    fn test_parse_rejects_prose() {
        let err = parse_json("Sure! Here are your commands.").unwrap_err();
        assert!(matches!(err, ExtractionError::Parse(_)));
    }

    #[test]
    fn test_require_field_missing() {
        let value = parse_json("{\"other\": 1}").unwrap();
        let err = require_field(&value, "commands").unwrap_err();
        assert!(matches!(err, ExtractionError::MissingField("commands")));
    }

    #[test]
    fn test_extract_field_deserializes() {
        let text = "```json\n{\"recommendations\": [\"a\", \"b\"]}\n```";
        let values: Vec<String> = extract_field(text, "recommendations").unwrap();
        assert_eq!(values, ["a", "b"]);
    }
}
