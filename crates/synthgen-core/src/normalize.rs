//! Repairing a completion endpoint's free-text reply into structured records.
//!
//! Models are instructed to answer with a bare JSON array, but in practice
//! replies arrive wrapped in a transport envelope, often decorated with
//! Markdown code fences, and occasionally shaped as a single object instead
//! of an array.  [`normalize`] walks the envelope, strips the decoration and
//! coerces the payload into the one canonical form the rest of the pipeline
//! relies on: a top-level array of records.
//!
//! No field-level schema validation happens here — property names and types
//! are whatever the model produced.  The only guarantee is "valid JSON,
//! top-level array".

use serde_json::Value;
use tracing::{debug, error};

use crate::error::{GenerationError, Result};

/// Extract, clean and parse the model's answer from a raw response envelope.
///
/// Failure modes, in pipeline order:
///
/// * [`GenerationError::MalformedEnvelope`] – `raw` is not parseable JSON at
///   all;
/// * [`GenerationError::EmptyCompletion`] – the envelope carries no
///   candidate answer (`choices` absent or empty, or the nested message
///   content missing);
/// * [`GenerationError::MalformedPayload`] – the candidate content, after
///   fence-stripping, is not valid JSON.  The error carries the cleaned
///   text for diagnosis.
///
/// A non-array top-level value is promoted into a one-element array rather
/// than rejected; an empty array is valid and returned as-is.
pub fn normalize(raw: &str) -> Result<Vec<Value>> {
    let envelope: Value =
        serde_json::from_str(raw).map_err(GenerationError::MalformedEnvelope)?;

    let content = extract_content(&envelope)?;
    debug!(content, "extracted candidate content");

    let cleaned = strip_code_fences(content);
    debug!(cleaned, "cleaned candidate content");

    let payload: Value = serde_json::from_str(cleaned).map_err(|source| {
        error!(cleaned, %source, "candidate content is not valid JSON");
        GenerationError::MalformedPayload {
            content: cleaned.to_owned(),
            source,
        }
    })?;

    Ok(match payload {
        Value::Array(records) => records,
        other => vec![other],
    })
}

/// Walk `choices[0].message.content` and return the candidate text.
///
/// Endpoints may return several candidates; only the first is used.  Every
/// probing step is explicit so a missing field surfaces as
/// [`GenerationError::EmptyCompletion`] instead of a panic.
fn extract_content(envelope: &Value) -> Result<&str> {
    envelope
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .ok_or(GenerationError::EmptyCompletion)
}

/// Strip Markdown code-fence decoration from `text`.
///
/// Removes a leading fence marker (with or without a language tag such as
/// `json`), a trailing fence marker, and surrounding whitespace.
/// Interior content is never altered, a missing closing fence is tolerated,
/// and already-clean text comes back unchanged — the function is idempotent.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // The opening fence line may carry a language tag; the answer starts on
    // the next line.  A fence with no line break at all is left alone.
    let Some((_tag, body)) = rest.split_once('\n') else {
        return trimmed;
    };

    let body = body.trim_end();
    let body = body.strip_suffix("```").unwrap_or(body);
    body.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope_with(content: &str) -> String {
        json!({
            "choices": [{"message": {"role": "assistant", "content": content}}]
        })
        .to_string()
    }

    #[test]
    fn strip_is_identity_on_clean_text() {
        assert_eq!(strip_code_fences(r#"[{"a":1}]"#), r#"[{"a":1}]"#);
    }

    #[test]
    fn strip_removes_fences_with_language_tag() {
        let fenced = "```json\n[{\"a\":1}]\n```";
        assert_eq!(strip_code_fences(fenced), r#"[{"a":1}]"#);
    }

    #[test]
    fn strip_removes_bare_fences() {
        let fenced = "```\n[1, 2]\n```";
        assert_eq!(strip_code_fences(fenced), "[1, 2]");
    }

    #[test]
    fn strip_is_idempotent() {
        let fenced = "```json\n  {\"a\": 1}  \n```";
        let once = strip_code_fences(fenced);
        assert_eq!(strip_code_fences(once), once);
    }

    #[test]
    fn strip_tolerates_missing_closing_fence() {
        assert_eq!(strip_code_fences("```json\n[1]"), "[1]");
    }

    #[test]
    fn strip_does_not_alter_interior_backticks() {
        let fenced = "```json\n[\"a``b\"]\n```";
        assert_eq!(strip_code_fences(fenced), "[\"a``b\"]");
    }

    #[test]
    fn garbage_envelope_is_malformed_envelope() {
        let err = normalize("definitely not json").unwrap_err();
        assert!(matches!(err, GenerationError::MalformedEnvelope(_)));
    }

    #[test]
    fn missing_choices_is_empty_completion() {
        let err = normalize(r#"{"id": "cmpl-1"}"#).unwrap_err();
        assert!(matches!(err, GenerationError::EmptyCompletion));
    }

    #[test]
    fn empty_choice_list_is_empty_completion() {
        let err = normalize(r#"{"choices": []}"#).unwrap_err();
        assert!(matches!(err, GenerationError::EmptyCompletion));
    }

    #[test]
    fn missing_content_field_is_empty_completion() {
        let raw = r#"{"choices": [{"message": {"role": "assistant"}}]}"#;
        let err = normalize(raw).unwrap_err();
        assert!(matches!(err, GenerationError::EmptyCompletion));
    }

    #[test]
    fn non_json_content_is_malformed_payload_carrying_cleaned_text() {
        let err = normalize(&envelope_with("not json")).unwrap_err();
        match err {
            GenerationError::MalformedPayload { content, .. } => {
                assert_eq!(content, "not json");
            }
            other => panic!("expected MalformedPayload, got {other:?}"),
        }
    }

    #[test]
    fn fenced_non_json_reports_the_inner_text() {
        let err = normalize(&envelope_with("```json\nnot json\n```")).unwrap_err();
        match err {
            GenerationError::MalformedPayload { content, .. } => {
                assert_eq!(content, "not json");
            }
            other => panic!("expected MalformedPayload, got {other:?}"),
        }
    }

    #[test]
    fn single_object_is_promoted_to_one_element_array() {
        let records = normalize(&envelope_with(r#"{"a":1}"#)).unwrap();
        assert_eq!(records, vec![json!({"a": 1})]);
    }

    #[test]
    fn empty_array_is_valid() {
        let records = normalize(&envelope_with("[]")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn fenced_array_round_trips() {
        let content = "```json\n[{\"p1\":\"v1\"},{\"p1\":\"v2\"}]\n```";
        let records = normalize(&envelope_with(content)).unwrap();
        assert_eq!(records, vec![json!({"p1": "v1"}), json!({"p1": "v2"})]);
    }

    #[test]
    fn inconsistent_record_shapes_are_not_rejected() {
        let content = r#"[{"a":1},{"b":"x","c":true}]"#;
        let records = normalize(&envelope_with(content)).unwrap();
        assert_eq!(records.len(), 2);
    }
}
