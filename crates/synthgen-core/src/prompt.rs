//! Turning caller requests into natural-language model instructions.
//!
//! The wording is deliberately rigid: counts are stated twice, an example
//! record skeleton anchors the output shape, and every prompt closes with a
//! strict JSON-only directive.  Loosening any of these measurably increases
//! the rate of prose-wrapped or miscounted replies, which the
//! [`crate::normalize`] stage then has to reject.

use std::fmt::Write as _;

use synthgen_prompt::PromptBuilder;

use crate::error::Result;
use crate::request::{AppendRequest, GenerationRequest};

const JSON_ONLY: &str =
    "Respond in valid JSON format only, with no additional text or explanations.";

/// Build the instruction for a first-time generation.
///
/// Validates the request first, so an invalid count or blank topic fails
/// with [`crate::GenerationError::InvalidRequest`] before any network call.
pub fn initial_prompt(request: &GenerationRequest) -> Result<String> {
    request.validate()?;

    let GenerationRequest {
        topic,
        property_count,
        record_count,
    } = request;

    // Example properties anchor the output format: "property1": "value1", …
    let mut example = String::new();
    for i in 1..=*property_count {
        write!(example, "\"property{i}\": \"value{i}\"").expect("failed to write buffer");
        if i != *property_count {
            example.push_str(", ");
        }
    }

    let prompt = PromptBuilder::new()
        .add_line(format!(
            "The user wants to generate data for the topic \"{topic}\"."
        ))
        .add_line(format!(
            "Please generate exactly {record_count} records with exactly \
             {property_count} properties per record."
        ))
        .add_line(JSON_ONLY)
        .add_line("Each record should follow this format:")
        .add_line("[")
        .add_line("  {")
        .add_line(format!("    {example}"))
        .add_line("  },")
        .add_line("  ...")
        .add_line("]")
        .add_line(format!(
            "Make sure there are exactly {record_count} records, and each record \
             has exactly {property_count} properties, no more, no less."
        ))
        .add_line("Ensure that all records have the same properties and data types.")
        .finalize();

    Ok(prompt)
}

/// Build the instruction for growing an existing dataset.
///
/// When the request names properties, each one is enumerated and the model
/// is told to keep data types consistent with prior records; otherwise that
/// clause is omitted entirely.
pub fn append_prompt(request: &AppendRequest) -> Result<String> {
    request.validate()?;

    let AppendRequest {
        topic,
        record_count,
        properties,
    } = request;

    let mut builder = PromptBuilder::new().add_fragment(format!(
        "Please generate {record_count} additional records for the topic \"{topic}\"."
    ));

    if let Some(properties) = properties.as_deref().filter(|p| !p.is_empty()) {
        let names = properties
            .iter()
            .map(|p| format!("\"{p}\""))
            .collect::<Vec<_>>()
            .join(", ");
        builder = builder
            .add_fragment(format!(
                " Each record should include the following properties: {names}."
            ))
            .add_fragment(" Keep the data types of every property consistent with prior records.");
    }

    let prompt = builder
        .add_fragment(" Provide realistic and diverse values relevant to the topic. ")
        .add_fragment(JSON_ONLY)
        .finalize();

    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerationError;

    #[test]
    fn initial_prompt_states_both_counts() {
        let prompt = initial_prompt(&GenerationRequest::new("Flight Schedules", 3, 7)).unwrap();
        assert!(prompt.contains("exactly 7 records"));
        assert!(prompt.contains("exactly 3 properties"));
        assert!(prompt.contains("\"Flight Schedules\""));
    }

    #[test]
    fn initial_prompt_anchors_format_with_placeholders() {
        let prompt = initial_prompt(&GenerationRequest::new("Cities", 2, 1)).unwrap();
        assert!(prompt.contains("\"property1\": \"value1\", \"property2\": \"value2\""));
        assert!(prompt.contains("Respond in valid JSON format only"));
    }

    #[test]
    fn initial_prompt_is_instruction_not_data() {
        // The embedded example is a multi-line skeleton, never a complete
        // single-line JSON array a caller could mistake for output.
        let prompt = initial_prompt(&GenerationRequest::new("Cities", 2, 3)).unwrap();
        assert!(!prompt
            .lines()
            .any(|line| line.trim_start().starts_with('[') && line.trim_end().ends_with(']')));
    }

    #[test]
    fn initial_prompt_rejects_zero_record_count() {
        let err = initial_prompt(&GenerationRequest::new("Cities", 2, 0)).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidRequest(_)));
    }

    #[test]
    fn append_prompt_enumerates_properties_when_given() {
        let request = AppendRequest::new("Cities", 4)
            .with_properties(vec!["name".into(), "population".into()]);
        let prompt = append_prompt(&request).unwrap();
        assert!(prompt.contains("4 additional records"));
        assert!(prompt.contains("\"name\", \"population\""));
        assert!(prompt.contains("consistent with prior records"));
        assert!(prompt.contains("Respond in valid JSON format only"));
    }

    #[test]
    fn append_prompt_omits_property_clause_when_absent() {
        let prompt = append_prompt(&AppendRequest::new("Cities", 2)).unwrap();
        assert!(!prompt.contains("following properties"));
        assert!(!prompt.contains("consistent with prior records"));
        assert!(prompt.contains("Respond in valid JSON format only"));
    }

    #[test]
    fn append_prompt_treats_empty_property_list_as_absent() {
        let request = AppendRequest::new("Cities", 2).with_properties(vec![]);
        let prompt = append_prompt(&request).unwrap();
        assert!(!prompt.contains("following properties"));
    }
}
