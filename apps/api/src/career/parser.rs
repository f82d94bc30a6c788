//! Model-output parser — coerces raw completion text into validated suggestions.
//!
//! Two extraction attempts, nothing else:
//! 1. arrays embedded in the text, each bounded by its own JSON syntax, tried in
//!    order of their opening `[`; the first that validates wins;
//! 2. the whole text with code fences stripped.
//!
//! Whatever is extracted must be a non-empty array whose every element passes
//! `validate_suggestion`. Anything else is `UnparsableModelOutput`.

use serde_json::{Deserializer, Value};

use crate::career::models::CareerSuggestion;
use crate::career::strategy::DerivationError;
use crate::llm_client::strip_json_fences;

const MAX_MATCH_SCORE: u8 = 100;

/// Parses raw model text into suggestions, preserving model order.
pub fn parse_model_output(text: &str) -> Result<Vec<CareerSuggestion>, DerivationError> {
    let mut failures = Vec::new();

    let mut embedded_failure = None;
    for candidate in embedded_arrays(text) {
        match validate_items(&candidate) {
            Ok(suggestions) => return Ok(suggestions),
            Err(reason) => {
                embedded_failure.get_or_insert(reason);
            }
        }
    }
    if let Some(reason) = embedded_failure {
        failures.push(format!("embedded array: {reason}"));
    }

    match parse_candidate(strip_json_fences(text)) {
        Ok(suggestions) => Ok(suggestions),
        Err(reason) => {
            failures.push(format!("full text: {reason}"));
            Err(DerivationError::UnparsableModelOutput(failures.join("; ")))
        }
    }
}

/// Every JSON array that starts at some `[` in `text`, in order of position.
/// Each is read up to its own closing bracket; whatever follows is ignored.
fn embedded_arrays(text: &str) -> impl Iterator<Item = Vec<Value>> + '_ {
    text.match_indices('[').filter_map(move |(start, _)| {
        match Deserializer::from_str(&text[start..])
            .into_iter::<Value>()
            .next()
        {
            Some(Ok(Value::Array(items))) => Some(items),
            _ => None,
        }
    })
}

fn parse_candidate(candidate: &str) -> Result<Vec<CareerSuggestion>, String> {
    let value: Value =
        serde_json::from_str(candidate).map_err(|e| format!("invalid JSON ({e})"))?;

    let items = value
        .as_array()
        .ok_or_else(|| "expected a JSON array".to_string())?;

    validate_items(items)
}

fn validate_items(items: &[Value]) -> Result<Vec<CareerSuggestion>, String> {
    if items.is_empty() {
        return Err("array is empty".to_string());
    }

    items
        .iter()
        .enumerate()
        .map(|(i, item)| validate_suggestion(item).map_err(|e| format!("item {i}: {e}")))
        .collect()
}

/// Field-by-field check of one element. Extra fields are ignored.
fn validate_suggestion(item: &Value) -> Result<CareerSuggestion, String> {
    if !item.is_object() {
        return Err("expected an object".to_string());
    }

    let suggestion: CareerSuggestion =
        serde_json::from_value(item.clone()).map_err(|e| e.to_string())?;

    if suggestion.match_score > MAX_MATCH_SCORE {
        return Err(format!(
            "matchScore {} is outside 0-{MAX_MATCH_SCORE}",
            suggestion.match_score
        ));
    }
    if suggestion.title.trim().is_empty() {
        return Err("title is blank".to_string());
    }

    Ok(suggestion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career::models::GrowthProspect;

    const BARE: &str = r#"[
        {
            "title": "Machine Learning Engineer",
            "description": "Builds and ships ML systems",
            "matchScore": 91,
            "requiredSkills": ["Python", "PyTorch"],
            "careerPath": ["ML Engineer", "Senior ML Engineer", "ML Architect"],
            "salaryRange": "$90,000 - $180,000",
            "growthProspect": "Very High",
            "timeToAchieve": "1-2 years",
            "nextSteps": ["Ship a model to production", "Learn MLOps", "Find a mentor"]
        },
        {
            "title": "Data Engineer",
            "description": "Builds data pipelines",
            "matchScore": 84,
            "requiredSkills": ["SQL", "Spark"],
            "careerPath": ["Data Engineer", "Senior Data Engineer"],
            "salaryRange": "$80,000 - $160,000",
            "growthProspect": "High",
            "timeToAchieve": "1 year",
            "nextSteps": ["Learn Airflow", "Build a pipeline", "Study data modeling"]
        }
    ]"#;

    fn unparsable(result: Result<Vec<CareerSuggestion>, DerivationError>) -> String {
        match result {
            Err(DerivationError::UnparsableModelOutput(reason)) => reason,
            other => panic!("expected UnparsableModelOutput, got {other:?}"),
        }
    }

    #[test]
    fn test_bare_array_parses_in_model_order() {
        let suggestions = parse_model_output(BARE).unwrap();
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].title, "Machine Learning Engineer");
        assert_eq!(suggestions[0].match_score, 91);
        assert_eq!(suggestions[0].growth_prospect, GrowthProspect::VeryHigh);
        assert_eq!(suggestions[1].title, "Data Engineer");
    }

    #[test]
    fn test_prose_and_fences_parse_identically_to_bare() {
        let wrapped = format!("Here you go:\n```json\n{BARE}\n```\nGood luck!");
        assert_eq!(
            parse_model_output(&wrapped).unwrap(),
            parse_model_output(BARE).unwrap()
        );
    }

    #[test]
    fn test_brackets_in_trailing_prose_do_not_break_parsing() {
        let wrapped =
            format!("Here you go:\n```json\n{BARE}\n```\nScores are on a [0-100] scale.");
        assert_eq!(
            parse_model_output(&wrapped).unwrap(),
            parse_model_output(BARE).unwrap()
        );
    }

    #[test]
    fn test_bracketed_prose_before_the_array_is_skipped() {
        let wrapped = format!("My top [1] pick and a [note]:\n{BARE}\nSee [2] for more.");
        assert_eq!(
            parse_model_output(&wrapped).unwrap(),
            parse_model_output(BARE).unwrap()
        );
    }

    #[test]
    fn test_first_valid_array_wins() {
        let second = BARE.replacen("Machine Learning Engineer", "Robotics Engineer", 1);
        let text = format!("Option A:\n{BARE}\nOption B:\n{second}");
        let suggestions = parse_model_output(&text).unwrap();
        assert_eq!(suggestions[0].title, "Machine Learning Engineer");
    }

    #[test]
    fn test_fenced_array_without_prose() {
        let fenced = format!("```\n{BARE}\n```");
        assert_eq!(parse_model_output(&fenced).unwrap().len(), 2);
    }

    #[test]
    fn test_array_inside_wrapper_object_is_found() {
        let wrapped = format!(r#"{{"suggestions": {BARE}}}"#);
        assert_eq!(parse_model_output(&wrapped).unwrap().len(), 2);
    }

    #[test]
    fn test_plain_prose_is_unparsable() {
        let reason = unparsable(parse_model_output("not json at all"));
        assert!(reason.contains("full text"));
    }

    #[test]
    fn test_object_instead_of_array_is_unparsable() {
        let reason = unparsable(parse_model_output(r#"{"title": "Chef"}"#));
        assert!(reason.contains("expected a JSON array"));
    }

    #[test]
    fn test_empty_array_is_unparsable() {
        unparsable(parse_model_output("Sorry, nothing fits: []"));
    }

    #[test]
    fn test_missing_required_field_is_unparsable() {
        let missing = r#"[{"title": "Chef", "description": "Cooks", "matchScore": 50}]"#;
        let reason = unparsable(parse_model_output(missing));
        assert!(reason.contains("item 0"));
        assert!(reason.contains("missing field"));
    }

    #[test]
    fn test_mismatched_type_is_unparsable() {
        let bad = BARE.replacen(r#""matchScore": 91"#, r#""matchScore": "91""#, 1);
        unparsable(parse_model_output(&bad));
    }

    #[test]
    fn test_score_above_100_is_unparsable() {
        let bad = BARE.replacen(r#""matchScore": 91"#, r#""matchScore": 140"#, 1);
        let reason = unparsable(parse_model_output(&bad));
        assert!(reason.contains("matchScore 140"));
    }

    #[test]
    fn test_fractional_or_negative_score_is_unparsable() {
        unparsable(parse_model_output(&BARE.replacen("91", "91.5", 1)));
        unparsable(parse_model_output(&BARE.replacen("91", "-3", 1)));
    }

    #[test]
    fn test_unknown_growth_label_is_unparsable() {
        let bad = BARE.replacen("Very High", "Stratospheric", 1);
        unparsable(parse_model_output(&bad));
    }

    #[test]
    fn test_blank_title_is_unparsable() {
        let bad = BARE.replacen("Machine Learning Engineer", "  ", 1);
        let reason = unparsable(parse_model_output(&bad));
        assert!(reason.contains("title is blank"));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let extra = BARE.replacen(
            r#""matchScore": 91,"#,
            r#""matchScore": 91, "confidence": "high","#,
            1,
        );
        assert_eq!(parse_model_output(&extra).unwrap().len(), 2);
    }

    #[test]
    fn test_one_bad_element_rejects_whole_output() {
        let mixed = BARE.replacen(r#""salaryRange": "$80,000 - $160,000","#, "", 1);
        let reason = unparsable(parse_model_output(&mixed));
        assert!(reason.contains("item 1"));
    }
}
