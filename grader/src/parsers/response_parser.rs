//! # Response Parser
//!
//! Model output is asked to be a bare JSON object, but in practice it arrives wrapped
//! in markdown code fences or surrounded by a sentence of narration. The
//! [`ResponseParser`] tolerates both:
//!
//! 1. Every ```` ```json ```` / ```` ``` ```` marker is removed, case-insensitively.
//! 2. If what remains is not a JSON object on its own, the span from the first `{`
//!    to the last `}` is used instead.
//! 3. That candidate must parse as a JSON object, otherwise a [`ParseError`] is returned.
//! 4. `score` is coerced to a number (see [`coerce_score`]) and the three text fields
//!    fall back to fixed messages when missing, blank or not strings.
//!
//! The parser does not clamp the score; the evaluator owns that contract.

use crate::error::ParseError;
use crate::traits::parser::Parser;
use crate::types::EvaluationFields;
use crate::utilities::score_normalization::coerce_score;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

pub const MISSING_ANALYSIS: &str = "No se pudo generar análisis.";
pub const MISSING_FEEDBACK: &str = "No se pudo generar feedback.";

static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)```(?:json)?\s*").expect("code fence pattern is valid"));

pub struct ResponseParser;

impl<'a> Parser<&'a str, EvaluationFields> for ResponseParser {
    fn parse(&self, raw: &'a str) -> Result<EvaluationFields, ParseError> {
        let cleaned = CODE_FENCE.replace_all(raw, "");
        let object = extract_object(cleaned.trim())?;

        Ok(EvaluationFields {
            score: coerce_score(object.get("score")),
            strengths: text_field(&object, "strengths", MISSING_ANALYSIS),
            improvements: text_field(&object, "improvements", MISSING_ANALYSIS),
            feedback: text_field(&object, "feedback", MISSING_FEEDBACK),
        })
    }
}

fn extract_object(cleaned: &str) -> Result<Map<String, Value>, ParseError> {
    if let Ok(Value::Object(object)) = serde_json::from_str::<Value>(cleaned) {
        return Ok(object);
    }

    let start = cleaned.find('{').ok_or(ParseError::NoJsonObject)?;
    let end = cleaned.rfind('}').ok_or(ParseError::NoJsonObject)?;
    if end < start {
        return Err(ParseError::NoJsonObject);
    }

    match serde_json::from_str::<Value>(&cleaned[start..=end]) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(_) => Err(ParseError::NoJsonObject),
        Err(e) => Err(ParseError::InvalidJson(e.to_string())),
    }
}

fn text_field(object: &Map<String, Value>, key: &str, fallback: &str) -> String {
    match object.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        _ => fallback.to_string(),
    }
}
