use crate::constants::{INSIGHT_COUNT, STARTER_COUNT};
use crate::engine::{CompatibilityResult, ProfileSummary};
use crate::error::AdapterError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

lazy_static! {
    static ref JSON_OBJECT: Regex = Regex::new(r"\{[\s\S]*\}").unwrap();
    static ref JSON_ARRAY: Regex = Regex::new(r"\[[\s\S]*\]").unwrap();
    static ref CODE_FENCE: Regex = Regex::new(r"```(?:json)?\n?|\n?```").unwrap();
    static ref LINE_PREFIX: Regex = Regex::new(r#"^["\-*\d.\s\[\]]+"#).unwrap();
    static ref LINE_SUFFIX: Regex = Regex::new(r#""+,?$"#).unwrap();
}

const MAX_KEY_STRENGTHS: usize = 4;
const MIN_LINE_LENGTH: usize = 10;

#[derive(Debug, Deserialize)]
struct RawCompatibility {
    compatibility_score: Option<f64>,
    #[serde(default)]
    shared_interests: Option<Vec<String>>,
    #[serde(default)]
    complementary_skills: Option<Vec<String>>,
    goal_alignment: Option<f64>,
    explanation: Option<String>,
    #[serde(default)]
    conversation_starters: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct RawSummary {
    summary: Option<String>,
    #[serde(default)]
    key_strengths: Option<Vec<Value>>,
    networking_value: Option<String>,
    #[serde(default)]
    suggested_connections: Option<Vec<Value>>,
}

fn strip_fences(text: &str) -> String {
    CODE_FENCE.replace_all(text, "").trim().to_string()
}

/// Deserializes the widest `{...}` span found in `text`.
fn parse_object<T: DeserializeOwned>(text: &str) -> Result<T, AdapterError> {
    let cleaned = strip_fences(text);
    let span = JSON_OBJECT
        .find(&cleaned)
        .ok_or_else(|| AdapterError::MalformedResponse("no JSON object in response".to_string()))?;
    serde_json::from_str(span.as_str())
        .map_err(|e| AdapterError::MalformedResponse(format!("invalid JSON object: {}", e)))
}

/// The widest `[...]` span found in already cleaned text.
fn array_span(cleaned: &str) -> Result<&str, AdapterError> {
    JSON_ARRAY
        .find(cleaned)
        .map(|span| span.as_str())
        .ok_or_else(|| AdapterError::MalformedResponse("no JSON array in response".to_string()))
}

fn decode_array(span: &str) -> Result<Vec<String>, AdapterError> {
    let values: Vec<Value> = serde_json::from_str(span)
        .map_err(|e| AdapterError::MalformedResponse(format!("invalid JSON array: {}", e)))?;
    Ok(values.into_iter().map(value_to_text).collect())
}

/// Deserializes the widest `[...]` span found in `text` into strings.
fn parse_array(text: &str) -> Result<Vec<String>, AdapterError> {
    let cleaned = strip_fences(text);
    decode_array(array_span(&cleaned)?)
}

fn value_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn clean_entries(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

/// First three usable entries, missing positions taken from `fallback`.
fn fill_three(values: Vec<String>, fallback: &[String; 3]) -> [String; 3] {
    let mut values = clean_entries(values).into_iter();
    std::array::from_fn(|i| values.next().unwrap_or_else(|| fallback[i].clone()))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

pub fn compatibility(
    text: &str,
    fallback: &CompatibilityResult,
) -> Result<CompatibilityResult, AdapterError> {
    let raw: RawCompatibility = parse_object(text)?;

    let score = match raw.compatibility_score {
        Some(score) if score.is_finite() => score.round().clamp(0.0, 100.0) as u32,
        Some(score) => {
            return Err(AdapterError::MalformedResponse(format!(
                "non-finite compatibility score {}",
                score
            )))
        }
        None => fallback.score,
    };
    let goal_alignment = raw
        .goal_alignment
        .filter(|g| g.is_finite())
        .map(|g| g.clamp(0.0, 1.0))
        .unwrap_or(fallback.goal_alignment);

    let starters: Vec<String> = raw
        .conversation_starters
        .map(|values| values.into_iter().map(value_to_text).collect())
        .unwrap_or_default();

    Ok(CompatibilityResult {
        score,
        shared_interests: raw
            .shared_interests
            .map(clean_entries)
            .unwrap_or_else(|| fallback.shared_interests.clone()),
        complementary_skills: raw
            .complementary_skills
            .map(clean_entries)
            .unwrap_or_else(|| fallback.complementary_skills.clone()),
        goal_alignment,
        explanation: non_blank(raw.explanation).unwrap_or_else(|| fallback.explanation.clone()),
        conversation_starters: fill_three(starters, &fallback.conversation_starters),
    })
}

pub fn enhanced_summary(text: &str, fallback: &ProfileSummary) -> Result<ProfileSummary, AdapterError> {
    let raw: RawSummary = parse_object(text)?;

    let mut key_strengths = raw
        .key_strengths
        .map(|values| clean_entries(values.into_iter().map(value_to_text).collect()))
        .unwrap_or_default();
    key_strengths.truncate(MAX_KEY_STRENGTHS);
    if key_strengths.is_empty() {
        key_strengths = fallback.key_strengths.clone();
    }

    let mut suggested = raw
        .suggested_connections
        .map(|values| clean_entries(values.into_iter().map(value_to_text).collect()))
        .unwrap_or_default();
    suggested.truncate(3);
    for entry in fallback.suggested_connections.iter().skip(suggested.len()) {
        suggested.push(entry.clone());
    }

    Ok(ProfileSummary {
        summary: non_blank(raw.summary).unwrap_or_else(|| fallback.summary.clone()),
        key_strengths,
        networking_value: non_blank(raw.networking_value)
            .unwrap_or_else(|| fallback.networking_value.clone()),
        suggested_connections: suggested,
    })
}

/// Starters as a JSON array. A reply that has an array which fails to
/// decode may still be read as one starter per line; a reply without any
/// array is rejected.
pub fn starters(
    text: &str,
    fallback: &[String; STARTER_COUNT],
) -> Result<[String; STARTER_COUNT], AdapterError> {
    let cleaned = strip_fences(text);
    let span = array_span(&cleaned)?;
    match decode_array(span) {
        Ok(values) if !clean_entries(values.clone()).is_empty() => Ok(fill_three(values, fallback)),
        Ok(_) => Err(AdapterError::MalformedResponse("empty starter list".to_string())),
        Err(e) => {
            let lines = starter_lines(&cleaned);
            if lines.len() >= STARTER_COUNT {
                Ok(fill_three(lines, fallback))
            } else {
                Err(e)
            }
        }
    }
}

fn starter_lines(cleaned: &str) -> Vec<String> {
    cleaned
        .lines()
        .map(|line| {
            let line = LINE_PREFIX.replace(line.trim(), "");
            LINE_SUFFIX.replace(&line, "").trim().to_string()
        })
        .filter(|line| line.chars().count() > MIN_LINE_LENGTH)
        .collect()
}

pub fn insights(
    text: &str,
    fallback: &[String; INSIGHT_COUNT],
) -> Result<[String; INSIGHT_COUNT], AdapterError> {
    let values = parse_array(text)?;
    if clean_entries(values.clone()).is_empty() {
        return Err(AdapterError::MalformedResponse("empty insight list".to_string()));
    }
    Ok(fill_three(values, fallback))
}

pub fn plain_summary(text: &str) -> Result<String, AdapterError> {
    non_blank(Some(strip_fences(text)))
        .ok_or_else(|| AdapterError::MalformedResponse("empty summary".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fallback_result() -> CompatibilityResult {
        CompatibilityResult {
            score: 78,
            shared_interests: vec!["AI".to_string()],
            complementary_skills: vec!["Python".to_string()],
            goal_alignment: 0.8,
            explanation: "fallback explanation".to_string(),
            conversation_starters: [
                "fallback one".to_string(),
                "fallback two".to_string(),
                "fallback three".to_string(),
            ],
        }
    }

    #[test]
    fn test_compatibility_from_fenced_reply() {
        let reply = r#"Here you go:
```json
{
  "compatibility_score": 91.6,
  "shared_interests": ["AI", "Climate"],
  "complementary_skills": ["Go"],
  "goal_alignment": 1.4,
  "explanation": "Strong overlap.",
  "conversation_starters": ["Ask about AI", "  ", "Talk climate"]
}
```"#;
        let result = compatibility(reply, &fallback_result()).unwrap();
        assert_eq!(result.score, 92);
        assert_eq!(result.shared_interests, vec!["AI", "Climate"]);
        assert_eq!(result.goal_alignment, 1.0);
        assert_eq!(result.explanation, "Strong overlap.");
        assert_eq!(
            result.conversation_starters,
            [
                "Ask about AI".to_string(),
                "Talk climate".to_string(),
                "fallback three".to_string(),
            ]
        );
    }

    #[test]
    fn test_compatibility_missing_fields_use_fallback() {
        let result = compatibility(r#"{"compatibility_score": 40}"#, &fallback_result()).unwrap();
        assert_eq!(result.score, 40);
        assert_eq!(result.shared_interests, vec!["AI"]);
        assert_eq!(result.goal_alignment, 0.8);
        assert_eq!(result.conversation_starters, fallback_result().conversation_starters);
    }

    #[test]
    fn test_compatibility_rejects_malformed_replies() {
        let replies = vec![
            "I cannot help with that.",
            "{ not json }",
            r#"{"compatibility_score": "high"}"#,
        ];
        for reply in replies {
            assert!(
                matches!(
                    compatibility(reply, &fallback_result()),
                    Err(AdapterError::MalformedResponse(_))
                ),
                "Expected failure for '{}'",
                reply
            );
        }
    }

    #[test]
    fn test_starters_line_fallback() {
        let fallback = fallback_result().conversation_starters;
        let reply = "[\n\
                     1. \"What got you into climate tech recently?\",\n\
                     2. \"How does your team approach hiring engineers?\",\n\
                     - Which AI tools do you rely on every day?\n\
                     ]";
        let result = starters(reply, &fallback).unwrap();
        assert_eq!(result[0], "What got you into climate tech recently?");
        assert_eq!(result[1], "How does your team approach hiring engineers?");
        assert_eq!(result[2], "Which AI tools do you rely on every day?");

        assert!(starters("[nothing useful]", &fallback).is_err());
    }

    #[test]
    fn test_starters_reject_prose_without_array() {
        let fallback = fallback_result().conversation_starters;
        let reply = "I'm sorry, I cannot generate that content.\n\
                     Please provide more profile details.\n\
                     Thank you for your understanding here.";
        assert!(matches!(
            starters(reply, &fallback),
            Err(AdapterError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_starters_array_with_non_strings() {
        let fallback = fallback_result().conversation_starters;
        let result = starters(r#"["First opener here", 42]"#, &fallback).unwrap();
        assert_eq!(result[0], "First opener here");
        assert_eq!(result[1], "42");
        assert_eq!(result[2], "fallback three");
    }

    #[test]
    fn test_enhanced_summary_normalization() {
        let fallback = ProfileSummary {
            summary: "fb summary".to_string(),
            key_strengths: vec!["fb".to_string()],
            networking_value: "fb value".to_string(),
            suggested_connections: vec!["c1".to_string(), "c2".to_string(), "c3".to_string()],
        };
        let reply = r#"{"summary": "Seasoned builder.", "key_strengths": [], "suggested_connections": ["Investors"]}"#;
        let result = enhanced_summary(reply, &fallback).unwrap();
        assert_eq!(result.summary, "Seasoned builder.");
        assert_eq!(result.key_strengths, vec!["fb"]);
        assert_eq!(result.networking_value, "fb value");
        assert_eq!(result.suggested_connections, vec!["Investors", "c2", "c3"]);
    }

    #[test]
    fn test_insights_require_array() {
        let fallback = [
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
        ];
        assert!(insights("{}", &fallback).is_err());
        assert!(insights("[]", &fallback).is_err());
        let result = insights(r#"["Go to meetups", "Write posts", "Mentor", "Extra"]"#, &fallback).unwrap();
        assert_eq!(result[2], "Mentor");
    }

    #[test]
    fn test_plain_summary() {
        assert_eq!(plain_summary("  A builder.\n").unwrap(), "A builder.");
        assert!(plain_summary("   ").is_err());
    }
}
