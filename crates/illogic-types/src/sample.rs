// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Illogic Kernel Labeled Samples
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::metrics::Outcome;

/// A labeled benchmark sample. Produced by dataset loaders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub text: String,
    pub has_hallucination: bool,
    /// Stratification label (dataset source, fault category).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_key: Option<String>,
}

impl Sample {
    pub fn new(text: impl Into<String>, has_hallucination: bool) -> Self {
        Self {
            id: None,
            text: text.into(),
            has_hallucination,
            group_key: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_group(mut self, group_key: impl Into<String>) -> Self {
        self.group_key = Some(group_key.into());
        self
    }
}

/// Per-sample trace line of a benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleDetail {
    pub id: Option<String>,
    pub text_preview: String,
    pub group: String,
    pub actual: bool,
    pub predicted: bool,
    pub outcome: Outcome,
    pub illogics_found: usize,
    pub subtraction_ratio: f64,
    pub confidence: f64,
}

/// Text excerpt kept as an illustration of an outcome bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleText {
    pub text: String,
    pub group: String,
}

/// First `max_chars` characters of `text`, char-boundary safe.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let s = Sample::new("The sky is blue.", false)
            .with_id("TQA-T-0")
            .with_group("TruthfulQA");
        assert_eq!(s.id.as_deref(), Some("TQA-T-0"));
        assert_eq!(s.group_key.as_deref(), Some("TruthfulQA"));
        assert!(!s.has_hallucination);
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let s: Sample =
            serde_json::from_str(r#"{"text": "abc", "has_hallucination": true}"#).unwrap();
        assert_eq!(s, Sample::new("abc", true));
    }

    #[test]
    fn test_preview_multibyte() {
        assert_eq!(preview("héllo wörld", 4), "héll");
        assert_eq!(preview("short", 120), "short");
        assert_eq!(preview("", 3), "");
    }
}
