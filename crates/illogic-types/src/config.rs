// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Illogic Kernel Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{IllogicError, IllogicResult};

/// Runtime configuration for the subtractive filter and its harness.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// A sample is predicted hallucinated when it has at least one finding
    /// and its subtraction ratio is strictly above this value.
    /// Default: 0.0. Some benchmark runs use 0.01.
    pub decision_threshold: f64,

    /// Samples whose trimmed text is shorter than this (in characters)
    /// are skipped by the harness.
    /// Default: 5.
    pub min_text_len: usize,

    /// Maximum example texts kept per outcome bucket (TP, FP, FN).
    /// Default: 10.
    pub example_limit: usize,

    /// Example and detail previews are cut to this many characters.
    /// Default: 120.
    pub example_preview_chars: usize,

    /// F1 strictly above this yields a `Ready` verdict.
    /// Default: 0.6.
    pub ready_f1: f64,

    /// Extra fault kinds registered alongside the built-in catalog.
    pub custom_kinds: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            decision_threshold: 0.0,
            min_text_len: 5,
            example_limit: 10,
            example_preview_chars: 120,
            ready_f1: 0.6,
            custom_kinds: Vec::new(),
        }
    }
}

impl FilterConfig {
    /// Default configuration with a different decision threshold.
    pub fn with_threshold(decision_threshold: f64) -> Self {
        Self {
            decision_threshold,
            ..Self::default()
        }
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> IllogicResult<()> {
        if !(0.0..=1.0).contains(&self.decision_threshold) {
            return Err(IllogicError::Config(format!(
                "decision_threshold must be in [0, 1], got {}",
                self.decision_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.ready_f1) {
            return Err(IllogicError::Config(format!(
                "ready_f1 must be in [0, 1], got {}",
                self.ready_f1
            )));
        }
        if self.example_preview_chars == 0 {
            return Err(IllogicError::Config(
                "example_preview_chars must be > 0".to_string(),
            ));
        }
        if let Some(pos) = self.custom_kinds.iter().position(|k| k.trim().is_empty()) {
            return Err(IllogicError::Config(format!(
                "custom_kinds[{pos}] must not be empty"
            )));
        }
        Ok(())
    }

    /// Load from JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> IllogicResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| IllogicError::Config(format!("JSON parse error: {e}")))
    }
}
