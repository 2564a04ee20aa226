// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Subtractive Filter (Illogic Classifier)
// ─────────────────────────────────────────────────────────────────────
//! Pattern-matching classifier that flags structural faults.
//!
//! Rules run independently and in a fixed order; one call may emit
//! several findings of different kinds:
//!
//! 1. paired contradiction markers (substring match)
//! 2. epistemic-boundary phrases
//! 3. repeated sentence openings (circular reference)
//! 4. direct sentence negation
//! 5. conclusion marker without premises (non-sequitur)
//! 6. self-referencing keys and negated boolean twins (mappings)
//! 7. three consecutive equal elements (sequences)
//!
//! Rules 1–5 and any custom rules see only `Input::Text`. `apply` never
//! fails: empty or unrecognised input yields zero findings.

use std::collections::HashSet;

use parking_lot::Mutex;
use serde_json::Value;

use illogic_types::input::render_value;
use illogic_types::{
    ClassificationResult, FaultKind, FilterConfig, Finding, IllogicError, IllogicResult, Input,
};

use crate::classifier::{Classifier, CustomRule};
use crate::markers::{
    CONCLUSION_MARKERS, CONTRADICTION_MARKERS, EPISTEMIC_MARKERS, NEGATED_KEY_PREFIX,
    NEGATION_PREFIX, REGRESS_WINDOW, SIGNATURE_WORDS,
};

/// The illogic classifier.
///
/// Thread-safe: the history log is guarded by a `parking_lot::Mutex`.
/// The kind registry and custom rules are fixed after construction.
/// History grows without bound until `reset()`.
pub struct SubtractiveFilter {
    kinds: Vec<FaultKind>,
    rules: Vec<CustomRule>,
    history: Mutex<Vec<ClassificationResult>>,
}

impl Default for SubtractiveFilter {
    fn default() -> Self {
        Self {
            kinds: FaultKind::BUILTIN.to_vec(),
            rules: Vec::new(),
            history: Mutex::new(Vec::new()),
        }
    }
}

impl SubtractiveFilter {
    /// Filter with only the built-in kinds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter with extra fault kinds registered.
    ///
    /// Fails on blank names and on names that repeat a built-in or an
    /// earlier custom kind.
    pub fn with_custom_kinds<I, S>(custom: I) -> IllogicResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self::default();
        for name in custom {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(IllogicError::Validation(
                    "custom fault kind must not be empty".to_string(),
                ));
            }
            if filter.recognizes(name) {
                log::warn!("rejecting duplicate fault kind '{name}'");
                return Err(IllogicError::DuplicateKind(name.to_string()));
            }
            filter.kinds.push(FaultKind::Custom(name.to_string()));
        }
        Ok(filter)
    }

    /// Filter configured from a validated `FilterConfig`.
    pub fn from_config(config: &FilterConfig) -> IllogicResult<Self> {
        config.validate()?;
        Self::with_custom_kinds(&config.custom_kinds)
    }

    /// Attach a custom text rule. Its kind must already be registered.
    pub fn with_rule(mut self, rule: CustomRule) -> IllogicResult<Self> {
        if !self.kinds.contains(rule.kind()) {
            return Err(IllogicError::UnknownKind(rule.kind().to_string()));
        }
        self.rules.push(rule);
        Ok(self)
    }

    /// Registered kinds: built-ins first, then custom kinds in
    /// registration order.
    pub fn kinds(&self) -> &[FaultKind] {
        &self.kinds
    }

    pub fn recognizes(&self, name: &str) -> bool {
        self.kinds.iter().any(|k| k.as_str() == name)
    }

    /// Classify one input and append the result to the history log.
    pub fn apply(&self, input: impl Into<Input>) -> ClassificationResult {
        let input = input.into();
        let findings = match &input {
            Input::Text(text) => {
                let mut found = detect_text(text);
                for rule in &self.rules {
                    found.extend(
                        rule.detect(text)
                            .into_iter()
                            .map(|detail| Finding::new(rule.kind().clone(), detail)),
                    );
                }
                found
            }
            Input::Mapping(entries) => detect_mapping(entries),
            Input::Sequence(items) => detect_sequence(items),
            Input::Scalar(_) => Vec::new(),
        };

        let result = ClassificationResult::new(input, findings);
        log::debug!(
            "subtractive filter: {} finding(s) over {} element(s), ratio {:.4}",
            result.findings.len(),
            result.element_count,
            result.subtraction_ratio
        );
        self.history.lock().push(result.clone());
        result
    }

    /// Snapshot of every result since construction or the last reset.
    pub fn history(&self) -> Vec<ClassificationResult> {
        self.history.lock().clone()
    }

    pub fn history_len(&self) -> usize {
        self.history.lock().len()
    }

    /// Clear the history log.
    pub fn reset(&self) {
        self.history.lock().clear();
    }
}

impl Classifier for SubtractiveFilter {
    fn classify(&self, text: &str) -> ClassificationResult {
        self.apply(text)
    }
}

/// Split on `.`, trim, drop empties.
fn split_sentences(text: &str) -> Vec<&str> {
    text.split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// First few whitespace-delimited words, lower-cased, single-spaced.
fn signature(sentence: &str) -> String {
    sentence
        .split_whitespace()
        .take(SIGNATURE_WORDS)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn is_negation_of(a: &str, b: &str) -> bool {
    a.strip_prefix(NEGATION_PREFIX) == Some(b)
}

/// Rules 1–5.
fn detect_text(text: &str) -> Vec<Finding> {
    let mut found = Vec::new();
    let lower = text.to_lowercase();

    for (pos, neg) in CONTRADICTION_MARKERS {
        if lower.contains(pos) && lower.contains(neg) {
            found.push(Finding::new(
                FaultKind::Contradiction,
                format!("'{pos}' and '{neg}' coexist"),
            ));
        }
    }

    for marker in EPISTEMIC_MARKERS {
        if lower.contains(marker) {
            found.push(Finding::new(
                FaultKind::CategoryError,
                format!("epistemic boundary violation ('{marker}')"),
            ));
        }
    }

    let sentences = split_sentences(text);

    // Second and later occurrences of a signature fire, never the first.
    let mut seen: HashSet<String> = HashSet::with_capacity(sentences.len());
    for sentence in &sentences {
        let key = signature(sentence);
        if seen.contains(&key) {
            found.push(Finding::new(
                FaultKind::CircularReference,
                format!("repeated pattern '{key}'"),
            ));
        } else {
            seen.insert(key);
        }
    }

    let lowered: Vec<String> = sentences.iter().map(|s| s.to_lowercase()).collect();
    for (i, s1) in lowered.iter().enumerate() {
        for s2 in &lowered[i + 1..] {
            if is_negation_of(s1, s2) || is_negation_of(s2, s1) {
                found.push(Finding::new(
                    FaultKind::Contradiction,
                    "direct sentence negation detected",
                ));
            }
        }
    }

    if sentences.len() < 2 && CONCLUSION_MARKERS.iter().any(|m| lower.contains(m)) {
        found.push(Finding::new(
            FaultKind::NonSequitur,
            "conclusion without premises",
        ));
    }

    found
}

/// Rule 6.
fn detect_mapping(entries: &[(String, Value)]) -> Vec<Finding> {
    let mut found = Vec::new();

    for (key, value) in entries {
        if let Value::String(s) = value {
            if s.to_lowercase().contains(&key.to_lowercase()) {
                found.push(Finding::new(
                    FaultKind::CircularReference,
                    format!("key '{key}' references itself"),
                ));
            }
        }
    }

    for (i, (k1, v1)) in entries.iter().enumerate() {
        let Value::Bool(b1) = v1 else { continue };
        for (k2, v2) in &entries[i + 1..] {
            let Value::Bool(b2) = v2 else { continue };
            let twins = k1.strip_prefix(NEGATED_KEY_PREFIX) == Some(k2.as_str())
                || k2.strip_prefix(NEGATED_KEY_PREFIX) == Some(k1.as_str());
            if twins && b1 != b2 {
                found.push(Finding::new(
                    FaultKind::Contradiction,
                    format!("'{k1}={b1}' vs '{k2}={b2}'"),
                ));
            }
        }
    }

    found
}

/// Element equality for rule 7. Numbers compare by value, so `1` and
/// `1.0` are the same element.
fn same_element(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        _ => a == b,
    }
}

/// Rule 7. Overlapping windows are checked independently.
fn detect_sequence(items: &[Value]) -> Vec<Finding> {
    items
        .windows(REGRESS_WINDOW)
        .filter(|w| w.iter().all(|v| same_element(v, &w[0])))
        .map(|w| {
            Finding::new(
                FaultKind::InfiniteRegress,
                format!("repeated element '{}'", render_value(&w[0])),
            )
        })
        .collect()
}
