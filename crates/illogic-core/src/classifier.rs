// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Classifier Interface & Custom Rules
// ─────────────────────────────────────────────────────────────────────
//! Seams between the harness and whatever produces findings.
//!
//! `SubtractiveFilter` is the built-in implementation of `Classifier`.
//! `ExternalClassifier` wraps a closure so a caller (or a test) can plug
//! in any scoring function without touching the harness.

use illogic_types::{ClassificationResult, FaultKind};

/// Anything that turns text into a `ClassificationResult`.
pub trait Classifier: Send + Sync {
    fn classify(&self, text: &str) -> ClassificationResult;
}

type ClassifyFn = Box<dyn Fn(&str) -> ClassificationResult + Send + Sync>;

/// Classifier that delegates to a function pointer.
pub struct ExternalClassifier {
    classify_fn: ClassifyFn,
}

impl ExternalClassifier {
    pub fn new(
        classify_fn: impl Fn(&str) -> ClassificationResult + Send + Sync + 'static,
    ) -> Self {
        Self {
            classify_fn: Box::new(classify_fn),
        }
    }
}

impl Classifier for ExternalClassifier {
    fn classify(&self, text: &str) -> ClassificationResult {
        (self.classify_fn)(text)
    }
}

type DetectFn = Box<dyn Fn(&str) -> Vec<String> + Send + Sync>;

/// Extra text rule bound to a custom fault kind.
///
/// Runs after the built-in text rules; every returned string becomes
/// one finding of `kind`.
pub struct CustomRule {
    kind: FaultKind,
    detect_fn: DetectFn,
}

impl CustomRule {
    pub fn new(
        kind: impl Into<FaultKind>,
        detect_fn: impl Fn(&str) -> Vec<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind: kind.into(),
            detect_fn: Box::new(detect_fn),
        }
    }

    pub fn kind(&self) -> &FaultKind {
        &self.kind
    }

    pub fn detect(&self, text: &str) -> Vec<String> {
        (self.detect_fn)(text)
    }
}
