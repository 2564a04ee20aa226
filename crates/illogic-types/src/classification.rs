// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Illogic Kernel Classification Result
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::finding::{FaultKind, Finding};
use crate::input::Input;
use crate::metrics::clamp_score;

/// Outcome of one `apply` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// The value that was classified.
    pub input: Input,
    /// Findings in rule order, then input scan order within a rule.
    pub findings: Vec<Finding>,
    /// Ratio denominator, always >= 1.
    pub element_count: usize,
    /// `findings.len() / element_count`.
    pub subtraction_ratio: f64,
    /// `min(1.0, 0.5 + 0.5 * subtraction_ratio)`, always in [0.5, 1.0].
    pub confidence: f64,
}

impl ClassificationResult {
    pub fn new(input: Input, findings: Vec<Finding>) -> Self {
        let element_count = input.element_count();
        let subtraction_ratio = findings.len() as f64 / element_count as f64;
        let confidence = clamp_score(0.5 + 0.5 * subtraction_ratio, 0.5, 1.0);
        Self {
            input,
            findings,
            element_count,
            subtraction_ratio,
            confidence,
        }
    }

    /// Findings flattened to `"<kind>: <detail>"`.
    pub fn illogics_found(&self) -> Vec<String> {
        self.findings.iter().map(ToString::to_string).collect()
    }

    pub fn illogics_removed(&self) -> usize {
        self.findings.len()
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn count_kind(&self, kind: &FaultKind) -> usize {
        self.findings.iter().filter(|f| &f.kind == kind).count()
    }

    pub fn has_kind(&self, kind: &FaultKind) -> bool {
        self.findings.iter().any(|f| &f.kind == kind)
    }

    /// Decision rule: at least one finding and ratio strictly above
    /// `threshold`.
    pub fn predicts_hallucination(&self, threshold: f64) -> bool {
        !self.findings.is_empty() && self.subtraction_ratio > threshold
    }

    pub fn report(&self) -> FilterReport {
        FilterReport {
            illogics_found: self.illogics_found(),
            illogics_removed: self.illogics_removed(),
            subtraction_ratio: self.subtraction_ratio,
            confidence: self.confidence,
        }
    }
}

/// Flat wire form of a classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterReport {
    pub illogics_found: Vec<String>,
    pub illogics_removed: usize,
    pub subtraction_ratio: f64,
    pub confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contradiction() -> Finding {
        Finding::new(FaultKind::Contradiction, "'always' and 'never' coexist")
    }

    #[test]
    fn test_empty_findings() {
        let r = ClassificationResult::new(Input::from("all good here"), Vec::new());
        assert_eq!(r.subtraction_ratio, 0.0);
        assert_eq!(r.confidence, 0.5);
        assert!(r.is_clean());
        assert!(!r.predicts_hallucination(0.0));
    }

    #[test]
    fn test_ratio_and_confidence() {
        let r = ClassificationResult::new(
            Input::from("always and never"),
            vec![contradiction()],
        );
        assert_eq!(r.element_count, 3);
        assert!((r.subtraction_ratio - 1.0 / 3.0).abs() < 1e-12);
        assert!((r.confidence - (0.5 + 0.5 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_confidence_caps_at_one() {
        let r = ClassificationResult::new(
            Input::from("x"),
            vec![contradiction(), contradiction(), contradiction()],
        );
        assert_eq!(r.subtraction_ratio, 3.0);
        assert_eq!(r.confidence, 1.0);
    }

    #[test]
    fn test_decision_threshold_is_strict() {
        // 1 finding over 100 words -> ratio exactly 0.01
        let text = vec!["w"; 100].join(" ");
        let r = ClassificationResult::new(Input::from(text), vec![contradiction()]);
        assert!(r.predicts_hallucination(0.0));
        assert!(!r.predicts_hallucination(0.01));
    }

    #[test]
    fn test_report_shape() {
        let r = ClassificationResult::new(Input::from("a b"), vec![contradiction()]);
        let json = serde_json::to_value(r.report()).unwrap();
        assert_eq!(
            json["illogics_found"][0],
            "contradiction: 'always' and 'never' coexist"
        );
        assert_eq!(json["illogics_removed"], 1);
        assert_eq!(json["subtraction_ratio"], 0.5);
        assert_eq!(json["confidence"], 0.75);
    }

    #[test]
    fn test_count_kind() {
        let r = ClassificationResult::new(
            Input::from("a b c d"),
            vec![
                contradiction(),
                Finding::new(FaultKind::NonSequitur, "conclusion without premises"),
                contradiction(),
            ],
        );
        assert_eq!(r.count_kind(&FaultKind::Contradiction), 2);
        assert!(r.has_kind(&FaultKind::NonSequitur));
        assert!(!r.has_kind(&FaultKind::InfiniteRegress));
    }
}
