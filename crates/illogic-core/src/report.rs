// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Evaluation Reports
// ─────────────────────────────────────────────────────────────────────

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use illogic_types::{ExampleText, IllogicError, IllogicResult, Metrics, SampleDetail};

/// Per-group metrics plus the aggregate over all groups.
///
/// Groups keep first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedMetrics {
    pub groups: Vec<(String, Metrics)>,
    pub overall: Metrics,
}

impl GroupedMetrics {
    pub fn get(&self, key: &str) -> Option<&Metrics> {
        self.groups.iter().find(|(k, _)| k == key).map(|(_, m)| m)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

struct OrderedGroups<'a>(&'a [(String, Metrics)]);

impl Serialize for OrderedGroups<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, metrics) in self.0 {
            map.serialize_entry(key, metrics)?;
        }
        map.end()
    }
}

impl Serialize for GroupedMetrics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("GroupedMetrics", 2)?;
        state.serialize_field("groups", &OrderedGroups(&self.groups))?;
        state.serialize_field("overall", &self.overall)?;
        state.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// F1 clears the readiness bar.
    Ready,
    /// Needs calibration before out-of-domain use.
    Caution,
}

impl Verdict {
    pub fn from_f1(f1: f64, ready_f1: f64) -> Self {
        if f1 > ready_f1 {
            Verdict::Ready
        } else {
            Verdict::Caution
        }
    }
}

/// Capped illustrations of each error-relevant outcome.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OutcomeExamples {
    pub true_positives: Vec<ExampleText>,
    pub false_positives: Vec<ExampleText>,
    pub false_negatives: Vec<ExampleText>,
}

/// Full result of `Evaluator::run`.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    pub metrics: GroupedMetrics,
    /// Samples dropped by the minimum-length filter.
    pub skipped: usize,
    pub avg_subtraction_ratio: f64,
    pub avg_confidence: f64,
    /// Wall-clock time spent inside the classifier.
    pub elapsed_ms: f64,
    pub throughput_per_sec: f64,
    pub verdict: Verdict,
    pub examples: OutcomeExamples,
    pub details: Vec<SampleDetail>,
}

impl BenchmarkReport {
    pub fn overall(&self) -> &Metrics {
        &self.metrics.overall
    }

    pub fn to_json(&self) -> IllogicResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| IllogicError::Serialization(e.to_string()))
    }
}
