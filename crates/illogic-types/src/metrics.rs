// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Illogic Kernel Confusion Counts & Metrics
// ─────────────────────────────────────────────────────────────────────

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Floor for the F1 denominator.
pub const F1_EPSILON: f64 = 1e-9;

/// Clamp a value to [lo, hi], mapping NaN to lo and Inf to nearest bound.
#[inline]
pub fn clamp_score(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() {
        log::warn!("clamp_score: NaN detected, clamping to {lo:.4}");
        return lo;
    }
    if value.is_infinite() {
        let boundary = if value > 0.0 { hi } else { lo };
        log::warn!("clamp_score: Inf detected, clamping to {boundary:.4}");
        return boundary;
    }
    value.clamp(lo, hi)
}

/// One cell of the 2×2 confusion matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "TP")]
    TruePositive,
    #[serde(rename = "FP")]
    FalsePositive,
    #[serde(rename = "TN")]
    TrueNegative,
    #[serde(rename = "FN")]
    FalseNegative,
}

impl Outcome {
    pub fn of(predicted: bool, actual: bool) -> Self {
        match (predicted, actual) {
            (true, true) => Outcome::TruePositive,
            (true, false) => Outcome::FalsePositive,
            (false, false) => Outcome::TrueNegative,
            (false, true) => Outcome::FalseNegative,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Outcome::TruePositive => "TP",
            Outcome::FalsePositive => "FP",
            Outcome::TrueNegative => "TN",
            Outcome::FalseNegative => "FN",
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Outcome::TruePositive | Outcome::TrueNegative)
    }
}

/// Four-way tally of predicted vs. ground-truth labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionCounts {
    pub tp: u64,
    pub fp: u64,
    pub tn: u64,
    #[serde(rename = "fn")]
    pub fn_: u64,
}

impl ConfusionCounts {
    pub fn new(tp: u64, fp: u64, tn: u64, fn_: u64) -> Self {
        Self { tp, fp, tn, fn_ }
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::TruePositive => self.tp += 1,
            Outcome::FalsePositive => self.fp += 1,
            Outcome::TrueNegative => self.tn += 1,
            Outcome::FalseNegative => self.fn_ += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.tp + self.fp + self.tn + self.fn_
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn metrics(&self) -> Metrics {
        Metrics::from_counts(*self)
    }
}

impl AddAssign for ConfusionCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.tp += rhs.tp;
        self.fp += rhs.fp;
        self.tn += rhs.tn;
        self.fn_ += rhs.fn_;
    }
}

impl Add for ConfusionCounts {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl Sum for ConfusionCounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl<'a> Sum<&'a ConfusionCounts> for ConfusionCounts {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Derived classification metrics. Pure function of `ConfusionCounts`.
///
/// Every ratio guards its denominator with `max(_, 1)` (F1 with
/// `max(_, 1e-9)`), so empty classes yield 0 instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub total: u64,
    pub tp: u64,
    pub fp: u64,
    pub tn: u64,
    #[serde(rename = "fn")]
    pub fn_: u64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub accuracy: f64,
}

impl Metrics {
    pub fn from_counts(counts: ConfusionCounts) -> Self {
        let ConfusionCounts { tp, fp, tn, fn_ } = counts;
        let total = counts.total();

        let precision = tp as f64 / (tp + fp).max(1) as f64;
        let recall = tp as f64 / (tp + fn_).max(1) as f64;
        let f1 = 2.0 * precision * recall / (precision + recall).max(F1_EPSILON);
        let accuracy = (tp + tn) as f64 / total.max(1) as f64;

        Self {
            total,
            tp,
            fp,
            tn,
            fn_,
            precision,
            recall,
            f1,
            accuracy,
        }
    }

    pub fn counts(&self) -> ConfusionCounts {
        ConfusionCounts::new(self.tp, self.fp, self.tn, self.fn_)
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::from_counts(ConfusionCounts::default())
    }
}
