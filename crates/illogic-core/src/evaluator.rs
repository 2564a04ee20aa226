// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Evaluation Harness
// ─────────────────────────────────────────────────────────────────────
//! Runs a classifier over labeled samples and reduces the outcomes to a
//! confusion matrix and derived metrics.
//!
//! Per sample: skip if the trimmed text is shorter than
//! `min_text_len` characters, otherwise predict
//! `findings > 0 && subtraction_ratio > decision_threshold` and tally the
//! outcome against the label. Skipped samples count nowhere.
//!
//! Tallies are plain sums, so partitioned runs add up to the ungrouped
//! run over the same samples.

use std::collections::HashMap;
use std::time::Instant;

use illogic_types::sample::preview;
use illogic_types::{
    ClassificationResult, ConfusionCounts, ExampleText, FilterConfig, IllogicResult, Metrics,
    Outcome, Sample, SampleDetail,
};

use crate::classifier::Classifier;
use crate::report::{BenchmarkReport, GroupedMetrics, OutcomeExamples, Verdict};

/// Group label for samples without a `group_key`.
pub const UNGROUPED: &str = "ungrouped";

/// Evaluate with the default configuration and an explicit threshold.
pub fn evaluate(samples: &[Sample], classifier: &dyn Classifier, threshold: f64) -> Metrics {
    Evaluator::unchecked(FilterConfig::with_threshold(threshold)).evaluate(samples, classifier)
}

/// Confusion-matrix harness.
pub struct Evaluator {
    config: FilterConfig,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::unchecked(FilterConfig::default())
    }
}

impl Evaluator {
    pub fn new(config: FilterConfig) -> IllogicResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn with_threshold(threshold: f64) -> IllogicResult<Self> {
        Self::new(FilterConfig::with_threshold(threshold))
    }

    fn unchecked(config: FilterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Whether a sample passes the minimum-length filter.
    pub fn is_evaluable(&self, sample: &Sample) -> bool {
        sample.text.trim().chars().count() >= self.config.min_text_len
    }

    /// Classify one sample. `None` when the sample is filtered out.
    pub fn judge(
        &self,
        sample: &Sample,
        classifier: &dyn Classifier,
    ) -> Option<(Outcome, ClassificationResult)> {
        if !self.is_evaluable(sample) {
            return None;
        }
        let result = classifier.classify(&sample.text);
        let predicted = result.predicts_hallucination(self.config.decision_threshold);
        Some((Outcome::of(predicted, sample.has_hallucination), result))
    }

    /// Tally outcomes over all evaluable samples.
    pub fn confusion(&self, samples: &[Sample], classifier: &dyn Classifier) -> ConfusionCounts {
        let mut counts = ConfusionCounts::default();
        for sample in samples {
            if let Some((outcome, _)) = self.judge(sample, classifier) {
                counts.record(outcome);
            }
        }
        counts
    }

    pub fn evaluate(&self, samples: &[Sample], classifier: &dyn Classifier) -> Metrics {
        let metrics = self.confusion(samples, classifier).metrics();
        log::info!(
            "evaluated {} sample(s): precision {:.4}, recall {:.4}, f1 {:.4}",
            metrics.total,
            metrics.precision,
            metrics.recall,
            metrics.f1
        );
        metrics
    }

    /// Partition samples by `group_fn` and evaluate each partition.
    ///
    /// Groups appear in first-seen order; a group whose samples were all
    /// filtered out does not appear. `overall` is the sum of all groups.
    pub fn evaluate_grouped<F>(
        &self,
        samples: &[Sample],
        classifier: &dyn Classifier,
        group_fn: F,
    ) -> GroupedMetrics
    where
        F: Fn(&Sample) -> String,
    {
        let mut tally = GroupTally::default();
        for sample in samples {
            if let Some((outcome, _)) = self.judge(sample, classifier) {
                tally.record(group_fn(sample), outcome);
            }
        }
        tally.finish()
    }

    /// Full benchmark run grouped by `Sample::group_key`.
    pub fn run(&self, samples: &[Sample], classifier: &dyn Classifier) -> BenchmarkReport {
        let mut tally = GroupTally::default();
        let mut examples = OutcomeExamples::default();
        let mut details = Vec::with_capacity(samples.len());
        let mut skipped = 0usize;
        let mut ratio_sum = 0.0;
        let mut confidence_sum = 0.0;
        let mut elapsed_s = 0.0;

        for sample in samples {
            let start = Instant::now();
            let judged = self.judge(sample, classifier);
            elapsed_s += start.elapsed().as_secs_f64();

            let Some((outcome, result)) = judged else {
                skipped += 1;
                continue;
            };

            let group = group_of(sample);
            ratio_sum += result.subtraction_ratio;
            confidence_sum += result.confidence;
            self.keep_example(&mut examples, outcome, sample, &group);

            details.push(SampleDetail {
                id: sample.id.clone(),
                text_preview: preview(&sample.text, self.config.example_preview_chars),
                group: group.clone(),
                actual: sample.has_hallucination,
                predicted: matches!(
                    outcome,
                    Outcome::TruePositive | Outcome::FalsePositive
                ),
                outcome,
                illogics_found: result.findings.len(),
                subtraction_ratio: result.subtraction_ratio,
                confidence: result.confidence,
            });
            tally.record(group, outcome);
        }

        let metrics = tally.finish();
        let evaluated = details.len();
        let (avg_subtraction_ratio, avg_confidence) = if evaluated == 0 {
            (0.0, 0.0)
        } else {
            (
                ratio_sum / evaluated as f64,
                confidence_sum / evaluated as f64,
            )
        };
        let throughput_per_sec = if elapsed_s > 0.0 {
            evaluated as f64 / elapsed_s
        } else {
            0.0
        };
        let verdict = Verdict::from_f1(metrics.overall.f1, self.config.ready_f1);

        log::info!(
            "benchmark: {evaluated} evaluated, {skipped} skipped, f1 {:.4}, {:.2} ms, verdict {verdict:?}",
            metrics.overall.f1,
            elapsed_s * 1000.0
        );

        BenchmarkReport {
            metrics,
            skipped,
            avg_subtraction_ratio,
            avg_confidence,
            elapsed_ms: elapsed_s * 1000.0,
            throughput_per_sec,
            verdict,
            examples,
            details,
        }
    }

    fn keep_example(
        &self,
        examples: &mut OutcomeExamples,
        outcome: Outcome,
        sample: &Sample,
        group: &str,
    ) {
        let bucket = match outcome {
            Outcome::TruePositive => &mut examples.true_positives,
            Outcome::FalsePositive => &mut examples.false_positives,
            Outcome::FalseNegative => &mut examples.false_negatives,
            Outcome::TrueNegative => return,
        };
        if bucket.len() < self.config.example_limit {
            bucket.push(ExampleText {
                text: preview(&sample.text, self.config.example_preview_chars),
                group: group.to_string(),
            });
        }
    }
}

fn group_of(sample: &Sample) -> String {
    sample
        .group_key
        .clone()
        .unwrap_or_else(|| UNGROUPED.to_string())
}

/// Insertion-ordered per-group confusion counts.
#[derive(Default)]
struct GroupTally {
    index: HashMap<String, usize>,
    counts: Vec<(String, ConfusionCounts)>,
}

impl GroupTally {
    fn record(&mut self, key: String, outcome: Outcome) {
        let slot = match self.index.get(&key) {
            Some(&i) => i,
            None => {
                self.index.insert(key.clone(), self.counts.len());
                self.counts.push((key, ConfusionCounts::default()));
                self.counts.len() - 1
            }
        };
        self.counts[slot].1.record(outcome);
    }

    fn finish(self) -> GroupedMetrics {
        let overall: ConfusionCounts = self.counts.iter().map(|(_, c)| *c).sum();
        GroupedMetrics {
            groups: self
                .counts
                .into_iter()
                .map(|(key, counts)| (key, counts.metrics()))
                .collect(),
            overall: overall.metrics(),
        }
    }
}
