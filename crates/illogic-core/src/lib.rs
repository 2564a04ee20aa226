// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Illogic Kernel Core Engine
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Lexical illogic detection and the harness that scores it against
//! labeled benchmark data.
//!
//! # Invariants
//!
//! 1. **Classification never fails**: any input shape, including empty
//!    text, produces a well-formed result. Unknown shapes count as one
//!    element with zero findings.
//!
//! 2. **Bounded confidence**: `confidence = min(1, 0.5 + 0.5 * ratio)`
//!    always lies in [0.5, 1.0]. It is a monotone heuristic, not a
//!    calibrated probability.
//!
//! 3. **Deterministic**: identical input yields identical findings and
//!    ratio. No randomness anywhere in the pipeline.
//!
//! 4. **Additive tallies**: confusion counts only ever grow by summation,
//!    so grouped and ungrouped runs over the same samples agree.

pub mod classifier;
pub mod evaluator;
pub mod filter;
pub mod markers;
pub mod report;

pub use classifier::{Classifier, CustomRule, ExternalClassifier};
pub use evaluator::{evaluate, Evaluator};
pub use filter::SubtractiveFilter;
pub use report::{BenchmarkReport, GroupedMetrics, OutcomeExamples, Verdict};
