// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Illogic Kernel Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Data model, configuration, and error hierarchy for the Illogic
//! Kernel: the lexical illogic filter and its evaluation harness.

pub mod classification;
pub mod config;
pub mod error;
pub mod finding;
pub mod input;
pub mod metrics;
pub mod sample;

pub use classification::{ClassificationResult, FilterReport};
pub use config::FilterConfig;
pub use error::{IllogicError, IllogicResult};
pub use finding::{FaultKind, Finding};
pub use input::Input;
pub use metrics::{ConfusionCounts, Metrics, Outcome};
pub use sample::{ExampleText, Sample, SampleDetail};
