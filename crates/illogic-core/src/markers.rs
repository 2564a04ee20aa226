// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Illogic Kernel Marker Tables
// ─────────────────────────────────────────────────────────────────────
//! Fixed lexical tables consulted by the text rules.
//!
//! All entries are lower-case and matched as raw substrings of the
//! lower-cased input, not as whole words: "nevertheless" contains
//! "never", "fall" contains "all". That imprecision is part of the
//! detector's contract and is covered by tests.

/// Antonym / negation pairs. Both members present means contradiction.
pub const CONTRADICTION_MARKERS: [(&str, &str); 14] = [
    ("always", "never"),
    ("all", "none"),
    ("true", "false"),
    ("yes", "no"),
    ("increase", "decrease"),
    ("better", "worse"),
    ("before", "after"),
    ("safe", "dangerous"),
    ("proven", "unproven"),
    ("cause", "does not cause"),
    ("everyone", "no one"),
    ("everywhere", "nowhere"),
    ("everything", "nothing"),
    ("must", "cannot"),
];

/// Hedging phrases that step outside the speaker's epistemic boundary.
pub const EPISTEMIC_MARKERS: [&str; 4] = [
    "as an ai",
    "i don't have personal",
    "i cannot confirm",
    "it is impossible to know",
];

/// Conclusion connectives that need at least two sentences of premise.
pub const CONCLUSION_MARKERS: [&str; 2] = ["therefore", "thus"];

/// Prefix that turns a sentence into its direct negation.
pub const NEGATION_PREFIX: &str = "not ";

/// Prefix that turns a boolean key into its negated twin.
pub const NEGATED_KEY_PREFIX: &str = "not_";

/// Number of leading words forming a sentence signature.
pub const SIGNATURE_WORDS: usize = 3;

/// Consecutive equal elements that constitute a regress.
pub const REGRESS_WINDOW: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_lowercase() {
        for (pos, neg) in CONTRADICTION_MARKERS {
            assert_eq!(pos, pos.to_lowercase());
            assert_eq!(neg, neg.to_lowercase());
        }
        for marker in EPISTEMIC_MARKERS.iter().chain(CONCLUSION_MARKERS.iter()) {
            assert_eq!(*marker, marker.to_lowercase());
        }
    }
}
