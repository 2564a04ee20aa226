// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Illogic Kernel Fault Kinds & Findings
// ─────────────────────────────────────────────────────────────────────

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a structural fault.
///
/// The five built-in kinds are fixed. `Custom` carries a kind registered
/// at filter construction; it never shadows a built-in name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FaultKind {
    Contradiction,
    CircularReference,
    NonSequitur,
    CategoryError,
    InfiniteRegress,
    Custom(String),
}

impl FaultKind {
    /// Built-in kinds in catalog order.
    pub const BUILTIN: [FaultKind; 5] = [
        FaultKind::Contradiction,
        FaultKind::CircularReference,
        FaultKind::NonSequitur,
        FaultKind::CategoryError,
        FaultKind::InfiniteRegress,
    ];

    /// Look up a built-in kind by its snake_case name.
    pub fn builtin(name: &str) -> Option<FaultKind> {
        match name {
            "contradiction" => Some(FaultKind::Contradiction),
            "circular_reference" => Some(FaultKind::CircularReference),
            "non_sequitur" => Some(FaultKind::NonSequitur),
            "category_error" => Some(FaultKind::CategoryError),
            "infinite_regress" => Some(FaultKind::InfiniteRegress),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FaultKind::Contradiction => "contradiction",
            FaultKind::CircularReference => "circular_reference",
            FaultKind::NonSequitur => "non_sequitur",
            FaultKind::CategoryError => "category_error",
            FaultKind::InfiniteRegress => "infinite_regress",
            FaultKind::Custom(name) => name,
        }
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self, FaultKind::Custom(_))
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for FaultKind {
    fn from(name: String) -> Self {
        FaultKind::builtin(&name).unwrap_or(FaultKind::Custom(name))
    }
}

impl From<&str> for FaultKind {
    fn from(name: &str) -> Self {
        FaultKind::builtin(name).unwrap_or_else(|| FaultKind::Custom(name.to_string()))
    }
}

impl From<FaultKind> for String {
    fn from(kind: FaultKind) -> Self {
        match kind {
            FaultKind::Custom(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

/// A single flagged fault: its kind and a human-readable annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FaultKind,
    pub detail: String,
}

impl Finding {
    pub fn new(kind: FaultKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

/// Flattened form: `"<kind>: <detail>"`.
impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        for kind in FaultKind::BUILTIN {
            assert_eq!(FaultKind::builtin(kind.as_str()), Some(kind.clone()));
            assert!(kind.is_builtin());
        }
        assert_eq!(FaultKind::builtin("straw_man"), None);
    }

    #[test]
    fn test_unknown_name_becomes_custom() {
        let kind = FaultKind::from("straw_man");
        assert_eq!(kind, FaultKind::Custom("straw_man".into()));
        assert!(!kind.is_builtin());
        assert_eq!(kind.to_string(), "straw_man");
    }

    #[test]
    fn test_known_name_never_custom() {
        assert_eq!(
            FaultKind::from("non_sequitur".to_string()),
            FaultKind::NonSequitur
        );
    }

    #[test]
    fn test_finding_display_flattens() {
        let f = Finding::new(FaultKind::Contradiction, "'always' and 'never' coexist");
        assert_eq!(f.to_string(), "contradiction: 'always' and 'never' coexist");
    }

    #[test]
    fn test_kind_serializes_as_name() {
        let json = serde_json::to_string(&FaultKind::CircularReference).unwrap();
        assert_eq!(json, "\"circular_reference\"");
        let back: FaultKind = serde_json::from_str("\"ad_hominem\"").unwrap();
        assert_eq!(back, FaultKind::Custom("ad_hominem".into()));
    }
}
