//! Rejection reasons for semantic validation
//!
//! Reason codes:
//! - TILESEM_TYPE_MISMATCH
//! - TILESEM_PRECISION_MISMATCH
//!
//! Neither is fatal. The caller decides whether a rejection aborts class loading.

use serde::Serialize;
use std::fmt;

use super::types::Semantic;

/// Why a declared property does not fit its semantic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RejectionReason {
    /// Element type or component count differs from the semantic's value type
    TypeMismatch,
    /// Float width is not one the semantic allows
    PrecisionMismatch,
}

impl RejectionReason {
    /// Returns the stable reason code
    pub fn code(&self) -> &'static str {
        match self {
            RejectionReason::TypeMismatch => "TILESEM_TYPE_MISMATCH",
            RejectionReason::PrecisionMismatch => "TILESEM_PRECISION_MISMATCH",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A rejected (semantic, declared property) pair with its diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    reason: RejectionReason,
    semantic: Semantic,
    /// What the semantic requires
    expected: String,
    /// What the property declares
    actual: String,
}

impl Rejection {
    pub fn type_mismatch(
        semantic: Semantic,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            reason: RejectionReason::TypeMismatch,
            semantic,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn precision_mismatch(
        semantic: Semantic,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            reason: RejectionReason::PrecisionMismatch,
            semantic,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn reason(&self) -> RejectionReason {
        self.reason
    }

    pub fn semantic(&self) -> Semantic {
        self.semantic
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    pub fn actual(&self) -> &str {
        &self.actual
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: semantic {} expects {}, got {}",
            self.reason.code(),
            self.semantic,
            self.expected,
            self.actual
        )
    }
}

impl std::error::Error for Rejection {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_codes_are_stable() {
        assert_eq!(RejectionReason::TypeMismatch.code(), "TILESEM_TYPE_MISMATCH");
        assert_eq!(
            RejectionReason::PrecisionMismatch.code(),
            "TILESEM_PRECISION_MISMATCH"
        );
    }

    #[test]
    fn test_rejection_display_names_both_sides() {
        let rejection =
            Rejection::precision_mismatch(Semantic::TileBoundingRegion, "FLOAT64", "FLOAT32");
        let display = format!("{}", rejection);
        assert!(display.starts_with("TILESEM_PRECISION_MISMATCH"));
        assert!(display.contains("TILE_BOUNDING_REGION"));
        assert!(display.contains("FLOAT64"));
        assert!(display.contains("FLOAT32"));
    }

    #[test]
    fn test_rejection_serializes_reason() {
        let rejection = Rejection::type_mismatch(Semantic::Name, "STRING", "UINT8");
        let value = serde_json::to_value(&rejection).unwrap();
        assert_eq!(value["reason"], "TypeMismatch");
        assert_eq!(value["semantic"], "NAME");
        assert_eq!(value["expected"], "STRING");
    }
}
