//! Semantic validator for declared property definitions
//!
//! Validation steps:
//! 1. Look the name up in the catalog; unknown names are accepted unchecked
//! 2. Element type and component count must match the semantic's value type
//! 3. For float semantics, the declared width must be an allowed precision
//!
//! Validation is pure and deterministic. It performs no I/O and holds no state
//! beyond a shared reference to the immutable catalog.

use serde::Serialize;

use super::catalog::SemanticCatalog;
use super::errors::{Rejection, RejectionReason};
use super::types::{DeclaredProperty, Semantic, SemanticDefinition};

/// Result of checking one (semantic, declared property) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "rejection")]
pub enum ValidationOutcome {
    Accepted,
    Rejected(Rejection),
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted)
    }

    /// Returns the rejection, if any
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            ValidationOutcome::Accepted => None,
            ValidationOutcome::Rejected(rejection) => Some(rejection),
        }
    }

    /// Returns the rejection reason, if any
    pub fn reason(&self) -> Option<RejectionReason> {
        self.rejection().map(Rejection::reason)
    }

    /// Converts into a `Result` for callers that treat rejection as an error.
    pub fn into_result(self) -> Result<(), Rejection> {
        match self {
            ValidationOutcome::Accepted => Ok(()),
            ValidationOutcome::Rejected(rejection) => Err(rejection),
        }
    }
}

/// Checks declared properties against the semantics they claim.
pub struct SemanticValidator<'a> {
    catalog: &'a SemanticCatalog,
}

impl<'a> SemanticValidator<'a> {
    /// Creates a new validator backed by the given catalog.
    pub fn new(catalog: &'a SemanticCatalog) -> Self {
        Self { catalog }
    }

    /// Returns the catalog this validator reads from.
    pub fn catalog(&self) -> &'a SemanticCatalog {
        self.catalog
    }

    /// Validates a declared property against a semantic name.
    ///
    /// Names outside the catalog are not governed here and are accepted, so
    /// application-specific semantics pass through.
    pub fn validate(&self, semantic_name: &str, declared: &DeclaredProperty) -> ValidationOutcome {
        match self.catalog.lookup(semantic_name) {
            Some(definition) => check(definition, declared),
            None => ValidationOutcome::Accepted,
        }
    }

    /// Validates a declared property against a semantic the caller already resolved.
    pub fn validate_semantic(
        &self,
        semantic: Semantic,
        declared: &DeclaredProperty,
    ) -> ValidationOutcome {
        check(self.catalog.get(semantic), declared)
    }
}

impl Default for SemanticValidator<'static> {
    fn default() -> Self {
        Self::new(SemanticCatalog::global())
    }
}

/// Compares a declared property with one catalog entry.
fn check(definition: &SemanticDefinition, declared: &DeclaredProperty) -> ValidationOutcome {
    let value_type = definition.value_type;
    let required_count = value_type.component_count();

    if declared.element != value_type.element() || declared.component_count != Some(required_count)
    {
        return ValidationOutcome::Rejected(Rejection::type_mismatch(
            definition.semantic,
            required_shape(definition),
            declared.shape(),
        ));
    }

    if value_type.is_float() {
        let allowed = declared
            .precision
            .map_or(false, |p| definition.allows_precision(p));

        if !allowed {
            let actual = match declared.precision {
                Some(p) => p.to_string(),
                None => "no precision".to_string(),
            };
            return ValidationOutcome::Rejected(Rejection::precision_mismatch(
                definition.semantic,
                allowed_precisions(definition),
                actual,
            ));
        }
    }

    ValidationOutcome::Accepted
}

/// Shape description matching `DeclaredProperty::shape`.
fn required_shape(definition: &SemanticDefinition) -> String {
    let value_type = definition.value_type;
    match value_type.component_count() {
        1 => value_type.element().as_str().to_string(),
        n => format!("{} x{}", value_type.element(), n),
    }
}

/// Allowed precisions joined for diagnostics, e.g. `FLOAT32 or FLOAT64`.
fn allowed_precisions(definition: &SemanticDefinition) -> String {
    definition
        .allowed_precisions
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" or ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::types::{ElementType, FloatPrecision, ValueType};

    fn validator() -> SemanticValidator<'static> {
        SemanticValidator::default()
    }

    #[test]
    fn test_matching_declarations_accepted() {
        let v = validator();
        for def in v.catalog().iter() {
            let precisions: Vec<Option<FloatPrecision>> = if def.value_type.is_float() {
                def.allowed_precisions.iter().copied().map(Some).collect()
            } else {
                vec![None]
            };
            for precision in precisions {
                let declared = DeclaredProperty::of(def.value_type, precision);
                assert_eq!(
                    v.validate(def.name(), &declared),
                    ValidationOutcome::Accepted,
                    "{}",
                    def.name()
                );
            }
        }
    }

    #[test]
    fn test_region_requires_double_precision() {
        let declared = DeclaredProperty::of(ValueType::FloatArray6, Some(FloatPrecision::Bits32));
        let outcome = validator().validate("TILE_BOUNDING_REGION", &declared);
        assert_eq!(outcome.reason(), Some(RejectionReason::PrecisionMismatch));

        let rejection = outcome.rejection().unwrap();
        assert_eq!(rejection.expected(), "FLOAT64");
        assert_eq!(rejection.actual(), "FLOAT32");
    }

    #[test]
    fn test_sphere_with_six_components_is_type_mismatch() {
        let declared = DeclaredProperty::of(ValueType::FloatArray6, Some(FloatPrecision::Bits64));
        let outcome = validator().validate("TILE_BOUNDING_SPHERE", &declared);
        assert_eq!(outcome.reason(), Some(RejectionReason::TypeMismatch));

        let rejection = outcome.rejection().unwrap();
        assert_eq!(rejection.expected(), "FLOAT x4");
        assert_eq!(rejection.actual(), "FLOAT x6");
    }

    #[test]
    fn test_unknown_semantic_passes_through() {
        let v = validator();
        let declared = DeclaredProperty::variable_array(ElementType::Int8, None);
        assert!(v.validate("CUSTOM_APP_SEMANTIC", &declared).is_accepted());
        assert!(v.validate("tile_bounding_region", &declared).is_accepted());
    }

    #[test]
    fn test_type_checked_before_precision() {
        // Wrong shape and wrong width: shape is reported.
        let declared = DeclaredProperty::float(4, FloatPrecision::Bits32);
        let outcome = validator().validate("CONTENT_BOUNDING_REGION", &declared);
        assert_eq!(outcome.reason(), Some(RejectionReason::TypeMismatch));
    }

    #[test]
    fn test_integer_for_float_semantic_is_type_mismatch() {
        let declared = DeclaredProperty::new(ElementType::Int32, 1, None);
        let outcome = validator().validate("TILE_GEOMETRIC_ERROR", &declared);
        assert_eq!(outcome.reason(), Some(RejectionReason::TypeMismatch));
    }

    #[test]
    fn test_float_without_precision_is_precision_mismatch() {
        let declared = DeclaredProperty::new(ElementType::Float, 1, None);
        let outcome = validator().validate("TILE_MINIMUM_HEIGHT", &declared);
        assert_eq!(outcome.reason(), Some(RejectionReason::PrecisionMismatch));
        assert_eq!(outcome.rejection().unwrap().actual(), "no precision");
    }

    #[test]
    fn test_variable_length_array_rejected() {
        let declared =
            DeclaredProperty::variable_array(ElementType::Float, Some(FloatPrecision::Bits64));
        let outcome = validator().validate("TILE_BOUNDING_BOX", &declared);
        assert_eq!(outcome.reason(), Some(RejectionReason::TypeMismatch));
    }

    #[test]
    fn test_tile_count_requires_uint64() {
        let v = validator();
        assert!(v.validate("TILESET_TILE_COUNT", &DeclaredProperty::uint64()).is_accepted());

        let declared = DeclaredProperty::new(ElementType::Uint32, 1, None);
        let outcome = v.validate("TILESET_TILE_COUNT", &declared);
        assert_eq!(outcome.reason(), Some(RejectionReason::TypeMismatch));
    }

    #[test]
    fn test_string_semantics_ignore_precision() {
        let declared = DeclaredProperty::new(ElementType::String, 1, Some(FloatPrecision::Bits32));
        assert!(validator().validate("ID", &declared).is_accepted());
    }

    #[test]
    fn test_validate_semantic_by_tag() {
        let declared = DeclaredProperty::float(3, FloatPrecision::Bits32);
        let outcome = validator().validate_semantic(Semantic::TileHorizonOcclusionPoint, &declared);
        assert!(outcome.is_accepted());
    }

    #[test]
    fn test_into_result() {
        let declared = DeclaredProperty::string();
        assert!(validator().validate("NAME", &declared).into_result().is_ok());

        let declared = DeclaredProperty::uint64();
        let err = validator().validate("NAME", &declared).into_result().unwrap_err();
        assert_eq!(err.reason(), RejectionReason::TypeMismatch);
    }

    #[test]
    fn test_outcome_serialization() {
        let value = serde_json::to_value(ValidationOutcome::Accepted).unwrap();
        assert_eq!(value["outcome"], "Accepted");

        let declared = DeclaredProperty::float(6, FloatPrecision::Bits32);
        let outcome = validator().validate("TILE_BOUNDING_REGION", &declared);
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["outcome"], "Rejected");
        assert_eq!(value["rejection"]["reason"], "PrecisionMismatch");
    }
}
