//! Semantic checks over a whole metadata schema
//!
//! Every property that carries a `semantic` is validated. Properties without
//! one are not part of the report. Order is class id, then property id.

use serde::Serialize;

use super::errors::{ClassError, ClassResult};
use super::types::MetadataSchema;
use crate::semantic::{Rejection, SemanticValidator, ValidationOutcome};

/// Outcome for one semantic-tagged property
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyCheck {
    pub class: String,
    pub property: String,
    pub semantic: String,
    /// Whether the semantic is in the reserved catalog
    pub governed: bool,
    #[serde(flatten)]
    pub outcome: ValidationOutcome,
}

/// Result of checking every semantic in a schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub schema_id: String,
    pub checks: Vec<PropertyCheck>,
    /// Governed semantics that were accepted
    pub accepted: usize,
    pub rejected: usize,
    /// Semantics outside the catalog, accepted unchecked
    pub unknown: usize,
}

impl CheckReport {
    /// Returns whether no property was rejected
    pub fn is_clean(&self) -> bool {
        self.rejected == 0
    }

    /// Iterates over rejected checks
    pub fn rejections(&self) -> impl Iterator<Item = (&PropertyCheck, &Rejection)> {
        self.checks
            .iter()
            .filter_map(|check| check.outcome.rejection().map(|r| (check, r)))
    }
}

/// Runs semantic validation across a schema.
pub struct SchemaChecker<'a> {
    validator: SemanticValidator<'a>,
}

impl<'a> SchemaChecker<'a> {
    pub fn new(validator: SemanticValidator<'a>) -> Self {
        Self { validator }
    }

    /// Checks every semantic-tagged property in the schema.
    ///
    /// # Errors
    ///
    /// Returns `ClassError::InvalidProperty` if a tagged property is
    /// structurally invalid (only possible for schemas built in memory).
    pub fn check(&self, schema: &MetadataSchema) -> ClassResult<CheckReport> {
        let catalog = self.validator.catalog();
        let mut report = CheckReport {
            schema_id: schema.id.clone(),
            checks: Vec::new(),
            accepted: 0,
            rejected: 0,
            unknown: 0,
        };

        for (class_id, class) in &schema.classes {
            for (property_id, property) in &class.properties {
                let Some(semantic) = property.semantic.as_deref() else {
                    continue;
                };

                let declared = property
                    .declared()
                    .map_err(|source| ClassError::invalid_property(class_id, property_id, source))?;
                let governed = catalog.contains(semantic);
                let outcome = self.validator.validate(semantic, &declared);

                match (&outcome, governed) {
                    (ValidationOutcome::Rejected(_), _) => report.rejected += 1,
                    (ValidationOutcome::Accepted, true) => report.accepted += 1,
                    (ValidationOutcome::Accepted, false) => report.unknown += 1,
                }

                report.checks.push(PropertyCheck {
                    class: class_id.clone(),
                    property: property_id.clone(),
                    semantic: semantic.to_string(),
                    governed,
                    outcome,
                });
            }
        }

        Ok(report)
    }
}

impl Default for SchemaChecker<'static> {
    fn default() -> Self {
        Self::new(SemanticValidator::default())
    }
}
