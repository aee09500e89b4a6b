//! # Schema Errors
//!
//! Error types for loading metadata schemas.

use thiserror::Error;

use super::types::PropertyType;

/// Result type for schema loading
pub type ClassResult<T> = Result<T, ClassError>;

/// Structural problems with a single property definition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// SCALAR, VECN and MATN need a component type
    #[error("type {0} requires a componentType")]
    MissingComponentType(PropertyType),

    /// `count` is only meaningful for arrays
    #[error("count is set but array is false")]
    CountWithoutArray,

    /// Fixed-length arrays hold at least two elements
    #[error("array count must be at least 2, got {0}")]
    InvalidCount(u32),

    /// Type width times `count` does not fit a component count
    #[error("array count {0} is too large for its type")]
    CountOverflow(u32),
}

/// Schema loading errors
#[derive(Debug, Error)]
pub enum ClassError {
    /// Schema file could not be read
    #[error("Failed to read schema '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Schema file is not valid schema JSON
    #[error("Malformed schema '{origin}': {reason}")]
    Malformed { origin: String, reason: String },

    #[error("Schema id must not be empty")]
    MissingSchemaId,

    /// A schema with this id is already registered
    #[error("Schema '{0}' is already loaded")]
    DuplicateSchema(String),

    #[error("Invalid property '{class}.{property}': {source}")]
    InvalidProperty {
        class: String,
        property: String,
        #[source]
        source: PropertyError,
    },
}

impl ClassError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        ClassError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(origin: impl Into<String>, reason: impl Into<String>) -> Self {
        ClassError::Malformed {
            origin: origin.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_property(
        class: impl Into<String>,
        property: impl Into<String>,
        source: PropertyError,
    ) -> Self {
        ClassError::InvalidProperty {
            class: class.into(),
            property: property.into(),
            source,
        }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ClassError::Io { .. } => "TILESEM_SCHEMA_IO",
            ClassError::Malformed { .. } => "TILESEM_SCHEMA_MALFORMED",
            ClassError::MissingSchemaId => "TILESEM_SCHEMA_ID_REQUIRED",
            ClassError::DuplicateSchema(_) => "TILESEM_SCHEMA_DUPLICATE",
            ClassError::InvalidProperty { .. } => "TILESEM_SCHEMA_INVALID_PROPERTY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ClassError::MissingSchemaId.code(), "TILESEM_SCHEMA_ID_REQUIRED");
        assert_eq!(
            ClassError::malformed("x.json", "eof").code(),
            "TILESEM_SCHEMA_MALFORMED"
        );
        assert_eq!(
            ClassError::DuplicateSchema("s".into()).code(),
            "TILESEM_SCHEMA_DUPLICATE"
        );
    }

    #[test]
    fn test_invalid_property_keeps_source() {
        use std::error::Error;

        let err = ClassError::invalid_property("tile", "h", PropertyError::InvalidCount(0));
        assert!(err.to_string().contains("tile.h"));
        assert!(err.source().is_some());
    }
}
