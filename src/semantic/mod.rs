//! Semantic registry for 3D Tiles metadata
//!
//! A semantic is a reserved property name with a fixed storage type, shape and
//! precision. Consumers such as bounding volume refinement can trust a value
//! tagged with a semantic once its declaration has been validated here.
//!
//! # Design Principles
//!
//! - Closed catalog, fixed at process start
//! - Read-only after construction, no locking
//! - Unknown semantic names are accepted unchecked
//! - Precision is strict: it decides storage size downstream
//! - Deterministic validation

mod catalog;
mod errors;
mod types;
mod validator;

pub use catalog::SemanticCatalog;
pub use errors::{Rejection, RejectionReason};
pub use types::{
    DeclaredProperty, ElementType, FloatPrecision, Semantic, SemanticDefinition, SemanticFamily,
    UnknownSemantic, ValueType,
};
pub use validator::{SemanticValidator, ValidationOutcome};
