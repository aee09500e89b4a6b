//! tilesem - registry and validator for 3D Tiles metadata semantics
//!
//! The [`semantic`] module is the core: a closed catalog of reserved property
//! names and the validator that checks a declared property against one.
//! [`class`] reads metadata schemas and runs the validator over them.

pub mod class;
pub mod cli;
pub mod observability;
pub mod semantic;

pub use semantic::{
    DeclaredProperty, RejectionReason, Semantic, SemanticCatalog, SemanticValidator,
    ValidationOutcome,
};
