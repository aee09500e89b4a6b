//! Metadata schema front end
//!
//! Reads 3D Tiles metadata schemas (classes and their properties) and checks
//! every property that claims a semantic against the semantic registry.
//!
//! Structural errors (bad JSON, missing componentType, bad counts) are loader
//! errors. Semantic mismatches are reported, not raised: the caller decides
//! whether a rejection is fatal.

mod checker;
mod errors;
mod loader;
mod types;

pub use checker::{CheckReport, PropertyCheck, SchemaChecker};
pub use errors::{ClassError, ClassResult, PropertyError};
pub use loader::{parse_schema, SchemaLoader};
pub use types::{ClassProperty, ComponentType, MetadataClass, MetadataSchema, PropertyType};
