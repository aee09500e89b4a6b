//! Schema loader for metadata schema files
//!
//! - One JSON schema per file
//! - Schemas are checked structurally on load
//! - Schema ids are unique within a loader; a loaded schema is never replaced

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::errors::{ClassError, ClassResult};
use super::types::MetadataSchema;

/// Parses and structurally checks a schema from JSON text.
///
/// `origin` names the source in error messages (a path or `<in-memory>`).
pub fn parse_schema(content: &str, origin: &str) -> ClassResult<MetadataSchema> {
    let schema = from_json(content, origin)?;
    schema.validate_structure()?;
    Ok(schema)
}

fn from_json(content: &str, origin: &str) -> ClassResult<MetadataSchema> {
    serde_json::from_str(content)
        .map_err(|e| ClassError::malformed(origin, format!("Invalid JSON: {}", e)))
}

/// Loads metadata schemas and keeps them by id.
#[derive(Debug, Default)]
pub struct SchemaLoader {
    schemas: BTreeMap<String, MetadataSchema>,
}

impl SchemaLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a single schema file and returns the registered schema.
    pub fn load_file(&mut self, path: &Path) -> ClassResult<&MetadataSchema> {
        let origin = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|e| ClassError::io(&origin, e))?;
        let schema = from_json(&content, &origin)?;

        self.register(schema)
    }

    /// Loads every `.json` file in a directory. Returns the number loaded.
    ///
    /// Files are visited in name order so duplicate detection is deterministic.
    pub fn load_dir(&mut self, dir: &Path) -> ClassResult<usize> {
        let origin = dir.display().to_string();
        let entries = fs::read_dir(dir).map_err(|e| ClassError::io(&origin, e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| ClassError::io(&origin, e))?.path();

            // Skip non-JSON files
            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }
            paths.push(path);
        }
        paths.sort();

        for path in &paths {
            self.load_file(path)?;
        }

        Ok(paths.len())
    }

    /// Checks a schema structurally and registers it under its id.
    pub fn register(&mut self, schema: MetadataSchema) -> ClassResult<&MetadataSchema> {
        schema.validate_structure()?;

        match self.schemas.entry(schema.id.clone()) {
            Entry::Occupied(_) => Err(ClassError::DuplicateSchema(schema.id)),
            Entry::Vacant(slot) => Ok(slot.insert(schema)),
        }
    }

    /// Gets a schema by id.
    pub fn get(&self, id: &str) -> Option<&MetadataSchema> {
        self.schemas.get(id)
    }

    /// Iterates over loaded schemas in id order.
    pub fn iter(&self) -> impl Iterator<Item = &MetadataSchema> {
        self.schemas.values()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
