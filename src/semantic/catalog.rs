//! Semantic catalog
//!
//! The catalog is closed and fixed at process start:
//! - Built once on first access, never mutated afterwards
//! - Exposed only through read-only accessors
//! - Safe to share across threads without locking

use std::collections::HashMap;
use std::sync::OnceLock;

use super::types::{FloatPrecision, Semantic, SemanticDefinition, ValueType};

const ANY_FLOAT: &[FloatPrecision] = &[FloatPrecision::Bits32, FloatPrecision::Bits64];
const DOUBLE_ONLY: &[FloatPrecision] = &[FloatPrecision::Bits64];
const NOT_FLOAT: &[FloatPrecision] = &[];

const BOX_COMPONENTS: &[&str] = &[
    "centerX", "centerY", "centerZ",
    "xAxisX", "xAxisY", "xAxisZ",
    "yAxisX", "yAxisY", "yAxisZ",
    "zAxisX", "zAxisY", "zAxisZ",
];
const REGION_COMPONENTS: &[&str] = &[
    "west", "south", "east", "north", "minimumHeight", "maximumHeight",
];
const SPHERE_COMPONENTS: &[&str] = &["centerX", "centerY", "centerZ", "radius"];
const POINT_COMPONENTS: &[&str] = &["x", "y", "z"];
const NO_COMPONENTS: &[&str] = &[];

/// Builds the definition for one semantic.
///
/// Exhaustive over [`Semantic`], so adding a variant without a definition does not compile.
fn definition(semantic: Semantic) -> SemanticDefinition {
    let (value_type, allowed_precisions, component_semantics, description): (
        ValueType,
        &'static [FloatPrecision],
        &'static [&'static str],
        &'static str,
    ) = match semantic {
        Semantic::Id => (ValueType::String, NOT_FLOAT, NO_COMPONENTS, "A unique identifier"),
        Semantic::Name => (
            ValueType::String,
            NOT_FLOAT,
            NO_COMPONENTS,
            "A name, which does not have to be unique",
        ),
        Semantic::Description => (ValueType::String, NOT_FLOAT, NO_COMPONENTS, "A description"),
        Semantic::TilesetTileCount => (
            ValueType::Uint64,
            NOT_FLOAT,
            NO_COMPONENTS,
            "The number of tiles in a tileset",
        ),
        Semantic::TileBoundingBox => (
            ValueType::FloatArray12,
            ANY_FLOAT,
            BOX_COMPONENTS,
            "A bounding box for a tile, tighter than the implicitly derived volume",
        ),
        Semantic::TileBoundingRegion => (
            ValueType::FloatArray6,
            DOUBLE_ONLY,
            REGION_COMPONENTS,
            "A bounding region for a tile in geodetic coordinates",
        ),
        Semantic::TileBoundingSphere => (
            ValueType::FloatVec4,
            ANY_FLOAT,
            SPHERE_COMPONENTS,
            "A bounding sphere for a tile",
        ),
        Semantic::TileMinimumHeight => (
            ValueType::FloatScalar,
            ANY_FLOAT,
            NO_COMPONENTS,
            "The minimum height of a tile above or below the ellipsoid",
        ),
        Semantic::TileMaximumHeight => (
            ValueType::FloatScalar,
            ANY_FLOAT,
            NO_COMPONENTS,
            "The maximum height of a tile above or below the ellipsoid",
        ),
        Semantic::TileHorizonOcclusionPoint => (
            ValueType::FloatVec3,
            ANY_FLOAT,
            POINT_COMPONENTS,
            "The horizon occlusion point for a tile",
        ),
        Semantic::TileGeometricError => (
            ValueType::FloatScalar,
            ANY_FLOAT,
            NO_COMPONENTS,
            "The geometric error for a tile, overriding the implicitly derived error",
        ),
        Semantic::ContentBoundingBox => (
            ValueType::FloatArray12,
            ANY_FLOAT,
            BOX_COMPONENTS,
            "A bounding box for the content of a tile",
        ),
        Semantic::ContentBoundingRegion => (
            ValueType::FloatArray6,
            DOUBLE_ONLY,
            REGION_COMPONENTS,
            "A bounding region for the content of a tile in geodetic coordinates",
        ),
        Semantic::ContentBoundingSphere => (
            ValueType::FloatVec4,
            ANY_FLOAT,
            SPHERE_COMPONENTS,
            "A bounding sphere for the content of a tile",
        ),
        Semantic::ContentMinimumHeight => (
            ValueType::FloatScalar,
            ANY_FLOAT,
            NO_COMPONENTS,
            "The minimum height of the content of a tile above or below the ellipsoid",
        ),
        Semantic::ContentMaximumHeight => (
            ValueType::FloatScalar,
            ANY_FLOAT,
            NO_COMPONENTS,
            "The maximum height of the content of a tile above or below the ellipsoid",
        ),
        Semantic::ContentHorizonOcclusionPoint => (
            ValueType::FloatVec3,
            ANY_FLOAT,
            POINT_COMPONENTS,
            "The horizon occlusion point for the content of a tile",
        ),
    };

    SemanticDefinition {
        semantic,
        value_type,
        allowed_precisions,
        component_semantics,
        description,
    }
}

static CATALOG: OnceLock<SemanticCatalog> = OnceLock::new();

/// Immutable table of reserved semantics.
pub struct SemanticCatalog {
    /// Definitions in catalog order, indexed by position in [`Semantic::ALL`]
    definitions: Vec<SemanticDefinition>,
    /// External spelling to position in `definitions`
    by_name: HashMap<&'static str, usize>,
}

impl SemanticCatalog {
    /// Builds a fresh catalog.
    ///
    /// Most callers want [`SemanticCatalog::global`]; this exists for callers
    /// that prefer to own their instance.
    pub fn new() -> Self {
        let definitions: Vec<SemanticDefinition> =
            Semantic::ALL.iter().copied().map(definition).collect();
        let by_name = definitions
            .iter()
            .enumerate()
            .map(|(i, def)| (def.name(), i))
            .collect();

        Self {
            definitions,
            by_name,
        }
    }

    /// Returns the process-wide catalog, building it on first access.
    pub fn global() -> &'static SemanticCatalog {
        CATALOG.get_or_init(SemanticCatalog::new)
    }

    /// Looks up a semantic by its external spelling.
    ///
    /// `None` means the name is not governed by this catalog. That is not an
    /// error: application-specific semantics are valid user data.
    pub fn lookup(&self, name: &str) -> Option<&SemanticDefinition> {
        self.by_name.get(name).map(|&i| &self.definitions[i])
    }

    /// Returns the definition for a semantic tag.
    pub fn get(&self, semantic: Semantic) -> &SemanticDefinition {
        // Declaration order of the enum is the order of Semantic::ALL.
        &self.definitions[semantic as usize]
    }

    /// Checks if a name is a reserved semantic.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Iterates over all definitions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &SemanticDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for SemanticCatalog {
    fn default() -> Self {
        Self::new()
    }
}
