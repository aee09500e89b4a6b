//! Semantic type definitions
//!
//! Reserved semantics (3D Metadata Semantic Reference):
//! - General: ID, NAME, DESCRIPTION
//! - Tileset: TILESET_TILE_COUNT
//! - Tile: TILE_* bounding volumes, heights, horizon occlusion point, geometric error
//! - Content: CONTENT_* bounding volumes, heights, horizon occlusion point
//!
//! The external spellings are a stable public vocabulary: case-sensitive, no aliases.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of reserved metadata semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Semantic {
    /// A unique identifier
    Id,
    /// A name, not necessarily unique
    Name,
    /// A description
    Description,
    /// Number of tiles in a tileset
    TilesetTileCount,
    TileBoundingBox,
    TileBoundingRegion,
    TileBoundingSphere,
    TileMinimumHeight,
    TileMaximumHeight,
    TileHorizonOcclusionPoint,
    TileGeometricError,
    ContentBoundingBox,
    ContentBoundingRegion,
    ContentBoundingSphere,
    ContentMinimumHeight,
    ContentMaximumHeight,
    ContentHorizonOcclusionPoint,
}

impl Semantic {
    /// Every semantic, in catalog order.
    pub const ALL: [Semantic; 17] = [
        Semantic::Id,
        Semantic::Name,
        Semantic::Description,
        Semantic::TilesetTileCount,
        Semantic::TileBoundingBox,
        Semantic::TileBoundingRegion,
        Semantic::TileBoundingSphere,
        Semantic::TileMinimumHeight,
        Semantic::TileMaximumHeight,
        Semantic::TileHorizonOcclusionPoint,
        Semantic::TileGeometricError,
        Semantic::ContentBoundingBox,
        Semantic::ContentBoundingRegion,
        Semantic::ContentBoundingSphere,
        Semantic::ContentMinimumHeight,
        Semantic::ContentMaximumHeight,
        Semantic::ContentHorizonOcclusionPoint,
    ];

    /// Returns the external spelling of this semantic.
    pub fn as_str(&self) -> &'static str {
        match self {
            Semantic::Id => "ID",
            Semantic::Name => "NAME",
            Semantic::Description => "DESCRIPTION",
            Semantic::TilesetTileCount => "TILESET_TILE_COUNT",
            Semantic::TileBoundingBox => "TILE_BOUNDING_BOX",
            Semantic::TileBoundingRegion => "TILE_BOUNDING_REGION",
            Semantic::TileBoundingSphere => "TILE_BOUNDING_SPHERE",
            Semantic::TileMinimumHeight => "TILE_MINIMUM_HEIGHT",
            Semantic::TileMaximumHeight => "TILE_MAXIMUM_HEIGHT",
            Semantic::TileHorizonOcclusionPoint => "TILE_HORIZON_OCCLUSION_POINT",
            Semantic::TileGeometricError => "TILE_GEOMETRIC_ERROR",
            Semantic::ContentBoundingBox => "CONTENT_BOUNDING_BOX",
            Semantic::ContentBoundingRegion => "CONTENT_BOUNDING_REGION",
            Semantic::ContentBoundingSphere => "CONTENT_BOUNDING_SPHERE",
            Semantic::ContentMinimumHeight => "CONTENT_MINIMUM_HEIGHT",
            Semantic::ContentMaximumHeight => "CONTENT_MAXIMUM_HEIGHT",
            Semantic::ContentHorizonOcclusionPoint => "CONTENT_HORIZON_OCCLUSION_POINT",
        }
    }

    /// Parses an exact external spelling. Returns `None` for anything else.
    pub fn from_name(name: &str) -> Option<Self> {
        Semantic::ALL.iter().copied().find(|s| s.as_str() == name)
    }

    /// Returns the hierarchy level this semantic describes.
    pub fn family(&self) -> SemanticFamily {
        match self {
            Semantic::Id | Semantic::Name | Semantic::Description => SemanticFamily::General,
            Semantic::TilesetTileCount => SemanticFamily::Tileset,
            Semantic::TileBoundingBox
            | Semantic::TileBoundingRegion
            | Semantic::TileBoundingSphere
            | Semantic::TileMinimumHeight
            | Semantic::TileMaximumHeight
            | Semantic::TileHorizonOcclusionPoint
            | Semantic::TileGeometricError => SemanticFamily::Tile,
            Semantic::ContentBoundingBox
            | Semantic::ContentBoundingRegion
            | Semantic::ContentBoundingSphere
            | Semantic::ContentMinimumHeight
            | Semantic::ContentMaximumHeight
            | Semantic::ContentHorizonOcclusionPoint => SemanticFamily::Content,
        }
    }
}

impl fmt::Display for Semantic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a name outside the closed semantic set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSemantic(pub String);

impl fmt::Display for UnknownSemantic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a reserved semantic", self.0)
    }
}

impl std::error::Error for UnknownSemantic {}

impl FromStr for Semantic {
    type Err = UnknownSemantic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Semantic::from_name(s).ok_or_else(|| UnknownSemantic(s.to_string()))
    }
}

/// Hierarchy level a semantic applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticFamily {
    /// Applies to any entity
    General,
    Tileset,
    Tile,
    Content,
}

/// Element type of a stored value, before precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ElementType {
    String,
    Boolean,
    Enum,
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    /// Floating point; the width is carried separately as a [`FloatPrecision`]
    Float,
}

impl ElementType {
    /// Returns the type name for diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::String => "STRING",
            ElementType::Boolean => "BOOLEAN",
            ElementType::Enum => "ENUM",
            ElementType::Int8 => "INT8",
            ElementType::Uint8 => "UINT8",
            ElementType::Int16 => "INT16",
            ElementType::Uint16 => "UINT16",
            ElementType::Int32 => "INT32",
            ElementType::Uint32 => "UINT32",
            ElementType::Int64 => "INT64",
            ElementType::Uint64 => "UINT64",
            ElementType::Float => "FLOAT",
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, ElementType::Float)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ALL: [ElementType; 12] = [
            ElementType::String,
            ElementType::Boolean,
            ElementType::Enum,
            ElementType::Int8,
            ElementType::Uint8,
            ElementType::Int16,
            ElementType::Uint16,
            ElementType::Int32,
            ElementType::Uint32,
            ElementType::Int64,
            ElementType::Uint64,
            ElementType::Float,
        ];
        ALL.iter()
            .copied()
            .find(|e| e.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown element type '{}'", s))
    }
}

/// Floating point storage width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum FloatPrecision {
    /// IEEE 754 single precision
    Bits32,
    /// IEEE 754 double precision
    Bits64,
}

impl FloatPrecision {
    pub fn bits(&self) -> u8 {
        match self {
            FloatPrecision::Bits32 => 32,
            FloatPrecision::Bits64 => 64,
        }
    }
}

impl From<FloatPrecision> for u8 {
    fn from(p: FloatPrecision) -> u8 {
        p.bits()
    }
}

impl TryFrom<u8> for FloatPrecision {
    type Error = String;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            32 => Ok(FloatPrecision::Bits32),
            64 => Ok(FloatPrecision::Bits64),
            other => Err(format!("unsupported float precision: {} bits", other)),
        }
    }
}

impl fmt::Display for FloatPrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FLOAT{}", self.bits())
    }
}

/// Required storage type and shape of a semantic.
///
/// `FLOAT_*` variants name component count and layout, not bit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueType {
    String,
    Uint64,
    FloatScalar,
    FloatVec3,
    FloatVec4,
    FloatArray6,
    FloatArray12,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::String => "STRING",
            ValueType::Uint64 => "UINT64",
            ValueType::FloatScalar => "FLOAT_SCALAR",
            ValueType::FloatVec3 => "FLOAT_VEC3",
            ValueType::FloatVec4 => "FLOAT_VEC4",
            ValueType::FloatArray6 => "FLOAT_ARRAY6",
            ValueType::FloatArray12 => "FLOAT_ARRAY12",
        }
    }

    /// Element type every component must have
    pub fn element(&self) -> ElementType {
        match self {
            ValueType::String => ElementType::String,
            ValueType::Uint64 => ElementType::Uint64,
            _ => ElementType::Float,
        }
    }

    /// Number of components in one value
    pub fn component_count(&self) -> u32 {
        match self {
            ValueType::String | ValueType::Uint64 | ValueType::FloatScalar => 1,
            ValueType::FloatVec3 => 3,
            ValueType::FloatVec4 => 4,
            ValueType::FloatArray6 => 6,
            ValueType::FloatArray12 => 12,
        }
    }

    pub fn is_float(&self) -> bool {
        self.element().is_float()
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog entry for one reserved semantic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SemanticDefinition {
    /// Catalog key
    pub semantic: Semantic,
    /// Required storage type and shape
    pub value_type: ValueType,
    /// Permitted float widths; empty for non-float value types
    pub allowed_precisions: &'static [FloatPrecision],
    /// Labels for each component, documentation only
    #[serde(skip_serializing_if = "no_labels")]
    pub component_semantics: &'static [&'static str],
    pub description: &'static str,
}

fn no_labels(labels: &&'static [&'static str]) -> bool {
    labels.is_empty()
}

impl SemanticDefinition {
    /// Returns the external spelling of the semantic
    pub fn name(&self) -> &'static str {
        self.semantic.as_str()
    }

    /// Returns whether a float width is permitted
    pub fn allows_precision(&self, precision: FloatPrecision) -> bool {
        self.allowed_precisions.contains(&precision)
    }
}

/// Declared type, shape and precision of a property, as parsed by a schema loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeclaredProperty {
    /// Element type of each component
    pub element: ElementType,
    /// Fixed component count; `None` for a variable-length array
    pub component_count: Option<u32>,
    /// Float width, if the element is floating point
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<FloatPrecision>,
}

impl DeclaredProperty {
    pub fn new(element: ElementType, component_count: u32, precision: Option<FloatPrecision>) -> Self {
        Self {
            element,
            component_count: Some(component_count),
            precision,
        }
    }

    /// A single string value
    pub fn string() -> Self {
        Self::new(ElementType::String, 1, None)
    }

    /// A single unsigned 64-bit integer
    pub fn uint64() -> Self {
        Self::new(ElementType::Uint64, 1, None)
    }

    /// A fixed number of float components
    pub fn float(component_count: u32, precision: FloatPrecision) -> Self {
        Self::new(ElementType::Float, component_count, Some(precision))
    }

    /// A variable-length array of the given element type
    pub fn variable_array(element: ElementType, precision: Option<FloatPrecision>) -> Self {
        Self {
            element,
            component_count: None,
            precision,
        }
    }

    /// Declares exactly the shape a value type requires.
    pub fn of(value_type: ValueType, precision: Option<FloatPrecision>) -> Self {
        Self::new(value_type.element(), value_type.component_count(), precision)
    }

    /// Returns a compact shape description for diagnostics, e.g. `FLOAT x6`
    pub fn shape(&self) -> String {
        match self.component_count {
            Some(1) => self.element.as_str().to_string(),
            Some(n) => format!("{} x{}", self.element, n),
            None => format!("{} x[]", self.element),
        }
    }
}
