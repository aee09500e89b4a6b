//! Metadata schema type definitions (3D Tiles metadata schema JSON)
//!
//! Property types:
//! - SCALAR, VEC2..VEC4, MAT2..MAT4: numeric, require a componentType
//! - STRING, BOOLEAN, ENUM: single element per value
//!
//! A property may be a fixed-length array (`array` + `count`) or a
//! variable-length array (`array` without `count`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::errors::{ClassError, ClassResult, PropertyError};
use crate::semantic::{DeclaredProperty, ElementType, FloatPrecision, Semantic};

/// Structural type of a class property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    Scalar,
    Vec2,
    Vec3,
    Vec4,
    Mat2,
    Mat3,
    Mat4,
    String,
    Boolean,
    Enum,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Scalar => "SCALAR",
            PropertyType::Vec2 => "VEC2",
            PropertyType::Vec3 => "VEC3",
            PropertyType::Vec4 => "VEC4",
            PropertyType::Mat2 => "MAT2",
            PropertyType::Mat3 => "MAT3",
            PropertyType::Mat4 => "MAT4",
            PropertyType::String => "STRING",
            PropertyType::Boolean => "BOOLEAN",
            PropertyType::Enum => "ENUM",
        }
    }

    /// Components in one element of this type
    pub fn width(&self) -> u32 {
        match self {
            PropertyType::Vec2 => 2,
            PropertyType::Vec3 => 3,
            PropertyType::Vec4 | PropertyType::Mat2 => 4,
            PropertyType::Mat3 => 9,
            PropertyType::Mat4 => 16,
            _ => 1,
        }
    }

    /// Returns whether this type stores numeric components
    pub fn is_numeric(&self) -> bool {
        !matches!(
            self,
            PropertyType::String | PropertyType::Boolean | PropertyType::Enum
        )
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage type of each numeric component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentType {
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float32,
    Float64,
}

impl ComponentType {
    /// Splits into element type and float width
    pub fn element(&self) -> (ElementType, Option<FloatPrecision>) {
        match self {
            ComponentType::Int8 => (ElementType::Int8, None),
            ComponentType::Uint8 => (ElementType::Uint8, None),
            ComponentType::Int16 => (ElementType::Int16, None),
            ComponentType::Uint16 => (ElementType::Uint16, None),
            ComponentType::Int32 => (ElementType::Int32, None),
            ComponentType::Uint32 => (ElementType::Uint32, None),
            ComponentType::Int64 => (ElementType::Int64, None),
            ComponentType::Uint64 => (ElementType::Uint64, None),
            ComponentType::Float32 => (ElementType::Float, Some(FloatPrecision::Bits32)),
            ComponentType::Float64 => (ElementType::Float, Some(FloatPrecision::Bits64)),
        }
    }
}

/// One property of a metadata class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassProperty {
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_type: Option<ComponentType>,
    #[serde(default)]
    pub array: bool,
    /// Fixed array length; absent for variable-length arrays
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Semantic name, possibly outside the reserved catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ClassProperty {
    /// A non-array property of the given type
    pub fn new(property_type: PropertyType, component_type: Option<ComponentType>) -> Self {
        Self {
            property_type,
            component_type,
            array: false,
            count: None,
            semantic: None,
            required: false,
            name: None,
            description: None,
        }
    }

    pub fn string() -> Self {
        Self::new(PropertyType::String, None)
    }

    pub fn scalar(component_type: ComponentType) -> Self {
        Self::new(PropertyType::Scalar, Some(component_type))
    }

    /// Makes this a fixed-length array of `count` elements
    pub fn with_count(mut self, count: u32) -> Self {
        self.array = true;
        self.count = Some(count);
        self
    }

    /// Makes this a variable-length array
    pub fn variable_length(mut self) -> Self {
        self.array = true;
        self.count = None;
        self
    }

    pub fn with_semantic(mut self, semantic: impl Into<String>) -> Self {
        self.semantic = Some(semantic.into());
        self
    }

    /// Derives the declared type, shape and precision used for semantic validation.
    ///
    /// The component count is flattened: type width times fixed array length.
    pub fn declared(&self) -> Result<DeclaredProperty, PropertyError> {
        if self.count.is_some() && !self.array {
            return Err(PropertyError::CountWithoutArray);
        }
        if let Some(count) = self.count {
            if count < 2 {
                return Err(PropertyError::InvalidCount(count));
            }
        }

        let (element, precision) = match self.property_type {
            PropertyType::String => (ElementType::String, None),
            PropertyType::Boolean => (ElementType::Boolean, None),
            PropertyType::Enum => (ElementType::Enum, None),
            numeric => self
                .component_type
                .map(|c| c.element())
                .ok_or(PropertyError::MissingComponentType(numeric))?,
        };

        let width = self.property_type.width();
        let component_count = match (self.array, self.count) {
            (false, _) => Some(width),
            (true, Some(count)) => Some(
                width
                    .checked_mul(count)
                    .ok_or(PropertyError::CountOverflow(count))?,
            ),
            (true, None) => None,
        };

        Ok(DeclaredProperty {
            element,
            component_count,
            precision,
        })
    }

    /// Returns the reserved semantic this property claims, if any.
    pub fn reserved_semantic(&self) -> Option<Semantic> {
        self.semantic.as_deref().and_then(Semantic::from_name)
    }
}

/// A metadata class: a named set of properties
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataClass {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Properties keyed by property id, ordered for deterministic reports
    #[serde(default)]
    pub properties: BTreeMap<String, ClassProperty>,
}

impl MetadataClass {
    pub fn new(properties: BTreeMap<String, ClassProperty>) -> Self {
        Self {
            name: None,
            description: None,
            properties,
        }
    }

    /// Resolves the property carrying a reserved semantic.
    ///
    /// If several properties claim it, the first by property id wins.
    pub fn property_by_semantic(&self, semantic: Semantic) -> Option<(&str, &ClassProperty)> {
        self.properties
            .iter()
            .find(|(_, property)| property.reserved_semantic() == Some(semantic))
            .map(|(id, property)| (id.as_str(), property))
    }
}

/// A metadata schema: classes keyed by class id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataSchema {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub classes: BTreeMap<String, MetadataClass>,
}

impl MetadataSchema {
    pub fn new(id: impl Into<String>, classes: BTreeMap<String, MetadataClass>) -> Self {
        Self {
            id: id.into(),
            name: None,
            description: None,
            version: None,
            classes,
        }
    }

    /// Validates the schema structure itself (not its semantics)
    pub fn validate_structure(&self) -> ClassResult<()> {
        if self.id.trim().is_empty() {
            return Err(ClassError::MissingSchemaId);
        }

        for (class_id, class) in &self.classes {
            for (property_id, property) in &class.properties {
                property
                    .declared()
                    .map_err(|source| ClassError::invalid_property(class_id, property_id, source))?;
            }
        }

        Ok(())
    }
}
