//! Semantic Invariant Tests
//!
//! Tests for the semantic registry invariants:
//! - The catalog is closed and matches the reserved vocabulary exactly
//! - Unknown semantic names are accepted unchecked
//! - Type and shape are checked before precision
//! - Validation is deterministic

use tilesem::semantic::{
    DeclaredProperty, ElementType, FloatPrecision, RejectionReason, Semantic, SemanticCatalog,
    SemanticValidator, ValidationOutcome, ValueType,
};

// =============================================================================
// Helper Functions
// =============================================================================

const TABLE: [(&str, ValueType, &[u8]); 17] = [
    ("ID", ValueType::String, &[]),
    ("NAME", ValueType::String, &[]),
    ("DESCRIPTION", ValueType::String, &[]),
    ("TILESET_TILE_COUNT", ValueType::Uint64, &[]),
    ("TILE_BOUNDING_BOX", ValueType::FloatArray12, &[32, 64]),
    ("TILE_BOUNDING_REGION", ValueType::FloatArray6, &[64]),
    ("TILE_BOUNDING_SPHERE", ValueType::FloatVec4, &[32, 64]),
    ("TILE_MINIMUM_HEIGHT", ValueType::FloatScalar, &[32, 64]),
    ("TILE_MAXIMUM_HEIGHT", ValueType::FloatScalar, &[32, 64]),
    ("TILE_HORIZON_OCCLUSION_POINT", ValueType::FloatVec3, &[32, 64]),
    ("TILE_GEOMETRIC_ERROR", ValueType::FloatScalar, &[32, 64]),
    ("CONTENT_BOUNDING_BOX", ValueType::FloatArray12, &[32, 64]),
    ("CONTENT_BOUNDING_REGION", ValueType::FloatArray6, &[64]),
    ("CONTENT_BOUNDING_SPHERE", ValueType::FloatVec4, &[32, 64]),
    ("CONTENT_MINIMUM_HEIGHT", ValueType::FloatScalar, &[32, 64]),
    ("CONTENT_MAXIMUM_HEIGHT", ValueType::FloatScalar, &[32, 64]),
    ("CONTENT_HORIZON_OCCLUSION_POINT", ValueType::FloatVec3, &[32, 64]),
];

fn validator() -> SemanticValidator<'static> {
    SemanticValidator::new(SemanticCatalog::global())
}

fn precision(bits: u8) -> FloatPrecision {
    FloatPrecision::try_from(bits).unwrap()
}

// =============================================================================
// Catalog Tests
// =============================================================================

/// Every reserved name resolves to exactly the tabled type and precisions.
#[test]
fn test_catalog_matches_reserved_table() {
    let catalog = SemanticCatalog::global();
    assert_eq!(catalog.len(), TABLE.len());

    for (name, value_type, bits) in TABLE {
        let def = catalog.lookup(name).unwrap_or_else(|| panic!("{} missing", name));
        assert_eq!(def.name(), name);
        assert_eq!(def.value_type, value_type, "{}", name);

        let actual: Vec<u8> = def.allowed_precisions.iter().map(|p| p.bits()).collect();
        assert_eq!(actual, bits.to_vec(), "{}", name);
    }
}

/// Names outside the catalog are NotFound, including near misses.
#[test]
fn test_lookup_outside_catalog() {
    let catalog = SemanticCatalog::global();
    for name in [
        "CUSTOM_APP_SEMANTIC",
        "",
        "id",
        "Name",
        "TILE_BOUNDING_VOLUME",
        " TILE_BOUNDING_BOX",
        "CONTENT_GEOMETRIC_ERROR",
    ] {
        assert!(catalog.lookup(name).is_none(), "{:?}", name);
    }
}

/// Catalog order and the tag enum agree.
#[test]
fn test_catalog_order_follows_tags() {
    let names: Vec<&str> = SemanticCatalog::global().iter().map(|d| d.name()).collect();
    let tags: Vec<&str> = Semantic::ALL.iter().map(|s| s.as_str()).collect();
    assert_eq!(names, tags);
}

// =============================================================================
// Validation Tests
// =============================================================================

/// Matching type, count and any allowed precision is accepted for every entry.
#[test]
fn test_matching_declarations_accepted() {
    let v = validator();
    for (name, value_type, bits) in TABLE {
        if bits.is_empty() {
            let declared = DeclaredProperty::of(value_type, None);
            assert!(v.validate(name, &declared).is_accepted(), "{}", name);
        }
        for &b in bits {
            let declared = DeclaredProperty::of(value_type, Some(precision(b)));
            assert!(v.validate(name, &declared).is_accepted(), "{} @ {}", name, b);
        }
    }
}

/// Region semantics require 64-bit floats.
#[test]
fn test_region_rejects_single_precision() {
    let declared = DeclaredProperty::of(ValueType::FloatArray6, Some(FloatPrecision::Bits32));
    for name in ["TILE_BOUNDING_REGION", "CONTENT_BOUNDING_REGION"] {
        let outcome = validator().validate(name, &declared);
        assert_eq!(outcome.reason(), Some(RejectionReason::PrecisionMismatch), "{}", name);
    }
}

/// A sphere declared with six components is a shape error.
#[test]
fn test_sphere_rejects_six_components() {
    let declared = DeclaredProperty::of(ValueType::FloatArray6, Some(FloatPrecision::Bits64));
    let outcome = validator().validate("TILE_BOUNDING_SPHERE", &declared);
    assert_eq!(outcome.reason(), Some(RejectionReason::TypeMismatch));
}

/// Unknown semantics pass through whatever they declare.
#[test]
fn test_unknown_semantic_accepted() {
    let v = validator();
    let declarations = [
        DeclaredProperty::string(),
        DeclaredProperty::float(7, FloatPrecision::Bits32),
        DeclaredProperty::variable_array(ElementType::Boolean, None),
        DeclaredProperty::new(ElementType::Float, 1, None),
    ];
    for declared in declarations {
        assert_eq!(
            v.validate("CUSTOM_APP_SEMANTIC", &declared),
            ValidationOutcome::Accepted
        );
    }
}

/// Every float semantic rejects an integer element of the right count.
#[test]
fn test_float_semantics_reject_integers() {
    let v = validator();
    for def in SemanticCatalog::global().iter().filter(|d| d.value_type.is_float()) {
        let declared = DeclaredProperty::new(
            ElementType::Int32,
            def.value_type.component_count(),
            None,
        );
        assert_eq!(
            v.validate(def.name(), &declared).reason(),
            Some(RejectionReason::TypeMismatch),
            "{}",
            def.name()
        );
    }
}

// =============================================================================
// Determinism Tests
// =============================================================================

/// Same inputs produce the same outcome every time.
#[test]
fn test_validation_is_deterministic() {
    let v = validator();
    let declared = DeclaredProperty::float(6, FloatPrecision::Bits32);

    let first = v.validate("TILE_BOUNDING_REGION", &declared);
    for _ in 0..100 {
        assert_eq!(v.validate("TILE_BOUNDING_REGION", &declared), first);
    }
}

/// Independently built catalogs give identical outcomes.
#[test]
fn test_owned_catalog_agrees_with_global() {
    let owned = SemanticCatalog::new();
    let local = SemanticValidator::new(&owned);
    let global = validator();

    for semantic in Semantic::ALL {
        for declared in [
            DeclaredProperty::string(),
            DeclaredProperty::uint64(),
            DeclaredProperty::float(1, FloatPrecision::Bits32),
            DeclaredProperty::float(6, FloatPrecision::Bits64),
            DeclaredProperty::float(12, FloatPrecision::Bits32),
        ] {
            assert_eq!(
                local.validate(semantic.as_str(), &declared),
                global.validate(semantic.as_str(), &declared)
            );
        }
    }
}

/// Concurrent callers see the same outcomes without coordination.
#[test]
fn test_concurrent_validation() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                let declared = DeclaredProperty::float(4, FloatPrecision::Bits32);
                SemanticValidator::default()
                    .validate("CONTENT_BOUNDING_SPHERE", &declared)
                    .is_accepted()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
