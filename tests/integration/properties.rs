//! Property-based tests of the validator and generator.
//!
//! Uses proptest for generating random inputs with automatic shrinking.

use crate::common::builders::SchemaBuilder;
use crate::common::doc;
use asset_attributes::schema::{PropertyDefinition, PropertyKind, ValueConstraints};
use asset_attributes::{DocumentGenerator, FormValue, FormValues};
use proptest::prelude::*;
use serde_json::{Value, json};

const COLORS: [&str; 4] = ["red", "blue", "green", "black"];

fn kind_strategy() -> impl Strategy<Value = PropertyKind> {
    prop_oneof![
        Just(PropertyKind::Number),
        Just(PropertyKind::Text),
        Just(PropertyKind::Boolean),
        Just(PropertyKind::List),
        Just(PropertyKind::Enum),
    ]
}

proptest! {
    #[test]
    fn number_within_bounds_iff_valid(
        a in -1000i32..1000,
        span in 0i32..1000,
        v in -3000i32..3000,
    ) {
        let (min, max) = (a as f64, (a + span) as f64);
        let property = PropertyDefinition::new("n", PropertyKind::Number)
            .with_constraints(ValueConstraints::range(Some(min), Some(max)));
        let value = v as f64;

        let result = property.validate_value(&json!(value));
        prop_assert_eq!(result.is_ok(), min <= value && value <= max);

        if let Err(error) = result {
            let message = error.to_string();
            prop_assert!(message.contains("'n'"));
            let bound = if value < min { min } else { max };
            prop_assert!(message.ends_with(&bound.to_string()));
        }
    }

    #[test]
    fn integer_constraint_rejects_fractions(whole in -100i32..100, fraction in 1u32..100) {
        let property = PropertyDefinition::new("n", PropertyKind::Number)
            .with_constraints(ValueConstraints::default().with_integer(true));
        let value = whole as f64 + fraction as f64 / 100.0;
        prop_assert!(property.validate_value(&json!(whole)).is_ok());
        prop_assert!(property.validate_value(&json!(value)).is_err());
    }

    #[test]
    fn enum_valid_iff_member(allowed in prop::sample::subsequence(COLORS.to_vec(), 1..=4), pick in 0usize..4) {
        let candidate = COLORS[pick];
        let property = PropertyDefinition::new("color", PropertyKind::Enum)
            .with_constraints(ValueConstraints::one_of(allowed.iter().copied()));
        prop_assert_eq!(
            property.validate_value(&json!(candidate)).is_ok(),
            allowed.contains(&candidate)
        );
    }

    #[test]
    fn unconfigured_enum_accepts_anything(value in "[a-zA-Z0-9 ]{1,12}") {
        let open = PropertyDefinition::new("color", PropertyKind::Enum);
        let empty = PropertyDefinition::new("color", PropertyKind::Enum)
            .with_constraints(ValueConstraints::one_of(Vec::<String>::new()));
        prop_assert!(open.validate_value(&json!(value)).is_ok());
        prop_assert!(empty.validate_value(&json!(value)).is_ok());
    }

    #[test]
    fn list_valid_iff_every_element_member(
        allowed in prop::sample::subsequence(COLORS.to_vec(), 1..=4),
        items in prop::collection::vec(prop::sample::select(COLORS.to_vec()), 0..6),
    ) {
        let property = PropertyDefinition::new("colors", PropertyKind::List)
            .with_constraints(ValueConstraints::one_of(allowed.iter().copied()));
        let expected = items.iter().all(|item| allowed.contains(item));
        prop_assert_eq!(property.validate_value(&json!(items)).is_ok(), expected);
    }

    #[test]
    fn absent_values_always_pass(kind in kind_strategy(), min in -10.0f64..10.0) {
        let property = PropertyDefinition::new("p", kind).with_constraints(
            ValueConstraints::range(Some(min), Some(min + 1.0))
                .with_integer(true),
        );
        let property = match kind {
            PropertyKind::Enum | PropertyKind::List => property
                .with_constraints(ValueConstraints::one_of(["only"])),
            _ => property,
        };
        prop_assert!(property.validate_value(&Value::Null).is_ok());
        prop_assert!(property.validate_value(&json!("")).is_ok());
    }

    #[test]
    fn generate_then_validate_has_no_errors(
        payload in prop::option::of(0u32..=2000),
        speed in prop::option::of(0u32..=10),
        available in prop::option::of(any::<bool>()),
        color in prop::option::of(prop::sample::select(vec!["red", "blue"])),
        sensors in prop::collection::vec(prop::sample::select(vec!["lidar", "camera"]), 0..3),
        name in "[a-zA-Z ]{0,10}",
    ) {
        let schema = SchemaBuilder::new()
            .text("name")
            .number("payload", Some(0.0), Some(2000.0))
            .integer("speed", Some(0.0), Some(10.0))
            .boolean("availability")
            .enumeration("color", &["red", "blue"])
            .list("sensors", &["lidar", "camera"])
            .build();

        let mut values = FormValues::new();
        values.insert("name".to_string(), FormValue::from(name.as_str()));
        if let Some(payload) = payload {
            values.insert("payload".to_string(), FormValue::from(payload.to_string()));
        }
        if let Some(speed) = speed {
            values.insert("speed".to_string(), FormValue::from(speed.to_string()));
        }
        if let Some(available) = available {
            values.insert("availability".to_string(), FormValue::from(available.to_string()));
        }
        if let Some(color) = color {
            values.insert("color".to_string(), FormValue::from(color));
        }
        values.insert(
            "sensors".to_string(),
            FormValue::List(sensors.iter().map(|s| s.to_string()).collect()),
        );

        let document = DocumentGenerator::default().generate(&schema, &values);
        prop_assert!(schema.validate_document(&document).is_empty());

        for (key, value) in document.fields() {
            prop_assert!(!value.is_null(), "null emitted for {}", key);
            prop_assert!(value != &json!(""), "empty text emitted for {}", key);
            prop_assert!(value != &json!([]), "empty list emitted for {}", key);
        }
    }

    #[test]
    fn bare_literal_extraction_is_identity(
        payload in 0u32..5000,
        name in "[a-zA-Z0-9 ]{0,16}",
    ) {
        let literal = json!({"@type": "FTF", "name": name, "payload": payload});
        let extracted = asset_attributes::extract_document(&literal.to_string()).unwrap();
        prop_assert_eq!(extracted.into_value(), doc(literal).into_value());
    }
}
