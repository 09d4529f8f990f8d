//! Lenient validation scenarios.

use crate::common::builders::SchemaBuilder;
use crate::common::fixtures::{speed_schema, vehicle_document, vehicle_schema};
use crate::common::{doc, init_logging, messages};
use asset_attributes::schema::{PropertyDefinition, PropertyKind, Schema};
use asset_attributes::{Payload, Violation, validate_batch};
use serde_json::{Value, json};

#[test]
fn test_speed_scenario() {
    init_logging();
    let schema = speed_schema();

    assert_eq!(
        messages(&schema.validate_document(&doc(json!({"speed": 12})))),
        vec!["value for 'speed' must be ≤ 10"]
    );
    assert!(schema.validate_document(&doc(json!({"speed": 3}))).is_empty());
    assert_eq!(
        messages(&schema.validate_document(&doc(json!({"speed": "abc"})))),
        vec!["value for 'speed' must be a number"]
    );
}

#[test]
fn test_color_scenario() {
    let schema = SchemaBuilder::new().enumeration("color", &["red", "blue"]).build();

    let errors = schema.validate_document(&doc(json!({"color": "green"})));
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "value for 'color' must be one of the allowed values: red, blue"
    );
    assert!(schema.validate_document(&doc(json!({"color": "red"}))).is_empty());
}

#[test]
fn test_valid_vehicle_document() {
    assert!(vehicle_schema().validate_document(&vehicle_document()).is_empty());
}

#[test]
fn test_all_errors_reported_in_schema_order() {
    let schema = vehicle_schema();
    let document = doc(json!({
        "sensors": ["radar"],
        "availability": "yes",
        "wheelCount": 4.5,
        "payload": -1,
        "vehicleType": "Drone"
    }));

    let errors = schema.validate_document(&document);
    let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(
        fields,
        vec!["vehicleType", "payload", "wheelCount", "availability", "sensors"]
    );
    assert_eq!(
        messages(&errors),
        vec![
            "value for 'vehicleType' must be one of the allowed values: AGV, AMR, Forklift",
            "value for 'payload' must be ≥ 0",
            "value for 'wheelCount' must be a whole number",
            "value for 'availability' must be true or false",
            "value 'radar' for 'sensors' is not allowed",
        ]
    );
}

#[test]
fn test_zero_and_false_are_present_values() {
    let schema = SchemaBuilder::new()
        .number("payload", Some(1.0), None)
        .boolean("availability")
        .build();
    let errors = schema.validate_document(&doc(json!({"payload": 0, "availability": false})));
    assert_eq!(messages(&errors), vec!["value for 'payload' must be ≥ 1"]);
}

#[test]
fn test_absent_values_always_pass() {
    let schema = vehicle_schema();
    for property in &schema {
        assert!(property.validate_value(&Value::Null).is_ok());
        assert!(property.validate_value(&json!("")).is_ok());
    }
}

#[test]
fn test_list_requires_sequence_when_configured() {
    let schema = vehicle_schema();
    let sensors = schema.get("sensors").unwrap();
    let error = sensors.validate_value(&json!("lidar")).unwrap_err();
    assert!(matches!(error.violation, Violation::NotAList { .. }));
}

#[test]
fn test_enumeration_spelling_is_normalised() {
    let schema = Schema::from_json(
        r#"[{"name": "color", "type": "Enumeration", "valueConstraints": {"enumValues": ["red"]}}]"#,
    )
    .unwrap();
    assert_eq!(schema.get("color").unwrap().kind, PropertyKind::Enum);
    assert_eq!(schema.validate_document(&doc(json!({"color": "blue"}))).len(), 1);
}

#[test]
fn test_schema_wire_format_tolerates_missing_optional_fields() {
    let schema = Schema::from_json(r#"[{"name": "notes", "type": "Text"}]"#).unwrap();
    let notes: &PropertyDefinition = schema.get("notes").unwrap();
    assert_eq!(notes.label, "");
    assert_eq!(notes.unit, "");
    assert!(notes.value_constraints.is_none());
}

#[test]
fn test_batch_scenario() {
    let schema = speed_schema();
    let payload = Payload::Batch(vec![doc(json!({"speed": 3})), doc(json!({"speed": 12}))]);
    let errors = validate_batch(&schema, &payload);
    assert_eq!(messages(&errors), vec!["Object 2: value for 'speed' must be ≤ 10"]);
    assert_eq!(errors[0].object_index, Some(1));
}
