//! Generation, validation and export round trips.

use crate::common::builders::FormValuesBuilder;
use crate::common::fixtures::vehicle_schema;
use crate::common::init_logging;
use asset_attributes::{
    DocumentGenerator, EngineConfig, EngineError, extract_document, prepare_export,
};
use serde_json::json;

#[test]
fn test_generate_validate_roundtrip() {
    init_logging();
    let schema = vehicle_schema();
    let values = FormValuesBuilder::new()
        .text("name", "Carrier 7")
        .text("vehicleType", "AGV")
        .text("payload", " 750.5 ")
        .text("wheelCount", "4")
        .text("availability", "false")
        .list("sensors", &["lidar", "ultrasonic"])
        .build();

    let document = DocumentGenerator::default().generate(&schema, &values);
    assert!(schema.validate_document(&document).is_empty());
    assert_eq!(
        document.into_value(),
        json!({
            "@context": "https://example.org/ftf-context",
            "@type": "FTF",
            "name": "Carrier 7",
            "vehicleType": "AGV",
            "payload": 750.5,
            "wheelCount": 4,
            "availability": false,
            "sensors": ["lidar", "ultrasonic"]
        })
    );
}

#[test]
fn test_generated_document_never_contains_empty_fields() {
    let schema = vehicle_schema();
    let values = FormValuesBuilder::new()
        .text("name", "")
        .text("payload", "")
        .list("sensors", &[])
        .build();

    let document = DocumentGenerator::default().generate(&schema, &values);
    assert_eq!(document.fields().count(), 0);
}

#[test]
fn test_export_then_extract_roundtrip() {
    let schema = vehicle_schema();
    let values = FormValuesBuilder::new()
        .text("name", "Carrier 7")
        .text("payload", "800")
        .build();

    let export = prepare_export(&EngineConfig::default(), &schema, &values, None).unwrap();
    assert_eq!(export.file_name, "ftf.jsonld");

    let payload = extract_document(&export.content).unwrap();
    assert!(!payload.is_batch());
    assert_eq!(
        payload.into_value(),
        json!({
            "@context": "https://example.org/ftf-context",
            "@type": "FTF",
            "name": "Carrier 7",
            "payload": 800
        })
    );
}

#[test]
fn test_export_blocked_with_every_error() {
    let schema = vehicle_schema();
    let values = FormValuesBuilder::new()
        .text("payload", "lots")
        .text("wheelCount", "2")
        .text("vehicleType", "Drone")
        .build();

    match prepare_export(&EngineConfig::default(), &schema, &values, Some("x.jsonld")) {
        Err(EngineError::ValidationFailed(report)) => {
            assert!(!report.is_valid());
            assert_eq!(report.len(), 3);
            assert_eq!(
                report.to_string(),
                "value for 'vehicleType' must be one of the allowed values: AGV, AMR, Forklift\n\
                 value for 'payload' must be a number\n\
                 value for 'wheelCount' must be ≥ 3"
            );
        }
        other => panic!("Expected ValidationFailed, got {:?}", other),
    }
}
