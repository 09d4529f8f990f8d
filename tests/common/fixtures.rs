//! Sample schemas, documents and pages.

use super::builders::SchemaBuilder;
use super::doc;
use asset_attributes::{Document, Schema};
use serde_json::json;

/// A small vehicle schema covering every property kind.
pub fn vehicle_schema() -> Schema {
    SchemaBuilder::new()
        .text("name")
        .enumeration("vehicleType", &["AGV", "AMR", "Forklift"])
        .number("payload", Some(0.0), Some(2000.0))
        .integer("wheelCount", Some(3.0), Some(8.0))
        .boolean("availability")
        .list("sensors", &["lidar", "camera", "ultrasonic"])
        .build()
}

/// Schema used by the speed scenario.
pub fn speed_schema() -> Schema {
    SchemaBuilder::new().integer("speed", Some(0.0), Some(10.0)).build()
}

/// A document valid against [`vehicle_schema`].
pub fn vehicle_document() -> Document {
    doc(json!({
        "@context": "https://example.org/ftf-context",
        "@type": "FTF",
        "name": "Carrier 7",
        "vehicleType": "AMR",
        "payload": 800,
        "wheelCount": 4,
        "availability": true,
        "sensors": ["lidar", "camera"]
    }))
}

/// A product page embedding the vehicle document next to unrelated scripts.
pub fn vehicle_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>Carrier 7</title>
    <script type="text/javascript">window.analytics = {{}};</script>
    <script type="application/ld+json">
      {}
    </script>
  </head>
  <body><h1>Carrier 7</h1></body>
</html>"#,
        vehicle_document().to_json_pretty().expect("fixture serializes")
    )
}
