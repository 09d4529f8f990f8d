//! Embedded built-in property catalog.
//!
//! The vehicle (FTF/AGV) property set ships with the library as JSON text so
//! that the default catalog and the built-in template are available without
//! any external files.

/// Returns the built-in vehicle property catalog as a JSON string.
///
/// The text uses the same wire format as exported schemas: an array of
/// `{name, label, type, unit, ...}` objects, grouped by `class`.
pub fn vehicle_properties() -> &'static str {
    r#"[
  {
    "name": "name",
    "label": "Name",
    "type": "Text",
    "unit": "–",
    "description": "Model designation of the vehicle",
    "class": "General"
  },
  {
    "name": "manufacturer",
    "label": "Manufacturer",
    "type": "Text",
    "unit": "–",
    "description": "Manufacturer name",
    "class": "General"
  },
  {
    "name": "vehicleType",
    "label": "Vehicle type",
    "type": "Enum",
    "unit": "–",
    "description": "Type: AGV, AMR, counterbalance stacker, tugger, platform, etc.",
    "class": "General"
  },
  {
    "name": "application",
    "label": "Application",
    "type": "Text",
    "unit": "–",
    "description": "Field of application, e.g. warehouse logistics, assembly, mixed traffic",
    "class": "General"
  },
  {
    "name": "navigationType",
    "label": "Navigation type",
    "type": "Enum",
    "unit": "–",
    "description": "Navigation: laser, SLAM, optical, QR, contrast line, magnetic, natural features, etc.",
    "class": "General"
  },
  {
    "name": "drivingMode",
    "label": "Driving mode",
    "type": "Text",
    "unit": "–",
    "description": "Operating modes (autonomous, manual, remote)",
    "class": "General"
  },
  {
    "name": "availability",
    "label": "Availability",
    "type": "Boolean",
    "unit": "–",
    "description": "Is the vehicle currently available on the market?",
    "class": "General"
  },
  {
    "name": "firstReleaseYear",
    "label": "Market launch",
    "type": "Number",
    "unit": "year",
    "description": "Year of market launch",
    "class": "General"
  },
  {
    "name": "length",
    "label": "Length",
    "type": "Number",
    "unit": "mm",
    "description": "Overall length of the vehicle",
    "class": "Dimensions"
  },
  {
    "name": "width",
    "label": "Width",
    "type": "Number",
    "unit": "mm",
    "description": "Overall width",
    "class": "Dimensions"
  },
  {
    "name": "height",
    "label": "Height",
    "type": "Number",
    "unit": "mm",
    "description": "Height (e.g. with mast or lowered)",
    "class": "Dimensions"
  },
  {
    "name": "turningRadius",
    "label": "Turning radius",
    "type": "Number",
    "unit": "mm",
    "description": "Turning radius",
    "class": "Dimensions"
  },
  {
    "name": "aisleWidthMin",
    "label": "Minimum aisle width",
    "type": "Number",
    "unit": "mm",
    "description": "Minimum aisle width (AST)",
    "class": "Dimensions"
  },
  {
    "name": "passageWidthMin",
    "label": "Minimum passage width",
    "type": "Number",
    "unit": "mm",
    "description": "Minimum passage width",
    "class": "Dimensions"
  },
  {
    "name": "underclearance",
    "label": "Underride height",
    "type": "Number",
    "unit": "mm",
    "description": "Underride height (platform vehicles)",
    "class": "Dimensions"
  },
  {
    "name": "weightEmpty",
    "label": "Empty weight",
    "type": "Number",
    "unit": "kg",
    "description": "Empty weight including battery",
    "class": "Dimensions"
  },
  {
    "name": "groundClearance",
    "label": "Ground clearance",
    "type": "Number",
    "unit": "mm",
    "description": "Ground clearance",
    "class": "Dimensions"
  },
  {
    "name": "wheelBase",
    "label": "Wheel base",
    "type": "Number",
    "unit": "mm",
    "description": "Wheel base",
    "class": "Dimensions"
  },
  {
    "name": "payload",
    "label": "Payload",
    "type": "Number",
    "unit": "kg",
    "description": "Maximum payload",
    "class": "Performance"
  },
  {
    "name": "towingCapacity",
    "label": "Towing capacity",
    "type": "Number",
    "unit": "kg",
    "description": "Maximum towing or trailer load",
    "class": "Performance"
  },
  {
    "name": "maxSpeedLoaded",
    "label": "Max. speed (loaded)",
    "type": "Number",
    "unit": "m/s",
    "description": "Top speed with load",
    "class": "Performance"
  },
  {
    "name": "maxSpeedUnloaded",
    "label": "Max. speed (unloaded)",
    "type": "Number",
    "unit": "m/s",
    "description": "Top speed without load",
    "class": "Performance"
  },
  {
    "name": "maxGradient",
    "label": "Maximum gradient",
    "type": "Number",
    "unit": "%",
    "description": "Maximum climbing ability",
    "class": "Performance"
  },
  {
    "name": "positioningAccuracy",
    "label": "Positioning accuracy",
    "type": "Number",
    "unit": "mm",
    "description": "Accuracy of positioning",
    "class": "Performance"
  },
  {
    "name": "angularAccuracy",
    "label": "Angular accuracy",
    "type": "Number",
    "unit": "°",
    "description": "Rotation angle accuracy (if specified)",
    "class": "Performance"
  },
  {
    "name": "acceleration",
    "label": "Acceleration",
    "type": "Number",
    "unit": "m/s²",
    "description": "Acceleration",
    "class": "Performance"
  },
  {
    "name": "deceleration",
    "label": "Deceleration",
    "type": "Number",
    "unit": "m/s²",
    "description": "Deceleration",
    "class": "Performance"
  },
  {
    "name": "batteryType",
    "label": "Battery type",
    "type": "Enum",
    "unit": "–",
    "description": "e.g. lithium-ion, lead-acid, LiFePO4",
    "class": "Energy"
  },
  {
    "name": "batteryVoltage",
    "label": "Battery voltage",
    "type": "Number",
    "unit": "V",
    "description": "Voltage",
    "class": "Energy"
  },
  {
    "name": "batteryCapacity",
    "label": "Battery capacity",
    "type": "Number",
    "unit": "Ah",
    "description": "Capacity",
    "class": "Energy"
  },
  {
    "name": "chargingType",
    "label": "Charging type",
    "type": "Enum",
    "unit": "–",
    "description": "Manual, automatic, inductive, swappable",
    "class": "Energy"
  },
  {
    "name": "chargingMethod",
    "label": "Charging method",
    "type": "Text",
    "unit": "–",
    "description": "Charging procedure (e.g. manual plug, automatic contacts)",
    "class": "Energy"
  },
  {
    "name": "chargingTime",
    "label": "Charging time",
    "type": "Number",
    "unit": "min",
    "description": "Charging time",
    "class": "Energy"
  },
  {
    "name": "runtime",
    "label": "Runtime",
    "type": "Number",
    "unit": "h",
    "description": "Operating time per charge",
    "class": "Energy"
  },
  {
    "name": "batteryExchangeable",
    "label": "Battery exchangeable",
    "type": "Boolean",
    "unit": "–",
    "description": "Can the battery be exchanged?",
    "class": "Energy"
  },
  {
    "name": "driveType",
    "label": "Drive type",
    "type": "Text",
    "unit": "–",
    "description": "Drive: DC, AC, mecanum, omnidirectional",
    "class": "Drive & Safety"
  },
  {
    "name": "motorPower",
    "label": "Motor power",
    "type": "Number",
    "unit": "W",
    "description": "Drive power",
    "class": "Drive & Safety"
  },
  {
    "name": "brakingSystem",
    "label": "Braking system",
    "type": "Text",
    "unit": "–",
    "description": "Type of braking system (electric, mechanical, electromagnetic)",
    "class": "Drive & Safety"
  },
  {
    "name": "safetyScanner",
    "label": "Safety laser scanner",
    "type": "Boolean",
    "unit": "–",
    "description": "Whether safety laser scanners are fitted",
    "class": "Drive & Safety"
  },
  {
    "name": "lidarType",
    "label": "Lidar type",
    "type": "Text",
    "unit": "–",
    "description": "Lidar brands / types",
    "class": "Drive & Safety"
  },
  {
    "name": "sensors",
    "label": "Sensors",
    "type": "List",
    "unit": "–",
    "description": "Built-in sensors (e.g. lidar, camera)",
    "class": "Drive & Safety"
  },
  {
    "name": "protectionClass",
    "label": "Protection class",
    "type": "Text",
    "unit": "IP code",
    "description": "Protection class per IP standard",
    "class": "Drive & Safety"
  },
  {
    "name": "safetyStandard",
    "label": "Safety standard",
    "type": "Text",
    "unit": "–",
    "description": "e.g. DIN EN ISO 13849-1, PLd",
    "class": "Drive & Safety"
  },
  {
    "name": "certifications",
    "label": "Certifications",
    "type": "List",
    "unit": "–",
    "description": "Safety certificates (e.g. ISO, PL level)",
    "class": "Drive & Safety"
  },
  {
    "name": "safetyFeatures",
    "label": "Safety features",
    "type": "Text",
    "unit": "–",
    "description": "Safety functions (e.g. scanner, emergency stop)",
    "class": "Drive & Safety"
  },
  {
    "name": "redundantSafetySystems",
    "label": "Redundant safety systems",
    "type": "Boolean",
    "unit": "–",
    "description": "Are safety-relevant systems redundant?",
    "class": "Drive & Safety"
  },
  {
    "name": "interfaces",
    "label": "Interfaces",
    "type": "List",
    "unit": "–",
    "description": "e.g. ROS, USB, Ethernet, HDMI",
    "class": "Connectivity"
  },
  {
    "name": "communicationProtocols",
    "label": "Communication protocols",
    "type": "List",
    "unit": "–",
    "description": "WLAN, Bluetooth, LTE, 5G",
    "class": "Connectivity"
  },
  {
    "name": "fleetManagementCompatible",
    "label": "Fleet management compatible",
    "type": "Boolean",
    "unit": "–",
    "description": "Supports fleet managers (e.g. VDA 5050)?",
    "class": "Connectivity"
  },
  {
    "name": "remoteMonitoring",
    "label": "Remote monitoring",
    "type": "Boolean",
    "unit": "–",
    "description": "Remote monitoring and diagnostics possible?",
    "class": "Connectivity"
  },
  {
    "name": "softwareUpdatesOTA",
    "label": "OTA updates",
    "type": "Boolean",
    "unit": "–",
    "description": "Over-the-air updates supported?",
    "class": "Connectivity"
  },
  {
    "name": "localizationSystem",
    "label": "Localization system",
    "type": "Text",
    "unit": "–",
    "description": "SLAM, markerless, laser, etc.",
    "class": "Control & Software"
  },
  {
    "name": "hmiAvailable",
    "label": "HMI available",
    "type": "Boolean",
    "unit": "–",
    "description": "Has a human machine interface (display)?",
    "class": "Control & Software"
  },
  {
    "name": "displaySize",
    "label": "Display size",
    "type": "Number",
    "unit": "inch",
    "description": "Display diagonal",
    "class": "Control & Software"
  },
  {
    "name": "manualOverride",
    "label": "Manual override",
    "type": "Boolean",
    "unit": "–",
    "description": "Can be steered or overridden manually",
    "class": "Control & Software"
  },
  {
    "name": "softwarePlatform",
    "label": "Software platform",
    "type": "Text",
    "unit": "–",
    "description": "Supported software / interfaces (e.g. ROS)",
    "class": "Control & Software"
  },
  {
    "name": "multiVehicleCoordination",
    "label": "Multi-vehicle coordination",
    "type": "Boolean",
    "unit": "–",
    "description": "Coordination with other vehicles possible?",
    "class": "Control & Software"
  },
  {
    "name": "loadHandlingDevice",
    "label": "Load handling device",
    "type": "Text",
    "unit": "–",
    "description": "Platform, forks, towing coupling, etc.",
    "class": "Load Handling & Environment"
  },
  {
    "name": "liftHeightMax",
    "label": "Maximum lift height",
    "type": "Number",
    "unit": "mm",
    "description": "Maximum lift height",
    "class": "Load Handling & Environment"
  },
  {
    "name": "liftSystemType",
    "label": "Lift system type",
    "type": "Text",
    "unit": "–",
    "description": "Electromechanical, hydraulic, etc.",
    "class": "Load Handling & Environment"
  },
  {
    "name": "noiseLevel",
    "label": "Noise level",
    "type": "Number",
    "unit": "dB",
    "description": "Noise emission during operation",
    "class": "Load Handling & Environment"
  },
  {
    "name": "operatingTemperatureMin",
    "label": "Min. operating temperature",
    "type": "Number",
    "unit": "°C",
    "description": "Minimum permissible ambient temperature",
    "class": "Load Handling & Environment"
  },
  {
    "name": "operatingTemperatureMax",
    "label": "Max. operating temperature",
    "type": "Number",
    "unit": "°C",
    "description": "Maximum permissible ambient temperature",
    "class": "Load Handling & Environment"
  },
  {
    "name": "humidityRange",
    "label": "Humidity range",
    "type": "Text",
    "unit": "%",
    "description": "Permissible humidity range",
    "class": "Load Handling & Environment"
  }
]"#
}
