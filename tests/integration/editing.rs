//! Catalog and attribute list editing.

use crate::common::init_logging;
use asset_attributes::attribute_list::BUILTIN_TEMPLATE_ID;
use asset_attributes::schema::{PropertyDefinition, PropertyKind, Schema, ValueConstraints};
use asset_attributes::{AttributeLists, ClassCatalog, DEFAULT_CLASS, PropertyCatalog};

#[test]
fn test_build_schema_from_catalog_and_constrain_it() {
    init_logging();
    let catalog = PropertyCatalog::builtin();
    let mut schema = Schema::default();

    assert!(schema.add_from_catalog("payload", &catalog).unwrap());
    assert!(schema.add_from_catalog("vehicleType", &catalog).unwrap());
    schema
        .set_constraints("payload", ValueConstraints::range(Some(0.0), Some(2000.0)))
        .unwrap();

    let payload = schema.get("payload").unwrap();
    assert_eq!(payload.unit, "kg");
    assert_eq!(payload.constraint_summary(), "0 to 2000");
    assert_eq!(schema.get("vehicleType").unwrap().constraint_summary(), "any");
}

#[test]
fn test_builtin_catalog_classes() {
    let catalog = PropertyCatalog::builtin();
    let classes = catalog.classes();
    assert!(classes.contains(&"General"));
    assert!(classes.contains(&"Dimensions"));
    let grouped = catalog.grouped_by_class();
    let total: usize = grouped.values().map(Vec::len).sum();
    assert_eq!(total, catalog.len());
}

#[test]
fn test_catalog_rename_migrates_lists() {
    let mut catalog = PropertyCatalog::new();
    catalog
        .upsert(PropertyDefinition::new("load", PropertyKind::Number), None)
        .unwrap();

    let mut lists = AttributeLists::with_builtin_template();
    let id = lists.create("Fleet", None).unwrap().id.clone();
    let mut properties = Schema::default();
    properties.add_from_catalog("load", &catalog).unwrap();
    lists.replace_properties(&id, properties).unwrap();

    catalog
        .upsert(
            PropertyDefinition::new("payload", PropertyKind::Number).with_unit("kg"),
            Some("load"),
        )
        .unwrap();
    assert_eq!(lists.rename_property("load", "payload").unwrap(), 1);
    lists.sync_with_catalog(&catalog);

    let list = lists.get(&id).unwrap();
    assert_eq!(list.properties.get("payload").unwrap().unit, "kg");
    assert!(!list.properties.contains("load"));
}

#[test]
fn test_template_seeding() {
    let mut lists = AttributeLists::with_builtin_template();
    let created = lists.create("Copy", Some(BUILTIN_TEMPLATE_ID)).unwrap().clone();
    assert_eq!(created.properties, PropertyCatalog::builtin().as_schema().sorted_by_name());

    lists.set_template(&created.id, true).unwrap();
    assert_eq!(lists.templates().count(), 2);
}

#[test]
fn test_class_management_on_builtin_catalog() {
    init_logging();
    let mut catalog = PropertyCatalog::builtin();
    let mut classes = ClassCatalog::new();
    let dimensions = catalog.grouped_by_class()["Dimensions"].len();

    assert!(classes.add_class("Sizes").unwrap());
    assert!(classes.known_classes(&catalog).contains(&"Sizes"));

    // Renaming onto a class that is still known is refused.
    assert!(classes.rename_class("Dimensions", "Sizes", &mut catalog).is_err());
    classes.remove_class("Sizes", &mut catalog);
    assert_eq!(
        classes.rename_class("Dimensions", "Sizes", &mut catalog).unwrap(),
        dimensions
    );
    assert!(!catalog.classes().contains(&"Dimensions"));

    assert_eq!(classes.remove_class("Sizes", &mut catalog), dimensions);
    let defaults = catalog
        .iter()
        .filter(|p| p.class.as_deref() == Some(DEFAULT_CLASS))
        .count();
    assert_eq!(defaults, dimensions);
}
