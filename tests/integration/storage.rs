//! Workspace persistence over the in-memory and file-backed stores.

use crate::common::builders::FormValuesBuilder;
use crate::common::fixtures::vehicle_schema;
use crate::common::init_logging;
use asset_attributes::attribute_list::BUILTIN_TEMPLATE_ID;
use asset_attributes::schema::{PropertyDefinition, PropertyKind};
use asset_attributes::storage::{FileStorage, InMemoryStorage, StorageProvider, Workspace};
use asset_attributes::{AttributeLists, PropertyCatalog};

#[tokio::test]
async fn test_file_workspace_survives_reopen() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();

    {
        let workspace = Workspace::new(FileStorage::new(dir.path()));
        workspace.save_schema(&vehicle_schema()).await.unwrap();

        let mut catalog = PropertyCatalog::new();
        catalog
            .upsert(
                PropertyDefinition::new("dockingStation", PropertyKind::Text)
                    .with_class("Energy"),
                None,
            )
            .unwrap();
        workspace.save_property_catalog(&catalog).await.unwrap();

        let mut lists = AttributeLists::with_builtin_template();
        lists.create("Warehouse fleet", Some(BUILTIN_TEMPLATE_ID)).unwrap();
        workspace.save_attribute_lists(&lists).await.unwrap();

        let values = FormValuesBuilder::new()
            .text("payload", "800")
            .list("sensors", &["lidar"])
            .build();
        workspace.save_form_values(&values).await.unwrap();
    }

    let workspace = Workspace::new(FileStorage::new(dir.path()));
    assert_eq!(workspace.load_schema().await.unwrap(), vehicle_schema());
    assert!(workspace.load_property_catalog().await.unwrap().contains("dockingStation"));

    let lists = workspace.load_attribute_lists().await.unwrap();
    assert_eq!(lists.len(), 2);
    let created = lists.iter().find(|l| l.name == "Warehouse fleet").unwrap();
    assert_eq!(created.properties.len(), 64);

    let values = workspace.load_form_values().await.unwrap();
    assert_eq!(values.len(), 2);
}

#[tokio::test]
async fn test_corrupt_file_loads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());
    let path = storage.path_for(&Workspace::<FileStorage>::schema_key()).unwrap();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "[{\"name\": \"payload\", ").unwrap();

    let workspace = Workspace::new(storage);
    assert!(workspace.load_schema().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_memory_workspace_shares_storage_clones() {
    let storage = InMemoryStorage::new();
    let writer = Workspace::new(storage.clone());
    writer.save_schema(&vehicle_schema()).await.unwrap();

    assert!(storage.exists(Workspace::<InMemoryStorage>::schema_key()).await.unwrap());
    let reader = Workspace::new(storage);
    assert_eq!(reader.load_schema().await.unwrap().len(), 6);
}
