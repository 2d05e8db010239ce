use recordkit_core::persist::read_snapshot;
use recordkit_core::{
    InventoryItem, InventoryLogService, PersistError, PersistentLog, ReloadOutcome,
};
use std::fs;

fn items() -> Vec<InventoryItem> {
    vec![
        InventoryItem::new(3, "drill", 2),
        InventoryItem::new(1, "sander", 0),
        InventoryItem::new(2, "clamp", 14),
    ]
}

#[test]
fn round_trip_preserves_values_and_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("inventory.json");

    let mut log = PersistentLog::new();
    for item in items() {
        log.append(item);
    }
    log.flush(&path).unwrap();

    let mut reloaded: PersistentLog<InventoryItem> = PersistentLog::new();
    assert_eq!(
        reloaded.replace_all_from(&path).unwrap(),
        ReloadOutcome::Loaded(3)
    );
    assert_eq!(reloaded.entries(), items().as_slice());
}

#[test]
fn reload_replaces_unsaved_entries_wholesale() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    PersistentLog::from(items()).flush(&path).unwrap();

    let mut log = PersistentLog::new();
    log.append(InventoryItem::new(99, "unsaved", 1));
    log.replace_all_from(&path).unwrap();

    assert_eq!(log.len(), 3);
    assert!(log.entries().iter().all(|item| item.id != 99));
}

#[test]
fn reload_from_missing_path_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = InventoryLogService::new(dir.path().join("missing.json"));
    service.record(InventoryItem::new(1, "saw", 1)).unwrap();

    assert_eq!(service.load().unwrap(), ReloadOutcome::NoData);
    assert_eq!(service.items().len(), 1);
}

#[test]
fn wrong_shape_is_parse_error_and_state_survives() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    fs::write(&path, r#"{"id": 1, "name": "not an array", "quantity": 2}"#).unwrap();

    let mut log = PersistentLog::from(items());
    let err = log.replace_all_from(&path).unwrap_err();
    assert!(matches!(err, PersistError::Parse { .. }));
    assert!(err.to_string().contains("inventory.json"));
    assert_eq!(log.entries(), items().as_slice());
}

#[test]
fn flush_into_unwritable_location_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "file, not a directory").unwrap();

    let log = PersistentLog::from(items());
    let err = log.flush(blocker.join("inventory.json")).unwrap_err();
    assert!(matches!(err, PersistError::Io { .. }));
}

#[test]
fn persisted_form_is_plain_array_of_objects() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    PersistentLog::from(items()).flush(&path).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let array = raw.as_array().unwrap();
    assert_eq!(array.len(), 3);
    assert_eq!(array[0]["name"], "drill");

    let snapshot: Vec<InventoryItem> = read_snapshot(&path).unwrap().unwrap();
    assert_eq!(snapshot, items());
}

#[test]
fn load_rejects_entries_that_break_record_invariants() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    fs::write(&path, r#"[{"id": 1, "name": "", "quantity": -5}]"#).unwrap();

    let mut service = InventoryLogService::new(&path);
    service.record(InventoryItem::new(4, "level", 3)).unwrap();

    let err = service.load().unwrap_err();
    assert!(matches!(err, PersistError::Invalid { index: 0, .. }));
    assert!(err.to_string().contains("empty name"));
    assert_eq!(service.items(), &[InventoryItem::new(4, "level", 3)]);
    assert_eq!(service.total_quantity(), 3);
}
