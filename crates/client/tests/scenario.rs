//! End-to-end session behaviour against file-backed storage.

use stockroom_client::{ClientConfig, InventorySession, SessionError, open};
use stockroom_core::{Entity, ItemId};
use stockroom_storage::FileStorage;

fn fill<G: stockroom_core::IdGenerator>(
    session: &mut InventorySession<FileStorage, G>,
    name: &str,
    quantity: i64,
    price: f64,
    category: &str,
) {
    let form = session.form_mut();
    form.name = name.to_string();
    form.quantity = quantity;
    form.price = price;
    form.category = category.to_string();
}

fn names<G: stockroom_core::IdGenerator>(session: &InventorySession<FileStorage, G>) -> Vec<String> {
    session.items().iter().map(|i| i.name().to_string()).collect()
}

#[test]
fn bolt_and_nail_scenario_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = ClientConfig::new(dir.path());

    let mut session = open(&config);
    assert!(session.is_empty());

    fill(&mut session, "Bolt", 5, 2.5, "Hardware");
    let bolt: ItemId = session.add_item().unwrap();
    assert_eq!(session.items().len(), 1);
    assert_eq!(session.items()[0].quantity(), 5);

    fill(&mut session, "Nail", 50, 0.1, "Hardware");
    session.add_item().unwrap();
    assert_eq!(names(&session), vec!["Nail", "Bolt"]);

    session.toggle_sort().unwrap();
    assert_eq!(names(&session), vec!["Bolt", "Nail"]);

    session.set_category_filter("hardware");
    assert_eq!(session.rows().len(), 2);

    session.delete(&bolt).unwrap();
    assert_eq!(names(&session), vec!["Nail"]);

    drop(session);
    let reopened = open(&config);
    assert_eq!(names(&reopened), vec!["Nail"]);
    assert_eq!(reopened.items()[0].quantity(), 50);
}

#[test]
fn stored_record_uses_plain_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open(&ClientConfig::new(dir.path()));

    fill(&mut session, "Hammer", 3, 12.0, "Tools");
    let id = session.add_item().unwrap();

    let raw = std::fs::read_to_string(dir.path().join("inventory.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "id": id.as_str(),
            "name": "Hammer",
            "quantity": 3,
            "price": 12.0,
            "category": "Tools",
        }])
    );
}

#[test]
fn corrupt_record_starts_empty_and_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("inventory.json"), "definitely not json").unwrap();

    let mut session = open(&ClientConfig::new(dir.path()));
    assert!(session.is_empty());

    fill(&mut session, "Bolt", 5, 2.5, "Hardware");
    session.add_item().unwrap();

    let reopened = open(&ClientConfig::new(dir.path()));
    assert_eq!(names(&reopened), vec!["Bolt"]);
}

#[test]
fn unwritable_directory_reports_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "a file, not a directory").unwrap();

    let mut session = open(&ClientConfig::new(&blocker));
    fill(&mut session, "Bolt", 5, 2.5, "Hardware");

    let err = session.add_item().unwrap_err();
    assert!(matches!(err, SessionError::Storage(_)));
    assert_eq!(session.items().len(), 1);
    assert_eq!(session.items()[0].id(), session.store().last_added().unwrap());
}
