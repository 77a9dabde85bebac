use kitchenplan_core::{EventFilter, LayoutEvent};
use kitchenplan_designer::layout_store::LayoutStore;
use kitchenplan_designer::model::{
    Boundary, Dimensions, Fixture, FixtureKind, ItemId, ItemKind, ItemUpdate, KitchenItem,
};
use nalgebra::{Point3, Vector3};
use std::sync::{Arc, Mutex};

fn cabinet(id: &str, x: f64, z: f64) -> KitchenItem {
    KitchenItem::new(
        ItemKind::Cabinet,
        Point3::new(x, 0.0, z),
        Dimensions::new(0.6, 0.8, 0.6),
    )
    .with_id(id)
}

fn recorder(store: &LayoutStore) -> Arc<Mutex<Vec<LayoutEvent>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    store
        .events()
        .subscribe(EventFilter::All, move |e| sink.lock().unwrap().push(e));
    seen
}

#[test]
fn test_mutation_visible_inside_handler() {
    let mut store = LayoutStore::new(Boundary::new(4.0, 3.0, 2.4));
    let seen = recorder(&store);

    store.add_item(cabinet("a", 0.0, 0.0));

    assert_eq!(store.len(), 1);
    assert_eq!(
        seen.lock().unwrap().as_slice(),
        &[LayoutEvent::ItemAdded {
            item_id: "a".to_string()
        }]
    );
}

#[test]
fn test_update_replaces_fields() {
    let mut store = LayoutStore::new(Boundary::new(4.0, 3.0, 2.4));
    store.add_item(cabinet("a", 0.0, 0.0));

    store.update_item(
        &ItemId::from("a"),
        ItemUpdate::new()
            .rotation(Vector3::new(0.0, 1.0, 0.0))
            .color("#FFFFFF")
            .label(Some("Pantry".to_string())),
    );

    let item = store.item(&ItemId::from("a")).unwrap();
    assert_eq!(item.rotation.y, 1.0);
    assert_eq!(item.color, "#FFFFFF");
    assert_eq!(item.display_name(), "Pantry");
    assert_eq!(item.position, Point3::new(0.0, 0.0, 0.0));
}

#[test]
fn test_remove_unselected_keeps_selection() {
    let mut store = LayoutStore::new(Boundary::new(4.0, 3.0, 2.4));
    store.add_item(cabinet("a", -1.0, 0.0));
    store.add_item(cabinet("b", 1.0, 0.0));
    store.set_selected_item(Some(ItemId::from("a")));

    let removed = store.remove_item(&ItemId::from("b")).unwrap();
    assert_eq!(removed.id, ItemId::from("b"));
    assert_eq!(store.selected_item_id(), Some(&ItemId::from("a")));
}

#[test]
fn test_remove_unknown_is_noop() {
    let mut store = LayoutStore::new(Boundary::new(4.0, 3.0, 2.4));
    store.add_item(cabinet("a", 0.0, 0.0));
    let seen = recorder(&store);

    assert!(store.remove_item(&ItemId::from("zzz")).is_none());
    assert_eq!(store.len(), 1);
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn test_snapshot_is_detached() {
    let mut store = LayoutStore::new(Boundary::new(4.0, 3.0, 2.4));
    store.add_item(cabinet("a", 0.0, 0.0));
    let snapshot = store.snapshot();

    store.remove_item(&ItemId::from("a"));

    assert_eq!(snapshot.items.len(), 1);
    assert!(store.snapshot().items.is_empty());
}

#[test]
fn test_fixtures_do_not_move_items() {
    let mut store = LayoutStore::new(Boundary::new(4.0, 3.0, 2.4));
    store.add_item(cabinet("a", 1.7, 1.2));
    let seen = recorder(&store);

    store.set_fixtures(vec![Fixture::new(
        FixtureKind::Door,
        Point3::new(1.7, 1.0, 1.5),
        Dimensions::new(0.9, 2.0, 0.1),
    )]);

    assert_eq!(
        store.item(&ItemId::from("a")).unwrap().position,
        Point3::new(1.7, 0.0, 1.2)
    );
    assert_eq!(
        seen.lock().unwrap().as_slice(),
        &[LayoutEvent::FixturesChanged { count: 1 }]
    );
}

#[test]
fn test_growing_room_moves_nothing() {
    let mut store = LayoutStore::new(Boundary::new(4.0, 3.0, 2.4));
    store.add_item(cabinet("a", 1.7, 1.2));
    let seen = recorder(&store);

    store.set_boundary(Boundary::new(6.0, 5.0, 2.7));

    assert_eq!(
        store.item(&ItemId::from("a")).unwrap().position,
        Point3::new(1.7, 0.0, 1.2)
    );
    assert_eq!(seen.lock().unwrap().len(), 1);
}
