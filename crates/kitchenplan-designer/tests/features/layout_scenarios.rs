use kitchenplan_designer::catalog::{Catalog, CatalogCategory, ItemDefinition};
use kitchenplan_designer::model::{Boundary, Dimensions, ItemKind};
use kitchenplan_designer::placement::DragDelta;
use kitchenplan_designer::session::{DropPayload, LayoutSession, SessionOptions};
use kitchenplan_designer::viewport::Viewport;

fn cabinet_catalog() -> Catalog {
    Catalog::new(vec![ItemDefinition {
        key: "cabinet".to_string(),
        name: "Cabinet".to_string(),
        description: String::new(),
        kind: ItemKind::Cabinet,
        category: CatalogCategory::Storage,
        default_dimensions: Dimensions::new(0.6, 0.8, 0.6),
        color: None,
        model_ref: None,
        floor_placement: true,
        label: None,
    }])
    .unwrap()
}

fn session() -> LayoutSession {
    LayoutSession::new(
        Boundary::new(4.0, 3.0, 2.4),
        cabinet_catalog(),
        SessionOptions::default(),
    )
}

#[test]
fn test_catalog_default_placement() {
    let mut session = session();
    let id = session.place_from_catalog("cabinet").unwrap();

    let item = session.item(&id).unwrap();
    assert_eq!(item.position.x, 0.3);
    assert_eq!(item.position.z, 0.3);
    assert_eq!(item.position.y, 0.0);
    assert_eq!(item.color, "#8B4513");
}

#[test]
fn test_drag_past_wall_stops_at_wall() {
    let mut session = session();
    let id = session.place_from_catalog("cabinet").unwrap();

    assert!(session.apply_drag_delta(&id, &DragDelta::translate(5.0, 0.0)));

    let item = session.item(&id).unwrap();
    assert_eq!(item.position.x, 1.7);
    assert_eq!(item.position.z, 0.3);
}

#[test]
fn test_removing_selected_item_clears_selection() {
    let mut session = session();
    let id = session.place_from_catalog("cabinet").unwrap();
    session.click_item(&id, std::time::Instant::now());
    assert_eq!(session.selected_item_id(), Some(&id));

    session.remove_item(&id);

    assert!(session.selected_item_id().is_none());
    assert!(session.snapshot().selected_item_id.is_none());
}

#[test]
fn test_drop_near_corner_stays_inside() {
    let mut session = session();
    session.set_viewport(Viewport::with_size(800.0, 600.0));

    let id = session
        .place_from_drop(&DropPayload::CatalogKey("cabinet".into()), 799.0, 1.0)
        .unwrap();

    let item = session.item(&id).unwrap();
    assert_eq!(item.position.x, 1.7);
    assert_eq!(item.position.z, -1.2);
}

#[test]
fn test_resize_pulls_items_back_inside() {
    let mut session = session();
    let id = session.place_from_catalog("cabinet").unwrap();
    session.apply_drag_delta(&id, &DragDelta::translate(5.0, 5.0));

    assert!(session.set_boundary(Boundary::new(2.0, 2.0, 2.4)));

    let item = session.item(&id).unwrap();
    assert!((item.position.x - 0.7).abs() < 1e-12);
    assert!((item.position.z - 0.7).abs() < 1e-12);
}
