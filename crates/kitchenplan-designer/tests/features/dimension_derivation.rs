use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use kitchenplan_core::AssetError;
use kitchenplan_designer::catalog::Catalog;
use kitchenplan_designer::model::{Boundary, Dimensions, ItemKind};
use kitchenplan_designer::model3d::{AssetProvider, Mesh3D, StaticAssetProvider};
use kitchenplan_designer::placement::DragDelta;
use kitchenplan_designer::session::{DropPayload, LayoutSession, SessionOptions};
use kitchenplan_designer::viewport::Viewport;
use nalgebra::Point3;

struct CountingProvider {
    inner: StaticAssetProvider,
    loads: AtomicUsize,
}

impl AssetProvider for CountingProvider {
    fn load(&self, reference: &str) -> Result<Arc<Mesh3D>, AssetError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.inner.load(reference)
    }
}

fn measured_box() -> Dimensions {
    Dimensions::new(1.2, 0.85, 0.58)
}

fn session_with(provider: Arc<dyn AssetProvider>) -> LayoutSession {
    LayoutSession::new(
        Boundary::new(4.0, 3.0, 2.4),
        Catalog::builtin(),
        SessionOptions::default(),
    )
    .with_assets(provider)
}

#[test]
fn test_setting_model_adopts_measured_box() {
    let assets = Arc::new(StaticAssetProvider::new());
    assets.insert(
        "range.stl",
        Mesh3D::cuboid(Point3::new(0.0, 0.0, 0.0), Point3::new(1.2, 0.85, 0.58)),
    );
    let mut session = session_with(assets);

    let id = session.place_from_catalog("oven").unwrap();
    assert!(session.set_model(&id, Some("range.stl".to_string())));

    let item = session.item(&id).unwrap();
    assert_eq!(item.dimensions, measured_box());
    assert!(item.dimensions_resolved);
}

#[test]
fn test_derivation_runs_once() {
    let inner = StaticAssetProvider::new();
    inner.insert_box("dishwasher.stl", Dimensions::new(0.596, 0.818, 0.55));
    let provider = Arc::new(CountingProvider {
        inner,
        loads: AtomicUsize::new(0),
    });
    let mut session = session_with(provider.clone());

    let id = session.place_from_catalog("dishwasher").unwrap();
    assert_eq!(provider.loads.load(Ordering::SeqCst), 1);

    assert!(!session.resolve_dimensions(&id));
    assert!(!session.resolve_dimensions(&id));
    assert_eq!(session.resolve_pending(), 0);
    assert_eq!(provider.loads.load(Ordering::SeqCst), 1);
}

#[test]
fn test_new_model_is_measured_again() {
    let assets = Arc::new(StaticAssetProvider::new());
    assets.insert_box("fridge-a.stl", Dimensions::new(0.6, 1.8, 0.65));
    assets.insert_box("fridge-b.stl", Dimensions::new(0.9, 1.9, 0.75));
    let mut session = session_with(assets);

    let id = session.place_from_catalog("refrigerator").unwrap();
    session.set_model(&id, Some("fridge-a.stl".to_string()));
    assert!((session.item(&id).unwrap().dimensions.width - 0.6).abs() < 1e-12);

    session.set_model(&id, Some("fridge-b.stl".to_string()));
    assert!((session.item(&id).unwrap().dimensions.width - 0.9).abs() < 1e-12);
}

#[test]
fn test_missing_asset_keeps_catalog_defaults() {
    let mut session = session_with(Arc::new(StaticAssetProvider::new()));
    let id = session.place_from_catalog("refrigerator").unwrap();

    let item = session.item(&id).unwrap();
    assert_eq!(item.dimensions, Dimensions::new(0.9, 1.8, 0.75));
    assert!(!item.dimensions_resolved);
}

#[test]
fn test_larger_measured_footprint_is_reclamped() {
    let assets = Arc::new(StaticAssetProvider::new());
    assets.insert_box("wide.stl", Dimensions::new(1.6, 0.9, 0.6));
    let mut session = session_with(assets);

    let id = session.place_from_catalog("base-cabinet").unwrap();
    session.apply_drag_delta(&id, &DragDelta::translate(5.0, 0.0));
    assert_eq!(session.item(&id).unwrap().position.x, 1.7);

    session.set_model(&id, Some("wide.stl".to_string()));
    let item = session.item(&id).unwrap();
    assert!((item.position.x - 1.2).abs() < 1e-12);
}

#[test]
fn test_items_without_model_are_left_alone() {
    let mut session = session_with(Arc::new(StaticAssetProvider::new()));
    session.set_viewport(Viewport::with_size(800.0, 600.0));
    let id = session
        .place_from_drop(&DropPayload::Kind(ItemKind::Cabinet), 400.0, 300.0)
        .unwrap();

    assert!(session.item(&id).unwrap().model_ref.is_none());
    assert!(!session.resolve_dimensions(&id));
    assert_eq!(
        session.item(&id).unwrap().dimensions,
        Dimensions::new(0.6, 0.8, 0.6)
    );
}
