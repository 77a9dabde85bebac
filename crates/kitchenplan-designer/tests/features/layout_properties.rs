use kitchenplan_designer::catalog::Catalog;
use kitchenplan_designer::layout_store::LayoutStore;
use kitchenplan_designer::model::{Boundary, Dimensions, ItemId, ItemKind, KitchenItem};
use kitchenplan_designer::placement::{apply_drag, DragDelta};
use kitchenplan_designer::session::{LayoutSession, SessionOptions};
use kitchenplan_designer::viewport::{DiagramTransform, FloorPoint, Viewport};
use nalgebra::{Point3, Vector3};
use proptest::prelude::*;

fn boundary_strategy() -> impl Strategy<Value = Boundary> {
    (1.0f64..12.0, 1.0f64..12.0, 2.0f64..4.0).prop_map(|(w, d, h)| Boundary::new(w, d, h))
}

fn dims_strategy() -> impl Strategy<Value = Dimensions> {
    (0.05f64..3.0, 0.02f64..2.5, 0.05f64..3.0).prop_map(|(w, h, d)| Dimensions::new(w, h, d))
}

fn delta_strategy() -> impl Strategy<Value = DragDelta> {
    (-20.0f64..20.0, -20.0f64..20.0, -20.0f64..20.0, -7.0f64..7.0)
        .prop_map(|(dx, dy, dz, yaw)| DragDelta::new(Vector3::new(dx, dy, dz), yaw))
}

proptest! {
    #[test]
    fn drag_keeps_footprint_inside(
        boundary in boundary_strategy(),
        dims in dims_strategy(),
        deltas in prop::collection::vec(delta_strategy(), 1..20),
    ) {
        prop_assume!(dims.width <= boundary.width && dims.depth <= boundary.depth);

        let mut item = KitchenItem::new(ItemKind::Cabinet, Point3::origin(), dims);
        for delta in &deltas {
            let result = apply_drag(&item, &boundary, delta);
            item.position = result.position;
            item.rotation = result.rotation;

            prop_assert!(item.position.x.abs() <= boundary.width / 2.0 - dims.width / 2.0 + 1e-9);
            prop_assert!(item.position.z.abs() <= boundary.depth / 2.0 - dims.depth / 2.0 + 1e-9);
            prop_assert_eq!(item.position.y, 0.0);
        }
    }

    #[test]
    fn zero_delta_changes_nothing(
        boundary in boundary_strategy(),
        dims in dims_strategy(),
        fx in -1.0f64..1.0,
        fz in -1.0f64..1.0,
        yaw in -7.0f64..7.0,
    ) {
        let position = boundary.clamp_footprint(
            Point3::new(fx * boundary.width / 2.0, 0.0, fz * boundary.depth / 2.0),
            &dims,
        );
        let mut item = KitchenItem::new(ItemKind::Appliance, position, dims);
        item.rotation = Vector3::new(0.0, yaw, 0.0);

        let result = apply_drag(&item, &boundary, &DragDelta::zero());
        prop_assert_eq!(result.position, item.position);
        prop_assert_eq!(result.rotation, item.rotation);
    }

    #[test]
    fn screen_world_roundtrip(
        boundary in boundary_strategy(),
        width in 100.0f64..2000.0,
        height in 100.0f64..2000.0,
        u in 0.0f64..1.0,
        v in 0.0f64..1.0,
    ) {
        let viewport = Viewport::new(12.0, 34.0, width, height);
        let (px, py) = (12.0 + u * width, 34.0 + v * height);

        let world = viewport.pixel_to_world(px, py, &boundary).unwrap();
        let (bx, by) = viewport.world_to_pixel(world, &boundary);
        prop_assert!((bx - px).abs() < 1e-6);
        prop_assert!((by - py).abs() < 1e-6);
    }

    #[test]
    fn diagram_world_roundtrip(
        boundary in boundary_strategy(),
        scale in 5.0f64..200.0,
        u in -0.5f64..0.5,
        v in -0.5f64..0.5,
    ) {
        let transform = DiagramTransform::new(scale);
        let point = FloorPoint::new(u * boundary.width, v * boundary.depth);
        let (px, py) = transform.world_to_diagram(point, &boundary);
        let back = transform.diagram_to_world(px, py, &boundary);
        prop_assert!((back.x - point.x).abs() < 1e-9);
        prop_assert!((back.z - point.z).abs() < 1e-9);
    }

    #[test]
    fn at_most_one_selected(picks in prop::collection::vec(0usize..6, 0..30)) {
        let mut store = LayoutStore::new(Boundary::new(4.0, 3.0, 2.4));
        let ids: Vec<ItemId> = (0..5)
            .map(|i| {
                let item = KitchenItem::new(
                    ItemKind::Cabinet,
                    Point3::origin(),
                    Dimensions::new(0.6, 0.8, 0.6),
                )
                .with_id(format!("item-{}", i));
                let id = item.id.clone();
                store.add_item(item);
                id
            })
            .collect();

        for pick in picks {
            // Index 5 clears the selection
            store.set_selected_item(ids.get(pick).cloned());
            let selected = store.items().iter().filter(|i| store.is_selected(&i.id)).count();
            prop_assert!(selected <= 1);
        }
    }

    #[test]
    fn catalog_placement_is_inside(boundary in boundary_strategy()) {
        let mut session = LayoutSession::new(boundary, Catalog::builtin(), SessionOptions::default());
        let keys: Vec<String> = session.catalog().iter().map(|d| d.key.clone()).collect();
        for key in keys {
            let id = session.place_from_catalog(&key).unwrap();
            let item = session.item(&id).unwrap();
            prop_assert!(boundary.contains_footprint(&item.position, &item.dimensions));
        }
    }
}
