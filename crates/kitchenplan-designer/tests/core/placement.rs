use kitchenplan_designer::model::{Boundary, Dimensions, ItemKind, KitchenItem, PlacementClass};
use kitchenplan_designer::placement::{
    apply_drag, catalog_position, drop_position, DragDelta, PlacementOptions,
};
use kitchenplan_designer::viewport::FloorPoint;
use nalgebra::{Matrix4, Point3, Rotation3, Vector3};

#[test]
fn test_catalog_position_small_room() {
    // W/2 - w = 0.2 beats w/2 = 0.3
    let boundary = Boundary::new(1.6, 3.0, 2.4);
    let dims = Dimensions::new(0.6, 0.8, 0.6);
    let position = catalog_position(&dims, &boundary, 0.0);
    assert!((position.x - 0.2).abs() < 1e-12);
    assert!((position.z - 0.3).abs() < 1e-12);
}

#[test]
fn test_catalog_position_oversized_item_centered() {
    let boundary = Boundary::new(2.0, 3.0, 2.4);
    let dims = Dimensions::new(2.5, 0.04, 0.6);
    let position = catalog_position(&dims, &boundary, 0.9);
    assert_eq!(position.x, 0.0);
}

#[test]
fn test_drop_inside_is_unchanged() {
    let boundary = Boundary::new(4.0, 3.0, 2.4);
    let dims = Dimensions::new(0.6, 0.8, 0.6);
    let position = drop_position(FloorPoint::new(-0.5, 0.25), &dims, &boundary, 0.0);
    assert_eq!(position, Point3::new(-0.5, 0.0, 0.25));
}

#[test]
fn test_placement_heights() {
    let options = PlacementOptions { counter_height: 0.92 };
    assert_eq!(options.height_for(PlacementClass::Floor), 0.0);
    assert_eq!(options.height_for(PlacementClass::Elevated), 0.92);
}

#[test]
fn test_drag_ignores_vertical_motion() {
    let boundary = Boundary::new(4.0, 3.0, 2.4);
    let item = KitchenItem::new(
        ItemKind::Countertop,
        Point3::new(0.0, 0.9, 0.0),
        Dimensions::new(1.2, 0.04, 0.6),
    );
    let delta = DragDelta::new(Vector3::new(0.1, 5.0, -0.1), 0.0);
    let result = apply_drag(&item, &boundary, &delta);
    assert_eq!(result.position.y, 0.9);
    assert!((result.position.x - 0.1).abs() < 1e-12);
    assert!((result.position.z + 0.1).abs() < 1e-12);
}

#[test]
fn test_drag_matrix_composes_translation_and_yaw() {
    let boundary = Boundary::new(4.0, 3.0, 2.4);
    let mut item = KitchenItem::new(
        ItemKind::Appliance,
        Point3::new(0.0, 0.0, 0.0),
        Dimensions::new(0.6, 0.85, 0.6),
    );
    item.rotation = Vector3::new(0.0, 0.5, 0.0);

    let matrix = Matrix4::new_translation(&Vector3::new(-9.0, 0.0, 0.4))
        * Rotation3::from_axis_angle(&Vector3::y_axis(), -0.75).to_homogeneous();
    let result = apply_drag(&item, &boundary, &DragDelta::from_matrix(&matrix));

    assert!((result.position.x + 1.7).abs() < 1e-12);
    assert!((result.position.z - 0.4).abs() < 1e-12);
    assert!((result.rotation.y + 0.25).abs() < 1e-9);
}
