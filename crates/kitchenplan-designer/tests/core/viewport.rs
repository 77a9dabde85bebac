use kitchenplan_designer::model::Boundary;
use kitchenplan_designer::viewport::{DiagramTransform, FloorPoint, Viewport};

#[test]
fn test_surface_center_maps_to_room_center() {
    let vp = Viewport::new(200.0, 100.0, 1000.0, 500.0);
    let world = vp
        .pixel_to_world(700.0, 350.0, &Boundary::new(4.0, 3.0, 2.4))
        .unwrap();
    assert!(world.x.abs() < 1e-12);
    assert!(world.z.abs() < 1e-12);
}

#[test]
fn test_surface_edges_map_to_walls() {
    let vp = Viewport::with_size(800.0, 600.0);
    let boundary = Boundary::new(4.0, 3.0, 2.4);

    assert_eq!(
        vp.pixel_to_world(0.0, 0.0, &boundary),
        Some(FloorPoint::new(-2.0, -1.5))
    );
    assert_eq!(
        vp.pixel_to_world(800.0, 600.0, &boundary),
        Some(FloorPoint::new(2.0, 1.5))
    );
}

#[test]
fn test_world_to_pixel_inverts_pixel_to_world() {
    let vp = Viewport::new(10.0, 20.0, 640.0, 480.0);
    let boundary = Boundary::new(5.0, 3.5, 2.4);

    for (px, py) in [(10.0, 20.0), (123.0, 456.0), (330.0, 260.0), (650.0, 500.0)] {
        let world = vp.pixel_to_world(px, py, &boundary).unwrap();
        let (bx, by) = vp.world_to_pixel(world, &boundary);
        assert!((bx - px).abs() < 1e-9, "x {} -> {}", px, bx);
        assert!((by - py).abs() < 1e-9, "y {} -> {}", py, by);
    }
}

#[test]
fn test_viewport_resize() {
    let mut vp = Viewport::with_size(800.0, 600.0);
    vp.set_surface(50.0, 0.0, 400.0, 300.0);
    assert_eq!(vp.left(), 50.0);
    assert_eq!(vp.pixel_to_ndc(250.0, 150.0), (0.0, 0.0));
}

#[test]
fn test_diagram_roundtrip_and_custom_scale() {
    let diagram = DiagramTransform::new(25.0);
    let boundary = Boundary::new(6.0, 4.0, 2.4);

    assert_eq!(diagram.canvas_size(&boundary), (150.0, 100.0));

    let point = FloorPoint::new(-1.25, 0.8);
    let (px, py) = diagram.world_to_diagram(point, &boundary);
    let back = diagram.diagram_to_world(px, py, &boundary);
    assert!((back.x - point.x).abs() < 1e-12);
    assert!((back.z - point.z).abs() < 1e-12);
}
