use kitchenplan_core::{EventCategory, EventFilter, LayoutEvent, MeasurementSystem};
use kitchenplan_designer::catalog::Catalog;
use kitchenplan_designer::model::Boundary;
use kitchenplan_designer::placement::DragDelta;
use kitchenplan_designer::session::{LayoutSession, SessionOptions};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

fn session(options: SessionOptions) -> LayoutSession {
    LayoutSession::new(Boundary::new(4.0, 3.0, 2.4), Catalog::builtin(), options)
}

#[test]
fn test_readout_lingers_after_drag() {
    let mut session = session(SessionOptions::default());
    let id = session.place_from_catalog("base-cabinet").unwrap();

    let pressed = Instant::now();
    assert!(session.begin_drag(&id, pressed));
    session.apply_drag_delta(&id, &DragDelta::translate(0.5, 0.0));
    let released = pressed + Duration::from_millis(400);
    session.end_drag(&id, released);

    assert!(session.readout_visible(&id, released + Duration::from_millis(1500)));
    assert!(session.tick(released + Duration::from_millis(1500)).is_empty());

    assert_eq!(
        session.tick(released + Duration::from_millis(2000)),
        vec![id.clone()]
    );
    assert!(!session.readout_visible(&id, released + Duration::from_millis(2000)));
}

#[test]
fn test_configurable_grace() {
    let mut session = session(SessionOptions {
        readout_grace: Duration::from_millis(250),
        ..SessionOptions::default()
    });
    let id = session.place_from_catalog("oven").unwrap();

    let released = Instant::now();
    session.begin_drag(&id, released);
    session.end_drag(&id, released);

    assert_eq!(
        session.tick(released + Duration::from_millis(300)),
        vec![id]
    );
}

#[test]
fn test_readout_events() {
    let mut session = session(SessionOptions::default());
    let id = session.place_from_catalog("base-cabinet").unwrap();

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    session.events().subscribe(
        EventFilter::Categories(vec![EventCategory::Readout]),
        move |e| sink.lock().unwrap().push(e),
    );

    let released = Instant::now();
    session.begin_drag(&id, released);
    session.end_drag(&id, released);
    session.tick(released + Duration::from_secs(5));

    assert_eq!(
        seen.lock().unwrap().as_slice(),
        &[
            LayoutEvent::ReadoutChanged {
                item_id: id.to_string(),
                visible: true
            },
            LayoutEvent::ReadoutChanged {
                item_id: id.to_string(),
                visible: false
            },
        ]
    );
}

#[test]
fn test_readout_follows_host_clock() {
    let mut session = session(SessionOptions::default());
    let id = session.place_from_catalog("base-cabinet").unwrap();

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    session.events().subscribe(
        EventFilter::Categories(vec![EventCategory::Readout]),
        move |e| sink.lock().unwrap().push(e),
    );

    // Host clock running well behind the wall clock
    let host = Instant::now()
        .checked_sub(Duration::from_secs(5))
        .expect("monotonic clock older than 5s");

    session.click_item(&id, host);
    session.begin_drag(&id, host);
    session.end_drag(&id, host);
    assert_eq!(session.click_item(&id, host + Duration::from_millis(100)), None);
    assert!(session.tick(host + Duration::from_secs(3)).is_empty());

    assert_eq!(
        seen.lock().unwrap().as_slice(),
        &[
            LayoutEvent::ReadoutChanged {
                item_id: id.to_string(),
                visible: true
            },
            LayoutEvent::ReadoutChanged {
                item_id: id.to_string(),
                visible: false
            },
        ]
    );
    assert!(!session.readout_visible(&id, host + Duration::from_millis(100)));
}

#[test]
fn test_drag_of_unknown_item() {
    let mut session = session(SessionOptions::default());
    let ghost = "ghost".into();
    assert!(!session.begin_drag(&ghost, Instant::now()));
    assert!(!session.apply_drag_delta(&ghost, &DragDelta::translate(1.0, 1.0)));
    assert!(!session.is_dragging());
}

#[test]
fn test_readout_text_units() {
    let mut metric = session(SessionOptions::default());
    let id = metric.place_from_catalog("base-cabinet").unwrap();
    assert_eq!(
        metric.readout_text(&id).as_deref(),
        Some("cabinet (0.6m × 0.8m × 0.6m)")
    );

    let mut imperial = session(SessionOptions {
        measurement_system: MeasurementSystem::Imperial,
        ..SessionOptions::default()
    });
    let id = imperial.place_from_catalog("refrigerator").unwrap();
    assert_eq!(
        imperial.readout_text(&id).as_deref(),
        Some("appliance (2' 11\" × 5' 11\" × 2' 6\")")
    );
}
