use std::path::PathBuf;
use std::time::Instant;

use kitchenplan::{
    init_logging, session_from_config, Config, DragDelta, DropPayload, EventFilter, ItemKind,
    LayoutEvent, Viewport, BUILD_DATE, VERSION,
};

/// Headless run: builds a session from the config file given on the
/// command line (or the platform default), lays out a small kitchen and
/// prints the resulting snapshot as JSON.
fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("KitchenPlan {} ({})", VERSION, BUILD_DATE);

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => Config::load_from_file(&path)?,
        None => Config::load_or_default()?,
    };

    let mut session = session_from_config(&config);
    session.events().subscribe(EventFilter::All, |event: LayoutEvent| {
        tracing::debug!("{:?}", event);
    });
    session.set_viewport(Viewport::with_size(800.0, 600.0));

    let fridge = session.place_from_catalog("refrigerator");
    let _cabinet = session.place_from_drop(
        &DropPayload::CatalogKey("base-cabinet".to_string()),
        200.0,
        150.0,
    );
    let _counter = session.place_from_drop(&DropPayload::Kind(ItemKind::Countertop), 400.0, 150.0);

    if let Some(id) = &fridge {
        let pressed = Instant::now();
        session.begin_drag(id, pressed);
        session.apply_drag_delta(id, &DragDelta::translate(-10.0, -10.0));
        session.end_drag(id, pressed);
        if let Some(text) = session.readout_text(id) {
            tracing::info!("Refrigerator: {}", text);
        }
    }

    let snapshot = session.snapshot();
    tracing::info!(
        "{} items placed, diagram {}x{} px",
        snapshot.items.len(),
        session.diagram().width,
        session.diagram().height
    );
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
