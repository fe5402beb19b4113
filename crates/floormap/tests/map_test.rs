use floormap::error::LoadError;
use floormap::{
    Error, Handler, Layer, MapState, ProductMarker, ProductSource, RecordingSurface, Shape,
    StockStatus, WarehouseMap,
};
use futures::executor::block_on;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Serves scripted responses, one per fetch, in order.
struct ScriptedSource {
    responses: RefCell<VecDeque<Result<Vec<ProductMarker>, LoadError>>>,
}

impl ScriptedSource {
    fn new(responses: Vec<Result<Vec<ProductMarker>, LoadError>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
        }
    }

    fn ok(products: Vec<ProductMarker>) -> Self {
        Self::new(vec![Ok(products)])
    }
}

impl ProductSource for ScriptedSource {
    async fn fetch(&self) -> Result<Vec<ProductMarker>, LoadError> {
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(LoadError::Status(500)))
    }
}

fn product(id: &str, quantity: u64, low_stock: bool, x: f64, y: f64) -> ProductMarker {
    ProductMarker {
        id: id.to_string(),
        name: format!("{id} (display)"),
        quantity,
        low_stock,
        location: "A1".to_string(),
        x,
        y,
    }
}

fn marker_ids(surface: &RecordingSurface) -> Vec<String> {
    surface
        .groups_with_class(Layer::Markers, "product-marker")
        .iter()
        .filter_map(|p| match &p.shape {
            Shape::Group { shapes, .. } => shapes.iter().find_map(|s| match s {
                Shape::Text { content, .. } => Some(content.clone()),
                _ => None,
            }),
            _ => None,
        })
        .collect()
}

#[test]
fn initialize_draws_floor_and_places_one_marker_per_product() {
    let source = ScriptedSource::ok(vec![
        product("LAPTOP123", 0, false, 175.0, 150.0),
        product("MOUSE456", 3, true, 375.0, 150.0),
    ]);
    let mut map = WarehouseMap::new(Some(RecordingSurface::new()), source);
    block_on(map.initialize());

    assert_eq!(map.state(), MapState::Initialized);
    let surface = map.surface().expect("surface");
    assert!(!surface.placed(Layer::Floor).is_empty());
    assert_eq!(marker_ids(surface), vec!["LAPTOP123", "MOUSE456"]);
    assert!(map.last_error().is_none());
}

#[test]
fn initialize_is_idempotent() {
    let source = ScriptedSource::new(vec![Ok(vec![product("X1", 1, false, 100.0, 100.0)])]);
    let mut map = WarehouseMap::new(Some(RecordingSurface::new()), source);
    block_on(map.initialize());
    let floor_shapes = map.surface().expect("surface").placed(Layer::Floor).len();
    let floor_clears = map.surface().expect("surface").clear_count(Layer::Floor);

    block_on(map.initialize());
    let surface = map.surface().expect("surface");
    assert_eq!(surface.placed(Layer::Floor).len(), floor_shapes);
    assert_eq!(surface.clear_count(Layer::Floor), floor_clears);
    // The second call did not refetch either.
    assert_eq!(marker_ids(surface), vec!["X1"]);
}

#[test]
fn missing_surface_leaves_map_uninitialized() {
    let source = ScriptedSource::ok(vec![product("X1", 1, false, 100.0, 100.0)]);
    let mut map: WarehouseMap<RecordingSurface, _> = WarehouseMap::new(None, source);
    block_on(map.initialize());

    assert_eq!(map.state(), MapState::Uninitialized);
    assert!(matches!(map.last_error(), Some(Error::SurfaceMissing)));
    assert!(map.products().is_empty());

    // refresh on an uninitialized map is a no-op, not a panic.
    block_on(map.refresh());
    assert!(map.products().is_empty());
}

#[test]
fn refresh_replaces_markers_wholesale() {
    let source = ScriptedSource::new(vec![
        Ok(vec![
            product("OLD1", 5, false, 120.0, 120.0),
            product("OLD2", 5, false, 140.0, 140.0),
            product("OLD3", 5, false, 160.0, 160.0),
        ]),
        Ok(vec![product("NEW1", 2, true, 400.0, 400.0)]),
    ]);
    let mut map = WarehouseMap::new(Some(RecordingSurface::new()), source);
    block_on(map.initialize());
    assert_eq!(marker_ids(map.surface().expect("surface")).len(), 3);

    block_on(map.refresh());
    let surface = map.surface().expect("surface");
    // Only the later response's markers survive, never a mix.
    assert_eq!(marker_ids(surface), vec!["NEW1"]);
    assert_eq!(map.products().len(), 1);
}

#[test]
fn back_to_back_refreshes_are_last_write_wins() {
    let source = ScriptedSource::new(vec![
        Ok(vec![product("SEED", 1, false, 100.0, 100.0)]),
        Ok(vec![product("FIRST", 1, false, 200.0, 200.0)]),
        Ok(vec![product("SECOND", 1, false, 300.0, 300.0)]),
    ]);
    let mut map = WarehouseMap::new(Some(RecordingSurface::new()), source);
    block_on(map.initialize());
    block_on(map.refresh());
    block_on(map.refresh());

    assert_eq!(marker_ids(map.surface().expect("surface")), vec!["SECOND"]);
}

#[test]
fn failed_refresh_clears_stale_markers_and_annotates_the_overlay() {
    let source = ScriptedSource::new(vec![
        Ok(vec![product("STALE", 9, false, 220.0, 220.0)]),
        Err(LoadError::Status(503)),
    ]);
    let mut map = WarehouseMap::new(Some(RecordingSurface::new()), source);
    block_on(map.initialize());
    let floor_shapes = map.surface().expect("surface").placed(Layer::Floor).len();

    block_on(map.refresh());
    let surface = map.surface().expect("surface");

    // Floor layout survives untouched.
    assert_eq!(surface.placed(Layer::Floor).len(), floor_shapes);
    // No stale markers next to the error annotation.
    assert!(marker_ids(surface).is_empty());
    assert!(map.products().is_empty());
    let overlay = surface.placed(Layer::Overlay);
    assert!(overlay.iter().any(|p| matches!(
        &p.shape,
        Shape::Text { content, .. } if content.contains("Failed to load")
    )));
    assert!(matches!(
        map.last_error(),
        Some(Error::Load(LoadError::Status(503)))
    ));
}

#[test]
fn successful_refresh_after_failure_clears_the_error_annotation() {
    let source = ScriptedSource::new(vec![
        Err(LoadError::Status(500)),
        Ok(vec![product("BACK", 4, false, 250.0, 250.0)]),
    ]);
    let mut map = WarehouseMap::new(Some(RecordingSurface::new()), source);
    block_on(map.initialize());
    assert!(map.last_error().is_some());

    block_on(map.refresh());
    let surface = map.surface().expect("surface");
    assert!(surface.placed(Layer::Overlay).is_empty());
    assert_eq!(marker_ids(surface), vec!["BACK"]);
    assert!(map.last_error().is_none());
}

#[test]
fn markers_carry_tooltip_magnify_and_navigation_handlers() {
    let source = ScriptedSource::ok(vec![product("MOUSE456", 3, true, 375.0, 150.0)]);
    let mut map = WarehouseMap::new(Some(RecordingSurface::new()), source);
    block_on(map.initialize());

    let surface = map.surface().expect("surface");
    let markers = surface.groups_with_class(Layer::Markers, "product-marker");
    assert_eq!(markers.len(), 1);
    let handlers = &markers[0].handlers;
    assert_eq!(handlers.len(), 3);

    let tooltip = handlers
        .iter()
        .find_map(|h| match h {
            Handler::HoverTooltip(t) => Some(t),
            _ => None,
        })
        .expect("tooltip handler");
    assert_eq!(tooltip.quantity, 3);
    assert_eq!(tooltip.status, StockStatus::LowStock);

    assert!(handlers.iter().any(|h| matches!(
        h,
        Handler::ClickNavigate { href } if href == "/product/MOUSE456"
    )));
    assert!(handlers.iter().any(|h| matches!(
        h,
        Handler::HoverMagnify { origin, scale }
            if *origin == (375.0, 150.0) && (*scale - 1.2).abs() < 1e-9
    )));
}
