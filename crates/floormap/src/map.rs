//! The warehouse map component.
//!
//! Owns the rendering surface, the loaded product list and the one-way
//! `Uninitialized -> Initialized` lifecycle. The floor layer is drawn once;
//! markers are destroyed and recreated wholesale on every load. Failures
//! never propagate to the caller: a failed load clears the markers, draws an
//! in-surface annotation and is remembered in [`WarehouseMap::last_error`].

use crate::error::Error;
use crate::layout::FloorPlan;
use crate::model::ProductMarker;
use crate::source::ProductSource;
use crate::surface::{Handler, Layer, Shape, Stroke, Surface, TextStyle, Tooltip};
use tracing::{debug, error, warn};

const LOAD_ERROR_MESSAGE: &str = "Failed to load product locations";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapState {
    Uninitialized,
    Initialized,
}

/// Presentation knobs for marker rendering.
#[derive(Debug, Clone)]
pub struct MapOptions {
    /// Path prefix for click-through navigation; the product id is appended.
    pub detail_path_prefix: String,
    pub marker_radius: f64,
    /// Marker scale factor applied on hover.
    pub hover_scale: f64,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            detail_path_prefix: "/product/".to_string(),
            marker_radius: 8.0,
            hover_scale: 1.2,
        }
    }
}

pub struct WarehouseMap<S, P> {
    surface: Option<S>,
    source: P,
    options: MapOptions,
    plan: FloorPlan,
    products: Vec<ProductMarker>,
    state: MapState,
    last_error: Option<Error>,
}

impl<S: Surface, P: ProductSource> WarehouseMap<S, P> {
    /// `surface` is `None` when the host has no rendering target; the map
    /// then stays uninitialized and every entry point degrades to a logged
    /// no-op.
    pub fn new(surface: Option<S>, source: P) -> Self {
        Self::with_options(surface, source, MapOptions::default())
    }

    pub fn with_options(surface: Option<S>, source: P, options: MapOptions) -> Self {
        Self {
            surface,
            source,
            options,
            plan: FloorPlan::standard(),
            products: Vec::new(),
            state: MapState::Uninitialized,
            last_error: None,
        }
    }

    pub fn state(&self) -> MapState {
        self.state
    }

    /// The product collection backing the current marker set.
    pub fn products(&self) -> &[ProductMarker] {
        &self.products
    }

    /// The most recent failure, if the last operation did not succeed.
    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Draws the floor once and performs the first product load.
    ///
    /// Idempotent: a second call on an initialized map does nothing. With no
    /// surface the map logs a diagnostic and stays uninitialized.
    pub async fn initialize(&mut self) {
        if self.state == MapState::Initialized {
            return;
        }
        if self.surface.is_none() {
            error!("warehouse map surface not found; map stays uninitialized");
            self.last_error = Some(Error::SurfaceMissing);
            return;
        }

        self.draw_floor();
        self.state = MapState::Initialized;
        self.load_products().await;
        debug!("warehouse map initialized");
    }

    /// Re-fetches products and repaints markers; the floor is not redrawn.
    pub async fn refresh(&mut self) {
        if self.state == MapState::Uninitialized {
            debug!("refresh ignored: map not initialized");
            return;
        }
        self.load_products().await;
    }

    async fn load_products(&mut self) {
        match self.source.fetch().await {
            Ok(products) => {
                debug!(count = products.len(), "product locations loaded");
                self.products = products;
                self.last_error = None;
                self.place_product_markers();
            }
            Err(err) => {
                warn!(error = %err, "failed to load product locations");
                // Stale markers never survive next to a load error: the
                // marker layer and the collection are cleared together.
                self.products.clear();
                self.last_error = Some(Error::Load(err));
                self.show_load_error();
            }
        }
    }

    fn draw_floor(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        surface.clear(Layer::Floor);
        for shape in self.plan.shapes() {
            surface.draw(Layer::Floor, shape);
        }
    }

    /// Repaints the marker layer: one marker per product, in received order.
    fn place_product_markers(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        surface.clear(Layer::Markers);
        surface.clear(Layer::Overlay);
        for product in &self.products {
            add_product_marker(surface, &self.options, product);
        }
    }

    fn show_load_error(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        surface.clear(Layer::Markers);
        surface.clear(Layer::Overlay);
        surface.draw(
            Layer::Overlay,
            Shape::Text {
                x: 450.0,
                y: 350.0,
                content: LOAD_ERROR_MESSAGE.to_string(),
                style: TextStyle::new(16.0, "#dc3545").centered(),
            },
        );
    }
}

fn add_product_marker<S: Surface>(surface: &mut S, options: &MapOptions, product: &ProductMarker) {
    let status = product.status();

    let id = surface.draw(
        Layer::Markers,
        Shape::Group {
            class: Some("product-marker".to_string()),
            shapes: vec![
                Shape::Circle {
                    cx: product.x,
                    cy: product.y,
                    r: options.marker_radius,
                    fill: status.fill().to_string(),
                    stroke: Some(Stroke::new("#fff", 2.0)),
                },
                Shape::Text {
                    x: product.x,
                    y: product.y + 3.0,
                    content: product.id.clone(),
                    style: TextStyle::new(10.0, "#fff").bold().centered(),
                },
            ],
        },
    );

    surface.attach(
        id,
        Handler::HoverTooltip(Tooltip {
            name: product.name.clone(),
            quantity: product.quantity,
            location: product.location.clone(),
            status,
        }),
    );
    surface.attach(
        id,
        Handler::HoverMagnify {
            origin: (product.x, product.y),
            scale: options.hover_scale,
        },
    );
    surface.attach(
        id,
        Handler::ClickNavigate {
            href: format!("{}{}", options.detail_path_prefix, product.id),
        },
    );
}
