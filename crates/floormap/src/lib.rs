#![forbid(unsafe_code)]

//! Headless warehouse floor-map renderer.
//!
//! Draws a fixed warehouse floor layout (walls, storage zones, aisles, dock
//! doors, office, legend) and overlays live product-location markers fetched
//! from a backend endpoint. Marker color is a pure function of the product's
//! stock state; markers link to a product-detail path and carry tooltips.
//!
//! Rendering goes through the small [`surface::Surface`] trait, so marker
//! placement and the color rule are testable without any real rendering
//! target. [`svg::SvgSurface`] is the shipped implementation and emits one
//! standalone SVG document.
//!
//! ```no_run
//! use floormap::{HttpProductSource, SvgSurface, WarehouseMap};
//!
//! # async fn demo() {
//! let source = HttpProductSource::new("http://localhost:5000/api/products_map");
//! let mut map = WarehouseMap::new(Some(SvgSurface::new()), source);
//! map.initialize().await;
//! // ... after backend stock changes:
//! map.refresh().await;
//! let svg = map.surface().map(|s| s.to_svg());
//! # let _ = svg;
//! # }
//! ```

pub mod error;
pub mod layout;
pub mod map;
pub mod model;
pub mod source;
pub mod surface;
pub mod svg;

pub use error::{Error, LoadError, Result};
pub use layout::{FloorPlan, VIEWBOX_HEIGHT, VIEWBOX_WIDTH};
pub use map::{MapOptions, MapState, WarehouseMap};
pub use model::{ProductMarker, StockStatus};
pub use source::{HttpProductSource, JsonFileSource, ProductSource};
pub use surface::{
    Handler, Layer, PlacedShape, RecordingSurface, Shape, ShapeId, Surface, Tooltip,
};
pub use svg::SvgSurface;
