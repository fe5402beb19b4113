use crate::model::StockStatus;

/// Rendering layers, in paint order.
///
/// The floor layer is drawn once at initialization; markers and overlay are
/// cleared and repainted on every load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Floor,
    Markers,
    Overlay,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Floor, Layer::Markers, Layer::Overlay];

    pub(crate) fn index(self) -> usize {
        match self {
            Layer::Floor => 0,
            Layer::Markers => 1,
            Layer::Overlay => 2,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Layer::Floor => "floor",
            Layer::Markers => "markers",
            Layer::Overlay => "overlay",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub weight: FontWeight,
    pub fill: String,
    pub anchor: TextAnchor,
}

impl TextStyle {
    pub fn new(size: f64, fill: impl Into<String>) -> Self {
        Self {
            size,
            weight: FontWeight::Normal,
            fill: fill.into(),
            anchor: TextAnchor::Start,
        }
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    pub fn centered(mut self) -> Self {
        self.anchor = TextAnchor::Middle;
        self
    }
}

/// Drawable primitives understood by every [`Surface`].
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Option<String>,
        stroke: Option<Stroke>,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: String,
        stroke: Option<Stroke>,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Stroke,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        style: TextStyle,
    },
    /// A compound glyph. Handlers attach to the group as a whole.
    Group {
        class: Option<String>,
        shapes: Vec<Shape>,
    },
}

/// Tooltip payload shown on marker hover.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub name: String,
    pub quantity: u64,
    pub location: String,
    pub status: StockStatus,
}

/// Interaction behavior attached to a drawn shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Handler {
    HoverTooltip(Tooltip),
    HoverMagnify { origin: (f64, f64), scale: f64 },
    ClickNavigate { href: String },
}

/// Handle for a shape placed on a surface, used to attach handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(u64);

/// Minimal rendering surface contract.
///
/// Keeps marker placement and the color rule independent of any concrete
/// rendering target; [`crate::svg::SvgSurface`] is the shipped
/// implementation, [`RecordingSurface`] backs the tests.
pub trait Surface {
    /// Removes every shape (and its handlers) from a layer.
    fn clear(&mut self, layer: Layer);

    /// Places a shape on a layer, returning a handle for handler attachment.
    fn draw(&mut self, layer: Layer, shape: Shape) -> ShapeId;

    /// Attaches an interaction handler to a previously drawn shape.
    ///
    /// Unknown ids (e.g. after the owning layer was cleared) are ignored.
    fn attach(&mut self, id: ShapeId, handler: Handler);
}

/// A shape retained by a surface together with its attached handlers.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedShape {
    pub id: ShapeId,
    pub shape: Shape,
    pub handlers: Vec<Handler>,
}

/// Shared retained-mode storage for surface implementations.
#[derive(Debug, Clone, Default)]
pub(crate) struct LayerStore {
    next_id: u64,
    layers: [Vec<PlacedShape>; Layer::ALL.len()],
}

impl LayerStore {
    pub(crate) fn clear(&mut self, layer: Layer) {
        self.layers[layer.index()].clear();
    }

    pub(crate) fn draw(&mut self, layer: Layer, shape: Shape) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.layers[layer.index()].push(PlacedShape {
            id,
            shape,
            handlers: Vec::new(),
        });
        id
    }

    pub(crate) fn attach(&mut self, id: ShapeId, handler: Handler) {
        for layer in &mut self.layers {
            if let Some(placed) = layer.iter_mut().find(|p| p.id == id) {
                placed.handlers.push(handler);
                return;
            }
        }
    }

    pub(crate) fn placed(&self, layer: Layer) -> &[PlacedShape] {
        &self.layers[layer.index()]
    }
}

/// Surface that records draw/clear/attach calls for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    store: LayerStore,
    clears: [usize; Layer::ALL.len()],
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shapes currently retained on a layer, in draw order.
    pub fn placed(&self, layer: Layer) -> &[PlacedShape] {
        self.store.placed(layer)
    }

    /// How many times a layer has been cleared.
    pub fn clear_count(&self, layer: Layer) -> usize {
        self.clears[layer.index()]
    }

    /// Retained top-level groups on a layer carrying the given class.
    pub fn groups_with_class(&self, layer: Layer, class: &str) -> Vec<&PlacedShape> {
        self.store
            .placed(layer)
            .iter()
            .filter(|p| matches!(&p.shape, Shape::Group { class: Some(c), .. } if c == class))
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, layer: Layer) {
        self.clears[layer.index()] += 1;
        self.store.clear(layer);
    }

    fn draw(&mut self, layer: Layer, shape: Shape) -> ShapeId {
        self.store.draw(layer, shape)
    }

    fn attach(&mut self, id: ShapeId, handler: Handler) {
        self.store.attach(id, handler);
    }
}
