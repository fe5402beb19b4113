//! SVG document surface.
//!
//! Retained-mode [`Surface`] implementation that serializes everything drawn
//! on it into a single standalone SVG document. Interaction handlers map to
//! native SVG affordances: click navigation becomes an `<a>` wrapper, hover
//! tooltips become `<title>` children and hover magnification becomes a CSS
//! `:hover` transform scoped by class.

use crate::layout::{VIEWBOX_HEIGHT, VIEWBOX_WIDTH};
use crate::surface::{
    FontWeight, Handler, Layer, LayerStore, PlacedShape, Shape, ShapeId, Surface, TextAnchor,
};
use std::fmt::Write as _;

#[derive(Debug, Clone)]
pub struct SvgSurface {
    store: LayerStore,
    viewbox_width: f64,
    viewbox_height: f64,
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::with_viewbox(VIEWBOX_WIDTH, VIEWBOX_HEIGHT)
    }

    pub fn with_viewbox(width: f64, height: f64) -> Self {
        Self {
            store: LayerStore::default(),
            viewbox_width: width.max(1.0),
            viewbox_height: height.max(1.0),
        }
    }

    /// Serializes the current surface contents into an SVG document.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            &mut out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" viewBox="0 0 {} {}">"#,
            fmt(self.viewbox_width),
            fmt(self.viewbox_height)
        );
        out.push_str(
            r#"<style>
.product-marker { cursor: pointer; }
.product-marker:hover { transform: scale(var(--hover-scale, 1.2)); }
text { font-family: ui-sans-serif, system-ui, sans-serif; }
</style>
"#,
        );

        for layer in Layer::ALL {
            let placed = self.store.placed(layer);
            if placed.is_empty() {
                continue;
            }
            let _ = writeln!(&mut out, r#"<g class="{}">"#, layer.class_name());
            for p in placed {
                render_placed(&mut out, p);
            }
            out.push_str("</g>\n");
        }

        out.push_str("</svg>\n");
        out
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self, layer: Layer) {
        self.store.clear(layer);
    }

    fn draw(&mut self, layer: Layer, shape: Shape) -> ShapeId {
        self.store.draw(layer, shape)
    }

    fn attach(&mut self, id: ShapeId, handler: Handler) {
        self.store.attach(id, handler);
    }
}

fn render_placed(out: &mut String, placed: &PlacedShape) {
    let mut href = None;
    let mut tooltip = None;
    let mut magnify = None;
    for handler in &placed.handlers {
        match handler {
            Handler::ClickNavigate { href: h } => href = Some(h.as_str()),
            Handler::HoverTooltip(t) => tooltip = Some(t),
            Handler::HoverMagnify { origin, scale } => magnify = Some((*origin, *scale)),
        }
    }

    if let Some(href) = href {
        let _ = write!(out, r#"<a href="{}">"#, escape_xml(href));
    }

    match &placed.shape {
        Shape::Group { class, shapes } => {
            out.push_str("<g");
            if let Some(class) = class {
                let _ = write!(out, r#" class="{}""#, escape_xml(class));
            }
            if let Some(tooltip) = tooltip {
                let _ = write!(out, r#" data-status="{}""#, tooltip.status.token());
            }
            if let Some(((ox, oy), scale)) = magnify {
                let _ = write!(
                    out,
                    r#" style="transform-origin: {}px {}px; --hover-scale: {};""#,
                    fmt(ox),
                    fmt(oy),
                    fmt(scale)
                );
            }
            out.push('>');
            if let Some(tooltip) = tooltip {
                let _ = write!(
                    out,
                    "<title>{}\nQuantity: {}\nLocation: {}\nStatus: {}</title>",
                    escape_xml(&tooltip.name),
                    tooltip.quantity,
                    escape_xml(&tooltip.location),
                    tooltip.status.label()
                );
            }
            for shape in shapes {
                render_shape(out, shape);
            }
            out.push_str("</g>");
        }
        other => render_shape(out, other),
    }

    if href.is_some() {
        out.push_str("</a>");
    }
    out.push('\n');
}

fn render_shape(out: &mut String, shape: &Shape) {
    match shape {
        Shape::Rect {
            x,
            y,
            width,
            height,
            fill,
            stroke,
        } => {
            let _ = write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}""#,
                fmt(*x),
                fmt(*y),
                fmt(*width),
                fmt(*height),
                fill.as_deref().map_or_else(
                    || "none".to_string(),
                    |f| escape_xml(f)
                )
            );
            write_stroke(out, stroke.as_ref());
            out.push_str("/>");
        }
        Shape::Circle {
            cx,
            cy,
            r,
            fill,
            stroke,
        } => {
            let _ = write!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}""#,
                fmt(*cx),
                fmt(*cy),
                fmt(*r),
                escape_xml(fill)
            );
            write_stroke(out, stroke.as_ref());
            out.push_str("/>");
        }
        Shape::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
        } => {
            let _ = write!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                fmt(*x1),
                fmt(*y1),
                fmt(*x2),
                fmt(*y2)
            );
            write_stroke(out, Some(stroke));
            out.push_str("/>");
        }
        Shape::Text {
            x,
            y,
            content,
            style,
        } => {
            let _ = write!(
                out,
                r#"<text x="{}" y="{}" font-size="{}" fill="{}""#,
                fmt(*x),
                fmt(*y),
                fmt(style.size),
                escape_xml(&style.fill)
            );
            if style.weight == FontWeight::Bold {
                out.push_str(r#" font-weight="bold""#);
            }
            if style.anchor == TextAnchor::Middle {
                out.push_str(r#" text-anchor="middle""#);
            }
            let _ = write!(out, ">{}</text>", escape_xml(content));
        }
        Shape::Group { class, shapes } => {
            out.push_str("<g");
            if let Some(class) = class {
                let _ = write!(out, r#" class="{}""#, escape_xml(class));
            }
            out.push('>');
            for shape in shapes {
                render_shape(out, shape);
            }
            out.push_str("</g>");
        }
    }
}

fn write_stroke(out: &mut String, stroke: Option<&crate::surface::Stroke>) {
    if let Some(stroke) = stroke {
        let _ = write!(
            out,
            r#" stroke="{}" stroke-width="{}""#,
            escape_xml(&stroke.color),
            fmt(stroke.width)
        );
    }
}

/// Formats a coordinate with up to three decimals, trimming trailing zeros.
pub(crate) fn fmt(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let r = (v * 1000.0).round() / 1000.0;
    let mut s = format!("{r:.3}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}

pub(crate) fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_trims_trailing_zeros() {
        assert_eq!(fmt(175.0), "175");
        assert_eq!(fmt(12.5), "12.5");
        assert_eq!(fmt(0.125), "0.125");
        assert_eq!(fmt(-0.0001), "0");
        assert_eq!(fmt(f64::NAN), "0");
    }

    #[test]
    fn escape_xml_covers_markup_characters() {
        assert_eq!(
            escape_xml(r#"<Laptop & "Mouse">"#),
            "&lt;Laptop &amp; &quot;Mouse&quot;&gt;"
        );
    }
}
