//! Static floor geometry.
//!
//! The floor plan is constant: a fixed 900x700 coordinate space with outer
//! walls, named storage zones, aisles, dock doors, an office block and a
//! stock-status legend. Product coordinates from the backend are expressed
//! in this same space; nothing here is responsive to them.

use crate::model::StockStatus;
use crate::surface::{Shape, Stroke, TextStyle};

pub const VIEWBOX_WIDTH: f64 = 900.0;
pub const VIEWBOX_HEIGHT: f64 = 700.0;

/// Legend swatch color for a selected marker (selection itself is host UI).
pub const SELECTED_FILL: &str = "#007bff";

const AISLE_COLOR: &str = "#ccc";
const DOCK_FILL: &str = "#ff5722";
const WALL_COLOR: &str = "#333";

#[derive(Debug, Clone)]
pub struct StorageZone {
    pub name: &'static str,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: &'static str,
    pub stroke: &'static str,
}

#[derive(Debug, Clone)]
pub struct Aisle {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub width: f64,
}

#[derive(Debug, Clone)]
pub struct DockDoor {
    pub label: &'static str,
    pub x: f64,
    pub y: f64,
}

/// The full constant floor plan.
#[derive(Debug, Clone)]
pub struct FloorPlan {
    pub zones: Vec<StorageZone>,
    pub aisles: Vec<Aisle>,
    pub docks: Vec<DockDoor>,
}

impl Default for FloorPlan {
    fn default() -> Self {
        Self::standard()
    }
}

impl FloorPlan {
    /// The standard seven-zone warehouse floor.
    pub fn standard() -> Self {
        Self {
            zones: vec![
                zone("Area A", 100.0, 100.0, 150.0, 200.0, "#e3f2fd", "#1976d2"),
                zone("Area B", 300.0, 100.0, 150.0, 200.0, "#f3e5f5", "#7b1fa2"),
                zone("Area C", 500.0, 100.0, 150.0, 200.0, "#e8f5e8", "#388e3c"),
                zone("Area D", 700.0, 100.0, 100.0, 200.0, "#fff3e0", "#f57c00"),
                zone("Area E", 100.0, 350.0, 200.0, 150.0, "#fce4ec", "#c2185b"),
                zone("Area F", 350.0, 350.0, 200.0, 150.0, "#f1f8e9", "#689f38"),
                zone("Area G", 600.0, 350.0, 200.0, 150.0, "#e0f2f1", "#00796b"),
            ],
            aisles: vec![
                Aisle {
                    x1: 50.0,
                    y1: 325.0,
                    x2: 850.0,
                    y2: 325.0,
                    width: 20.0,
                },
                Aisle {
                    x1: 275.0,
                    y1: 50.0,
                    x2: 275.0,
                    y2: 650.0,
                    width: 15.0,
                },
                Aisle {
                    x1: 475.0,
                    y1: 50.0,
                    x2: 475.0,
                    y2: 650.0,
                    width: 15.0,
                },
                Aisle {
                    x1: 675.0,
                    y1: 50.0,
                    x2: 675.0,
                    y2: 650.0,
                    width: 15.0,
                },
            ],
            docks: vec![
                DockDoor {
                    label: "Dock 1",
                    x: 30.0,
                    y: 200.0,
                },
                DockDoor {
                    label: "Dock 2",
                    x: 30.0,
                    y: 300.0,
                },
                DockDoor {
                    label: "Dock 3",
                    x: 30.0,
                    y: 400.0,
                },
            ],
        }
    }

    /// All floor shapes in paint order: walls, zones, aisles, docks,
    /// office, legend.
    pub fn shapes(&self) -> Vec<Shape> {
        let mut out = Vec::new();

        // Outer walls.
        out.push(Shape::Rect {
            x: 50.0,
            y: 50.0,
            width: 800.0,
            height: 600.0,
            fill: None,
            stroke: Some(Stroke::new(WALL_COLOR, 4.0)),
        });

        for zone in &self.zones {
            out.push(Shape::Group {
                class: Some("storage-zone".to_string()),
                shapes: vec![
                    Shape::Rect {
                        x: zone.x,
                        y: zone.y,
                        width: zone.width,
                        height: zone.height,
                        fill: Some(zone.fill.to_string()),
                        stroke: Some(Stroke::new(zone.stroke, 2.0)),
                    },
                    Shape::Text {
                        x: zone.x + zone.width / 2.0,
                        y: zone.y + 20.0,
                        content: zone.name.to_string(),
                        style: TextStyle::new(14.0, "#000").bold().centered(),
                    },
                ],
            });
        }

        for aisle in &self.aisles {
            out.push(Shape::Line {
                x1: aisle.x1,
                y1: aisle.y1,
                x2: aisle.x2,
                y2: aisle.y2,
                stroke: Stroke::new(AISLE_COLOR, aisle.width),
            });
        }

        for dock in &self.docks {
            out.push(Shape::Group {
                class: Some("dock-door".to_string()),
                shapes: vec![
                    Shape::Rect {
                        x: dock.x,
                        y: dock.y,
                        width: 20.0,
                        height: 60.0,
                        fill: Some(DOCK_FILL.to_string()),
                        stroke: None,
                    },
                    Shape::Text {
                        x: dock.x - 5.0,
                        y: dock.y + 40.0,
                        content: dock.label.to_string(),
                        style: TextStyle::new(10.0, "#333"),
                    },
                ],
            });
        }

        out.push(Shape::Group {
            class: Some("office".to_string()),
            shapes: vec![
                Shape::Rect {
                    x: 700.0,
                    y: 550.0,
                    width: 150.0,
                    height: 100.0,
                    fill: Some("#f5f5f5".to_string()),
                    stroke: Some(Stroke::new("#666", 2.0)),
                },
                Shape::Text {
                    x: 775.0,
                    y: 570.0,
                    content: "Office".to_string(),
                    style: TextStyle::new(12.0, "#000").bold().centered(),
                },
            ],
        });

        out.push(legend_shapes());
        out
    }
}

fn zone(
    name: &'static str,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    fill: &'static str,
    stroke: &'static str,
) -> StorageZone {
    StorageZone {
        name,
        x,
        y,
        width,
        height,
        fill,
        stroke,
    }
}

// Legend box anchored at (50, 550); swatch colors mirror the marker rule.
fn legend_shapes() -> Shape {
    const X: f64 = 50.0;
    const Y: f64 = 550.0;

    let mut shapes = vec![
        Shape::Rect {
            x: X,
            y: Y,
            width: 200.0,
            height: 80.0,
            fill: Some("white".to_string()),
            stroke: Some(Stroke::new(AISLE_COLOR, 1.0)),
        },
        Shape::Text {
            x: X + 10.0,
            y: Y + 20.0,
            content: "Legend:".to_string(),
            style: TextStyle::new(12.0, "#000").bold(),
        },
    ];

    let entries = [
        (StockStatus::InStock.fill(), "Normal Stock", 35.0),
        (StockStatus::LowStock.fill(), "Low Stock", 50.0),
        (StockStatus::OutOfStock.fill(), "Out of Stock", 65.0),
    ];
    for (fill, label, dy) in entries {
        shapes.push(Shape::Circle {
            cx: X + 20.0,
            cy: Y + dy,
            r: 4.0,
            fill: fill.to_string(),
            stroke: None,
        });
        shapes.push(Shape::Text {
            x: X + 35.0,
            y: Y + dy + 5.0,
            content: label.to_string(),
            style: TextStyle::new(10.0, "#000"),
        });
    }

    shapes.push(Shape::Circle {
        cx: X + 120.0,
        cy: Y + 35.0,
        r: 4.0,
        fill: SELECTED_FILL.to_string(),
        stroke: None,
    });
    shapes.push(Shape::Text {
        x: X + 135.0,
        y: Y + 40.0,
        content: "Selected".to_string(),
        style: TextStyle::new(10.0, "#000"),
    });

    Shape::Group {
        class: Some("legend".to_string()),
        shapes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_plan_has_seven_zones_three_docks_four_aisles() {
        let plan = FloorPlan::standard();
        assert_eq!(plan.zones.len(), 7);
        assert_eq!(plan.docks.len(), 3);
        assert_eq!(plan.aisles.len(), 4);
    }

    #[test]
    fn all_geometry_stays_inside_the_viewbox() {
        let plan = FloorPlan::standard();
        for zone in &plan.zones {
            assert!(zone.x + zone.width <= VIEWBOX_WIDTH);
            assert!(zone.y + zone.height <= VIEWBOX_HEIGHT);
        }
        for aisle in &plan.aisles {
            assert!(aisle.x2 <= VIEWBOX_WIDTH && aisle.y2 <= VIEWBOX_HEIGHT);
        }
    }

    #[test]
    fn shapes_include_walls_zones_and_legend() {
        let shapes = FloorPlan::standard().shapes();
        // walls + 7 zones + 4 aisles + 3 docks + office + legend
        assert_eq!(shapes.len(), 1 + 7 + 4 + 3 + 1 + 1);
    }
}
