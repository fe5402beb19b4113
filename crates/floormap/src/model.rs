use serde::{Deserialize, Serialize};

/// One located product as returned by the backend map endpoint.
///
/// The record is taken as-is: coordinates, quantity and the `low_stock`
/// flag are backend-owned and never validated or recomputed client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductMarker {
    pub id: String,
    pub name: String,
    pub quantity: u64,
    #[serde(default)]
    pub low_stock: bool,
    pub location: String,
    /// Horizontal position in the fixed 900x700 map coordinate space.
    pub x: f64,
    /// Vertical position in the fixed 900x700 map coordinate space.
    pub y: f64,
}

impl ProductMarker {
    pub fn status(&self) -> StockStatus {
        StockStatus::of(self.quantity, self.low_stock)
    }
}

/// Stock status derived from `(quantity, low_stock)`.
///
/// `quantity == 0` wins over the low-stock flag; the flag only matters for
/// products that are still in stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    pub fn of(quantity: u64, low_stock: bool) -> Self {
        if quantity == 0 {
            Self::OutOfStock
        } else if low_stock {
            Self::LowStock
        } else {
            Self::InStock
        }
    }

    /// Marker fill color for this status.
    pub fn fill(self) -> &'static str {
        match self {
            Self::OutOfStock => "#dc3545",
            Self::LowStock => "#ffc107",
            Self::InStock => "#28a745",
        }
    }

    /// Human-readable status label shown in marker tooltips.
    pub fn label(self) -> &'static str {
        match self {
            Self::OutOfStock => "Out of Stock",
            Self::LowStock => "Low Stock",
            Self::InStock => "In Stock",
        }
    }

    /// Stable token used for `data-status` attributes in emitted SVG.
    pub fn token(self) -> &'static str {
        match self {
            Self::OutOfStock => "out-of-stock",
            Self::LowStock => "low-stock",
            Self::InStock => "in-stock",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_quantity_wins_over_low_stock_flag() {
        assert_eq!(StockStatus::of(0, false), StockStatus::OutOfStock);
        assert_eq!(StockStatus::of(0, true), StockStatus::OutOfStock);
    }

    #[test]
    fn low_stock_flag_only_applies_when_in_stock() {
        assert_eq!(StockStatus::of(3, true), StockStatus::LowStock);
        assert_eq!(StockStatus::of(40, false), StockStatus::InStock);
    }

    #[test]
    fn low_stock_defaults_to_false_when_absent() {
        let product: ProductMarker = serde_json::from_str(
            r#"{"id":"X1","name":"Crate","quantity":7,"location":"A1","x":120.0,"y":140.0}"#,
        )
        .expect("valid payload");
        assert!(!product.low_stock);
        assert_eq!(product.status(), StockStatus::InStock);
    }
}
