use floormap::{ProductMarker, StockStatus};

fn product(id: &str, quantity: u64, low_stock: bool, x: f64, y: f64) -> ProductMarker {
    ProductMarker {
        id: id.to_string(),
        name: id.to_string(),
        quantity,
        low_stock,
        location: "A1".to_string(),
        x,
        y,
    }
}

#[test]
fn zero_quantity_is_red_regardless_of_low_stock() {
    for low_stock in [false, true] {
        let status = StockStatus::of(0, low_stock);
        assert_eq!(status, StockStatus::OutOfStock);
        assert_eq!(status.fill(), "#dc3545");
    }
}

#[test]
fn positive_quantity_with_low_stock_is_yellow() {
    for quantity in [1, 3, 5, 100] {
        let status = StockStatus::of(quantity, true);
        assert_eq!(status, StockStatus::LowStock);
        assert_eq!(status.fill(), "#ffc107");
    }
}

#[test]
fn positive_quantity_without_low_stock_is_green() {
    for quantity in [1, 40, u64::MAX] {
        let status = StockStatus::of(quantity, false);
        assert_eq!(status, StockStatus::InStock);
        assert_eq!(status.fill(), "#28a745");
    }
}

#[test]
fn out_of_stock_laptop_example() {
    let p = product("LAPTOP123", 0, false, 175.0, 150.0);
    assert_eq!(p.status().fill(), "#dc3545");
    assert_eq!(p.status().label(), "Out of Stock");
}

#[test]
fn low_stock_mouse_example() {
    let p = product("MOUSE456", 3, true, 375.0, 150.0);
    assert_eq!(p.status().fill(), "#ffc107");
    assert_eq!(p.status().label(), "Low Stock");
}

#[test]
fn in_stock_monitor_example() {
    let p = product("MONITOR001", 40, false, 575.0, 150.0);
    assert_eq!(p.status().fill(), "#28a745");
    assert_eq!(p.status().label(), "In Stock");
}
