use serde::Serialize;

use super::Product;

/// Stock below this is reported as low.
pub const LOW_STOCK_THRESHOLD: i64 = 100;

/// One product's stock line, used for the low-stock report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryEntry {
    pub product_id: i64,
    pub name: String,
    pub stock: i64,
}

impl From<&Product> for InventoryEntry {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            stock: product.stock,
        }
    }
}
