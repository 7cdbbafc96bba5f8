//! In-memory data: a read-only catalog and an append-only order book.
//! Nothing here survives a restart.

use indexmap::IndexMap;

use crate::error::{AppError, AppResult};
use crate::models::{InventoryEntry, Order, OrderItem, Product};

// ── Catalog ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    /// product_id → available quantity, in catalog order
    inventory: IndexMap<i64, i64>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        let inventory = products.iter().map(|p| (p.id, p.stock)).collect();
        Self { products, inventory }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: i64) -> AppResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
    }

    pub fn inventory(&self) -> &IndexMap<i64, i64> {
        &self.inventory
    }

    pub fn total_items(&self) -> i64 {
        self.inventory.values().sum()
    }

    pub fn low_stock(&self, threshold: i64) -> Vec<InventoryEntry> {
        self.products
            .iter()
            .filter(|p| p.stock < threshold)
            .map(InventoryEntry::from)
            .collect()
    }
}

// ── Orders ────────────────────────────────────────────────────────────────────

/// Orders are never removed and do not touch inventory.
#[derive(Debug)]
pub struct OrderBook {
    orders: Vec<Order>,
    next_id: u64,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self {
            orders: Vec::new(),
            next_id: 1,
        }
    }
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, items: Vec<OrderItem>) -> Order {
        let order = Order::new(self.next_id, items);
        self.next_id += 1;
        self.orders.push(order.clone());
        order
    }

    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, id: u64) -> AppResult<&Order> {
        self.orders
            .iter()
            .find(|o| o.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", id)))
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }
}
