use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Created,
}

#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: u64,
    /// Human-facing reference derived from `id`, e.g. `ORD-00042`.
    pub order_number: String,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(id: u64, items: Vec<OrderItem>) -> Self {
        Self {
            id,
            order_number: format!("ORD-{:05}", id),
            items,
            status: OrderStatus::Created,
            created_at: Utc::now(),
        }
    }
}

// ── Request payloads ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateOrder {
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl CreateOrder {
    /// Shape checks only; product ids are not resolved against the catalog.
    pub fn validate(&self) -> AppResult<()> {
        if self.items.is_empty() {
            return Err(AppError::BadRequest("items must not be empty".to_string()));
        }
        if let Some(item) = self.items.iter().find(|item| item.quantity <= 0) {
            return Err(AppError::BadRequest(format!(
                "quantity must be > 0 (product_id {})",
                item.product_id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: i64, quantity: i64) -> OrderItem {
        OrderItem { product_id, quantity }
    }

    #[test]
    fn empty_items_rejected() {
        let payload = CreateOrder { items: vec![] };
        assert!(matches!(payload.validate(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn missing_items_field_defaults_to_empty() {
        let payload: CreateOrder = serde_json::from_str("{}").unwrap();
        assert!(payload.items.is_empty());
        assert!(payload.validate().is_err());
    }

    #[test]
    fn non_positive_quantity_rejected() {
        for qty in [0, -3] {
            let payload = CreateOrder { items: vec![item(1, 2), item(2, qty)] };
            match payload.validate() {
                Err(AppError::BadRequest(msg)) => assert!(msg.contains("product_id 2"), "{msg}"),
                other => panic!("expected bad request, got {other:?}"),
            }
        }
    }

    #[test]
    fn unknown_product_ids_are_accepted() {
        let payload = CreateOrder { items: vec![item(999, 1)] };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn new_order_is_created_with_padded_number() {
        let order = Order::new(42, vec![item(1, 2)]);
        assert_eq!(order.order_number, "ORD-00042");
        assert_eq!(order.status, OrderStatus::Created);

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["status"], "created");
        assert_eq!(json["items"][0]["quantity"], 2);
    }
}
