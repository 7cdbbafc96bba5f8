use serde::{Serialize, Serializer};

/// Catalog entry. Fixed at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Price stored as integer cents, serialized as `price` in dollars (e.g. 999.99)
    #[serde(rename = "price", serialize_with = "cents_as_dollars")]
    pub price_cents: i64,
    pub category: String,
    pub stock: i64,
}

impl Product {
    pub fn new(id: i64, name: &str, price_cents: i64, category: &str, stock: i64) -> Self {
        Self {
            id,
            name: name.to_string(),
            price_cents,
            category: category.to_string(),
            stock,
        }
    }
}

fn cents_as_dollars<S: Serializer>(cents: &i64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(*cents as f64 / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_price_as_decimal() {
        let p = Product::new(3, "Headphones", 19_999, "Audio", 200);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["name"], "Headphones");
        assert_eq!(json["category"], "Audio");
        assert_eq!(json["stock"], 200);
        assert!((json["price"].as_f64().unwrap() - 199.99).abs() < 1e-9);
        assert!(json.get("price_cents").is_none());
    }
}
