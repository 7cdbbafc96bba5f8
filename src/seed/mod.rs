use tracing::info;

use crate::models::Product;
use crate::store::Catalog;

/// (id, name, price in cents, category, stock)
static PRODUCTS: &[(i64, &str, i64, &str, i64)] = &[
    (1, "Laptop", 99_999, "Computers", 50),
    (2, "Smartphone", 69_999, "Phones", 100),
    (3, "Headphones", 19_999, "Audio", 200),
    (4, "Tablet", 44_999, "Computers", 75),
    (5, "Smartwatch", 29_999, "Wearables", 150),
];

pub fn sample_products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(|&(id, name, price_cents, category, stock)| {
            Product::new(id, name, price_cents, category, stock)
        })
        .collect()
}

/// Catalog and inventory built from the fixed sample products.
pub fn sample_catalog() -> Catalog {
    let catalog = Catalog::new(sample_products());
    info!(
        products = catalog.products().len(),
        total_items = catalog.total_items(),
        "Loaded sample catalog"
    );
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_and_sequential() {
        let ids: Vec<i64> = sample_products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), ids.len());
    }

    #[test]
    fn every_product_has_a_category_and_positive_price() {
        for p in sample_products() {
            assert!(!p.category.is_empty(), "{} has no category", p.name);
            assert!(p.price_cents > 0);
            assert!(p.stock >= 0);
        }
    }
}
