use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use super::item::OrderItem;
use super::product::Product;
use crate::domain::order::OrderStatus;

// ============================================================================
// Checkout Order - Item Aggregate
// ============================================================================
//
// The total is always derived from the items. Quantities are not checked
// here; a zero quantity simply contributes nothing.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
}

impl Order {
    pub fn new(id: impl Into<String>, customer_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            customer_name: customer_name.into(),
            items: Vec::new(),
            status: OrderStatus::Pending,
        }
    }

    pub fn add_item(&mut self, product: Arc<Product>, quantity: u32) -> &mut Self {
        self.items.push(OrderItem::new(product, quantity));
        self
    }

    pub fn total(&self) -> Decimal {
        self.items.iter().map(OrderItem::subtotal).sum()
    }

    pub fn info(&self) -> Value {
        let items: Vec<Value> = self
            .items
            .iter()
            .map(|item| {
                json!({
                    "product": item.product.name(),
                    "price": item.product.price(),
                    "quantity": item.quantity,
                    "subtotal": item.subtotal(),
                })
            })
            .collect();

        json!({
            "id": self.id,
            "customer": self.customer_name,
            "items": items,
            "total": self.total(),
            "status": self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: i64) -> Arc<Product> {
        Arc::new(Product::new(id, format!("Product {id}"), Decimal::new(price, 0)).unwrap())
    }

    #[test]
    fn test_empty_order_total_is_zero() {
        let order = Order::new("ORD-1", "Ana");

        assert_eq!(order.total(), Decimal::ZERO);
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_add_item_chains_and_keeps_order() {
        let mut order = Order::new("ORD-1", "Ana");

        order
            .add_item(product("P1", 2500), 1)
            .add_item(product("P2", 50), 2)
            .add_item(product("P3", 150), 1);

        let ids: Vec<&str> = order.items.iter().map(|i| i.product.id()).collect();
        assert_eq!(ids, vec!["P1", "P2", "P3"]);
        assert_eq!(order.total(), Decimal::new(2750, 0));
    }

    #[test]
    fn test_info_snapshot() {
        let mut order = Order::new("ORD-1", "Ana");
        order.add_item(product("P2", 50), 2);

        let info = order.info();

        assert_eq!(info["customer"], "Ana");
        assert_eq!(info["items"][0]["product"], "Product P2");
        assert_eq!(info["items"][0]["quantity"], 2);
        assert_eq!(info["items"][0]["subtotal"], "100");
        assert_eq!(info["total"], "100");
        assert_eq!(info["status"], "pending");
    }
}
