use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::value_objects::{LineItem, OrderStatus};

// ============================================================================
// Order - Simple Data Holder
// ============================================================================
//
// The total is supplied by the caller rather than derived from the lines.
// Acceptance rules live in the validators, not here.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub items: Vec<LineItem>,
    pub total: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Builds a new order in `Pending` status.
    pub fn new(
        id: impl Into<String>,
        customer_name: impl Into<String>,
        items: Vec<LineItem>,
        total: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            customer_name: customer_name.into(),
            items,
            total,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Structured snapshot for display.
    pub fn info(&self) -> Value {
        json!({
            "id": self.id,
            "customer": self.customer_name,
            "items": self.items,
            "total": self.total,
            "status": self.status,
            "created_at": self.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> Order {
        Order::new(
            "ORD-001",
            "Maria Silva",
            vec![LineItem::new("Notebook", 1), LineItem::new("Mouse", 2)],
            Decimal::new(350000, 2),
        )
    }

    #[test]
    fn test_new_order_is_pending() {
        let order = sample_order();

        assert_eq!(order.id, "ORD-001");
        assert_eq!(order.customer_name, "Maria Silva");
        assert_eq!(order.item_count(), 2);
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_info_snapshot() {
        let info = sample_order().info();

        assert_eq!(info["id"], "ORD-001");
        assert_eq!(info["customer"], "Maria Silva");
        assert_eq!(info["status"], "pending");
        assert_eq!(info["total"], "3500.00");
        assert_eq!(info["items"].as_array().unwrap().len(), 2);
    }
}
