use rust_decimal::Decimal;

use super::aggregate::Order;
use super::errors::ValidationError;
use super::repository::OrderRepository;
use super::validator::OrderValidator;
use super::value_objects::LineItem;

// ============================================================================
// Order Service
// ============================================================================
//
// Orchestrates: build -> validate -> save
//
// Works with any validator and any repository; both are injected at
// construction so new rules or storage can be added without touching this
// type.
//
// ============================================================================

pub struct OrderService<V, R> {
    validator: V,
    repository: R,
}

impl<V: OrderValidator, R: OrderRepository> OrderService<V, R> {
    pub fn new(validator: V, repository: R) -> Self {
        Self {
            validator,
            repository,
        }
    }

    /// Builds a pending order, validates it and stores it.
    ///
    /// Validation failures are returned unchanged and nothing is stored.
    pub fn create_order(
        &mut self,
        id: impl Into<String>,
        customer_name: impl Into<String>,
        items: Vec<LineItem>,
        total: Decimal,
    ) -> Result<Order, ValidationError> {
        let order = Order::new(id, customer_name, items, total);

        if let Err(error) = self.validator.validate(&order) {
            tracing::warn!(order_id = %order.id, error = %error, "Order rejected");
            return Err(error);
        }

        tracing::debug!(order_id = %order.id, "Order passed validation");
        Ok(self.repository.save(order))
    }

    pub fn get_order(&self, id: &str) -> Option<&Order> {
        self.repository.find_by_id(id)
    }

    pub fn get_all_orders(&self) -> &[Order] {
        self.repository.find_all()
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}
