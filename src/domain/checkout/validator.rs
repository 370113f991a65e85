use super::aggregate::Order;
use crate::domain::order::ValidationError;

/// Acceptance rules for item-based orders.
///
/// Checks identity fields and item presence only. Quantities and the derived
/// total are deliberately left unchecked.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckoutValidator;

impl CheckoutValidator {
    pub fn validate(&self, order: &Order) -> Result<(), ValidationError> {
        if order.id.is_empty() {
            return Err(ValidationError::MissingId);
        }
        if order.customer_name.is_empty() {
            return Err(ValidationError::MissingCustomerName);
        }
        if order.items.is_empty() {
            return Err(ValidationError::NoItems);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checkout::Product;
    use rust_decimal::Decimal;
    use std::sync::Arc;

    fn pen() -> Arc<Product> {
        Arc::new(Product::new("P1", "Pen", Decimal::new(3, 0)).unwrap())
    }

    #[test]
    fn test_valid_order() {
        let mut order = Order::new("ORD-1", "Ana");
        order.add_item(pen(), 1);

        assert!(CheckoutValidator.validate(&order).is_ok());
    }

    #[test]
    fn test_identity_and_items_required() {
        let mut no_id = Order::new("", "Ana");
        no_id.add_item(pen(), 1);
        let mut no_customer = Order::new("ORD-1", "");
        no_customer.add_item(pen(), 1);
        let empty = Order::new("ORD-1", "Ana");

        assert_eq!(CheckoutValidator.validate(&no_id), Err(ValidationError::MissingId));
        assert_eq!(
            CheckoutValidator.validate(&no_customer),
            Err(ValidationError::MissingCustomerName)
        );
        assert_eq!(CheckoutValidator.validate(&empty), Err(ValidationError::NoItems));
    }

    #[test]
    fn test_zero_quantity_is_not_checked() {
        let mut order = Order::new("ORD-1", "Ana");
        order.add_item(pen(), 0);

        assert_eq!(order.total(), Decimal::ZERO);
        assert!(CheckoutValidator.validate(&order).is_ok());
    }
}
