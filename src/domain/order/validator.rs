use rust_decimal::Decimal;

use super::aggregate::Order;
use super::errors::ValidationError;
use crate::config::DEFAULT_STRICT_CEILING;

// ============================================================================
// Order Validators
// ============================================================================
//
// Checks run in a fixed priority order and stop at the first violation:
// identity fields -> item presence -> total positivity -> total ceiling.
//
// ============================================================================

/// Acceptance rules applied to an order before it is stored.
pub trait OrderValidator {
    fn validate(&self, order: &Order) -> Result<(), ValidationError>;
}

impl<V: OrderValidator + ?Sized> OrderValidator for Box<V> {
    fn validate(&self, order: &Order) -> Result<(), ValidationError> {
        (**self).validate(order)
    }
}

impl<V: OrderValidator + ?Sized> OrderValidator for &V {
    fn validate(&self, order: &Order) -> Result<(), ValidationError> {
        (**self).validate(order)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BasicOrderValidator;

impl OrderValidator for BasicOrderValidator {
    fn validate(&self, order: &Order) -> Result<(), ValidationError> {
        if order.id.is_empty() {
            return Err(ValidationError::MissingId);
        }
        if order.customer_name.is_empty() {
            return Err(ValidationError::MissingCustomerName);
        }
        if order.items.is_empty() {
            return Err(ValidationError::NoItems);
        }
        if order.total <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveTotal(order.total));
        }
        Ok(())
    }
}

/// Basic rules plus an upper bound on the order total.
#[derive(Debug, Clone)]
pub struct StrictOrderValidator {
    base: BasicOrderValidator,
    ceiling: Decimal,
}

impl Default for StrictOrderValidator {
    fn default() -> Self {
        Self::with_ceiling(DEFAULT_STRICT_CEILING)
    }
}

impl StrictOrderValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ceiling(ceiling: Decimal) -> Self {
        Self {
            base: BasicOrderValidator,
            ceiling,
        }
    }

    pub fn ceiling(&self) -> Decimal {
        self.ceiling
    }
}

impl OrderValidator for StrictOrderValidator {
    fn validate(&self, order: &Order) -> Result<(), ValidationError> {
        self.base.validate(order)?;

        if order.total > self.ceiling {
            return Err(ValidationError::CeilingExceeded {
                total: order.total,
                ceiling: self.ceiling,
            });
        }
        Ok(())
    }
}
