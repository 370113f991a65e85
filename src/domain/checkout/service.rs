use rust_decimal::Decimal;
use serde::Serialize;

use super::aggregate::Order;
use super::discount::DiscountCalculator;
use super::validator::CheckoutValidator;
use crate::config::PipelineConfig;
use crate::domain::order::{OrderStatus, ValidationError};

/// Outcome of a successful checkout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalizedOrder {
    pub order: Order,
    pub discount: Decimal,
    pub total: Decimal,
    pub final_total: Decimal,
}

#[derive(Debug, Clone, Default)]
pub struct CheckoutService {
    validator: CheckoutValidator,
    calculator: DiscountCalculator,
}

impl CheckoutService {
    pub fn new(validator: CheckoutValidator, calculator: DiscountCalculator) -> Self {
        Self {
            validator,
            calculator,
        }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(
            CheckoutValidator,
            DiscountCalculator::new(config.discount_tiers.clone()),
        )
    }

    /// Validates the order, prices it and marks it completed.
    ///
    /// On a validation error the order is left untouched.
    pub fn finalize_order(&self, order: &mut Order) -> Result<FinalizedOrder, ValidationError> {
        self.validator.validate(order)?;

        let total = order.total();
        let discount = self.calculator.calculate_discount(order);
        order.status = OrderStatus::Completed;

        tracing::info!(
            order_id = %order.id,
            total = %total,
            discount = %discount,
            "Order finalized"
        );

        Ok(FinalizedOrder {
            order: order.clone(),
            discount,
            total,
            final_total: total - discount,
        })
    }
}
