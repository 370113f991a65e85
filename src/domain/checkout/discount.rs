use rust_decimal::Decimal;

use super::aggregate::Order;
use crate::config::DiscountTiers;

/// Tiered discount on an order total.
#[derive(Debug, Clone, Default)]
pub struct DiscountCalculator {
    tiers: DiscountTiers,
}

impl DiscountCalculator {
    pub fn new(tiers: DiscountTiers) -> Self {
        Self { tiers }
    }

    pub fn calculate_discount(&self, order: &Order) -> Decimal {
        self.discount_for(order.total())
    }

    pub fn discount_for(&self, total: Decimal) -> Decimal {
        total * self.tiers.rate_for(total)
    }
}
