use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::product::Product;

/// A product reference plus how many units were ordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product: Arc<Product>,
    pub quantity: u32,
}

impl OrderItem {
    pub fn new(product: Arc<Product>, quantity: u32) -> Self {
        Self { product, quantity }
    }

    // Not cached: always reflects the product's current price.
    pub fn subtotal(&self) -> Decimal {
        self.product.price() * Decimal::from(self.quantity)
    }
}
