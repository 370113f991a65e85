use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::order::ValidationError;

/// Catalog entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: String,
    name: String,
    price: Decimal,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
    ) -> Result<Self, ValidationError> {
        if price < Decimal::ZERO {
            return Err(ValidationError::NegativePrice(price));
        }

        Ok(Self {
            id: id.into(),
            name: name.into(),
            price,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_creation() {
        let product = Product::new("P001", "Notebook", Decimal::new(2500, 0)).unwrap();

        assert_eq!(product.id(), "P001");
        assert_eq!(product.name(), "Notebook");
        assert_eq!(product.price(), Decimal::new(2500, 0));
    }

    #[test]
    fn test_free_product_allowed() {
        assert!(Product::new("P000", "Sticker", Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = Product::new("P002", "Broken", Decimal::new(-1, 0)).unwrap_err();
        assert_eq!(err, ValidationError::NegativePrice(Decimal::new(-1, 0)));
    }
}
