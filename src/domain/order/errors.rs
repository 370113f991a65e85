use rust_decimal::Decimal;

// ============================================================================
// Order Validation Errors
// ============================================================================

/// Raised by validators when an order breaks an acceptance rule.
///
/// Services propagate it to the caller unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Order ID is required")]
    MissingId,

    #[error("Customer name is required")]
    MissingCustomerName,

    #[error("Order must have at least one item")]
    NoItems,

    #[error("Order total must be greater than zero, got {0}")]
    NonPositiveTotal(Decimal),

    #[error("Order total {total} exceeds the maximum allowed of {ceiling}")]
    CeilingExceeded { total: Decimal, ceiling: Decimal },

    #[error("Product price cannot be negative, got {0}")]
    NegativePrice(Decimal),
}

impl ValidationError {
    /// Human-readable reason, as shown to the caller.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}
