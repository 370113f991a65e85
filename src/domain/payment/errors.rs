use rust_decimal::Decimal;

use super::value_objects::PaymentStatus;

// ============================================================================
// Payment Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PaymentError {
    #[error("Payment amount must be greater than zero, got {0}")]
    NonPositiveAmount(Decimal),

    #[error("Cannot move payment from {from} to {to}")]
    InvalidStatusTransition {
        from: PaymentStatus,
        to: PaymentStatus,
    },
}
