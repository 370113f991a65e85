use rust_decimal::Decimal;

use super::aggregate::Payment;
use super::errors::PaymentError;

// ============================================================================
// Payment Processor
// ============================================================================
//
// Orchestrates: process -> complete -> record
//
// ============================================================================

#[derive(Debug, Default)]
pub struct PaymentProcessor {
    history: Vec<Payment>,
}

impl PaymentProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drives the payment to `Completed` and records it.
    ///
    /// A payment that is not `Pending` is rejected and not recorded.
    pub fn process_payment(&mut self, mut payment: Payment) -> Result<&Payment, PaymentError> {
        payment.process()?.complete()?;

        tracing::info!(
            payment_id = %payment.id(),
            method = %payment.method(),
            amount = %payment.amount(),
            "Payment processed"
        );

        self.history.push(payment);
        let index = self.history.len() - 1;
        Ok(&self.history[index])
    }

    /// Sum of every recorded amount, regardless of status.
    pub fn total_processed(&self) -> Decimal {
        self.history.iter().map(Payment::amount).sum()
    }

    pub fn history(&self) -> &[Payment] {
        &self.history
    }
}
