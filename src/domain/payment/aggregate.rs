use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use uuid::Uuid;

use super::errors::PaymentError;
use super::instrument::{CreditCard, PaymentInstrument, Pix};
use super::value_objects::{PaymentMethod, PaymentStatus};

// ============================================================================
// Payment Aggregate - Lifecycle Logic
// ============================================================================

#[derive(Debug)]
pub struct Payment {
    id: Uuid,
    amount: Decimal,
    status: PaymentStatus,
    completed_at: Option<DateTime<Utc>>,
    instrument: Box<dyn PaymentInstrument>,
}

impl Payment {
    /// Creates a pending payment. The amount must be positive.
    pub fn new(amount: Decimal, instrument: Box<dyn PaymentInstrument>) -> Result<Self, PaymentError> {
        if amount <= Decimal::ZERO {
            return Err(PaymentError::NonPositiveAmount(amount));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            amount,
            status: PaymentStatus::Pending,
            completed_at: None,
            instrument,
        })
    }

    pub fn credit_card(
        amount: Decimal,
        card_number: &str,
        holder_name: impl Into<String>,
    ) -> Result<Self, PaymentError> {
        Self::new(amount, Box::new(CreditCard::new(card_number, holder_name)))
    }

    pub fn pix(amount: Decimal, key: impl Into<String>) -> Result<Self, PaymentError> {
        Self::new(amount, Box::new(Pix::new(key)))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    pub fn method(&self) -> PaymentMethod {
        self.instrument.method()
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// `Pending` -> `Processing`.
    pub fn process(&mut self) -> Result<&mut Self, PaymentError> {
        self.transition(PaymentStatus::Pending, PaymentStatus::Processing)?;
        Ok(self)
    }

    /// `Processing` -> `Completed`, stamping the completion time.
    pub fn complete(&mut self) -> Result<&mut Self, PaymentError> {
        self.transition(PaymentStatus::Processing, PaymentStatus::Completed)?;
        self.completed_at = Some(Utc::now());
        Ok(self)
    }

    fn transition(&mut self, expected: PaymentStatus, next: PaymentStatus) -> Result<(), PaymentError> {
        if self.status != expected {
            return Err(PaymentError::InvalidStatusTransition {
                from: self.status,
                to: next,
            });
        }

        tracing::debug!(payment_id = %self.id, from = %self.status, to = %next, "Payment status changed");
        self.status = next;
        Ok(())
    }

    /// Base fields plus whatever the instrument contributes.
    pub fn info(&self) -> Value {
        let mut info = json!({
            "id": self.id,
            "amount": self.amount,
            "method": self.method(),
            "status": self.status,
            "completed_at": self.completed_at,
        });

        if let Value::Object(fields) = &mut info {
            self.instrument.extend_info(fields);
        }
        info
    }
}
