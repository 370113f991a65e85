use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Debug;

use super::value_objects::{MaskedCardNumber, PaymentMethod};

/// The variant-specific part of a payment.
///
/// Instruments only add fields to the rendered info; status transitions are
/// owned by [`Payment`](super::Payment).
pub trait PaymentInstrument: Debug {
    fn method(&self) -> PaymentMethod;

    fn extend_info(&self, info: &mut Map<String, Value>);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditCard {
    card_number: MaskedCardNumber,
    holder_name: String,
}

impl CreditCard {
    /// The raw number is masked immediately and never stored.
    pub fn new(card_number: &str, holder_name: impl Into<String>) -> Self {
        Self {
            card_number: MaskedCardNumber::new(card_number),
            holder_name: holder_name.into(),
        }
    }

    pub fn masked_number(&self) -> &MaskedCardNumber {
        &self.card_number
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }
}

impl PaymentInstrument for CreditCard {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::CreditCard
    }

    fn extend_info(&self, info: &mut Map<String, Value>) {
        info.insert("card_number".into(), Value::String(self.card_number.to_string()));
        info.insert("holder".into(), Value::String(self.holder_name.clone()));
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pix {
    key: String,
}

impl Pix {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl PaymentInstrument for Pix {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Pix
    }

    fn extend_info(&self, info: &mut Map<String, Value>) {
        info.insert("pix_key".into(), Value::String(self.key.clone()));
    }
}
