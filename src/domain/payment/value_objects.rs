use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Payment Value Objects
// ============================================================================

/// Payment lifecycle: `Pending` -> `Processing` -> `Completed`, no skipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Processing,
    Completed,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Processing => write!(f, "processing"),
            PaymentStatus::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    Pix,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::CreditCard => write!(f, "credit_card"),
            PaymentMethod::Pix => write!(f, "pix"),
        }
    }
}

/// Card number that only ever exposes its last four characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskedCardNumber {
    last_four: String,
}

impl MaskedCardNumber {
    pub fn new(card_number: &str) -> Self {
        let chars: Vec<char> = card_number.chars().collect();
        let start = chars.len().saturating_sub(4);

        Self {
            last_four: chars[start..].iter().collect(),
        }
    }

    pub fn last_four(&self) -> &str {
        &self.last_four
    }
}

impl fmt::Display for MaskedCardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "****-****-****-{}", self.last_four)
    }
}
