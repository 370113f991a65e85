// ============================================================================
// Payment Domain - Sequential Payment Lifecycle
// ============================================================================
//
// - Value objects (PaymentStatus, PaymentMethod, MaskedCardNumber)
// - Errors (PaymentError)
// - Instruments (CreditCard, Pix)
// - Aggregate (Payment)
// - Processor (PaymentProcessor)
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod instrument;
pub mod aggregate;
pub mod processor;

pub use value_objects::*;
pub use errors::*;
pub use instrument::*;
pub use aggregate::*;
pub use processor::*;
