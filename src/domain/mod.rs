// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Three independent pipelines, each in its own subdirectory:
// - order:    validate and store simple orders
// - payment:  drive payments through their lifecycle
// - checkout: price item-based orders and apply discounts
//
// ============================================================================

pub mod order;
pub mod payment;
pub mod checkout;
