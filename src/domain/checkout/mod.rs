// ============================================================================
// Checkout Domain - Orders Built From Products
// ============================================================================
//
// - Product and OrderItem (subtotal)
// - Order aggregate (derived total)
// - CheckoutValidator
// - DiscountCalculator (tiered)
// - CheckoutService (finalization)
//
// Shares OrderStatus and ValidationError with the order domain.
//
// ============================================================================

pub mod product;
pub mod item;
pub mod aggregate;
pub mod validator;
pub mod discount;
pub mod service;

pub use product::*;
pub use item::*;
pub use aggregate::*;
pub use validator::*;
pub use discount::*;
pub use service::*;
