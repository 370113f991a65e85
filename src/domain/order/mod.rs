// ============================================================================
// Order Domain - Validate and Store Simple Orders
// ============================================================================
//
// - Value objects (LineItem, OrderStatus)
// - Errors (ValidationError)
// - Aggregate (Order)
// - Validators (BasicOrderValidator, StrictOrderValidator)
// - Repositories (InMemoryOrderRepository, DatabaseOrderRepository)
// - Service (OrderService)
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod aggregate;
pub mod validator;
pub mod repository;
pub mod service;

pub use value_objects::*;
pub use errors::*;
pub use aggregate::*;
pub use validator::*;
pub use repository::*;
pub use service::*;
