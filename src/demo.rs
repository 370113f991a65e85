use anyhow::Result;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use std::sync::Arc;

use crate::config::PipelineConfig;
use crate::domain::checkout::{self, CheckoutService, Product};
use crate::domain::order::{
    BasicOrderValidator, DatabaseOrderRepository, InMemoryOrderRepository, LineItem, OrderService,
    StrictOrderValidator,
};
use crate::domain::payment::{Payment, PaymentProcessor};

// ============================================================================
// Pipeline Walkthroughs
// ============================================================================
//
// Each run_* function builds a few objects, pushes them through one
// pipeline and logs the snapshots. Used by the binary.
//
// ============================================================================

fn money(value: &str) -> Result<Decimal> {
    Ok(Decimal::from_str(value)?)
}

fn log_snapshot(label: &str, snapshot: &Value) -> Result<()> {
    let pretty = serde_json::to_string_pretty(snapshot)?;
    tracing::info!("{label}:\n{pretty}");
    Ok(())
}

/// Order pipeline: same input through a basic and a strict service.
pub fn run_order_demo(config: &PipelineConfig) -> Result<()> {
    tracing::info!("📝 Order pipeline");

    let mut basic = OrderService::new(BasicOrderValidator, InMemoryOrderRepository::new());
    let mut strict = OrderService::new(
        StrictOrderValidator::with_ceiling(config.strict_ceiling),
        DatabaseOrderRepository::new(),
    );

    let items = vec![LineItem::new("Notebook", 1), LineItem::new("Mouse", 1)];
    let order = basic.create_order("ORD-001", "Maria Silva", items.clone(), money("3500.00")?)?;
    log_snapshot("Created order", &order.info())?;

    strict.create_order("ORD-002", "Carlos Lima", items.clone(), money("820.50")?)?;

    // Over the ceiling: accepted by the basic service, refused by the strict one.
    let large = money("15000.00")?;
    basic.create_order("ORD-003", "Grande Empresa", items.clone(), large)?;
    match strict.create_order("ORD-003", "Grande Empresa", items, large) {
        Ok(order) => log_snapshot("Strict service accepted", &order.info())?,
        Err(e) => tracing::warn!(error = %e, "Strict service rejected order"),
    }

    if let Some(found) = basic.get_order("ORD-001") {
        tracing::info!(order_id = %found.id, status = %found.status, "Order lookup");
    }
    tracing::info!(
        basic_count = basic.get_all_orders().len(),
        strict_count = strict.get_all_orders().len(),
        "Stored orders"
    );

    Ok(())
}

/// Payment pipeline: one card payment, one PIX payment.
pub fn run_payment_demo() -> Result<()> {
    tracing::info!("💳 Payment pipeline");

    let mut processor = PaymentProcessor::new();

    let card = Payment::credit_card(money("150.00")?, "1234567890123456", "Joao Souza")?;
    let recorded = processor.process_payment(card)?;
    log_snapshot("Credit card payment", &recorded.info())?;

    let pix = Payment::pix(money("89.90")?, "joao@email.com")?;
    let recorded = processor.process_payment(pix)?;
    log_snapshot("PIX payment", &recorded.info())?;

    tracing::info!(
        payments = processor.history().len(),
        total = %processor.total_processed(),
        "Total processed"
    );
    Ok(())
}

/// Checkout pipeline: item-based order with a tiered discount.
pub fn run_checkout_demo(config: &PipelineConfig) -> Result<()> {
    tracing::info!("🛒 Checkout pipeline");

    let notebook = Arc::new(Product::new("P001", "Notebook", money("2500.00")?)?);
    let mouse = Arc::new(Product::new("P002", "Mouse", money("50.00")?)?);
    let keyboard = Arc::new(Product::new("P003", "Keyboard", money("150.00")?)?);

    let mut order = checkout::Order::new("ORD-101", "Joao Souza");
    order
        .add_item(notebook, 1)
        .add_item(mouse, 1)
        .add_item(keyboard, 1);
    log_snapshot("Order before checkout", &order.info())?;

    let service = CheckoutService::from_config(config);
    let result = service.finalize_order(&mut order)?;
    log_snapshot("Checkout result", &serde_json::to_value(&result)?)?;

    Ok(())
}

/// Runs every pipeline. A validation failure is logged, not returned.
pub fn run_all(config: &PipelineConfig) -> Result<()> {
    for (name, outcome) in [
        ("order", run_order_demo(config)),
        ("payment", run_payment_demo()),
        ("checkout", run_checkout_demo(config)),
    ] {
        if let Err(e) = outcome {
            tracing::warn!(pipeline = name, error = %e, "Pipeline stopped early");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_pipelines_run() {
        let config = PipelineConfig::default();

        assert!(run_order_demo(&config).is_ok());
        assert!(run_payment_demo().is_ok());
        assert!(run_checkout_demo(&config).is_ok());
    }

    #[test]
    fn test_failure_is_contained() {
        // Ceiling low enough that the strict service rejects its first order.
        let config = PipelineConfig::default().with_strict_ceiling(Decimal::ONE);

        assert!(run_order_demo(&config).is_err());
        assert!(run_all(&config).is_ok());
    }
}
