use super::aggregate::Order;

// ============================================================================
// Order Repositories
// ============================================================================
//
// Append-only, insertion-ordered storage. There is no update or delete.
//
// ============================================================================

/// Storage contract for orders.
pub trait OrderRepository {
    /// Appends the order and returns it unchanged.
    fn save(&mut self, order: Order) -> Order;

    /// First stored order with a matching id, if any.
    fn find_by_id(&self, id: &str) -> Option<&Order>;

    /// Every stored order, in insertion order.
    fn find_all(&self) -> &[Order];
}

impl<R: OrderRepository + ?Sized> OrderRepository for Box<R> {
    fn save(&mut self, order: Order) -> Order {
        (**self).save(order)
    }

    fn find_by_id(&self, id: &str) -> Option<&Order> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> &[Order] {
        (**self).find_all()
    }
}

#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: Vec<Order>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn save(&mut self, order: Order) -> Order {
        self.orders.push(order.clone());
        order
    }

    fn find_by_id(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    fn find_all(&self) -> &[Order] {
        &self.orders
    }
}

/// Wraps another repository and logs every write before delegating.
///
/// Logging never touches the stored state.
#[derive(Debug, Default)]
pub struct DatabaseOrderRepository<R = InMemoryOrderRepository> {
    inner: R,
}

impl DatabaseOrderRepository<InMemoryOrderRepository> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: OrderRepository> DatabaseOrderRepository<R> {
    pub fn wrap(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: OrderRepository> OrderRepository for DatabaseOrderRepository<R> {
    fn save(&mut self, order: Order) -> Order {
        tracing::info!(
            order_id = %order.id,
            customer = %order.customer_name,
            total = %order.total,
            "Saving order to database"
        );
        self.inner.save(order)
    }

    fn find_by_id(&self, id: &str) -> Option<&Order> {
        self.inner.find_by_id(id)
    }

    fn find_all(&self) -> &[Order] {
        self.inner.find_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::LineItem;
    use rust_decimal::Decimal;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Collects formatted log output in memory.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn order(id: &str, customer: &str) -> Order {
        Order::new(id, customer, vec![LineItem::new("Pen", 3)], Decimal::new(15, 0))
    }

    #[test]
    fn test_save_returns_order_unchanged() {
        let mut repo = InMemoryOrderRepository::new();
        let original = order("ORD-1", "Ana");

        let saved = repo.save(original.clone());

        assert_eq!(saved, original);
        assert_eq!(repo.find_all().len(), 1);
    }

    #[test]
    fn test_find_by_id_on_empty_repository() {
        let repo = InMemoryOrderRepository::new();

        assert!(repo.find_by_id("ORD-1").is_none());
        assert!(repo.find_all().is_empty());
    }

    #[test]
    fn test_find_by_id_non_matching() {
        let mut repo = InMemoryOrderRepository::new();
        repo.save(order("ORD-1", "Ana"));

        assert!(repo.find_by_id("ORD-2").is_none());
    }

    #[test]
    fn test_find_by_id_returns_first_match() {
        let mut repo = InMemoryOrderRepository::new();
        repo.save(order("ORD-1", "Ana"));
        repo.save(order("ORD-1", "Bruno"));

        let found = repo.find_by_id("ORD-1").unwrap();
        assert_eq!(found.customer_name, "Ana");
    }

    #[test]
    fn test_find_all_preserves_insertion_order() {
        let mut repo = InMemoryOrderRepository::new();
        repo.save(order("ORD-3", "Carla"));
        repo.save(order("ORD-1", "Ana"));
        repo.save(order("ORD-2", "Bruno"));

        let ids: Vec<&str> = repo.find_all().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD-3", "ORD-1", "ORD-2"]);
    }

    #[test]
    fn test_database_repository_stores_same_state() {
        let mut plain = InMemoryOrderRepository::new();
        let mut logged = DatabaseOrderRepository::new();
        let first = order("ORD-1", "Ana");
        let second = order("ORD-2", "Bruno");

        plain.save(first.clone());
        plain.save(second.clone());
        assert_eq!(logged.save(first.clone()), first);
        logged.save(second);

        assert_eq!(logged.find_all(), plain.find_all());
        assert_eq!(logged.find_by_id("ORD-1"), Some(&first));
        assert_eq!(logged.into_inner().find_all().len(), 2);
    }

    #[test]
    fn test_database_repository_logs_each_save() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let mut repo = DatabaseOrderRepository::wrap(InMemoryOrderRepository::new());

        tracing::subscriber::with_default(subscriber, || {
            repo.save(order("ORD-7", "Ana"));
            repo.save(order("ORD-8", "Bruno"));
        });

        let output = logs.contents();
        assert_eq!(output.matches("Saving order to database").count(), 2);
        assert!(output.contains("order_id=ORD-7"));
        assert!(output.contains("customer=Bruno"));
        assert_eq!(repo.find_all().len(), 2);
    }

    #[test]
    fn test_in_memory_repository_is_silent() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let mut repo = InMemoryOrderRepository::new();

        tracing::subscriber::with_default(subscriber, || {
            repo.save(order("ORD-9", "Carla"));
        });

        assert!(logs.contents().is_empty());
    }
}
