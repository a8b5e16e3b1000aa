use crate::error::SchemaError;
use crate::schema::resolver::SchemaResolver;
use crate::schema::table::TableSchema;
use crate::schema::table_id::TableId;
use log::{debug, info};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::OnceCell;

type Entry = Arc<OnceCell<Arc<TableSchema>>>;

/// Lazily populated map from table to schema.
///
/// Each table is resolved at most once while its entry is cached. Concurrent
/// callers asking for the same table wait on a single resolution instead of
/// racing their own. A failed resolution caches nothing and the next call
/// tries again. Entries are never evicted; `invalidate` drops one explicitly.
pub struct TableSchemaCache {
    resolver: SchemaResolver,
    timeout: Option<Duration>,
    entries: Mutex<HashMap<TableId, Entry>>,
}

impl TableSchemaCache {
    pub fn new(resolver: SchemaResolver) -> Self {
        TableSchemaCache {
            resolver,
            timeout: None,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Bounds every resolution by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub async fn get_schema(&self, table: &TableId) -> Result<Arc<TableSchema>, SchemaError> {
        let entry = self.entry(table);
        if let Some(schema) = entry.get() {
            debug!("get_schema - Cache hit: {}", table);
            return Ok(schema.clone());
        }

        match entry.get_or_try_init(|| self.resolve(table)).await {
            Ok(schema) => Ok(schema.clone()),
            Err(e) => {
                self.discard_empty(table, &entry);
                Err(e)
            }
        }
    }

    /// Returns the cached schema of `table` without resolving it.
    pub fn cached(&self, table: &TableId) -> Option<Arc<TableSchema>> {
        self.lock().get(table).and_then(|entry| entry.get().cloned())
    }

    /// Drops the cached schema of `table` so the next lookup resolves it again.
    pub fn invalidate(&self, table: &TableId) -> Option<Arc<TableSchema>> {
        let removed = self.lock().remove(table);
        debug!("invalidate - Table: {}", table);
        removed.and_then(|entry| entry.get().cloned())
    }

    /// Number of tables with a resolved schema.
    pub fn len(&self) -> usize {
        self.lock().values().filter(|e| e.initialized()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entry(&self, table: &TableId) -> Entry {
        self.lock().entry(table.clone()).or_default().clone()
    }

    /// Removes the entry of `table` if it is still `entry` and holds no schema,
    /// so failed lookups leave nothing behind.
    fn discard_empty(&self, table: &TableId, entry: &Entry) {
        let mut entries = self.lock();
        let unused = entries
            .get(table)
            .map_or(false, |e| Arc::ptr_eq(e, entry) && !e.initialized());
        if unused {
            entries.remove(table);
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<TableId, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn resolve(&self, table: &TableId) -> Result<Arc<TableSchema>, SchemaError> {
        debug!("get_schema - Cache miss: {}", table);

        let resolution = self.resolver.resolve(table);
        let schema = match self.timeout {
            Some(timeout) => match tokio::time::timeout(timeout, resolution).await {
                Ok(result) => result?,
                Err(_) => {
                    return Err(SchemaError::SchemaQueryTimedOut {
                        table: table.clone(),
                        statement: SchemaResolver::statement(table),
                        timeout,
                    })
                }
            },
            None => resolution.await?,
        };

        info!(
            "Resolved schema of {}: {} columns, primary key {:?}",
            table,
            schema.columns.len(),
            schema.primary_key
        );
        Ok(Arc::new(schema))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::connection::MockIntrospectionConnection;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn products() -> TableId {
        TableId::new(Some("inventory"), None, "products")
    }

    fn products_row() -> Vec<Vec<Option<String>>> {
        vec![vec![
            Some("products".to_string()),
            Some("CREATE TABLE `products` (`id` INT NOT NULL, PRIMARY KEY (`id`))".to_string()),
        ]]
    }

    #[tokio::test]
    async fn test_get_schema_resolves_once() {
        let mut connection = MockIntrospectionConnection::new();
        connection
            .expect_query()
            .times(1)
            .returning(|_| Ok(products_row()));

        let cache = TableSchemaCache::new(SchemaResolver::new(Arc::new(connection)));
        assert!(cache.is_empty());
        assert!(cache.cached(&products()).is_none());

        let first = cache.get_schema(&products()).await.unwrap();
        let second = cache.get_schema(&products()).await.unwrap();
        assert_eq!(first, second);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.cached(&products()), Some(first));
    }

    #[tokio::test]
    async fn test_failure_is_not_cached() {
        let failed = AtomicBool::new(false);
        let mut connection = MockIntrospectionConnection::new();
        connection.expect_query().times(2).returning(move |_| {
            if failed.swap(true, Ordering::SeqCst) {
                Ok(products_row())
            } else {
                Ok(vec![])
            }
        });

        let cache = TableSchemaCache::new(SchemaResolver::new(Arc::new(connection)));
        assert!(matches!(
            cache.get_schema(&products()).await,
            Err(SchemaError::SchemaNotFound { .. })
        ));
        assert!(cache.cached(&products()).is_none());
        assert_eq!(cache.len(), 0);
        assert!(cache.lock().is_empty());

        let schema = cache.get_schema(&products()).await.unwrap();
        assert_eq!(schema.primary_key, vec!["id".to_string()]);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_lookups_leave_no_entries() {
        let mut connection = MockIntrospectionConnection::new();
        connection.expect_query().times(100).returning(|_| Ok(vec![]));

        let cache = TableSchemaCache::new(SchemaResolver::new(Arc::new(connection)));
        for i in 0..100 {
            let missing = TableId::new(Some("inventory"), None, &format!("missing_{}", i));
            assert!(cache.get_schema(&missing).await.is_err());
        }
        assert!(cache.lock().is_empty());
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_invalidate_forces_resolution() {
        let mut connection = MockIntrospectionConnection::new();
        connection
            .expect_query()
            .times(2)
            .returning(|_| Ok(products_row()));

        let cache = TableSchemaCache::new(SchemaResolver::new(Arc::new(connection)));
        cache.get_schema(&products()).await.unwrap();

        let removed = cache.invalidate(&products());
        assert!(removed.is_some());
        assert!(cache.is_empty());
        assert!(cache.invalidate(&products()).is_none());

        cache.get_schema(&products()).await.unwrap();
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_distinct_tables_resolve_separately() {
        let mut connection = MockIntrospectionConnection::new();
        connection
            .expect_query()
            .withf(|statement: &str| statement.ends_with("`products`"))
            .times(1)
            .returning(|_| Ok(products_row()));
        connection
            .expect_query()
            .withf(|statement: &str| statement.ends_with("`orders`"))
            .times(1)
            .returning(|_| {
                Ok(vec![vec![
                    Some("orders".to_string()),
                    Some("CREATE TABLE `orders` (`order_id` BIGINT PRIMARY KEY)".to_string()),
                ]])
            });

        let cache = TableSchemaCache::new(SchemaResolver::new(Arc::new(connection)));
        let orders = TableId::new(Some("inventory"), None, "orders");
        let products_schema = cache.get_schema(&products()).await.unwrap();
        let orders_schema = cache.get_schema(&orders).await.unwrap();
        assert_eq!(products_schema.id, products());
        assert_eq!(orders_schema.id, orders);
        assert_eq!(cache.len(), 2);
    }
}
