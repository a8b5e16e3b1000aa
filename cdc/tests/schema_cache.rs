use async_trait::async_trait;
use cdc::error::BoxError;
use cdc::schema::connection::{IntrospectionConnection, TextRows};
use cdc::{SchemaError, SchemaResolver, TableId, TableSchemaCache};
use futures::future::join_all;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

const CUSTOMERS_DDL: &str = "CREATE TABLE `customers` (
  `id` int NOT NULL AUTO_INCREMENT,
  `first_name` varchar(255) NOT NULL,
  `last_name` varchar(255) NOT NULL,
  `email` varchar(255) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin NOT NULL,
  PRIMARY KEY (`id`),
  UNIQUE KEY `email` (`email`)
) ENGINE=InnoDB AUTO_INCREMENT=1005 DEFAULT CHARSET=latin1";

/// Answers `SHOW CREATE TABLE` after a delay and counts the statements it ran.
struct CountingConnection {
    calls: AtomicUsize,
    delay: Duration,
    ddl: Option<&'static str>,
}

impl CountingConnection {
    fn new(delay: Duration, ddl: Option<&'static str>) -> Arc<Self> {
        Arc::new(CountingConnection {
            calls: AtomicUsize::new(0),
            delay,
            ddl,
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IntrospectionConnection for CountingConnection {
    async fn query(&self, _statement: &str) -> Result<TextRows, BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        Ok(self
            .ddl
            .map(|ddl| vec![vec![Some("customers".to_string()), Some(ddl.to_string())]])
            .unwrap_or_default())
    }
}

fn customers() -> TableId {
    TableId::new(Some("inventory"), None, "customers")
}

#[tokio::test]
async fn test_get_schema_is_idempotent() {
    let connection = CountingConnection::new(Duration::ZERO, Some(CUSTOMERS_DDL));
    let cache = TableSchemaCache::new(SchemaResolver::new(connection.clone()));

    let first = cache.get_schema(&customers()).await.unwrap();
    let second = cache.get_schema(&customers()).await.unwrap();

    assert_eq!(*first, *second);
    assert_eq!(connection.calls(), 1);
    assert_eq!(
        first.column_names(),
        vec!["id", "first_name", "last_name", "email"]
    );
    assert_eq!(first.primary_key, vec!["id".to_string()]);
    assert!(first.columns.iter().all(|c| !c.nullable));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_lookups_resolve_once() {
    let connection = CountingConnection::new(Duration::from_millis(50), Some(CUSTOMERS_DDL));
    let cache = Arc::new(TableSchemaCache::new(SchemaResolver::new(
        connection.clone(),
    )));

    let lookups = (0..16).map(|_| {
        let cache = cache.clone();
        tokio::spawn(async move { cache.get_schema(&customers()).await })
    });
    let results = join_all(lookups).await;

    let schemas: Vec<_> = results
        .into_iter()
        .map(|joined| joined.unwrap().unwrap())
        .collect();
    assert_eq!(connection.calls(), 1);
    assert!(schemas.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    assert_eq!(cache.len(), 1);
}

#[tokio::test]
async fn test_missing_schema_is_retried() {
    let connection = CountingConnection::new(Duration::ZERO, None);
    let cache = TableSchemaCache::new(SchemaResolver::new(connection.clone()));

    for attempt in 1..=2 {
        match cache.get_schema(&customers()).await {
            Err(SchemaError::SchemaNotFound { table, .. }) => assert_eq!(table, customers()),
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(connection.calls(), attempt);
        assert!(cache.cached(&customers()).is_none());
    }
}

#[tokio::test(start_paused = true)]
async fn test_resolution_timeout() {
    let connection = CountingConnection::new(Duration::from_secs(60), Some(CUSTOMERS_DDL));
    let cache = TableSchemaCache::new(SchemaResolver::new(connection.clone()))
        .with_timeout(Duration::from_secs(5));

    let err = cache.get_schema(&customers()).await.unwrap_err();
    match &err {
        SchemaError::SchemaQueryTimedOut {
            table,
            statement,
            timeout,
        } => {
            assert_eq!(table, &customers());
            assert_eq!(statement, "SHOW CREATE TABLE `inventory`.`customers`");
            assert_eq!(*timeout, Duration::from_secs(5));
        }
        e => panic!("unexpected error: {:?}", e),
    }
    assert_eq!(err.table(), &customers());
    assert!(cache.is_empty());
}
