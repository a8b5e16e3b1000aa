use crate::error::{BoxError, CdcResult};
use crate::source::descriptor::SourceDescriptor;
use async_trait::async_trait;
use log::debug;
use mysql_async::prelude::Queryable;
use mysql_async::{OptsBuilder, Pool, Row};

#[cfg(test)]
use mockall::automock;

/// Rows returned by an introspection statement, every value rendered as text.
pub type TextRows = Vec<Vec<Option<String>>>;

/// A handle able to run a structural-introspection statement against the
/// source database.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IntrospectionConnection: Send + Sync {
    async fn query(&self, statement: &str) -> Result<TextRows, BoxError>;
}

/// Introspection connection to a MySQL server.
pub struct MySqlConnection {
    pool: Pool,
}

impl MySqlConnection {
    pub fn new(descriptor: &SourceDescriptor) -> Self {
        let opts = OptsBuilder::default()
            .ip_or_hostname(descriptor.hostname.clone())
            .tcp_port(descriptor.port)
            .user(Some(descriptor.username.clone()))
            .pass(Some(descriptor.password.clone()))
            .db_name(Some(descriptor.database.clone()));

        MySqlConnection {
            pool: Pool::new(opts),
        }
    }

    /// Closes the underlying pool once every checked-out connection is back.
    pub async fn disconnect(&self) -> CdcResult<()> {
        self.pool.clone().disconnect().await?;
        Ok(())
    }
}

#[async_trait]
impl IntrospectionConnection for MySqlConnection {
    async fn query(&self, statement: &str) -> Result<TextRows, BoxError> {
        debug!("query - Statement: {}", statement);

        let mut conn = self.pool.get_conn().await?;
        let rows: Vec<Row> = conn.query(statement).await?;

        Ok(rows.iter().map(row_as_text).collect())
    }
}

fn row_as_text(row: &Row) -> Vec<Option<String>> {
    (0..row.len())
        .map(|i| {
            row.get_opt::<Option<String>, usize>(i)
                .and_then(|value| value.ok())
                .flatten()
        })
        .collect()
}
