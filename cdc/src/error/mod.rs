pub mod schema;
pub mod validation;

pub use schema::SchemaError;
pub use validation::ValidationError;

use thiserror::Error;

/// Boxed low-level cause carried by collaborator failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type CdcResult<T> = Result<T, CdcError>;

#[derive(Debug, Error)]
pub enum CdcError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("MySQL error: {0}")]
    MySQL(#[from] mysql_async::Error),
}
