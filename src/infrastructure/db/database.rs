use thiserror::Error;

/// Storage-level failures, mapped to repository errors at the store
/// boundary so use cases never see driver details.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("query error: {0}")]
    Query(String),
}
