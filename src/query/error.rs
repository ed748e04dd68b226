use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}
