use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Unknown transaction type [{0}]")]
    UnknownTransactionType(String),
    #[error("Unknown transaction status [{0}]")]
    UnknownStatus(String)
}
