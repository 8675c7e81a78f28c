use thiserror::Error;

use crate::filters::FilterField;
use crate::models::ModelError;
use crate::types::PageSizeError;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Unknown filter field [{0}]")]
    UnknownField(String),
    #[error("Invalid page [{0}]: pages start at 1")]
    InvalidPage(String),
    #[error("Invalid date [{value}] for filter [{field}]: expected YYYY-MM-DD")]
    InvalidDate {
        field: FilterField,
        value: String
    },
    #[error(transparent)]
    PageSize(#[from] PageSizeError),
    #[error(transparent)]
    Model(#[from] ModelError)
}
