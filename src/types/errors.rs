use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageSizeError {
    #[error("Page size error: {0} is not one of 25, 50, 75 or 100")]
    Unsupported(u32),
    #[error("Page size error: {0}")]
    ParseInt(#[from] ParseIntError)
}
