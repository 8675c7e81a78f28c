mod errors;
mod page_size;

use std::str::FromStr;

pub use errors::PageSizeError;
pub use page_size::PageSize;

/// A criterion that either matches every value or exactly one.
///
/// `All` is the sentinel the console shows as "all" and never sends over the wire.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Filter<T> {
    All,
    Only(T)
}

impl<T> Filter<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Filter::All => None,
            Filter::Only(value) => Some(value)
        }
    }
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T: FromStr> FromStr for Filter<T> {
    type Err = T::Err;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            return Ok(Filter::All);
        }

        value.parse().map(Filter::Only)
    }
}
