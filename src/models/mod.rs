mod errors;
mod raw;
mod stats;
mod transaction;

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};

pub use errors::ModelError;
pub use raw::RawRecord;
pub use stats::AggregateStats;
pub use transaction::Transaction;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Investment,
    Withdrawal,
    Return,
    Team,
    Bonus,
    Other
}

impl TransactionType {
    /// Lenient mapping used for backend values. Anything unrecognized becomes `Other`.
    pub fn from_raw(value: &str) -> Self {
        value.parse().unwrap_or(TransactionType::Other)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Investment => "investment",
            TransactionType::Withdrawal => "withdrawal",
            TransactionType::Return => "return",
            TransactionType::Team => "team",
            TransactionType::Bonus => "bonus",
            TransactionType::Other => "other"
        }
    }
}

impl FromStr for TransactionType {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "investment" => Ok(TransactionType::Investment),
            "withdrawal" => Ok(TransactionType::Withdrawal),
            "return" => Ok(TransactionType::Return),
            "team" => Ok(TransactionType::Team),
            "bonus" => Ok(TransactionType::Bonus),
            "other" => Ok(TransactionType::Other),
            _ => Err(ModelError::UnknownTransactionType(value.to_string()))
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Canonical transaction status.
///
/// Backend spellings outside the known synonym sets are kept verbatim (title-cased)
/// in `Other` rather than being collapsed into `Unknown`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum TransactionStatus {
    Success,
    Pending,
    Failed,
    Unknown,
    Other(String)
}

impl TransactionStatus {
    /// Lenient mapping used for backend values. Never fails.
    pub fn from_raw(value: &str) -> Self {
        let value = value.trim();

        match value.to_lowercase().as_str() {
            "" | "unknown" => TransactionStatus::Unknown,
            "success" | "completed" => TransactionStatus::Success,
            "pending" => TransactionStatus::Pending,
            "failed" | "fail" | "rejected" => TransactionStatus::Failed,
            _ => TransactionStatus::Other(title_case(value))
        }
    }

    /// Value used for this status in outbound query parameters.
    pub fn wire_value(&self) -> String {
        self.to_string().to_lowercase()
    }
}

/// Strict parsing for user-chosen filters: only the four canonical statuses are accepted.
impl FromStr for TransactionStatus {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().is_empty() {
            return Err(ModelError::UnknownStatus(value.to_string()));
        }

        match TransactionStatus::from_raw(value) {
            TransactionStatus::Other(_) => Err(ModelError::UnknownStatus(value.to_string())),
            status => Ok(status)
        }
    }
}

impl Display for TransactionStatus {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TransactionStatus::Success => formatter.write_str("Success"),
            TransactionStatus::Pending => formatter.write_str("Pending"),
            TransactionStatus::Failed => formatter.write_str("Failed"),
            TransactionStatus::Unknown => formatter.write_str("Unknown"),
            TransactionStatus::Other(value) => formatter.write_str(value)
        }
    }
}

impl Serialize for TransactionStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

fn title_case(value: &str) -> String {
    let mut characters = value.chars();

    match characters.next() {
        Some(first) => first.to_uppercase().chain(characters.flat_map(char::to_lowercase)).collect(),
        None => String::new()
    }
}
