use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::models::{RawRecord, TransactionStatus, TransactionType};

const ID_FIELDS: &[&str] = &["id"];
const USER_ID_FIELDS: &[&str] = &["user_id", "userId"];
const USER_NAME_FIELDS: &[&str] = &["user_name", "username"];
const PHONE_FIELDS: &[&str] = &["phone", "user_phone"];
const TYPE_FIELDS: &[&str] = &["transaction_type", "type"];
const AMOUNT_FIELDS: &[&str] = &["amount"];
const STATUS_FIELDS: &[&str] = &["status"];
const DATE_FIELDS: &[&str] = &["created_at", "date"];
const REFERENCE_FIELDS: &[&str] = &["order_id", "reference"];
const MESSAGE_FIELDS: &[&str] = &["message", "msg"];
const INVESTMENT_ID_FIELDS: &[&str] = &["investment_id", "investmentId"];

const MISSING_USER_ID: &str = "N/A";
const MISSING_USER_NAME: &str = "Unknown";

const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f"
];

/// Canonical transaction as shown in the console.
///
/// Built from a [`RawRecord`] by [`Transaction::normalize`], which never fails: every
/// missing or malformed field falls back to a documented default.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub phone: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Amount in the platform's base currency unit.
    pub amount: Decimal,
    pub status: TransactionStatus,
    /// Creation time. Records without a usable date carry the normalization time instead.
    pub date: DateTime<Utc>,
    pub reference: Option<String>,
    pub message: Option<String>,
    pub investment_id: Option<String>
}

impl Transaction {
    pub fn normalize(raw: &RawRecord) -> Self {
        Self::normalize_at(raw, Utc::now())
    }

    /// Same as [`Transaction::normalize`] with an explicit fallback time for undated records.
    pub fn normalize_at(raw: &RawRecord, now: DateTime<Utc>) -> Self {
        let id = raw.text(ID_FIELDS).unwrap_or_else(|| {
            warn!("Backend record is missing an id");
            String::new()
        });

        let raw_user_id = raw.text(USER_ID_FIELDS);
        let user_name = match (raw.text(USER_NAME_FIELDS), &raw_user_id) {
            (Some(name), _) => name,
            (None, Some(user_id)) => format!("User {user_id}"),
            (None, None) => MISSING_USER_NAME.to_string()
        };

        let transaction_type = raw.text(TYPE_FIELDS)
            .map(|value| TransactionType::from_raw(&value))
            .unwrap_or(TransactionType::Other);

        let status = raw.text(STATUS_FIELDS)
            .map(|value| TransactionStatus::from_raw(&value))
            .unwrap_or(TransactionStatus::Unknown);

        let amount = match raw.first(AMOUNT_FIELDS) {
            Some(value) => parse_amount(value).unwrap_or_else(|| {
                warn!("Transaction [{id}] has an unreadable amount [{value}], using 0");
                Decimal::ZERO
            }),
            None => Decimal::ZERO
        };

        let date = match raw.first(DATE_FIELDS) {
            Some(value) => parse_timestamp(value).unwrap_or_else(|| {
                warn!("Transaction [{id}] has an unreadable date [{value}], using the current time");
                now
            }),
            None => now
        };

        Self {
            user_id: raw_user_id.unwrap_or_else(|| MISSING_USER_ID.to_string()),
            user_name,
            phone: raw.text(PHONE_FIELDS).unwrap_or_default(),
            transaction_type,
            amount,
            status,
            date,
            reference: raw.text(REFERENCE_FIELDS),
            message: raw.text(MESSAGE_FIELDS),
            investment_id: raw.text(INVESTMENT_ID_FIELDS),
            id
        }
    }
}

impl From<&RawRecord> for Transaction {
    fn from(raw: &RawRecord) -> Self {
        Self::normalize(raw)
    }
}

fn parse_amount(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.trim().to_string(),
        _ => return None
    };

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        //NOTE: Numeric dates from the backend are epoch milliseconds
        Value::Number(number) => number.as_i64().and_then(DateTime::<Utc>::from_timestamp_millis),
        Value::String(text) => parse_timestamp_text(text.trim()),
        _ => None
    }
}

fn parse_timestamp_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Some(timestamp.with_timezone(&Utc));
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(text, format) {
            return Some(timestamp.and_utc());
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|timestamp| timestamp.and_utc())
}
