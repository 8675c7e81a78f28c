mod errors;
mod query;
#[cfg(test)]
mod tests;

use std::fmt;
use std::fmt::{Display, Formatter};
use std::num::NonZeroU32;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::models::{TransactionStatus, TransactionType};
use crate::types::{Filter, PageSize};

pub use errors::FilterError;
pub use query::{build_query, QueryParams};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The committed query criteria of the transactions view.
///
/// `page` and `limit` are typed so that a page below 1 or an unsupported page size cannot be represented.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FilterCriteria {
    pub transaction_type: Filter<TransactionType>,
    pub status: Filter<TransactionStatus>,
    pub search: String,
    pub user_id: String,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub page: NonZeroU32,
    pub limit: PageSize
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            transaction_type: Filter::All,
            status: Filter::All,
            search: String::new(),
            user_id: String::new(),
            date_from: None,
            date_to: None,
            page: NonZeroU32::MIN,
            limit: PageSize::default()
        }
    }
}

impl FilterCriteria {
    /// Returns the criteria with `update` applied.
    ///
    /// A page update only moves the cursor. Every other update also rewinds to the first page.
    pub fn with(mut self, update: FilterUpdate) -> Self {
        match update {
            FilterUpdate::Page(page) => {
                self.page = page;
                return self;
            }
            FilterUpdate::Type(transaction_type) => self.transaction_type = transaction_type,
            FilterUpdate::Status(status) => self.status = status,
            FilterUpdate::Search(search) => self.search = search,
            FilterUpdate::UserId(user_id) => self.user_id = user_id,
            FilterUpdate::DateFrom(date) => self.date_from = date,
            FilterUpdate::DateTo(date) => self.date_to = date,
            FilterUpdate::Limit(limit) => self.limit = limit
        }

        self.page = NonZeroU32::MIN;
        self
    }

    /// String-keyed variant of [`FilterCriteria::with`], validating `value` for `field`.
    pub fn set_field(self, field: &str, value: &str) -> Result<Self, FilterError> {
        let update = FilterUpdate::parse(field.parse()?, value)?;
        Ok(self.with(update))
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum FilterField {
    Type,
    Status,
    Search,
    UserId,
    DateFrom,
    DateTo,
    Page,
    Limit
}

impl FromStr for FilterField {
    type Err = FilterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "type" => Ok(FilterField::Type),
            "status" => Ok(FilterField::Status),
            "search" => Ok(FilterField::Search),
            "userId" | "user_id" => Ok(FilterField::UserId),
            "dateFrom" | "date_from" | "start_date" => Ok(FilterField::DateFrom),
            "dateTo" | "date_to" | "end_date" => Ok(FilterField::DateTo),
            "page" => Ok(FilterField::Page),
            "limit" => Ok(FilterField::Limit),
            other => Err(FilterError::UnknownField(other.to_string()))
        }
    }
}

impl Display for FilterField {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterField::Type => "type",
            FilterField::Status => "status",
            FilterField::Search => "search",
            FilterField::UserId => "userId",
            FilterField::DateFrom => "dateFrom",
            FilterField::DateTo => "dateTo",
            FilterField::Page => "page",
            FilterField::Limit => "limit"
        };

        formatter.write_str(name)
    }
}

/// A single edit to the criteria.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum FilterUpdate {
    Type(Filter<TransactionType>),
    Status(Filter<TransactionStatus>),
    Search(String),
    UserId(String),
    DateFrom(Option<NaiveDate>),
    DateTo(Option<NaiveDate>),
    Page(NonZeroU32),
    Limit(PageSize)
}

impl FilterUpdate {
    /// Parses raw text, as typed into the console, into an update for `field`.
    ///
    /// Empty dates clear the bound. `all` clears the type and status filters.
    pub fn parse(field: FilterField, value: &str) -> Result<Self, FilterError> {
        let update = match field {
            FilterField::Type => FilterUpdate::Type(value.parse()?),
            FilterField::Status => FilterUpdate::Status(value.parse()?),
            FilterField::Search => FilterUpdate::Search(value.trim().to_string()),
            FilterField::UserId => FilterUpdate::UserId(value.trim().to_string()),
            FilterField::DateFrom => FilterUpdate::DateFrom(parse_date(field, value)?),
            FilterField::DateTo => FilterUpdate::DateTo(parse_date(field, value)?),
            FilterField::Page => {
                let page = value.trim().parse::<NonZeroU32>()
                    .map_err(|_| FilterError::InvalidPage(value.to_string()))?;
                FilterUpdate::Page(page)
            }
            FilterField::Limit => FilterUpdate::Limit(value.parse()?)
        };

        Ok(update)
    }

    pub fn field(&self) -> FilterField {
        match self {
            FilterUpdate::Type(_) => FilterField::Type,
            FilterUpdate::Status(_) => FilterField::Status,
            FilterUpdate::Search(_) => FilterField::Search,
            FilterUpdate::UserId(_) => FilterField::UserId,
            FilterUpdate::DateFrom(_) => FilterField::DateFrom,
            FilterUpdate::DateTo(_) => FilterField::DateTo,
            FilterUpdate::Page(_) => FilterField::Page,
            FilterUpdate::Limit(_) => FilterField::Limit
        }
    }
}

fn parse_date(field: FilterField, value: &str) -> Result<Option<NaiveDate>, FilterError> {
    let value = value.trim();

    if value.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(Some)
        .map_err(|_| FilterError::InvalidDate { field, value: value.to_string() })
}

/// Criteria plus the uncommitted search box.
///
/// Typing into the search box does not change the criteria; only [`FilterState::submit_search`]
/// commits it, so keystrokes never trigger a fetch.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct FilterState {
    criteria: FilterCriteria,
    search_input: String
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn type_search(&mut self, text: impl Into<String>) {
        self.search_input = text.into();
    }

    /// Commits the search box into the criteria and rewinds to the first page.
    pub fn submit_search(&mut self) {
        let search = self.search_input.trim().to_string();
        self.apply(FilterUpdate::Search(search));
    }

    pub fn apply(&mut self, update: FilterUpdate) {
        if let FilterUpdate::Search(search) = &update {
            self.search_input = search.clone();
        }

        self.criteria = std::mem::take(&mut self.criteria).with(update);
    }

    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), FilterError> {
        let update = FilterUpdate::parse(field.parse()?, value)?;
        self.apply(update);
        Ok(())
    }

    /// Restores the default criteria and clears the search box.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
