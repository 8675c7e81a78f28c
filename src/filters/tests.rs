use super::{build_query, FilterCriteria, FilterError, FilterField, FilterState, FilterUpdate};

use std::num::NonZeroU32;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::models::{TransactionStatus, TransactionType};
use crate::types::{Filter, PageSize};

fn page(value: u32) -> Result<NonZeroU32> {
    NonZeroU32::new(value).ok_or_else(|| anyhow!("page must be non-zero"))
}

fn criteria_on_page(value: u32) -> Result<FilterCriteria> {
    Ok(FilterCriteria::default().with(FilterUpdate::Page(page(value)?)))
}

#[test]
fn test_default_criteria_match_initial_view() {
    let criteria = FilterCriteria::default();

    assert_eq!(criteria.transaction_type, Filter::All);
    assert_eq!(criteria.status, Filter::All);
    assert!(criteria.search.is_empty());
    assert!(criteria.user_id.is_empty());
    assert_eq!(criteria.date_from, None);
    assert_eq!(criteria.date_to, None);
    assert_eq!(criteria.page.get(), 1);
    assert_eq!(criteria.limit, PageSize::TwentyFive);
}

#[test]
fn test_non_page_update_rewinds_to_first_page() -> Result<()> {
    let criteria = criteria_on_page(5)?
        .with(FilterUpdate::Type(Filter::Only(TransactionType::Bonus)));

    assert_eq!(criteria.page.get(), 1);
    assert_eq!(criteria.transaction_type, Filter::Only(TransactionType::Bonus));

    Ok(())
}

#[test]
fn test_every_non_page_field_rewinds_to_first_page() -> Result<()> {
    let updates = vec![
        FilterUpdate::Type(Filter::All),
        FilterUpdate::Status(Filter::Only(TransactionStatus::Pending)),
        FilterUpdate::Search("jane".to_string()),
        FilterUpdate::UserId("42".to_string()),
        FilterUpdate::DateFrom(NaiveDate::from_ymd_opt(2024, 1, 1)),
        FilterUpdate::DateTo(None),
        FilterUpdate::Limit(PageSize::OneHundred),
    ];

    for update in updates {
        let field = update.field();
        let criteria = criteria_on_page(4)?.with(update);
        assert_eq!(criteria.page.get(), 1, "field [{field}] kept the page");
    }

    Ok(())
}

#[test]
fn test_page_update_leaves_other_fields_unchanged() -> Result<()> {
    let criteria = FilterCriteria::default()
        .with(FilterUpdate::Status(Filter::Only(TransactionStatus::Failed)))
        .with(FilterUpdate::Search("ref-1".to_string()))
        .with(FilterUpdate::Limit(PageSize::Fifty));

    let moved = criteria.clone().with(FilterUpdate::Page(page(3)?));

    assert_eq!(moved.page.get(), 3);
    assert_eq!(moved, FilterCriteria { page: page(3)?, ..criteria });

    Ok(())
}

#[test]
fn test_set_field_parses_raw_values() -> Result<()> {
    let criteria = FilterCriteria::default()
        .set_field("type", "withdrawal")?
        .set_field("status", "Success")?
        .set_field("dateFrom", "2024-02-01")?
        .set_field("end_date", "2024-02-29")?
        .set_field("limit", "75")?
        .set_field("page", "2")?;

    assert_eq!(criteria.transaction_type, Filter::Only(TransactionType::Withdrawal));
    assert_eq!(criteria.status, Filter::Only(TransactionStatus::Success));
    assert_eq!(criteria.date_from, NaiveDate::from_ymd_opt(2024, 2, 1));
    assert_eq!(criteria.date_to, NaiveDate::from_ymd_opt(2024, 2, 29));
    assert_eq!(criteria.limit, PageSize::SeventyFive);
    assert_eq!(criteria.page.get(), 2);

    let cleared = criteria.set_field("type", "all")?.set_field("dateFrom", "")?;

    assert_eq!(cleared.transaction_type, Filter::All);
    assert_eq!(cleared.date_from, None);

    Ok(())
}

#[test]
fn test_set_field_rejects_invalid_input() {
    assert!(matches!(FilterCriteria::default().set_field("colour", "red"), Err(FilterError::UnknownField(_))));
    assert!(matches!(FilterCriteria::default().set_field("page", "0"), Err(FilterError::InvalidPage(_))));
    assert!(matches!(FilterCriteria::default().set_field("page", "-1"), Err(FilterError::InvalidPage(_))));
    assert!(matches!(FilterCriteria::default().set_field("limit", "30"), Err(FilterError::PageSize(_))));
    assert!(matches!(FilterCriteria::default().set_field("type", "referral"), Err(FilterError::Model(_))));
    assert!(matches!(FilterCriteria::default().set_field("status", "processing"), Err(FilterError::Model(_))));
    assert!(matches!(
        FilterCriteria::default().set_field("dateTo", "29/02/2024"),
        Err(FilterError::InvalidDate { field: FilterField::DateTo, .. })
    ));
}

#[test]
fn test_typing_search_does_not_commit() {
    let mut state = FilterState::new();
    state.type_search("jane");

    assert_eq!(state.search_input(), "jane");
    assert!(state.criteria().search.is_empty());
}

#[test]
fn test_submit_search_commits_trimmed_text_and_rewinds() -> Result<()> {
    let mut state = FilterState::new();
    state.apply(FilterUpdate::Page(page(6)?));
    state.type_search("  jane doe ");
    state.submit_search();

    assert_eq!(state.criteria().search, "jane doe");
    assert_eq!(state.search_input(), "jane doe");
    assert_eq!(state.criteria().page.get(), 1);

    Ok(())
}

#[test]
fn test_reset_clears_criteria_and_search_box() -> Result<()> {
    let mut state = FilterState::new();
    state.set_field("userId", "17")?;
    state.set_field("type", "bonus")?;
    state.type_search("pending search");

    state.reset();

    assert_eq!(state, FilterState::default());
    assert!(state.search_input().is_empty());

    Ok(())
}

#[test]
fn test_reset_is_idempotent() -> Result<()> {
    let mut state = FilterState::new();
    state.set_field("status", "failed")?;

    state.reset();
    let once = state.clone();
    state.reset();

    assert_eq!(state, once);

    Ok(())
}

#[test]
fn test_default_criteria_send_only_page_and_limit() {
    let params = build_query(&FilterCriteria::default());

    assert_eq!(params.names(), vec!["page", "limit"]);
    assert_eq!(params.get("page"), Some("1"));
    assert_eq!(params.get("limit"), Some("25"));
    assert_eq!(params.get("type"), None);
    assert_eq!(params.to_query_string(), "page=1&limit=25");
}

#[test]
fn test_query_uses_wire_names_in_stable_order() -> Result<()> {
    let criteria = FilterCriteria::default()
        .set_field("userId", "u-7")?
        .set_field("dateTo", "2024-02-29")?
        .set_field("dateFrom", "2024-02-01")?
        .set_field("search", "jane doe")?
        .set_field("status", "pending")?
        .set_field("type", "bonus")?
        .set_field("limit", "50")?
        .set_field("page", "3")?;

    let params = build_query(&criteria);

    assert_eq!(params.names(), vec!["page", "limit", "type", "status", "search", "start_date", "end_date", "userId"]);
    assert_eq!(params.get("status"), Some("pending"));
    assert_eq!(params.get("start_date"), Some("2024-02-01"));
    assert_eq!(params.get("end_date"), Some("2024-02-29"));
    assert_eq!(params, build_query(&criteria));

    Ok(())
}

#[test]
fn test_query_string_encodes_search_text() -> Result<()> {
    let criteria = FilterCriteria::default().set_field("search", "a&b=c d")?;

    assert_eq!(build_query(&criteria).to_query_string(), "page=1&limit=25&search=a%26b%3Dc%20d");

    Ok(())
}

#[test]
fn test_query_omits_cleared_fields() -> Result<()> {
    let criteria = FilterCriteria::default()
        .set_field("type", "bonus")?
        .set_field("search", "x")?
        .set_field("type", "all")?
        .set_field("search", "  ")?;

    assert_eq!(build_query(&criteria).len(), 2);

    Ok(())
}
