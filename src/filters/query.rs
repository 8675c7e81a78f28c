use crate::filters::{FilterCriteria, DATE_FORMAT};

/// Ordered wire parameters for `GET /transactions`.
///
/// Values are stored unencoded; [`QueryParams::to_query_string`] percent-encodes them.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(key, value)| (*key, value.as_str()))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.0.iter().map(|(key, _)| *key).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_query_string(&self) -> String {
        self.0.iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    fn push(&mut self, name: &'static str, value: impl Into<String>) {
        self.0.push((name, value.into()));
    }

    fn push_if(&mut self, name: &'static str, value: &str) {
        if !value.is_empty() {
            self.push(name, value);
        }
    }
}

/// Maps committed criteria onto wire parameters.
///
/// `page` and `limit` are always sent. Every other parameter is omitted while it holds its
/// default, and the order never depends on anything but which parameters are present.
pub fn build_query(criteria: &FilterCriteria) -> QueryParams {
    let mut params = QueryParams::default();

    params.push("page", criteria.page.to_string());
    params.push("limit", criteria.limit.to_string());

    if let Some(transaction_type) = criteria.transaction_type.as_option() {
        params.push("type", transaction_type.as_str());
    }

    if let Some(status) = criteria.status.as_option() {
        params.push("status", status.wire_value());
    }

    params.push_if("search", &criteria.search);

    if let Some(date) = criteria.date_from {
        params.push("start_date", date.format(DATE_FORMAT).to_string());
    }

    if let Some(date) = criteria.date_to {
        params.push("end_date", date.format(DATE_FORMAT).to_string());
    }

    params.push_if("userId", &criteria.user_id);

    params
}

impl From<&FilterCriteria> for QueryParams {
    fn from(criteria: &FilterCriteria) -> Self {
        build_query(criteria)
    }
}
