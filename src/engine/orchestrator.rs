use std::num::NonZeroU32;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tokio::spawn;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::engine::FetchError;
use crate::filters::{build_query, FilterCriteria, FilterError, FilterState, FilterUpdate, QueryParams};
use crate::models::{AggregateStats, RawRecord, Transaction};
use crate::pagination::Pagination;
use crate::transport::{TransactionsResponse, Transport};

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success,
    Failed
}

/// Everything the presentation layer renders for the transactions view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionView {
    pub transactions: Vec<Transaction>,
    pub stats: AggregateStats,
    pub pagination: Pagination,
    pub state: FetchState,
    /// Sequence number of the fetch this view belongs to.
    #[serde(skip)]
    sequence: u64
}

impl TransactionView {
    pub fn is_loading(&self) -> bool {
        self.state == FetchState::Loading
    }

    pub fn is_error(&self) -> bool {
        self.state == FetchState::Failed
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    fn succeeded(sequence: u64, criteria: &FilterCriteria, page: FetchedPage) -> Self {
        let transactions: Vec<Transaction> = page.records.iter().map(Transaction::normalize).collect();
        let stats = AggregateStats::aggregate(&transactions);
        let total = page.total.unwrap_or(transactions.len() as u64);
        let pagination = Pagination::compute(criteria.page.get(), criteria.limit.get(), total, transactions.len());

        Self {
            transactions,
            stats,
            pagination,
            state: FetchState::Success,
            sequence
        }
    }

    fn failed(sequence: u64, criteria: &FilterCriteria) -> Self {
        Self {
            transactions: Vec::new(),
            stats: AggregateStats::default(),
            pagination: Pagination::compute(criteria.page.get(), criteria.limit.get(), 0, 0),
            state: FetchState::Failed,
            sequence
        }
    }
}

impl Default for TransactionView {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            stats: AggregateStats::default(),
            pagination: Pagination::default(),
            state: FetchState::Idle,
            sequence: 0
        }
    }
}

struct FetchedPage {
    records: Vec<RawRecord>,
    total: Option<u64>
}

/// Drives the transactions view: owns the filters, runs fetches and publishes the result.
///
/// Every filter change dispatches exactly one fetch tagged with a new sequence number. A fetch
/// only publishes if no newer one was dispatched in the meantime, so out-of-order responses
/// cannot overwrite fresher results. Mutators must be called from within a Tokio runtime.
pub struct FetchOrchestrator {
    transport: Arc<dyn Transport>,
    filters: FilterState,
    view: Arc<watch::Sender<TransactionView>>,
    sequence: u64
}

impl FetchOrchestrator {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        let (view, _) = watch::channel(TransactionView::default());

        Self {
            transport,
            filters: FilterState::new(),
            view: Arc::new(view),
            sequence: 0
        }
    }

    /// Starts from `filters` instead of the defaults. Nothing is fetched until the first mutation or refresh.
    pub fn with_filters(mut self, filters: FilterState) -> Self {
        self.filters = filters;
        self
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn view(&self) -> TransactionView {
        self.view.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<TransactionView> {
        self.view.subscribe()
    }

    /// Fetches with the current filters, as on mount.
    pub fn refresh(&mut self) -> JoinHandle<()> {
        self.dispatch()
    }

    pub fn set_filter(&mut self, update: FilterUpdate) -> JoinHandle<()> {
        self.filters.apply(update);
        self.dispatch()
    }

    /// String-keyed [`FetchOrchestrator::set_filter`]. Invalid input leaves the filters untouched and fetches nothing.
    pub fn set_filter_str(&mut self, field: &str, value: &str) -> Result<JoinHandle<()>, FilterError> {
        self.filters.set_field(field, value)?;
        Ok(self.dispatch())
    }

    /// Edits the search box without fetching.
    pub fn type_search(&mut self, text: impl Into<String>) {
        self.filters.type_search(text);
    }

    pub fn submit_search(&mut self, text: impl Into<String>) -> JoinHandle<()> {
        self.filters.type_search(text);
        self.filters.submit_search();
        self.dispatch()
    }

    pub fn reset_filters(&mut self) -> JoinHandle<()> {
        self.filters.reset();
        self.dispatch()
    }

    pub fn go_to_page(&mut self, page: NonZeroU32) -> JoinHandle<()> {
        self.set_filter(FilterUpdate::Page(page))
    }

    /// Moves one page forward if the current view allows it.
    ///
    /// Returns `None` while the view does not yet show a successful fetch of the current criteria.
    pub fn next_page(&mut self) -> Option<JoinHandle<()>> {
        if !self.current_pagination().is_some_and(|pagination| pagination.can_go_next) {
            return None;
        }

        let page = self.filters.criteria().page.checked_add(1)?;
        Some(self.go_to_page(page))
    }

    /// Moves one page back if the current view allows it.
    pub fn prev_page(&mut self) -> Option<JoinHandle<()>> {
        if !self.current_pagination().is_some_and(|pagination| pagination.can_go_prev) {
            return None;
        }

        let page = NonZeroU32::new(self.filters.criteria().page.get() - 1)?;
        Some(self.go_to_page(page))
    }

    //NOTE: pagination of an older result set must not drive navigation under newer criteria
    fn current_pagination(&self) -> Option<Pagination> {
        let view = self.view.borrow();

        if view.sequence != self.sequence || view.state != FetchState::Success {
            return None;
        }

        Some(view.pagination)
    }

    fn dispatch(&mut self) -> JoinHandle<()> {
        self.sequence += 1;

        let sequence = self.sequence;
        let criteria = self.filters.criteria().clone();
        let query = build_query(&criteria);

        self.view.send_modify(|view| {
            view.sequence = sequence;
            view.state = FetchState::Loading;
        });

        debug!("Dispatching fetch [{sequence}] with [{}]", query.to_query_string());

        let transport = self.transport.clone();
        let view = self.view.clone();

        spawn(async move {
            let next = match fetch_page(transport.as_ref(), &query).await {
                Ok(page) => TransactionView::succeeded(sequence, &criteria, page),
                Err(error) => {
                    error!("Fetch [{sequence}] failed: {error}");
                    TransactionView::failed(sequence, &criteria)
                }
            };

            let published = view.send_if_modified(|current| {
                if current.sequence != sequence {
                    return false;
                }

                *current = next;
                true
            });

            if !published {
                debug!("Discarded stale fetch [{sequence}]");
            }
        })
    }
}

async fn fetch_page(transport: &dyn Transport, query: &QueryParams) -> Result<FetchedPage, FetchError> {
    let response = transport.fetch_transactions(query).await?;
    validate(response)
}

fn validate(response: TransactionsResponse) -> Result<FetchedPage, FetchError> {
    if !response.success {
        return Err(FetchError::Rejected(response.message));
    }

    let total = response.total_count();

    let Value::Array(items) = response.data else {
        return Err(FetchError::MalformedData);
    };

    Ok(FetchedPage {
        records: items.into_iter().map(RawRecord::from).collect(),
        total
    })
}
