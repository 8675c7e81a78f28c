#[cfg(test)]
mod tests;

use serde::Serialize;

/// Navigation state of the transactions table.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total_pages: u64,
    pub total_transactions: u64,
    pub can_go_prev: bool,
    pub can_go_next: bool,
    pub range_start: u64,
    pub range_end: u64
}

impl Pagination {
    /// Derives navigation state from the request cursor and what the backend returned.
    ///
    /// `can_go_next` is inferred from the size of the returned page: a page shorter than
    /// `limit` is treated as the last one, regardless of `total`.
    pub fn compute(page: u32, limit: u32, total: u64, current_page_size: usize) -> Self {
        let page = page.max(1);
        let limit = limit.max(1);
        let current_page_size = current_page_size as u64;
        let offset = u64::from(page - 1) * u64::from(limit);

        let (range_start, range_end) = if current_page_size == 0 {
            (0, 0)
        } else {
            (offset + 1, offset + current_page_size)
        };

        Self {
            page,
            limit,
            total_pages: total.div_ceil(u64::from(limit)).max(1),
            total_transactions: total,
            can_go_prev: page > 1,
            can_go_next: current_page_size >= u64::from(limit),
            range_start,
            range_end
        }
    }

    pub fn label(&self) -> String {
        format!("Showing {}-{} of {}", self.range_start, self.range_end, self.total_transactions)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::compute(1, 25, 0, 0)
    }
}
