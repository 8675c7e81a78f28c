use serde::Serialize;

use crate::models::{Transaction, TransactionStatus, TransactionType};

/// Counters over the currently fetched page.
///
/// `total` counts every record. The itemized counters only track the categories shown
/// on the console cards, so they do not have to add up to `total`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize)]
pub struct AggregateStats {
    pub total: usize,
    pub investment: usize,
    pub withdrawal: usize,
    pub bonus: usize,
    pub success: usize,
    pub pending: usize,
    pub failed: usize
}

impl AggregateStats {
    pub fn aggregate<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        transactions.into_iter().fold(Self::default(), |mut stats, transaction| {
            stats.record(transaction);
            stats
        })
    }

    fn record(&mut self, transaction: &Transaction) {
        self.total += 1;

        match transaction.transaction_type {
            TransactionType::Investment => self.investment += 1,
            TransactionType::Withdrawal => self.withdrawal += 1,
            TransactionType::Bonus => self.bonus += 1,
            TransactionType::Return | TransactionType::Team | TransactionType::Other => {}
        }

        match transaction.status {
            TransactionStatus::Success => self.success += 1,
            TransactionStatus::Pending => self.pending += 1,
            TransactionStatus::Failed => self.failed += 1,
            TransactionStatus::Unknown | TransactionStatus::Other(_) => {}
        }
    }
}

impl<'a> FromIterator<&'a Transaction> for AggregateStats {
    fn from_iter<I: IntoIterator<Item = &'a Transaction>>(iter: I) -> Self {
        Self::aggregate(iter)
    }
}
