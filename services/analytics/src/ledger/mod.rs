//! Running contribution ledger
//!
//! Maintains, per (committee, zip, year) key, a running count, running sum,
//! and an always-sorted sequence of contribution amounts. Every valid record
//! lands here regardless of repeat-donor status.

mod group;
mod sorted;

pub use group::GroupStats;
pub use sorted::SortedAmounts;

use std::collections::HashMap;

use types::numeric::Amount;
use types::record::GroupKey;

/// Ledger of running statistics per grouping key
#[derive(Debug, Default)]
pub struct DonationLedger {
    groups: HashMap<GroupKey, GroupStats>,
}

impl DonationLedger {
    /// Create a new empty ledger
    pub fn new() -> Self {
        Self {
            groups: HashMap::new(),
        }
    }

    /// Record an amount under a key and return the updated statistics
    ///
    /// An unseen key starts at count=1, sum=amount, amounts=[amount].
    pub fn record(&mut self, key: GroupKey, amount: Amount) -> &GroupStats {
        let stats = self.groups.entry(key).or_default();
        stats.record(amount);
        stats
    }

    /// Statistics for a key, if any records have been seen for it
    pub fn group(&self, key: &GroupKey) -> Option<&GroupStats> {
        self.groups.get(key)
    }

    /// Number of distinct grouping keys seen so far
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Whether the ledger is empty
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
