//! Repeat-donor report lines

use std::fmt;

use serde::{Deserialize, Serialize};
use types::ids::{CommitteeId, ZipCode};
use types::numeric::Amount;

/// One emitted report: the running statistics of a grouping at the moment a
/// repeat-donor contribution landed in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatDonorReport {
    /// Recipient committee
    pub committee: CommitteeId,
    /// Five-character zip of the contribution
    pub zip: ZipCode,
    /// Calendar year of the contribution
    pub year: u16,
    /// Amount at the configured percentile rank
    pub percentile_amount: Amount,
    /// Running whole-dollar total for the grouping
    pub total: u64,
    /// Running contribution count for the grouping
    pub count: u64,
}

impl fmt::Display for RepeatDonorReport {
    /// Pipe-delimited wire format, one line per event:
    /// `CMTE_ID|ZIP5|YEAR|PERCENTILE_AMT|TOTAL_AMT|COUNT`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}|{}|{}",
            self.committee, self.zip, self.year, self.percentile_amount, self.total, self.count
        )
    }
}
