//! Canonical contribution records and the raw field schema
//!
//! A `Contribution` is what survives validation: the handful of fields the
//! pipeline consumes, canonicalized (zip truncated, date reduced to its year,
//! amount rounded up to whole dollars).

use serde::{Deserialize, Serialize};

use crate::ids::{CommitteeId, DonorKey, ZipCode};
use crate::numeric::Amount;

/// Field layout of the pipe-delimited FEC individual-contribution file.
///
/// The raw file carries 21 fields per line; only six are consumed. Positions
/// follow the FEC data dictionary for the contributions-by-individuals file.
pub mod schema {
    /// Number of fields in a complete record
    pub const FIELD_COUNT: usize = 21;

    /// Recipient committee id
    pub const CMTE_ID: usize = 0;
    /// Donor name
    pub const NAME: usize = 7;
    /// Donor zip code (may be ZIP+4)
    pub const ZIP_CODE: usize = 10;
    /// Transaction date, MMDDYYYY
    pub const TRANSACTION_DT: usize = 13;
    /// Transaction amount, decimal string
    pub const TRANSACTION_AMT: usize = 14;
    /// Id of a transferring entity; set means the money came through an
    /// intermediary and the record is excluded
    pub const OTHER_ID: usize = 15;
}

/// A validated, canonicalized contribution record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    /// Recipient committee, verbatim from the source
    pub committee: CommitteeId,
    /// Donor name, verbatim from the source (no normalization)
    pub donor_name: String,
    /// First five characters of the donor zip
    pub zip: ZipCode,
    /// Calendar year of the transaction
    pub year: u16,
    /// Whole-dollar amount (ceiling of the raw decimal)
    pub amount: Amount,
}

impl Contribution {
    /// Identity of the donor: name plus zip, committee excluded
    pub fn donor_key(&self) -> DonorKey {
        DonorKey::new(self.donor_name.clone(), self.zip.clone())
    }

    /// Grouping key for running statistics: committee, zip, year
    pub fn group_key(&self) -> GroupKey {
        GroupKey::new(self.committee.clone(), self.zip.clone(), self.year)
    }
}

/// Key under which count/sum/percentile statistics accumulate
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupKey {
    committee: CommitteeId,
    zip: ZipCode,
    year: u16,
}

impl GroupKey {
    /// Create a new GroupKey
    pub fn new(committee: CommitteeId, zip: ZipCode, year: u16) -> Self {
        Self {
            committee,
            zip,
            year,
        }
    }

    /// Recipient committee
    pub fn committee(&self) -> &CommitteeId {
        &self.committee
    }

    /// Five-character zip
    pub fn zip(&self) -> &ZipCode {
        &self.zip
    }

    /// Calendar year
    pub fn year(&self) -> u16 {
        self.year
    }
}
