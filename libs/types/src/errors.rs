//! Error taxonomy for the donation analytics pipeline
//!
//! Malformed-record errors are recoverable (the line is dropped and tallied);
//! configuration errors are fatal before processing begins.

use thiserror::Error;

/// Amount-field errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("amount is not a decimal number")]
    Unparsable,

    #[error("amount rounds up to a non-positive whole-dollar value")]
    NonPositive,

    #[error("amount exceeds the representable whole-dollar range")]
    OutOfRange,
}

/// Reasons a raw input line is rejected during validation
///
/// A rejected line is dropped and counted; it never aborts the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("fewer than {expected} fields (got {actual})")]
    TooFewFields { expected: usize, actual: usize },

    #[error("committee id is empty")]
    MissingCommittee,

    #[error("contribution attributed to an intermediary (OTHER_ID is set)")]
    LinkedTransfer,

    #[error("donor name is empty")]
    MissingName,

    #[error("zip code is empty or shorter than five characters: {raw:?}")]
    InvalidZip { raw: String },

    #[error("transaction date is not a valid MMDDYYYY date: {raw:?}")]
    InvalidDate { raw: String },

    #[error("transaction amount is empty")]
    MissingAmount,

    #[error("invalid transaction amount: {0}")]
    Amount(#[from] AmountError),
}

/// Configuration errors
///
/// Any of these aborts the run before a single record is processed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("usage: donation-analytics <input-file> <percentile-file> <output-file>")]
    Usage,

    #[error("cannot read percentile file: {path}")]
    PercentileUnreadable { path: String },

    #[error("percentile value is not an integer: {raw:?}")]
    PercentileNotAnInteger { raw: String },

    #[error("percentile value must be between 0 and 100: {value}")]
    PercentileOutOfRange { value: i64 },
}
