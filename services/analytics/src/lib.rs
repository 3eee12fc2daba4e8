//! Repeat-Donor Analytics Service
//!
//! Consumes a stream of pipe-delimited contribution records and produces,
//! for every record from a repeat donor, a running nearest-rank percentile
//! report of contribution amounts grouped by (committee, zip, year).
//!
//! Processing is a strict single pass: repeat-donor status depends on the
//! order records are seen in, so there is no reordering, no backfill, and no
//! parallelism across records.
//!
//! # Architecture
//!
//! ```text
//! Raw lines
//!     │
//! ┌───▼──────┐
//! │Validation│  ← Rejects malformed records, canonicalizes the rest
//! └───┬──────┘
//!     │
//! ┌───▼──────┐
//! │ Ledger   │  ← Per (committee, zip, year): count, sum, sorted amounts
//! └───┬──────┘
//!     │
//! ┌───▼──────┐
//! │ Registry │  ← Classifies the donor as repeat / first-seen
//! └───┬──────┘
//!     │ repeat only
//! ┌───▼──────────┐
//! │ Percentile + │  ← Nearest-rank lookup, one report line per event
//! │ Report       │
//! └──────────────┘
//! ```

pub mod config;
pub mod engine;
pub mod ledger;
pub mod percentile;
pub mod registry;
pub mod report;
pub mod validation;

pub use engine::AnalyticsEngine;

// Library version
pub const SERVICE_VERSION: &str = "0.1.0";
