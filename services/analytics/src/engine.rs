//! Analytics engine core
//!
//! Drives the single forward pass: validate each line, fold the record into
//! the ledger, classify the donor, and emit a report when the record is a
//! repeat-donor event.
//!
//! The per-line order is fixed: the ledger update strictly precedes
//! classification, so an emitted report's count and sum always include the
//! record that triggered it.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use types::record::Contribution;

use crate::ledger::DonationLedger;
use crate::percentile::{nearest_rank_index, Percentile};
use crate::registry::DonorRegistry;
use crate::report::RepeatDonorReport;
use crate::validation::validate_record;

/// Tallies for one completed (or in-progress) pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Raw lines seen, valid or not
    pub lines_seen: u64,
    /// Lines that validated into records
    pub records_valid: u64,
    /// Lines dropped as malformed
    pub records_dropped: u64,
    /// Repeat-donor reports emitted
    pub reports_emitted: u64,
}

/// Streaming analytics engine
///
/// Owns all run state (ledger and registry); state lives exactly as long as
/// the engine and is never shared.
pub struct AnalyticsEngine {
    /// Running statistics per (committee, zip, year)
    ledger: DonationLedger,
    /// Donor identity → last recorded non-triggering year
    donors: DonorRegistry,
    /// Percentile parameter for rank selection
    percentile: Percentile,
    /// Raw lines seen
    lines_seen: u64,
    /// Lines that validated
    records_valid: u64,
    /// Lines dropped as malformed
    records_dropped: u64,
    /// Reports emitted
    reports_emitted: u64,
}

impl AnalyticsEngine {
    /// Create a new engine for one run
    pub fn new(percentile: Percentile) -> Self {
        info!(percentile = %percentile, "AnalyticsEngine initialized");

        Self {
            ledger: DonationLedger::new(),
            donors: DonorRegistry::new(),
            percentile,
            lines_seen: 0,
            records_valid: 0,
            records_dropped: 0,
            reports_emitted: 0,
        }
    }

    /// Process one raw line
    ///
    /// Returns a report when the line is a valid record from a repeat donor,
    /// None otherwise. Malformed lines are dropped and tallied, never
    /// surfaced as errors.
    pub fn process_line(&mut self, line: &str) -> Option<RepeatDonorReport> {
        self.lines_seen += 1;

        let record = match validate_record(line) {
            Ok(record) => record,
            Err(reason) => {
                self.records_dropped += 1;
                debug!(%reason, "Dropping malformed record");
                return None;
            }
        };
        self.records_valid += 1;

        self.apply(record)
    }

    /// Fold a validated record into run state, emitting on a repeat event
    fn apply(&mut self, record: Contribution) -> Option<RepeatDonorReport> {
        let donor = record.donor_key();

        // Aggregate first: every valid record lands in the ledger, and an
        // emitted report must already include the current record.
        let stats = self.ledger.record(record.group_key(), record.amount);
        let count = stats.count();
        let total = stats.sum();

        if !self.donors.classify(donor, record.year) {
            return None;
        }

        let rank = nearest_rank_index(count, self.percentile);
        // The rank is always within [0, count) once the record is aggregated
        let percentile_amount = stats.amounts().get(rank)?;

        self.reports_emitted += 1;
        debug!(
            committee = %record.committee,
            zip = %record.zip,
            year = record.year,
            count,
            total,
            "Repeat-donor event"
        );

        Some(RepeatDonorReport {
            committee: record.committee,
            zip: record.zip,
            year: record.year,
            percentile_amount,
            total,
            count,
        })
    }

    /// Drive a full pass from a line source into an output sink
    ///
    /// Report lines are written strictly in event order. Read or write
    /// failures abort the pass; whatever output was flushed stays on disk.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<RunSummary> {
        for line in input.lines() {
            let line = line?;
            if let Some(report) = self.process_line(&line) {
                writeln!(output, "{}", report)?;
            }
        }
        output.flush()?;

        let summary = self.summary();
        info!(
            lines = summary.lines_seen,
            valid = summary.records_valid,
            dropped = summary.records_dropped,
            reports = summary.reports_emitted,
            "Stream pass complete"
        );
        Ok(summary)
    }

    /// Tallies so far
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            lines_seen: self.lines_seen,
            records_valid: self.records_valid,
            records_dropped: self.records_dropped,
            reports_emitted: self.reports_emitted,
        }
    }

    /// Raw lines seen so far
    pub fn lines_seen(&self) -> u64 {
        self.lines_seen
    }

    /// Lines that validated so far
    pub fn records_valid(&self) -> u64 {
        self.records_valid
    }

    /// Lines dropped as malformed so far
    pub fn records_dropped(&self) -> u64 {
        self.records_dropped
    }

    /// The ledger, for inspection
    pub fn ledger(&self) -> &DonationLedger {
        &self.ledger
    }

    /// The donor registry, for inspection
    pub fn registry(&self) -> &DonorRegistry {
        &self.donors
    }
}
