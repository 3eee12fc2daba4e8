//! Donor registry and repeat-donor classification
//!
//! Tracks, per donor identity, the most recently recorded non-triggering
//! calendar year. A record is a repeat-donor event exactly when its donor is
//! already registered with an earlier year.
//!
//! The update rule is order-sensitive on purpose: a record that does not
//! trigger an event overwrites the stored year even when that lowers it.
//! Feeding the same dataset in a different line order can therefore change
//! which records classify as repeat events. Do not swap this for a
//! minimum-year rule; the emitted event set depends on the overwrite.

use std::collections::HashMap;

use types::ids::DonorKey;

/// Registry of donor identities and their last recorded non-triggering year
#[derive(Debug, Default)]
pub struct DonorRegistry {
    entries: HashMap<DonorKey, u16>,
}

impl DonorRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Classify a record and update the registry, atomically
    ///
    /// Returns true (a repeat-donor event) when the donor is registered with
    /// a strictly earlier year; the registry is left untouched on that path.
    /// Otherwise the stored year is overwritten with this record's year,
    /// possibly lowering it, and false is returned.
    pub fn classify(&mut self, donor: DonorKey, year: u16) -> bool {
        if let Some(&stored) = self.entries.get(&donor) {
            if year > stored {
                return true;
            }
        }
        self.entries.insert(donor, year);
        false
    }

    /// Stored year for a donor, if any
    pub fn year_for(&self, donor: &DonorKey) -> Option<u16> {
        self.entries.get(donor).copied()
    }

    /// Number of registered donor identities
    pub fn donor_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
