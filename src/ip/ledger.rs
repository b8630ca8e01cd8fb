//! Run-scoped deduplication ledger.
//!
//! Records every address emitted during a unique-mode run so duplicates can
//! be discarded and regenerated. The ledger grows with the requested count
//! and is dropped with the run; nothing is ever evicted.

use std::collections::HashSet;
use std::net::Ipv4Addr;

/// Set of addresses already emitted in this run
#[derive(Debug, Default)]
pub struct GenerationLedger {
    seen: HashSet<Ipv4Addr>,
    /// Number of duplicate candidates turned away
    duplicates: u64,
}

impl GenerationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger pre-sized for the expected number of addresses
    pub fn with_capacity(capacity: usize) -> Self {
        GenerationLedger {
            seen: HashSet::with_capacity(capacity),
            duplicates: 0,
        }
    }

    /// Record `addr` and return true if it has not been seen in this run;
    /// return false for a duplicate, which the caller must discard
    pub fn try_emit(&mut self, addr: Ipv4Addr) -> bool {
        if self.seen.insert(addr) {
            true
        } else {
            self.duplicates += 1;
            false
        }
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn duplicates(&self) -> u64 {
        self.duplicates
    }
}
