//! Test utilities and element fixtures for dynarr development.
//!
//! Provides a drop-tracking element type ([`Tracked`]) backed by a
//! per-thread [`DropLedger`], plus the fixtures in [`fixtures`]: an element
//! whose `Default` fails on demand and a seeded operation-sequence
//! generator with a `Vec` reference model.
//!
//! Ledgers are thread-local. The default test harness runs each test on
//! its own thread, so tests do not see each other's counts.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::Cell;
use std::cmp::Ordering;

pub use fixtures::{op_sequence, FlakyDefault, ModelChecker, Op};

thread_local! {
    static LEDGER: Cell<LedgerCounts> = const {
        Cell::new(LedgerCounts {
            created: 0,
            dropped: 0,
        })
    };
}

/// Snapshot of the current thread's ledger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LedgerCounts {
    pub created: usize,
    pub dropped: usize,
}

impl LedgerCounts {
    /// Values created but not yet dropped.
    pub fn live(&self) -> usize {
        self.created - self.dropped
    }
}

/// Per-thread counter of [`Tracked`] constructions and drops.
pub struct DropLedger;

impl DropLedger {
    /// Zero the current thread's counters.
    pub fn reset() {
        LEDGER.with(|ledger| ledger.set(LedgerCounts::default()));
    }

    /// Current counters.
    pub fn counts() -> LedgerCounts {
        LEDGER.with(Cell::get)
    }

    /// Number of live [`Tracked`] values on this thread.
    pub fn live() -> usize {
        Self::counts().live()
    }

    /// Panic unless every created value has been dropped exactly once.
    pub fn assert_balanced() {
        let counts = Self::counts();
        assert_eq!(
            counts.created, counts.dropped,
            "ledger unbalanced: {} created, {} dropped",
            counts.created, counts.dropped
        );
    }

    fn record(update: impl FnOnce(&mut LedgerCounts)) {
        LEDGER.with(|ledger| {
            let mut counts = ledger.get();
            update(&mut counts);
            assert!(
                counts.dropped <= counts.created,
                "more drops than constructions: value dropped twice"
            );
            ledger.set(counts);
        });
    }
}

/// Element type that reports every construction and drop to the
/// [`DropLedger`].
///
/// Compares and orders by its payload only.
#[derive(Debug)]
pub struct Tracked {
    value: i64,
}

impl Tracked {
    pub fn new(value: i64) -> Self {
        DropLedger::record(|c| c.created += 1);
        Self { value }
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

impl Default for Tracked {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Self::new(self.value)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        DropLedger::record(|c| c.dropped += 1);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}

impl PartialOrd for Tracked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tracked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}
