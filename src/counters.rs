//! Per-task activity counters
//!
//! Every periodic task and the idle hook owns one counter. Ownership is
//! expressed through handles: a [`CounterWriter`] is the only way to bump a
//! counter and at most one exists per counter at a time; a single
//! [`CounterReader`] reads and resets all of them. No lock is taken on the
//! hot path, only one atomic read-modify-write per increment.

use crate::types::CounterId;
use portable_atomic::{AtomicBool, AtomicU32, Ordering};

/// Storage for all activity counters.
///
/// Intended to live in a `static` so tasks can hold `'static` handles.
pub struct ActivityCounters {
    counts: [AtomicU32; CounterId::COUNT],
    writers: [AtomicBool; CounterId::COUNT],
    reader: AtomicBool,
}

#[allow(clippy::declare_interior_mutable_const)]
const ZERO: AtomicU32 = AtomicU32::new(0);
#[allow(clippy::declare_interior_mutable_const)]
const FREE: AtomicBool = AtomicBool::new(false);

impl ActivityCounters {
    pub const fn new() -> Self {
        Self {
            counts: [ZERO; CounterId::COUNT],
            writers: [FREE; CounterId::COUNT],
            reader: AtomicBool::new(false),
        }
    }

    /// Claim the write handle for `id`.
    ///
    /// Returns `None` while another writer for the same counter is alive.
    /// The claim is released when the handle is dropped.
    pub fn claim_writer(&self, id: CounterId) -> Option<CounterWriter<'_>> {
        self.writers[id.index()]
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| CounterWriter { counters: self, id })
    }

    /// Claim the read handle. Only one reader can ever exist.
    pub fn claim_reader(&self) -> Option<CounterReader<'_>> {
        self.reader
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| CounterReader { counters: self })
    }

    /// Current value of a counter, without resetting it.
    pub fn peek(&self, id: CounterId) -> u32 {
        self.counts[id.index()].load(Ordering::Relaxed)
    }
}

impl Default for ActivityCounters {
    fn default() -> Self {
        Self::new()
    }
}

/// Exclusive increment handle for one counter.
pub struct CounterWriter<'a> {
    counters: &'a ActivityCounters,
    id: CounterId,
}

impl CounterWriter<'_> {
    #[inline]
    pub fn increment(&mut self) {
        self.counters.counts[self.id.index()].fetch_add(1, Ordering::Relaxed);
    }

    pub fn id(&self) -> CounterId {
        self.id
    }
}

impl Drop for CounterWriter<'_> {
    fn drop(&mut self) {
        self.counters.writers[self.id.index()].store(false, Ordering::Release);
    }
}

/// The estimator's handle: reads every counter and zeroes it.
pub struct CounterReader<'a> {
    counters: &'a ActivityCounters,
}

impl CounterReader<'_> {
    /// Take a snapshot of all counters, resetting each one as it is read.
    ///
    /// Each counter is swapped with zero, so an increment racing with the
    /// reset lands either in this window or the next one, never nowhere.
    /// The six swaps are not one atomic step; the snapshot is a sample, not
    /// a consistent cut.
    pub fn take(&mut self) -> Snapshot {
        let mut counts = [0u32; CounterId::COUNT];

        for (slot, counter) in counts.iter_mut().zip(self.counters.counts.iter()) {
            *slot = counter.swap(0, Ordering::Relaxed);
        }
        Snapshot { counts }
    }
}

impl Drop for CounterReader<'_> {
    fn drop(&mut self) {
        self.counters.reader.store(false, Ordering::Release);
    }
}

/// Counter values for one measurement window.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    counts: [u32; CounterId::COUNT],
}

impl Snapshot {
    /// Build a snapshot from raw values ordered as `CounterId::ALL`.
    pub const fn from_counts(counts: [u32; CounterId::COUNT]) -> Self {
        Self { counts }
    }

    pub fn get(&self, id: CounterId) -> u32 {
        self.counts[id.index()]
    }

    /// Ticks of every counter except idle.
    pub fn useful(&self) -> u64 {
        CounterId::ALL
            .iter()
            .filter(|id| !id.is_idle())
            .map(|id| u64::from(self.get(*id)))
            .sum()
    }

    /// Ticks of every counter, idle included.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|c| u64::from(*c)).sum()
    }
}
