//! Utilization estimate
//!
//! The estimate is the share of non-idle ticks among all ticks counted in the
//! last window. It is a coarse duty-cycle proxy: a tick is one loop
//! iteration of a task or one idle interval, regardless of how long either
//! took. It is not a measurement of CPU time.

use crate::counters::{CounterReader, Snapshot};
use portable_atomic::{AtomicF32, Ordering};

/// Load percentage for one window, in `[0, 100]`.
///
/// An empty window (no ticks at all, as right after start-up) yields `0.0`.
pub fn load_percent(snapshot: &Snapshot) -> f32 {
    let total = snapshot.total();

    if total == 0 {
        return 0.0;
    }
    (100.0 * snapshot.useful() as f64 / total as f64) as f32
}

/// Most recently published load estimate.
///
/// Written by the estimator only; any task may read it. The value is stored
/// atomically, so readers see either the previous or the new estimate.
pub struct LoadEstimate(AtomicF32);

impl LoadEstimate {
    pub const fn new() -> Self {
        Self(AtomicF32::new(0.0))
    }

    pub fn get(&self) -> f32 {
        self.0.load(Ordering::Relaxed)
    }

    fn publish(&self, load: f32) {
        self.0.store(load, Ordering::Relaxed);
    }
}

impl Default for LoadEstimate {
    fn default() -> Self {
        Self::new()
    }
}

/// Periodic load calculation.
///
/// Owns the counter reader, so it is the only code that can reset counters.
pub struct Estimator<'a> {
    reader: CounterReader<'a>,
    published: &'a LoadEstimate,
}

impl<'a> Estimator<'a> {
    pub fn new(reader: CounterReader<'a>, published: &'a LoadEstimate) -> Self {
        Self { reader, published }
    }

    /// Run one estimator pass: snapshot and reset the counters, compute the
    /// load and publish it. Returns the published value.
    pub fn run_once(&mut self) -> f32 {
        let snapshot = self.reader.take();
        let load = load_percent(&snapshot);

        self.published.publish(load);
        crate::log_debug!(
            "load {}% ({} of {} ticks)",
            load,
            snapshot.useful(),
            snapshot.total()
        );
        load
    }
}
