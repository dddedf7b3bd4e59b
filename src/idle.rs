//! Idle hook
//!
//! The thread-mode executor calls `notify` once each time it runs out of
//! ready tasks and is about to sleep.

use crate::counters::CounterWriter;
use crate::types::CounterId;

pub struct IdleHook<'a> {
    activity: CounterWriter<'a>,
}

impl<'a> IdleHook<'a> {
    /// `activity` must be the writer for `CounterId::Idle`.
    pub fn new(activity: CounterWriter<'a>) -> Self {
        debug_assert_eq!(activity.id(), CounterId::Idle);
        Self { activity }
    }

    #[inline]
    pub fn notify(&mut self) {
        self.activity.increment();
    }
}
