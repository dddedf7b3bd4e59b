//! Thread-mode executor with an idle hook.
//!
//! Same loop as embassy's cortex-m thread executor (poll the run queue, then
//! `WFE`), with the idle hook notified each time the queue is drained and
//! the core is about to sleep.

use crate::idle::IdleHook;
use core::marker::PhantomData;
use embassy_executor::{raw, Spawner};

// Pender context embassy's cortex-m `__pender` treats as "thread mode":
// it answers with `SEV`, which wakes the `WFE` below.
const THREAD_PENDER: usize = usize::MAX;

pub struct IdleExecutor {
    inner: raw::Executor,
    not_send: PhantomData<*mut ()>,
}

impl IdleExecutor {
    pub fn new() -> Self {
        Self {
            inner: raw::Executor::new(THREAD_PENDER as *mut ()),
            not_send: PhantomData,
        }
    }

    /// Run the executor forever.
    ///
    /// `init` is called once with a spawner for this executor, before the
    /// first poll.
    pub fn run(&'static mut self, mut hook: IdleHook<'static>, init: impl FnOnce(Spawner)) -> ! {
        init(self.inner.spawner());

        loop {
            unsafe { self.inner.poll() };
            hook.notify();
            cortex_m::asm::wfe();
        }
    }
}

impl Default for IdleExecutor {
    fn default() -> Self {
        Self::new()
    }
}
