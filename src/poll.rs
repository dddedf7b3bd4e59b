//! Input polling and the round-robin cursor.
//!
//! The button is sampled, not edge-latched: every poll that reads the input
//! as active counts as a new press. Holding the button therefore walks the
//! cursor through the slots once per poll period.

use crate::config::SLOT_COUNT;
use crate::counters::CounterWriter;
use crate::fault::Fault;
use crate::indicators::OutputDriver;
use crate::slots::{LifecycleManager, SlotChange};
use crate::supervisor::Supervisor;
use embedded_hal::digital::InputPin;

/// Round-robin position in `[0, SLOT_COUNT)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cursor(usize);

impl Cursor {
    pub const fn new() -> Self {
        Self(0)
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn next(self) -> Self {
        Self((self.0 + 1) % SLOT_COUNT)
    }

    /// Step forward and return the new position.
    pub fn advance(&mut self) -> usize {
        *self = self.next();
        self.0
    }
}

/// State of the input poll task.
pub struct InputPoller<'a, I, S: Supervisor, D> {
    input: I,
    cursor: Cursor,
    manager: LifecycleManager<'a, S, D>,
    activity: CounterWriter<'a>,
}

impl<'a, I, S, D> InputPoller<'a, I, S, D>
where
    I: InputPin,
    S: Supervisor,
    D: OutputDriver,
{
    pub fn new(input: I, manager: LifecycleManager<'a, S, D>, activity: CounterWriter<'a>) -> Self {
        Self {
            input,
            cursor: Cursor::new(),
            manager,
            activity,
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn manager(&self) -> &LifecycleManager<'a, S, D> {
        &self.manager
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// One poll cycle. Calls the lifecycle manager at most once.
    ///
    /// A read error counts as "not pressed".
    pub fn poll(&mut self) -> Result<Option<SlotChange>, Fault> {
        self.activity.increment();

        if !self.input.is_high().unwrap_or(false) {
            return Ok(None);
        }

        let index = self.cursor.advance();
        self.manager.manage(index).map(Some)
    }
}
