//! Task supervisor seam
//!
//! The lifecycle manager never talks to the executor directly. It hands a
//! [`ToggleJob`] to a [`Supervisor`], keeps the returned handle, and gives it
//! back to terminate the task.

use crate::types::IndicatorGroup;
use thiserror::Error;

/// The work a spawned toggle task performs: blink one indicator group.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "rp2040", derive(defmt::Format))]
pub struct ToggleJob {
    pub group: IndicatorGroup,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "rp2040", derive(defmt::Format))]
pub enum SpawnError {
    /// No room left in the task pool.
    #[error("task pool exhausted")]
    PoolExhausted,
    /// The group's activity counter still has a live writer.
    #[error("activity counter still claimed")]
    CounterBusy,
}

pub trait Supervisor {
    type Handle;

    /// Start `job` at the toggle priority.
    fn spawn(&mut self, job: ToggleJob) -> Result<Self::Handle, SpawnError>;

    /// Stop the task behind `handle`. Unconditional; the task gets no
    /// chance to clean up.
    fn terminate(&mut self, handle: Self::Handle);
}
