//! RP2040 runtime: executors, embassy tasks and the embassy-backed
//! supervisor.

pub mod button;
pub mod executor;
pub mod monitor;
pub mod supervisor;
pub mod toggle;

use crate::config::interrupt_level;
use crate::counters::ActivityCounters;
use crate::indicators::Indicators;
use crate::lease::Leases;
use crate::load::LoadEstimate;
use embassy_rp::{gpio::Output, interrupt::Priority};

/// The indicator bank as wired on the board.
pub type Board = Indicators<Output<'static>>;

pub static COUNTERS: ActivityCounters = ActivityCounters::new();
pub static LEASES: Leases = Leases::new();
pub static LOAD: LoadEstimate = LoadEstimate::new();

/// NVIC priority for a logical tier above the toggle tier.
pub fn interrupt_priority(tier: u8) -> Priority {
    match interrupt_level(tier) {
        0 => Priority::P0,
        1 => Priority::P1,
        2 => Priority::P2,
        _ => Priority::P3,
    }
}
