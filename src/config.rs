//! Tunables for the task carousel.
//!
//! Priorities are logical tiers (higher runs first). The lowest tier runs in
//! thread mode on `rp::executor::IdleExecutor`; every tier above it gets an
//! interrupt executor at the level given by [`interrupt_level`]. The wiring
//! lives in `main.rs`.
//!
//! Embassy allocates task futures statically, so there is no per-task stack
//! size here. The shared task arena is sized by the `task-arena-size-*`
//! feature of `embassy-executor` in `Cargo.toml`.

use embassy_time::Duration;

/// Number of task slots, one per indicator group.
pub const SLOT_COUNT: usize = 4;

/// Delay between two toggles of an indicator pair.
pub const TOGGLE_PERIOD: Duration = Duration::from_millis(100);

/// Delay between two reads of the user button.
pub const POLL_PERIOD: Duration = Duration::from_millis(200);

/// Length of one load-measurement window.
pub const CALC_PERIOD: Duration = Duration::from_millis(100);

pub const TOGGLE_PRIORITY: u8 = 1;
pub const POLL_PRIORITY: u8 = 2;
pub const ESTIMATOR_PRIORITY: u8 = 3;

/// Number of NVIC priority levels on the RP2040 (0 is the most urgent).
pub const INTERRUPT_LEVELS: u8 = 4;

/// NVIC level for a tier above `TOGGLE_PRIORITY`.
///
/// The first tier above the toggles gets the least urgent level; each
/// further tier is one level more urgent, saturating at 0.
pub const fn interrupt_level(tier: u8) -> u8 {
    let above = tier.saturating_sub(TOGGLE_PRIORITY + 1);
    (INTERRUPT_LEVELS - 1).saturating_sub(above)
}

/// Capacity of the toggle task pool. A group can be respawned while its
/// previous incarnation has not yet observed its retirement, so each group
/// may briefly hold two pool entries.
pub const TOGGLE_POOL_SIZE: usize = 2 * SLOT_COUNT;
