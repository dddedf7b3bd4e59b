#![cfg_attr(not(test), no_std)]

//! led_carousel - dynamic task lifecycle demo for the RP2040
//!
//! A button walks a cursor over four task slots. Each visit starts or stops
//! the toggle task of one indicator pair. A high-priority estimator turns
//! per-task activity counters into a rough load figure.
//!
//! Everything outside `rp` builds on the host and is unit tested there.

#[macro_use]
mod log;

pub mod config;
pub mod counters;
pub mod fault;
pub mod idle;
pub mod indicators;
pub mod lease;
pub mod load;
pub mod poll;
pub mod slots;
pub mod supervisor;
pub mod toggle;
pub mod types;

#[cfg(feature = "rp2040")]
pub mod rp;
