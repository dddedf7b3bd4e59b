//! Indicator output driver
//!
//! Four groups of two push-pull outputs. The bank lives behind a blocking
//! critical-section mutex because three executors touch it: toggle tasks,
//! the lifecycle manager (forced reset) and the fault handler.

use crate::config::SLOT_COUNT;
use crate::types::{IndicatorGroup, Level};
use core::cell::RefCell;
use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};
use embedded_hal::digital::StatefulOutputPin;

/// One indicator pair.
pub struct PinPair<P> {
    first: P,
    second: P,
}

impl<P: StatefulOutputPin> PinPair<P> {
    pub fn new(first: P, second: P) -> Self {
        Self { first, second }
    }

    // Pin errors are ignored: RP2040 outputs are infallible, and there is no
    // channel to report a failing indicator on anyway.

    fn set(&mut self, level: Level) {
        match level {
            Level::Active => {
                let _ = self.first.set_high();
                let _ = self.second.set_high();
            }
            Level::Inactive => {
                let _ = self.first.set_low();
                let _ = self.second.set_low();
            }
        }
    }

    fn toggle(&mut self) {
        let _ = self.first.toggle();
        let _ = self.second.toggle();
    }

    fn level(&mut self) -> Level {
        match self.first.is_set_high() {
            Ok(true) => Level::Active,
            _ => Level::Inactive,
        }
    }

    pub fn pins(&self) -> (&P, &P) {
        (&self.first, &self.second)
    }
}

/// Access to indicator groups, as seen by tasks and the lifecycle manager.
pub trait OutputDriver {
    fn set(&self, group: IndicatorGroup, level: Level);

    fn toggle(&self, group: IndicatorGroup);

    /// Toggle `group` only if `alive()` holds, evaluated under the same lock
    /// as the toggle. Returns the result of `alive()`.
    fn toggle_if(&self, group: IndicatorGroup, alive: impl FnOnce() -> bool) -> bool;

    fn level(&self, group: IndicatorGroup) -> Level;
}

/// The indicator bank shared between executors.
pub struct Indicators<P> {
    pairs: Mutex<CriticalSectionRawMutex, RefCell<[PinPair<P>; SLOT_COUNT]>>,
}

impl<P: StatefulOutputPin> Indicators<P> {
    /// Takes the four pairs in `IndicatorGroup::ALL` order and drives all of
    /// them inactive.
    pub fn new(mut pairs: [PinPair<P>; SLOT_COUNT]) -> Self {
        for pair in pairs.iter_mut() {
            pair.set(Level::Inactive);
        }
        Self {
            pairs: Mutex::new(RefCell::new(pairs)),
        }
    }

    fn with_pair<R>(&self, group: IndicatorGroup, f: impl FnOnce(&mut PinPair<P>) -> R) -> R {
        self.pairs.lock(|pairs| f(&mut pairs.borrow_mut()[group.index()]))
    }

    /// Run `f` against the raw pins of a group. Meant for inspection.
    pub fn inspect<R>(&self, group: IndicatorGroup, f: impl FnOnce(&PinPair<P>) -> R) -> R {
        self.with_pair(group, |pair| f(pair))
    }
}

impl<P: StatefulOutputPin> OutputDriver for Indicators<P> {
    fn set(&self, group: IndicatorGroup, level: Level) {
        self.with_pair(group, |pair| pair.set(level));
    }

    fn toggle(&self, group: IndicatorGroup) {
        self.with_pair(group, |pair| pair.toggle());
    }

    fn toggle_if(&self, group: IndicatorGroup, alive: impl FnOnce() -> bool) -> bool {
        self.with_pair(group, |pair| {
            let alive = alive();
            if alive {
                pair.toggle();
            }
            alive
        })
    }

    fn level(&self, group: IndicatorGroup) -> Level {
        self.with_pair(group, |pair| pair.level())
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use core::convert::Infallible;
    use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};

    /// Output pin that records its level and the number of toggles.
    #[derive(Debug, Default)]
    pub struct MockPin {
        pub high: bool,
        pub toggles: u32,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    impl StatefulOutputPin for MockPin {
        fn is_set_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.high)
        }

        fn is_set_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.high)
        }

        fn toggle(&mut self) -> Result<(), Self::Error> {
            self.high = !self.high;
            self.toggles += 1;
            Ok(())
        }
    }

    pub fn bank() -> super::Indicators<MockPin> {
        super::Indicators::new(core::array::from_fn(|_| {
            super::PinPair::new(MockPin::default(), MockPin::default())
        }))
    }
}
