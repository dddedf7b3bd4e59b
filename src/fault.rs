//! Fatal errors and the terminal fault state.
//!
//! There is no recovery path. Once a fault is raised the fault pair is lit
//! and the caller parks forever; nothing supervises the firmware, so a
//! visible stuck state is the only report.

use crate::indicators::OutputDriver;
use crate::supervisor::SpawnError;
use crate::types::{IndicatorGroup, Level};
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "rp2040", derive(defmt::Format))]
pub enum Fault {
    #[error("failed to spawn {group:?} toggle task: {source}")]
    SpawnFailed {
        group: IndicatorGroup,
        source: SpawnError,
    },

    #[error("slot index {0} out of range")]
    SlotOutOfRange(usize),

    #[error("failed to start {0} task")]
    StartupSpawn(&'static str),
}

/// Turn the result of a start-up spawn into a fault naming the task.
pub fn startup<E>(task: &'static str, result: Result<(), E>) -> Result<(), Fault> {
    result.map_err(|_| Fault::StartupSpawn(task))
}

/// Drive the fault pair active. Leaves every other group as it is.
pub fn signal(driver: &impl OutputDriver) {
    driver.set(IndicatorGroup::FAULT, Level::Active);
}

/// Enter the terminal fault state. Never returns.
///
/// Must be called from a context that outranks the toggle tasks: spinning
/// here starves them, so the fault pair stays lit.
pub fn halt(driver: &impl OutputDriver, fault: Fault) -> ! {
    crate::log_error!("fault: {}", fault);
    signal(driver);

    loop {
        core::hint::spin_loop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::mock::bank;

    #[test]
    fn test_signal_lights_fault_pair() {
        let bank = bank();
        bank.set(IndicatorGroup::Green, Level::Active);

        signal(&bank);

        bank.inspect(IndicatorGroup::FAULT, |pair| {
            let (a, b) = pair.pins();
            assert!(a.high);
            assert!(b.high);
        });
        assert_eq!(bank.level(IndicatorGroup::Green), Level::Active);
        assert_eq!(bank.level(IndicatorGroup::Blue), Level::Inactive);
    }

    #[test]
    fn test_signal_holds_when_already_toggling() {
        let bank = bank();
        bank.toggle(IndicatorGroup::FAULT);
        bank.toggle(IndicatorGroup::FAULT);

        signal(&bank);
        assert_eq!(bank.level(IndicatorGroup::FAULT), Level::Active);
    }

    #[test]
    fn test_startup_spawn_maps_to_fault() {
        assert_eq!(startup::<SpawnError>("input poll", Ok(())), Ok(()));
        assert_eq!(
            startup("input poll", Err(SpawnError::PoolExhausted)),
            Err(Fault::StartupSpawn("input poll"))
        );
    }

    #[test]
    fn test_fault_messages() {
        let fault = Fault::SlotOutOfRange(7);
        assert_eq!(format!("{}", fault), "slot index 7 out of range");

        let fault = Fault::SpawnFailed {
            group: IndicatorGroup::Blue,
            source: SpawnError::PoolExhausted,
        };
        assert_eq!(
            format!("{}", fault),
            "failed to spawn Blue toggle task: task pool exhausted"
        );

        let fault = Fault::StartupSpawn("load estimator");
        assert_eq!(format!("{}", fault), "failed to start load estimator task");
    }
}
