//! Task slot table and lifecycle manager
//!
//! One slot per indicator group. Visiting an empty slot starts that group's
//! toggle task; visiting an occupied one stops it and forces the group dark.

use crate::config::SLOT_COUNT;
use crate::fault::Fault;
use crate::indicators::OutputDriver;
use crate::supervisor::{Supervisor, ToggleJob};
use crate::types::{IndicatorGroup, Level};

pub enum Slot<H> {
    Empty,
    Running(H),
}

impl<H> Slot<H> {
    pub fn is_running(&self) -> bool {
        matches!(self, Slot::Running(_))
    }
}

/// Fixed table of task slots, indexed by `IndicatorGroup::index()`.
pub struct TaskSlots<H> {
    slots: [Slot<H>; SLOT_COUNT],
}

impl<H> TaskSlots<H> {
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| Slot::Empty),
        }
    }

    pub fn get(&self, index: usize) -> Option<&Slot<H>> {
        self.slots.get(index)
    }

    pub fn is_running(&self, group: IndicatorGroup) -> bool {
        self.slots[group.index()].is_running()
    }

    /// Number of occupied slots.
    pub fn running(&self) -> usize {
        self.slots.iter().filter(|s| s.is_running()).count()
    }

    /// Groups whose toggle task is currently running.
    pub fn iter_running(&self) -> impl Iterator<Item = IndicatorGroup> + '_ {
        IndicatorGroup::ALL
            .into_iter()
            .filter(|group| self.is_running(*group))
    }
}

impl<H> Default for TaskSlots<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a successful `manage` call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "rp2040", derive(defmt::Format))]
pub enum SlotChange {
    Spawned(IndicatorGroup),
    Terminated(IndicatorGroup),
}

/// Owns the slot table and drives the supervisor.
///
/// `manage` takes `&mut self`, so callers are serialized by construction.
/// In the firmware only the input poll task holds the manager.
pub struct LifecycleManager<'a, S: Supervisor, D> {
    slots: TaskSlots<S::Handle>,
    supervisor: S,
    driver: &'a D,
}

impl<'a, S: Supervisor, D: OutputDriver> LifecycleManager<'a, S, D> {
    pub fn new(supervisor: S, driver: &'a D) -> Self {
        Self {
            slots: TaskSlots::new(),
            supervisor,
            driver,
        }
    }

    pub fn slots(&self) -> &TaskSlots<S::Handle> {
        &self.slots
    }

    pub fn supervisor(&self) -> &S {
        &self.supervisor
    }

    pub fn driver(&self) -> &'a D {
        self.driver
    }

    /// Flip the task in slot `index` between stopped and running.
    ///
    /// # Errors
    ///
    /// - `Fault::SlotOutOfRange` if `index >= SLOT_COUNT`
    /// - `Fault::SpawnFailed` if the supervisor cannot start the task; the
    ///   slot stays empty
    ///
    /// Both are fatal for the caller.
    pub fn manage(&mut self, index: usize) -> Result<SlotChange, Fault> {
        let group = IndicatorGroup::from_index(index).ok_or(Fault::SlotOutOfRange(index))?;
        let slot = &mut self.slots.slots[index];

        match core::mem::replace(slot, Slot::Empty) {
            Slot::Empty => {
                let handle = self
                    .supervisor
                    .spawn(ToggleJob { group })
                    .map_err(|source| Fault::SpawnFailed { group, source })?;

                *slot = Slot::Running(handle);
                crate::log_info!("{} toggle task started", group.name());
                Ok(SlotChange::Spawned(group))
            }
            Slot::Running(handle) => {
                self.supervisor.terminate(handle);
                self.driver.set(group, Level::Inactive);
                crate::log_info!("{} toggle task stopped", group.name());
                Ok(SlotChange::Terminated(group))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::mock::{bank, MockPin};
    use crate::indicators::Indicators;
    use crate::supervisor::mock::{Event, RecordingSupervisor};
    use crate::supervisor::SpawnError;

    fn manager(bank: &Indicators<MockPin>) -> LifecycleManager<'_, RecordingSupervisor, Indicators<MockPin>> {
        LifecycleManager::new(RecordingSupervisor::default(), bank)
    }

    #[test]
    fn test_manage_once_spawns() {
        for group in IndicatorGroup::ALL {
            let bank = bank();
            let mut mgr = manager(&bank);

            assert_eq!(mgr.manage(group.index()), Ok(SlotChange::Spawned(group)));
            assert!(mgr.slots().is_running(group));
            assert!(mgr.supervisor().is_live(group));
            assert_eq!(mgr.slots().running(), 1);
        }
    }

    #[test]
    fn test_manage_twice_clears_and_darkens() {
        for group in IndicatorGroup::ALL {
            let bank = bank();
            let mut mgr = manager(&bank);

            mgr.manage(group.index()).unwrap();

            // Task left its pair lit mid-blink
            bank.toggle(group);
            assert_eq!(bank.level(group), Level::Active);

            assert_eq!(mgr.manage(group.index()), Ok(SlotChange::Terminated(group)));
            assert!(!mgr.slots().is_running(group));
            assert!(!mgr.supervisor().is_live(group));
            assert_eq!(bank.level(group), Level::Inactive);
        }
    }

    #[test]
    fn test_terminate_uses_stored_handle() {
        let bank = bank();
        let mut mgr = manager(&bank);

        mgr.manage(2).unwrap();
        mgr.manage(3).unwrap();
        mgr.manage(2).unwrap();

        let events = &mgr.supervisor().events;
        assert_eq!(events.len(), 3);
        match (&events[0], &events[2]) {
            (Event::Spawned(spawned), Event::Terminated(terminated)) => {
                assert_eq!(spawned, terminated);
                assert_eq!(spawned.group, IndicatorGroup::Blue);
            }
            other => panic!("unexpected events {:?}", other),
        }
    }

    #[test]
    fn test_round_robin_sequence() {
        let bank = bank();
        let mut mgr = manager(&bank);

        for index in [0, 1, 2, 3, 0] {
            mgr.manage(index).unwrap();
        }

        assert!(!mgr.slots().is_running(IndicatorGroup::Red));
        assert!(mgr.slots().is_running(IndicatorGroup::Green));
        assert!(mgr.slots().is_running(IndicatorGroup::Blue));
        assert!(mgr.slots().is_running(IndicatorGroup::Orange));

        let running: Vec<_> = mgr.slots().iter_running().collect();
        assert_eq!(
            running,
            [IndicatorGroup::Green, IndicatorGroup::Blue, IndicatorGroup::Orange]
        );
    }

    #[test]
    fn test_slot_queries() {
        let bank = bank();
        let mut mgr = manager(&bank);

        mgr.manage(IndicatorGroup::Blue.index()).unwrap();

        let slots = mgr.slots();
        assert!(matches!(slots.get(2), Some(Slot::Running(_))));
        assert!(matches!(slots.get(0), Some(Slot::Empty)));
        assert!(slots.get(SLOT_COUNT).is_none());
        assert!(slots.is_running(IndicatorGroup::Blue));
        assert_eq!(slots.running(), 1);
        assert_eq!(slots.iter_running().collect::<Vec<_>>(), [IndicatorGroup::Blue]);
    }

    #[test]
    fn test_out_of_range_is_fault() {
        let bank = bank();
        let mut mgr = manager(&bank);

        assert_eq!(mgr.manage(7), Err(Fault::SlotOutOfRange(7)));
        assert_eq!(mgr.manage(SLOT_COUNT), Err(Fault::SlotOutOfRange(SLOT_COUNT)));
        assert!(mgr.supervisor().events.is_empty());
        assert_eq!(mgr.slots().running(), 0);
    }

    #[test]
    fn test_spawn_failure_is_fault_and_slot_stays_empty() {
        let bank = bank();
        let mut mgr = manager(&bank);
        mgr.supervisor.fail_next = Some(SpawnError::PoolExhausted);

        assert_eq!(
            mgr.manage(1),
            Err(Fault::SpawnFailed {
                group: IndicatorGroup::Green,
                source: SpawnError::PoolExhausted,
            })
        );
        assert!(matches!(mgr.slots().get(1), Some(Slot::Empty)));
    }
}
