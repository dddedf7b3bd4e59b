//! One toggle task's state, independent of the executor.
//!
//! The lease check and the toggle happen under the indicator lock, so once
//! the supervisor has revoked the lease and the manager has driven the pair
//! low, the task cannot flip it back on.

use crate::counters::CounterWriter;
use crate::indicators::OutputDriver;
use crate::lease::Lease;
use crate::types::IndicatorGroup;

pub struct Toggler<'a, D> {
    lease: Lease<'a>,
    indicators: &'a D,
    activity: CounterWriter<'a>,
}

impl<'a, D: OutputDriver> Toggler<'a, D> {
    pub fn new(lease: Lease<'a>, indicators: &'a D, activity: CounterWriter<'a>) -> Self {
        Self {
            lease,
            indicators,
            activity,
        }
    }

    pub fn group(&self) -> IndicatorGroup {
        self.lease.group()
    }

    /// One loop iteration: toggle the pair and count the tick.
    ///
    /// Returns `false`, without touching the pins or the counter, once the
    /// lease has been revoked. The caller must then stop and drop `self`,
    /// which releases the counter claim.
    pub fn tick(&mut self) -> bool {
        let lease = self.lease;

        if !self.indicators.toggle_if(lease.group(), || lease.is_current()) {
            return false;
        }
        self.activity.increment();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counters::ActivityCounters;
    use crate::indicators::mock::bank;
    use crate::lease::Leases;
    use crate::types::{CounterId, Level};

    #[test]
    fn test_tick_toggles_and_counts() {
        let bank = bank();
        let counters = ActivityCounters::new();
        let leases = Leases::new();
        let activity = counters.claim_writer(CounterId::Blue).unwrap();
        let mut toggler = Toggler::new(leases.issue(IndicatorGroup::Blue), &bank, activity);

        assert_eq!(toggler.group(), IndicatorGroup::Blue);
        assert!(toggler.tick());
        assert_eq!(bank.level(IndicatorGroup::Blue), Level::Active);
        assert!(toggler.tick());
        assert_eq!(bank.level(IndicatorGroup::Blue), Level::Inactive);
        assert_eq!(counters.peek(CounterId::Blue), 2);
    }

    #[test]
    fn test_revoked_tick_leaves_pair_dark() {
        let bank = bank();
        let counters = ActivityCounters::new();
        let leases = Leases::new();
        let lease = leases.issue(IndicatorGroup::Orange);
        let activity = counters.claim_writer(CounterId::Orange).unwrap();
        let mut toggler = Toggler::new(lease, &bank, activity);

        assert!(toggler.tick());
        assert_eq!(bank.level(IndicatorGroup::Orange), Level::Active);

        // What the manager does on terminate
        lease.revoke();
        bank.set(IndicatorGroup::Orange, Level::Inactive);

        assert!(!toggler.tick());
        assert_eq!(bank.level(IndicatorGroup::Orange), Level::Inactive);
        assert_eq!(counters.peek(CounterId::Orange), 1);
        bank.inspect(IndicatorGroup::Orange, |pair| {
            let (a, b) = pair.pins();
            assert_eq!(a.toggles, 1);
            assert_eq!(b.toggles, 1);
        });

        // Dropping the retired task frees its counter for the next spawn
        drop(toggler);
        assert!(counters.claim_writer(CounterId::Orange).is_some());
    }
}
