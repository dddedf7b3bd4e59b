//! Task leases
//!
//! Embassy cannot kill a task from the outside. Instead every spawned toggle
//! task carries a lease: a snapshot of its group's generation number. The
//! supervisor retires a task by bumping the generation; the task sees the
//! mismatch on its next check and returns.

use crate::config::SLOT_COUNT;
use crate::types::IndicatorGroup;
use portable_atomic::{AtomicU32, Ordering};

pub struct Leases {
    generations: [AtomicU32; SLOT_COUNT],
}

#[allow(clippy::declare_interior_mutable_const)]
const GEN0: AtomicU32 = AtomicU32::new(0);

impl Leases {
    pub const fn new() -> Self {
        Self {
            generations: [GEN0; SLOT_COUNT],
        }
    }

    /// Start a new generation for `group`. Any lease issued earlier for the
    /// same group stops being current.
    pub fn issue(&self, group: IndicatorGroup) -> Lease<'_> {
        let generation = &self.generations[group.index()];
        let issued = generation.fetch_add(1, Ordering::AcqRel).wrapping_add(1);

        Lease {
            group,
            generation,
            issued,
        }
    }
}

impl Default for Leases {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Copy, Clone)]
pub struct Lease<'a> {
    group: IndicatorGroup,
    generation: &'a AtomicU32,
    issued: u32,
}

impl Lease<'_> {
    pub fn group(&self) -> IndicatorGroup {
        self.group
    }

    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::Acquire) == self.issued
    }

    /// Retire the task holding this lease. Does nothing if a newer lease
    /// has already been issued.
    pub fn revoke(&self) {
        let _ = self.generation.compare_exchange(
            self.issued,
            self.issued.wrapping_add(1),
            Ordering::AcqRel,
            Ordering::Relaxed,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_revoke() {
        let leases = Leases::new();
        let lease = leases.issue(IndicatorGroup::Green);

        assert!(lease.is_current());
        assert_eq!(lease.group(), IndicatorGroup::Green);

        lease.revoke();
        assert!(!lease.is_current());
    }

    #[test]
    fn test_new_lease_supersedes_old() {
        let leases = Leases::new();
        let old = leases.issue(IndicatorGroup::Red);
        old.revoke();

        let new = leases.issue(IndicatorGroup::Red);
        assert!(new.is_current());
        assert!(!old.is_current());

        // Revoking a stale lease must not retire the new task
        old.revoke();
        assert!(new.is_current());
    }

    #[test]
    fn test_groups_are_independent() {
        let leases = Leases::new();
        let red = leases.issue(IndicatorGroup::Red);
        let blue = leases.issue(IndicatorGroup::Blue);

        red.revoke();
        assert!(!red.is_current());
        assert!(blue.is_current());
    }
}
