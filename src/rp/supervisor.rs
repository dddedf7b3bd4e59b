use super::{toggle, Board};
use crate::counters::ActivityCounters;
use crate::lease::{Lease, Leases};
use crate::supervisor::{SpawnError, Supervisor, ToggleJob};
use crate::toggle::Toggler;
use embassy_executor::SendSpawner;

/// Spawns toggle tasks onto the thread-mode executor.
///
/// Runs on a higher-priority executor than the tasks it spawns, hence the
/// `SendSpawner`. Termination revokes the task's lease.
pub struct EmbassySupervisor {
    spawner: SendSpawner,
    indicators: &'static Board,
    counters: &'static ActivityCounters,
    leases: &'static Leases,
}

impl EmbassySupervisor {
    pub fn new(
        spawner: SendSpawner,
        indicators: &'static Board,
        counters: &'static ActivityCounters,
        leases: &'static Leases,
    ) -> Self {
        Self {
            spawner,
            indicators,
            counters,
            leases,
        }
    }
}

impl Supervisor for EmbassySupervisor {
    type Handle = Lease<'static>;

    fn spawn(&mut self, job: ToggleJob) -> Result<Lease<'static>, SpawnError> {
        let activity = self
            .counters
            .claim_writer(job.group.into())
            .ok_or(SpawnError::CounterBusy)?;
        let lease = self.leases.issue(job.group);

        let toggler = Toggler::new(lease, self.indicators, activity);

        // On failure the token drops its arguments, releasing the counter.
        self.spawner
            .spawn(toggle::task(toggler))
            .map_err(|_| {
                lease.revoke();
                SpawnError::PoolExhausted
            })?;
        Ok(lease)
    }

    fn terminate(&mut self, lease: Lease<'static>) {
        lease.revoke();
    }
}
