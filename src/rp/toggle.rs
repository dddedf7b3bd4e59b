use super::Board;
use crate::config::{TOGGLE_PERIOD, TOGGLE_POOL_SIZE};
use crate::toggle::Toggler;
use embassy_time::Ticker;

// Blinks one indicator pair until its lease is revoked. A retired task
// returns on its next tick, which frees its pool entry and its counter
// claim.

#[embassy_executor::task(pool_size = TOGGLE_POOL_SIZE)]
pub async fn task(mut toggler: Toggler<'static, Board>) {
    let mut ticker = Ticker::every(TOGGLE_PERIOD);

    while toggler.tick() {
        ticker.next().await;
    }

    crate::log_debug!("{} toggle task retired", toggler.group().name());
}
