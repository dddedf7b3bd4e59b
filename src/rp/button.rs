use super::{supervisor::EmbassySupervisor, Board};
use crate::config::POLL_PERIOD;
use crate::fault;
use crate::poll::InputPoller;
use embassy_rp::gpio::Input;
use embassy_time::Ticker;

pub type Poller = InputPoller<'static, Input<'static>, EmbassySupervisor, Board>;

// Samples the user button and starts/stops toggle tasks through the
// lifecycle manager. Any fault from the manager is terminal.

#[embassy_executor::task]
pub async fn task(mut poller: Poller) -> ! {
    let mut ticker = Ticker::every(POLL_PERIOD);

    loop {
        if let Err(err) = poller.poll() {
            fault::halt(poller.manager().driver(), err);
        }
        ticker.next().await;
    }
}
