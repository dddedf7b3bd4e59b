use crate::config::CALC_PERIOD;
use crate::load::Estimator;
use embassy_time::Ticker;

// Publishes a load estimate once per window. The first pass runs before any
// task has ticked, so it reports zero.

#[embassy_executor::task]
pub async fn task(mut estimator: Estimator<'static>) -> ! {
    let mut ticker = Ticker::every(CALC_PERIOD);

    loop {
        estimator.run_once();
        ticker.next().await;
    }
}
