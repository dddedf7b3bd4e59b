#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::{info, unwrap};
use embassy_executor::InterruptExecutor;
use embassy_rp::{
    gpio::{Input, Level, Output, Pull},
    interrupt,
    interrupt::InterruptExt,
};
use led_carousel::{
    config::{ESTIMATOR_PRIORITY, POLL_PRIORITY},
    fault,
    idle::IdleHook,
    indicators::{Indicators, PinPair},
    load::Estimator,
    poll::InputPoller,
    rp::{
        button, executor::IdleExecutor, interrupt_priority, monitor, supervisor::EmbassySupervisor, Board, COUNTERS,
        LEASES, LOAD,
    },
    slots::LifecycleManager,
    types::CounterId,
};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

// Three priority tiers, one executor each. Toggle tasks run in thread mode
// and only get the core when both interrupt executors are idle.

static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_MED: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_LOW: StaticCell<IdleExecutor> = StaticCell::new();

static INDICATORS: StaticCell<Board> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

#[interrupt]
unsafe fn SWI_IRQ_0() {
    EXECUTOR_MED.on_interrupt()
}

#[entry]
fn main() -> ! {
    let p = embassy_rp::init(Default::default());

    info!("led carousel starting");

    // Four indicator pairs, push-pull, all dark. Order follows
    // `IndicatorGroup::ALL`: red, green, blue, orange.

    let indicators: &'static Board = INDICATORS.init(Indicators::new([
        PinPair::new(Output::new(p.PIN_2, Level::Low), Output::new(p.PIN_3, Level::Low)),
        PinPair::new(Output::new(p.PIN_4, Level::Low), Output::new(p.PIN_5, Level::Low)),
        PinPair::new(Output::new(p.PIN_6, Level::Low), Output::new(p.PIN_7, Level::Low)),
        PinPair::new(Output::new(p.PIN_8, Level::Low), Output::new(p.PIN_9, Level::Low)),
    ]));

    // The button is wired active-high with an external resistor.

    let button = Input::new(p.PIN_15, Pull::None);

    let idle = IdleHook::new(unwrap!(COUNTERS.claim_writer(CounterId::Idle)));

    EXECUTOR_LOW.init(IdleExecutor::new()).run(idle, move |spawner| {
        interrupt::SWI_IRQ_1.set_priority(interrupt_priority(ESTIMATOR_PRIORITY));
        let high = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
        let estimator = Estimator::new(unwrap!(COUNTERS.claim_reader()), &LOAD);

        // No toggle task exists yet, so halting from thread mode still
        // leaves the fault pair lit.
        if let Err(fault) = fault::startup("load estimator", high.spawn(monitor::task(estimator))) {
            fault::halt(indicators, fault)
        }

        interrupt::SWI_IRQ_0.set_priority(interrupt_priority(POLL_PRIORITY));
        let med = EXECUTOR_MED.start(interrupt::SWI_IRQ_0);
        let supervisor = EmbassySupervisor::new(spawner.make_send(), indicators, &COUNTERS, &LEASES);
        let manager = LifecycleManager::new(supervisor, indicators);
        let poller = InputPoller::new(
            button,
            manager,
            unwrap!(COUNTERS.claim_writer(CounterId::InputPoll)),
        );

        if let Err(fault) = fault::startup("input poll", med.spawn(button::task(poller))) {
            fault::halt(indicators, fault)
        }

        info!("tasks started");
    })
}
