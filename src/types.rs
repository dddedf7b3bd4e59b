use crate::config::SLOT_COUNT;

// The four indicator pairs. Each group owns two output pins and, when its
// toggle task is running, blinks both of them together.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "rp2040", derive(defmt::Format))]
pub enum IndicatorGroup {
    Red,
    Green,
    Blue,
    Orange,
}

impl IndicatorGroup {
    pub const ALL: [IndicatorGroup; SLOT_COUNT] = [
        IndicatorGroup::Red,
        IndicatorGroup::Green,
        IndicatorGroup::Blue,
        IndicatorGroup::Orange,
    ];

    // The pair that is lit when the firmware enters its fault state.

    pub const FAULT: IndicatorGroup = IndicatorGroup::Red;

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            IndicatorGroup::Red => "red",
            IndicatorGroup::Green => "green",
            IndicatorGroup::Blue => "blue",
            IndicatorGroup::Orange => "orange",
        }
    }
}

// Identities that own an activity counter. The first five are periodic
// tasks; `Idle` is bumped by the executor's idle hook.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "rp2040", derive(defmt::Format))]
pub enum CounterId {
    Red,
    Green,
    Blue,
    Orange,
    InputPoll,
    Idle,
}

impl CounterId {
    pub const COUNT: usize = 6;

    pub const ALL: [CounterId; Self::COUNT] = [
        CounterId::Red,
        CounterId::Green,
        CounterId::Blue,
        CounterId::Orange,
        CounterId::InputPoll,
        CounterId::Idle,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_idle(self) -> bool {
        matches!(self, CounterId::Idle)
    }
}

impl From<IndicatorGroup> for CounterId {
    fn from(group: IndicatorGroup) -> Self {
        match group {
            IndicatorGroup::Red => CounterId::Red,
            IndicatorGroup::Green => CounterId::Green,
            IndicatorGroup::Blue => CounterId::Blue,
            IndicatorGroup::Orange => CounterId::Orange,
        }
    }
}

// Logical output level of an indicator pair. `Active` lights the pins.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "rp2040", derive(defmt::Format))]
pub enum Level {
    Active,
    Inactive,
}
