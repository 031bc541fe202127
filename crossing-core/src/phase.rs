/// One signal phase of the Normal-mode cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Red,
    Yellow,
    Green,
}

impl Phase {
    /// How long the signal holds this phase, in one-second ticks.
    pub const fn hold_secs(self) -> u8 {
        match self {
            Phase::Red => 10,
            Phase::Yellow => 4,
            Phase::Green => 6,
        }
    }

    /// The fixed Red -> Yellow -> Green -> Red ring. Nothing but the
    /// Normal/Night switch ever alters this order.
    pub const fn next(self) -> Phase {
        match self {
            Phase::Red => Phase::Yellow,
            Phase::Yellow => Phase::Green,
            Phase::Green => Phase::Red,
        }
    }

    /// Duty split for the two signal LED channels, (red %, green %).
    /// Yellow drives both channels, which the two-color LED mixes to amber.
    pub const fn duty(self) -> (u8, u8) {
        let (r, g, _) = PhaseColor::from_phase(self).levels();
        (r, g)
    }

    /// Pedestrian-facing label shown next to the lit slot on the display.
    pub const fn label(self) -> &'static str {
        match self {
            Phase::Red => "PARE",
            Phase::Yellow => "ATENCAO",
            Phase::Green => "SIGA",
        }
    }
}

/// Color to paint the countdown matrix with, on the 0-100 intensity scale
/// of the grid's per-pixel contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhaseColor {
    Red,
    Yellow,
    Green,
    Off,
}

impl PhaseColor {
    pub const fn from_phase(phase: Phase) -> Self {
        match phase {
            Phase::Red => PhaseColor::Red,
            Phase::Yellow => PhaseColor::Yellow,
            Phase::Green => PhaseColor::Green,
        }
    }

    /// Channel intensities (red, green, blue), each 0-100.
    pub const fn levels(self) -> (u8, u8, u8) {
        match self {
            PhaseColor::Red => (100, 0, 0),
            PhaseColor::Yellow => (100, 100, 0),
            PhaseColor::Green => (0, 100, 0),
            PhaseColor::Off => (0, 0, 0),
        }
    }
}

impl From<Phase> for PhaseColor {
    fn from(phase: Phase) -> Self {
        PhaseColor::from_phase(phase)
    }
}
