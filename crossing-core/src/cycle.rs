use crate::mode::OperatingMode;
use crate::phase::Phase;

/// What a driver task should do for the tick that was just requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Keep driving `phase` for one more second. `countdown` is the number
    /// of seconds left in the phase, this one included; during Red and
    /// Green it is the digit the countdown matrix shows.
    Run { phase: Phase, countdown: u8 },
    /// The mode flag reads Night. The cycle has rewound to the top of Red,
    /// so Normal sequencing resumes from Red whenever the mode flips back.
    Night,
}

/// The free-running phase machine each driver task owns privately.
///
/// The tasks are deliberately not synchronized with each other: every one
/// of them calls `tick` on its own one-second cadence and may be in a
/// different phase than its neighbors. The only shared input is the mode
/// flag, sampled once per tick, which bounds the reaction to a mode switch
/// by a single tick.
#[derive(Debug, Clone, Copy)]
pub struct PhaseCycle {
    phase: Phase,
    remaining: u8,
}

impl PhaseCycle {
    pub const fn new() -> Self {
        PhaseCycle {
            phase: Phase::Red,
            remaining: Phase::Red.hold_secs(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Advance by one second. The countdown starts at the phase hold time
    /// and reaches 0 exactly when the phase flips over; an abort to Night
    /// abandons whatever was left and re-arms the counter for the next
    /// pass through Red.
    pub fn tick(&mut self, mode: OperatingMode) -> Step {
        if mode == OperatingMode::Night {
            *self = PhaseCycle::new();
            return Step::Night;
        }

        let step = Step::Run {
            phase: self.phase,
            countdown: self.remaining,
        };

        self.remaining -= 1;
        if self.remaining == 0 {
            self.phase = self.phase.next();
            self.remaining = self.phase.hold_secs();
        }

        step
    }
}

impl Default for PhaseCycle {
    fn default() -> Self {
        Self::new()
    }
}
