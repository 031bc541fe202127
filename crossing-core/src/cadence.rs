use crate::phase::Phase;

/// A repeated pulse/pause figure for the buzzer. The firmware checks the
/// mode flag between repetitions, never inside one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BeepPattern {
    pub reps: u8,
    pub on_ms: u64,
    pub off_ms: u64,
}

impl BeepPattern {
    /// Total length of the full pattern in milliseconds. For every phase
    /// pattern this equals the phase hold time, so the buzzer stays in rough
    /// step with the other drivers even though it only re-checks the mode
    /// once per repetition.
    pub const fn total_ms(&self) -> u64 {
        self.reps as u64 * (self.on_ms + self.off_ms)
    }
}

impl Phase {
    /// The audible cue for this phase: slow triple for Red, fast quadruple
    /// for Yellow, medium triple for Green.
    pub const fn beep_pattern(self) -> BeepPattern {
        match self {
            Phase::Red => BeepPattern {
                reps: 5,
                on_ms: 500,
                off_ms: 1500,
            },
            Phase::Yellow => BeepPattern {
                reps: 4,
                on_ms: 500,
                off_ms: 500,
            },
            Phase::Green => BeepPattern {
                reps: 3,
                on_ms: 1000,
                off_ms: 1000,
            },
        }
    }
}

/// One short pip roughly every two seconds while Night mode holds.
pub const NIGHT_BEEP: BeepPattern = BeepPattern {
    reps: 1,
    on_ms: 100,
    off_ms: 1900,
};
