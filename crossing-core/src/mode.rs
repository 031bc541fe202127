use core::sync::atomic::{AtomicU8, Ordering};

/// The two operating modes of the crossing. Normal runs the full
/// red/yellow/green cycle; Night blinks amber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingMode {
    Normal,
    Night,
}

const NORMAL: u8 = 0;
const NIGHT: u8 = 1;

/// Process-wide mode flag, shared by every driver task.
///
/// Only the mode-button monitor writes it; the drivers poll it at their own
/// tick boundaries, so relaxed ordering is all the visibility this needs. A
/// momentarily stale read costs at most one tick of reaction delay, never a
/// wrong decision.
pub struct ModeFlag(AtomicU8);

impl ModeFlag {
    pub const fn new() -> Self {
        ModeFlag(AtomicU8::new(NORMAL))
    }

    pub fn get(&self) -> OperatingMode {
        match self.0.load(Ordering::Relaxed) {
            NORMAL => OperatingMode::Normal,
            _ => OperatingMode::Night,
        }
    }

    /// Flip the mode and return the new value. Single-writer only: the
    /// load-then-store is not atomic as a pair, which is fine with one
    /// writer and avoids CAS, which thumbv6m does not have.
    pub fn toggle(&self) -> OperatingMode {
        let next = match self.get() {
            OperatingMode::Normal => NIGHT,
            OperatingMode::Night => NORMAL,
        };
        self.0.store(next, Ordering::Relaxed);
        self.get()
    }
}

impl Default for ModeFlag {
    fn default() -> Self {
        Self::new()
    }
}
