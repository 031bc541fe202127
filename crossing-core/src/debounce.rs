/// Minimum interval between accepted presses, in microseconds.
pub const DEBOUNCE_US: u64 = 300_000;

/// Mechanical-button debouncer. One instance per debounced input; the
/// timestamp moves only when a press is accepted, so a bouncing or held
/// contact re-triggers at most once per window.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    last_accepted_us: u64,
}

impl Debouncer {
    pub const fn new() -> Self {
        Debouncer { last_accepted_us: 0 }
    }

    /// Feed one sample of the button. Returns `true` when the press is
    /// accepted, i.e. the button reads pressed and at least the debounce
    /// window has passed since the last accepted press.
    pub fn poll(&mut self, now_us: u64, pressed: bool) -> bool {
        if pressed && now_us.wrapping_sub(self.last_accepted_us) > DEBOUNCE_US {
            self.last_accepted_us = now_us;
            true
        } else {
            false
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}
