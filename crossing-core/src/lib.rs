//! Logic for a pedestrian crossing signal: the operating mode flag, the
//! red/yellow/green phase machine, buzzer cadences, button debouncing and
//! the 5x5 countdown glyphs.
//!
//! This crate is hardware-free on purpose. The firmware tasks own the
//! peripherals and the timers; they feed wall-clock ticks and button reads
//! into the types here and act on what comes back. That keeps every timing
//! and sequencing decision testable on the host.

#![no_std]

pub mod cadence;
pub mod cycle;
pub mod debounce;
pub mod glyphs;
pub mod mode;
pub mod phase;

pub use cadence::{BeepPattern, NIGHT_BEEP};
pub use cycle::{PhaseCycle, Step};
pub use debounce::{DEBOUNCE_US, Debouncer};
pub use glyphs::{BLANK_GLYPH, GRID_PIXELS, glyph};
pub use mode::{ModeFlag, OperatingMode};
pub use phase::{Phase, PhaseColor};
