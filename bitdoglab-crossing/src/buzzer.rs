//! The audible pedestrian cue.
//!
//! Unlike the per-second drivers, the buzzer only re-checks the mode flag
//! at repetition boundaries: a pulse and its pause always play out whole.
//! That still bounds the reaction to a mode switch by one repetition, at
//! most two seconds.

use crossing_core::{BeepPattern, NIGHT_BEEP, OperatingMode, Phase};
use embassy_rp::gpio::Output;
use embassy_time::Timer;

use crate::MODE;

async fn pulse(buzzer: &mut Output<'static>, pattern: BeepPattern) {
    buzzer.set_high();
    Timer::after_millis(pattern.on_ms).await;
    buzzer.set_low();
    Timer::after_millis(pattern.off_ms).await;
}

#[embassy_executor::task]
pub async fn buzzer_task(mut buzzer: Output<'static>) -> ! {
    let mut phase = Phase::Red;

    loop {
        if MODE.get() == OperatingMode::Night {
            phase = Phase::Red;
            pulse(&mut buzzer, NIGHT_BEEP).await;
            continue;
        }

        let pattern = phase.beep_pattern();
        let mut aborted = false;
        for _ in 0..pattern.reps {
            pulse(&mut buzzer, pattern).await;
            if MODE.get() == OperatingMode::Night {
                aborted = true;
                break;
            }
        }

        phase = if aborted { Phase::Red } else { phase.next() };
    }
}
