//! The two-color signal LED, driven as red/green PWM duty pairs.

use crossing_core::{Phase, PhaseCycle, Step};
use defmt::info;
use embassy_rp::pwm::{Pwm, SetDutyCycle};
use embassy_time::Timer;

use crate::MODE;

/// Cycle the signal LED through red, yellow (both channels) and green, or
/// blink amber at one-second intervals while Night mode holds.
#[embassy_executor::task]
pub async fn signal_led_task(mut red: Pwm<'static>, mut green: Pwm<'static>) -> ! {
    let mut cycle = PhaseCycle::new();
    let mut last_phase: Option<Phase> = None;
    let mut night_lit = true;

    loop {
        match cycle.tick(MODE.get()) {
            Step::Run { phase, .. } => {
                if last_phase != Some(phase) {
                    info!("signal phase {}", phase);
                    last_phase = Some(phase);
                }
                let (red_duty, green_duty) = phase.duty();
                let _ = red.set_duty_cycle_percent(red_duty);
                let _ = green.set_duty_cycle_percent(green_duty);
                night_lit = true;
            }
            Step::Night => {
                let duty = if night_lit { 100 } else { 0 };
                let _ = red.set_duty_cycle_percent(duty);
                let _ = green.set_duty_cycle_percent(duty);
                night_lit = !night_lit;
                last_phase = None;
            }
        }
        Timer::after_secs(1).await;
    }
}
