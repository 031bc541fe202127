//! The two button inputs: the polled Normal/Night mode switch and the
//! edge-triggered reflash trigger.

use crossing_core::Debouncer;
use defmt::info;
use embassy_rp::gpio::Input;
use embassy_rp::rom_data::reset_to_usb_boot;
use embassy_time::{Instant, Timer};

use crate::MODE;

/// Poll cadence for the mode button.
const POLL_MS: u64 = 10;

/// Watch button A and flip the shared mode flag on each accepted press.
/// This task is the mode flag's only writer.
#[embassy_executor::task]
pub async fn mode_monitor_task(button: Input<'static>) -> ! {
    let mut debouncer = Debouncer::new();

    loop {
        // Active-low: pressed reads low.
        if debouncer.poll(Instant::now().as_micros(), button.is_low()) {
            let mode = MODE.toggle();
            info!("mode button pressed, now {}", mode);
        }
        Timer::after_millis(POLL_MS).await;
    }
}

/// Wait for a falling edge on button B and drop into the RP2040 boot ROM's
/// USB bootloader. Bypasses the mode flag and every driver task; once the
/// ROM takes over, this firmware is gone until it is reflashed.
#[embassy_executor::task]
pub async fn reflash_trigger_task(mut button: Input<'static>) -> ! {
    let mut debouncer = Debouncer::new();

    loop {
        button.wait_for_falling_edge().await;
        if debouncer.poll(Instant::now().as_micros(), button.is_low()) {
            info!("reflash button pressed, entering USB bootloader");
            reset_to_usb_boot(0, 0);
        }
    }
}
