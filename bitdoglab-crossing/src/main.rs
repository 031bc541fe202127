#![no_std]
#![no_main]

use crossing_core::ModeFlag;
use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{self, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use {defmt_rtt as _, panic_probe as _};

mod buttons;
mod buzzer;
mod display;
mod matrix;
mod signal_leds;

/// The one piece of state shared between tasks. Button A's monitor is the
/// only writer; every driver task polls it at its own tick boundary.
pub static MODE: ModeFlag = ModeFlag::new();

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => pio::InterruptHandler<PIO0>;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("pedestrian crossing controller starting");

    // Button A switches Normal/Night, button B drops to the USB
    // bootloader. Both are wired active-low on the BitDogLab.
    let mode_button = Input::new(p.PIN_5, Pull::Up);
    let reflash_button = Input::new(p.PIN_6, Pull::Up);

    // The two-color signal LED. Both pins land on the B output of their
    // PWM slice.
    let pwm_config = PwmConfig::default();
    let green_pwm = Pwm::new_output_b(p.PWM_SLICE5, p.PIN_11, pwm_config.clone());
    let red_pwm = Pwm::new_output_b(p.PWM_SLICE6, p.PIN_13, pwm_config);

    let buzzer = Output::new(p.PIN_21, Level::Low);

    // 5x5 WS2812 countdown matrix, shifted out by PIO0 with DMA.
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let ws2812_program = PioWs2812Program::new(&mut common);
    let matrix = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_7, &ws2812_program);

    // SSD1306 status display on I2C1 at 400kHz.
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = 400_000;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);

    spawner.spawn(buttons::mode_monitor_task(mode_button)).unwrap();
    spawner
        .spawn(buttons::reflash_trigger_task(reflash_button))
        .unwrap();
    spawner
        .spawn(signal_leds::signal_led_task(red_pwm, green_pwm))
        .unwrap();
    spawner.spawn(matrix::countdown_matrix_task(matrix)).unwrap();
    spawner.spawn(buzzer::buzzer_task(buzzer)).unwrap();
    spawner.spawn(display::status_display_task(i2c)).unwrap();
}
