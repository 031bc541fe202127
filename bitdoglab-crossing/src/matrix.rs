//! The 5x5 WS2812 countdown matrix.

use crossing_core::{GRID_PIXELS, Phase, PhaseColor, PhaseCycle, Step, glyph};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio_programs::ws2812::PioWs2812;
use embassy_time::Timer;
use smart_leds::RGB8;

use crate::MODE;

/// Map a 0-100 channel intensity onto the 8-bit WS2812 scale.
fn scale(percent: u8) -> u8 {
    (u16::from(percent) * 255 / 100) as u8
}

fn rgb(color: PhaseColor) -> RGB8 {
    let (r, g, b) = color.levels();
    RGB8::new(scale(r), scale(g), scale(b))
}

/// Count down the Red and Green phases one digit per second, hold flat
/// amber through Yellow, and alternate flat amber with all-off in Night
/// mode. Every refresh writes all 25 pixels in raster order.
#[embassy_executor::task]
pub async fn countdown_matrix_task(mut matrix: PioWs2812<'static, PIO0, 0, GRID_PIXELS>) -> ! {
    let mut cycle = PhaseCycle::new();
    let mut night_lit = true;

    loop {
        let frame = match cycle.tick(MODE.get()) {
            Step::Run {
                phase: Phase::Yellow,
                ..
            } => {
                night_lit = true;
                flat(PhaseColor::Yellow)
            }
            Step::Run { phase, countdown } => {
                night_lit = true;
                digit(countdown, PhaseColor::from_phase(phase))
            }
            Step::Night => {
                let color = if night_lit {
                    PhaseColor::Yellow
                } else {
                    PhaseColor::Off
                };
                night_lit = !night_lit;
                flat(color)
            }
        };

        matrix.write(&frame).await;
        Timer::after_secs(1).await;
    }
}

fn flat(color: PhaseColor) -> [RGB8; GRID_PIXELS] {
    [rgb(color); GRID_PIXELS]
}

fn digit(countdown: u8, color: PhaseColor) -> [RGB8; GRID_PIXELS] {
    let mut frame = [rgb(PhaseColor::Off); GRID_PIXELS];
    for (pixel, &cell) in frame.iter_mut().zip(glyph(countdown)) {
        if cell == 1 {
            *pixel = rgb(color);
        }
    }
    frame
}
