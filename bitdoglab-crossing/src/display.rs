//! The SSD1306 status display: a schematic three-slot signal with the
//! active slot filled and a label beside it.

use crossing_core::{Phase, PhaseCycle, Step};
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_time::Timer;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

use crate::MODE;

type Oled = Ssd1306<
    I2CInterface<I2c<'static, I2C1, Blocking>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

/// Render the signal schematic once per second (once per two seconds in
/// Night mode), with the slot for the active phase filled.
#[embassy_executor::task]
pub async fn status_display_task(i2c: I2c<'static, I2C1, Blocking>) -> ! {
    let interface = I2CDisplayInterface::new(i2c);
    let mut oled = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    oled.init().unwrap();

    let mut cycle = PhaseCycle::new();

    loop {
        match cycle.tick(MODE.get()) {
            Step::Run { phase, .. } => {
                draw_frame(&mut oled, Some(phase));
                Timer::after_secs(1).await;
            }
            Step::Night => {
                draw_frame(&mut oled, None);
                Timer::after_secs(2).await;
            }
        }
    }
}

/// Slot rectangle for a phase, top to bottom: stop, attention, go.
fn slot(phase: Phase) -> Rectangle {
    let top = match phase {
        Phase::Red => 8,
        Phase::Yellow => 28,
        Phase::Green => 47,
    };
    Rectangle::new(Point::new(10, top), Size::new(22, 13))
}

/// Label anchor beside each slot.
fn label_anchor(phase: Phase) -> Point {
    match phase {
        Phase::Red => Point::new(50, 10),
        Phase::Yellow => Point::new(50, 30),
        Phase::Green => Point::new(50, 52),
    }
}

/// Redraw the whole frame: outer housing, the two dividers, the three
/// slots with at most one filled, and the label. `None` renders the Night
/// variant. Push failures are not surfaced; the next second redraws
/// everything anyway.
fn draw_frame(oled: &mut Oled, lit: Option<Phase>) {
    let outline = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
    let fill = PrimitiveStyle::with_fill(BinaryColor::On);
    let text_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);

    oled.clear_buffer();

    Rectangle::new(Point::new(3, 3), Size::new(38, 60))
        .into_styled(outline)
        .draw(oled)
        .ok();
    Line::new(Point::new(3, 24), Point::new(38, 24))
        .into_styled(outline)
        .draw(oled)
        .ok();
    Line::new(Point::new(3, 43), Point::new(38, 43))
        .into_styled(outline)
        .draw(oled)
        .ok();

    for phase in [Phase::Red, Phase::Yellow, Phase::Green] {
        let style = if lit == Some(phase) { fill } else { outline };
        slot(phase).into_styled(style).draw(oled).ok();
    }

    match lit {
        Some(phase) => {
            Text::with_baseline(phase.label(), label_anchor(phase), text_style, Baseline::Top)
                .draw(oled)
                .ok();
        }
        None => {
            Text::with_baseline("MODO", Point::new(65, 30), text_style, Baseline::Top)
                .draw(oled)
                .ok();
            Text::with_baseline("NOTURNO", Point::new(55, 40), text_style, Baseline::Top)
                .draw(oled)
                .ok();
        }
    }

    oled.flush().ok();
}
