//! Integration tests for the fixed glyph and cadence tables.

use crossing_core::{BLANK_GLYPH, GRID_PIXELS, NIGHT_BEEP, Phase, PhaseColor, glyph};

#[test]
fn blank_glyph_is_all_off() {
    assert!(glyph(BLANK_GLYPH).iter().all(|&cell| cell == 0));
}

#[test]
fn glyph_cells_are_on_off_masks() {
    for digit in 0..=BLANK_GLYPH {
        assert!(glyph(digit).iter().all(|&cell| cell <= 1));
    }
}

#[test]
fn digit_glyphs_are_distinct_and_nonempty() {
    for digit in 0..=9 {
        assert!(
            glyph(digit).iter().any(|&cell| cell == 1),
            "digit {digit} renders blank"
        );
        for other in (digit + 1)..=9 {
            assert_ne!(glyph(digit), glyph(other), "digits {digit} and {other} collide");
        }
    }
}

#[test]
fn out_of_range_countdown_clamps_to_blank() {
    assert_eq!(glyph(10), glyph(BLANK_GLYPH));
    assert_eq!(glyph(u8::MAX), glyph(BLANK_GLYPH));
    assert_eq!(glyph(BLANK_GLYPH).len(), GRID_PIXELS);
}

#[test]
fn beep_patterns_fill_their_phase_hold() {
    // Red: 5 slow pulses over 10s, Yellow: 4 fast over 4s, Green: 3 medium
    // over 6s. Keeping each pattern the length of its phase is what keeps
    // the buzzer loosely in step with the per-second drivers.
    for phase in [Phase::Red, Phase::Yellow, Phase::Green] {
        assert_eq!(
            phase.beep_pattern().total_ms(),
            u64::from(phase.hold_secs()) * 1000
        );
    }
}

#[test]
fn night_beep_is_a_short_pip_every_two_seconds() {
    assert_eq!(NIGHT_BEEP.reps, 1);
    assert_eq!(NIGHT_BEEP.on_ms, 100);
    assert_eq!(NIGHT_BEEP.total_ms(), 2000);
}

#[test]
fn duty_split_matches_phase_color() {
    assert_eq!(Phase::Red.duty(), (100, 0));
    assert_eq!(Phase::Yellow.duty(), (100, 100));
    assert_eq!(Phase::Green.duty(), (0, 100));
    assert_eq!(PhaseColor::Off.levels(), (0, 0, 0));
}
