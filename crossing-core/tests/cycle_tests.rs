//! Integration tests for the free-running phase machine.

use crossing_core::{OperatingMode, Phase, PhaseCycle, Step};

/// Run `n` one-second ticks under a fixed mode and collect the steps.
fn run(cycle: &mut PhaseCycle, mode: OperatingMode, n: usize) -> Vec<Step> {
    (0..n).map(|_| cycle.tick(mode)).collect()
}

fn expected_normal_cycle() -> Vec<Step> {
    let mut steps = Vec::new();
    for phase in [Phase::Red, Phase::Yellow, Phase::Green] {
        for countdown in (1..=phase.hold_secs()).rev() {
            steps.push(Step::Run { phase, countdown });
        }
    }
    steps
}

#[test]
fn twenty_normal_seconds_run_red_yellow_green() {
    let mut cycle = PhaseCycle::new();
    let steps = run(&mut cycle, OperatingMode::Normal, 20);

    // Red 10s counting 10..1, Yellow 4s, Green 6s.
    assert_eq!(steps, expected_normal_cycle());
}

#[test]
fn cycle_wraps_back_to_red() {
    let mut cycle = PhaseCycle::new();
    run(&mut cycle, OperatingMode::Normal, 20);

    assert_eq!(
        cycle.tick(OperatingMode::Normal),
        Step::Run {
            phase: Phase::Red,
            countdown: 10
        }
    );
}

#[test]
fn red_countdown_has_no_skips_or_repeats() {
    let mut cycle = PhaseCycle::new();
    let counts: Vec<u8> = run(&mut cycle, OperatingMode::Normal, 10)
        .into_iter()
        .map(|step| match step {
            Step::Run {
                phase: Phase::Red,
                countdown,
            } => countdown,
            other => panic!("expected a Red tick, got {other:?}"),
        })
        .collect();

    assert_eq!(counts, (1..=10).rev().collect::<Vec<u8>>());
}

#[test]
fn night_three_seconds_into_red_aborts_after_third_tick() {
    let mut cycle = PhaseCycle::new();
    let before = run(&mut cycle, OperatingMode::Normal, 3);
    assert_eq!(
        before,
        vec![
            Step::Run {
                phase: Phase::Red,
                countdown: 10
            },
            Step::Run {
                phase: Phase::Red,
                countdown: 9
            },
            Step::Run {
                phase: Phase::Red,
                countdown: 8
            },
        ]
    );

    // The very next tick observes the flipped flag and abandons the rest
    // of the Red hold.
    assert_eq!(cycle.tick(OperatingMode::Night), Step::Night);
}

#[test]
fn normal_resumes_from_red_after_night() {
    let mut cycle = PhaseCycle::new();

    // Get partway into Green, then spend a while in Night.
    run(&mut cycle, OperatingMode::Normal, 16);
    run(&mut cycle, OperatingMode::Night, 5);

    // Sequencing restarts at the top of Red, not mid-Green.
    assert_eq!(
        cycle.tick(OperatingMode::Normal),
        Step::Run {
            phase: Phase::Red,
            countdown: 10
        }
    );
}

#[test]
fn night_ticks_stay_night() {
    let mut cycle = PhaseCycle::new();
    for step in run(&mut cycle, OperatingMode::Night, 10) {
        assert_eq!(step, Step::Night);
    }
}

#[test]
fn countdown_never_leaves_glyph_table_range() {
    let mut cycle = PhaseCycle::new();

    // Interleave mode flips to shake out counter corruption on abort.
    for round in 0..50 {
        let mode = if round % 7 == 3 {
            OperatingMode::Night
        } else {
            OperatingMode::Normal
        };
        if let Step::Run { countdown, .. } = cycle.tick(mode) {
            assert!((1..=10).contains(&countdown), "countdown {countdown} out of range");
        }
    }
}
