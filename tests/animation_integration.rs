//! Integration tests for the extraction animation
//!
//! With the default timing the sequence is 40 progress ticks, a commit on
//! tick 41, ten fade ticks and six blink ticks.

use estrazione::animation::{AnimationPhase, AnimationSequencer, AnimationTiming, TickOutcome, TickSource};
use estrazione::clock::TickSchedule;
use estrazione::roster::Roster;
use estrazione::selection::{ScriptedSource, SelectionState};
use std::time::{Duration, Instant};

#[test]
fn test_default_sequence_tick_counts() {
    let mut selection = SelectionState::new(Roster::default());
    let mut rng = ScriptedSource::new([12]);
    let mut seq = AnimationSequencer::default();
    seq.start(selection.request_pick().unwrap()).unwrap();

    let mut loading = 0;
    let mut fading = 0;
    let mut blinking = 0;
    let mut committed_at = None;

    while let Some(source) = seq.active_source() {
        let phase = seq.phase();
        let outcome = seq.tick(source, |t| selection.commit_pick(t, &mut rng)).unwrap();
        match phase {
            AnimationPhase::Loading => {
                loading += 1;
                if let TickOutcome::Committed(pick) = outcome {
                    assert_eq!(pick.name, "Giovanni");
                    assert_eq!(pick.number, 13);
                    committed_at = Some(loading);
                }
            }
            AnimationPhase::FadingIn => fading += 1,
            AnimationPhase::Blinking => blinking += 1,
            AnimationPhase::Idle => unreachable!(),
        }
    }

    assert_eq!(committed_at, Some(41));
    assert_eq!(loading, 41);
    assert_eq!(fading, 10);
    assert_eq!(blinking, 6);
    assert_eq!(selection.picked_count(), 1);
}

#[test]
fn test_schedule_drives_sequencer_with_independent_clocks() {
    let timing = AnimationTiming { loading_ticks: 3, ..AnimationTiming::default() };
    let mut selection = SelectionState::new(Roster::new(["A", "B"]));
    let mut rng = ScriptedSource::default();
    let mut seq = AnimationSequencer::new(timing);
    let mut schedule = TickSchedule::new(seq.timing());
    seq.start(selection.request_pick().unwrap()).unwrap();

    // Step a virtual clock one millisecond at a time until idle.
    let t0 = Instant::now();
    let mut now = t0;
    let mut loading_done_at = None;
    schedule.sync(seq.active_source(), now);
    while !seq.is_idle() {
        if let Some(source) = schedule.poll(now) {
            let outcome = seq.tick(source, |t| selection.commit_pick(t, &mut rng)).unwrap();
            if matches!(outcome, TickOutcome::Committed(_)) {
                loading_done_at = Some(now - t0);
            }
            // the next phase's timer starts the moment this one ends
            schedule.sync(seq.active_source(), now);
        }
        now += Duration::from_millis(1);
        assert!(now - t0 < Duration::from_secs(10), "animation never settled");
    }

    // four loading ticks at 50 ms
    assert_eq!(loading_done_at, Some(Duration::from_millis(200)));
    // ten fade ticks at 30 ms, six blink ticks at 200 ms
    assert_eq!(now - t0, Duration::from_millis(200 + 300 + 1200 + 1));
    assert_eq!(selection.remaining_count(), 1);
}
