use super::*;

fn make(
    offset: u64,
    duration: u64,
    repeat: i64,
    actual: i64,
    delay: u64,
    fail_after: i64,
) -> FakePlayer {
    FakePlayer::create(
        &MediaTrack::new(offset, duration, RepeatCount::from(repeat)),
        SimParams::from_raw(actual, delay, fail_after),
    )
}

/// `play()` and drain buffering so the next advance is pure playback.
fn start_playing(p: &mut FakePlayer) {
    assert!(p.play());
    let adv = p.advance_time(u64::MAX);
    assert_eq!(adv.event, PlayerEvent::TrackReady);
}

/// Advance in fixed steps until the track ends, recording event and position.
fn run_until_ended(p: &mut FakePlayer, step: u64) -> Vec<(PlayerEvent, u64)> {
    let mut out = Vec::new();
    for _ in 0..10_000 {
        let adv = p.advance_time(step);
        out.push((adv.event, p.position()));
        if p.is_ended() {
            return out;
        }
    }
    panic!("track never ended: {p}");
}

#[test]
fn create_clips_requested_window_to_content() {
    let p = make(200, 0, 1, 1000, 0, -1);
    assert_eq!((p.start(), p.end()), (200, Some(1000)));

    let p = make(200, 500, 1, 1000, 0, -1);
    assert_eq!((p.start(), p.end()), (200, Some(700)));

    let p = make(200, 5000, 1, 1000, 0, -1);
    assert_eq!((p.start(), p.end()), (200, Some(1000)));
    assert_eq!(p.duration(), 5000);

    let p = make(1500, 300, 1, 1000, 0, -1);
    assert_eq!((p.start(), p.end()), (1000, Some(1000)));
}

#[test]
fn create_with_unbounded_content_keeps_requested_window() {
    let p = make(100, 0, 1, -1, 0, -1);
    assert_eq!((p.start(), p.end()), (100, None));

    let p = make(100, 300, 1, -1, 0, -1);
    assert_eq!((p.start(), p.end()), (100, Some(400)));
}

#[test]
fn new_player_is_idle_at_start_and_buffering() {
    let p = make(0, 0, 1, 1000, 100, -1);
    assert_eq!(p.state(), PlayerState::Idle);
    assert_eq!(p.track_state(), TrackState::NotReady);
    assert_eq!(p.buffering_remaining(), 100);
    assert!(p.at_start());
    assert!(p.is_active());
    assert!(!p.is_ended());
    assert!(!p.is_playing());
}

#[test]
fn ready_is_reported_even_without_initial_delay() {
    let mut p = make(0, 0, 1, 1000, 0, -1);
    assert_eq!(p.track_state(), TrackState::Ready);
    assert!(p.play());
    assert_eq!(p.advance_time(500), Advance::new(PlayerEvent::TrackReady, 0));
    assert_eq!(p.position(), 0);
}

#[test]
fn partial_buffering_reports_nothing_and_consumes_everything() {
    let mut p = make(0, 0, 1, 1000, 100, -1);
    assert!(p.play());
    assert_eq!(p.advance_time(40), Advance::new(PlayerEvent::NoReport, 40));
    assert_eq!(p.track_state(), TrackState::NotReady);
    assert_eq!(p.advance_time(100), Advance::new(PlayerEvent::TrackReady, 60));
    assert_eq!(p.track_state(), TrackState::Ready);
}

#[test]
fn leftover_buffering_budget_does_not_carry_into_playback() {
    let mut p = make(0, 0, 1, 1000, 100, -1);
    assert!(p.play());
    assert_eq!(p.advance_time(250), Advance::new(PlayerEvent::TrackReady, 100));
    assert_eq!(p.position(), 0);
    assert_eq!(p.advance_time(150), Advance::new(PlayerEvent::TimeUpdate, 150));
    assert_eq!(p.position(), 150);
}

#[test]
fn idle_player_buffers_but_does_not_play() {
    let mut p = make(0, 0, 1, 1000, 100, -1);
    assert_eq!(p.advance_time(100), Advance::new(PlayerEvent::TrackReady, 100));
    assert_eq!(p.advance_time(100), Advance::new(PlayerEvent::NoReport, 100));
    assert_eq!(p.position(), 0);
    assert!(p.at_start());
}

#[test]
fn looping_twice_in_quarter_steps_reports_documented_positions() {
    let mut p = make(0, 0, 2, 1000, 0, -1);
    assert!(p.play());
    let ready = p.advance_time(250);
    assert_eq!(ready.event, PlayerEvent::TrackReady);

    let mut positions = vec![p.position()];
    let mut events = Vec::new();
    for (event, position) in run_until_ended(&mut p, 250) {
        events.push(event);
        positions.push(position);
    }

    assert_eq!(positions, vec![0, 250, 500, 750, 0, 250, 500, 750, 1000]);
    assert_eq!(&events[..7], &[PlayerEvent::TimeUpdate; 7]);
    assert_eq!(events[7], PlayerEvent::TrackDone);
    assert_eq!(p.state(), PlayerState::Done);
}

#[test]
fn full_span_steps_cross_the_end_once_per_extra_repeat() {
    for k in 1..=5u32 {
        let mut p = make(300, 0, i64::from(k), 2300, 0, -1);
        start_playing(&mut p);

        let trace = run_until_ended(&mut p, 2000);
        let updates = trace
            .iter()
            .filter(|(e, _)| *e == PlayerEvent::TimeUpdate)
            .count();
        assert_eq!(updates, k as usize - 1, "repeat count {k}");
        assert_eq!(trace.last(), Some(&(PlayerEvent::TrackDone, 2300)));
        assert_eq!(p.completed_loops(), u64::from(k));
    }
}

#[test]
fn zero_repeat_count_plays_once() {
    let mut p = make(0, 0, 0, 1000, 0, -1);
    start_playing(&mut p);
    assert_eq!(p.advance_time(1000), Advance::new(PlayerEvent::TrackDone, 1000));
    assert_eq!(p.completed_loops(), 0);
}

#[test]
fn loops_are_transparent_within_one_call() {
    let mut p = make(0, 100, 3, 1000, 0, -1);
    start_playing(&mut p);

    assert_eq!(p.advance_time(250), Advance::new(PlayerEvent::TimeUpdate, 250));
    assert_eq!(p.position(), 50);
    assert_eq!(p.completed_loops(), 2);

    assert_eq!(p.advance_time(100), Advance::new(PlayerEvent::TrackDone, 50));
    assert_eq!(p.position(), 100);
    assert_eq!(p.completed_loops(), 3);
}

#[test]
fn tiny_window_repeating_forever_handles_huge_budgets() {
    let mut p = make(0, 1, -1, 1000, 0, -1);
    start_playing(&mut p);

    let adv = p.advance_time(1_000_000_000);
    assert_eq!(adv, Advance::new(PlayerEvent::TimeUpdate, 1_000_000_000));
    assert_eq!(p.position(), 0);
    assert_eq!(p.completed_loops(), 1_000_000_000);
    assert_eq!(p.elapsed_playback(), 1_000_000_000);
    assert!(p.is_playing());
}

#[test]
fn loop_counter_saturates_instead_of_overflowing() {
    let mut p = make(0, 1, -1, 1000, 0, -1);
    start_playing(&mut p);

    let adv = p.advance_time(u64::MAX);
    assert_eq!(adv, Advance::new(PlayerEvent::TimeUpdate, u64::MAX));
    assert_eq!(p.completed_loops(), u64::MAX);

    assert_eq!(p.advance_time(1), Advance::new(PlayerEvent::TimeUpdate, 1));
    assert_eq!(p.completed_loops(), u64::MAX);
    assert_eq!(p.position(), 0);
    assert!(p.is_playing());
}

#[test]
fn unbounded_content_never_finishes_on_its_own() {
    let mut p = make(100, 0, 1, -1, 0, -1);
    start_playing(&mut p);
    assert_eq!(p.advance_time(10_000), Advance::new(PlayerEvent::TimeUpdate, 10_000));
    assert_eq!(p.position(), 10_100);
    assert!(p.is_playing());
}

#[test]
fn failure_stops_time_at_the_failure_point() {
    let mut p = make(0, 0, 1, 1000, 0, 300);
    start_playing(&mut p);

    assert_eq!(p.advance_time(500), Advance::new(PlayerEvent::TrackFail, 300));
    assert_eq!(p.state(), PlayerState::Failed);
    assert_eq!(p.track_state(), TrackState::Failed);
    assert_eq!(p.position(), 300);
}

#[test]
fn failed_is_absorbing() {
    let mut p = make(0, 0, 2, 1000, 0, 300);
    start_playing(&mut p);
    p.advance_time(500);

    assert_eq!(p.advance_time(500), Advance::new(PlayerEvent::NoReport, 500));
    assert!(!p.play());
    assert!(!p.pause());
    assert!(!p.rewind());
    assert!(!p.finish());
    assert!(!p.seek(0));
    assert!(!p.clear_repeat());
    assert_eq!(p.state(), PlayerState::Failed);
    assert_eq!(p.position(), 300);
    assert!(p.is_ended());
    assert!(!p.is_active());
}

#[test]
fn failure_wins_a_tie_with_the_end_of_the_track() {
    let mut p = make(0, 0, 1, 1000, 0, 1000);
    start_playing(&mut p);
    assert_eq!(p.advance_time(2000), Advance::new(PlayerEvent::TrackFail, 1000));
    assert_eq!(p.state(), PlayerState::Failed);
    assert_eq!(p.position(), 1000);
}

#[test]
fn failure_wins_a_tie_with_a_loop_boundary() {
    let mut p = make(0, 0, 2, 1000, 0, 1000);
    start_playing(&mut p);
    assert_eq!(p.advance_time(2000), Advance::new(PlayerEvent::TrackFail, 1000));
    assert_eq!(p.completed_loops(), 0);
    assert_eq!(p.position(), 1000);
}

#[test]
fn failure_point_counts_playback_across_loops() {
    let mut p = make(0, 0, 3, 1000, 0, 1500);
    start_playing(&mut p);

    assert_eq!(p.advance_time(5000), Advance::new(PlayerEvent::TrackFail, 1500));
    assert_eq!(p.position(), 500);
    assert_eq!(p.completed_loops(), 1);
}

#[test]
fn zero_fail_after_fails_when_buffering_completes() {
    let mut p = make(0, 0, 1, 1000, 100, 0);
    assert!(p.play());
    assert_eq!(p.advance_time(250), Advance::new(PlayerEvent::TrackFail, 100));
    assert_eq!(p.state(), PlayerState::Failed);

    let mut p = make(0, 0, 1, 1000, 0, 0);
    assert!(p.play());
    assert_eq!(p.advance_time(250), Advance::new(PlayerEvent::TrackFail, 0));
}

#[test]
fn zero_fail_after_fails_an_idle_track_when_buffering_completes() {
    let mut p = make(0, 0, 1, 1000, 100, 0);
    assert_eq!(p.advance_time(250), Advance::new(PlayerEvent::TrackFail, 100));
    assert_eq!(p.state(), PlayerState::Failed);
    assert_eq!(p.track_state(), TrackState::Failed);

    assert!(!p.play());
    assert_eq!(p.advance_time(250), Advance::new(PlayerEvent::NoReport, 250));
    assert_eq!(p.position(), 0);
}

#[test]
fn window_outside_content_goes_from_ready_to_done() {
    let mut p = make(2000, 0, 5, 1000, 50, -1);
    assert!(p.play());
    assert_eq!(p.advance_time(100), Advance::new(PlayerEvent::TrackReady, 50));
    assert_eq!(p.advance_time(100), Advance::new(PlayerEvent::TrackDone, 0));
    assert_eq!(p.position(), p.start());
    assert_eq!(p.position(), 1000);
    assert_eq!(p.state(), PlayerState::Done);
}

#[test]
fn zero_window_ignores_infinite_repeats() {
    let mut p = make(1000, 0, -1, 1000, 0, -1);
    start_playing(&mut p);
    assert_eq!(p.advance_time(100), Advance::new(PlayerEvent::TrackDone, 0));
    assert_eq!(p.state(), PlayerState::Done);
}

#[test]
fn finished_zero_window_cannot_be_rewound() {
    let mut p = make(2000, 0, 1, 1000, 0, -1);
    start_playing(&mut p);
    p.advance_time(100);

    assert!(!p.rewind());
    assert_eq!(p.state(), PlayerState::Done);
    assert!(!p.seek(0));
    assert_eq!(p.state(), PlayerState::Done);
}

#[test]
fn play_only_starts_from_idle() {
    let mut p = make(0, 0, 1, 1000, 0, -1);
    assert!(p.play());
    assert!(!p.play());
    assert!(p.is_playing());
}

#[test]
fn pause_keeps_position_and_stops_time() {
    let mut p = make(0, 0, 1, 1000, 0, -1);
    start_playing(&mut p);
    p.advance_time(300);

    assert!(p.pause());
    assert!(!p.pause());
    assert_eq!(p.advance_time(500), Advance::new(PlayerEvent::NoReport, 500));
    assert_eq!(p.position(), 300);

    assert!(p.play());
    assert_eq!(p.advance_time(100), Advance::new(PlayerEvent::TimeUpdate, 100));
    assert_eq!(p.position(), 400);
}

#[test]
fn pause_keeps_remaining_buffering() {
    let mut p = make(0, 0, 1, 1000, 100, -1);
    assert!(p.play());
    p.advance_time(30);
    assert!(p.pause());
    assert_eq!(p.buffering_remaining(), 70);
    assert!(p.play());
    assert_eq!(p.advance_time(100), Advance::new(PlayerEvent::TrackReady, 70));
}

#[test]
fn rewind_playing_track_resets_to_idle_at_start() {
    let mut p = make(100, 0, 2, 1000, 0, -1);
    start_playing(&mut p);
    p.advance_time(300);

    assert!(p.rewind());
    assert_eq!(p.state(), PlayerState::Idle);
    assert_eq!(p.position(), 100);
    assert!(p.at_start());
    assert!(!p.rewind());
}

#[test]
fn rewind_playing_track_at_start_still_reports_change() {
    let mut p = make(0, 0, 1, 1000, 0, -1);
    assert!(p.play());
    assert!(p.rewind());
    assert_eq!(p.state(), PlayerState::Idle);
}

#[test]
fn rewind_done_track_clears_loops() {
    let mut p = make(0, 0, 2, 1000, 0, -1);
    start_playing(&mut p);
    run_until_ended(&mut p, 1000);
    assert_eq!(p.state(), PlayerState::Done);

    assert!(p.rewind());
    assert_eq!(p.state(), PlayerState::Idle);
    assert_eq!(p.completed_loops(), 0);
    assert_eq!(p.position(), 0);
}

#[test]
fn rewind_before_ready_skips_remaining_buffering() {
    let mut p = make(0, 0, 1, 1000, 100, -1);
    assert!(p.play());
    p.advance_time(40);
    assert!(p.rewind());
    assert_eq!(p.track_state(), TrackState::Ready);
    assert_eq!(p.advance_time(100), Advance::new(PlayerEvent::TrackReady, 0));
}

#[test]
fn finish_parks_finite_track_at_end() {
    let mut p = make(0, 0, 3, 1000, 0, -1);
    start_playing(&mut p);
    p.advance_time(300);

    assert!(p.finish());
    assert_eq!(p.state(), PlayerState::Done);
    assert_eq!(p.position(), 1000);
    assert_eq!(p.completed_loops(), 3);
    assert!(!p.finish());
}

#[test]
fn finish_moves_infinite_track_back_to_start() {
    let mut p = make(100, 0, 1, -1, 0, -1);
    start_playing(&mut p);
    p.advance_time(5000);

    assert!(p.finish());
    assert_eq!(p.state(), PlayerState::Done);
    assert_eq!(p.position(), 100);
}

#[test]
fn seek_past_end_finishes_then_seeking_back_unfinishes() {
    let mut p = make(0, 0, 1, 1000, 0, -1);

    assert!(p.seek(5000));
    assert_eq!(p.position(), 1000);
    assert_eq!(p.state(), PlayerState::Done);

    assert!(p.seek(250));
    assert_eq!(p.position(), 250);
    assert_eq!(p.state(), PlayerState::Idle);
    assert!(!p.seek(250));
}

#[test]
fn seek_is_clipped_to_the_window() {
    let mut p = make(200, 500, 1, 1000, 0, -1);
    assert!(p.seek(100));
    assert_eq!(p.position(), 300);
    assert!(p.seek(-50));
    assert_eq!(p.position(), 200);
}

#[test]
fn seek_to_end_with_repeats_left_keeps_playing() {
    let mut p = make(0, 0, 2, 1000, 0, -1);
    start_playing(&mut p);
    assert!(p.seek(1000));
    assert_eq!(p.state(), PlayerState::Playing);

    // The loop boundary is crossed immediately on the next advance.
    assert_eq!(p.advance_time(100), Advance::new(PlayerEvent::TimeUpdate, 100));
    assert_eq!(p.position(), 100);
    assert_eq!(p.completed_loops(), 1);

    assert!(p.seek(1000));
    assert_eq!(p.state(), PlayerState::Done);
}

#[test]
fn clear_repeat_restarts_a_finished_track() {
    let mut p = make(0, 0, 2, 1000, 0, -1);
    start_playing(&mut p);
    run_until_ended(&mut p, 1000);
    assert_eq!(p.completed_loops(), 2);

    assert!(p.clear_repeat());
    assert_eq!(p.state(), PlayerState::Idle);
    assert_eq!(p.completed_loops(), 0);
    assert_eq!(p.position(), 1000);
    assert!(!p.clear_repeat());

    assert!(p.play());
    assert_eq!(p.advance_time(100), Advance::new(PlayerEvent::TimeUpdate, 100));
    assert_eq!(p.position(), 100);
}

#[test]
fn clear_repeat_needs_a_done_track_with_loops() {
    let mut p = make(0, 0, 0, 1000, 0, -1);
    assert!(!p.clear_repeat());
    assert!(p.finish());
    assert!(!p.clear_repeat());
}

#[test]
fn replaying_the_same_operations_yields_the_same_events() {
    let script = |p: &mut FakePlayer| {
        let mut log = Vec::new();
        p.play();
        for step in [30, 70, 400, 900, 10, 2500] {
            let adv = p.advance_time(step);
            log.push((adv, p.position(), p.state()));
        }
        p.seek(100);
        p.play();
        for _ in 0..6 {
            let adv = p.advance_time(333);
            log.push((adv, p.position(), p.state()));
        }
        log
    };

    let original = make(50, 600, 3, 2000, 100, 2100);
    let first = script(&mut original.clone());
    let second = script(&mut original.clone());
    assert_eq!(first, second);
    assert!(first.iter().any(|(a, _, _)| a.event == PlayerEvent::TrackFail));
}

#[test]
fn completed_loops_never_exceed_repeat_count() {
    let mut p = make(0, 10, 4, 1000, 0, -1);
    start_playing(&mut p);
    for _ in 0..100 {
        p.advance_time(7);
        assert!(p.completed_loops() <= 4);
    }
    assert_eq!(p.state(), PlayerState::Done);
}

#[test]
fn display_includes_state_and_window() {
    let p = make(0, 0, -1, -1, 20, -1);
    let s = p.to_string();
    assert!(s.contains("state=idle"));
    assert!(s.contains("window=[0, inf]"));
    assert!(s.contains("loops=0/inf"));
    assert!(s.contains("buffering=20"));
}

#[test]
fn raw_sentinels_map_to_rust_types() {
    assert_eq!(RepeatCount::from(-1), RepeatCount::Forever);
    assert_eq!(RepeatCount::from(3), RepeatCount::Times(3));
    assert_eq!(ContentLength::from(-5), ContentLength::Unbounded);
    assert_eq!(ContentLength::from(5), ContentLength::Finite(5));
    assert_eq!(SimParams::from_raw(10, 0, -1).fail_after, None);
    assert_eq!(SimParams::from_raw(10, 0, 0).fail_after, Some(0));
}
