use tramp_skills_core::{LoopMode, Playhead, RoutineSequencer};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn active(p: Playhead) -> (usize, f32) {
    match p {
        Playhead::Active { index, local_time } => (index, local_time),
        Playhead::Finished => panic!("expected an active playhead"),
    }
}

#[test]
fn equal_slots_split_time_evenly() {
    let seq = RoutineSequencer::equal(3, 2.0, LoopMode::Loop);
    approx(seq.total_duration(), 6.0, 1e-6);

    let (i, u) = active(seq.locate(0.0));
    assert_eq!(i, 0);
    assert_eq!(u, 0.0);

    let (i, u) = active(seq.locate(3.0));
    assert_eq!(i, 1);
    approx(u, 0.5, 1e-6);

    let (i, u) = active(seq.locate(5.5));
    assert_eq!(i, 2);
    approx(u, 0.75, 1e-6);
}

#[test]
fn loop_wraps_indefinitely() {
    let seq = RoutineSequencer::equal(2, 1.0, LoopMode::Loop);
    let (i, u) = active(seq.locate(2.0));
    assert_eq!((i, u), (0, 0.0));
    let (i, u) = active(seq.locate(1003.25));
    assert_eq!(i, 1);
    approx(u, 0.25, 1e-3);
}

#[test]
fn once_finishes_after_total_duration() {
    let seq = RoutineSequencer::equal(2, 1.0, LoopMode::Once);
    let (i, u) = active(seq.locate(2.0));
    assert_eq!(i, 1);
    approx(u, 1.0, 1e-6);
    assert_eq!(seq.locate(2.01), Playhead::Finished);
}

#[test]
fn weighted_slots_follow_durations() {
    let seq = RoutineSequencer::weighted(&[1.0, 3.0], LoopMode::Once);
    approx(seq.total_duration(), 4.0, 1e-6);
    let (i, u) = active(seq.locate(0.5));
    assert_eq!(i, 0);
    approx(u, 0.5, 1e-6);
    let (i, u) = active(seq.locate(2.5));
    assert_eq!(i, 1);
    approx(u, 0.5, 1e-6);
}

#[test]
fn zero_length_slots_are_skipped() {
    let seq = RoutineSequencer::weighted(&[1.0, 0.0, 1.0, f32::NAN], LoopMode::Once);
    let (i, _) = active(seq.locate(1.0));
    assert_eq!(i, 2);
    let (i, u) = active(seq.locate(2.0));
    assert_eq!(i, 2);
    approx(u, 1.0, 1e-6);
}

#[test]
fn restart_shifts_start_time() {
    let mut seq = RoutineSequencer::equal(2, 1.0, LoopMode::Once);
    seq.restart(10.0);
    assert_eq!(seq.start_time(), 10.0);
    let (i, u) = active(seq.locate(11.5));
    assert_eq!(i, 1);
    approx(u, 0.5, 1e-6);
    // Clock values before the start clamp to the first frame.
    assert_eq!(active(seq.locate(9.0)), (0, 0.0));
}

#[test]
fn empty_routine_is_finished() {
    let seq = RoutineSequencer::equal(0, 1.0, LoopMode::Loop);
    assert!(seq.is_empty());
    assert_eq!(seq.locate(0.0), Playhead::Finished);
}
