use tramp_skills_core::{
    compile, evaluate_pose, Config, Position, RenderTuning, Routine, Simulator, SkillDescriptor,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn back_tuck() -> SkillDescriptor {
    SkillDescriptor::new("Back Somersault", 1.0, 0.0, Position::Tuck)
        .with_possible_positions(vec![Position::Tuck, Position::Pike, Position::Straight])
        .backward()
}

#[test]
fn closed_simulator_emits_no_frames() {
    let mut sim = Simulator::default();
    assert!(!sim.is_open());
    assert!(sim.frame(0.0).is_none());
}

#[test]
fn play_skill_in_selected_position() {
    let cfg = Config {
        skill_seconds: 2.0,
        ..Config::default()
    };
    let mut sim = Simulator::new(cfg);
    sim.play_skill(&back_tuck(), Some(Position::Straight), 5.0)
        .unwrap();
    assert!(sim.is_open());
    assert_eq!(sim.timelines().len(), 1);
    assert_eq!(sim.timelines()[0].len(), 2);

    let frame = sim.frame(6.0).expect("frame");
    assert_eq!(frame.index, 0);
    approx(frame.local_time, 0.5, 1e-6);
    approx(frame.pose.rotation, -0.5, 1e-6);
}

#[test]
fn play_skill_rejects_disallowed_position() {
    let mut sim = Simulator::default();
    let d = SkillDescriptor::new("Triple Back", 3.0, 0.0, Position::Tuck)
        .with_possible_positions(vec![Position::Tuck]);
    assert!(sim.play_skill(&d, Some(Position::Pike), 0.0).is_err());
    assert!(!sim.is_open());
}

#[test]
fn routine_frames_match_direct_evaluation() {
    let cfg = Config {
        skill_seconds: 1.0,
        looping: false,
        ..Config::default()
    };
    let mut routine = Routine::new();
    routine.push(&back_tuck(), None).unwrap();
    routine
        .push(&SkillDescriptor::new("Rudolph", 1.0, 1.5, Position::Straight), None)
        .unwrap();

    let mut sim = Simulator::new(cfg);
    sim.play_routine(&routine, 0.0).unwrap();

    let expected = compile(&routine.entries()[1], &RenderTuning::default()).unwrap();
    let frame = sim.frame(1.25).expect("second skill active");
    assert_eq!(frame.index, 1);
    assert_eq!(*frame.pose, evaluate_pose(&expected, frame.local_time));

    // Once mode stops after the last slot.
    assert!(sim.frame(2.5).is_none());
}

#[test]
fn empty_routine_does_not_open() {
    let mut sim = Simulator::default();
    sim.play_routine(&Routine::new(), 0.0).unwrap();
    assert!(!sim.is_open());
}

#[test]
fn close_discards_timelines() {
    let mut sim = Simulator::default();
    sim.play_skill(&back_tuck(), None, 0.0).unwrap();
    assert!(sim.frame(0.3).is_some());
    sim.close();
    assert!(sim.timelines().is_empty());
    assert!(sim.frame(0.3).is_none());
}

#[test]
fn practice_bounce_runs_without_a_skill() {
    let sim = Simulator::default();
    let s = sim.practice_bounce(0.0);
    approx(s.feet_height, 0.0, 1e-6);
    approx(s.root_height, sim.flight().total_limb_length(), 1e-6);
}

#[test]
fn frame_serializes_with_camel_case_fields() {
    let mut sim = Simulator::default();
    sim.play_skill(&back_tuck(), None, 0.0).unwrap();
    let frame = sim.frame(0.1).expect("frame");
    let json = serde_json::to_value(frame).unwrap();
    assert!(json.get("localTime").is_some());
    assert!(json.get("local_time").is_none());
    assert!(json["pose"].get("rotation").is_some());
}
