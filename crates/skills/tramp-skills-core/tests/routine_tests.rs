use rand::rngs::StdRng;
use rand::SeedableRng;
use tramp_skills_core::{
    parse_catalog_json, Catalog, Config, Position, Routine, SkillDescriptor, SkillError,
};

fn catalog() -> Catalog {
    let json = tramp_test_fixtures::catalogs::json("standard").expect("load standard catalog");
    parse_catalog_json(&json).expect("parse standard catalog")
}

#[test]
fn push_copies_with_selected_position() {
    let cat = catalog();
    let back = cat.get("Back Somersault").unwrap();
    let mut routine = Routine::new();
    routine.push(back, Some(Position::Pike)).unwrap();
    routine.push(back, None).unwrap();

    assert_eq!(routine.entries()[0].position, Position::Pike);
    assert_eq!(routine.entries()[1].position, Position::Tuck);
    // Catalog entry untouched.
    assert_eq!(cat.get("Back Somersault").unwrap().position, Position::Tuck);
}

#[test]
fn push_rejects_disallowed_position() {
    let cat = catalog();
    let triple = cat.get("Triple Back").unwrap();
    let mut routine = Routine::new();
    let err = routine.push(triple, Some(Position::Straight)).unwrap_err();
    assert!(matches!(err, SkillError::InvalidSkill { .. }));
    assert!(routine.is_empty());
}

#[test]
fn remove_and_reorder() {
    let mut routine = Routine::new();
    for name in ["a", "b", "c", "d"] {
        routine
            .push(&SkillDescriptor::new(name, 1.0, 0.0, Position::Straight), None)
            .unwrap();
    }
    let removed = routine.remove(1).unwrap();
    assert_eq!(removed.name, "b");

    routine.move_entry(0, 2).unwrap();
    let names: Vec<&str> = routine.entries().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["c", "d", "a"]);

    assert_eq!(
        routine.remove(3).unwrap_err(),
        SkillError::IndexOutOfRange { index: 3, len: 3 }
    );
    assert!(routine.move_entry(0, 5).is_err());

    routine.clear();
    assert!(routine.is_empty());
}

#[test]
fn randomize_picks_distinct_skills_in_allowed_positions() {
    let cat = catalog();
    for seed in 0..32u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut routine = Routine::new();
        routine.randomize(&cat, 10, &mut rng);
        assert_eq!(routine.len(), 10.min(cat.len()));

        let mut names: Vec<&str> = routine.entries().iter().map(|s| s.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), routine.len(), "duplicate skills in {names:?}");

        for entry in routine.entries() {
            let source = cat.get(&entry.name).unwrap();
            assert!(source.allows(entry.position), "{} in {}", entry.name, entry.position);
        }
        // Every randomized routine compiles.
        routine.compile(&Config::default()).expect("compile randomized routine");
    }
}

#[test]
fn randomize_small_catalog_takes_everything() {
    let cat = Catalog::new(vec![
        SkillDescriptor::new("Seat Drop", 0.0, 0.0, Position::Straight),
        SkillDescriptor::new("Front", 1.0, 0.0, Position::Tuck)
            .with_possible_positions(vec![Position::Tuck, Position::Pike]),
    ])
    .unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let mut routine = Routine::new();
    routine.randomize(&cat, 10, &mut rng);
    assert_eq!(routine.len(), 2);
}

#[test]
fn randomize_empty_catalog_terminates_and_keeps_routine() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut routine = Routine::new();
    routine
        .push(&SkillDescriptor::new("Full", 1.0, 1.0, Position::Straight), None)
        .unwrap();
    routine.randomize(&Catalog::default(), 10, &mut rng);
    assert_eq!(routine.len(), 1);

    routine.randomize(&catalog(), 0, &mut rng);
    assert!(routine.is_empty());
}

#[test]
fn routine_fixture_round_trips_through_compile() {
    let routine: Routine =
        tramp_test_fixtures::routines::load("voluntary").expect("load voluntary routine");
    assert_eq!(routine.len(), 5);
    let timelines = routine.compile(&Config::default()).unwrap();
    assert_eq!(timelines.len(), 5);
    // Double Back in pike, backward: lands at -2 turns.
    let db = &timelines[2];
    assert!((db.final_pose().rotation + 2.0).abs() < 1e-6);
}
