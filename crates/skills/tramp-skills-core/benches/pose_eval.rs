use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tramp_skills_core::{
    compile, evaluate_pose_into, FlightModel, JointInterp, Pose, Position, RenderTuning,
    SkillDescriptor,
};

fn bench_pose_eval(c: &mut Criterion) {
    let skill = SkillDescriptor::new("Full In", 2.0, 1.0, Position::Tuck).backward();
    let tuning = RenderTuning::default();

    c.bench_function("compile_full_in", |b| {
        b.iter(|| compile(black_box(&skill), black_box(&tuning)).unwrap())
    });

    let timeline = compile(&skill, &tuning).unwrap();
    let mut pose = Pose::default();
    c.bench_function("evaluate_pose_60_frames", |b| {
        b.iter(|| {
            for i in 0..60 {
                let u = i as f32 / 59.0;
                evaluate_pose_into(&timeline, black_box(u), &mut pose, JointInterp::Linear);
            }
            black_box(pose.rotation)
        })
    });

    let flight = FlightModel::default();
    c.bench_function("flight_evaluate", |b| {
        b.iter(|| flight.evaluate(black_box(12.345)))
    });
}

criterion_group!(benches, bench_pose_eval);
criterion_main!(benches);
