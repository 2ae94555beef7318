//! Pose evaluation over a compiled keyframe timeline.
//!
//! Model:
//! - Keyframes carry normalized stamps in [0,1], strictly increasing.
//! - Between two bracketing keyframes every field is blended independently by
//!   the local factor `(u - t_i) / (t_{i+1} - t_i)`.
//! - Rotation and twist are blended linearly; joints follow a [`JointInterp`].
//! - Query times outside [0,1] clamp (NaN is treated as 0).
//!
//! API:
//! - evaluate_pose(&timeline, u)
//! - evaluate_pose_into(&timeline, u, &mut pose, interp) for per-frame reuse

use crate::data::{Keyframe, KeyframeTimeline, Pose};
use crate::interp::functions::lerp_f32;
use crate::interp::JointInterp;

/// Find the segment [i, i+1] with `stamp_i <= u < stamp_{i+1}` and return
/// (i, i+1, local_t). At or beyond the ends returns (k, k, 0) so the caller
/// picks keyframe k verbatim; landing exactly on a stamp selects the segment
/// that starts there, which makes keyframe poses reproduce exactly.
fn find_segment(points: &[Keyframe], u: f32) -> (usize, usize, f32) {
    let n = points.len();
    if n == 0 {
        return (0, 0, 0.0);
    }
    if n == 1 || u <= points[0].stamp {
        return (0, 0, 0.0);
    }
    if u >= points[n - 1].stamp {
        return (n - 1, n - 1, 0.0);
    }
    // Timelines are a handful of keys; a linear scan beats a binary search here.
    for i in 0..(n - 1) {
        let t0 = points[i].stamp;
        let t1 = points[i + 1].stamp;
        if u >= t0 && u < t1 {
            let denom = t1 - t0;
            let lt = if denom > 0.0 { (u - t0) / denom } else { 0.0 };
            return (i, i + 1, lt.clamp(0.0, 1.0));
        }
    }
    (n - 1, n - 1, 0.0)
}

#[inline]
fn clamp_unit(u: f32) -> f32 {
    if u.is_nan() {
        0.0
    } else {
        u.clamp(0.0, 1.0)
    }
}

/// Evaluate the timeline at normalized time `u`, writing into `out`.
pub fn evaluate_pose_into(
    timeline: &KeyframeTimeline,
    u: f32,
    out: &mut Pose,
    interp: JointInterp,
) {
    let points = timeline.keyframes();
    let (i0, i1, lt) = find_segment(points, clamp_unit(u));
    if i0 == i1 {
        *out = points[i0].pose;
        return;
    }
    let left = &points[i0].pose;
    let right = &points[i1].pose;
    out.rotation = lerp_f32(left.rotation, right.rotation, lt);
    out.twist = lerp_f32(left.twist, right.twist, lt);
    out.joints = left.joints.lerp(&right.joints, lt, interp);
}

/// Evaluate with an explicit joint interpolation policy.
pub fn evaluate_pose_with(timeline: &KeyframeTimeline, u: f32, interp: JointInterp) -> Pose {
    let mut pose = Pose::default();
    evaluate_pose_into(timeline, u, &mut pose, interp);
    pose
}

/// Evaluate with plain linear joint interpolation over the authored radians.
pub fn evaluate_pose(timeline: &KeyframeTimeline, u: f32) -> Pose {
    evaluate_pose_with(timeline, u, JointInterp::Linear)
}
