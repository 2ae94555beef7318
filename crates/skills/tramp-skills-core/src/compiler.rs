//! Skill compiler: expands a declarative skill into a keyframe timeline.
//!
//! Layout for a shaped skill (tuck/pike), in normalized time:
//!
//! ```text
//! 0 ─ stall ─ enter shape ─── held shape ─── leave shape ─ kickout ─ 1
//!     arms up   (+0.18 turn)                  (-0.18 turn)   open + twist
//! ```
//!
//! Straight skills skip the middle phases entirely: one keyframe at each end.
//! Twist is concentrated in the kickout window, never during the held shape.

use crate::config::{Config, RenderTuning};
use crate::data::{Keyframe, KeyframeTimeline, Pose, SkillDescriptor};
use crate::error::Result;
use crate::positions::{NamedPose, Position};

/// Somersault turns spent blending into (and out of) the held shape.
pub const POSITION_TRANSITION_ROTATION: f32 = 0.18;

/// Compile a skill for an athlete facing forward.
pub fn compile(descriptor: &SkillDescriptor, tuning: &RenderTuning) -> Result<KeyframeTimeline> {
    compile_with_heading(descriptor, tuning, 0.0)
}

/// Compile a skill given the twist already performed earlier in a routine.
/// An odd number of completed half twists leaves the athlete facing backward,
/// which inverts the somersault direction.
pub fn compile_with_heading(
    descriptor: &SkillDescriptor,
    tuning: &RenderTuning,
    cumulative_twist: f32,
) -> Result<KeyframeTimeline> {
    tuning.validate()?;
    descriptor.validate()?;

    let mut direction = descriptor.direction();
    let half_twists = (cumulative_twist * 2.0).floor() as i64;
    if half_twists % 2 != 0 {
        direction = -direction;
    }

    let flips = descriptor.flips;
    let twists = descriptor.twists;
    let ready = NamedPose::StraightArmsUp;

    let mut keys = Vec::with_capacity(6);
    keys.push(key(0.0, Pose::new(0.0, 0.0, ready)));

    if descriptor.position != Position::Straight {
        let shape = descriptor.position.shape();

        // End of stall
        keys.push(key(
            tuning.stall_duration,
            Pose::new(tuning.stall_rotation * direction, 0.0, ready),
        ));

        let position_rotation =
            (flips - tuning.kickout_rotation - tuning.stall_rotation) * direction;
        let position_speed = position_rotation / tuning.position_duration();
        let transition_time = POSITION_TRANSITION_ROTATION / position_speed.abs();

        // Shape fully entered
        keys.push(key(
            tuning.stall_duration + transition_time,
            Pose::new(
                (tuning.stall_rotation + POSITION_TRANSITION_ROTATION) * direction,
                0.0,
                shape,
            ),
        ));

        // Shape starts opening
        let kickout_start = (flips - tuning.kickout_rotation) * direction;
        keys.push(key(
            1.0 - tuning.kickout_duration - transition_time,
            Pose::new(
                kickout_start - POSITION_TRANSITION_ROTATION * direction,
                0.0,
                shape,
            ),
        ));

        // Start of kickout
        keys.push(key(
            1.0 - tuning.kickout_duration,
            Pose::new(kickout_start, twists * tuning.kickout_duration, ready),
        ));
    }

    keys.push(key(1.0, Pose::new(flips * direction, twists, ready)));

    let timeline = KeyframeTimeline::new(keys)?;
    log::debug!(
        "compiled skill '{}' ({} flips, {} twists, {}) into {} keyframes",
        descriptor.name,
        flips,
        twists,
        descriptor.position,
        timeline.len()
    );
    Ok(timeline)
}

/// Compile every skill up front so playback never recompiles mid-frame.
pub fn compile_all(skills: &[SkillDescriptor], cfg: &Config) -> Result<Vec<KeyframeTimeline>> {
    let mut out = Vec::with_capacity(skills.len());
    let mut cumulative_twist = 0.0f32;
    for skill in skills {
        let heading = if cfg.track_heading {
            cumulative_twist
        } else {
            0.0
        };
        out.push(compile_with_heading(skill, &cfg.tuning, heading)?);
        cumulative_twist += skill.twists;
    }
    Ok(out)
}

#[inline]
fn key(stamp: f32, pose: Pose) -> Keyframe {
    Keyframe { stamp, pose }
}
