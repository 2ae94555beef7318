//! Configuration for skill rendering, the practice-bounce flight model and playback.
//!
//! Plain serde structs with defaults; adapters deserialize overrides from JSON.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkillError};

/// Phase timing applied by the skill compiler. All durations are fractions of a
/// skill's normalized time, all rotations are turns.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderTuning {
    /// Delay before entering the shaped position.
    pub stall_duration: f32,
    /// Rotation performed during the stall.
    pub stall_rotation: f32,
    /// Duration of the opening-out phase before landing.
    pub kickout_duration: f32,
    /// Rotation performed during the kickout.
    pub kickout_rotation: f32,
}

impl Default for RenderTuning {
    fn default() -> Self {
        Self {
            stall_duration: 0.1,
            stall_rotation: 0.1,
            kickout_duration: 0.5,
            kickout_rotation: 0.5,
        }
    }
}

impl RenderTuning {
    /// Normalized time left for the held position.
    pub fn position_duration(&self) -> f32 {
        1.0 - self.kickout_duration - self.stall_duration
    }

    /// Reject tuning that cannot leave a non-empty held-position phase.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("stallDuration", self.stall_duration),
            ("stallRotation", self.stall_rotation),
            ("kickoutDuration", self.kickout_duration),
            ("kickoutRotation", self.kickout_rotation),
        ];
        for (name, v) in fields {
            if !v.is_finite() || v < 0.0 {
                return Err(SkillError::invalid_config(format!(
                    "{name} must be finite and >= 0 (got {v})"
                )));
            }
        }
        if self.stall_duration + self.kickout_duration >= 1.0 {
            return Err(SkillError::invalid_config(format!(
                "stallDuration + kickoutDuration must be < 1 (got {})",
                self.stall_duration + self.kickout_duration
            )));
        }
        Ok(())
    }
}

/// Constants of the repeating jump + bounce cycle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlightConfig {
    /// Aerial time per cycle (seconds).
    pub jump_phase: f32,
    /// Bed contact time per cycle (seconds).
    pub bounce_phase: f32,
    /// Gravitational acceleration, negative (scene units / s²).
    pub gravity: f32,
    pub leg_segment_length: f32,
    /// Clearance between the feet and the lowest leg segment.
    pub limb_gap: f32,
    /// Somersault turns performed per aerial phase in the practice bounce.
    pub turns: f32,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            jump_phase: 1.5,
            bounce_phase: 0.3,
            gravity: -9.81,
            leg_segment_length: 0.9,
            limb_gap: 0.1,
            turns: 1.0,
        }
    }
}

/// Top-level configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub tuning: RenderTuning,
    pub flight: FlightConfig,
    /// Upper bound on randomized routine length.
    pub max_routine_skills: usize,
    /// Thread each entry's cumulative twist into the next compile so that a
    /// backward-facing athlete reverses somersault direction.
    pub track_heading: bool,
    /// Seconds allotted to each skill during playback.
    pub skill_seconds: f32,
    /// Loop routine playback instead of stopping after the last skill.
    pub looping: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tuning: RenderTuning::default(),
            flight: FlightConfig::default(),
            max_routine_skills: 10,
            track_heading: false,
            skill_seconds: 1.5,
            looping: true,
        }
    }
}
