//! Interpolation helpers:
//! - lerp_f32 (plain linear)
//! - lerp_angle_shortest (shortest arc on the circle, continuous from the left endpoint)

use std::f32::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

/// Policy applied to joint angles when blending between two poses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JointInterp {
    /// Component-wise linear blend of the raw authored radians.
    #[default]
    Linear,
    /// Blend along the shorter arc; the raw authored value only matters modulo 2π.
    ShortestArc,
}

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Signed angular difference `b - a` wrapped into [-π, π).
#[inline]
pub fn shortest_delta(a: f32, b: f32) -> f32 {
    let d = (b - a).rem_euclid(TAU);
    if d >= PI {
        d - TAU
    } else {
        d
    }
}

/// Interpolate from `a` towards `b` along the shorter arc.
/// The result starts exactly at `a`; at `t = 1` it equals `b` modulo a full turn.
#[inline]
pub fn lerp_angle_shortest(a: f32, b: f32, t: f32) -> f32 {
    a + shortest_delta(a, b) * t
}
