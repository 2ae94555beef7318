//! Flight kinematics for the free-form "practice bounce".
//!
//! One cycle is an aerial parabola followed by a bed-contact phase whose
//! constant acceleration reverses the landing velocity:
//!
//! - aerial (`0 <= t <= jump`): `h = ½·g·t² − (g·jump/2)·t`, zero at both ends
//! - contact (`t' = t − jump`): `h = v_land·t' + ½·a·t'²`, with
//!   `v_land = g·jump/2` and `a = (−v_land − v_land) / bounce`
//!
//! Both height and vertical velocity are continuous across the phase boundary
//! and across cycles. Everything is a pure function of the supplied clock.

use std::f32::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use crate::config::FlightConfig;
use crate::data::Pose;
use crate::interp::JointInterp;
use crate::positions::NamedPose;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightPhase {
    Aerial,
    Contact,
}

/// Flight state at one instant.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSample {
    pub phase: FlightPhase,
    /// Time since the start of the current cycle (seconds).
    pub cycle_time: f32,
    /// Height of the feet above the resting bed.
    pub feet_height: f32,
    /// Height of the articulated root (hips).
    pub root_height: f32,
    pub vertical_velocity: f32,
    /// Somersault angle in radians.
    pub rotation: f32,
    /// Twist angle in radians.
    pub twist: f32,
    /// 0 = straight, 1 = fully tucked.
    pub joint_blend: f32,
}

#[derive(Clone, Debug)]
pub struct FlightModel {
    cfg: FlightConfig,
}

impl FlightModel {
    pub fn new(cfg: FlightConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &FlightConfig {
        &self.cfg
    }

    pub fn cycle_period(&self) -> f32 {
        self.cfg.jump_phase + self.cfg.bounce_phase
    }

    /// Two leg segments plus the gap above the feet.
    pub fn total_limb_length(&self) -> f32 {
        2.0 * self.cfg.leg_segment_length + self.cfg.limb_gap
    }

    /// Vertical velocity at touchdown (negative).
    pub fn landing_velocity(&self) -> f32 {
        self.cfg.gravity * self.cfg.jump_phase / 2.0
    }

    /// Peak feet height reached at mid-flight.
    pub fn apex_height(&self) -> f32 {
        let half = self.cfg.jump_phase / 2.0;
        0.5 * self.cfg.gravity * half * half - self.landing_velocity() * half
    }

    fn cycle_time(&self, elapsed: f32) -> f32 {
        let period = self.cycle_period();
        if !elapsed.is_finite() || period <= 0.0 {
            return 0.0;
        }
        elapsed.rem_euclid(period)
    }

    /// Evaluate the cycle at an absolute clock value (seconds).
    pub fn evaluate(&self, elapsed: f32) -> FlightSample {
        let jump = self.cfg.jump_phase;
        let g = self.cfg.gravity;
        let t = self.cycle_time(elapsed);
        let v_land = self.landing_velocity();

        if jump > 0.0 && t <= jump {
            let half = jump / 2.0;
            let feet = 0.5 * g * t * t - v_land * t;
            let (joint_blend, twist) = if t <= half {
                (t / half, 0.0)
            } else {
                ((jump - t) / half, PI * (t - half) / half)
            };
            return FlightSample {
                phase: FlightPhase::Aerial,
                cycle_time: t,
                feet_height: feet,
                root_height: feet + self.total_limb_length(),
                vertical_velocity: g * t - v_land,
                rotation: TAU * self.cfg.turns * t / jump,
                twist,
                joint_blend,
            };
        }

        let tc = (t - jump).max(0.0);
        let bounce = self.cfg.bounce_phase;
        let accel = if bounce > 0.0 {
            (-v_land - v_land) / bounce
        } else {
            0.0
        };
        let feet = v_land * tc + 0.5 * accel * tc * tc;
        FlightSample {
            phase: FlightPhase::Contact,
            cycle_time: t,
            feet_height: feet,
            root_height: feet + self.total_limb_length(),
            vertical_velocity: v_land + accel * tc,
            rotation: 0.0,
            twist: 0.0,
            joint_blend: 0.0,
        }
    }

    /// Render-ready pose: joints blended straight → tuck, angles converted to turns.
    pub fn pose(&self, elapsed: f32) -> Pose {
        let s = self.evaluate(elapsed);
        let straight = NamedPose::StraightArmsUp.joints();
        let tuck = NamedPose::Tuck.joints();
        Pose {
            rotation: s.rotation / TAU,
            twist: s.twist / TAU,
            joints: straight.lerp(&tuck, s.joint_blend, JointInterp::Linear),
        }
    }
}

impl Default for FlightModel {
    fn default() -> Self {
        Self::new(FlightConfig::default())
    }
}
