//! Named position table.
//!
//! Body shapes are a closed enumeration mapped through exhaustive matches, so a
//! missing entry is a compile error rather than a lookup failure at runtime.
//!
//! Joint angles are raw radians and are NOT normalized to (-π, π]. Under the
//! default linear joint interpolation the authored value picks the sweep
//! direction: shoulders in `Tuck`/`Pike` are `3π/2` (not `-π/2`) so that the
//! blend from the arms-up value `π` travels a quarter turn instead of three.

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SkillError;
use crate::interp::functions::{lerp_angle_shortest, lerp_f32, JointInterp};

/// Body shape held through the rotation phase of a skill.
///
/// Names are matched case-insensitively both by `FromStr` and when
/// deserializing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Position {
    Straight,
    Tuck,
    Pike,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Straight, Position::Tuck, Position::Pike];

    /// Named pose held while in this position.
    pub fn shape(self) -> NamedPose {
        match self {
            Position::Straight => NamedPose::StraightArmsUp,
            Position::Tuck => NamedPose::Tuck,
            Position::Pike => NamedPose::Pike,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Straight => "Straight",
            Position::Tuck => "Tuck",
            Position::Pike => "Pike",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = SkillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SkillError::UnknownPosition {
                name: s.to_string(),
            })
    }
}

impl TryFrom<String> for Position {
    type Error = SkillError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Fixed joint-angle vectors addressable by name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedPose {
    StraightArmsUp,
    StraightArmsDown,
    Tuck,
    Pike,
}

impl NamedPose {
    pub fn joints(self) -> JointAngles {
        match self {
            NamedPose::StraightArmsUp => JointAngles::symmetric(PI, 0.0, 0.0),
            NamedPose::StraightArmsDown => JointAngles::symmetric(2.0 * PI, 0.0, 0.0),
            NamedPose::Tuck => {
                JointAngles::symmetric(3.0 * PI / 2.0, -3.0 * PI / 4.0, 3.0 * PI / 4.0)
            }
            NamedPose::Pike => JointAngles::symmetric(3.0 * PI / 2.0, -3.0 * PI / 4.0, 0.0),
        }
    }
}

/// Six articulated joints of the athlete rig, in radians.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JointAngles {
    pub left_shoulder: f32,
    pub right_shoulder: f32,
    pub left_thigh: f32,
    pub right_thigh: f32,
    pub left_shin: f32,
    pub right_shin: f32,
}

impl JointAngles {
    pub const COUNT: usize = 6;

    pub fn symmetric(shoulder: f32, thigh: f32, shin: f32) -> Self {
        Self {
            left_shoulder: shoulder,
            right_shoulder: shoulder,
            left_thigh: thigh,
            right_thigh: thigh,
            left_shin: shin,
            right_shin: shin,
        }
    }

    pub fn to_array(&self) -> [f32; Self::COUNT] {
        [
            self.left_shoulder,
            self.right_shoulder,
            self.left_thigh,
            self.right_thigh,
            self.left_shin,
            self.right_shin,
        ]
    }

    pub fn from_array(a: [f32; Self::COUNT]) -> Self {
        Self {
            left_shoulder: a[0],
            right_shoulder: a[1],
            left_thigh: a[2],
            right_thigh: a[3],
            left_shin: a[4],
            right_shin: a[5],
        }
    }

    /// Per-joint blend between `self` and `other`.
    pub fn lerp(&self, other: &JointAngles, t: f32, interp: JointInterp) -> JointAngles {
        let a = self.to_array();
        let b = other.to_array();
        let mut out = [0.0; Self::COUNT];
        for ((o, a), b) in out.iter_mut().zip(a).zip(b) {
            *o = match interp {
                JointInterp::Linear => lerp_f32(a, b, t),
                JointInterp::ShortestArc => lerp_angle_shortest(a, b, t),
            };
        }
        JointAngles::from_array(out)
    }
}
