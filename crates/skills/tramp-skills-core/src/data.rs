//! Skill descriptors, poses and compiled keyframe timelines.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkillError};
use crate::positions::{JointAngles, NamedPose, Position};

/// Declarative description of a skill as authored in the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDescriptor {
    pub name: String,
    /// Full somersault turns.
    pub flips: f32,
    /// Full turns about the longitudinal axis.
    pub twists: f32,
    pub position: Position,
    /// Positions a user may pick for this skill. Empty means only `position`.
    #[serde(default)]
    pub possible_positions: Vec<Position>,
    #[serde(default)]
    pub is_back_skill: bool,
}

impl SkillDescriptor {
    pub fn new(name: impl Into<String>, flips: f32, twists: f32, position: Position) -> Self {
        Self {
            name: name.into(),
            flips,
            twists,
            position,
            possible_positions: Vec::new(),
            is_back_skill: false,
        }
    }

    pub fn backward(mut self) -> Self {
        self.is_back_skill = true;
        self
    }

    pub fn with_possible_positions(mut self, positions: impl Into<Vec<Position>>) -> Self {
        self.possible_positions = positions.into();
        self
    }

    /// Somersault direction sign: -1 for back skills, +1 otherwise.
    pub fn direction(&self) -> f32 {
        if self.is_back_skill {
            -1.0
        } else {
            1.0
        }
    }

    /// Whether `position` may be selected for this skill.
    pub fn allows(&self, position: Position) -> bool {
        if self.possible_positions.is_empty() {
            position == self.position
        } else {
            self.possible_positions.contains(&position)
        }
    }

    /// Copy of this descriptor with the given position resolved.
    pub fn with_position(&self, position: Position) -> Result<SkillDescriptor> {
        if !self.allows(position) {
            return Err(SkillError::invalid_skill(
                &self.name,
                format!("position {position} is not allowed"),
            ));
        }
        let mut out = self.clone();
        out.position = position;
        Ok(out)
    }

    /// Validate numeric ranges and position membership.
    pub fn validate(&self) -> Result<()> {
        if !self.flips.is_finite() || self.flips < 0.0 {
            return Err(SkillError::invalid_skill(
                &self.name,
                format!("flips must be finite and >= 0 (got {})", self.flips),
            ));
        }
        if !self.twists.is_finite() || self.twists < 0.0 {
            return Err(SkillError::invalid_skill(
                &self.name,
                format!("twists must be finite and >= 0 (got {})", self.twists),
            ));
        }
        if !self.possible_positions.is_empty() && !self.possible_positions.contains(&self.position)
        {
            return Err(SkillError::invalid_skill(
                &self.name,
                format!("position {} not in possiblePositions", self.position),
            ));
        }
        Ok(())
    }
}

/// Instantaneous athlete pose. Rotation and twist are in turns, joints in radians.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub rotation: f32,
    pub twist: f32,
    pub joints: JointAngles,
}

impl Pose {
    pub fn new(rotation: f32, twist: f32, shape: NamedPose) -> Self {
        Self {
            rotation,
            twist,
            joints: shape.joints(),
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::new(0.0, 0.0, NamedPose::StraightArmsUp)
    }
}

/// A pose pinned to a normalized time in [0,1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub stamp: f32,
    pub pose: Pose,
}

/// Ordered keyframes spanning exactly [0,1] with strictly increasing stamps.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KeyframeTimeline {
    keyframes: Vec<Keyframe>,
}

impl KeyframeTimeline {
    /// Build a timeline, rejecting layouts that are empty, non-finite, not
    /// anchored at 0 and 1, or not strictly increasing.
    pub fn new(keyframes: Vec<Keyframe>) -> Result<Self> {
        let (first, last) = match (keyframes.first(), keyframes.last()) {
            (Some(f), Some(l)) if keyframes.len() >= 2 => (f.stamp, l.stamp),
            _ => {
                return Err(SkillError::invalid_config(
                    "timeline needs at least two keyframes",
                ))
            }
        };
        if first != 0.0 || last != 1.0 {
            return Err(SkillError::invalid_config(format!(
                "timeline must span [0,1] (got [{first}, {last}])"
            )));
        }
        for pair in keyframes.windows(2) {
            let (a, b) = (pair[0].stamp, pair[1].stamp);
            if !a.is_finite() || !b.is_finite() || b <= a {
                return Err(SkillError::invalid_config(format!(
                    "keyframe stamps must be strictly increasing (got {a} then {b})"
                )));
            }
        }
        Ok(Self { keyframes })
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    /// Always false for a constructed timeline; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    pub fn stamps(&self) -> impl Iterator<Item = f32> + '_ {
        self.keyframes.iter().map(|k| k.stamp)
    }

    pub fn final_pose(&self) -> &Pose {
        // Construction guarantees at least two keyframes.
        &self.keyframes[self.keyframes.len() - 1].pose
    }
}

impl<'de> Deserialize<'de> for KeyframeTimeline {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            keyframes: Vec<Keyframe>,
        }
        let raw = Raw::deserialize(d)?;
        KeyframeTimeline::new(raw.keyframes).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kf(stamp: f32) -> Keyframe {
        Keyframe {
            stamp,
            pose: Pose::default(),
        }
    }

    #[test]
    fn timeline_rejects_duplicate_stamps() {
        let err = KeyframeTimeline::new(vec![kf(0.0), kf(0.5), kf(0.5), kf(1.0)]).unwrap_err();
        assert!(matches!(err, SkillError::InvalidConfiguration { .. }));
    }

    #[test]
    fn timeline_requires_unit_span() {
        assert!(KeyframeTimeline::new(vec![kf(0.0), kf(0.9)]).is_err());
        assert!(KeyframeTimeline::new(vec![kf(0.0)]).is_err());
        assert!(KeyframeTimeline::new(vec![kf(0.0), kf(1.0)]).is_ok());
    }

    #[test]
    fn timeline_json_is_validated() {
        let ok = KeyframeTimeline::new(vec![kf(0.0), kf(1.0)]).unwrap();
        let json = serde_json::to_string(&ok).unwrap();
        let back: KeyframeTimeline = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ok);

        let bad = json.replace("1.0", "0.0");
        assert!(serde_json::from_str::<KeyframeTimeline>(&bad).is_err());
    }

    #[test]
    fn descriptor_position_membership() {
        let d = SkillDescriptor::new("Back", 1.0, 0.0, Position::Tuck)
            .with_possible_positions(vec![Position::Tuck, Position::Pike]);
        assert!(d.validate().is_ok());
        assert_eq!(d.with_position(Position::Pike).unwrap().position, Position::Pike);
        assert!(d.with_position(Position::Straight).is_err());
        // The source descriptor is untouched.
        assert_eq!(d.position, Position::Tuck);
    }

    #[test]
    fn descriptor_rejects_negative_flips() {
        let d = SkillDescriptor::new("Bad", -1.0, 0.0, Position::Straight);
        assert!(matches!(d.validate(), Err(SkillError::InvalidSkill { .. })));
    }
}
