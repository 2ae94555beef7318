//! Simulator: owns compiled timelines, the routine sequencer and a reusable pose
//! buffer. Selection events (play skill / play routine / close) recompile up
//! front; `frame` is then a pure lookup driven by the caller's clock.

use serde::Serialize;

use crate::compiler::compile;
use crate::config::Config;
use crate::data::{KeyframeTimeline, Pose, SkillDescriptor};
use crate::error::Result;
use crate::interp::JointInterp;
use crate::kinematics::{FlightModel, FlightSample};
use crate::positions::Position;
use crate::routine::Routine;
use crate::sampling::evaluate_pose_into;
use crate::sequencer::{LoopMode, Playhead, RoutineSequencer};

/// Per-frame output handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame<'a> {
    /// Index of the active skill within the playing routine.
    pub index: usize,
    /// Normalized time within the active skill.
    pub local_time: f32,
    pub pose: &'a Pose,
}

#[derive(Debug)]
pub struct Simulator {
    cfg: Config,
    timelines: Vec<KeyframeTimeline>,
    sequencer: RoutineSequencer,
    flight: FlightModel,
    joint_interp: JointInterp,
    pose: Pose,
    open: bool,
}

impl Simulator {
    pub fn new(cfg: Config) -> Self {
        Self {
            flight: FlightModel::new(cfg.flight),
            sequencer: RoutineSequencer::equal(0, cfg.skill_seconds, loop_mode(&cfg)),
            cfg,
            timelines: Vec::new(),
            joint_interp: JointInterp::default(),
            pose: Pose::default(),
            open: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn timelines(&self) -> &[KeyframeTimeline] {
        &self.timelines
    }

    pub fn sequencer(&self) -> &RoutineSequencer {
        &self.sequencer
    }

    pub fn set_joint_interp(&mut self, interp: JointInterp) {
        self.joint_interp = interp;
    }

    /// Play one skill, optionally in a user-selected position.
    pub fn play_skill(
        &mut self,
        descriptor: &SkillDescriptor,
        position: Option<Position>,
        now: f32,
    ) -> Result<()> {
        let skill = match position {
            Some(p) => descriptor.with_position(p)?,
            None => descriptor.clone(),
        };
        let timeline = compile(&skill, &self.cfg.tuning)?;
        log::debug!("playing skill '{}' in {}", skill.name, skill.position);
        self.load(vec![timeline], now);
        Ok(())
    }

    /// Play a whole routine. An empty routine is ignored.
    pub fn play_routine(&mut self, routine: &Routine, now: f32) -> Result<()> {
        if routine.is_empty() {
            log::warn!("play requested for an empty routine; ignoring");
            return Ok(());
        }
        let timelines = routine.compile(&self.cfg)?;
        log::debug!("playing routine of {} skills", timelines.len());
        self.load(timelines, now);
        Ok(())
    }

    pub fn close(&mut self) {
        self.open = false;
        self.timelines.clear();
        self.sequencer = RoutineSequencer::equal(0, self.cfg.skill_seconds, loop_mode(&self.cfg));
    }

    fn load(&mut self, timelines: Vec<KeyframeTimeline>, now: f32) {
        self.sequencer =
            RoutineSequencer::equal(timelines.len(), self.cfg.skill_seconds, loop_mode(&self.cfg));
        self.sequencer.restart(now);
        self.timelines = timelines;
        self.open = true;
    }

    /// Pose for clock value `now`; `None` when closed or finished.
    pub fn frame(&mut self, now: f32) -> Option<Frame<'_>> {
        if !self.open {
            return None;
        }
        match self.sequencer.locate(now) {
            Playhead::Finished => None,
            Playhead::Active { index, local_time } => {
                let timeline = self.timelines.get(index)?;
                evaluate_pose_into(timeline, local_time, &mut self.pose, self.joint_interp);
                Some(Frame {
                    index,
                    local_time,
                    pose: &self.pose,
                })
            }
        }
    }

    /// Free-form jump and bounce cycle, independent of any skill.
    pub fn practice_bounce(&self, now: f32) -> FlightSample {
        self.flight.evaluate(now)
    }

    pub fn flight(&self) -> &FlightModel {
        &self.flight
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

fn loop_mode(cfg: &Config) -> LoopMode {
    if cfg.looping {
        LoopMode::Loop
    } else {
        LoopMode::Once
    }
}
