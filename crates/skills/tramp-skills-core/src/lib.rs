//! Trampoline skill animation core (engine-agnostic).
//!
//! Turns declarative skill descriptors (flips, twists, body position, back
//! flag) into keyframe timelines, evaluates poses on those timelines for an
//! arbitrary clock, sequences several skills into a routine, and models the
//! free-form jump/bounce cycle. Rendering, UI and catalog storage live outside
//! this crate and only consume the poses and heights produced here.

pub mod catalog;
pub mod compiler;
pub mod config;
pub mod data;
pub mod error;
pub mod interp;
pub mod kinematics;
pub mod positions;
pub mod routine;
pub mod sampling;
pub mod sequencer;
pub mod simulator;

// Re-exports for consumers (adapters)
pub use catalog::{parse_catalog_json, Catalog, FlipCategory, PositionSelection};
pub use compiler::{compile, compile_all, compile_with_heading, POSITION_TRANSITION_ROTATION};
pub use config::{Config, FlightConfig, RenderTuning};
pub use data::{Keyframe, KeyframeTimeline, Pose, SkillDescriptor};
pub use error::{Result, SkillError};
pub use interp::JointInterp;
pub use kinematics::{FlightModel, FlightPhase, FlightSample};
pub use positions::{JointAngles, NamedPose, Position};
pub use routine::Routine;
pub use sampling::{evaluate_pose, evaluate_pose_into, evaluate_pose_with};
pub use sequencer::{LoopMode, Playhead, RoutineSequencer};
pub use simulator::{Frame, Simulator};
