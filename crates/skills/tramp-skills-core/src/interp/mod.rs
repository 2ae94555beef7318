//! Interpolation helpers.
//!
//! Rotation and twist are always blended linearly (they are cumulative turn
//! counts, never wrapped). Joint angles follow a [`functions::JointInterp`]
//! policy: linear over the authored raw radians, or explicit shortest arc.

pub mod functions;

pub use functions::JointInterp;
