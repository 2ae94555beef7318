//! Error types for skill compilation, catalog loading and routine editing.

use serde::{Deserialize, Serialize};

/// Errors surfaced by the core. Evaluation (poses, flight) is total and never fails;
/// everything here is raised synchronously at compile/load/edit time.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SkillError {
    /// Tuning or keyframe layout that cannot produce a valid timeline.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Position name absent from the named position table.
    #[error("Unknown position: {name}")]
    UnknownPosition { name: String },

    /// Skill descriptor violating its own invariants.
    #[error("Invalid skill '{name}': {reason}")]
    InvalidSkill { name: String, reason: String },

    /// Two catalog entries share a name.
    #[error("Duplicate skill name in catalog: {name}")]
    DuplicateSkill { name: String },

    /// Routine edit addressing an entry that does not exist.
    #[error("Routine index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Catalog JSON could not be parsed.
    #[error("Catalog parse error: {reason}")]
    CatalogParse { reason: String },
}

impl SkillError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        SkillError::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_skill(name: &str, reason: impl Into<String>) -> Self {
        SkillError::InvalidSkill {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SkillError>;
