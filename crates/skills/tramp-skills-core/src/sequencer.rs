//! Routine sequencing: maps a wall clock onto (active skill, local normalized time).
//!
//! Each skill owns a slot of the routine's duration (equal slots, or slots
//! weighted by per-skill durations). `Loop` wraps indefinitely; `Once` reports
//! `Finished` after the last slot.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum LoopMode {
    Once,
    #[default]
    Loop,
}

/// Where playback currently is.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Playhead {
    Active {
        index: usize,
        /// Normalized time within the active skill, in [0,1].
        local_time: f32,
    },
    Finished,
}

#[derive(Clone, Debug)]
pub struct RoutineSequencer {
    /// Cumulative slot end times; `ends[i]` is where slot i stops.
    ends: Vec<f32>,
    mode: LoopMode,
    start_time: f32,
}

impl RoutineSequencer {
    /// `count` slots of `slot_seconds` each.
    pub fn equal(count: usize, slot_seconds: f32, mode: LoopMode) -> Self {
        Self::weighted(&vec![slot_seconds; count], mode)
    }

    /// One slot per entry of `durations` (seconds). Non-finite or negative
    /// durations count as zero-length slots.
    pub fn weighted(durations: &[f32], mode: LoopMode) -> Self {
        let mut acc = 0.0f32;
        let ends = durations
            .iter()
            .map(|d| {
                if d.is_finite() && *d > 0.0 {
                    acc += d;
                }
                acc
            })
            .collect();
        Self {
            ends,
            mode,
            start_time: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.ends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    pub fn mode(&self) -> LoopMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: LoopMode) {
        self.mode = mode;
    }

    pub fn start_time(&self) -> f32 {
        self.start_time
    }

    pub fn total_duration(&self) -> f32 {
        self.ends.last().copied().unwrap_or(0.0)
    }

    /// Restart playback from the first skill at clock value `now`.
    pub fn restart(&mut self, now: f32) {
        self.start_time = now;
    }

    /// Map clock value `now` onto the routine.
    pub fn locate(&self, now: f32) -> Playhead {
        let total = self.total_duration();
        if self.ends.is_empty() || total <= 0.0 {
            return Playhead::Finished;
        }
        let elapsed = if now.is_finite() {
            (now - self.start_time).max(0.0)
        } else {
            0.0
        };
        let t = match self.mode {
            LoopMode::Once => {
                if elapsed > total {
                    return Playhead::Finished;
                }
                elapsed
            }
            LoopMode::Loop => elapsed.rem_euclid(total),
        };

        // First slot whose end lies beyond t; zero-length slots are skipped.
        let index = self
            .ends
            .iter()
            .position(|&end| t < end)
            .unwrap_or_else(|| self.last_non_empty());
        let begin = if index == 0 { 0.0 } else { self.ends[index - 1] };
        let span = self.ends[index] - begin;
        let local_time = if span > 0.0 {
            ((t - begin) / span).clamp(0.0, 1.0)
        } else {
            1.0
        };
        Playhead::Active { index, local_time }
    }

    fn last_non_empty(&self) -> usize {
        let mut idx = self.ends.len() - 1;
        while idx > 0 && self.ends[idx] == self.ends[idx - 1] {
            idx -= 1;
        }
        idx
    }
}
