//! User-assembled routine. Entries are owned copies with a concrete position,
//! so editing a routine never touches the catalog or other entries.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::compiler::compile_all;
use crate::config::Config;
use crate::data::{KeyframeTimeline, SkillDescriptor};
use crate::error::{Result, SkillError};
use crate::positions::Position;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Routine {
    entries: Vec<SkillDescriptor>,
}

impl Routine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[SkillDescriptor] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a copy of `descriptor`, optionally with a selected position.
    pub fn push(&mut self, descriptor: &SkillDescriptor, position: Option<Position>) -> Result<()> {
        descriptor.validate()?;
        let entry = match position {
            Some(p) => descriptor.with_position(p)?,
            None => descriptor.clone(),
        };
        self.entries.push(entry);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<SkillDescriptor> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    /// Move the entry at `from` so that it ends up at index `to`.
    pub fn move_entry(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Replace the routine with up to `max` distinct catalog skills in random
    /// order, each in a random position from its `possible_positions` (or its
    /// catalog position when that set is empty). An empty catalog leaves the
    /// routine untouched.
    pub fn randomize<R: Rng + ?Sized>(&mut self, catalog: &Catalog, max: usize, rng: &mut R) {
        if catalog.is_empty() {
            log::warn!("randomize requested with an empty catalog; routine unchanged");
            return;
        }
        let mut picks: Vec<&SkillDescriptor> = catalog.iter().collect();
        picks.shuffle(rng);
        picks.truncate(max.min(catalog.len()));

        self.entries = picks
            .into_iter()
            .map(|skill| {
                let mut entry = skill.clone();
                if let Some(p) = skill.possible_positions.choose(rng) {
                    entry.position = *p;
                }
                entry
            })
            .collect();
        log::debug!("randomized routine with {} skills", self.entries.len());
    }

    /// Compile every entry to a timeline.
    pub fn compile(&self, cfg: &Config) -> Result<Vec<KeyframeTimeline>> {
        compile_all(&self.entries, cfg)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.entries.len() {
            return Err(SkillError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(())
    }
}
