//! Read-only skill catalog and the library view helpers built on it.

use std::borrow::Cow;

use hashbrown::{HashMap, HashSet};
use serde::Deserialize;

use crate::data::SkillDescriptor;
use crate::error::{Result, SkillError};
use crate::positions::Position;

/// Ordered, name-unique collection of validated skill descriptors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    skills: Vec<SkillDescriptor>,
}

impl Catalog {
    pub fn new(skills: Vec<SkillDescriptor>) -> Result<Self> {
        {
            let mut seen = HashSet::with_capacity(skills.len());
            for skill in &skills {
                skill.validate()?;
                if !seen.insert(skill.name.as_str()) {
                    return Err(SkillError::DuplicateSkill {
                        name: skill.name.clone(),
                    });
                }
            }
        }
        Ok(Self { skills })
    }

    pub fn get(&self, name: &str) -> Option<&SkillDescriptor> {
        self.skills.iter().find(|s| s.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillDescriptor> {
        self.skills.iter()
    }

    pub fn skills(&self) -> &[SkillDescriptor] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Skills grouped by flip category, categories ascending, catalog order kept within a group.
    pub fn grouped_by_flips(&self) -> Vec<(FlipCategory, Vec<&SkillDescriptor>)> {
        let mut groups: Vec<(FlipCategory, Vec<&SkillDescriptor>)> = Vec::new();
        for skill in &self.skills {
            let cat = FlipCategory::from_flips(skill.flips);
            match groups.iter_mut().find(|(c, _)| *c == cat) {
                Some((_, members)) => members.push(skill),
                None => groups.push((cat, vec![skill])),
            }
        }
        groups.sort_by(|(a, _), (b, _)| a.sort_key().total_cmp(&b.sort_key()));
        groups
    }
}

/// Library grouping by somersault count.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlipCategory {
    NoFlips,
    Single,
    Double,
    Triple,
    Quadruple,
    Many(f32),
}

impl FlipCategory {
    pub fn from_flips(flips: f32) -> Self {
        if flips < 0.5 {
            FlipCategory::NoFlips
        } else if flips < 1.5 {
            FlipCategory::Single
        } else if flips < 2.5 {
            FlipCategory::Double
        } else if flips < 3.5 {
            FlipCategory::Triple
        } else if flips < 4.5 {
            FlipCategory::Quadruple
        } else {
            FlipCategory::Many(flips)
        }
    }

    pub fn label(&self) -> Cow<'static, str> {
        match self {
            FlipCategory::NoFlips => "No Flips".into(),
            FlipCategory::Single => "Single Flips".into(),
            FlipCategory::Double => "Double Flips".into(),
            FlipCategory::Triple => "Triple Flips".into(),
            FlipCategory::Quadruple => "Quadruple Flips".into(),
            FlipCategory::Many(n) => format!("{n} Flips").into(),
        }
    }

    fn sort_key(&self) -> f32 {
        match self {
            FlipCategory::NoFlips => -1.0,
            FlipCategory::Single => 1.0,
            FlipCategory::Double => 2.0,
            FlipCategory::Triple => 3.0,
            FlipCategory::Quadruple => 4.0,
            FlipCategory::Many(n) => *n,
        }
    }
}

/// Per-skill position picked in the library. Selecting the current choice again clears it.
#[derive(Clone, Debug, Default)]
pub struct PositionSelection {
    selected: HashMap<String, Option<Position>>,
}

impl PositionSelection {
    /// Start with every skill's catalog position selected.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let selected = catalog
            .iter()
            .map(|s| (s.name.clone(), Some(s.position)))
            .collect();
        Self { selected }
    }

    pub fn selected(&self, name: &str) -> Option<Position> {
        self.selected.get(name).copied().flatten()
    }

    /// Toggle `position` for `name`, returning the new selection.
    pub fn toggle(&mut self, name: &str, position: Position) -> Option<Position> {
        let slot = self.selected.entry(name.to_string()).or_insert(None);
        *slot = if *slot == Some(position) {
            None
        } else {
            Some(position)
        };
        *slot
    }

    /// Copy of `descriptor` with the selected position applied, if any.
    pub fn resolve(&self, descriptor: &SkillDescriptor) -> Result<SkillDescriptor> {
        match self.selected(&descriptor.name) {
            Some(p) => descriptor.with_position(p),
            None => Ok(descriptor.clone()),
        }
    }
}

/// Parse the static JSON catalog (an array of skill records) into a validated [`Catalog`].
pub fn parse_catalog_json(s: &str) -> Result<Catalog> {
    let raw: Vec<RawSkill> = serde_json::from_str(s).map_err(|e| SkillError::CatalogParse {
        reason: e.to_string(),
    })?;

    let mut skills = Vec::with_capacity(raw.len());
    for r in raw {
        let position: Position = r.position.parse()?;
        let possible_positions = r
            .possible_positions
            .iter()
            .map(|p| p.parse())
            .collect::<Result<Vec<Position>>>()?;
        skills.push(SkillDescriptor {
            name: r.name,
            flips: r.flips,
            twists: r.twists,
            position,
            possible_positions,
            is_back_skill: r.is_back_skill,
        });
    }
    let catalog = Catalog::new(skills)?;
    log::debug!("loaded catalog with {} skills", catalog.len());
    Ok(catalog)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSkill {
    name: String,
    flips: f32,
    #[serde(default)]
    twists: f32,
    position: String,
    #[serde(default)]
    possible_positions: Vec<String>,
    #[serde(default)]
    is_back_skill: bool,
}
