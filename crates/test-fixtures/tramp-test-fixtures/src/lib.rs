use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    catalogs: HashMap<String, String>,
    routines: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a>(map: &'a HashMap<String, String>, kind: &str, name: &str) -> Result<&'a String> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

/// Skill catalogs as the static JSON arrays the app ships with.
pub mod catalogs {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.catalogs.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        let rel = lookup(&MANIFEST.catalogs, "catalog", name)?;
        read_to_string(rel)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let rel = lookup(&MANIFEST.catalogs, "catalog", name)?;
        Ok(resolve_path(rel))
    }
}

/// Routines with positions already resolved.
pub mod routines {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.routines.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        let rel = lookup(&MANIFEST.routines, "routine", name)?;
        read_to_string(rel)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let rel = lookup(&MANIFEST.routines, "routine", name)?;
        super::load_json(rel)
    }
}
