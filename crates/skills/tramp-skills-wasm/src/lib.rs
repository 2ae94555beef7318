use std::fmt::Display;

use js_sys::JSON;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use tramp_skills_core::{
    compile, parse_catalog_json, Catalog, Config, Position, PositionSelection, Routine, Simulator,
    SkillDescriptor,
};

/// Browser-facing simulator: catalog, position selection, routine and playback.
#[wasm_bindgen]
pub struct TrampSimulator {
    core: Simulator,
    catalog: Catalog,
    selection: PositionSelection,
    routine: Routine,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn js_err(context: &str, e: impl Display) -> JsError {
    JsError::new(&format!("{context}: {e}"))
}

impl TrampSimulator {
    fn skill(&self, name: &str) -> Result<&SkillDescriptor, JsError> {
        self.catalog
            .get(name)
            .ok_or_else(|| JsError::new(&format!("unknown skill '{name}'")))
    }
}

#[wasm_bindgen]
impl TrampSimulator {
    /// Create a simulator. Pass a JSON config object or undefined/null for defaults.
    /// Example:
    ///   new TrampSimulator({ skillSeconds: 2.0, tuning: { kickoutDuration: 0.4 } })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<TrampSimulator, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| js_err("config error", e))?
        };
        cfg.tuning.validate().map_err(|e| js_err("config error", e))?;

        Ok(TrampSimulator {
            core: Simulator::new(cfg),
            catalog: Catalog::default(),
            selection: PositionSelection::default(),
            routine: Routine::new(),
        })
    }

    /// Load the skill catalog (array of skill records). Resets position
    /// selections and the current routine. Returns the number of skills.
    #[wasm_bindgen(js_name = load_catalog)]
    pub fn load_catalog(&mut self, catalog_json: JsValue) -> Result<u32, JsError> {
        if jsvalue_is_undefined_or_null(&catalog_json) {
            return Err(JsError::new("load_catalog: catalog_json is null/undefined"));
        }
        // Stringify so the core parser (expects &str) reports unknown positions by name
        let s = JSON::stringify(&catalog_json)
            .map_err(|e| JsError::new(&format!("load_catalog stringify error: {:?}", e)))?
            .as_string()
            .ok_or_else(|| JsError::new("load_catalog: stringify produced non-string"))?;
        let catalog = parse_catalog_json(&s).map_err(|e| js_err("load_catalog", e))?;
        self.selection = PositionSelection::from_catalog(&catalog);
        self.catalog = catalog;
        self.routine.clear();
        Ok(self.catalog.len() as u32)
    }

    /// Compile an arbitrary skill descriptor into a keyframe timeline JSON.
    #[wasm_bindgen(js_name = compile_skill)]
    pub fn compile_skill(&self, descriptor: JsValue) -> Result<JsValue, JsError> {
        let d: SkillDescriptor =
            swb::from_value(descriptor).map_err(|e| js_err("descriptor error", e))?;
        let timeline = compile(&d, &self.core.config().tuning).map_err(|e| js_err("compile", e))?;
        swb::to_value(&timeline).map_err(|e| js_err("timeline error", e))
    }

    /// Toggle the selected position for a skill. Returns the new selection or null.
    #[wasm_bindgen(js_name = select_position)]
    pub fn select_position(&mut self, name: String, position: String) -> Result<JsValue, JsError> {
        self.skill(&name)?;
        let p: Position = position.parse().map_err(|e| js_err("select_position", e))?;
        let selected = self.selection.toggle(&name, p);
        Ok(selected
            .map(|p| JsValue::from_str(p.as_str()))
            .unwrap_or(JsValue::NULL))
    }

    /// Play one catalog skill. An explicit position overrides the current selection.
    #[wasm_bindgen(js_name = play_skill)]
    pub fn play_skill(
        &mut self,
        name: String,
        position: Option<String>,
        now: f32,
    ) -> Result<(), JsError> {
        let position = match position {
            Some(p) => Some(p.parse().map_err(|e| js_err("play_skill", e))?),
            None => self.selection.selected(&name),
        };
        let skill = self.skill(&name)?.clone();
        self.core
            .play_skill(&skill, position, now)
            .map_err(|e| js_err("play_skill", e))
    }

    /// Append a catalog skill, in its selected position, to the routine.
    #[wasm_bindgen(js_name = add_to_routine)]
    pub fn add_to_routine(&mut self, name: String) -> Result<u32, JsError> {
        let position = self.selection.selected(&name);
        let skill = self.skill(&name)?.clone();
        self.routine
            .push(&skill, position)
            .map_err(|e| js_err("add_to_routine", e))?;
        Ok(self.routine.len() as u32)
    }

    #[wasm_bindgen(js_name = remove_from_routine)]
    pub fn remove_from_routine(&mut self, index: u32) -> Result<(), JsError> {
        self.routine
            .remove(index as usize)
            .map(|_| ())
            .map_err(|e| js_err("remove_from_routine", e))
    }

    #[wasm_bindgen(js_name = move_in_routine)]
    pub fn move_in_routine(&mut self, from: u32, to: u32) -> Result<(), JsError> {
        self.routine
            .move_entry(from as usize, to as usize)
            .map_err(|e| js_err("move_in_routine", e))
    }

    #[wasm_bindgen(js_name = clear_routine)]
    pub fn clear_routine(&mut self) {
        self.routine.clear();
    }

    #[wasm_bindgen(js_name = randomize_routine)]
    pub fn randomize_routine(&mut self) -> u32 {
        let max = self.core.config().max_routine_skills;
        self.routine
            .randomize(&self.catalog, max, &mut rand::thread_rng());
        self.routine.len() as u32
    }

    /// Current routine entries as JSON.
    #[wasm_bindgen]
    pub fn routine(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.routine).map_err(|e| js_err("routine error", e))
    }

    #[wasm_bindgen(js_name = play_routine)]
    pub fn play_routine(&mut self, now: f32) -> Result<(), JsError> {
        self.core
            .play_routine(&self.routine, now)
            .map_err(|e| js_err("play_routine", e))
    }

    /// Pose for the given clock value, or null when closed/finished.
    #[wasm_bindgen]
    pub fn frame(&mut self, now: f32) -> Result<JsValue, JsError> {
        match self.core.frame(now) {
            Some(frame) => swb::to_value(&frame).map_err(|e| js_err("frame error", e)),
            None => Ok(JsValue::NULL),
        }
    }

    /// Free-form jump/bounce sample for the given clock value.
    #[wasm_bindgen(js_name = practice_bounce)]
    pub fn practice_bounce(&self, now: f32) -> Result<JsValue, JsError> {
        swb::to_value(&self.core.practice_bounce(now)).map_err(|e| js_err("bounce error", e))
    }

    #[wasm_bindgen]
    pub fn close(&mut self) {
        self.core.close();
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
