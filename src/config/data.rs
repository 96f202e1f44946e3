//! Serialized shape of `assets/data/runner.ron`.
//!
//! Every section falls back to its defaults field by field, so a config file
//! only needs to name what it changes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub schema_version: u32,
    pub runner: RunnerDef,
    pub course: CourseDef,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RunnerDef {
    pub horizontal_speed: f32,
    pub jump_impulse: f32,
    pub max_air_charges: u8,
    /// Key name as in `KeyCode`, e.g. "Space" or "ArrowDown".
    pub jump_key: String,
    pub slide_key: String,
    pub ground_probe_offset: (f32, f32),
    pub ground_probe_size: (f32, f32),
    /// Layer names, as in `GameLayer`, that count as ground.
    pub ground_layers: Vec<String>,
    pub jump_trigger: String,
    pub slide_flag: String,
}

impl Default for RunnerDef {
    fn default() -> Self {
        Self {
            horizontal_speed: 6.0,
            jump_impulse: 12.0,
            max_air_charges: 2,
            jump_key: "Space".to_string(),
            slide_key: "ArrowDown".to_string(),
            ground_probe_offset: (0.2, -1.45),
            ground_probe_size: (0.8, 0.2),
            ground_layers: vec!["Ground".to_string()],
            jump_trigger: "jump".to_string(),
            slide_flag: "slide".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CourseDef {
    /// Fixed seed for a reproducible course; random when absent.
    pub seed: Option<u64>,
    pub opening_runway: f32,
    pub ground_top: f32,
    pub ground_thickness: f32,
    pub segment_length: RangeDef,
    pub gap: RangeDef,
    pub look_ahead: f32,
    pub clean_up_behind: f32,
}

impl Default for CourseDef {
    fn default() -> Self {
        Self {
            seed: None,
            opening_runway: 24.0,
            ground_top: -1.5,
            ground_thickness: 1.0,
            segment_length: RangeDef { min: 6.0, max: 18.0 },
            gap: RangeDef { min: 1.5, max: 3.5 },
            look_ahead: 40.0,
            clean_up_behind: 30.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct RangeDef {
    pub min: f32,
    pub max: f32,
}
