//! Config domain: loads runner and course tuning from RON at startup.

mod data;
mod keys;
mod layers;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

use data::RunnerConfig;
use keys::parse_key_code;
use layers::parse_layer_mask;
use loader::load_config_file;
use validation::{ValidationError, validate_config};

use bevy::prelude::*;
use std::path::Path;

use crate::course::CourseTuning;
use crate::runner::RunnerTuning;

/// Config file read on startup, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/data/runner.ron";

/// Validate a config and turn it into the runtime tuning resources.
pub fn build_tuning(
    config: &RunnerConfig,
) -> Result<(RunnerTuning, CourseTuning), Vec<ValidationError>> {
    let errors = validate_config(config);
    let runner = &config.runner;
    let course = &config.course;

    let (Some(jump_key), Some(slide_key), Some(ground_layers)) = (
        parse_key_code(&runner.jump_key),
        parse_key_code(&runner.slide_key),
        parse_layer_mask(&runner.ground_layers),
    ) else {
        return Err(errors);
    };
    if !errors.is_empty() {
        return Err(errors);
    }

    let runner_tuning = RunnerTuning {
        horizontal_speed: runner.horizontal_speed,
        jump_impulse: runner.jump_impulse,
        max_air_charges: runner.max_air_charges,
        jump_key,
        slide_key,
        ground_probe_offset: Vec2::new(runner.ground_probe_offset.0, runner.ground_probe_offset.1),
        ground_probe_size: Vec2::new(runner.ground_probe_size.0, runner.ground_probe_size.1),
        ground_layers,
        jump_trigger: runner.jump_trigger.clone(),
        slide_flag: runner.slide_flag.clone(),
    };

    let course_tuning = CourseTuning {
        seed: course.seed,
        opening_runway: course.opening_runway,
        ground_top: course.ground_top,
        ground_thickness: course.ground_thickness,
        length_min: course.segment_length.min,
        length_max: course.segment_length.max,
        gap_min: course.gap.min,
        gap_max: course.gap.max,
        look_ahead: course.look_ahead,
        clean_up_behind: course.clean_up_behind,
    };

    Ok((runner_tuning, course_tuning))
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, apply_runner_config);
    }
}

fn apply_runner_config(
    mut runner_tuning: ResMut<RunnerTuning>,
    mut course_tuning: ResMut<CourseTuning>,
) {
    let config = match load_config_file(Path::new(CONFIG_PATH)) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}", e);
            warn!("Using default runner tuning");
            return;
        }
    };

    match build_tuning(&config) {
        Ok((runner, course)) => {
            info!(
                "Loaded runner config (schema {}): speed={}, jump_impulse={}, max_air_charges={}, jump_key={:?}, slide_key={:?}",
                config.schema_version,
                runner.horizontal_speed,
                runner.jump_impulse,
                runner.max_air_charges,
                runner.jump_key,
                runner.slide_key
            );
            *runner_tuning = runner;
            *course_tuning = course;
        }
        Err(errors) => {
            for error in &errors {
                warn!("Invalid runner config: {}", error);
            }
            warn!("Using default runner tuning");
        }
    }
}
