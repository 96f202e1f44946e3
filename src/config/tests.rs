//! Config domain: tests for parsing, validation, and tuning conversion.

use std::path::Path;

use avian2d::prelude::LayerMask;
use bevy::prelude::{KeyCode, Vec2};

use super::build_tuning;
use super::data::{RangeDef, RunnerConfig};
use super::keys::parse_key_code;
use super::layers::parse_layer_mask;
use super::loader::{ConfigLoadError, load_config_file, parse_config};
use super::validation::validate_config;
use crate::runner::GameLayer;

const FULL_CONFIG: &str = r#"
(
    schema_version: 1,
    runner: (
        horizontal_speed: 1.5,
        jump_impulse: 500.0,
        max_air_charges: 3,
        jump_key: "KeyW",
        slide_key: "KeyS",
        ground_probe_offset: (0.0, -1.2),
        ground_probe_size: (1.0, 0.3),
        ground_layers: ["Ground", "Default"],
        jump_trigger: "hop",
        slide_flag: "crouch",
    ),
    course: (
        seed: 1234,
        opening_runway: 12.0,
        ground_top: -2.0,
        ground_thickness: 0.5,
        segment_length: (min: 3.0, max: 9.0),
        gap: (min: 1.0, max: 2.0),
        look_ahead: 25.0,
        clean_up_behind: 10.0,
    ),
)
"#;

#[test]
fn test_full_config_converts_to_tuning() {
    let config = parse_config(FULL_CONFIG, "full.ron").unwrap();
    let (runner, course) = build_tuning(&config).unwrap();

    assert_eq!(config.schema_version, 1);
    assert_eq!(runner.horizontal_speed, 1.5);
    assert_eq!(runner.jump_impulse, 500.0);
    assert_eq!(runner.max_air_charges, 3);
    assert_eq!(runner.jump_key, KeyCode::KeyW);
    assert_eq!(runner.slide_key, KeyCode::KeyS);
    assert_eq!(runner.ground_probe_offset, Vec2::new(0.0, -1.2));
    assert_eq!(runner.ground_probe_size, Vec2::new(1.0, 0.3));
    assert_eq!(
        runner.ground_layers,
        LayerMask::from(GameLayer::Ground) | LayerMask::from(GameLayer::Default)
    );
    assert_eq!(runner.jump_trigger, "hop");
    assert_eq!(runner.slide_flag, "crouch");

    // IMPLICIT_SOME lets the seed be written without `Some(..)`.
    assert_eq!(course.seed, Some(1234));
    assert_eq!(course.length_min, 3.0);
    assert_eq!(course.length_max, 9.0);
    assert_eq!(course.gap_min, 1.0);
    assert_eq!(course.gap_max, 2.0);
}

#[test]
fn test_partial_config_keeps_defaults() {
    let config = parse_config("(runner: (max_air_charges: 1))", "partial.ron").unwrap();
    let (runner, course) = build_tuning(&config).unwrap();

    assert_eq!(runner.max_air_charges, 1);
    assert_eq!(runner.jump_key, KeyCode::Space);
    assert_eq!(runner.slide_key, KeyCode::ArrowDown);
    assert_eq!(runner.jump_trigger, "jump");
    assert_eq!(runner.ground_layers, LayerMask::from(GameLayer::Ground));
    assert_eq!(course.seed, None);
}

#[test]
fn test_default_config_is_valid() {
    let config = RunnerConfig::default();
    assert!(validate_config(&config).is_empty());
    assert!(build_tuning(&config).is_ok());
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_config("(runner: (max_air_charges: -1))", "broken.ron").unwrap_err();

    assert_eq!(err.file(), "broken.ron");
    assert!(matches!(err, ConfigLoadError::Parse { .. }));
    assert!(err.to_string().starts_with("cannot parse broken.ron: "));
}

#[test]
fn test_missing_file_is_a_read_error() {
    let err = load_config_file(Path::new("assets/data/does-not-exist.ron")).unwrap_err();

    assert_eq!(err.file(), "assets/data/does-not-exist.ron");
    assert!(matches!(err, ConfigLoadError::Read { .. }));
    assert!(err.to_string().starts_with("cannot read assets/data/does-not-exist.ron: "));
}

#[test]
fn test_unknown_key_is_rejected() {
    let mut config = RunnerConfig::default();
    config.runner.jump_key = "Spacebar".to_string();

    let errors = build_tuning(&config).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "jump_key");
    assert_eq!(errors[0].to_string(), "runner.jump_key: unknown key 'Spacebar'");
}

#[test]
fn test_validation_collects_every_problem() {
    let mut config = RunnerConfig::default();
    config.runner.horizontal_speed = -1.0;
    config.runner.ground_probe_size = (0.0, 0.2);
    config.runner.slide_flag = String::new();
    config.course.gap = RangeDef { min: 3.0, max: 1.0 };
    config.course.segment_length = RangeDef { min: 0.0, max: 4.0 };

    let errors = validate_config(&config);
    let fields: Vec<_> = errors.iter().map(|e| (e.section, e.field)).collect();

    assert_eq!(
        fields,
        vec![
            ("runner", "horizontal_speed"),
            ("runner", "ground_probe_size"),
            ("runner", "slide_flag"),
            ("course", "segment_length"),
            ("course", "gap"),
        ]
    );
    assert!(build_tuning(&config).is_err());
}

#[test]
fn test_validation_rejects_degenerate_course() {
    // Segments this short with no gap would never move the course forward.
    let mut config = RunnerConfig::default();
    config.course.segment_length = RangeDef { min: 1e-9, max: 1e-9 };
    config.course.gap = RangeDef { min: 0.0, max: 0.0 };
    let errors = validate_config(&config);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "segment_length");
    assert!(errors[0].message.contains("gap.min"));

    // Exactly the minimum stride is still accepted.
    let mut config = RunnerConfig::default();
    config.course.segment_length = RangeDef { min: 0.25, max: 4.0 };
    config.course.gap = RangeDef { min: 0.25, max: 1.0 };
    assert!(validate_config(&config).is_empty());

    let mut config = RunnerConfig::default();
    config.course.look_ahead = f32::INFINITY;
    config.course.opening_runway = f32::INFINITY;
    config.course.ground_top = f32::NAN;
    config.course.ground_thickness = f32::INFINITY;
    config.course.clean_up_behind = f32::INFINITY;
    config.course.gap = RangeDef { min: 1.0, max: f32::INFINITY };
    config.runner.ground_probe_offset = (f32::NAN, -1.0);
    let fields: Vec<_> = validate_config(&config)
        .iter()
        .map(|e| (e.section, e.field))
        .collect();

    assert_eq!(
        fields,
        vec![
            ("runner", "ground_probe_offset"),
            ("course", "opening_runway"),
            ("course", "ground_top"),
            ("course", "ground_thickness"),
            ("course", "gap"),
            ("course", "look_ahead"),
            ("course", "clean_up_behind"),
        ]
    );
    assert!(build_tuning(&config).is_err());
}

#[test]
fn test_ground_layers_must_be_known() {
    let mut config = RunnerConfig::default();
    config.runner.ground_layers = vec!["Ground".to_string(), "Lava".to_string()];
    let errors = build_tuning(&config).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "ground_layers");

    config.runner.ground_layers.clear();
    let errors = build_tuning(&config).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "ground_layers");
}

#[test]
fn test_layer_names() {
    assert_eq!(
        parse_layer_mask(&["Ground".to_string()]),
        Some(LayerMask::from(GameLayer::Ground))
    );
    assert_eq!(
        parse_layer_mask(&["Runner".to_string(), "Ground".to_string()]),
        Some(LayerMask::from(GameLayer::Runner) | LayerMask::from(GameLayer::Ground))
    );
    assert_eq!(parse_layer_mask(&["ground".to_string()]), None);
    assert_eq!(parse_layer_mask(&[]), None);
}

#[test]
fn test_key_names() {
    assert_eq!(parse_key_code("Space"), Some(KeyCode::Space));
    assert_eq!(parse_key_code("ArrowDown"), Some(KeyCode::ArrowDown));
    assert_eq!(parse_key_code("KeyZ"), Some(KeyCode::KeyZ));
    assert_eq!(parse_key_code("Digit7"), Some(KeyCode::Digit7));
    assert_eq!(parse_key_code("space"), None);
    assert_eq!(parse_key_code(""), None);
}

#[test]
fn test_shipped_config_is_valid() {
    let source = include_str!("../../assets/data/runner.ron");
    let config = parse_config(source, "runner.ron").unwrap();

    assert!(validate_config(&config).is_empty());
}
