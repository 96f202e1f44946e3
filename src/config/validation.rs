//! Validation for runner config values.

use super::data::{CourseDef, RangeDef, RunnerConfig, RunnerDef};
use super::keys::parse_key_code;
use super::layers::parse_layer_mask;

/// A validation error naming the offending field.
#[derive(Debug)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.field, self.message)
    }
}

/// Helper macro for recording a failed check
macro_rules! check {
    ($errors:expr, $cond:expr, $section:expr, $field:expr, $($msg:tt)+) => {
        if !$cond {
            $errors.push(ValidationError {
                section: $section,
                field: $field,
                message: format!($($msg)+),
            });
        }
    };
}

/// Validate all config values.
/// Returns a list of validation errors, empty if the config is usable.
pub fn validate_config(config: &RunnerConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    validate_runner(&config.runner, &mut errors);
    validate_course(&config.course, &mut errors);
    errors
}

fn validate_runner(runner: &RunnerDef, errors: &mut Vec<ValidationError>) {
    const SECTION: &str = "runner";

    check!(
        errors,
        runner.horizontal_speed.is_finite() && runner.horizontal_speed >= 0.0,
        SECTION,
        "horizontal_speed",
        "must be a non-negative number, got {}",
        runner.horizontal_speed
    );
    check!(
        errors,
        runner.jump_impulse.is_finite() && runner.jump_impulse >= 0.0,
        SECTION,
        "jump_impulse",
        "must be a non-negative number, got {}",
        runner.jump_impulse
    );
    check!(
        errors,
        runner.ground_probe_offset.0.is_finite() && runner.ground_probe_offset.1.is_finite(),
        SECTION,
        "ground_probe_offset",
        "both components must be finite, got {:?}",
        runner.ground_probe_offset
    );
    check!(
        errors,
        runner.ground_probe_size.0.is_finite()
            && runner.ground_probe_size.1.is_finite()
            && runner.ground_probe_size.0 > 0.0
            && runner.ground_probe_size.1 > 0.0,
        SECTION,
        "ground_probe_size",
        "both extents must be positive, got {:?}",
        runner.ground_probe_size
    );
    check!(
        errors,
        parse_key_code(&runner.jump_key).is_some(),
        SECTION,
        "jump_key",
        "unknown key '{}'",
        runner.jump_key
    );
    check!(
        errors,
        parse_key_code(&runner.slide_key).is_some(),
        SECTION,
        "slide_key",
        "unknown key '{}'",
        runner.slide_key
    );
    check!(
        errors,
        parse_layer_mask(&runner.ground_layers).is_some(),
        SECTION,
        "ground_layers",
        "needs at least one known layer, got {:?}",
        runner.ground_layers
    );
    check!(
        errors,
        !runner.jump_trigger.is_empty(),
        SECTION,
        "jump_trigger",
        "parameter name must not be empty"
    );
    check!(
        errors,
        !runner.slide_flag.is_empty(),
        SECTION,
        "slide_flag",
        "parameter name must not be empty"
    );
}

/// Shortest distance one segment plus its gap may advance the course.
/// Anything smaller lets the streamer spin without making progress.
pub const MIN_COURSE_STRIDE: f32 = 0.5;

fn validate_course(course: &CourseDef, errors: &mut Vec<ValidationError>) {
    const SECTION: &str = "course";

    check!(
        errors,
        course.opening_runway.is_finite() && course.opening_runway > 0.0,
        SECTION,
        "opening_runway",
        "must be a positive number, got {}",
        course.opening_runway
    );
    check!(
        errors,
        course.ground_top.is_finite(),
        SECTION,
        "ground_top",
        "must be a finite number, got {}",
        course.ground_top
    );
    check!(
        errors,
        course.ground_thickness.is_finite() && course.ground_thickness > 0.0,
        SECTION,
        "ground_thickness",
        "must be a positive number, got {}",
        course.ground_thickness
    );
    check!(
        errors,
        course.segment_length.min > 0.0 && is_ordered(course.segment_length),
        SECTION,
        "segment_length",
        "needs 0 < min <= max, got {:?}",
        course.segment_length
    );
    check!(
        errors,
        course.gap.min >= 0.0 && is_ordered(course.gap),
        SECTION,
        "gap",
        "needs 0 <= min <= max, got {:?}",
        course.gap
    );
    check!(
        errors,
        course.segment_length.min + course.gap.min >= MIN_COURSE_STRIDE,
        SECTION,
        "segment_length",
        "segment_length.min + gap.min must be at least {}, got {}",
        MIN_COURSE_STRIDE,
        course.segment_length.min + course.gap.min
    );
    check!(
        errors,
        course.look_ahead.is_finite() && course.look_ahead > 0.0,
        SECTION,
        "look_ahead",
        "must be a positive number, got {}",
        course.look_ahead
    );
    check!(
        errors,
        course.clean_up_behind.is_finite() && course.clean_up_behind >= 0.0,
        SECTION,
        "clean_up_behind",
        "must be a non-negative number, got {}",
        course.clean_up_behind
    );
}

fn is_ordered(range: RangeDef) -> bool {
    range.min.is_finite() && range.max.is_finite() && range.min <= range.max
}
