//! Course domain: streaming ground in ahead of the runner and clearing it behind.

use avian2d::prelude::*;
use bevy::prelude::*;
use rand::Rng;

use crate::course::{ActiveCourse, CourseGenerator, CourseTuning, GroundSegment};
use crate::runner::{GameLayer, Runner};

/// Ground entity laid out by the course generator.
#[derive(Component, Debug)]
pub struct CourseSegment(pub GroundSegment);

pub(crate) fn stream_course(
    mut commands: Commands,
    tuning: Res<CourseTuning>,
    mut course: ResMut<ActiveCourse>,
    runners: Query<&Transform, With<Runner>>,
) {
    let Some(lead_x) = runners.iter().map(|t| t.translation.x).reduce(f32::max) else {
        return;
    };

    let generator = course.generator.get_or_insert_with(|| {
        let seed = tuning.seed.unwrap_or_else(|| rand::rng().random());
        CourseGenerator::new(&tuning, seed)
    });
    if generator.placed() == 0 {
        info!("Laying out course with seed: {}", generator.seed());
    }

    while generator.cursor() < lead_x + tuning.look_ahead {
        let segment = generator.next_segment();
        spawn_ground_segment(&mut commands, &tuning, segment, generator.placed());
    }
}

pub(crate) fn clean_up_course(
    mut commands: Commands,
    tuning: Res<CourseTuning>,
    runners: Query<&Transform, With<Runner>>,
    segments: Query<(Entity, &CourseSegment)>,
) {
    let Some(trail_x) = runners.iter().map(|t| t.translation.x).reduce(f32::min) else {
        return;
    };

    for (entity, segment) in &segments {
        if segment.0.end_x() < trail_x - tuning.clean_up_behind {
            commands.entity(entity).despawn();
        }
    }
}

fn spawn_ground_segment(
    commands: &mut Commands,
    tuning: &CourseTuning,
    segment: GroundSegment,
    index: u32,
) {
    let size = Vec2::new(segment.length, tuning.ground_thickness);
    let center_y = tuning.ground_top - tuning.ground_thickness * 0.5;

    commands.spawn((
        CourseSegment(segment),
        Sprite {
            color: Color::srgb(0.4, 0.5, 0.4),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(segment.center_x(), center_y, -1.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Runner]),
    ));

    debug!(
        "Ground segment #{}: x={:.2}..{:.2}",
        index,
        segment.start_x,
        segment.end_x()
    );
}
