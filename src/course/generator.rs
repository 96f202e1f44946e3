//! Seeded layout of ground segments along the run.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::course::CourseTuning;

/// How far the opening runway reaches behind the spawn point.
const RUNWAY_BACKSTOP: f32 = 5.0;

/// A stretch of ground along X, `start_x..start_x + length`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundSegment {
    pub start_x: f32,
    pub length: f32,
}

impl GroundSegment {
    pub fn end_x(&self) -> f32 {
        self.start_x + self.length
    }

    pub fn center_x(&self) -> f32 {
        self.start_x + self.length * 0.5
    }
}

/// Produces ground segments left to right. The same seed and tuning always
/// yield the same course.
#[derive(Debug, Clone)]
pub struct CourseGenerator {
    rng: ChaCha8Rng,
    seed: u64,
    cursor: f32,
    placed: u32,
    opening_runway: f32,
    length: (f32, f32),
    gap: (f32, f32),
}

impl CourseGenerator {
    pub fn new(tuning: &CourseTuning, seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            cursor: -RUNWAY_BACKSTOP,
            placed: 0,
            opening_runway: tuning.opening_runway,
            length: (tuning.length_min, tuning.length_max),
            gap: (tuning.gap_min, tuning.gap_max),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// X where the last placed segment ends.
    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    pub fn placed(&self) -> u32 {
        self.placed
    }

    pub fn next_segment(&mut self) -> GroundSegment {
        let segment = if self.placed == 0 {
            GroundSegment {
                start_x: self.cursor,
                length: RUNWAY_BACKSTOP + self.opening_runway,
            }
        } else {
            let gap = self.rng.random_range(self.gap.0..=self.gap.1);
            let length = self.rng.random_range(self.length.0..=self.length.1);
            GroundSegment {
                start_x: self.cursor + gap,
                length,
            }
        };

        self.cursor = segment.end_x();
        self.placed += 1;
        segment
    }
}
