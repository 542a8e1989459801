//! Particle bursts and the head trail.

use std::f32::consts::TAU;
use std::ops::Range;

use bevy::prelude::*;
use rand::prelude::*;

use crate::game::{PARTICLE_GRAVITY, Position, TRAIL_LIFE};

/// Parameters for one batch of particles.
#[derive(Clone, Debug)]
pub struct BurstSpec {
    pub count: usize,
    pub speed: Range<f32>,
    pub radius: Range<f32>,
    pub life: u32,
}

/// Burst shown when food is eaten.
pub const FOOD_BURST: BurstSpec = BurstSpec {
    count: 15,
    speed: 2.0..8.0,
    radius: 2.0..5.0,
    life: 60,
};

/// Burst shown when the snake dies.
pub const DEATH_BURST: BurstSpec = BurstSpec {
    count: 30,
    speed: 3.0..12.0,
    radius: 3.0..8.0,
    life: 120,
};

/// A single particle in board coordinates (`y` grows downwards).
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub life: u32,
    pub max_life: u32,
    pub color: Color,
    pub radius: f32,
}

impl Particle {
    /// Remaining life as a fraction of the initial life.
    pub fn fade(&self) -> f32 {
        self.life as f32 / self.max_life as f32
    }

    /// Advance particle physics. Returns false when expired.
    fn tick(&mut self) -> bool {
        self.position += self.velocity;
        self.velocity.y += PARTICLE_GRAVITY;
        self.life = self.life.saturating_sub(1);
        self.life > 0
    }
}

#[derive(Clone, Debug, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    /// Spawns `spec.count` particles at `origin`, flying off at uniformly
    /// random angles.
    pub fn spawn_burst<R: Rng>(
        &mut self,
        rng: &mut R,
        origin: Vec2,
        color: Color,
        spec: &BurstSpec,
    ) {
        self.particles.reserve(spec.count);
        for _ in 0..spec.count {
            let angle = rng.random_range(0.0..TAU);
            let speed = rng.random_range(spec.speed.clone());
            self.particles.push(Particle {
                position: origin,
                velocity: Vec2::from_angle(angle) * speed,
                life: spec.life,
                max_life: spec.life,
                color,
                radius: rng.random_range(spec.radius.clone()),
            });
        }
    }

    pub fn tick(&mut self) {
        self.particles.retain_mut(Particle::tick);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// A fading copy of a cell the head has left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailSegment {
    pub position: Position,
    pub life: u32,
}

impl TrailSegment {
    pub fn fade(&self) -> f32 {
        self.life as f32 / TRAIL_LIFE as f32
    }
}

#[derive(Clone, Debug, Default)]
pub struct Trail {
    segments: Vec<TrailSegment>,
}

impl Trail {
    pub fn push(&mut self, position: Position) {
        self.segments.push(TrailSegment {
            position,
            life: TRAIL_LIFE,
        });
    }

    pub fn tick(&mut self) {
        self.segments.retain_mut(|segment| {
            segment.life = segment.life.saturating_sub(1);
            segment.life > 0
        });
    }

    pub fn segments(&self) -> &[TrailSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
