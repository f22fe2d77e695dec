//! Initial obstacle spawn tables
//!
//! Obstacle placement is drawn once, at session start, from a random source
//! the caller injects. Each slot samples `floor(uniform(0,1) * range) +
//! offset` per axis, so fields vary between sessions while a seeded source
//! reproduces one exactly.

use glam::Vec3;
use rand::Rng;

use super::state::{Obstacle, ObstacleKind};

/// One `floor(uniform(0,1) * range) + offset` draw.
#[derive(Debug, Clone, Copy)]
pub struct UniformDraw {
    pub range: f32,
    pub offset: f32,
}

impl UniformDraw {
    pub const fn new(range: f32, offset: f32) -> Self {
        Self { range, offset }
    }

    /// Sample one integer-valued point from the band.
    pub fn sample(&self, rng: &mut impl Rng) -> f32 {
        (rng.random::<f32>() * self.range).floor() + self.offset
    }
}

/// Where one obstacle may appear: an x band, a fixed y, and a z band.
#[derive(Debug, Clone, Copy)]
pub struct SpawnBand {
    pub kind: ObstacleKind,
    pub x: UniformDraw,
    pub y: f32,
    pub z: UniformDraw,
}

impl SpawnBand {
    pub const fn new(kind: ObstacleKind, x: UniformDraw, y: f32, z: UniformDraw) -> Self {
        Self { kind, x, y, z }
    }

    pub fn spawn(&self, rng: &mut impl Rng) -> Obstacle {
        Obstacle {
            kind: self.kind,
            position: Vec3::new(self.x.sample(rng), self.y, self.z.sample(rng)),
        }
    }
}

/// Enemy slots. Bands that stray farther off the center line start deeper
/// out, so the ship has time to line up on them.
pub const ENEMY_BANDS: [SpawnBand; 6] = [
    SpawnBand::new(
        ObstacleKind::Enemy,
        UniformDraw::new(50.0, 5.0),
        -20.0,
        UniformDraw::new(5.0, -300.0),
    ),
    SpawnBand::new(
        ObstacleKind::Enemy,
        UniformDraw::new(200.0, 5.0),
        -20.0,
        UniformDraw::new(5.0, -400.0),
    ),
    SpawnBand::new(
        ObstacleKind::Enemy,
        UniformDraw::new(200.0, 5.0),
        -20.0,
        UniformDraw::new(5.0, -600.0),
    ),
    SpawnBand::new(
        ObstacleKind::Enemy,
        UniformDraw::new(5.0, -50.0),
        -20.0,
        UniformDraw::new(5.0, -400.0),
    ),
    SpawnBand::new(
        ObstacleKind::Enemy,
        UniformDraw::new(5.0, -200.0),
        -20.0,
        UniformDraw::new(5.0, -600.0),
    ),
    SpawnBand::new(
        ObstacleKind::Enemy,
        UniformDraw::new(5.0, -200.0),
        -20.0,
        UniformDraw::new(5.0, -600.0),
    ),
];

/// Mountain dressing along both sides of the flight path. Sits just below the
/// ground plane so projectiles expire before they reach it.
pub const MOUNTAIN_BANDS: [SpawnBand; 8] = [
    SpawnBand::new(
        ObstacleKind::Mountain,
        UniformDraw::new(150.0, 80.0),
        -52.0,
        UniformDraw::new(100.0, -250.0),
    ),
    SpawnBand::new(
        ObstacleKind::Mountain,
        UniformDraw::new(150.0, -230.0),
        -52.0,
        UniformDraw::new(100.0, -250.0),
    ),
    SpawnBand::new(
        ObstacleKind::Mountain,
        UniformDraw::new(200.0, 120.0),
        -52.0,
        UniformDraw::new(150.0, -450.0),
    ),
    SpawnBand::new(
        ObstacleKind::Mountain,
        UniformDraw::new(200.0, -320.0),
        -52.0,
        UniformDraw::new(150.0, -450.0),
    ),
    SpawnBand::new(
        ObstacleKind::Mountain,
        UniformDraw::new(250.0, 150.0),
        -52.0,
        UniformDraw::new(150.0, -650.0),
    ),
    SpawnBand::new(
        ObstacleKind::Mountain,
        UniformDraw::new(250.0, -400.0),
        -52.0,
        UniformDraw::new(150.0, -650.0),
    ),
    SpawnBand::new(
        ObstacleKind::Mountain,
        UniformDraw::new(300.0, 100.0),
        -52.0,
        UniformDraw::new(100.0, -800.0),
    ),
    SpawnBand::new(
        ObstacleKind::Mountain,
        UniformDraw::new(300.0, -400.0),
        -52.0,
        UniformDraw::new(100.0, -800.0),
    ),
];

/// Draw the session's initial obstacle field: every enemy band, then every
/// mountain band, one obstacle each.
pub fn spawn_field(rng: &mut impl Rng) -> Vec<Obstacle> {
    let mut field = Vec::with_capacity(ENEMY_BANDS.len() + MOUNTAIN_BANDS.len());
    for band in &ENEMY_BANDS {
        field.push(band.spawn(rng));
    }
    for band in &MOUNTAIN_BANDS {
        field.push(band.spawn(rng));
    }
    field
}
