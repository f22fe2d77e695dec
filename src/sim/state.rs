//! Game state and core simulation types
//!
//! All mutable gameplay state lives here: the ship pose, the projectile and
//! obstacle stores, and the score. Stores are replaced wholesale once per
//! frame by the tick; nothing else writes them.

use glam::{Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn;
use crate::tuning::Tuning;

/// Combined position + orientation of the player ship.
///
/// A pure function of the current pointer signal - recomputed every frame,
/// never integrated over time, so there is no velocity to persist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipPose {
    /// Lateral/vertical offset from the rail center line
    pub position: Vec2,
    /// Euler rotation (x, y, z)
    pub rotation: Vec3,
}

/// A player-fired projectile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    /// Unique for the projectile's lifetime; the collision-matching key
    pub id: u32,
    pub position: Vec3,
    /// Lateral drift per frame, fixed at the moment of firing. Forward
    /// motion along z comes from the global laser rate, not from here.
    pub velocity: Vec2,
}

/// What an obstacle is, for simulation purposes. The renderer picks meshes;
/// the simulation only cares whether the kind collides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Participates in collision and scoring
    Enemy,
    /// Terrain dressing - advances with the field but never collides
    Mountain,
}

impl ObstacleKind {
    /// Whether projectiles can hit this kind
    #[inline]
    pub fn collides(&self) -> bool {
        matches!(self, ObstacleKind::Enemy)
    }
}

/// A world entity advancing toward the ship along z
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub position: Vec3,
}

/// Complete game state: one store per entity kind, plus the score.
///
/// `tick` consumes a state and returns the next one; the caller swaps the
/// whole struct, so a reader between ticks never observes a half-updated
/// frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed, kept for reproducibility
    pub seed: u64,
    /// Frames simulated so far
    pub frame: u64,
    /// Ship pose, committed each frame before anything reads it
    pub ship: ShipPose,
    /// Live projectiles, keyed by id
    pub projectiles: Vec<Projectile>,
    /// Live obstacles, enemies and scenery together
    pub obstacles: Vec<Obstacle>,
    /// Monotonically non-decreasing
    pub score: u64,
    /// Next entity id
    next_id: u32,
}

impl GameState {
    /// Create a session state, drawing the spawn field from a Pcg32 seeded
    /// with `seed`.
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        Self::with_rng(seed, &mut rng)
    }

    /// Create a session state from an explicit random source. Randomness is
    /// consumed here, at initialization, and nowhere else in the simulation.
    pub fn with_rng(seed: u64, rng: &mut impl Rng) -> Self {
        let obstacles = spawn::spawn_field(rng);
        log::info!(
            "session start: seed={} obstacles={} ({} enemies)",
            seed,
            obstacles.len(),
            obstacles.iter().filter(|o| o.kind.collides()).count()
        );
        Self {
            seed,
            frame: 0,
            ship: ShipPose::default(),
            projectiles: Vec::new(),
            obstacles,
            score: 0,
            next_id: 1,
        }
    }

    /// A state with no entities, for hosts that assemble their own field.
    pub fn empty(seed: u64) -> Self {
        Self {
            seed,
            frame: 0,
            ship: ShipPose::default(),
            projectiles: Vec::new(),
            obstacles: Vec::new(),
            score: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity id
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Fire control: spawn one projectile at the ship-local origin.
    ///
    /// Drift velocity is derived from the pose committed this frame and never
    /// changes afterward. Every trigger event lands here exactly once; there
    /// is no rate limit (a known enhancement point, left as-is).
    pub fn fire_projectile(&mut self, tuning: &Tuning) {
        let id = self.next_entity_id();
        let velocity = Vec2::new(
            self.ship.rotation.x * tuning.fire_velocity_gain.x,
            self.ship.rotation.y * tuning.fire_velocity_gain.y,
        );
        self.projectiles.push(Projectile {
            id,
            position: Vec3::ZERO,
            velocity,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_ids_are_unique_and_increasing() {
        let mut state = GameState::empty(0);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        let c = state.next_entity_id();
        assert!(a < b && b < c);
    }

    #[test]
    fn fire_spawns_at_origin_with_pose_derived_velocity() {
        let tuning = Tuning::default();
        let mut state = GameState::empty(0);
        state.ship.rotation = Vec3::new(-0.25, 0.08, -0.25);

        state.fire_projectile(&tuning);

        let p = &state.projectiles[0];
        assert_eq!(p.position, Vec3::ZERO);
        assert_eq!(
            p.velocity,
            Vec2::new(
                -0.25 * tuning.fire_velocity_gain.x,
                0.08 * tuning.fire_velocity_gain.y
            )
        );
    }

    #[test]
    fn repeated_fire_yields_distinct_ids() {
        let tuning = Tuning::default();
        let mut state = GameState::empty(0);
        state.fire_projectile(&tuning);
        state.fire_projectile(&tuning);
        assert_ne!(state.projectiles[0].id, state.projectiles[1].id);
    }

    #[test]
    fn same_seed_reproduces_the_field() {
        let a = GameState::new(777);
        let b = GameState::new(777);
        assert_eq!(a.obstacles, b.obstacles);
    }

    #[test]
    fn new_session_starts_clean() {
        let state = GameState::new(1);
        assert_eq!(state.score, 0);
        assert_eq!(state.frame, 0);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.ship, ShipPose::default());
        assert!(!state.obstacles.is_empty());
    }
}
