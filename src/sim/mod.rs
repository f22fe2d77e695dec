//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per rendered frame, no other clock
//! - Seeded RNG, consumed only at session initialization
//! - State in, state out: each tick returns the complete next frame
//! - No rendering or platform dependencies

pub mod collision;
pub mod ship;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{HIT_PROXIMITY, hit_map, projectile_hits};
pub use ship::steer;
pub use spawn::{ENEMY_BANDS, MOUNTAIN_BANDS, SpawnBand, UniformDraw, spawn_field};
pub use state::{GameState, Obstacle, ObstacleKind, Projectile, ShipPose};
pub use tick::{TickInput, tick};
