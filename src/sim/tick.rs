//! Per-frame simulation step
//!
//! One tick per rendered frame; the frame clock (requestAnimationFrame in the
//! browser shell) is the only scheduler. A tick always runs to completion
//! before the frame's draw pass reads the result, and the caller swaps the
//! returned state in whole.

use glam::Vec2;

use super::collision;
use super::ship;
use super::state::GameState;
use crate::tuning::Tuning;

/// Input for a single tick. The shell accumulates trigger events between
/// frames and clears them after the tick consumes them.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Normalized pointer signal, both axes in [-1, 1]; zero when absent
    pub pointer: Vec2,
    /// Fire trigger events received since the previous tick; each one spawns
    /// exactly one projectile
    pub fire: u32,
}

/// Advance the game by one frame, returning the complete next state.
///
/// Ordering within the frame is fixed: the ship pose commits first, fire
/// events spawn projectiles against that same pose, and only then does the
/// field update - so every actor in a frame observes one pose value.
pub fn tick(state: &GameState, input: &TickInput, tuning: &Tuning) -> GameState {
    let mut next = state.clone();
    next.frame += 1;

    // Ship controller: the pose is a stateless function of this frame's signal
    next.ship = ship::steer(input.pointer, tuning);

    // Fire control, reading the pose committed above
    for _ in 0..input.fire {
        next.fire_projectile(tuning);
    }

    // Hit flags come from the step's starting positions, before anything moves
    let hits = collision::hit_map(&next.projectiles, &next.obstacles);

    // Scoring, guarded against an empty field
    let hit_count = hits.iter().filter(|h| **h).count() as u64;
    if hit_count > 0 && !next.obstacles.is_empty() {
        next.score += hit_count;
        log::debug!(
            "frame {}: {} hit(s), score {}",
            next.frame,
            hit_count,
            next.score
        );
    }

    advance_obstacles(&mut next, &hits, tuning);
    advance_projectiles(&mut next, tuning);

    next
}

/// Obstacles drift toward the ship. An enemy leaves the field on a hit or
/// once it crosses the z = 0 plane; mountains ignore hits and, unless the
/// scenery cull is disabled, leave on the positional filter alone.
fn advance_obstacles(state: &mut GameState, hits: &[bool], tuning: &Tuning) {
    let speed = tuning.enemy_speed;
    let cull_scenery = tuning.cull_scenery;
    let mut idx = 0;
    state.obstacles.retain_mut(|o| {
        let hit = hits.get(idx).copied().unwrap_or(false);
        idx += 1;
        o.position.z += speed;
        if o.kind.collides() {
            !hit && o.position.z < 0.0
        } else {
            !cull_scenery || o.position.z < 0.0
        }
    });
}

/// Projectiles drift by their spawn velocity and race down -z at the global
/// laser rate. Range or the ground plane removes them; scoring a hit does
/// not, so one projectile can score again on a later step.
fn advance_projectiles(state: &mut GameState, tuning: &Tuning) {
    let range = tuning.laser_range;
    let ground = tuning.ground_height;
    let vz = tuning.laser_z_velocity;
    state.projectiles.retain_mut(|p| {
        p.position.x += p.velocity.x;
        p.position.y += p.velocity.y;
        p.position.z -= vz;
        p.position.z > -range && p.position.y > ground
    });
}
