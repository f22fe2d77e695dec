//! Projectile-obstacle proximity testing
//!
//! Hits use a per-axis threshold, not a true volume intersection. Each axis
//! delta is compared one-sided - `p - e < 1`, strict, no absolute value - so
//! once a projectile has reached or passed an obstacle on an axis, that axis
//! keeps matching. Game variants are balanced around this exact comparison;
//! do not upgrade it to a symmetric distance test.

use super::state::{Obstacle, Projectile};

/// Per-axis hit threshold, world units
pub const HIT_PROXIMITY: f32 = 1.0;

/// One-sided proximity test between one projectile and one obstacle.
#[inline]
pub fn projectile_hits(p: &Projectile, o: &Obstacle) -> bool {
    p.position.z - o.position.z < HIT_PROXIMITY
        && p.position.x - o.position.x < HIT_PROXIMITY
        && p.position.y - o.position.y < HIT_PROXIMITY
}

/// Per-obstacle hit flags for this step, index-aligned with `obstacles`.
/// Scenery kinds never register hits.
pub fn hit_map(projectiles: &[Projectile], obstacles: &[Obstacle]) -> Vec<bool> {
    obstacles
        .iter()
        .map(|o| o.kind.collides() && projectiles.iter().any(|p| projectile_hits(p, o)))
        .collect()
}
