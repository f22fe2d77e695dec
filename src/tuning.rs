//! Game feel constants
//!
//! Every calibration constant the simulation reads, by name. Variants of the
//! game retune these to change difficulty and handling; none of them is
//! derived from another. Persisted separately from game state in
//! LocalStorage on the web build.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Tuning knobs for one game variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    // === Ship handling ===
    /// Pointer signal to ship position, per axis
    pub ship_position_gain: Vec2,
    /// Pointer signal to ship rotation. The x and z components both follow
    /// horizontal input (negated), which banks the ship into a turn; the y
    /// component follows vertical input.
    pub ship_rotation_gain: Vec3,

    // === Cannon ===
    /// Ship rotation to projectile drift: velocity = (rot.x, rot.y) * gain
    pub fire_velocity_gain: Vec2,

    // === Projectiles ===
    /// A projectile expires once its z reaches -laser_range
    pub laser_range: f32,
    /// Forward travel per frame, toward negative z
    pub laser_z_velocity: f32,

    // === Obstacle field ===
    /// Obstacle advance toward the ship per frame, toward positive z
    pub enemy_speed: f32,
    /// A projectile dropping to this y or below expires
    pub ground_height: f32,
    /// Prune mountains once they pass the ship plane, the way enemies are.
    /// When false the scenery is retained unconditionally.
    pub cull_scenery: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ship_position_gain: Vec2::new(6.0, 2.0),
            ship_rotation_gain: Vec3::new(0.5, 0.2, 0.5),
            fire_velocity_gain: Vec2::new(6.0, 5.0),
            laser_range: 100.0,
            laser_z_velocity: 1.0,
            enemy_speed: 1.0,
            ground_height: -50.0,
            cull_scenery: true,
        }
    }
}

impl Tuning {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "rail_wing_tuning";

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(tuning) = serde_json::from_str(&json) {
                    log::info!("Loaded tuning from LocalStorage");
                    return tuning;
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Save tuning to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Tuning saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
