//! Pointer sampling
//!
//! Reduces raw pointer positions to the normalized steering signal the
//! simulation consumes: both axes in [-1, 1], +y up, zero at the surface
//! center. The sampler stores the latest raw event and is read once per
//! frame; before any event arrives it reports center.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Latest raw pointer state, normalized on demand.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointerSampler {
    size: Vec2,
    raw: Option<Vec2>,
}

impl PointerSampler {
    /// Sampler for a surface of the given pixel size, pointer at center.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            raw: None,
        }
    }

    /// Track a surface resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
    }

    /// Record a raw pointer position in surface pixels (origin top-left).
    pub fn moved(&mut self, x: f32, y: f32) {
        self.raw = Some(Vec2::new(x, y));
    }

    /// The signal for this frame: [-1, 1] per axis, (0, 0) until the pointer
    /// has produced an event.
    pub fn sample(&self) -> Vec2 {
        let Some(raw) = self.raw else {
            return Vec2::ZERO;
        };
        if self.size.x <= 0.0 || self.size.y <= 0.0 {
            return Vec2::ZERO;
        }
        let mx = (raw.x / self.size.x) * 2.0 - 1.0;
        // Screen y grows downward; the signal's +y is up
        let my = -((raw.y / self.size.y) * 2.0 - 1.0);
        Vec2::new(mx.clamp(-1.0, 1.0), my.clamp(-1.0, 1.0))
    }
}
