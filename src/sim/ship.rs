//! Ship controller
//!
//! Maps the sampled pointer signal straight to a pose. No internal state and
//! no integration: equal signals produce equal poses on any frame, and an
//! absent signal (zero) produces the zero pose.

use glam::{Vec2, Vec3};

use super::state::ShipPose;
use crate::tuning::Tuning;

/// Compute the frame's ship pose from the normalized pointer signal.
///
/// Position scales each axis by its gain. Rotation is negated so the nose
/// leads the pointer; the x and z components both track horizontal input,
/// which rolls the ship into a bank as it turns.
pub fn steer(pointer: Vec2, tuning: &Tuning) -> ShipPose {
    let p = tuning.ship_position_gain;
    let r = tuning.ship_rotation_gain;
    ShipPose {
        position: Vec2::new(pointer.x * p.x, pointer.y * p.y),
        rotation: Vec3::new(-pointer.x * r.x, -pointer.y * r.y, -pointer.x * r.z),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_signal_is_the_zero_pose() {
        let pose = steer(Vec2::ZERO, &Tuning::default());
        assert_eq!(pose, ShipPose::default());
    }

    #[test]
    fn pose_follows_the_gain_formulas() {
        let tuning = Tuning::default();
        let pose = steer(Vec2::new(0.5, -0.4), &tuning);

        assert_eq!(
            pose.position,
            Vec2::new(0.5 * tuning.ship_position_gain.x, -0.4 * tuning.ship_position_gain.y)
        );
        assert_eq!(
            pose.rotation,
            Vec3::new(
                -0.5 * tuning.ship_rotation_gain.x,
                0.4 * tuning.ship_rotation_gain.y,
                -0.5 * tuning.ship_rotation_gain.z
            )
        );
    }

    #[test]
    fn banking_couples_roll_to_horizontal_input() {
        let tuning = Tuning::default();
        let left = steer(Vec2::new(-1.0, 0.0), &tuning);
        let right = steer(Vec2::new(1.0, 0.0), &tuning);

        // Full deflection rolls opposite ways, vertical rotation untouched
        assert!(left.rotation.z > 0.0);
        assert!(right.rotation.z < 0.0);
        assert_eq!(left.rotation.y, 0.0);
    }

    #[test]
    fn steering_is_stateless() {
        let tuning = Tuning::default();
        let a = steer(Vec2::new(0.3, 0.3), &tuning);
        let b = steer(Vec2::new(0.3, 0.3), &tuning);
        assert_eq!(a, b);
    }
}
