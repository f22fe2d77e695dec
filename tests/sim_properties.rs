//! Property tests for the per-frame simulation step.
//!
//! Each property rebuilds the expected next state with the same arithmetic
//! the step performs, so comparisons are exact.

use glam::{Vec2, Vec3};
use proptest::prelude::*;

use rail_wing::sim::{self, GameState, Obstacle, ObstacleKind, Projectile, TickInput, tick};
use rail_wing::tuning::Tuning;

fn arb_projectile() -> impl Strategy<Value = Projectile> {
    (
        -200.0f32..200.0,
        -45.0f32..40.0,
        -95.0f32..1.0,
        -3.0f32..3.0,
        -3.0f32..3.0,
    )
        .prop_map(|(x, y, z, vx, vy)| Projectile {
            id: 0,
            position: Vec3::new(x, y, z),
            velocity: Vec2::new(vx, vy),
        })
}

fn arb_obstacle() -> impl Strategy<Value = Obstacle> {
    (
        any::<bool>(),
        -250.0f32..250.0,
        -55.0f32..0.0,
        -650.0f32..0.0,
    )
        .prop_map(|(enemy, x, y, z)| Obstacle {
            kind: if enemy {
                ObstacleKind::Enemy
            } else {
                ObstacleKind::Mountain
            },
            position: Vec3::new(x, y, z),
        })
}

fn arb_state() -> impl Strategy<Value = GameState> {
    (
        proptest::collection::vec(arb_projectile(), 0..12),
        proptest::collection::vec(arb_obstacle(), 0..12),
        0u64..1000,
    )
        .prop_map(|(mut projectiles, obstacles, score)| {
            for (i, p) in projectiles.iter_mut().enumerate() {
                p.id = i as u32 + 1;
            }
            let mut state = GameState::empty(0);
            state.projectiles = projectiles;
            state.obstacles = obstacles;
            state.score = score;
            state
        })
}

proptest! {
    #[test]
    fn stores_advance_exactly(state in arb_state(), px in -1.0f32..1.0, py in -1.0f32..1.0) {
        let tuning = Tuning::default();
        let hits = sim::hit_map(&state.projectiles, &state.obstacles);
        let input = TickInput { pointer: Vec2::new(px, py), fire: 0 };
        let next = tick(&state, &input, &tuning);

        let expected_obstacles: Vec<Obstacle> = state
            .obstacles
            .iter()
            .zip(&hits)
            .filter_map(|(o, hit)| {
                let mut o = *o;
                o.position.z += tuning.enemy_speed;
                let keep = if o.kind.collides() {
                    !hit && o.position.z < 0.0
                } else {
                    o.position.z < 0.0
                };
                keep.then_some(o)
            })
            .collect();
        prop_assert_eq!(&next.obstacles, &expected_obstacles);

        let expected_projectiles: Vec<Projectile> = state
            .projectiles
            .iter()
            .filter_map(|p| {
                let mut p = *p;
                p.position.x += p.velocity.x;
                p.position.y += p.velocity.y;
                p.position.z -= tuning.laser_z_velocity;
                (p.position.z > -tuning.laser_range && p.position.y > tuning.ground_height)
                    .then_some(p)
            })
            .collect();
        prop_assert_eq!(&next.projectiles, &expected_projectiles);
    }

    #[test]
    fn score_grows_by_the_hit_count(state in arb_state()) {
        let tuning = Tuning::default();
        let hits = sim::hit_map(&state.projectiles, &state.obstacles);
        let hit_count = hits.iter().filter(|h| **h).count() as u64;

        let next = tick(&state, &TickInput::default(), &tuning);

        prop_assert!(next.score >= state.score);
        prop_assert_eq!(next.score, state.score + hit_count);
    }

    #[test]
    fn pruning_leaves_no_expired_entities(state in arb_state()) {
        let tuning = Tuning::default();
        let next = tick(&state, &TickInput::default(), &tuning);

        for o in &next.obstacles {
            prop_assert!(o.position.z < 0.0);
        }
        for p in &next.projectiles {
            prop_assert!(p.position.z > -tuning.laser_range);
            prop_assert!(p.position.y > tuning.ground_height);
        }
    }

    #[test]
    fn hit_enemies_never_survive(state in arb_state()) {
        let tuning = Tuning::default();
        let hits = sim::hit_map(&state.projectiles, &state.obstacles);
        let next = tick(&state, &TickInput::default(), &tuning);

        for (o, hit) in state.obstacles.iter().zip(&hits) {
            if *hit {
                let mut advanced = *o;
                advanced.position.z += tuning.enemy_speed;
                prop_assert!(!next.obstacles.contains(&advanced));
            }
        }
    }

    #[test]
    fn no_projectile_is_resurrected_or_invented(state in arb_state()) {
        let next = tick(&state, &TickInput::default(), &Tuning::default());

        let prior_ids: Vec<u32> = state.projectiles.iter().map(|p| p.id).collect();
        for p in &next.projectiles {
            prop_assert!(prior_ids.contains(&p.id));
        }
    }
}
