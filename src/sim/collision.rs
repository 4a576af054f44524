//! Arena bounds and goal pickup tests
//!
//! The station is an axis-aligned box. The player is kept inside it by a
//! per-axis clamp after each move (position correction, not swept
//! collision), and picks up the power cell with a sphere-sphere overlap.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::state::{Goal, Player};
use crate::consts::*;

/// Axis-aligned room extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub half_x: f32,
    pub half_z: f32,
    pub floor_y: f32,
    pub ceiling_y: f32,
}

impl Arena {
    /// The station interior
    pub const STATION: Arena = Arena {
        half_x: ARENA_HALF_X,
        half_z: ARENA_HALF_Z,
        floor_y: FLOOR_Y,
        ceiling_y: CEILING_Y,
    };

    /// Lowest corner a body of `radius` may occupy
    pub fn min_corner(&self, radius: f32) -> Vec3 {
        Vec3::new(
            -self.half_x + radius,
            self.floor_y + radius,
            -self.half_z + radius,
        )
    }

    /// Highest corner a body of `radius` may occupy
    pub fn max_corner(&self, radius: f32) -> Vec3 {
        Vec3::new(
            self.half_x - radius,
            self.ceiling_y - radius,
            self.half_z - radius,
        )
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::STATION
    }
}

/// Clamp a position into the arena shrunk by `radius` on all six faces
pub fn clamp_to_bounds(pos: Vec3, radius: f32, arena: &Arena) -> Vec3 {
    let lo = arena.min_corner(radius);
    let hi = arena.max_corner(radius);
    // Vec3::clamp asserts lo <= hi; a huge radius must not panic
    Vec3::new(
        pos.x.max(lo.x).min(hi.x),
        pos.y.max(lo.y).min(hi.y),
        pos.z.max(lo.z).min(hi.z),
    )
}

/// Sphere overlap test, touching counts
pub fn spheres_touch(a: Vec3, radius_a: f32, b: Vec3, radius_b: f32) -> bool {
    let reach = radius_a + radius_b;
    a.distance_squared(b) <= reach * reach
}

/// Whether the player is close enough to pick up the goal this tick
pub fn player_touches_goal(player: &Player, goal: &Goal) -> bool {
    if !goal.visible {
        return false;
    }
    spheres_touch(player.pos, player.radius, goal.pos, GOAL_RADIUS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clamp_inside_is_unchanged() {
        let pos = Vec3::new(1.0, 2.0, -3.0);
        assert_eq!(clamp_to_bounds(pos, PLAYER_RADIUS, &Arena::STATION), pos);
    }

    #[test]
    fn test_clamp_each_face() {
        let arena = Arena::STATION;
        let r = PLAYER_RADIUS;

        let p = clamp_to_bounds(Vec3::new(50.0, -5.0, -50.0), r, &arena);
        assert_eq!(p.x, ARENA_HALF_X - r);
        assert_eq!(p.y, FLOOR_Y + r);
        assert_eq!(p.z, -ARENA_HALF_Z + r);

        let p = clamp_to_bounds(Vec3::new(-50.0, 99.0, 50.0), r, &arena);
        assert_eq!(p.x, -ARENA_HALF_X + r);
        assert_eq!(p.y, CEILING_Y - r);
        assert_eq!(p.z, ARENA_HALF_Z - r);
    }

    #[test]
    fn test_collision_boundary_inclusive() {
        // Axis-aligned offsets keep the arithmetic exact
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(0.75, 0.0, 0.0);
        assert!(spheres_touch(a, 0.25, b, 0.5));
        assert!(spheres_touch(b, 0.5, a, 0.25));

        let c = Vec3::new(0.7501, 0.0, 0.0);
        assert!(!spheres_touch(a, 0.25, c, 0.5));
    }

    #[test]
    fn test_player_goal_collision() {
        let mut player = Player::default();
        let mut goal = Goal::default();
        assert!(!player_touches_goal(&player, &goal));

        player.pos = goal.pos + Vec3::new(PLAYER_RADIUS + GOAL_RADIUS - 0.01, 0.0, 0.0);
        assert!(player_touches_goal(&player, &goal));

        // Collected goals can't be hit again
        goal.visible = false;
        assert!(!player_touches_goal(&player, &goal));
    }

    proptest! {
        #[test]
        fn prop_clamp_stays_in_bounds(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            z in -1000.0f32..1000.0,
        ) {
            let r = PLAYER_RADIUS;
            let p = clamp_to_bounds(Vec3::new(x, y, z), r, &Arena::STATION);
            prop_assert!(p.x >= -ARENA_HALF_X + r && p.x <= ARENA_HALF_X - r);
            prop_assert!(p.z >= -ARENA_HALF_Z + r && p.z <= ARENA_HALF_Z - r);
            prop_assert!(p.y >= FLOOR_Y + r && p.y <= CEILING_Y - r);
        }

        #[test]
        fn prop_collision_symmetric(
            ax in -10.0f32..10.0, ay in 0.0f32..8.0, az in -10.0f32..10.0,
            bx in -10.0f32..10.0, by in 0.0f32..8.0, bz in -10.0f32..10.0,
            ra in 0.0f32..2.0, rb in 0.0f32..2.0,
        ) {
            let a = Vec3::new(ax, ay, az);
            let b = Vec3::new(bx, by, bz);
            prop_assert_eq!(spheres_touch(a, ra, b, rb), spheres_touch(b, rb, a, ra));
        }
    }
}
