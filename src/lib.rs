//! Station Run - find the power cell before the clock runs out
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `input`: Key bindings to held keys and one-shot actions
//! - `audio`: Sound cues driven by simulation events
//! - `scene`: Read-only frame snapshot for a renderer
//! - `settings`: Persisted player preferences

pub mod audio;
pub mod input;
pub mod scene;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec3;

    /// Fixed simulation timestep (16 ms timer)
    pub const TICK_DT: f32 = 0.016;

    /// Horizontal player speed (units/s)
    pub const PLAYER_SPEED: f32 = 4.0;
    /// Vertical movement runs at this multiple of `PLAYER_SPEED`
    pub const VERTICAL_SPEED_FACTOR: f32 = 2.0;
    /// Pitch applied while airborne (degrees)
    pub const AIR_TILT_DEG: f32 = 20.0;
    /// Minimum horizontal intent before facing follows movement
    pub const FACING_THRESHOLD: f32 = 0.01;

    /// Length of one round
    pub const ROUND_DURATION_MS: u64 = 5_000;

    /// Arena dimensions (floor spans -10..+10 on X and Z)
    pub const ARENA_HALF_X: f32 = 10.0;
    pub const ARENA_HALF_Z: f32 = 10.0;
    pub const FLOOR_Y: f32 = 0.0;
    pub const CEILING_Y: f32 = 8.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 0.35;
    /// Standing height of the player origin above the floor
    pub const GROUND_OFFSET: f32 = 0.8;
    pub const GROUND_EPSILON: f32 = 0.01;
    pub const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, FLOOR_Y + GROUND_OFFSET, 0.0);

    /// Goal (power cell) defaults
    pub const GOAL_RADIUS: f32 = 0.4;
    pub const GOAL_SPAWN: Vec3 = Vec3::new(4.0, FLOOR_Y + 0.6, -3.0);
    /// Bob phase advance (radians/s)
    pub const GOAL_BOB_RATE: f32 = 2.0;
    pub const GOAL_BOB_AMPLITUDE: f32 = 0.12;
}

/// Facing angle in degrees for a horizontal direction, 0 looking down -Z
#[inline]
pub fn yaw_from_direction(dx: f32, dz: f32) -> f32 {
    dx.atan2(-dz).to_degrees()
}

/// Wrap degrees to [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaw_from_direction() {
        assert!(yaw_from_direction(0.0, -1.0).abs() < 1e-4);
        assert!((yaw_from_direction(1.0, 0.0) - 90.0).abs() < 1e-4);
        assert!((yaw_from_direction(-1.0, 0.0) + 90.0).abs() < 1e-4);
        assert!((yaw_from_direction(0.0, 1.0).abs() - 180.0).abs() < 1e-4);
    }

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(370.0), 10.0);
        assert_eq!(wrap_degrees(-90.0), 270.0);
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert!(wrap_degrees(-1e-9) < 360.0);
    }
}
