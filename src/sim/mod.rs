//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Simulation clock only (no wall time)
//! - Side effects are returned as events, never performed
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod props;
pub mod state;
pub mod tick;

pub use camera::{Camera, CameraPreset};
pub use collision::{Arena, clamp_to_bounds, player_touches_goal, spheres_touch};
pub use props::{Prop, PropPose, Props};
pub use state::{GameEvent, GamePhase, GameState, Goal, Player, RoundClock};
pub use tick::{Action, HeldKeys, TickInput, apply_action, apply_player_input, tick};
