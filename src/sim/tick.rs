//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically, plus the
//! one-shot action handler that drives the game flow.

use glam::Vec3;

use super::camera::CameraPreset;
use super::collision::{Arena, clamp_to_bounds, player_touches_goal};
use super::props::Prop;
use super::state::{GameEvent, GamePhase, GameState, Player};
use crate::consts::*;
use crate::yaw_from_direction;

/// Movement keys held during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl HeldKeys {
    /// Horizontal intent on the XZ plane, forward is -Z (not normalized)
    pub fn horizontal(&self) -> (f32, f32) {
        let axis = |neg: bool, pos: bool| f32::from(u8::from(pos)) - f32::from(u8::from(neg));
        (axis(self.left, self.right), axis(self.forward, self.back))
    }

    /// Vertical intent: +1, -1 or 0 when neither or both are held
    pub fn vertical(&self) -> f32 {
        match (self.up, self.down) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub held: HeldKeys,
}

/// One-shot player actions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Start a round from the menu, or acknowledge a result
    Confirm,
    TogglePause,
    /// Restart the current round without leaving it
    Reset,
    CameraPreset(CameraPreset),
    CameraPan { lateral: f32, vertical: f32, dolly: f32 },
    /// Degrees to pitch and yaw the view
    CameraRotate { pitch: f32, yaw: f32 },
    SetProp(Prop, bool),
}

/// Apply a one-shot action and report the side effects it requests
pub fn apply_action(state: &mut GameState, action: Action) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match (state.phase, action) {
        (GamePhase::Menu, Action::Confirm) => {
            state.reset_round();
            state.phase = GamePhase::Playing;
            log::info!("Round started ({} ms on the clock)", state.clock.duration_ms);
            events.push(GameEvent::RoundStarted);
            events.push(GameEvent::MusicStart);
        }
        (GamePhase::Win | GamePhase::Lose, Action::Confirm) => {
            // Nothing is reset here; the next start does it
            state.phase = GamePhase::Menu;
            log::info!("Back to briefing");
            events.push(GameEvent::MusicStop);
            events.push(GameEvent::ReturnedToMenu);
        }
        // Arrow-key rotation is not gated on the phase
        (_, Action::CameraRotate { pitch, yaw }) => {
            if pitch != 0.0 {
                state.camera.pitch(pitch);
            }
            if yaw != 0.0 {
                state.camera.yaw(yaw);
            }
        }
        (GamePhase::Playing, Action::TogglePause) => {
            state.paused = !state.paused;
            log::info!("Simulation {}", if state.paused { "paused" } else { "resumed" });
            events.push(GameEvent::PauseToggled {
                paused: state.paused,
            });
        }
        (GamePhase::Playing, Action::Reset) => {
            state.reset_round();
            log::info!("Round reset");
            events.push(GameEvent::RoundReset);
        }
        (GamePhase::Playing, Action::CameraPreset(preset)) => {
            state.camera.apply_preset(preset);
        }
        (
            GamePhase::Playing,
            Action::CameraPan {
                lateral,
                vertical,
                dolly,
            },
        ) => {
            state.camera.pan_lateral(lateral);
            state.camera.pan_vertical(vertical);
            state.camera.dolly(dolly);
        }
        (GamePhase::Playing, Action::SetProp(prop, on)) => {
            state.props.set_enabled(prop, on);
            log::debug!("{} animation {}", prop.name(), if on { "on" } else { "off" });
        }
        (phase, action) => {
            log::trace!("Ignoring {:?} in {:?}", action, phase);
        }
    }

    events
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Don't tick outside a round or while paused
    if state.phase != GamePhase::Playing || state.paused {
        return events;
    }

    let dt = dt.max(0.0);
    state.time_ticks += 1;
    state.clock.advance(dt);
    state.props.advance(dt);
    state.goal.bob_phase += dt * GOAL_BOB_RATE;

    apply_player_input(&mut state.player, &input.held, dt, &Arena::STATION);

    if player_touches_goal(&state.player, &state.goal) {
        state.goal.visible = false;
        log::info!("Power cell collected at {} ms", state.clock.elapsed_ms());
        events.push(GameEvent::GoalCollected);
        if state.clock.within_deadline() {
            finish_round(state, GamePhase::Win, &mut events);
        }
    }

    // A cell collected on the deadline tick still wins
    if state.phase == GamePhase::Playing && state.clock.is_expired() {
        let outcome = if state.goal.visible {
            GamePhase::Lose
        } else {
            GamePhase::Win
        };
        finish_round(state, outcome, &mut events);
    }

    events
}

fn finish_round(state: &mut GameState, outcome: GamePhase, events: &mut Vec<GameEvent>) {
    state.phase = outcome;
    match outcome {
        GamePhase::Win => {
            log::info!("Mission complete at {} ms", state.clock.elapsed_ms());
            events.push(GameEvent::Won);
        }
        GamePhase::Lose => {
            log::info!("Mission failed, time ran out");
            events.push(GameEvent::Lost);
        }
        GamePhase::Menu | GamePhase::Playing => return,
    }
    events.push(GameEvent::MusicStop);
}

/// Move the player from held keys, keep it in the arena, and update facing.
///
/// Horizontal intent is normalized so diagonals are not faster; vertical
/// motion is applied separately at double speed. There is no gravity.
pub fn apply_player_input(player: &mut Player, held: &HeldKeys, dt: f32, arena: &Arena) {
    let (dx, dz) = held.horizontal();
    let len_xz = (dx * dx + dz * dz).sqrt();

    let mut movement = Vec3::ZERO;
    if len_xz > 0.0 {
        movement.x = dx / len_xz * PLAYER_SPEED * dt;
        movement.z = dz / len_xz * PLAYER_SPEED * dt;
    }
    movement.y = held.vertical() * VERTICAL_SPEED_FACTOR * PLAYER_SPEED * dt;

    let before = player.pos;
    player.pos = clamp_to_bounds(player.pos + movement, player.radius, arena);
    player.vel = if dt > 0.0 {
        (player.pos - before) / dt
    } else {
        Vec3::ZERO
    };

    player.on_ground = player.pos.y <= arena.floor_y + GROUND_OFFSET + GROUND_EPSILON;
    player.pitch = if player.on_ground { 0.0 } else { -AIR_TILT_DEG };

    // No horizontal intent keeps the previous facing
    if len_xz > FACING_THRESHOLD && dt > 0.0 {
        player.yaw = yaw_from_direction(movement.x, movement.z);
    }
}
