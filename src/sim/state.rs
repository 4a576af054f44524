//! Game state and core simulation types
//!
//! Everything the update step reads or writes lives in `GameState`; there
//! are no process-wide globals.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::props::Props;
use crate::consts::*;

/// Current phase of the game flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Mission briefing, waiting for start
    #[default]
    Menu,
    /// Round in progress
    Playing,
    /// Power cell recovered in time
    Win,
    /// Clock ran out with the cell still in place
    Lose,
}

impl GamePhase {
    /// Round over, result on screen
    pub fn is_finished(&self) -> bool {
        matches!(self, GamePhase::Win | GamePhase::Lose)
    }
}

/// Side-effect requests produced by a transition or tick.
///
/// The host hands these to the audio manager (and anything else that
/// cares); the simulation never performs them itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    RoundStarted,
    RoundReset,
    GoalCollected,
    Won,
    Lost,
    ReturnedToMenu,
    PauseToggled { paused: bool },
    MusicStart,
    MusicStop,
}

/// The player avatar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec3,
    /// Last tick's displacement rate; cosmetic, never integrated
    pub vel: Vec3,
    /// Facing in degrees around +Y
    pub yaw: f32,
    /// Tilt in degrees around +X
    pub pitch: f32,
    pub on_ground: bool,
    /// Collision and bounds margin
    pub radius: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: PLAYER_SPAWN,
            vel: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            on_ground: true,
            radius: PLAYER_RADIUS,
        }
    }
}

impl Player {
    /// Back to the spawn point
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The power cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub pos: Vec3,
    /// False once collected
    pub visible: bool,
    /// Cosmetic bob angle (radians, grows without bound)
    pub bob_phase: f32,
}

impl Default for Goal {
    fn default() -> Self {
        Self {
            pos: GOAL_SPAWN,
            visible: true,
            bob_phase: 0.0,
        }
    }
}

impl Goal {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Vertical offset for drawing
    pub fn bob_offset(&self) -> f32 {
        GOAL_BOB_AMPLITUDE * self.bob_phase.sin()
    }
}

/// Round timer on the simulation clock.
///
/// Only `now_ms` and `started_at_ms` are stored; elapsed and remaining are
/// always derived. The clock only moves while the simulation steps, so a
/// paused round does not lose time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundClock {
    pub now_ms: u64,
    pub started_at_ms: u64,
    pub duration_ms: u64,
}

impl Default for RoundClock {
    fn default() -> Self {
        Self {
            now_ms: 0,
            started_at_ms: 0,
            duration_ms: ROUND_DURATION_MS,
        }
    }
}

impl RoundClock {
    /// Capture the round start at the current time
    pub fn restart(&mut self) {
        self.started_at_ms = self.now_ms;
    }

    pub fn advance(&mut self, dt: f32) {
        if dt > 0.0 {
            // Float-to-int casts saturate; keep the sum saturating too
            self.now_ms = self.now_ms.saturating_add((dt * 1000.0).round() as u64);
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.now_ms.saturating_sub(self.started_at_ms)
    }

    pub fn remaining_ms(&self) -> u64 {
        self.duration_ms.saturating_sub(self.elapsed_ms())
    }

    /// Deadline reached (inclusive)
    pub fn is_expired(&self) -> bool {
        self.elapsed_ms() >= self.duration_ms
    }

    /// Still inside the round window (inclusive of the deadline itself)
    pub fn within_deadline(&self) -> bool {
        self.elapsed_ms() <= self.duration_ms
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    /// Freezes the update step; orthogonal to `phase`
    pub paused: bool,
    pub player: Player,
    pub goal: Goal,
    pub camera: Camera,
    pub props: Props,
    pub clock: RoundClock,
    /// Simulated ticks since creation
    pub time_ticks: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh state sitting on the briefing screen
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Menu,
            paused: false,
            player: Player::default(),
            goal: Goal::default(),
            camera: Camera::default(),
            props: Props::default(),
            clock: RoundClock::default(),
            time_ticks: 0,
        }
    }

    /// Reinitialise everything a round owns and restart the clock.
    ///
    /// Shared by round start and the in-round reset; the camera is left
    /// where the player put it.
    pub fn reset_round(&mut self) {
        self.player.reset();
        self.goal.reset();
        self.props.disable_all();
        self.clock.restart();
        self.paused = false;
    }

    /// Goals still to collect this round
    pub fn goals_left(&self) -> u32 {
        u32::from(self.goal.visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_in_menu() {
        let state = GameState::new();
        assert_eq!(state.phase, GamePhase::Menu);
        assert!(!state.paused);
        assert_eq!(state.player.pos, PLAYER_SPAWN);
        assert!(state.goal.visible);
        assert_eq!(state.goals_left(), 1);
    }

    #[test]
    fn test_clock_derived_values() {
        let mut clock = RoundClock::default();
        clock.now_ms = 1_000;
        clock.restart();
        assert_eq!(clock.elapsed_ms(), 0);
        assert_eq!(clock.remaining_ms(), ROUND_DURATION_MS);

        clock.advance(0.016);
        assert_eq!(clock.elapsed_ms(), 16);

        clock.now_ms = clock.started_at_ms + ROUND_DURATION_MS;
        assert!(clock.is_expired());
        assert!(clock.within_deadline());
        assert_eq!(clock.remaining_ms(), 0);

        clock.now_ms += 1;
        assert!(!clock.within_deadline());
        assert_eq!(clock.remaining_ms(), 0);
    }

    #[test]
    fn test_clock_ignores_non_positive_dt() {
        let mut clock = RoundClock::default();
        clock.advance(0.0);
        clock.advance(-1.0);
        assert_eq!(clock.now_ms, 0);
    }

    #[test]
    fn test_clock_saturates_on_huge_dt() {
        let mut clock = RoundClock::default();
        clock.advance(1e30);
        clock.advance(1e30);
        assert_eq!(clock.now_ms, u64::MAX);

        clock.restart();
        clock.advance(0.016);
        assert_eq!(clock.elapsed_ms(), 0);
        assert!(!clock.is_expired());
    }

    #[test]
    fn test_reset_round_restores_spawn() {
        let mut state = GameState::new();
        state.player.pos = Vec3::new(3.0, 4.0, 5.0);
        state.player.yaw = 45.0;
        state.player.pitch = -20.0;
        state.player.on_ground = false;
        state.goal.visible = false;
        state.goal.bob_phase = 3.0;
        state.paused = true;
        state.clock.now_ms = 2_500;

        state.reset_round();

        assert_eq!(state.player, Player::default());
        assert_eq!(state.goal, Goal::default());
        assert!(!state.paused);
        assert_eq!(state.clock.elapsed_ms(), 0);
    }

    #[test]
    fn test_only_results_are_finished() {
        assert!(!GamePhase::Menu.is_finished());
        assert!(!GamePhase::Playing.is_finished());
        assert!(GamePhase::Win.is_finished());
        assert!(GamePhase::Lose.is_finished());
    }

    #[test]
    fn test_state_serializes() {
        let state = GameState::new();
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
