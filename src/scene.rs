//! Renderer-facing frame snapshot
//!
//! Everything a renderer needs to draw one frame, read out of `GameState`
//! without feeding anything back. HUD and overlay text live here too so
//! every front end shows the same strings.

use glam::Vec3;

use crate::consts::ROUND_DURATION_MS;
use crate::sim::{Camera, GamePhase, GameState, Prop, PropPose};
use crate::wrap_degrees;

/// Wall colour cycle speed (degrees of hue per second)
pub const WALL_HUE_RATE: f32 = 20.0;
pub const WALL_SATURATION: f32 = 0.45;
pub const WALL_VALUE: f32 = 0.85;

pub const WIN_MESSAGE: &str = "MISSION COMPLETE — POWER CELL RECOVERED!";
pub const LOSE_MESSAGE: &str = "MISSION FAILED — TIME RAN OUT";
pub const RETURN_HINT: &str = "Press ENTER to return to Mission Briefing";
pub const HELP_LINE: &str = "Press 1/2/3 for views. ENTER to (re)start. P pause. R reset.";

/// Convert HSV (hue in degrees, s and v in 0..1) to RGB
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    if s <= 0.0 {
        return [v, v, v];
    }
    let hh = wrap_degrees(h) / 60.0;
    let sector = hh.floor();
    let ff = hh - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * ff);
    let t = v * (1.0 - s * (1.0 - ff));
    match sector as u32 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

/// Slowly cycling wall colour.
///
/// Advanced per rendered frame, not per tick, so it keeps moving on the end
/// screens and while paused. The briefing screen has no walls and holds it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WallHue {
    pub degrees: f32,
}

impl WallHue {
    pub fn advance(&mut self, phase: GamePhase, frame_dt: f32) {
        if phase == GamePhase::Menu {
            return;
        }
        self.degrees = wrap_degrees(self.degrees + WALL_HUE_RATE * frame_dt);
    }

    pub fn rgb(&self) -> [f32; 3] {
        hsv_to_rgb(self.degrees, WALL_SATURATION, WALL_VALUE)
    }
}

/// Player model placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerPose {
    pub pos: Vec3,
    pub yaw_deg: f32,
    pub pitch_deg: f32,
}

/// One frame's worth of drawable state
#[derive(Debug, Clone, PartialEq)]
pub struct FrameView {
    pub phase: GamePhase,
    pub camera: Camera,
    pub wall_rgb: [f32; 3],
    pub player: PlayerPose,
    /// Power cell draw position including bob; `None` once collected
    pub goal: Option<Vec3>,
    pub props: Vec<(Prop, Vec3, PropPose)>,
    /// Top-left HUD lines
    pub hud: Vec<String>,
    /// Win/lose overlay lines
    pub overlay: Option<[&'static str; 2]>,
    /// Briefing shown instead of the scene while in the menu
    pub briefing: Option<Vec<String>>,
}

impl FrameView {
    pub fn capture(state: &GameState, wall: &WallHue, show_hud: bool) -> Self {
        let goal = state
            .goal
            .visible
            .then(|| state.goal.pos + Vec3::Y * state.goal.bob_offset());

        let props = Prop::ALL
            .iter()
            .map(|&prop| (prop, prop.anchor(), state.props.pose(prop)))
            .collect();

        let hud = if show_hud { hud_lines(state) } else { Vec::new() };

        let overlay = match state.phase {
            GamePhase::Win => Some([WIN_MESSAGE, RETURN_HINT]),
            GamePhase::Lose => Some([LOSE_MESSAGE, RETURN_HINT]),
            GamePhase::Menu | GamePhase::Playing => None,
        };

        let briefing = (state.phase == GamePhase::Menu).then(briefing_lines);

        Self {
            phase: state.phase,
            camera: state.camera,
            wall_rgb: wall.rgb(),
            player: PlayerPose {
                pos: state.player.pos,
                yaw_deg: state.player.yaw,
                pitch_deg: state.player.pitch,
            },
            goal,
            props,
            hud,
            overlay,
            briefing,
        }
    }
}

/// Timer, goal counter and key help
pub fn hud_lines(state: &GameState) -> Vec<String> {
    let timer = if state.phase == GamePhase::Playing {
        format!("Time remaining: {} s", state.clock.remaining_ms() / 1000)
    } else {
        "Time remaining: --".to_string()
    };
    let mut lines = vec![timer, format!("Goals left: {}", state.goals_left())];
    if state.paused {
        lines.push("PAUSED".to_string());
    }
    lines.push(HELP_LINE.to_string());
    lines
}

/// Mission briefing text
pub fn briefing_lines() -> Vec<String> {
    vec![
        "SPACE STATION — MISSION BRIEFING".to_string(),
        "Objective: Locate and collect the glowing Power Cell floating in the station."
            .to_string(),
        "Move: W/A/S/D — Up/Down: SPACE / Q / E — Camera: IJKLUO — Views: 1/2/3".to_string(),
        "Animations: Z/X (Solar Array), C/V (Cargo), B/N (Drone), M/, (Airlock), .// (Control Panel)"
            .to_string(),
        format!(
            "Collect the Power Cell BEFORE the {}-second timer ends...",
            ROUND_DURATION_MS / 1000
        ),
        "Press ENTER to begin mission.".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Action, apply_action};

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), [1.0, 0.0, 0.0]);
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), [0.0, 1.0, 0.0]);
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), [0.0, 0.0, 1.0]);
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), [1.0, 0.0, 0.0]);
        assert_eq!(hsv_to_rgb(77.0, 0.0, 0.4), [0.4, 0.4, 0.4]);
    }

    #[test]
    fn test_wall_hue_wraps() {
        let mut hue = WallHue { degrees: 359.0 };
        hue.advance(GamePhase::Playing, 0.1);
        assert!((hue.degrees - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_wall_hue_holds_on_briefing() {
        let mut hue = WallHue { degrees: 30.0 };
        hue.advance(GamePhase::Menu, 1.0);
        assert_eq!(hue.degrees, 30.0);

        hue.advance(GamePhase::Lose, 1.0);
        assert!((hue.degrees - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_menu_frame_has_briefing() {
        let state = GameState::new();
        let frame = FrameView::capture(&state, &WallHue::default(), true);
        assert!(frame.briefing.is_some());
        assert!(frame.overlay.is_none());
        assert_eq!(frame.hud[0], "Time remaining: --");
        assert_eq!(frame.props.len(), 5);
    }

    #[test]
    fn test_playing_hud_counts_down() {
        let mut state = GameState::new();
        apply_action(&mut state, Action::Confirm);
        state.clock.now_ms += 1_500;
        let hud = hud_lines(&state);
        assert_eq!(hud[0], "Time remaining: 3 s");
        assert_eq!(hud[1], "Goals left: 1");
    }

    #[test]
    fn test_collected_goal_not_drawn() {
        let mut state = GameState::new();
        apply_action(&mut state, Action::Confirm);
        state.goal.visible = false;
        state.phase = GamePhase::Win;
        let frame = FrameView::capture(&state, &WallHue::default(), false);
        assert!(frame.goal.is_none());
        assert!(frame.hud.is_empty());
        assert_eq!(frame.overlay, Some([WIN_MESSAGE, RETURN_HINT]));
    }
}
