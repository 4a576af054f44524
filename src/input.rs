//! Keyboard bindings
//!
//! Turns raw key-down / key-up events into the held-key set read by each
//! tick and a queue of one-shot actions.
//!
//! | Keys | Effect |
//! | --- | --- |
//! | W A S D | move |
//! | Space, Q / E | up / down |
//! | Enter | start, or return to briefing |
//! | P / R | pause / reset round |
//! | 1 2 3 | camera presets |
//! | I K, J L, U O | camera dolly, side pan, vertical pan |
//! | arrows | camera rotate |
//! | Z/X C/V B/N M/, ./ | prop animations on/off |
//! | Escape | quit (during a round) |

use std::collections::VecDeque;

use crate::Settings;
use crate::sim::{Action, CameraPreset, GamePhase, HeldKeys, Prop};

/// Arrow keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    Up,
    Down,
    Left,
    Right,
}

/// A raw key as delivered by the window layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Arrow(Arrow),
}

/// Something the host must handle itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
}

impl InputEvent {
    /// Whether the host should act on this event in `phase`
    pub fn applies_in(self, phase: GamePhase) -> bool {
        match self {
            InputEvent::Quit => phase == GamePhase::Playing,
        }
    }
}

/// Movement keys that contribute to `HeldKeys`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MoveKey {
    Forward,
    Back,
    Left,
    Right,
    /// Space
    UpPrimary,
    /// Q
    UpSecondary,
    Down,
}

fn move_key(key: Key) -> Option<MoveKey> {
    let Key::Char(c) = key else { return None };
    match c.to_ascii_lowercase() {
        'w' => Some(MoveKey::Forward),
        's' => Some(MoveKey::Back),
        'a' => Some(MoveKey::Left),
        'd' => Some(MoveKey::Right),
        ' ' => Some(MoveKey::UpPrimary),
        'q' => Some(MoveKey::UpSecondary),
        'e' => Some(MoveKey::Down),
        _ => None,
    }
}

/// Step sizes for camera keys
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyMap {
    pub pan_step: f32,
    pub rotate_step_deg: f32,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl KeyMap {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            pan_step: settings.camera_pan_step,
            rotate_step_deg: settings.camera_rotate_step_deg,
        }
    }

    /// One-shot action bound to a key press, if any
    pub fn action(&self, key: Key) -> Option<Action> {
        let pan = |lateral, vertical, dolly| Action::CameraPan {
            lateral,
            vertical,
            dolly,
        };
        let step = self.pan_step;
        let turn = self.rotate_step_deg;

        match key {
            Key::Enter => Some(Action::Confirm),
            Key::Escape => None,
            Key::Arrow(Arrow::Up) => Some(Action::CameraRotate { pitch: turn, yaw: 0.0 }),
            Key::Arrow(Arrow::Down) => Some(Action::CameraRotate { pitch: -turn, yaw: 0.0 }),
            Key::Arrow(Arrow::Left) => Some(Action::CameraRotate { pitch: 0.0, yaw: turn }),
            Key::Arrow(Arrow::Right) => Some(Action::CameraRotate { pitch: 0.0, yaw: -turn }),
            Key::Char(c) => match c.to_ascii_lowercase() {
                'p' => Some(Action::TogglePause),
                'r' => Some(Action::Reset),
                '1' => CameraPreset::from_index(1).map(Action::CameraPreset),
                '2' => CameraPreset::from_index(2).map(Action::CameraPreset),
                '3' => CameraPreset::from_index(3).map(Action::CameraPreset),
                'z' => Some(Action::SetProp(Prop::SolarArray, true)),
                'x' => Some(Action::SetProp(Prop::SolarArray, false)),
                'c' => Some(Action::SetProp(Prop::CargoStack, true)),
                'v' => Some(Action::SetProp(Prop::CargoStack, false)),
                'b' => Some(Action::SetProp(Prop::RepairDrone, true)),
                'n' => Some(Action::SetProp(Prop::RepairDrone, false)),
                'm' => Some(Action::SetProp(Prop::AirlockGate, true)),
                ',' => Some(Action::SetProp(Prop::AirlockGate, false)),
                '.' => Some(Action::SetProp(Prop::ControlPanel, true)),
                '/' => Some(Action::SetProp(Prop::ControlPanel, false)),
                'i' => Some(pan(0.0, 0.0, -step)),
                'k' => Some(pan(0.0, 0.0, step)),
                'j' => Some(pan(-step, 0.0, 0.0)),
                'l' => Some(pan(step, 0.0, 0.0)),
                'u' => Some(pan(0.0, step, 0.0)),
                'o' => Some(pan(0.0, -step, 0.0)),
                _ => None,
            },
        }
    }
}

/// Keyboard state between ticks
#[derive(Debug, Default)]
pub struct InputState {
    keymap: KeyMap,
    down: Vec<MoveKey>,
    actions: VecDeque<Action>,
}

impl InputState {
    pub fn new(keymap: KeyMap) -> Self {
        Self {
            keymap,
            down: Vec::new(),
            actions: VecDeque::new(),
        }
    }

    /// Record a key press; returns anything the host must act on directly
    pub fn key_down(&mut self, key: Key) -> Option<InputEvent> {
        if key == Key::Escape {
            return Some(InputEvent::Quit);
        }
        if let Some(mk) = move_key(key) {
            if !self.down.contains(&mk) {
                self.down.push(mk);
            }
        }
        if let Some(action) = self.keymap.action(key) {
            log::trace!("Queued {:?}", action);
            self.actions.push_back(action);
        }
        None
    }

    pub fn key_up(&mut self, key: Key) {
        if let Some(mk) = move_key(key) {
            self.down.retain(|k| *k != mk);
        }
    }

    /// Movement keys currently held
    pub fn held(&self) -> HeldKeys {
        let is_down = |k| self.down.contains(&k);
        HeldKeys {
            forward: is_down(MoveKey::Forward),
            back: is_down(MoveKey::Back),
            left: is_down(MoveKey::Left),
            right: is_down(MoveKey::Right),
            up: is_down(MoveKey::UpPrimary) || is_down(MoveKey::UpSecondary),
            down: is_down(MoveKey::Down),
        }
    }

    /// Take queued actions in press order
    pub fn drain_actions(&mut self) -> impl Iterator<Item = Action> + '_ {
        self.actions.drain(..)
    }
}
