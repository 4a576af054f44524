//! Station Run entry point
//!
//! Headless native driver: replays a scripted mission through the same host
//! loop a windowed front end would run (keys in, fixed tick, events out to
//! audio, frame snapshot to the renderer).

use std::path::PathBuf;

use station_run::Settings;
use station_run::audio::{AudioManager, LogBackend};
use station_run::consts::TICK_DT;
use station_run::input::{InputEvent, InputState, Key, KeyMap};
use station_run::scene::{FrameView, WallHue};
use station_run::sim::{GamePhase, GameState, TickInput, apply_action, tick};

/// Upper bound on simulated ticks before the script gives up
const MAX_TICKS: u32 = 2_000;

/// A scripted key event at a given tick
struct ScriptStep {
    at_tick: u32,
    key: Key,
    pressed: bool,
}

const fn press(at_tick: u32, key: Key) -> ScriptStep {
    ScriptStep {
        at_tick,
        key,
        pressed: true,
    }
}

const fn release(at_tick: u32, key: Key) -> ScriptStep {
    ScriptStep {
        at_tick,
        key,
        pressed: false,
    }
}

/// Start, switch to the overview camera, walk diagonally onto the cell
const SCRIPT: &[ScriptStep] = &[
    press(1, Key::Enter),
    release(1, Key::Enter),
    press(2, Key::Char('3')),
    press(3, Key::Char('b')),
    press(5, Key::Char('w')),
    press(5, Key::Char('d')),
    press(40, Key::Char('p')),
    press(60, Key::Char('p')),
];

/// Game instance holding all host-side state
struct Game {
    state: GameState,
    input: InputState,
    audio: AudioManager<LogBackend>,
    wall: WallHue,
    show_hud: bool,
    last_phase: GamePhase,
}

impl Game {
    fn new(settings: &Settings) -> Self {
        let backend = LogBackend {
            skip_file_check: !settings.sound_dir.is_dir(),
        };
        if backend.skip_file_check {
            log::warn!(
                "Sound directory {} not found, cues will only be logged",
                settings.sound_dir.display()
            );
        }
        Self {
            state: GameState::new(),
            input: InputState::new(KeyMap::from_settings(settings)),
            audio: AudioManager::new(backend, settings),
            wall: WallHue::default(),
            show_hud: settings.show_hud,
            last_phase: GamePhase::Menu,
        }
    }

    /// Feed a key event; returns false when the host should quit
    fn key(&mut self, key: Key, pressed: bool) -> bool {
        if pressed {
            if let Some(event) = self.input.key_down(key) {
                match event {
                    InputEvent::Quit if event.applies_in(self.state.phase) => return false,
                    InputEvent::Quit => log::debug!("Quit ignored in {:?}", self.state.phase),
                }
            }
        } else {
            self.input.key_up(key);
        }
        true
    }

    /// One host iteration: actions, fixed tick, side effects, frame
    fn update(&mut self) -> FrameView {
        let actions: Vec<_> = self.input.drain_actions().collect();
        for action in actions {
            let events = apply_action(&mut self.state, action);
            self.audio.handle_events(&events);
        }

        let input = TickInput {
            held: self.input.held(),
        };
        let events = tick(&mut self.state, &input, TICK_DT);
        self.audio.handle_events(&events);

        if self.state.phase != self.last_phase {
            log::info!("Phase {:?} -> {:?}", self.last_phase, self.state.phase);
            self.last_phase = self.state.phase;
        }

        self.wall.advance(self.state.phase, TICK_DT);
        FrameView::capture(&self.state, &self.wall, self.show_hud)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Station Run (headless) starting...");

    let settings_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(Settings::FILE_NAME));
    let settings = Settings::load_from(&settings_path);

    let mut game = Game::new(&settings);
    let mut last_hud: Vec<String> = Vec::new();

    for tick_index in 0..MAX_TICKS {
        for step in SCRIPT.iter().filter(|s| s.at_tick == tick_index) {
            if !game.key(step.key, step.pressed) {
                log::info!("Quit requested");
                return;
            }
        }

        let frame = game.update();
        if frame.hud.first() != last_hud.first() {
            for line in &frame.hud {
                log::debug!("HUD: {}", line);
            }
            last_hud = frame.hud.clone();
        }

        if game.state.phase.is_finished() {
            if let Some([message, _]) = frame.overlay {
                println!("{message}");
            }
            game.key(Key::Enter, true);
            game.key(Key::Enter, false);
            game.update();
            break;
        }
    }

    println!(
        "Finished after {} ticks, phase {:?}",
        game.state.time_ticks, game.state.phase
    );
}
