//! Audio driven by simulation events
//!
//! The simulation only emits `GameEvent`s; this module turns them into
//! sound cues and hands them to a backend. Failures (missing files, no
//! device) are logged and never reach the update loop.

use std::io;
use std::path::{Path, PathBuf};

use crate::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Round begins
    Start,
    /// Power cell picked up
    Collect,
    /// Mission complete
    Win,
    /// Time ran out
    Lose,
}

impl SoundCue {
    /// Clip file name inside the sound directory
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundCue::Start => "hit.wav",
            SoundCue::Collect => "collect.wav",
            SoundCue::Win => "win.wav",
            SoundCue::Lose => "lose.wav",
        }
    }

    /// Cue requested by a simulation event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::RoundStarted => Some(SoundCue::Start),
            GameEvent::GoalCollected => Some(SoundCue::Collect),
            GameEvent::Won => Some(SoundCue::Win),
            GameEvent::Lost => Some(SoundCue::Lose),
            _ => None,
        }
    }
}

/// Background loop file name
pub const MUSIC_FILE: &str = "background.mp3";

/// Platform audio output
pub trait AudioBackend {
    /// Play a clip once
    fn play_once(&mut self, path: &Path, volume: f32) -> io::Result<()>;
    /// Start looping a clip
    fn start_loop(&mut self, path: &Path, volume: f32) -> io::Result<()>;
    /// Stop the loop if one is running
    fn stop_loop(&mut self);
}

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend> {
    backend: B,
    sound_dir: PathBuf,
    sfx_volume: f32,
    music_volume: f32,
    music_playing: bool,
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B, settings: &Settings) -> Self {
        Self {
            backend,
            sound_dir: settings.sound_dir.clone(),
            sfx_volume: settings.effective_sfx_volume(),
            music_volume: settings.effective_music_volume(),
            music_playing: false,
        }
    }

    pub fn music_playing(&self) -> bool {
        self.music_playing
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// React to everything a tick or action produced
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for event in events {
            self.handle_event(event);
        }
    }

    pub fn handle_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::MusicStart => self.start_music(),
            GameEvent::MusicStop => self.stop_music(),
            other => {
                if let Some(cue) = SoundCue::for_event(other) {
                    self.play(cue);
                }
            }
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, cue: SoundCue) {
        if self.sfx_volume <= 0.0 {
            return;
        }
        let path = self.sound_dir.join(cue.file_name());
        if let Err(e) = self.backend.play_once(&path, self.sfx_volume) {
            log::warn!("Sound {:?} failed ({}): {}", cue, path.display(), e);
        }
    }

    pub fn start_music(&mut self) {
        if self.music_playing {
            return;
        }
        let path = self.sound_dir.join(MUSIC_FILE);
        match self.backend.start_loop(&path, self.music_volume) {
            Ok(()) => self.music_playing = true,
            Err(e) => log::warn!("Background music failed ({}): {}", path.display(), e),
        }
    }

    /// Stop the loop; safe to call when nothing is playing
    pub fn stop_music(&mut self) {
        if self.music_playing {
            self.backend.stop_loop();
            self.music_playing = false;
        }
    }
}

/// Backend that validates clips and logs what would play.
///
/// Used by the headless binary; a real device backend slots in behind the
/// same trait.
#[derive(Debug, Default)]
pub struct LogBackend {
    /// Skip the file existence check
    pub skip_file_check: bool,
}

impl LogBackend {
    fn check(&self, path: &Path) -> io::Result<()> {
        if self.skip_file_check || path.is_file() {
            Ok(())
        } else {
            Err(io::Error::new(io::ErrorKind::NotFound, "sound file missing"))
        }
    }
}

impl AudioBackend for LogBackend {
    fn play_once(&mut self, path: &Path, volume: f32) -> io::Result<()> {
        self.check(path)?;
        log::info!("Playing sound: {} (volume {:.2})", path.display(), volume);
        Ok(())
    }

    fn start_loop(&mut self, path: &Path, volume: f32) -> io::Result<()> {
        self.check(path)?;
        log::info!("Looping music: {} (volume {:.2})", path.display(), volume);
        Ok(())
    }

    fn stop_loop(&mut self) {
        log::info!("Music stopped");
    }
}
