//! Audio capability
//!
//! Playback is strictly best-effort: a missing or unloadable asset must
//! never take the simulation down. The `AudioOutput` trait returns a
//! success flag that callers deliberately ignore, and the macroquad
//! implementation maps load failures to empty slots.

use macroquad::audio::{load_sound, play_sound, stop_sound, PlaySoundParams, Sound};

/// One-shot sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Jump,
    Hit,
    Win,
    Lose,
}

/// Looping music tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicTrack {
    Menu,
    Game,
}

/// Sound/music sink consumed by the simulation.
///
/// All methods are fire-and-forget; the returned flag reports whether
/// playback actually started and is ignored by every caller.
pub trait AudioOutput {
    fn play_cue(&mut self, cue: SoundCue) -> bool;
    fn play_music(&mut self, track: MusicTrack) -> bool;
    fn stop_music(&mut self);
    fn set_enabled(&mut self, enabled: bool);
}

/// Macroquad-backed audio output.
///
/// Each slot is `None` when the asset failed to load; playing an empty
/// slot is a silent no-op.
pub struct GameAudio {
    jump: Option<Sound>,
    hit: Option<Sound>,
    win: Option<Sound>,
    lose: Option<Sound>,
    menu_music: Option<Sound>,
    game_music: Option<Sound>,
    playing: Option<MusicTrack>,
    enabled: bool,
}

impl GameAudio {
    /// Load every sound asset, tolerating missing files.
    pub async fn load() -> Self {
        Self {
            jump: load_sound("assets/sounds/jump.ogg").await.ok(),
            hit: load_sound("assets/sounds/hit.ogg").await.ok(),
            win: load_sound("assets/sounds/win.ogg").await.ok(),
            lose: load_sound("assets/sounds/lose.ogg").await.ok(),
            menu_music: load_sound("assets/music/menu_music.ogg").await.ok(),
            game_music: load_sound("assets/music/bg_music.ogg").await.ok(),
            playing: None,
            enabled: true,
        }
    }

    fn cue_slot(&self, cue: SoundCue) -> &Option<Sound> {
        match cue {
            SoundCue::Jump => &self.jump,
            SoundCue::Hit => &self.hit,
            SoundCue::Win => &self.win,
            SoundCue::Lose => &self.lose,
        }
    }

    fn track_slot(&self, track: MusicTrack) -> &Option<Sound> {
        match track {
            MusicTrack::Menu => &self.menu_music,
            MusicTrack::Game => &self.game_music,
        }
    }
}

impl AudioOutput for GameAudio {
    fn play_cue(&mut self, cue: SoundCue) -> bool {
        if !self.enabled {
            return false;
        }
        match self.cue_slot(cue) {
            Some(sound) => {
                play_sound(
                    sound,
                    PlaySoundParams {
                        looped: false,
                        volume: 1.0,
                    },
                );
                true
            }
            None => false,
        }
    }

    fn play_music(&mut self, track: MusicTrack) -> bool {
        self.stop_music();
        if !self.enabled {
            return false;
        }
        let started = match self.track_slot(track) {
            Some(sound) => {
                play_sound(
                    sound,
                    PlaySoundParams {
                        looped: true,
                        volume: 1.0,
                    },
                );
                true
            }
            None => false,
        };
        if started {
            self.playing = Some(track);
        }
        started
    }

    fn stop_music(&mut self) {
        if let Some(track) = self.playing.take() {
            if let Some(sound) = self.track_slot(track) {
                stop_sound(sound);
            }
        }
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

/// Recording sink for unit tests: captures what the simulation asked for.
#[cfg(test)]
#[derive(Default)]
pub struct SilentAudio {
    pub cues: Vec<SoundCue>,
    pub music: Vec<MusicTrack>,
    pub music_stops: usize,
}

#[cfg(test)]
impl AudioOutput for SilentAudio {
    fn play_cue(&mut self, cue: SoundCue) -> bool {
        self.cues.push(cue);
        true
    }

    fn play_music(&mut self, track: MusicTrack) -> bool {
        self.music.push(track);
        true
    }

    fn stop_music(&mut self) {
        self.music_stops += 1;
    }

    fn set_enabled(&mut self, _enabled: bool) {}
}
