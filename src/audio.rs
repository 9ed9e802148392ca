//! Audio system
//!
//! The game only decides *what* to play; an [`AudioBackend`] does the
//! playing. Session events are turned into effects here and the looping
//! music is held while a quiz is on screen.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Looping background track
pub const MUSIC_ASSET: &str = "PICS/Music/Hintergrund.ogg";

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// A station was clicked
    StationClick,
    /// An asteroid hit the ship
    HazardHit,
    /// A key restored health
    Heal,
}

impl SoundEffect {
    pub fn asset(self) -> &'static str {
        match self {
            SoundEffect::StationClick => "PICS/Music/Sound_82750500 1634320431.mp3",
            SoundEffect::HazardHit => "PICS/Music/Collision1.ogg",
            SoundEffect::Heal => "PICS/Music/Heilung.ogg",
        }
    }

    /// Effect triggered by a session event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::StationClicked(_) => Some(SoundEffect::StationClick),
            GameEvent::HazardHit => Some(SoundEffect::HazardHit),
            GameEvent::PlayerHealed => Some(SoundEffect::Heal),
            _ => None,
        }
    }
}

/// Something that can actually make noise
pub trait AudioBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32);
    fn start_music(&mut self, asset: &str, volume: f32);
    fn set_music_paused(&mut self, paused: bool);
}

/// Backend for headless runs: every call is logged
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioBackend for LogAudio {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("sfx {effect:?} at {volume:.2}");
    }

    fn start_music(&mut self, asset: &str, volume: f32) {
        log::debug!("music {asset} at {volume:.2}");
    }

    fn set_music_paused(&mut self, paused: bool) {
        log::debug!("music {}", if paused { "paused" } else { "resumed" });
    }
}

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend> {
    backend: B,
    sfx_volume: f32,
    music_volume: f32,
    pause_music_during_quiz: bool,
    music_started: bool,
    music_paused: bool,
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B, settings: &Settings) -> Self {
        let mut manager = Self {
            backend,
            sfx_volume: 0.0,
            music_volume: 0.0,
            pause_music_during_quiz: true,
            music_started: false,
            music_paused: false,
        };
        manager.apply_settings(settings);
        manager
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        self.sfx_volume = settings.effective_sfx_volume();
        self.music_volume = settings.effective_music_volume();
        self.pause_music_during_quiz = settings.pause_music_during_quiz;
    }

    /// Start the looping track once
    pub fn start_music(&mut self) {
        if self.music_started {
            return;
        }
        self.music_started = true;
        self.backend.start_music(MUSIC_ASSET, self.music_volume);
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        if self.sfx_volume <= 0.0 {
            return;
        }
        self.backend.play(effect, self.sfx_volume);
    }

    /// Play the effects for one frame's events and hold the music while a
    /// quiz is open
    pub fn handle_frame(&mut self, events: &[GameEvent], quiz_open: bool) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }

        let paused = self.pause_music_during_quiz && quiz_open;
        if self.music_started && paused != self.music_paused {
            self.music_paused = paused;
            self.backend.set_music_paused(paused);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StationId;

    #[derive(Debug, Default)]
    struct Recorder {
        played: Vec<SoundEffect>,
        music: Vec<String>,
        pauses: Vec<bool>,
    }

    impl AudioBackend for Recorder {
        fn play(&mut self, effect: SoundEffect, _volume: f32) {
            self.played.push(effect);
        }

        fn start_music(&mut self, asset: &str, _volume: f32) {
            self.music.push(asset.to_owned());
        }

        fn set_music_paused(&mut self, paused: bool) {
            self.pauses.push(paused);
        }
    }

    #[test]
    fn test_events_map_to_effects() {
        let mut audio = AudioManager::new(Recorder::default(), &Settings::default());
        let events = [
            GameEvent::StationClicked(StationId(1)),
            GameEvent::QuizOpened(StationId(1)),
            GameEvent::HazardHit,
            GameEvent::HazardHit,
            GameEvent::PlayerHealed,
            GameEvent::Won,
        ];
        audio.handle_frame(&events, false);
        assert_eq!(
            audio.backend().played,
            vec![
                SoundEffect::StationClick,
                SoundEffect::HazardHit,
                SoundEffect::HazardHit,
                SoundEffect::Heal
            ]
        );
    }

    #[test]
    fn test_muted_plays_nothing() {
        let settings = Settings {
            muted: true,
            ..Default::default()
        };
        let mut audio = AudioManager::new(Recorder::default(), &settings);
        audio.handle_frame(&[GameEvent::HazardHit], false);
        assert!(audio.backend().played.is_empty());
    }

    #[test]
    fn test_music_held_during_quiz() {
        let mut audio = AudioManager::new(Recorder::default(), &Settings::default());
        audio.start_music();
        audio.start_music();
        assert_eq!(audio.backend().music, vec![MUSIC_ASSET.to_owned()]);

        audio.handle_frame(&[], false);
        audio.handle_frame(&[], true);
        audio.handle_frame(&[], true);
        audio.handle_frame(&[], false);
        assert_eq!(audio.backend().pauses, vec![true, false]);
    }

    #[test]
    fn test_music_keeps_playing_when_disabled() {
        let settings = Settings {
            pause_music_during_quiz: false,
            ..Default::default()
        };
        let mut audio = AudioManager::new(Recorder::default(), &settings);
        audio.start_music();
        audio.handle_frame(&[], true);
        assert!(audio.backend().pauses.is_empty());
    }
}
