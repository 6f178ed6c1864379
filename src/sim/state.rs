//! Match state
//!
//! Owns every entity for one match. The frame loop holds a `MatchState` and
//! hands it to `tick` once per rendered frame.

use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::camera::OrbitCamera;
use super::chaser::Chaser;
use super::player::Player;
use super::wave::Wave;
use crate::consts::*;
use crate::settings::{Difficulty, Settings};
use crate::tuning::Tuning;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Chase in progress
    Playing,
    /// Chaser reached the player
    Caught,
    /// Player lasted the full match
    Survived,
}

impl MatchPhase {
    pub fn is_over(&self) -> bool {
        !matches!(self, MatchPhase::Playing)
    }
}

/// Complete match state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub arena: Arena,
    pub player: Player,
    pub chaser: Chaser,
    pub wave: Wave,
    pub camera: OrbitCamera,
    /// Seconds since the match started
    pub elapsed: f32,
    pub phase: MatchPhase,
    pub difficulty: Difficulty,
    pub tuning: Tuning,
    /// Simulation frame counter
    pub frames: u64,
}

impl MatchState {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_tuning(difficulty, Tuning::default(), 0.5)
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_tuning(
            settings.difficulty,
            settings.tuning,
            settings.mouse_sensitivity,
        )
    }

    pub fn with_tuning(difficulty: Difficulty, tuning: Tuning, mouse_sensitivity: f32) -> Self {
        let mut camera = OrbitCamera::new(mouse_sensitivity);
        camera.follow(PLAYER_START);
        let arena = Arena::default();
        camera.update_view(&arena);

        log::info!("New match ({})", difficulty.as_str());
        Self {
            arena,
            player: Player::new(PLAYER_START, difficulty.abilities_enabled(), &tuning.player),
            chaser: Chaser::new(CHASER_START, &tuning.chaser),
            wave: Wave::new(&tuning.wave),
            camera,
            elapsed: 0.0,
            phase: MatchPhase::Playing,
            difficulty,
            tuning,
            frames: 0,
        }
    }

    /// Put everything back at the start line, keeping difficulty and tuning
    pub fn restart(&mut self) {
        self.player
            .reset(PLAYER_START, self.difficulty.abilities_enabled());
        self.chaser.reset(CHASER_START);
        self.wave.clear();
        self.camera.follow(PLAYER_START);
        self.camera.update_view(&self.arena);
        self.elapsed = 0.0;
        self.phase = MatchPhase::Playing;
        self.frames = 0;
        log::info!("Match restarted ({})", self.difficulty.as_str());
    }

    /// Switch difficulty and restart
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.restart();
    }

    /// Seconds left on the match clock
    pub fn time_left(&self) -> f32 {
        (MATCH_DURATION - self.elapsed).max(0.0)
    }

    /// Planar + vertical distance between player and chaser
    pub fn separation(&self) -> f32 {
        self.player.position.distance(self.chaser.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_layout() {
        let state = MatchState::new(Difficulty::Easy);
        assert_eq!(state.player.position, PLAYER_START);
        assert_eq!(state.chaser.position, CHASER_START);
        assert!(!state.wave.active);
        assert!(state.player.enable_abilities);
        assert_eq!(state.phase, MatchPhase::Playing);
        assert_eq!(state.time_left(), MATCH_DURATION);
    }

    #[test]
    fn test_hard_difficulty_disables_abilities() {
        let state = MatchState::new(Difficulty::Hard);
        assert!(!state.player.enable_abilities);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = MatchState::new(Difficulty::Easy);
        state.player.position.x = 4.0;
        state.player.cooldowns.dash = 3.0;
        state.chaser.position.x = -2.0;
        state.chaser.stun(2.0);
        state.wave.spawn(state.player.position);
        state.elapsed = 42.0;
        state.phase = MatchPhase::Caught;

        state.restart();
        assert_eq!(state.player.position, PLAYER_START);
        assert_eq!(state.player.dash_cooldown(), 0.0);
        assert_eq!(state.chaser.position, CHASER_START);
        assert!(!state.chaser.is_stunned());
        assert!(!state.wave.active);
        assert_eq!(state.elapsed, 0.0);
        assert_eq!(state.phase, MatchPhase::Playing);
    }

    #[test]
    fn test_set_difficulty_restarts() {
        let mut state = MatchState::new(Difficulty::Easy);
        state.elapsed = 10.0;
        state.set_difficulty(Difficulty::Hard);
        assert!(!state.player.enable_abilities);
        assert_eq!(state.elapsed, 0.0);
    }

    #[test]
    fn test_tuning_flows_from_settings() {
        let mut settings = Settings::default();
        settings.tuning.player.speed = 5.0;
        settings.tuning.wave.max_radius = 3.0;
        let state = MatchState::from_settings(&settings);
        assert_eq!(state.player.tuning().speed, 5.0);
        assert_eq!(state.wave.max_radius, 3.0);
    }
}
