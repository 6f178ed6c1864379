//! Data-driven game balance
//!
//! Every gameplay constant lives here so a settings file can override a
//! subset without touching code. Defaults reproduce the shipped feel.

use serde::{Deserialize, Serialize};

/// Player locomotion and ability constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Walk speed (units/s)
    pub speed: f32,
    /// Downward acceleration while airborne (units/s²)
    pub gravity: f32,
    /// Launch velocity of a normal jump
    pub jump_power: f32,
    /// Launch velocity of a super-jump
    pub super_jump_power: f32,
    /// Length of one full roll spin (seconds)
    pub roll_dur: f32,
    /// Roll wind-down window after movement stops (seconds)
    pub stop_roll_dur: f32,
    /// Steering rate toward the input direction (per second)
    pub turn_rate: f32,
    /// Dash duration (seconds)
    pub dash_dur: f32,
    /// Dash speed multiplier over walk speed
    pub dash_speed: f32,
    pub max_dash_cool: f32,
    pub max_super_jump_cool: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: 3.0,
            gravity: 9.8,
            jump_power: 4.0,
            super_jump_power: 10.0,
            roll_dur: 1.0,
            stop_roll_dur: 0.2,
            turn_rate: 10.0,
            dash_dur: 0.2,
            dash_speed: 12.0,
            max_dash_cool: 8.0,
            max_super_jump_cool: 15.0,
        }
    }
}

/// Chaser pursuit constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaserTuning {
    /// Speed reported before the first update
    pub initial_speed: f32,
    pub base_speed: f32,
    /// Multiplier when the player is within `close_range`
    pub close_burst: f32,
    pub close_range: f32,
    /// Multiplier when the player is farther than `catch_up_range` from
    /// the chaser's previous-frame position
    pub catch_up_burst: f32,
    pub catch_up_range: f32,
    /// Multiplier while fleeing an approaching wave front
    pub flee_burst: f32,
    /// Distance from the wave front that triggers fleeing
    pub flee_range: f32,
    /// Cosmetic spin rate (rad/s)
    pub spin_rate: f32,
}

impl Default for ChaserTuning {
    fn default() -> Self {
        Self {
            initial_speed: 2.5,
            base_speed: 2.6,
            close_burst: 2.0,
            close_range: 2.0,
            catch_up_burst: 2.5,
            catch_up_range: 5.0,
            flee_burst: 3.2,
            flee_range: 2.0,
            spin_rate: 3.0,
        }
    }
}

/// Wave area-effect constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveTuning {
    pub max_radius: f32,
    /// Radius growth (units/s)
    pub grow_speed: f32,
}

impl Default for WaveTuning {
    fn default() -> Self {
        Self {
            max_radius: 5.0,
            grow_speed: 5.0,
        }
    }
}

/// All balance knobs
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player: PlayerTuning,
    pub chaser: ChaserTuning,
    pub wave: WaveTuning,
}
