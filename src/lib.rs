//! Arena Chase - evade the chaser inside a circular arena
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (player abilities, chaser AI, wave, arena boundary)
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences (difficulty, mouse sensitivity)

pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{Difficulty, Settings, SettingsError};
pub use tuning::Tuning;

use glam::{Vec2, Vec3};

/// Game configuration constants
pub mod consts {
    use glam::Vec3;

    /// Arena dimensions
    pub const ARENA_RADIUS: f32 = 10.0;
    pub const WALL_THICKNESS: f32 = 0.5;

    /// Collision radius shared by the player and the chaser
    pub const ENTITY_RADIUS: f32 = 0.5;

    /// Resting height of both entities (ground plane + half extent)
    pub const GROUND_Y: f32 = 0.5;

    /// Match ends in the player's favour after this many seconds
    pub const MATCH_DURATION: f32 = 60.0;
    /// Player is caught when the chaser gets closer than this
    pub const CATCH_DISTANCE: f32 = 1.15;

    /// Chaser stun applied on every wave hit (re-armed, never stacked)
    pub const WAVE_STUN_DURATION: f32 = 2.0;

    pub const PLAYER_START: Vec3 = Vec3::new(0.0, GROUND_Y, 0.0);
    pub const CHASER_START: Vec3 = Vec3::new(8.0, GROUND_Y, 8.0);
}

/// Project a world position onto the ground plane (x, z)
#[inline]
pub fn planar(pos: Vec3) -> Vec2 {
    Vec2::new(pos.x, pos.z)
}

/// Convert polar (r, theta) to planar (x, z)
#[inline]
pub fn polar_to_planar(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert planar (x, z) to polar (r, theta)
#[inline]
pub fn planar_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}
