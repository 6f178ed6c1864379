//! Chaser AI
//!
//! Pursues the player with three speed tiers, flees an approaching wave
//! front, freezes inside it, and sits out a stun after a wave hit.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::wave::Wave;
use crate::consts::{ENTITY_RADIUS, GROUND_Y};
use crate::tuning::ChaserTuning;

/// What the chaser did on its last update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChaserMode {
    /// Frozen by a wave hit
    Stunned,
    /// Standing inside an active wave
    Engulfed,
    /// Running from a wave front that is about to reach it
    Fleeing,
    /// Closing in on the player
    Pursuing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chaser {
    pub position: Vec3,
    /// Position change over the last update divided by its dt
    pub velocity: Vec3,
    /// Cosmetic spin accumulator (radians)
    pub roll_angle: f32,
    pub speed: f32,
    pub base_speed: f32,
    /// Seconds of stun left (never negative)
    pub stun_time: f32,
    pub mode: ChaserMode,
    /// Position at the start of the last movement update
    prev_position: Vec3,
    tuning: ChaserTuning,
}

impl Chaser {
    pub fn new(start: Vec3, tuning: &ChaserTuning) -> Self {
        Self {
            position: start,
            velocity: Vec3::ZERO,
            roll_angle: 0.0,
            speed: tuning.initial_speed,
            base_speed: tuning.base_speed,
            stun_time: 0.0,
            mode: ChaserMode::Pursuing,
            prev_position: start,
            tuning: *tuning,
        }
    }

    pub fn reset(&mut self, start: Vec3) {
        *self = Self::new(start, &self.tuning);
    }

    #[inline]
    pub fn is_stunned(&self) -> bool {
        self.stun_time > 0.0
    }

    /// Stun for `duration` seconds. A hit while stunned re-arms the timer
    pub fn stun(&mut self, duration: f32) {
        self.stun_time = duration.max(0.0);
        self.mode = ChaserMode::Stunned;
    }

    /// Visual spin about the forward (+Z) axis
    pub fn roll_rotation(&self) -> Quat {
        Quat::from_rotation_z(self.roll_angle)
    }

    /// Advance one frame toward `player_pos`
    pub fn update(&mut self, player_pos: Vec3, dt: f32, wave: &Wave, arena: &Arena) {
        self.roll_angle += self.tuning.spin_rate * dt;

        if self.is_stunned() {
            self.stun_time = (self.stun_time - dt).max(0.0);
            self.mode = ChaserMode::Stunned;
            self.velocity = Vec3::ZERO;
            return;
        }

        let to_player = player_pos - self.position;
        let dist = to_player.length();
        let mut dir = to_player.normalize_or_zero();

        let mut fleeing = false;
        if wave.active {
            let wave_dist = wave.front_distance(self.position);
            if wave_dist <= 0.0 {
                self.speed = 0.0;
                self.mode = ChaserMode::Engulfed;
                self.velocity = Vec3::ZERO;
                return;
            }
            if wave_dist < self.tuning.flee_range {
                dir = -dir;
                fleeing = true;
            }
        }

        self.speed = if fleeing {
            self.base_speed * self.tuning.flee_burst
        } else {
            self.pursuit_speed(player_pos, dist)
        };
        self.mode = if fleeing {
            ChaserMode::Fleeing
        } else {
            ChaserMode::Pursuing
        };

        let start = self.position;
        let mut next = start + dir * self.speed * dt;
        next.y = GROUND_Y;
        self.position = arena.clamp_position(next, ENTITY_RADIUS);

        self.velocity = if dt > 0.0 {
            (self.position - start) / dt
        } else {
            Vec3::ZERO
        };
        self.prev_position = start;
    }

    /// Three-tier pursuit speed
    fn pursuit_speed(&self, player_pos: Vec3, dist: f32) -> f32 {
        let t = &self.tuning;
        if dist < t.close_range {
            self.base_speed * t.close_burst
        } else if player_pos.distance(self.prev_position) > t.catch_up_range {
            self.base_speed * t.catch_up_burst
        } else {
            self.base_speed
        }
    }
}
