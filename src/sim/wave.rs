//! Wave area effect
//!
//! Spawned where a super-jump lands. Grows as a filled disc and stuns the
//! chaser on contact until it reaches full size.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::tuning::WaveTuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wave {
    /// Player position at the moment of landing
    pub center: Vec3,
    /// Current radius, in [0, max_radius]
    pub radius: f32,
    /// True only while growing
    pub active: bool,
    pub max_radius: f32,
    pub grow_speed: f32,
}

impl Default for Wave {
    fn default() -> Self {
        Self::new(&WaveTuning::default())
    }
}

impl Wave {
    pub fn new(tuning: &WaveTuning) -> Self {
        Self {
            center: Vec3::ZERO,
            radius: 0.0,
            active: false,
            max_radius: tuning.max_radius,
            grow_speed: tuning.grow_speed,
        }
    }

    /// Start a new wave, replacing any wave still in flight
    pub fn spawn(&mut self, center: Vec3) {
        self.center = center;
        self.radius = 0.0;
        self.active = true;
    }

    /// Grow the wave; deactivates on the update that reaches full size
    pub fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.radius += self.grow_speed * dt;
        if self.radius >= self.max_radius {
            self.radius = self.max_radius;
            self.active = false;
        }
    }

    /// Whether `pos` lies inside the growing disc
    pub fn hit(&self, pos: Vec3) -> bool {
        self.active && self.center.distance(pos) <= self.radius
    }

    /// Signed distance from `pos` to the wave front (negative = inside)
    #[inline]
    pub fn front_distance(&self, pos: Vec3) -> f32 {
        self.center.distance(pos) - self.radius
    }

    pub fn clear(&mut self) {
        self.radius = 0.0;
        self.active = false;
    }
}
