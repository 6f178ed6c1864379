//! Third-person orbit camera
//!
//! Supplies the forward/right vectors that make player movement
//! camera-relative. The eye position is kept inside the arena wall for
//! framing only; gameplay never reads it.

use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::arena::Arena;

/// Eye is kept this far from the wall face
const EYE_RADIUS: f32 = 0.5;
/// Eye sits this far above the look target
const EYE_HEIGHT: f32 = 3.0;
/// The camera looks at a point this far above the player's center
const TARGET_LIFT: f32 = 0.5;
const PITCH_LIMIT: f32 = 45.0;
/// Mouse delta to degrees, before sensitivity
const LOOK_SCALE: f32 = 0.2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbitCamera {
    /// Degrees; -90 looks down -Z
    pub yaw: f32,
    /// Degrees, clamped to ±45
    pub pitch: f32,
    /// Distance behind the target before wall clamping
    pub distance: f32,
    pub sensitivity: f32,
    pub target: Vec3,
    pub position: Vec3,
    front: Vec3,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl OrbitCamera {
    pub fn new(sensitivity: f32) -> Self {
        let mut camera = Self {
            yaw: -90.0,
            pitch: -15.0,
            distance: 7.0,
            sensitivity,
            target: Vec3::new(0.0, TARGET_LIFT, 0.0),
            position: Vec3::ZERO,
            front: Vec3::NEG_Z,
        };
        camera.update_view(&Arena::default());
        camera
    }

    /// Apply a mouse delta (screen pixels, +y = up)
    pub fn look(&mut self, delta: Vec2) {
        let scale = LOOK_SCALE * self.sensitivity;
        self.yaw += delta.x * scale;
        self.pitch = (self.pitch + delta.y * scale).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Aim at the player
    pub fn follow(&mut self, player_pos: Vec3) {
        self.target = player_pos + Vec3::new(0.0, TARGET_LIFT, 0.0);
    }

    /// Recompute facing and eye position from yaw/pitch and target
    pub fn update_view(&mut self, arena: &Arena) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos())
            .normalize_or(Vec3::NEG_Z);

        let mut desired = self.target - self.front * self.distance;
        desired.y = self.target.y + EYE_HEIGHT;
        self.position = arena.clamp_position(desired, EYE_RADIUS);
    }

    /// Facing direction (includes pitch)
    pub fn forward(&self) -> Vec3 {
        self.front
    }

    /// Screen-right direction on the ground plane
    pub fn right(&self) -> Vec3 {
        self.front.cross(Vec3::Y).normalize_or(Vec3::X)
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }
}
