//! Read-only views for the renderer and HUD
//!
//! Built after each step; nothing here feeds back into the simulation.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::state::{MatchPhase, MatchState};

/// Where an entity is and how it is spun
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    /// Translation composed with rotation
    pub fn model(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveView {
    pub active: bool,
    pub center: Vec3,
    pub radius: f32,
}

impl WaveView {
    /// Unit ring scaled to the current radius, flat on the ground
    pub fn model(&self) -> Mat4 {
        Mat4::from_translation(self.center)
            * Mat4::from_scale(Vec3::new(self.radius, 1.0, self.radius))
    }
}

/// HUD numbers, already rounded for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudView {
    /// Whole seconds left on the match clock
    pub time_left: u32,
    /// Ability icons are hidden in hard mode
    pub show_abilities: bool,
    pub dash_cooldown: u32,
    pub super_jump_cooldown: u32,
    pub dash_ready: bool,
    pub super_jump_ready: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub player: Pose,
    pub chaser: Pose,
    pub wave: WaveView,
    pub hud: HudView,
    pub phase: MatchPhase,
}

impl FrameSnapshot {
    pub fn capture(state: &MatchState) -> Self {
        let player = &state.player;
        let show_abilities = player.enable_abilities;

        // Renderers draw the ring only while `active`
        let wave = WaveView {
            active: show_abilities && state.wave.active,
            center: state.wave.center,
            radius: state.wave.radius,
        };

        let hud = HudView {
            time_left: state.time_left().floor() as u32,
            show_abilities,
            dash_cooldown: player.dash_cooldown().floor() as u32,
            super_jump_cooldown: player.super_jump_cooldown().floor() as u32,
            dash_ready: player.dash_cooldown() <= 0.0,
            super_jump_ready: player.super_jump_cooldown() <= 0.0,
        };

        Self {
            player: Pose {
                position: player.position,
                rotation: player.roll_rotation(),
            },
            chaser: Pose {
                position: state.chaser.position,
                rotation: state.chaser.roll_rotation(),
            },
            wave,
            hud,
            phase: state.phase,
        }
    }
}
