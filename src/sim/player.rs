//! Player locomotion and abilities
//!
//! The player's state is split into independent slots that advance together
//! every frame:
//! - locomotion: whether any direction key is held (edge-tracked)
//! - roll: the continuous spin tied to movement, with a short wind-down
//! - vertical: grounded, jumping or super-jumping
//! - burst: ready or dashing
//!
//! Dash and super-jump never overlap; each refuses to start while the other
//! is in progress.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use crate::consts::{ENTITY_RADIUS, GROUND_Y};
use crate::tuning::PlayerTuning;

/// Direction vectors shorter than this are treated as "no direction"
const MIN_DIR_LENGTH: f32 = 0.001;

/// Keys held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub super_jump: bool,
    pub dash: bool,
}

impl KeyState {
    /// Any of the four direction keys is held
    pub fn any_direction(&self) -> bool {
        self.forward || self.back || self.left || self.right
    }

    /// Combined camera-relative direction (not normalized, may be zero)
    pub fn direction(&self, camera_forward: Vec3, camera_right: Vec3) -> Vec3 {
        let mut dir = Vec3::ZERO;
        if self.forward {
            dir += camera_forward;
        }
        if self.back {
            dir -= camera_forward;
        }
        if self.right {
            dir += camera_right;
        }
        if self.left {
            dir -= camera_right;
        }
        dir
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locomotion {
    Idle,
    Moving,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Roll {
    Still,
    /// Spin cycle position in [0, roll_dur)
    Spinning { time: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Vertical {
    Grounded,
    Jumping { velocity: f32 },
    /// Landing spawns a wave
    SuperJumping { velocity: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Burst {
    Ready,
    Dashing { elapsed: f32 },
}

/// Seconds until each ability can be used again (never negative)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AbilityCooldowns {
    pub dash: f32,
    pub super_jump: f32,
}

impl AbilityCooldowns {
    fn tick(&mut self, dt: f32) {
        self.dash = (self.dash - dt).max(0.0);
        self.super_jump = (self.super_jump - dt).max(0.0);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec3,
    /// Steered planar heading
    pub roll_dir: Vec3,
    /// Last heading long enough to define a roll axis
    pub last_valid_roll_dir: Vec3,
    pub locomotion: Locomotion,
    pub roll: Roll,
    pub vertical: Vertical,
    pub burst: Burst,
    pub cooldowns: AbilityCooldowns,
    /// Dash, super-jump and cooldown decay (off in hard mode)
    pub enable_abilities: bool,
    /// Player clock time of the last start/stop of movement
    pub last_move_time: f32,
    wave_triggered: bool,
    clock: f32,
    tuning: PlayerTuning,
}

impl Player {
    pub fn new(start: Vec3, enable_abilities: bool, tuning: &PlayerTuning) -> Self {
        Self {
            position: start,
            roll_dir: Vec3::ZERO,
            last_valid_roll_dir: Vec3::ZERO,
            locomotion: Locomotion::Idle,
            roll: Roll::Still,
            vertical: Vertical::Grounded,
            burst: Burst::Ready,
            cooldowns: AbilityCooldowns::default(),
            enable_abilities,
            last_move_time: 0.0,
            wave_triggered: false,
            clock: 0.0,
            tuning: *tuning,
        }
    }

    /// Restore a fresh player for a new match
    pub fn reset(&mut self, start: Vec3, enable_abilities: bool) {
        *self = Self::new(start, enable_abilities, &self.tuning);
    }

    pub fn tuning(&self) -> &PlayerTuning {
        &self.tuning
    }

    /// Toggle abilities; disabling cancels a dash in progress
    pub fn set_abilities_enabled(&mut self, enabled: bool) {
        self.enable_abilities = enabled;
        if !enabled {
            self.burst = Burst::Ready;
        }
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.locomotion == Locomotion::Moving
    }

    #[inline]
    pub fn is_rolling(&self) -> bool {
        matches!(self.roll, Roll::Spinning { .. })
    }

    #[inline]
    pub fn is_jumping(&self) -> bool {
        !matches!(self.vertical, Vertical::Grounded)
    }

    /// The jump in progress is a super-jump
    #[inline]
    pub fn super_jump_used(&self) -> bool {
        matches!(self.vertical, Vertical::SuperJumping { .. })
    }

    #[inline]
    pub fn is_dashing(&self) -> bool {
        matches!(self.burst, Burst::Dashing { .. })
    }

    pub fn roll_time(&self) -> f32 {
        match self.roll {
            Roll::Still => 0.0,
            Roll::Spinning { time } => time,
        }
    }

    pub fn jump_velocity(&self) -> f32 {
        match self.vertical {
            Vertical::Grounded => 0.0,
            Vertical::Jumping { velocity } | Vertical::SuperJumping { velocity } => velocity,
        }
    }

    pub fn dash_cooldown(&self) -> f32 {
        self.cooldowns.dash
    }

    pub fn super_jump_cooldown(&self) -> f32 {
        self.cooldowns.super_jump
    }

    /// Set when a super-jump lands; stays set until `reset_wave`
    pub fn wave_triggered(&self) -> bool {
        self.wave_triggered
    }

    pub fn reset_wave(&mut self) {
        self.wave_triggered = false;
    }

    /// Advance one frame
    pub fn update(
        &mut self,
        keys: &KeyState,
        camera_forward: Vec3,
        camera_right: Vec3,
        dt: f32,
        arena: &Arena,
    ) {
        self.clock += dt;

        let mut dir = keys.direction(camera_forward, camera_right);
        dir.y = 0.0;
        self.track_movement(keys.any_direction(), dir);

        if self.is_moving() && !self.is_dashing() {
            self.walk(dir, dt, arena);
        } else if self.is_rolling() {
            self.wind_down_roll(dt);
        }

        self.advance_dash(camera_forward, dt, arena);
        self.start_jump(keys);
        self.integrate_vertical(dt);
        self.start_dash(keys);

        if self.enable_abilities {
            self.cooldowns.tick(dt);
        }
    }

    /// Handle start/stop of movement
    fn track_movement(&mut self, moving_now: bool, dir: Vec3) {
        if moving_now == self.is_moving() {
            return;
        }
        self.last_move_time = self.clock;
        if moving_now {
            self.locomotion = Locomotion::Moving;
            self.roll = Roll::Spinning { time: 0.0 };
            if dir.length() > MIN_DIR_LENGTH {
                self.roll_dir = dir.normalize();
            }
        } else {
            self.locomotion = Locomotion::Idle;
        }
    }

    /// Steer toward `dir`, move, and spin
    fn walk(&mut self, dir: Vec3, dt: f32, arena: &Arena) {
        // Opposite keys cancel out
        if dir.length() <= MIN_DIR_LENGTH {
            return;
        }
        let dir = dir.normalize();

        let t = (self.tuning.turn_rate * dt).min(1.0);
        self.roll_dir = self.roll_dir.lerp(dir, t);
        if self.roll_dir.length() > 0.9 {
            self.last_valid_roll_dir = self.roll_dir;
        }

        let next = self.position + dir * self.tuning.speed * dt;
        self.position = arena.clamp_position(next, ENTITY_RADIUS);

        if let Roll::Spinning { time } = self.roll {
            let roll_dur = self.tuning.roll_dur;
            let mut time = time + dt;
            if time >= roll_dur {
                time = time.rem_euclid(roll_dur);
            }
            self.roll = Roll::Spinning { time };
        }
    }

    fn wind_down_roll(&mut self, dt: f32) {
        if let Roll::Spinning { time } = self.roll {
            let time = time + dt;
            self.roll = if time >= self.tuning.stop_roll_dur {
                Roll::Still
            } else {
                Roll::Spinning { time }
            };
        }
    }

    fn advance_dash(&mut self, camera_forward: Vec3, dt: f32, arena: &Arena) {
        let Burst::Dashing { elapsed } = self.burst else {
            return;
        };
        let elapsed = elapsed + dt;
        if elapsed >= self.tuning.dash_dur {
            self.burst = Burst::Ready;
            self.cooldowns.dash = self.tuning.max_dash_cool;
            log::debug!("Dash finished at {:?}", self.position);
            return;
        }
        self.burst = Burst::Dashing { elapsed };

        let heading = Vec3::new(camera_forward.x, 0.0, camera_forward.z);
        if heading.length() <= MIN_DIR_LENGTH {
            return;
        }
        let step = heading.normalize() * self.tuning.speed * self.tuning.dash_speed * dt;
        self.position = arena.clamp_position(self.position + step, ENTITY_RADIUS);
    }

    fn start_jump(&mut self, keys: &KeyState) {
        if self.is_jumping() {
            return;
        }
        if keys.jump {
            self.vertical = Vertical::Jumping {
                velocity: self.tuning.jump_power,
            };
        } else if keys.super_jump
            && self.enable_abilities
            && self.cooldowns.super_jump <= 0.0
            && !self.is_dashing()
        {
            self.vertical = Vertical::SuperJumping {
                velocity: self.tuning.super_jump_power,
            };
            log::debug!("Super-jump from {:?}", self.position);
        }
    }

    fn integrate_vertical(&mut self, dt: f32) {
        let (velocity, is_super) = match self.vertical {
            Vertical::Grounded => {
                self.position.y = GROUND_Y;
                return;
            }
            Vertical::Jumping { velocity } => (velocity, false),
            Vertical::SuperJumping { velocity } => (velocity, true),
        };

        self.position.y += velocity * dt;
        let velocity = velocity - self.tuning.gravity * dt;

        if self.position.y > GROUND_Y {
            self.vertical = if is_super {
                Vertical::SuperJumping { velocity }
            } else {
                Vertical::Jumping { velocity }
            };
            return;
        }

        self.position.y = GROUND_Y;
        self.vertical = Vertical::Grounded;
        if is_super && self.enable_abilities {
            self.wave_triggered = true;
            self.cooldowns.super_jump = self.tuning.max_super_jump_cool;
            log::debug!("Super-jump landed at {:?}", self.position);
        }
    }

    fn start_dash(&mut self, keys: &KeyState) {
        if keys.dash
            && self.enable_abilities
            && !self.is_dashing()
            && !self.is_rolling()
            && !self.super_jump_used()
            && self.cooldowns.dash <= 0.0
        {
            self.burst = Burst::Dashing { elapsed: 0.0 };
            log::debug!("Dash from {:?}", self.position);
        }
    }

    /// Spin of the roll animation
    pub fn roll_rotation(&self) -> Quat {
        let Roll::Spinning { time } = self.roll else {
            return Quat::IDENTITY;
        };
        let angle = (360.0 * time / self.tuning.roll_dur).to_radians();
        let mut axis = Vec3::Y.cross(self.last_valid_roll_dir);
        if axis.length() < 0.1 {
            axis = Vec3::X;
        }
        Quat::from_axis_angle(axis.normalize(), angle)
    }

    /// Model transform: translation composed with the roll spin
    pub fn pose(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.roll_rotation(), self.position)
    }
}
