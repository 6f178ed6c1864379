//! Per-frame simulation step
//!
//! One call per rendered frame, in a fixed order:
//! player → wave spawn → chaser → wave hit test → wave growth → outcome.
//! `dt` is the wall-clock frame delta and is not clamped here.

use glam::{Vec2, Vec3};

use super::player::KeyState;
use super::state::{MatchPhase, MatchState};
use crate::consts::*;

/// Input for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Keys held this frame
    pub keys: KeyState,
    /// Mouse movement since the last frame (pixels, +y = up)
    pub look: Vec2,
}

/// What happened during a step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepEvents {
    /// A super-jump landed and a new wave started
    pub wave_spawned: bool,
    /// The wave touched the chaser this frame
    pub chaser_stunned: bool,
    /// Set on the frame the match ends
    pub outcome: Option<MatchPhase>,
}

/// Advance the match using the owned orbit camera for movement directions
pub fn tick(state: &mut MatchState, input: &TickInput, dt: f32) -> StepEvents {
    if state.phase.is_over() {
        return StepEvents::default();
    }

    state.camera.look(input.look);
    state.camera.update_view(&state.arena);
    let forward = state.camera.forward();
    let right = state.camera.right();

    let events = step(state, &input.keys, forward, right, dt);

    state.camera.follow(state.player.position);
    state.camera.update_view(&state.arena);
    events
}

/// Advance the match with camera vectors supplied by the caller
pub fn step(
    state: &mut MatchState,
    keys: &KeyState,
    camera_forward: Vec3,
    camera_right: Vec3,
    dt: f32,
) -> StepEvents {
    let mut events = StepEvents::default();
    if state.phase.is_over() {
        return events;
    }

    state.frames += 1;
    state.elapsed += dt;

    state
        .player
        .update(keys, camera_forward, camera_right, dt, &state.arena);

    if state.player.wave_triggered() {
        state.wave.spawn(state.player.position);
        state.player.reset_wave();
        events.wave_spawned = true;
        log::info!("Wave spawned at {:?}", state.wave.center);
    }

    state
        .chaser
        .update(state.player.position, dt, &state.wave, &state.arena);

    if state.wave.hit(state.chaser.position) {
        if !state.chaser.is_stunned() {
            log::debug!("Chaser stunned at {:?}", state.chaser.position);
        }
        state.chaser.stun(WAVE_STUN_DURATION);
        events.chaser_stunned = true;
    }

    state.wave.update(dt);

    if state.separation() < CATCH_DISTANCE {
        state.phase = MatchPhase::Caught;
        events.outcome = Some(MatchPhase::Caught);
        log::info!("Caught after {:.1}s", state.elapsed);
    } else if state.elapsed >= MATCH_DURATION {
        state.phase = MatchPhase::Survived;
        events.outcome = Some(MatchPhase::Survived);
        log::info!("Survived {:.0}s", MATCH_DURATION);
    }

    events
}
