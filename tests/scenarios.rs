//! End-to-end gameplay scenarios

use arena_chase::Difficulty;
use arena_chase::consts::*;
use arena_chase::planar;
use arena_chase::sim::{
    Arena, Chaser, ChaserMode, FrameSnapshot, KeyState, MatchPhase, MatchState, TickInput, Wave,
    step, tick,
};
use arena_chase::tuning::ChaserTuning;
use glam::{Vec2, Vec3};

const FWD: Vec3 = Vec3::NEG_Z;
const RIGHT: Vec3 = Vec3::X;

fn hold(keys: KeyState) -> TickInput {
    TickInput {
        keys,
        look: Vec2::ZERO,
    }
}

#[test]
fn forward_for_one_second_moves_three_units() {
    let mut state = MatchState::new(Difficulty::Easy);
    let keys = KeyState {
        forward: true,
        ..Default::default()
    };
    step(&mut state, &keys, FWD, RIGHT, 1.0);
    assert!((planar(state.player.position).length() - 3.0).abs() < 1e-4);
    assert!(state.player.position.z < 0.0);
}

#[test]
fn chaser_far_from_wave_uses_base_speed() {
    let mut wave = Wave::default();
    wave.spawn(Vec3::new(0.0, GROUND_Y, 0.0));
    wave.radius = 5.0;
    let mut chaser = Chaser::new(Vec3::new(12.0, GROUND_Y, 0.0), &ChaserTuning::default());
    // Player 3 units ahead of the chaser, away from the wave
    chaser.update(Vec3::new(12.0, GROUND_Y, 3.0), 0.1, &wave, &Arena::default());
    assert_eq!(chaser.mode, ChaserMode::Pursuing);
    assert!((chaser.speed - chaser.base_speed).abs() < 1e-6);
}

#[test]
fn chaser_inside_wave_does_not_move() {
    let mut wave = Wave::default();
    wave.spawn(Vec3::new(0.0, GROUND_Y, 0.0));
    wave.radius = 5.0;
    let start = Vec3::new(0.0, GROUND_Y, 4.0);
    let mut chaser = Chaser::new(start, &ChaserTuning::default());
    chaser.update(Vec3::new(0.0, GROUND_Y, -4.0), 0.1, &wave, &Arena::default());
    assert_eq!(chaser.speed, 0.0);
    assert_eq!(chaser.position, start);
}

#[test]
fn wave_full_size_after_one_second() {
    let mut wave = Wave::default();
    wave.spawn(Vec3::ZERO);
    wave.update(1.0);
    assert!(wave.radius >= 5.0);
    assert!(!wave.active);
}

#[test]
fn super_jump_wave_stuns_nearby_chaser() {
    // Chaser sits between the player and the wall, so fleeing the wave
    // only pins it against the wall
    let mut state = MatchState::new(Difficulty::Easy);
    state.player.position = Vec3::new(7.0, GROUND_Y, 0.0);
    state.chaser.position = Vec3::new(8.9, GROUND_Y, 0.0);

    let super_jump = KeyState {
        super_jump: true,
        ..Default::default()
    };
    // Keep the chaser out of the way while the player is airborne
    state.chaser.stun(10.0);
    tick(&mut state, &hold(super_jump), 0.01);
    assert!(state.player.super_jump_used());

    let mut spawned = 0;
    let mut stunned = false;
    for _ in 0..400 {
        let events = tick(&mut state, &hold(KeyState::default()), 0.01);
        if events.wave_spawned {
            spawned += 1;
            // Release the chaser so the wave decides what happens next
            state.chaser.stun_time = 0.0;
        }
        stunned |= events.chaser_stunned;
        if spawned > 0 && !state.wave.active {
            break;
        }
    }
    assert_eq!(spawned, 1);
    assert!(stunned);
    assert!(state.chaser.is_stunned());
    assert!(state.player.super_jump_cooldown() > 10.0);
    assert_eq!(state.phase, MatchPhase::Playing);
}

#[test]
fn standing_still_gets_caught() {
    let mut state = MatchState::new(Difficulty::Hard);
    let mut outcome = None;
    for _ in 0..(60 * 60) {
        let events = tick(&mut state, &TickInput::default(), 1.0 / 60.0);
        if events.outcome.is_some() {
            outcome = events.outcome;
            break;
        }
    }
    assert_eq!(outcome, Some(MatchPhase::Caught));
    assert!(state.elapsed < 10.0);
    assert!(state.separation() < CATCH_DISTANCE);
}

#[test]
fn frozen_chaser_means_survival() {
    let mut state = MatchState::new(Difficulty::Easy);
    let mut frames = 0;
    while !state.phase.is_over() {
        state.chaser.stun(WAVE_STUN_DURATION);
        tick(&mut state, &TickInput::default(), 0.5);
        frames += 1;
        assert!(frames <= 121);
    }
    assert_eq!(state.phase, MatchPhase::Survived);
    let snap = FrameSnapshot::capture(&state);
    assert_eq!(snap.hud.time_left, 0);
    assert_eq!(snap.phase, MatchPhase::Survived);
}

#[test]
fn large_frame_stall_does_not_corrupt_state() {
    let mut state = MatchState::new(Difficulty::Easy);
    let keys = KeyState {
        forward: true,
        jump: true,
        ..Default::default()
    };
    step(&mut state, &keys, FWD, RIGHT, 5.0);
    step(&mut state, &KeyState::default(), FWD, RIGHT, 5.0);
    assert!(state.player.position.is_finite());
    assert!(state.chaser.position.is_finite());
    assert!(planar(state.player.position).length() <= 9.0 + 1e-3);
    assert_eq!(state.player.position.y, GROUND_Y);
    assert!(!state.player.is_jumping());
}

#[test]
fn identical_inputs_are_deterministic() {
    let inputs = [
        KeyState {
            forward: true,
            ..Default::default()
        },
        KeyState {
            left: true,
            jump: true,
            ..Default::default()
        },
        KeyState::default(),
        KeyState {
            dash: true,
            ..Default::default()
        },
        KeyState {
            back: true,
            super_jump: true,
            ..Default::default()
        },
    ];

    let mut a = MatchState::new(Difficulty::Easy);
    let mut b = MatchState::new(Difficulty::Easy);
    for i in 0..300 {
        let keys = inputs[(i / 20) % inputs.len()];
        let input = TickInput {
            keys,
            look: Vec2::new(((i % 7) as f32) - 3.0, 0.0),
        };
        tick(&mut a, &input, 1.0 / 60.0);
        tick(&mut b, &input, 1.0 / 60.0);
    }
    assert_eq!(a.frames, b.frames);
    assert_eq!(a.phase, b.phase);
    assert_eq!(a.player.position, b.player.position);
    assert_eq!(a.chaser.position, b.chaser.position);
    assert_eq!(a.wave.radius, b.wave.radius);
}

#[test]
fn restart_after_catch_plays_again() {
    let mut state = MatchState::new(Difficulty::Easy);
    state.chaser.position = state.player.position + Vec3::new(0.5, 0.0, 0.0);
    let events = tick(&mut state, &TickInput::default(), 0.01);
    assert_eq!(events.outcome, Some(MatchPhase::Caught));

    state.restart();
    assert_eq!(state.phase, MatchPhase::Playing);
    let events = tick(&mut state, &TickInput::default(), 0.01);
    assert_eq!(events.outcome, None);
    assert_eq!(state.frames, 1);
}
