//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One synchronous step per frame, driven by the caller's dt
//! - No rendering, input polling or platform dependencies
//! - Infallible; degenerate vectors and timers are guarded numerically

pub mod arena;
pub mod camera;
pub mod chaser;
pub mod player;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod wave;

pub use arena::Arena;
pub use camera::OrbitCamera;
pub use chaser::{Chaser, ChaserMode};
pub use player::{AbilityCooldowns, Burst, KeyState, Locomotion, Player, Roll, Vertical};
pub use snapshot::{FrameSnapshot, HudView, Pose, WaveView};
pub use state::{MatchPhase, MatchState};
pub use tick::{StepEvents, TickInput, step, tick};
pub use wave::Wave;
