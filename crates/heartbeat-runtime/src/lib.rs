//! Heartbeat Runtime - frame scheduling
//!
//! - `FrameClock` — fixed-interval accumulator
//! - `Player` — clears the surface and renders increasing frame indices, offline or paced

mod clock;
mod player;

pub use clock::FrameClock;
pub use player::Player;
