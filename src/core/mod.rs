//! Core module - pure game logic with no external dependencies
//!
//! Everything here is driven by millisecond timestamps handed in by the
//! caller, so the model can be stepped over simulated time in tests.
//! The only I/O lives in `FrameClock`, which sleeps to pace real frames.

pub mod bird;
pub mod clock;
pub mod game;
pub mod pipe;
pub mod speed;

pub use bird::Bird;
pub use clock::FrameClock;
pub use game::Game;
pub use pipe::Pipe;
pub use speed::{GameSpeed, ListenerToken, SpeedListener};
