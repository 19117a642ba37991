//! Terminal rendering module.
//!
//! The game draws into an in-memory framebuffer of styled character cells;
//! `GameView` is a pure projection of the game model into that buffer, and
//! `TerminalRenderer` diffs consecutive frames and flushes only what
//! changed. `core` stays free of I/O.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
