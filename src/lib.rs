//! Terminal Flappy Bird.
//!
//! `core` holds the pure game model (kinematics, scoring, collision) driven
//! entirely by millisecond timestamps, `term` renders it into a framebuffer
//! flushed through a diffing terminal backend, and `input` maps key events
//! to game actions.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
