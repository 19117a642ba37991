//! Core types shared across the application
//! This module contains pure constants and data types with no external dependencies

/// World dimensions in world units (the canvas the game logic thinks in).
/// The terminal view scales this onto whatever viewport is available.
pub const WORLD_WIDTH: f64 = 800.0;
pub const WORLD_HEIGHT: f64 = 600.0;

/// Frame pacing
pub const FRAMES_PER_SECOND: u32 = 60;

/// Horizontal scroll speed (world units per second)
pub const BASE_SPEED: f64 = 300.0;
/// Added to the scroll speed at every score milestone
pub const SPEED_INCREMENT: f64 = 2.0;
/// A milestone is every multiple of this score
pub const SPEED_UP_EVERY: u32 = 10;

/// Pipe geometry
pub const PIPE_WIDTH: f64 = 50.0;
pub const GAP_SIZE: f64 = 200.0;
pub const MIN_GAP_BOTTOM_Y: i32 = 200;
pub const MAX_GAP_BOTTOM_Y: i32 = 500;
/// A new pipe spawns once the newest pipe has scrolled this far
pub const GAP_BETWEEN_PIPES: f64 = 300.0;

/// Bird kinematics
pub const BIRD_RADIUS: f64 = 30.0;
pub const GRAVITY_ACCELERATION: f64 = 2000.0;
pub const SWING_VELOCITY: f64 = 600.0;
/// The bird's fixed horizontal position as a fraction of the world width
pub const BIRD_X_FRACTION: f64 = 0.3;

/// The bird's fixed horizontal position in world units
pub fn bird_x() -> f64 {
    WORLD_WIDTH * BIRD_X_FRACTION
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// The single upward impulse applied to the bird
    Flap,
}
