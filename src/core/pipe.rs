//! Pipe kinematics.
//!
//! Like the bird, a pipe never integrates per frame: its traveled distance
//! is a closed-form function of wall-clock time. A speed change freezes the
//! distance covered so far into an accumulator and restarts the formula at
//! the new speed, so the on-screen position is continuous across the change.

use rand::Rng;

use crate::core::speed::{ListenerToken, SpeedListener};
use crate::types::{
    GAP_SIZE, MAX_GAP_BOTTOM_Y, MIN_GAP_BOTTOM_Y, PIPE_WIDTH, WORLD_HEIGHT, WORLD_WIDTH,
};

#[derive(Debug)]
pub struct Pipe {
    /// Bottom edge of the passable gap, fixed at spawn.
    gap_bottom_y: f64,
    /// Reference time: spawn, or the last speed change.
    reference_ms: u64,
    /// Distance accumulated before the last speed change.
    passed_distance: f64,
    /// Horizontal speed, snapshotted from the shared speed.
    speed: f64,
    /// Scoring flag; transitions false -> true exactly once.
    is_passed: bool,
    /// Registration handle in the speed observer registry.
    token: Option<ListenerToken>,
}

impl Pipe {
    pub fn new(gap_bottom_y: f64, now_ms: u64, speed: f64) -> Self {
        Self {
            gap_bottom_y,
            reference_ms: now_ms,
            passed_distance: 0.0,
            speed,
            is_passed: false,
            token: None,
        }
    }

    /// The only construction path during normal play: a uniformly random
    /// gap-bottom in the fixed range.
    pub fn with_random_gap<R: Rng>(rng: &mut R, now_ms: u64, speed: f64) -> Self {
        let gap_bottom_y = rng.gen_range(MIN_GAP_BOTTOM_Y..=MAX_GAP_BOTTOM_Y);
        Self::new(f64::from(gap_bottom_y), now_ms, speed)
    }

    /// Horizontal distance traveled since spawn, across all speed changes.
    pub fn traveled(&self, now_ms: u64) -> f64 {
        let dt = now_ms.saturating_sub(self.reference_ms) as f64 / 1000.0;
        self.passed_distance + self.speed * dt
    }

    /// The pipe's left edge in world coordinates. The pipe spans
    /// `[leading_x, leading_x + PIPE_WIDTH]`.
    pub fn leading_x(&self, now_ms: u64) -> f64 {
        WORLD_WIDTH - self.traveled(now_ms)
    }

    pub fn gap_bottom_y(&self) -> f64 {
        self.gap_bottom_y
    }

    /// Bottom edge of the top obstacle; the obstacle spans `[0, gap_top_y)`.
    pub fn gap_top_y(&self) -> f64 {
        self.gap_bottom_y - GAP_SIZE
    }

    /// Whether the pipe has fully scrolled off the left edge of the world.
    pub fn is_off_screen(&self, now_ms: u64) -> bool {
        self.traveled(now_ms) > WORLD_WIDTH + PIPE_WIDTH
    }

    pub fn is_passed(&self) -> bool {
        self.is_passed
    }

    pub fn mark_passed(&mut self) {
        self.is_passed = true;
    }

    /// Whether the bird's bounding square collides with either obstacle of
    /// this pipe. Box-vs-box on the bird's bounding square.
    pub fn collides(&self, bird_x: f64, bird_y: f64, radius: f64, now_ms: u64) -> bool {
        let x = self.leading_x(now_ms);
        bird_x + radius > x
            && bird_x - radius < x + PIPE_WIDTH
            && (bird_y - radius < self.gap_top_y() || bird_y + radius > self.gap_bottom_y)
    }

    pub fn token(&self) -> Option<ListenerToken> {
        self.token
    }

    pub fn set_token(&mut self, token: ListenerToken) {
        self.token = Some(token);
    }

    #[cfg(test)]
    pub(crate) fn set_passed_distance(&mut self, distance: f64, now_ms: u64) {
        self.passed_distance = distance;
        self.reference_ms = now_ms;
    }
}

impl SpeedListener for Pipe {
    /// Re-baseline: freeze the distance covered so far, adopt the new
    /// speed, restart the clock. Traveled distance is continuous here.
    fn speed_changed(&mut self, new_speed: f64, now_ms: u64) {
        self.passed_distance = self.traveled(now_ms);
        self.speed = new_speed;
        self.reference_ms = now_ms;
    }
}

/// Vertical extent of a pipe's obstacles given its gap bottom:
/// `[0, gap_bottom - GAP_SIZE)` above and `[gap_bottom, WORLD_HEIGHT)` below.
pub fn obstacle_spans(gap_bottom_y: f64) -> ((f64, f64), (f64, f64)) {
    ((0.0, gap_bottom_y - GAP_SIZE), (gap_bottom_y, WORLD_HEIGHT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const EPS: f64 = 1e-9;

    #[test]
    fn traveled_is_linear_in_time_at_fixed_speed() {
        let pipe = Pipe::new(300.0, 1_000, 300.0);
        assert!((pipe.traveled(1_000) - 0.0).abs() < EPS);
        assert!((pipe.traveled(1_500) - 150.0).abs() < EPS);
        assert!((pipe.traveled(3_000) - 600.0).abs() < EPS);
    }

    #[test]
    fn traveled_is_monotonic() {
        let pipe = Pipe::new(300.0, 0, 300.0);
        let mut last = -1.0;
        for t in (0..5_000).step_by(37) {
            let d = pipe.traveled(t);
            assert!(d >= last);
            last = d;
        }
    }

    #[test]
    fn speed_change_keeps_traveled_distance_continuous() {
        // Speed bumps 300 -> 302 mid-flight; the formula before and after
        // must agree at the instant of change.
        let mut pipe = Pipe::new(300.0, 0, 300.0);
        let before = pipe.traveled(5_000);
        pipe.speed_changed(302.0, 5_000);
        let after = pipe.traveled(5_000);
        assert!((before - after).abs() < EPS);

        // And the new slope applies from the change onwards.
        assert!((pipe.traveled(6_000) - (before + 302.0)).abs() < EPS);
    }

    #[test]
    fn random_gap_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..200 {
            let pipe = Pipe::with_random_gap(&mut rng, 0, 300.0);
            let gap = pipe.gap_bottom_y();
            assert!(gap >= f64::from(MIN_GAP_BOTTOM_Y));
            assert!(gap <= f64::from(MAX_GAP_BOTTOM_Y));
        }
    }

    #[test]
    fn obstacle_spans_match_gap_geometry() {
        let ((top_lo, top_hi), (bot_lo, bot_hi)) = obstacle_spans(300.0);
        assert!((top_lo - 0.0).abs() < EPS);
        assert!((top_hi - 100.0).abs() < EPS);
        assert!((bot_lo - 300.0).abs() < EPS);
        assert!((bot_hi - WORLD_HEIGHT).abs() < EPS);
    }

    #[test]
    fn bird_through_the_gap_does_not_collide() {
        // gapBottomY=300, GAP_SIZE=200 -> obstacles [0,100) and [300,600).
        // Bird centered at y=200 with radius 30 fits: 170 > 100, 230 < 300.
        let mut pipe = Pipe::new(300.0, 0, 300.0);
        pipe.set_passed_distance(WORLD_WIDTH - 230.0, 0);
        let bx = crate::types::bird_x();
        assert!(!pipe.collides(bx, 200.0, 30.0, 0));

        // Clipping the top obstacle does collide.
        assert!(pipe.collides(bx, 120.0, 30.0, 0));
        // As does clipping the bottom one.
        assert!(pipe.collides(bx, 280.0, 30.0, 0));
    }

    #[test]
    fn off_screen_once_fully_past_the_left_edge() {
        let mut pipe = Pipe::new(300.0, 0, 300.0);
        pipe.set_passed_distance(WORLD_WIDTH + PIPE_WIDTH, 0);
        assert!(!pipe.is_off_screen(0));
        pipe.set_passed_distance(WORLD_WIDTH + PIPE_WIDTH + 1.0, 0);
        assert!(pipe.is_off_screen(0));
    }
}
