//! Bird kinematics.
//!
//! Position is never integrated frame by frame; it is evaluated from a
//! closed-form projectile formula anchored at the last swing. A swing
//! re-baselines the formula at the current position, which keeps position
//! continuous while velocity jumps to the fixed impulse value.

use crate::types::{GRAVITY_ACCELERATION, SWING_VELOCITY, WORLD_HEIGHT};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    /// Vertical position at the reference time.
    y0: f64,
    /// Reference time of the last impulse (or creation).
    t0_ms: u64,
    /// Upward velocity at the reference time: zero until the first swing,
    /// `SWING_VELOCITY` afterwards.
    v0: f64,
}

impl Bird {
    /// A fresh bird at mid-screen, at rest.
    pub fn new(now_ms: u64) -> Self {
        Self {
            y0: WORLD_HEIGHT / 2.0,
            t0_ms: now_ms,
            v0: 0.0,
        }
    }

    /// Pure query: the projectile formula evaluated at `now_ms`.
    pub fn position_at(&self, now_ms: u64) -> f64 {
        let dt = now_ms.saturating_sub(self.t0_ms) as f64 / 1000.0;
        self.y0 - self.v0 * dt + 0.5 * GRAVITY_ACCELERATION * dt * dt
    }

    /// Apply the upward impulse: anchor the formula at the current position
    /// and replace whatever velocity had accumulated with the fixed swing
    /// velocity. The velocity change is instantaneous by design.
    pub fn swing(&mut self, now_ms: u64) {
        self.y0 = self.position_at(now_ms);
        self.t0_ms = now_ms;
        self.v0 = SWING_VELOCITY;
    }

    #[cfg(test)]
    pub(crate) fn at_y(y: f64, now_ms: u64) -> Self {
        Self {
            y0: y,
            t0_ms: now_ms,
            v0: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn unswung_bird_falls_under_pure_gravity() {
        let bird = Bird::new(0);
        for t in [0u64, 100, 400, 750] {
            let dt = t as f64 / 1000.0;
            let expected = WORLD_HEIGHT / 2.0 + 0.5 * GRAVITY_ACCELERATION * dt * dt;
            assert!((bird.position_at(t) - expected).abs() < EPS, "t={t}");
        }
    }

    #[test]
    fn position_matches_closed_form_after_a_swing() {
        let mut bird = Bird::new(0);
        bird.swing(250);
        let y_at_swing = bird.position_at(250);

        let t = 250 + 180;
        let dt = 0.180;
        let expected = y_at_swing - SWING_VELOCITY * dt + 0.5 * GRAVITY_ACCELERATION * dt * dt;
        assert!((bird.position_at(t) - expected).abs() < EPS);
    }

    #[test]
    fn swing_is_continuous_in_position() {
        let mut bird = Bird::new(0);
        let before = bird.position_at(420);
        bird.swing(420);
        let after = bird.position_at(420);
        assert!((before - after).abs() < EPS);

        // A second swing at the same instant is idempotent for position.
        bird.swing(420);
        assert!((bird.position_at(420) - after).abs() < EPS);
    }

    #[test]
    fn swinging_every_600ms_returns_to_the_same_height() {
        // With V=600 and G=2000, the projectile returns to its launch height
        // after exactly 2*V/G = 0.6s. Useful as a level-flight schedule.
        let mut bird = Bird::new(0);
        bird.swing(0);
        let start = bird.position_at(0);
        for k in 1..=5u64 {
            let t = k * 600;
            assert!((bird.position_at(t) - start).abs() < 1e-6);
            bird.swing(t);
        }
    }

    #[test]
    fn query_does_not_mutate() {
        let bird = Bird::new(10);
        let a = bird.position_at(500);
        let _ = bird.position_at(900);
        assert!((bird.position_at(500) - a).abs() < EPS);
    }
}
