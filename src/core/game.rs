//! Game state: owns the bird, the pipe queue, the score and the shared
//! speed, and advances them one frame per clock tick.
//!
//! The queue is ordered oldest (leftmost) first: spawns append at the tail,
//! expired pipes pop from the head, so spawn order is position order.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use rand::Rng;

use crate::core::bird::Bird;
use crate::core::pipe::Pipe;
use crate::core::speed::{GameSpeed, SpeedListener};
use crate::types::{bird_x, BIRD_RADIUS, GAP_BETWEEN_PIPES, SPEED_UP_EVERY, WORLD_HEIGHT};

pub struct Game<R: Rng> {
    speed: GameSpeed,
    pipes: VecDeque<Rc<RefCell<Pipe>>>,
    bird: Bird,
    score: u32,
    /// Last score value a speed-up was applied for. Without this guard the
    /// milestone condition would re-fire every frame while the score sits
    /// on a multiple of the threshold.
    last_milestone: u32,
    rng: R,
}

impl<R: Rng> Game<R> {
    pub fn new(rng: R, now_ms: u64) -> Self {
        let mut game = Self {
            speed: GameSpeed::new(),
            pipes: VecDeque::new(),
            bird: Bird::new(now_ms),
            score: 0,
            last_milestone: 0,
            rng,
        };
        game.spawn_pipe(now_ms);
        game
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn pipes(&self) -> &VecDeque<Rc<RefCell<Pipe>>> {
        &self.pipes
    }

    pub fn game_speed(&self) -> &GameSpeed {
        &self.speed
    }

    /// Apply the upward impulse. The binary calls this between frames, so
    /// the bird's formula re-baselines atomically with respect to `step`.
    pub fn swing(&mut self, now_ms: u64) {
        self.bird.swing(now_ms);
    }

    /// One frame transition: scoring, spawn, despawn, milestone speed-up,
    /// collision with in-place reset.
    pub fn step(&mut self, now_ms: u64) {
        let bx = bird_x();

        // Scoring: exactly one event per pipe, the first frame its position
        // has crossed the bird's.
        for pipe in &self.pipes {
            let mut p = pipe.borrow_mut();
            if !p.is_passed() && p.leading_x(now_ms) < bx {
                p.mark_passed();
                self.score += 1;
            }
        }

        // Spawn at the tail once the newest pipe has scrolled far enough.
        // At most one per frame: new pipes materialize at the right edge,
        // so a second same-frame spawn would stack on the same spot.
        let tail_due = self
            .pipes
            .back()
            .map_or(true, |p| p.borrow().traveled(now_ms) > GAP_BETWEEN_PIPES);
        if tail_due {
            self.spawn_pipe(now_ms);
        }

        // Despawn from the head; looped so a long frame cannot strand
        // several fully off-screen pipes.
        loop {
            let expired = match self.pipes.front() {
                Some(head) => head.borrow().is_off_screen(now_ms),
                None => false,
            };
            if !expired {
                break;
            }
            if let Some(head) = self.pipes.pop_front() {
                self.detach(&head);
            }
        }

        // Speed-up, once per milestone crossing.
        if self.score > 0 && self.score % SPEED_UP_EVERY == 0 && self.score != self.last_milestone
        {
            self.last_milestone = self.score;
            self.speed.increase(now_ms);
        }

        if self.is_fail(now_ms) {
            self.reset(now_ms);
        }
    }

    /// Collision query: bird extent outside the vertical bounds, or its
    /// bounding square overlapping any pipe obstacle.
    pub fn is_fail(&self, now_ms: u64) -> bool {
        let y = self.bird.position_at(now_ms);
        if y - BIRD_RADIUS < 0.0 || y + BIRD_RADIUS > WORLD_HEIGHT {
            return true;
        }

        let bx = bird_x();
        self.pipes
            .iter()
            .any(|pipe| pipe.borrow().collides(bx, y, BIRD_RADIUS, now_ms))
    }

    /// Full in-place reset: tear down every pipe (unregistering each), zero
    /// the score, return the speed to base, fresh bird, one fresh pipe.
    /// The loop continues immediately; there is no game-over state.
    fn reset(&mut self, now_ms: u64) {
        let old: Vec<_> = self.pipes.drain(..).collect();
        for pipe in old {
            self.detach(&pipe);
        }
        self.speed = GameSpeed::new();
        self.score = 0;
        self.last_milestone = 0;
        self.bird = Bird::new(now_ms);
        self.spawn_pipe(now_ms);
    }

    fn spawn_pipe(&mut self, now_ms: u64) {
        let pipe = Pipe::with_random_gap(&mut self.rng, now_ms, self.speed.speed());
        self.attach(pipe);
    }

    fn attach(&mut self, pipe: Pipe) {
        let pipe = Rc::new(RefCell::new(pipe));
        let listener: Rc<RefCell<dyn SpeedListener>> = pipe.clone();
        let token = self.speed.subscribe(Rc::downgrade(&listener));
        pipe.borrow_mut().set_token(token);
        self.pipes.push_back(pipe);
    }

    /// Unregister a pipe that left the active queue, else it keeps
    /// receiving speed-change notifications through its weak registration.
    fn detach(&mut self, pipe: &Rc<RefCell<Pipe>>) {
        if let Some(token) = pipe.borrow().token() {
            self.speed.unsubscribe(token);
        }
    }

    #[cfg(test)]
    pub(crate) fn push_pipe(&mut self, pipe: Pipe) {
        self.attach(pipe);
    }

    #[cfg(test)]
    pub(crate) fn clear_pipes(&mut self) {
        let old: Vec<_> = self.pipes.drain(..).collect();
        for pipe in old {
            self.detach(&pipe);
        }
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    #[cfg(test)]
    pub(crate) fn set_bird(&mut self, bird: Bird) {
        self.bird = bird;
    }
}
