//! Shared scroll speed with an observer registry.
//!
//! Pipes subscribe so they can re-baseline their traveled-distance formula
//! the instant the speed changes. Registration hands out explicit tokens;
//! removal goes through the token, never through reference equality.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::types::{BASE_SPEED, SPEED_INCREMENT};

/// Receives synchronous notification whenever the shared speed increases.
pub trait SpeedListener {
    fn speed_changed(&mut self, new_speed: f64, now_ms: u64);
}

/// Handle returned by [`GameSpeed::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerToken(u64);

/// The current scroll speed plus its subscriber list.
pub struct GameSpeed {
    speed: f64,
    next_token: u64,
    listeners: Vec<(ListenerToken, Weak<RefCell<dyn SpeedListener>>)>,
}

impl GameSpeed {
    pub fn new() -> Self {
        Self {
            speed: BASE_SPEED,
            next_token: 0,
            listeners: Vec::new(),
        }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Register a listener; it is held weakly, so a dropped listener is
    /// pruned on the next notification instead of leaking.
    pub fn subscribe(&mut self, listener: Weak<RefCell<dyn SpeedListener>>) -> ListenerToken {
        let token = ListenerToken(self.next_token);
        self.next_token += 1;
        self.listeners.push((token, listener));
        token
    }

    /// Remove a listener by token. Returns whether it was registered.
    pub fn unsubscribe(&mut self, token: ListenerToken) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(t, _)| *t != token);
        self.listeners.len() != before
    }

    /// Add the fixed increment and notify every live listener with the new
    /// value, in registration order.
    pub fn increase(&mut self, now_ms: u64) {
        self.speed += SPEED_INCREMENT;

        self.listeners.retain(|(_, weak)| weak.strong_count() > 0);

        // Upgrade first so the registry is not touched while listeners run.
        let live: Vec<Rc<RefCell<dyn SpeedListener>>> = self
            .listeners
            .iter()
            .filter_map(|(_, weak)| weak.upgrade())
            .collect();

        for listener in live {
            listener.borrow_mut().speed_changed(self.speed, now_ms);
        }
    }
}

impl Default for GameSpeed {
    fn default() -> Self {
        Self::new()
    }
}
