//! Countdown contract.
//!
//! The timer runs two loops off one `is_running` predicate: the
//! once-per-second countdown that eventually publishes `CountEnd`, and
//! the cosmetic radial fill advanced on the fixed simulation step. Both
//! are tick methods the host calls from its own scheduler; neither
//! blocks.
//!
//! A round restart (the `CountRestart` notification) stops both loops,
//! resets the remaining seconds, and zeroes the fill.

use log::info;

use crate::events::{EventBus, GameEvent, SubscriptionId};

/// Countdown and radial-fill state for the current round.
#[derive(Debug)]
pub struct TimerService {
    remaining: u32,
    configured: u32,
    fill: f32,
    restart_sub: Option<SubscriptionId>,
}

impl TimerService {
    /// Create a timer configured for `timer_secs` seconds per round.
    #[must_use]
    pub fn new(timer_secs: u32) -> Self {
        Self {
            remaining: timer_secs,
            configured: timer_secs,
            fill: 0.0,
            restart_sub: None,
        }
    }

    /// Subscribe to round-restart notifications on the bus.
    pub fn attach(&mut self, bus: &mut EventBus) {
        if let Some(old) = self.restart_sub.take() {
            bus.unsubscribe(old);
        }
        self.restart_sub = Some(bus.subscribe(GameEvent::CountRestart));
    }

    /// Detach from the bus.
    pub fn detach(&mut self, bus: &mut EventBus) {
        if let Some(sub) = self.restart_sub.take() {
            bus.unsubscribe(sub);
        }
    }

    /// Seconds left on the countdown.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Radial fill progress in `0.0..=1.0`.
    #[must_use]
    pub fn fill(&self) -> f32 {
        self.fill
    }

    /// Both loops run while time remains.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.remaining > 0
    }

    /// Change the configured duration for subsequent rounds. The
    /// running countdown keeps its remaining time.
    pub fn set_configured(&mut self, timer_secs: u32) {
        assert!(timer_secs >= 1, "Countdown must run at least 1 second");
        self.configured = timer_secs;
    }

    /// Reset to a fresh round: full remaining time, empty fill.
    pub fn restart(&mut self) {
        self.remaining = self.configured;
        self.fill = 0.0;
    }

    /// One second of countdown.
    ///
    /// Applies any pending restart first, then decrements. The tick
    /// that reaches zero publishes `CountEnd`; once stopped, further
    /// ticks are no-ops, so expiry is announced exactly once per round.
    pub fn second_tick(&mut self, bus: &mut EventBus) {
        self.pump(bus);

        if !self.is_running() {
            return;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            info!("countdown expired");
            bus.publish(GameEvent::CountEnd);
        }
    }

    /// One fixed simulation step of radial fill.
    ///
    /// `dt` is the fixed step length in seconds; the increment is
    /// frame-rate normalized so the fill completes in `configured`
    /// seconds regardless of step size.
    pub fn fixed_tick(&mut self, dt: f32, bus: &mut EventBus) {
        self.pump(bus);

        if !self.is_running() {
            return;
        }
        self.fill = (self.fill + self.fill_step(dt)).min(1.0);
    }

    /// Fill increment for one step of length `dt` seconds.
    #[must_use]
    pub fn fill_step(&self, dt: f32) -> f32 {
        dt / self.configured as f32
    }

    /// Drain pending restart notifications.
    fn pump(&mut self, bus: &mut EventBus) {
        let Some(sub) = self.restart_sub else {
            return;
        };
        while let Some(GameEvent::CountRestart) = bus.poll(sub) {
            self.restart();
        }
    }
}
