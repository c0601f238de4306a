//! Top-level assembly.
//!
//! `GameSession` owns the store, the event bus, the round controller,
//! and the countdown, and exposes the three tick entry points the host
//! scheduler drives: `frame` once per rendering frame, `second` once per
//! wall-clock second, and `fixed_step` once per fixed simulation step.
//! Hosts that want to observe round outcomes subscribe on the session
//! and poll their queue whenever convenient.

use crate::core::{GameStore, RoundConfig};
use crate::error::PuzzleError;
use crate::events::{EventBus, GameEvent, SubscriptionId};
use crate::generator::LevelGenerator;
use crate::round::{PuzzleController, RoundPhase};
use crate::timer::TimerService;
use crate::view::{PieceView, TimerDisplay};

/// One playing session: store, bus, controller, and timer wired
/// together.
#[derive(Debug)]
pub struct GameSession {
    store: GameStore,
    bus: EventBus,
    controller: PuzzleController,
    timer: TimerService,
}

impl GameSession {
    /// Assemble a session from its configuration.
    #[must_use]
    pub fn new(config: RoundConfig) -> Self {
        let store = GameStore::new(&config);
        let mut bus = EventBus::new();

        let mut timer = TimerService::new(config.timer_secs());
        timer.attach(&mut bus);

        let controller = PuzzleController::new(LevelGenerator::with_seed(config.seed()));

        Self {
            store,
            bus,
            controller,
            timer,
        }
    }

    /// Enter play: show the timer, subscribe the controller, and start
    /// the first round.
    pub fn activate(
        &mut self,
        pieces: &mut dyn PieceView,
        display: &mut dyn TimerDisplay,
    ) -> Result<(), PuzzleError> {
        self.timer.set_configured(self.store.timer_secs());
        self.controller
            .activate(&mut self.store, pieces, display, &mut self.bus)
    }

    /// Leave play, releasing the controller's timeout subscription.
    pub fn deactivate(&mut self, display: &mut dyn TimerDisplay) {
        self.controller.deactivate(display, &mut self.bus);
    }

    /// Abandon the current round and start a new one.
    ///
    /// The store's `weight` and `timer_secs` are read here, so host
    /// changes to either take effect from this round on.
    pub fn restart_round(&mut self, pieces: &mut dyn PieceView) -> Result<(), PuzzleError> {
        self.timer.set_configured(self.store.timer_secs());
        self.controller
            .start_round(&mut self.store, pieces, &mut self.bus)
    }

    /// One rendering frame: deliver pending timeouts, then resume the
    /// comparison loop.
    pub fn frame(&mut self, pieces: &mut dyn PieceView) -> Result<(), PuzzleError> {
        self.controller
            .frame_tick(&mut self.store, pieces, &mut self.bus)
    }

    /// One second of countdown.
    pub fn second(&mut self) {
        self.timer.second_tick(&mut self.bus);
    }

    /// One fixed simulation step of `dt` seconds (radial fill).
    pub fn fixed_step(&mut self, dt: f32) {
        self.timer.fixed_tick(dt, &mut self.bus);
    }

    // === Observation ===

    /// Round state.
    #[must_use]
    pub fn store(&self) -> &GameStore {
        &self.store
    }

    /// Progression counters (`score`, `step`, `weight`) are host
    /// policy; this hands the host the store to update them.
    pub fn store_mut(&mut self) -> &mut GameStore {
        &mut self.store
    }

    /// Controller phase.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.controller.phase()
    }

    /// Countdown state (remaining seconds, radial fill).
    #[must_use]
    pub fn timer(&self) -> &TimerService {
        &self.timer
    }

    /// Register an external observer for one event kind.
    pub fn subscribe(&mut self, interest: GameEvent) -> SubscriptionId {
        self.bus.subscribe(interest)
    }

    /// Release an external observer.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.bus.unsubscribe(id);
    }

    /// Drain one pending event from an observer's queue.
    pub fn poll_event(&mut self, id: SubscriptionId) -> Option<GameEvent> {
        self.bus.poll(id)
    }
}
