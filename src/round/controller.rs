//! Round orchestration: activation, restart, win and timeout handling.

use log::{debug, info};

use crate::core::{GameStore, RotationSet};
use crate::error::PuzzleError;
use crate::events::{EventBus, GameEvent, SubscriptionId};
use crate::generator::LevelGenerator;
use crate::round::watcher::{current_rotations, WatchStatus, WinWatcher};
use crate::view::{PieceView, TimerDisplay, VisualState};

/// Where the controller is in a round's life.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoundPhase {
    /// No round running (before activation, after deactivation).
    #[default]
    Idle,
    /// Round in progress; the comparison loop is live.
    Active,
    /// Round won. Terminal until the next restart.
    Won,
    /// Round lost to the countdown. Terminal until the next restart.
    Lost,
}

/// Drives one puzzle round from generation to resolution.
///
/// The controller owns the level generator and the per-round win
/// watcher. It holds a `CountEnd` subscription only while active;
/// releasing it on deactivation is what prevents a stale controller
/// from reacting to a later round's timeout.
#[derive(Debug)]
pub struct PuzzleController {
    phase: RoundPhase,
    generator: LevelGenerator,
    watcher: Option<WinWatcher>,
    timeout_sub: Option<SubscriptionId>,
}

impl PuzzleController {
    /// Create an idle controller around a level generator.
    #[must_use]
    pub fn new(generator: LevelGenerator) -> Self {
        Self {
            phase: RoundPhase::Idle,
            generator,
            watcher: None,
            timeout_sub: None,
        }
    }

    /// Current phase of the state machine.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Enter play: show the countdown widget, subscribe to timeout
    /// notifications, and start the first round.
    pub fn activate(
        &mut self,
        store: &mut GameStore,
        pieces: &mut dyn PieceView,
        display: &mut dyn TimerDisplay,
        bus: &mut EventBus,
    ) -> Result<(), PuzzleError> {
        display.show_timer();

        if let Some(old) = self.timeout_sub.take() {
            bus.unsubscribe(old);
        }
        self.timeout_sub = Some(bus.subscribe(GameEvent::CountEnd));

        self.start_round(store, pieces, bus)
    }

    /// Leave play: hide the countdown widget and release the timeout
    /// subscription. Mandatory on every exit path: a live subscription
    /// would let this controller consume a later round's timeout.
    pub fn deactivate(&mut self, display: &mut dyn TimerDisplay, bus: &mut EventBus) {
        display.hide_timer();

        if let Some(sub) = self.timeout_sub.take() {
            bus.unsubscribe(sub);
        }
        self.watcher = None;
        self.phase = RoundPhase::Idle;
        debug!("controller deactivated");
    }

    /// Start (or restart) a round.
    ///
    /// Cancels any in-flight comparison loop, generates a target that
    /// differs from the current level, commits it together with freshly
    /// spawned pieces, clears the outcome flags, and announces the
    /// restart so the countdown resets.
    pub fn start_round(
        &mut self,
        store: &mut GameStore,
        pieces: &mut dyn PieceView,
        bus: &mut EventBus,
    ) -> Result<(), PuzzleError> {
        // Cancel before generating: two loops racing on one store would
        // double-fire win actions.
        self.watcher = None;

        let level = self.generator.generate_distinct(store.weight(), store.level());
        let handles = pieces.reset_pieces(&level);
        store.begin_round(level, handles)?;

        bus.publish(GameEvent::CountRestart);

        self.watcher = Some(WinWatcher::new());
        self.phase = RoundPhase::Active;
        info!("round started: weight={}", store.level().len());
        Ok(())
    }

    /// One frame of round logic.
    ///
    /// Delivers any pending timeout first, so a countdown that expired
    /// since the last frame is observed before the comparison loop can
    /// act on a stale win. Then resumes the watcher.
    pub fn frame_tick(
        &mut self,
        store: &mut GameStore,
        pieces: &mut dyn PieceView,
        bus: &mut EventBus,
    ) -> Result<(), PuzzleError> {
        if let Some(sub) = self.timeout_sub {
            while let Some(GameEvent::CountEnd) = bus.poll(sub) {
                self.on_timeout(store, pieces, bus)?;
            }
        }

        let Some(watcher) = self.watcher.as_mut() else {
            return Ok(());
        };

        match watcher.resume(store, pieces)? {
            WatchStatus::Continue => {}
            WatchStatus::Won => {
                self.watcher = None;
                self.phase = RoundPhase::Won;
                Self::win_actions(store, pieces, bus);
            }
            WatchStatus::Cancelled => {
                // Loss already handled on the timeout path.
                self.watcher = None;
                self.phase = RoundPhase::Lost;
            }
        }
        Ok(())
    }

    /// Countdown expiry.
    ///
    /// Ignored if the round is already won. Otherwise marks the loss,
    /// grades every piece by index (partial credit: pieces the player
    /// got right are still shown as correct), and announces it.
    pub fn on_timeout(
        &mut self,
        store: &mut GameStore,
        pieces: &mut dyn PieceView,
        bus: &mut EventBus,
    ) -> Result<(), PuzzleError> {
        if store.win() {
            debug!("timeout ignored: round already won");
            return Ok(());
        }

        store.set_loose(true);
        self.phase = RoundPhase::Lost;

        let current = current_rotations(store, pieces)?;
        grade_pieces(store, &current, pieces);

        bus.publish(GameEvent::Loose);
        info!("round lost: countdown expired");
        Ok(())
    }

    fn win_actions(store: &GameStore, pieces: &mut dyn PieceView, bus: &mut EventBus) {
        bus.publish(GameEvent::Win);
        for &piece in store.pieces() {
            pieces.set_visual_state(piece, VisualState::Success);
        }
        info!("round won");
    }
}

/// Mark each piece Success or Error against its target element.
fn grade_pieces(store: &GameStore, current: &RotationSet, pieces: &mut dyn PieceView) {
    for (index, &piece) in store.pieces().iter().enumerate() {
        let verdict = if current.get(index) == store.level().get(index) {
            VisualState::Success
        } else {
            VisualState::Error
        };
        pieces.set_visual_state(piece, verdict);
    }
}
