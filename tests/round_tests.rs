//! Round state machine integration tests.
//!
//! These drive `PuzzleController` directly against a scripted piece
//! collection, covering level distinctness, the win path, timeout
//! grading, and subscription hygiene.

use trispin::core::{GameStore, PieceId, Rotation, RotationSet, RoundConfig};
use trispin::events::{EventBus, GameEvent};
use trispin::generator::LevelGenerator;
use trispin::round::{PuzzleController, RoundPhase};
use trispin::view::{PieceView, TimerDisplay, VisualState};
use trispin::PuzzleError;

// =============================================================================
// Scripted collaborators
// =============================================================================

/// Piece collection with scriptable orientations.
///
/// Spawns each fresh piece one quarter-turn off its target, so a new
/// round never starts already won.
struct MockPieces {
    orientations: Vec<i32>,
    states: Vec<VisualState>,
    resets: u32,
    /// Pieces to under-spawn, for length-mismatch tests.
    spawn_deficit: usize,
}

impl MockPieces {
    fn new() -> Self {
        Self {
            orientations: Vec::new(),
            states: Vec::new(),
            resets: 0,
            spawn_deficit: 0,
        }
    }

    /// Rotate every piece onto the target pattern.
    fn match_level(&mut self, level: &RotationSet) {
        self.orientations = level.iter().map(Rotation::degrees).collect();
    }
}

impl PieceView for MockPieces {
    fn reset_pieces(&mut self, target: &RotationSet) -> Vec<PieceId> {
        self.resets += 1;
        let count = target.len() - self.spawn_deficit;
        self.orientations = target
            .iter()
            .take(count)
            .map(|r| (r.degrees() + 90) % 360)
            .collect();
        self.states = vec![VisualState::Neutral; count];
        (0..count as u32).map(PieceId::new).collect()
    }

    fn orientation_degrees(&self, piece: PieceId) -> i32 {
        self.orientations[piece.raw() as usize]
    }

    fn set_visual_state(&mut self, piece: PieceId, state: VisualState) {
        self.states[piece.raw() as usize] = state;
    }
}

#[derive(Default)]
struct MockDisplay {
    visible: bool,
}

impl TimerDisplay for MockDisplay {
    fn show_timer(&mut self) {
        self.visible = true;
    }

    fn hide_timer(&mut self) {
        self.visible = false;
    }
}

fn setup(weight: usize, seed: u64) -> (PuzzleController, GameStore, MockPieces, MockDisplay, EventBus) {
    let config = RoundConfig::new(weight, 30).with_seed(seed);
    let controller = PuzzleController::new(LevelGenerator::with_seed(config.seed()));
    let store = GameStore::new(&config);
    (controller, store, MockPieces::new(), MockDisplay::default(), EventBus::new())
}

// =============================================================================
// Round start
// =============================================================================

/// Activation shows the timer, spawns pieces, and enters Active.
#[test]
fn test_activate_starts_a_round() {
    let (mut controller, mut store, mut pieces, mut display, mut bus) = setup(3, 42);

    controller
        .activate(&mut store, &mut pieces, &mut display, &mut bus)
        .unwrap();

    assert!(display.visible);
    assert_eq!(controller.phase(), RoundPhase::Active);
    assert_eq!(store.level().len(), 3);
    assert_eq!(store.pieces().len(), 3);
    assert_eq!(pieces.resets, 1);
    assert!(!store.win());
    assert!(!store.loose());
}

/// Consecutive rounds never present the same target pattern, even at
/// weight 1 where collisions are most likely.
#[test]
fn test_start_round_never_repeats_prior_level() {
    let (mut controller, mut store, mut pieces, mut display, mut bus) = setup(1, 7);

    controller
        .activate(&mut store, &mut pieces, &mut display, &mut bus)
        .unwrap();
    let mut prior = store.level().clone();

    for _ in 0..200 {
        controller
            .start_round(&mut store, &mut pieces, &mut bus)
            .unwrap();
        assert_ne!(store.level(), &prior);
        prior = store.level().clone();
    }
}

/// Every round start announces CountRestart so the countdown resets.
#[test]
fn test_start_round_publishes_count_restart() {
    let (mut controller, mut store, mut pieces, mut display, mut bus) = setup(2, 3);
    let observer = bus.subscribe(GameEvent::CountRestart);

    controller
        .activate(&mut store, &mut pieces, &mut display, &mut bus)
        .unwrap();
    assert_eq!(bus.poll(observer), Some(GameEvent::CountRestart));

    controller
        .start_round(&mut store, &mut pieces, &mut bus)
        .unwrap();
    assert_eq!(bus.poll(observer), Some(GameEvent::CountRestart));
}

/// A host spawning the wrong piece count fails the round start.
#[test]
fn test_spawn_deficit_is_length_mismatch() {
    let (mut controller, mut store, mut pieces, mut display, mut bus) = setup(3, 42);
    pieces.spawn_deficit = 1;

    let err = controller
        .activate(&mut store, &mut pieces, &mut display, &mut bus)
        .unwrap_err();
    assert_eq!(err, PuzzleError::LengthMismatch { pieces: 2, level: 3 });
}

// =============================================================================
// Win path
// =============================================================================

/// Matching the target sets `win` one frame and fires win actions the
/// next, exactly once.
#[test]
fn test_win_actions_fire_exactly_once() {
    let (mut controller, mut store, mut pieces, mut display, mut bus) = setup(3, 42);
    let observer = bus.subscribe(GameEvent::Win);

    controller
        .activate(&mut store, &mut pieces, &mut display, &mut bus)
        .unwrap();

    // Spawned scrambled: first frame detects nothing.
    controller.frame_tick(&mut store, &mut pieces, &mut bus).unwrap();
    assert!(!store.win());

    let level = store.level().clone();
    pieces.match_level(&level);

    // Matching frame raises the flag; actions wait one more tick.
    controller.frame_tick(&mut store, &mut pieces, &mut bus).unwrap();
    assert!(store.win());
    assert_eq!(controller.phase(), RoundPhase::Active);
    assert_eq!(bus.poll(observer), None);

    // Next frame observes the flag and resolves the round.
    controller.frame_tick(&mut store, &mut pieces, &mut bus).unwrap();
    assert_eq!(controller.phase(), RoundPhase::Won);
    assert_eq!(bus.poll(observer), Some(GameEvent::Win));
    assert!(pieces.states.iter().all(|&s| s == VisualState::Success));

    // Further frames do nothing more.
    controller.frame_tick(&mut store, &mut pieces, &mut bus).unwrap();
    controller.frame_tick(&mut store, &mut pieces, &mut bus).unwrap();
    assert_eq!(bus.poll(observer), None);
}

/// Restarting mid-round cancels the old comparison loop: a match
/// against the abandoned target must not resolve the new round.
#[test]
fn test_restart_cancels_in_flight_round() {
    let (mut controller, mut store, mut pieces, mut display, mut bus) = setup(3, 42);

    controller
        .activate(&mut store, &mut pieces, &mut display, &mut bus)
        .unwrap();
    let old_level = store.level().clone();

    controller
        .start_round(&mut store, &mut pieces, &mut bus)
        .unwrap();
    assert_ne!(store.level(), &old_level);

    pieces.match_level(&old_level);
    controller.frame_tick(&mut store, &mut pieces, &mut bus).unwrap();
    controller.frame_tick(&mut store, &mut pieces, &mut bus).unwrap();
    assert!(!store.win());
    assert_eq!(controller.phase(), RoundPhase::Active);
}

// =============================================================================
// Timeout path
// =============================================================================

/// Partial-credit grading: pieces the player got right before time ran
/// out are shown as correct, the rest as errors.
#[test]
fn test_timeout_grades_pieces_by_index() {
    let (mut controller, mut store, mut pieces, mut display, mut bus) = setup(3, 42);
    let observer = bus.subscribe(GameEvent::Loose);

    controller
        .activate(&mut store, &mut pieces, &mut display, &mut bus)
        .unwrap();

    // Level [0, 270, 180], player got to [0, 90, 180].
    let level = RotationSet::from_degrees(&[0, 270, 180]).unwrap();
    let handles = pieces.reset_pieces(&level);
    store.begin_round(level, handles).unwrap();
    pieces.orientations = vec![0, 90, 180];

    controller.on_timeout(&mut store, &mut pieces, &mut bus).unwrap();

    assert!(store.loose());
    assert!(!store.win());
    assert_eq!(controller.phase(), RoundPhase::Lost);
    assert_eq!(
        pieces.states,
        vec![VisualState::Success, VisualState::Error, VisualState::Success]
    );
    assert_eq!(bus.poll(observer), Some(GameEvent::Loose));
}

/// Timeout after a win is a no-op: no grading, no Loose notification.
#[test]
fn test_timeout_ignored_once_won() {
    let (mut controller, mut store, mut pieces, mut display, mut bus) = setup(3, 42);
    let observer = bus.subscribe(GameEvent::Loose);

    controller
        .activate(&mut store, &mut pieces, &mut display, &mut bus)
        .unwrap();

    let level = store.level().clone();
    pieces.match_level(&level);
    controller.frame_tick(&mut store, &mut pieces, &mut bus).unwrap();
    controller.frame_tick(&mut store, &mut pieces, &mut bus).unwrap();
    assert_eq!(controller.phase(), RoundPhase::Won);

    let states_before = pieces.states.clone();
    controller.on_timeout(&mut store, &mut pieces, &mut bus).unwrap();

    assert!(!store.loose());
    assert_eq!(controller.phase(), RoundPhase::Won);
    assert_eq!(pieces.states, states_before);
    assert_eq!(bus.poll(observer), None);
}

/// A loss set before any win means the comparison loop can never
/// declare a win afterward, even with matching pieces.
#[test]
fn test_no_win_after_loose() {
    let (mut controller, mut store, mut pieces, mut display, mut bus) = setup(3, 42);
    let win_observer = bus.subscribe(GameEvent::Win);

    controller
        .activate(&mut store, &mut pieces, &mut display, &mut bus)
        .unwrap();

    controller.on_timeout(&mut store, &mut pieces, &mut bus).unwrap();
    assert!(store.loose());

    let level = store.level().clone();
    pieces.match_level(&level);
    for _ in 0..5 {
        controller.frame_tick(&mut store, &mut pieces, &mut bus).unwrap();
    }

    assert!(!store.win());
    assert_eq!(controller.phase(), RoundPhase::Lost);
    assert_eq!(bus.poll(win_observer), None);
}

/// Timeout delivered via the bus (the normal path) reaches the
/// controller on the next frame.
#[test]
fn test_timeout_routed_through_bus() {
    let (mut controller, mut store, mut pieces, mut display, mut bus) = setup(2, 11);

    controller
        .activate(&mut store, &mut pieces, &mut display, &mut bus)
        .unwrap();

    bus.publish(GameEvent::CountEnd);
    controller.frame_tick(&mut store, &mut pieces, &mut bus).unwrap();

    assert!(store.loose());
    assert_eq!(controller.phase(), RoundPhase::Lost);
}

// =============================================================================
// Deactivation
// =============================================================================

/// Deactivation releases the timeout subscription: a later expiry must
/// not reach the stale controller.
#[test]
fn test_deactivated_controller_ignores_timeout() {
    let (mut controller, mut store, mut pieces, mut display, mut bus) = setup(2, 11);

    controller
        .activate(&mut store, &mut pieces, &mut display, &mut bus)
        .unwrap();
    controller.deactivate(&mut display, &mut bus);

    assert!(!display.visible);
    assert_eq!(controller.phase(), RoundPhase::Idle);
    assert_eq!(bus.subscriber_count(), 0);

    bus.publish(GameEvent::CountEnd);
    controller.frame_tick(&mut store, &mut pieces, &mut bus).unwrap();
    assert!(!store.loose());
}

// =============================================================================
// Orientation validation
// =============================================================================

/// A piece reporting an off-domain angle surfaces immediately.
#[test]
fn test_invalid_orientation_fails_the_frame() {
    let (mut controller, mut store, mut pieces, mut display, mut bus) = setup(2, 11);

    controller
        .activate(&mut store, &mut pieces, &mut display, &mut bus)
        .unwrap();
    pieces.orientations[1] = 45;

    let err = controller
        .frame_tick(&mut store, &mut pieces, &mut bus)
        .unwrap_err();
    assert_eq!(err, PuzzleError::InvalidOrientation { degrees: 45 });
}
