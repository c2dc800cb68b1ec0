//! Game session tests.
//!
//! These run on a paused tokio clock, so resolution delays are checked
//! exactly and without real sleeps. Layouts are looked up by dealing the
//! same pool with a synchronous engine on the same seed.

use std::time::Duration;

use tokio::sync::mpsc::{error::TryRecvError, UnboundedReceiver};
use tokio::time::Instant;
use vocab_match::core::{GameError, GameRng, MatchConfig, SessionError};
use vocab_match::game::{Deck, GameEvent, MemoryGame, SlotState};
use vocab_match::session::{ChannelPresenter, GameSession, PresenterUpdate};
use vocab_match::vocab::{Catalog, VocabularyItem};

const SEED: u64 = 99;
const DELAY: Duration = Duration::from_millis(1000);

fn pool() -> Vec<VocabularyItem> {
    Catalog::builtin().pool("naturaleza").unwrap()[..3].to_vec()
}

fn config() -> MatchConfig {
    MatchConfig::new().with_pair_count(3).with_resolve_delay(DELAY)
}

/// The deck a session on `SEED` deals for `pool()`.
fn expected_deck() -> Deck {
    let mut game = MemoryGame::new(config(), GameRng::new(SEED));
    game.start_default(&pool()).unwrap();
    game.deck().clone()
}

/// Two positions holding different words.
fn mismatching_pair(deck: &Deck) -> (usize, usize) {
    let first = deck.get(0).unwrap();
    let other = deck
        .iter()
        .find(|card| card.item.term != first.item.term)
        .unwrap();
    (0, other.position)
}

fn spawn() -> (GameSession, UnboundedReceiver<PresenterUpdate>) {
    let (presenter, updates) = ChannelPresenter::new();
    let session = GameSession::spawn(config(), GameRng::new(SEED), presenter);
    (session, updates)
}

/// Next outcome that is not a reveal, skipping grids.
async fn next_resolution(updates: &mut UnboundedReceiver<PresenterUpdate>) -> GameEvent {
    loop {
        match updates.recv().await.expect("session closed") {
            PresenterUpdate::Outcome(GameEvent::Revealed { .. }) | PresenterUpdate::Grid(_) => {}
            PresenterUpdate::Outcome(event) => return event,
        }
    }
}

// =============================================================================
// Presentation
// =============================================================================

/// Starting a game renders a face-down grid before anything else.
#[tokio::test(start_paused = true)]
async fn test_start_renders_grid() {
    let (session, mut updates) = spawn();

    let slots = session.start_default(pool()).await.unwrap();
    assert_eq!(slots.len(), 6);

    match updates.recv().await {
        Some(PresenterUpdate::Grid(grid)) => {
            assert_eq!(grid, slots);
            assert!(grid.iter().all(|slot| slot.is_face_down()));
        }
        other => panic!("expected grid, got {other:?}"),
    }
}

/// Reveals are reported at once; the pair resolves no earlier than the
/// configured delay.
#[tokio::test(start_paused = true)]
async fn test_resolution_waits_for_delay() {
    let deck = expected_deck();
    let (a, b) = mismatching_pair(&deck);
    let (session, mut updates) = spawn();
    session.start_default(pool()).await.unwrap();

    let events = session.select_card(a).await.unwrap();
    assert!(matches!(events.as_slice(), [GameEvent::Revealed { .. }]));
    let revealed_at = Instant::now();
    session.select_card(b).await.unwrap();

    let event = next_resolution(&mut updates).await;
    assert_eq!(event, GameEvent::Mismatched { positions: [a, b] });
    assert!(revealed_at.elapsed() >= DELAY);

    let board = session.board().await.unwrap();
    assert!(board[a].is_face_down());
    assert!(board[b].is_face_down());
}

/// Both cards stay face-up on the board until the delay passes.
#[tokio::test(start_paused = true)]
async fn test_board_shows_pair_while_pending() {
    let deck = expected_deck();
    let partner = deck.partner(0).unwrap();
    let (session, _updates) = spawn();
    session.start_default(pool()).await.unwrap();

    session.select_card(0).await.unwrap();
    session.select_card(partner).await.unwrap();

    let board = session.board().await.unwrap();
    assert!(matches!(board[0].state, SlotState::FaceUp(_)));
    assert!(matches!(board[partner].state, SlotState::FaceUp(_)));

    tokio::time::sleep(DELAY * 2).await;
    let board = session.board().await.unwrap();
    assert!(matches!(board[0].state, SlotState::Matched(_)));
}

/// Selections while a pair is pending are ignored.
#[tokio::test(start_paused = true)]
async fn test_third_selection_ignored_while_pending() {
    let deck = expected_deck();
    let (a, b) = mismatching_pair(&deck);
    let third = (0..deck.len()).find(|p| *p != a && *p != b).unwrap();
    let (session, _updates) = spawn();
    session.start_default(pool()).await.unwrap();

    session.select_card(a).await.unwrap();
    session.select_card(b).await.unwrap();
    assert!(session.select_card(third).await.unwrap().is_empty());
}

// =============================================================================
// Cancellation
// =============================================================================

/// A new game drops the timer armed by the previous one.
#[tokio::test(start_paused = true)]
async fn test_new_game_cancels_pending_resolution() {
    let deck = expected_deck();
    let (a, b) = mismatching_pair(&deck);
    let (session, mut updates) = spawn();
    session.start_default(pool()).await.unwrap();

    session.select_card(a).await.unwrap();
    session.select_card(b).await.unwrap();
    session.start_default(pool()).await.unwrap();

    tokio::time::sleep(DELAY * 5).await;

    // Grid, two reveals, the second grid, and nothing after it
    let mut grids = 0;
    loop {
        match updates.try_recv() {
            Ok(PresenterUpdate::Grid(_)) => grids += 1,
            Ok(PresenterUpdate::Outcome(GameEvent::Revealed { .. })) => assert_eq!(grids, 1),
            Ok(PresenterUpdate::Outcome(event)) => panic!("stale outcome {event:?}"),
            Err(TryRecvError::Empty) => break,
            Err(TryRecvError::Disconnected) => panic!("session stopped"),
        }
    }
    assert_eq!(grids, 2);

    let board = session.board().await.unwrap();
    assert!(board.iter().all(|slot| slot.is_face_down()));
}

/// Shutting down discards a pending resolution and closes the handle.
#[tokio::test(start_paused = true)]
async fn test_shutdown_closes_session() {
    let deck = expected_deck();
    let (a, b) = mismatching_pair(&deck);
    let (session, mut updates) = spawn();
    session.start_default(pool()).await.unwrap();
    session.select_card(a).await.unwrap();
    session.select_card(b).await.unwrap();

    session.shutdown().await.unwrap();
    tokio::time::sleep(DELAY * 2).await;

    assert!(matches!(
        session.select_card(0).await,
        Err(SessionError::Closed)
    ));
    assert!(session.is_closed());

    while let Some(update) = updates.recv().await {
        assert!(!matches!(
            update,
            PresenterUpdate::Outcome(GameEvent::Mismatched { .. })
        ));
    }
}

// =============================================================================
// Errors and edge cases
// =============================================================================

/// Engine errors pass through the session unchanged.
#[tokio::test(start_paused = true)]
async fn test_engine_errors_pass_through() {
    let (session, _updates) = spawn();
    session.start_default(pool()).await.unwrap();

    assert_eq!(
        session.select_card(6).await.unwrap_err(),
        SessionError::Game(GameError::InvalidPosition {
            position: 6,
            deck_size: 6
        })
    );
    assert_eq!(
        session.start_game(pool(), 4).await.unwrap_err(),
        SessionError::Game(GameError::InvalidConfiguration {
            requested: 4,
            available: 3
        })
    );
}

/// A mailbox size far beyond tokio's permit limit still spawns a working
/// session.
#[tokio::test(start_paused = true)]
async fn test_oversized_mailbox_spawns() {
    let config: MatchConfig =
        serde_json::from_str(r#"{"pair_count": 3, "mailbox_capacity": 18446744073709551615}"#)
            .unwrap();
    let (presenter, _updates) = ChannelPresenter::new();
    let session = GameSession::spawn(config, GameRng::new(SEED), presenter);

    let slots = session.start_default(pool()).await.unwrap();
    assert_eq!(slots.len(), 6);
    session.shutdown().await.unwrap();
}

/// An empty pool renders an empty grid and completes at once.
#[tokio::test(start_paused = true)]
async fn test_empty_game_completes() {
    let (session, mut updates) = spawn();

    let slots = session.start_game(Vec::new(), 3).await.unwrap();
    assert!(slots.is_empty());

    assert!(matches!(updates.recv().await, Some(PresenterUpdate::Grid(grid)) if grid.is_empty()));
    assert!(matches!(
        updates.recv().await,
        Some(PresenterUpdate::Outcome(GameEvent::Completed))
    ));
}

/// Playing every pair through the session ends with Completed.
#[tokio::test(start_paused = true)]
async fn test_full_game_through_session() {
    let deck = expected_deck();
    let (session, mut updates) = spawn();
    session.start_default(pool()).await.unwrap();

    let mut done = Vec::new();
    for position in 0..deck.len() {
        if done.contains(&position) {
            continue;
        }
        let partner = deck.partner(position).unwrap();
        session.select_card(position).await.unwrap();
        session.select_card(partner).await.unwrap();
        assert_eq!(
            next_resolution(&mut updates).await,
            GameEvent::Matched {
                positions: [position, partner]
            }
        );
        done.extend([position, partner]);
    }

    assert_eq!(next_resolution(&mut updates).await, GameEvent::Completed);
}
