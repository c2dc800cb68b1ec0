//! The memory-matching engine.
//!
//! `MemoryGame` exclusively owns the deck and turn state of one play-through.
//! All mutation goes through three calls:
//!
//! - `start_game`: deal a new shuffled deck, cancelling any pending resolution
//! - `select_card`: reveal a card; a second reveal schedules a resolution
//! - `resolve`: deliver a scheduled resolution (match or mismatch)
//!
//! ## State Machine
//!
//! ```text
//! Idle -> Playing(0 up) -> Playing(1 up) -> Playing(2 up, pending)
//!                 ^                                  |
//!                 +---------- resolve ---------------+--> Completed
//! ```
//!
//! The engine never sleeps. Drivers turn `ScheduledResolution` into a timer
//! (see `session`) or call `resolve` directly in tests.

use tracing::{debug, info};

use super::deck::{CardSlot, Deck, SlotState};
use super::event::{GameEvent, ResolutionTicket, ScheduledResolution};
use super::turn::TurnState;
use crate::core::{GameError, GameRng, MatchConfig, Result};
use crate::vocab::VocabularyItem;

/// Lifecycle phase of the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No game has been started yet.
    Idle,
    /// Cards remain to be matched.
    Playing,
    /// Every pair is matched (or the game was dealt empty).
    Completed,
}

/// Result of `start_game`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameStart {
    /// One face-down slot per card, in position order.
    pub slots: Vec<CardSlot>,

    /// `[Completed]` for an empty game, otherwise empty.
    pub events: Vec<GameEvent>,

    /// The previous game's pending resolution, now cancelled.
    pub cancelled: Option<ResolutionTicket>,
}

/// Result of `select_card`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// `[Revealed]`, or empty when the selection was ignored.
    pub events: Vec<GameEvent>,

    /// Set when this reveal completed a pair.
    pub resolution: Option<ScheduledResolution>,
}

impl Selection {
    fn ignored() -> Self {
        Self {
            events: Vec::new(),
            resolution: None,
        }
    }

    /// Check if the selection was a no-op.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        self.events.is_empty()
    }
}

/// Memory-matching engine.
///
/// ## Example
///
/// ```
/// use vocab_match::core::{GameRng, MatchConfig};
/// use vocab_match::game::{GameEvent, MemoryGame};
/// use vocab_match::vocab::VocabularyItem;
///
/// let mut game = MemoryGame::new(MatchConfig::default(), GameRng::new(42));
/// let pool = vec![VocabularyItem::new("Inti", "Sol")];
///
/// let start = game.start_game(&pool, 1).unwrap();
/// assert_eq!(start.slots.len(), 2);
///
/// game.select_card(0).unwrap();
/// let second = game.select_card(1).unwrap();
/// let scheduled = second.resolution.unwrap();
///
/// let events = game.resolve(scheduled.ticket);
/// assert_eq!(
///     events,
///     vec![GameEvent::Matched { positions: [0, 1] }, GameEvent::Completed]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct MemoryGame {
    config: MatchConfig,
    rng: GameRng,
    deck: Deck,
    turn: TurnState,
    phase: Phase,
    generation: u64,
    next_sequence: u64,
    pending: Option<ResolutionTicket>,
}

impl MemoryGame {
    /// Create an idle engine. No deck is dealt until `start_game`.
    #[must_use]
    pub fn new(config: MatchConfig, rng: GameRng) -> Self {
        Self {
            config,
            rng,
            deck: Deck::empty(),
            turn: TurnState::new(),
            phase: Phase::Idle,
            generation: 0,
            next_sequence: 0,
            pending: None,
        }
    }

    /// Start a game with the configured default pair count.
    pub fn start_default(&mut self, pool: &[VocabularyItem]) -> Result<GameStart> {
        self.start_game(pool, self.config.pair_count)
    }

    /// Deal a new game from the first `pairs` items of `pool`.
    ///
    /// Callers that want a random subset shuffle the pool first; the engine
    /// always takes a prefix.
    ///
    /// An empty pool or `pairs == 0` yields an empty, already completed game.
    /// A non-empty pool shorter than `pairs` is rejected with
    /// `InvalidConfiguration` and nothing changes.
    pub fn start_game(&mut self, pool: &[VocabularyItem], pairs: usize) -> Result<GameStart> {
        if !pool.is_empty() && pool.len() < pairs {
            return Err(GameError::InvalidConfiguration {
                requested: pairs,
                available: pool.len(),
            });
        }

        let cancelled = self.pending.take();
        if let Some(ticket) = cancelled {
            debug!(%ticket, "cancelled pending resolution");
        }

        self.generation += 1;
        self.next_sequence = 0;
        self.turn = TurnState::new();

        if pool.is_empty() || pairs == 0 {
            self.deck = Deck::empty();
            self.phase = Phase::Completed;
            info!(generation = self.generation, "dealt empty memory game");

            return Ok(GameStart {
                slots: Vec::new(),
                events: vec![GameEvent::Completed],
                cancelled,
            });
        }

        self.deck = Deck::deal(&pool[..pairs], &mut self.rng);
        self.phase = Phase::Playing;
        info!(
            generation = self.generation,
            pairs,
            cards = self.deck.len(),
            "dealt memory game"
        );

        Ok(GameStart {
            slots: self.deck.face_down_slots(),
            events: Vec::new(),
            cancelled,
        })
    }

    /// Reveal the card at `position`.
    ///
    /// Out-of-range positions fail with `InvalidPosition`. Selecting a
    /// matched card, a card that is already face-up, or any card while two
    /// are waiting to resolve is a silent no-op.
    pub fn select_card(&mut self, position: usize) -> Result<Selection> {
        let Some(card) = self.deck.get(position) else {
            return Err(GameError::InvalidPosition {
                position,
                deck_size: self.deck.len(),
            });
        };
        let item = card.item.clone();

        if !self.turn.reveal(position) {
            debug!(position, "ignored selection");
            return Ok(Selection::ignored());
        }
        debug!(position, term = %item.term, "revealed card");

        let resolution = if self.turn.is_full() {
            let ticket = ResolutionTicket::new(self.generation, self.next_sequence);
            self.next_sequence += 1;
            self.pending = Some(ticket);

            Some(ScheduledResolution {
                ticket,
                delay: self.config.resolve_delay(),
            })
        } else {
            None
        };

        Ok(Selection {
            events: vec![GameEvent::Revealed { position, item }],
            resolution,
        })
    }

    /// Deliver a scheduled resolution.
    ///
    /// Returns `[Matched]`, `[Matched, Completed]` or `[Mismatched]`. A
    /// ticket that is not the pending one (already resolved, or issued
    /// before the latest `start_game`) returns no events.
    pub fn resolve(&mut self, ticket: ResolutionTicket) -> Vec<GameEvent> {
        if self.pending != Some(ticket) {
            debug!(%ticket, "ignored stale resolution");
            return Vec::new();
        }
        self.pending = None;

        let Some(positions) = self.turn.take_pair() else {
            return Vec::new();
        };
        let [first, second] = positions;

        let paired = match (self.deck.get(first), self.deck.get(second)) {
            (Some(a), Some(b)) => a.item.pairs_with(&b.item),
            _ => false,
        };

        if !paired {
            debug!(first, second, "mismatched pair");
            return vec![GameEvent::Mismatched { positions }];
        }

        self.turn.lock_pair(positions);
        info!(
            first,
            second,
            matched = self.turn.matched_count(),
            pairs = self.deck.pair_count(),
            "matched pair"
        );

        let mut events = vec![GameEvent::Matched { positions }];
        if self.turn.matched_count() == self.deck.pair_count() {
            self.phase = Phase::Completed;
            info!(generation = self.generation, "memory game completed");
            events.push(GameEvent::Completed);
        }
        events
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if every pair is matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Completed
    }

    /// The full deck, faces included.
    ///
    /// Renderers should use `board()`, which hides face-down cards.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Face-up positions in reveal order.
    #[must_use]
    pub fn face_up(&self) -> &[usize] {
        self.turn.face_up()
    }

    /// Number of matched pairs.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.turn.matched_count()
    }

    /// Number of pairs in the current game.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.deck.pair_count()
    }

    /// Check if a position belongs to a matched pair.
    #[must_use]
    pub fn is_matched(&self, position: usize) -> bool {
        self.turn.is_matched(position)
    }

    /// The resolution waiting to be delivered, if any.
    #[must_use]
    pub fn pending_resolution(&self) -> Option<ResolutionTicket> {
        self.pending
    }

    /// Number of games started on this engine.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// What the presentation layer may currently show.
    #[must_use]
    pub fn board(&self) -> Vec<CardSlot> {
        self.deck
            .iter()
            .map(|card| {
                let state = if self.turn.is_matched(card.position) {
                    SlotState::Matched(card.item.clone())
                } else if self.turn.is_face_up(card.position) {
                    SlotState::FaceUp(card.item.clone())
                } else {
                    SlotState::FaceDown
                };
                CardSlot {
                    position: card.position,
                    state,
                }
            })
            .collect()
    }
}
