//! Outcomes reported to the presentation layer, and resolution scheduling.
//!
//! A second reveal does not resolve immediately. The engine hands out a
//! `ScheduledResolution` carrying a `ResolutionTicket`; whoever drives the
//! engine waits `delay` and then calls `MemoryGame::resolve` with the ticket.
//! Tickets are tagged with the game generation, so a ticket that outlives
//! its game resolves nothing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::vocab::VocabularyItem;

/// Something the presentation layer should show.
///
/// Serializes as an internally tagged object, e.g.
/// `{"event":"matched","positions":[0,1]}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A card was turned face-up.
    Revealed {
        position: usize,
        item: VocabularyItem,
    },

    /// Two face-up cards formed a pair and are locked.
    Matched { positions: [usize; 2] },

    /// Two face-up cards differed and are face-down again.
    Mismatched { positions: [usize; 2] },

    /// Every pair is matched. Always the last event of a game.
    Completed,
}

impl GameEvent {
    /// Check if this event ends the game.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, GameEvent::Completed)
    }
}

/// Identifies one pending resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolutionTicket {
    /// Game the ticket was issued in. Bumped by every `start_game`.
    pub generation: u64,

    /// Pair number within that game.
    pub sequence: u64,
}

impl ResolutionTicket {
    /// Create a new ticket.
    #[must_use]
    pub const fn new(generation: u64, sequence: u64) -> Self {
        Self {
            generation,
            sequence,
        }
    }
}

impl std::fmt::Display for ResolutionTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Resolution({}/{})", self.generation, self.sequence)
    }
}

/// A resolution the driver must deliver after `delay`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledResolution {
    pub ticket: ResolutionTicket,
    pub delay: Duration,
}
