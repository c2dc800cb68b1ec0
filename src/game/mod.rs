//! Memory-matching game: deck, turn state, and the engine that drives them.
//!
//! ## Key Types
//!
//! - `Deck`: Shuffled cards, every chosen item dealt twice
//! - `TurnState`: Face-up and matched positions
//! - `MemoryGame`: The engine (`start_game`, `select_card`, `resolve`)
//! - `GameEvent`: Outcomes for the presentation layer
//! - `ResolutionTicket`: Handle for a deferred match/mismatch decision

pub mod deck;
pub mod engine;
pub mod event;
pub mod turn;

pub use deck::{CardRef, CardSlot, Deck, PairId, SlotState};
pub use engine::{GameStart, MemoryGame, Phase, Selection};
pub use event::{GameEvent, ResolutionTicket, ScheduledResolution};
pub use turn::TurnState;
