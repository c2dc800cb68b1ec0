//! The presentation-layer seam.
//!
//! The engine talks to whatever draws the cards through two calls:
//! render a grid of face-down cards, and report an outcome.

use tokio::sync::mpsc;

use crate::game::{CardSlot, GameEvent};

/// Presentation-layer collaborator driven by a session.
///
/// Implementations must not block: they run on the session task.
pub trait Presenter: Send + 'static {
    /// Draw a fresh grid. Called once per started game.
    fn render_grid(&mut self, slots: &[CardSlot]);

    /// Show an outcome (reveal, match, mismatch, completion).
    fn report(&mut self, event: &GameEvent);
}

/// A presenter call, as forwarded by `ChannelPresenter`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PresenterUpdate {
    Grid(Vec<CardSlot>),
    Outcome(GameEvent),
}

/// Presenter that forwards every call over an unbounded channel.
///
/// Useful when the real renderer lives on another task, and in tests.
#[derive(Clone, Debug)]
pub struct ChannelPresenter {
    tx: mpsc::UnboundedSender<PresenterUpdate>,
}

impl ChannelPresenter {
    /// Create a presenter and the receiving end of its updates.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<PresenterUpdate>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Presenter for ChannelPresenter {
    fn render_grid(&mut self, slots: &[CardSlot]) {
        // A dropped receiver means nobody is watching; the game goes on.
        let _ = self.tx.send(PresenterUpdate::Grid(slots.to_vec()));
    }

    fn report(&mut self, event: &GameEvent) {
        let _ = self.tx.send(PresenterUpdate::Outcome(event.clone()));
    }
}
