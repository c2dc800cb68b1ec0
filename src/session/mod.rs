//! Async driver for `MemoryGame`.
//!
//! A `GameSession` is a cloneable handle to a tokio task that exclusively
//! owns one engine. The task:
//!
//! - renders a face-down grid through the `Presenter` when a game starts
//! - reports every reveal immediately
//! - waits the configured delay after a second reveal, then reports the
//!   match or mismatch (and completion)
//! - drops a pending resolution timer when a new game starts
//!
//! ## Example
//!
//! ```
//! use vocab_match::core::{GameRng, MatchConfig};
//! use vocab_match::session::{ChannelPresenter, GameSession};
//! use vocab_match::vocab::Catalog;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let (presenter, mut updates) = ChannelPresenter::new();
//! let session = GameSession::spawn(MatchConfig::default(), GameRng::new(7), presenter);
//!
//! let pool = Catalog::builtin().pool("familia").unwrap().to_vec();
//! let slots = session.start_default(pool).await.unwrap();
//! assert_eq!(slots.len(), 12);
//!
//! assert!(updates.recv().await.is_some()); // the grid
//! session.shutdown().await.unwrap();
//! # });
//! ```

mod actor;
pub mod presenter;

use tokio::sync::{mpsc, oneshot};
use tracing::info;

use self::actor::Command;
use crate::core::{GameRng, MatchConfig, SessionError};
use crate::game::{CardSlot, GameEvent, MemoryGame};
use crate::vocab::VocabularyItem;

pub use presenter::{ChannelPresenter, Presenter, PresenterUpdate};

/// Handle to a running game session.
///
/// Cloning the handle shares the session. The task stops on `shutdown` or
/// when the last handle is dropped.
#[derive(Clone, Debug)]
pub struct GameSession {
    commands: mpsc::Sender<Command>,
}

impl GameSession {
    /// Spawn a session task on the current tokio runtime.
    ///
    /// Panics if called outside a runtime.
    pub fn spawn<P: Presenter>(config: MatchConfig, rng: GameRng, presenter: P) -> Self {
        let (commands, mailbox) = mpsc::channel(config.effective_mailbox_capacity());
        info!(
            seed = rng.seed(),
            resolve_delay_ms = config.resolve_delay_ms,
            "spawning game session"
        );

        let game = MemoryGame::new(config, rng);
        tokio::spawn(actor::run(game, presenter, mailbox));

        Self { commands }
    }

    /// Start a game with `pairs` pairs from the front of `pool`.
    ///
    /// Returns the face-down grid that was also sent to the presenter.
    pub async fn start_game(
        &self,
        pool: Vec<VocabularyItem>,
        pairs: usize,
    ) -> Result<Vec<CardSlot>, SessionError> {
        let slots = self
            .request(|reply| Command::Start {
                pool,
                pairs: Some(pairs),
                reply,
            })
            .await??;
        Ok(slots)
    }

    /// Start a game with the configured default pair count.
    pub async fn start_default(
        &self,
        pool: Vec<VocabularyItem>,
    ) -> Result<Vec<CardSlot>, SessionError> {
        let slots = self
            .request(|reply| Command::Start {
                pool,
                pairs: None,
                reply,
            })
            .await??;
        Ok(slots)
    }

    /// Select a card.
    ///
    /// Returns the immediate events (`[Revealed]`, or empty if the selection
    /// was ignored). Resolutions arrive later through the presenter.
    pub async fn select_card(&self, position: usize) -> Result<Vec<GameEvent>, SessionError> {
        let events = self
            .request(|reply| Command::Select { position, reply })
            .await??;
        Ok(events)
    }

    /// Current board as the presenter may show it.
    pub async fn board(&self) -> Result<Vec<CardSlot>, SessionError> {
        self.request(|reply| Command::Board { reply }).await
    }

    /// Stop the session task. A pending resolution is discarded.
    pub async fn shutdown(&self) -> Result<(), SessionError> {
        self.request(|reply| Command::Shutdown { reply }).await
    }

    /// Check if the session task has stopped.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.commands.is_closed()
    }

    async fn request<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<T, SessionError> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(command(reply))
            .await
            .map_err(|_| SessionError::Closed)?;
        response.await.map_err(|_| SessionError::Closed)
    }
}
