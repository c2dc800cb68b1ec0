//! Session task: owns one engine and its resolution timer.
//!
//! The task is the only code that touches the engine. Commands arrive over
//! a bounded mailbox; the armed timer (at most one) lives in the task's
//! loop and is dropped, not awaited, when a new game starts.

use std::pin::Pin;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{sleep, Sleep};
use tracing::debug;

use super::presenter::Presenter;
use crate::core::GameError;
use crate::game::{CardSlot, GameEvent, MemoryGame, ResolutionTicket};
use crate::vocab::VocabularyItem;

/// Requests sent from a `GameSession` handle to its task.
#[derive(Debug)]
pub(crate) enum Command {
    Start {
        pool: Vec<VocabularyItem>,
        /// `None` uses the configured default.
        pairs: Option<usize>,
        reply: oneshot::Sender<Result<Vec<CardSlot>, GameError>>,
    },
    Select {
        position: usize,
        reply: oneshot::Sender<Result<Vec<GameEvent>, GameError>>,
    },
    Board {
        reply: oneshot::Sender<Vec<CardSlot>>,
    },
    Shutdown {
        reply: oneshot::Sender<()>,
    },
}

struct ArmedTimer {
    ticket: ResolutionTicket,
    sleep: Pin<Box<Sleep>>,
}

enum Wake {
    Command(Option<Command>),
    Expired(ResolutionTicket),
}

/// Resolves when the armed timer fires; never resolves if none is armed.
async fn expired(timer: &mut Option<ArmedTimer>) -> ResolutionTicket {
    match timer {
        Some(armed) => {
            armed.sleep.as_mut().await;
            armed.ticket
        }
        None => std::future::pending().await,
    }
}

pub(crate) async fn run<P: Presenter>(
    mut game: MemoryGame,
    mut presenter: P,
    mut commands: mpsc::Receiver<Command>,
) {
    let mut timer: Option<ArmedTimer> = None;

    loop {
        let wake = tokio::select! {
            command = commands.recv() => Wake::Command(command),
            ticket = expired(&mut timer) => Wake::Expired(ticket),
        };

        match wake {
            Wake::Expired(ticket) => {
                timer = None;
                for event in game.resolve(ticket) {
                    presenter.report(&event);
                }
            }

            Wake::Command(Some(Command::Start { pool, pairs, reply })) => {
                let started = match pairs {
                    Some(pairs) => game.start_game(&pool, pairs),
                    None => game.start_default(&pool),
                };
                let result = started.map(|start| {
                    if let Some(armed) = timer.take() {
                        debug!(ticket = %armed.ticket, "dropped resolution timer");
                    }
                    presenter.render_grid(&start.slots);
                    for event in &start.events {
                        presenter.report(event);
                    }
                    start.slots
                });
                let _ = reply.send(result);
            }

            Wake::Command(Some(Command::Select { position, reply })) => {
                let result = game.select_card(position).map(|selection| {
                    for event in &selection.events {
                        presenter.report(event);
                    }
                    if let Some(scheduled) = selection.resolution {
                        timer = Some(ArmedTimer {
                            ticket: scheduled.ticket,
                            sleep: Box::pin(sleep(scheduled.delay)),
                        });
                    }
                    selection.events
                });
                let _ = reply.send(result);
            }

            Wake::Command(Some(Command::Board { reply })) => {
                let _ = reply.send(game.board());
            }

            Wake::Command(Some(Command::Shutdown { reply })) => {
                let _ = reply.send(());
                break;
            }

            // Every handle is gone.
            Wake::Command(None) => break,
        }
    }

    debug!(generation = game.generation(), "game session stopped");
}
