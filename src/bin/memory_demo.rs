//! Plays one memory game against a live session with a perfect-memory
//! player, logging every outcome.
//!
//! ```text
//! memory-demo --category naturaleza --pairs 4 --seed 7
//! memory-demo --lesson numeros
//! RUST_LOG=vocab_match=debug memory-demo --delay-ms 0
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use rustc_hash::{FxHashMap, FxHashSet};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vocab_match::core::{DEFAULT_PAIR_COUNT, DEFAULT_RESOLVE_DELAY_MS};
use vocab_match::{
    builtin_lessons, Catalog, ChannelPresenter, GameEvent, GameRng, GameSession, MatchConfig,
    PresenterUpdate,
};

#[derive(Parser)]
#[command(name = "memory-demo")]
#[command(about = "Auto-play a vocabulary memory game", long_about = None)]
struct Cli {
    /// Shuffle seed (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Category to draw words from
    #[arg(short, long, default_value = "basico")]
    category: String,

    /// Number of pairs to deal
    #[arg(short, long, default_value_t = DEFAULT_PAIR_COUNT)]
    pairs: usize,

    /// Delay before a revealed pair resolves
    #[arg(long, default_value_t = DEFAULT_RESOLVE_DELAY_MS)]
    delay_ms: u64,

    /// Lesson to draw words from instead of a category
    #[arg(short, long, conflicts_with = "category")]
    lesson: Option<String>,

    /// JSON catalog to use instead of the bundled word lists
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// List categories and lessons, then exit
    #[arg(long)]
    list: bool,
}

/// Remembers every revealed card.
#[derive(Default)]
struct Memory {
    seen: FxHashMap<usize, String>,
    matched: FxHashSet<usize>,
}

impl Memory {
    fn record(&mut self, events: &[GameEvent]) -> Option<String> {
        events.iter().find_map(|event| match event {
            GameEvent::Revealed { position, item } => {
                self.seen.insert(*position, item.term.clone());
                Some(item.term.clone())
            }
            _ => None,
        })
    }

    fn known_pair(&self) -> Option<(usize, usize)> {
        let open: Vec<_> = self
            .seen
            .iter()
            .filter(|(position, _)| !self.matched.contains(*position))
            .collect();

        open.iter().enumerate().find_map(|(i, (a, term))| {
            open[i + 1..]
                .iter()
                .find(|(_, other)| other == term)
                .map(|(b, _)| (**a, **b))
        })
    }

    fn known_partner(&self, position: usize, term: &str) -> Option<usize> {
        self.seen
            .iter()
            .find(|(p, t)| **p != position && t.as_str() == term && !self.matched.contains(*p))
            .map(|(p, _)| *p)
    }

    fn unseen(&self, cards: usize, except: Option<usize>) -> Option<usize> {
        (0..cards).find(|p| !self.seen.contains_key(p) && Some(*p) != except)
    }
}

/// Wait for the resolution of the pair just revealed.
///
/// Returns `true` once the game is complete.
async fn await_resolution(
    updates: &mut UnboundedReceiver<PresenterUpdate>,
    memory: &mut Memory,
    cards: usize,
) -> anyhow::Result<bool> {
    while let Some(update) = updates.recv().await {
        match update {
            PresenterUpdate::Outcome(GameEvent::Matched { positions }) => {
                info!(?positions, "match");
                memory.matched.extend(positions);
                // The last match is followed by Completed.
                if memory.matched.len() < cards {
                    return Ok(false);
                }
            }
            PresenterUpdate::Outcome(GameEvent::Mismatched { positions }) => {
                info!(?positions, "no match");
                return Ok(false);
            }
            PresenterUpdate::Outcome(GameEvent::Completed) => return Ok(true),
            PresenterUpdate::Outcome(GameEvent::Revealed { .. }) | PresenterUpdate::Grid(_) => {}
        }
    }
    bail!("session stopped before the pair resolved")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading catalog {}", path.display()))?;
            Catalog::from_json(&content)?
        }
        None => Catalog::builtin(),
    };

    if cli.list {
        for category in catalog.categories() {
            println!("{:<12} {} ({} words)", category.key, category.label, category.items.len());
        }
        for lesson in builtin_lessons() {
            println!("{:<12} {} ({} words)", lesson.key, lesson.title, lesson.vocabulary.len());
        }
        return Ok(());
    }

    let (source, pool) = match &cli.lesson {
        Some(key) => {
            let Some(lesson) = builtin_lessons().into_iter().find(|l| &l.key == key) else {
                bail!("unknown lesson: {key}");
            };
            (key.clone(), lesson.pool())
        }
        None => (cli.category.clone(), catalog.pool(&cli.category)?.to_vec()),
    };
    let rng = cli.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    let config = MatchConfig::new()
        .with_pair_count(cli.pairs)
        .with_resolve_delay(std::time::Duration::from_millis(cli.delay_ms));

    let (presenter, mut updates) = ChannelPresenter::new();
    let session = GameSession::spawn(config, rng, presenter);

    let slots = session.start_default(pool).await?;
    let cards = slots.len();
    info!(%source, cards, "game started");

    let mut memory = Memory::default();
    let mut turns = 0usize;
    let mut complete = cards == 0;

    while !complete {
        turns += 1;

        let (first, second) = match memory.known_pair() {
            Some((a, b)) => {
                memory.record(&session.select_card(a).await?);
                memory.record(&session.select_card(b).await?);
                (a, b)
            }
            None => {
                let Some(first) = memory.unseen(cards, None) else {
                    bail!("no card left to try");
                };
                let term = memory
                    .record(&session.select_card(first).await?)
                    .context("first card was not revealed")?;

                let second = match memory.known_partner(first, &term) {
                    Some(partner) => partner,
                    None => memory
                        .unseen(cards, Some(first))
                        .context("no second card left to try")?,
                };
                memory.record(&session.select_card(second).await?);
                (first, second)
            }
        };

        info!(turn = turns, first, second, "flipped");
        complete = await_resolution(&mut updates, &mut memory, cards).await?;
    }

    info!(turns, pairs = cards / 2, "all pairs found");
    session.shutdown().await?;
    Ok(())
}
