//! Game configuration.
//!
//! `MatchConfig` carries the tunables shared by the engine and the session:
//! - default pair count for `start_default`
//! - the presentation delay before a revealed pair resolves
//! - the session mailbox size
//!
//! All fields have defaults, so partial JSON content deserializes cleanly.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Pairs dealt by default (the first six words of a category).
pub const DEFAULT_PAIR_COUNT: usize = 6;

/// Delay between the second reveal and its match/mismatch resolution.
pub const DEFAULT_RESOLVE_DELAY_MS: u64 = 1000;

/// Commands buffered by a session before senders wait.
pub const DEFAULT_MAILBOX_CAPACITY: usize = 32;

/// Largest mailbox a session will allocate permits for.
pub const MAX_MAILBOX_CAPACITY: usize = 1 << 16;

/// Engine and session configuration.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use vocab_match::core::MatchConfig;
///
/// let config = MatchConfig::new()
///     .with_pair_count(4)
///     .with_resolve_delay(Duration::from_millis(250));
///
/// assert_eq!(config.pair_count, 4);
/// assert_eq!(config.resolve_delay(), Duration::from_millis(250));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Pairs dealt by `MemoryGame::start_default`.
    ///
    /// Zero is allowed and produces an immediately completed game.
    pub pair_count: usize,

    /// Resolution delay in milliseconds.
    pub resolve_delay_ms: u64,

    /// Session command buffer size. Clamped to `1..=MAX_MAILBOX_CAPACITY`.
    pub mailbox_capacity: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            pair_count: DEFAULT_PAIR_COUNT,
            resolve_delay_ms: DEFAULT_RESOLVE_DELAY_MS,
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
        }
    }
}

impl MatchConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default pair count.
    #[must_use]
    pub fn with_pair_count(mut self, pairs: usize) -> Self {
        self.pair_count = pairs;
        self
    }

    /// Set the resolution delay.
    ///
    /// Sub-millisecond precision is dropped.
    #[must_use]
    pub fn with_resolve_delay(mut self, delay: Duration) -> Self {
        self.resolve_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the session mailbox capacity.
    #[must_use]
    pub fn with_mailbox_capacity(mut self, capacity: usize) -> Self {
        self.mailbox_capacity = capacity;
        self
    }

    /// The resolution delay as a `Duration`.
    #[must_use]
    pub fn resolve_delay(&self) -> Duration {
        Duration::from_millis(self.resolve_delay_ms)
    }

    /// Mailbox capacity usable with `tokio::sync::mpsc::channel`.
    ///
    /// tokio panics on a zero buffer or one above its permit limit, so the
    /// configured value is clamped into `1..=MAX_MAILBOX_CAPACITY`.
    #[must_use]
    pub fn effective_mailbox_capacity(&self) -> usize {
        self.mailbox_capacity.clamp(1, MAX_MAILBOX_CAPACITY)
    }
}
