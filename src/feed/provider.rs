//! Feed provider trait and the file-backed implementation
//!
//! Providers hand the pipeline an already parsed `GameFeed`. Schema
//! mismatches surface here as `FeedError::Parse`, never inside the core.

use super::model::GameFeed;
use crate::error::FeedError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// NHL game id, e.g. `2022020728` (season, game type, game number)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl FromStr for GameId {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FeedError::InvalidGameId(s.to_string()));
        }
        trimmed
            .parse::<u64>()
            .map(GameId)
            .map_err(|_| FeedError::InvalidGameId(s.to_string()))
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of live game feeds
///
/// Implement this trait to plug in other feed sources (HTTP, files, caches).
pub trait FeedProvider: Send + Sync {
    /// Fetch and parse the feed for one game
    fn fetch_game_feed(&self, game_id: GameId) -> Result<GameFeed, FeedError>;

    /// Provider name (for logging)
    fn name(&self) -> &'static str;
}

/// Reads `{dir}/{game_id}.json` from disk
#[derive(Debug, Clone)]
pub struct FileFeedProvider {
    dir: PathBuf,
}

impl FileFeedProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path a given game's feed is read from
    pub fn feed_path(&self, game_id: GameId) -> PathBuf {
        self.dir.join(format!("{}.json", game_id))
    }

    /// Parse a feed document from an arbitrary file
    pub fn load_path(path: &Path) -> Result<GameFeed, FeedError> {
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| FeedError::Read {
            path: display.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|e| FeedError::Parse {
            origin: display,
            source: Box::new(e),
        })
    }
}

impl FeedProvider for FileFeedProvider {
    fn fetch_game_feed(&self, game_id: GameId) -> Result<GameFeed, FeedError> {
        let path = self.feed_path(game_id);
        tracing::info!("[feed] Loading game {} from {}", game_id, path.display());
        Self::load_path(&path)
    }

    fn name(&self) -> &'static str {
        "FileFeedProvider"
    }
}
