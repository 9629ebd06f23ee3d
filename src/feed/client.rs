//! NHL stats API client
//!
//! Blocking `ureq` fetch of `{base}/game/{id}/feed/live`.

use super::model::GameFeed;
use super::provider::{FeedProvider, GameId};
use crate::error::FeedError;
use std::time::Duration;

/// Default NHL stats API root
pub const NHL_API_BASE_URL: &str = "https://statsapi.web.nhl.com/api/v1";

/// Fetches live game feeds from the NHL stats API
#[derive(Debug, Clone)]
pub struct NhlApiClient {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for NhlApiClient {
    fn default() -> Self {
        Self::new(NHL_API_BASE_URL, Duration::from_secs(10))
    }
}

impl NhlApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
            user_agent: format!("nhl-shot-chart/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// e.g. `https://statsapi.web.nhl.com/api/v1/game/2022020728/feed/live`
    pub fn live_feed_url(&self, game_id: GameId) -> String {
        format!(
            "{}/game/{}/feed/live",
            self.base_url.trim_end_matches('/'),
            game_id
        )
    }
}

impl FeedProvider for NhlApiClient {
    fn fetch_game_feed(&self, game_id: GameId) -> Result<GameFeed, FeedError> {
        let url = self.live_feed_url(game_id);
        tracing::info!("[feed] Fetching live feed: {}", url);

        let response = match ureq::get(&url)
            .set("User-Agent", &self.user_agent)
            .set("Accept", "application/json")
            .timeout(self.timeout)
            .call()
        {
            Ok(resp) => resp,
            Err(ureq::Error::Status(status, _)) => {
                tracing::error!("[feed] {} returned status {}", url, status);
                return Err(FeedError::Status { url, status });
            }
            Err(e) => {
                tracing::error!("[feed] Network error: {}", e);
                return Err(FeedError::Network {
                    url,
                    source: Box::new(e),
                });
            }
        };

        let feed: GameFeed = response.into_json().map_err(|e| {
            tracing::error!("[feed] Failed to parse response: {}", e);
            FeedError::Parse {
                origin: url.clone(),
                source: Box::new(e),
            }
        })?;

        tracing::info!(
            "[feed] Game {}: {} @ {}, {} plays",
            game_id,
            feed.game_data.teams.away.abbreviation,
            feed.game_data.teams.home.abbreviation,
            feed.plays().len()
        );
        Ok(feed)
    }

    fn name(&self) -> &'static str {
        "NhlApiClient"
    }
}
