//! Game feed module
//!
//! Everything upstream of the shot chart pipeline: fetching the live feed,
//! its typed model, and metadata resolution.
//!
//! ```text
//! FeedProvider
//!   ├── NhlApiClient      (GET {base}/game/{id}/feed/live)
//!   └── FileFeedProvider  ({dir}/{id}.json)
//!         ↓
//!      GameFeed ──→ GameMeta::from_feed
//!         ↓
//!      shot_chart::build_shot_chart
//! ```

pub mod client;
pub mod meta;
pub mod model;
pub mod provider;

pub use client::{NhlApiClient, NHL_API_BASE_URL};
pub use meta::{format_start_time, GameMeta};
pub use model::{Coordinates, GameFeed, RawPlay, TeamCodes};
pub use provider::{FeedProvider, FileFeedProvider, GameId};
