//! NHL shot charts from play-by-play feeds
//!
//! ```text
//! feed (provider, model, meta) ──→ shot_chart (core pipeline) ──→ render
//! ```

pub mod config;
pub mod error;
pub mod feed;
pub mod render;
pub mod shot_chart;
pub mod slug;

pub use config::AppConfig;
pub use error::{AppResult, ConfigError, FeedError, MalformedEventError, RenderError};
pub use feed::{FeedProvider, FileFeedProvider, GameFeed, GameId, GameMeta, NhlApiClient};
pub use render::{ChartTitle, JsonExporter, Renderer, SummaryPrinter};
pub use shot_chart::{build_from_feed, build_shot_chart, ChartOptions, ShotChartResult};
