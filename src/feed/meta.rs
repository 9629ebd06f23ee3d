//! Game metadata resolution
//!
//! Pulls the period/clock/status strings out of the feed and localizes the
//! scheduled start time.

use super::model::GameFeed;
use crate::error::FeedError;
use chrono::{NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Start time format used by the feed, e.g. `2023-01-20T03:00:00Z`
pub const FEED_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Display format for start times, e.g. `2023-01-19 7:00pm`
pub const LOCAL_DATE_TIME_FORMAT: &str = "%Y-%m-%d %-I:%M%P";

const UNKNOWN_STATUS: &str = "Unknown";

/// Already resolved game metadata carried into the chart result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMeta {
    /// Current period ordinal, e.g. `3rd`, `OT`, `SO`
    pub period: String,
    /// Time left in the current period, e.g. `12:34` or `Final`
    pub time_remaining: String,
    /// Detailed game state, e.g. `Final`, `In Progress`
    pub status: String,
    /// Scheduled start in the display time zone
    pub start_time: String,
}

impl GameMeta {
    /// Resolve metadata from a feed, formatting the start time in `tz`
    pub fn from_feed<Tz>(feed: &GameFeed, tz: &Tz) -> Result<Self, FeedError>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let linescore = &feed.live_data.linescore;
        let period = linescore
            .current_period_ordinal
            .clone()
            .ok_or(FeedError::MissingField(
                "liveData.linescore.currentPeriodOrdinal",
            ))?;
        let time_remaining = linescore
            .current_period_time_remaining
            .clone()
            .ok_or(FeedError::MissingField(
                "liveData.linescore.currentPeriodTimeRemaining",
            ))?;

        let raw_start = feed
            .game_data
            .datetime
            .date_time
            .as_deref()
            .ok_or(FeedError::MissingField("gameData.datetime.dateTime"))?;
        let start_time = format_start_time(raw_start, tz)?;

        let status = feed
            .game_data
            .status
            .as_ref()
            .and_then(|s| s.detailed_state.clone())
            .unwrap_or_else(|| UNKNOWN_STATUS.to_string());

        Ok(Self {
            period,
            time_remaining,
            status,
            start_time,
        })
    }
}

/// Convert a feed timestamp into the display format in `tz`
pub fn format_start_time<Tz>(raw: &str, tz: &Tz) -> Result<String, FeedError>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let naive = NaiveDateTime::parse_from_str(raw, FEED_DATE_TIME_FORMAT).map_err(|source| {
        FeedError::InvalidStartTime {
            value: raw.to_string(),
            source,
        }
    })?;
    let local = Utc.from_utc_datetime(&naive).with_timezone(tz);
    Ok(local.format(LOCAL_DATE_TIME_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use serde_json::json;

    fn pacific() -> FixedOffset {
        FixedOffset::west_opt(8 * 3600).unwrap()
    }

    fn feed(linescore: serde_json::Value, status: Option<&str>) -> GameFeed {
        let mut game_data = json!({
            "datetime": { "dateTime": "2023-01-20T03:00:00Z" },
            "teams": {
                "away": { "abbreviation": "NJD" },
                "home": { "abbreviation": "SEA" }
            }
        });
        if let Some(state) = status {
            game_data["status"] = json!({ "detailedState": state });
        }
        serde_json::from_value(json!({
            "gameData": game_data,
            "liveData": { "linescore": linescore, "plays": { "allPlays": [] } }
        }))
        .unwrap()
    }

    #[test]
    fn test_format_start_time_pacific() {
        let formatted = format_start_time("2023-01-20T03:00:00Z", &pacific()).unwrap();
        assert_eq!(formatted, "2023-01-19 7:00pm");
    }

    #[test]
    fn test_format_start_time_utc_morning() {
        let formatted = format_start_time("2023-01-21T09:05:00Z", &Utc).unwrap();
        assert_eq!(formatted, "2023-01-21 9:05am");
    }

    #[test]
    fn test_format_start_time_rejects_garbage() {
        let err = format_start_time("Jan 20 2023", &Utc).unwrap_err();
        assert!(matches!(err, FeedError::InvalidStartTime { .. }));
    }

    #[test]
    fn test_meta_from_feed() {
        let feed = feed(
            json!({
                "currentPeriodOrdinal": "3rd",
                "currentPeriodTimeRemaining": "Final"
            }),
            Some("Final"),
        );

        let meta = GameMeta::from_feed(&feed, &pacific()).unwrap();
        assert_eq!(meta.period, "3rd");
        assert_eq!(meta.time_remaining, "Final");
        assert_eq!(meta.status, "Final");
        assert_eq!(meta.start_time, "2023-01-19 7:00pm");
    }

    #[test]
    fn test_meta_missing_status_defaults() {
        let feed = feed(
            json!({
                "currentPeriodOrdinal": "1st",
                "currentPeriodTimeRemaining": "20:00"
            }),
            None,
        );

        let meta = GameMeta::from_feed(&feed, &Utc).unwrap();
        assert_eq!(meta.status, "Unknown");
    }

    #[test]
    fn test_meta_missing_linescore_field() {
        let feed = feed(json!({ "currentPeriodOrdinal": "2nd" }), None);

        let err = GameMeta::from_feed(&feed, &Utc).unwrap_err();
        assert!(matches!(
            err,
            FeedError::MissingField("liveData.linescore.currentPeriodTimeRemaining")
        ));
    }
}
