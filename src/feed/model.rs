//! Typed subset of the NHL live game feed
//!
//! Only the fields the shot chart needs are modelled. Per-play fields are
//! optional so a single corrupt play never fails the whole document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// `/game/{id}/feed/live` response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameFeed {
    pub game_data: GameData,
    pub live_data: LiveData,
}

impl GameFeed {
    /// Home and away team codes of this game
    pub fn team_codes(&self) -> TeamCodes {
        TeamCodes::new(
            self.game_data.teams.home.abbreviation.clone(),
            self.game_data.teams.away.abbreviation.clone(),
        )
    }

    /// Ordered play list
    pub fn plays(&self) -> &[RawPlay] {
        &self.live_data.plays.all_plays
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameData {
    #[serde(default)]
    pub datetime: GameDateTime,
    pub teams: Teams,
    #[serde(default)]
    pub status: Option<GameStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDateTime {
    /// Scheduled start, e.g. `2023-01-20T03:00:00Z`
    #[serde(default)]
    pub date_time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teams {
    pub home: TeamInfo,
    pub away: TeamInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamInfo {
    /// Three letter code, e.g. `SEA`
    pub abbreviation: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatus {
    #[serde(default)]
    pub detailed_state: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LiveData {
    #[serde(default)]
    pub linescore: Linescore,
    #[serde(default)]
    pub plays: Plays,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Linescore {
    #[serde(default)]
    pub current_period_ordinal: Option<String>,
    #[serde(default)]
    pub current_period_time_remaining: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plays {
    /// Entries that are not play objects become empty plays, keeping indices stable
    #[serde(default, deserialize_with = "lenient_plays")]
    pub all_plays: Vec<RawPlay>,
}

/// One play-by-play record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPlay {
    #[serde(default, deserialize_with = "lenient_section")]
    pub result: PlayResult,
    #[serde(default, deserialize_with = "lenient_section")]
    pub team: Option<PlayTeam>,
    #[serde(default, deserialize_with = "lenient_section")]
    pub coordinates: Coordinates,
    #[serde(default, deserialize_with = "lenient_section")]
    pub about: PlayAbout,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayResult {
    /// Event label, e.g. `Goal`, `Shot`, `Missed Shot`, `Faceoff`
    #[serde(default, deserialize_with = "lenient_string")]
    pub event: Option<String>,
    /// Only meaningful on goals; non-boolean values read as absent
    #[serde(default, deserialize_with = "lenient_bool")]
    pub empty_net: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayTeam {
    #[serde(default, deserialize_with = "lenient_string")]
    pub tri_code: Option<String>,
}

/// Raw rink coordinates in feet from center ice; non-numeric values read as absent
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub x: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub y: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayAbout {
    /// `REGULAR`, `OVERTIME` or `SHOOTOUT`; non-string values read as absent
    #[serde(default, deserialize_with = "lenient_string")]
    pub period_type: Option<String>,
}

impl RawPlay {
    /// Build a located play owned by `team`
    pub fn new(event: &str, team: &str, x: f64, y: f64) -> Self {
        Self {
            result: PlayResult {
                event: Some(event.to_string()),
                empty_net: None,
            },
            team: Some(PlayTeam {
                tri_code: Some(team.to_string()),
            }),
            coordinates: Coordinates {
                x: Some(x),
                y: Some(y),
            },
            about: PlayAbout::default(),
        }
    }

    pub fn with_period_type(mut self, period_type: &str) -> Self {
        self.about.period_type = Some(period_type.to_string());
        self
    }

    pub fn with_empty_net(mut self, empty_net: bool) -> Self {
        self.result.empty_net = Some(empty_net);
        self
    }

    pub fn event_label(&self) -> Option<&str> {
        self.result.event.as_deref()
    }

    pub fn team_code(&self) -> Option<&str> {
        self.team.as_ref().and_then(|team| team.tri_code.as_deref())
    }

    pub fn period_type(&self) -> Option<&str> {
        self.about.period_type.as_deref()
    }

    pub fn empty_net(&self) -> Option<bool> {
        self.result.empty_net
    }
}

/// Home and away team codes for one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamCodes {
    pub home: String,
    pub away: String,
}

impl TeamCodes {
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
        }
    }
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_bool()))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_str().map(str::to_string)))
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()))
}

/// Null or wrongly shaped sections fall back to their default
fn lenient_section<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default())
}

fn lenient_plays<'de, D>(deserializer: D) -> Result<Vec<RawPlay>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;
    Ok(values
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).unwrap_or_else(|e| {
                tracing::debug!("Play #{} is not a play object ({}), keeping it empty", index, e);
                RawPlay::default()
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_goal_play() {
        let play: RawPlay = serde_json::from_value(json!({
            "result": { "event": "Goal", "emptyNet": false },
            "about": { "periodType": "REGULAR", "period": 2 },
            "coordinates": { "x": -55.0, "y": 6.0 },
            "team": { "id": 55, "triCode": "SEA" }
        }))
        .unwrap();

        assert_eq!(play.event_label(), Some("Goal"));
        assert_eq!(play.team_code(), Some("SEA"));
        assert_eq!(play.period_type(), Some("REGULAR"));
        assert_eq!(play.empty_net(), Some(false));
        assert_eq!(play.coordinates.x, Some(-55.0));
    }

    #[test]
    fn test_parse_play_without_optional_sections() {
        let play: RawPlay = serde_json::from_value(json!({
            "result": { "event": "Faceoff" },
            "coordinates": {}
        }))
        .unwrap();

        assert_eq!(play.event_label(), Some("Faceoff"));
        assert!(play.team_code().is_none());
        assert!(play.period_type().is_none());
        assert!(play.empty_net().is_none());
        assert_eq!(play.coordinates, Coordinates::default());
    }

    #[test]
    fn test_malformed_optional_fields_read_as_absent() {
        let play: RawPlay = serde_json::from_value(json!({
            "result": { "event": "Goal", "emptyNet": "yes" },
            "about": { "periodType": 5 },
            "coordinates": { "x": 10, "y": 3 },
            "team": { "triCode": "NJD" }
        }))
        .unwrap();

        assert!(play.empty_net().is_none());
        assert!(play.period_type().is_none());
    }

    #[test]
    fn test_parse_feed_team_codes() {
        let feed: GameFeed = serde_json::from_value(json!({
            "gameData": {
                "datetime": { "dateTime": "2023-01-20T03:00:00Z" },
                "teams": {
                    "away": { "abbreviation": "NJD" },
                    "home": { "abbreviation": "SEA" }
                }
            },
            "liveData": {
                "linescore": {},
                "plays": { "allPlays": [] }
            }
        }))
        .unwrap();

        assert_eq!(feed.team_codes(), TeamCodes::new("SEA", "NJD"));
        assert!(feed.plays().is_empty());
        assert!(feed.game_data.status.is_none());
    }

    #[test]
    fn test_null_sections_read_as_defaults() {
        let play: RawPlay = serde_json::from_value(json!({
            "result": { "event": "Faceoff" },
            "about": null,
            "coordinates": null,
            "team": "SEA"
        }))
        .unwrap();

        assert_eq!(play.event_label(), Some("Faceoff"));
        assert!(play.team_code().is_none());
        assert!(play.period_type().is_none());
        assert_eq!(play.coordinates, Coordinates::default());
    }

    #[test]
    fn test_wrong_typed_play_fields_read_as_absent() {
        let play: RawPlay = serde_json::from_value(json!({
            "result": { "event": 7 },
            "coordinates": { "x": "12", "y": 4.5 },
            "team": { "triCode": ["SEA"] }
        }))
        .unwrap();

        assert!(play.event_label().is_none());
        assert!(play.team_code().is_none());
        assert_eq!(play.coordinates.x, None);
        assert_eq!(play.coordinates.y, Some(4.5));
    }

    #[test]
    fn test_bad_play_does_not_fail_feed() {
        let feed: GameFeed = serde_json::from_value(json!({
            "gameData": {
                "teams": {
                    "away": { "abbreviation": "NJD" },
                    "home": { "abbreviation": "SEA" }
                }
            },
            "liveData": {
                "plays": { "allPlays": [
                    {
                        "result": { "event": "Shot" },
                        "coordinates": { "x": -10, "y": 5 },
                        "team": { "triCode": "SEA" }
                    },
                    { "result": { "event": "Faceoff" }, "about": null, "coordinates": null },
                    { "result": { "event": "Shot" }, "coordinates": { "x": "12", "y": 1 } },
                    null
                ] }
            }
        }))
        .unwrap();

        let plays = feed.plays();
        assert_eq!(plays.len(), 4);
        assert_eq!(plays[0].team_code(), Some("SEA"));
        assert_eq!(plays[1].event_label(), Some("Faceoff"));
        assert_eq!(plays[2].coordinates.x, None);
        assert_eq!(plays[3], RawPlay::default());
    }
}
