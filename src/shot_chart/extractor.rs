//! Event extraction
//!
//! Keeps only goals, shots on goal and missed shots from the play list and
//! checks the fields every retained play must carry.

use crate::error::MalformedEventError;
use crate::feed::RawPlay;
use serde::{Deserialize, Serialize};

/// The three play kinds that end up on a shot chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Goal,
    Shot,
    MissedShot,
}

impl EventKind {
    /// Map a feed label; anything else (blocked shots, faceoffs, ...) is `None`
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Goal" => Some(Self::Goal),
            "Shot" => Some(Self::Shot),
            "Missed Shot" => Some(Self::MissedShot),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Goal => "Goal",
            Self::Shot => "Shot",
            Self::MissedShot => "Missed Shot",
        }
    }
}

/// A play that passed the label filter, not yet validated
#[derive(Debug, Clone, Copy)]
pub struct ExtractedPlay<'a> {
    pub index: usize,
    pub kind: EventKind,
    pub play: &'a RawPlay,
}

/// A validated shot event with its required fields resolved
#[derive(Debug, Clone, PartialEq)]
pub struct ShotEvent<'a> {
    pub index: usize,
    pub kind: EventKind,
    pub team: &'a str,
    pub x: i32,
    pub y: i32,
    pub period_type: Option<&'a str>,
    pub empty_net: Option<bool>,
}

impl<'a> ExtractedPlay<'a> {
    /// Resolve team code and coordinates, naming the first missing field
    pub fn validate(&self) -> Result<ShotEvent<'a>, MalformedEventError> {
        let play = self.play;
        let team = play
            .team_code()
            .ok_or_else(|| MalformedEventError::new(self.index, "team.triCode"))?;
        let x = play
            .coordinates
            .x
            .ok_or_else(|| MalformedEventError::new(self.index, "coordinates.x"))?;
        let y = play
            .coordinates
            .y
            .ok_or_else(|| MalformedEventError::new(self.index, "coordinates.y"))?;

        Ok(ShotEvent {
            index: self.index,
            kind: self.kind,
            team,
            // Truncates toward zero like the feed's integer rink grid
            x: x as i32,
            y: y as i32,
            period_type: play.period_type(),
            empty_net: play.empty_net(),
        })
    }
}

/// Iterate the shot-related plays in feed order
pub fn extract_shot_events(plays: &[RawPlay]) -> impl Iterator<Item = ExtractedPlay<'_>> {
    plays.iter().enumerate().filter_map(|(index, play)| {
        let Some(label) = play.event_label() else {
            tracing::trace!("Play #{} has no event label, skipping", index);
            return None;
        };
        EventKind::from_label(label).map(|kind| ExtractedPlay { index, kind, play })
    })
}
