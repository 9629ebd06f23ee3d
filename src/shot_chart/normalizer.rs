//! Coordinate normalization
//!
//! Mirrors each play into the canonical attacking frame: home shots on the
//! positive-x half, away shots on the negative-x half. The rule looks only at
//! the sign of the raw x and the play's side, never at the period.

use crate::feed::TeamCodes;
use serde::{Deserialize, Serialize};

/// Which side of the game a play's team is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    /// Any code other than the home code counts as the away side
    pub fn of(team_code: &str, teams: &TeamCodes) -> Self {
        if team_code == teams.home {
            Self::Home
        } else {
            Self::Away
        }
    }
}

/// Point in the canonical attacking frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizedCoordinate {
    pub x: i32,
    pub y: i32,
}

impl NormalizedCoordinate {
    /// Normalize raw rink coordinates for a play by `side`
    pub fn normalize(x: i32, y: i32, side: TeamSide) -> Self {
        let mirrored = match side {
            TeamSide::Home => x < 0,
            TeamSide::Away => x > 0,
        };

        if !mirrored {
            return Self { x, y };
        }

        // Saturating keeps the mapping total at i32::MIN
        let x = match side {
            TeamSide::Home => x.saturating_abs(),
            TeamSide::Away => x.saturating_neg(),
        };
        Self {
            x,
            y: y.saturating_neg(),
        }
    }
}
