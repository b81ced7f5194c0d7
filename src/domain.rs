//! Summary statistics supplied by the aggregation layer.
//!
//! The engine accepts these aggregates as-is; averages are assumed to be non-negative and to
//! cover completed matches only. Call [`RefereeAggregate::validate`] and friends at the boundary
//! where untrusted data enters.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum InvalidAggregate {
    #[error("{field} must be a finite, non-negative number, got {value}")]
    NegativeOrNonFinite { field: &'static str, value: f64 },

    #[error("recent form entry {index} must be a finite, non-negative number, got {value}")]
    RecentForm { index: usize, value: f64 },
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), InvalidAggregate> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(InvalidAggregate::NegativeOrNonFinite { field, value })
    }
}

/// A referee's season-level (or otherwise filtered) disciplinary summary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefereeAggregate {
    pub avg_yellow_cards: f64,
    pub avg_red_cards: f64,
    pub matches_officiated: u32,
    pub strictness_index: f64,
    /// Total cards (yellow + red) in the referee's most recent matches, oldest first.
    #[serde(default)]
    pub recent_form: Option<Vec<f64>>,
}
impl RefereeAggregate {
    pub fn validate(&self) -> Result<(), InvalidAggregate> {
        check_non_negative("avgYellowCards", self.avg_yellow_cards)?;
        check_non_negative("avgRedCards", self.avg_red_cards)?;
        if let Some(recent_form) = &self.recent_form {
            for (index, &value) in recent_form.iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(InvalidAggregate::RecentForm { index, value });
                }
            }
        }
        Ok(())
    }

    /// The recent-form series, or an empty slice if none was supplied.
    pub fn recent_form(&self) -> &[f64] {
        self.recent_form.as_deref().unwrap_or_default()
    }
}

/// A team's disciplinary profile, irrespective of venue.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamAggregate {
    pub avg_yellow_received: f64,
    pub avg_red_received: f64,
    pub avg_fouls_committed: f64,
    pub matches_played: u32,
}
impl TeamAggregate {
    pub fn validate(&self) -> Result<(), InvalidAggregate> {
        check_non_negative("avgYellowReceived", self.avg_yellow_received)?;
        check_non_negative("avgRedReceived", self.avg_red_received)?;
        check_non_negative("avgFoulsCommitted", self.avg_fouls_committed)?;
        Ok(())
    }
}

/// Both sides of a fixture. Team data only informs a forecast when both sides are known, so the
/// pair travels together.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Matchup {
    pub home: TeamAggregate,
    pub away: TeamAggregate,
}
impl Matchup {
    pub fn new(home: TeamAggregate, away: TeamAggregate) -> Self {
        Self { home, away }
    }

    /// Forms a matchup only if both sides are present.
    pub fn from_pair(home: Option<TeamAggregate>, away: Option<TeamAggregate>) -> Option<Self> {
        match (home, away) {
            (Some(home), Some(away)) => Some(Self { home, away }),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), InvalidAggregate> {
        self.home.validate()?;
        self.away.validate()
    }

    pub fn combined_yellow(&self) -> f64 {
        self.home.avg_yellow_received + self.away.avg_yellow_received
    }

    pub fn combined_red(&self) -> f64 {
        self.home.avg_red_received + self.away.avg_red_received
    }

    /// The fewer of the two sides' match counts.
    pub fn min_matches_played(&self) -> u32 {
        u32::min(self.home.matches_played, self.away.matches_played)
    }
}

/// Match result from the team's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    Win,
    Draw,
    Loss,
}

/// One past match between a given team and a given referee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalMatchOutcome {
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub fouls: u32,
    pub result: MatchResult,
}
impl HistoricalMatchOutcome {
    pub fn total_cards(&self) -> u32 {
        self.yellow_cards + self.red_cards
    }
}
