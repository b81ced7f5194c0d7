//! How a team has historically fared under a particular referee.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};
use tracing::trace;

use crate::domain::{HistoricalMatchOutcome, MatchResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Excellent,
    Good,
    Neutral,
    Poor,
    VeryPoor,
}
impl Rating {
    pub fn from_score(score: u8) -> Self {
        match score {
            70.. => Rating::Excellent,
            55.. => Rating::Good,
            45.. => Rating::Neutral,
            30.. => Rating::Poor,
            _ => Rating::VeryPoor,
        }
    }
}

/// Whether the team collects fewer or more cards under this referee than the two season
/// averages would suggest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CardTendency {
    Fewer,
    Normal,
    More,
}
impl CardTendency {
    const THRESHOLD_PERCENT: f64 = 15.0;

    pub fn from_deviation(deviation_percent: f64) -> Self {
        if deviation_percent <= -Self::THRESHOLD_PERCENT {
            CardTendency::Fewer
        } else if deviation_percent >= Self::THRESHOLD_PERCENT {
            CardTendency::More
        } else {
            CardTendency::Normal
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    pub score: u8,
    pub rating: Rating,
    pub card_tendency: CardTendency,
    pub historical_matches: usize,
    pub avg_cards_in_history: f64,
}
impl CompatibilityResult {
    pub fn neutral() -> Self {
        Self {
            score: 50,
            rating: Rating::Neutral,
            card_tendency: CardTendency::Normal,
            historical_matches: 0,
            avg_cards_in_history: 0.0,
        }
    }
}

/// Win rate, in percent, of a side with no edge over a three-way result.
const BASELINE_WIN_RATE: f64 = 33.33;
const DEVIATION_WEIGHT: f64 = 0.3;
const WIN_RATE_WEIGHT: f64 = 0.4;

/// Scores the `history` of one team's matches under one referee.
///
/// The expected card count is the mean of the two season averages; when both are zero the
/// deviation is taken as zero rather than dividing by it.
pub fn compatibility(
    history: &[HistoricalMatchOutcome],
    referee_season_avg_yellow: f64,
    team_season_avg_yellow: f64,
) -> CompatibilityResult {
    if history.is_empty() {
        return CompatibilityResult::neutral();
    }

    let matches = history.len();
    let avg_cards_in_history = history
        .iter()
        .map(|outcome| outcome.total_cards() as f64)
        .sum::<f64>()
        / matches as f64;
    let expected_cards = (referee_season_avg_yellow + team_season_avg_yellow) / 2.0;
    let deviation_percent = if expected_cards == 0.0 {
        0.0
    } else {
        (avg_cards_in_history - expected_cards) / expected_cards * 100.0
    };

    let wins = history
        .iter()
        .filter(|outcome| outcome.result == MatchResult::Win)
        .count();
    let win_rate = wins as f64 / matches as f64 * 100.0;

    let mut raw_score = 50.0 - DEVIATION_WEIGHT * deviation_percent
        + WIN_RATE_WEIGHT * (win_rate - BASELINE_WIN_RATE);
    if matches >= 5 {
        raw_score += 5.0;
    }
    if matches >= 10 {
        raw_score += 5.0;
    }
    let score = raw_score.clamp(0.0, 100.0).round() as u8;
    trace!(
        "compatibility over {matches} matches: deviation: {deviation_percent}%, win rate: {win_rate}%, raw score: {raw_score}"
    );

    CompatibilityResult {
        score,
        rating: Rating::from_score(score),
        card_tendency: CardTendency::from_deviation(deviation_percent),
        historical_matches: matches,
        avg_cards_in_history,
    }
}
