//! Expected card counts and over/under probabilities for a single fixture.
//!
//! Referee, team and league base rates are blended into a Poisson rate for the total number of
//! cards shown, from which the "Over N.5" lines are priced. All outputs are rounded once, here,
//! and downstream consumers (see [`crate::recommend`]) operate on the rounded values.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};
use thiserror::Error;
use tracing::trace;

use crate::domain::{Matchup, RefereeAggregate};
use crate::poisson;
use crate::probs::{complement_percent, percent, round_to, SliceExt};

/// Relative weights of the three base rates. Expected to sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendWeights {
    pub referee: f64,
    pub teams: f64,
    pub league: f64,
}
impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            referee: 0.45,
            teams: 0.35,
            league: 0.20,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum InvalidConfig {
    #[error("league average yellow cards must be positive, got {0}")]
    LeagueAvgYellow(f64),

    #[error("league average red cards must be non-negative, got {0}")]
    LeagueAvgRed(f64),

    #[error("blend weights must be non-negative and sum to 1, got {0:?}")]
    Weights(BlendWeights),

    #[error("recent form weight must lie in [0, 1], got {0}")]
    RecentFormWeight(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastConfig {
    pub league_avg_yellow: f64,
    pub league_avg_red: f64,
    pub weights: BlendWeights,
    /// Share of the gap between the referee's recent and season averages that carries over into
    /// the expected yellow count.
    pub recent_form_weight: f64,
}
impl ForecastConfig {
    pub fn with_league_avg_yellow(mut self, league_avg_yellow: f64) -> Self {
        self.league_avg_yellow = league_avg_yellow;
        self
    }

    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if self.league_avg_yellow.is_nan() || self.league_avg_yellow <= 0.0 {
            return Err(InvalidConfig::LeagueAvgYellow(self.league_avg_yellow));
        }
        if self.league_avg_red.is_nan() || self.league_avg_red < 0.0 {
            return Err(InvalidConfig::LeagueAvgRed(self.league_avg_red));
        }
        const TOLERANCE: f64 = 1e-9;
        let BlendWeights {
            referee,
            teams,
            league,
        } = self.weights;
        if referee < 0.0
            || teams < 0.0
            || league < 0.0
            || (referee + teams + league - 1.0).abs() > TOLERANCE
        {
            return Err(InvalidConfig::Weights(self.weights.clone()));
        }
        if !(0.0..=1.0).contains(&self.recent_form_weight) {
            return Err(InvalidConfig::RecentFormWeight(self.recent_form_weight));
        }
        Ok(())
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            league_avg_yellow: 4.0,
            league_avg_red: 0.15,
            weights: BlendWeights::default(),
            recent_form_weight: 0.15,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
}
impl Confidence {
    pub fn from_score(score: u8) -> Self {
        match score {
            70.. => Confidence::High,
            40.. => Confidence::Medium,
            _ => Confidence::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult {
    pub expected_yellow_cards: f64,
    pub expected_red_cards: f64,
    pub expected_total_cards: f64,
    pub over25_probability: f64,
    pub over35_probability: f64,
    pub over45_probability: f64,
    pub under25_probability: f64,
    pub under35_probability: f64,
    pub confidence: Confidence,
    pub confidence_score: u8,
}

/// Minimum number of recent-form entries before they nudge the expected yellow count.
const MIN_FORM_FOR_NUDGE: usize = 3;

/// Minimum number of recent-form entries before they count towards confidence.
const MIN_FORM_FOR_CONFIDENCE: usize = 5;

/// Forecasts the card count of a fixture officiated by `referee`.
///
/// Team data is blended in only when both sides of the `matchup` are known; otherwise the
/// referee's averages stand alone. Inputs are not validated; negative averages flow through the
/// arithmetic and are clamped at zero.
pub fn forecast(
    referee: &RefereeAggregate,
    matchup: Option<&Matchup>,
    config: &ForecastConfig,
) -> ForecastResult {
    let (mut expected_yellow, mut expected_red) = match matchup {
        Some(matchup) => {
            let weights = &config.weights;
            let yellow = weights.referee * referee.avg_yellow_cards
                + weights.teams * matchup.combined_yellow()
                + weights.league * config.league_avg_yellow;
            let red = weights.referee * referee.avg_red_cards
                + weights.teams * matchup.combined_red()
                + weights.league * config.league_avg_red;
            trace!("blended referee, team and league rates: yellow: {yellow}, red: {red}");
            (yellow, red)
        }
        None => (referee.avg_yellow_cards, referee.avg_red_cards),
    };

    let recent_form = referee.recent_form();
    if recent_form.len() >= MIN_FORM_FOR_NUDGE {
        let recent_mean = recent_form.mean();
        let nudge = config.recent_form_weight * (recent_mean - referee.avg_yellow_cards);
        trace!("recent form mean: {recent_mean}, yellow nudge: {nudge}");
        expected_yellow += nudge;
    }

    expected_yellow = f64::max(0.0, expected_yellow);
    expected_red = f64::max(0.0, expected_red);
    let expected_total = expected_yellow + expected_red;

    let over25 = percent(poisson::at_least(3, expected_total));
    let over35 = percent(poisson::at_least(4, expected_total));
    let over45 = percent(poisson::at_least(5, expected_total));

    let confidence_score = confidence_score(referee, matchup);
    let confidence = Confidence::from_score(confidence_score);
    trace!("lambda: {expected_total}, confidence: {confidence} ({confidence_score})");

    ForecastResult {
        expected_yellow_cards: round_to(expected_yellow, 2),
        expected_red_cards: round_to(expected_red, 2),
        expected_total_cards: round_to(expected_total, 2),
        over25_probability: over25,
        over35_probability: over35,
        over45_probability: over45,
        under25_probability: complement_percent(over25),
        under35_probability: complement_percent(over35),
        confidence,
        confidence_score,
    }
}

/// Convenience for the common case of default parameters with an overridden league average.
pub fn forecast_with_league_avg(
    referee: &RefereeAggregate,
    matchup: Option<&Matchup>,
    league_avg_yellow: f64,
) -> ForecastResult {
    forecast(
        referee,
        matchup,
        &ForecastConfig::default().with_league_avg_yellow(league_avg_yellow),
    )
}

fn confidence_score(referee: &RefereeAggregate, matchup: Option<&Matchup>) -> u8 {
    let referee_points = match referee.matches_officiated {
        20.. => 40,
        10.. => 25,
        5.. => 15,
        _ => 0,
    };
    let team_points = match matchup.map(Matchup::min_matches_played) {
        Some(10..) => 35,
        Some(5..) => 20,
        _ => 10,
    };
    let form_points = if referee.recent_form().len() >= MIN_FORM_FOR_CONFIDENCE {
        25
    } else {
        0
    };
    u8::min(100, referee_points + team_points + form_points)
}
