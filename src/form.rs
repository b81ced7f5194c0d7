//! Recent-form trend and consistency of a referee's card counts.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};
use tracing::trace;

use crate::linear::IndexFit;
use crate::probs::SliceExt;

/// Direction of recent form, framed from the perspective of a bettor on the unders: more cards
/// is `Declining`, fewer cards is `Improving`. The mapping is intentional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Stable,
    Declining,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormAnalysis {
    pub trend: Trend,
    /// Normalised slope in `[-1, 1]`; positive when card counts are rising.
    pub trend_score: f64,
    pub avg_last5: f64,
    pub avg_season: f64,
    pub volatility: f64,
    /// Consistency rating in `1..=10`; lower when recent counts swing widely.
    pub form_rating: u8,
}
impl FormAnalysis {
    /// The analysis when there is no recent history to go on.
    pub fn neutral(season_avg: f64) -> Self {
        Self {
            trend: Trend::Stable,
            trend_score: 0.0,
            avg_last5: season_avg,
            avg_season: season_avg,
            volatility: 0.0,
            form_rating: 5,
        }
    }
}

const MIN_MATCHES_FOR_TREND: usize = 3;
const TREND_THRESHOLD: f64 = 0.15;

/// Analyses `recent_cards` (oldest first) against the `season_avg`. Any number of entries is
/// accepted, although callers typically pass the last five matches.
pub fn analyse(recent_cards: &[f64], season_avg: f64) -> FormAnalysis {
    if recent_cards.is_empty() {
        return FormAnalysis::neutral(season_avg);
    }

    let avg_last5 = recent_cards.mean();
    let trend_score = match IndexFit::fit(recent_cards) {
        Some(fit) if recent_cards.len() >= MIN_MATCHES_FOR_TREND => {
            (fit.slope / 2.0).clamp(-1.0, 1.0)
        }
        _ => 0.0,
    };
    let trend = if trend_score > TREND_THRESHOLD {
        Trend::Declining
    } else if trend_score < -TREND_THRESHOLD {
        Trend::Improving
    } else {
        Trend::Stable
    };

    let volatility = recent_cards.population_stdev(avg_last5);
    let form_rating = (10.0 - 2.0 * volatility).clamp(1.0, 10.0).round() as u8;
    trace!(
        "form over {} matches: trend: {trend} ({trend_score}), volatility: {volatility}",
        recent_cards.len()
    );

    FormAnalysis {
        trend,
        trend_score,
        avg_last5,
        avg_season: season_avg,
        volatility,
        form_rating,
    }
}
