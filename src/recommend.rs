//! Betting recommendations derived from a completed forecast.
//!
//! Rules are held in an ordered table and evaluated top to bottom; the first rule whose
//! predicate holds produces the recommendation. The final rule always applies.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::forecast::{Confidence, ForecastResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub primary_pick: String,
    pub primary_odds_range: String,
    pub confidence_label: String,
    pub reasoning: String,
    pub alternative_picks: Vec<String>,
}

/// The part of a recommendation contributed by a matching rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Pick {
    pub label: &'static str,
    pub odds_range: Option<&'static str>,
    pub reasoning: String,
    pub alternatives: Vec<&'static str>,
}

pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&ForecastResult) -> bool,
    pub build: fn(&ForecastResult) -> Pick,
}

pub const NOT_APPLICABLE: &str = "N/A";

/// Recommendation rules in priority order.
pub static RULES: [Rule; 5] = [
    Rule {
        name: "over_4.5",
        applies: |forecast| forecast.over45_probability >= 60.0,
        build: over_45,
    },
    Rule {
        name: "over_3.5",
        applies: |forecast| forecast.over35_probability >= 65.0,
        build: over_35,
    },
    Rule {
        name: "over_2.5",
        applies: |forecast| forecast.over25_probability >= 70.0,
        build: over_25,
    },
    Rule {
        name: "under_3.5",
        applies: |forecast| forecast.under35_probability >= 60.0,
        build: under_35,
    },
    Rule {
        name: "skip",
        applies: |_| true,
        build: skip,
    },
];

fn over_45(forecast: &ForecastResult) -> Pick {
    Pick {
        label: "Over 4.5 Cards",
        odds_range: Some("2.00–2.50"),
        reasoning: format!(
            "{}% chance of 5+ cards with {} expected in total",
            forecast.over45_probability, forecast.expected_total_cards
        ),
        alternatives: vec!["Over 3.5 Cards (safer)"],
    }
}

fn over_35(forecast: &ForecastResult) -> Pick {
    let mut alternatives = Vec::with_capacity(2);
    if forecast.over45_probability >= 40.0 {
        alternatives.push("Over 4.5 Cards (value)");
    }
    alternatives.push("Over 2.5 Cards (safer)");
    Pick {
        label: "Over 3.5 Cards",
        odds_range: Some("1.70–2.00"),
        reasoning: format!(
            "{}% chance of 4+ cards with {} expected in total",
            forecast.over35_probability, forecast.expected_total_cards
        ),
        alternatives,
    }
}

fn over_25(forecast: &ForecastResult) -> Pick {
    Pick {
        label: "Over 2.5 Cards",
        odds_range: Some("1.40–1.60"),
        reasoning: format!(
            "{}% chance of 3+ cards with {} expected in total",
            forecast.over25_probability, forecast.expected_total_cards
        ),
        alternatives: vec![],
    }
}

fn under_35(forecast: &ForecastResult) -> Pick {
    Pick {
        label: "Under 3.5 Cards",
        odds_range: Some("1.80–2.20"),
        reasoning: format!(
            "{}% chance of 3 or fewer cards with only {} expected in total",
            forecast.under35_probability, forecast.expected_total_cards
        ),
        alternatives: vec!["Under 4.5 Cards (safer)"],
    }
}

fn skip(forecast: &ForecastResult) -> Pick {
    Pick {
        label: "Skip – No Clear Edge",
        odds_range: None,
        reasoning: format!(
            "no line clears its threshold: Over 2.5 at {}%, Over 3.5 at {}%, Under 3.5 at {}%",
            forecast.over25_probability,
            forecast.over35_probability,
            forecast.under35_probability
        ),
        alternatives: vec![],
    }
}

pub fn confidence_label(confidence: Confidence) -> &'static str {
    match confidence {
        Confidence::Low => "Low Confidence",
        Confidence::Medium => "Medium Confidence",
        Confidence::High => "High Confidence",
    }
}

/// The first rule in [`RULES`] that applies to the `forecast`.
pub fn matching_rule(forecast: &ForecastResult) -> &'static Rule {
    RULES
        .iter()
        .find(|rule| (rule.applies)(forecast))
        .unwrap_or(&RULES[RULES.len() - 1])
}

pub fn recommend(forecast: &ForecastResult) -> Recommendation {
    let rule = matching_rule(forecast);
    debug!("matched rule '{}'", rule.name);
    let pick = (rule.build)(forecast);
    Recommendation {
        primary_pick: pick.label.into(),
        primary_odds_range: pick.odds_range.unwrap_or(NOT_APPLICABLE).into(),
        confidence_label: confidence_label(forecast.confidence).into(),
        reasoning: pick.reasoning,
        alternative_picks: pick
            .alternatives
            .into_iter()
            .map(String::from)
            .collect(),
    }
}
