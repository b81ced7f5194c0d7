//! Console tables for engine outputs.

use stanza::style::HAlign::Left;
use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};

use crate::compat::CompatibilityResult;
use crate::forecast::ForecastResult;
use crate::form::FormAnalysis;
use crate::recommend::Recommendation;

/// Over/under lines with their probabilities and the fair decimal price implied by each.
pub fn tabulate_lines(forecast: &ForecastResult) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(12)).with(Left)),
            Col::new(Styles::default().with(MinWidth(11)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)).with(Separator(true)),
            vec!["Line".into(), "Probability".into(), "Fair price".into()],
        ));
    for (line, percentage) in [
        ("Over 2.5", forecast.over25_probability),
        ("Under 2.5", forecast.under25_probability),
        ("Over 3.5", forecast.over35_probability),
        ("Under 3.5", forecast.under35_probability),
        ("Over 4.5", forecast.over45_probability),
    ] {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                line.into(),
                format!("{percentage:.1}%").into(),
                format_fair_price(percentage).into(),
            ],
        ));
    }
    table
}

fn format_fair_price(percentage: f64) -> String {
    if percentage > 0.0 {
        format!("{:.2}", 100.0 / percentage)
    } else {
        "-".into()
    }
}

pub fn tabulate_expectations(forecast: &ForecastResult) -> Table {
    tabulate_pairs(&[
        ("Expected yellow", format!("{:.2}", forecast.expected_yellow_cards)),
        ("Expected red", format!("{:.2}", forecast.expected_red_cards)),
        ("Expected total", format!("{:.2}", forecast.expected_total_cards)),
        (
            "Confidence",
            format!("{} ({})", forecast.confidence, forecast.confidence_score),
        ),
    ])
}

pub fn tabulate_form(form: &FormAnalysis) -> Table {
    tabulate_pairs(&[
        ("Trend", format!("{} ({:+.2})", form.trend, form.trend_score)),
        ("Recent average", format!("{:.2}", form.avg_last5)),
        ("Season average", format!("{:.2}", form.avg_season)),
        ("Volatility", format!("{:.2}", form.volatility)),
        ("Form rating", format!("{}/10", form.form_rating)),
    ])
}

pub fn tabulate_compatibility(compatibility: &CompatibilityResult) -> Table {
    tabulate_pairs(&[
        (
            "Score",
            format!("{} ({})", compatibility.score, compatibility.rating),
        ),
        ("Card tendency", compatibility.card_tendency.to_string()),
        ("Matches", compatibility.historical_matches.to_string()),
        (
            "Average cards",
            format!("{:.2}", compatibility.avg_cards_in_history),
        ),
    ])
}

pub fn tabulate_recommendation(recommendation: &Recommendation) -> Table {
    let alternatives = if recommendation.alternative_picks.is_empty() {
        "-".into()
    } else {
        recommendation.alternative_picks.join(", ")
    };
    tabulate_pairs(&[
        ("Pick", recommendation.primary_pick.clone()),
        ("Odds range", recommendation.primary_odds_range.clone()),
        ("Confidence", recommendation.confidence_label.clone()),
        ("Reasoning", recommendation.reasoning.clone()),
        ("Alternatives", alternatives),
    ])
}

fn tabulate_pairs(pairs: &[(&str, String)]) -> Table {
    let mut table = Table::default().with_cols(vec![
        Col::new(Styles::default().with(MinWidth(16)).with(Left)),
        Col::new(Styles::default().with(MinWidth(10)).with(Left)),
    ]);
    for (key, value) in pairs {
        table.push_row(Row::new(
            Styles::default(),
            vec![(*key).into(), value.clone().into()],
        ));
    }
    table
}
