use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cardcast::compat::compatibility;
use cardcast::domain::{
    HistoricalMatchOutcome, MatchResult, Matchup, RefereeAggregate, TeamAggregate,
};
use cardcast::forecast::{forecast, ForecastConfig};
use cardcast::form::analyse;
use cardcast::poisson;
use cardcast::recommend::recommend;

fn criterion_benchmark(c: &mut Criterion) {
    let referee = RefereeAggregate {
        avg_yellow_cards: 4.2,
        avg_red_cards: 0.18,
        matches_officiated: 24,
        strictness_index: 5.0,
        recent_form: Some(vec![4.0, 6.0, 5.0, 3.0, 5.0]),
    };
    let matchup = Matchup::new(
        TeamAggregate {
            avg_yellow_received: 2.1,
            avg_red_received: 0.1,
            avg_fouls_committed: 11.4,
            matches_played: 14,
        },
        TeamAggregate {
            avg_yellow_received: 1.9,
            avg_red_received: 0.05,
            avg_fouls_committed: 10.2,
            matches_played: 14,
        },
    );
    let config = ForecastConfig::default();

    // sanity check
    let sample = forecast(&referee, Some(&matchup), &config);
    assert!(sample.over25_probability >= sample.over35_probability);

    c.bench_function("cri_forecast_at_least", |b| {
        b.iter(|| poisson::at_least(black_box(5), black_box(4.15)));
    });
    c.bench_function("cri_forecast_referee_only", |b| {
        b.iter(|| forecast(black_box(&referee), None, &config));
    });
    c.bench_function("cri_forecast_matchup", |b| {
        b.iter(|| forecast(black_box(&referee), Some(&matchup), &config));
    });
    c.bench_function("cri_forecast_recommend", |b| {
        b.iter(|| recommend(&forecast(black_box(&referee), Some(&matchup), &config)));
    });

    let recent_cards = [3.0, 5.0, 4.0, 6.0, 7.0];
    c.bench_function("cri_forecast_form", |b| {
        b.iter(|| analyse(black_box(&recent_cards), 4.5));
    });

    let history = (0..10)
        .map(|index| HistoricalMatchOutcome {
            yellow_cards: index % 5,
            red_cards: index % 3 / 2,
            fouls: 10 + index,
            result: match index % 3 {
                0 => MatchResult::Win,
                1 => MatchResult::Draw,
                _ => MatchResult::Loss,
            },
        })
        .collect::<Vec<_>>();
    c.bench_function("cri_forecast_compatibility", |b| {
        b.iter(|| compatibility(black_box(&history), 4.2, 2.0));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
