use std::env;
use std::error::Error;
use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use serde::Serialize;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use cardcast::compat::{compatibility, CompatibilityResult};
use cardcast::file::{FromJsonFile, MatchFile};
use cardcast::forecast::{forecast, ForecastConfig, ForecastResult};
use cardcast::form::{analyse, FormAnalysis};
use cardcast::print::{
    tabulate_compatibility, tabulate_expectations, tabulate_form, tabulate_lines,
    tabulate_recommendation,
};
use cardcast::recommend::{recommend, Recommendation};

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// file to source the fixture data from
    #[clap(short = 'f', long)]
    file: PathBuf,

    /// league-wide average yellow cards per match, overriding the file
    #[clap(long)]
    league_avg_yellow: Option<f64>,

    /// print the results as JSON rather than tables
    #[clap(long)]
    json: bool,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if let Some(league_avg_yellow) = self.league_avg_yellow {
            if league_avg_yellow.is_nan() || league_avg_yellow <= 0.0 {
                bail!("--league-avg-yellow must be positive");
            }
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    forecast: ForecastResult,
    recommendation: Recommendation,
    #[serde(skip_serializing_if = "Option::is_none")]
    form: Option<FormAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    compatibility: Option<CompatibilityResult>,
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let fixture = MatchFile::from_json_file(&args.file)?;
    fixture.validate()?;
    debug!("fixture: {fixture:?}");

    let mut config = ForecastConfig::default();
    if let Some(league_avg_yellow) = args.league_avg_yellow.or(fixture.league_avg_yellow) {
        config.league_avg_yellow = league_avg_yellow;
    }
    config.validate()?;

    let matchup = fixture.matchup();
    if matchup.is_none() && (fixture.home.is_some() || fixture.away.is_some()) {
        info!("only one side's team data supplied; forecasting from the referee alone");
    }
    let forecast = forecast(&fixture.referee, matchup.as_ref(), &config);
    let recommendation = recommend(&forecast);

    let form = fixture
        .season_avg
        .map(|season_avg| analyse(&fixture.recent_cards, season_avg));

    let compatibility = match (
        fixture.referee_season_avg_yellow,
        fixture.team_season_avg_yellow,
    ) {
        (Some(referee_avg), Some(team_avg)) => {
            Some(compatibility(&fixture.history, referee_avg, team_avg))
        }
        _ => None,
    };

    let report = Report {
        forecast,
        recommendation,
        form,
        compatibility,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let console = Console::default();
    info!(
        "Expected cards:\n{}",
        console.render(&tabulate_expectations(&report.forecast))
    );
    info!(
        "Lines:\n{}",
        console.render(&tabulate_lines(&report.forecast))
    );
    info!(
        "Recommendation:\n{}",
        console.render(&tabulate_recommendation(&report.recommendation))
    );
    if let Some(form) = &report.form {
        info!("Form:\n{}", console.render(&tabulate_form(form)));
    }
    if let Some(compatibility) = &report.compatibility {
        info!(
            "Referee-team compatibility:\n{}",
            console.render(&tabulate_compatibility(compatibility))
        );
    }
    Ok(())
}
