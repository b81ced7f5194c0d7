//! Loading of fixture inputs from JSON files.

use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::bail;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::from_reader;

use crate::domain::{HistoricalMatchOutcome, Matchup, RefereeAggregate, TeamAggregate};

/// Reads a JSON-encoded type from a given file `path`.
pub fn read_json<D: DeserializeOwned>(path: impl AsRef<Path>) -> Result<D, io::Error> {
    let file = File::open(path)?;
    Ok(from_reader(file)?)
}

pub trait FromJsonFile<D> {
    fn from_json_file(path: impl AsRef<Path>) -> Result<D, io::Error>;
}

impl<D: DeserializeOwned> FromJsonFile<D> for D {
    fn from_json_file(path: impl AsRef<Path>) -> Result<D, io::Error> {
        read_json(path)
    }
}

/// Everything known about an upcoming fixture, as gathered by the aggregation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchFile {
    pub referee: RefereeAggregate,
    #[serde(default)]
    pub home: Option<TeamAggregate>,
    #[serde(default)]
    pub away: Option<TeamAggregate>,
    #[serde(default)]
    pub league_avg_yellow: Option<f64>,
    /// Past matches between one of the teams and this referee.
    #[serde(default)]
    pub history: Vec<HistoricalMatchOutcome>,
    #[serde(default)]
    pub referee_season_avg_yellow: Option<f64>,
    #[serde(default)]
    pub team_season_avg_yellow: Option<f64>,
    #[serde(default)]
    pub recent_cards: Vec<f64>,
    #[serde(default)]
    pub season_avg: Option<f64>,
}
impl MatchFile {
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.referee.validate()?;
        for team in [&self.home, &self.away].into_iter().flatten() {
            team.validate()?;
        }
        if !self.history.is_empty()
            && (self.referee_season_avg_yellow.is_none() || self.team_season_avg_yellow.is_none())
        {
            bail!("history requires both refereeSeasonAvgYellow and teamSeasonAvgYellow");
        }
        if !self.recent_cards.is_empty() && self.season_avg.is_none() {
            bail!("recentCards requires seasonAvg");
        }
        Ok(())
    }

    /// The matchup, if both sides are present.
    pub fn matchup(&self) -> Option<Matchup> {
        Matchup::from_pair(self.home.clone(), self.away.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;

    use super::*;
    use crate::domain::MatchResult;

    const SAMPLE: &str = r#"{
        "referee": {
            "avgYellowCards": 4.2,
            "avgRedCards": 0.2,
            "matchesOfficiated": 22,
            "strictnessIndex": 5.1,
            "recentForm": [4.0, 6.0, 5.0, 3.0, 5.0]
        },
        "home": {
            "avgYellowReceived": 2.1,
            "avgRedReceived": 0.1,
            "avgFoulsCommitted": 11.4,
            "matchesPlayed": 14
        },
        "away": {
            "avgYellowReceived": 1.9,
            "avgRedReceived": 0.05,
            "avgFoulsCommitted": 10.2,
            "matchesPlayed": 14
        },
        "history": [
            {"yellowCards": 3, "redCards": 0, "fouls": 12, "result": "win"},
            {"yellowCards": 5, "redCards": 1, "fouls": 16, "result": "loss"}
        ],
        "refereeSeasonAvgYellow": 4.2,
        "teamSeasonAvgYellow": 2.1
    }"#;

    #[test]
    fn parse_sample() {
        let file: MatchFile = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(Ok(()), file.validate().map_err(|err| err.to_string()));
        assert_eq!(Some(5), file.referee.recent_form.as_ref().map(Vec::len));
        assert!(file.matchup().is_some());
        assert_eq!(MatchResult::Loss, file.history[1].result);
        assert_eq!(None, file.league_avg_yellow);
        assert!(file.recent_cards.is_empty());
    }

    #[test]
    fn one_sided_matchup() {
        let mut file: MatchFile = serde_json::from_str(SAMPLE).unwrap();
        file.away = None;
        assert_eq!(None, file.matchup());
    }

    #[test]
    fn history_without_averages_rejected() {
        let mut file: MatchFile = serde_json::from_str(SAMPLE).unwrap();
        file.team_season_avg_yellow = None;
        assert_eq!(
            "history requires both refereeSeasonAvgYellow and teamSeasonAvgYellow",
            file.validate().unwrap_err().to_string()
        );
    }

    #[test]
    fn recent_cards_without_season_avg_rejected() {
        let mut file: MatchFile = serde_json::from_str(SAMPLE).unwrap();
        file.recent_cards = vec![3.0, 4.0];
        assert_eq!(
            "recentCards requires seasonAvg",
            file.validate().unwrap_err().to_string()
        );
    }

    #[test]
    fn negative_team_average_rejected() {
        let mut file: MatchFile = serde_json::from_str(SAMPLE).unwrap();
        if let Some(home) = file.home.as_mut() {
            home.avg_yellow_received = -1.0;
        }
        assert!(file.validate().is_err());
    }

    #[test]
    fn read_from_file() {
        let path = env::temp_dir().join(format!("cardcast-{}.json", std::process::id()));
        fs::write(&path, SAMPLE).unwrap();
        let file = MatchFile::from_json_file(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(22, file.unwrap().referee.matches_officiated);
    }

    #[test]
    fn read_missing_file() {
        let path = env::temp_dir().join("cardcast-does-not-exist.json");
        let err = read_json::<MatchFile>(path).unwrap_err();
        assert_eq!(io::ErrorKind::NotFound, err.kind());
    }
}
