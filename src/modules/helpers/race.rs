use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, InvalidSettingSnafu};
use crate::modules::helpers::math::Math;
use crate::modules::models::race::Race;

/// which races the race view lists
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum RaceFilter {
    #[default]
    All,
    Completed,
    Upcoming,
}

impl RaceFilter {
    pub fn accepts(&self, race: &Race) -> bool {
        match self {
            RaceFilter::All => true,
            RaceFilter::Completed => race.is_completed(),
            RaceFilter::Upcoming => !race.is_completed(),
        }
    }
}

impl FromStr for RaceFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(RaceFilter::All),
            "completed" => Ok(RaceFilter::Completed),
            "upcoming" => Ok(RaceFilter::Upcoming),
            _ => InvalidSettingSnafu { key: "RACE_FILTER", value: s }.fail(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct SeasonSummary {
    pub total: usize,
    pub completed: usize,
    pub upcoming: usize,
    /// percentage of the races that have been run
    pub progress: f64,
    /// distance of all races in km
    pub total_distance: f64,
    /// average winning speed of the completed races in km/h
    pub avg_speed: f64,
}

pub struct RaceHelpers {}

impl RaceHelpers {
    pub fn filter(races: &[Race], filter: RaceFilter) -> Vec<Race> {
        races.iter().filter(|race| filter.accepts(race)).cloned().collect()
    }

    pub fn summary(races: &[Race]) -> SeasonSummary {
        let completed = races.iter().filter(|race| race.is_completed()).count();
        let speeds: Vec<f64> = races
            .iter()
            .filter_map(|race| race.result.as_ref())
            .map(|result| result.avg_speed)
            .collect();

        SeasonSummary {
            total: races.len(),
            completed,
            upcoming: races.len() - completed,
            progress: Math::round_float_to_n_decimals(
                Math::points_share(completed as f64, races.len() as f64),
                1,
            ),
            total_distance: Math::round_float_to_n_decimals(races.iter().map(|race| race.distance).sum(), 1),
            avg_speed: Math::round_float_to_n_decimals(Math::mean(&speeds), 1),
        }
    }
}
