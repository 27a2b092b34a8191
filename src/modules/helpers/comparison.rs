use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, UnknownMetricSnafu};
use crate::modules::models::driver::Driver;

/// which end of a metric is the better one
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    HigherIsBetter,
    LowerIsBetter,
}

/// the side of a head to head comparison
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    First,
    Second,
}

/// the statistics two drivers can be compared on
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Metric {
    ChampionshipPoints,
    RaceWins,
    PodiumFinishes,
    PolePositions,
    FastestLaps,
    Dnfs,
    AvgPosition,
    PointsPerRace,
    Consistency,
}

impl Metric {
    /// the metrics of the head to head table, in display order
    pub const HEAD_TO_HEAD: [Metric; 8] = [
        Metric::ChampionshipPoints,
        Metric::RaceWins,
        Metric::PodiumFinishes,
        Metric::PolePositions,
        Metric::FastestLaps,
        Metric::Dnfs,
        Metric::AvgPosition,
        Metric::PointsPerRace,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::ChampionshipPoints => "Championship Points",
            Metric::RaceWins => "Race Wins",
            Metric::PodiumFinishes => "Podium Finishes",
            Metric::PolePositions => "Pole Positions",
            Metric::FastestLaps => "Fastest Laps",
            Metric::Dnfs => "DNFs",
            Metric::AvgPosition => "Avg Position",
            Metric::PointsPerRace => "Points/Race",
            Metric::Consistency => "Consistency",
        }
    }

    /// every metric states its polarity here, new metrics have to pick one
    pub fn polarity(&self) -> Polarity {
        match self {
            Metric::Dnfs | Metric::AvgPosition => Polarity::LowerIsBetter,
            Metric::ChampionshipPoints
            | Metric::RaceWins
            | Metric::PodiumFinishes
            | Metric::PolePositions
            | Metric::FastestLaps
            | Metric::PointsPerRace
            | Metric::Consistency => Polarity::HigherIsBetter,
        }
    }

    pub fn value_of(&self, driver: &Driver) -> f64 {
        match self {
            Metric::ChampionshipPoints => driver.points as f64,
            Metric::RaceWins => driver.wins as f64,
            Metric::PodiumFinishes => driver.podiums as f64,
            Metric::PolePositions => driver.poles as f64,
            Metric::FastestLaps => driver.fastest_laps as f64,
            Metric::Dnfs => driver.dnfs as f64,
            Metric::AvgPosition => driver.avg_position,
            Metric::PointsPerRace => driver.points_per_race,
            Metric::Consistency => driver.consistency as f64,
        }
    }

    const ALL: [Metric; 9] = [
        Metric::ChampionshipPoints,
        Metric::RaceWins,
        Metric::PodiumFinishes,
        Metric::PolePositions,
        Metric::FastestLaps,
        Metric::Dnfs,
        Metric::AvgPosition,
        Metric::PointsPerRace,
        Metric::Consistency,
    ];
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Metric {
    type Err = Error;

    /// parse a metric from its label, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|metric| metric.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMetricSnafu { metric: s }.build())
    }
}

/// # comparative winner
/// decide which of two values is the better one for a metric.
/// a tie goes to the second side.
///
/// ## Arguments
/// * `metric` - the metric the values belong to
/// * `first` - the value of the first entity
/// * `second` - the value of the second entity
///
/// ## Returns
/// * `Side` - the side holding the better value
pub fn comparative_winner(metric: Metric, first: f64, second: f64) -> Side {
    let first_wins = match metric.polarity() {
        Polarity::LowerIsBetter => first < second,
        Polarity::HigherIsBetter => first > second,
    };

    if first_wins {
        Side::First
    } else {
        Side::Second
    }
}

/// compare two drivers on a metric given by its label
pub fn comparative_winner_by_name(metric_name: &str, first: &Driver, second: &Driver) -> Result<Side, Error> {
    let metric: Metric = metric_name.parse()?;
    Ok(comparative_winner(metric, metric.value_of(first), metric.value_of(second)))
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ComparisonRow {
    pub stat: String,
    pub first: f64,
    pub second: f64,
    pub winner: Side,
    pub winner_name: String,
}

/// the head to head table of the comparison view
pub fn comparison_rows(first: &Driver, second: &Driver) -> Vec<ComparisonRow> {
    Metric::HEAD_TO_HEAD
        .iter()
        .map(|metric| {
            let first_value = metric.value_of(first);
            let second_value = metric.value_of(second);
            let winner = comparative_winner(*metric, first_value, second_value);

            ComparisonRow {
                stat: metric.label().to_string(),
                first: first_value,
                second: second_value,
                winner,
                winner_name: match winner {
                    Side::First => first.name.clone(),
                    Side::Second => second.name.clone(),
                },
            }
        })
        .collect()
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct RadarPoint {
    pub category: String,
    pub value: f64,
}

/// the statistics of a driver scaled to a shared radar axis
pub fn radar_profile(driver: &Driver) -> Vec<RadarPoint> {
    [
        ("Points", driver.points as f64 / 10.0),
        ("Wins", driver.wins as f64 * 5.0),
        ("Podiums", driver.podiums as f64 * 4.0),
        ("Poles", driver.poles as f64 * 5.0),
        ("Consistency", driver.consistency as f64),
    ]
    .into_iter()
    .map(|(category, value)| RadarPoint {
        category: category.to_string(),
        value,
    })
    .collect()
}

/// the season highlights of a driver as shown on the dashboard. consistency
/// is scaled down to the range of the counts.
pub fn highlight_profile(driver: &Driver) -> Vec<RadarPoint> {
    [
        ("Wins", driver.wins as f64),
        ("Podiums", driver.podiums as f64),
        ("Poles", driver.poles as f64),
        ("Fastest Laps", driver.fastest_laps as f64),
        ("Consistency", driver.consistency as f64 / 10.0),
    ]
    .into_iter()
    .map(|(category, value)| RadarPoint {
        category: category.to_string(),
        value,
    })
    .collect()
}
