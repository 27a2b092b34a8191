use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, InvalidSettingSnafu};
use crate::modules::helpers::math::Math;
use crate::modules::models::driver::Driver;

/// the statistics the driver list can be sorted on
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum DriverSortKey {
    #[default]
    Points,
    Wins,
    Consistency,
}

impl DriverSortKey {
    pub fn value_of(&self, driver: &Driver) -> u32 {
        match self {
            DriverSortKey::Points => driver.points,
            DriverSortKey::Wins => driver.wins,
            DriverSortKey::Consistency => driver.consistency,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            DriverSortKey::Points => "points",
            DriverSortKey::Wins => "wins",
            DriverSortKey::Consistency => "consistency",
        }
    }
}

impl FromStr for DriverSortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "points" => Ok(DriverSortKey::Points),
            "wins" => Ok(DriverSortKey::Wins),
            "consistency" => Ok(DriverSortKey::Consistency),
            _ => InvalidSettingSnafu { key: "DRIVER_SORT", value: s }.fail(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct RankedDriver {
    pub position: usize,
    /// medal for the top three, the nationality for everyone else
    pub badge: String,
    pub driver: Driver,
    pub value: u32,
    /// percentage of the value of the leader
    pub relative: f64,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct RacePoints {
    pub race: usize,
    pub points: u32,
    pub cumulative: u32,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct StatBar {
    pub stat: String,
    pub value: f64,
    pub max: f64,
}

pub struct DriverHelpers {}

impl DriverHelpers {
    /// # ranked drivers
    /// the drivers sorted on a key, annotated for the driver list
    ///
    /// ## Arguments
    /// * `drivers` - the drivers to rank
    /// * `sort_key` - the statistic to rank on
    ///
    /// ## Returns
    /// * `Vec<RankedDriver>` - the drivers, best first
    pub fn ranked(drivers: &[Driver], sort_key: DriverSortKey) -> Vec<RankedDriver> {
        let sorted = Math::rank_order(drivers, |driver| sort_key.value_of(driver));
        let leader_value = sorted
            .first()
            .map(|driver| sort_key.value_of(driver))
            .unwrap_or(0);

        sorted
            .into_iter()
            .enumerate()
            .map(|(index, driver)| {
                let value = sort_key.value_of(&driver);
                let badge = match index {
                    0 => "P1".to_string(),
                    1 => "P2".to_string(),
                    2 => "P3".to_string(),
                    _ => driver.nationality.clone(),
                };

                RankedDriver {
                    position: index + 1,
                    badge,
                    value,
                    relative: Math::points_share(value as f64, leader_value as f64),
                    driver,
                }
            })
            .collect()
    }

    pub fn race_points(performance: &[u32]) -> Vec<RacePoints> {
        performance
            .iter()
            .zip(Math::cumulative_series(performance))
            .enumerate()
            .map(|(index, (points, cumulative))| RacePoints {
                race: index + 1,
                points: *points,
                cumulative,
            })
            .collect()
    }

    /// the statistics of a driver against the maximum of a season
    pub fn stat_bars(driver: &Driver) -> Vec<StatBar> {
        [
            ("Points", driver.points as f64, 600.0),
            ("Wins", driver.wins as f64, 21.0),
            ("Podiums", driver.podiums as f64, 21.0),
            ("Poles", driver.poles as f64, 21.0),
            ("Consistency", driver.consistency as f64, 100.0),
        ]
        .into_iter()
        .map(|(stat, value, max)| StatBar {
            stat: stat.to_string(),
            value,
            max,
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(id: u32, points: u32, wins: u32, consistency: u32) -> Driver {
        Driver {
            id,
            name: format!("Driver {}", id),
            team: "Team".to_string(),
            number: id,
            nationality: "GBR".to_string(),
            points,
            wins,
            podiums: 0,
            poles: 0,
            fastest_laps: 0,
            dnfs: 0,
            avg_position: 1.0,
            points_per_race: 1.0,
            consistency,
            performance: vec![],
        }
    }

    #[test]
    fn ranked_by_wins_keeps_seed_order_on_ties() {
        let drivers = vec![driver(1, 100, 1, 90), driver(2, 90, 3, 80), driver(3, 80, 1, 95)];
        let ranked = DriverHelpers::ranked(&drivers, DriverSortKey::Wins);
        let ids: Vec<u32> = ranked.iter().map(|r| r.driver.id).collect();

        assert_eq!(ids, vec![2, 1, 3]);
        assert_eq!(ranked[0].relative, 100.0);
        assert_eq!(ranked[0].badge, "P1");
    }

    #[test]
    fn ranked_with_zero_leader_has_zero_relative() {
        let drivers = vec![driver(1, 0, 0, 0), driver(2, 0, 0, 0)];
        let ranked = DriverHelpers::ranked(&drivers, DriverSortKey::Points);
        assert!(ranked.iter().all(|r| r.relative == 0.0));
    }

    #[test]
    fn badge_falls_back_to_nationality() {
        let drivers: Vec<Driver> = (1..=4).map(|id| driver(id, 100 - id, 0, 0)).collect();
        let ranked = DriverHelpers::ranked(&drivers, DriverSortKey::Points);
        assert_eq!(ranked[3].badge, "GBR");
    }

    #[test]
    fn race_points_carry_cumulative_total() {
        let points = DriverHelpers::race_points(&[25, 18, 25, 18]);
        assert_eq!(points[3], RacePoints { race: 4, points: 18, cumulative: 86 });
    }

    #[test]
    fn sort_key_parses() {
        assert_eq!("Consistency".parse::<DriverSortKey>().unwrap(), DriverSortKey::Consistency);
        assert!("speed".parse::<DriverSortKey>().is_err());
    }
}
