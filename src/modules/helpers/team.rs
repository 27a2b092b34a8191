use serde::{Deserialize, Serialize};

use crate::modules::helpers::math::Math;
use crate::modules::models::team::Team;
use crate::modules::traits::has_performance::HasPerformance;

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct TeamRates {
    pub points_per_race: f64,
    /// percentage of races won
    pub win_rate: f64,
    /// percentage of the available podium places taken, two cars per race
    pub podium_rate: f64,
    /// percentage of all constructor points scored by the team
    pub points_share: f64,
}

pub struct TeamHelpers {}

impl TeamHelpers {
    /// # team rates
    /// season rates of a team over the races in its performance sequence
    ///
    /// ## Arguments
    /// * `team` - the team to get the rates of
    /// * `teams` - all teams, used for the share of the points
    pub fn rates(team: &Team, teams: &[Team]) -> TeamRates {
        let races = team.performance().len() as f64;
        let total_points: u32 = teams.iter().map(|t| t.points).sum();

        let points_per_race = if races == 0.0 {
            0.0
        } else {
            team.points as f64 / races
        };

        TeamRates {
            points_per_race: Math::round_float_to_n_decimals(points_per_race, 1),
            win_rate: Math::round_float_to_n_decimals(Math::points_share(team.wins as f64, races), 1),
            podium_rate: Math::round_float_to_n_decimals(
                Math::points_share(team.podiums as f64, races * 2.0),
                1,
            ),
            points_share: Math::round_float_to_n_decimals(
                Math::points_share(team.points as f64, total_points as f64),
                1,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(name: &str, points: u32, wins: u32, podiums: u32, races: usize) -> Team {
        Team {
            id: 1,
            name: name.to_string(),
            points,
            wins,
            poles: 0,
            podiums,
            reliability: 90,
            avg_pit_stop: 2.2,
            performance: vec![0; races],
        }
    }

    #[test]
    fn rates_over_ten_races() {
        let mclaren = team("McLaren", 300, 5, 14, 10);
        let other = team("Haas", 100, 0, 0, 10);
        let rates = TeamHelpers::rates(&mclaren, &[mclaren.clone(), other]);

        assert_eq!(rates.points_per_race, 30.0);
        assert_eq!(rates.win_rate, 50.0);
        assert_eq!(rates.podium_rate, 70.0);
        assert_eq!(rates.points_share, 75.0);
    }

    #[test]
    fn rates_without_races_are_zero() {
        let empty = team("Empty", 0, 0, 0, 0);
        let rates = TeamHelpers::rates(&empty, &[]);

        assert_eq!(rates.points_per_race, 0.0);
        assert_eq!(rates.win_rate, 0.0);
        assert_eq!(rates.podium_rate, 0.0);
        assert_eq!(rates.points_share, 0.0);
    }
}
