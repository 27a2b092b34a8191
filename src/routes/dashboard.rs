use handlebars::Handlebars;
use log::debug;
use serde::Serialize;

use crate::errors::CustomResult;
use crate::modules::helpers::comparison::{highlight_profile, RadarPoint};
use crate::modules::helpers::driver::DriverSortKey;
use crate::modules::helpers::general::{Helpers, ProgressionPoint};
use crate::modules::helpers::math::Math;
use crate::modules::helpers::race::{RaceHelpers, SeasonSummary};
use crate::modules::models::driver::Driver;
use crate::modules::models::team::Team;
use crate::modules::store::FixtureStore;
use crate::modules::templates;

#[derive(Serialize, Debug)]
pub struct DashboardData {
    pub leader: Option<Driver>,
    pub leader_radar: Vec<RadarPoint>,
    pub constructor_leader: Option<Team>,
    pub summary: SeasonSummary,
    pub progression: Vec<ProgressionPoint>,
    pub team_performance: Vec<TeamPerformance>,
    pub quick_stats: Vec<Driver>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TeamPerformance {
    pub name: String,
    pub points: u32,
    pub wins: u32,
    pub podiums: u32,
}

impl TeamPerformance {
    /// wins and podiums are weighted to share an axis with the points
    fn from_team(team: &Team) -> TeamPerformance {
        TeamPerformance {
            name: team.name.clone(),
            points: team.points,
            wins: team.wins * 25,
            podiums: team.podiums * 10,
        }
    }
}

/// # dashboard data
/// the season overview: leaders, progress of the season and the progression
/// of the top three drivers.
///
/// ## Arguments
/// * `store` - the store holding the season
///
/// ## Returns
/// * `DashboardData` - the context of the dashboard template
pub fn dashboard_data(store: &FixtureStore) -> DashboardData {
    let standings = Math::rank_order(store.drivers(), |driver| DriverSortKey::Points.value_of(driver));
    let constructors = Math::rank_order(store.teams(), |team| team.points);

    let top_three: Vec<Driver> = standings.iter().take(3).cloned().collect();

    DashboardData {
        leader: standings.first().cloned(),
        leader_radar: standings.first().map(highlight_profile).unwrap_or_default(),
        constructor_leader: constructors.first().cloned(),
        summary: RaceHelpers::summary(store.races()),
        progression: Helpers::championship_progression(&top_three),
        team_performance: store.teams().iter().map(TeamPerformance::from_team).collect(),
        quick_stats: standings.into_iter().take(4).collect(),
    }
}

pub fn render(registry: &Handlebars, store: &FixtureStore) -> CustomResult<String> {
    let data = dashboard_data(store);
    debug!(target: "routes/dashboard:render", "rendering dashboard with {} progression points", data.progression.len());

    templates::render(registry, "dashboard", &data)
}
