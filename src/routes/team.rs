use handlebars::Handlebars;
use log::debug;
use serde::Serialize;

use crate::errors::CustomResult;
use crate::modules::helpers::general::{Helpers, ProgressionPoint};
use crate::modules::helpers::math::Math;
use crate::modules::helpers::team::{TeamHelpers, TeamRates};
use crate::modules::models::team::Team;
use crate::modules::store::FixtureStore;
use crate::modules::templates;
use crate::modules::traits::has_performance::HasPerformance;

#[derive(Serialize, Debug)]
pub struct TeamsData {
    pub focus: Option<FocusedTeam>,
    pub standings: Vec<ConstructorStanding>,
    /// the running total of every team after each race
    pub progression: Vec<ProgressionPoint>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FocusedTeam {
    pub team: Team,
    pub colour: String,
    pub cumulative: Vec<u32>,
    pub rates: TeamRates,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ConstructorStanding {
    pub position: usize,
    pub name: String,
    pub points: u32,
    /// percentage of all constructor points
    pub share: f64,
}

/// # teams data
/// the focused team is the selection of the store, otherwise the first team
///
/// ## Arguments
/// * `store` - the store holding the season
///
/// ## Returns
/// * `TeamsData` - the context of the teams template
pub fn teams_data(store: &FixtureStore) -> TeamsData {
    let teams = store.teams();
    let total: u32 = teams.iter().map(|team| team.points).sum();

    let focus = store
        .selected_team()
        .or_else(|| teams.first().cloned())
        .map(|team| FocusedTeam {
            colour: team.colour().to_string(),
            cumulative: team.cumulative_points(),
            rates: TeamHelpers::rates(&team, teams),
            team,
        });

    let standings = Math::rank_order(teams, |team| team.points)
        .into_iter()
        .enumerate()
        .map(|(index, team)| ConstructorStanding {
            position: index + 1,
            share: Math::round_float_to_n_decimals(Math::points_share(team.points as f64, total as f64), 1),
            points: team.points,
            name: team.name,
        })
        .collect();

    TeamsData {
        focus,
        standings,
        progression: Helpers::championship_progression(teams),
    }
}

pub fn render(registry: &Handlebars, store: &FixtureStore) -> CustomResult<String> {
    let data = teams_data(store);
    debug!(target: "routes/team:render", "rendering {} constructors", data.standings.len());

    templates::render(registry, "teams", &data)
}
