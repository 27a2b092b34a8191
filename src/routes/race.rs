use chrono::NaiveDate;
use handlebars::Handlebars;
use log::debug;
use serde::Serialize;

use crate::errors::CustomResult;
use crate::modules::helpers::race::{RaceFilter, RaceHelpers, SeasonSummary};
use crate::modules::models::race::{Race, RaceResult};
use crate::modules::store::FixtureStore;
use crate::modules::templates;

#[derive(Serialize, Debug)]
pub struct RacesData {
    pub filter: RaceFilter,
    pub summary: SeasonSummary,
    pub races: Vec<RaceRow>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RaceRow {
    pub round: u32,
    pub name: String,
    pub circuit: String,
    pub date: NaiveDate,
    pub laps: u32,
    pub distance: f64,
    pub completed: bool,
    pub result: Option<RaceResult>,
}

impl From<Race> for RaceRow {
    fn from(race: Race) -> Self {
        RaceRow {
            round: race.id,
            completed: race.is_completed(),
            name: race.name,
            circuit: race.circuit,
            date: race.date,
            laps: race.laps,
            distance: race.distance,
            result: race.result,
        }
    }
}

pub fn races_data(store: &FixtureStore, filter: RaceFilter) -> RacesData {
    RacesData {
        filter,
        summary: RaceHelpers::summary(store.races()),
        races: RaceHelpers::filter(store.races(), filter)
            .into_iter()
            .map(RaceRow::from)
            .collect(),
    }
}

pub fn render(registry: &Handlebars, store: &FixtureStore, filter: RaceFilter) -> CustomResult<String> {
    let data = races_data(store, filter);
    debug!(target: "routes/race:render", "rendering {} races (filter: {:?})", data.races.len(), filter);

    templates::render(registry, "races", &data)
}
