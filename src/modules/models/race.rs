use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct RaceResult {
    pub winner: String,
    pub fastest_lap: String,
    /// average race speed in km/h
    pub avg_speed: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Race {
    /// the round of the race in the calendar
    pub id: u32,
    pub name: String,
    pub circuit: String,
    pub date: NaiveDate,
    pub laps: u32,
    /// race distance in km
    pub distance: f64,

    /// only present once the race has been run
    pub result: Option<RaceResult>,
}

impl Race {
    pub fn is_completed(&self) -> bool {
        self.result.is_some()
    }
}
