use serde::{Deserialize, Serialize};

use crate::modules::traits::has_performance::HasPerformance;

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Driver {
    pub id: u32,
    pub name: String,
    pub team: String,
    pub number: u32,
    pub nationality: String,

    // season totals
    pub points: u32,
    pub wins: u32,
    pub podiums: u32,
    pub poles: u32,
    pub fastest_laps: u32,
    pub dnfs: u32,

    // rates
    pub avg_position: f64,
    pub points_per_race: f64,
    pub consistency: u32,

    /// points scored in each race, in calendar order
    pub performance: Vec<u32>,
}

impl Driver {
    /// # match against a search query
    /// a driver matches when the lowercased query is part of its name or its team.
    ///
    /// ## Arguments
    /// * `query_lower` - the query, already lowercased
    ///
    /// ## Returns
    /// * `bool` - true if the driver matches
    pub fn matches(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self.team.to_lowercase().contains(query_lower)
    }
}

impl HasPerformance for Driver {
    fn label(&self) -> &str {
        &self.name
    }

    fn stored_points(&self) -> u32 {
        self.points
    }

    fn performance(&self) -> &[u32] {
        &self.performance
    }
}
