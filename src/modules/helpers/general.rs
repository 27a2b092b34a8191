use serde::{Deserialize, Serialize};

use crate::modules::traits::has_performance::HasPerformance;

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ProgressionEntry {
    pub name: String,
    pub points: u32,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ProgressionPoint {
    pub race: usize,
    pub totals: Vec<ProgressionEntry>,
}

pub struct Helpers {}

impl Helpers {
    /// # championship progression
    /// the cumulative points of every entity after each race. entities with
    /// fewer races than the longest sequence keep their last total.
    ///
    /// ## Arguments
    /// * `entities` - the drivers or teams to follow
    ///
    /// ## Returns
    /// * `Vec<ProgressionPoint>` - one point per race
    pub fn championship_progression<T: HasPerformance>(entities: &[T]) -> Vec<ProgressionPoint> {
        let cumulative: Vec<Vec<u32>> = entities.iter().map(|e| e.cumulative_points()).collect();
        let races = cumulative.iter().map(|series| series.len()).max().unwrap_or(0);

        (0..races)
            .map(|race_index| ProgressionPoint {
                race: race_index + 1,
                totals: entities
                    .iter()
                    .zip(&cumulative)
                    .map(|(entity, series)| ProgressionEntry {
                        name: entity.label().to_string(),
                        points: series
                            .get(race_index)
                            .or_else(|| series.last())
                            .copied()
                            .unwrap_or(0),
                    })
                    .collect(),
            })
            .collect()
    }
}
