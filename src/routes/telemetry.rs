use handlebars::Handlebars;
use serde::Serialize;

use crate::errors::CustomResult;
use crate::modules::telemetry::{TelemetryFrame, TelemetrySample, Temperatures};
use crate::modules::templates;

#[derive(Serialize, Debug)]
pub struct TelemetryData {
    pub latest: Option<TelemetrySample>,
    pub temperatures: Option<Temperatures>,
    pub samples: Vec<SampleRow>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SampleRow {
    pub tick: u64,
    pub speed: f64,
    pub rpm_scaled: f64,
    pub gear: u8,
}

pub fn telemetry_data(frame: &TelemetryFrame) -> TelemetryData {
    TelemetryData {
        latest: frame.latest().copied(),
        temperatures: frame.temperatures,
        samples: frame
            .samples
            .iter()
            .map(|sample| SampleRow {
                tick: sample.tick,
                speed: sample.speed,
                rpm_scaled: sample.normalized_rpm(),
                gear: sample.gear,
            })
            .collect(),
    }
}

pub fn render(registry: &Handlebars, frame: &TelemetryFrame) -> CustomResult<String> {
    templates::render(registry, "telemetry", &telemetry_data(frame))
}
