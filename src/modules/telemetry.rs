use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use log::{info, trace};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

pub const DEFAULT_TICK: Duration = Duration::from_millis(100);
pub const DEFAULT_WINDOW: usize = 30;

pub const SPEED_RANGE: (f64, f64) = (150.0, 330.0);
pub const RPM_RANGE: (f64, f64) = (8000.0, 12000.0);
pub const THROTTLE_RANGE: (f64, f64) = (60.0, 100.0);
pub const BRAKE_RANGE: (f64, f64) = (0.0, 100.0);
pub const ENGINE_TEMP_RANGE: (f64, f64) = (85.0, 105.0);
pub const BRAKE_TEMP_RANGE: (f64, f64) = (450.0, 600.0);
pub const TIRE_TEMP_RANGE: (f64, f64) = (95.0, 110.0);

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub struct TelemetrySample {
    /// the number of the tick that produced the sample, starting at 1
    pub tick: u64,
    /// km/h
    pub speed: f64,
    pub rpm: f64,
    pub gear: u8,
    /// percent
    pub throttle: f64,
    /// percent
    pub brake: f64,
}

impl TelemetrySample {
    /// rpm scaled down to share a chart axis with the speed
    pub fn normalized_rpm(&self) -> f64 {
        self.rpm / 100.0
    }
}

/// temperatures in degrees celsius
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub struct Temperatures {
    pub engine: f64,
    pub brakes: f64,
    pub tires: f64,
}

/// the state of the simulator as seen by a reader
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct TelemetryFrame {
    /// ticks since the simulator was created
    pub ticks: u64,
    pub samples: Vec<TelemetrySample>,
    pub temperatures: Option<Temperatures>,
}

impl TelemetryFrame {
    pub fn latest(&self) -> Option<&TelemetrySample> {
        self.samples.last()
    }
}

fn draw<R: Rng>(rng: &mut R, (low, high): (f64, f64)) -> f64 {
    rng.gen_range(low..high)
}

/// gear that goes with a speed, one gear per 60 km/h
pub fn gear_for_speed(speed: f64) -> u8 {
    ((speed / 60.0).floor() as i64).clamp(1, 8) as u8
}

/// # telemetry simulator
/// generates random samples within fixed bounds and keeps the most recent
/// ones in a sliding window. the random source is supplied by the caller.
pub struct TelemetrySimulator<R: Rng> {
    rng: R,
    capacity: usize,
    ticks: u64,
    window: VecDeque<TelemetrySample>,
    temperatures: Option<Temperatures>,
}

impl<R: Rng> TelemetrySimulator<R> {
    pub fn new(rng: R) -> TelemetrySimulator<R> {
        TelemetrySimulator::with_capacity(rng, DEFAULT_WINDOW)
    }

    pub fn with_capacity(rng: R, capacity: usize) -> TelemetrySimulator<R> {
        TelemetrySimulator {
            rng,
            capacity,
            ticks: 0,
            window: VecDeque::with_capacity(capacity),
            temperatures: None,
        }
    }

    /// # tick
    /// generate the next sample and fresh temperatures. the oldest sample is
    /// dropped once the window is full.
    ///
    /// ## Returns
    /// * `TelemetrySample` - the generated sample
    pub fn tick(&mut self) -> TelemetrySample {
        self.ticks += 1;

        let speed = draw(&mut self.rng, SPEED_RANGE);
        let sample = TelemetrySample {
            tick: self.ticks,
            speed,
            rpm: draw(&mut self.rng, RPM_RANGE),
            gear: gear_for_speed(speed),
            throttle: draw(&mut self.rng, THROTTLE_RANGE),
            brake: draw(&mut self.rng, BRAKE_RANGE),
        };

        self.temperatures = Some(Temperatures {
            engine: draw(&mut self.rng, ENGINE_TEMP_RANGE),
            brakes: draw(&mut self.rng, BRAKE_TEMP_RANGE),
            tires: draw(&mut self.rng, TIRE_TEMP_RANGE),
        });

        if self.capacity == 0 {
            return sample;
        }
        while self.window.len() >= self.capacity {
            self.window.pop_front();
        }
        self.window.push_back(sample);

        sample
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// the samples in the window, oldest first. empty before the first tick
    pub fn window(&self) -> Vec<TelemetrySample> {
        self.window.iter().copied().collect()
    }

    pub fn temperatures(&self) -> Option<Temperatures> {
        self.temperatures
    }

    pub fn frame(&self) -> TelemetryFrame {
        TelemetryFrame {
            ticks: self.ticks,
            samples: self.window(),
            temperatures: self.temperatures,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SimulatorState {
    Idle,
    Running,
}

/// # telemetry feed
/// drives a simulator from a tokio task at a fixed period and publishes every
/// new frame. the task is aborted on `stop` and when the feed is dropped.
pub struct TelemetryFeed {
    period: Duration,
    publisher: Arc<watch::Sender<TelemetryFrame>>,
    task: Option<JoinHandle<()>>,
}

impl TelemetryFeed {
    pub fn new(period: Duration) -> TelemetryFeed {
        let (publisher, _) = watch::channel(TelemetryFrame::default());

        TelemetryFeed {
            period,
            publisher: Arc::new(publisher),
            task: None,
        }
    }

    pub fn state(&self) -> SimulatorState {
        match &self.task {
            Some(task) if !task.is_finished() => SimulatorState::Running,
            _ => SimulatorState::Idle,
        }
    }

    /// # start the feed
    /// spawn the task ticking the simulator. the first sample arrives one
    /// period after the start. a feed that is already running is restarted
    /// with the new simulator. must be called from within a tokio runtime.
    ///
    /// ## Arguments
    /// * `simulator` - the simulator to drive
    pub fn start<R>(&mut self, mut simulator: TelemetrySimulator<R>)
    where
        R: Rng + Send + 'static,
    {
        self.stop();

        let period = self.period;
        let publisher = Arc::clone(&self.publisher);
        publisher.send_replace(simulator.frame());

        self.task = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;
                let sample = simulator.tick();
                trace!(target: "modules/telemetry:start", "tick {} (speed: {:.0}, rpm: {:.0})",
                    sample.tick, sample.speed, sample.rpm);
                publisher.send_replace(simulator.frame());
            }
        }));

        info!(target: "modules/telemetry:start", "telemetry feed started. (period: {:?})", self.period);
    }

    /// tear down the ticking task, the last frame stays readable
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            info!(target: "modules/telemetry:stop", "telemetry feed stopped");
        }
    }

    /// the most recent frame
    pub fn snapshot(&self) -> TelemetryFrame {
        self.publisher.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<TelemetryFrame> {
        self.publisher.subscribe()
    }
}

impl Drop for TelemetryFeed {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn simulator() -> TelemetrySimulator<StdRng> {
        TelemetrySimulator::new(StdRng::seed_from_u64(7))
    }

    #[test]
    fn window_is_empty_before_first_tick() {
        let simulator = simulator();
        assert!(simulator.window().is_empty());
        assert!(simulator.temperatures().is_none());
        assert!(simulator.frame().latest().is_none());
    }

    #[test]
    fn window_never_exceeds_capacity() {
        let mut simulator = simulator();
        for tick in 1..=500u64 {
            simulator.tick();
            assert!(simulator.window().len() <= DEFAULT_WINDOW);
            assert_eq!(simulator.window().len() as u64, tick.min(DEFAULT_WINDOW as u64));
        }

        let window = simulator.window();
        assert_eq!(window.first().unwrap().tick, 471);
        assert_eq!(window.last().unwrap().tick, 500);
    }

    #[test]
    fn samples_stay_within_bounds() {
        let mut simulator = simulator();
        for _ in 0..1000 {
            let sample = simulator.tick();
            assert!(sample.speed >= 150.0 && sample.speed < 330.0);
            assert!(sample.rpm >= 8000.0 && sample.rpm < 12000.0);
            assert!(sample.throttle >= 60.0 && sample.throttle < 100.0);
            assert!(sample.brake >= 0.0 && sample.brake < 100.0);
            assert!((1..=8).contains(&sample.gear));

            let temperatures = simulator.temperatures().unwrap();
            assert!(temperatures.engine >= 85.0 && temperatures.engine < 105.0);
            assert!(temperatures.brakes >= 450.0 && temperatures.brakes < 600.0);
            assert!(temperatures.tires >= 95.0 && temperatures.tires < 110.0);
        }
    }

    #[test]
    fn same_seed_gives_same_samples() {
        let mut a = simulator();
        let mut b = simulator();
        for _ in 0..10 {
            assert_eq!(a.tick(), b.tick());
        }
    }

    #[test]
    fn gear_follows_speed() {
        assert_eq!(gear_for_speed(150.0), 2);
        assert_eq!(gear_for_speed(329.9), 5);
        assert_eq!(gear_for_speed(10.0), 1);
        assert_eq!(gear_for_speed(600.0), 8);
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut simulator = TelemetrySimulator::with_capacity(StdRng::seed_from_u64(1), 0);
        simulator.tick();
        assert!(simulator.window().is_empty());
        assert_eq!(simulator.ticks(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn feed_is_empty_right_after_start() {
        let mut feed = TelemetryFeed::new(DEFAULT_TICK);
        assert_eq!(feed.state(), SimulatorState::Idle);

        feed.start(simulator());
        assert_eq!(feed.state(), SimulatorState::Running);
        assert!(feed.snapshot().samples.is_empty());

        feed.stop();
        assert_eq!(feed.state(), SimulatorState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn feed_window_is_bounded() {
        let mut feed = TelemetryFeed::new(DEFAULT_TICK);
        let mut frames = feed.subscribe();
        feed.start(simulator());

        tokio::time::sleep(Duration::from_secs(10)).await;
        frames.changed().await.unwrap();

        let frame = feed.snapshot();
        assert!(frame.ticks > DEFAULT_WINDOW as u64);
        assert_eq!(frame.samples.len(), DEFAULT_WINDOW);
        assert!(frame.temperatures.is_some());

        feed.stop();
        let last_tick = feed.snapshot().latest().unwrap().tick;
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(feed.snapshot().latest().unwrap().tick, last_tick);
    }
}
