//! Velocity tracking for drag release and fling classification.
//!
//! Port of Jetpack Compose's VelocityTracker1D using the Impulse strategy,
//! paired per axis into a 2D [`VelocityTracker`] that produces a
//! [`VelocityEstimate`] when the last pointer of a drag lifts.

use crate::nodes::input::types::Uptime;
use dragkit_geometry::{Offset, Point, Velocity};

/// Ring buffer size for velocity tracking samples.
const HISTORY_SIZE: usize = 20;

/// Only use samples within the last 100ms for velocity calculation.
const HORIZON_MS: i64 = 100;

/// If no movement for this duration, assume the pointer has stopped.
pub const ASSUME_STOPPED_MS: i64 = 40;

/// A data point with timestamp.
#[derive(Clone, Copy, Default)]
struct DataPointAtTime {
    time_ms: i64,
    data_point: f32,
}

/// Samples selected for an estimate, newest first.
struct SampleWindow {
    data_points: [f32; HISTORY_SIZE],
    times: [f32; HISTORY_SIZE],
    sample_count: usize,
    newest: DataPointAtTime,
    oldest: DataPointAtTime,
}

/// Result of a 1D estimate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Estimate1D {
    /// Units per second.
    pub velocity: f32,
    /// Net change between the oldest and newest sample used.
    pub offset: f32,
    pub duration_ms: u64,
}

/// 1D velocity tracker using impulse-based velocity calculation.
///
/// This implements the same algorithm as Jetpack Compose's VelocityTracker1D
/// with the Impulse strategy, which calculates velocity based on the
/// kinetic energy imparted by the touch gestures.
#[derive(Clone)]
pub struct VelocityTracker1D {
    /// Ring buffer of samples.
    samples: [Option<DataPointAtTime>; HISTORY_SIZE],
    /// Current write index in ring buffer.
    index: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
        }
    }

    /// Adds an absolute position sampled at `time_ms`.
    pub fn add_data_point(&mut self, time_ms: i64, data_point: f32) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(DataPointAtTime {
            time_ms,
            data_point,
        });
    }

    fn window(&self) -> Option<SampleWindow> {
        let newest = self.samples[self.index]?;
        let mut window = SampleWindow {
            data_points: [0.0; HISTORY_SIZE],
            times: [0.0; HISTORY_SIZE],
            sample_count: 0,
            newest,
            oldest: newest,
        };

        let mut current_index = self.index;
        let mut previous_sample = newest;

        while let Some(sample) = self.samples[current_index] {
            let age = newest.time_ms - sample.time_ms;
            let gap = (previous_sample.time_ms - sample.time_ms).abs();
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            previous_sample = sample;

            window.data_points[window.sample_count] = sample.data_point;
            window.times[window.sample_count] = -(age as f32);
            window.oldest = sample;
            window.sample_count += 1;
            if window.sample_count >= HISTORY_SIZE {
                break;
            }

            current_index = if current_index == 0 {
                HISTORY_SIZE - 1
            } else {
                current_index - 1
            };
        }

        Some(window)
    }

    /// Estimates velocity and travelled distance over the recent window.
    ///
    /// Returns `None` with fewer than two usable samples.
    pub fn estimate(&self) -> Option<Estimate1D> {
        let window = self.window()?;
        if window.sample_count < 2 {
            return None;
        }

        let velocity_per_ms =
            calculate_impulse_velocity(&window.data_points, &window.times, window.sample_count);
        let velocity = velocity_per_ms * 1000.0;
        if !velocity.is_finite() {
            return None;
        }

        Some(Estimate1D {
            velocity,
            offset: window.newest.data_point - window.oldest.data_point,
            duration_ms: (window.newest.time_ms - window.oldest.time_ms) as u64,
        })
    }

    /// Calculates the velocity in units/second.
    ///
    /// Returns 0.0 if there aren't enough samples or if the pointer hasn't moved.
    pub fn calculate_velocity(&self) -> f32 {
        self.estimate().map_or(0.0, |estimate| estimate.velocity)
    }

    /// Clears all tracked data.
    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }
}

/// Calculates velocity using the impulse strategy from Jetpack Compose.
fn calculate_impulse_velocity(
    data_points: &[f32; HISTORY_SIZE],
    times: &[f32; HISTORY_SIZE],
    sample_count: usize,
) -> f32 {
    if sample_count < 2 {
        return 0.0;
    }

    let mut work = 0.0f32;
    let start = sample_count - 1;
    let mut next_time = times[start];

    for i in (1..=start).rev() {
        let current_time = next_time;
        next_time = times[i - 1];
        if current_time == next_time {
            continue;
        }

        let v_curr = (data_points[i - 1] - data_points[i]) / (next_time - current_time);
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == start {
            work *= 0.5;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// Converts kinetic energy to velocity using E = 0.5 * m * v^2 (with m = 1).
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}

/// What the tracker knows about a pointer's recent motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocityEstimate {
    pub pixels_per_second: Offset,
    /// Net displacement over the samples the estimate was built from.
    pub offset: Offset,
    pub duration_ms: u64,
}

impl VelocityEstimate {
    pub fn velocity(&self) -> Velocity {
        Velocity::new(self.pixels_per_second)
    }
}

/// Per-pointer 2D tracker.
#[derive(Clone, Default)]
pub struct VelocityTracker {
    x: VelocityTracker1D,
    y: VelocityTracker1D,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sample(&mut self, uptime: Uptime, position: Point) {
        let time_ms = uptime as i64;
        self.x.add_data_point(time_ms, position.x);
        self.y.add_data_point(time_ms, position.y);
    }

    /// Both axes share timestamps, so they agree on whether an estimate exists.
    pub fn estimate(&self) -> Option<VelocityEstimate> {
        let x = self.x.estimate()?;
        let y = self.y.estimate()?;
        Some(VelocityEstimate {
            pixels_per_second: Offset::new(x.velocity, y.velocity),
            offset: Offset::new(x.offset, y.offset),
            duration_ms: x.duration_ms.max(y.duration_ms),
        })
    }

    pub fn velocity(&self) -> Velocity {
        self.estimate()
            .map_or(Velocity::ZERO, |estimate| estimate.velocity())
    }

    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
    }
}
