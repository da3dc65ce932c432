//! Discretised straight-line trajectory with co-sampled body positions for playback.

use std::collections::BTreeMap;

use solar_core::vector::{self, Vector2};
use solar_propulsion::FlightPlan;

use super::{PlanningError, TransferLeg};
use crate::catalog::Catalog;

/// Minimum number of samples for any flight of non-zero duration.
pub const MIN_SAMPLES: usize = 100;
/// Smallest sample spacing, in days.
pub const MIN_SAMPLE_STEP_DAYS: f64 = 0.1;

/// Rocket position at one sample time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RocketSample {
    pub day: f64,
    pub position_m: Vector2,
}

/// Sampled flight, computed once and replayed any number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub departure: String,
    pub arrival: String,
    pub departure_day: f64,
    pub arrival_day: f64,
    pub plan: FlightPlan,
    rocket: Vec<RocketSample>,
    bodies: BTreeMap<String, Vec<Vector2>>,
}

/// Everything visible at a single sample index.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<'a> {
    pub index: usize,
    pub rocket: &'a RocketSample,
    pub bodies: Vec<(&'a str, Vector2)>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.rocket.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rocket.is_empty()
    }

    pub fn rocket(&self) -> &[RocketSample] {
        &self.rocket
    }

    /// Positions of one body at every sample index.
    pub fn body_positions(&self, name: &str) -> Option<&[Vector2]> {
        self.bodies.get(name).map(Vec::as_slice)
    }

    pub fn bodies(&self) -> impl Iterator<Item = (&str, &[Vector2])> {
        self.bodies
            .iter()
            .map(|(name, positions)| (name.as_str(), positions.as_slice()))
    }

    /// Replay the flight frame by frame. Each call starts again from the first sample.
    pub fn frames(&self) -> impl Iterator<Item = Frame<'_>> {
        self.rocket.iter().enumerate().map(|(index, rocket)| Frame {
            index,
            rocket,
            bodies: self
                .bodies
                .iter()
                .map(|(name, positions)| (name.as_str(), positions[index]))
                .collect(),
        })
    }
}

/// Sample times from departure to arrival.
///
/// Spacing is `max(0.1, duration / 100)` days, tightened so that at least [`MIN_SAMPLES`]
/// samples are produced and the final sample lands on arrival. A zero duration yields the
/// departure day alone.
pub fn sample_days(departure_day: f64, duration_days: f64) -> Vec<f64> {
    if !(duration_days > 0.0) {
        return vec![departure_day];
    }
    let step = MIN_SAMPLE_STEP_DAYS.max(duration_days / MIN_SAMPLES as f64);
    let count = ((duration_days / step).floor() as usize + 1).max(MIN_SAMPLES);
    let spacing = duration_days / (count - 1) as f64;
    (0..count)
        .map(|i| {
            if i + 1 == count {
                departure_day + duration_days
            } else {
                departure_day + i as f64 * spacing
            }
        })
        .collect()
}

/// Sample a resolved leg departing at `departure_day`.
///
/// The travel time comes from the launch-day separation. The rocket is interpolated between
/// the departure body at launch and the arrival body at arrival; every catalog orbit is
/// sampled at the same times.
pub fn sample_leg(
    leg: &TransferLeg<'_>,
    catalog: &Catalog,
    departure_day: f64,
) -> Result<Trajectory, PlanningError> {
    let plan = leg.plan_at(departure_day)?;
    let duration_days = plan.total_days(leg.constants);
    let arrival_day = departure_day + duration_days;
    let start = leg.departure.orbit.position(departure_day);
    let end = leg.arrival.orbit.position(arrival_day);

    let days = sample_days(departure_day, duration_days);
    let rocket = days
        .iter()
        .map(|&day| {
            let fraction = if duration_days > 0.0 {
                (day - departure_day) / duration_days
            } else {
                0.0
            };
            RocketSample {
                day,
                position_m: vector::lerp(&start, &end, fraction),
            }
        })
        .collect();
    let bodies = catalog
        .orbits()
        .map(|orbit| {
            let positions = days.iter().map(|&day| orbit.position(day)).collect();
            (orbit.name.clone(), positions)
        })
        .collect();

    Ok(Trajectory {
        departure: leg.departure.name().to_string(),
        arrival: leg.arrival.name().to_string(),
        departure_day,
        arrival_day,
        plan,
        rocket,
        bodies,
    })
}

/// Sample the flight between two catalog bodies departing at `departure_day`.
pub fn sample_trajectory(
    departure: &str,
    arrival: &str,
    catalog: &Catalog,
    acceleration_m_s2: f64,
    departure_day: f64,
) -> Result<Trajectory, PlanningError> {
    let leg = TransferLeg::resolve(catalog, departure, arrival, acceleration_m_s2)?;
    sample_leg(&leg, catalog, departure_day)
}
