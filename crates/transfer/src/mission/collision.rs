//! Motion models deciding whether a candidate departure would hit an intervening body.
//!
//! Both models score a candidate by the departure/arrival distance at the candidate day.
//! They differ in how the flight path is checked:
//!
//! * [`StaticMotion`] freezes every body at the departure day and tests the straight
//!   segment between departure and arrival against each obstacle's radius.
//! * [`DynamicMotion`] lets every body keep moving. The rocket flies a straight line from
//!   the departure body (at launch) to the arrival body (at arrival), and each sub-step of
//!   that flight is tested against each obstacle's true position at the same instant.

use std::fmt;
use std::str::FromStr;

use solar_core::DomainError;
use solar_core::vector::{self, Vector2};
use solar_propulsion::FlightPlan;

use super::TransferLeg;

/// Minimum number of sub-steps used to sample a dynamic transit.
pub const MIN_TRANSIT_SUBSTEPS: usize = 100;

/// Scoring and collision policy evaluated once per candidate departure day.
pub trait MotionModel {
    fn kind(&self) -> MotionModelKind;

    /// Closeness score, lower is better: the departure/arrival distance at `day`.
    fn closeness(&self, leg: &TransferLeg<'_>, day: f64) -> f64 {
        vector::distance(
            &leg.departure.orbit.position(day),
            &leg.arrival.orbit.position(day),
        )
    }

    /// True if departing at `day` would bring the path within an obstacle's radius.
    fn collides(&self, leg: &TransferLeg<'_>, day: f64) -> Result<bool, DomainError>;

    /// Flight plan reported for an accepted departure day.
    fn flight_plan(&self, leg: &TransferLeg<'_>, day: f64) -> Result<FlightPlan, DomainError>;
}

/// Destination treated as stationary for the whole flight.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticMotion;

impl MotionModel for StaticMotion {
    fn kind(&self) -> MotionModelKind {
        MotionModelKind::Static
    }

    fn collides(&self, leg: &TransferLeg<'_>, day: f64) -> Result<bool, DomainError> {
        let start = leg.departure.orbit.position(day);
        let end = leg.arrival.orbit.position(day);
        Ok(leg.obstacles.iter().any(|obstacle| {
            let centre = obstacle.orbit.position(day);
            vector::distance_to_segment(&centre, &start, &end) < obstacle.body.radius_m
        }))
    }

    fn flight_plan(&self, leg: &TransferLeg<'_>, day: f64) -> Result<FlightPlan, DomainError> {
        leg.plan_across(self.closeness(leg, day))
    }
}

/// Every body keeps moving while the rocket is in transit.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicMotion;

impl DynamicMotion {
    /// Straight path from the departure body at launch to the arrival body at arrival.
    pub fn transit(&self, leg: &TransferLeg<'_>, day: f64) -> Result<Transit, DomainError> {
        let plan = leg.plan_at(day)?;
        let duration_days = plan.total_days(leg.constants);
        Ok(Transit {
            departure_day: day,
            duration_days,
            start: leg.departure.orbit.position(day),
            end: leg.arrival.orbit.position(day + duration_days),
        })
    }
}

impl MotionModel for DynamicMotion {
    fn kind(&self) -> MotionModelKind {
        MotionModelKind::Dynamic
    }

    fn collides(&self, leg: &TransferLeg<'_>, day: f64) -> Result<bool, DomainError> {
        let transit = self.transit(leg, day)?;
        let substeps = transit.substeps();
        for step in 0..=substeps {
            let fraction = step as f64 / substeps as f64;
            let (time, rocket) = transit.at(fraction);
            for obstacle in &leg.obstacles {
                let centre = obstacle.orbit.position(time);
                if vector::distance(&rocket, &centre) < obstacle.body.radius_m {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    fn flight_plan(&self, leg: &TransferLeg<'_>, day: f64) -> Result<FlightPlan, DomainError> {
        leg.plan_at(day)
    }
}

/// Straight-line flight between two fixed endpoints over a known duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transit {
    pub departure_day: f64,
    pub duration_days: f64,
    pub start: Vector2,
    pub end: Vector2,
}

impl Transit {
    pub fn arrival_day(&self) -> f64 {
        self.departure_day + self.duration_days
    }

    /// At least [`MIN_TRANSIT_SUBSTEPS`], and at least one per day of flight.
    pub fn substeps(&self) -> usize {
        let per_day = self.duration_days.max(0.0).ceil() as usize;
        per_day.max(MIN_TRANSIT_SUBSTEPS)
    }

    /// Time and rocket position at a fraction of the flight, clamped to `[0, 1]`.
    pub fn at(&self, fraction: f64) -> (f64, Vector2) {
        let f = fraction.clamp(0.0, 1.0);
        (
            self.departure_day + f * self.duration_days,
            vector::lerp(&self.start, &self.end, f),
        )
    }
}

/// Selector for the two motion models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionModelKind {
    #[default]
    Static,
    Dynamic,
}

impl fmt::Display for MotionModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionModelKind::Static => f.write_str("static"),
            MotionModelKind::Dynamic => f.write_str("dynamic"),
        }
    }
}

/// Unrecognised motion model name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown motion model '{0}' (expected 'static' or 'dynamic')")]
pub struct UnknownMotionModel(pub String);

impl FromStr for MotionModelKind {
    type Err = UnknownMotionModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(MotionModelKind::Static),
            "dynamic" => Ok(MotionModelKind::Dynamic),
            other => Err(UnknownMotionModel(other.to_string())),
        }
    }
}
