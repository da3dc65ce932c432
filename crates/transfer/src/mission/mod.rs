//! Flight planning between catalog bodies, transfer window search, and trajectory sampling.

pub mod collision;
pub mod trajectory;
pub mod window;

use std::collections::BTreeMap;

use solar_core::{DomainError, PhysicalConstants};
use solar_orbits::{angular_positions, separation};
use solar_propulsion::{FlightPlan, plan_flight};

use crate::catalog::{Catalog, TrackedBody};

/// Top-level planning error.
#[derive(Debug, thiserror::Error)]
pub enum PlanningError {
    #[error("invalid physical input: {0}")]
    Domain(#[from] DomainError),
    #[error("body '{name}' not found in catalog (choose from: {})", available.join(", "))]
    UnknownBody { name: String, available: Vec<String> },
    #[error("body '{0}' has no orbit in catalog")]
    MissingOrbit(String),
}

/// Departure and arrival resolved against a catalog, with every other body as an obstacle.
#[derive(Debug, Clone)]
pub struct TransferLeg<'a> {
    pub departure: TrackedBody<'a>,
    pub arrival: TrackedBody<'a>,
    pub obstacles: Vec<TrackedBody<'a>>,
    pub acceleration_m_s2: f64,
    pub constants: &'a PhysicalConstants,
}

impl<'a> TransferLeg<'a> {
    /// Resolve both endpoints; fails on unknown names or a non-positive acceleration.
    pub fn resolve(
        catalog: &'a Catalog,
        departure: &str,
        arrival: &str,
        acceleration_m_s2: f64,
    ) -> Result<Self, PlanningError> {
        if !(acceleration_m_s2 > 0.0 && acceleration_m_s2.is_finite()) {
            return Err(DomainError::NonPositiveAcceleration(acceleration_m_s2).into());
        }
        let departure = catalog.tracked(departure)?;
        let arrival = catalog.tracked(arrival)?;
        let obstacles = catalog
            .tracked_bodies()
            .filter(|tracked| {
                tracked.name() != departure.name() && tracked.name() != arrival.name()
            })
            .collect();
        Ok(Self {
            departure,
            arrival,
            obstacles,
            acceleration_m_s2,
            constants: catalog.constants(),
        })
    }

    /// Flight plan across the separation both bodies have at `launch_day`.
    pub fn plan_at(&self, launch_day: f64) -> Result<FlightPlan, DomainError> {
        let distance = separation(self.departure.orbit, self.arrival.orbit, launch_day);
        self.plan_across(distance)
    }

    /// Flight plan across an explicit centre-to-centre separation.
    pub fn plan_across(&self, separation_m: f64) -> Result<FlightPlan, DomainError> {
        plan_flight(
            self.departure.body,
            self.arrival.body,
            separation_m,
            self.acceleration_m_s2,
        )
    }
}

/// Flight plan across the difference of the two orbital radii, independent of launch time.
pub fn compute_flight_plan(
    departure: &str,
    arrival: &str,
    catalog: &Catalog,
    acceleration_m_s2: f64,
) -> Result<FlightPlan, PlanningError> {
    let leg = TransferLeg::resolve(catalog, departure, arrival, acceleration_m_s2)?;
    let radial_gap = (leg.arrival.orbit.radius_m - leg.departure.orbit.radius_m).abs();
    Ok(leg.plan_across(radial_gap)?)
}

/// Flight plan across the straight-line separation at `launch_day`.
pub fn compute_flight_plan_at(
    departure: &str,
    arrival: &str,
    catalog: &Catalog,
    acceleration_m_s2: f64,
    launch_day: f64,
) -> Result<FlightPlan, PlanningError> {
    let leg = TransferLeg::resolve(catalog, departure, arrival, acceleration_m_s2)?;
    Ok(leg.plan_at(launch_day)?)
}

/// Angular position in degrees of every orbit in the catalog at `time_days`.
pub fn compute_angular_positions(catalog: &Catalog, time_days: f64) -> BTreeMap<String, f64> {
    angular_positions(catalog.orbits(), time_days)
}
