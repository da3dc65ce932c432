//! Circular-orbit position helpers.
//!
//! Every body starts at angle zero at the epoch (day 0) and advances at a constant angular
//! rate of `360 / period` degrees per day. All orbits share one plane, so positions are 2-D.
use std::collections::BTreeMap;

use solar_core::DomainError;
use solar_core::vector::{self, Vector2};

const FULL_TURN_DEG: f64 = 360.0;

/// Circular orbit of a named body around the central star.
#[derive(Debug, Clone, PartialEq)]
pub struct Orbit {
    pub name: String,
    pub period_days: f64,
    pub radius_m: f64,
}

impl Orbit {
    /// Build a validated orbit: the period must be positive and the radius non-negative.
    pub fn new(
        name: impl Into<String>,
        period_days: f64,
        radius_m: f64,
    ) -> Result<Self, DomainError> {
        validate_period(period_days)?;
        if radius_m < 0.0 || !radius_m.is_finite() {
            return Err(DomainError::NegativeOrbitRadius(radius_m));
        }
        Ok(Self {
            name: name.into(),
            period_days,
            radius_m,
        })
    }

    /// Angular position in degrees, `[0, 360)`.
    pub fn angle_deg(&self, time_days: f64) -> f64 {
        wrap_degrees(FULL_TURN_DEG / self.period_days * time_days)
    }

    /// Position in the orbital plane, metres.
    pub fn position(&self, time_days: f64) -> Vector2 {
        polar_to_cartesian(self.radius_m, self.angle_deg(time_days))
    }
}

/// Angular position on a circular orbit: `(360 / period × time) mod 360`, in degrees.
pub fn angular_position(period_days: f64, time_days: f64) -> Result<f64, DomainError> {
    validate_period(period_days)?;
    Ok(wrap_degrees(FULL_TURN_DEG / period_days * time_days))
}

/// Cartesian position on a circular orbit of radius `orbit_radius_m`.
pub fn cartesian(
    orbit_radius_m: f64,
    period_days: f64,
    time_days: f64,
) -> Result<Vector2, DomainError> {
    let angle = angular_position(period_days, time_days)?;
    Ok(polar_to_cartesian(orbit_radius_m, angle))
}

/// Angular position of every orbit at `time_days`, keyed by body name.
pub fn angular_positions<'a, I>(orbits: I, time_days: f64) -> BTreeMap<String, f64>
where
    I: IntoIterator<Item = &'a Orbit>,
{
    orbits
        .into_iter()
        .map(|orbit| (orbit.name.clone(), orbit.angle_deg(time_days)))
        .collect()
}

/// Straight-line distance between two bodies at `time_days` from the law of cosines.
pub fn separation(a: &Orbit, b: &Orbit, time_days: f64) -> f64 {
    let delta = (a.angle_deg(time_days) - b.angle_deg(time_days)).to_radians();
    let squared = a.radius_m * a.radius_m + b.radius_m * b.radius_m
        - 2.0 * a.radius_m * b.radius_m * delta.cos();
    squared.max(0.0).sqrt()
}

/// Straight-line distance between two bodies from their Cartesian positions.
pub fn distance_between(a: &Orbit, b: &Orbit, time_days: f64) -> f64 {
    vector::distance(&a.position(time_days), &b.position(time_days))
}

fn validate_period(period_days: f64) -> Result<(), DomainError> {
    if period_days > 0.0 && period_days.is_finite() {
        Ok(())
    } else {
        Err(DomainError::NonPositivePeriod(period_days))
    }
}

fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_TURN_DEG);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if wrapped >= FULL_TURN_DEG { 0.0 } else { wrapped }
}

fn polar_to_cartesian(radius_m: f64, angle_deg: f64) -> Vector2 {
    let theta = angle_deg.to_radians();
    [radius_m * theta.cos(), radius_m * theta.sin()]
}
