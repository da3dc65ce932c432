//! Core units, constants, and shared primitives for the transfer planner workspace.

use thiserror::Error;

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Gravitational constant (m³ kg⁻¹ s⁻²).
    pub const G: f64 = 6.67e-11;
    /// Mass of the Earth (kg).
    pub const EARTH_MASS_KG: f64 = 5.972e24;
    /// Metres per astronomical unit.
    pub const AU_M: f64 = 149_597_870_700.0;
    /// Seconds per day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// Days per Julian year.
    pub const DAYS_PER_YEAR: f64 = 365.25;
    /// Default look-ahead for transfer window searches.
    pub const SEARCH_HORIZON_YEARS: f64 = 10.0;
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert metres per second to kilometres per second.
    #[inline]
    pub fn ms_to_kms(v: f64) -> f64 {
        v / 1_000.0
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::SECONDS_PER_DAY;

    /// Split a duration in seconds into whole days, hours, minutes and the remaining seconds.
    pub fn split_duration(seconds: f64) -> (u64, u64, u64, f64) {
        let total = seconds.max(0.0);
        let days = (total / SECONDS_PER_DAY).floor();
        let mut rem = total - days * SECONDS_PER_DAY;
        let hours = (rem / 3_600.0).floor();
        rem -= hours * 3_600.0;
        let minutes = (rem / 60.0).floor();
        rem -= minutes * 60.0;
        (days as u64, hours as u64, minutes as u64, rem)
    }
}

/// Planar vector helpers; every orbit in the model lies in one plane.
pub mod vector {
    /// Position in the orbital plane, metres.
    pub type Vector2 = [f64; 2];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector2) -> f64 {
        dot(v, v).sqrt()
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Vector2, b: &Vector2) -> f64 {
        a[0] * b[0] + a[1] * b[1]
    }

    /// Vector addition.
    #[inline]
    pub fn add(a: &Vector2, b: &Vector2) -> Vector2 {
        [a[0] + b[0], a[1] + b[1]]
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Vector2, b: &Vector2) -> Vector2 {
        [a[0] - b[0], a[1] - b[1]]
    }

    /// Scale a vector by a scalar.
    #[inline]
    pub fn scale(v: &Vector2, s: f64) -> Vector2 {
        [v[0] * s, v[1] * s]
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(a: &Vector2, b: &Vector2) -> f64 {
        norm(&sub(a, b))
    }

    /// Linear interpolation from `a` to `b`; `fraction` is clamped to `[0, 1]`.
    #[inline]
    pub fn lerp(a: &Vector2, b: &Vector2, fraction: f64) -> Vector2 {
        let f = fraction.clamp(0.0, 1.0);
        add(a, &scale(&sub(b, a), f))
    }

    /// Shortest distance from `point` to the segment `start`–`end`.
    ///
    /// The projection parameter is clamped to the segment, so points beyond either end
    /// measure to the nearest endpoint. A zero-length segment degenerates to point distance.
    pub fn distance_to_segment(point: &Vector2, start: &Vector2, end: &Vector2) -> f64 {
        let direction = sub(end, start);
        let length_sq = dot(&direction, &direction);
        if length_sq == 0.0 {
            return distance(point, start);
        }
        let u = (dot(&sub(point, start), &direction) / length_sq).clamp(0.0, 1.0);
        distance(point, &add(start, &scale(&direction, u)))
    }
}

/// Immutable set of physical constants threaded through the orbit, flight and search code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    pub gravitational_constant: f64,
    pub earth_mass_kg: f64,
    pub au_m: f64,
    pub seconds_per_day: f64,
    pub days_per_year: f64,
    pub search_horizon_years: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            gravitational_constant: constants::G,
            earth_mass_kg: constants::EARTH_MASS_KG,
            au_m: constants::AU_M,
            seconds_per_day: constants::SECONDS_PER_DAY,
            days_per_year: constants::DAYS_PER_YEAR,
            search_horizon_years: constants::SEARCH_HORIZON_YEARS,
        }
    }
}

impl PhysicalConstants {
    /// Default maximum wait for a window search, in days.
    pub fn search_horizon_days(&self) -> f64 {
        self.search_horizon_years * self.days_per_year
    }

    /// Convert a duration in seconds to days using this constant set.
    pub fn seconds_to_days(&self, seconds: f64) -> f64 {
        seconds / self.seconds_per_day
    }

    /// Convert astronomical units to metres using this constant set.
    pub fn au_to_m(&self, au: f64) -> f64 {
        au * self.au_m
    }

    pub fn m_to_au(&self, metres: f64) -> f64 {
        metres / self.au_m
    }
}

/// Invalid physical input. Always rejected at the point of entry, never coerced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("orbital period must be positive (got {0} days)")]
    NonPositivePeriod(f64),
    #[error("orbital radius must not be negative (got {0} m)")]
    NegativeOrbitRadius(f64),
    #[error("body '{name}' radius must be positive (got {value} m)")]
    NonPositiveRadius { name: String, value: f64 },
    #[error("body '{name}' mass must be positive (got {value} kg)")]
    NonPositiveMass { name: String, value: f64 },
    #[error("acceleration must be positive (got {0} m/s²)")]
    NonPositiveAcceleration(f64),
    #[error("body '{name}' escape velocity must be positive (got {value} m/s)")]
    NonPositiveEscapeVelocity { name: String, value: f64 },
    #[error("search step must be positive (got {0} days)")]
    NonPositiveStep(f64),
    #[error("a {max_wait_days}-day wait at a {step_days}-day step gives too many candidate days")]
    TooManyCandidates { max_wait_days: f64, step_days: f64 },
    #[error("{quantity} must be finite")]
    NonFiniteValue { quantity: &'static str },
}

/// Reject NaN and infinities for a named quantity.
pub fn ensure_finite(quantity: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFiniteValue { quantity })
    }
}
