//! Rocket and body descriptors plus the accelerate/cruise/decelerate flight profile.

use solar_core::{DomainError, PhysicalConstants, ensure_finite};

/// Physical properties of a body relevant to departure and arrival.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String,
    /// Mean physical radius (m).
    pub radius_m: f64,
    /// Surface escape velocity (m/s).
    pub escape_velocity_m_s: f64,
}

impl Body {
    /// Build a validated body from a known escape velocity.
    pub fn new(
        name: impl Into<String>,
        radius_m: f64,
        escape_velocity_m_s: f64,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if !(radius_m > 0.0 && radius_m.is_finite()) {
            return Err(DomainError::NonPositiveRadius {
                name,
                value: radius_m,
            });
        }
        if !(escape_velocity_m_s > 0.0 && escape_velocity_m_s.is_finite()) {
            return Err(DomainError::NonPositiveEscapeVelocity {
                name,
                value: escape_velocity_m_s,
            });
        }
        Ok(Self {
            name,
            radius_m,
            escape_velocity_m_s,
        })
    }

    /// Build a body from its mass, deriving the escape velocity `√(2GM/r)`.
    pub fn from_mass(
        name: impl Into<String>,
        radius_m: f64,
        mass_kg: f64,
        constants: &PhysicalConstants,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if !(mass_kg > 0.0 && mass_kg.is_finite()) {
            return Err(DomainError::NonPositiveMass {
                name,
                value: mass_kg,
            });
        }
        if !(radius_m > 0.0 && radius_m.is_finite()) {
            return Err(DomainError::NonPositiveRadius {
                name,
                value: radius_m,
            });
        }
        let v_escape = escape_velocity(mass_kg, radius_m, constants.gravitational_constant);
        Self::new(name, radius_m, v_escape)
    }
}

/// Escape velocity from the surface of a body of the given mass and radius (m/s).
pub fn escape_velocity(mass_kg: f64, radius_m: f64, gravitational_constant: f64) -> f64 {
    (2.0 * gravitational_constant * mass_kg / radius_m).sqrt()
}

/// Rocket made of identical engines, each contributing a fixed acceleration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rocket {
    pub engine_count: u32,
    pub acceleration_per_engine_m_s2: f64,
}

impl Rocket {
    /// Combined constant acceleration of all engines (m/s²).
    pub fn acceleration_m_s2(&self) -> f64 {
        f64::from(self.engine_count) * self.acceleration_per_engine_m_s2
    }
}

/// Kinematic breakdown of a single transfer between two bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightPlan {
    pub departure: String,
    pub arrival: String,
    pub acceleration_m_s2: f64,
    /// Centre-to-centre separation the plan was derived from (m).
    pub separation_m: f64,
    pub cruise_velocity_m_s: f64,
    pub acceleration_time_s: f64,
    pub acceleration_distance_m: f64,
    pub cruise_time_s: f64,
    /// Never negative: a short hop has no cruise segment.
    pub cruise_distance_m: f64,
    pub deceleration_time_s: f64,
    pub deceleration_distance_m: f64,
    pub total_time_s: f64,
}

impl FlightPlan {
    /// Total travel time in days.
    pub fn total_days(&self, constants: &PhysicalConstants) -> f64 {
        constants.seconds_to_days(self.total_time_s)
    }

    /// True when the separation is too short to reach a constant-velocity cruise.
    pub fn is_short_hop(&self) -> bool {
        self.cruise_distance_m == 0.0
    }
}

/// Compute the accelerate/cruise/decelerate profile across a known separation.
///
/// The cruise velocity is the larger of the two escape velocities. Acceleration and
/// deceleration legs are symmetric; whatever separation remains after subtracting both
/// body radii and both legs is covered at cruise velocity, floored at zero.
pub fn plan_flight(
    departure: &Body,
    arrival: &Body,
    separation_m: f64,
    acceleration_m_s2: f64,
) -> Result<FlightPlan, DomainError> {
    if !(acceleration_m_s2 > 0.0 && acceleration_m_s2.is_finite()) {
        return Err(DomainError::NonPositiveAcceleration(acceleration_m_s2));
    }
    for body in [departure, arrival] {
        if !(body.escape_velocity_m_s > 0.0 && body.escape_velocity_m_s.is_finite()) {
            return Err(DomainError::NonPositiveEscapeVelocity {
                name: body.name.clone(),
                value: body.escape_velocity_m_s,
            });
        }
    }
    let separation_m = ensure_finite("separation", separation_m)?;

    let cruise_velocity = departure.escape_velocity_m_s.max(arrival.escape_velocity_m_s);
    let acceleration_time = cruise_velocity / acceleration_m_s2;
    let acceleration_distance = 0.5 * acceleration_m_s2 * acceleration_time * acceleration_time;
    let deceleration_time = acceleration_time;
    let deceleration_distance = acceleration_distance;

    let cruise_distance = (separation_m
        - departure.radius_m
        - arrival.radius_m
        - acceleration_distance
        - deceleration_distance)
        .max(0.0);
    let cruise_time = if cruise_distance > 0.0 {
        cruise_distance / cruise_velocity
    } else {
        0.0
    };

    Ok(FlightPlan {
        departure: departure.name.clone(),
        arrival: arrival.name.clone(),
        acceleration_m_s2,
        separation_m,
        cruise_velocity_m_s: cruise_velocity,
        acceleration_time_s: acceleration_time,
        acceleration_distance_m: acceleration_distance,
        cruise_time_s: cruise_time,
        cruise_distance_m: cruise_distance,
        deceleration_time_s: deceleration_time,
        deceleration_distance_m: deceleration_distance,
        total_time_s: acceleration_time + cruise_time + deceleration_time,
    })
}

/// Time and distance needed to reach a body's escape velocity at constant acceleration.
#[derive(Debug, Clone, PartialEq)]
pub struct EscapeProfile {
    pub name: String,
    pub escape_velocity_m_s: f64,
    pub time_s: f64,
    pub distance_m: f64,
}

/// Escape profile for every body, sorted by name.
pub fn escape_profiles<'a, I>(
    bodies: I,
    acceleration_m_s2: f64,
) -> Result<Vec<EscapeProfile>, DomainError>
where
    I: IntoIterator<Item = &'a Body>,
{
    if !(acceleration_m_s2 > 0.0 && acceleration_m_s2.is_finite()) {
        return Err(DomainError::NonPositiveAcceleration(acceleration_m_s2));
    }
    let mut profiles: Vec<EscapeProfile> = bodies
        .into_iter()
        .map(|body| {
            let time_s = body.escape_velocity_m_s / acceleration_m_s2;
            EscapeProfile {
                name: body.name.clone(),
                escape_velocity_m_s: body.escape_velocity_m_s,
                time_s,
                distance_m: 0.5 * acceleration_m_s2 * time_s * time_s,
            }
        })
        .collect();
    profiles.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(profiles)
}
