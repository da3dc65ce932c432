//! Re-exported APIs for consumers of the transfer crate.

pub use crate::catalog::{Catalog, TrackedBody};
pub use crate::mission::collision::{
    DynamicMotion, MotionModel, MotionModelKind, StaticMotion, Transit, UnknownMotionModel,
};
pub use crate::mission::trajectory::{Frame, RocketSample, Trajectory, sample_trajectory};
pub use crate::mission::window::{
    CandidateEvaluation, TransferWindow, WindowOutcome, WindowRequest, scan_window,
    search_and_scan_window, search_dynamic_window, search_static_window, search_window,
};
pub use crate::mission::{
    PlanningError, TransferLeg, compute_angular_positions, compute_flight_plan,
    compute_flight_plan_at,
};
pub use solar_core::{DomainError, PhysicalConstants};
pub use solar_orbits::Orbit;
pub use solar_propulsion::{Body, EscapeProfile, FlightPlan, Rocket, escape_profiles};

pub mod setup {
    use solar_config::{BodyConfig, OrbitConfig, RocketConfig, SearchConfig};
    use solar_core::units::km_to_m;
    use solar_core::{DomainError, PhysicalConstants};
    use solar_orbits::Orbit;
    use solar_propulsion::{Body, Rocket};
    use thiserror::Error;

    use crate::catalog::Catalog;
    use crate::mission::collision::{MotionModelKind, UnknownMotionModel};
    use crate::mission::window::WindowRequest;

    /// Errors surfaced when turning configuration records into runtime types.
    #[derive(Debug, Error)]
    pub enum SetupError {
        #[error("body '{0}' needs one of mass_kg, mass_earths or escape_velocity_m_s")]
        MissingMass(String),
        #[error(transparent)]
        Domain(#[from] DomainError),
        #[error(transparent)]
        Model(#[from] UnknownMotionModel),
    }

    /// Convert a `BodyConfig` into a runtime `Body`, deriving escape velocity from mass.
    pub fn body_from_config(
        config: &BodyConfig,
        constants: &PhysicalConstants,
    ) -> Result<Body, SetupError> {
        let radius_m = km_to_m(config.radius_km);
        if let Some(v_escape) = config.escape_velocity_m_s {
            return Ok(Body::new(config.name.clone(), radius_m, v_escape)?);
        }
        let mass_kg = match (config.mass_kg, config.mass_earths) {
            (Some(kg), _) => kg,
            (None, Some(earths)) => earths * constants.earth_mass_kg,
            (None, None) => return Err(SetupError::MissingMass(config.name.clone())),
        };
        Ok(Body::from_mass(
            config.name.clone(),
            radius_m,
            mass_kg,
            constants,
        )?)
    }

    /// Convert an `OrbitConfig` into a runtime `Orbit`, converting AU to metres.
    pub fn orbit_from_config(
        config: &OrbitConfig,
        constants: &PhysicalConstants,
    ) -> Result<Orbit, SetupError> {
        Ok(Orbit::new(
            config.name.clone(),
            config.period_days,
            constants.au_to_m(config.orbital_radius_au),
        )?)
    }

    /// Build the session catalog from loaded configuration records.
    pub fn catalog_from_config(
        bodies: &[BodyConfig],
        orbits: &[OrbitConfig],
        constants: PhysicalConstants,
    ) -> Result<Catalog, SetupError> {
        let bodies = bodies
            .iter()
            .map(|cfg| body_from_config(cfg, &constants))
            .collect::<Result<Vec<_>, _>>()?;
        let orbits = orbits
            .iter()
            .map(|cfg| orbit_from_config(cfg, &constants))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Catalog::new(bodies, orbits, constants))
    }

    pub fn rocket_from_config(config: &RocketConfig) -> Rocket {
        Rocket {
            engine_count: config.engine_count,
            acceleration_per_engine_m_s2: config.acceleration_per_engine_m_s2,
        }
    }

    /// Motion model and window bounds from the scenario's search table.
    pub fn search_from_config(
        config: &SearchConfig,
        constants: &PhysicalConstants,
    ) -> Result<(MotionModelKind, WindowRequest), SetupError> {
        let kind: MotionModelKind = config.model.parse()?;
        let max_wait = config
            .max_wait_days
            .unwrap_or_else(|| constants.search_horizon_days());
        let request = WindowRequest::new(config.start_day, max_wait).with_step(config.step_days);
        Ok((kind, request))
    }
}
