//! Read-only body and orbit catalogs shared by every search in a session.

use std::collections::BTreeMap;

use solar_core::PhysicalConstants;
use solar_orbits::Orbit;
use solar_propulsion::Body;
use tracing::warn;

use crate::mission::PlanningError;

/// Body and orbit records keyed by name, plus the constants they were built with.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    bodies: BTreeMap<String, Body>,
    orbits: BTreeMap<String, Orbit>,
    constants: PhysicalConstants,
}

/// A body together with its orbit.
#[derive(Debug, Clone, Copy)]
pub struct TrackedBody<'a> {
    pub body: &'a Body,
    pub orbit: &'a Orbit,
}

impl TrackedBody<'_> {
    pub fn name(&self) -> &str {
        &self.body.name
    }
}

impl Catalog {
    pub fn new<B, O>(bodies: B, orbits: O, constants: PhysicalConstants) -> Self
    where
        B: IntoIterator<Item = Body>,
        O: IntoIterator<Item = Orbit>,
    {
        let bodies: BTreeMap<String, Body> =
            bodies.into_iter().map(|b| (b.name.clone(), b)).collect();
        let orbits: BTreeMap<String, Orbit> =
            orbits.into_iter().map(|o| (o.name.clone(), o)).collect();
        for name in bodies.keys().filter(|name| !orbits.contains_key(*name)) {
            warn!(body = %name, "body has no orbit and will be ignored by searches");
        }
        Self {
            bodies,
            orbits,
            constants,
        }
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.bodies.values()
    }

    pub fn orbits(&self) -> impl Iterator<Item = &Orbit> {
        self.orbits.values()
    }

    /// Look up a body by exact name, falling back to a case-insensitive match.
    pub fn body(&self, name: &str) -> Result<&Body, PlanningError> {
        lookup(&self.bodies, name).ok_or_else(|| PlanningError::UnknownBody {
            name: name.to_string(),
            available: self.body_names().into_iter().map(str::to_string).collect(),
        })
    }

    /// Look up an orbit by exact name, falling back to a case-insensitive match.
    pub fn orbit(&self, name: &str) -> Result<&Orbit, PlanningError> {
        lookup(&self.orbits, name).ok_or_else(|| PlanningError::MissingOrbit(name.to_string()))
    }

    /// Resolve a body that must also have an orbit.
    pub fn tracked(&self, name: &str) -> Result<TrackedBody<'_>, PlanningError> {
        let body = self.body(name)?;
        let orbit = self.orbit(&body.name)?;
        Ok(TrackedBody { body, orbit })
    }

    /// Every body that has both a physical record and an orbit, in name order.
    pub fn tracked_bodies(&self) -> impl Iterator<Item = TrackedBody<'_>> {
        self.bodies.values().filter_map(|body| {
            self.orbits
                .get(&body.name)
                .map(|orbit| TrackedBody { body, orbit })
        })
    }

    pub fn body_names(&self) -> Vec<&str> {
        self.bodies.keys().map(String::as_str).collect()
    }
}

fn lookup<'a, T>(map: &'a BTreeMap<String, T>, name: &str) -> Option<&'a T> {
    map.get(name).or_else(|| {
        let upper = name.to_uppercase();
        map.iter()
            .find(|(key, _)| key.to_uppercase() == upper)
            .map(|(_, value)| value)
    })
}
