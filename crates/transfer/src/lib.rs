//! Transfer façade crate consolidating window search and trajectory sampling and exposing supporting crates.

pub mod catalog;
pub mod mission;

pub use facade::*;
pub use solar_orbits as orbits;
pub use solar_propulsion as propulsion;

mod facade;
