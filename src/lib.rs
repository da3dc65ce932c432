//! Transfer window planning between bodies on circular orbits.
//!
//! The member crates are re-exported here so front-ends (CLI, GUI, playback tools) can
//! depend on a single library.

pub use solar_config as config;
pub use solar_core as common;
pub use solar_export as export;
pub use solar_orbits as orbits;
pub use solar_propulsion as propulsion;
pub use solar_transfer as transfer;

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
