//! Configuration models and loaders for the transfer planner.
//!
//! Catalogs can be read from YAML lists, single TOML records, directories of TOML records,
//! or the plain-text description files (`.txt`) handled by [`legacy`].

pub mod legacy;

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use solar_core::{PhysicalConstants, constants};
use thiserror::Error;

/// Physical description of a body as read from a catalog.
///
/// Exactly one way of deriving the escape velocity is expected: a mass in kilograms, a mass
/// in Earth masses, or the escape velocity itself.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    pub radius_km: f64,
    #[serde(default)]
    pub mass_kg: Option<f64>,
    #[serde(default)]
    pub mass_earths: Option<f64>,
    #[serde(default)]
    pub escape_velocity_m_s: Option<f64>,
}

/// Circular orbit description as read from a catalog.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OrbitConfig {
    pub name: String,
    pub period_days: f64,
    pub orbital_radius_au: f64,
}

/// Rocket description: identical engines each adding a fixed acceleration.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct RocketConfig {
    pub engine_count: u32,
    pub acceleration_per_engine_m_s2: f64,
}

/// Scenario-wide settings; every table and field is optional.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub constants: ConstantsConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Overrides for the physical constants.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ConstantsConfig {
    pub gravitational_constant: f64,
    pub earth_mass_kg: f64,
    pub au_m: f64,
    pub seconds_per_day: f64,
    pub days_per_year: f64,
    pub search_horizon_years: f64,
}

impl Default for ConstantsConfig {
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

impl From<ConstantsConfig> for PhysicalConstants {
    fn from(value: ConstantsConfig) -> Self {
        Self {
            gravitational_constant: value.gravitational_constant,
            earth_mass_kg: value.earth_mass_kg,
            au_m: value.au_m,
            seconds_per_day: value.seconds_per_day,
            days_per_year: value.days_per_year,
            search_horizon_years: value.search_horizon_years,
        }
    }
}

/// Default search bounds. A missing `max_wait_days` means the configured horizon.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    pub start_day: f64,
    pub max_wait_days: Option<f64>,
    pub step_days: f64,
    pub model: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            start_day: 0.0,
            max_wait_days: None,
            step_days: 1.0,
            model: "static".to_string(),
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("{path}:{line}: {message}")]
    Legacy {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

/// Load body descriptions.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<BodyConfig>, ConfigError> {
    let path = path.as_ref();
    if is_legacy(path) {
        legacy::read_bodies(path)
    } else {
        load_records(path)
    }
}

/// Load orbit descriptions.
pub fn load_orbits<P: AsRef<Path>>(path: P) -> Result<Vec<OrbitConfig>, ConfigError> {
    let path = path.as_ref();
    if is_legacy(path) {
        legacy::read_orbits(path)
    } else {
        load_records(path)
    }
}

/// Load a single rocket description.
pub fn load_rocket<P: AsRef<Path>>(path: P) -> Result<RocketConfig, ConfigError> {
    let path = path.as_ref();
    if is_legacy(path) {
        legacy::read_rocket(path)
    } else {
        load_record(path)
    }
}

/// Load scenario settings from a TOML file.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<ScenarioConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

fn is_legacy(path: &Path) -> bool {
    path.extension().map(|ext| ext == "txt").unwrap_or(false)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}

fn load_record<T>(path: &Path) -> Result<T, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn load_records<T>(path: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
