//! Readers for the plain-text description files.
//!
//! ```text
//! Number of rocket engines: 4
//! Acceleration per engine: 10 m/s^2
//!
//! Earth: diameter = 12742 km, mass = 5.972 * 10^24 kg
//! Mars: diameter = 6779 km, mass = 0.107 Earths
//!
//! Earth: period = 365 days, orbital radius = 1 AU
//! ```

use std::path::Path;

use crate::{BodyConfig, ConfigError, OrbitConfig, RocketConfig};

/// Mass as written in a planetary description line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mass {
    Kilograms(f64),
    EarthMasses(f64),
}

/// Parse `5.972 * 10^24 kg`, `6.4 * 1e23 kg`, `1.2e22 kg` or `0.107 Earths`.
pub fn parse_mass(text: &str) -> Result<Mass, String> {
    let text = text.trim();
    if let Some(kg) = text.strip_suffix("kg") {
        let kg = kg.trim();
        let value = match kg.split_once('*') {
            Some((base, factor)) => {
                let base = parse_number(base)?;
                let factor = factor.trim();
                match factor.split_once('^') {
                    Some((_, exponent)) => base * 10f64.powf(parse_number(exponent)?),
                    None => base * parse_number(factor)?,
                }
            }
            None => parse_number(kg)?,
        };
        Ok(Mass::Kilograms(value))
    } else {
        let first = text
            .split_whitespace()
            .next()
            .ok_or_else(|| "missing mass value".to_string())?;
        Ok(Mass::EarthMasses(parse_number(first)?))
    }
}

/// Parse the two-line rocket description.
pub fn parse_rocket(contents: &str) -> Result<RocketConfig, (usize, String)> {
    let mut lines = contents.lines().enumerate().filter(|(_, l)| !l.trim().is_empty());
    let (engine_line, engines) = lines
        .next()
        .ok_or((1, "missing engine count".to_string()))?;
    let engine_count = value_after_colon(engines)
        .and_then(|v| {
            v.parse::<u32>()
                .map_err(|err| format!("invalid engine count '{v}': {err}"))
        })
        .map_err(|msg| (engine_line + 1, msg))?;

    let (accel_line, accel) = lines
        .next()
        .ok_or((engine_line + 2, "missing acceleration per engine".to_string()))?;
    let acceleration_per_engine_m_s2 = value_after_colon(accel)
        .and_then(|v| {
            let number = v
                .split_whitespace()
                .next()
                .ok_or_else(|| "missing acceleration value".to_string())?;
            parse_number(number)
        })
        .map_err(|msg| (accel_line + 1, msg))?;

    Ok(RocketConfig {
        engine_count,
        acceleration_per_engine_m_s2,
    })
}

/// Parse one `Name: diameter = D km, mass = M` line.
pub fn parse_body_line(line: &str) -> Result<BodyConfig, String> {
    let (name, rest) = split_name(line)?;
    let diameter_km = field(rest, "diameter")
        .and_then(|v| parse_number(strip_unit(v, "km")))?;
    let mass = parse_mass(field(rest, "mass")?)?;
    let (mass_kg, mass_earths) = match mass {
        Mass::Kilograms(kg) => (Some(kg), None),
        Mass::EarthMasses(earths) => (None, Some(earths)),
    };
    Ok(BodyConfig {
        name,
        radius_km: diameter_km / 2.0,
        mass_kg,
        mass_earths,
        escape_velocity_m_s: None,
    })
}

/// Parse one `Name: period = P days, orbital radius = R AU` line.
pub fn parse_orbit_line(line: &str) -> Result<OrbitConfig, String> {
    let (name, rest) = split_name(line)?;
    let period_days = field(rest, "period").and_then(|v| parse_number(strip_unit(v, "days")))?;
    let orbital_radius_au =
        field(rest, "orbital radius").and_then(|v| parse_number(strip_unit(v, "AU")))?;
    Ok(OrbitConfig {
        name,
        period_days,
        orbital_radius_au,
    })
}

pub(crate) fn read_rocket(path: &Path) -> Result<RocketConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    parse_rocket(&contents).map_err(|(line, message)| ConfigError::Legacy {
        path: path.to_path_buf(),
        line,
        message,
    })
}

pub(crate) fn read_bodies(path: &Path) -> Result<Vec<BodyConfig>, ConfigError> {
    read_lines(path, parse_body_line)
}

pub(crate) fn read_orbits(path: &Path) -> Result<Vec<OrbitConfig>, ConfigError> {
    read_lines(path, parse_orbit_line)
}

fn read_lines<T>(
    path: &Path,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<Vec<T>, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            parse(line.trim()).map_err(|message| ConfigError::Legacy {
                path: path.to_path_buf(),
                line: index + 1,
                message,
            })
        })
        .collect()
}

fn split_name(line: &str) -> Result<(String, &str), String> {
    let (name, rest) = line
        .split_once(':')
        .ok_or_else(|| format!("expected 'Name: ...', got '{}'", line.trim()))?;
    let name = name.trim();
    if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(format!("invalid body name '{name}'"));
    }
    Ok((name.to_string(), rest))
}

/// Value of the comma-separated `key = value` entry named `key`.
fn field<'a>(rest: &'a str, key: &str) -> Result<&'a str, String> {
    rest.split(',')
        .filter_map(|part| part.split_once('='))
        .find(|(k, _)| k.trim().eq_ignore_ascii_case(key))
        .map(|(_, v)| v.trim())
        .ok_or_else(|| format!("missing '{key}' field"))
}

fn value_after_colon(line: &str) -> Result<&str, String> {
    line.split_once(':')
        .map(|(_, v)| v.trim())
        .ok_or_else(|| format!("expected 'label: value', got '{}'", line.trim()))
}

fn strip_unit<'a>(value: &'a str, unit: &str) -> &'a str {
    value.strip_suffix(unit).unwrap_or(value).trim()
}

fn parse_number(text: &str) -> Result<f64, String> {
    let text = text.trim();
    text.parse::<f64>()
        .map_err(|err| format!("invalid number '{text}': {err}"))
}
