#![allow(dead_code)]

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use solar_transfer_planner::common::PhysicalConstants;
use solar_transfer_planner::common::time::split_duration;
use solar_transfer_planner::config::{
    ScenarioConfig, load_bodies, load_orbits, load_rocket, load_scenario,
};
use solar_transfer_planner::transfer::setup;
use solar_transfer_planner::transfer::{Catalog, FlightPlan, Rocket};
use tracing_subscriber::EnvFilter;

/// Catalog and rocket inputs shared by every binary.
#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Body catalog (YAML, TOML, directory of TOML, or legacy .txt)
    #[arg(long, default_value = "configs/bodies.yaml")]
    pub bodies: PathBuf,

    /// Orbit catalog (YAML, TOML, directory of TOML, or legacy .txt)
    #[arg(long, default_value = "configs/orbits.yaml")]
    pub orbits: PathBuf,

    /// Rocket description (YAML, TOML, or legacy .txt)
    #[arg(long, default_value = "configs/rocket.toml")]
    pub rocket: PathBuf,

    /// Optional scenario TOML overriding constants and search defaults
    #[arg(long)]
    pub scenario: Option<PathBuf>,

    /// Log search progress at debug level (RUST_LOG takes precedence)
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}

/// Everything loaded once per invocation and read-only afterwards.
pub struct Session {
    pub catalog: Catalog,
    pub rocket: Rocket,
    pub scenario: ScenarioConfig,
}

impl Session {
    pub fn constants(&self) -> &PhysicalConstants {
        self.catalog.constants()
    }

    pub fn acceleration_m_s2(&self) -> f64 {
        self.rocket.acceleration_m_s2()
    }
}

/// Install the stderr subscriber; stdout stays reserved for results.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn load(args: &SessionArgs) -> anyhow::Result<Session> {
    let scenario = match &args.scenario {
        Some(path) => load_scenario(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => ScenarioConfig::default(),
    };
    let constants: PhysicalConstants = scenario.constants.into();

    let bodies = load_bodies(&args.bodies)
        .with_context(|| format!("loading bodies from {}", args.bodies.display()))?;
    let orbits = load_orbits(&args.orbits)
        .with_context(|| format!("loading orbits from {}", args.orbits.display()))?;
    let rocket = load_rocket(&args.rocket)
        .with_context(|| format!("loading rocket from {}", args.rocket.display()))?;

    let catalog = setup::catalog_from_config(&bodies, &orbits, constants)?;
    tracing::debug!(
        bodies = bodies.len(),
        orbits = orbits.len(),
        "catalog loaded"
    );

    Ok(Session {
        catalog,
        rocket: setup::rocket_from_config(&rocket),
        scenario,
    })
}

pub fn format_duration(seconds: f64) -> String {
    let (days, hours, minutes, secs) = split_duration(seconds);
    format!("{days} days, {hours} hours, {minutes} minutes, {secs:.1} seconds")
}

pub fn print_flight_plan(plan: &FlightPlan) {
    println!(
        "Time to reach cruising velocity: {:.1} s",
        plan.acceleration_time_s
    );
    println!(
        "Distance from starting planet when reaching cruising velocity: {:.1} km",
        plan.acceleration_distance_m / 1_000.0
    );
    println!("Cruise time: {:.1} s", plan.cruise_time_s);
    println!(
        "Distance from destination planet to start deceleration: {:.1} km",
        plan.deceleration_distance_m / 1_000.0
    );
    println!("Time to decelerate: {:.1} s", plan.deceleration_time_s);
    println!("Total travel time: {:.1} s", plan.total_time_s);
    println!("Which is {}", format_duration(plan.total_time_s));
}
