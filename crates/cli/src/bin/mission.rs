use clap::Parser;
use solar_transfer_planner::common::units::{m_to_km, ms_to_kms};
use solar_transfer_planner::transfer::{
    compute_angular_positions, compute_flight_plan, compute_flight_plan_at, escape_profiles,
};

#[path = "common/session.rs"]
mod session;

/// Escape data, flight profile, and planet positions for a single transfer.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Flight profile between two planets (constant acceleration, cruise, deceleration)"
)]
struct Cli {
    /// Departure planet name (case-insensitive)
    #[arg(long)]
    from: String,

    /// Destination planet name (case-insensitive)
    #[arg(long)]
    to: String,

    /// Day offset from the epoch; adds a launch-day plan and positions at that day
    #[arg(long)]
    day: Option<f64>,

    #[command(flatten)]
    session: session::SessionArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    session::init_tracing(cli.session.verbose);
    let session = session::load(&cli.session)?;
    let acceleration = session.acceleration_m_s2();

    println!("=== Planetary Escape Data ===");
    println!(
        "{:<15} {:>22} {:>15} {:>15}",
        "Planet", "Escape Velocity (km/s)", "Time (s)", "Distance (km)"
    );
    for profile in escape_profiles(session.catalog.bodies(), acceleration)? {
        println!(
            "{:<15} {:>22.1} {:>15.1} {:>15.1}",
            profile.name,
            ms_to_kms(profile.escape_velocity_m_s),
            profile.time_s,
            m_to_km(profile.distance_m)
        );
    }

    println!();
    println!("=== Flight Profile: {} -> {} ===", cli.from, cli.to);
    let plan = compute_flight_plan(&cli.from, &cli.to, &session.catalog, acceleration)?;
    println!("Cruise velocity: {:.1} km/s", ms_to_kms(plan.cruise_velocity_m_s));
    session::print_flight_plan(&plan);

    let day = cli.day.unwrap_or(0.0);
    if cli.day.is_some() {
        println!();
        println!("=== Launch on day {day:.1} ===");
        let plan =
            compute_flight_plan_at(&cli.from, &cli.to, &session.catalog, acceleration, day)?;
        println!("Separation at launch: {:.1} km", m_to_km(plan.separation_m));
        session::print_flight_plan(&plan);
    }

    println!();
    println!("=== Angular Positions at day {day:.1} ===");
    for (name, angle) in compute_angular_positions(&session.catalog, day) {
        println!("{name:<15} {angle:>8.2} deg");
    }

    Ok(())
}
