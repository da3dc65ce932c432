use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use solar_transfer_planner::export::trajectory::{
    self as export_trajectory, RocketFrame, TrajectoryDocument,
};
use solar_transfer_planner::export::{self, window as export_window};
use solar_transfer_planner::transfer::setup;
use solar_transfer_planner::transfer::{
    MotionModelKind, Trajectory, WindowRequest, sample_trajectory, search_and_scan_window,
    search_window,
};

#[path = "common/session.rs"]
mod session;

/// Search a bounded horizon for the closest collision-free departure day.
#[derive(Parser, Debug)]
#[command(author, version, about = "Transfer window search (static or dynamic motion)")]
struct Cli {
    /// Departure planet name (case-insensitive)
    #[arg(long)]
    from: String,

    /// Destination planet name (case-insensitive)
    #[arg(long)]
    to: String,

    /// Motion model (defaults to the scenario's, else static)
    #[arg(long, value_enum)]
    model: Option<ModelArg>,

    /// First candidate day (offset from the epoch)
    #[arg(long)]
    start: Option<f64>,

    /// Longest wait after the start day (defaults to the search horizon)
    #[arg(long)]
    max_wait: Option<f64>,

    /// Spacing between candidate days
    #[arg(long)]
    step: Option<f64>,

    /// Write every evaluated candidate to this CSV file ('-' for stdout)
    #[arg(long)]
    scan_csv: Option<PathBuf>,

    /// Write the sampled trajectory of the winning departure to this JSON file
    #[arg(long)]
    trajectory_json: Option<PathBuf>,

    #[command(flatten)]
    session: session::SessionArgs,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum ModelArg {
    Static,
    Dynamic,
}

impl From<ModelArg> for MotionModelKind {
    fn from(value: ModelArg) -> Self {
        match value {
            ModelArg::Static => MotionModelKind::Static,
            ModelArg::Dynamic => MotionModelKind::Dynamic,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    session::init_tracing(cli.session.verbose);
    let session = session::load(&cli.session)?;
    let acceleration = session.acceleration_m_s2();

    let (scenario_kind, scenario_request) =
        setup::search_from_config(&session.scenario.search, session.constants())?;
    let kind = cli.model.map(MotionModelKind::from).unwrap_or(scenario_kind);
    let request = WindowRequest {
        start_day: cli.start.unwrap_or(scenario_request.start_day),
        max_wait_days: cli.max_wait.unwrap_or(scenario_request.max_wait_days),
        step_days: cli.step.unwrap_or(scenario_request.step_days),
    };

    let (window, scan) = if cli.scan_csv.is_some() {
        let (window, scan) = search_and_scan_window(
            kind,
            &cli.from,
            &cli.to,
            &session.catalog,
            acceleration,
            &request,
        )?;
        (window, Some(scan))
    } else {
        let window = search_window(
            kind,
            &cli.from,
            &cli.to,
            &session.catalog,
            acceleration,
            &request,
        )?;
        (window, None)
    };

    println!("=== Transfer Window: {} -> {} ===", cli.from, cli.to);
    println!("Motion model   : {}", window.model);
    println!(
        "Search span    : day {:.1} to day {:.1} (step {} days)",
        window.start_day, window.end_day, window.step_days
    );
    println!(
        "Candidates     : {} evaluated, {} rejected for collision",
        window.evaluated, window.rejected
    );

    if let (Some(path), Some(scan)) = (&cli.scan_csv, &scan) {
        let winner = window.best().map(|(day, _)| day);
        let model = kind.to_string();
        let constants = session.constants();
        let records: Vec<_> = scan
            .iter()
            .map(|candidate| export_window::ScanRecord {
                day: candidate.day,
                closeness_m: candidate.closeness_m,
                closeness_au: constants.m_to_au(candidate.closeness_m),
                collision: candidate.collision,
                selected: winner == Some(candidate.day),
                model: &model,
                origin_body: &cli.from,
                dest_body: &cli.to,
            })
            .collect();
        let writer = export::writer_for_path(path)
            .with_context(|| format!("creating {}", path.display()))?;
        export_window::write_scan_csv(writer, &records)?;
    }

    let Some((departure_day, plan)) = window.best() else {
        println!("No transfer window found: every candidate collides with an intervening body.");
        return Ok(());
    };

    let arrival_day = departure_day + plan.total_days(session.constants());
    println!("Best departure : day {departure_day:.1}");
    println!("Arrival        : day {arrival_day:.1}");
    println!(
        "Separation     : {:.4} AU",
        session.constants().m_to_au(plan.separation_m)
    );
    session::print_flight_plan(plan);

    if let Some(path) = &cli.trajectory_json {
        let trajectory = sample_trajectory(
            &cli.from,
            &cli.to,
            &session.catalog,
            acceleration,
            departure_day,
        )?;
        export_trajectory::write_json(path, &document_for(&trajectory))
            .with_context(|| format!("writing {}", path.display()))?;
        println!(
            "Trajectory     : {} samples written to {}",
            trajectory.len(),
            path.display()
        );
    }

    Ok(())
}

fn document_for(trajectory: &Trajectory) -> TrajectoryDocument {
    let mut document = TrajectoryDocument::new(
        &trajectory.departure,
        &trajectory.arrival,
        trajectory.departure_day,
        trajectory.arrival_day,
        trajectory.plan.total_time_s,
    );
    document.rocket = trajectory
        .rocket()
        .iter()
        .map(|sample| RocketFrame {
            day: sample.day,
            x_m: sample.position_m[0],
            y_m: sample.position_m[1],
        })
        .collect();
    document.bodies = trajectory
        .bodies()
        .map(|(name, positions)| (name.to_string(), positions.to_vec()))
        .collect();
    document
}
