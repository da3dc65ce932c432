use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn bin(name: &str) -> Command {
    let mut cmd = Command::cargo_bin(name).expect("binary built");
    cmd.current_dir(workspace_root());
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn mission_prints_escape_table_and_profile() {
    bin("mission")
        .args(["--from", "Earth", "--to", "Mars", "--day", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Planetary Escape Data"))
        .stdout(predicate::str::contains("Neptune"))
        .stdout(predicate::str::contains("Time to reach cruising velocity"))
        .stdout(predicate::str::contains("Launch on day 100.0"))
        .stdout(predicate::str::contains("Angular Positions at day 100.0"));
}

#[test]
fn mission_reads_legacy_text_files() {
    bin("mission")
        .args([
            "--from",
            "earth",
            "--to",
            "jupiter",
            "--bodies",
            "data/Planetary_Data.txt",
            "--orbits",
            "data/Solar_System_Data.txt",
            "--rocket",
            "data/Rocket_Data.txt",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total travel time"));
}

#[test]
fn unknown_body_fails() {
    bin("mission")
        .args(["--from", "Earth", "--to", "Vulcan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Vulcan").and(predicate::str::contains("choose from")));
}

#[test]
fn window_finds_a_departure_and_writes_artifacts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("scan.csv");
    let json_path = dir.path().join("trajectory.json");

    bin("window")
        .args([
            "--from",
            "Earth",
            "--to",
            "Mars",
            "--model",
            "dynamic",
            "--max-wait",
            "10",
            "--scan-csv",
            csv_path.to_str().unwrap(),
            "--trajectory-json",
            json_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Motion model   : dynamic"))
        .stdout(predicate::str::contains("Best departure"));

    let csv = fs::read_to_string(&csv_path).expect("scan csv");
    assert_eq!(csv.lines().count(), 12, "header plus 11 candidates");
    assert!(csv.starts_with("day,closeness_m"));
    assert_eq!(csv.matches(",true,dynamic,").count(), 1, "exactly one selected row");

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).expect("json")).expect("parse");
    assert_eq!(json["origin"], "Earth");
    assert!(json["rocket"].as_array().unwrap().len() >= 100);
}

#[test]
fn window_reports_when_every_candidate_collides() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bodies = dir.path().join("bodies.yaml");
    let orbits = dir.path().join("orbits.yaml");
    fs::write(
        &bodies,
        "- name: Earth\n  radius_km: 6371.0\n  mass_kg: 5.972e24\n\
         - name: Mars\n  radius_km: 3389.5\n  mass_earths: 0.107\n\
         - name: Block\n  radius_km: 1000000.0\n  escape_velocity_m_s: 1000.0\n",
    )
    .unwrap();
    fs::write(
        &orbits,
        "- name: Earth\n  period_days: 365.0\n  orbital_radius_au: 1.0\n\
         - name: Mars\n  period_days: 687.0\n  orbital_radius_au: 1.524\n\
         - name: Block\n  period_days: 365.0\n  orbital_radius_au: 1.2\n",
    )
    .unwrap();

    bin("window")
        .args([
            "--from",
            "Earth",
            "--to",
            "Mars",
            "--max-wait",
            "0",
            "--bodies",
            bodies.to_str().unwrap(),
            "--orbits",
            orbits.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 evaluated, 1 rejected"))
        .stdout(predicate::str::contains("No transfer window found"));
}

#[test]
fn window_rejects_a_zero_step() {
    bin("window")
        .args(["--from", "Earth", "--to", "Mars", "--step", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("step"));
}
