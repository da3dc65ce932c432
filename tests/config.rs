use std::fs;
use std::path::PathBuf;

use solar_transfer_planner::common::PhysicalConstants;
use solar_transfer_planner::config::legacy::{Mass, parse_body_line, parse_mass, parse_rocket};
use solar_transfer_planner::config::{
    ConfigError, load_bodies, load_orbits, load_rocket, load_scenario,
};
use solar_transfer_planner::transfer::MotionModelKind;
use solar_transfer_planner::transfer::setup::{self, SetupError};

fn repo_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

#[test]
fn bundled_catalogs_load_and_build() {
    let bodies = load_bodies(repo_path("configs/bodies.yaml")).expect("bodies yaml");
    let orbits = load_orbits(repo_path("configs/orbits.yaml")).expect("orbits yaml");
    assert_eq!(bodies.len(), 8);
    assert_eq!(orbits.len(), 8);

    let catalog = setup::catalog_from_config(&bodies, &orbits, PhysicalConstants::default())
        .expect("catalog");
    let earth = catalog.body("Earth").unwrap();
    assert!((earth.radius_m - 6.371e6).abs() < 1e-6);
    assert!(
        earth.escape_velocity_m_s > 11_000.0 && earth.escape_velocity_m_s < 11_300.0,
        "earth escape velocity {}",
        earth.escape_velocity_m_s
    );
    let mars = catalog.orbit("mars").unwrap();
    assert!((mars.radius_m - 1.52 * 149_597_870_700.0).abs() < 1.0);

    let rocket = load_rocket(repo_path("configs/rocket.toml")).expect("rocket toml");
    assert_eq!(setup::rocket_from_config(&rocket).acceleration_m_s2(), 40.0);
}

#[test]
fn legacy_text_files_match_structured_catalogs() {
    let legacy = load_bodies(repo_path("data/Planetary_Data.txt")).expect("legacy bodies");
    let structured = load_bodies(repo_path("configs/bodies.yaml")).unwrap();
    assert_eq!(legacy.len(), structured.len());
    for (a, b) in legacy.iter().zip(&structured) {
        assert_eq!(a.name, b.name);
        assert!(
            (a.radius_km - b.radius_km).abs() < 1e-9,
            "{}: {} vs {}",
            a.name,
            a.radius_km,
            b.radius_km
        );
    }

    let orbits = load_orbits(repo_path("data/Solar_System_Data.txt")).expect("legacy orbits");
    assert_eq!(orbits[2].name, "Earth");
    assert_eq!(orbits[2].period_days, 365.0);
    assert_eq!(orbits[2].orbital_radius_au, 1.0);

    let rocket = load_rocket(repo_path("data/Rocket_Data.txt")).expect("legacy rocket");
    assert_eq!(rocket.engine_count, 4);
    assert_eq!(rocket.acceleration_per_engine_m_s2, 10.0);
}

#[test]
fn mass_notations() {
    match parse_mass("5.972 * 10^24 kg") {
        Ok(Mass::Kilograms(kg)) => assert!((kg / 5.972e24 - 1.0).abs() < 1e-12, "{kg}"),
        other => panic!("expected kilograms, got {other:?}"),
    }
    assert_eq!(parse_mass("1.2e22 kg"), Ok(Mass::Kilograms(1.2e22)));
    assert_eq!(parse_mass("0.107 Earths"), Ok(Mass::EarthMasses(0.107)));
    assert!(parse_mass("heavy").is_err());
}

#[test]
fn body_line_halves_the_diameter() {
    let body = parse_body_line("Mars: diameter = 6779 km, mass = 0.107 Earths").unwrap();
    assert_eq!(body.name, "Mars");
    assert_eq!(body.radius_km, 3_389.5);
    assert_eq!(body.mass_earths, Some(0.107));
    assert_eq!(body.mass_kg, None);

    assert!(parse_body_line("Mars diameter 6779 km").is_err());
    assert!(parse_body_line("Mars: diameter = 6779 km").is_err());
}

#[test]
fn malformed_legacy_rocket_reports_the_line() {
    assert!(parse_rocket("Number of rocket engines: 2\nAcceleration per engine: 9.5 m/s^2").is_ok());
    let err = parse_rocket("Number of rocket engines: two\n").unwrap_err();
    assert_eq!(err.0, 1);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Rocket_Data.txt");
    fs::write(&path, "Number of rocket engines: 3\nAcceleration per engine: fast\n").unwrap();
    match load_rocket(&path) {
        Err(ConfigError::Legacy { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected a legacy parse error, got {other:?}"),
    }
}

#[test]
fn toml_directory_catalog() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("b_mars.toml"),
        "name = \"Mars\"\nperiod_days = 687.0\norbital_radius_au = 1.524\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("a_earth.toml"),
        "name = \"Earth\"\nperiod_days = 365.0\norbital_radius_au = 1.0\n",
    )
    .unwrap();
    fs::write(dir.path().join("notes.md"), "ignored").unwrap();

    let orbits = load_orbits(dir.path()).expect("directory catalog");
    let names: Vec<_> = orbits.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, ["Earth", "Mars"]);
}

#[test]
fn body_needs_some_way_to_escape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bodies.yaml");
    fs::write(
        &path,
        "- name: Rock\n  radius_km: 100.0\n- name: Probe\n  radius_km: 1.0\n  escape_velocity_m_s: 50.0\n",
    )
    .unwrap();
    let bodies = load_bodies(&path).unwrap();
    let constants = PhysicalConstants::default();

    assert!(matches!(
        setup::body_from_config(&bodies[0], &constants),
        Err(SetupError::MissingMass(name)) if name == "Rock"
    ));
    let probe = setup::body_from_config(&bodies[1], &constants).unwrap();
    assert_eq!(probe.escape_velocity_m_s, 50.0);
    assert_eq!(probe.radius_m, 1_000.0);
}

#[test]
fn scenario_overrides_constants_and_search() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenario.toml");
    fs::write(
        &path,
        "[constants]\nsearch_horizon_years = 2.0\n\n[search]\nmodel = \"dynamic\"\nstep_days = 0.5\n",
    )
    .unwrap();
    let scenario = load_scenario(&path).expect("scenario");
    let constants: PhysicalConstants = scenario.constants.into();
    assert_eq!(constants.search_horizon_years, 2.0);
    assert_eq!(constants.seconds_per_day, 86_400.0);

    let (kind, request) = setup::search_from_config(&scenario.search, &constants).unwrap();
    assert_eq!(kind, MotionModelKind::Dynamic);
    assert_eq!(request.start_day, 0.0);
    assert_eq!(request.step_days, 0.5);
    assert_eq!(request.max_wait_days, 730.5);

    let bundled = load_scenario(repo_path("configs/scenario.toml")).expect("bundled scenario");
    let (kind, _) = setup::search_from_config(&bundled.search, &constants).unwrap();
    assert_eq!(kind, MotionModelKind::Static);
}

#[test]
fn unknown_model_name_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenario.toml");
    fs::write(&path, "[search]\nmodel = \"ballistic\"\n").unwrap();
    let scenario = load_scenario(&path).unwrap();
    assert!(matches!(
        setup::search_from_config(&scenario.search, &PhysicalConstants::default()),
        Err(SetupError::Model(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    assert!(matches!(
        load_bodies("does/not/exist.yaml"),
        Err(ConfigError::Io(_))
    ));
}
