use solar_transfer_planner::common::{DomainError, PhysicalConstants};
use solar_transfer_planner::propulsion::{
    Body, Rocket, escape_profiles, escape_velocity, plan_flight,
};
use solar_transfer_planner::transfer::{
    Catalog, Orbit, PlanningError, compute_flight_plan, compute_flight_plan_at,
};

const AU: f64 = 149_597_870_700.0;

fn earth() -> Body {
    Body::new("Earth", 6.371e6, 11_200.0).expect("earth")
}

fn mars() -> Body {
    Body::new("Mars", 3.3895e6, 5_000.0).expect("mars")
}

fn catalog() -> Catalog {
    Catalog::new(
        vec![earth(), mars()],
        vec![
            Orbit::new("Earth", 365.0, AU).unwrap(),
            Orbit::new("Mars", 687.0, 1.524 * AU).unwrap(),
        ],
        PhysicalConstants::default(),
    )
}

#[test]
fn earth_to_mars_profile_matches_hand_calculation() {
    let separation = 0.524 * AU;
    let plan = plan_flight(&earth(), &mars(), separation, 20.0).expect("plan");

    assert_eq!(plan.cruise_velocity_m_s, 11_200.0);
    assert!((plan.acceleration_time_s - 560.0).abs() < 1e-9);
    assert!((plan.acceleration_distance_m - 3_136_000.0).abs() < 1e-6);
    assert_eq!(plan.deceleration_time_s, plan.acceleration_time_s);
    assert_eq!(plan.deceleration_distance_m, plan.acceleration_distance_m);

    let cruise_distance = separation - 6.371e6 - 3.3895e6 - 2.0 * 3_136_000.0;
    assert!((plan.cruise_distance_m - cruise_distance).abs() < 1e-3);
    assert!((plan.cruise_time_s - cruise_distance / 11_200.0).abs() < 1e-6);
    assert!(
        (plan.total_time_s - (1_120.0 + cruise_distance / 11_200.0)).abs() < 1e-6,
        "total {}",
        plan.total_time_s
    );

    let days = plan.total_days(&PhysicalConstants::default());
    assert!((days - 81.0).abs() < 0.01, "expected about 81 days, got {days}");
    assert!(!plan.is_short_hop());
}

#[test]
fn short_hop_never_cruises() {
    let plan = plan_flight(&earth(), &mars(), 1.0e6, 20.0).expect("plan");
    assert_eq!(plan.cruise_distance_m, 0.0);
    assert_eq!(plan.cruise_time_s, 0.0);
    assert_eq!(plan.total_time_s, 2.0 * 11_200.0 / 20.0);
    assert!(plan.is_short_hop());

    // exactly consumed by radii and both acceleration legs
    let exact = 6.371e6 + 3.3895e6 + 2.0 * 3_136_000.0;
    let plan = plan_flight(&earth(), &mars(), exact, 20.0).expect("plan");
    assert!(plan.cruise_distance_m >= 0.0);
    assert!(plan.cruise_time_s < 1e-6);
}

#[test]
fn cruise_is_never_negative() {
    for separation in [0.0, 1.0, 5.0e6, 1.5e7, 1.0e9, 0.524 * AU, 30.0 * AU] {
        for acceleration in [0.5, 9.81, 20.0, 1_000.0] {
            let plan = plan_flight(&earth(), &mars(), separation, acceleration).unwrap();
            assert!(plan.cruise_distance_m >= 0.0, "separation {separation}");
            assert!(plan.cruise_time_s >= 0.0, "separation {separation}");
            assert!(
                plan.total_time_s >= 2.0 * plan.acceleration_time_s,
                "separation {separation}"
            );
        }
    }
}

#[test]
fn cruise_velocity_is_the_larger_escape_velocity() {
    let outbound = plan_flight(&mars(), &earth(), 0.524 * AU, 20.0).unwrap();
    let inbound = plan_flight(&earth(), &mars(), 0.524 * AU, 20.0).unwrap();
    assert_eq!(outbound.cruise_velocity_m_s, 11_200.0);
    assert_eq!(outbound.total_time_s, inbound.total_time_s);
}

#[test]
fn invalid_inputs_are_domain_errors() {
    assert_eq!(
        plan_flight(&earth(), &mars(), AU, 0.0),
        Err(DomainError::NonPositiveAcceleration(0.0))
    );
    assert!(matches!(
        plan_flight(&earth(), &mars(), AU, -3.0),
        Err(DomainError::NonPositiveAcceleration(_))
    ));
    assert!(matches!(
        plan_flight(&earth(), &mars(), f64::NAN, 20.0),
        Err(DomainError::NonFiniteValue { .. })
    ));
    assert!(matches!(
        Body::new("Flat", 0.0, 100.0),
        Err(DomainError::NonPositiveRadius { .. })
    ));
    assert!(matches!(
        Body::new("Still", 1.0e6, 0.0),
        Err(DomainError::NonPositiveEscapeVelocity { .. })
    ));
    assert!(matches!(
        Body::from_mass("Ghost", 1.0e6, 0.0, &PhysicalConstants::default()),
        Err(DomainError::NonPositiveMass { .. })
    ));
}

#[test]
fn escape_velocity_from_mass() {
    let constants = PhysicalConstants::default();
    let body = Body::from_mass("Earth", 6.371e6, 5.972e24, &constants).unwrap();
    let expected = escape_velocity(5.972e24, 6.371e6, constants.gravitational_constant);
    assert_eq!(body.escape_velocity_m_s, expected);
    assert!(
        (body.escape_velocity_m_s - 11_180.0).abs() < 20.0,
        "earth escape velocity {}",
        body.escape_velocity_m_s
    );
}

#[test]
fn escape_profiles_are_sorted_by_name() {
    let bodies = [mars(), earth()];
    let profiles = escape_profiles(&bodies, 20.0).unwrap();
    let names: Vec<_> = profiles.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Earth", "Mars"]);
    assert!((profiles[0].time_s - 560.0).abs() < 1e-9);
    assert!((profiles[1].time_s - 250.0).abs() < 1e-9);
    assert!((profiles[1].distance_m - 0.5 * 20.0 * 250.0 * 250.0).abs() < 1e-6);
    assert!(escape_profiles(&bodies, 0.0).is_err());
}

#[test]
fn rocket_acceleration_sums_engines() {
    let rocket = Rocket {
        engine_count: 4,
        acceleration_per_engine_m_s2: 10.0,
    };
    assert_eq!(rocket.acceleration_m_s2(), 40.0);
}

#[test]
fn catalog_plans_use_radial_gap_or_launch_separation() {
    let catalog = catalog();
    let fixed = compute_flight_plan("Earth", "Mars", &catalog, 20.0).expect("fixed plan");
    assert!((fixed.separation_m - 0.524 * AU).abs() < 1.0);

    // half a year later the planets are far apart
    let launch = compute_flight_plan_at("earth", "MARS", &catalog, 20.0, 182.5).expect("plan");
    assert!(launch.separation_m > fixed.separation_m);
    assert!(launch.total_time_s > fixed.total_time_s);
    assert_eq!(launch.departure, "Earth");
    assert_eq!(launch.arrival, "Mars");
}

#[test]
fn unknown_bodies_are_reported() {
    let catalog = catalog();
    let err = compute_flight_plan("Earth", "Vulcan", &catalog, 20.0).unwrap_err();
    assert!(
        matches!(&err, PlanningError::UnknownBody { name, .. } if name == "Vulcan"),
        "unexpected error: {err:?}"
    );
    let message = err.to_string();
    assert!(
        message.contains("Vulcan") && message.contains("choose from: Earth, Mars"),
        "message should list the catalog bodies: {message}"
    );
    assert!(matches!(
        compute_flight_plan("Earth", "Mars", &catalog, 0.0),
        Err(PlanningError::Domain(DomainError::NonPositiveAcceleration(_)))
    ));
}

#[test]
fn same_body_leg_is_pure_acceleration_and_deceleration() {
    let catalog = catalog();
    let plan = compute_flight_plan("Earth", "Earth", &catalog, 20.0).expect("plan");
    assert_eq!(plan.separation_m, 0.0);
    assert_eq!(plan.cruise_distance_m, 0.0);
    assert_eq!(plan.cruise_time_s, 0.0);
    assert_eq!(plan.total_time_s, 2.0 * 11_200.0 / 20.0);

    let launch = compute_flight_plan_at("earth", "EARTH", &catalog, 20.0, 123.0).expect("plan");
    assert!(launch.separation_m.abs() < 1e-3, "sep {}", launch.separation_m);
    assert_eq!(launch.total_time_s, plan.total_time_s);
}
