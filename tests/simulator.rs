use gravity_simulator::sim::{
    Body, BodySet, InvalidConfiguration, Phase, SimulationConfig, SimulationError, Simulator, run,
};
use gravity_simulator::vector;

fn three_body_set() -> BodySet {
    BodySet::new(vec![
        Body::new("Sun", 1.0e12, [0.0, 0.0], [0.0, 0.0]),
        Body::new("Ceres", 1000.0, [0.0, -5.0], [3.0, 0.0]),
        Body::new("Vesta", 1000.0, [0.0, 2.0], [-5.6, 0.0]),
    ])
}

fn three_body_config() -> SimulationConfig {
    SimulationConfig {
        time_step: 0.01,
        duration: 5.0,
        ..SimulationConfig::default()
    }
}

#[test]
fn trajectory_length_matches_truncated_step_count() {
    let tracks = run(three_body_set(), three_body_config()).unwrap();

    assert_eq!(tracks.step_count(), 500);
    for track in tracks.tracks() {
        assert_eq!(track.len(), 500);
    }
}

#[test]
fn partial_trailing_step_is_never_taken() {
    let bodies = BodySet::new(vec![Body::new("solo", 1.0, [0.0, 0.0], [1.0, 0.0])]);
    let config = SimulationConfig {
        time_step: 0.3,
        duration: 1.0,
        ..SimulationConfig::default()
    };

    let simulator = Simulator::new(bodies, config).unwrap();
    assert_eq!(simulator.total_steps(), 3);
    assert_eq!(simulator.phase(), Phase::Configured);

    let tracks = simulator.run().unwrap();
    assert_eq!(tracks.step_count(), 3);
}

#[test]
fn identical_inputs_give_bit_identical_trajectories() {
    let first = run(three_body_set(), three_body_config()).unwrap();
    let second = run(three_body_set(), three_body_config()).unwrap();

    for (a, b) in first.tracks().iter().zip(second.tracks()) {
        assert_eq!(a.len(), b.len());
        for (sa, sb) in a.samples().iter().zip(b.samples()) {
            assert_eq!(sa.position[0].to_bits(), sb.position[0].to_bits());
            assert_eq!(sa.position[1].to_bits(), sb.position[1].to_bits());
            assert_eq!(sa.velocity[0].to_bits(), sb.velocity[0].to_bits());
            assert_eq!(sa.velocity[1].to_bits(), sb.velocity[1].to_bits());
            assert_eq!(sa.acceleration[0].to_bits(), sb.acceleration[0].to_bits());
            assert_eq!(sa.acceleration[1].to_bits(), sb.acceleration[1].to_bits());
        }
    }
}

#[test]
fn total_momentum_drift_stays_bounded() {
    let bodies = three_body_set();
    let initial_momentum = bodies.iter().fold([0.0, 0.0], |acc, body| {
        vector::add(&acc, &vector::scale(&body.velocity(), body.mass()))
    });

    let tracks = run(bodies, three_body_config()).unwrap();
    let drift = vector::sub(&tracks.total_momentum(), &initial_momentum);

    // Sequential in-place updates break exact pairwise cancellation, so a
    // small drift is expected; it must stay far below the ~2.6e3 scale of
    // the initial momentum.
    assert!(vector::norm(&drift) < 1e-3, "drift = {:?}", drift);
}

#[test]
fn dominant_mass_stays_near_its_start() {
    let tracks = run(three_body_set(), three_body_config()).unwrap();
    let sun = tracks.track(0).unwrap();

    let first = sun.sample_at(0).unwrap().position;
    assert!(vector::norm(&first) < 1e-3);

    let start = sun.initial().position;
    let max_excursion = sun
        .positions()
        .map(|p| vector::norm(&vector::sub(&p, &start)))
        .fold(0.0, f64::max);
    assert!(max_excursion < 1e-3, "excursion = {}", max_excursion);
}

#[test]
fn light_bodies_follow_curved_finite_paths() {
    let tracks = run(three_body_set(), three_body_config()).unwrap();

    for track in tracks.tracks() {
        for sample in track.samples() {
            for component in [
                sample.position[0],
                sample.position[1],
                sample.velocity[0],
                sample.velocity[1],
                sample.acceleration[0],
                sample.acceleration[1],
            ] {
                assert!(component.is_finite(), "{} produced {}", track.name(), component);
            }
        }
    }

    // Three well-separated samples of each light body must not be colinear.
    for index in [1, 2] {
        let track = tracks.track(index).unwrap();
        let p0 = track.sample_at(0).unwrap().position;
        let p1 = track.sample_at(249).unwrap().position;
        let p2 = track.sample_at(499).unwrap().position;
        let turn = vector::cross(&vector::sub(&p1, &p0), &vector::sub(&p2, &p0));
        assert!(turn.abs() > 1e-3, "{} is colinear", track.name());
    }
}

#[test]
fn single_body_moves_in_a_straight_line() {
    let bodies = BodySet::new(vec![Body::new("solo", 10.0, [1.0, 2.0], [0.5, -0.25])]);
    let config = SimulationConfig {
        time_step: 0.1,
        duration: 1.0,
        ..SimulationConfig::default()
    };

    let tracks = run(bodies, config).unwrap();
    let track = tracks.track(0).unwrap();
    assert_eq!(track.len(), 10);

    for (step, sample) in track.samples().iter().enumerate() {
        let t = (step as f64 + 1.0) * 0.1;
        assert!((sample.position[0] - (1.0 + 0.5 * t)).abs() < 1e-9);
        assert!((sample.position[1] - (2.0 - 0.25 * t)).abs() < 1e-9);
        assert_eq!(sample.velocity, [0.5, -0.25]);
        assert_eq!(sample.acceleration, [0.0, 0.0]);
    }
}

#[test]
fn stationary_single_body_stays_put() {
    let bodies = BodySet::new(vec![Body::new("rock", 7.0, [-3.0, 4.0], [0.0, 0.0])]);
    let tracks = run(bodies, SimulationConfig::default()).unwrap();

    for sample in tracks.track(0).unwrap().samples() {
        assert_eq!(sample.position, [-3.0, 4.0]);
    }
}

#[test]
fn empty_body_set_runs_to_an_empty_track_list() {
    let tracks = run(BodySet::default(), SimulationConfig::default()).unwrap();

    assert_eq!(tracks.body_count(), 0);
    assert_eq!(tracks.step_count(), 500);
    assert_eq!(tracks.total_momentum(), [0.0, 0.0]);
}

#[test]
fn invalid_configurations_are_rejected_before_stepping() {
    let config_with = |f: fn(&mut SimulationConfig)| {
        let mut config = SimulationConfig::default();
        f(&mut config);
        config
    };

    let err = run(three_body_set(), config_with(|c| c.time_step = 0.0)).unwrap_err();
    assert!(matches!(
        err,
        SimulationError::InvalidConfiguration(InvalidConfiguration::TimeStep(_))
    ));

    let err = run(three_body_set(), config_with(|c| c.duration = -1.0)).unwrap_err();
    assert!(matches!(
        err,
        SimulationError::InvalidConfiguration(InvalidConfiguration::Duration(_))
    ));

    let err = run(
        three_body_set(),
        config_with(|c| c.softening_length = -0.1),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SimulationError::InvalidConfiguration(InvalidConfiguration::SofteningLength(_))
    ));

    let err = run(
        three_body_set(),
        config_with(|c| c.gravitational_constant = f64::NAN),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SimulationError::InvalidConfiguration(InvalidConfiguration::GravitationalConstant(_))
    ));
}

#[test]
fn non_positive_mass_is_rejected() {
    let bodies = BodySet::new(vec![
        Body::new("fine", 1.0, [0.0, 0.0], [0.0, 0.0]),
        Body::new("weightless", 0.0, [1.0, 0.0], [0.0, 0.0]),
    ]);

    let err = run(bodies, SimulationConfig::default()).unwrap_err();
    match err {
        SimulationError::InvalidConfiguration(InvalidConfiguration::BodyMass { name, mass }) => {
            assert_eq!(name, "weightless");
            assert_eq!(mass, 0.0);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn non_finite_initial_state_is_rejected() {
    let bodies = BodySet::new(vec![Body::new("ghost", 1.0, [f64::NAN, 0.0], [0.0, 0.0])]);

    let err = run(bodies, SimulationConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        SimulationError::InvalidConfiguration(InvalidConfiguration::BodyState { .. })
    ));
}

#[test]
fn coincident_bodies_fail_the_run_with_names_and_step() {
    let bodies = BodySet::new(vec![
        Body::new("first", 1.0, [1.0, 1.0], [0.0, 0.0]),
        Body::new("second", 1.0, [1.0, 1.0], [0.0, 0.0]),
    ]);

    let err = run(bodies, SimulationConfig::default()).unwrap_err();
    match err {
        SimulationError::DegenerateGeometry {
            subject,
            other,
            step,
        } => {
            assert_eq!(subject, "first");
            assert_eq!(other, "second");
            assert_eq!(step, 0);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn softening_turns_coincident_bodies_into_a_completed_run() {
    let bodies = BodySet::new(vec![
        Body::new("first", 1.0, [1.0, 1.0], [0.0, 0.0]),
        Body::new("second", 1.0, [1.0, 1.0], [0.0, 0.0]),
    ]);
    let config = SimulationConfig {
        softening_length: 0.05,
        ..SimulationConfig::default()
    };

    let tracks = run(bodies, config).unwrap();
    for track in tracks.tracks() {
        for sample in track.samples() {
            assert!(sample.position[0].is_finite());
            assert!(sample.position[1].is_finite());
        }
    }
}
