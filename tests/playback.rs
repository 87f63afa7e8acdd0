use gravity_simulator::playback::{Playhead, frame_at, frame_count};
use gravity_simulator::sim::{Body, BodySet, SimulationConfig, TrajectorySet, run};

fn drifting_body_run() -> TrajectorySet {
    let bodies = BodySet::new(vec![Body::new("probe", 1.0, [0.0, 0.0], [1.0, 0.0])]);
    let config = SimulationConfig {
        time_step: 0.5,
        duration: 2.0,
        ..SimulationConfig::default()
    };
    run(bodies, config).unwrap()
}

#[test]
fn frame_zero_is_the_initial_state() {
    let tracks = drifting_body_run();
    let frame = frame_at(&tracks, 0.0);

    assert_eq!(frame.index, 0);
    assert_eq!(frame.time, 0.0);
    assert_eq!(frame.positions, vec![[0.0, 0.0]]);
}

#[test]
fn elapsed_time_maps_to_the_floor_step() {
    let tracks = drifting_body_run();

    // 0.6 s into a 0.5 s grid lands on frame 1, the sample from step 0.
    let frame = frame_at(&tracks, 0.6);
    assert_eq!(frame.index, 1);
    assert_eq!(frame.time, 0.5);
    assert!((frame.positions[0][0] - 0.5).abs() < 1e-12);
}

#[test]
fn out_of_range_times_clamp_to_the_recorded_ends() {
    let tracks = drifting_body_run();
    assert_eq!(frame_count(&tracks), 5);

    let early = frame_at(&tracks, -3.0);
    assert_eq!(early.index, 0);

    let late = frame_at(&tracks, 1.0e9);
    assert_eq!(late.index, 4);
    assert!((late.positions[0][0] - 2.0).abs() < 1e-12);
}

#[test]
fn playhead_ignores_advances_while_paused() {
    let tracks = drifting_body_run();
    let mut playhead = Playhead::new();

    playhead.advance(0.6);
    assert_eq!(playhead.frame(&tracks).index, 1);

    playhead.pause();
    playhead.advance(10.0);
    assert!(playhead.is_paused());
    assert_eq!(playhead.frame(&tracks).index, 1);

    playhead.resume();
    playhead.advance(0.5);
    assert!((playhead.elapsed() - 1.1).abs() < 1e-12);
    assert_eq!(playhead.frame(&tracks).index, 2);
}

#[test]
fn playhead_reset_rewinds_to_the_initial_frame() {
    let tracks = drifting_body_run();
    let mut playhead = Playhead::new();

    playhead.advance(2.0);
    playhead.reset();
    assert_eq!(playhead.frame(&tracks).index, 0);
}
